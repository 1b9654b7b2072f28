/* crates/storefront-core/src/filter.rs */

use std::cmp::Reverse;

use crate::product::{PageQuery, Product};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortKey {
  PriceAsc,
  PriceDesc,
  NameAsc,
  NameDesc,
}

impl SortKey {
  /// Unknown or empty keys fall back to `price_asc`.
  pub fn parse(raw: &str) -> Self {
    match raw {
      "price_desc" => Self::PriceDesc,
      "name_asc" => Self::NameAsc,
      "name_desc" => Self::NameDesc,
      _ => Self::PriceAsc,
    }
  }
}

/// Lenient integer parse: optional sign, then leading digits; trailing junk
/// is ignored. `None` when no digits at all.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
  let s = raw.trim_start();
  let (negative, digits) = match s.strip_prefix('-') {
    Some(rest) => (true, rest),
    None => (false, s.strip_prefix('+').unwrap_or(s)),
  };
  let end = digits.find(|c: char| !c.is_ascii_digit()).unwrap_or(digits.len());
  if end == 0 {
    return None;
  }
  let value: i64 = digits[..end].parse().ok()?;
  Some(if negative { -value } else { value })
}

/// Price order for `lprice` strings. A fully non-numeric price sorts as 0,
/// giving a total order.
pub fn parse_price(lprice: &str) -> i64 {
  parse_int_prefix(lprice).unwrap_or(0)
}

/// Filter by search term and categories, then sort. Works on a copy; the
/// source slice is never reordered. Sorting is stable, so `price_desc` is
/// the exact reverse ordering of `price_asc` over the same set.
pub fn filter_and_sort(products: &[Product], query: &PageQuery) -> Vec<Product> {
  let mut filtered: Vec<Product> = products.to_vec();

  if !query.search.is_empty() {
    let term = query.search.to_lowercase();
    filtered.retain(|item| {
      item.title.to_lowercase().contains(&term) || item.brand.to_lowercase().contains(&term)
    });
  }

  if !query.category1.is_empty() {
    filtered.retain(|item| item.category1 == query.category1);
  }
  if !query.category2.is_empty() {
    filtered.retain(|item| item.category2 == query.category2);
  }

  // Hangul syllables are laid out in dictionary order in Unicode, so plain
  // str ordering is the Korean collation for the name keys.
  match SortKey::parse(&query.sort) {
    SortKey::PriceAsc => filtered.sort_by_key(|item| parse_price(&item.lprice)),
    SortKey::PriceDesc => filtered.sort_by_key(|item| Reverse(parse_price(&item.lprice))),
    SortKey::NameAsc => filtered.sort_by(|a, b| a.title.cmp(&b.title)),
    SortKey::NameDesc => filtered.sort_by(|a, b| b.title.cmp(&a.title)),
  }

  filtered
}
