/* crates/storefront-core/src/prefetch.rs */

use serde::Serialize;

use crate::catalog::Catalog;
use crate::category::{category_tree, CategoryTree};
use crate::filter::filter_and_sort;
use crate::fnv::fnv1a_32;
use crate::product::{PageQuery, Product, ProductDetail};

pub const RELATED_LIMIT: usize = 20;

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Pagination {
  pub page: usize,
  pub limit: usize,
  pub total: usize,
  pub total_pages: usize,
  pub has_next: bool,
  pub has_prev: bool,
}

impl Pagination {
  pub fn new(page: usize, limit: usize, total: usize) -> Self {
    let limit = limit.max(1);
    let page = page.max(1);
    Self {
      page,
      limit,
      total,
      total_pages: total.div_ceil(limit),
      has_next: page * limit < total,
      has_prev: page > 1,
    }
  }
}

/// Page-ready data for the listing route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Listing {
  pub products: Vec<Product>,
  pub categories: CategoryTree,
  pub total_count: usize,
  pub pagination: Pagination,
}

/// Filter + sort the whole catalog, then slice out the requested page.
/// `total_count` is always the filtered length, never patched up after the
/// fact. Categories come from the full catalog; facets ignore the filter.
pub fn prefetch_listing(catalog: &Catalog, query: &PageQuery) -> Listing {
  let filtered = filter_and_sort(catalog.products(), query);
  let total = filtered.len();
  let page = query.page.max(1);
  let limit = query.limit.max(1);
  let start = (page - 1) * limit;
  let products: Vec<Product> = filtered.into_iter().skip(start).take(limit).collect();

  Listing {
    products,
    categories: category_tree(catalog.products()),
    total_count: total,
    pagination: Pagination::new(page, limit, total),
  }
}

/// Exact-match detail lookup. `None` is the not-found signal; it never
/// surfaces as an error from this layer.
pub fn fetch_detail(catalog: &Catalog, product_id: &str) -> Option<ProductDetail> {
  let product = catalog.products().iter().find(|item| item.product_id == product_id)?;
  Some(augment(product.clone()))
}

/// Products sharing `category2`, cheapest first, with the current product
/// dropped after the page cut (so a full page yields up to 19 entries,
/// matching the reference behavior).
pub fn related_products(catalog: &Catalog, detail: &ProductDetail) -> Vec<Product> {
  if detail.product.category2.is_empty() {
    return Vec::new();
  }
  let query = PageQuery { category2: detail.product.category2.clone(), ..PageQuery::default() };
  let mut related: Vec<Product> =
    filter_and_sort(catalog.products(), &query).into_iter().take(RELATED_LIMIT).collect();
  related.retain(|item| item.product_id != detail.product.product_id);
  related
}

fn augment(product: Product) -> ProductDetail {
  let seed = fnv1a_32(&product.product_id);
  let description = format!(
    "{}에 대한 상세 설명입니다. {} 브랜드의 우수한 품질을 자랑하는 상품으로, 고객 만족도가 높은 제품입니다.",
    product.title, product.brand
  );
  let images = vec![
    product.image.clone(),
    product.image.replace(".jpg", "_2.jpg"),
    product.image.replace(".jpg", "_3.jpg"),
  ];
  ProductDetail {
    description,
    rating: 4 + (seed % 2),
    review_count: 50 + ((seed >> 1) % 1000),
    stock: 10 + ((seed >> 11) % 100),
    images,
    product,
  }
}
