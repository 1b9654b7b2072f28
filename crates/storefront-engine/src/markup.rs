/* crates/storefront-engine/src/markup.rs */

use storefront_core::prefetch::Listing;
use storefront_core::product::{PageQuery, Product, ProductDetail};
use storefront_core::STORE_NAME;

pub fn escape_html(s: &str) -> String {
  let mut out = String::with_capacity(s.len());
  for ch in s.chars() {
    match ch {
      '&' => out.push_str("&amp;"),
      '<' => out.push_str("&lt;"),
      '>' => out.push_str("&gt;"),
      '"' => out.push_str("&quot;"),
      '\'' => out.push_str("&#x27;"),
      c => out.push(c),
    }
  }
  out
}

/// `1000` -> `1,000`, matching the client's locale formatting.
pub fn format_price(lprice: &str) -> String {
  let value = storefront_core::parse_price(lprice);
  let digits = value.unsigned_abs().to_string();
  let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
  for (i, ch) in digits.chars().enumerate() {
    if i > 0 && (digits.len() - i) % 3 == 0 {
      grouped.push(',');
    }
    grouped.push(ch);
  }
  if value < 0 { format!("-{grouped}") } else { grouped }
}

fn page_wrapper(header_left: &str, children: &str) -> String {
  format!(
    r#"<div class="min-h-screen bg-gray-50">
  <header class="bg-white shadow-sm sticky top-0 z-40">
    <div class="max-w-md mx-auto px-4 py-4">
      <div class="flex items-center justify-between">{header_left}</div>
    </div>
  </header>
  <main class="max-w-md mx-auto px-4 py-4">{children}</main>
  <footer class="bg-white mt-8 py-4 text-center text-sm text-gray-500">© {STORE_NAME}</footer>
</div>"#
  )
}

fn product_card(item: &Product) -> String {
  format!(
    r#"<div class="bg-white rounded-lg shadow-sm overflow-hidden product-card" data-product-id="{id}">
  <div class="aspect-square bg-gray-100 overflow-hidden">
    <img src="{image}" alt="{title}" class="w-full h-full object-cover" loading="lazy">
  </div>
  <div class="p-3">
    <p class="text-xs text-gray-500 mb-1">{brand}</p>
    <h3 class="text-sm font-medium text-gray-900 line-clamp-2 mb-2">{title}</h3>
    <p class="text-lg font-bold text-gray-900">{price}원</p>
  </div>
</div>"#,
    id = escape_html(&item.product_id),
    image = escape_html(&item.image),
    title = escape_html(&item.title),
    brand = escape_html(&item.brand),
    price = format_price(&item.lprice),
  )
}

fn sort_options(selected: &str) -> String {
  [
    ("price_asc", "가격 낮은순"),
    ("price_desc", "가격 높은순"),
    ("name_asc", "이름순"),
    ("name_desc", "이름 역순"),
  ]
  .iter()
  .map(|(value, label)| {
    let flag = if *value == selected { " selected" } else { "" };
    format!(r#"<option value="{value}"{flag}>{label}</option>"#)
  })
  .collect()
}

fn search_bar(listing: &Listing, query: &PageQuery) -> String {
  let category1_buttons: String = listing
    .categories
    .keys()
    .map(|name| {
      format!(
        r#"<button class="category1-filter-btn text-sm px-3 py-2 rounded-md border" data-category1="{0}">{0}</button>"#,
        escape_html(name)
      )
    })
    .collect();

  let category2_buttons: String = if query.category1.is_empty() {
    String::new()
  } else {
    listing
      .categories
      .get(&query.category1)
      .and_then(|v| v.as_object())
      .map(|children| {
        children
          .keys()
          .map(|name| {
            format!(
              r#"<button class="category2-filter-btn text-sm px-3 py-2 rounded-md border" data-category1="{1}" data-category2="{0}">{0}</button>"#,
              escape_html(name),
              escape_html(&query.category1)
            )
          })
          .collect()
      })
      .unwrap_or_default()
  };

  format!(
    r#"<div class="bg-white rounded-lg shadow-sm p-4 mb-4">
  <input type="text" id="search-input" placeholder="상품명을 검색해보세요..." value="{search}"
         class="w-full pl-4 pr-4 py-2 border border-gray-300 rounded-md">
  <div class="space-y-2 mt-3">
    <div class="flex items-center gap-2 text-sm text-gray-600">카테고리:</div>
    <div class="flex flex-wrap gap-2">{category1_buttons}{category2_buttons}</div>
  </div>
  <div class="flex items-center justify-between mt-3">
    <select id="limit-select" class="text-sm border border-gray-300 rounded px-2 py-1">
      <option value="20"{limit20}>20개</option>
      <option value="50"{limit50}>50개</option>
      <option value="100"{limit100}>100개</option>
    </select>
    <select id="sort-select" class="text-sm border border-gray-300 rounded px-2 py-1">{sort_options}</select>
  </div>
</div>"#,
    search = escape_html(&query.search),
    limit20 = if query.limit == 20 { " selected" } else { "" },
    limit50 = if query.limit == 50 { " selected" } else { "" },
    limit100 = if query.limit == 100 { " selected" } else { "" },
    sort_options = sort_options(&query.sort),
  )
}

/// Listing markup for the home route.
pub fn home_page(listing: &Listing, query: &PageQuery) -> String {
  let has_more = listing.products.len() < listing.total_count;
  let cards: String = listing.products.iter().map(product_card).collect();
  let footer = if has_more {
    r#"<div class="text-center py-4 text-sm text-gray-500" id="scroll-sentinel">상품을 더 불러오는 중...</div>"#
  } else {
    r#"<div class="text-center py-4 text-sm text-gray-500">모든 상품을 확인했습니다</div>"#
  };

  let children = format!(
    r#"{search_bar}
<div class="mb-6">
  <div class="mb-4 text-sm text-gray-600">총 <span class="font-medium text-gray-900">{total}개</span>의 상품</div>
  <div class="grid grid-cols-2 gap-4 mb-6" id="products-grid">{cards}</div>
  {footer}
</div>"#,
    search_bar = search_bar(listing, query),
    total = listing.total_count,
  );

  let header = format!(r#"<h1 class="text-xl font-bold text-gray-900"><a href="/" data-link>{STORE_NAME}</a></h1>"#);
  page_wrapper(&header, &children)
}

fn breadcrumb(detail: &ProductDetail) -> String {
  let mut items = String::new();
  for (category, value) in
    [("category1", &detail.product.category1), ("category2", &detail.product.category2)]
  {
    if value.is_empty() {
      continue;
    }
    items.push_str(&format!(
      r#"<span class="text-gray-400">&gt;</span><button class="breadcrumb-link" data-{category}="{0}">{0}</button>"#,
      escape_html(value)
    ));
  }
  if items.is_empty() {
    return String::new();
  }
  format!(
    r#"<nav class="mb-4">
  <div class="flex items-center space-x-2 text-sm text-gray-600">
    <a href="/" data-link class="hover:text-blue-600 transition-colors">홈</a>{items}
  </div>
</nav>"#
  )
}

fn related_grid(related: &[Product]) -> String {
  if related.is_empty() {
    return String::new();
  }
  let cards: String = related
    .iter()
    .map(|item| {
      format!(
        r#"<div class="bg-gray-50 rounded-lg p-3 related-product-card cursor-pointer" data-product-id="{id}">
  <div class="aspect-square bg-white rounded-md overflow-hidden mb-2">
    <img src="{image}" alt="{title}" class="w-full h-full object-cover" loading="lazy">
  </div>
  <h3 class="text-sm font-medium text-gray-900 mb-1 line-clamp-2">{title}</h3>
  <p class="text-sm font-bold text-blue-600">{price}원</p>
</div>"#,
        id = escape_html(&item.product_id),
        image = escape_html(&item.image),
        title = escape_html(&item.title),
        price = format_price(&item.lprice),
      )
    })
    .collect();
  format!(
    r#"<div class="bg-white rounded-lg shadow-sm">
  <div class="p-4 border-b border-gray-200">
    <h2 class="text-lg font-bold text-gray-900">관련 상품</h2>
    <p class="text-sm text-gray-600">같은 카테고리의 다른 상품들</p>
  </div>
  <div class="p-4">
    <div class="grid grid-cols-2 gap-3 responsive-grid">{cards}</div>
  </div>
</div>"#
  )
}

/// Detail markup: breadcrumb, product info, quantity stepper, related grid.
pub fn detail_page(detail: &ProductDetail, related: &[Product]) -> String {
  let product = &detail.product;
  let children = format!(
    r#"{breadcrumb}
<div class="bg-white rounded-lg shadow-sm mb-6">
  <div class="p-4">
    <div class="aspect-square bg-gray-100 rounded-lg overflow-hidden mb-4">
      <img src="{image}" alt="{title}" class="w-full h-full object-cover product-detail-image">
    </div>
    <div>
      <p class="text-sm text-gray-600 mb-1">{brand}</p>
      <h1 class="text-xl font-bold text-gray-900 mb-3">{title}</h1>
      <div class="flex items-center mb-3">
        <span class="text-yellow-400">★</span>
        <span class="ml-2 text-sm text-gray-600">{rating}.0 ({review_count}개 리뷰)</span>
      </div>
      <div class="mb-4">
        <span class="text-2xl font-bold text-blue-600">{price}원</span>
      </div>
      <div class="text-sm text-gray-600 mb-4">재고 {stock}개</div>
      <div class="text-sm text-gray-700 leading-relaxed mb-6">{description}</div>
    </div>
  </div>
  <div class="border-t border-gray-200 p-4">
    <div class="flex items-center justify-between mb-4">
      <span class="text-sm font-medium text-gray-900">수량</span>
      <div class="flex items-center">
        <button id="quantity-decrease" class="w-8 h-8 flex items-center justify-center border border-gray-300 rounded-l-md bg-gray-50">-</button>
        <input type="number" id="quantity-input" value="1" min="1" max="{stock}"
               class="w-16 h-8 text-center text-sm border-t border-b border-gray-300">
        <button id="quantity-increase" class="w-8 h-8 flex items-center justify-center border border-gray-300 rounded-r-md bg-gray-50">+</button>
      </div>
    </div>
    <button id="add-to-cart-btn" data-product-id="{id}"
            class="w-full bg-blue-600 text-white py-3 px-4 rounded-md hover:bg-blue-700 transition-colors font-medium">장바구니 담기</button>
  </div>
</div>
<div class="mb-6">
  <button class="block w-full text-center bg-gray-100 text-gray-700 py-3 px-4 rounded-md hover:bg-gray-200 transition-colors go-to-product-list">상품 목록으로 돌아가기</button>
</div>
{related_grid}"#,
    breadcrumb = breadcrumb(detail),
    image = escape_html(&product.image),
    title = escape_html(&product.title),
    brand = escape_html(&product.brand),
    rating = detail.rating,
    review_count = detail.review_count,
    price = format_price(&product.lprice),
    stock = detail.stock,
    description = escape_html(&detail.description),
    id = escape_html(&product.product_id),
    related_grid = related_grid(related),
  );

  page_wrapper(DETAIL_HEADER, &children)
}

const DETAIL_HEADER: &str =
  r#"<div class="flex items-center space-x-3"><h1 class="text-lg font-bold text-gray-900">상품 상세</h1></div>"#;

/// 404-semantics view for a detail route whose product id matched nothing.
pub fn product_not_found(message: &str) -> String {
  let copy = if message.is_empty() { "요청하신 상품이 존재하지 않습니다." } else { message };
  let children = format!(
    r#"<div class="min-h-screen bg-gray-50 flex items-center justify-center">
  <div class="text-center">
    <h1 class="text-xl font-bold text-gray-900 mb-2">상품을 찾을 수 없습니다</h1>
    <p class="text-gray-600 mb-4">{}</p>
    <a href="/" data-link class="bg-gray-600 text-white px-4 py-2 rounded-md hover:bg-gray-700">홈으로</a>
  </div>
</div>"#,
    escape_html(copy)
  );
  page_wrapper(DETAIL_HEADER, &children)
}

/// Fixed markup for unmatched routes.
pub fn not_found_page() -> String {
  let children = r#"<div class="text-center py-12">
  <h1 class="text-6xl font-bold text-gray-300 mb-4">404</h1>
  <p class="text-gray-600 mb-6">페이지를 찾을 수 없습니다</p>
  <a href="/" data-link class="bg-blue-600 text-white px-4 py-2 rounded-md hover:bg-blue-700">홈으로 돌아가기</a>
</div>"#;
  let header = format!(r#"<h1 class="text-xl font-bold text-gray-900"><a href="/" data-link>{STORE_NAME}</a></h1>"#);
  page_wrapper(&header, children)
}

/// Inline fragment for the degraded render path.
pub fn error_fragment() -> String {
  r#"<div class="p-4 text-red-600">서버 렌더링 중 오류가 발생했습니다.</div>"#.to_string()
}
