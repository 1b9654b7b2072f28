/* crates/storefront-core/src/lib.rs */

pub mod catalog;
pub mod category;
pub mod errors;
pub mod filter;
mod fnv;
pub mod prefetch;
pub mod product;
pub mod route;
pub mod title;

// Re-exports for ergonomic use
pub use catalog::Catalog;
pub use category::{category_tree, CategoryTree};
pub use errors::StoreError;
pub use filter::{filter_and_sort, parse_price, SortKey};
pub use prefetch::{fetch_detail, prefetch_listing, related_products, Listing, Pagination};
pub use product::{PageQuery, Product, ProductDetail};
pub use route::{match_route, Route, RouteHandler};
pub use title::{page_title, STORE_NAME};
