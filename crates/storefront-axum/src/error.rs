/* crates/storefront-axum/src/error.rs */

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use storefront_core::StoreError;

/// Newtype wrapper to implement `IntoResponse` for `StoreError`.
/// Required because Rust's orphan rule prevents `impl IntoResponse for StoreError`
/// when both types are foreign to this crate.
pub(crate) struct AxumError(pub StoreError);

impl IntoResponse for AxumError {
  fn into_response(self) -> Response {
    let err = self.0;
    let status = StatusCode::from_u16(err.status()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
    let body = serde_json::json!({ "error": err.message() });
    (status, axum::Json(body)).into_response()
  }
}

impl From<StoreError> for AxumError {
  fn from(err: StoreError) -> Self {
    Self(err)
  }
}
