//! Raw JSON body reading
//!
//! Routes read the body themselves instead of using the `Json` extractor so
//! that every failure maps onto [`ApiError`] and an empty body means `{}`.

use axum::body::Body;
use serde_json::Value;

use super::ApiError;

/// Read the whole request body and parse it as JSON
pub async fn read_json_body(body: Body) -> Result<Value, ApiError> {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .map_err(ApiError::Io)?;

    if bytes.is_empty() {
        return Ok(Value::Object(Default::default()));
    }

    serde_json::from_slice(&bytes).map_err(|_| ApiError::InvalidBody)
}
