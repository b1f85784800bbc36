//! JSON body helpers. Entities and collections are serialized bare;
//! acknowledgements and errors use one-key objects.

use axum::Json;
use serde_json::Value;

/// `{"message": ...}` acknowledgement body for mutations that return no entity.
pub fn message(text: &str) -> Json<Value> {
    Json(serde_json::json!({ "message": text }))
}

/// `{"error": ...}` body for non-validation failures.
pub fn error_body(message: &str) -> Value {
    serde_json::json!({ "error": message })
}
