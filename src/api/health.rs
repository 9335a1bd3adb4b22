use axum::response::Json;
use serde_json::{Value, json};

/// Liveness probe for the callback server, reporting name, version and
/// status of the running binary.
pub async fn health() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "name": env!("CARGO_PKG_NAME"),
        "version": env!("CARGO_PKG_VERSION")
    }))
}
