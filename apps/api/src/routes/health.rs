use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Liveness only; never touches the AI service.
pub async fn health_handler() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}
