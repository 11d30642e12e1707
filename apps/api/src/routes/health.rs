use axum::Json;
use serde_json::{json, Value};

/// GET /api/health
/// Always 200; touches neither the persona file nor the completion API.
pub async fn health_handler() -> Json<Value> {
    Json(json!({
        "status": "ok",
        "message": "Interview Persona Engine is running",
        "version": env!("CARGO_PKG_VERSION")
    }))
}
