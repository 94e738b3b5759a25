//! 健康检查

use axum::{extract::State, response::Json};

use super::product::handler::AppState;

/// GET /health
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "store": {
            "type": "in-memory",
            "products_count": state.store.len().await
        }
    }))
}
