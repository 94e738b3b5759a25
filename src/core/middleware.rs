//! 核心中间件模块

use axum::{extract::Request, middleware::Next, response::Response};
use std::time::Instant;
use tracing::{info, warn};

/// 请求日志中间件
pub async fn request_logging_middleware(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let uri = req.uri().clone();
    let user_agent = req
        .headers()
        .get("user-agent")
        .and_then(|h| h.to_str().ok())
        .map(|s| s.to_string());

    let response = next.run(req).await;
    let status = response.status();
    let duration_ms = start.elapsed().as_millis() as u64;

    // 4xx/5xx 提升为 warn，便于过滤
    if status.is_client_error() || status.is_server_error() {
        warn!(%method, %uri, status = status.as_u16(), duration_ms, ?user_agent, "request failed");
    } else {
        info!(%method, %uri, status = status.as_u16(), duration_ms, ?user_agent, "request handled");
    }

    response
}
