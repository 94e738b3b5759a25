//! # Product API
//!
//! 基于 Axum 的产品 CRUD 服务，数据保存在进程内存中，重启即恢复示例数据。
//!
//! 分层结构：
//! - `app`：产品资源（模型、存储、处理器、路由）与健康检查
//! - `core`：统一响应信封、错误类型、请求日志中间件
//! - `infrastructure`：配置加载与日志初始化

pub mod app;
pub mod core;
pub mod infrastructure;

use axum::{extract::DefaultBodyLimit, middleware, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use app::product::{handler::AppState, store::ProductStore};
use infrastructure::config::{Config, HttpConfig};

pub use app::product::model::Product;
pub use crate::core::{error::CoreError, response::ApiResponse};

/// 根据存储配置创建初始状态
pub fn build_state(config: &Config) -> AppState {
    let store = if config.store.seed_sample_data {
        ProductStore::seeded()
    } else {
        ProductStore::new()
    };
    AppState::new(store)
}

/// 组装完整路由和中间件
pub fn build_app(state: AppState, http: &HttpConfig) -> Router {
    Router::new()
        .nest("/api/v1", app::product::routes())
        .route("/health", get(app::health::health_check))
        .fallback(crate::core::error::route_not_found)
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(
                    crate::core::middleware::request_logging_middleware,
                ))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(Duration::from_secs(http.timeout_seconds)))
                .layer(DefaultBodyLimit::max(http.max_body_size)),
        )
        .with_state(state)
}
