//! 产品资源：模型、内存存储、处理器与路由

pub mod handler;
pub mod model;
pub mod store;

use axum::{routing::get, Router};

use crate::core::error::method_not_allowed;
use handler::AppState;

/// 产品路由，挂在 `/api/v1` 下
pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/products",
            get(handler::get_products)
                .post(handler::add_product)
                .fallback(method_not_allowed),
        )
        .route(
            "/products/:id",
            get(handler::get_product)
                .put(handler::update_product)
                .delete(handler::delete_product)
                .fallback(method_not_allowed),
        )
}
