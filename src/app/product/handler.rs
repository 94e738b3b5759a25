//! 产品处理器

use axum::{
    body::Bytes,
    extract::{rejection::BytesRejection, Path, State},
    http::StatusCode,
    response::Json,
};
use std::sync::Arc;
use tracing::debug;

use super::{
    model::{NewProduct, Product, ProductPatch},
    store::ProductStore,
};
use crate::core::{error::CoreError, response::ApiResponse};

#[derive(Clone)]
pub struct AppState {
    pub store: Arc<ProductStore>,
}

impl AppState {
    pub fn new(store: ProductStore) -> Self {
        Self {
            store: Arc::new(store),
        }
    }
}

fn is_blank(body: &[u8]) -> bool {
    body.iter().all(u8::is_ascii_whitespace)
}

/// GET /api/v1/products
pub async fn get_products(State(state): State<AppState>) -> Json<ApiResponse<Vec<Product>>> {
    Json(ApiResponse::success(state.store.list().await))
}

/// GET /api/v1/products/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ApiResponse<Product>>, CoreError> {
    match state.store.get(&id).await {
        Some(product) => Ok(Json(ApiResponse::success(product))),
        None => Err(CoreError::NotFound("Product not found".to_string())),
    }
}

/// POST /api/v1/products
pub async fn add_product(
    State(state): State<AppState>,
    body: Result<Bytes, BytesRejection>,
) -> Result<(StatusCode, Json<ApiResponse<Product>>), CoreError> {
    let body = body?;
    if is_blank(&body) {
        return Err(CoreError::BadRequest("No data".to_string()));
    }

    let new: NewProduct = serde_json::from_slice(&body)?;
    let product = state.store.insert(new).await;

    Ok((StatusCode::CREATED, Json(ApiResponse::success(product))))
}

/// PUT /api/v1/products/:id
///
/// 成功时返回整个产品列表，而不是单条记录。
pub async fn update_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
    body: Result<Bytes, BytesRejection>,
) -> Result<Json<ApiResponse<Vec<Product>>>, CoreError> {
    // 先确认存在，不存在时不解析请求体
    if !state.store.contains(&id).await {
        return Err(CoreError::NotFound("No product found".to_string()));
    }
    let body = body?;

    let patch: ProductPatch = if is_blank(&body) {
        ProductPatch::default()
    } else {
        serde_json::from_slice(&body)?
    };

    match state.store.update(&id, patch).await {
        Some(products) => Ok(Json(ApiResponse::success(products))),
        None => Err(CoreError::NotFound("No product found".to_string())),
    }
}

/// DELETE /api/v1/products/:id
///
/// 无论是否命中都返回 200。
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Json<ApiResponse<()>> {
    let removed = state.store.remove(&id).await;
    if removed == 0 {
        debug!(%id, "delete matched no product");
    }
    Json(ApiResponse::message("Product removed"))
}
