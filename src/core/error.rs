//! 核心错误处理模块

use axum::{
    extract::rejection::BytesRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use tracing::error;

use super::response::ApiResponse;

/// 核心错误类型
///
/// 每个变体携带直接返回给客户端的 `msg` 文本。
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    NotFound(String),
    #[error("Method not allowed")]
    MethodNotAllowed,
    #[error("{0}")]
    PayloadTooLarge(String),
    #[error("内部错误: {0}")]
    InternalServerError(String),
}

impl CoreError {
    pub fn status(&self) -> StatusCode {
        match self {
            CoreError::BadRequest(_) => StatusCode::BAD_REQUEST,
            CoreError::NotFound(_) => StatusCode::NOT_FOUND,
            CoreError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            CoreError::PayloadTooLarge(_) => StatusCode::PAYLOAD_TOO_LARGE,
            CoreError::InternalServerError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl From<serde_json::Error> for CoreError {
    fn from(err: serde_json::Error) -> Self {
        CoreError::BadRequest(format!("Invalid JSON body: {}", err))
    }
}

/// 请求体读取失败（超出 `max_body_size` 等）
impl From<BytesRejection> for CoreError {
    fn from(rejection: BytesRejection) -> Self {
        let status = rejection.status();
        let text = rejection.body_text();
        if status == StatusCode::PAYLOAD_TOO_LARGE {
            CoreError::PayloadTooLarge(text)
        } else if status.is_client_error() {
            CoreError::BadRequest(text)
        } else {
            CoreError::InternalServerError(text)
        }
    }
}

impl IntoResponse for CoreError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = match self {
            CoreError::BadRequest(msg)
            | CoreError::NotFound(msg)
            | CoreError::PayloadTooLarge(msg) => msg,
            CoreError::MethodNotAllowed => "Method not allowed".to_string(),
            CoreError::InternalServerError(detail) => {
                error!("Internal error: {}", detail);
                "Internal server error".to_string()
            }
        };

        (status, Json(ApiResponse::<()>::failure(msg))).into_response()
    }
}

/// 未匹配路由的兜底处理器
pub async fn route_not_found() -> CoreError {
    CoreError::NotFound("Route not found".to_string())
}

/// 已知路径上未注册方法的兜底处理器
pub async fn method_not_allowed() -> CoreError {
    CoreError::MethodNotAllowed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        assert_eq!(
            CoreError::BadRequest("No data".into()).status(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            CoreError::NotFound("Product not found".into()).status(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            CoreError::MethodNotAllowed.status(),
            StatusCode::METHOD_NOT_ALLOWED
        );
        assert_eq!(
            CoreError::PayloadTooLarge("too big".into()).status(),
            StatusCode::PAYLOAD_TOO_LARGE
        );
        assert_eq!(
            CoreError::InternalServerError("boom".into()).status(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn test_json_error_becomes_bad_request() {
        let err = serde_json::from_str::<serde_json::Value>("{oops").unwrap_err();
        let core: CoreError = err.into();
        assert_eq!(core.status(), StatusCode::BAD_REQUEST);
        assert!(core.to_string().starts_with("Invalid JSON body"));
    }

    #[tokio::test]
    async fn test_internal_error_hides_detail() {
        let response = CoreError::InternalServerError("lock lost".into()).into_response();
        assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);

        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body: serde_json::Value = serde_json::from_slice(&bytes).unwrap();
        assert_eq!(body["success"], false);
        assert_eq!(body["msg"], "Internal server error");
    }
}
