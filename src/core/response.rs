//! 核心响应处理模块

use serde::{Deserialize, Serialize};

/// 统一响应信封: `{ success, data? , msg? }`
///
/// `data` 与 `msg` 为空时不会出现在 JSON 中，
/// 因此 404 响应里不会带 `data` 字段。
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub data: Option<T>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub msg: Option<String>,
}

impl<T> ApiResponse<T> {
    pub fn success(data: T) -> Self {
        Self {
            success: true,
            data: Some(data),
            msg: None,
        }
    }

    /// 只带消息的成功响应（例如删除）
    pub fn message(msg: impl Into<String>) -> Self {
        Self {
            success: true,
            data: None,
            msg: Some(msg.into()),
        }
    }

    pub fn failure(msg: impl Into<String>) -> Self {
        Self {
            success: false,
            data: None,
            msg: Some(msg.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_failure_omits_data() {
        let value = serde_json::to_value(ApiResponse::<()>::failure("Product not found")).unwrap();
        assert_eq!(value, json!({ "success": false, "msg": "Product not found" }));
    }

    #[test]
    fn test_success_omits_msg() {
        let value = serde_json::to_value(ApiResponse::success(vec![1, 2])).unwrap();
        assert_eq!(value, json!({ "success": true, "data": [1, 2] }));
    }
}
