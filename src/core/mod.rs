//! 核心层：错误处理、统一响应、中间件

pub mod error;
pub mod middleware;
pub mod response;
