//! 统一错误类型
//!
//! 每个变体对应一个 HTTP 状态码，错误体使用 [`ApiResponse`] 信封格式

use actix_web::{error::BlockingError, http::StatusCode, HttpResponse, ResponseError};

use crate::models::ApiResponse;

/// 请求级错误
///
/// 三类错误都直接结束当前请求，不做内部重试
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    /// 资源不存在 (404)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 查询参数格式错误或越界 (400)，在访问存储之前返回
    #[error("Validation error: {0}")]
    Validation(String),

    /// 存储不可用 (503)
    #[error("Store unavailable: {0}")]
    Unavailable(String),
}

impl From<rusqlite::Error> for ApiError {
    fn from(e: rusqlite::Error) -> Self {
        log::error!("存储访问失败: {}", e);
        ApiError::Unavailable(e.to_string())
    }
}

impl From<BlockingError> for ApiError {
    fn from(e: BlockingError) -> Self {
        log::error!("阻塞任务执行失败: {}", e);
        ApiError::Unavailable(e.to_string())
    }
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Validation(_) => StatusCode::BAD_REQUEST,
            ApiError::Unavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ApiResponse::<()>::error(self.to_string()))
    }
}

/// 处理器返回类型
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ApiError::NotFound("headline abc".into());
        assert_eq!(err.to_string(), "Not found: headline abc");
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(ApiError::NotFound("x".into()).status_code(), StatusCode::NOT_FOUND);
        assert_eq!(ApiError::Validation("x".into()).status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            ApiError::Unavailable("x".into()).status_code(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn test_sqlite_error_maps_to_unavailable() {
        let err: ApiError = rusqlite::Error::InvalidQuery.into();
        assert!(matches!(err, ApiError::Unavailable(_)));
    }
}
