//! 通用 API 响应模型
//!
//! 成功时直接返回业务数据，失败时统一使用下面的信封格式

use serde::{Deserialize, Serialize};
use chrono::Utc;

/// 统一错误响应结构
///
/// 包含：
/// - success: 固定为 false
/// - data: 固定为 null
/// - message: 错误信息
/// - timestamp: 响应时间戳（UTC）
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse<T> {
    /// 请求是否成功
    pub success: bool,
    /// 响应数据
    pub data: Option<T>,
    /// 响应消息
    pub message: String,
    /// 响应时间戳（ISO 8601 格式）
    pub timestamp: String,
}

impl<T> ApiResponse<T> {
    /// 创建错误响应
    ///
    /// # 参数
    /// - message: 错误信息
    pub fn error(message: String) -> Self {
        Self {
            success: false,
            data: None,
            message,
            timestamp: Utc::now().to_rfc3339(),
        }
    }
}
