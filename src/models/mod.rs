pub mod headline;
pub mod price;
pub mod analytics;
pub mod response;

pub use headline::*;
pub use price::*;
pub use analytics::*;
pub use response::*;

/// 枚举文本解析失败
///
/// 存储层和查询参数校验共用
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
#[error("未知的{kind}: {value}")]
pub struct UnknownVariant {
    pub kind: &'static str,
    pub value: String,
}

impl UnknownVariant {
    pub fn new(kind: &'static str, value: &str) -> Self {
        Self {
            kind,
            value: value.to_string(),
        }
    }
}
