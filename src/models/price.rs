//! 价格数据模型

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// 小时收盘价
///
/// 所属商品由外层的 [`PriceSeries`] 或存储表中的 commodity 列给出
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PricePoint {
    /// 时间戳（整点，UTC）
    pub timestamp: DateTime<Utc>,
    /// 收盘价
    pub close: f64,
}

/// 价格序列响应
#[derive(Debug, Serialize, Deserialize)]
pub struct PriceSeries {
    pub commodity: String,
    pub points: Vec<PricePoint>,
}

/// 价格回看窗口
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceRange {
    #[default]
    SevenDays,
    FourteenDays,
    ThirtyDays,
}

impl PriceRange {
    pub fn days(&self) -> i64 {
        match self {
            PriceRange::SevenDays => 7,
            PriceRange::FourteenDays => 14,
            PriceRange::ThirtyDays => 30,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PriceRange::SevenDays => "7d",
            PriceRange::FourteenDays => "14d",
            PriceRange::ThirtyDays => "30d",
        }
    }
}

impl fmt::Display for PriceRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PriceRange {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "7d" => Ok(PriceRange::SevenDays),
            "14d" => Ok(PriceRange::FourteenDays),
            "30d" => Ok(PriceRange::ThirtyDays),
            other => Err(UnknownVariant::new("时间范围", other)),
        }
    }
}

/// 价格查询参数
#[derive(Debug, Deserialize)]
pub struct PriceQuery {
    /// 商品代码，默认 WTI
    pub commodity: Option<String>,
    /// 时间范围：7d / 14d / 30d，默认 7d
    pub range: Option<String>,
}
