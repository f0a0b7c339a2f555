//! 新闻标题数据模型
//!
//! 定义标题记录、事件类别和预测方向

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::UnknownVariant;

/// 事件类别
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum EventType {
    Geopolitics,
    Supply,
    Demand,
    Macro,
}

impl EventType {
    /// 生成器可选的全部类别
    pub const ALL: [EventType; 4] = [
        EventType::Geopolitics,
        EventType::Supply,
        EventType::Demand,
        EventType::Macro,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventType::Geopolitics => "Geopolitics",
            EventType::Supply => "Supply",
            EventType::Demand => "Demand",
            EventType::Macro => "Macro",
        }
    }
}

impl fmt::Display for EventType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EventType {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Geopolitics" => Ok(EventType::Geopolitics),
            "Supply" => Ok(EventType::Supply),
            "Demand" => Ok(EventType::Demand),
            "Macro" => Ok(EventType::Macro),
            other => Err(UnknownVariant::new("事件类别", other)),
        }
    }
}

/// 预测方向
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PredictedLabel {
    Up,
    Down,
    Neutral,
}

impl PredictedLabel {
    pub fn as_str(&self) -> &'static str {
        match self {
            PredictedLabel::Up => "UP",
            PredictedLabel::Down => "DOWN",
            PredictedLabel::Neutral => "NEUTRAL",
        }
    }
}

impl fmt::Display for PredictedLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for PredictedLabel {
    type Err = UnknownVariant;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UP" => Ok(PredictedLabel::Up),
            "DOWN" => Ok(PredictedLabel::Down),
            "NEUTRAL" => Ok(PredictedLabel::Neutral),
            other => Err(UnknownVariant::new("预测方向", other)),
        }
    }
}

/// 新闻标题
///
/// 由种子生成器批量创建，入库后不再修改，只在重新播种时整体删除
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Headline {
    /// 标题 ID（UUID 文本）
    pub id: String,
    /// 发布时间（UTC）
    pub published_at: DateTime<Utc>,
    /// 标题文本
    pub title: String,
    /// 来源
    pub source: String,
    /// 原文链接
    pub url: String,
    /// 商品代码（如 WTI）
    pub commodity: String,
    /// 情绪分数，约 [-1, 1]
    pub sentiment_score: f64,
    /// 事件类别
    pub event_type: EventType,
    /// 影响分数，约 [0, 100]
    pub impact_score: f64,
    /// 预测方向
    pub pred_label: PredictedLabel,
    /// 预测置信度，[0, 1]
    pub pred_confidence: f64,
}

/// 标题列表查询参数
#[derive(Debug, Deserialize)]
pub struct HeadlineQuery {
    /// 商品代码，默认 WTI
    pub commodity: Option<String>,
    /// 返回数量（1..=300，默认 50）
    pub limit: Option<i64>,
    /// 起始发布时间（ISO 8601）
    pub since: Option<String>,
}

/// 只带商品代码的查询参数
#[derive(Debug, Deserialize)]
pub struct CommodityQuery {
    pub commodity: Option<String>,
}
