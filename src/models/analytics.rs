//! 统计与分析结果模型

use serde::{Deserialize, Serialize};

use super::PredictedLabel;

/// 24 小时滚动指标
///
/// 窗口内没有标题时平均情绪为 0.0，预测字段为 null
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Kpis {
    /// 平均情绪分数（保留 3 位小数）
    pub avg_sentiment_24h: f64,
    /// 高影响标题数量（impact_score >= 70）
    pub high_impact_count_24h: usize,
    /// 最新标题的预测方向
    pub last_prediction: Option<PredictedLabel>,
    /// 最新标题的预测置信度
    pub last_confidence: Option<f64>,
    /// 标题总数
    pub total_headlines_24h: usize,
}

/// 情绪与后续价格变动的对照行
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SentimentPriceRow {
    pub headline_id: String,
    pub sentiment_score: f64,
    /// 下一个价格点相对当前价格点的涨跌幅（百分比，保留 4 位小数）
    pub next_price_change: f64,
    pub pred_label: PredictedLabel,
}

/// 重新播种结果
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct SeedSummary {
    pub status: String,
    pub commodities: Vec<String>,
    pub headlines: usize,
    pub price_points: usize,
}

/// 健康检查响应
#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
}
