//! 种子数据生成器
//!
//! 用显式传入种子的 `StdRng` 生成虚构的新闻标题和小时价格曲线。
//! 同一组 (商品, 种子, 基准时间) 总是得到完全相同的序列

use chrono::{DateTime, Duration, Utc};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use uuid::Builder;

use super::common::{round_to, truncate_to_hour, truncate_to_second};
use crate::models::{EventType, Headline, PredictedLabel, PricePoint};

// ==================== 标题素材 ====================

pub const SOURCES: [&str; 6] = ["Reuters", "Bloomberg", "WSJ", "FT", "CNBC", "MarketWatch"];
pub const VERBS: [&str; 6] = ["jumps", "slides", "holds", "surges", "slumps", "stabilizes"];
pub const TOPICS: [&str; 8] = [
    "OPEC guidance",
    "shipping disruptions",
    "US inventory build",
    "refinery maintenance",
    "China demand outlook",
    "Fed rate path",
    "hurricane risk",
    "pipeline outage",
];

/// 发布时间回溯范围（分钟）：10 分钟到 10 天
const PUBLISH_WINDOW_MINUTES: (i64, i64) = (10, 60 * 24 * 10);

// ==================== 价格曲线参数 ====================

/// 价格下限
pub const PRICE_FLOOR: f64 = 20.0;
/// 每小时漂移
pub const PRICE_DRIFT: f64 = 0.015;
/// 随机冲击幅度
const SHOCK_RANGE: f64 = 0.8;
const SHOCK_SCALE: f64 = 0.2;

/// 方向判定阈值
const SIGNAL_THRESHOLD: f64 = 0.12;

fn pick<'a, T>(rng: &mut StdRng, items: &'a [T]) -> &'a T {
    &items[rng.gen_range(0..items.len())]
}

/// 启发式预测
///
/// 情绪占 0.7 权重，影响分数（以 50 为中心）占 0.3 权重，
/// 返回方向和置信度（限制在 [0.5, 0.95]，保留 3 位小数）
pub fn heuristic_prediction(sentiment: f64, impact: f64) -> (PredictedLabel, f64) {
    let raw_signal = sentiment * 0.7 + (impact / 100.0 - 0.5) * 0.3;
    let confidence = (0.55 + raw_signal.abs() * 0.8).clamp(0.5, 0.95);
    let label = if raw_signal > SIGNAL_THRESHOLD {
        PredictedLabel::Up
    } else if raw_signal < -SIGNAL_THRESHOLD {
        PredictedLabel::Down
    } else {
        PredictedLabel::Neutral
    };
    (label, round_to(confidence, 3))
}

/// 生成新闻标题
///
/// 返回结果按发布时间升序排列
pub fn generate_headlines(
    commodity: &str,
    count: usize,
    seed: u64,
    now: DateTime<Utc>,
) -> Vec<Headline> {
    let mut rng = StdRng::seed_from_u64(seed);
    let now = truncate_to_second(now);
    let mut headlines = Vec::with_capacity(count);

    for i in 0..count {
        let minutes_ago = rng.gen_range(PUBLISH_WINDOW_MINUTES.0..=PUBLISH_WINDOW_MINUTES.1);
        let published_at = now - Duration::minutes(minutes_ago);
        let event_type = *pick(&mut rng, &EventType::ALL);
        let sentiment = round_to(rng.gen_range(-0.95..=0.95), 3);
        let impact = round_to(
            (sentiment.abs() * 60.0 + rng.gen_range(0.0..=45.0)).clamp(8.0, 99.0),
            2,
        );
        let (pred_label, pred_confidence) = heuristic_prediction(sentiment, impact);
        let topic = *pick(&mut rng, &TOPICS);
        let verb = *pick(&mut rng, &VERBS);
        let source = *pick(&mut rng, &SOURCES);
        let id = Builder::from_random_bytes(rng.gen()).into_uuid();

        headlines.push(Headline {
            id: id.to_string(),
            published_at,
            title: format!(
                "{} {} as {} drives {} narrative",
                commodity,
                verb,
                topic,
                event_type.as_str().to_lowercase()
            ),
            source: source.to_string(),
            url: format!("https://example.com/{}/{}", commodity.to_lowercase(), i),
            commodity: commodity.to_string(),
            sentiment_score: sentiment,
            event_type,
            impact_score: impact,
            pred_label,
            pred_confidence,
        });
    }

    headlines.sort_by_key(|h| h.published_at);
    headlines
}

/// 起始价格
pub fn start_price(commodity: &str) -> f64 {
    if commodity == "WTI" {
        75.0
    } else {
        85.0
    }
}

/// 生成小时价格曲线
///
/// 共 `days * 24` 个点，最后一个点在基准整点前一小时。
/// 持续随机游走：上一价格 + 漂移 + 有界冲击，并以 [`PRICE_FLOOR`] 为下限
pub fn generate_price_curve(
    commodity: &str,
    days: u32,
    seed: u64,
    now: DateTime<Utc>,
) -> Vec<PricePoint> {
    let mut rng = StdRng::seed_from_u64(seed);
    let anchor = truncate_to_hour(now);
    let total_points = i64::from(days) * 24;
    let mut current = start_price(commodity);
    let mut points = Vec::with_capacity(usize::try_from(total_points).unwrap_or(0));

    for i in 0..total_points {
        let timestamp = anchor - Duration::hours(total_points - i);
        let shock = rng.gen_range(-SHOCK_RANGE..=SHOCK_RANGE);
        current = (current + PRICE_DRIFT + shock * SHOCK_SCALE).max(PRICE_FLOOR);
        points.push(PricePoint {
            timestamp,
            close: round_to(current, 2),
        });
    }
    points
}
