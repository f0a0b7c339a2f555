//! 情绪与价格变动对照分析
//!
//! 对每条标题找到发布时间之前（含）最近的价格点和之后最近的价格点，
//! 计算两者之间的涨跌幅

use rusqlite::Connection;

use super::common::round_to;
use crate::models::{Headline, PricePoint, SentimentPriceRow};
use crate::store::headlines::{self, HeadlineFilter};
use crate::store::prices;

/// 参与分析的最近标题数量
pub const ANALYTICS_HEADLINE_CAP: usize = 120;

/// 将标题与价格序列配对
///
/// `prices` 必须按时间升序。缺少前后价格点或当前价格为 0 的标题直接跳过，
/// 输出顺序与输入标题顺序一致
pub fn correlate(headlines: &[Headline], prices: &[PricePoint]) -> Vec<SentimentPriceRow> {
    headlines
        .iter()
        .filter_map(|h| {
            // 第一个 timestamp > published_at 的位置
            let idx = prices.partition_point(|p| p.timestamp <= h.published_at);
            let current = prices.get(idx.checked_sub(1)?)?;
            let next = prices.get(idx)?;
            if current.close == 0.0 || !current.close.is_finite() {
                return None;
            }
            let pct = (next.close - current.close) / current.close * 100.0;
            Some(SentimentPriceRow {
                headline_id: h.id.clone(),
                sentiment_score: h.sentiment_score,
                next_price_change: round_to(pct, 4),
                pred_label: h.pred_label,
            })
        })
        .collect()
}

/// 计算某个商品最近标题的情绪与后续价格变动
///
/// 价格序列只读取一次，再逐条二分定位
pub fn compute_sentiment_vs_price_change(
    conn: &Connection,
    commodity: &str,
) -> rusqlite::Result<Vec<SentimentPriceRow>> {
    let recent = headlines::query(
        conn,
        &HeadlineFilter {
            commodity,
            since: None,
            limit: Some(ANALYTICS_HEADLINE_CAP),
        },
    )?;
    if recent.is_empty() {
        return Ok(Vec::new());
    }
    let series = prices::query(conn, commodity, None)?;
    let rows = correlate(&recent, &series);
    log::debug!(
        "{} 情绪分析: 标题 {} 条，有效 {} 条",
        commodity,
        recent.len(),
        rows.len()
    );
    Ok(rows)
}
