//! 新闻标题查询与 24 小时指标

use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;

use super::common::round_to;
use crate::models::{Headline, Kpis};
use crate::store::headlines::{self, HeadlineFilter};

/// 高影响标题阈值
pub const HIGH_IMPACT_THRESHOLD: f64 = 70.0;
/// 指标统计窗口（小时）
pub const KPI_WINDOW_HOURS: i64 = 24;

/// 按商品查询最近的标题，发布时间倒序，最多 limit 条
pub fn get_headlines(
    conn: &Connection,
    commodity: &str,
    limit: usize,
    since: Option<DateTime<Utc>>,
) -> rusqlite::Result<Vec<Headline>> {
    let result = headlines::query(
        conn,
        &HeadlineFilter {
            commodity,
            since,
            limit: Some(limit),
        },
    )?;
    log::debug!("查询 {} 标题 {} 条 (limit={})", commodity, result.len(), limit);
    Ok(result)
}

/// 按 ID 查询单条标题
pub fn get_headline(conn: &Connection, id: &str) -> rusqlite::Result<Option<Headline>> {
    headlines::find_by_id(conn, id)
}

/// 由倒序排列的标题汇总指标
///
/// 空集合返回平均情绪 0.0、预测字段为 None
pub fn summarize(recent: &[Headline]) -> Kpis {
    let avg_sentiment_24h = if recent.is_empty() {
        0.0
    } else {
        let total: f64 = recent.iter().map(|h| h.sentiment_score).sum();
        round_to(total / recent.len() as f64, 3)
    };
    let latest = recent.first();

    Kpis {
        avg_sentiment_24h,
        high_impact_count_24h: recent
            .iter()
            .filter(|h| h.impact_score >= HIGH_IMPACT_THRESHOLD)
            .count(),
        last_prediction: latest.map(|h| h.pred_label),
        last_confidence: latest.map(|h| h.pred_confidence),
        total_headlines_24h: recent.len(),
    }
}

/// 计算最近 24 小时的指标
pub fn compute_kpis(
    conn: &Connection,
    commodity: &str,
    now: DateTime<Utc>,
) -> rusqlite::Result<Kpis> {
    let recent = headlines::query(
        conn,
        &HeadlineFilter {
            commodity,
            since: Some(now - Duration::hours(KPI_WINDOW_HOURS)),
            limit: None,
        },
    )?;
    Ok(summarize(&recent))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, PredictedLabel};
    use crate::store::Database;

    fn headline(id: &str, published_at: DateTime<Utc>, sentiment: f64, impact: f64) -> Headline {
        Headline {
            id: id.to_string(),
            published_at,
            title: "WTI jumps as OPEC guidance drives supply narrative".to_string(),
            source: "Bloomberg".to_string(),
            url: format!("https://example.com/wti/{}", id),
            commodity: "WTI".to_string(),
            sentiment_score: sentiment,
            event_type: EventType::Supply,
            impact_score: impact,
            pred_label: if sentiment > 0.0 { PredictedLabel::Up } else { PredictedLabel::Down },
            pred_confidence: 0.6,
        }
    }

    fn now() -> DateTime<Utc> {
        DateTime::from_timestamp(1_717_200_000, 0).unwrap()
    }

    #[test]
    fn test_summarize_empty() {
        let kpis = summarize(&[]);
        assert_eq!(kpis.avg_sentiment_24h, 0.0);
        assert_eq!(kpis.total_headlines_24h, 0);
        assert_eq!(kpis.high_impact_count_24h, 0);
        assert_eq!(kpis.last_prediction, None);
        assert_eq!(kpis.last_confidence, None);
    }

    #[test]
    fn test_compute_kpis_window() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let now = now();
        headlines::insert_all(
            &conn,
            &[
                headline("stale", now - Duration::hours(30), 0.9, 95.0),
                headline("a", now - Duration::hours(5), 0.4, 75.0),
                headline("b", now - Duration::hours(1), -0.1, 20.0),
            ],
        )
        .unwrap();

        let kpis = compute_kpis(&conn, "WTI", now).unwrap();
        println!("  KPI: {:?}", kpis);
        assert_eq!(kpis.total_headlines_24h, 2);
        assert_eq!(kpis.avg_sentiment_24h, 0.15);
        assert_eq!(kpis.high_impact_count_24h, 1);
        assert_eq!(kpis.last_prediction, Some(PredictedLabel::Down));
        assert_eq!(kpis.last_confidence, Some(0.6));
    }

    #[test]
    fn test_compute_kpis_unknown_commodity() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let kpis = compute_kpis(&conn, "COPPER", now()).unwrap();
        assert_eq!(kpis, summarize(&[]));
    }

    #[test]
    fn test_get_headlines_respects_limit() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let now = now();
        let rows: Vec<Headline> = (0..10)
            .map(|i| headline(&format!("h{}", i), now - Duration::hours(i), 0.1, 10.0))
            .collect();
        headlines::insert_all(&conn, &rows).unwrap();

        let result = get_headlines(&conn, "WTI", 3, None).unwrap();
        assert_eq!(result.len(), 3);
        assert!(result
            .windows(2)
            .all(|w| w[0].published_at >= w[1].published_at));
        assert_eq!(result[0].id, "h0");
    }
}
