//! headlines 表读写

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{from_epoch, to_epoch, to_epoch_ceil};
use crate::models::Headline;

const SELECT_COLUMNS: &str = "SELECT id, published_at, title, source, url, commodity, \
     sentiment_score, event_type, impact_score, pred_label, pred_confidence FROM headlines";

/// 标题过滤条件
#[derive(Debug, Clone)]
pub struct HeadlineFilter<'a> {
    pub commodity: &'a str,
    /// 只返回 published_at >= since 的记录
    pub since: Option<DateTime<Utc>>,
    /// None 表示不限数量
    pub limit: Option<usize>,
}

fn map_row(row: &Row<'_>) -> rusqlite::Result<Headline> {
    Ok(Headline {
        id: row.get(0)?,
        published_at: from_epoch(1, row.get(1)?)?,
        title: row.get(2)?,
        source: row.get(3)?,
        url: row.get(4)?,
        commodity: row.get(5)?,
        sentiment_score: row.get(6)?,
        event_type: row.get(7)?,
        impact_score: row.get(8)?,
        pred_label: row.get(9)?,
        pred_confidence: row.get(10)?,
    })
}

/// 批量写入标题
pub fn insert_all(conn: &Connection, headlines: &[Headline]) -> rusqlite::Result<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO headlines (id, published_at, title, source, url, commodity,
             sentiment_score, event_type, impact_score, pred_label, pred_confidence)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8, ?9, ?10, ?11)",
    )?;
    for h in headlines {
        stmt.execute(params![
            h.id,
            to_epoch(&h.published_at),
            h.title,
            h.source,
            h.url,
            h.commodity,
            h.sentiment_score,
            h.event_type,
            h.impact_score,
            h.pred_label,
            h.pred_confidence,
        ])?;
    }
    Ok(headlines.len())
}

/// 清空标题表
pub fn delete_all(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM headlines", [])
}

/// 按 ID 查询单条标题
pub fn find_by_id(conn: &Connection, id: &str) -> rusqlite::Result<Option<Headline>> {
    conn.query_row(&format!("{} WHERE id = ?1", SELECT_COLUMNS), [id], map_row)
        .optional()
}

/// 按商品过滤，按发布时间倒序返回
pub fn query(conn: &Connection, filter: &HeadlineFilter<'_>) -> rusqlite::Result<Vec<Headline>> {
    // SQLite 中负数 LIMIT 表示不限
    let limit = filter
        .limit
        .map(|n| i64::try_from(n).unwrap_or(i64::MAX))
        .unwrap_or(-1);
    let since = filter.since.as_ref().map(to_epoch_ceil);

    let mut stmt = conn.prepare_cached(&format!(
        "{} WHERE commodity = ?1 AND (?2 IS NULL OR published_at >= ?2)
         ORDER BY published_at DESC LIMIT ?3",
        SELECT_COLUMNS
    ))?;
    let rows = stmt.query_map(params![filter.commodity, since, limit], map_row)?;
    rows.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{EventType, PredictedLabel};
    use crate::store::Database;
    use chrono::Duration;

    fn sample(id: &str, commodity: &str, published_at: DateTime<Utc>) -> Headline {
        Headline {
            id: id.to_string(),
            published_at,
            title: format!("{} holds as Fed rate path drives macro narrative", commodity),
            source: "Reuters".to_string(),
            url: format!("https://example.com/{}/{}", commodity.to_lowercase(), id),
            commodity: commodity.to_string(),
            sentiment_score: 0.25,
            event_type: EventType::Macro,
            impact_score: 42.5,
            pred_label: PredictedLabel::Up,
            pred_confidence: 0.73,
        }
    }

    fn base_time() -> DateTime<Utc> {
        DateTime::from_timestamp(1_700_000_000, 0).unwrap()
    }

    #[test]
    fn test_insert_and_find_by_id() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let h = sample("a", "WTI", base_time());
        insert_all(&conn, std::slice::from_ref(&h)).unwrap();

        assert_eq!(find_by_id(&conn, "a").unwrap(), Some(h));
        assert_eq!(find_by_id(&conn, "missing").unwrap(), None);
    }

    #[test]
    fn test_query_orders_desc_and_filters() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let t0 = base_time();
        let rows = vec![
            sample("old", "WTI", t0),
            sample("mid", "WTI", t0 + Duration::hours(1)),
            sample("new", "WTI", t0 + Duration::hours(2)),
            sample("other", "BRENT", t0 + Duration::hours(3)),
        ];
        insert_all(&conn, &rows).unwrap();

        let all = query(
            &conn,
            &HeadlineFilter { commodity: "WTI", since: None, limit: None },
        )
        .unwrap();
        let ids: Vec<&str> = all.iter().map(|h| h.id.as_str()).collect();
        assert_eq!(ids, vec!["new", "mid", "old"]);

        let since = query(
            &conn,
            &HeadlineFilter {
                commodity: "WTI",
                since: Some(t0 + Duration::hours(1)),
                limit: None,
            },
        )
        .unwrap();
        assert_eq!(since.len(), 2);

        let limited = query(
            &conn,
            &HeadlineFilter { commodity: "WTI", since: None, limit: Some(1) },
        )
        .unwrap();
        assert_eq!(limited.len(), 1);
        assert_eq!(limited[0].id, "new");
    }

    #[test]
    fn test_since_with_fraction_excludes_earlier_second() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let t0 = base_time();
        insert_all(&conn, &[sample("a", "WTI", t0)]).unwrap();

        let half_second_later = t0 + Duration::milliseconds(500);
        let rows = query(
            &conn,
            &HeadlineFilter { commodity: "WTI", since: Some(half_second_later), limit: None },
        )
        .unwrap();
        assert!(rows.is_empty());

        let exact = query(
            &conn,
            &HeadlineFilter { commodity: "WTI", since: Some(t0), limit: None },
        )
        .unwrap();
        assert_eq!(exact.len(), 1);
    }

    #[test]
    fn test_delete_all() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        insert_all(&conn, &[sample("a", "WTI", base_time())]).unwrap();
        assert_eq!(delete_all(&conn).unwrap(), 1);
        assert_eq!(find_by_id(&conn, "a").unwrap(), None);
    }
}
