//! price_points 表读写

use chrono::{DateTime, Utc};
use rusqlite::{params, Connection};

use super::{from_epoch, to_epoch, to_epoch_ceil};
use crate::models::PricePoint;

/// 批量写入某个商品的价格点
pub fn insert_all(
    conn: &Connection,
    commodity: &str,
    points: &[PricePoint],
) -> rusqlite::Result<usize> {
    let mut stmt = conn.prepare_cached(
        "INSERT INTO price_points (commodity, timestamp, close) VALUES (?1, ?2, ?3)",
    )?;
    for p in points {
        stmt.execute(params![commodity, to_epoch(&p.timestamp), p.close])?;
    }
    Ok(points.len())
}

/// 清空价格表
pub fn delete_all(conn: &Connection) -> rusqlite::Result<usize> {
    conn.execute("DELETE FROM price_points", [])
}

/// 按时间升序返回某个商品的价格点
///
/// since 为 None 时返回全部，否则只返回 timestamp >= since 的记录
pub fn query(
    conn: &Connection,
    commodity: &str,
    since: Option<DateTime<Utc>>,
) -> rusqlite::Result<Vec<PricePoint>> {
    let since = since.as_ref().map(to_epoch_ceil);
    let mut stmt = conn.prepare_cached(
        "SELECT timestamp, close FROM price_points
         WHERE commodity = ?1 AND (?2 IS NULL OR timestamp >= ?2)
         ORDER BY timestamp ASC",
    )?;
    let rows = stmt.query_map(params![commodity, since], |row| {
        Ok(PricePoint {
            timestamp: from_epoch(0, row.get(0)?)?,
            close: row.get(1)?,
        })
    })?;
    rows.collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::Database;
    use chrono::Duration;

    #[test]
    fn test_query_is_ascending_and_scoped() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let t0 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();

        // 故意乱序写入
        let points = vec![
            PricePoint { timestamp: t0 + Duration::hours(2), close: 77.0 },
            PricePoint { timestamp: t0, close: 75.0 },
            PricePoint { timestamp: t0 + Duration::hours(1), close: 76.0 },
        ];
        insert_all(&conn, "WTI", &points).unwrap();
        insert_all(&conn, "BRENT", &[PricePoint { timestamp: t0, close: 85.0 }]).unwrap();

        let wti = query(&conn, "WTI", None).unwrap();
        let closes: Vec<f64> = wti.iter().map(|p| p.close).collect();
        assert_eq!(closes, vec![75.0, 76.0, 77.0]);

        let recent = query(&conn, "WTI", Some(t0 + Duration::hours(1))).unwrap();
        assert_eq!(recent.len(), 2);
        assert_eq!(recent[0].timestamp, t0 + Duration::hours(1));
    }

    #[test]
    fn test_duplicate_timestamp_rejected() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let t0 = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        let p = PricePoint { timestamp: t0, close: 75.0 };
        insert_all(&conn, "WTI", std::slice::from_ref(&p)).unwrap();
        assert!(insert_all(&conn, "WTI", &[p]).is_err());
    }
}
