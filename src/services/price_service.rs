//! 价格序列查询

use chrono::{DateTime, Duration, Utc};
use rusqlite::Connection;

use crate::models::{PricePoint, PriceRange};
use crate::store::prices;

/// 查询回看窗口内的价格点
///
/// 返回 timestamp >= now - range 天（含边界）的记录，按时间升序
pub fn get_prices_for_range(
    conn: &Connection,
    commodity: &str,
    range: PriceRange,
    now: DateTime<Utc>,
) -> rusqlite::Result<Vec<PricePoint>> {
    let since = now - Duration::days(range.days());
    let points = prices::query(conn, commodity, Some(since))?;
    log::debug!("查询 {} {} 价格点 {} 个", commodity, range, points.len());
    Ok(points)
}
