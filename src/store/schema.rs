//! 表结构定义

use rusqlite::Connection;

const SCHEMA_SQL: &str = "
CREATE TABLE IF NOT EXISTS headlines (
    id TEXT PRIMARY KEY,
    published_at INTEGER NOT NULL,
    title TEXT NOT NULL,
    source TEXT NOT NULL,
    url TEXT NOT NULL,
    commodity TEXT NOT NULL,
    sentiment_score REAL NOT NULL,
    event_type TEXT NOT NULL,
    impact_score REAL NOT NULL,
    pred_label TEXT NOT NULL,
    pred_confidence REAL NOT NULL
);
CREATE INDEX IF NOT EXISTS idx_headlines_commodity ON headlines(commodity);
CREATE INDEX IF NOT EXISTS idx_headlines_published_at ON headlines(published_at);

CREATE TABLE IF NOT EXISTS price_points (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    commodity TEXT NOT NULL,
    timestamp INTEGER NOT NULL,
    close REAL NOT NULL,
    UNIQUE(commodity, timestamp)
);
CREATE INDEX IF NOT EXISTS idx_price_points_commodity ON price_points(commodity);
CREATE INDEX IF NOT EXISTS idx_price_points_timestamp ON price_points(timestamp);
";

/// 初始化表结构（幂等）
pub fn init_schema(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(SCHEMA_SQL)
}
