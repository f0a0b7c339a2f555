//! SQLite 持久化层
//!
//! 两张表：headlines 和 price_points，时间统一存为 UTC 秒级时间戳。
//! 每个请求通过 [`Database::handle`] 取得连接句柄，句柄离开作用域即释放

pub mod headlines;
pub mod prices;
pub mod schema;

use chrono::{DateTime, Utc};
use parking_lot::{Mutex, MutexGuard};
use rusqlite::types::{FromSql, FromSqlError, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use rusqlite::Connection;

use crate::models::{EventType, PredictedLabel};

pub use schema::init_schema;

/// 内存数据库路径
pub const IN_MEMORY: &str = ":memory:";

/// 数据库封装
///
/// 单个连接放在互斥锁里，同一时刻只有一个请求访问存储
pub struct Database {
    conn: Mutex<Connection>,
}

impl Database {
    /// 打开（或创建）数据库并初始化表结构
    pub fn open(path: &str) -> rusqlite::Result<Self> {
        let conn = if path == IN_MEMORY {
            Connection::open_in_memory()?
        } else {
            Connection::open(path)?
        };
        init_schema(&conn)?;
        log::info!("数据库已就绪: {}", path);
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    /// 打开内存数据库（测试用）
    pub fn open_in_memory() -> rusqlite::Result<Self> {
        Self::open(IN_MEMORY)
    }

    /// 获取作用域内的连接句柄
    ///
    /// 返回的守卫在任何退出路径上 drop 时归还连接
    pub fn handle(&self) -> MutexGuard<'_, Connection> {
        self.conn.lock()
    }
}

/// 时间戳写入格式
pub(crate) fn to_epoch(ts: &DateTime<Utc>) -> i64 {
    ts.timestamp()
}

/// 查询下界的写入格式，不足一秒的部分向上取整
pub(crate) fn to_epoch_ceil(ts: &DateTime<Utc>) -> i64 {
    ts.timestamp() + i64::from(ts.timestamp_subsec_nanos() > 0)
}

/// 从秒级时间戳还原 UTC 时间
pub(crate) fn from_epoch(idx: usize, secs: i64) -> rusqlite::Result<DateTime<Utc>> {
    DateTime::from_timestamp(secs, 0).ok_or(rusqlite::Error::IntegralValueOutOfRange(idx, secs))
}

impl ToSql for EventType {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for EventType {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

impl ToSql for PredictedLabel {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

impl FromSql for PredictedLabel {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        value
            .as_str()?
            .parse()
            .map_err(|e| FromSqlError::Other(Box::new(e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_in_memory_creates_schema() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let tables: Vec<String> = conn
            .prepare("SELECT name FROM sqlite_master WHERE type = 'table' ORDER BY name")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<rusqlite::Result<_>>()
            .unwrap();
        println!("  表: {:?}", tables);
        assert!(tables.contains(&"headlines".to_string()));
        assert!(tables.contains(&"price_points".to_string()));
    }

    #[test]
    fn test_unknown_label_is_rejected() {
        let db = Database::open_in_memory().unwrap();
        let conn = db.handle();
        let result: rusqlite::Result<PredictedLabel> =
            conn.query_row("SELECT 'SIDEWAYS'", [], |row| row.get(0));
        assert!(matches!(
            result,
            Err(rusqlite::Error::FromSqlConversionFailure(..))
        ));
    }

    #[test]
    fn test_epoch_round_trip() {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(from_epoch(0, to_epoch(&ts)).unwrap(), ts);
    }

    #[test]
    fn test_epoch_ceil() {
        let ts = DateTime::from_timestamp(1_700_000_000, 0).unwrap();
        assert_eq!(to_epoch_ceil(&ts), 1_700_000_000);
        let ts = DateTime::from_timestamp(1_700_000_000, 500_000_000).unwrap();
        assert_eq!(to_epoch_ceil(&ts), 1_700_000_001);
        let ts = DateTime::from_timestamp(-2, 1).unwrap();
        assert_eq!(to_epoch_ceil(&ts), -1);
    }
}
