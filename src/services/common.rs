//! 公共常量和辅助函数

use chrono::{DateTime, Duration, Utc};

/// 默认商品代码
pub const DEFAULT_COMMODITY: &str = "WTI";

/// 按指定小数位取整，恰好居中时取偶数（银行家舍入）
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    let scaled = value * factor;
    let rounded = if (scaled - scaled.trunc()).abs() == 0.5 {
        2.0 * (scaled / 2.0).round()
    } else {
        scaled.round()
    };
    rounded / factor
}

/// 规范化商品代码：缺省为 WTI，统一转大写
pub fn normalize_commodity(commodity: Option<&str>) -> String {
    commodity
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or(DEFAULT_COMMODITY)
        .to_uppercase()
}

/// 截断到整秒
pub fn truncate_to_second(ts: DateTime<Utc>) -> DateTime<Utc> {
    ts - Duration::nanoseconds(i64::from(ts.timestamp_subsec_nanos()))
}

/// 截断到整点
pub fn truncate_to_hour(ts: DateTime<Utc>) -> DateTime<Utc> {
    let ts = truncate_to_second(ts);
    ts - Duration::seconds(ts.timestamp().rem_euclid(3600))
}
