//! 重新播种
//!
//! 先清空两张表，再为每个商品批量写入生成的标题和价格曲线

use chrono::{DateTime, Utc};
use rusqlite::Connection;

use super::generator::{generate_headlines, generate_price_curve};
use crate::config::SeedConfig;
use crate::models::SeedSummary;
use crate::store::{headlines, prices};

/// 执行全量重新播种
///
/// 第 i 个商品使用种子 `headline_seed_base + i` 和 `price_seed_base + i`
pub fn seed_database(
    conn: &mut Connection,
    config: &SeedConfig,
    now: DateTime<Utc>,
) -> rusqlite::Result<SeedSummary> {
    let tx = conn.transaction()?;
    headlines::delete_all(&tx)?;
    prices::delete_all(&tx)?;

    let mut total_headlines = 0;
    let mut total_prices = 0;
    for (idx, commodity) in config.commodities.iter().enumerate() {
        let offset = idx as u64;
        let generated = generate_headlines(
            commodity,
            config.headlines_per_commodity,
            config.headline_seed_base + offset,
            now,
        );
        let curve = generate_price_curve(
            commodity,
            config.price_days,
            config.price_seed_base + offset,
            now,
        );
        let h = headlines::insert_all(&tx, &generated)?;
        let p = prices::insert_all(&tx, commodity, &curve)?;
        log::info!("{} 播种完成: 标题 {} 条，价格点 {} 个", commodity, h, p);
        total_headlines += h;
        total_prices += p;
    }
    tx.commit()?;

    Ok(SeedSummary {
        status: "seeded".to_string(),
        commodities: config.commodities.clone(),
        headlines: total_headlines,
        price_points: total_prices,
    })
}
