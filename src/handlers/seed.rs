//! 重新播种接口
//!
//! POST /seed - 清空并重新生成全部商品的标题和价格

use actix_web::{web, HttpResponse};
use chrono::Utc;

use super::with_store;
use crate::config::SeedConfig;
use crate::error::ApiResult;
use crate::services::seed_service;
use crate::store::Database;

pub async fn seed(
    db: web::Data<Database>,
    seed_config: web::Data<SeedConfig>,
) -> ApiResult<HttpResponse> {
    let seed_config = seed_config.into_inner();
    let now = Utc::now();
    let summary = with_store(db, move |conn| {
        seed_service::seed_database(conn, &seed_config, now)
    })
    .await?;
    log::info!(
        "重新播种完成: 标题 {} 条，价格点 {} 个",
        summary.headlines,
        summary.price_points
    );
    Ok(HttpResponse::Ok().json(summary))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/seed", web::post().to(seed));
}
