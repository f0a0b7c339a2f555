//! 价格接口
//!
//! GET /prices?commodity=WTI&range=7d

use actix_web::{web, HttpResponse};
use chrono::Utc;

use super::with_store;
use crate::error::{ApiError, ApiResult};
use crate::models::{PriceQuery, PriceRange, PriceSeries};
use crate::services::common::normalize_commodity;
use crate::services::price_service;
use crate::store::Database;

/// 解析时间范围参数，缺省为 7d
pub fn parse_range(range: Option<&str>) -> ApiResult<PriceRange> {
    match range {
        None => Ok(PriceRange::default()),
        Some(s) => s
            .parse()
            .map_err(|e| ApiError::Validation(format!("{}，可选值: 7d, 14d, 30d", e))),
    }
}

pub async fn get_prices(
    db: web::Data<Database>,
    query: web::Query<PriceQuery>,
) -> ApiResult<HttpResponse> {
    let commodity = normalize_commodity(query.commodity.as_deref());
    let range = parse_range(query.range.as_deref())?;
    let now = Utc::now();

    let symbol = commodity.clone();
    let points = with_store(db, move |conn| {
        price_service::get_prices_for_range(conn, &symbol, range, now)
    })
    .await?;
    Ok(HttpResponse::Ok().json(PriceSeries { commodity, points }))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/prices", web::get().to(get_prices));
}
