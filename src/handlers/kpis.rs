use actix_web::{web, HttpResponse};
use chrono::Utc;

use super::with_store;
use crate::error::ApiResult;
use crate::models::CommodityQuery;
use crate::services::common::normalize_commodity;
use crate::services::news_service;
use crate::store::Database;

/// 获取 24 小时滚动指标
/// GET /kpis?commodity=WTI
pub async fn get_kpis(
    db: web::Data<Database>,
    query: web::Query<CommodityQuery>,
) -> ApiResult<HttpResponse> {
    let commodity = normalize_commodity(query.commodity.as_deref());
    let now = Utc::now();
    let kpis = with_store(db, move |conn| news_service::compute_kpis(conn, &commodity, now)).await?;
    Ok(HttpResponse::Ok().json(kpis))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/kpis", web::get().to(get_kpis));
}
