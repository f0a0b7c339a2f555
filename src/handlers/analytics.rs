use actix_web::{web, HttpResponse};

use super::with_store;
use crate::error::ApiResult;
use crate::models::CommodityQuery;
use crate::services::analytics_service;
use crate::services::common::normalize_commodity;
use crate::store::Database;

/// 获取情绪与后续价格变动对照
/// GET /analytics/sentiment-price?commodity=WTI
pub async fn sentiment_price(
    db: web::Data<Database>,
    query: web::Query<CommodityQuery>,
) -> ApiResult<HttpResponse> {
    let commodity = normalize_commodity(query.commodity.as_deref());
    let rows = with_store(db, move |conn| {
        analytics_service::compute_sentiment_vs_price_change(conn, &commodity)
    })
    .await?;
    Ok(HttpResponse::Ok().json(rows))
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/analytics")
            .route("/sentiment-price", web::get().to(sentiment_price))
    );
}
