//! 新闻标题接口
//!
//! - GET /headlines?commodity=WTI&limit=50&since=2024-05-01T00:00:00 - 最近标题列表
//! - GET /headlines/{id} - 单条标题

use actix_web::{web, HttpResponse};
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};

use super::with_store;
use crate::error::{ApiError, ApiResult};
use crate::models::HeadlineQuery;
use crate::services::common::normalize_commodity;
use crate::services::news_service;
use crate::store::Database;

/// 默认返回数量
pub const DEFAULT_LIMIT: i64 = 50;
/// 最大返回数量
pub const MAX_LIMIT: i64 = 300;

/// 校验 limit 参数（1..=300）
pub fn parse_limit(limit: Option<i64>) -> ApiResult<usize> {
    let limit = limit.unwrap_or(DEFAULT_LIMIT);
    if !(1..=MAX_LIMIT).contains(&limit) {
        return Err(ApiError::Validation(format!(
            "limit 必须在 1 到 {} 之间，实际为 {}",
            MAX_LIMIT, limit
        )));
    }
    usize::try_from(limit).map_err(|e| ApiError::Validation(e.to_string()))
}

/// 解析 since 参数
///
/// 支持 RFC 3339、不带时区的 ISO 时间（按 UTC 处理）和纯日期（当天 0 点）
pub fn parse_since(since: Option<&str>) -> ApiResult<Option<DateTime<Utc>>> {
    let Some(raw) = since.map(str::trim).filter(|s| !s.is_empty()) else {
        return Ok(None);
    };

    if let Ok(ts) = DateTime::parse_from_rfc3339(raw) {
        return Ok(Some(ts.with_timezone(&Utc)));
    }
    for fmt in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f", "%Y-%m-%dT%H:%M"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(raw, fmt) {
            return Ok(Some(naive.and_utc()));
        }
    }
    if let Some(naive) = NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .and_then(|d| d.and_hms_opt(0, 0, 0))
    {
        return Ok(Some(naive.and_utc()));
    }

    Err(ApiError::Validation(format!("无法解析的 since 时间: {}", raw)))
}

pub async fn list_headlines(
    db: web::Data<Database>,
    query: web::Query<HeadlineQuery>,
) -> ApiResult<HttpResponse> {
    let commodity = normalize_commodity(query.commodity.as_deref());
    let limit = parse_limit(query.limit)?;
    let since = parse_since(query.since.as_deref())?;

    let headlines = with_store(db, move |conn| {
        news_service::get_headlines(conn, &commodity, limit, since)
    })
    .await?;
    Ok(HttpResponse::Ok().json(headlines))
}

pub async fn get_headline(
    db: web::Data<Database>,
    path: web::Path<String>,
) -> ApiResult<HttpResponse> {
    let id = path.into_inner();
    let lookup = id.clone();
    match with_store(db, move |conn| news_service::get_headline(conn, &lookup)).await? {
        Some(headline) => Ok(HttpResponse::Ok().json(headline)),
        None => Err(ApiError::NotFound(format!("Headline {} not found", id))),
    }
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/headlines")
            .route("", web::get().to(list_headlines))
            .route("/{id}", web::get().to(get_headline))
    );
}
