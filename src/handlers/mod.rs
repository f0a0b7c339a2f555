pub mod analytics;
pub mod headlines;
pub mod health;
pub mod kpis;
pub mod prices;
pub mod seed;

use actix_web::{web, HttpRequest};
use rusqlite::Connection;

use crate::error::{ApiError, ApiResult};
use crate::store::Database;

/// 在阻塞线程池里执行存储操作
///
/// 连接句柄只在闭包内有效，闭包结束（无论成功失败）即释放
pub async fn with_store<T, F>(db: web::Data<Database>, f: F) -> ApiResult<T>
where
    F: FnOnce(&mut Connection) -> rusqlite::Result<T> + Send + 'static,
    T: Send + 'static,
{
    let result = web::block(move || {
        let mut conn = db.handle();
        f(&mut conn)
    })
    .await?;
    Ok(result?)
}

/// 查询参数反序列化失败时返回统一的校验错误
fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req: &HttpRequest| ApiError::Validation(err.to_string()).into())
}

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.app_data(query_config())
        .configure(health::config)
        .configure(seed::config)
        .configure(headlines::config)
        .configure(prices::config)
        .configure(kpis::config)
        .configure(analytics::config);
}
