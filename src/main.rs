//! 商品资讯后端服务
//!
//! 生成虚构的商品新闻标题和小时价格曲线，存入 SQLite，
//! 并提供查询、24 小时指标和情绪价格对照的 RESTful API

mod config;     // 配置加载
mod error;      // 统一错误类型
mod handlers;   // HTTP 请求处理器
mod models;     // 数据模型定义
mod services;   // 业务逻辑服务
mod store;      // SQLite 持久化

use actix_web::{middleware::Logger, web, App, HttpServer};
use anyhow::Context;
use env_logger::Env;

use crate::config::AppConfig;
use crate::store::Database;

/// 应用程序入口
///
/// 加载配置、打开数据库并启动 HTTP 服务器
#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let (app_config, source) = AppConfig::load()?;

    // 初始化日志系统，默认级别取自配置，可被 RUST_LOG 覆盖
    env_logger::init_from_env(Env::default().default_filter_or(app_config.log.level.as_str()));
    log::info!("配置来源: {}", source);

    let database = Database::open(&app_config.database.path)
        .with_context(|| format!("打开数据库 {} 失败", app_config.database.path))?;
    let database = web::Data::new(database);
    let seed_config = web::Data::new(app_config.seed.clone());

    let bind_addr = app_config.bind_addr();
    log::info!("启动商品资讯后端服务，监听 {}", bind_addr);

    // 创建并启动 HTTP 服务器
    let mut server = HttpServer::new(move || {
        App::new()
            .wrap(Logger::default())  // 添加请求日志中间件
            .app_data(database.clone())
            .app_data(seed_config.clone())
            .configure(handlers::config)  // 配置路由
    });
    if app_config.server.workers > 0 {
        server = server.workers(app_config.server.workers);
    }

    server.bind(&bind_addr)?.run().await?;
    Ok(())
}
