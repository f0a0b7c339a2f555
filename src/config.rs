//! 配置模块
//!
//! 支持从 JSON 文件加载系统配置

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::Path;

/// 服务器配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// 监听地址
    #[serde(default = "default_host")]
    pub host: String,
    /// 监听端口
    #[serde(default = "default_port")]
    pub port: u16,
    /// 工作线程数（0 表示使用 CPU 核心数）
    #[serde(default)]
    pub workers: usize,
}

/// 数据库配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite 文件路径，":memory:" 表示内存库
    #[serde(default = "default_db_path")]
    pub path: String,
}

/// 播种配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeedConfig {
    /// 参与播种的商品代码
    #[serde(default = "default_commodities")]
    pub commodities: Vec<String>,
    /// 每个商品生成的标题数
    #[serde(default = "default_headlines_per_commodity")]
    pub headlines_per_commodity: usize,
    /// 价格曲线天数
    #[serde(default = "default_price_days")]
    pub price_days: u32,
    /// 标题种子基数，第 i 个商品使用 base + i
    #[serde(default = "default_headline_seed_base")]
    pub headline_seed_base: u64,
    /// 价格种子基数，第 i 个商品使用 base + i
    #[serde(default = "default_price_seed_base")]
    pub price_seed_base: u64,
}

/// 日志配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LogConfig {
    /// 日志级别: trace, debug, info, warn, error
    #[serde(default = "default_log_level")]
    pub level: String,
}

/// 应用配置
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    /// 服务器配置
    #[serde(default)]
    pub server: ServerConfig,
    /// 数据库配置
    #[serde(default)]
    pub database: DatabaseConfig,
    /// 播种配置
    #[serde(default)]
    pub seed: SeedConfig,
    /// 日志配置
    #[serde(default)]
    pub log: LogConfig,
}

// 默认值函数
fn default_host() -> String { "0.0.0.0".to_string() }
fn default_port() -> u16 { 8000 }
fn default_db_path() -> String { "commodity_insight.db".to_string() }
fn default_commodities() -> Vec<String> {
    vec!["WTI".to_string(), "BRENT".to_string(), "NATGAS".to_string()]
}
fn default_headlines_per_commodity() -> usize { 120 }
fn default_price_days() -> u32 { 30 }
fn default_headline_seed_base() -> u64 { 40 }
fn default_price_seed_base() -> u64 { 10 }
fn default_log_level() -> String { "info".to_string() }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            workers: 0,
        }
    }
}

impl Default for DatabaseConfig {
    fn default() -> Self {
        Self {
            path: default_db_path(),
        }
    }
}

impl Default for SeedConfig {
    fn default() -> Self {
        Self {
            commodities: default_commodities(),
            headlines_per_commodity: default_headlines_per_commodity(),
            price_days: default_price_days(),
            headline_seed_base: default_headline_seed_base(),
            price_seed_base: default_price_seed_base(),
        }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl AppConfig {
    /// 从 JSON 文件加载配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)?;
        let config: AppConfig = serde_json::from_str(&content)?;
        Ok(config)
    }

    /// 加载配置
    ///
    /// 依次查找 config.json 和 config/config.json，都不存在时使用默认值；
    /// 文件存在但解析失败时返回错误。环境变量 DATABASE_PATH 覆盖数据库路径。
    /// 返回配置及其来源描述（此时日志尚未初始化，由调用方记录）
    pub fn load() -> anyhow::Result<(Self, String)> {
        let config_paths = ["config.json", "config/config.json"];

        let (mut config, source) = match config_paths.iter().find(|p| Path::new(p).exists()) {
            Some(path) => {
                let config = Self::from_file(path)
                    .with_context(|| format!("加载配置文件 {} 失败", path))?;
                (config, path.to_string())
            }
            None => (Self::default(), "默认配置".to_string()),
        };

        if let Ok(path) = env::var("DATABASE_PATH") {
            config.database.path = path;
        }
        Ok((config, source))
    }

    /// 获取服务器绑定地址
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
