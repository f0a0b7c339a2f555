//! 业务逻辑服务模块
//!
//! 所有服务函数接收调用方持有的连接句柄，"当前时间"同样由调用方传入

pub mod common;            // 公共辅助函数
pub mod generator;         // 种子数据生成
pub mod news_service;      // 标题查询与指标
pub mod price_service;     // 价格序列查询
pub mod analytics_service; // 情绪价格分析
pub mod seed_service;      // 重新播种
