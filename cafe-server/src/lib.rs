//! Cafe API Server - 咖啡店目录服务
//!
//! # 架构概述
//!
//! 一个小型 HTTP 服务，管理单张 `cafe` 表的增删改查：
//!
//! - **HTTP API** (`api`): axum 路由和处理器
//! - **数据库** (`db`): SQLite 连接池 (sqlx) + 迁移
//! - **配置** (`core::config`): 环境变量驱动
//!
//! # 模块结构
//!
//! ```text
//! cafe-server/src/
//! ├── core/          # 配置、状态、服务器
//! ├── api/           # HTTP 路由和处理器
//! ├── db/            # 数据库层 (models + repository)
//! └── utils/         # 错误、日志等工具
//! ```

pub mod api;
pub mod core;
pub mod db;
pub mod utils;

// Re-export 公共类型
pub use crate::core::{Config, Server, ServerState};
pub use crate::utils::{AppError, AppResult};

/// 设置运行环境 (dotenv + 日志)
///
/// 必须在 [`Config::from_env`] 之前调用，否则 `.env` 文件不生效
pub fn setup_environment() -> Result<(), Box<dyn std::error::Error>> {
    dotenv::dotenv().ok();

    let log_level = std::env::var("LOG_LEVEL").ok();
    let log_dir = std::env::var("LOG_DIR").ok();
    utils::logger::init_logger_with_file(log_level.as_deref(), log_dir.as_deref());

    Ok(())
}

pub fn print_banner() {
    println!(
        r#"
   ______      ____         ___    ____  ____
  / ____/___ _/ __/__      /   |  / __ \/  _/
 / /   / __ `/ /_/ _ \    / /| | / /_/ // /
/ /___/ /_/ / __/  __/   / ___ |/ ____// /
\____/\__,_/_/  \___/   /_/  |_/_/   /___/
    "#
    );
}
