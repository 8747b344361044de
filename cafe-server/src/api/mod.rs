//! API 路由模块
//!
//! # 结构
//!
//! - [`pages`] - 静态首页
//! - [`health`] - 健康检查
//! - [`cafes`] - 咖啡店目录接口

pub mod cafes;
pub mod health;
pub mod pages;

use axum::Router;

use crate::core::ServerState;

/// Build the Axum router (without state)
pub fn build_app() -> Router<ServerState> {
    Router::<ServerState>::new()
        .merge(pages::router())
        .merge(health::router())
        .merge(cafes::router())
}
