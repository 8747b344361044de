//! 静态首页路由
//!
//! `/` 返回编译期嵌入的落地页，不走模板引擎。

use axum::{Router, response::Html, routing::get};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new().route("/", get(index))
}

/// GET / - 落地页 (HTML)
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../static/index.html"))
}
