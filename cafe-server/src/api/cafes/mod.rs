//! Cafe API 模块
//!
//! | 路径 | 方法 | 说明 |
//! |------|------|------|
//! | /random | GET | 随机返回一家咖啡店 |
//! | /all | GET | 全部咖啡店 (按 id 升序) |
//! | /search?loc= | GET | 按地点搜索 |
//! | /add | POST | 新增咖啡店 (form-encoded) |
//! | /update-price/{id}?new_price= | PATCH | 更新咖啡价格 |
//! | /report-closed/{id}?api_key= | DELETE | 报告关店 (需共享密钥) |

mod handler;

use axum::{
    Router,
    routing::{delete, get, patch, post},
};

use crate::core::ServerState;

pub fn router() -> Router<ServerState> {
    Router::new()
        .route("/random", get(handler::random))
        .route("/all", get(handler::all))
        .route("/search", get(handler::search))
        .route("/add", post(handler::add))
        .route("/update-price/{id}", patch(handler::update_price))
        .route("/report-closed/{id}", delete(handler::report_closed))
}
