//! Cafe API Handlers

use axum::{
    Form, Json,
    extract::{Path, Query, State},
};
use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

use crate::core::ServerState;
use crate::db::models::{Cafe, CafeCreate};
use crate::db::repository::{RepoError, cafe};
use crate::utils::validation::{
    MAX_TEXT_LEN, MAX_URL_LEN, validate_optional_text, validate_required_text,
};
use crate::utils::{AppError, AppResult};

/// 按 id 查找失败时的统一消息 (update/delete 共用)
const CAFE_NOT_FOUND_MSG: &str = "Sorry, a cafe with that id was not found in the database.";

// ========== Response bodies ==========

#[derive(Serialize)]
pub struct CafeResponse {
    pub cafe: Cafe,
}

#[derive(Serialize)]
pub struct CafeListResponse {
    pub cafes: Vec<Cafe>,
}

#[derive(Serialize)]
pub struct SuccessResponse {
    pub success: String,
}

/// `/add` 包了一层 `response` 键，与其它成功响应形状不同
#[derive(Serialize)]
pub struct AddCafeResponse {
    pub response: SuccessResponse,
}

// ========== Handlers ==========

/// GET /random - 随机返回一家咖啡店
pub async fn random(State(state): State<ServerState>) -> AppResult<Json<CafeResponse>> {
    let cafes = cafe::find_all(&state.pool).await?;

    // 空目录不是 panic，而是 404
    let chosen = cafes
        .choose(&mut rand::thread_rng())
        .cloned()
        .ok_or_else(|| AppError::not_found("Sorry, no cafes are available."))?;

    Ok(Json(CafeResponse { cafe: chosen }))
}

/// GET /all - 全部咖啡店，按 id 升序
pub async fn all(State(state): State<ServerState>) -> AppResult<Json<CafeListResponse>> {
    let cafes = cafe::find_all(&state.pool).await?;
    Ok(Json(CafeListResponse { cafes }))
}

#[derive(Debug, Deserialize)]
pub struct SearchQuery {
    pub loc: String,
}

/// GET /search?loc=xxx - 按地点搜索 (title case 归一化)
pub async fn search(
    State(state): State<ServerState>,
    Query(query): Query<SearchQuery>,
) -> AppResult<Json<CafeListResponse>> {
    let cafes = cafe::find_by_location(&state.pool, &query.loc).await?;

    if cafes.is_empty() {
        return Err(AppError::not_found(
            "Sorry, we don't have a cafe at this location.",
        ));
    }

    Ok(Json(CafeListResponse { cafes }))
}

/// POST /add 的表单字段
///
/// 所有字段都按可选提取，必填项在 handler 里显式校验，
/// 这样缺字段返回的是文档化的 400 错误体而不是裸拒绝。
#[derive(Debug, Deserialize)]
pub struct AddCafeForm {
    pub name: Option<String>,
    pub map_url: Option<String>,
    pub img_url: Option<String>,
    pub loc: Option<String>,
    pub sockets: Option<String>,
    pub toilet: Option<String>,
    pub wifi: Option<String>,
    pub calls: Option<String>,
    pub seats: Option<String>,
    pub coffee_price: Option<String>,
}

/// POST /add - 新增咖啡店 (form-encoded)
pub async fn add(
    State(state): State<ServerState>,
    Form(form): Form<AddCafeForm>,
) -> AppResult<Json<AddCafeResponse>> {
    let name = require_field(form.name, "name")?;
    let map_url = require_field(form.map_url, "map_url")?;
    let img_url = require_field(form.img_url, "img_url")?;
    let location = require_field(form.loc, "loc")?;
    let seats = require_field(form.seats, "seats")?;

    validate_required_text(&name, "name", MAX_TEXT_LEN)?;
    validate_required_text(&map_url, "map_url", MAX_URL_LEN)?;
    validate_required_text(&img_url, "img_url", MAX_URL_LEN)?;
    validate_required_text(&location, "loc", MAX_TEXT_LEN)?;
    validate_required_text(&seats, "seats", MAX_TEXT_LEN)?;
    validate_optional_text(&form.coffee_price, "coffee_price", MAX_TEXT_LEN)?;

    let data = CafeCreate {
        name,
        map_url,
        img_url,
        location,
        seats,
        has_sockets: checkbox(&form.sockets),
        has_toilet: checkbox(&form.toilet),
        has_wifi: checkbox(&form.wifi),
        can_take_calls: checkbox(&form.calls),
        coffee_price: form.coffee_price,
    };

    let created = cafe::create(&state.pool, data).await?;
    tracing::info!(id = created.id, name = %created.name, "Cafe added");

    Ok(Json(AddCafeResponse {
        response: SuccessResponse {
            success: "Successfully added the new cafe.".to_string(),
        },
    }))
}

#[derive(Debug, Deserialize)]
pub struct UpdatePriceQuery {
    pub new_price: String,
}

/// PATCH /update-price/{id}?new_price=xxx - 更新咖啡价格
///
/// 任何字符串都是合法价格，包括空串
pub async fn update_price(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<UpdatePriceQuery>,
) -> AppResult<Json<SuccessResponse>> {
    cafe::update_coffee_price(&state.pool, id, &query.new_price)
        .await
        .map_err(|e| match e {
            RepoError::NotFound(_) => AppError::not_found(CAFE_NOT_FOUND_MSG),
            other => other.into(),
        })?;

    Ok(Json(SuccessResponse {
        success: "Successfully updated the price.".to_string(),
    }))
}

#[derive(Debug, Deserialize)]
pub struct ReportClosedQuery {
    pub api_key: Option<String>,
}

/// DELETE /report-closed/{id}?api_key=xxx - 报告关店并删除
///
/// 密钥校验先于任何数据库访问：密钥不对时既不读也不写
pub async fn report_closed(
    State(state): State<ServerState>,
    Path(id): Path<i64>,
    Query(query): Query<ReportClosedQuery>,
) -> AppResult<Json<SuccessResponse>> {
    if query.api_key.as_deref() != Some(state.config.api_key.as_str()) {
        return Err(AppError::not_authorized(
            "Sorry, that's not allowed. Make sure you have the correct api_key.",
        ));
    }

    cafe::delete(&state.pool, id).await.map_err(|e| match e {
        RepoError::NotFound(_) => AppError::not_found(CAFE_NOT_FOUND_MSG),
        other => other.into(),
    })?;

    tracing::info!(id, "Cafe reported closed and removed");

    Ok(Json(SuccessResponse {
        success: "Successfully deleted the cafe from the database.".to_string(),
    }))
}

// ========== Helpers ==========

fn require_field(value: Option<String>, field: &str) -> AppResult<String> {
    value.ok_or_else(|| AppError::validation(format!("{field} is required")))
}

/// Checkbox-style truthiness: any non-empty value counts as checked,
/// missing or empty counts as unchecked.
fn checkbox(value: &Option<String>) -> bool {
    value.as_deref().is_some_and(|v| !v.is_empty())
}
