//! Menu HTTP Handlers

use axum::{
    extract::{Path, State},
    http::StatusCode,
    Json,
};
use std::sync::Arc;

use crate::domain::menu::MenuItem;
use crate::infrastructure::http::dto::ValidMenuItem;
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::state::AppState;

/// 路径 id 按十进制整数解析
///
/// 解析失败（非数字、负数）不会匹配任何存量 id，
/// 统一落到 404 而不是参数错误
fn parse_id(raw: &str) -> Option<u64> {
    raw.parse().ok()
}

/// 列出所有菜单项
pub async fn list_menu_items(State(state): State<Arc<AppState>>) -> Json<Vec<MenuItem>> {
    Json(state.menu_store.list())
}

/// 获取单个菜单项
pub async fn get_menu_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    let item = parse_id(&id)
        .and_then(|id| state.menu_store.find(id))
        .ok_or_else(ApiError::menu_item_not_found)?;

    Ok(Json(item))
}

/// 创建菜单项
///
/// 载荷已由 `ValidMenuItem` 校验，id 由存储按当前长度 + 1 分配
pub async fn create_menu_item(
    State(state): State<Arc<AppState>>,
    ValidMenuItem(payload): ValidMenuItem,
) -> (StatusCode, Json<MenuItem>) {
    let item = state.menu_store.insert(payload);
    (StatusCode::CREATED, Json(item))
}

/// 更新菜单项
///
/// 校验先于存在性检查：非法载荷返回 400，id 不存在才返回 404
pub async fn update_menu_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
    ValidMenuItem(payload): ValidMenuItem,
) -> Result<Json<MenuItem>, ApiError> {
    let id = parse_id(&id).ok_or_else(ApiError::menu_item_not_found)?;
    let item = state.menu_store.update(id, payload)?;

    Ok(Json(item))
}

/// 删除菜单项
pub async fn delete_menu_item(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> Result<Json<MenuItem>, ApiError> {
    let id = parse_id(&id).ok_or_else(ApiError::menu_item_not_found)?;
    let item = state.menu_store.remove(id)?;

    Ok(Json(item))
}
