//! HTTP Routes
//!
//! API 路由定义
//!
//! API Endpoints:
//! - /api/menu        GET     列出所有菜单项
//! - /api/menu        POST    创建菜单项（校验通过后追加）
//! - /api/menu/:id    GET     获取单个菜单项
//! - /api/menu/:id    PUT     更新菜单项（校验通过后覆盖）
//! - /api/menu/:id    DELETE  删除菜单项
//! - /api/ping        GET     健康检查

use axum::{
    routing::get,
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/api", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .route(
            "/menu",
            get(handlers::list_menu_items).post(handlers::create_menu_item),
        )
        .route(
            "/menu/:id",
            get(handlers::get_menu_item)
                .put(handlers::update_menu_item)
                .delete(handlers::delete_menu_item),
        )
}
