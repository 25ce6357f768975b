//! Application State

use std::sync::Arc;

use crate::application::ports::MenuStorePort;

/// 应用状态
///
/// 菜单存储以端口句柄注入，handler 之外不持有存储引用
pub struct AppState {
    pub menu_store: Arc<dyn MenuStorePort>,
}

impl AppState {
    /// 创建应用状态
    pub fn new(menu_store: Arc<dyn MenuStorePort>) -> Self {
        Self { menu_store }
    }
}
