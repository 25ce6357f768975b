//! Menu Store Port - 菜单存储
//!
//! 定义菜单存储的抽象接口，具体实现在 infrastructure/memory 层。
//! 存储以句柄形式注入各个 handler，路由层之外不得直接读写。

use thiserror::Error;

use crate::domain::menu::{MenuItem, MenuItemPayload};

/// Menu Store 错误
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Menu item not found: {0}")]
    NotFound(u64),
}

/// Menu Store Port
///
/// 管理菜单项的有序集合，顺序即插入顺序
pub trait MenuStorePort: Send + Sync {
    /// 按存储顺序返回全部菜单项
    fn list(&self) -> Vec<MenuItem>;

    /// 按 id 查找菜单项（首个匹配）
    fn find(&self, id: u64) -> Option<MenuItem>;

    /// 追加新菜单项，id 按当前长度 + 1 分配
    fn insert(&self, payload: MenuItemPayload) -> MenuItem;

    /// 按 id 覆盖菜单项字段
    fn update(&self, id: u64, payload: MenuItemPayload) -> Result<MenuItem, StoreError>;

    /// 按 id 移除菜单项并返回
    fn remove(&self, id: u64) -> Result<MenuItem, StoreError>;
}
