//! Carte - 餐厅菜单 CRUD API
//!
//! 分层架构:
//!
//! 领域层 (domain/):
//! - Menu Context: 菜单项模型、分类枚举、载荷校验规则
//!
//! 应用层 (application/):
//! - Ports: 端口定义（MenuStorePort）
//!
//! 基础设施层 (infrastructure/):
//! - HTTP: RESTful API（axum）
//! - Memory: MenuStore 内存实现

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::{load_config, AppConfig};
