//! Domain Layer - 领域层
//!
//! 包含一个限界上下文:
//! - Menu Context: 菜单项管理

pub mod menu;
