//! Menu Context - 菜单限界上下文
//!
//! 职责:
//! - 菜单项模型与分类枚举
//! - 载荷字段校验（所有规则一次性收集）

mod item;
mod validation;

pub use item::{Category, MenuItem};
pub use validation::{validate_menu_payload, MenuItemPayload};
