//! Menu Context - 菜单项模型

use serde::{Deserialize, Serialize};

use super::validation::MenuItemPayload;

/// 菜单分类
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Appetizer,
    Entree,
    Dessert,
    Beverage,
}

impl Category {
    /// 所有合法分类，顺序与错误提示一致
    pub const ALL: [Category; 4] = [
        Category::Appetizer,
        Category::Entree,
        Category::Dessert,
        Category::Beverage,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Appetizer => "appetizer",
            Category::Entree => "entree",
            Category::Dessert => "dessert",
            Category::Beverage => "beverage",
        }
    }

    /// 按小写名称解析分类
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|c| c.as_str() == name)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// 菜单项
///
/// id 由服务端在创建时分配，其余字段在 create/update 边界处已通过校验
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MenuItem {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub price: f64,
    pub category: Category,
    pub ingredients: Vec<String>,
    pub available: bool,
}

impl MenuItem {
    /// 由校验通过的载荷构造新菜单项
    pub fn from_payload(id: u64, payload: MenuItemPayload) -> Self {
        Self {
            id,
            name: payload.name,
            description: payload.description,
            price: payload.price,
            category: payload.category,
            ingredients: payload.ingredients,
            available: payload.available,
        }
    }

    /// 用校验通过的载荷覆盖全部字段，id 保持不变
    ///
    /// 校验保证载荷总是完整的，因此更新等价于整体覆盖；
    /// 显式传入的 `available: false` 也会如实生效
    pub fn apply(&mut self, payload: MenuItemPayload) {
        self.name = payload.name;
        self.description = payload.description;
        self.price = payload.price;
        self.category = payload.category;
        self.ingredients = payload.ingredients;
        self.available = payload.available;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_lowercase() {
        let json = serde_json::to_string(&Category::Appetizer).unwrap();
        assert_eq!(json, "\"appetizer\"");

        let parsed: Category = serde_json::from_str("\"beverage\"").unwrap();
        assert_eq!(parsed, Category::Beverage);
    }

    #[test]
    fn test_category_from_name() {
        assert_eq!(Category::from_name("entree"), Some(Category::Entree));
        assert_eq!(Category::from_name("Entree"), None);
        assert_eq!(Category::from_name("sides"), None);
    }

    #[test]
    fn test_apply_keeps_id() {
        let payload = MenuItemPayload {
            name: "Iced Tea".to_string(),
            description: "Freshly brewed black tea over ice".to_string(),
            price: 2.99,
            category: Category::Beverage,
            ingredients: vec!["tea".to_string(), "ice".to_string()],
            available: false,
        };
        let mut item = MenuItem::from_payload(5, payload.clone());

        item.apply(payload);

        assert_eq!(item.id, 5);
        assert!(!item.available);
    }
}
