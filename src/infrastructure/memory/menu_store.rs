//! In-Memory Menu Store Implementation

use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::application::ports::{MenuStorePort, StoreError};
use crate::domain::menu::{Category, MenuItem, MenuItemPayload};

/// 内存菜单存储
///
/// 有序 Vec 加读写锁：id 计算 + push、查找 + 移除都在同一次
/// 写锁内完成，保证读-改-写序列对并发请求的原子性
pub struct InMemoryMenuStore {
    items: RwLock<Vec<MenuItem>>,
}

impl InMemoryMenuStore {
    /// 创建空存储（测试用）
    pub fn new() -> Self {
        Self {
            items: RwLock::new(Vec::new()),
        }
    }

    /// 创建带六条种子记录的存储
    pub fn with_seed_menu() -> Self {
        Self {
            items: RwLock::new(seed_menu()),
        }
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<MenuItem>> {
        self.items.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<MenuItem>> {
        self.items.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for InMemoryMenuStore {
    fn default() -> Self {
        Self::new()
    }
}

impl MenuStorePort for InMemoryMenuStore {
    fn list(&self) -> Vec<MenuItem> {
        self.read().clone()
    }

    fn find(&self, id: u64) -> Option<MenuItem> {
        self.read().iter().find(|m| m.id == id).cloned()
    }

    fn insert(&self, payload: MenuItemPayload) -> MenuItem {
        let mut items = self.write();
        // id 按当前长度 + 1 分配。删除后再创建可能与存量 id 重复，
        // 这是对接方已知并要求保留的行为
        let id = items.len() as u64 + 1;
        let item = MenuItem::from_payload(id, payload);
        items.push(item.clone());
        tracing::info!(id = item.id, name = %item.name, "Menu item created");
        item
    }

    fn update(&self, id: u64, payload: MenuItemPayload) -> Result<MenuItem, StoreError> {
        let mut items = self.write();
        let item = items
            .iter_mut()
            .find(|m| m.id == id)
            .ok_or(StoreError::NotFound(id))?;
        item.apply(payload);
        let updated = item.clone();
        tracing::info!(id = updated.id, name = %updated.name, "Menu item updated");
        Ok(updated)
    }

    fn remove(&self, id: u64) -> Result<MenuItem, StoreError> {
        let mut items = self.write();
        let index = items
            .iter()
            .position(|m| m.id == id)
            .ok_or(StoreError::NotFound(id))?;
        let removed = items.remove(index);
        tracing::info!(id = removed.id, name = %removed.name, "Menu item removed");
        Ok(removed)
    }
}

/// 进程启动时的六条种子记录
fn seed_menu() -> Vec<MenuItem> {
    vec![
        MenuItem {
            id: 1,
            name: "Classic Burger".to_string(),
            description: "Beef patty with lettuce, tomato, and cheese on a sesame seed bun"
                .to_string(),
            price: 12.99,
            category: Category::Entree,
            ingredients: vec![
                "beef".to_string(),
                "lettuce".to_string(),
                "tomato".to_string(),
                "cheese".to_string(),
                "bun".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 2,
            name: "Chicken Caesar Salad".to_string(),
            description: "Grilled chicken breast over romaine lettuce with parmesan and croutons"
                .to_string(),
            price: 11.50,
            category: Category::Entree,
            ingredients: vec![
                "chicken".to_string(),
                "romaine lettuce".to_string(),
                "parmesan cheese".to_string(),
                "croutons".to_string(),
                "caesar dressing".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 3,
            name: "Mozzarella Sticks".to_string(),
            description: "Crispy breaded mozzarella served with marinara sauce".to_string(),
            price: 8.99,
            category: Category::Appetizer,
            ingredients: vec![
                "mozzarella cheese".to_string(),
                "breadcrumbs".to_string(),
                "marinara sauce".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 4,
            name: "Chocolate Lava Cake".to_string(),
            description: "Warm chocolate cake with molten center, served with vanilla ice cream"
                .to_string(),
            price: 7.99,
            category: Category::Dessert,
            ingredients: vec![
                "chocolate".to_string(),
                "flour".to_string(),
                "eggs".to_string(),
                "butter".to_string(),
                "vanilla ice cream".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 5,
            name: "Fresh Lemonade".to_string(),
            description: "House-made lemonade with fresh lemons and mint".to_string(),
            price: 3.99,
            category: Category::Beverage,
            ingredients: vec![
                "lemons".to_string(),
                "sugar".to_string(),
                "water".to_string(),
                "mint".to_string(),
            ],
            available: true,
        },
        MenuItem {
            id: 6,
            name: "Fish and Chips".to_string(),
            description: "Beer-battered cod with seasoned fries and coleslaw".to_string(),
            price: 14.99,
            category: Category::Entree,
            ingredients: vec![
                "cod".to_string(),
                "beer batter".to_string(),
                "potatoes".to_string(),
                "coleslaw".to_string(),
                "tartar sauce".to_string(),
            ],
            available: false,
        },
    ]
}
