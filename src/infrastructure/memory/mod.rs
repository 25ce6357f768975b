//! Memory Layer - In-Memory State Management
//!
//! 实现 MenuStore，菜单数据仅存在于进程内存中，重启即丢失

mod menu_store;

pub use menu_store::InMemoryMenuStore;
