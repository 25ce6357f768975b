//! 端口定义

mod menu_store;

pub use menu_store::{MenuStorePort, StoreError};
