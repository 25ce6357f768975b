//! 应用层 - 端口定义
//!
//! 包含：
//! - ports: 六边形架构端口定义（MenuStorePort）

pub mod ports;

pub use ports::{MenuStorePort, StoreError};
