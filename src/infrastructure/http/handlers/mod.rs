//! HTTP Handlers

mod menu;
mod ping;

pub use menu::*;
pub use ping::*;
