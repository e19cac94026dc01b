//! # State Module
//!
//! Application state shared across handlers.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    State Architecture                                   │
//! │                                                                         │
//! │  AppState (Clone, cheap)                                               │
//! │  ├── ShopHandle    Arc<RwLock<ShopState>>  login flag, cart, catalog   │
//! │  └── ServerConfig  Arc<...>                read-only after startup     │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

mod shop;

use std::sync::Arc;

use scalecars_core::ShopState;

use crate::config::ServerConfig;

pub use shop::ShopHandle;

/// State handed to every command by axum.
#[derive(Debug, Clone)]
pub struct AppState {
    shop: ShopHandle,
    config: Arc<ServerConfig>,
}

impl AppState {
    pub fn new(shop: ShopState, config: ServerConfig) -> Self {
        AppState {
            shop: ShopHandle::new(shop),
            config: Arc::new(config),
        }
    }

    pub fn shop(&self) -> &ShopHandle {
        &self.shop
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }
}
