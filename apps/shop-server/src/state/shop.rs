//! # Shop Handle
//!
//! Shares the one `ShopState` between concurrent requests.
//!
//! ## Thread Safety
//! The state is wrapped in `Arc<RwLock<T>>` because:
//! 1. Handlers run concurrently on the multi-threaded runtime
//! 2. Mutations (login, add, update, remove, logout) must look atomic to
//!    readers, so they take the write lock
//! 3. Reads (catalog, cart, totals) only need a consistent snapshot, so they
//!    share the read lock
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  GET /cart ─────┐                                                       │
//! │  GET /products ─┼──► read().await ───► &ShopState   (many at once)     │
//! │  GET /session ──┘                                                       │
//! │                                                                         │
//! │  POST /cart/items ──► write().await ──► &mut ShopState  (exclusive)    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::Arc;

use tokio::sync::RwLock;

use scalecars_core::ShopState;

/// Cloneable handle to the shared shop state.
#[derive(Debug, Clone)]
pub struct ShopHandle {
    shop: Arc<RwLock<ShopState>>,
}

impl ShopHandle {
    pub fn new(shop: ShopState) -> Self {
        ShopHandle {
            shop: Arc::new(RwLock::new(shop)),
        }
    }

    /// Executes a function with read access to the shop.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let total = handle.with_shop(|shop| shop.total_price()).await;
    /// ```
    pub async fn with_shop<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ShopState) -> R,
    {
        let shop = self.shop.read().await;
        f(&shop)
    }

    /// Executes a function with exclusive write access to the shop.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.with_shop_mut(|shop| shop.add_to_cart(id).map(|_| ())).await?;
    /// ```
    pub async fn with_shop_mut<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut ShopState) -> R,
    {
        let mut shop = self.shop.write().await;
        f(&mut shop)
    }
}

impl Default for ShopHandle {
    fn default() -> Self {
        Self::new(ShopState::default())
    }
}
