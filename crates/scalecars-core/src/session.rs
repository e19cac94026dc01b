//! # Shop State
//!
//! `ShopState` is the single owner of everything that changes while the app
//! runs: the login flag, the login-error indicator, and the cart. It also
//! holds the catalog, which never changes.
//!
//! ## Authentication State Machine
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │              login("User", "Password")                                  │
//! │   ┌───────────┐ ─────────────────────────► ┌───────────┐               │
//! │   │ LoggedOut │                            │ LoggedIn  │               │
//! │   └───────────┘ ◄───────────────────────── └───────────┘               │
//! │     │     ▲            logout()               (cart cleared)           │
//! │     │     │                                                             │
//! │     └─────┘  login(anything else)                                       │
//! │              → login_error_visible = true                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Cart Access While Logged Out
//! Cart operations do not check the login flag. The front end only shows
//! the cart after login, and `logout` empties it, so the cart is empty
//! whenever the user is logged out through normal use.

use serde::Serialize;
use tracing::{debug, info, warn};
use ts_rs::TS;

use crate::cart::{Cart, CartLine, CartTotals};
use crate::catalog::Catalog;
use crate::error::{CoreError, CoreResult};
use crate::money::Money;
use crate::types::{CartLineId, Credentials, ProductId};
use crate::validation::validate_quantity;
use crate::{DEMO_PASSWORD, DEMO_USERNAME};

/// Which side of the login gate the user is on.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum AuthStatus {
    #[default]
    LoggedOut,
    LoggedIn,
}

/// The shop's process-wide state.
#[derive(Debug, Clone)]
pub struct ShopState {
    authenticated: bool,
    login_error_visible: bool,
    cart: Cart,
    catalog: Catalog,
}

impl ShopState {
    /// Creates a logged-out state with an empty cart.
    pub fn new(catalog: Catalog) -> Self {
        ShopState {
            authenticated: false,
            login_error_visible: false,
            cart: Cart::new(),
            catalog,
        }
    }

    // =========================================================================
    // Read Accessors
    // =========================================================================

    pub fn is_authenticated(&self) -> bool {
        self.authenticated
    }

    pub fn auth_status(&self) -> AuthStatus {
        if self.authenticated {
            AuthStatus::LoggedIn
        } else {
            AuthStatus::LoggedOut
        }
    }

    /// Whether the last login attempt failed and nobody has cleared it yet.
    pub fn login_error_visible(&self) -> bool {
        self.login_error_visible
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Sum of `price × quantity` over the cart, recomputed on every call.
    pub fn total_price(&self) -> Money {
        self.cart.total()
    }

    pub fn totals(&self) -> CartTotals {
        CartTotals::from(&self.cart)
    }

    /// Looks up one cart line.
    ///
    /// ## Errors
    /// `CoreError::LineNotFound` if the id is not in the cart.
    pub fn line(&self, line_id: CartLineId) -> CoreResult<&CartLine> {
        self.cart
            .line(line_id)
            .ok_or(CoreError::LineNotFound(line_id))
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Checks the credentials against the demo account.
    ///
    /// ## Behavior
    /// - `("User", "Password")`: logged in, error indicator cleared
    /// - anything else: login flag untouched, error indicator raised,
    ///   `CoreError::AuthenticationFailed` returned
    ///
    /// The comparison is exact and case-sensitive.
    pub fn login(&mut self, username: &str, password: &str) -> CoreResult<()> {
        if username == DEMO_USERNAME && password == DEMO_PASSWORD {
            self.authenticated = true;
            self.login_error_visible = false;
            info!(username, "login succeeded");
            Ok(())
        } else {
            self.login_error_visible = true;
            warn!(username, "login rejected");
            Err(CoreError::AuthenticationFailed)
        }
    }

    pub fn login_with(&mut self, credentials: &Credentials) -> CoreResult<()> {
        self.login(&credentials.username, &credentials.password)
    }

    /// Logs out and empties the cart. Safe to call when already logged out.
    pub fn logout(&mut self) {
        self.authenticated = false;
        self.cart.clear();
        info!("logged out, cart cleared");
    }

    /// Hides the login error once the front end has shown it.
    pub fn dismiss_login_error(&mut self) {
        self.login_error_visible = false;
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Adds one unit of a catalog product to the cart.
    ///
    /// ## Behavior
    /// - Already in cart: that line's quantity goes up by one
    /// - Not in cart: a new line with quantity 1 is appended
    ///
    /// ## Errors
    /// - `CoreError::ProductNotFound` if the id is not in the catalog
    /// - `CoreError::QuantityOverflow` if the product's line is at `u32::MAX`
    ///
    /// The cart is left unchanged in both cases.
    pub fn add_to_cart(&mut self, product_id: ProductId) -> CoreResult<&CartLine> {
        let product = self
            .catalog
            .get(product_id)
            .ok_or(CoreError::ProductNotFound(product_id))?;

        let line = self.cart.add_product(product)?;
        debug!(
            product_id = %product_id,
            line_id = %line.id,
            quantity = line.quantity,
            "added to cart"
        );
        Ok(line)
    }

    /// Removes a line from the cart.
    ///
    /// Absent ids are a silent no-op; the removed line (if any) is returned
    /// for callers that care.
    pub fn remove_from_cart(&mut self, line_id: CartLineId) -> Option<CartLine> {
        let removed = self.cart.remove_line(line_id);
        debug!(line_id = %line_id, removed = removed.is_some(), "remove from cart");
        removed
    }

    /// Sets a line's quantity.
    ///
    /// ## Behavior
    /// - Quantity is applied verbatim (no clamp to the stepper's 10)
    /// - Absent line: silent no-op
    ///
    /// ## Errors
    /// `CoreError::InvalidQuantity` for anything below 1, checked before the
    /// line lookup. The cart is left unchanged.
    pub fn update_quantity(&mut self, line_id: CartLineId, quantity: i64) -> CoreResult<()> {
        let quantity = validate_quantity(quantity)?;
        let updated = self.cart.set_quantity(line_id, quantity);
        debug!(line_id = %line_id, quantity, updated, "update quantity");
        Ok(())
    }
}

impl Default for ShopState {
    fn default() -> Self {
        Self::new(Catalog::seed())
    }
}
