//! # scalecars-core: Pure Business Logic for the Scale Cars Shop
//!
//! This crate holds everything about the shop that is not presentation:
//! the product catalog, the cart, and the login gate. All of it is plain
//! synchronous code with zero I/O dependencies.
//!
//! ## Architecture Position
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Scale Cars Architecture                            │
//! │                                                                         │
//! │  ┌─────────────────────────────────────────────────────────────────┐   │
//! │  │                    Front End (any UI)                           │   │
//! │  │    Login Screen ──► Product Grid ──► Cart Menu ──► Checkout     │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │ JSON                                   │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │                    shop-server (facade)                         │   │
//! │  │    login, add_to_cart, update_cart_item, remove_from_cart       │   │
//! │  └─────────────────────────────┬───────────────────────────────────┘   │
//! │                                │                                        │
//! │  ┌─────────────────────────────▼───────────────────────────────────┐   │
//! │  │             ★ scalecars-core (THIS CRATE) ★                     │   │
//! │  │                                                                 │   │
//! │  │   ┌───────────┐  ┌───────────┐  ┌───────────┐  ┌───────────┐  │   │
//! │  │   │  catalog  │  │   money   │  │   cart    │  │  session  │  │   │
//! │  │   │  Product  │  │   Money   │  │   Cart    │  │ ShopState │  │   │
//! │  │   │  (seed)   │  │           │  │ CartLine  │  │   login   │  │   │
//! │  │   └───────────┘  └───────────┘  └───────────┘  └───────────┘  │   │
//! │  │                                                                 │   │
//! │  │   NO I/O • NO PERSISTENCE • NO NETWORK                         │   │
//! │  └─────────────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Modules
//!
//! - [`types`] - Identifiers, `Product`, `Credentials`
//! - [`money`] - Money type with integer arithmetic (no floating point!)
//! - [`catalog`] - The fixed product catalog
//! - [`cart`] - Cart lines with merge-by-product semantics
//! - [`session`] - `ShopState`, the single owner of all mutable state
//! - [`error`] - Domain error types
//! - [`validation`] - Input validation
//!
//! ## Example Usage
//!
//! ```rust
//! use scalecars_core::{Catalog, ShopState};
//!
//! let mut shop = ShopState::new(Catalog::seed());
//! shop.login("User", "Password").unwrap();
//!
//! let porsche = shop.catalog().products()[0].id;
//! shop.add_to_cart(porsche).unwrap();
//! shop.add_to_cart(porsche).unwrap();
//!
//! assert_eq!(shop.cart().item_count(), 1);
//! assert_eq!(shop.total_price().to_string(), "$259.98");
//! ```

// =============================================================================
// Module Declarations
// =============================================================================

pub mod cart;
pub mod catalog;
pub mod error;
pub mod money;
pub mod session;
pub mod types;
pub mod validation;

// =============================================================================
// Re-exports for Convenience
// =============================================================================

pub use cart::{Cart, CartLine, CartTotals};
pub use catalog::Catalog;
pub use error::{CoreError, CoreResult, ValidationError};
pub use money::Money;
pub use session::{AuthStatus, ShopState};
pub use types::*;

// =============================================================================
// Crate-Level Constants
// =============================================================================

/// The only username the login gate accepts.
///
/// The comparison is exact and case-sensitive. There is no hashing and no
/// user store behind it.
pub const DEMO_USERNAME: &str = "User";

/// The only password the login gate accepts.
pub const DEMO_PASSWORD: &str = "Password";

/// Lowest quantity the cart stepper offers.
pub const MIN_LINE_QUANTITY: u32 = 1;

/// Highest quantity the cart stepper offers.
///
/// ## Note
/// This bound belongs to the presentation contract. `ShopState` itself
/// accepts any positive quantity; callers that want stepper semantics
/// run the value through [`validation::clamp_quantity`] first.
pub const MAX_LINE_QUANTITY: u32 = 10;
