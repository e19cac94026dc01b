//! # Error Types
//!
//! Domain-specific error types for scalecars-core.
//!
//! ## Error Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Error Types                                     │
//! │                                                                         │
//! │  scalecars-core errors (this file)                                     │
//! │  ├── CoreError        - Login and cart failures                        │
//! │  └── ValidationError  - Input validation failures                      │
//! │                                                                         │
//! │  shop-server errors (in app)                                           │
//! │  └── ApiError         - What the front end sees (serialized)           │
//! │                                                                         │
//! │  Flow: ValidationError → CoreError → ApiError → Front end              │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Every error here is local, synchronous and recoverable by retrying with
//! valid input. There is nothing fatal in the core.

use thiserror::Error;

use crate::types::{CartLineId, ProductId};

// =============================================================================
// Core Error
// =============================================================================

/// Core business logic errors.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Username/password pair did not match the demo credentials.
    ///
    /// ## User Workflow
    /// ```text
    /// login("foo", "bar")
    ///      │
    ///      ▼
    /// AuthenticationFailed
    ///      │
    ///      ▼
    /// UI shows: "Usuario o contraseña incorrectos"
    /// (authentication state is NOT changed)
    /// ```
    #[error("Authentication failed: invalid username or password")]
    AuthenticationFailed,

    /// Product id is not part of the catalog.
    #[error("Product not found: {0}")]
    ProductNotFound(ProductId),

    /// Cart line id is not in the cart.
    ///
    /// ## When This Occurs
    /// Only on explicit single-line lookups. Removing or updating a missing
    /// line is a silent no-op and never produces this error.
    #[error("Cart line not found: {0}")]
    LineNotFound(CartLineId),

    /// Quantity below the minimum of one.
    #[error("Invalid quantity {0}: must be at least 1")]
    InvalidQuantity(i64),

    /// Adding one more unit would push the line past `u32::MAX`.
    #[error("Quantity of cart line {0} is already at its maximum")]
    QuantityOverflow(CartLineId),

    /// Validation error (wraps ValidationError).
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),
}

// =============================================================================
// Validation Error
// =============================================================================

/// Input validation errors.
///
/// Used for early validation of raw input (path segments, form fields)
/// before it reaches `ShopState`.
#[derive(Debug, Error)]
pub enum ValidationError {
    /// A required field is missing or empty.
    #[error("{field} is required")]
    Required { field: String },

    /// Numeric value is out of range.
    #[error("{field} must be between {min} and {max}")]
    OutOfRange { field: String, min: i64, max: i64 },

    /// Invalid format (e.g., invalid UUID).
    #[error("{field} has invalid format: {reason}")]
    InvalidFormat { field: String, reason: String },
}

// =============================================================================
// Result Type Alias
// =============================================================================

/// Convenience type alias for Results with CoreError.
pub type CoreResult<T> = Result<T, CoreError>;

// =============================================================================
// Unit Tests
// =============================================================================
