//! # Validation Module
//!
//! Input validation utilities.
//!
//! ## Validation Strategy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Validation Layers                                  │
//! │                                                                         │
//! │  Layer 1: Front end                                                    │
//! │  └── Stepper limited to 1...10 (clamp_quantity)                        │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 2: shop-server                                                  │
//! │  └── Path ids must be UUIDs (parse_product_id, parse_line_id)          │
//! │           │                                                             │
//! │           ▼                                                             │
//! │  Layer 3: ShopState                                                    │
//! │  └── Quantity must be >= 1 (validate_quantity)                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use uuid::Uuid;

use crate::error::{CoreError, CoreResult, ValidationError};
use crate::types::{CartLineId, ProductId};
use crate::{MAX_LINE_QUANTITY, MIN_LINE_QUANTITY};

/// Result type for validation operations.
pub type ValidationResult<T> = Result<T, ValidationError>;

// =============================================================================
// Quantity
// =============================================================================

/// Validates a quantity for `ShopState::update_quantity`.
///
/// ## Rules
/// - Must be at least 1, otherwise `CoreError::InvalidQuantity`
/// - Must fit in a `u32`
/// - No upper clamp: 10 is the stepper's limit, not the core's
///
/// ## Example
/// ```rust
/// use scalecars_core::validation::validate_quantity;
///
/// assert_eq!(validate_quantity(3).unwrap(), 3);
/// assert_eq!(validate_quantity(25).unwrap(), 25);
/// assert!(validate_quantity(0).is_err());
/// ```
pub fn validate_quantity(qty: i64) -> CoreResult<u32> {
    if qty < i64::from(MIN_LINE_QUANTITY) {
        return Err(CoreError::InvalidQuantity(qty));
    }

    u32::try_from(qty).map_err(|_| {
        ValidationError::OutOfRange {
            field: "quantity".to_string(),
            min: i64::from(MIN_LINE_QUANTITY),
            max: i64::from(u32::MAX),
        }
        .into()
    })
}

/// Forces a quantity into the stepper range `[1, 10]`.
///
/// ## Example
/// ```rust
/// use scalecars_core::validation::clamp_quantity;
///
/// assert_eq!(clamp_quantity(0), 1);
/// assert_eq!(clamp_quantity(4), 4);
/// assert_eq!(clamp_quantity(42), 10);
/// ```
pub fn clamp_quantity(qty: i64) -> u32 {
    let clamped = qty.clamp(i64::from(MIN_LINE_QUANTITY), i64::from(MAX_LINE_QUANTITY));
    // In range by construction.
    u32::try_from(clamped).unwrap_or(MIN_LINE_QUANTITY)
}

// =============================================================================
// UUID Validators
// =============================================================================

/// Parses a product id from its string form.
///
/// ## Example
/// ```rust
/// use scalecars_core::validation::parse_product_id;
///
/// assert!(parse_product_id("550e8400-e29b-41d4-a716-446655440000").is_ok());
/// assert!(parse_product_id("not-a-uuid").is_err());
/// ```
pub fn parse_product_id(id: &str) -> ValidationResult<ProductId> {
    parse_uuid("product id", id).map(ProductId::from_uuid)
}

/// Parses a cart line id from its string form.
pub fn parse_line_id(id: &str) -> ValidationResult<CartLineId> {
    parse_uuid("cart line id", id).map(CartLineId::from_uuid)
}

fn parse_uuid(field: &str, id: &str) -> ValidationResult<Uuid> {
    let id = id.trim();

    if id.is_empty() {
        return Err(ValidationError::Required {
            field: field.to_string(),
        });
    }

    Uuid::parse_str(id).map_err(|_| ValidationError::InvalidFormat {
        field: field.to_string(),
        reason: "must be a valid UUID".to_string(),
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
