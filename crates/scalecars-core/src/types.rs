//! # Domain Types
//!
//! Core domain types used throughout the shop.
//!
//! ## Type Hierarchy
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                         Domain Types                                    │
//! │                                                                         │
//! │  ┌─────────────────┐   ┌─────────────────┐   ┌─────────────────┐       │
//! │  │    Product      │   │    CartLine     │   │   Credentials   │       │
//! │  │  ─────────────  │   │  ─────────────  │   │  ─────────────  │       │
//! │  │  id (ProductId) │◄──│  product        │   │  username       │       │
//! │  │  name           │   │  id (LineId)    │   │  password       │       │
//! │  │  description    │   │  quantity       │   └─────────────────┘       │
//! │  │  price (Money)  │   └─────────────────┘                             │
//! │  │  image_ref      │        (cart.rs)                                  │
//! │  └─────────────────┘                                                    │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Two Kinds of Identity
//! - `ProductId`: assigned once when the catalog is built
//! - `CartLineId`: assigned when a product first lands in the cart
//!
//! They are distinct newtypes so a line id can never be passed where a
//! product id is expected.

use serde::{Deserialize, Serialize};
use std::fmt;
use ts_rs::TS;
use uuid::Uuid;

use crate::money::Money;

// =============================================================================
// Identifiers
// =============================================================================

/// Identifier of a catalog product (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct ProductId(#[ts(type = "string")] Uuid);

impl ProductId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        ProductId(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        ProductId(uuid)
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for ProductId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Identifier of a line in the cart (UUID v4).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[serde(transparent)]
#[ts(export)]
pub struct CartLineId(#[ts(type = "string")] Uuid);

impl CartLineId {
    /// Generates a fresh random id.
    pub fn new() -> Self {
        CartLineId(Uuid::new_v4())
    }

    /// Wraps an existing UUID.
    #[inline]
    pub const fn from_uuid(uuid: Uuid) -> Self {
        CartLineId(uuid)
    }

    /// Returns the underlying UUID.
    #[inline]
    pub const fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for CartLineId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for CartLineId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

// =============================================================================
// Product
// =============================================================================

/// A scale model listed in the catalog.
///
/// Immutable once the catalog is built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "camelCase")]
#[ts(export)]
pub struct Product {
    /// Unique identifier.
    pub id: ProductId,

    /// Display name, e.g. "Ferrari F40".
    pub name: String,

    /// Scale and livery, e.g. "Escala 1:24 - Clásico en Rojo Ferrari".
    pub description: String,

    /// Unit price.
    pub price: Money,

    /// Asset token the front end resolves to an image. Opaque to the core.
    pub image_ref: String,
}

impl Product {
    /// Creates a product with a fresh id.
    pub fn new(
        name: impl Into<String>,
        description: impl Into<String>,
        price: Money,
        image_ref: impl Into<String>,
    ) -> Self {
        Product {
            id: ProductId::new(),
            name: name.into(),
            description: description.into(),
            price,
            image_ref: image_ref.into(),
        }
    }
}

// =============================================================================
// Credentials
// =============================================================================

/// A username/password pair as typed on the login screen.
#[derive(Clone, Deserialize, TS)]
#[ts(export)]
pub struct Credentials {
    pub username: String,
    pub password: String,
}

impl Credentials {
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Credentials {
            username: username.into(),
            password: password.into(),
        }
    }
}

// Keeps the password out of logs.
impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"***")
            .finish()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
