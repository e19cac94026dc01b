//! # Cart Commands
//!
//! Commands for cart manipulation.
//!
//! ## Cart Lifecycle
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Cart Lifecycle                                       │
//! │                                                                         │
//! │  ┌──────────┐     ┌──────────┐     ┌──────────┐                        │
//! │  │  Empty   │────►│ In Cart  │────►│ Checkout │  (placeholder)         │
//! │  │  Cart    │     │          │     │          │                        │
//! │  └──────────┘     └──────────┘     └──────────┘                        │
//! │       ▲                │                                                │
//! │       │           add_to_cart                                          │
//! │       │           update_cart_item                                     │
//! │       │           remove_from_cart                                     │
//! │       │                │                                                │
//! │       └──── logout ────┘                                                │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::{Path, State};
use axum::Json;
use serde::{Deserialize, Serialize};
use tracing::debug;

use scalecars_core::validation::{parse_line_id, parse_product_id};
use scalecars_core::{Cart, CartLine, CartTotals};

use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Cart response including lines and totals.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartResponse {
    pub lines: Vec<CartLine>,
    pub totals: CartTotals,
    /// Total as shown under the cart, e.g. "$259.98".
    pub formatted_total: String,
}

impl CartResponse {
    pub fn build(cart: &Cart, config: &ServerConfig) -> Self {
        let totals = CartTotals::from(cart);
        CartResponse {
            lines: cart.lines().to_vec(),
            formatted_total: config.format_currency(totals.total),
            totals,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCartRequest {
    pub product_id: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateQuantityRequest {
    pub quantity: i64,
}

/// `GET /cart`: current cart contents and totals.
pub async fn get_cart(State(state): State<AppState>) -> Json<CartResponse> {
    debug!("get_cart command");
    let response = state
        .shop()
        .with_shop(|shop| CartResponse::build(shop.cart(), state.config()))
        .await;
    Json(response)
}

/// `POST /cart/items`: adds one unit of a product.
///
/// ## Behavior
/// - Product already in cart: quantity increases by one
/// - Product not in cart: appended as a new line
pub async fn add_to_cart(
    State(state): State<AppState>,
    Json(request): Json<AddToCartRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(product_id = %request.product_id, "add_to_cart command");
    let product_id = parse_product_id(&request.product_id)?;

    let response = state
        .shop()
        .with_shop_mut(|shop| {
            shop.add_to_cart(product_id)?;
            Ok::<CartResponse, ApiError>(CartResponse::build(shop.cart(), state.config()))
        })
        .await?;

    Ok(Json(response))
}

/// `PUT /cart/items/{line_id}`: sets a line's quantity.
///
/// ## Behavior
/// - Quantity below 1: 400 `INVALID_QUANTITY`
/// - Unknown line: nothing changes, current cart returned
pub async fn update_cart_item(
    State(state): State<AppState>,
    Path(line_id): Path<String>,
    Json(request): Json<UpdateQuantityRequest>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(line_id = %line_id, quantity = request.quantity, "update_cart_item command");
    let line_id = parse_line_id(&line_id)?;

    let response = state
        .shop()
        .with_shop_mut(|shop| {
            shop.update_quantity(line_id, request.quantity)?;
            Ok::<CartResponse, ApiError>(CartResponse::build(shop.cart(), state.config()))
        })
        .await?;

    Ok(Json(response))
}

/// `DELETE /cart/items/{line_id}`: removes a line. Unknown lines are a no-op.
pub async fn remove_from_cart(
    State(state): State<AppState>,
    Path(line_id): Path<String>,
) -> Result<Json<CartResponse>, ApiError> {
    debug!(line_id = %line_id, "remove_from_cart command");
    let line_id = parse_line_id(&line_id)?;

    let response = state
        .shop()
        .with_shop_mut(|shop| {
            shop.remove_from_cart(line_id);
            CartResponse::build(shop.cart(), state.config())
        })
        .await;

    Ok(Json(response))
}
