//! # Checkout Command
//!
//! Placeholder for the "Ir a pagar" button. There is no payment processing:
//! the request is acknowledged with the current cart and nothing changes.

use axum::extract::State;
use axum::http::StatusCode;
use axum::Json;
use tracing::info;

use crate::commands::cart::CartResponse;
use crate::state::AppState;

/// `POST /checkout`: 202 with the cart as it stands. The cart is not cleared.
pub async fn checkout(State(state): State<AppState>) -> (StatusCode, Json<CartResponse>) {
    let response = state
        .shop()
        .with_shop(|shop| CartResponse::build(shop.cart(), state.config()))
        .await;

    info!(
        items = response.totals.item_count,
        total = %response.formatted_total,
        "checkout requested, payment not available"
    );

    (StatusCode::ACCEPTED, Json(response))
}
