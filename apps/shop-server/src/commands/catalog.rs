//! # Catalog Commands
//!
//! Read-only access to the product grid.

use axum::extract::{Path, State};
use axum::Json;
use tracing::debug;

use scalecars_core::validation::parse_product_id;
use scalecars_core::Product;

use crate::error::ApiError;
use crate::state::AppState;

/// `GET /products`: every product in display order.
pub async fn list_products(State(state): State<AppState>) -> Json<Vec<Product>> {
    debug!("list_products command");
    let products = state
        .shop()
        .with_shop(|shop| shop.catalog().products().to_vec())
        .await;
    Json(products)
}

/// `GET /products/{id}`
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Product>, ApiError> {
    debug!(id = %id, "get_product command");
    let product_id = parse_product_id(&id)?;

    state
        .shop()
        .with_shop(|shop| shop.catalog().get(product_id).cloned())
        .await
        .map(Json)
        .ok_or_else(|| ApiError::not_found("Product", product_id))
}
