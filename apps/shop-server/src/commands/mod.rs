//! # Commands Module
//!
//! All JSON commands exposed to the storefront front end.
//!
//! ## Command Organization
//! ```text
//! commands/
//! ├── mod.rs       ◄─── You are here (route table)
//! ├── session.rs   ◄─── Login, logout, login-error indicator
//! ├── catalog.rs   ◄─── Product grid
//! ├── cart.rs      ◄─── Cart manipulation
//! └── checkout.rs  ◄─── "Ir a pagar" placeholder
//! ```
//!
//! ## How Commands Work
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Command Flow                                         │
//! │                                                                         │
//! │  Front end                                                              │
//! │  ─────────                                                              │
//! │  PUT /cart/items/{lineId}  { "quantity": 3 }                            │
//! │         │                                                               │
//! │         ▼                                                               │
//! │  async fn update_cart_item(                                             │
//! │      State(state): State<AppState>,   ◄── Injected by axum             │
//! │      Path(line_id): Path<String>,     ◄── From the URL                 │
//! │      Json(request): Json<...>,        ◄── From the body                │
//! │  ) -> Result<Json<CartResponse>, ApiError>                              │
//! │         │                                                               │
//! │         │ (JSON serialization)                                          │
//! │         ▼                                                               │
//! │  Front end receives: { lines, totals, formattedTotal }                  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

pub mod cart;
pub mod catalog;
pub mod checkout;
pub mod session;

use axum::routing::{get, post, put};
use axum::Router;

use crate::state::AppState;

/// Session routes.
pub fn session_routes() -> Router<AppState> {
    Router::new()
        .route("/session", get(session::get_session))
        .route("/session/login", post(session::login))
        .route("/session/logout", post(session::logout))
        .route(
            "/session/login-error/dismiss",
            post(session::dismiss_login_error),
        )
}

/// Product routes.
pub fn catalog_routes() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::list_products))
        .route("/products/{id}", get(catalog::get_product))
}

/// Cart routes.
pub fn cart_routes() -> Router<AppState> {
    Router::new()
        .route("/cart", get(cart::get_cart))
        .route("/cart/items", post(cart::add_to_cart))
        .route(
            "/cart/items/{line_id}",
            put(cart::update_cart_item).delete(cart::remove_from_cart),
        )
        .route("/checkout", post(checkout::checkout))
}

/// Every command route.
pub fn routes() -> Router<AppState> {
    Router::new()
        .merge(session_routes())
        .merge(catalog_routes())
        .merge(cart_routes())
}
