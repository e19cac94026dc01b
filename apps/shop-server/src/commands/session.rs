//! # Session Commands
//!
//! Login gate and the login-error indicator.
//!
//! ## User Workflow
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  Login screen                                                           │
//! │        │                                                                │
//! │        ▼                                                                │
//! │  POST /session/login { username, password }                             │
//! │        │                                                                │
//! │        ├── 200 → isAuthenticated: true → front end shows product grid  │
//! │        │                                                                │
//! │        └── 401 AUTHENTICATION_FAILED → loginErrorVisible: true         │
//! │                                                                         │
//! │  Logout icon → confirmation prompt (front end) → POST /session/logout  │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use axum::extract::State;
use axum::Json;
use serde::Serialize;
use tracing::debug;

use scalecars_core::{AuthStatus, Credentials, ShopState};

use crate::commands::cart::CartResponse;
use crate::config::ServerConfig;
use crate::error::ApiError;
use crate::state::AppState;

/// Everything the front end binds to, in one snapshot.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub is_authenticated: bool,
    pub auth_status: AuthStatus,
    pub login_error_visible: bool,
    pub cart: CartResponse,
}

impl SessionResponse {
    pub fn build(shop: &ShopState, config: &ServerConfig) -> Self {
        SessionResponse {
            is_authenticated: shop.is_authenticated(),
            auth_status: shop.auth_status(),
            login_error_visible: shop.login_error_visible(),
            cart: CartResponse::build(shop.cart(), config),
        }
    }
}

/// `GET /session`
pub async fn get_session(State(state): State<AppState>) -> Json<SessionResponse> {
    debug!("get_session command");
    let response = state
        .shop()
        .with_shop(|shop| SessionResponse::build(shop, state.config()))
        .await;
    Json(response)
}

/// `POST /session/login`
///
/// A rejected login still raises the error indicator; `GET /session`
/// reflects it.
pub async fn login(
    State(state): State<AppState>,
    Json(credentials): Json<Credentials>,
) -> Result<Json<SessionResponse>, ApiError> {
    debug!(username = %credentials.username, "login command");

    let response = state
        .shop()
        .with_shop_mut(|shop| {
            shop.login_with(&credentials)?;
            Ok::<SessionResponse, ApiError>(SessionResponse::build(shop, state.config()))
        })
        .await?;

    Ok(Json(response))
}

/// `POST /session/logout`: logs out and empties the cart.
pub async fn logout(State(state): State<AppState>) -> Json<SessionResponse> {
    debug!("logout command");
    let response = state
        .shop()
        .with_shop_mut(|shop| {
            shop.logout();
            SessionResponse::build(shop, state.config())
        })
        .await;
    Json(response)
}

/// `POST /session/login-error/dismiss`
pub async fn dismiss_login_error(State(state): State<AppState>) -> Json<SessionResponse> {
    debug!("dismiss_login_error command");
    let response = state
        .shop()
        .with_shop_mut(|shop| {
            shop.dismiss_login_error();
            SessionResponse::build(shop, state.config())
        })
        .await;
    Json(response)
}
