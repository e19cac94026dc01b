//! End-to-end tests for the JSON commands, driven through the router with
//! `tower::ServiceExt::oneshot`. No socket is bound.

use axum::body::{to_bytes, Body};
use axum::http::{Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use scalecars_core::ShopState;
use scalecars_shop_server::config::ServerConfig;
use scalecars_shop_server::router;
use scalecars_shop_server::state::AppState;

const UNKNOWN_ID: &str = "00000000-0000-4000-8000-000000000000";

fn app() -> Router {
    router(AppState::new(ShopState::default(), ServerConfig::default()))
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(body) => builder
            .header("content-type", "application/json")
            .body(Body::from(body.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };

    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap_or(Value::Null)
    };
    (status, value)
}

async fn product_id_by_name(app: &Router, name: &str) -> String {
    let (_, products) = send(app, Method::GET, "/products", None).await;
    products
        .as_array()
        .unwrap()
        .iter()
        .find(|p| p["name"] == name)
        .map(|p| p["id"].as_str().unwrap().to_string())
        .unwrap()
}

async fn login(app: &Router) {
    let (status, _) = send(
        app,
        Method::POST,
        "/session/login",
        Some(json!({ "username": "User", "password": "Password" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
}

#[tokio::test]
async fn test_health() {
    let app = app();
    let response = app
        .oneshot(Request::get("/health").body(Body::empty()).unwrap())
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    assert_eq!(&bytes[..], b"ok");
}

#[tokio::test]
async fn test_initial_session() {
    let app = app();
    let (status, session) = send(&app, Method::GET, "/session", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["isAuthenticated"], false);
    assert_eq!(session["authStatus"], "logged_out");
    assert_eq!(session["loginErrorVisible"], false);
    assert_eq!(session["cart"]["lines"], json!([]));
    assert_eq!(session["cart"]["formattedTotal"], "$0.00");
}

#[tokio::test]
async fn test_login_failure_then_success() {
    let app = app();

    let (status, error) = send(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({ "username": "user", "password": "Password" })),
    )
    .await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(error["code"], "AUTHENTICATION_FAILED");

    let (_, session) = send(&app, Method::GET, "/session", None).await;
    assert_eq!(session["isAuthenticated"], false);
    assert_eq!(session["loginErrorVisible"], true);

    let (status, session) = send(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({ "username": "User", "password": "Password" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["isAuthenticated"], true);
    assert_eq!(session["authStatus"], "logged_in");
    assert_eq!(session["loginErrorVisible"], false);
}

#[tokio::test]
async fn test_dismiss_login_error() {
    let app = app();
    send(
        &app,
        Method::POST,
        "/session/login",
        Some(json!({ "username": "", "password": "" })),
    )
    .await;

    let (status, session) =
        send(&app, Method::POST, "/session/login-error/dismiss", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["loginErrorVisible"], false);
    assert_eq!(session["isAuthenticated"], false);
}

#[tokio::test]
async fn test_products_list_and_get() {
    let app = app();
    let (status, products) = send(&app, Method::GET, "/products", None).await;
    assert_eq!(status, StatusCode::OK);

    let products = products.as_array().unwrap();
    assert_eq!(products.len(), 30);
    assert_eq!(products[0]["name"], "Porsche 911 GT3 RS");
    assert_eq!(products[0]["price"], 12999);

    let id = products[0]["id"].as_str().unwrap();
    let (status, product) = send(&app, Method::GET, &format!("/products/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(product["name"], "Porsche 911 GT3 RS");
    assert_eq!(product["imageRef"], "GTR3RS");
}

#[tokio::test]
async fn test_product_unknown_and_malformed_ids() {
    let app = app();

    let (status, error) =
        send(&app, Method::GET, &format!("/products/{UNKNOWN_ID}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");

    let (status, error) = send(&app, Method::GET, "/products/not-a-uuid", None).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_cart_scenario() {
    let app = app();
    login(&app).await;
    let porsche = product_id_by_name(&app, "Porsche 911 GT3 RS").await;

    let (status, cart) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
    assert_eq!(cart["lines"][0]["quantity"], 1);
    assert_eq!(cart["formattedTotal"], "$129.99");

    // Same product again merges into the existing line
    let (_, cart) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
    assert_eq!(cart["lines"][0]["quantity"], 2);
    assert_eq!(cart["totals"]["total"], 25998);
    assert_eq!(cart["formattedTotal"], "$259.98");

    let line_id = cart["lines"][0]["id"].as_str().unwrap().to_string();

    let (status, cart) = send(
        &app,
        Method::PUT,
        &format!("/cart/items/{line_id}"),
        Some(json!({ "quantity": 3 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"][0]["quantity"], 3);
    assert_eq!(cart["totals"]["totalQuantity"], 3);
    assert_eq!(cart["formattedTotal"], "$389.97");

    let (status, cart) =
        send(&app, Method::DELETE, &format!("/cart/items/{line_id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"], json!([]));
    assert_eq!(cart["totals"]["total"], 0);
    assert_eq!(cart["formattedTotal"], "$0.00");
}

#[tokio::test]
async fn test_update_quantity_below_one_rejected() {
    let app = app();
    let porsche = product_id_by_name(&app, "Porsche 911 GT3 RS").await;
    let (_, cart) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;
    let line_id = cart["lines"][0]["id"].as_str().unwrap().to_string();

    let (status, error) = send(
        &app,
        Method::PUT,
        &format!("/cart/items/{line_id}"),
        Some(json!({ "quantity": 0 })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_QUANTITY");

    let (_, cart) = send(&app, Method::GET, "/cart", None).await;
    assert_eq!(cart["lines"][0]["quantity"], 1);
}

#[tokio::test]
async fn test_add_after_max_quantity_rejected() {
    let app = app();
    let porsche = product_id_by_name(&app, "Porsche 911 GT3 RS").await;
    let (_, cart) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;
    let line_id = cart["lines"][0]["id"].as_str().unwrap().to_string();

    let (status, cart) = send(
        &app,
        Method::PUT,
        &format!("/cart/items/{line_id}"),
        Some(json!({ "quantity": u32::MAX })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"][0]["quantity"], u32::MAX);

    let (status, error) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "INVALID_QUANTITY");

    let (status, cart) = send(&app, Method::GET, "/cart", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"][0]["quantity"], u32::MAX);
    assert_eq!(cart["totals"]["totalQuantity"], u64::from(u32::MAX));
    assert_eq!(cart["totals"]["total"], 12999 * i64::from(u32::MAX));
}

#[tokio::test]
async fn test_unknown_line_is_noop() {
    let app = app();
    let porsche = product_id_by_name(&app, "Porsche 911 GT3 RS").await;
    send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;

    let (status, cart) = send(
        &app,
        Method::PUT,
        &format!("/cart/items/{UNKNOWN_ID}"),
        Some(json!({ "quantity": 5 })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"][0]["quantity"], 1);

    let (status, cart) =
        send(&app, Method::DELETE, &format!("/cart/items/{UNKNOWN_ID}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_add_unknown_product() {
    let app = app();
    let (status, error) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": UNKNOWN_ID })),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(error["code"], "NOT_FOUND");

    let (status, error) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(error["code"], "VALIDATION_ERROR");
}

#[tokio::test]
async fn test_logout_clears_cart() {
    let app = app();
    login(&app).await;
    let porsche = product_id_by_name(&app, "Porsche 911 GT3 RS").await;
    let tesla = product_id_by_name(&app, "Tesla Model S Plaid").await;
    for id in [&porsche, &tesla] {
        send(
            &app,
            Method::POST,
            "/cart/items",
            Some(json!({ "productId": id })),
        )
        .await;
    }

    let (status, session) = send(&app, Method::POST, "/session/logout", None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(session["isAuthenticated"], false);
    assert_eq!(session["cart"]["lines"], json!([]));
    assert_eq!(session["cart"]["formattedTotal"], "$0.00");
}

#[tokio::test]
async fn test_checkout_leaves_cart_untouched() {
    let app = app();
    let porsche = product_id_by_name(&app, "Porsche 911 GT3 RS").await;
    send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;

    let (status, cart) = send(&app, Method::POST, "/checkout", None).await;
    assert_eq!(status, StatusCode::ACCEPTED);
    assert_eq!(cart["formattedTotal"], "$129.99");

    let (_, cart) = send(&app, Method::GET, "/cart", None).await;
    assert_eq!(cart["lines"].as_array().unwrap().len(), 1);
}

#[tokio::test]
async fn test_currency_symbol_from_config() {
    let config = ServerConfig {
        currency_symbol: "€".to_string(),
        ..ServerConfig::default()
    };
    let app = router(AppState::new(ShopState::default(), config));
    let porsche = product_id_by_name(&app, "Porsche 911 GT3 RS").await;

    let (_, cart) = send(
        &app,
        Method::POST,
        "/cart/items",
        Some(json!({ "productId": porsche })),
    )
    .await;
    assert_eq!(cart["formattedTotal"], "€129.99");
}
