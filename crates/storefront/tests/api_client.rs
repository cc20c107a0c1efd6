//! HTTP-level tests of the API client against a mocked backend.

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use secrecy::SecretString;
use wiremock::matchers::{body_json, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use zenith_core::{CategoryId, OrderId, ProductId};
use zenith_storefront::api::ApiClient;
use zenith_storefront::api::types::{ProductFilters, ShippingAddress};
use zenith_storefront::config::ClientConfig;
use zenith_storefront::error::ApiError;

async fn client_for(server: &MockServer) -> ApiClient {
    let config = ClientConfig {
        api_url: url::Url::parse(&server.uri()).unwrap(),
        data_dir: std::env::temp_dir(),
        http_timeout: Duration::from_secs(5),
    };
    ApiClient::new(&config).unwrap()
}

fn authed(client: &ApiClient) {
    client.set_token(SecretString::from("test-token"));
}

#[tokio::test]
async fn products_filters_become_query_params() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .and(query_param("cat", "3"))
        .and(query_param("color", "White"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([
            {"productId": 5, "name": "NOVA Surgical", "price": 89000, "categoryId": 3, "color": "White"}
        ])))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let filters = ProductFilters {
        cat: Some(CategoryId::new(3)),
        color: Some("White".to_string()),
        ..ProductFilters::default()
    };

    let products = client.products(&filters).await.unwrap();
    assert_eq!(products.len(), 1);
    assert_eq!(products[0].product_id, ProductId::new(5));
}

#[tokio::test]
async fn products_are_cached_per_filter_combination() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!([])))
        .expect(1) // the second call must be served from cache
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let filters = ProductFilters::default();

    client.products(&filters).await.unwrap();
    client.products(&filters).await.unwrap();
}

#[tokio::test]
async fn missing_product_maps_to_not_found() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/products/99"))
        .respond_with(ResponseTemplate::new(404))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.product(ProductId::new(99)).await.unwrap_err();
    assert!(matches!(err, ApiError::NotFound("Product")));
    assert_eq!(err.to_string(), "Product not found");
}

#[tokio::test]
async fn cart_requires_token_before_any_request() {
    let server = MockServer::start().await;
    // No mock mounted: a request would 404 and fail differently
    let client = client_for(&server).await;

    let err = client.cart().await.unwrap_err();
    assert!(err.requires_login());
    assert_eq!(server.received_requests().await.unwrap().len(), 0);
}

#[tokio::test]
async fn rejected_session_maps_to_auth_required() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    authed(&client);

    let err = client.cart().await.unwrap_err();
    assert!(matches!(err, ApiError::AuthRequired));
}

#[tokio::test]
async fn cart_map_shape_is_normalized() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": {
                "7": {"product": {"productId": 7, "name": "SERVO Arm", "price": 50}, "quantity": 3}
            }
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    authed(&client);

    let lines = client.cart().await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].product_id, ProductId::new(7));
    assert_eq!(lines[0].quantity, 3);
    assert_eq!(lines[0].unit_price, rust_decimal::Decimal::from(50));
}

#[tokio::test]
async fn cart_sequence_shape_is_normalized_too() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/cart"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "items": [
                {"product": {"productId": 7, "name": "SERVO Arm", "price": 50}, "quantity": 3}
            ]
        })))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    authed(&client);

    let lines = client.cart().await.unwrap();
    assert_eq!(lines.len(), 1);
    assert_eq!(lines[0].quantity, 3);
}

#[tokio::test]
async fn update_cart_item_sends_quantity_body() {
    let server = MockServer::start().await;

    Mock::given(method("PUT"))
        .and(path("/cart/products/7"))
        .and(body_json(serde_json::json!({"quantity": 4})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({"items": []})))
        .expect(1)
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    authed(&client);

    let lines = client.update_cart_item(ProductId::new(7), 4).await.unwrap();
    assert!(lines.is_empty());
}

#[tokio::test]
async fn restriction_rejection_carries_server_message_verbatim() {
    let server = MockServer::start().await;

    let body = "GOVERNMENT account required to purchase EPSI-9";
    Mock::given(method("POST"))
        .and(path("/orders"))
        .respond_with(ResponseTemplate::new(403).set_body_string(body))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    authed(&client);

    let shipping = ShippingAddress {
        address: "1 Foundry Way".to_string(),
        city: "Columbus".to_string(),
        state: "OH".to_string(),
        zip: "43004".to_string(),
    };
    let err = client.create_order(&shipping).await.unwrap_err();
    match err {
        ApiError::Restriction(message) => assert_eq!(message, body),
        other => panic!("expected Restriction, got {other:?}"),
    }
}

#[tokio::test]
async fn invalid_credentials_keep_login_form_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/login"))
        .respond_with(ResponseTemplate::new(401))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.login("asparks", "wrong").await.unwrap_err();

    // A failed login is a form error, not a redirect-to-login instruction
    assert!(!err.requires_login());
    assert_eq!(err.to_string(), "Invalid username or password");
}

#[tokio::test]
async fn server_error_message_passes_through() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/orders/31"))
        .respond_with(ResponseTemplate::new(500).set_body_string("order service offline"))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    authed(&client);

    let err = client.order(OrderId::new(31)).await.unwrap_err();
    assert_eq!(err.to_string(), "order service offline");
    assert!(err.is_retryable());
}

#[tokio::test]
async fn empty_error_body_falls_back_to_endpoint_message() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/jobs"))
        .respond_with(ResponseTemplate::new(502))
        .mount(&server)
        .await;

    let client = client_for(&server).await;
    let err = client.jobs().await.unwrap_err();
    assert_eq!(err.to_string(), "Failed to load jobs");
}
