//! Integration tests for the Zenith storefront client.
//!
//! Tests drive the real page flows against a `wiremock` stand-in for the
//! backend, so every assertion covers the whole client stack: API client,
//! session store, and the purchase/cart rules between them.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p zenith-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `storefront_flow` - login, browsing, cart
//! - `checkout_restrictions` - the buyer-restriction gate end to end
//! - `compare_flow` - the comparison selection workflow
//! - `forms_validation` - careers/contact validation short-circuits

#![allow(clippy::unwrap_used)]

use std::time::Duration;

use wiremock::MockServer;

use zenith_storefront::api::ApiClient;
use zenith_storefront::config::ClientConfig;
use zenith_storefront::session::SessionStore;

/// Everything a flow test needs: a mock backend plus a fresh client and
/// session store wired to it.
pub struct TestContext {
    pub server: MockServer,
    pub api: ApiClient,
    pub store: SessionStore,
    // Owns the session file for the test's lifetime
    _data_dir: tempfile::TempDir,
}

impl TestContext {
    /// Start a mock backend and point a fresh client at it.
    ///
    /// # Panics
    ///
    /// Panics on setup failure; this is test scaffolding.
    pub async fn new() -> Self {
        let server = MockServer::start().await;
        let data_dir = tempfile::tempdir().unwrap();

        let config = ClientConfig {
            api_url: url::Url::parse(&server.uri()).unwrap(),
            data_dir: data_dir.path().to_path_buf(),
            http_timeout: Duration::from_secs(5),
        };

        let api = ApiClient::new(&config).unwrap();
        let store = SessionStore::open(config.session_file()).unwrap();

        Self {
            server,
            api,
            store,
            _data_dir: data_dir,
        }
    }

    /// Install a logged-in session with the given account type, bypassing
    /// the login endpoint.
    pub fn login_as(&mut self, username: &str, account_type: &str) {
        self.store.set_token("test-token").unwrap();
        let user: zenith_storefront::api::types::UserSummary = serde_json::from_value(
            serde_json::json!({
                "username": username,
                "accountType": account_type,
                "role": "USER",
            }),
        )
        .unwrap();
        self.store.set_user(&user).unwrap();
        zenith_storefront::pages::auth::restore_session(&self.api, &self.store);
    }
}

/// Canned product JSON.
#[must_use]
pub fn product_json(
    id: i64,
    name: &str,
    price: i64,
    category: i64,
    requirement: &str,
) -> serde_json::Value {
    serde_json::json!({
        "productId": id,
        "name": name,
        "description": format!("{name} - autonomous robotics platform."),
        "price": price,
        "stock": 12,
        "categoryId": category,
        "color": "Graphite",
        "buyerRequirement": requirement,
    })
}

/// The standard six-robot-plus-accessory catalog used across tests.
#[must_use]
pub fn catalog_json() -> serde_json::Value {
    serde_json::json!([
        product_json(1, "KODA Home", 12500, 1, "NONE"),
        product_json(2, "SERVO Industrial", 85500, 2, "BUSINESS"),
        product_json(3, "NOVA Surgical", 89000, 3, "MEDICAL"),
        product_json(4, "EPSI-9 Defense", 1149000, 4, "GOVERNMENT"),
        product_json(5, "SAGE Research", 64000, 5, "NONE"),
        product_json(9, "Spare Gripper", 450, 7, "NONE"),
    ])
}

/// A cart payload in the keyed-map shape.
#[must_use]
pub fn keyed_cart_json(entries: &[(i64, &str, i64, i64, &str)]) -> serde_json::Value {
    let mut items = serde_json::Map::new();
    for (id, name, price, quantity, requirement) in entries {
        items.insert(
            id.to_string(),
            serde_json::json!({
                "product": product_json(*id, name, *price, 1, requirement),
                "quantity": quantity,
            }),
        );
    }
    serde_json::json!({ "items": items })
}

/// A cart payload in the sequence shape.
#[must_use]
pub fn sequence_cart_json(entries: &[(i64, &str, i64, i64, &str)]) -> serde_json::Value {
    let items: Vec<serde_json::Value> = entries
        .iter()
        .map(|(id, name, price, quantity, requirement)| {
            serde_json::json!({
                "product": product_json(*id, name, *price, 1, requirement),
                "quantity": quantity,
            })
        })
        .collect();
    serde_json::json!({ "items": items })
}
