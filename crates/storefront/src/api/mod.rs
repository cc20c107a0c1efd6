//! Typed client for the Zenith backend REST API.
//!
//! One async method per endpoint, returning domain types. Catalog reads
//! (products, categories) are cached with `moka` (5-minute TTL); nothing
//! else is ever cached. Cart payloads are normalized into canonical
//! `zenith_core` lines right here at the boundary, so callers never see the
//! backend's sequence-vs-map shape split.
//!
//! The client performs no retries. Transport failures surface as
//! [`ApiError::Http`] and the caller decides whether to try again.

mod cache;
pub mod types;

use std::sync::{Arc, RwLock};
use std::time::Duration;

use moka::future::Cache;
use reqwest::StatusCode;
use secrecy::{ExposeSecret, SecretString};
use serde::de::DeserializeOwned;
use tracing::{debug, instrument};
use url::Url;

use zenith_core::cart::{CartLine, CartPayload};
use zenith_core::{CategoryId, JobId, OrderId, ProductId};

use crate::config::ClientConfig;
use crate::error::{ApiError, Result};

use cache::CacheValue;
use types::{
    Category, Job, JobApplication, JobApplicationRequest, LoginRequest, LoginResponse, Order,
    Product, ProductFilters, Profile, RegisterRequest, SalesInquiry, SalesInquiryRequest,
    ShippingAddress,
};

const CATALOG_CACHE_CAPACITY: u64 = 1000;
const CATALOG_CACHE_TTL: Duration = Duration::from_secs(300); // 5 minutes
const CATEGORIES_CACHE_KEY: &str = "categories";

// =============================================================================
// ApiClient
// =============================================================================

/// Client for the Zenith backend REST API.
///
/// Cheaply cloneable; all clones share one connection pool, one bearer token,
/// and one catalog cache.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
    token: RwLock<Option<SecretString>>,
    catalog_cache: Cache<String, CacheValue>,
}

impl ApiClient {
    /// Create a new API client.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying HTTP client cannot be constructed.
    pub fn new(config: &ClientConfig) -> Result<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.http_timeout)
            .build()?;

        let catalog_cache = Cache::builder()
            .max_capacity(CATALOG_CACHE_CAPACITY)
            .time_to_live(CATALOG_CACHE_TTL)
            .build();

        Ok(Self {
            inner: Arc::new(ApiClientInner {
                client,
                base_url: config.api_url.clone(),
                token: RwLock::new(None),
                catalog_cache,
            }),
        })
    }

    /// Install the bearer token used for authenticated endpoints.
    pub fn set_token(&self, token: SecretString) {
        if let Ok(mut guard) = self.inner.token.write() {
            *guard = Some(token);
        }
    }

    /// Drop the bearer token (logout).
    pub fn clear_token(&self) {
        if let Ok(mut guard) = self.inner.token.write() {
            *guard = None;
        }
    }

    /// Whether a bearer token is installed.
    #[must_use]
    pub fn has_token(&self) -> bool {
        self.inner
            .token
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    fn endpoint(&self, path: &str) -> Result<Url> {
        self.inner
            .base_url
            .join(path)
            .map_err(|e| ApiError::Validation(format!("Invalid endpoint {path}: {e}")))
    }

    /// Clone the current bearer token or fail with `AuthRequired`.
    fn bearer(&self) -> Result<String> {
        self.inner
            .token
            .read()
            .ok()
            .and_then(|guard| {
                guard
                    .as_ref()
                    .map(|token| token.expose_secret().to_string())
            })
            .ok_or(ApiError::AuthRequired)
    }

    /// Decode a successful response, or map the failure status onto the
    /// error taxonomy. `not_found` names the entity for 404 lookups; other
    /// failures carry the server's message when it sent one, else `fallback`.
    async fn handle<T: DeserializeOwned>(
        &self,
        response: reqwest::Response,
        fallback: &'static str,
        not_found: Option<&'static str>,
    ) -> Result<T> {
        let status = response.status();

        if status.is_success() {
            let text = response.text().await?;
            return serde_json::from_str(&text).map_err(|e| {
                debug!(
                    error = %e,
                    body = %text.chars().take(500).collect::<String>(),
                    "Failed to decode response body"
                );
                ApiError::Parse(e)
            });
        }

        Err(Self::status_error(status, response.text().await.ok(), fallback, not_found))
    }

    /// Like [`Self::handle`] for endpoints whose success response has no body.
    async fn handle_empty(
        &self,
        response: reqwest::Response,
        fallback: &'static str,
    ) -> Result<()> {
        let status = response.status();
        if status.is_success() {
            return Ok(());
        }
        Err(Self::status_error(status, response.text().await.ok(), fallback, None))
    }

    fn status_error(
        status: StatusCode,
        body: Option<String>,
        fallback: &'static str,
        not_found: Option<&'static str>,
    ) -> ApiError {
        let message = body.filter(|text| !text.trim().is_empty());
        match status {
            StatusCode::UNAUTHORIZED => ApiError::AuthRequired,
            StatusCode::NOT_FOUND => not_found.map_or_else(
                || ApiError::Remote {
                    status: status.as_u16(),
                    message: message.unwrap_or_else(|| fallback.to_string()),
                },
                ApiError::NotFound,
            ),
            _ => ApiError::Remote {
                status: status.as_u16(),
                message: message.unwrap_or_else(|| fallback.to_string()),
            },
        }
    }

    // =========================================================================
    // Authentication
    // =========================================================================

    /// Log in with username and password. The returned token is NOT installed
    /// automatically; the session layer owns that.
    ///
    /// # Errors
    ///
    /// Rejected credentials surface as a `Remote` error with the standard
    /// invalid-credentials message.
    #[instrument(skip(self, password), fields(username = %username))]
    pub async fn login(&self, username: &str, password: &str) -> Result<LoginResponse> {
        let response = self
            .inner
            .client
            .post(self.endpoint("login")?)
            .json(&LoginRequest {
                username: username.to_string(),
                password: password.to_string(),
            })
            .send()
            .await?;

        // The backend responds 401 to bad credentials; that is a message for
        // the login form, not a redirect-to-login instruction.
        if response.status() == StatusCode::UNAUTHORIZED {
            return Err(ApiError::Remote {
                status: 401,
                message: "Invalid username or password".to_string(),
            });
        }

        self.handle(response, "Invalid username or password", None)
            .await
    }

    /// Register a new account.
    #[instrument(skip(self, registration))]
    pub async fn register(&self, registration: &RegisterRequest) -> Result<LoginResponse> {
        let response = self
            .inner
            .client
            .post(self.endpoint("register")?)
            .json(registration)
            .send()
            .await?;

        self.handle(response, "Registration failed", None).await
    }

    // =========================================================================
    // Catalog
    // =========================================================================

    /// List products, optionally filtered. Cached per filter combination.
    ///
    /// # Errors
    ///
    /// Returns an error if the request fails or the response cannot be
    /// decoded.
    #[instrument(skip(self))]
    pub async fn products(&self, filters: &ProductFilters) -> Result<Arc<Vec<Product>>> {
        let cache_key = format!(
            "products:{}",
            serde_json::to_string(filters).unwrap_or_default()
        );

        if let Some(CacheValue::Products(products)) =
            self.inner.catalog_cache.get(&cache_key).await
        {
            debug!("Cache hit for products");
            return Ok(products);
        }

        let mut request = self.inner.client.get(self.endpoint("products")?);
        if !filters.is_empty() {
            request = request.query(filters);
        }
        let response = request.send().await?;

        let products: Vec<Product> =
            self.handle(response, "Failed to load products", None).await?;
        let products = Arc::new(products);

        self.inner
            .catalog_cache
            .insert(cache_key, CacheValue::Products(Arc::clone(&products)))
            .await;

        Ok(products)
    }

    /// Get a single product by id.
    #[instrument(skip(self))]
    pub async fn product(&self, id: ProductId) -> Result<Product> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("products/{id}"))?)
            .send()
            .await?;

        self.handle(response, "Failed to load product", Some("Product"))
            .await
    }

    /// Fetch full details for the products under comparison.
    #[instrument(skip(self))]
    pub async fn compare_products(&self, ids: &[ProductId]) -> Result<Vec<Product>> {
        let ids_param = ids
            .iter()
            .map(ToString::to_string)
            .collect::<Vec<_>>()
            .join(",");

        let response = self
            .inner
            .client
            .get(self.endpoint("products/compare")?)
            .query(&[("ids", ids_param)])
            .send()
            .await?;

        self.handle(response, "Failed to compare products", None)
            .await
    }

    /// List categories. Cached.
    #[instrument(skip(self))]
    pub async fn categories(&self) -> Result<Arc<Vec<Category>>> {
        if let Some(CacheValue::Categories(categories)) = self
            .inner
            .catalog_cache
            .get(CATEGORIES_CACHE_KEY)
            .await
        {
            debug!("Cache hit for categories");
            return Ok(categories);
        }

        let response = self
            .inner
            .client
            .get(self.endpoint("categories")?)
            .send()
            .await?;

        let categories: Vec<Category> = self
            .handle(response, "Failed to load categories", None)
            .await?;
        let categories = Arc::new(categories);

        self.inner
            .catalog_cache
            .insert(
                CATEGORIES_CACHE_KEY.to_string(),
                CacheValue::Categories(Arc::clone(&categories)),
            )
            .await;

        Ok(categories)
    }

    /// Get a single category by id.
    #[instrument(skip(self))]
    pub async fn category(&self, id: CategoryId) -> Result<Category> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("categories/{id}"))?)
            .send()
            .await?;

        self.handle(response, "Failed to load category", Some("Category"))
            .await
    }

    // =========================================================================
    // Cart
    // =========================================================================

    /// Fetch the server-side cart, normalized into canonical lines.
    #[instrument(skip(self))]
    pub async fn cart(&self) -> Result<Vec<CartLine>> {
        let response = self
            .inner
            .client
            .get(self.endpoint("cart")?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        let payload: CartPayload = self.handle(response, "Failed to load cart", None).await?;
        Ok(payload.normalize())
    }

    /// Add one unit of a product to the cart. Returns the updated lines.
    #[instrument(skip(self))]
    pub async fn add_to_cart(&self, product_id: ProductId) -> Result<Vec<CartLine>> {
        let response = self
            .inner
            .client
            .post(self.endpoint(&format!("cart/products/{product_id}"))?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        let payload: CartPayload = self
            .handle(response, "Failed to add item to cart", None)
            .await?;
        Ok(payload.normalize())
    }

    /// Set the quantity of a cart line. A quantity of zero removes the line
    /// server-side. Returns the updated lines.
    #[instrument(skip(self))]
    pub async fn update_cart_item(
        &self,
        product_id: ProductId,
        quantity: u32,
    ) -> Result<Vec<CartLine>> {
        let response = self
            .inner
            .client
            .put(self.endpoint(&format!("cart/products/{product_id}"))?)
            .bearer_auth(self.bearer()?)
            .json(&serde_json::json!({ "quantity": quantity }))
            .send()
            .await?;

        let payload: CartPayload = self.handle(response, "Failed to update cart", None).await?;
        Ok(payload.normalize())
    }

    /// Remove every line from the cart.
    #[instrument(skip(self))]
    pub async fn clear_cart(&self) -> Result<()> {
        let response = self
            .inner
            .client
            .delete(self.endpoint("cart")?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        self.handle_empty(response, "Failed to clear cart").await
    }

    // =========================================================================
    // Profile
    // =========================================================================

    /// Fetch the logged-in user's profile.
    #[instrument(skip(self))]
    pub async fn profile(&self) -> Result<Profile> {
        let response = self
            .inner
            .client
            .get(self.endpoint("profile")?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        self.handle(response, "Failed to load profile", None).await
    }

    /// Replace the logged-in user's profile.
    #[instrument(skip(self, profile))]
    pub async fn update_profile(&self, profile: &Profile) -> Result<()> {
        let response = self
            .inner
            .client
            .put(self.endpoint("profile")?)
            .bearer_auth(self.bearer()?)
            .json(profile)
            .send()
            .await?;

        self.handle_empty(response, "Failed to update profile").await
    }

    // =========================================================================
    // Orders
    // =========================================================================

    /// Create an order from the server-side cart.
    ///
    /// # Errors
    ///
    /// A 403 response is the buyer-restriction gate; its body (the required
    /// account type, verbatim) surfaces as [`ApiError::Restriction`].
    #[instrument(skip(self, shipping))]
    pub async fn create_order(&self, shipping: &ShippingAddress) -> Result<Order> {
        let response = self
            .inner
            .client
            .post(self.endpoint("orders")?)
            .bearer_auth(self.bearer()?)
            .json(shipping)
            .send()
            .await?;

        if response.status() == StatusCode::FORBIDDEN {
            let message = response
                .text()
                .await
                .ok()
                .filter(|text| !text.trim().is_empty())
                .unwrap_or_else(|| {
                    "You do not have the required account type to purchase this product"
                        .to_string()
                });
            return Err(ApiError::Restriction(message));
        }

        self.handle(response, "Failed to create order", None).await
    }

    /// List the logged-in user's orders.
    #[instrument(skip(self))]
    pub async fn orders(&self) -> Result<Vec<Order>> {
        let response = self
            .inner
            .client
            .get(self.endpoint("orders")?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        self.handle(response, "Failed to load orders", None).await
    }

    /// Get one of the logged-in user's orders.
    #[instrument(skip(self))]
    pub async fn order(&self, id: OrderId) -> Result<Order> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("orders/{id}"))?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        self.handle(response, "Failed to load order", Some("Order"))
            .await
    }

    // =========================================================================
    // Careers & Sales
    // =========================================================================

    /// List job openings.
    #[instrument(skip(self))]
    pub async fn jobs(&self) -> Result<Vec<Job>> {
        let response = self.inner.client.get(self.endpoint("jobs")?).send().await?;
        self.handle(response, "Failed to load jobs", None).await
    }

    /// Get a single job listing.
    #[instrument(skip(self))]
    pub async fn job(&self, id: JobId) -> Result<Job> {
        let response = self
            .inner
            .client
            .get(self.endpoint(&format!("jobs/{id}"))?)
            .send()
            .await?;

        self.handle(response, "Failed to load job", Some("Job")).await
    }

    /// Submit a job application. Unauthenticated by design.
    #[instrument(skip(self, application))]
    pub async fn submit_application(&self, application: &JobApplicationRequest) -> Result<()> {
        let response = self
            .inner
            .client
            .post(self.endpoint("job-applications")?)
            .json(application)
            .send()
            .await?;

        self.handle_empty(response, "Failed to submit application")
            .await
    }

    /// Submit a sales inquiry. Unauthenticated by design.
    #[instrument(skip(self, inquiry))]
    pub async fn submit_inquiry(&self, inquiry: &SalesInquiryRequest) -> Result<()> {
        let response = self
            .inner
            .client
            .post(self.endpoint("sales-inquiries")?)
            .json(inquiry)
            .send()
            .await?;

        self.handle_empty(response, "Failed to submit inquiry").await
    }

    // =========================================================================
    // Admin Reads
    // =========================================================================

    /// List every order (admin).
    #[instrument(skip(self))]
    pub async fn all_orders(&self) -> Result<Vec<Order>> {
        let response = self
            .inner
            .client
            .get(self.endpoint("admin/orders")?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        self.handle(response, "Failed to load orders", None).await
    }

    /// List every job application (admin).
    #[instrument(skip(self))]
    pub async fn all_applications(&self) -> Result<Vec<JobApplication>> {
        let response = self
            .inner
            .client
            .get(self.endpoint("admin/job-applications")?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        self.handle(response, "Failed to load applications", None)
            .await
    }

    /// List every sales inquiry (admin).
    #[instrument(skip(self))]
    pub async fn all_inquiries(&self) -> Result<Vec<SalesInquiry>> {
        let response = self
            .inner
            .client
            .get(self.endpoint("admin/sales-inquiries")?)
            .bearer_auth(self.bearer()?)
            .send()
            .await?;

        self.handle(response, "Failed to load inquiries", None).await
    }
}
