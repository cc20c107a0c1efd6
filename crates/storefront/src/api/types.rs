//! Wire types for the Zenith backend REST API.
//!
//! These mirror the JSON the backend actually sends; the client converts
//! cart payloads into canonical `zenith_core` lines at this boundary and
//! hands everything else to the page flows as-is.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use zenith_core::{
    AccountType, BuyerRequirement, CategoryId, JobId, OrderId, ProductId, UserRole,
};

// =============================================================================
// Catalog
// =============================================================================

/// Robot categories are 1-6; accessories are category 7.
const ACCESSORY_CATEGORY: i64 = 7;

/// A product in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub product_id: ProductId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub price: Decimal,
    #[serde(default)]
    pub stock: i64,
    pub category_id: CategoryId,
    #[serde(default)]
    pub color: Option<String>,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub buyer_requirement: BuyerRequirement,
    // Robot spec sheet; absent on accessories
    #[serde(default)]
    pub ai_model: Option<String>,
    #[serde(default)]
    pub height_cm: Option<Decimal>,
    #[serde(default)]
    pub weight_kg: Option<Decimal>,
    #[serde(default)]
    pub payload_kg: Option<Decimal>,
    #[serde(default)]
    pub battery_hours: Option<Decimal>,
    #[serde(default)]
    pub speed_kmh: Option<Decimal>,
    #[serde(default)]
    pub autonomy_level: Option<String>,
    #[serde(default)]
    pub warranty_years: Option<i64>,
    /// Comma-separated marketing use cases.
    #[serde(default)]
    pub use_cases: Option<String>,
    /// Comma-separated robot names an accessory is compatible with.
    #[serde(default)]
    pub compatible_robots: Option<String>,
}

impl Product {
    /// Whether this product is a robot (as opposed to an accessory).
    #[must_use]
    pub fn is_robot(&self) -> bool {
        (1..ACCESSORY_CATEGORY).contains(&self.category_id.as_i64())
    }

    /// Whether this product is an accessory.
    #[must_use]
    pub fn is_accessory(&self) -> bool {
        self.category_id.as_i64() == ACCESSORY_CATEGORY
    }
}

/// A product category.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    pub category_id: CategoryId,
    pub name: String,
    #[serde(default)]
    pub description: Option<String>,
}

/// Catalog filter query parameters. Unset fields are omitted from the query
/// string entirely.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductFilters {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cat: Option<CategoryId>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ProductFilters {
    /// Whether any filter is set.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.cat.is_none()
            && self.min_price.is_none()
            && self.max_price.is_none()
            && self.color.is_none()
    }
}

// =============================================================================
// Authentication & Profile
// =============================================================================

/// `POST /login` request body.
#[derive(Debug, Clone, Serialize)]
pub struct LoginRequest {
    pub username: String,
    pub password: String,
}

/// `POST /login` response: a bearer token plus a user summary.
#[derive(Debug, Clone, Deserialize)]
pub struct LoginResponse {
    pub token: String,
    pub user: UserSummary,
}

/// Summary of the logged-in user, persisted in the session store.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserSummary {
    #[serde(default)]
    pub id: i64,
    pub username: String,
    #[serde(default)]
    pub role: UserRole,
    #[serde(default)]
    pub first_name: Option<String>,
    #[serde(default)]
    pub last_name: Option<String>,
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default)]
    pub account_type: AccountType,
}

impl UserSummary {
    /// Display name: "First Last" when available, else the username.
    #[must_use]
    pub fn display_name(&self) -> String {
        match (&self.first_name, &self.last_name) {
            (Some(first), Some(last)) => format!("{first} {last}"),
            _ => self.username.clone(),
        }
    }
}

/// `POST /register` request body. A successful registration responds like
/// login: token plus user summary.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RegisterRequest {
    pub username: String,
    pub password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: UserRole,
}

/// Profile as stored by the backend.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Profile {
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub account_type: AccountType,
    #[serde(default)]
    pub company_name: Option<String>,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
}

// =============================================================================
// Orders
// =============================================================================

/// `POST /orders` request body: the shipping address. The backend builds the
/// order from the server-side cart.
#[derive(Debug, Clone, Serialize)]
pub struct ShippingAddress {
    pub address: String,
    pub city: String,
    pub state: String,
    pub zip: String,
}

/// An order as returned by the backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Order {
    pub order_id: OrderId,
    pub date: NaiveDate,
    pub order_total: Decimal,
    #[serde(default)]
    pub shipping_amount: Decimal,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub state: String,
    #[serde(default)]
    pub zip: String,
}

// =============================================================================
// Careers & Sales
// =============================================================================

/// A job listing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Job {
    pub job_id: JobId,
    pub title: String,
    #[serde(default)]
    pub department: String,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub job_type: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub requirements: String,
    #[serde(default)]
    pub salary_range: Option<String>,
    #[serde(default)]
    pub status: JobStatus,
}

/// Whether a job listing is accepting applications.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum JobStatus {
    Open,
    #[default]
    Closed,
    #[serde(other)]
    Unknown,
}

/// `POST /job-applications` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplicationRequest {
    pub job_id: JobId,
    pub applicant_name: String,
    pub email: String,
    pub phone: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub resume_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cover_letter: Option<String>,
}

/// A submitted job application (admin read).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct JobApplication {
    pub application_id: i64,
    pub job_id: JobId,
    pub applicant_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub status: String,
}

/// `POST /sales-inquiries` request body.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInquiryRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub product_id: Option<ProductId>,
    pub contact_name: String,
    pub company_name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// A submitted sales inquiry (admin read).
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SalesInquiry {
    pub inquiry_id: i64,
    #[serde(default)]
    pub product_id: Option<ProductId>,
    pub contact_name: String,
    #[serde(default)]
    pub company_name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: String,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_product_decodes_with_minimal_fields() {
        let product: Product = serde_json::from_str(
            r#"{"productId": 4, "name": "MAGMA Hazard Unit", "price": 320000, "categoryId": 6}"#,
        )
        .unwrap();
        assert_eq!(product.product_id, ProductId::new(4));
        assert_eq!(product.buyer_requirement, BuyerRequirement::None);
        assert!(product.is_robot());
    }

    #[test]
    fn test_product_type_partition() {
        let mut product: Product = serde_json::from_str(
            r#"{"productId": 9, "name": "Spare Gripper", "price": 450, "categoryId": 7}"#,
        )
        .unwrap();
        assert!(product.is_accessory());
        assert!(!product.is_robot());

        product.category_id = CategoryId::new(1);
        assert!(product.is_robot());
    }

    #[test]
    fn test_filters_skip_unset_fields() {
        let filters = ProductFilters {
            cat: Some(CategoryId::new(3)),
            ..ProductFilters::default()
        };
        let query = serde_json::to_value(&filters).unwrap();
        assert_eq!(query.as_object().unwrap().len(), 1);
        assert_eq!(query["cat"], 3);
    }

    #[test]
    fn test_user_summary_display_name() {
        let user: UserSummary = serde_json::from_str(
            r#"{"username": "asparks", "firstName": "Ada", "lastName": "Sparks"}"#,
        )
        .unwrap();
        assert_eq!(user.display_name(), "Ada Sparks");

        let bare: UserSummary = serde_json::from_str(r#"{"username": "asparks"}"#).unwrap();
        assert_eq!(bare.display_name(), "asparks");
    }

    #[test]
    fn test_job_status_wire_values() {
        let job: Job = serde_json::from_str(
            r#"{"jobId": 2, "title": "Robotics Engineer", "status": "OPEN"}"#,
        )
        .unwrap();
        assert_eq!(job.status, JobStatus::Open);

        let odd: JobStatus = serde_json::from_str("\"PAUSED\"").unwrap();
        assert_eq!(odd, JobStatus::Unknown);
    }

    #[test]
    fn test_order_decodes_date() {
        let order: Order = serde_json::from_str(
            r#"{"orderId": 12, "date": "2026-03-05", "orderTotal": 216.00, "address": "1 Main St"}"#,
        )
        .unwrap();
        assert_eq!(order.date, NaiveDate::from_ymd_opt(2026, 3, 5).unwrap());
    }
}
