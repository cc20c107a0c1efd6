//! Admin read flows: orders, applications, and inquiries across all users.
//!
//! These are read-only dashboards. The server enforces the admin role; the
//! client only short-circuits the obvious case of not being logged in at all.

use zenith_core::format_usd;

use crate::api::ApiClient;
use crate::api::types::{JobApplication, SalesInquiry};
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

use super::format_date;

/// One row of the admin orders table.
#[derive(Debug, Clone)]
pub struct AdminOrderRow {
    pub order_id: String,
    pub date: String,
    pub total: String,
    pub destination: String,
}

/// Load every order.
pub async fn all_orders(api: &ApiClient, store: &SessionStore) -> Result<Vec<AdminOrderRow>> {
    require_login(store)?;
    let orders = api.all_orders().await?;
    Ok(orders
        .iter()
        .map(|order| AdminOrderRow {
            order_id: order.order_id.to_string(),
            date: format_date(order.date),
            total: format_usd(order.order_total),
            destination: format!("{}, {}", order.city, order.state),
        })
        .collect())
}

/// Load every job application.
pub async fn all_applications(
    api: &ApiClient,
    store: &SessionStore,
) -> Result<Vec<JobApplication>> {
    require_login(store)?;
    api.all_applications().await
}

/// Load every sales inquiry.
pub async fn all_inquiries(api: &ApiClient, store: &SessionStore) -> Result<Vec<SalesInquiry>> {
    require_login(store)?;
    api.all_inquiries().await
}

fn require_login(store: &SessionStore) -> Result<()> {
    if store.is_logged_in() {
        Ok(())
    } else {
        Err(ApiError::AuthRequired)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_admin_reads_require_login() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();
        let config = crate::config::ClientConfig {
            api_url: url::Url::parse("http://127.0.0.1:9/").unwrap(),
            data_dir: std::env::temp_dir(),
            http_timeout: std::time::Duration::from_secs(1),
        };
        let api = ApiClient::new(&config).unwrap();

        let err = all_orders(&api, &store).await.unwrap_err();
        assert!(err.requires_login());
    }
}
