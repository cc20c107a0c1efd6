//! Navigation bar state.
//!
//! The badge count is a best-effort background read: any failure - not
//! logged in, network down, backend sulking - degrades to a zero badge
//! instead of an error. Nothing here is worth interrupting the shopper for.

use tracing::debug;

use zenith_core::cart::item_count;

use crate::api::ApiClient;
use crate::auth;
use crate::session::SessionStore;

/// What the navigation bar needs to render.
#[derive(Debug, Clone)]
pub struct NavState {
    /// Total units in the cart; zero when unknown.
    pub cart_count: u64,
    /// Display name of the logged-in user, if any.
    pub user_label: Option<String>,
    /// Whether to show the admin menu.
    pub is_admin: bool,
}

/// Compute the navigation state.
pub async fn nav_state(api: &ApiClient, store: &SessionStore) -> NavState {
    let cart_count = if store.is_logged_in() {
        match api.cart().await {
            Ok(lines) => item_count(&lines),
            Err(e) => {
                debug!(error = %e, "Cart badge refresh failed, showing zero");
                0
            }
        }
    } else {
        0
    };

    NavState {
        cart_count,
        user_label: store.user().map(|user| user.display_name()),
        is_admin: auth::is_admin(store),
    }
}
