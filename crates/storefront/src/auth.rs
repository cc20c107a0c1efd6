//! Authentication helpers over the session store.
//!
//! The backend issues a JWT at login. The client never verifies it - the
//! server owns validity - but the payload claims are handy for display and
//! for deciding whether to bother sending a request at all (an expired token
//! will only bounce with a 401).

use base64::Engine as _;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use chrono::{DateTime, Utc};
use secrecy::{ExposeSecret, SecretString};
use serde::Deserialize;

use zenith_core::{AccountType, UserRole};

use crate::session::SessionStore;

/// Claims of interest inside the backend's JWT payload.
#[derive(Debug, Clone, Deserialize)]
pub struct TokenClaims {
    /// Username the token was issued to.
    #[serde(default)]
    pub sub: Option<String>,
    /// Authorities claim as the backend encodes it.
    #[serde(default, rename = "auth")]
    pub authorities: Option<String>,
    /// Expiry as seconds since the epoch.
    #[serde(default)]
    pub exp: Option<i64>,
}

impl TokenClaims {
    /// Whether the token has expired at `now`. Tokens without an `exp`
    /// claim never expire client-side.
    #[must_use]
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.exp.is_some_and(|exp| exp <= now.timestamp())
    }
}

/// Decode the payload claims of a JWT without verifying its signature.
///
/// Returns `None` for anything that does not look like a JWT; a malformed
/// token is simply a token the server will reject.
#[must_use]
pub fn decode_claims(token: &SecretString) -> Option<TokenClaims> {
    let payload = token.expose_secret().split('.').nth(1)?;
    let bytes = URL_SAFE_NO_PAD.decode(payload).ok()?;
    serde_json::from_slice(&bytes).ok()
}

/// The stored user's account tier.
///
/// Fail-closed: with no stored user (or a tier this client does not know),
/// the answer is [`AccountType::Unknown`], which satisfies no restricted
/// buyer requirement.
#[must_use]
pub fn account_type(store: &SessionStore) -> AccountType {
    store
        .user()
        .map_or(AccountType::Unknown, |user| user.account_type)
}

/// Whether the stored user is an administrator.
#[must_use]
pub fn is_admin(store: &SessionStore) -> bool {
    store.user().is_some_and(|user| user.role == UserRole::Admin)
}

/// Display name for the stored user, falling back to a neutral label.
#[must_use]
pub fn user_name(store: &SessionStore) -> String {
    store
        .user()
        .map_or_else(|| "User".to_string(), |user| user.display_name())
}
