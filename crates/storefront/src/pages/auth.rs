//! Login, registration, and logout flows.
//!
//! A successful login (or registration, which logs in implicitly) stores the
//! bearer token and user summary in the session, installs the token on the
//! API client, and reports where to navigate next.

use secrecy::SecretString;

use zenith_core::{Email, UserRole};

use crate::api::ApiClient;
use crate::api::types::RegisterRequest;
use crate::error::{ApiError, Result};
use crate::session::SessionStore;

const MIN_PASSWORD_LEN: usize = 6;

/// Where to navigate after a successful login.
#[derive(Debug, Clone)]
pub struct LoginOutcome {
    /// Display name for the welcome message.
    pub user_label: String,
    /// The page the shopper was headed to before being bounced to login,
    /// or the home page.
    pub redirect: String,
}

/// Log in and establish the session.
///
/// # Errors
///
/// [`ApiError::Validation`] for empty fields; rejected credentials surface
/// as the server's invalid-credentials message.
pub async fn login(
    api: &ApiClient,
    store: &mut SessionStore,
    username: &str,
    password: &str,
    redirect: Option<&str>,
) -> Result<LoginOutcome> {
    let username = username.trim();
    if username.is_empty() || password.is_empty() {
        return Err(ApiError::Validation(
            "Please enter username and password".to_string(),
        ));
    }

    let response = api.login(username, password).await?;
    establish_session(api, store, &response.token, &response.user)?;

    Ok(LoginOutcome {
        user_label: response.user.display_name(),
        redirect: redirect.unwrap_or("home").to_string(),
    })
}

/// Raw registration form input.
#[derive(Debug, Clone, Default)]
pub struct RegisterForm {
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
}

/// Register a new account and establish the session.
///
/// # Errors
///
/// [`ApiError::Validation`] before any request for missing fields, password
/// mismatch, a too-short password, or a malformed email.
pub async fn register(
    api: &ApiClient,
    store: &mut SessionStore,
    form: &RegisterForm,
    redirect: Option<&str>,
) -> Result<LoginOutcome> {
    let username = form.username.trim();
    if username.is_empty()
        || form.password.is_empty()
        || form.first_name.trim().is_empty()
        || form.last_name.trim().is_empty()
        || form.email.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }

    if form.password != form.confirm_password {
        return Err(ApiError::Validation("Passwords do not match".to_string()));
    }

    if form.password.len() < MIN_PASSWORD_LEN {
        return Err(ApiError::Validation(
            "Password must be at least 6 characters".to_string(),
        ));
    }

    let email = Email::parse(form.email.trim())
        .map_err(|_| ApiError::Validation("Please enter a valid email address".to_string()))?;

    let response = api
        .register(&RegisterRequest {
            username: username.to_string(),
            password: form.password.clone(),
            first_name: form.first_name.trim().to_string(),
            last_name: form.last_name.trim().to_string(),
            email: email.into_inner(),
            phone: form.phone.trim().to_string(),
            role: UserRole::User,
        })
        .await?;

    establish_session(api, store, &response.token, &response.user)?;

    Ok(LoginOutcome {
        user_label: response.user.display_name(),
        redirect: redirect.unwrap_or("home").to_string(),
    })
}

/// Tear down the session: token and user go, the comparison list stays, and
/// the server-side cart is untouched (the badge reads zero only because
/// unauthenticated badge reads degrade to zero).
pub fn logout(api: &ApiClient, store: &mut SessionStore) -> Result<()> {
    store
        .logout()
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    api.clear_token();
    Ok(())
}

/// Restore a persisted session onto the API client at startup.
pub fn restore_session(api: &ApiClient, store: &SessionStore) {
    if let Some(token) = store.token() {
        api.set_token(token);
    }
}

fn establish_session(
    api: &ApiClient,
    store: &mut SessionStore,
    token: &str,
    user: &crate::api::types::UserSummary,
) -> Result<()> {
    store
        .set_token(token)
        .and_then(|()| store.set_user(user))
        .map_err(|e| ApiError::Validation(e.to_string()))?;
    api.set_token(SecretString::from(token.to_string()));
    Ok(())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn offline_api() -> ApiClient {
        let config = crate::config::ClientConfig {
            api_url: url::Url::parse("http://127.0.0.1:9/").unwrap(),
            data_dir: std::env::temp_dir(),
            http_timeout: std::time::Duration::from_secs(1),
        };
        ApiClient::new(&config).unwrap()
    }

    fn temp_store() -> (tempfile::TempDir, SessionStore) {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::open(dir.path().join("session.json")).unwrap();
        (dir, store)
    }

    fn register_form() -> RegisterForm {
        RegisterForm {
            username: "asparks".to_string(),
            password: "orbital7".to_string(),
            confirm_password: "orbital7".to_string(),
            first_name: "Ada".to_string(),
            last_name: "Sparks".to_string(),
            email: "ada@zenithlab.dev".to_string(),
            phone: String::new(),
        }
    }

    #[tokio::test]
    async fn test_empty_login_fields_rejected_before_network() {
        let (_dir, mut store) = temp_store();
        let err = login(&offline_api(), &mut store, "  ", "", None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter username and password");
    }

    #[tokio::test]
    async fn test_password_mismatch_rejected() {
        let (_dir, mut store) = temp_store();
        let mut form = register_form();
        form.confirm_password = "different".to_string();

        let err = register(&offline_api(), &mut store, &form, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Passwords do not match");
    }

    #[tokio::test]
    async fn test_short_password_rejected() {
        let (_dir, mut store) = temp_store();
        let mut form = register_form();
        form.password = "abc".to_string();
        form.confirm_password = "abc".to_string();

        let err = register(&offline_api(), &mut store, &form, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Password must be at least 6 characters");
    }

    #[tokio::test]
    async fn test_bad_email_rejected() {
        let (_dir, mut store) = temp_store();
        let mut form = register_form();
        form.email = "nope".to_string();

        let err = register(&offline_api(), &mut store, &form, None)
            .await
            .unwrap_err();
        assert_eq!(err.to_string(), "Please enter a valid email address");
    }

    #[test]
    fn test_logout_clears_token_on_client_and_store() {
        let (_dir, mut store) = temp_store();
        let api = offline_api();

        store.set_token("tok").unwrap();
        restore_session(&api, &store);
        assert!(api.has_token());

        logout(&api, &mut store).unwrap();
        assert!(!api.has_token());
        assert!(!store.is_logged_in());
    }
}
