//! Profile page flow: view and update the account profile.

use zenith_core::{AccountType, Email};

use crate::api::ApiClient;
use crate::api::types::Profile;
use crate::error::{ApiError, Result};

/// Rendered profile header.
#[derive(Debug, Clone)]
pub struct ProfileView {
    /// Uppercase initials for the avatar block.
    pub initials: String,
    pub full_name: String,
    pub email: String,
    pub account_type: AccountType,
    pub company_name: Option<String>,
    pub phone: Option<String>,
}

impl From<&Profile> for ProfileView {
    fn from(profile: &Profile) -> Self {
        let initials = [&profile.first_name, &profile.last_name]
            .iter()
            .filter_map(|name| name.chars().next())
            .flat_map(char::to_uppercase)
            .collect();

        Self {
            initials,
            full_name: format!("{} {}", profile.first_name, profile.last_name)
                .trim()
                .to_string(),
            email: profile.email.clone(),
            account_type: profile.account_type,
            company_name: profile.company_name.clone(),
            phone: (!profile.phone.is_empty()).then(|| profile.phone.clone()),
        }
    }
}

/// Load the profile and its view.
pub async fn load(api: &ApiClient) -> Result<(Profile, ProfileView)> {
    let profile = api.profile().await?;
    let view = ProfileView::from(&profile);
    Ok((profile, view))
}

/// Validate and save profile edits, returning the reloaded profile.
///
/// # Errors
///
/// [`ApiError::Validation`] before any request when required fields are
/// missing or the email is malformed.
pub async fn update(api: &ApiClient, edited: Profile) -> Result<(Profile, ProfileView)> {
    if edited.first_name.trim().is_empty()
        || edited.last_name.trim().is_empty()
        || edited.email.trim().is_empty()
    {
        return Err(ApiError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }

    if Email::parse(edited.email.trim()).is_err() {
        return Err(ApiError::Validation(
            "Please enter a valid email address".to_string(),
        ));
    }

    api.update_profile(&edited).await?;

    // Re-read so the view reflects whatever the backend actually stored
    load(api).await
}
