//! Contact page flow: sales inquiries.
//!
//! Restricted products point shoppers here ("contact sales"), so the product
//! dropdown lists the robots. Validation mirrors the careers form and fails
//! before any request is made.

use zenith_core::{Email, Phone, ProductId};

use crate::api::ApiClient;
use crate::api::types::{ProductFilters, SalesInquiryRequest};
use crate::error::{ApiError, Result};

/// Success banner text.
pub const INQUIRY_THANKS: &str =
    "Thank you for your inquiry! Our sales team will contact you within 24 hours.";

/// Robot choices for the inquiry form's product dropdown.
pub async fn robot_options(api: &ApiClient) -> Result<Vec<(ProductId, String)>> {
    let products = api.products(&ProductFilters::default()).await?;
    Ok(products
        .iter()
        .filter(|product| product.is_robot())
        .map(|product| (product.product_id, product.name.clone()))
        .collect())
}

/// Raw inquiry form input.
#[derive(Debug, Clone, Default)]
pub struct InquiryForm {
    pub product_id: Option<ProductId>,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub message: String,
}

/// Validate the form into a request body.
///
/// # Errors
///
/// [`ApiError::Validation`] with the first problem found.
pub fn validate_inquiry(form: &InquiryForm) -> Result<SalesInquiryRequest> {
    let name = form.name.trim();
    if name.is_empty() || form.email.trim().is_empty() || form.message.trim().is_empty() {
        return Err(ApiError::Validation(
            "Please fill in all required fields".to_string(),
        ));
    }

    let email = Email::parse(form.email.trim())
        .map_err(|_| ApiError::Validation("Please enter a valid email address".to_string()))?;

    // Phone is optional on inquiries, but a provided one must be plausible
    let phone = form.phone.trim();
    if !phone.is_empty() {
        Phone::parse(phone)
            .map_err(|_| ApiError::Validation("Please enter a valid phone number".to_string()))?;
    }

    Ok(SalesInquiryRequest {
        product_id: form.product_id,
        contact_name: name.to_string(),
        company_name: form.company.trim().to_string(),
        email: email.into_inner(),
        phone: phone.to_string(),
        message: form.message.trim().to_string(),
    })
}

/// Validate and submit an inquiry, returning the thank-you banner text.
pub async fn submit_inquiry(api: &ApiClient, form: &InquiryForm) -> Result<&'static str> {
    let request = validate_inquiry(form)?;
    api.submit_inquiry(&request).await?;
    Ok(INQUIRY_THANKS)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn form() -> InquiryForm {
        InquiryForm {
            product_id: Some(ProductId::new(5)),
            name: "Lee Ortiz".to_string(),
            company: "Mercy General".to_string(),
            email: "lortiz@mercygeneral.org".to_string(),
            phone: String::new(),
            message: "Interested in the surgical assistant line.".to_string(),
        }
    }

    #[test]
    fn test_valid_inquiry() {
        let request = validate_inquiry(&form()).unwrap();
        assert_eq!(request.product_id, Some(ProductId::new(5)));
        assert_eq!(request.company_name, "Mercy General");
    }

    #[test]
    fn test_inquiry_without_product_is_fine() {
        let mut general = form();
        general.product_id = None;
        assert!(validate_inquiry(&general).is_ok());
    }

    #[test]
    fn test_empty_message_rejected() {
        let mut bad = form();
        bad.message = String::new();
        assert!(matches!(
            validate_inquiry(&bad),
            Err(ApiError::Validation(_))
        ));
    }

    #[test]
    fn test_provided_phone_must_parse() {
        let mut bad = form();
        bad.phone = "ring ring".to_string();
        assert!(matches!(
            validate_inquiry(&bad),
            Err(ApiError::Validation(_))
        ));
    }
}
