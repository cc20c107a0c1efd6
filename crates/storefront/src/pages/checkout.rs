//! Checkout flow.
//!
//! Loads the cart and profile together, runs every line through the
//! buyer-restriction rule, and refuses to submit while any line is
//! restricted or while a previous submission is still in flight. The
//! in-flight guard is the storefront's whole answer to double-click
//! submissions; there is no queue and no lock.

use zenith_core::cart::{CartLine, CartTotals};
use zenith_core::eligibility::can_purchase;

use crate::api::ApiClient;
use crate::api::types::{Order, Profile, ShippingAddress};
use crate::error::{ApiError, Result};

use super::cart::{CartItemView, CartSummaryView};

/// Result of loading the checkout page.
#[derive(Debug)]
pub enum CheckoutLoad {
    /// Nothing to check out; send the shopper back to the cart page.
    EmptyCart,
    /// Ready to review and place the order.
    Ready(Box<CheckoutFlow>),
}

/// The checkout page state, owned by the caller for the life of the page.
#[derive(Debug)]
pub struct CheckoutFlow {
    lines: Vec<CartLine>,
    profile: Profile,
    submitting: bool,
}

/// Rendered order review.
#[derive(Debug, Clone)]
pub struct OrderReview {
    pub items: Vec<CartItemView>,
    pub summary: CartSummaryView,
    /// Names of lines the shopper's account tier cannot purchase.
    pub restricted_names: Vec<String>,
    /// Message blocking submission, when any line is restricted.
    pub restriction_message: Option<String>,
}

impl CheckoutFlow {
    /// Load cart and profile for checkout.
    pub async fn load(api: &ApiClient) -> Result<CheckoutLoad> {
        let lines = api.cart().await?;
        if lines.is_empty() {
            return Ok(CheckoutLoad::EmptyCart);
        }
        let profile = api.profile().await?;

        Ok(CheckoutLoad::Ready(Box::new(Self {
            lines,
            profile,
            submitting: false,
        })))
    }

    /// Lines the shopper's account tier cannot purchase.
    #[must_use]
    pub fn restricted_lines(&self) -> Vec<&CartLine> {
        let account = self.profile.account_type;
        self.lines
            .iter()
            .filter(|line| !can_purchase(account, line.buyer_requirement))
            .collect()
    }

    /// Whether submission is blocked by a restriction.
    #[must_use]
    pub fn blocked(&self) -> bool {
        !self.restricted_lines().is_empty()
    }

    /// The order review view.
    #[must_use]
    pub fn review(&self) -> OrderReview {
        let restricted_names: Vec<String> = self
            .restricted_lines()
            .iter()
            .map(|line| line.name.clone())
            .collect();

        let restriction_message = (!restricted_names.is_empty()).then(|| {
            format!(
                "Your account type ({}) cannot purchase: {}. Please remove these items \
                 from your cart or contact sales to upgrade your account.",
                self.profile.account_type,
                restricted_names.join(", ")
            )
        });

        OrderReview {
            items: self.lines.iter().map(CartItemView::from).collect(),
            summary: CartSummaryView::from(CartTotals::standard(&self.lines)),
            restricted_names,
            restriction_message,
        }
    }

    /// Shipping form pre-filled from the profile.
    #[must_use]
    pub fn prefill(&self) -> ShippingAddress {
        ShippingAddress {
            address: self.profile.address.clone(),
            city: self.profile.city.clone(),
            state: self.profile.state.clone(),
            zip: self.profile.zip.clone(),
        }
    }

    /// Whether a submission is currently in flight (the submit control
    /// should be disabled).
    #[must_use]
    pub const fn submitting(&self) -> bool {
        self.submitting
    }

    /// Place the order.
    ///
    /// # Errors
    ///
    /// - [`ApiError::Validation`] for a re-entrant call or missing fields,
    ///   before any request is made
    /// - [`ApiError::Restriction`] when a restricted line blocks checkout,
    ///   or when the server's own gate refuses the order
    ///
    /// On any failure the in-flight guard is released so the submit control
    /// returns to its interactive state.
    pub async fn place_order(&mut self, api: &ApiClient, shipping: &ShippingAddress) -> Result<Order> {
        if self.submitting {
            return Err(ApiError::Validation(
                "Order submission already in progress".to_string(),
            ));
        }

        if let Some(message) = self.review().restriction_message {
            return Err(ApiError::Restriction(message));
        }

        if shipping.address.trim().is_empty()
            || shipping.city.trim().is_empty()
            || shipping.state.trim().is_empty()
            || shipping.zip.trim().is_empty()
        {
            return Err(ApiError::Validation(
                "Please fill in all required fields".to_string(),
            ));
        }

        self.submitting = true;
        let result = api.create_order(shipping).await;
        self.submitting = false;

        result
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use rust_decimal_macros::dec;
    use zenith_core::{AccountType, BuyerRequirement, ProductId};

    use super::*;

    fn line(id: i64, requirement: BuyerRequirement) -> CartLine {
        CartLine {
            product_id: ProductId::new(id),
            quantity: 1,
            unit_price: dec!(1000),
            name: format!("Robot {id}"),
            image_url: None,
            buyer_requirement: requirement,
        }
    }

    fn flow(account: AccountType, lines: Vec<CartLine>) -> CheckoutFlow {
        CheckoutFlow {
            lines,
            profile: Profile {
                account_type: account,
                ..Profile::default()
            },
            submitting: false,
        }
    }

    #[test]
    fn test_unrestricted_cart_not_blocked() {
        let flow = flow(
            AccountType::Personal,
            vec![line(1, BuyerRequirement::None), line(2, BuyerRequirement::None)],
        );
        assert!(!flow.blocked());
        assert!(flow.review().restriction_message.is_none());
    }

    #[test]
    fn test_restricted_line_blocks_and_names_product() {
        let flow = flow(
            AccountType::Personal,
            vec![
                line(1, BuyerRequirement::None),
                line(2, BuyerRequirement::Government),
            ],
        );

        assert!(flow.blocked());
        let review = flow.review();
        assert_eq!(review.restricted_names, vec!["Robot 2".to_string()]);
        let message = review.restriction_message.unwrap();
        assert!(message.contains("PERSONAL"));
        assert!(message.contains("Robot 2"));
    }

    #[test]
    fn test_matching_tier_unblocks() {
        let flow = flow(
            AccountType::Government,
            vec![line(2, BuyerRequirement::Government)],
        );
        assert!(!flow.blocked());
    }

    #[test]
    fn test_unknown_account_fails_closed() {
        let flow = flow(
            AccountType::Unknown,
            vec![line(2, BuyerRequirement::Business)],
        );
        assert!(flow.blocked());
    }

    fn offline_api() -> ApiClient {
        let config = crate::config::ClientConfig {
            api_url: url::Url::parse("http://127.0.0.1:9/").unwrap(),
            data_dir: std::env::temp_dir(),
            http_timeout: std::time::Duration::from_secs(1),
        };
        ApiClient::new(&config).unwrap()
    }

    fn shipping() -> ShippingAddress {
        ShippingAddress {
            address: "1 Foundry Way".to_string(),
            city: "Columbus".to_string(),
            state: "OH".to_string(),
            zip: "43004".to_string(),
        }
    }

    #[tokio::test]
    async fn test_reentrant_submission_rejected_before_network() {
        let mut checkout = flow(AccountType::Personal, vec![line(1, BuyerRequirement::None)]);
        checkout.submitting = true;

        // The guard fires before any request; the unroutable API is never hit
        let err = checkout
            .place_order(&offline_api(), &shipping())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
    }

    #[tokio::test]
    async fn test_blocked_cart_rejected_before_network() {
        let mut checkout = flow(
            AccountType::Personal,
            vec![line(2, BuyerRequirement::Medical)],
        );

        let err = checkout
            .place_order(&offline_api(), &shipping())
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Restriction(_)));
    }

    #[tokio::test]
    async fn test_missing_fields_rejected_before_network() {
        let mut checkout = flow(AccountType::Personal, vec![line(1, BuyerRequirement::None)]);

        let incomplete = ShippingAddress {
            address: String::new(),
            ..shipping()
        };
        let err = checkout
            .place_order(&offline_api(), &incomplete)
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Validation(_)));
        assert!(!checkout.submitting());
    }

    #[test]
    fn test_prefill_from_profile() {
        let mut checkout = flow(AccountType::Personal, vec![line(1, BuyerRequirement::None)]);
        checkout.profile.address = "1 Foundry Way".to_string();
        checkout.profile.city = "Columbus".to_string();
        checkout.profile.state = "OH".to_string();
        checkout.profile.zip = "43004".to_string();

        let prefill = checkout.prefill();
        assert_eq!(prefill.address, "1 Foundry Way");
        assert_eq!(prefill.zip, "43004");
    }
}
