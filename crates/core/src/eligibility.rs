//! The buyer-restriction purchase rule.
//!
//! Some products are restricted to a specific account tier: a surgical
//! assistant robot ships only to verified medical organizations, a defense
//! platform only to government agencies. The rule is an exact-match gate with
//! no hierarchy between tiers - a GOVERNMENT account cannot buy a
//! MEDICAL-restricted product.
//!
//! Values the client does not recognize fail closed: an [`AccountType::Unknown`]
//! account satisfies no restriction, and a [`BuyerRequirement::Unrecognized`]
//! tag is satisfiable by nobody. The server re-checks at order creation; this
//! rule exists so the client blocks the purchase before it is attempted.

use crate::types::{AccountType, BuyerRequirement};

/// Decide whether an account tier may purchase a product carrying the given
/// buyer requirement.
///
/// Returns `true` iff the requirement is [`BuyerRequirement::None`] or exactly
/// matches the account tier. Total over both enums; never panics.
#[must_use]
pub const fn can_purchase(account: AccountType, requirement: BuyerRequirement) -> bool {
    match requirement {
        BuyerRequirement::None => true,
        BuyerRequirement::Business => matches!(account, AccountType::Business),
        BuyerRequirement::Medical => matches!(account, AccountType::Medical),
        BuyerRequirement::Government => matches!(account, AccountType::Government),
        BuyerRequirement::Unrecognized => false,
    }
}

/// Human-readable label for a buyer requirement.
///
/// Empty for [`BuyerRequirement::None`]; also empty for
/// [`BuyerRequirement::Unrecognized`], where there is nothing sensible to
/// show and the purchase gate blocks regardless.
#[must_use]
pub const fn requirement_text(requirement: BuyerRequirement) -> &'static str {
    match requirement {
        BuyerRequirement::None | BuyerRequirement::Unrecognized => "",
        BuyerRequirement::Business => "Business Account Required",
        BuyerRequirement::Medical => "Medical Account Required",
        BuyerRequirement::Government => "Government Authorization Required",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL_ACCOUNTS: [AccountType; 5] = [
        AccountType::Personal,
        AccountType::Business,
        AccountType::Medical,
        AccountType::Government,
        AccountType::Unknown,
    ];

    #[test]
    fn test_none_is_universally_purchasable() {
        for account in ALL_ACCOUNTS {
            assert!(can_purchase(account, BuyerRequirement::None));
        }
    }

    #[test]
    fn test_exact_match_required() {
        assert!(can_purchase(
            AccountType::Business,
            BuyerRequirement::Business
        ));
        assert!(can_purchase(AccountType::Medical, BuyerRequirement::Medical));
        assert!(can_purchase(
            AccountType::Government,
            BuyerRequirement::Government
        ));
    }

    #[test]
    fn test_no_tier_hierarchy() {
        // A government account outranks nothing - restrictions are exact
        assert!(!can_purchase(
            AccountType::Government,
            BuyerRequirement::Medical
        ));
        assert!(!can_purchase(
            AccountType::Medical,
            BuyerRequirement::Business
        ));
        assert!(!can_purchase(
            AccountType::Business,
            BuyerRequirement::Government
        ));
    }

    #[test]
    fn test_mismatches_are_rejected() {
        for requirement in [
            BuyerRequirement::Business,
            BuyerRequirement::Medical,
            BuyerRequirement::Government,
        ] {
            for account in ALL_ACCOUNTS {
                let matches = matches!(
                    (account, requirement),
                    (AccountType::Business, BuyerRequirement::Business)
                        | (AccountType::Medical, BuyerRequirement::Medical)
                        | (AccountType::Government, BuyerRequirement::Government)
                );
                assert_eq!(can_purchase(account, requirement), matches);
            }
        }
    }

    #[test]
    fn test_unknown_values_fail_closed() {
        // Unknown account tier buys nothing restricted
        for requirement in [
            BuyerRequirement::Business,
            BuyerRequirement::Medical,
            BuyerRequirement::Government,
            BuyerRequirement::Unrecognized,
        ] {
            assert!(!can_purchase(AccountType::Unknown, requirement));
        }

        // Unrecognized requirement is satisfiable by nobody
        for account in ALL_ACCOUNTS {
            assert!(!can_purchase(account, BuyerRequirement::Unrecognized));
        }
    }

    #[test]
    fn test_requirement_labels() {
        assert_eq!(requirement_text(BuyerRequirement::None), "");
        assert_eq!(
            requirement_text(BuyerRequirement::Business),
            "Business Account Required"
        );
        assert_eq!(
            requirement_text(BuyerRequirement::Medical),
            "Medical Account Required"
        );
        assert_eq!(
            requirement_text(BuyerRequirement::Government),
            "Government Authorization Required"
        );
        assert_eq!(requirement_text(BuyerRequirement::Unrecognized), "");
    }

    #[test]
    fn test_personal_cannot_buy_government_restricted() {
        assert!(!can_purchase(
            AccountType::Personal,
            BuyerRequirement::Government
        ));
        assert_eq!(
            requirement_text(BuyerRequirement::Government),
            "Government Authorization Required"
        );
    }
}
