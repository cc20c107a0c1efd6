//! Account tiers and product purchase restrictions.
//!
//! The backend tags every registered user with an account tier and every
//! product with an optional buyer requirement. Both arrive over the wire as
//! SCREAMING_SNAKE_CASE strings; values this client version does not know
//! deserialize into explicit catch-all variants so the purchase rule can
//! treat them as restricted rather than silently permitting a sale.

use core::fmt;

use serde::{Deserialize, Serialize};

/// The purchasing tier of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AccountType {
    #[default]
    Personal,
    Business,
    Medical,
    Government,
    /// Tier not recognized by this client version. Never satisfies a
    /// restricted buyer requirement.
    #[serde(other)]
    Unknown,
}

impl AccountType {
    /// The wire representation of this tier.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Personal => "PERSONAL",
            Self::Business => "BUSINESS",
            Self::Medical => "MEDICAL",
            Self::Government => "GOVERNMENT",
            Self::Unknown => "UNKNOWN",
        }
    }
}

impl fmt::Display for AccountType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A tag on a product restricting which account tiers may purchase it.
///
/// `None` is universally purchasable; any other value requires an exact
/// tier match. An absent field deserializes as `None` via `#[serde(default)]`
/// on the containing struct.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BuyerRequirement {
    #[default]
    None,
    Business,
    Medical,
    Government,
    /// Requirement tag not recognized by this client version. Satisfiable by
    /// no account tier.
    #[serde(other)]
    Unrecognized,
}

/// Role of a registered user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum UserRole {
    #[default]
    User,
    Admin,
    #[serde(other)]
    Unknown,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_account_type_wire_format() {
        assert_eq!(
            serde_json::to_string(&AccountType::Government).unwrap(),
            "\"GOVERNMENT\""
        );
        let parsed: AccountType = serde_json::from_str("\"MEDICAL\"").unwrap();
        assert_eq!(parsed, AccountType::Medical);
    }

    #[test]
    fn test_unknown_account_type_is_captured() {
        let parsed: AccountType = serde_json::from_str("\"PLATINUM\"").unwrap();
        assert_eq!(parsed, AccountType::Unknown);
    }

    #[test]
    fn test_unrecognized_requirement_is_captured() {
        let parsed: BuyerRequirement = serde_json::from_str("\"MILITARY\"").unwrap();
        assert_eq!(parsed, BuyerRequirement::Unrecognized);
    }

    #[test]
    fn test_requirement_default_is_none() {
        assert_eq!(BuyerRequirement::default(), BuyerRequirement::None);
    }

    #[test]
    fn test_admin_role() {
        let parsed: UserRole = serde_json::from_str("\"ADMIN\"").unwrap();
        assert_eq!(parsed, UserRole::Admin);
    }
}
