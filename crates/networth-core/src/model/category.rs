//! Fixed category sets for assets, liabilities and savings.
//!
//! Each category serializes with its display label, which is also the
//! string stored in exported backups.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{LedgerError, Result};

macro_rules! category_enum {
    (
        $(#[$meta:meta])*
        $name:ident, $kind:literal {
            $($variant:ident => $label:literal),+ $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
        pub enum $name {
            $(
                #[serde(rename = $label)]
                $variant,
            )+
        }

        impl $name {
            /// Every category, in display order.
            pub const ALL: &'static [$name] = &[$($name::$variant),+];

            /// The label used in backups and output.
            pub fn label(&self) -> &'static str {
                match self {
                    $($name::$variant => $label),+
                }
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.label())
            }
        }

        impl FromStr for $name {
            type Err = LedgerError;

            /// Accepts the label or any spelling that matches it after
            /// dropping case and punctuation ("credit-card-debt").
            fn from_str(value: &str) -> Result<Self> {
                let wanted = normalize(value);
                $name::ALL
                    .iter()
                    .copied()
                    .find(|category| normalize(category.label()) == wanted)
                    .ok_or_else(|| {
                        let known: Vec<&str> = $name::ALL.iter().map(|c| c.label()).collect();
                        LedgerError::InvalidInput(format!(
                            "Unknown {} category \"{}\" (expected one of: {})",
                            $kind,
                            value,
                            known.join(", ")
                        ))
                    })
            }
        }
    };
}

category_enum! {
    /// Asset categories.
    AssetCategory, "asset" {
        Properties => "Properties",
        RetirementSavings => "Retirement Savings",
        Investments => "Investments",
        CashAndCashEquivalent => "Cash and Cash Equivalent",
        OtherAssets => "Other Assets",
    }
}

category_enum! {
    /// Liability categories.
    LiabilityCategory, "liability" {
        Mortgages => "Mortgages",
        CarLoans => "Car loans",
        StudentLoans => "Student loans",
        CreditCardDebt => "Credit Card Debt",
        PersonalLoans => "Personal Loans",
        OtherDebts => "Other Debts",
    }
}

category_enum! {
    /// Savings categories.
    SavingsCategory, "savings" {
        EmergencyFund => "Emergency Fund",
        Retirement => "Retirement",
        Investment => "Investment",
        GeneralSavings => "General Savings",
        Other => "Other",
    }
}

fn normalize(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_alphanumeric())
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_label_and_slug() {
        assert_eq!(
            "Retirement Savings".parse::<AssetCategory>().unwrap(),
            AssetCategory::RetirementSavings
        );
        assert_eq!(
            "credit-card-debt".parse::<LiabilityCategory>().unwrap(),
            LiabilityCategory::CreditCardDebt
        );
        assert_eq!(
            "emergency_fund".parse::<SavingsCategory>().unwrap(),
            SavingsCategory::EmergencyFund
        );
    }

    #[test]
    fn test_unknown_category_lists_choices() {
        let err = "Crypto".parse::<AssetCategory>().unwrap_err();
        let message = err.to_string();
        assert!(message.contains("Crypto"));
        assert!(message.contains("Cash and Cash Equivalent"));
    }

    #[test]
    fn test_serde_uses_labels() {
        let json = serde_json::to_string(&LiabilityCategory::CarLoans).unwrap();
        assert_eq!(json, "\"Car loans\"");
        let parsed: AssetCategory = serde_json::from_str("\"Other Assets\"").unwrap();
        assert_eq!(parsed, AssetCategory::OtherAssets);
    }

    #[test]
    fn test_serde_rejects_unknown_label() {
        assert!(serde_json::from_str::<AssetCategory>("\"Gold\"").is_err());
    }
}
