//! Expense categories
//!
//! Categories form a closed enumeration. The wire and storage format is the
//! canonical label (e.g. `"Food & Dining"`); a handful of legacy labels that
//! older clients still send ("Food", "Rent", "Travel", "Others") are accepted
//! on input and resolved to their canonical variant, so everything past the
//! parsing boundary only ever sees canonical tags.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// A canonical expense category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "Food & Dining", alias = "Food")]
    FoodAndDining,
    #[serde(rename = "Transportation", alias = "Travel")]
    Transportation,
    #[serde(rename = "Housing", alias = "Rent")]
    Housing,
    Utilities,
    Healthcare,
    Entertainment,
    Shopping,
    Education,
    #[serde(rename = "Personal Care")]
    PersonalCare,
    Insurance,
    #[serde(rename = "Savings & Investments")]
    SavingsAndInvestments,
    #[serde(rename = "Other", alias = "Others")]
    Other,
}

/// Error returned when a category label is not in the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{0} is not a valid category")]
pub struct UnknownCategory(pub String);

impl Category {
    /// All canonical categories, in display order.
    pub const ALL: [Category; 12] = [
        Category::FoodAndDining,
        Category::Transportation,
        Category::Housing,
        Category::Utilities,
        Category::Healthcare,
        Category::Entertainment,
        Category::Shopping,
        Category::Education,
        Category::PersonalCare,
        Category::Insurance,
        Category::SavingsAndInvestments,
        Category::Other,
    ];

    /// The canonical label stored in the database and emitted on the wire.
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::FoodAndDining => "Food & Dining",
            Category::Transportation => "Transportation",
            Category::Housing => "Housing",
            Category::Utilities => "Utilities",
            Category::Healthcare => "Healthcare",
            Category::Entertainment => "Entertainment",
            Category::Shopping => "Shopping",
            Category::Education => "Education",
            Category::PersonalCare => "Personal Care",
            Category::Insurance => "Insurance",
            Category::SavingsAndInvestments => "Savings & Investments",
            Category::Other => "Other",
        }
    }
}

impl FromStr for Category {
    type Err = UnknownCategory;

    /// Parses a canonical label or one of the legacy aliases.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Food & Dining" | "Food" => Ok(Category::FoodAndDining),
            "Transportation" | "Travel" => Ok(Category::Transportation),
            "Housing" | "Rent" => Ok(Category::Housing),
            "Utilities" => Ok(Category::Utilities),
            "Healthcare" => Ok(Category::Healthcare),
            "Entertainment" => Ok(Category::Entertainment),
            "Shopping" => Ok(Category::Shopping),
            "Education" => Ok(Category::Education),
            "Personal Care" => Ok(Category::PersonalCare),
            "Insurance" => Ok(Category::Insurance),
            "Savings & Investments" => Ok(Category::SavingsAndInvestments),
            "Other" | "Others" => Ok(Category::Other),
            other => Err(UnknownCategory(other.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_canonical_round_trip() {
        for cat in Category::ALL {
            assert_eq!(cat.as_str().parse::<Category>().unwrap(), cat);
        }
    }

    #[test]
    fn test_legacy_aliases_resolve() {
        assert_eq!("Food".parse::<Category>().unwrap(), Category::FoodAndDining);
        assert_eq!("Travel".parse::<Category>().unwrap(), Category::Transportation);
        assert_eq!("Rent".parse::<Category>().unwrap(), Category::Housing);
        assert_eq!("Others".parse::<Category>().unwrap(), Category::Other);
    }

    #[test]
    fn test_unknown_label_rejected() {
        let err = "Groceries".parse::<Category>().unwrap_err();
        assert_eq!(err, UnknownCategory("Groceries".to_string()));
    }

    #[test]
    fn test_serde_accepts_aliases_emits_canonical() {
        let cat: Category = serde_json::from_str("\"Rent\"").unwrap();
        assert_eq!(cat, Category::Housing);
        assert_eq!(serde_json::to_string(&cat).unwrap(), "\"Housing\"");

        let cat: Category = serde_json::from_str("\"Food & Dining\"").unwrap();
        assert_eq!(serde_json::to_string(&cat).unwrap(), "\"Food & Dining\"");
    }
}
