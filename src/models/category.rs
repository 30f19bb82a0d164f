//! Expense categories
//!
//! The category set is closed: every monthly record carries exactly one amount
//! for each of the seven categories, enforced by `CategoryAmounts` being a
//! fixed-size table rather than a map.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::money::Money;

/// A fixed expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ExpenseCategory {
    Food,
    Rent,
    Utilities,
    Transport,
    Entertainment,
    Shopping,
    Other,
}

impl ExpenseCategory {
    /// All categories in display order
    pub const ALL: [ExpenseCategory; 7] = [
        Self::Food,
        Self::Rent,
        Self::Utilities,
        Self::Transport,
        Self::Entertainment,
        Self::Shopping,
        Self::Other,
    ];

    /// Number of categories
    pub const COUNT: usize = Self::ALL.len();

    /// Display name
    pub fn name(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Rent => "Rent",
            Self::Utilities => "Utilities",
            Self::Transport => "Transport",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Other => "Other",
        }
    }

    /// Position in `ALL`
    pub fn index(&self) -> usize {
        *self as usize
    }
}

impl fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.name())
    }
}

impl FromStr for ExpenseCategory {
    type Err = CategoryParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .iter()
            .copied()
            .find(|c| c.name().eq_ignore_ascii_case(s))
            .ok_or_else(|| CategoryParseError::Unknown(s.to_string()))
    }
}

/// Error type for category parsing
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryParseError {
    Unknown(String),
}

impl fmt::Display for CategoryParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryParseError::Unknown(s) => write!(
                f,
                "Unknown category '{}' (expected one of: food, rent, utilities, transport, entertainment, shopping, other)",
                s
            ),
        }
    }
}

impl std::error::Error for CategoryParseError {}

/// One amount per expense category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CategoryAmounts([Money; ExpenseCategory::COUNT]);

impl CategoryAmounts {
    /// All categories at zero
    pub fn zero() -> Self {
        Self::default()
    }

    /// Build from (category, amount) pairs; unspecified categories stay zero
    pub fn from_pairs(pairs: impl IntoIterator<Item = (ExpenseCategory, Money)>) -> Self {
        let mut amounts = Self::zero();
        for (category, amount) in pairs {
            amounts.set(category, amount);
        }
        amounts
    }

    pub fn get(&self, category: ExpenseCategory) -> Money {
        self.0[category.index()]
    }

    pub fn set(&mut self, category: ExpenseCategory, amount: Money) {
        self.0[category.index()] = amount;
    }

    /// Iterate in category display order
    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Money)> + '_ {
        ExpenseCategory::ALL.iter().map(move |c| (*c, self.get(*c)))
    }

    /// Sum of all category amounts
    pub fn total(&self) -> Money {
        self.0.iter().copied().sum()
    }

    /// First category holding a negative amount, if any
    pub fn first_negative(&self) -> Option<(ExpenseCategory, Money)> {
        self.iter().find(|(_, amount)| amount.is_negative())
    }
}

// Serialized as a map keyed by category name so exports and audit entries stay readable.
impl Serialize for CategoryAmounts {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeMap;

        let mut map = serializer.serialize_map(Some(ExpenseCategory::COUNT))?;
        for (category, amount) in self.iter() {
            map.serialize_entry(&category, &amount)?;
        }
        map.end()
    }
}

impl<'de> Deserialize<'de> for CategoryAmounts {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let entries = std::collections::BTreeMap::<ExpenseCategory, Money>::deserialize(deserializer)?;
        Ok(Self::from_pairs(entries))
    }
}
