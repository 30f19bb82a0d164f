//! Monthly record model
//!
//! A record is the income and per-category expenses entered for one month.
//! Records are replaced wholesale on save, never merged.

use serde::{Deserialize, Serialize};

use super::category::{CategoryAmounts, ExpenseCategory};
use super::money::Money;

/// Validation errors for monthly records
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordValidationError {
    NegativeIncome(Money),
    NegativeExpense(ExpenseCategory, Money),
}

impl std::fmt::Display for RecordValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NegativeIncome(amount) => write!(f, "Income cannot be negative ({})", amount),
            Self::NegativeExpense(category, amount) => {
                write!(f, "{} expense cannot be negative ({})", category, amount)
            }
        }
    }
}

impl std::error::Error for RecordValidationError {}

/// Income and expenses for a single month
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MonthlyRecord {
    pub income: Money,
    pub expenses: CategoryAmounts,
}

impl MonthlyRecord {
    pub fn new(income: Money, expenses: CategoryAmounts) -> Self {
        Self { income, expenses }
    }

    /// Income 0 and every category 0
    pub fn zero() -> Self {
        Self::default()
    }

    /// Sum of all category expenses
    pub fn total_expenses(&self) -> Money {
        self.expenses.total()
    }

    /// Validate that no amount is negative
    pub fn validate(&self) -> Result<(), RecordValidationError> {
        if self.income.is_negative() {
            return Err(RecordValidationError::NegativeIncome(self.income));
        }
        if let Some((category, amount)) = self.expenses.first_negative() {
            return Err(RecordValidationError::NegativeExpense(category, amount));
        }
        Ok(())
    }

    /// Human-readable list of field changes from `before` to `self`
    pub fn diff_from(&self, before: &MonthlyRecord) -> Option<String> {
        let mut changes = Vec::new();

        if before.income != self.income {
            changes.push(format!("Income: {} -> {}", before.income, self.income));
        }
        for category in ExpenseCategory::ALL {
            let (old, new) = (before.expenses.get(category), self.expenses.get(category));
            if old != new {
                changes.push(format!("{}: {} -> {}", category, old, new));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join(", "))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_record() {
        let record = MonthlyRecord::zero();
        assert!(record.income.is_zero());
        assert!(record.total_expenses().is_zero());
        assert!(record.validate().is_ok());
    }

    #[test]
    fn test_validation_negative_income() {
        let record = MonthlyRecord::new(Money::from_dollars(-5), CategoryAmounts::zero());
        assert!(matches!(
            record.validate(),
            Err(RecordValidationError::NegativeIncome(_))
        ));
    }

    #[test]
    fn test_validation_negative_expense() {
        let expenses = CategoryAmounts::from_pairs([(ExpenseCategory::Shopping, Money::from_cents(-1))]);
        let record = MonthlyRecord::new(Money::from_dollars(100), expenses);
        assert_eq!(
            record.validate(),
            Err(RecordValidationError::NegativeExpense(
                ExpenseCategory::Shopping,
                Money::from_cents(-1)
            ))
        );
    }

    #[test]
    fn test_diff() {
        let before = MonthlyRecord::zero();
        let after = MonthlyRecord::new(
            Money::from_dollars(3000),
            CategoryAmounts::from_pairs([(ExpenseCategory::Rent, Money::from_dollars(1200))]),
        );

        assert_eq!(
            after.diff_from(&before).unwrap(),
            "Income: $0.00 -> $3,000.00, Rent: $0.00 -> $1,200.00"
        );
        assert!(after.diff_from(&after).is_none());
    }

    #[test]
    fn test_serialization() {
        let record = MonthlyRecord::new(
            Money::from_dollars(3000),
            CategoryAmounts::from_pairs([(ExpenseCategory::Food, Money::from_dollars(500))]),
        );
        let json = serde_json::to_string(&record).unwrap();
        let deserialized: MonthlyRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(record, deserialized);
    }
}
