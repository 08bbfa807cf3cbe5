use rust_decimal::Decimal;

use super::ExpenseCategory;
use crate::money::clamp_amount;

/// One amount per expense category, kept in declaration order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ExpenseLedger {
    amounts: [Decimal; ExpenseCategory::COUNT],
}

impl ExpenseLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a ledger from `(category, amount)` pairs. Later pairs overwrite earlier ones.
    #[cfg(test)]
    pub fn from_pairs(pairs: &[(ExpenseCategory, Decimal)]) -> Self {
        let mut ledger = Self::new();
        for &(category, amount) in pairs {
            ledger.set(category, amount);
        }
        ledger
    }

    pub fn get(&self, category: ExpenseCategory) -> Decimal {
        self.amounts[category.index()]
    }

    /// Amounts are clamped into `0..=MAX_AMOUNT`.
    pub fn set(&mut self, category: ExpenseCategory, amount: Decimal) {
        self.amounts[category.index()] = clamp_amount(amount);
    }

    pub fn iter(&self) -> impl Iterator<Item = (ExpenseCategory, Decimal)> + '_ {
        ExpenseCategory::all()
            .iter()
            .map(move |&c| (c, self.amounts[c.index()]))
    }

    pub fn total(&self) -> Decimal {
        self.amounts.iter().copied().sum()
    }
}
