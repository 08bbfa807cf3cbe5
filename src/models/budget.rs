use rust_decimal::Decimal;

use crate::money::clamp_amount;

/// Planned spend for the month. Never negative.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Budget(Decimal);

impl Budget {
    /// Amounts are clamped into `0..=MAX_AMOUNT`.
    pub fn new(amount: Decimal) -> Self {
        Self(clamp_amount(amount))
    }

    pub fn amount(&self) -> Decimal {
        self.0
    }

    /// Advice is only offered for a budget above zero.
    pub fn is_set(&self) -> bool {
        self.0 > Decimal::ZERO
    }
}
