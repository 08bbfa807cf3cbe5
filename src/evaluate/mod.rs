//! Budget evaluation: totals, remaining budget and the advice that goes with it.
//!
//! Everything here is pure. Callers build a fresh [`Budget`] and
//! [`ExpenseLedger`] from the form and pass them in by reference.

use rust_decimal::Decimal;

use crate::models::{Budget, ExpenseCategory, ExpenseLedger};
use crate::money::format_amount;

pub(crate) const NO_BUDGET_WARNING: &str = "Please enter a valid budget before requesting advice.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Advice {
    WithinBudget,
    ExactlyUsed,
    Exceeded,
}

impl Advice {
    /// Pick the advice for a remaining balance.
    pub(crate) fn for_remaining(remaining: Decimal) -> Self {
        match remaining.cmp(&Decimal::ZERO) {
            std::cmp::Ordering::Greater => Self::WithinBudget,
            std::cmp::Ordering::Equal => Self::ExactlyUsed,
            std::cmp::Ordering::Less => Self::Exceeded,
        }
    }

    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::WithinBudget => {
                "Great job! You are within your budget. You can save the remaining amount."
            }
            Self::ExactlyUsed => {
                "You have exactly used up your budget. Consider reviewing some expenses."
            }
            Self::Exceeded => {
                "You have exceeded your budget. Look for ways to reduce some expenses to stay within budget."
            }
        }
    }
}

impl std::fmt::Display for Advice {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Evaluation {
    pub(crate) total_expenses: Decimal,
    /// May be negative.
    pub(crate) remaining: Decimal,
    pub(crate) advice: Advice,
}

pub(crate) fn evaluate(budget: &Budget, expenses: &ExpenseLedger) -> Evaluation {
    let total_expenses = expenses.total();
    let remaining = budget.amount() - total_expenses;
    Evaluation {
        total_expenses,
        remaining,
        advice: Advice::for_remaining(remaining),
    }
}

/// What the "Get Financial Advice" action shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AdviceOutcome {
    Advice(Advice),
    Warning(&'static str),
}

impl AdviceOutcome {
    pub(crate) fn message(&self) -> &'static str {
        match self {
            Self::Advice(advice) => advice.message(),
            Self::Warning(msg) => msg,
        }
    }
}

/// Advice is only produced for a budget above zero; otherwise the user is
/// warned and nothing is evaluated.
pub(crate) fn request_advice(budget: &Budget, expenses: &ExpenseLedger) -> AdviceOutcome {
    if budget.is_set() {
        AdviceOutcome::Advice(evaluate(budget, expenses).advice)
    } else {
        AdviceOutcome::Warning(NO_BUDGET_WARNING)
    }
}

/// One category's part of the expense distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Slice {
    pub(crate) category: ExpenseCategory,
    pub(crate) amount: Decimal,
    /// Percentage of total expenses, 0 when there are none.
    pub(crate) share: Decimal,
}

impl Slice {
    pub(crate) fn share_label(&self) -> String {
        format!("{:.1}%", self.share.round_dp(1))
    }
}

pub(crate) fn distribution(expenses: &ExpenseLedger) -> Vec<Slice> {
    let total = expenses.total();
    expenses
        .iter()
        .map(|(category, amount)| Slice {
            category,
            amount,
            share: if total > Decimal::ZERO {
                amount * Decimal::ONE_HUNDRED / total
            } else {
                Decimal::ZERO
            },
        })
        .collect()
}

/// Everything the summary view and the CLI print for one evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct BudgetSummary {
    pub(crate) budget: Decimal,
    pub(crate) evaluation: Evaluation,
    pub(crate) slices: Vec<Slice>,
}

impl BudgetSummary {
    pub(crate) fn new(budget: &Budget, expenses: &ExpenseLedger) -> Self {
        Self {
            budget: budget.amount(),
            evaluation: evaluate(budget, expenses),
            slices: distribution(expenses),
        }
    }

    pub(crate) fn total_expenses(&self) -> Decimal {
        self.evaluation.total_expenses
    }

    pub(crate) fn remaining(&self) -> Decimal {
        self.evaluation.remaining
    }

    /// Charts are only worth drawing once something has been spent.
    pub(crate) fn has_expenses(&self) -> bool {
        self.total_expenses() > Decimal::ZERO
    }

    pub(crate) fn budget_display(&self) -> String {
        format_amount(self.budget)
    }

    pub(crate) fn total_expenses_display(&self) -> String {
        format_amount(self.total_expenses())
    }

    pub(crate) fn remaining_display(&self) -> String {
        format_amount(self.remaining())
    }
}
