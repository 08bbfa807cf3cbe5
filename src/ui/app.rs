use chrono::Local;
use rust_decimal::Decimal;
use std::path::PathBuf;

use crate::evaluate::{request_advice, AdviceOutcome, BudgetSummary};
use crate::models::{Budget, ExpenseCategory, ExpenseLedger};
use crate::money::{clamp_amount, parse_amount};

/// One editable row of the input form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Field {
    Budget,
    Expense(ExpenseCategory),
}

impl Field {
    pub(crate) const COUNT: usize = ExpenseCategory::COUNT + 1;

    /// Form order: budget first, then categories in declaration order.
    pub(crate) fn at(index: usize) -> Option<Field> {
        match index {
            0 => Some(Self::Budget),
            i => ExpenseCategory::all().get(i - 1).copied().map(Self::Expense),
        }
    }

    pub(crate) fn label(&self) -> &'static str {
        match self {
            Self::Budget => "Total Monthly Budget",
            Self::Expense(cat) => cat.as_str(),
        }
    }

    /// Amount added or removed by `+`/`-`.
    pub(crate) fn step(&self) -> Decimal {
        match self {
            Self::Budget => Decimal::from(50),
            Self::Expense(_) => Decimal::TEN,
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum InputMode {
    Normal,
    Command,
    Editing,
}

impl std::fmt::Display for InputMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Normal => write!(f, "NORMAL"),
            Self::Command => write!(f, "COMMAND"),
            Self::Editing => write!(f, "EDIT"),
        }
    }
}

pub(crate) struct App {
    pub(crate) running: bool,
    pub(crate) input_mode: InputMode,
    pub(crate) command_input: String,
    pub(crate) status_message: String,
    pub(crate) show_help: bool,
    pub(crate) current_month: String,

    // Form
    pub(crate) budget: Decimal,
    pub(crate) expenses: ExpenseLedger,
    pub(crate) field_index: usize,

    /// Set by the advice action, cleared whenever an input changes.
    pub(crate) advice: Option<AdviceOutcome>,

    pub(crate) export_dir: PathBuf,
}

impl App {
    pub(crate) fn new(export_dir: PathBuf) -> Self {
        Self {
            running: true,
            input_mode: InputMode::Normal,
            command_input: String::new(),
            status_message: String::new(),
            show_help: false,
            current_month: Local::now().format("%Y-%m").to_string(),

            budget: Decimal::ZERO,
            expenses: ExpenseLedger::new(),
            field_index: 0,

            advice: None,

            export_dir,
        }
    }

    pub(crate) fn budget(&self) -> Budget {
        Budget::new(self.budget)
    }

    /// Re-evaluated from the current form every frame.
    pub(crate) fn summary(&self) -> BudgetSummary {
        BudgetSummary::new(&self.budget(), &self.expenses)
    }

    pub(crate) fn selected_field(&self) -> Field {
        Field::at(self.field_index).unwrap_or(Field::Budget)
    }

    pub(crate) fn field_value(&self, field: Field) -> Decimal {
        match field {
            Field::Budget => self.budget,
            Field::Expense(cat) => self.expenses.get(cat),
        }
    }

    pub(crate) fn set_field(&mut self, field: Field, amount: Decimal) {
        let amount = clamp_amount(amount);
        match field {
            Field::Budget => self.budget = amount,
            Field::Expense(cat) => self.expenses.set(cat, amount),
        }
        self.advice = None;
    }

    pub(crate) fn move_down(&mut self) {
        if self.field_index + 1 < Field::COUNT {
            self.field_index += 1;
        }
    }

    pub(crate) fn move_up(&mut self) {
        self.field_index = self.field_index.saturating_sub(1);
    }

    pub(crate) fn next_field(&mut self) {
        self.field_index = (self.field_index + 1) % Field::COUNT;
    }

    pub(crate) fn prev_field(&mut self) {
        self.field_index = if self.field_index == 0 {
            Field::COUNT - 1
        } else {
            self.field_index - 1
        };
    }

    /// Step the selected field by its step hint, never below zero.
    pub(crate) fn adjust_selected(&mut self, delta: i32) {
        let field = self.selected_field();
        let current = self.field_value(field);
        self.set_field(field, current + field.step() * Decimal::from(delta));
    }

    pub(crate) fn start_editing(&mut self) {
        let value = self.field_value(self.selected_field());
        self.command_input = if value.is_zero() {
            String::new()
        } else {
            value.normalize().to_string()
        };
        self.input_mode = InputMode::Editing;
    }

    /// Apply the typed value to the selected field. Leaves the field untouched
    /// and reports in the status bar when the value does not parse.
    pub(crate) fn commit_edit(&mut self) {
        let field = self.selected_field();
        match parse_amount(&self.command_input) {
            Ok(amount) => {
                self.set_field(field, amount);
                tracing::debug!(field = %field, %amount, "field updated");
                self.set_status(format!("{field} set to {}", crate::money::format_amount(amount)));
            }
            Err(e) => {
                tracing::warn!(field = %field, error = %e, "rejected input");
                self.set_status(e.to_string());
            }
        }
        self.command_input.clear();
        self.input_mode = InputMode::Normal;
    }

    pub(crate) fn request_advice(&mut self) {
        let outcome = request_advice(&self.budget(), &self.expenses);
        tracing::info!(?outcome, "advice requested");
        self.advice = Some(outcome);
    }

    pub(crate) fn reset(&mut self) {
        self.budget = Decimal::ZERO;
        self.expenses = ExpenseLedger::new();
        self.field_index = 0;
        self.advice = None;
    }

    pub(crate) fn set_status(&mut self, msg: impl Into<String>) {
        self.status_message = msg.into();
    }
}
