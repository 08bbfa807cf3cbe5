mod budget;
mod category;
mod ledger;

pub use budget::Budget;
pub use category::ExpenseCategory;
pub use ledger::ExpenseLedger;
