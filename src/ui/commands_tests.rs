#![allow(clippy::unwrap_used)]

use rust_decimal_macros::dec;
use std::path::PathBuf;

use super::app::App;
use super::commands::*;
use crate::evaluate::{Advice, AdviceOutcome};
use crate::models::ExpenseCategory;

fn make_app() -> App {
    App::new(PathBuf::from("/tmp"))
}

#[test]
fn test_quit() {
    let mut app = make_app();
    handle_command("q", &mut app).unwrap();
    assert!(!app.running);
}

#[test]
fn test_help() {
    let mut app = make_app();
    handle_command("help", &mut app).unwrap();
    assert!(app.show_help);
}

#[test]
fn test_budget_command() {
    let mut app = make_app();
    handle_command("budget $2,500", &mut app).unwrap();
    assert_eq!(app.budget, dec!(2500));
    assert_eq!(app.status_message, "Budget set to $2,500.00");
}

#[test]
fn test_budget_command_without_args() {
    let mut app = make_app();
    handle_command("b", &mut app).unwrap();
    assert_eq!(app.status_message, "Usage: :budget <amount>");
}

#[test]
fn test_budget_command_invalid_amount() {
    let mut app = make_app();
    handle_command("budget lots", &mut app).unwrap();
    assert_eq!(app.status_message, "Invalid amount: 'lots'");
}

#[test]
fn test_set_multi_word_category() {
    let mut app = make_app();
    handle_command("set Mobile/Internet Bills 45.50", &mut app).unwrap();
    assert_eq!(
        app.expenses.get(ExpenseCategory::MobileInternetBills),
        dec!(45.50)
    );
    assert_eq!(app.field_index, 6);
}

#[test]
fn test_set_by_flag_name() {
    let mut app = make_app();
    handle_command("s education-fee 300", &mut app).unwrap();
    assert_eq!(app.expenses.get(ExpenseCategory::EducationFee), dec!(300));
}

#[test]
fn test_set_unknown_category() {
    let mut app = make_app();
    handle_command("set groceries 30", &mut app).unwrap();
    assert_eq!(app.status_message, "Category 'groceries' not found");
    assert_eq!(app.expenses.total(), dec!(0));
}

#[test]
fn test_set_usage() {
    let mut app = make_app();
    handle_command("set rent", &mut app).unwrap();
    assert!(app.status_message.starts_with("Usage: :set"));
}

#[test]
fn test_advice_command() {
    let mut app = make_app();
    handle_command("budget 200", &mut app).unwrap();
    handle_command("set rent 150", &mut app).unwrap();
    handle_command("set dining 100", &mut app).unwrap();
    handle_command("advice", &mut app).unwrap();
    assert_eq!(app.advice, Some(AdviceOutcome::Advice(Advice::Exceeded)));
}

#[test]
fn test_reset_command() {
    let mut app = make_app();
    handle_command("budget 200", &mut app).unwrap();
    handle_command("reset", &mut app).unwrap();
    assert_eq!(app.budget, dec!(0));
    assert_eq!(app.status_message, "Form cleared");
}

#[test]
fn test_export_command_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut app = App::new(dir.path().to_path_buf());
    app.current_month = "2024-03".into();
    handle_command("set rent 100", &mut app).unwrap();
    handle_command("export", &mut app).unwrap();
    let path = dir.path().join("budgetadvisor-2024-03.csv");
    assert!(path.exists());
    assert!(app.status_message.starts_with("Exported 7 categories"));
}

#[test]
fn test_export_failure_reported_in_status() {
    let mut app = make_app();
    handle_command("export /nonexistent-dir/x/out.csv", &mut app).unwrap();
    assert!(app.status_message.starts_with("Export failed"));
}

#[test]
fn test_unknown_command_suggests() {
    let mut app = make_app();
    handle_command("advise", &mut app).unwrap();
    assert_eq!(
        app.status_message,
        "Unknown command: :advise. Did you mean :advice?"
    );
}

#[test]
fn test_every_command_has_description() {
    assert!(COMMANDS.values().all(|c| !c.description.is_empty()));
    assert!(COMMANDS.contains_key("export"));
}
