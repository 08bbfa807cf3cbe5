#![allow(clippy::unwrap_used)]

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use rust_decimal_macros::dec;
use std::path::PathBuf;

use super::handle_key;
use crate::evaluate::{Advice, AdviceOutcome};
use crate::models::ExpenseCategory;
use crate::ui::app::{App, InputMode};

fn press(app: &mut App, code: KeyCode) {
    handle_key(KeyEvent::new(code, KeyModifiers::NONE), app).unwrap();
}

fn type_str(app: &mut App, s: &str) {
    for c in s.chars() {
        press(app, KeyCode::Char(c));
    }
}

fn make_app() -> App {
    App::new(PathBuf::from("/tmp"))
}

#[test]
fn test_step_keys_adjust_selected_field() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('j'));
    press(&mut app, KeyCode::Char('+'));
    assert_eq!(app.budget, dec!(100));
    assert_eq!(app.expenses.get(ExpenseCategory::Rent), dec!(10));
}

#[test]
fn test_typed_entry_flow() {
    let mut app = make_app();
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.input_mode, InputMode::Editing);
    type_str(&mut app, "1,000");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.budget, dec!(1000));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_editing_ignores_letters() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('e'));
    type_str(&mut app, "5a0");
    assert_eq!(app.command_input, "50");
}

#[test]
fn test_editing_escape_cancels() {
    let mut app = make_app();
    press(&mut app, KeyCode::Enter);
    type_str(&mut app, "75");
    press(&mut app, KeyCode::Esc);
    assert_eq!(app.budget, dec!(0));
    assert_eq!(app.status_message, "Edit cancelled");
}

#[test]
fn test_advice_key() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('a'));
    assert!(matches!(app.advice, Some(AdviceOutcome::Warning(_))));

    press(&mut app, KeyCode::Char('+'));
    press(&mut app, KeyCode::Char('a'));
    assert_eq!(app.advice, Some(AdviceOutcome::Advice(Advice::WithinBudget)));
}

#[test]
fn test_command_mode_runs_command() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char(':'));
    type_str(&mut app, "set rent 500");
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.expenses.get(ExpenseCategory::Rent), dec!(500));
    assert_eq!(app.input_mode, InputMode::Normal);
}

#[test]
fn test_help_overlay_swallows_next_key() {
    let mut app = make_app();
    press(&mut app, KeyCode::Char('?'));
    assert!(app.show_help);
    press(&mut app, KeyCode::Char('+'));
    assert!(!app.show_help);
    assert_eq!(app.budget, dec!(0));
}

#[test]
fn test_ctrl_q_quits() {
    let mut app = make_app();
    handle_key(
        KeyEvent::new(KeyCode::Char('q'), KeyModifiers::CONTROL),
        &mut app,
    )
    .unwrap();
    assert!(!app.running);
}
