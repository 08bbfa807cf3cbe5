#![allow(clippy::unwrap_used)]

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use super::*;

fn args(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

#[test]
fn test_parse_inputs_all_flags() {
    let (budget, ledger, positional) = parse_inputs(&args(&[
        "--budget",
        "1000",
        "--rent",
        "500",
        "--dining",
        "100",
        "--education-fee",
        "0",
        "--loan-payments",
        "0",
        "--utilities",
        "50",
        "--mobile-internet",
        "20",
        "--other",
        "30",
    ]))
    .unwrap();
    assert_eq!(budget.amount(), dec!(1000));
    assert_eq!(ledger.total(), dec!(700));
    assert_eq!(ledger.get(ExpenseCategory::MobileInternetBills), dec!(20));
    assert!(positional.is_empty());
}

#[test]
fn test_parse_inputs_defaults_to_zero() {
    let (budget, ledger, _) = parse_inputs(&[]).unwrap();
    assert_eq!(budget.amount(), Decimal::ZERO);
    assert_eq!(ledger.total(), Decimal::ZERO);
}

#[test]
fn test_parse_inputs_positional() {
    let (_, ledger, positional) =
        parse_inputs(&args(&["out.csv", "--rent", "$1,200"])).unwrap();
    assert_eq!(positional, vec!["out.csv".to_string()]);
    assert_eq!(ledger.get(ExpenseCategory::Rent), dec!(1200));
}

#[test]
fn test_parse_inputs_negative_clamped() {
    let (budget, _, _) = parse_inputs(&args(&["--budget", "-300"])).unwrap();
    assert_eq!(budget.amount(), Decimal::ZERO);
}

#[test]
fn test_parse_inputs_missing_value() {
    let err = parse_inputs(&args(&["--rent"])).unwrap_err();
    assert_eq!(err.to_string(), "Missing value for --rent");
}

#[test]
fn test_parse_inputs_unknown_flag() {
    let err = parse_inputs(&args(&["--groceries", "10"])).unwrap_err();
    assert_eq!(err.to_string(), "Unknown option: --groceries");
}

#[test]
fn test_parse_inputs_bad_amount() {
    let err = parse_inputs(&args(&["--budget", "abc"])).unwrap_err();
    assert_eq!(err.to_string(), "Bad value for --budget");
}

#[test]
fn test_render_summary_within_budget() {
    let ledger = ExpenseLedger::from_pairs(&[
        (ExpenseCategory::Rent, dec!(500)),
        (ExpenseCategory::Dining, dec!(100)),
        (ExpenseCategory::Utilities, dec!(50)),
        (ExpenseCategory::MobileInternetBills, dec!(20)),
        (ExpenseCategory::Other, dec!(30)),
    ]);
    let out = render_summary(&Budget::new(dec!(1000)), &ledger);
    assert!(out.contains("Total Budget:      $1,000.00"));
    assert!(out.contains("Total Expenses:    $700.00"));
    assert!(out.contains("Remaining Budget:  $300.00"));
    assert!(out.contains("Expense Distribution:"));
    assert!(out.contains("71.4%"));
    assert!(out.contains("You are within your budget"));
}

#[test]
fn test_render_summary_zero_budget_warns() {
    let out = render_summary(&Budget::default(), &ExpenseLedger::new());
    assert!(out.contains("Please enter a valid budget before requesting advice."));
    assert!(!out.contains("Expense Distribution:"));
}

#[test]
fn test_render_summary_exceeded() {
    let ledger = ExpenseLedger::from_pairs(&[
        (ExpenseCategory::Rent, dec!(150)),
        (ExpenseCategory::Dining, dec!(100)),
    ]);
    let out = render_summary(&Budget::new(dec!(200)), &ledger);
    assert!(out.contains("Remaining Budget:  -$50.00"));
    assert!(out.contains("You have exceeded your budget."));
}

fn test_config(dir: &std::path::Path) -> Config {
    let dir = dir.to_string_lossy().to_string();
    Config::from_lookup(move |key: &str| {
        (key == "BUDGETADVISOR_EXPORT_DIR").then(|| dir.clone())
    })
    .unwrap()
}

#[test]
fn test_print_info_flags() {
    assert!(print_info(&args(&["--version"])));
    assert!(print_info(&args(&["-h"])));
    assert!(!print_info(&args(&["summary", "--budget", "10"])));
    assert!(!print_info(&[]));
}

#[test]
fn test_summary_rejects_positional() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let err = as_cli(
        &args(&["budgetadvisor", "summary", "--budget", "100", "extra"]),
        &config,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Unexpected argument: extra");
}

#[test]
fn test_export_rejects_second_path() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let first = dir.path().join("a.csv");
    let err = as_cli(
        &args(&[
            "budgetadvisor",
            "export",
            first.to_str().unwrap(),
            "b.csv",
            "--rent",
            "10",
        ]),
        &config,
    )
    .unwrap_err();
    assert_eq!(err.to_string(), "Unexpected argument: b.csv");
    assert!(!first.exists());
}

#[test]
fn test_export_single_path_writes_file() {
    let dir = tempfile::tempdir().unwrap();
    let config = test_config(dir.path());
    let path = dir.path().join("out.csv");
    as_cli(
        &args(&["budgetadvisor", "export", path.to_str().unwrap(), "--rent", "10"]),
        &config,
    )
    .unwrap();
    assert!(path.exists());
}

#[test]
fn test_parse_inputs_amount_too_large() {
    let err = parse_inputs(&args(&["--rent", "9999999999999999999999999999"])).unwrap_err();
    assert_eq!(err.to_string(), "Bad value for --rent");
    assert!(format!("{err:#}").contains("Amount too large"));
}

#[test]
fn test_render_summary_at_max_amounts() {
    let mut flags = vec!["--budget".to_string(), "1000000000000000".to_string()];
    for cat in ExpenseCategory::all() {
        flags.push(format!("--{}", cat.flag()));
        flags.push("$1,000,000,000,000,000".to_string());
    }
    let (budget, ledger, _) = parse_inputs(&flags).unwrap();
    let out = render_summary(&budget, &ledger);
    assert!(out.contains("$7,000,000,000,000,000.00"));
    assert!(out.contains("-$6,000,000,000,000,000.00"));
    assert!(out.contains("14.3%"));
}
