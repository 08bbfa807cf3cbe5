use anyhow::{Context, Result};

use crate::config::Config;
use crate::evaluate::{request_advice, BudgetSummary};
use crate::export::{default_export_path, export_to_csv, shellexpand};
use crate::models::{Budget, ExpenseCategory, ExpenseLedger};
use crate::money::{format_amount, parse_amount};

pub(crate) fn as_cli(args: &[String], config: &Config) -> Result<()> {
    if print_info(&args[1..]) {
        return Ok(());
    }
    match args[1].as_str() {
        "summary" | "s" => cli_summary(&args[2..]),
        "export" => cli_export(&args[2..], config),
        other => {
            print_usage();
            anyhow::bail!("Unknown command: {other}");
        }
    }
}

/// Handles `--help` and `--version`, which need neither config nor logging.
/// Returns `false` for every other command.
pub(crate) fn print_info(args: &[String]) -> bool {
    match args.first().map(String::as_str) {
        Some("--help" | "-h" | "help") => {
            print_usage();
            true
        }
        Some("--version" | "-V" | "version") => {
            println!("budgetadvisor {}", env!("CARGO_PKG_VERSION"));
            true
        }
        _ => false,
    }
}

fn print_usage() {
    println!("BudgetAdvisor — monthly budget and expense checker");
    println!();
    println!("Usage: budgetadvisor [command]");
    println!();
    println!("Commands:");
    println!("  (none)                        Launch interactive TUI");
    println!("  summary [amounts]             Print totals, distribution and advice");
    println!("  export [path] [amounts]       Export the expense distribution to CSV");
    println!("  --help, -h                    Show this help");
    println!("  --version, -V                 Show version");
    println!();
    println!("Amounts:");
    println!("  --budget <n>                  Total monthly budget");
    for cat in ExpenseCategory::all() {
        let flag = format!("--{} <n>", cat.flag());
        println!("  {flag:<30}{}", cat.as_str());
    }
}

/// Parse `--budget <n>` and `--<category> <n>` pairs. Any other argument is
/// returned as a positional.
pub(crate) fn parse_inputs(args: &[String]) -> Result<(Budget, ExpenseLedger, Vec<String>)> {
    let mut budget = Budget::default();
    let mut ledger = ExpenseLedger::new();
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        let Some(name) = arg.strip_prefix("--") else {
            positional.push(arg.clone());
            continue;
        };
        let value = iter
            .next()
            .with_context(|| format!("Missing value for --{name}"))?;
        let amount = parse_amount(value).with_context(|| format!("Bad value for --{name}"))?;

        if name == "budget" {
            budget = Budget::new(amount);
        } else if let Some(category) = ExpenseCategory::parse(name) {
            ledger.set(category, amount);
        } else {
            anyhow::bail!("Unknown option: --{name}");
        }
    }

    Ok((budget, ledger, positional))
}

fn reject_extra(positional: &[String], allowed: usize) -> Result<()> {
    if let Some(arg) = positional.get(allowed) {
        anyhow::bail!("Unexpected argument: {arg}");
    }
    Ok(())
}

fn cli_summary(args: &[String]) -> Result<()> {
    let (budget, ledger, positional) = parse_inputs(args)?;
    reject_extra(&positional, 0)?;
    print!("{}", render_summary(&budget, &ledger));
    Ok(())
}

pub(crate) fn render_summary(budget: &Budget, ledger: &ExpenseLedger) -> String {
    let summary = BudgetSummary::new(budget, ledger);
    let mut out = String::new();

    out.push_str("Budget Summary\n");
    out.push_str(&format!("{}\n", "─".repeat(40)));
    out.push_str(&format!("  Total Budget:      {}\n", summary.budget_display()));
    out.push_str(&format!(
        "  Total Expenses:    {}\n",
        summary.total_expenses_display()
    ));
    out.push_str(&format!(
        "  Remaining Budget:  {}\n",
        summary.remaining_display()
    ));

    if summary.has_expenses() {
        out.push('\n');
        out.push_str("Expense Distribution:\n");
        for slice in &summary.slices {
            out.push_str(&format!(
                "  {:<24} {:>12} {:>7}\n",
                slice.category.as_str(),
                format_amount(slice.amount),
                slice.share_label()
            ));
        }
    }

    out.push('\n');
    out.push_str(&format!(
        "Financial Advice:\n  {}\n",
        request_advice(budget, ledger).message()
    ));
    out
}

fn cli_export(args: &[String], config: &Config) -> Result<()> {
    let (budget, ledger, positional) = parse_inputs(args)?;
    reject_extra(&positional, 1)?;

    let path = positional.first().map(|p| shellexpand(p)).unwrap_or_else(|| {
        let month = chrono::Local::now().format("%Y-%m").to_string();
        default_export_path(&config.export_dir, &month)
    });

    let summary = BudgetSummary::new(&budget, &ledger);
    let count = export_to_csv(&path, &summary)?;
    println!("Exported {count} categories to {}", path.display());
    Ok(())
}

#[cfg(test)]
#[path = "cli_tests.rs"]
mod cli_tests;
