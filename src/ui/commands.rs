use std::collections::HashMap;
use std::sync::LazyLock;

use super::app::{App, Field};
use crate::export::{default_export_path, export_to_csv, shellexpand};
use crate::models::ExpenseCategory;
use crate::money::{format_amount, parse_amount};

pub(crate) struct Command {
    pub(crate) description: &'static str,
    pub(crate) run: fn(&str, &mut App) -> anyhow::Result<()>,
}

macro_rules! register_command {
    ($name:expr, $desc:expr, $func:expr, $registry:expr) => {{
        $registry.insert(
            $name,
            Command {
                description: $desc,
                run: $func,
            },
        );
    }};
}

pub(crate) static COMMANDS: LazyLock<HashMap<&str, Command>> = LazyLock::new(|| {
    let mut r: HashMap<&str, Command> = HashMap::new();

    register_command!("q", "Quit BudgetAdvisor", cmd_quit, r);
    register_command!("quit", "Quit BudgetAdvisor", cmd_quit, r);
    register_command!("help", "Show available commands", cmd_help, r);
    register_command!("h", "Show available commands", cmd_help, r);
    register_command!(
        "budget",
        "Set monthly budget (e.g. :budget 2500)",
        cmd_budget,
        r
    );
    register_command!("b", "Set monthly budget (e.g. :b 2500)", cmd_budget, r);
    register_command!(
        "set",
        "Set an expense (e.g. :set rent 1200)",
        cmd_set,
        r
    );
    register_command!("s", "Set an expense (e.g. :s dining 90)", cmd_set, r);
    register_command!("advice", "Get financial advice", cmd_advice, r);
    register_command!("a", "Get financial advice", cmd_advice, r);
    register_command!("reset", "Clear budget and all expenses", cmd_reset, r);
    register_command!(
        "export",
        "Export expenses to CSV (e.g. :export ~/budget.csv)",
        cmd_export,
        r
    );

    r
});

pub(crate) fn handle_command(input: &str, app: &mut App) -> anyhow::Result<()> {
    let trimmed = input.trim();
    let mut parts = trimmed.splitn(2, ' ');
    let cmd_name = parts.next().unwrap_or("");
    let args = parts.next().unwrap_or("").trim();

    if let Some(cmd) = COMMANDS.get(cmd_name) {
        tracing::debug!(command = cmd_name, "running command");
        (cmd.run)(args, app)?;
    } else {
        let suggestion = find_closest(cmd_name);
        app.set_status(format!(
            "Unknown command: :{cmd_name}. Did you mean :{suggestion}?"
        ));
    }

    Ok(())
}

fn find_closest(input: &str) -> String {
    COMMANDS
        .keys()
        .filter(|k| k.len() > 1) // skip single-letter aliases for suggestions
        .min_by_key(|k| levenshtein(input, k))
        .unwrap_or(&"help")
        .to_string()
}

fn levenshtein(a: &str, b: &str) -> usize {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    let mut prev: Vec<usize> = (0..=b.len()).collect();
    let mut curr = vec![0; b.len() + 1];

    for i in 1..=a.len() {
        curr[0] = i;
        for j in 1..=b.len() {
            let cost = if a[i - 1] == b[j - 1] { 0 } else { 1 };
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[b.len()]
}

// ── Command implementations ──────────────────────────────────

fn cmd_quit(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.running = false;
    Ok(())
}

fn cmd_help(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.show_help = true;
    Ok(())
}

fn cmd_budget(args: &str, app: &mut App) -> anyhow::Result<()> {
    if args.is_empty() {
        app.set_status("Usage: :budget <amount>");
        return Ok(());
    }

    match parse_amount(args) {
        Ok(amount) => {
            app.set_field(Field::Budget, amount);
            app.field_index = 0;
            app.set_status(format!("Budget set to {}", format_amount(amount)));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_set(args: &str, app: &mut App) -> anyhow::Result<()> {
    // Last token is the amount, everything before is the category name
    let parts: Vec<&str> = args.rsplitn(2, ' ').collect();
    if parts.len() < 2 {
        let names: Vec<&str> = ExpenseCategory::all().iter().map(|c| c.flag()).collect();
        app.set_status(format!(
            "Usage: :set <category> <amount>. Categories: {}",
            names.join(", ")
        ));
        return Ok(());
    }

    let amount_str = parts[0];
    let category_name = parts[1];

    let Some(category) = ExpenseCategory::parse(category_name) else {
        app.set_status(format!("Category '{category_name}' not found"));
        return Ok(());
    };

    match parse_amount(amount_str) {
        Ok(amount) => {
            app.set_field(Field::Expense(category), amount);
            app.field_index = category.index() + 1;
            app.set_status(format!("{category} set to {}", format_amount(amount)));
        }
        Err(e) => app.set_status(e.to_string()),
    }
    Ok(())
}

fn cmd_advice(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.request_advice();
    Ok(())
}

fn cmd_reset(_args: &str, app: &mut App) -> anyhow::Result<()> {
    app.reset();
    app.set_status("Form cleared");
    Ok(())
}

fn cmd_export(args: &str, app: &mut App) -> anyhow::Result<()> {
    let path = if args.is_empty() {
        default_export_path(&app.export_dir, &app.current_month)
    } else {
        shellexpand(args)
    };

    // Report write failures in the status bar rather than quitting the TUI
    match export_to_csv(&path, &app.summary()) {
        Ok(count) => app.set_status(format!(
            "Exported {count} categories to {}",
            path.display()
        )),
        Err(e) => {
            tracing::warn!(error = %e, "export failed");
            app.set_status(format!("Export failed: {e}"));
        }
    }
    Ok(())
}
