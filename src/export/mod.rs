use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

use crate::evaluate::BudgetSummary;

/// Write the expense distribution plus totals to a CSV file.
/// Returns the number of category rows written.
pub(crate) fn export_to_csv(path: &Path, summary: &BudgetSummary) -> Result<usize> {
    let mut wtr = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create export file: {}", path.display()))?;

    wtr.write_record(["Category", "Amount", "Share"])?;
    for slice in &summary.slices {
        wtr.write_record([
            slice.category.as_str().to_string(),
            format!("{:.2}", slice.amount.round_dp(2)),
            slice.share_label(),
        ])?;
    }

    let totals = [
        ("Total Expenses", summary.total_expenses()),
        ("Budget", summary.budget),
        ("Remaining", summary.remaining()),
    ];
    for (label, amount) in totals {
        wtr.write_record([label.to_string(), format!("{:.2}", amount.round_dp(2)), String::new()])?;
    }

    wtr.flush()
        .with_context(|| format!("Failed to write export file: {}", path.display()))?;
    tracing::info!(path = %path.display(), "exported expense distribution");
    Ok(summary.slices.len())
}

/// Expand a leading `~/` to the user's home directory.
pub(crate) fn shellexpand(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        let home = directories::UserDirs::new()
            .map(|d| d.home_dir().to_path_buf())
            .unwrap_or_else(|| PathBuf::from("."));
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

/// `<dir>/budgetadvisor-<YYYY-MM>.csv`
pub(crate) fn default_export_path(dir: &Path, month: &str) -> PathBuf {
    dir.join(format!("budgetadvisor-{month}.csv"))
}
