use rust_decimal::Decimal;
use std::str::FromStr;

/// Largest amount any single field accepts. Eight fields at this value still
/// sum and scale to percentages well inside `Decimal`'s range.
pub(crate) const MAX_AMOUNT: Decimal = Decimal::from_parts(0xA4C6_8000, 0x0003_8D7E, 0, false, 0);

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub(crate) enum AmountError {
    #[error("Invalid amount: '{0}'")]
    Invalid(String),
    #[error("Amount too large: '{0}' (max $1,000,000,000,000,000.00)")]
    TooLarge(String),
}

/// Parse a user-entered amount. Accepts `1234.5`, `$1,234.50` and blanks (zero).
/// Negative values are clamped to zero, matching the form's minimum of 0.
/// Values above [`MAX_AMOUNT`] are rejected.
pub(crate) fn parse_amount(s: &str) -> Result<Decimal, AmountError> {
    let cleaned = s.trim().replace(['$', ','], "");
    let cleaned = cleaned.trim();
    if cleaned.is_empty() {
        return Ok(Decimal::ZERO);
    }
    let val =
        Decimal::from_str(cleaned).map_err(|_| AmountError::Invalid(s.trim().to_string()))?;
    if val > MAX_AMOUNT {
        return Err(AmountError::TooLarge(s.trim().to_string()));
    }
    Ok(clamp_amount(val))
}

/// Clamp into `0..=MAX_AMOUNT`.
pub(crate) fn clamp_amount(val: Decimal) -> Decimal {
    val.clamp(Decimal::ZERO, MAX_AMOUNT)
}

/// Format a decimal amount with thousand separators and 2 decimal places.
/// e.g. `1234567.89` → `"$1,234,567.89"`, `-50` → `"-$50.00"`
pub(crate) fn format_amount(val: Decimal) -> String {
    let abs = val.abs().round_dp(2);
    let formatted = format!("{abs:.2}");
    let mut parts = formatted.split('.');
    let int_part = parts.next().unwrap_or("0");
    let dec_part = parts.next().unwrap_or("00");

    let with_commas: String = int_part
        .as_bytes()
        .rchunks(3)
        .rev()
        .map(|chunk| std::str::from_utf8(chunk).unwrap_or(""))
        .collect::<Vec<_>>()
        .join(",");

    if val < Decimal::ZERO && !abs.is_zero() {
        format!("-${with_commas}.{dec_part}")
    } else {
        format!("${with_commas}.{dec_part}")
    }
}
