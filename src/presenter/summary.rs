//! Plain-text rendering of an estimate.

use std::fmt::Write;

use super::currency::CurrencyFormat;
use crate::estimation::{Estimate, LineAmount};

/// Text shown in the amount column of a breakdown line.
pub fn amount_text(amount: &LineAmount, currency: &CurrencyFormat) -> String {
    match amount {
        LineAmount::Money(value) => currency.format(*value),
        LineAmount::Note(text) => text.clone(),
    }
}

/// Breakdown rows, ending with the total.
pub fn breakdown_rows(estimate: &Estimate, currency: &CurrencyFormat) -> Vec<(String, String)> {
    let mut rows: Vec<(String, String)> = estimate
        .line_items
        .iter()
        .map(|item| (item.label.clone(), amount_text(&item.amount, currency)))
        .collect();
    rows.push(("Total".to_string(), currency.format(estimate.total_price)));
    rows
}

/// Multi-line summary of an estimate.
pub fn render_estimate(estimate: &Estimate, currency: &CurrencyFormat) -> String {
    let mut out = String::new();

    let _ = writeln!(out, "Estimated price:     {}", currency.format(estimate.total_price));
    let _ = writeln!(
        out,
        "Price range:         {} to {}",
        currency.format(estimate.price_range.min),
        currency.format(estimate.price_range.max)
    );
    let _ = writeln!(out, "Estimated time:      {} hours", estimate.total_hours);
    let _ = writeln!(out, "Suggested deadline:  {} days", estimate.suggested_deadline_days);
    let _ = writeln!(
        out,
        "Effective rate:      {}/hour",
        currency.format(estimate.effective_hourly_rate)
    );
    let _ = writeln!(out);
    let _ = writeln!(out, "Breakdown:");

    let rows = breakdown_rows(estimate, currency);
    let width = rows.iter().map(|(label, _)| label.chars().count()).max().unwrap_or(0);
    for (label, amount) in rows {
        let _ = writeln!(out, "  {:width$}  {}", label, amount, width = width);
    }

    out
}
