//! Money formatting.

use rust_decimal::{Decimal, RoundingStrategy};
use serde::{Deserialize, Serialize};

/// How money is written: symbol prefix and thousands separator, no decimals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub symbol: String,
    pub thousands_separator: char,
}

impl Default for CurrencyFormat {
    fn default() -> Self {
        Self {
            symbol: "R$".to_string(),
            thousands_separator: '.',
        }
    }
}

impl CurrencyFormat {
    /// Create a format from a symbol and a thousands separator.
    pub fn new(symbol: impl Into<String>, thousands_separator: char) -> Self {
        Self {
            symbol: symbol.into(),
            thousands_separator,
        }
    }

    /// `20780` -> `R$ 20.780`.
    pub fn format(&self, value: Decimal) -> String {
        if self.symbol.is_empty() {
            self.format_number(value)
        } else {
            format!("{} {}", self.symbol, self.format_number(value))
        }
    }

    /// Grouped whole number without the symbol.
    pub fn format_number(&self, value: Decimal) -> String {
        let rounded = value.round_dp_with_strategy(0, RoundingStrategy::MidpointAwayFromZero);
        let digits = rounded.abs().trunc().to_string();

        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (i, ch) in digits.chars().enumerate() {
            if i > 0 && (digits.len() - i) % 3 == 0 {
                grouped.push(self.thousands_separator);
            }
            grouped.push(ch);
        }

        if rounded.is_sign_negative() && !rounded.is_zero() {
            format!("-{}", grouped)
        } else {
            grouped
        }
    }
}
