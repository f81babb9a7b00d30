//! Pricing engine for freelance project estimates.
//!
//! Estimates are built from:
//! - Base hours per project type
//! - Complexity and experience multipliers on effort
//! - An urgency multiplier on labor cost
//! - Flat-fee extras added on top

mod cost;
mod input;
mod rates;
mod time;
mod value;

pub use cost::{extras_cost, labor_cost, total_cost};
pub use input::{EstimateInput, Extra, ExtraKind, extra_label};
pub use rates::{
    ComplexityLevel, ExperienceLevel, PriceRange, ProjectType, RateTable, UrgencyLevel,
};
pub use time::{HOURS_PER_DAY, suggested_deadline_days, total_hours};
pub use value::{BAND_HIGH, BAND_LOW, effective_hourly_rate, price_band};

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::{EstimateError, Result};

/// Amount column of a breakdown line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineAmount {
    Money(Decimal),
    /// Informational text for lines that add no charge.
    Note(String),
}

/// A single breakdown line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineItem {
    pub label: String,
    pub amount: LineAmount,
}

impl LineItem {
    fn money(label: impl Into<String>, amount: Decimal) -> Self {
        Self {
            label: label.into(),
            amount: LineAmount::Money(amount),
        }
    }

    fn note(label: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            amount: LineAmount::Note(text.into()),
        }
    }
}

/// A priced, itemized estimate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Estimate {
    pub project_type: ProjectType,
    pub complexity: ComplexityLevel,
    pub experience_level: ExperienceLevel,
    pub urgency: UrgencyLevel,
    pub total_hours: u32,
    /// Labor cost after urgency, before extras.
    pub base_price: Decimal,
    pub extras_price: Decimal,
    pub total_price: Decimal,
    pub price_range: PriceRange,
    pub suggested_deadline_days: u32,
    pub effective_hourly_rate: Decimal,
    pub line_items: Vec<LineItem>,
}

/// Stateless engine over a fixed rate table.
#[derive(Debug, Clone, Default)]
pub struct PricingEngine {
    table: RateTable,
}

impl PricingEngine {
    /// Create an engine over a validated rate table.
    pub fn new(table: RateTable) -> Self {
        Self { table }
    }

    /// Get the rate table.
    pub fn table(&self) -> &RateTable {
        &self.table
    }

    /// Price an input against this engine's table.
    pub fn estimate(&self, input: &EstimateInput) -> Result<Estimate> {
        estimate(input, &self.table)
    }
}

/// Price an input against a rate table.
///
/// Fails with [`EstimateError::InvalidInput`] before any arithmetic when the
/// project type is missing or the hourly rate is not positive.
pub fn estimate(input: &EstimateInput, table: &RateTable) -> Result<Estimate> {
    let project = input.validate()?;

    let base_hours = lookup(table.base_hours(project), "project type", project)?;
    let complexity = lookup(
        table.complexity_multiplier(input.complexity),
        "complexity",
        input.complexity,
    )?;
    let experience = lookup(
        table.experience_multiplier(input.experience_level),
        "experience level",
        input.experience_level,
    )?;
    let rush = lookup(table.rush_multiplier(input.urgency), "urgency", input.urgency)?;

    let total_hours = total_hours(base_hours, &[complexity, experience])?;
    let base_price = labor_cost(total_hours, input.hourly_rate, rush)?;
    let extras_price = extras_cost(&input.extras)?;
    let total_price = total_cost(base_price, extras_price)?;

    let estimate = Estimate {
        project_type: project,
        complexity: input.complexity,
        experience_level: input.experience_level,
        urgency: input.urgency,
        total_hours,
        base_price,
        extras_price,
        total_price,
        price_range: price_band(total_price)?,
        suggested_deadline_days: suggested_deadline_days(total_hours),
        effective_hourly_rate: effective_hourly_rate(total_price, total_hours),
        line_items: line_items(input, total_hours, base_price, rush),
    };

    tracing::debug!(
        project = %project,
        hours = total_hours,
        base = %base_price,
        extras = %extras_price,
        total = %total_price,
        "Computed estimate"
    );

    Ok(estimate)
}

fn lookup<T, K: std::fmt::Display>(value: Option<T>, field: &str, key: K) -> Result<T> {
    value.ok_or_else(|| {
        EstimateError::invalid(field, format!("'{}' has no entry in the rate table", key))
    })
}

fn line_items(
    input: &EstimateInput,
    total_hours: u32,
    base_price: Decimal,
    rush_multiplier: Decimal,
) -> Vec<LineItem> {
    let mut items = Vec::with_capacity(input.extras.len() + 2);

    items.push(LineItem::money(
        format!("Development ({}h)", total_hours),
        base_price,
    ));

    for extra in &input.extras {
        items.push(LineItem::money(extra_label(&extra.name), extra.price));
    }

    // Already folded into the base price; documents the multiplier only.
    if input.urgency != UrgencyLevel::Normal {
        items.push(LineItem::note(
            format!(
                "{} ({})",
                input.urgency.display_name(),
                surcharge_percent(rush_multiplier)
            ),
            "Included in base price",
        ));
    }

    items
}

/// `1.3` -> `+30%`.
fn surcharge_percent(multiplier: Decimal) -> String {
    let percent = match (multiplier - Decimal::ONE).checked_mul(Decimal::ONE_HUNDRED) {
        Some(percent) => percent.normalize(),
        None => return format!("x{}", multiplier),
    };
    if percent.is_sign_negative() {
        format!("{}%", percent)
    } else {
        format!("+{}%", percent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn engine() -> PricingEngine {
        PricingEngine::new(RateTable::default())
    }

    #[test]
    fn test_landing_defaults() {
        let input = EstimateInput::new(ProjectType::Landing, dec!(75));
        let est = engine().estimate(&input).unwrap();

        assert_eq!(est.total_hours, 8);
        assert_eq!(est.base_price, dec!(600));
        assert_eq!(est.extras_price, Decimal::ZERO);
        assert_eq!(est.total_price, dec!(600));
        assert_eq!(est.price_range, PriceRange::new(dec!(480), dec!(720)));
        assert_eq!(est.suggested_deadline_days, 2);
        assert_eq!(est.effective_hourly_rate, dec!(75));
        assert_eq!(
            est.line_items,
            vec![LineItem::money("Development (8h)", dec!(600))]
        );
    }

    #[test]
    fn test_ecommerce_rush_with_extra() {
        let input = EstimateInput::new(ProjectType::Ecommerce, dec!(100))
            .with_complexity(ComplexityLevel::Complex)
            .with_experience(ExperienceLevel::Senior)
            .with_urgency(UrgencyLevel::Rush)
            .with_extra(Extra::new("seo", dec!(500)));
        let est = engine().estimate(&input).unwrap();

        assert_eq!(est.total_hours, 156);
        assert_eq!(est.base_price, dec!(20280));
        assert_eq!(est.extras_price, dec!(500));
        assert_eq!(est.total_price, dec!(20780));
        assert_eq!(est.price_range.min, dec!(16624));
        assert_eq!(est.price_range.max, dec!(24936));
        assert_eq!(est.suggested_deadline_days, 26);
        assert_eq!(
            est.line_items,
            vec![
                LineItem::money("Development (156h)", dec!(20280)),
                LineItem::money("SEO Optimization", dec!(500)),
                LineItem::note("Rush (+30%)", "Included in base price"),
            ]
        );
    }

    #[test]
    fn test_missing_project_type() {
        let mut input = EstimateInput::new(ProjectType::Landing, dec!(75));
        input.project_type = None;

        let err = estimate(&input, &RateTable::default()).unwrap_err();
        assert!(matches!(err, EstimateError::InvalidInput { .. }));
    }

    #[test]
    fn test_unknown_extra_keeps_raw_key_in_order() {
        let input = EstimateInput::new(ProjectType::Website, dec!(80))
            .with_extra(Extra::new("blog", dec!(300)))
            .with_extra(Extra::new("cms", dec!(900)));
        let est = engine().estimate(&input).unwrap();

        let labels: Vec<&str> = est.line_items.iter().map(|i| i.label.as_str()).collect();
        assert_eq!(labels, vec!["Development (30h)", "blog", "CMS"]);
        assert_eq!(est.extras_price, dec!(1200));
    }

    #[test]
    fn test_emergency_note() {
        let input = EstimateInput::new(ProjectType::Mobileapp, dec!(120))
            .with_urgency(UrgencyLevel::Emergency);
        let est = engine().estimate(&input).unwrap();

        let last = est.line_items.last().unwrap();
        assert_eq!(last.label, "Emergency (+60%)");
        assert_eq!(last.amount, LineAmount::Note("Included in base price".to_string()));
        assert_eq!(est.base_price, dec!(38400));
    }

    #[test]
    fn test_surcharge_percent() {
        assert_eq!(surcharge_percent(dec!(1.3)), "+30%");
        assert_eq!(surcharge_percent(dec!(1.6)), "+60%");
        assert_eq!(surcharge_percent(dec!(1.25)), "+25%");
        assert_eq!(surcharge_percent(dec!(0.9)), "-10%");
    }

    #[test]
    fn test_huge_rate_is_invalid_input() {
        let input = EstimateInput::new(ProjectType::Landing, Decimal::MAX);
        let err = engine().estimate(&input).unwrap_err();
        assert_eq!(err, EstimateError::invalid("hourly rate", "amount out of range"));
    }

    #[test]
    fn test_huge_extras_are_invalid_input() {
        let input = EstimateInput::new(ProjectType::Landing, dec!(75))
            .with_extra(Extra::new("seo", Decimal::MAX))
            .with_extra(Extra::new("cms", Decimal::MAX));
        let err = engine().estimate(&input).unwrap_err();
        assert_eq!(err, EstimateError::invalid("extra", "amount out of range"));
    }

    #[test]
    fn test_total_beyond_band_range_is_invalid_input() {
        // Labor fits, but 1.2x the total does not.
        let rate = Decimal::MAX / dec!(8);
        let input = EstimateInput::new(ProjectType::Landing, rate.floor());
        let err = engine().estimate(&input).unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidInput { ref field, .. } if field == "total price"
        ));
    }

    #[test]
    fn test_table_without_project_entry() {
        let mut table = RateTable::default();
        table.remove_base_hours(ProjectType::Webapp);

        let input = EstimateInput::new(ProjectType::Webapp, dec!(90));
        let err = estimate(&input, &table).unwrap_err();
        assert_eq!(
            err,
            EstimateError::invalid("project type", "'webapp' has no entry in the rate table")
        );

        let input = EstimateInput::new(ProjectType::Website, dec!(90));
        assert!(estimate(&input, &table).is_ok());
    }
}
