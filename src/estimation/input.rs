//! Estimate request values.

use std::borrow::Cow;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::rates::{ComplexityLevel, ExperienceLevel, ProjectType, UrgencyLevel};
use crate::error::{EstimateError, Result};

/// Known add-on features with a display label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExtraKind {
    Seo,
    Cms,
    Analytics,
    Responsive,
    Api,
    Maintenance,
}

impl ExtraKind {
    /// Resolve a raw key; `None` for keys outside the catalogue.
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "seo" => Some(ExtraKind::Seo),
            "cms" => Some(ExtraKind::Cms),
            "analytics" => Some(ExtraKind::Analytics),
            "responsive" => Some(ExtraKind::Responsive),
            "api" => Some(ExtraKind::Api),
            "maintenance" => Some(ExtraKind::Maintenance),
            _ => None,
        }
    }

    /// Label shown in breakdowns.
    pub fn label(&self) -> &'static str {
        match self {
            ExtraKind::Seo => "SEO Optimization",
            ExtraKind::Cms => "CMS",
            ExtraKind::Analytics => "Analytics",
            ExtraKind::Responsive => "Premium Responsive Design",
            ExtraKind::Api => "API Integration",
            ExtraKind::Maintenance => "3 Months Maintenance",
        }
    }
}

/// Display label for an extra key; unknown keys are shown as-is.
pub fn extra_label(key: &str) -> Cow<'static, str> {
    match ExtraKind::from_key(key) {
        Some(kind) => Cow::Borrowed(kind.label()),
        None => Cow::Owned(key.to_string()),
    }
}

/// A flat-fee add-on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Extra {
    pub name: String,
    pub price: Decimal,
}

impl Extra {
    /// Create an add-on from its key and flat price.
    pub fn new(name: impl Into<String>, price: Decimal) -> Self {
        Self {
            name: name.into(),
            price,
        }
    }
}

impl std::str::FromStr for Extra {
    type Err = EstimateError;

    /// Parse `key=price`.
    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let (name, price) = s.split_once('=').ok_or_else(|| {
            EstimateError::invalid("extra", format!("expected key=price, got '{}'", s))
        })?;

        let name = name.trim();
        if name.is_empty() {
            return Err(EstimateError::invalid("extra", "empty extra name"));
        }

        let price: Decimal = price.trim().parse().map_err(|_| {
            EstimateError::invalid("extra", format!("price for '{}' is not a number", name))
        })?;

        Ok(Extra::new(name, price))
    }
}

/// One calculation request.
///
/// Built fresh per request by the caller; optional fields carry their defaults.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EstimateInput {
    pub project_type: Option<ProjectType>,
    #[serde(default)]
    pub complexity: ComplexityLevel,
    #[serde(default)]
    pub extras: Vec<Extra>,
    pub hourly_rate: Decimal,
    #[serde(default)]
    pub experience_level: ExperienceLevel,
    #[serde(default)]
    pub urgency: UrgencyLevel,
}

impl EstimateInput {
    /// Input with defaults for everything but the project type and rate.
    pub fn new(project_type: ProjectType, hourly_rate: Decimal) -> Self {
        Self {
            project_type: Some(project_type),
            complexity: ComplexityLevel::default(),
            extras: Vec::new(),
            hourly_rate,
            experience_level: ExperienceLevel::default(),
            urgency: UrgencyLevel::default(),
        }
    }

    /// Set the complexity tier.
    pub fn with_complexity(mut self, complexity: ComplexityLevel) -> Self {
        self.complexity = complexity;
        self
    }

    /// Set the experience level.
    pub fn with_experience(mut self, level: ExperienceLevel) -> Self {
        self.experience_level = level;
        self
    }

    /// Set the urgency level.
    pub fn with_urgency(mut self, urgency: UrgencyLevel) -> Self {
        self.urgency = urgency;
        self
    }

    /// Append an add-on.
    pub fn with_extra(mut self, extra: Extra) -> Self {
        self.extras.push(extra);
        self
    }

    /// Check the request before any arithmetic happens.
    pub fn validate(&self) -> Result<ProjectType> {
        let project = self.project_type.ok_or_else(|| {
            EstimateError::invalid("project type", "a project type must be selected")
        })?;

        if self.hourly_rate <= Decimal::ZERO {
            return Err(EstimateError::invalid(
                "hourly rate",
                format!("must be positive, got {}", self.hourly_rate),
            ));
        }

        if let Some(extra) = self.extras.iter().find(|e| e.price < Decimal::ZERO) {
            return Err(EstimateError::invalid(
                "extra",
                format!("price for '{}' must not be negative", extra.name),
            ));
        }

        Ok(project)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_extra_label_fallback() {
        assert_eq!(extra_label("seo"), "SEO Optimization");
        assert_eq!(extra_label("maintenance"), "3 Months Maintenance");
        assert_eq!(extra_label("blog"), "blog");
    }

    #[test]
    fn test_parse_extra() {
        let extra: Extra = "seo=500".parse().unwrap();
        assert_eq!(extra, Extra::new("seo", dec!(500)));

        assert!("seo".parse::<Extra>().is_err());
        assert!("=500".parse::<Extra>().is_err());
        assert!("seo=lots".parse::<Extra>().is_err());
    }

    #[test]
    fn test_validate_requires_project_type() {
        let mut input = EstimateInput::new(ProjectType::Landing, dec!(75));
        input.project_type = None;

        let err = input.validate().unwrap_err();
        assert!(matches!(
            err,
            EstimateError::InvalidInput { ref field, .. } if field == "project type"
        ));
    }

    #[test]
    fn test_validate_rejects_non_positive_rate() {
        assert!(EstimateInput::new(ProjectType::Landing, dec!(0)).validate().is_err());
        assert!(EstimateInput::new(ProjectType::Landing, dec!(-10)).validate().is_err());
        assert!(EstimateInput::new(ProjectType::Landing, dec!(0.5)).validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_negative_extra() {
        let input = EstimateInput::new(ProjectType::Website, dec!(75))
            .with_extra(Extra::new("cms", dec!(-1)));
        assert!(input.validate().is_err());
    }

    #[test]
    fn test_defaults() {
        let input = EstimateInput::new(ProjectType::Webapp, dec!(90));
        assert_eq!(input.complexity, ComplexityLevel::Medium);
        assert_eq!(input.experience_level, ExperienceLevel::Pleno);
        assert_eq!(input.urgency, UrgencyLevel::Normal);
        assert!(input.extras.is_empty());
    }
}
