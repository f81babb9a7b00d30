//! Rate table and the closed enumerations it is keyed by.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, EstimateError};

/// Category of project being estimated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProjectType {
    Landing,
    Website,
    Ecommerce,
    Webapp,
    Mobileapp,
}

impl ProjectType {
    pub const ALL: [ProjectType; 5] = [
        ProjectType::Landing,
        ProjectType::Website,
        ProjectType::Ecommerce,
        ProjectType::Webapp,
        ProjectType::Mobileapp,
    ];

    /// Stable lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ProjectType::Landing => "landing",
            ProjectType::Website => "website",
            ProjectType::Ecommerce => "ecommerce",
            ProjectType::Webapp => "webapp",
            ProjectType::Mobileapp => "mobileapp",
        }
    }

    /// Name shown to clients.
    pub fn display_name(&self) -> &'static str {
        match self {
            ProjectType::Landing => "Landing Page",
            ProjectType::Website => "Institutional Website",
            ProjectType::Ecommerce => "E-commerce",
            ProjectType::Webapp => "Web Application",
            ProjectType::Mobileapp => "Mobile App",
        }
    }
}

impl std::str::FromStr for ProjectType {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "landing" => Ok(ProjectType::Landing),
            "website" => Ok(ProjectType::Website),
            "ecommerce" => Ok(ProjectType::Ecommerce),
            "webapp" => Ok(ProjectType::Webapp),
            "mobileapp" => Ok(ProjectType::Mobileapp),
            _ => Err(EstimateError::invalid(
                "project type",
                format!(
                    "unknown value '{}', expected 'landing', 'website', 'ecommerce', \
                     'webapp', or 'mobileapp'",
                    s
                ),
            )),
        }
    }
}

impl fmt::Display for ProjectType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Complexity tier of the project.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ComplexityLevel {
    Simple,
    #[default]
    Medium,
    Complex,
    Enterprise,
}

impl ComplexityLevel {
    pub const ALL: [ComplexityLevel; 4] = [
        ComplexityLevel::Simple,
        ComplexityLevel::Medium,
        ComplexityLevel::Complex,
        ComplexityLevel::Enterprise,
    ];

    /// Stable lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "simple",
            ComplexityLevel::Medium => "medium",
            ComplexityLevel::Complex => "complex",
            ComplexityLevel::Enterprise => "enterprise",
        }
    }

    /// Name shown to clients.
    pub fn display_name(&self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "Simple",
            ComplexityLevel::Medium => "Medium",
            ComplexityLevel::Complex => "Complex",
            ComplexityLevel::Enterprise => "Enterprise",
        }
    }
}

impl std::str::FromStr for ComplexityLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "simple" => Ok(ComplexityLevel::Simple),
            "medium" => Ok(ComplexityLevel::Medium),
            "complex" => Ok(ComplexityLevel::Complex),
            "enterprise" => Ok(ComplexityLevel::Enterprise),
            _ => Err(EstimateError::invalid(
                "complexity",
                format!(
                    "unknown value '{}', expected 'simple', 'medium', 'complex', or 'enterprise'",
                    s
                ),
            )),
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Seniority of the person doing the work.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Junior,
    /// Mid-level.
    #[default]
    Pleno,
    Senior,
    Specialist,
}

impl ExperienceLevel {
    pub const ALL: [ExperienceLevel; 4] = [
        ExperienceLevel::Junior,
        ExperienceLevel::Pleno,
        ExperienceLevel::Senior,
        ExperienceLevel::Specialist,
    ];

    /// Stable lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "junior",
            ExperienceLevel::Pleno => "pleno",
            ExperienceLevel::Senior => "senior",
            ExperienceLevel::Specialist => "specialist",
        }
    }

    /// Name shown to clients.
    pub fn display_name(&self) -> &'static str {
        match self {
            ExperienceLevel::Junior => "Junior",
            ExperienceLevel::Pleno => "Mid-level",
            ExperienceLevel::Senior => "Senior",
            ExperienceLevel::Specialist => "Specialist",
        }
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "junior" => Ok(ExperienceLevel::Junior),
            "pleno" | "mid" => Ok(ExperienceLevel::Pleno),
            "senior" => Ok(ExperienceLevel::Senior),
            "specialist" => Ok(ExperienceLevel::Specialist),
            _ => Err(EstimateError::invalid(
                "experience level",
                format!(
                    "unknown value '{}', expected 'junior', 'pleno', 'senior', or 'specialist'",
                    s
                ),
            )),
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// How compressed the delivery timeline is.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum UrgencyLevel {
    #[default]
    Normal,
    Rush,
    Emergency,
}

impl UrgencyLevel {
    pub const ALL: [UrgencyLevel; 3] = [
        UrgencyLevel::Normal,
        UrgencyLevel::Rush,
        UrgencyLevel::Emergency,
    ];

    /// Stable lowercase key.
    pub fn as_str(&self) -> &'static str {
        match self {
            UrgencyLevel::Normal => "normal",
            UrgencyLevel::Rush => "rush",
            UrgencyLevel::Emergency => "emergency",
        }
    }

    /// Name shown to clients.
    pub fn display_name(&self) -> &'static str {
        match self {
            UrgencyLevel::Normal => "Normal",
            UrgencyLevel::Rush => "Rush",
            UrgencyLevel::Emergency => "Emergency",
        }
    }
}

impl std::str::FromStr for UrgencyLevel {
    type Err = EstimateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "normal" => Ok(UrgencyLevel::Normal),
            "rush" => Ok(UrgencyLevel::Rush),
            "emergency" => Ok(UrgencyLevel::Emergency),
            _ => Err(EstimateError::invalid(
                "urgency",
                format!(
                    "unknown value '{}', expected 'normal', 'rush', or 'emergency'",
                    s
                ),
            )),
        }
    }
}

impl fmt::Display for UrgencyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Inclusive money range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: Decimal,
    pub max: Decimal,
}

impl PriceRange {
    /// Create a range from its bounds.
    pub fn new(min: Decimal, max: Decimal) -> Self {
        Self { min, max }
    }

    /// Check whether a value lies inside the range, bounds included.
    pub fn contains(&self, value: Decimal) -> bool {
        self.min <= value && value <= self.max
    }
}

/// Static pricing configuration.
///
/// Loaded once per process and validated at load time, so every enum value has
/// an entry and every multiplier is strictly positive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RateTableData")]
pub struct RateTable {
    base_hours: BTreeMap<ProjectType, u32>,
    /// Descriptive reference data. Not used by the price formula.
    market_range: BTreeMap<ProjectType, PriceRange>,
    experience_multiplier: BTreeMap<ExperienceLevel, Decimal>,
    complexity_multiplier: BTreeMap<ComplexityLevel, Decimal>,
    rush_multiplier: BTreeMap<UrgencyLevel, Decimal>,
}

/// Unvalidated table as it appears on disk.
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RateTableData {
    base_hours: BTreeMap<ProjectType, u32>,
    market_range: BTreeMap<ProjectType, PriceRange>,
    experience_multiplier: BTreeMap<ExperienceLevel, Decimal>,
    complexity_multiplier: BTreeMap<ComplexityLevel, Decimal>,
    rush_multiplier: BTreeMap<UrgencyLevel, Decimal>,
}

impl TryFrom<RateTableData> for RateTable {
    type Error = ConfigError;

    fn try_from(data: RateTableData) -> Result<Self, Self::Error> {
        let table = RateTable {
            base_hours: data.base_hours,
            market_range: data.market_range,
            experience_multiplier: data.experience_multiplier,
            complexity_multiplier: data.complexity_multiplier,
            rush_multiplier: data.rush_multiplier,
        };
        table.validate()?;
        Ok(table)
    }
}

impl RateTable {
    /// Parse and validate a table from JSON.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let data: RateTableData = serde_json::from_str(json)?;
        RateTable::try_from(data)
    }

    /// Read, parse and validate a table file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let table = Self::from_json(&json)?;
        tracing::info!("Loaded rate table from {}", path.display());
        Ok(table)
    }

    /// Check that the table is fully populated with positive values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for project in ProjectType::ALL {
            match self.base_hours.get(&project) {
                Some(hours) if *hours > 0 => {}
                Some(_) => return Err(invalid_table(format!("baseHours.{} must be > 0", project))),
                None => return Err(invalid_table(format!("baseHours.{} is missing", project))),
            }
            match self.market_range.get(&project) {
                Some(range) if range.min >= Decimal::ZERO && range.min <= range.max => {}
                Some(_) => {
                    return Err(invalid_table(format!(
                        "marketRange.{} must satisfy 0 <= min <= max",
                        project
                    )));
                }
                None => return Err(invalid_table(format!("marketRange.{} is missing", project))),
            }
        }

        check_multipliers(
            "experienceMultiplier",
            &ExperienceLevel::ALL,
            &self.experience_multiplier,
        )?;
        check_multipliers(
            "complexityMultiplier",
            &ComplexityLevel::ALL,
            &self.complexity_multiplier,
        )?;
        check_multipliers("rushMultiplier", &UrgencyLevel::ALL, &self.rush_multiplier)?;
        Ok(())
    }

    #[cfg(test)]
    pub(crate) fn remove_base_hours(&mut self, project: ProjectType) {
        self.base_hours.remove(&project);
    }

    /// Get the nominal hours for a project type.
    pub fn base_hours(&self, project: ProjectType) -> Option<u32> {
        self.base_hours.get(&project).copied()
    }

    /// Get the reference market range for a project type.
    pub fn market_range(&self, project: ProjectType) -> Option<PriceRange> {
        self.market_range.get(&project).copied()
    }

    pub fn experience_multiplier(&self, level: ExperienceLevel) -> Option<Decimal> {
        self.experience_multiplier.get(&level).copied()
    }

    pub fn complexity_multiplier(&self, level: ComplexityLevel) -> Option<Decimal> {
        self.complexity_multiplier.get(&level).copied()
    }

    pub fn rush_multiplier(&self, level: UrgencyLevel) -> Option<Decimal> {
        self.rush_multiplier.get(&level).copied()
    }
}

impl Default for RateTable {
    fn default() -> Self {
        let base_hours = BTreeMap::from([
            (ProjectType::Landing, 8),
            (ProjectType::Website, 30),
            (ProjectType::Ecommerce, 80),
            (ProjectType::Webapp, 150),
            (ProjectType::Mobileapp, 200),
        ]);

        let market_range = BTreeMap::from([
            (ProjectType::Landing, PriceRange::new(dec!(800), dec!(2500))),
            (ProjectType::Website, PriceRange::new(dec!(2500), dec!(8000))),
            (ProjectType::Ecommerce, PriceRange::new(dec!(5000), dec!(25000))),
            (ProjectType::Webapp, PriceRange::new(dec!(8000), dec!(40000))),
            (ProjectType::Mobileapp, PriceRange::new(dec!(12000), dec!(60000))),
        ]);

        let experience_multiplier = BTreeMap::from([
            (ExperienceLevel::Junior, dec!(0.8)),
            (ExperienceLevel::Pleno, dec!(1)),
            (ExperienceLevel::Senior, dec!(1.3)),
            (ExperienceLevel::Specialist, dec!(1.6)),
        ]);

        let complexity_multiplier = BTreeMap::from([
            (ComplexityLevel::Simple, dec!(0.8)),
            (ComplexityLevel::Medium, dec!(1)),
            (ComplexityLevel::Complex, dec!(1.5)),
            (ComplexityLevel::Enterprise, dec!(2)),
        ]);

        let rush_multiplier = BTreeMap::from([
            (UrgencyLevel::Normal, dec!(1)),
            (UrgencyLevel::Rush, dec!(1.3)),
            (UrgencyLevel::Emergency, dec!(1.6)),
        ]);

        Self {
            base_hours,
            market_range,
            experience_multiplier,
            complexity_multiplier,
            rush_multiplier,
        }
    }
}

fn invalid_table(reason: String) -> ConfigError {
    ConfigError::InvalidTable { reason }
}

fn check_multipliers<K>(
    name: &str,
    keys: &[K],
    values: &BTreeMap<K, Decimal>,
) -> Result<(), ConfigError>
where
    K: Ord + fmt::Display,
{
    for key in keys {
        match values.get(key) {
            Some(value) if *value > Decimal::ZERO => {}
            Some(_) => return Err(invalid_table(format!("{}.{} must be > 0", name, key))),
            None => return Err(invalid_table(format!("{}.{} is missing", name, key))),
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_table_is_valid() {
        let table = RateTable::default();
        assert!(table.validate().is_ok());
        assert_eq!(table.base_hours(ProjectType::Ecommerce), Some(80));
        assert_eq!(table.rush_multiplier(UrgencyLevel::Emergency), Some(dec!(1.6)));
    }

    #[test]
    fn test_enum_keys_parse() {
        assert_eq!("landing".parse::<ProjectType>().unwrap(), ProjectType::Landing);
        assert_eq!(" Complex ".parse::<ComplexityLevel>().unwrap(), ComplexityLevel::Complex);
        assert_eq!("mid".parse::<ExperienceLevel>().unwrap(), ExperienceLevel::Pleno);
        assert!("blog".parse::<ProjectType>().is_err());
        assert!("later".parse::<UrgencyLevel>().is_err());
    }

    #[test]
    fn test_json_round_trip_keeps_table() {
        let table = RateTable::default();
        let json = serde_json::to_string(&table).unwrap();
        assert_eq!(RateTable::from_json(&json).unwrap(), table);
    }

    #[test]
    fn test_missing_key_is_rejected() {
        let mut value = serde_json::to_value(RateTable::default()).unwrap();
        value["baseHours"].as_object_mut().unwrap().remove("website");

        let err = RateTable::from_json(&value.to_string()).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidTable { .. }));
        assert!(err.to_string().contains("baseHours.website is missing"));
    }

    #[test]
    fn test_direct_deserialize_validates() {
        let mut value = serde_json::to_value(RateTable::default()).unwrap();
        value["baseHours"].as_object_mut().unwrap().remove("webapp");

        let err = serde_json::from_value::<RateTable>(value).unwrap_err();
        assert!(err.to_string().contains("baseHours.webapp is missing"));

        let value = serde_json::to_value(RateTable::default()).unwrap();
        assert!(serde_json::from_value::<RateTable>(value).is_ok());
    }

    #[test]
    fn test_non_positive_multiplier_is_rejected() {
        let mut value = serde_json::to_value(RateTable::default()).unwrap();
        value["rushMultiplier"]["rush"] = serde_json::json!("0");
        let err = RateTable::from_json(&value.to_string()).unwrap_err();
        assert!(err.to_string().contains("rushMultiplier.rush"));
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut value = serde_json::to_value(RateTable::default()).unwrap();
        value["baseHours"]["landing"] = serde_json::json!(10);
        write!(file, "{}", value).unwrap();

        let table = RateTable::load(file.path()).unwrap();
        assert_eq!(table.base_hours(ProjectType::Landing), Some(10));
    }

    #[test]
    fn test_load_missing_file() {
        let err = RateTable::load(Path::new("/nonexistent/rates.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
