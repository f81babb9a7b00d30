//! Process configuration from the environment.
//!
//! Call `dotenvy::dotenv()` before [`Config::from_env`] to pick up a `.env` file.

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use crate::error::ConfigError;
use crate::estimation::RateTable;
use crate::presenter::CurrencyFormat;

const ENV_RATE_TABLE: &str = "ESTIMATOR_RATE_TABLE";
const ENV_HOURLY_RATE: &str = "ESTIMATOR_HOURLY_RATE";
const ENV_CURRENCY_SYMBOL: &str = "ESTIMATOR_CURRENCY_SYMBOL";
const ENV_THOUSANDS_SEPARATOR: &str = "ESTIMATOR_THOUSANDS_SEPARATOR";
const ENV_SHARE_BASE_URL: &str = "ESTIMATOR_SHARE_BASE_URL";
const ENV_MARKET_TIMEOUT_MS: &str = "ESTIMATOR_MARKET_TIMEOUT_MS";
const ENV_AUTHOR_NAME: &str = "ESTIMATOR_AUTHOR_NAME";
const ENV_AUTHOR_CONTACT: &str = "ESTIMATOR_AUTHOR_CONTACT";

/// Runtime configuration.
#[derive(Debug, Clone)]
pub struct Config {
    /// Rate table file. `None` means the built-in table.
    pub rate_table_path: Option<PathBuf>,
    /// Hourly rate used when the caller does not give one.
    pub default_hourly_rate: Decimal,
    pub currency: CurrencyFormat,
    pub share_base_url: String,
    /// Upper bound on a market data request.
    pub market_timeout: Duration,
    pub author_name: Option<String>,
    pub author_contact: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            rate_table_path: None,
            default_hourly_rate: dec!(75),
            currency: CurrencyFormat::default(),
            share_base_url: "https://localhost/".to_string(),
            market_timeout: Duration::from_millis(2000),
            author_name: None,
            author_contact: None,
        }
    }
}

impl Config {
    /// Build from process environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::from_lookup(|key| std::env::var(key).ok())?;
        if config.rate_table_path.is_none() {
            config.rate_table_path = Self::default_rate_table_path().filter(|p| p.exists());
        }
        Ok(config)
    }

    /// Build from an arbitrary key lookup. Unset or blank keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());
        let mut config = Self::default();

        if let Some(path) = get(ENV_RATE_TABLE) {
            config.rate_table_path = Some(PathBuf::from(path));
        }

        if let Some(rate) = get(ENV_HOURLY_RATE) {
            let rate: Decimal = parse(ENV_HOURLY_RATE, &rate)?;
            if rate <= Decimal::ZERO {
                return Err(invalid(ENV_HOURLY_RATE, "must be positive"));
            }
            config.default_hourly_rate = rate;
        }

        if let Some(symbol) = get(ENV_CURRENCY_SYMBOL) {
            config.currency.symbol = symbol;
        }

        if let Some(sep) = lookup(ENV_THOUSANDS_SEPARATOR).filter(|v| !v.is_empty()) {
            let mut chars = sep.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => config.currency.thousands_separator = c,
                _ => return Err(invalid(ENV_THOUSANDS_SEPARATOR, "must be a single character")),
            }
        }

        if let Some(url) = get(ENV_SHARE_BASE_URL) {
            config.share_base_url = url;
        }

        if let Some(ms) = get(ENV_MARKET_TIMEOUT_MS) {
            let ms: u64 = parse(ENV_MARKET_TIMEOUT_MS, &ms)?;
            config.market_timeout = Duration::from_millis(ms);
        }

        config.author_name = get(ENV_AUTHOR_NAME);
        config.author_contact = get(ENV_AUTHOR_CONTACT);

        Ok(config)
    }

    /// `<config dir>/freelance-estimator/rates.json`.
    pub fn default_rate_table_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("freelance-estimator").join("rates.json"))
    }

    /// Load the configured rate table, or the built-in one.
    pub fn rate_table(&self) -> Result<RateTable, ConfigError> {
        match &self.rate_table_path {
            Some(path) => RateTable::load(path),
            None => {
                tracing::debug!("Using built-in rate table");
                Ok(RateTable::default())
            }
        }
    }
}

fn parse<T>(key: &str, value: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    value
        .parse()
        .map_err(|e: T::Err| invalid(key, format!("'{}': {}", value, e)))
}

fn invalid(key: &str, reason: impl Into<String>) -> ConfigError {
    ConfigError::InvalidValue {
        key: key.to_string(),
        reason: reason.into(),
    }
}
