//! Market rate providers.

use std::time::Duration;

use async_trait::async_trait;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::error::MarketDataError;
use crate::estimation::ProjectType;

/// Observed market prices for a project type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketRates {
    pub min: Decimal,
    pub max: Decimal,
    pub avg: Decimal,
}

/// Source of live market rates.
///
/// Used by callers around the pricing engine, never by the engine itself.
#[async_trait]
pub trait MarketDataProvider: Send + Sync {
    /// Provider name for logs.
    fn name(&self) -> &str;

    /// Current market rates for a project type.
    async fn market_rates(&self, project: ProjectType) -> Result<MarketRates, MarketDataError>;
}

/// Provider backed by fixed figures.
#[derive(Debug, Clone, Copy, Default)]
pub struct StaticMarketData;

#[async_trait]
impl MarketDataProvider for StaticMarketData {
    fn name(&self) -> &str {
        "static"
    }

    async fn market_rates(&self, project: ProjectType) -> Result<MarketRates, MarketDataError> {
        let (min, max, avg) = match project {
            ProjectType::Landing => (dec!(800), dec!(3000), dec!(1500)),
            ProjectType::Website => (dec!(2500), dec!(12000), dec!(6000)),
            ProjectType::Ecommerce => (dec!(5000), dec!(35000), dec!(15000)),
            ProjectType::Webapp => (dec!(8000), dec!(50000), dec!(20000)),
            ProjectType::Mobileapp => (dec!(12000), dec!(80000), dec!(35000)),
        };
        Ok(MarketRates { min, max, avg })
    }
}

/// Query a provider, giving up after `timeout`.
pub async fn fetch_market_rates(
    provider: &dyn MarketDataProvider,
    project: ProjectType,
    timeout: Duration,
) -> Result<MarketRates, MarketDataError> {
    match tokio::time::timeout(timeout, provider.market_rates(project)).await {
        Ok(result) => result,
        Err(_) => {
            tracing::warn!(
                "Market data provider '{}' timed out after {:?}",
                provider.name(),
                timeout
            );
            Err(MarketDataError::Timeout(timeout))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct SlowProvider;

    #[async_trait]
    impl MarketDataProvider for SlowProvider {
        fn name(&self) -> &str {
            "slow"
        }

        async fn market_rates(
            &self,
            _project: ProjectType,
        ) -> Result<MarketRates, MarketDataError> {
            tokio::time::sleep(Duration::from_secs(60)).await;
            Err(MarketDataError::Unavailable {
                reason: "unreachable".to_string(),
            })
        }
    }

    #[tokio::test]
    async fn test_static_rates() {
        let timeout = Duration::from_secs(1);
        let rates = fetch_market_rates(&StaticMarketData, ProjectType::Webapp, timeout)
            .await
            .unwrap();

        assert_eq!(rates.min, dec!(8000));
        assert_eq!(rates.max, dec!(50000));
        assert_eq!(rates.avg, dec!(20000));
    }

    #[tokio::test]
    async fn test_timeout() {
        let err = fetch_market_rates(&SlowProvider, ProjectType::Landing, Duration::from_millis(10))
            .await
            .unwrap_err();

        assert_eq!(err, MarketDataError::Timeout(Duration::from_millis(10)));
    }
}
