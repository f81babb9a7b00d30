//! Market reference data.
//!
//! Nothing here feeds the price formula; it is context shown next to an estimate.

mod provider;
mod trends;

pub use provider::{MarketDataProvider, MarketRates, StaticMarketData, fetch_market_rates};
pub use trends::{Demand, MarketTrends, Segment, SegmentTrend, market_range};
