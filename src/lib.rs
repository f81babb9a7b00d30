//! Budget estimator for freelance software projects.
//!
//! The pricing engine ([`estimation::estimate`]) maps a project description to a
//! priced, itemized [`estimation::Estimate`]. Everything else formats that value:
//! summaries, proposals, share links and market context.

pub mod cli;
pub mod config;
pub mod error;
pub mod estimation;
pub mod market;
pub mod presenter;

pub use config::Config;
pub use error::{ConfigError, EstimateError, MarketDataError};
pub use estimation::{Estimate, EstimateInput, PricingEngine, RateTable, estimate};
