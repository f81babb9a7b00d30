//! Market reference command.

use clap::Args;
use rust_decimal::Decimal;
use serde::Serialize;

use super::output::print_json;
use crate::config::Config;
use crate::estimation::{PriceRange, PricingEngine, ProjectType};
use crate::market::{
    MarketRates, MarketTrends, SegmentTrend, StaticMarketData, fetch_market_rates, market_range,
};

#[derive(Args, Debug, Clone)]
pub struct MarketArgs {
    /// Project type: landing, website, ecommerce, webapp, mobileapp
    #[arg(short, long)]
    pub project: ProjectType,

    /// Price to adjust by the segment's growth rate
    #[arg(long)]
    pub price: Option<Decimal>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct MarketReport {
    project_type: ProjectType,
    reference_range: Option<PriceRange>,
    market_rates: Option<MarketRates>,
    trend: SegmentTrend,
    adjusted_price: Option<Decimal>,
}

pub async fn run_market(
    engine: &PricingEngine,
    config: &Config,
    args: &MarketArgs,
    json: bool,
) -> anyhow::Result<()> {
    let trends = MarketTrends::current();

    // Provider failures only hide the live figures.
    let market_rates =
        match fetch_market_rates(&StaticMarketData, args.project, config.market_timeout).await {
            Ok(rates) => Some(rates),
            Err(e) => {
                tracing::warn!("Market rates unavailable: {}", e);
                None
            }
        };

    let report = MarketReport {
        project_type: args.project,
        reference_range: market_range(engine.table(), args.project),
        market_rates,
        trend: *trends.for_project(args.project),
        adjusted_price: args
            .price
            .map(|price| trends.adjust_for_market(price, args.project)),
    };

    if json {
        return print_json(&report);
    }

    let currency = &config.currency;
    println!("{}", args.project.display_name());
    if let Some(range) = report.reference_range {
        println!(
            "  Reference range:  {} to {}",
            currency.format(range.min),
            currency.format(range.max)
        );
    }
    if let Some(rates) = report.market_rates {
        println!(
            "  Market rates:     {} to {} (average {})",
            currency.format(rates.min),
            currency.format(rates.max),
            currency.format(rates.avg)
        );
    }
    println!(
        "  Average rate:     {}/hour, growth {}%",
        currency.format(report.trend.average_rate),
        (report.trend.growth_rate * Decimal::ONE_HUNDRED).normalize()
    );
    if let (Some(price), Some(adjusted)) = (args.price, report.adjusted_price) {
        println!(
            "  Adjusted price:   {} -> {}",
            currency.format(price),
            currency.format(adjusted)
        );
    }

    Ok(())
}
