//! Estimate, proposal and share commands.

use chrono::NaiveDate;
use clap::Args;
use rust_decimal::Decimal;

use super::output::print_json;
use crate::config::Config;
use crate::estimation::{
    ComplexityLevel, Estimate, EstimateInput, ExperienceLevel, Extra, PricingEngine, ProjectType,
    UrgencyLevel,
};
use crate::presenter::{
    ProposalOptions, SharedQuote, decode_share_reference, render_estimate, render_proposal,
};

#[derive(Args, Debug, Clone)]
pub struct EstimateArgs {
    /// Project type: landing, website, ecommerce, webapp, mobileapp
    #[arg(short, long)]
    pub project: Option<ProjectType>,

    /// Complexity: simple, medium, complex, enterprise
    #[arg(short, long, default_value = "medium")]
    pub complexity: ComplexityLevel,

    /// Experience level: junior, pleno, senior, specialist
    #[arg(short, long, default_value = "pleno")]
    pub experience: ExperienceLevel,

    /// Urgency: normal, rush, emergency
    #[arg(short, long, default_value = "normal")]
    pub urgency: UrgencyLevel,

    /// Hourly rate (defaults to ESTIMATOR_HOURLY_RATE or 75)
    #[arg(short, long)]
    pub rate: Option<Decimal>,

    /// Flat-fee add-on as key=price (e.g. seo=500); repeatable
    #[arg(long = "extra", value_name = "KEY=PRICE")]
    pub extras: Vec<Extra>,
}

impl EstimateArgs {
    /// Request value for the engine.
    pub fn to_input(&self, config: &Config) -> EstimateInput {
        EstimateInput {
            project_type: self.project,
            complexity: self.complexity,
            extras: self.extras.clone(),
            hourly_rate: self.rate.unwrap_or(config.default_hourly_rate),
            experience_level: self.experience,
            urgency: self.urgency,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct ProposalArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,

    /// Issue date (YYYY-MM-DD); prints the expiry date
    #[arg(long)]
    pub issued_on: Option<NaiveDate>,

    /// Name to sign the proposal with
    #[arg(long)]
    pub author: Option<String>,

    /// Contact line under the signature
    #[arg(long)]
    pub contact: Option<String>,
}

#[derive(Args, Debug, Clone)]
pub struct ShareArgs {
    #[command(flatten)]
    pub estimate: EstimateArgs,

    /// Base URL for the link (defaults to ESTIMATOR_SHARE_BASE_URL)
    #[arg(long)]
    pub base_url: Option<String>,
}

fn compute(
    engine: &PricingEngine,
    config: &Config,
    args: &EstimateArgs,
) -> anyhow::Result<Estimate> {
    let input = args.to_input(config);
    Ok(engine.estimate(&input)?)
}

pub fn run_estimate(
    engine: &PricingEngine,
    config: &Config,
    args: &EstimateArgs,
    json: bool,
) -> anyhow::Result<()> {
    let estimate = compute(engine, config, args)?;

    if json {
        print_json(&estimate)
    } else {
        print!("{}", render_estimate(&estimate, &config.currency));
        Ok(())
    }
}

pub fn run_proposal(
    engine: &PricingEngine,
    config: &Config,
    args: &ProposalArgs,
    json: bool,
) -> anyhow::Result<()> {
    let estimate = compute(engine, config, &args.estimate)?;
    let options = ProposalOptions {
        currency: config.currency.clone(),
        issued_on: args.issued_on,
        author_name: args.author.clone().or_else(|| config.author_name.clone()),
        author_contact: args.contact.clone().or_else(|| config.author_contact.clone()),
    };
    let proposal = render_proposal(&estimate, &options);

    if json {
        print_json(&serde_json::json!({
            "estimate": estimate,
            "proposal": proposal,
        }))
    } else {
        println!("{}", proposal);
        Ok(())
    }
}

pub fn run_share(
    engine: &PricingEngine,
    config: &Config,
    args: &ShareArgs,
    json: bool,
) -> anyhow::Result<()> {
    let estimate = compute(engine, config, &args.estimate)?;
    let quote = SharedQuote::from(&estimate);
    let base_url = args.base_url.as_deref().unwrap_or(&config.share_base_url);
    let url = quote.to_url(base_url);

    if json {
        print_json(&serde_json::json!({
            "quote": quote,
            "url": url,
        }))
    } else {
        println!("{}", url);
        Ok(())
    }
}

pub fn run_decode(reference: &str, json: bool) -> anyhow::Result<()> {
    let prefill = decode_share_reference(reference);

    if json {
        return print_json(&prefill);
    }

    if prefill.is_empty() {
        println!("No shared estimate data found.");
        return Ok(());
    }

    let show = |value: Option<String>| value.unwrap_or_else(|| "-".to_string());
    println!("Project type: {}", show(prefill.project_type.map(|p| p.to_string())));
    println!("Complexity:   {}", show(prefill.complexity.map(|c| c.to_string())));
    println!("Total price:  {}", show(prefill.total_price.map(|t| t.to_string())));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::EstimateError;
    use rust_decimal_macros::dec;

    fn args(project: Option<ProjectType>) -> EstimateArgs {
        EstimateArgs {
            project,
            complexity: ComplexityLevel::Medium,
            experience: ExperienceLevel::Pleno,
            urgency: UrgencyLevel::Normal,
            rate: None,
            extras: vec![],
        }
    }

    #[test]
    fn test_rate_defaults_from_config() {
        let config = Config {
            default_hourly_rate: dec!(90),
            ..Config::default()
        };
        let input = args(Some(ProjectType::Landing)).to_input(&config);
        assert_eq!(input.hourly_rate, dec!(90));

        let mut explicit = args(Some(ProjectType::Landing));
        explicit.rate = Some(dec!(110));
        assert_eq!(explicit.to_input(&config).hourly_rate, dec!(110));
    }

    #[test]
    fn test_missing_project_surfaces_invalid_input() {
        let engine = PricingEngine::default();
        let err = compute(&engine, &Config::default(), &args(None)).unwrap_err();

        let err = err.downcast::<EstimateError>().unwrap();
        assert!(matches!(err, EstimateError::InvalidInput { .. }));
    }
}
