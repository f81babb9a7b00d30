//! Commercial proposal document.

use chrono::{Days, NaiveDate};

use super::currency::CurrencyFormat;
use super::summary::amount_text;
use crate::estimation::Estimate;

/// Days a proposal stays valid.
pub const VALIDITY_DAYS: u64 = 15;

/// Fixed schedule phases around development, in days.
const BRIEFING_DAYS: u32 = 2;
const TESTING_DAYS: u32 = 2;
const DELIVERY_DAYS: u32 = 1;

/// Presentation choices for a proposal.
#[derive(Debug, Clone, Default)]
pub struct ProposalOptions {
    pub currency: CurrencyFormat,
    /// When set, the expiry date is printed.
    pub issued_on: Option<NaiveDate>,
    pub author_name: Option<String>,
    pub author_contact: Option<String>,
}

/// Development days in the schedule: the deadline minus the fixed phases, at least one.
pub fn development_days(suggested_deadline_days: u32) -> u32 {
    suggested_deadline_days.saturating_sub(4).max(1)
}

/// Render a proposal. Same estimate and options always give the same text.
pub fn render_proposal(estimate: &Estimate, options: &ProposalOptions) -> String {
    let currency = &options.currency;
    let project = estimate.project_type.display_name();

    let breakdown = estimate
        .line_items
        .iter()
        .map(|item| format!("- {}: {}\n", item.label, amount_text(&item.amount, currency)))
        .collect::<String>();

    let issued = options
        .issued_on
        .map(|issued| match issued.checked_add_days(Days::new(VALIDITY_DAYS)) {
            Some(expiry) => format!("Issued on {}, valid until {}.\n", issued, expiry),
            None => format!("Issued on {}.\n", issued),
        })
        .unwrap_or_default();

    format!(
        r#"COMMERCIAL PROPOSAL - {title}

PROJECT SUMMARY
- Type: {project}
- Complexity: {complexity}
- Deadline: {deadline} working days
- Investment: {investment}

INVESTMENT BREAKDOWN
{breakdown}
INCLUDED
- Responsive design for all devices
- Performance and speed optimization
- Testing across multiple browsers
- Complete technical documentation
- 30 days of post-delivery support

PAYMENT TERMS
- 50% at project start
- 50% on final delivery
- Payment by bank transfer, instant payment or card

ESTIMATED SCHEDULE
- Briefing and approval: {BRIEFING_DAYS} days
- Development: {development} days
- Testing and adjustments: {TESTING_DAYS} days
- Delivery and training: {DELIVERY_DAYS} day

NEXT STEPS
1. Proposal approval
2. Contract signature
3. First installment payment
4. Development kick-off

This proposal is valid for {VALIDITY_DAYS} days.
{issued}
Best regards,
{name}
{contact}"#,
        title = project.to_uppercase(),
        complexity = estimate.complexity.display_name(),
        deadline = estimate.suggested_deadline_days,
        investment = currency.format(estimate.total_price),
        development = development_days(estimate.suggested_deadline_days),
        name = options.author_name.as_deref().unwrap_or("[Your Name]"),
        contact = options.author_contact.as_deref().unwrap_or("[Your Contact]"),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::estimation::{EstimateInput, ProjectType, RateTable, UrgencyLevel, estimate};
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    fn landing() -> Estimate {
        let input = EstimateInput::new(ProjectType::Landing, dec!(75));
        estimate(&input, &RateTable::default()).unwrap()
    }

    #[test]
    fn test_development_days() {
        assert_eq!(development_days(2), 1);
        assert_eq!(development_days(5), 1);
        assert_eq!(development_days(26), 22);
    }

    #[test]
    fn test_proposal_text() {
        let text = render_proposal(&landing(), &ProposalOptions::default());
        let expected = "\
COMMERCIAL PROPOSAL - LANDING PAGE

PROJECT SUMMARY
- Type: Landing Page
- Complexity: Medium
- Deadline: 2 working days
- Investment: R$ 600

INVESTMENT BREAKDOWN
- Development (8h): R$ 600

INCLUDED
- Responsive design for all devices
- Performance and speed optimization
- Testing across multiple browsers
- Complete technical documentation
- 30 days of post-delivery support

PAYMENT TERMS
- 50% at project start
- 50% on final delivery
- Payment by bank transfer, instant payment or card

ESTIMATED SCHEDULE
- Briefing and approval: 2 days
- Development: 1 days
- Testing and adjustments: 2 days
- Delivery and training: 1 day

NEXT STEPS
1. Proposal approval
2. Contract signature
3. First installment payment
4. Development kick-off

This proposal is valid for 15 days.

Best regards,
[Your Name]
[Your Contact]";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_proposal_is_deterministic() {
        let input = EstimateInput::new(ProjectType::Webapp, dec!(110))
            .with_urgency(UrgencyLevel::Emergency);
        let est = estimate(&input, &RateTable::default()).unwrap();
        let options = ProposalOptions {
            issued_on: NaiveDate::from_ymd_opt(2026, 10, 17),
            ..Default::default()
        };

        assert_eq!(render_proposal(&est, &options), render_proposal(&est, &options));
    }

    #[test]
    fn test_issue_date_and_author() {
        let options = ProposalOptions {
            issued_on: NaiveDate::from_ymd_opt(2026, 10, 17),
            author_name: Some("Ana Souza".to_string()),
            author_contact: Some("ana@example.com".to_string()),
            ..Default::default()
        };
        let text = render_proposal(&landing(), &options);

        assert!(text.contains("Issued on 2026-10-17, valid until 2026-11-01."));
        assert!(text.ends_with("Best regards,\nAna Souza\nana@example.com"));
    }

    #[test]
    fn test_rush_note_in_breakdown() {
        let input = EstimateInput::new(ProjectType::Website, dec!(80))
            .with_urgency(UrgencyLevel::Rush);
        let est = estimate(&input, &RateTable::default()).unwrap();
        let text = render_proposal(&est, &ProposalOptions::default());

        assert!(text.contains("- Rush (+30%): Included in base price"));
        assert!(text.contains("- Investment: R$ 3.120"));
    }
}
