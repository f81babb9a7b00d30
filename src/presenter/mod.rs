//! Turning estimates into text: summaries, proposals and share links.

mod currency;
mod proposal;
mod share;
mod summary;

pub use currency::CurrencyFormat;
pub use proposal::{ProposalOptions, VALIDITY_DAYS, development_days, render_proposal};
pub use share::{SharePrefill, SharedQuote, decode_share_reference};
pub use summary::{amount_text, breakdown_rows, render_estimate};
