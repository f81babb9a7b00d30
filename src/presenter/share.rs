//! Shareable estimate links.
//!
//! A link carries `{projectType, complexity, totalPrice}` as base64 JSON in a
//! `data` query parameter. Decoding never fails: bad data yields an empty prefill.

use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::estimation::{ComplexityLevel, Estimate, ProjectType};

/// Minimal projection of an estimate that is safe to share.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SharedQuote {
    pub project_type: ProjectType,
    pub complexity: ComplexityLevel,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_price: Decimal,
}

impl From<&Estimate> for SharedQuote {
    fn from(estimate: &Estimate) -> Self {
        Self {
            project_type: estimate.project_type,
            complexity: estimate.complexity,
            total_price: estimate.total_price,
        }
    }
}

impl SharedQuote {
    /// Base64 token for the `data` parameter.
    pub fn encode(&self) -> String {
        // Serializing plain enums and a number cannot fail.
        let json = serde_json::to_string(self).unwrap_or_default();
        STANDARD.encode(json)
    }

    /// Full link under `base_url`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!("{}?data={}", base_url, urlencoding::encode(&self.encode()))
    }
}

/// Values recovered from a shared link, used to pre-fill a new request.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SharePrefill {
    pub project_type: Option<ProjectType>,
    pub complexity: Option<ComplexityLevel>,
    pub total_price: Option<Decimal>,
}

impl SharePrefill {
    pub fn is_empty(&self) -> bool {
        self == &SharePrefill::default()
    }
}

/// Decode a link or bare token. Unknown or malformed values are dropped.
pub fn decode_share_reference(reference: &str) -> SharePrefill {
    let token = extract_token(reference);
    if token.is_empty() {
        return SharePrefill::default();
    }

    let value = match decode_token(token) {
        Some(value) => value,
        None => {
            tracing::warn!("Ignoring malformed shared estimate data");
            return SharePrefill::default();
        }
    };

    SharePrefill {
        project_type: value
            .get("projectType")
            .and_then(serde_json::Value::as_str)
            .and_then(|s| s.parse().ok()),
        complexity: value
            .get("complexity")
            .and_then(serde_json::Value::as_str)
            .and_then(|s| s.parse().ok()),
        total_price: value.get("totalPrice").and_then(decimal_from_json),
    }
}

fn extract_token(reference: &str) -> &str {
    let reference = reference.trim();
    match reference.split_once('?') {
        Some((_, query)) => query
            .split('&')
            .find_map(|pair| pair.strip_prefix("data="))
            .unwrap_or(""),
        None => reference.strip_prefix("data=").unwrap_or(reference),
    }
}

fn decode_token(token: &str) -> Option<serde_json::Value> {
    let token = urlencoding::decode(token).ok()?;
    let bytes = STANDARD.decode(token.as_bytes()).ok()?;
    let value: serde_json::Value = serde_json::from_slice(&bytes).ok()?;
    value.is_object().then_some(value)
}

fn decimal_from_json(value: &serde_json::Value) -> Option<Decimal> {
    match value {
        serde_json::Value::Number(n) => n.to_string().parse().ok(),
        serde_json::Value::String(s) => s.parse().ok(),
        _ => None,
    }
}
