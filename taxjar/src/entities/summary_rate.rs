//! Summarized backup rates by region.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A labelled rate value.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryRateObject {
    /// Jurisdiction label for the rate, e.g. `"State Tax"`.
    pub label: String,

    /// The rate value.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,
}

/// Minimum and average sales tax rates for a region.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryRate {
    /// Two-letter ISO country code.
    pub country_code: String,

    /// Country name.
    pub country: String,

    /// Two-letter ISO region code.
    pub region_code: String,

    /// Region name.
    pub region: String,

    /// Region's minimum rate.
    pub minimum_rate: Option<SummaryRateObject>,

    /// Region's average rate.
    pub average_rate: Option<SummaryRateObject>,
}

/// Envelope for the summary rates endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SummaryRatesResponse {
    /// Summarized rates for each region/state.
    pub summary_rates: Vec<SummaryRate>,
}
