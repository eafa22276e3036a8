//! Sales tax rates for a location.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Sales tax rates for a location, broken down by jurisdiction level.
///
/// US locations populate the state/county/city/district fields;
/// international locations populate the standard/reduced-rate fields.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Rate {
    /// Postal code for the given location.
    pub zip: String,

    /// Two-letter ISO state code for the given location.
    pub state: String,

    /// State sales tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_rate: Decimal,

    /// County name for the given location.
    pub county: String,

    /// County sales tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub county_rate: Decimal,

    /// City name for the given location.
    pub city: String,

    /// City sales tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub city_rate: Decimal,

    /// Aggregate rate of all city and county special districts.
    #[serde(with = "rust_decimal::serde::float")]
    pub combined_district_rate: Decimal,

    /// Overall sales tax rate: state, county, city, and district combined.
    #[serde(with = "rust_decimal::serde::float")]
    pub combined_rate: Decimal,

    /// Whether freight is taxable in the given location.
    pub freight_taxable: bool,

    /// Two-letter ISO country code for the given location.
    pub country: String,

    /// Country or region name for the given location.
    pub name: String,

    /// Country sales tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub country_rate: Decimal,

    /// Standard rate for the given location (EU/international).
    #[serde(with = "rust_decimal::serde::float")]
    pub standard_rate: Decimal,

    /// Reduced rate for the given location.
    #[serde(with = "rust_decimal::serde::float")]
    pub reduced_rate: Decimal,

    /// Super-reduced rate for the given location.
    #[serde(with = "rust_decimal::serde::float")]
    pub super_reduced_rate: Decimal,

    /// Parking rate for the given location.
    #[serde(with = "rust_decimal::serde::float")]
    pub parking_rate: Decimal,

    /// Distance selling threshold for the given location.
    #[serde(with = "rust_decimal::serde::float")]
    pub distance_sale_threshold: Decimal,
}

/// Envelope for the rates-for-location endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RateResponse {
    /// The rate payload, absent when the service returns no result.
    pub rate: Option<Rate>,
}
