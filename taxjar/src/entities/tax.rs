//! Tax calculation requests, results, and jurisdiction breakdowns.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{NexusAddress, TaxLineItem};

/// Request body for calculating sales tax on an order.
///
/// `to_country`, `to_zip`, `to_state`, and `shipping` are required;
/// additionally either `amount` or at least one line item must be set.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxCalculationRequest {
    /// Type of exemption for the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_type: Option<String>,

    /// Two-letter ISO country code of the country where the order
    /// shipped from.
    pub from_country: Option<String>,

    /// Postal code where the order shipped from.
    pub from_zip: Option<String>,

    /// Two-letter ISO state code where the order shipped from.
    pub from_state: Option<String>,

    /// City where the order shipped from.
    pub from_city: Option<String>,

    /// Street address where the order shipped from.
    pub from_street: Option<String>,

    /// Two-letter ISO country code of the country where the order
    /// shipped to. Required.
    pub to_country: String,

    /// Postal code where the order shipped to. Required.
    pub to_zip: String,

    /// Two-letter ISO state code where the order shipped to. Required.
    pub to_state: String,

    /// City where the order shipped to.
    pub to_city: Option<String>,

    /// Street address where the order shipped to.
    pub to_street: Option<String>,

    /// Total amount of the order, excluding shipping, in dollars.
    /// Either this or `line_items` must be provided.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,

    /// Total amount of shipping for the order in dollars. Required.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub shipping: Option<Decimal>,

    /// Unique identifier of the given customer for exemptions.
    pub customer_id: Option<String>,

    /// Line items of the order. Either this or `amount` must be provided.
    pub line_items: Option<Vec<TaxLineItem>>,

    /// Nexus addresses attached to the request, overriding account nexus.
    pub nexus_addresses: Option<Vec<NexusAddress>>,
}

/// Jurisdiction names for an order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxJurisdictions {
    /// Two-letter ISO country code for the given location.
    pub country: String,

    /// Postal abbreviated state name for the given location.
    pub state: String,

    /// County name for the given location.
    pub county: String,

    /// City name for the given location.
    pub city: String,
}

/// Field set shared by every breakdown level.
///
/// The order, shipping, and line-item breakdowns all carry these
/// amounts; the variants below compose this record rather than
/// inheriting from it.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Breakdown {
    /// Total amount subject to tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,

    /// Total tax collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub tax_collectable: Decimal,

    /// Combined tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub combined_tax_rate: Decimal,

    /// Amount subject to state tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_taxable_amount: Decimal,

    /// Amount subject to county tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub county_taxable_amount: Decimal,

    /// County tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub county_tax_rate: Decimal,

    /// Amount subject to city tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub city_taxable_amount: Decimal,

    /// City tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub city_tax_rate: Decimal,

    // International
    /// Amount subject to country tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub country_taxable_amount: Decimal,

    /// Country tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub country_tax_rate: Decimal,

    /// Country tax collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub country_tax_collectable: Decimal,

    // Canada
    /// Amount subject to GST.
    #[serde(with = "rust_decimal::serde::float")]
    pub gst_taxable_amount: Decimal,

    /// GST rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub gst_tax_rate: Decimal,

    /// GST collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub gst: Decimal,

    /// Amount subject to PST.
    #[serde(with = "rust_decimal::serde::float")]
    pub pst_taxable_amount: Decimal,

    /// PST rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub pst_tax_rate: Decimal,

    /// PST collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub pst: Decimal,

    /// Amount subject to QST.
    #[serde(with = "rust_decimal::serde::float")]
    pub qst_taxable_amount: Decimal,

    /// QST rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub qst_tax_rate: Decimal,

    /// QST collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub qst: Decimal,
}

/// Order-level breakdown of rates by jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxBreakdown {
    /// Amounts shared with every breakdown level.
    #[serde(flatten)]
    pub breakdown: Breakdown,

    /// State tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_tax_rate: Decimal,

    /// State tax collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_tax_collectable: Decimal,

    /// County tax collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub county_tax_collectable: Decimal,

    /// City tax collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub city_tax_collectable: Decimal,

    /// Amount subject to special district tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_district_taxable_amount: Decimal,

    /// Special district tax rate.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_tax_rate: Decimal,

    /// Special district tax collectable.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_district_tax_collectable: Decimal,

    /// Breakdown of shipping rates, when shipping is taxable.
    pub shipping: Option<TaxBreakdownShipping>,

    /// Breakdown of rates for each line item.
    pub line_items: Option<Vec<TaxBreakdownLineItem>>,
}

/// Shipping-level breakdown of rates by jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxBreakdownShipping {
    /// Amounts shared with every breakdown level.
    #[serde(flatten)]
    pub breakdown: Breakdown,

    /// State sales tax rate for shipping.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_sales_tax_rate: Decimal,

    /// State tax amount for shipping.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_amount: Decimal,

    /// County tax amount for shipping.
    #[serde(with = "rust_decimal::serde::float")]
    pub county_amount: Decimal,

    /// City tax amount for shipping.
    #[serde(with = "rust_decimal::serde::float")]
    pub city_amount: Decimal,

    /// Amount of shipping subject to special district tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_taxable_amount: Decimal,

    /// Special district tax rate for shipping.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_tax_rate: Decimal,

    /// Special district tax amount for shipping.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_district_amount: Decimal,
}

/// Line-item-level breakdown of rates by jurisdiction.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxBreakdownLineItem {
    /// Unique identifier of the given line item.
    pub id: String,

    /// Amounts shared with every breakdown level.
    #[serde(flatten)]
    pub breakdown: Breakdown,

    /// State sales tax rate for the item.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_sales_tax_rate: Decimal,

    /// State tax amount for the item.
    #[serde(with = "rust_decimal::serde::float")]
    pub state_amount: Decimal,

    /// County tax amount for the item.
    #[serde(with = "rust_decimal::serde::float")]
    pub county_amount: Decimal,

    /// City tax amount for the item.
    #[serde(with = "rust_decimal::serde::float")]
    pub city_amount: Decimal,

    /// Amount of the item subject to special district tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_district_taxable_amount: Decimal,

    /// Special district tax rate for the item.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_tax_rate: Decimal,

    /// Special district tax amount for the item.
    #[serde(with = "rust_decimal::serde::float")]
    pub special_district_amount: Decimal,
}

/// Calculated sales tax for an order.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Tax {
    /// Total amount of the order including shipping.
    #[serde(with = "rust_decimal::serde::float")]
    pub order_total_amount: Decimal,

    /// Total amount of shipping for the order.
    #[serde(with = "rust_decimal::serde::float")]
    pub shipping: Decimal,

    /// Amount of the order subject to tax.
    #[serde(with = "rust_decimal::serde::float")]
    pub taxable_amount: Decimal,

    /// Amount of sales tax to collect.
    #[serde(with = "rust_decimal::serde::float")]
    pub amount_to_collect: Decimal,

    /// Overall sales tax rate of the order.
    #[serde(with = "rust_decimal::serde::float")]
    pub rate: Decimal,

    /// Whether the order is shipped to a nexus jurisdiction.
    pub has_nexus: bool,

    /// Whether freight is taxable in the destination.
    pub freight_taxable: bool,

    /// Tax sourcing basis: `origin` or `destination`.
    pub tax_source: String,

    /// Type of exemption applied, when present.
    pub exemption_type: Option<String>,

    /// Jurisdiction names for the order.
    pub jurisdictions: Option<TaxJurisdictions>,

    /// Breakdown of rates by jurisdiction for the order, shipping, and
    /// individual line items. Absent when `has_nexus` is false or no
    /// line items were provided.
    pub breakdown: Option<TaxBreakdown>,
}

/// Envelope for the tax calculation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxResponse {
    /// The tax payload, absent when the service returns no result.
    pub tax: Option<Tax>,
}
