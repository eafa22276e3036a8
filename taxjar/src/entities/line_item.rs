//! Order and tax-calculation line items.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A line item on an order or refund transaction.
///
/// The `id` is tolerant of numeric encoding on the wire; some providers
/// record it unquoted.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LineItem {
    /// Unique identifier of the given line item.
    #[serde(with = "crate::codec::polymorphic_string")]
    pub id: String,

    /// Quantity for the item.
    pub quantity: i32,

    /// Product identifier for the item.
    pub product_identifier: Option<String>,

    /// Description of the line item (up to 255 characters).
    pub description: Option<String>,

    /// Product tax code for the item.
    pub product_tax_code: Option<String>,

    /// Unit price for the item in dollars.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,

    /// Total discount (non-unit) for the item in dollars.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub discount: Option<Decimal>,

    /// Total sales tax collected (non-unit) for the item in dollars.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub sales_tax: Option<Decimal>,
}

/// A line item on a tax calculation request.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TaxLineItem {
    /// Unique identifier of the given line item.
    pub id: String,

    /// Quantity for the item.
    pub quantity: i32,

    /// Product tax code for the item; assumed fully taxable when absent.
    pub product_tax_code: Option<String>,

    /// Unit price for the item in dollars.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub unit_price: Option<Decimal>,

    /// Total discount (non-unit) for the item in dollars.
    #[serde(with = "rust_decimal::serde::float_option")]
    pub discount: Option<Decimal>,
}
