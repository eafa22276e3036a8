//! Refund transaction requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// Request body for creating or updating a refund transaction.
///
/// `transaction_id` and `transaction_reference_id` form a linked pair;
/// both must be present or validation rejects the request. The monetary
/// fields are omitted from the wire when zero, a long-standing quirk of
/// this API's refund payloads that existing consumers depend on.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundRequest {
    /// Unique identifier of the given refund transaction. Required.
    pub transaction_id: String,

    /// Identifier of the corresponding order transaction. Required.
    pub transaction_reference_id: String,

    /// The date/time the transaction was originally recorded.
    pub transaction_date: Option<DateTime<Utc>>,

    /// Source of where the transaction was originally recorded.
    /// Defaults to `"api"` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Type of exemption for the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_type: Option<String>,

    /// Two-letter ISO country code where the order shipped from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_country: Option<String>,

    /// Postal code where the order shipped from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_zip: Option<String>,

    /// Two-letter ISO state code where the order shipped from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_state: Option<String>,

    /// City where the order shipped from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_city: Option<String>,

    /// Street address where the order shipped from.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from_street: Option<String>,

    /// Two-letter ISO country code where the order shipped to. Required.
    pub to_country: String,

    /// Postal code where the order shipped to. Required.
    pub to_zip: String,

    /// Two-letter ISO state code where the order shipped to. Required.
    pub to_state: String,

    /// City where the order shipped to.
    pub to_city: String,

    /// Street address where the order shipped to.
    pub to_street: String,

    /// Total refunded amount with shipping, excluding sales tax, in
    /// dollars. Omitted from the wire when zero.
    #[serde(skip_serializing_if = "rust_decimal::Decimal::is_zero", with = "rust_decimal::serde::float")]
    pub amount: Decimal,

    /// Total shipping for the refunded order in dollars. Omitted from
    /// the wire when zero.
    #[serde(skip_serializing_if = "rust_decimal::Decimal::is_zero", with = "rust_decimal::serde::float")]
    pub shipping: Decimal,

    /// Total sales tax collected for the refunded order in dollars.
    /// Omitted from the wire when zero.
    #[serde(skip_serializing_if = "rust_decimal::Decimal::is_zero", with = "rust_decimal::serde::float")]
    pub sales_tax: Decimal,

    /// Unique identifier of the given customer for exemptions.
    pub customer_id: String,

    /// Line items of the refund.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
}

/// A refund transaction as returned by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Refund {
    /// Unique identifier of the given refund transaction.
    pub transaction_id: String,

    /// Identifier of the corresponding order transaction.
    pub transaction_reference_id: String,

    /// Unique identifier of the user who created the refund transaction.
    pub user_id: i64,

    /// The date/time the transaction was originally recorded.
    pub transaction_date: Option<DateTime<Utc>>,

    /// Source of where the transaction was originally recorded.
    pub provider: String,

    /// Type of exemption for the refund, when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exemption_type: Option<String>,

    /// Two-letter ISO country code where the order shipped from.
    pub from_country: String,

    /// Postal code where the order shipped from.
    pub from_zip: String,

    /// Two-letter ISO state code where the order shipped from.
    pub from_state: String,

    /// City where the order shipped from.
    pub from_city: String,

    /// Street address where the order shipped from.
    pub from_street: String,

    /// Two-letter ISO country code where the order shipped to.
    pub to_country: String,

    /// Postal code where the order shipped to.
    pub to_zip: String,

    /// Two-letter ISO state code where the order shipped to.
    pub to_state: String,

    /// City where the order shipped to.
    pub to_city: String,

    /// Street address where the order shipped to.
    pub to_street: String,

    /// Total refunded amount with shipping, excluding sales tax.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,

    /// Total shipping for the refunded order.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub shipping: Option<Decimal>,

    /// Total sales tax collected for the refunded order.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub sales_tax: Option<Decimal>,

    /// Line items of the refund.
    pub line_items: Option<Vec<LineItem>>,
}

impl From<&Refund> for RefundRequest {
    fn from(refund: &Refund) -> Self {
        Self {
            transaction_id: refund.transaction_id.clone(),
            transaction_reference_id: refund.transaction_reference_id.clone(),
            transaction_date: refund.transaction_date,
            provider: Some(refund.provider.clone()),
            exemption_type: refund.exemption_type.clone(),
            from_country: Some(refund.from_country.clone()),
            from_zip: Some(refund.from_zip.clone()),
            from_state: Some(refund.from_state.clone()),
            from_city: Some(refund.from_city.clone()),
            from_street: Some(refund.from_street.clone()),
            to_country: refund.to_country.clone(),
            to_zip: refund.to_zip.clone(),
            to_state: refund.to_state.clone(),
            to_city: refund.to_city.clone(),
            to_street: refund.to_street.clone(),
            amount: refund.amount.unwrap_or_default(),
            shipping: refund.shipping.unwrap_or_default(),
            sales_tax: refund.sales_tax.unwrap_or_default(),
            customer_id: String::new(),
            line_items: refund.line_items.clone(),
        }
    }
}

/// Envelope for single-refund endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundResponse {
    /// The refund payload, absent when the service returns no result.
    pub refund: Option<Refund>,
}

/// Envelope for the refund list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct RefundsResponse {
    /// Identifiers of refunds created through the API.
    pub refunds: Vec<String>,
}
