//! Order transaction requests and responses.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::LineItem;

/// Request body for creating or updating an order transaction.
///
/// See [`crate::validation::validate_create_order_request`] for the
/// fields required on create; updates only require `transaction_id`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderRequest {
    /// Unique identifier of the given order transaction. Required.
    pub transaction_id: String,

    /// The date/time the transaction was originally recorded.
    pub transaction_date: Option<DateTime<Utc>>,

    /// Source of where the transaction was originally recorded.
    /// Defaults to `"api"` on the service side.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub provider: Option<String>,

    /// Type of exemption for the order: `wholesale`, `government`,
    /// `marketplace`, `other`, or `non_exempt`.
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

    /// Total amount of the order with shipping, excluding sales tax,
    /// in dollars.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,

    /// Total amount of shipping for the order in dollars.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub shipping: Option<Decimal>,

    /// Total amount of sales tax collected for the order in dollars.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub sales_tax: Option<Decimal>,

    /// Unique identifier of the given customer for exemptions.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub customer_id: Option<String>,

    /// Line items of the order.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub line_items: Option<Vec<LineItem>>,
}

/// An order transaction as returned by the API.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Order {
    /// Unique identifier of the given order transaction.
    pub transaction_id: String,

    /// Unique identifier of the user who created the order transaction.
    pub user_id: i64,

    /// The date/time the transaction was originally recorded.
    pub transaction_date: Option<DateTime<Utc>>,

    /// Source of where the transaction was originally recorded.
    pub provider: String,

    /// Type of exemption for the order, when present.
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

    /// Total amount of the order with shipping, excluding sales tax.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub amount: Option<Decimal>,

    /// Total amount of shipping for the order.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub shipping: Option<Decimal>,

    /// Total amount of sales tax collected for the order.
    #[serde(skip_serializing_if = "Option::is_none", with = "rust_decimal::serde::float_option")]
    pub sales_tax: Option<Decimal>,

    /// Line items of the order.
    pub line_items: Option<Vec<LineItem>>,
}

impl From<&Order> for OrderRequest {
    fn from(order: &Order) -> Self {
        Self {
            transaction_id: order.transaction_id.clone(),
            transaction_date: order.transaction_date,
            provider: Some(order.provider.clone()),
            exemption_type: order.exemption_type.clone(),
            from_country: order.from_country.clone(),
            from_zip: order.from_zip.clone(),
            from_state: order.from_state.clone(),
            from_city: order.from_city.clone(),
            from_street: order.from_street.clone(),
            to_country: order.to_country.clone(),
            to_zip: order.to_zip.clone(),
            to_state: order.to_state.clone(),
            to_city: order.to_city.clone(),
            to_street: order.to_street.clone(),
            amount: order.amount,
            shipping: order.shipping,
            sales_tax: order.sales_tax,
            customer_id: None,
            line_items: order.line_items.clone(),
        }
    }
}

/// Envelope for single-order endpoints.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrderResponse {
    /// The order payload, absent when the service returns no result.
    pub order: Option<Order>,
}

/// Envelope for the order list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct OrdersResponse {
    /// Identifiers of orders created through the API.
    pub orders: Vec<String>,
}

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn order_request_round_trips_through_wire_form() {
        let request = OrderRequest {
            transaction_id: "123".into(),
            transaction_date: Some(Utc.with_ymd_and_hms(2015, 5, 14, 12, 30, 0).unwrap()),
            provider: Some("api".into()),
            exemption_type: Some("wholesale".into()),
            from_country: "US".into(),
            from_zip: "93013".into(),
            from_state: "CA".into(),
            from_city: "Carpinteria".into(),
            from_street: "1218 Casitas Pass Rd".into(),
            to_country: "US".into(),
            to_zip: "90002".into(),
            to_state: "CA".into(),
            to_city: "Los Angeles".into(),
            to_street: "123 Palm Grove Ln".into(),
            amount: Some(Decimal::new(165, 1)),
            shipping: Some(Decimal::new(15, 1)),
            sales_tax: Some(Decimal::new(95, 2)),
            customer_id: Some("123".into()),
            line_items: Some(vec![LineItem {
                id: "1".into(),
                quantity: 1,
                product_identifier: Some("12-34243-9".into()),
                description: Some("Fuzzy Widget".into()),
                product_tax_code: Some("20010".into()),
                unit_price: Some(Decimal::new(15, 0)),
                discount: Some(Decimal::ZERO),
                sales_tax: Some(Decimal::new(95, 2)),
            }]),
        };

        let json = serde_json::to_string(&request).expect("serialize");
        let decoded: OrderRequest = serde_json::from_str(&json).expect("deserialize");
        assert_eq!(decoded, request);
    }

    #[test]
    fn monetary_fields_read_quoted_tokens() {
        let decoded: OrderRequest = serde_json::from_str(
            r#"{"transaction_id":"123","amount":"16.5","shipping":"1.5","sales_tax":"0.95"}"#,
        )
        .expect("quoted monetary fields");
        assert_eq!(decoded.amount, Some(Decimal::new(165, 1)));
        assert_eq!(decoded.shipping, Some(Decimal::new(15, 1)));
        assert_eq!(decoded.sales_tax, Some(Decimal::new(95, 2)));
    }
}
