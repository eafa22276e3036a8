//! Customer records and exemption regions.

use serde::{Deserialize, Serialize};

/// A country/state pair where a customer is exempt.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ExemptRegion {
    /// Two-letter ISO country code where the customer is exempt.
    pub country: String,

    /// Two-letter ISO state code where the customer is exempt.
    pub state: String,
}

/// Request body for creating or updating a customer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerRequest {
    /// Unique identifier of the given customer. Required.
    pub customer_id: String,

    /// Type of customer exemption: `wholesale`, `government`, `other`,
    /// or `non_exempt`. Required.
    pub exemption_type: String,

    /// Regions where the customer is exempt. When empty, the customer is
    /// treated as exempt or non-exempt everywhere.
    pub exempt_regions: Option<Vec<ExemptRegion>>,

    /// Name of the customer. Required.
    pub name: String,

    /// Two-letter ISO country code of the customer's primary address.
    pub country: Option<String>,

    /// Two-letter ISO state code of the customer's primary address.
    pub state: Option<String>,

    /// Postal code of the customer's primary address.
    pub zip: Option<String>,

    /// City of the customer's primary address.
    pub city: Option<String>,

    /// Street address of the customer's primary address.
    pub street: Option<String>,
}

impl Default for CustomerRequest {
    fn default() -> Self {
        Self {
            customer_id: String::new(),
            exemption_type: "non_exempt".to_owned(),
            exempt_regions: None,
            name: String::new(),
            country: None,
            state: None,
            zip: None,
            city: None,
            street: None,
        }
    }
}

/// A customer as returned by the API.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Customer {
    /// Unique identifier of the given customer.
    pub customer_id: String,

    /// Type of customer exemption.
    pub exemption_type: String,

    /// Regions where the customer is exempt.
    pub exempt_regions: Vec<ExemptRegion>,

    /// Name of the customer.
    pub name: String,

    /// Two-letter ISO country code of the customer's primary address.
    pub country: Option<String>,

    /// Two-letter ISO state code of the customer's primary address.
    pub state: Option<String>,

    /// Postal code of the customer's primary address.
    pub zip: Option<String>,

    /// City of the customer's primary address.
    pub city: Option<String>,

    /// Street address of the customer's primary address.
    pub street: Option<String>,
}

impl From<&Customer> for CustomerRequest {
    fn from(customer: &Customer) -> Self {
        Self {
            customer_id: customer.customer_id.clone(),
            exemption_type: customer.exemption_type.clone(),
            exempt_regions: Some(customer.exempt_regions.clone()),
            name: customer.name.clone(),
            country: customer.country.clone(),
            state: customer.state.clone(),
            zip: customer.zip.clone(),
            city: customer.city.clone(),
            street: customer.street.clone(),
        }
    }
}

/// Envelope for single-customer endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomerResponse {
    /// The customer payload, absent when the service returns no result.
    pub customer: Option<Customer>,
}

/// Envelope for the customer list endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CustomersResponse {
    /// Identifiers of customers created through the API.
    pub customers: Vec<String>,
}
