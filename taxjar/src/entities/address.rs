//! Address types used for rate lookups and address validation.

use serde::{Deserialize, Serialize};

/// A postal address.
///
/// Every field is optional; rate lookups additionally require `zip`,
/// which is enforced by [`crate::validation::validate_zip`] before any
/// network call. Field declaration order drives query-string ordering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Address {
    /// Postal code (5-Digit ZIP or ZIP+4).
    pub zip: Option<String>,

    /// City name.
    pub city: Option<String>,

    /// Two-letter ISO state code.
    pub state: Option<String>,

    /// Two-letter ISO country code.
    pub country: Option<String>,

    /// Street address.
    pub street: Option<String>,
}

impl Address {
    /// An address with every field unset.
    ///
    /// Unlike [`Default`], which seeds the country with `"US"`, this
    /// starting point contributes nothing to a query string.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            zip: None,
            city: None,
            state: None,
            country: None,
            street: None,
        }
    }
}

impl Default for Address {
    fn default() -> Self {
        Self {
            zip: None,
            city: None,
            state: None,
            country: Some("US".to_owned()),
            street: None,
        }
    }
}

/// Envelope for the address validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AddressValidationResponse {
    /// Address matches, best match first.
    pub addresses: Vec<Address>,
}
