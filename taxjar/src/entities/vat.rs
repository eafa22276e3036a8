//! VAT number validation results.

use serde::{Deserialize, Serialize};

/// Response from the EU VIES service for a VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ViesResponse {
    /// Two-letter ISO country code of the VAT registration.
    pub country_code: String,

    /// The VAT number that was checked.
    pub vat_number: String,

    /// Date the lookup was performed.
    pub request_date: String,

    /// Whether VIES considers the number valid.
    pub valid: bool,

    /// Registered business name.
    pub name: String,

    /// Registered business address.
    pub address: String,
}

/// Result of validating a VAT number.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct VatValidation {
    /// Whether the VAT number is valid.
    pub valid: bool,

    /// Whether the VAT number exists.
    pub exists: bool,

    /// Whether the VIES service was reachable for the lookup.
    pub vies_available: bool,

    /// Raw VIES response, when available.
    pub vies_response: Option<ViesResponse>,
}

/// Envelope for the VAT validation endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationResponse {
    /// The validation payload, absent when the service returns no result.
    pub validation: Option<VatValidation>,
}
