//! Nexus regions and addresses.

use serde::{Deserialize, Serialize};

/// A nexus address passed with tax calculation requests.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusAddress {
    /// Unique identifier of the given nexus address.
    pub id: Option<String>,

    /// Two-letter ISO country code for the nexus address.
    pub country: Option<String>,

    /// Postal code for the nexus address.
    pub zip: Option<String>,

    /// Two-letter ISO state code for the nexus address.
    pub state: Option<String>,

    /// City for the nexus address.
    pub city: Option<String>,

    /// Street address for the nexus address.
    pub street: Option<String>,
}

/// A jurisdiction where the account has a tax-collection obligation.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusRegion {
    /// Two-letter ISO country code for the nexus region.
    pub country_code: Option<String>,

    /// Country name for the nexus region.
    pub country: Option<String>,

    /// Two-letter ISO region code for the nexus region.
    pub region_code: Option<String>,

    /// Region name for the nexus region.
    pub region: Option<String>,
}

/// Envelope for the nexus regions endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct NexusRegionsResponse {
    /// Nexus regions sorted alphabetically.
    pub regions: Vec<NexusRegion>,
}
