//! Product tax categories.

use serde::{Deserialize, Serialize};

/// A product category and its corresponding tax code.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Category {
    /// Category name.
    pub name: String,

    /// Tax code to pass on line items for exempt or reduced-rate handling.
    pub product_tax_code: String,

    /// Human-readable description.
    pub description: String,
}

/// Envelope for the categories endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoriesResponse {
    /// All known product categories.
    pub categories: Vec<Category>,
}
