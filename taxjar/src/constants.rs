//! API hosts, endpoint segments, and client defaults.

/// Canonical production API host.
pub const PRODUCTION_API_URL: &str = "https://api.taxjar.com";

/// Sandbox API host for testing against fake data.
pub const SANDBOX_API_URL: &str = "https://api.sandbox.taxjar.com";

/// Default API version segment.
pub const API_VERSION: &str = "v2";

/// Tax categories endpoint.
pub const CATEGORIES_ENDPOINT: &str = "categories";

/// Rates-for-location endpoint.
pub const RATES_ENDPOINT: &str = "rates";

/// Tax calculation endpoint.
pub const TAXES_ENDPOINT: &str = "taxes";

/// Order transactions endpoint.
pub const TRANSACTION_ORDERS_ENDPOINT: &str = "transactions/orders";

/// Refund transactions endpoint.
pub const TRANSACTION_REFUNDS_ENDPOINT: &str = "transactions/refunds";

/// Customers endpoint.
pub const CUSTOMERS_ENDPOINT: &str = "customers";

/// Nexus regions endpoint.
pub const NEXUS_REGIONS_ENDPOINT: &str = "nexus/regions";

/// Address validation endpoint.
pub const ADDRESSES_VALIDATE_ENDPOINT: &str = "addresses/validate";

/// VAT validation endpoint.
pub const VALIDATION_ENDPOINT: &str = "validation";

/// Summarized rates endpoint.
pub const SUMMARY_RATES_ENDPOINT: &str = "summary_rates";

/// Default per-request timeout in milliseconds.
pub const TIMEOUT_IN_MILLISECONDS: u64 = 10_000;

/// Content type sent and accepted on every request.
pub const CONTENT_TYPE: &str = "application/json";

/// Provider recorded for transactions created through the API.
pub const DEFAULT_PROVIDER: &str = "api";

/// Query-parameter name for the transaction provider.
pub const PROVIDER_PARAMETER: &str = "provider";
