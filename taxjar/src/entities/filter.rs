//! List-endpoint filters for order and refund transactions.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Optional filters for transaction list endpoints.
///
/// Orders and refunds accept the same filter shape. Every field is
/// optional; set fields are turned into query-string parameters in
/// declaration order. Dates serialize as `yyyy/MM/dd`.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct TransactionFilter {
    /// The date the transactions were originally recorded.
    #[serde(with = "crate::codec::date_filter")]
    pub transaction_date: Option<NaiveDate>,

    /// Start of a date range for which the transactions were recorded.
    #[serde(with = "crate::codec::date_filter")]
    pub from_transaction_date: Option<NaiveDate>,

    /// End of a date range for which the transactions were recorded.
    #[serde(with = "crate::codec::date_filter")]
    pub to_transaction_date: Option<NaiveDate>,

    /// Source of where the transactions were originally recorded.
    /// Defaults to `"api"` on the service side.
    pub provider: Option<String>,
}
