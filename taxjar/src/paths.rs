//! Endpoint path and query-string construction.
//!
//! Paths are built relative to the resolved API base URL, so none of
//! these functions emit a leading slash. Query strings are derived from
//! a request object's JSON wire form, which keeps the parameter names
//! and value formats identical to what a request body would carry.

use serde::Serialize;

use crate::entities::Address;
use crate::validation::{self, ValidationError};

/// Joins a collection endpoint and a resource identifier.
#[must_use]
pub fn resource_path(endpoint: &str, id: &str) -> String {
    format!("{endpoint}/{id}")
}

/// Serializes an object into a flat query string.
///
/// The object is taken through its JSON wire form; null entries and
/// blank keys or values are dropped, values are URL-encoded, and the
/// remaining pairs are joined with `&` in field declaration order.
/// Returns an empty string when nothing remains.
///
/// # Errors
///
/// Returns a serialization error when the object cannot be represented
/// as JSON.
pub fn object_to_query_string<T: Serialize>(object: &T) -> Result<String, serde_json::Error> {
    let value = serde_json::to_value(object)?;
    let serde_json::Value::Object(map) = value else {
        return Ok(String::new());
    };

    let mut pairs = Vec::with_capacity(map.len());
    for (key, value) in &map {
        if key.trim().is_empty() {
            continue;
        }
        let text = match value {
            serde_json::Value::String(s) => s.clone(),
            serde_json::Value::Number(n) => n.to_string(),
            serde_json::Value::Bool(b) => b.to_string(),
            _ => continue,
        };
        if text.trim().is_empty() {
            continue;
        }
        let encoded: String = url::form_urlencoded::byte_serialize(text.as_bytes()).collect();
        pairs.push(format!("{key}={encoded}"));
    }
    Ok(pairs.join("&"))
}

/// Builds the rates-for-location path for an address.
///
/// The zip rides in the path segment, so it is cleared from the copy
/// used for the query string; `?` is appended only when a non-empty
/// query string remains.
///
/// # Errors
///
/// Returns a serialization error when the address cannot be represented
/// as JSON.
pub fn rates_for_location_path(address: &Address) -> Result<String, serde_json::Error> {
    let zip = address.zip.clone().unwrap_or_default();
    let mut query_source = address.clone();
    query_source.zip = None;

    let query = object_to_query_string(&query_source)?;
    if query.is_empty() {
        Ok(format!("{}/{zip}", crate::constants::RATES_ENDPOINT))
    } else {
        Ok(format!("{}/{zip}?{query}", crate::constants::RATES_ENDPOINT))
    }
}

/// Builds a single-transaction path with an optional provider parameter.
///
/// `?provider={provider}` is appended only when the provider is present
/// and non-blank.
///
/// # Errors
///
/// Returns a validation error when the transaction id is blank.
pub fn transaction_path(
    endpoint: &str,
    transaction_id: &str,
    provider: Option<&str>,
) -> Result<String, ValidationError> {
    validation::validate_transaction_id(transaction_id)?;

    let base = resource_path(endpoint, transaction_id);
    match provider {
        Some(provider) if !provider.trim().is_empty() => Ok(format!(
            "{base}?{}={provider}",
            crate::constants::PROVIDER_PARAMETER
        )),
        _ => Ok(base),
    }
}

/// Builds a list path with a filter query string.
///
/// The `?` is always appended, even when the filter serializes to
/// nothing, so an unfiltered list ends with a bare `?`.
///
/// # Errors
///
/// Returns a serialization error when the filter cannot be represented
/// as JSON.
pub fn list_path<T: Serialize>(endpoint: &str, filter: &T) -> Result<String, serde_json::Error> {
    let query = object_to_query_string(filter)?;
    Ok(format!("{endpoint}?{query}"))
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;
    use crate::constants::{TRANSACTION_ORDERS_ENDPOINT, TRANSACTION_REFUNDS_ENDPOINT};
    use crate::entities::TransactionFilter;

    #[test]
    fn resource_path_joins_with_slash() {
        assert_eq!(resource_path("customers", "123"), "customers/123");
    }

    #[test]
    fn query_string_follows_declaration_order() {
        let address = Address {
            city: Some("Anaheim".into()),
            state: Some("CA".into()),
            country: Some("US".into()),
            ..Address::empty()
        };
        assert_eq!(
            object_to_query_string(&address).unwrap(),
            "city=Anaheim&state=CA&country=US"
        );
    }

    #[test]
    fn query_string_drops_null_and_blank_values() {
        let address = Address {
            city: Some("  ".into()),
            state: Some("CA".into()),
            ..Address::empty()
        };
        assert_eq!(object_to_query_string(&address).unwrap(), "state=CA");
        assert_eq!(object_to_query_string(&Address::empty()).unwrap(), "");
    }

    #[test]
    fn query_string_url_encodes_values() {
        let address = Address {
            city: Some("San Francisco".into()),
            street: Some("600 Montgomery St".into()),
            ..Address::empty()
        };
        assert_eq!(
            object_to_query_string(&address).unwrap(),
            "city=San+Francisco&street=600+Montgomery+St"
        );
    }

    #[test]
    fn rates_path_carries_zip_in_segment_not_query() {
        let address = Address {
            zip: Some("92802".into()),
            city: Some("Anaheim".into()),
            state: Some("CA".into()),
            country: Some("US".into()),
            street: None,
        };
        assert_eq!(
            rates_for_location_path(&address).unwrap(),
            "rates/92802?city=Anaheim&state=CA&country=US"
        );
    }

    #[test]
    fn rates_path_omits_question_mark_for_bare_zip() {
        let address = Address {
            zip: Some("92802".into()),
            ..Address::empty()
        };
        assert_eq!(rates_for_location_path(&address).unwrap(), "rates/92802");
    }

    #[test]
    fn transaction_path_appends_provider_only_when_present() {
        assert_eq!(
            transaction_path(TRANSACTION_ORDERS_ENDPOINT, "T1", Some("myprovider")).unwrap(),
            "transactions/orders/T1?provider=myprovider"
        );
        assert_eq!(
            transaction_path(TRANSACTION_ORDERS_ENDPOINT, "T1", None).unwrap(),
            "transactions/orders/T1"
        );
        assert_eq!(
            transaction_path(TRANSACTION_ORDERS_ENDPOINT, "T1", Some(" ")).unwrap(),
            "transactions/orders/T1"
        );
    }

    #[test]
    fn transaction_path_rejects_blank_id() {
        let err = transaction_path(TRANSACTION_REFUNDS_ENDPOINT, " ", None).unwrap_err();
        assert_eq!(
            err.to_string(),
            "Transaction ID cannot be null or an empty string."
        );
    }

    #[test]
    fn list_path_always_appends_question_mark() {
        let filter = TransactionFilter::default();
        assert_eq!(
            list_path(TRANSACTION_ORDERS_ENDPOINT, &filter).unwrap(),
            "transactions/orders?"
        );
    }

    #[test]
    fn list_path_formats_date_filters_with_slashes() {
        let filter = TransactionFilter {
            from_transaction_date: NaiveDate::from_ymd_opt(2015, 5, 1),
            to_transaction_date: NaiveDate::from_ymd_opt(2015, 5, 31),
            ..TransactionFilter::default()
        };
        assert_eq!(
            list_path(TRANSACTION_REFUNDS_ENDPOINT, &filter).unwrap(),
            "transactions/refunds?from_transaction_date=2015%2F05%2F01&to_transaction_date=2015%2F05%2F31"
        );
    }
}
