//! Wire-format serde helpers.
//!
//! The remote service is inconsistent about quoting numeric-looking fields
//! (status codes, line-item identifiers), so [`polymorphic_string`] accepts
//! bool/number/string tokens and normalizes them all to a `String`.
//! Date-only filter fields use [`date_filter`], which writes `yyyy/MM/dd`
//! and reads any ISO-8601-parseable string.

/// Reads bool/number/string JSON tokens as a `String`; writes a plain string.
pub mod polymorphic_string {
    use std::fmt;

    use serde::de::{self, Visitor};
    use serde::{Deserializer, Serializer};

    /// Serializes the value as a plain JSON string.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(value: &str, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(value)
    }

    /// Deserializes a string from a string, number, or boolean token.
    ///
    /// # Errors
    ///
    /// Fails on tokens that are not a string, number, or boolean.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<String, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct PolymorphicStringVisitor;

        impl Visitor<'_> for PolymorphicStringVisitor {
            type Value = String;

            fn expecting(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
                formatter.write_str("a string, number, or boolean")
            }

            fn visit_bool<E: de::Error>(self, v: bool) -> Result<Self::Value, E> {
                Ok(v.to_string())
            }

            fn visit_i64<E: de::Error>(self, v: i64) -> Result<Self::Value, E> {
                Ok(v.to_string())
            }

            fn visit_u64<E: de::Error>(self, v: u64) -> Result<Self::Value, E> {
                Ok(v.to_string())
            }

            fn visit_f64<E: de::Error>(self, v: f64) -> Result<Self::Value, E> {
                Ok(v.to_string())
            }

            fn visit_str<E: de::Error>(self, v: &str) -> Result<Self::Value, E> {
                Ok(v.to_owned())
            }

            fn visit_string<E: de::Error>(self, v: String) -> Result<Self::Value, E> {
                Ok(v)
            }
        }

        deserializer.deserialize_any(PolymorphicStringVisitor)
    }
}

/// Date-only filter codec: writes `yyyy/MM/dd`, reads ISO-8601 strings.
///
/// An empty string deserializes to `None` rather than an error; the list
/// endpoints return filters back in that shape.
pub mod date_filter {
    use chrono::{DateTime, NaiveDate, NaiveDateTime};
    use serde::de::Error as _;
    use serde::{Deserialize, Deserializer, Serializer};

    const WIRE_FORMAT: &str = "%Y/%m/%d";

    /// Serializes the date as a `yyyy/MM/dd` string, or `null` when absent.
    ///
    /// # Errors
    ///
    /// Propagates serializer failures.
    pub fn serialize<S>(value: &Option<NaiveDate>, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(date) => serializer.serialize_str(&date.format(WIRE_FORMAT).to_string()),
            None => serializer.serialize_none(),
        }
    }

    /// Deserializes a date from any ISO-8601-parseable string.
    ///
    /// # Errors
    ///
    /// Fails when the string is non-empty and not parseable as a date.
    pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<NaiveDate>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let Some(text) = Option::<String>::deserialize(deserializer)? else {
            return Ok(None);
        };
        if text.is_empty() {
            return Ok(None);
        }
        parse_date(&text)
            .map(Some)
            .ok_or_else(|| D::Error::custom(format!("invalid date string: {text:?}")))
    }

    fn parse_date(text: &str) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(text, "%Y-%m-%d")
            .or_else(|_| NaiveDate::parse_from_str(text, WIRE_FORMAT))
            .ok()
            .or_else(|| {
                DateTime::parse_from_rfc3339(text)
                    .map(|dt| dt.date_naive())
                    .ok()
            })
            .or_else(|| {
                NaiveDateTime::parse_from_str(text, "%Y-%m-%dT%H:%M:%S")
                    .map(|dt| dt.date())
                    .ok()
            })
    }
}
