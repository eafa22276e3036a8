#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! Core types for the TaxJar sales-tax API.
//!
//! This crate provides the foundational pieces shared by every TaxJar
//! client operation: the request/response entity types, the pre-flight
//! request validator, and the endpoint path and query-string builders.
//! It performs no I/O; the HTTP transport lives in `taxjar-http`.
//!
//! # Modules
//!
//! - [`codec`] - Wire-format serde helpers (tolerant strings, date filters)
//! - [`constants`] - API hosts, endpoint segments, and defaults
//! - [`entities`] - Request and response data types
//! - [`paths`] - Endpoint path and query-string construction
//! - [`validation`] - Pre-flight structural request validation

pub mod codec;
pub mod constants;
pub mod entities;
pub mod paths;
pub mod validation;

pub use entities::*;
pub use validation::ValidationError;
