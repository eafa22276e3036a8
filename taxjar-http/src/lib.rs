//! Async HTTP client for the TaxJar sales-tax API.
//!
//! Pairs the typed request/response models, validation, and path
//! building from the [`taxjar`] crate with a [`reqwest`]-backed
//! transport. [`Client`] exposes one method per remote endpoint;
//! [`Config`] captures the token, base URL, timeout, and extra headers
//! once at construction.
//!
//! # Example
//!
//! ```no_run
//! use taxjar::Address;
//! use taxjar_http::{Client, Config};
//!
//! # async fn run() -> Result<(), taxjar_http::Error> {
//! let client = Client::new(Config::new("9e0cd62a22f451701f29c3bde214"))?;
//!
//! let address = Address {
//!     zip: Some("92802".into()),
//!     city: Some("Anaheim".into()),
//!     state: Some("CA".into()),
//!     ..Address::default()
//! };
//! if let Some(rate) = client.rates_for_location(&address).await? {
//!     println!("combined rate: {}", rate.combined_rate);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod error;

pub use client::Client;
pub use config::Config;
pub use error::Error;
