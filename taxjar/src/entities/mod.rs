//! Request and response data types for the TaxJar API.
//!
//! All entities are plain immutable value records exchanged with the
//! remote service. Wire field names are lower snake_case throughout;
//! response envelopes wrap the payload under a single top-level key.

mod address;
mod category;
mod customer;
mod error;
mod filter;
mod line_item;
mod nexus;
mod order;
mod rate;
mod refund;
mod summary_rate;
mod tax;
mod vat;

pub use address::{Address, AddressValidationResponse};
pub use category::{CategoriesResponse, Category};
pub use customer::{
    Customer, CustomerRequest, CustomerResponse, CustomersResponse, ExemptRegion,
};
pub use error::ErrorResponse;
pub use filter::TransactionFilter;
pub use line_item::{LineItem, TaxLineItem};
pub use nexus::{NexusAddress, NexusRegion, NexusRegionsResponse};
pub use order::{Order, OrderRequest, OrderResponse, OrdersResponse};
pub use rate::{Rate, RateResponse};
pub use refund::{Refund, RefundRequest, RefundResponse, RefundsResponse};
pub use summary_rate::{SummaryRate, SummaryRateObject, SummaryRatesResponse};
pub use tax::{
    Breakdown, Tax, TaxBreakdown, TaxBreakdownLineItem, TaxBreakdownShipping, TaxCalculationRequest,
    TaxJurisdictions, TaxResponse,
};
pub use vat::{ValidationResponse, VatValidation, ViesResponse};
