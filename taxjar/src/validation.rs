//! Pre-flight structural request validation.
//!
//! Every rule here runs before any network call and collects all
//! missing/invalid fields in one pass, so a caller sees every defect in
//! a single deterministic message. Field and type names in messages
//! match the wire documentation's PascalCase spelling.

use crate::entities::{CustomerRequest, OrderRequest, RefundRequest, TaxCalculationRequest};

/// Fixed message for a blank transaction identifier.
pub const MISSING_TRANSACTION_ID: &str = "Transaction ID cannot be null or an empty string.";

/// Fixed message for a blank customer identifier.
pub const MISSING_CUSTOMER_ID: &str = "Customer ID cannot be null or an empty string.";

/// Fixed message for a blank VAT number.
pub const MISSING_CUSTOMER_VAT: &str = "VAT cannot be null or an empty string.";

/// A structural request defect caught before any network I/O.
///
/// Never retryable; the request was never sent.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{0}")]
pub struct ValidationError(String);

impl ValidationError {
    /// Creates a validation error with the given message.
    #[must_use]
    pub fn new(message: impl Into<String>) -> Self {
        Self(message.into())
    }

    /// Returns the formatted message.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.0
    }
}

fn is_blank(value: &str) -> bool {
    value.trim().is_empty()
}

fn opt_is_blank(value: Option<&str>) -> bool {
    value.is_none_or(is_blank)
}

/// Formats the aggregate invalid-field message.
///
/// One field: `Invalid {Type}. {Field} cannot be null or empty.`
/// Two: `... {Field1} and/or {Field2} ...`
/// Three or more: `... {Field1}, {Field2}, and {FieldN} ...`
fn format_error_message(object_name: &str, invalid_values: &[&str]) -> String {
    let invalid: Vec<&str> = invalid_values
        .iter()
        .copied()
        .filter(|value| !is_blank(value))
        .collect();

    match invalid.as_slice() {
        [single] => format!("Invalid {object_name}. {single} cannot be null or empty."),
        [first, second] => {
            format!("Invalid {object_name}. {first} and/or {second} cannot be null or empty.")
        }
        [head @ .., last] => format!(
            "Invalid {object_name}. {}, and {last} cannot be null or empty.",
            head.join(", ")
        ),
        [] => format!("Invalid {object_name}."),
    }
}

/// Validates a standalone customer identifier.
///
/// # Errors
///
/// Returns [`MISSING_CUSTOMER_ID`] when the identifier is blank.
pub fn validate_customer_id(customer_id: &str) -> Result<(), ValidationError> {
    if is_blank(customer_id) {
        return Err(ValidationError::new(MISSING_CUSTOMER_ID));
    }
    Ok(())
}

/// Validates a customer create/update request.
///
/// The customer identifier is checked first and raised independently;
/// name and exemption type are then checked together.
///
/// # Errors
///
/// Returns the standalone customer-id message, or the aggregate message
/// covering the blank fields among name and exemption type.
pub fn validate_customer(customer: &CustomerRequest) -> Result<(), ValidationError> {
    validate_customer_id(&customer.customer_id)?;

    let mut invalid_values = Vec::new();
    if is_blank(&customer.name) {
        invalid_values.push("Name");
    }
    if is_blank(&customer.exemption_type) {
        invalid_values.push("ExemptionType");
    }

    if !invalid_values.is_empty() {
        return Err(ValidationError::new(format_error_message(
            "Customer",
            &invalid_values,
        )));
    }
    Ok(())
}

/// Validates the zip code for a rates-for-location lookup.
///
/// # Errors
///
/// Returns `Zip is null or empty!` when the zip is absent or blank.
pub fn validate_zip(zip: Option<&str>) -> Result<(), ValidationError> {
    if opt_is_blank(zip) {
        return Err(ValidationError::new("Zip is null or empty!"));
    }
    Ok(())
}

/// Validates a tax calculation request.
///
/// Checks `to_country`, `to_zip`, `to_state`, and `shipping`, and
/// requires either `amount` or at least one line item.
///
/// # Errors
///
/// Returns the aggregate message listing every invalid field; the
/// amount/line-items alternative is appended as its own sentence when
/// other fields are also invalid.
pub fn validate_tax_calculation_request(
    request: &TaxCalculationRequest,
) -> Result<(), ValidationError> {
    let mut invalid_values = Vec::new();
    if is_blank(&request.to_country) {
        invalid_values.push("ToCountry");
    }
    if is_blank(&request.to_zip) {
        invalid_values.push("ToZip");
    }
    if is_blank(&request.to_state) {
        invalid_values.push("ToState");
    }
    if request.shipping.is_none() {
        invalid_values.push("Shipping");
    }

    let amount_or_line_items_missing = request.amount.is_none()
        && request
            .line_items
            .as_ref()
            .is_none_or(|line_items| line_items.is_empty());

    if amount_or_line_items_missing && invalid_values.is_empty() {
        return Err(ValidationError::new(format_error_message(
            "TaxjarTaxCalculationRequest",
            &["Either Amount or LineItems"],
        )));
    }

    if !invalid_values.is_empty() {
        let mut message = format_error_message("TaxjarTaxCalculationRequest", &invalid_values);
        if amount_or_line_items_missing {
            message.push_str(" Additionally, either Amount or LineItems is required.");
        }
        return Err(ValidationError::new(message));
    }
    Ok(())
}

/// Validates a standalone transaction identifier.
///
/// # Errors
///
/// Returns [`MISSING_TRANSACTION_ID`] when the identifier is blank.
pub fn validate_transaction_id(transaction_id: &str) -> Result<(), ValidationError> {
    if is_blank(transaction_id) {
        return Err(ValidationError::new(MISSING_TRANSACTION_ID));
    }
    Ok(())
}

/// Validates an order create request.
///
/// # Errors
///
/// Returns the aggregate message listing every missing field among
/// transaction id/date, destination address, amount, shipping, and
/// sales tax.
pub fn validate_create_order_request(request: &OrderRequest) -> Result<(), ValidationError> {
    let mut invalid_values = Vec::new();
    if is_blank(&request.transaction_id) {
        invalid_values.push("TransactionId");
    }
    if request.transaction_date.is_none() {
        invalid_values.push("TransactionDate");
    }
    if is_blank(&request.to_country) {
        invalid_values.push("ToCountry");
    }
    if is_blank(&request.to_zip) {
        invalid_values.push("ToZip");
    }
    if is_blank(&request.to_state) {
        invalid_values.push("ToState");
    }
    if request.amount.is_none() {
        invalid_values.push("Amount");
    }
    if request.shipping.is_none() {
        invalid_values.push("Shipping");
    }
    if request.sales_tax.is_none() {
        invalid_values.push("SalesTax");
    }

    if !invalid_values.is_empty() {
        return Err(ValidationError::new(format_error_message(
            "TaxjarOrderRequest",
            &invalid_values,
        )));
    }
    Ok(())
}

/// Validates an order update request; only the transaction id is required.
///
/// # Errors
///
/// Returns the aggregate message when the transaction id is blank.
pub fn validate_update_order_request(request: &OrderRequest) -> Result<(), ValidationError> {
    if is_blank(&request.transaction_id) {
        return Err(ValidationError::new(format_error_message(
            "TaxjarOrderRequest",
            &["TransactionId"],
        )));
    }
    Ok(())
}

/// Checks the linked transaction-id pair on a refund request.
///
/// Both identifiers present bypasses the check; if either is blank,
/// both are reported invalid.
fn refund_transaction_pair(request: &RefundRequest) -> Vec<&'static str> {
    if !is_blank(&request.transaction_id) && !is_blank(&request.transaction_reference_id) {
        return Vec::new();
    }
    vec!["TransactionId", "TransactionReferenceId"]
}

/// Validates a refund create request.
///
/// The transaction id and reference id form a linked pair (both or
/// neither); destination country, zip, and state are also required.
///
/// # Errors
///
/// Returns the aggregate message listing every invalid field.
pub fn validate_refund_request(request: &RefundRequest) -> Result<(), ValidationError> {
    let mut invalid_values = refund_transaction_pair(request);

    if is_blank(&request.to_country) {
        invalid_values.push("ToCountry");
    }
    if is_blank(&request.to_zip) {
        invalid_values.push("ToZip");
    }
    if is_blank(&request.to_state) {
        invalid_values.push("ToState");
    }

    if !invalid_values.is_empty() {
        return Err(ValidationError::new(format_error_message(
            "TaxjarRefundRequest",
            &invalid_values,
        )));
    }
    Ok(())
}

/// Validates a refund update request; only the linked pair is checked.
///
/// # Errors
///
/// Returns the aggregate message listing both identifiers when the
/// pair rule is violated.
pub fn validate_update_refund_request(request: &RefundRequest) -> Result<(), ValidationError> {
    let invalid_values = refund_transaction_pair(request);
    if !invalid_values.is_empty() {
        return Err(ValidationError::new(format_error_message(
            "TaxjarRefundRequest",
            &invalid_values,
        )));
    }
    Ok(())
}

/// Validates a standalone VAT number.
///
/// # Errors
///
/// Returns [`MISSING_CUSTOMER_VAT`] when the number is blank.
pub fn validate_vat(vat_number: &str) -> Result<(), ValidationError> {
    if is_blank(vat_number) {
        return Err(ValidationError::new(MISSING_CUSTOMER_VAT));
    }
    Ok(())
}
