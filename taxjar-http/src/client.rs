//! Async client facade for the TaxJar API.
//!
//! Provides [`Client`], one method per remote endpoint. Every call is
//! stateless and follows the same pipeline: validate the request,
//! build the path, execute over HTTP, unwrap the response envelope.

use reqwest::header::{ACCEPT, AUTHORIZATION, HeaderMap, HeaderName, HeaderValue, USER_AGENT};
use serde::Serialize;
use serde::de::DeserializeOwned;
use taxjar::constants::{
    ADDRESSES_VALIDATE_ENDPOINT, CATEGORIES_ENDPOINT, CONTENT_TYPE, CUSTOMERS_ENDPOINT,
    NEXUS_REGIONS_ENDPOINT, PRODUCTION_API_URL, SANDBOX_API_URL, SUMMARY_RATES_ENDPOINT,
    TAXES_ENDPOINT,
    TRANSACTION_ORDERS_ENDPOINT, TRANSACTION_REFUNDS_ENDPOINT, VALIDATION_ENDPOINT,
};
use taxjar::entities::{
    Address, AddressValidationResponse, CategoriesResponse, Category, Customer, CustomerRequest,
    CustomerResponse, CustomersResponse, ErrorResponse, NexusRegion, NexusRegionsResponse, Order,
    OrderRequest, OrderResponse, OrdersResponse, Rate, RateResponse, Refund, RefundRequest,
    RefundResponse, RefundsResponse, SummaryRate, SummaryRatesResponse, Tax, TaxCalculationRequest,
    TaxResponse, TransactionFilter, ValidationResponse, VatValidation,
};
use taxjar::{paths, validation};

use crate::config::Config;
use crate::error::Error;

/// Async client for the TaxJar sales-tax API.
///
/// Construction captures the token, resolved base URL, and default
/// headers once; the client is then safe to share across many
/// concurrent in-flight calls. Dropping a call's future abandons the
/// request without returning a partial payload.
///
/// # Example
///
/// ```no_run
/// use taxjar_http::{Client, Config};
///
/// # async fn run() -> Result<(), taxjar_http::Error> {
/// let client = Client::new(Config::new("9e0cd62a22f451701f29c3bde214"))?;
/// let categories = client.categories().await?;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct Client {
    api_url: String,
    headers: HeaderMap,
    http: reqwest::Client,
}

impl Client {
    /// Creates a client from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Config`] when the token is blank or a custom
    /// header is not representable, and [`Error::Transport`] when the
    /// underlying HTTP client cannot be built.
    pub fn new(config: Config) -> Result<Self, Error> {
        if config.token.trim().is_empty() {
            return Err(Error::Config("Please provide a TaxJar API key.".to_owned()));
        }

        let api_url = resolve_api_url(&config);
        let headers = compose_headers(&config)?;

        let http = match config.http_client {
            Some(client) => client,
            None => reqwest::Client::builder()
                .timeout(config.timeout)
                .build()?,
        };

        Ok(Self {
            api_url,
            headers,
            http,
        })
    }

    /// The resolved base URL every path is appended to. Always ends
    /// with exactly one `/`.
    #[must_use]
    pub fn api_url(&self) -> &str {
        &self.api_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}{path}", self.api_url)
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        method: reqwest::Method,
        path: &str,
        body: Option<&impl Serialize>,
    ) -> Result<T, Error> {
        tracing::debug!(%method, path, "sending request");

        let mut request = self
            .http
            .request(method, self.endpoint(path))
            .headers(self.headers.clone());
        if let Some(body) = body {
            request = request.json(body);
        }

        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            let envelope: ErrorResponse =
                serde_json::from_str(&body).map_err(|source| Error::Decode {
                    status: status.as_u16(),
                    body: body.clone(),
                    source,
                })?;
            tracing::debug!(status = status.as_u16(), error = %envelope.error, "request failed");
            return Err(Error::Api {
                status: status.as_u16(),
                response: envelope,
            });
        }

        serde_json::from_str(&body).map_err(|source| Error::Decode {
            status: status.as_u16(),
            body,
            source,
        })
    }

    async fn get<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.execute(reqwest::Method::GET, path, None::<&()>).await
    }

    async fn post<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        self.execute(reqwest::Method::POST, path, Some(body)).await
    }

    async fn put<T: DeserializeOwned>(
        &self,
        path: &str,
        body: &impl Serialize,
    ) -> Result<T, Error> {
        self.execute(reqwest::Method::PUT, path, Some(body)).await
    }

    async fn delete<T: DeserializeOwned>(&self, path: &str) -> Result<T, Error> {
        self.execute(reqwest::Method::DELETE, path, None::<&()>)
            .await
    }

    /// Lists all tax categories.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn categories(&self) -> Result<Vec<Category>, Error> {
        let response: CategoriesResponse = self.get(CATEGORIES_ENDPOINT).await?;
        Ok(response.categories)
    }

    /// Shows the sales tax rates for a location.
    ///
    /// The zip rides in the path; city, state, country, and street are
    /// sent as query parameters when present.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the zip is blank, plus the
    /// usual transport and API errors.
    pub async fn rates_for_location(&self, address: &Address) -> Result<Option<Rate>, Error> {
        validation::validate_zip(address.zip.as_deref())?;
        let path = paths::rates_for_location_path(address)?;
        let response: RateResponse = self.get(&path).await?;
        Ok(response.rate)
    }

    /// Calculates sales tax for an order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the destination or shipping
    /// is missing, or when neither amount nor line items are set.
    pub async fn tax_for_order(
        &self,
        request: &TaxCalculationRequest,
    ) -> Result<Option<Tax>, Error> {
        validation::validate_tax_calculation_request(request)?;
        let response: TaxResponse = self.post(TAXES_ENDPOINT, request).await?;
        Ok(response.tax)
    }

    /// Creates an order transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] listing every missing required
    /// field before anything is sent.
    pub async fn create_order(&self, request: &OrderRequest) -> Result<Option<Order>, Error> {
        validation::validate_create_order_request(request)?;
        let response: OrderResponse = self.post(TRANSACTION_ORDERS_ENDPOINT, request).await?;
        Ok(response.order)
    }

    /// Updates an order transaction; only the transaction id is
    /// required.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the transaction id is blank.
    pub async fn update_order(&self, request: &OrderRequest) -> Result<Option<Order>, Error> {
        validation::validate_update_order_request(request)?;
        let path = paths::resource_path(TRANSACTION_ORDERS_ENDPOINT, &request.transaction_id);
        let response: OrderResponse = self.put(&path, request).await?;
        Ok(response.order)
    }

    /// Shows an order transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the transaction id is blank.
    pub async fn show_order(
        &self,
        transaction_id: &str,
        provider: Option<&str>,
    ) -> Result<Option<Order>, Error> {
        let path = paths::transaction_path(TRANSACTION_ORDERS_ENDPOINT, transaction_id, provider)?;
        let response: OrderResponse = self.get(&path).await?;
        Ok(response.order)
    }

    /// Lists order transaction ids matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn list_orders(&self, filter: &TransactionFilter) -> Result<Vec<String>, Error> {
        let path = paths::list_path(TRANSACTION_ORDERS_ENDPOINT, filter)?;
        let response: OrdersResponse = self.get(&path).await?;
        Ok(response.orders)
    }

    /// Deletes an order transaction and returns the deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the transaction id is blank.
    pub async fn delete_order(
        &self,
        transaction_id: &str,
        provider: Option<&str>,
    ) -> Result<Option<Order>, Error> {
        let path = paths::transaction_path(TRANSACTION_ORDERS_ENDPOINT, transaction_id, provider)?;
        let response: OrderResponse = self.delete(&path).await?;
        Ok(response.order)
    }

    /// Creates a refund transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the transaction id pair or
    /// the destination fields are incomplete.
    pub async fn create_refund(&self, request: &RefundRequest) -> Result<Option<Refund>, Error> {
        validation::validate_refund_request(request)?;
        let response: RefundResponse = self.post(TRANSACTION_REFUNDS_ENDPOINT, request).await?;
        Ok(response.refund)
    }

    /// Updates a refund transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the transaction id pair is
    /// incomplete.
    pub async fn update_refund(&self, request: &RefundRequest) -> Result<Option<Refund>, Error> {
        validation::validate_update_refund_request(request)?;
        let path = paths::resource_path(TRANSACTION_REFUNDS_ENDPOINT, &request.transaction_id);
        let response: RefundResponse = self.put(&path, request).await?;
        Ok(response.refund)
    }

    /// Shows a refund transaction.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the transaction id is blank.
    pub async fn show_refund(
        &self,
        transaction_id: &str,
        provider: Option<&str>,
    ) -> Result<Option<Refund>, Error> {
        let path = paths::transaction_path(TRANSACTION_REFUNDS_ENDPOINT, transaction_id, provider)?;
        let response: RefundResponse = self.get(&path).await?;
        Ok(response.refund)
    }

    /// Lists refund transaction ids matching the filter.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn list_refunds(&self, filter: &TransactionFilter) -> Result<Vec<String>, Error> {
        let path = paths::list_path(TRANSACTION_REFUNDS_ENDPOINT, filter)?;
        let response: RefundsResponse = self.get(&path).await?;
        Ok(response.refunds)
    }

    /// Deletes a refund transaction and returns the deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the transaction id is blank.
    pub async fn delete_refund(
        &self,
        transaction_id: &str,
        provider: Option<&str>,
    ) -> Result<Option<Refund>, Error> {
        let path = paths::transaction_path(TRANSACTION_REFUNDS_ENDPOINT, transaction_id, provider)?;
        let response: RefundResponse = self.delete(&path).await?;
        Ok(response.refund)
    }

    /// Creates an exempt customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the customer id, name, or
    /// exemption type is blank.
    pub async fn create_customer(
        &self,
        request: &CustomerRequest,
    ) -> Result<Option<Customer>, Error> {
        validation::validate_customer(request)?;
        let response: CustomerResponse = self.post(CUSTOMERS_ENDPOINT, request).await?;
        Ok(response.customer)
    }

    /// Updates an exempt customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the customer id, name, or
    /// exemption type is blank.
    pub async fn update_customer(
        &self,
        request: &CustomerRequest,
    ) -> Result<Option<Customer>, Error> {
        validation::validate_customer(request)?;
        let path = paths::resource_path(CUSTOMERS_ENDPOINT, &request.customer_id);
        let response: CustomerResponse = self.put(&path, request).await?;
        Ok(response.customer)
    }

    /// Shows an exempt customer.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the customer id is blank.
    pub async fn show_customer(&self, customer_id: &str) -> Result<Option<Customer>, Error> {
        validation::validate_customer_id(customer_id)?;
        let path = paths::resource_path(CUSTOMERS_ENDPOINT, customer_id);
        let response: CustomerResponse = self.get(&path).await?;
        Ok(response.customer)
    }

    /// Lists exempt customer ids.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn list_customers(&self) -> Result<Vec<String>, Error> {
        let response: CustomersResponse = self.get(CUSTOMERS_ENDPOINT).await?;
        Ok(response.customers)
    }

    /// Deletes an exempt customer and returns the deleted record.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the customer id is blank.
    pub async fn delete_customer(&self, customer_id: &str) -> Result<Option<Customer>, Error> {
        validation::validate_customer_id(customer_id)?;
        let path = paths::resource_path(CUSTOMERS_ENDPOINT, customer_id);
        let response: CustomerResponse = self.delete(&path).await?;
        Ok(response.customer)
    }

    /// Lists the account's nexus regions.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn nexus_regions(&self) -> Result<Vec<NexusRegion>, Error> {
        let response: NexusRegionsResponse = self.get(NEXUS_REGIONS_ENDPOINT).await?;
        Ok(response.regions)
    }

    /// Validates a postal address, returning matches best-first.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn validate_address(&self, address: &Address) -> Result<Vec<Address>, Error> {
        let response: AddressValidationResponse =
            self.post(ADDRESSES_VALIDATE_ENDPOINT, address).await?;
        Ok(response.addresses)
    }

    /// Validates a VAT number against VIES.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] when the VAT number is blank.
    pub async fn validate_vat(&self, vat_number: &str) -> Result<Option<VatValidation>, Error> {
        validation::validate_vat(vat_number)?;
        let path = paths::resource_path(VALIDATION_ENDPOINT, vat_number);
        let response: ValidationResponse = self.get(&path).await?;
        Ok(response.validation)
    }

    /// Lists minimum and average sales tax rates by region.
    ///
    /// # Errors
    ///
    /// Returns an error on transport failure or a non-2xx response.
    pub async fn summary_rates(&self) -> Result<Vec<SummaryRate>, Error> {
        let response: SummaryRatesResponse = self.get(SUMMARY_RATES_ENDPOINT).await?;
        Ok(response.summary_rates)
    }
}

/// Resolves the base URL once at construction.
///
/// An explicit non-blank URL that does not point at the production
/// host is used verbatim with exactly one trailing slash; otherwise
/// the canonical production or sandbox host gets the version segment
/// appended.
fn resolve_api_url(config: &Config) -> String {
    if let Some(api_url) = &config.api_url {
        if !api_url.trim().is_empty() && !api_url.contains(PRODUCTION_API_URL) {
            return format!("{}/", api_url.trim_end_matches('/'));
        }
    }
    let host = if config.sandbox {
        SANDBOX_API_URL
    } else {
        PRODUCTION_API_URL
    };
    format!("{host}/{}/", config.api_version)
}

fn default_user_agent() -> String {
    format!(
        "TaxJar/Rust ({}; {}) taxjar-http/{}",
        std::env::consts::OS,
        std::env::consts::ARCH,
        env!("CARGO_PKG_VERSION")
    )
}

/// Builds the default header set applied to every request.
///
/// `Authorization` and `Accept` are reserved; caller-supplied entries
/// for either are dropped. A caller-supplied `User-Agent` replaces the
/// computed default.
fn compose_headers(config: &Config) -> Result<HeaderMap, Error> {
    let mut headers = HeaderMap::new();

    let mut authorization = HeaderValue::from_str(&format!("Bearer {}", config.token))
        .map_err(|_| Error::Config("API token contains invalid header characters.".to_owned()))?;
    authorization.set_sensitive(true);
    headers.insert(AUTHORIZATION, authorization);
    headers.insert(ACCEPT, HeaderValue::from_static(CONTENT_TYPE));

    let user_agent = HeaderValue::from_str(&default_user_agent())
        .map_err(|_| Error::Config("computed User-Agent is not a valid header value".to_owned()))?;
    headers.insert(USER_AGENT, user_agent);

    for (name, value) in &config.headers {
        if name.eq_ignore_ascii_case("authorization") || name.eq_ignore_ascii_case("accept") {
            tracing::debug!(header = %name, "dropping reserved header override");
            continue;
        }
        let header_name = HeaderName::from_bytes(name.as_bytes())
            .map_err(|_| Error::Config(format!("invalid header name: {name}")))?;
        let header_value = HeaderValue::from_str(value)
            .map_err(|_| Error::Config(format!("invalid value for header: {name}")))?;
        headers.insert(header_name, header_value);
    }

    Ok(headers)
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use chrono::NaiveDate;
    use rust_decimal::Decimal;
    use serde_json::json;
    use wiremock::matchers::{any, body_json_string, header, method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    use super::*;

    fn client_for(server: &MockServer) -> Client {
        Client::new(Config::new("test-token").with_api_url(server.uri()))
            .expect("client construction")
    }

    #[test]
    fn blank_token_fails_construction() {
        for token in ["", "   "] {
            let err = Client::new(Config::new(token)).expect_err("blank token");
            assert!(matches!(err, Error::Config(_)));
            assert_eq!(err.to_string(), "Please provide a TaxJar API key.");
        }
    }

    #[test]
    fn explicit_url_is_used_verbatim_with_one_trailing_slash() {
        let client = Client::new(
            Config::new("test-token").with_api_url("https://api.example.com//"),
        )
        .expect("client construction");
        assert_eq!(client.api_url(), "https://api.example.com/");
    }

    #[test]
    fn production_host_urls_fall_back_to_versioned_default() {
        let client = Client::new(Config::new("test-token").with_api_url("https://api.taxjar.com"))
            .expect("client construction");
        assert_eq!(client.api_url(), "https://api.taxjar.com/v2/");

        let client = Client::new(Config::new("test-token")).expect("client construction");
        assert_eq!(client.api_url(), "https://api.taxjar.com/v2/");

        let client = Client::new(Config::new("test-token").with_sandbox(true))
            .expect("client construction");
        assert_eq!(client.api_url(), "https://api.sandbox.taxjar.com/v2/");
    }

    #[tokio::test]
    async fn categories_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("Accept", "application/json"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "categories": [
                    {
                        "name": "Digital Goods",
                        "product_tax_code": "31000",
                        "description": "Digital products transferred electronically."
                    }
                ]
            })))
            .expect(1)
            .mount(&server)
            .await;

        let categories = client_for(&server).categories().await.expect("categories");
        assert_eq!(categories.len(), 1);
        assert_eq!(categories[0].name, "Digital Goods");
        assert_eq!(categories[0].product_tax_code, "31000");
    }

    #[tokio::test]
    async fn reserved_headers_cannot_be_overridden() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .and(header("Authorization", "Bearer test-token"))
            .and(header("User-Agent", "checkout-service/2.1"))
            .and(header("X-Request-Source", "checkout"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "categories": [] })))
            .expect(1)
            .mount(&server)
            .await;

        let client = Client::new(
            Config::new("test-token")
                .with_api_url(server.uri())
                .with_header("Authorization", "Bearer stolen")
                .with_header("accept", "text/xml")
                .with_header("User-Agent", "checkout-service/2.1")
                .with_header("X-Request-Source", "checkout"),
        )
        .expect("client construction");

        let categories = client.categories().await.expect("categories");
        assert!(categories.is_empty());
    }

    #[tokio::test]
    async fn unauthorized_maps_to_api_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "error": "Unauthorized",
                "detail": "Not authorized for route 'GET /v2/categories'",
                "status": "401"
            })))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .categories()
            .await
            .expect_err("unauthorized");
        assert_eq!(
            err.to_string(),
            "Unauthorized - Not authorized for route 'GET /v2/categories'"
        );
        assert_eq!(err.status_code(), Some(401));
        let response = err.api_response().expect("api response");
        assert_eq!(response.status_code(), Some(401));
    }

    #[tokio::test]
    async fn undecodable_error_body_maps_to_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
            .mount(&server)
            .await;

        let err = client_for(&server)
            .categories()
            .await
            .expect_err("undecodable body");
        match err {
            Error::Decode { status, body, .. } => {
                assert_eq!(status, 500);
                assert_eq!(body, "Internal Server Error");
            }
            other => panic!("expected decode error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_response_maps_to_timeout_error() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/categories"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({ "categories": [] }))
                    .set_delay(Duration::from_millis(500)),
            )
            .mount(&server)
            .await;

        let client = Client::new(
            Config::new("test-token")
                .with_api_url(server.uri())
                .with_timeout(Duration::from_millis(50)),
        )
        .expect("client construction");

        let err = client.categories().await.expect_err("timeout");
        assert!(matches!(err, Error::Timeout(_)));
    }

    #[tokio::test]
    async fn invalid_request_never_reaches_network() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .create_order(&OrderRequest::default())
            .await
            .expect_err("invalid order");
        assert!(matches!(err, Error::Validation(_)));
    }

    #[tokio::test]
    async fn update_refund_rejects_broken_transaction_pair() {
        let server = MockServer::start().await;
        Mock::given(any())
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let request = RefundRequest {
            transaction_reference_id: "123".into(),
            ..RefundRequest::default()
        };
        let err = client_for(&server)
            .update_refund(&request)
            .await
            .expect_err("broken pair");
        assert_eq!(
            err.to_string(),
            "Invalid TaxjarRefundRequest. TransactionId and/or TransactionReferenceId \
             cannot be null or empty."
        );
    }

    #[tokio::test]
    async fn rates_for_location_sends_zip_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/rates/92802"))
            .and(query_param("city", "Anaheim"))
            .and(query_param("state", "CA"))
            .and(query_param("country", "US"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "rate": {
                    "zip": "92802",
                    "state": "CA",
                    "state_rate": 0.0625,
                    "combined_rate": 0.0775,
                    "freight_taxable": false
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let address = Address {
            zip: Some("92802".into()),
            city: Some("Anaheim".into()),
            state: Some("CA".into()),
            country: Some("US".into()),
            street: None,
        };
        let rate = client_for(&server)
            .rates_for_location(&address)
            .await
            .expect("rate")
            .expect("rate payload");
        assert_eq!(rate.zip, "92802");
        assert_eq!(rate.combined_rate, Decimal::new(775, 4));
        assert!(!rate.freight_taxable);
    }

    #[tokio::test]
    async fn show_order_appends_provider_query() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions/orders/T1"))
            .and(query_param("provider", "myprovider"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "order": { "transaction_id": "T1", "provider": "myprovider" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let order = client_for(&server)
            .show_order("T1", Some("myprovider"))
            .await
            .expect("order")
            .expect("order payload");
        assert_eq!(order.transaction_id, "T1");
        assert_eq!(order.provider, "myprovider");
    }

    #[tokio::test]
    async fn list_orders_formats_date_filters() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions/orders"))
            .and(query_param("from_transaction_date", "2015/05/01"))
            .and(query_param("to_transaction_date", "2015/05/31"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({ "orders": ["20", "21"] })),
            )
            .expect(1)
            .mount(&server)
            .await;

        let filter = TransactionFilter {
            from_transaction_date: NaiveDate::from_ymd_opt(2015, 5, 1),
            to_transaction_date: NaiveDate::from_ymd_opt(2015, 5, 31),
            ..TransactionFilter::default()
        };
        let orders = client_for(&server).list_orders(&filter).await.expect("orders");
        assert_eq!(orders, vec!["20".to_owned(), "21".to_owned()]);
    }

    #[tokio::test]
    async fn absent_envelope_payload_is_no_result() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/transactions/orders/T1"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({})))
            .mount(&server)
            .await;

        let order = client_for(&server)
            .show_order("T1", None)
            .await
            .expect("order");
        assert!(order.is_none());
    }

    #[tokio::test]
    async fn create_customer_unwraps_envelope() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/customers"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "customer": {
                    "customer_id": "123",
                    "exemption_type": "wholesale",
                    "name": "Initech",
                    "exempt_regions": [
                        { "country": "US", "state": "TX" }
                    ]
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = CustomerRequest {
            customer_id: "123".into(),
            exemption_type: "wholesale".into(),
            name: "Initech".into(),
            ..CustomerRequest::default()
        };
        let customer = client_for(&server)
            .create_customer(&request)
            .await
            .expect("customer")
            .expect("customer payload");
        assert_eq!(customer.customer_id, "123");
        assert_eq!(customer.exempt_regions.len(), 1);
        assert_eq!(customer.exempt_regions[0].state, "TX");
    }

    #[tokio::test]
    async fn tax_for_order_posts_validated_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/taxes"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "tax": {
                    "order_total_amount": 16.5,
                    "shipping": 1.5,
                    "taxable_amount": 15.0,
                    "amount_to_collect": 1.35,
                    "rate": 0.09,
                    "has_nexus": true,
                    "freight_taxable": false,
                    "tax_source": "destination"
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let request = TaxCalculationRequest {
            to_country: "US".into(),
            to_zip: "90002".into(),
            to_state: "CA".into(),
            amount: Some(Decimal::new(15, 0)),
            shipping: Some(Decimal::new(15, 1)),
            ..TaxCalculationRequest::default()
        };
        let tax = client_for(&server)
            .tax_for_order(&request)
            .await
            .expect("tax")
            .expect("tax payload");
        assert_eq!(tax.amount_to_collect, Decimal::new(135, 2));
        assert!(tax.has_nexus);
        assert_eq!(tax.tax_source, "destination");
    }

    #[tokio::test]
    async fn validate_vat_rides_in_path() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/validation/FR40303265045"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "validation": {
                    "valid": true,
                    "exists": true,
                    "vies_available": true,
                    "vies_response": {
                        "country_code": "FR",
                        "vat_number": "40303265045",
                        "valid": true
                    }
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let validation = client_for(&server)
            .validate_vat("FR40303265045")
            .await
            .expect("validation")
            .expect("validation payload");
        assert!(validation.valid);
        assert_eq!(
            validation.vies_response.expect("vies response").country_code,
            "FR"
        );
    }

    #[tokio::test]
    async fn refund_omits_zero_monetary_fields_on_the_wire() {
        let server = MockServer::start().await;
        let request = RefundRequest {
            transaction_id: "123-refund".into(),
            transaction_reference_id: "123".into(),
            to_country: "US".into(),
            to_zip: "90002".into(),
            to_state: "CA".into(),
            ..RefundRequest::default()
        };
        let expected_body =
            serde_json::to_string(&request).expect("serialize refund");
        assert!(!expected_body.contains("\"amount\""));
        assert!(!expected_body.contains("\"sales_tax\""));

        Mock::given(method("POST"))
            .and(path("/transactions/refunds"))
            .and(body_json_string(&expected_body))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "refund": { "transaction_id": "123-refund" }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let refund = client_for(&server)
            .create_refund(&request)
            .await
            .expect("refund")
            .expect("refund payload");
        assert_eq!(refund.transaction_id, "123-refund");
    }
}
