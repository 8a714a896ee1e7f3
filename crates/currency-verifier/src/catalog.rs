// crates/currency-verifier/src/catalog.rs
// ============================================================================
// Module: Scenario Catalog
// Description: The endpoint and security scenarios exercised against the API.
// Purpose: Keep the request/expectation matrix in one reviewable table.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! Each [`Scenario`] pairs one request with the expectations it must meet.
//! Some scenarios also carry superseded expectations: status-code checks from
//! an earlier revision of the suite that contradict the documented error
//! contract. They are evaluated and reported with a note on the behavior seen
//! live, but the body-field checks are authoritative.

use serde::Serialize;

use crate::endpoint::Endpoint;
use crate::expectation::Expectation;
use crate::request::AccessKey;
use crate::request::ApiRequest;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Base currency every tracked quote is relative to.
pub const DEFAULT_SOURCE: &str = "USD";

/// Target currencies the customer relies on.
pub const TRACKED_CURRENCIES: [&str; 4] = ["CAD", "EUR", "ILS", "RUB"];

/// Quote keys expected in `/live` responses.
pub const TRACKED_PAIRS: [&str; 4] = ["USDCAD", "USDEUR", "USDILS", "USDRUB"];

/// Date used by historical scenarios.
pub const HISTORICAL_DATE: &str = "2024-01-03";

/// Date sent alongside the invalid key on `/historical`.
pub const SECURITY_HISTORICAL_DATE: &str = "2024-01-02";

/// A currency code the API does not know.
pub const INVALID_CURRENCY: &str = "LAA";

/// A `date` value that is not `YYYY-MM-DD`.
pub const INVALID_DATE: &str = "invalid-date";

/// Message returned for missing or invalid access keys.
pub const INVALID_ACCESS_KEY_MESSAGE: &str = "You have not supplied a valid API Access Key.";

/// API error code for an invalid currency code.
pub const ERROR_INVALID_CURRENCY: u16 = 202;

/// API error code for a missing `date`.
pub const ERROR_MISSING_DATE: u16 = 301;

/// API error code for a malformed `date`.
pub const ERROR_INVALID_DATE: u16 = 302;

/// Status the earlier security checks expected for rejected keys.
pub const SUPERSEDED_AUTH_STATUS: u16 = 101;

// ============================================================================
// SECTION: Types
// ============================================================================

/// Scenario grouping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Suite {
    /// Endpoint behavior with a valid key.
    Functional,
    /// Rejection of missing or invalid keys.
    Security,
}

/// An expectation kept for the record but not enforced.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SupersededExpectation {
    /// The superseded check.
    pub expectation: Expectation,
    /// What the live service was observed to do instead.
    pub note: &'static str,
}

/// One request and the checks it must pass.
#[derive(Debug, Clone)]
pub struct Scenario {
    /// Stable scenario name.
    pub name: String,
    /// Scenario grouping.
    pub suite: Suite,
    /// Request to send.
    pub request: ApiRequest,
    /// Authoritative checks.
    pub expectations: Vec<Expectation>,
    /// Checks evaluated for the record only.
    pub superseded: Vec<SupersededExpectation>,
}

impl Scenario {
    /// Creates a scenario with no checks.
    #[must_use]
    pub fn new(name: impl Into<String>, suite: Suite, request: ApiRequest) -> Self {
        Self {
            name: name.into(),
            suite,
            request,
            expectations: Vec::new(),
            superseded: Vec::new(),
        }
    }

    /// Adds an authoritative check.
    #[must_use]
    pub fn expect(mut self, expectation: Expectation) -> Self {
        self.expectations.push(expectation);
        self
    }

    /// Adds a superseded check with the observed-behavior note.
    #[must_use]
    pub fn superseded(mut self, expectation: Expectation, note: &'static str) -> Self {
        self.superseded.push(SupersededExpectation {
            expectation,
            note,
        });
        self
    }
}

/// Keys used to build scenarios.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Credentials {
    /// A key the API accepts.
    pub valid: AccessKey,
    /// A key the API rejects.
    pub invalid: AccessKey,
}

// ============================================================================
// SECTION: Endpoint Scenarios
// ============================================================================

/// `/live` returns the documented success shape relative to USD.
#[must_use]
pub fn live_rates(key: &AccessKey) -> Scenario {
    Scenario::new("live_rates", Suite::Functional, ApiRequest::new(Endpoint::Live).with_access_key(key))
        .expect(Expectation::field_is_bool("success"))
        .expect(Expectation::field_present("timestamp"))
        .expect(Expectation::field_equals("source", DEFAULT_SOURCE))
        .expect(Expectation::field_present("quotes"))
}

/// `/live` timestamp falls on today's local date.
#[must_use]
pub fn live_timestamp(key: &AccessKey) -> Scenario {
    Scenario::new(
        "live_timestamp_is_today",
        Suite::Functional,
        ApiRequest::new(Endpoint::Live).with_access_key(key),
    )
    .expect(Expectation::timestamp_is_today("timestamp"))
}

/// `/live` quotes contain `pair`.
#[must_use]
pub fn live_quote_present(key: &AccessKey, pair: &str) -> Scenario {
    Scenario::new(
        format!("live_quote_{}", pair.to_ascii_lowercase()),
        Suite::Functional,
        ApiRequest::new(Endpoint::Live).with_access_key(key),
    )
    .expect(Expectation::has_key("quotes", pair))
}

/// `/live` accepts the tracked currency filter.
#[must_use]
pub fn live_currency_filter(key: &AccessKey) -> Scenario {
    Scenario::new(
        "live_currency_filter",
        Suite::Functional,
        ApiRequest::new(Endpoint::Live)
            .with_access_key(key)
            .with_source(DEFAULT_SOURCE)
            .with_currencies(TRACKED_CURRENCIES),
    )
    .expect(Expectation::status(200))
}

/// `/live` reports an unknown currency code through `error.code`.
#[must_use]
pub fn live_invalid_currency(key: &AccessKey) -> Scenario {
    Scenario::new(
        "live_invalid_currency",
        Suite::Functional,
        ApiRequest::new(Endpoint::Live)
            .with_access_key(key)
            .with_source(DEFAULT_SOURCE)
            .with_currencies([INVALID_CURRENCY]),
    )
    .expect(Expectation::field_equals("error.code", ERROR_INVALID_CURRENCY))
    .superseded(Expectation::status(ERROR_INVALID_CURRENCY), "live service answers HTTP 200")
}

/// `/historical` succeeds for a valid date.
#[must_use]
pub fn historical_with_date(key: &AccessKey) -> Scenario {
    Scenario::new(
        "historical_with_date",
        Suite::Functional,
        ApiRequest::new(Endpoint::Historical).with_date(HISTORICAL_DATE).with_access_key(key),
    )
    .expect(Expectation::status(200))
}

/// `/historical` reports an empty `date` through `error.code`.
#[must_use]
pub fn historical_without_date(key: &AccessKey) -> Scenario {
    Scenario::new(
        "historical_without_date",
        Suite::Functional,
        ApiRequest::new(Endpoint::Historical).with_date("").with_access_key(key),
    )
    .expect(Expectation::field_equals("error.code", ERROR_MISSING_DATE))
    .superseded(Expectation::status(ERROR_MISSING_DATE), "live service answers HTTP 401")
}

/// `/historical` reports a malformed `date` through `error.code`.
#[must_use]
pub fn historical_invalid_date(key: &AccessKey) -> Scenario {
    Scenario::new(
        "historical_invalid_date",
        Suite::Functional,
        ApiRequest::new(Endpoint::Historical).with_date(INVALID_DATE).with_access_key(key),
    )
    .expect(Expectation::field_equals("error.code", ERROR_INVALID_DATE))
    .superseded(Expectation::status(ERROR_INVALID_DATE), "live service answers HTTP 200")
}

/// `/historical` accepts the tracked currency filter.
#[must_use]
pub fn historical_currency_filter(key: &AccessKey) -> Scenario {
    Scenario::new(
        "historical_currency_filter",
        Suite::Functional,
        ApiRequest::new(Endpoint::Historical)
            .with_date(HISTORICAL_DATE)
            .with_access_key(key)
            .with_source(DEFAULT_SOURCE)
            .with_currencies(TRACKED_CURRENCIES),
    )
    .expect(Expectation::status(200))
}

// ============================================================================
// SECTION: Security Scenarios
// ============================================================================

/// Request without any access key is rejected.
#[must_use]
pub fn missing_key(endpoint: Endpoint) -> Scenario {
    auth_rejected(format!("{}_missing_key", endpoint.path()), ApiRequest::new(endpoint))
}

/// Request with an invalid access key is rejected.
#[must_use]
pub fn invalid_key(endpoint: Endpoint, key: &AccessKey) -> Scenario {
    let request = match endpoint {
        Endpoint::Live => ApiRequest::new(endpoint).with_access_key(key),
        Endpoint::Historical => {
            ApiRequest::new(endpoint).with_date(SECURITY_HISTORICAL_DATE).with_access_key(key)
        }
    };
    auth_rejected(format!("{}_invalid_key", endpoint.path()), request)
}

/// Applies the shared authentication-rejection checks.
fn auth_rejected(name: String, request: ApiRequest) -> Scenario {
    Scenario::new(name, Suite::Security, request)
        .expect(Expectation::field_equals("message", INVALID_ACCESS_KEY_MESSAGE))
        .superseded(
            Expectation::status(SUPERSEDED_AUTH_STATUS),
            "101 is the API error code for key problems, not an HTTP status",
        )
}

// ============================================================================
// SECTION: Catalog
// ============================================================================

/// Returns every scenario, functional first, in a stable order.
#[must_use]
pub fn catalog(credentials: &Credentials) -> Vec<Scenario> {
    let valid = &credentials.valid;
    let mut scenarios = vec![live_rates(valid), live_timestamp(valid)];
    scenarios.extend(TRACKED_PAIRS.iter().map(|pair| live_quote_present(valid, pair)));
    scenarios.extend([
        live_currency_filter(valid),
        live_invalid_currency(valid),
        historical_with_date(valid),
        historical_without_date(valid),
        historical_invalid_date(valid),
        historical_currency_filter(valid),
        missing_key(Endpoint::Live),
        invalid_key(Endpoint::Live, &credentials.invalid),
        missing_key(Endpoint::Historical),
        invalid_key(Endpoint::Historical, &credentials.invalid),
    ]);
    scenarios
}
