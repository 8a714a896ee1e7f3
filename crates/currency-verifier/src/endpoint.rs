// crates/currency-verifier/src/endpoint.rs
// ============================================================================
// Module: Endpoint Descriptors
// Description: Endpoint paths and the query parameters each one accepts.
// Purpose: Keep the endpoint surface in one typed table.
// Dependencies: serde
// ============================================================================

//! ## Overview
//! The API exposes two read-only endpoints. `live` returns current rates and
//! `historical` returns rates for a given date. Both take the access key plus
//! optional `source` and `currencies` filters; only `historical` takes `date`.

use std::fmt;

use serde::Serialize;

// ============================================================================
// SECTION: Query Parameters
// ============================================================================

/// Query parameters recognized by the API.
///
/// # Invariants
/// - Variants are stable for transcript labeling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum QueryParam {
    /// Access credential. The wire name is configurable on the client.
    AccessKey,
    /// Historical date, `YYYY-MM-DD`.
    Date,
    /// Base currency for all quotes.
    Source,
    /// Comma-separated target currency codes.
    Currencies,
}

impl QueryParam {
    /// Default wire name for the access key parameter.
    pub const DEFAULT_ACCESS_KEY_NAME: &'static str = "access_key";

    /// Returns the wire name, using `access_key_name` for [`Self::AccessKey`].
    #[must_use]
    pub const fn wire_name<'a>(self, access_key_name: &'a str) -> &'a str {
        match self {
            Self::AccessKey => access_key_name,
            Self::Date => "date",
            Self::Source => "source",
            Self::Currencies => "currencies",
        }
    }
}

// ============================================================================
// SECTION: Endpoints
// ============================================================================

/// API endpoints under test.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Endpoint {
    /// Current exchange rates.
    Live,
    /// Exchange rates for a past date.
    Historical,
}

impl Endpoint {
    /// Returns the path segment appended to the base URL.
    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Live => "live",
            Self::Historical => "historical",
        }
    }

    /// Returns the query parameters this endpoint accepts.
    #[must_use]
    pub const fn accepted_params(self) -> &'static [QueryParam] {
        match self {
            Self::Live => &[QueryParam::AccessKey, QueryParam::Source, QueryParam::Currencies],
            Self::Historical => &[
                QueryParam::AccessKey,
                QueryParam::Date,
                QueryParam::Source,
                QueryParam::Currencies,
            ],
        }
    }

    /// Returns the query parameters the remote service requires.
    #[must_use]
    pub const fn required_params(self) -> &'static [QueryParam] {
        match self {
            Self::Live => &[QueryParam::AccessKey],
            Self::Historical => &[QueryParam::AccessKey, QueryParam::Date],
        }
    }

    /// Returns true when `param` may be sent to this endpoint.
    #[must_use]
    pub fn accepts(self, param: QueryParam) -> bool {
        self.accepted_params().contains(&param)
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}
