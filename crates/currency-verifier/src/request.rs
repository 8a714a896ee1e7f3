// crates/currency-verifier/src/request.rs
// ============================================================================
// Module: Request Construction
// Description: Immutable endpoint requests with ordered query parameters.
// Purpose: Render requests into URLs and redacted transcript labels.
// Dependencies: url
// ============================================================================

//! ## Overview
//! An [`ApiRequest`] is an endpoint plus an ordered list of query parameters.
//! Parameters are rendered in insertion order, and a parameter may carry an
//! empty value so that "present but empty" (`date=`) stays distinct from
//! "absent". Rendering fails closed when a parameter is not accepted by the
//! endpoint.

use std::fmt;

use url::Url;

use crate::endpoint::Endpoint;
use crate::endpoint::QueryParam;
use crate::error::VerifierError;

/// Placeholder substituted for access key values in recorded URLs.
pub const REDACTED: &str = "REDACTED";

// ============================================================================
// SECTION: Access Key
// ============================================================================

/// API access credential.
///
/// # Invariants
/// - `Debug` output never includes the key value.
#[derive(Clone, PartialEq, Eq)]
pub struct AccessKey(String);

impl AccessKey {
    /// Wraps a raw key value.
    #[must_use]
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    /// Returns the raw key value for placing on the wire.
    #[must_use]
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for AccessKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("AccessKey(REDACTED)")
    }
}

// ============================================================================
// SECTION: Request
// ============================================================================

/// A single GET request against one endpoint.
#[derive(Clone, PartialEq, Eq)]
pub struct ApiRequest {
    /// Target endpoint.
    endpoint: Endpoint,
    /// Query parameters in wire order.
    params: Vec<(QueryParam, String)>,
}

impl ApiRequest {
    /// Starts a request with no query parameters.
    #[must_use]
    pub const fn new(endpoint: Endpoint) -> Self {
        Self {
            endpoint,
            params: Vec::new(),
        }
    }

    /// Appends a query parameter. Empty values are kept.
    #[must_use]
    pub fn with_param(mut self, param: QueryParam, value: impl Into<String>) -> Self {
        self.params.push((param, value.into()));
        self
    }

    /// Appends the access key parameter.
    #[must_use]
    pub fn with_access_key(self, key: &AccessKey) -> Self {
        self.with_param(QueryParam::AccessKey, key.expose())
    }

    /// Appends the `date` parameter.
    #[must_use]
    pub fn with_date(self, date: impl Into<String>) -> Self {
        self.with_param(QueryParam::Date, date)
    }

    /// Appends the `source` parameter.
    #[must_use]
    pub fn with_source(self, source: impl Into<String>) -> Self {
        self.with_param(QueryParam::Source, source)
    }

    /// Appends the `currencies` parameter, joining codes with commas.
    #[must_use]
    pub fn with_currencies<I, S>(self, codes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let joined = codes.into_iter().map(|code| code.as_ref().to_string()).collect::<Vec<_>>();
        self.with_param(QueryParam::Currencies, joined.join(","))
    }

    /// Returns the target endpoint.
    #[must_use]
    pub const fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    /// Returns the query parameters in wire order.
    #[must_use]
    pub fn params(&self) -> &[(QueryParam, String)] {
        &self.params
    }

    /// Returns the value of the first occurrence of `param`.
    #[must_use]
    pub fn param(&self, param: QueryParam) -> Option<&str> {
        self.params.iter().find(|(name, _)| *name == param).map(|(_, value)| value.as_str())
    }

    /// Renders the full request URL.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::BaseUrl`] when the base cannot be joined and
    /// [`VerifierError::Request`] when a parameter is not accepted by the endpoint.
    pub fn to_url(&self, base: &Url, access_key_name: &str) -> Result<Url, VerifierError> {
        self.render(base, access_key_name, false)
    }

    /// Renders the request URL with the access key value replaced by [`REDACTED`].
    ///
    /// # Errors
    ///
    /// Same conditions as [`Self::to_url`].
    pub fn to_redacted_url(&self, base: &Url, access_key_name: &str) -> Result<Url, VerifierError> {
        self.render(base, access_key_name, true)
    }

    /// Joins the endpoint path and appends parameters in order.
    fn render(&self, base: &Url, access_key_name: &str, redact: bool) -> Result<Url, VerifierError> {
        if let Some((param, _)) = self.params.iter().find(|(param, _)| !self.endpoint.accepts(*param)) {
            return Err(VerifierError::Request(format!(
                "{} is not accepted by /{}",
                param.wire_name(access_key_name),
                self.endpoint
            )));
        }
        let mut url = normalize_base(base)?
            .join(self.endpoint.path())
            .map_err(|err| VerifierError::BaseUrl(err.to_string()))?;
        if !self.params.is_empty() {
            let mut pairs = url.query_pairs_mut();
            pairs.clear();
            for (param, value) in &self.params {
                let value = if redact && *param == QueryParam::AccessKey && !value.is_empty() {
                    REDACTED
                } else {
                    value.as_str()
                };
                pairs.append_pair(param.wire_name(access_key_name), value);
            }
        }
        Ok(url)
    }
}

impl fmt::Debug for ApiRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .params
            .iter()
            .map(|(param, value)| match param {
                QueryParam::AccessKey if !value.is_empty() => (*param, REDACTED),
                _ => (*param, value.as_str()),
            })
            .collect::<Vec<_>>();
        f.debug_struct("ApiRequest").field("endpoint", &self.endpoint).field("params", &params).finish()
    }
}

// ============================================================================
// SECTION: Helpers
// ============================================================================

/// Ensures the base path ends with `/` so joins keep every base segment.
///
/// # Errors
///
/// Returns [`VerifierError::BaseUrl`] for URLs that cannot carry a path.
pub fn normalize_base(base: &Url) -> Result<Url, VerifierError> {
    if base.cannot_be_a_base() {
        return Err(VerifierError::BaseUrl(format!("{base} cannot be a base url")));
    }
    let mut normalized = base.clone();
    normalized.set_query(None);
    normalized.set_fragment(None);
    if !normalized.path().ends_with('/') {
        let path = format!("{}/", normalized.path());
        normalized.set_path(&path);
    }
    Ok(normalized)
}
