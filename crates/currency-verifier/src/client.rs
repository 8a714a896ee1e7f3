// crates/currency-verifier/src/client.rs
// ============================================================================
// Module: API Client
// Description: Blocking HTTP client for the currency API with transcripts.
// Purpose: Send one GET per request and record every exchange.
// Dependencies: reqwest, serde, url, log
// ============================================================================

//! ## Overview
//! [`ApiClient`] sends a single blocking GET per [`ApiRequest`] and captures
//! the full response. Each exchange is appended to a transcript that can be
//! written out as a test artifact. URLs in the transcript and in log output
//! have the access key value replaced.
//! Invariants:
//! - No retries; a transport failure is reported once and recorded.
//! - Non-2xx statuses are responses, not errors.

use std::sync::Arc;
use std::sync::Mutex;
use std::time::Duration;

use log::debug;
use log::trace;
use reqwest::blocking::Client;
use serde::Serialize;
use url::Url;

use crate::endpoint::Endpoint;
use crate::endpoint::QueryParam;
use crate::error::VerifierError;
use crate::request::ApiRequest;
use crate::request::normalize_base;
use crate::response::ApiResponse;

/// Default API base URL.
pub const DEFAULT_BASE_URL: &str = "http://api.currencylayer.com/";

// ============================================================================
// SECTION: Configuration
// ============================================================================

/// Client configuration.
///
/// # Invariants
/// - `base_url` path always ends with `/`.
/// - `timeout = None` keeps the HTTP client's default timeout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL the endpoint path is joined onto.
    base_url: Url,
    /// Wire name for the access key parameter.
    access_key_param: String,
    /// Optional whole-request timeout.
    timeout: Option<Duration>,
    /// User agent for outbound requests.
    user_agent: String,
}

impl ClientConfig {
    /// Creates a configuration for `base_url` with default settings.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::BaseUrl`] when the URL does not parse or
    /// cannot carry a path.
    pub fn new(base_url: &str) -> Result<Self, VerifierError> {
        let parsed =
            Url::parse(base_url).map_err(|err| VerifierError::BaseUrl(format!("{base_url}: {err}")))?;
        match parsed.scheme() {
            "http" | "https" => {}
            other => return Err(VerifierError::BaseUrl(format!("unsupported scheme {other}"))),
        }
        Ok(Self {
            base_url: normalize_base(&parsed)?,
            access_key_param: QueryParam::DEFAULT_ACCESS_KEY_NAME.to_string(),
            timeout: None,
            user_agent: concat!("currency-verifier/", env!("CARGO_PKG_VERSION")).to_string(),
        })
    }

    /// Overrides the access key parameter name.
    #[must_use]
    pub fn with_access_key_param(mut self, name: impl Into<String>) -> Self {
        self.access_key_param = name.into();
        self
    }

    /// Sets a whole-request timeout.
    #[must_use]
    pub const fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Overrides the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Returns the normalized base URL.
    #[must_use]
    pub const fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the access key parameter name.
    #[must_use]
    pub fn access_key_param(&self) -> &str {
        &self.access_key_param
    }

    /// Returns the configured timeout.
    #[must_use]
    pub const fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

// ============================================================================
// SECTION: Transcript
// ============================================================================

/// One recorded HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TranscriptEntry {
    /// 1-based position in the transcript.
    pub sequence: u64,
    /// Endpoint requested.
    pub endpoint: Endpoint,
    /// Request URL with the access key redacted.
    pub url: String,
    /// Response status, when a response arrived.
    pub status: Option<u16>,
    /// Raw response body, when a response arrived.
    pub body: Option<String>,
    /// Transport error, when no response arrived.
    pub error: Option<String>,
}

// ============================================================================
// SECTION: Client
// ============================================================================

/// Blocking client with transcript capture.
#[derive(Debug, Clone)]
pub struct ApiClient {
    /// Client configuration.
    config: ClientConfig,
    /// Underlying HTTP client.
    client: Client,
    /// Shared transcript of exchanges.
    transcript: Arc<Mutex<Vec<TranscriptEntry>>>,
}

impl ApiClient {
    /// Builds a client from `config`.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::ClientBuild`] when the HTTP client cannot be created.
    pub fn new(config: ClientConfig) -> Result<Self, VerifierError> {
        let mut builder = Client::builder().user_agent(config.user_agent.clone());
        if let Some(timeout) = config.timeout {
            builder = builder.timeout(timeout);
        }
        let client = builder.build().map_err(|err| VerifierError::ClientBuild(err.to_string()))?;
        Ok(Self {
            config,
            client,
            transcript: Arc::new(Mutex::new(Vec::new())),
        })
    }

    /// Returns the client configuration.
    #[must_use]
    pub const fn config(&self) -> &ClientConfig {
        &self.config
    }

    /// Returns a snapshot of the transcript entries.
    #[must_use]
    pub fn transcript(&self) -> Vec<TranscriptEntry> {
        self.transcript.lock().map_or_else(|_| Vec::new(), |entries| entries.clone())
    }

    /// Sends `request` as a GET and captures the response.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::Request`] or [`VerifierError::BaseUrl`] when the
    /// URL cannot be rendered, and [`VerifierError::Transport`] when no
    /// response is received.
    pub fn get(&self, request: &ApiRequest) -> Result<ApiResponse, VerifierError> {
        let key_param = self.config.access_key_param.as_str();
        let url = request.to_url(&self.config.base_url, key_param)?;
        let label = request.to_redacted_url(&self.config.base_url, key_param)?.to_string();
        debug!("GET {label}");

        let outcome = self
            .client
            .get(url)
            .send()
            .and_then(|response| {
                let status = response.status().as_u16();
                response.text().map(|text| (status, text))
            })
            .map_err(|err| VerifierError::Transport(err.without_url().to_string()));

        match outcome {
            Ok((status, text)) => {
                debug!("GET {label} -> {status}");
                trace!("GET {label} body: {text}");
                self.record(request.endpoint(), label, Some(status), Some(text.clone()), None);
                Ok(ApiResponse::new(status, text))
            }
            Err(err) => {
                debug!("GET {label} failed: {err}");
                self.record(request.endpoint(), label, None, None, Some(err.to_string()));
                Err(err)
            }
        }
    }

    /// Appends an exchange to the transcript.
    fn record(
        &self,
        endpoint: Endpoint,
        url: String,
        status: Option<u16>,
        body: Option<String>,
        error: Option<String>,
    ) {
        let Ok(mut entries) = self.transcript.lock() else {
            return;
        };
        let sequence = u64::try_from(entries.len()).unwrap_or(u64::MAX).saturating_add(1);
        entries.push(TranscriptEntry {
            sequence,
            endpoint,
            url,
            status,
            body,
            error,
        });
    }
}
