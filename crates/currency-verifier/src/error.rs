// crates/currency-verifier/src/error.rs
// ============================================================================
// Module: Verifier Errors
// Description: Error taxonomy for request construction, transport, and checks.
// Purpose: Give callers stable variants to match on.
// Dependencies: thiserror
// ============================================================================

//! ## Overview
//! Errors are split by where they arise: building the request, talking to the
//! remote service, or evaluating expectations against a response.

use thiserror::Error;

use crate::expectation::ExpectationFailure;

/// Verifier errors.
///
/// # Invariants
/// - Variants are stable for programmatic handling.
/// - Messages never contain access key values.
#[derive(Debug, Error)]
pub enum VerifierError {
    /// The configured base URL cannot be used.
    #[error("invalid base url: {0}")]
    BaseUrl(String),
    /// The request cannot be rendered for its endpoint.
    #[error("invalid request: {0}")]
    Request(String),
    /// The HTTP client could not be constructed.
    #[error("http client build failed: {0}")]
    ClientBuild(String),
    /// The HTTP exchange failed before a response was received.
    #[error("http request failed: {0}")]
    Transport(String),
    /// One or more authoritative expectations failed.
    #[error("scenario {scenario} failed: {}", summarize(failures))]
    Expectations {
        /// Scenario name.
        scenario: String,
        /// Every failed check, in evaluation order.
        failures: Vec<ExpectationFailure>,
    },
}

/// Joins failure descriptions into a single line.
fn summarize(failures: &[ExpectationFailure]) -> String {
    failures.iter().map(ToString::to_string).collect::<Vec<_>>().join("; ")
}
