// crates/currency-verifier/src/lib.rs
// ============================================================================
// Module: Currency Verifier
// Description: Black-box verification toolkit for currency-conversion HTTP APIs.
// Purpose: Build endpoint requests, capture responses, and evaluate expectations.
// Dependencies: reqwest, serde_json, jsonpath_lib, time, url
// ============================================================================

//! ## Overview
//! This crate drives the `/live` and `/historical` endpoints of a hosted
//! currency-conversion API and checks the responses against a fixed table of
//! scenarios. Each scenario is built fresh, sent as a single blocking GET, and
//! evaluated without shared state.
//! Invariants:
//! - Requests are immutable once built; query parameter order is preserved.
//! - Access keys never appear in transcripts or debug output.
//! - Superseded expectations are evaluated and reported but never fail a scenario.
//!
//! Security posture: remote responses are untrusted; nothing in a response
//! body is executed or used to build follow-up requests.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod catalog;
pub mod client;
pub mod endpoint;
pub mod error;
pub mod expectation;
pub mod request;
pub mod response;
pub mod runner;
pub mod timestamp;

// ============================================================================
// SECTION: Re-Exports
// ============================================================================

pub use catalog::Credentials;
pub use catalog::Scenario;
pub use catalog::SupersededExpectation;
pub use catalog::Suite;
pub use client::ApiClient;
pub use client::ClientConfig;
pub use client::TranscriptEntry;
pub use endpoint::Endpoint;
pub use endpoint::QueryParam;
pub use error::VerifierError;
pub use expectation::Expectation;
pub use expectation::ExpectationFailure;
pub use request::AccessKey;
pub use request::ApiRequest;
pub use response::ApiResponse;
pub use runner::CheckOutcome;
pub use runner::ScenarioReport;
pub use runner::run_scenario;
pub use timestamp::DateContext;
pub use timestamp::TimestampError;
