// system-tests/tests/suites/key_rejection.rs
// ============================================================================
// Module: Key Rejection Tests
// Description: Missing and invalid access keys against both endpoints.
// Purpose: Confirm the API refuses unauthenticated requests with its message.
// Dependencies: currency-verifier, system-tests helpers
// ============================================================================

//! ## Overview
//! These tests need no valid key. The invalid key defaults to
//! `invalid-access-key` and can be overridden from the environment.
//! Invariants:
//! - Rejections carry the documented `message` body.
//! - No request in this suite includes a valid key.

use std::error::Error;

use currency_verifier::Endpoint;
use currency_verifier::catalog;
use currency_verifier::catalog::INVALID_ACCESS_KEY_MESSAGE;
use helpers::harness::LiveApi;

use crate::helpers;

fn assert_rejected(
    api: &LiveApi,
    test_name: &str,
    scenario: &currency_verifier::Scenario,
) -> Result<(), Box<dyn Error>> {
    let report = api.verify(test_name, scenario)?;
    assert_eq!(report.checks.len(), 1);
    assert!(report.checks[0].expectation.contains(INVALID_ACCESS_KEY_MESSAGE));
    Ok(())
}

#[test]
fn live_missing_key() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    assert_rejected(&api, "live_missing_key", &catalog::missing_key(Endpoint::Live))
}

#[test]
fn live_invalid_key() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let scenario = catalog::invalid_key(Endpoint::Live, &api.invalid_key());
    assert_rejected(&api, "live_invalid_key", &scenario)
}

#[test]
fn historical_missing_key() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    assert_rejected(&api, "historical_missing_key", &catalog::missing_key(Endpoint::Historical))
}

#[test]
fn historical_invalid_key() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let scenario = catalog::invalid_key(Endpoint::Historical, &api.invalid_key());
    assert_rejected(&api, "historical_invalid_key", &scenario)
}
