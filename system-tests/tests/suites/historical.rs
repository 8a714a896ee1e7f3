// system-tests/tests/suites/historical.rs
// ============================================================================
// Module: Historical Endpoint Tests
// Description: Past-date checks against the hosted `/historical` endpoint.
// Purpose: Confirm dated lookups succeed and bad dates surface API error codes.
// Dependencies: currency-verifier, system-tests helpers
// ============================================================================

//! ## Overview
//! Invariants:
//! - An empty `date` yields `error.code` 301; a malformed one yields 302.

use std::error::Error;

use currency_verifier::catalog;
use helpers::harness::LiveApi;

use crate::helpers;

#[test]
fn historical_with_date() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify("historical_with_date", &catalog::historical_with_date(&credentials.valid))?;
    Ok(())
}

#[test]
fn historical_without_date() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify("historical_without_date", &catalog::historical_without_date(&credentials.valid))?;
    Ok(())
}

#[test]
fn historical_invalid_date() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify("historical_invalid_date", &catalog::historical_invalid_date(&credentials.valid))?;
    Ok(())
}

#[test]
fn historical_currency_filter() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify(
        "historical_currency_filter",
        &catalog::historical_currency_filter(&credentials.valid),
    )?;
    Ok(())
}
