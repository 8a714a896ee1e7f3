// system-tests/tests/suites/live.rs
// ============================================================================
// Module: Live Endpoint Tests
// Description: Current-rate checks against the hosted `/live` endpoint.
// Purpose: Confirm response shape, freshness, tracked quotes, and filters.
// Dependencies: currency-verifier, system-tests helpers
// ============================================================================

//! ## Overview
//! Each test runs one catalog scenario with the configured valid key.
//! Invariants:
//! - `/live` quotes are relative to USD and carry today's timestamp.
//! - Unknown currency codes surface as `error.code` 202 in the body.

use std::error::Error;

use currency_verifier::catalog;
use currency_verifier::catalog::TRACKED_PAIRS;
use helpers::harness::LiveApi;

use crate::helpers;

#[test]
fn live_rates_shape() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify("live_rates_shape", &catalog::live_rates(&credentials.valid))?;
    Ok(())
}

#[test]
fn live_timestamp_is_today() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify("live_timestamp_is_today", &catalog::live_timestamp(&credentials.valid))?;
    Ok(())
}

#[test]
fn live_quote_usdcad() -> Result<(), Box<dyn Error>> {
    quote_present("live_quote_usdcad", "USDCAD")
}

#[test]
fn live_quote_usdeur() -> Result<(), Box<dyn Error>> {
    quote_present("live_quote_usdeur", "USDEUR")
}

#[test]
fn live_quote_usdils() -> Result<(), Box<dyn Error>> {
    quote_present("live_quote_usdils", "USDILS")
}

#[test]
fn live_quote_usdrub() -> Result<(), Box<dyn Error>> {
    quote_present("live_quote_usdrub", "USDRUB")
}

#[test]
fn live_currency_filter() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify("live_currency_filter", &catalog::live_currency_filter(&credentials.valid))?;
    Ok(())
}

#[test]
fn live_invalid_currency() -> Result<(), Box<dyn Error>> {
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    let report =
        api.verify("live_invalid_currency", &catalog::live_invalid_currency(&credentials.valid))?;
    assert_eq!(report.superseded.len(), 1);
    Ok(())
}

fn quote_present(test_name: &str, pair: &str) -> Result<(), Box<dyn Error>> {
    assert!(TRACKED_PAIRS.contains(&pair));
    let api = LiveApi::from_env()?;
    let credentials = api.credentials()?;
    api.verify(test_name, &catalog::live_quote_present(&credentials.valid, pair))?;
    Ok(())
}
