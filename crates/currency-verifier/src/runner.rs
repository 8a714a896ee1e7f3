// crates/currency-verifier/src/runner.rs
// ============================================================================
// Module: Scenario Runner
// Description: Sends a scenario's request and evaluates its expectations.
// Purpose: Produce a serializable report listing every check outcome.
// Dependencies: serde, log
// ============================================================================

//! ## Overview
//! Running a scenario is one request followed by every check. All
//! authoritative checks are evaluated even after a failure so the report shows
//! the full picture. Superseded checks are evaluated for the record and never
//! affect [`ScenarioReport::passed`].

use log::debug;
use log::info;
use serde::Serialize;

use crate::catalog::Scenario;
use crate::catalog::Suite;
use crate::client::ApiClient;
use crate::error::VerifierError;
use crate::expectation::Expectation;
use crate::expectation::ExpectationFailure;
use crate::response::ApiResponse;
use crate::timestamp::DateContext;

// ============================================================================
// SECTION: Reports
// ============================================================================

/// Outcome of one check.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CheckOutcome {
    /// Description of the check.
    pub expectation: String,
    /// Whether the check held.
    pub passed: bool,
    /// Observed value when the check failed.
    pub actual: Option<String>,
    /// Observed-behavior note for superseded checks.
    pub note: Option<&'static str>,
}

/// Outcome of one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioReport {
    /// Scenario name.
    pub scenario: String,
    /// Scenario grouping.
    pub suite: Suite,
    /// HTTP status received.
    pub status: u16,
    /// Authoritative check outcomes, in declaration order.
    pub checks: Vec<CheckOutcome>,
    /// Superseded check outcomes, in declaration order.
    pub superseded: Vec<CheckOutcome>,
}

impl ScenarioReport {
    /// Returns true when every authoritative check held.
    #[must_use]
    pub fn passed(&self) -> bool {
        self.checks.iter().all(|check| check.passed)
    }

    /// Returns the failed authoritative checks.
    #[must_use]
    pub fn failures(&self) -> Vec<ExpectationFailure> {
        self.checks
            .iter()
            .filter(|check| !check.passed)
            .map(|check| ExpectationFailure {
                expectation: check.expectation.clone(),
                actual: check.actual.clone().unwrap_or_default(),
            })
            .collect()
    }

    /// Converts failed authoritative checks into an error.
    ///
    /// # Errors
    ///
    /// Returns [`VerifierError::Expectations`] listing every failed check.
    pub fn ensure_passed(&self) -> Result<(), VerifierError> {
        let failures = self.failures();
        if failures.is_empty() {
            return Ok(());
        }
        Err(VerifierError::Expectations {
            scenario: self.scenario.clone(),
            failures,
        })
    }
}

// ============================================================================
// SECTION: Execution
// ============================================================================

/// Sends the scenario's request and evaluates its checks.
///
/// # Errors
///
/// Returns [`VerifierError`] when the request cannot be built or sent. Failed
/// checks are reported in the returned [`ScenarioReport`], not as errors.
pub fn run_scenario(
    client: &ApiClient,
    scenario: &Scenario,
    dates: &DateContext,
) -> Result<ScenarioReport, VerifierError> {
    let response = client.get(&scenario.request)?;
    Ok(evaluate(scenario, &response, dates))
}

/// Evaluates the scenario's checks against a captured response.
#[must_use]
pub fn evaluate(scenario: &Scenario, response: &ApiResponse, dates: &DateContext) -> ScenarioReport {
    let checks = scenario
        .expectations
        .iter()
        .map(|expectation| outcome(expectation, response, dates, None))
        .collect::<Vec<_>>();
    let superseded = scenario
        .superseded
        .iter()
        .map(|entry| outcome(&entry.expectation, response, dates, Some(entry.note)))
        .collect::<Vec<_>>();

    for check in superseded.iter().filter(|check| !check.passed) {
        debug!(
            "scenario {}: superseded check {} did not hold ({})",
            scenario.name,
            check.expectation,
            check.note.unwrap_or_default()
        );
    }
    let failed = checks.iter().filter(|check| !check.passed).count();
    info!(
        "scenario {}: status {}, {} of {} checks passed",
        scenario.name,
        response.status(),
        checks.len().saturating_sub(failed),
        checks.len()
    );

    ScenarioReport {
        scenario: scenario.name.clone(),
        suite: scenario.suite,
        status: response.status(),
        checks,
        superseded,
    }
}

/// Evaluates one check into an outcome record.
fn outcome(
    expectation: &Expectation,
    response: &ApiResponse,
    dates: &DateContext,
    note: Option<&'static str>,
) -> CheckOutcome {
    match expectation.check(response, dates) {
        Ok(()) => CheckOutcome {
            expectation: expectation.to_string(),
            passed: true,
            actual: None,
            note,
        },
        Err(failure) => CheckOutcome {
            expectation: failure.expectation,
            passed: false,
            actual: Some(failure.actual),
            note,
        },
    }
}
