// system-tests/tests/helpers/harness.rs
// ============================================================================
// Module: Live API Harness
// Description: Runs catalog scenarios against the configured currency API.
// Purpose: Give every live test the same setup, artifacts, and verdict.
// Dependencies: currency-verifier, system-tests, env_logger, log
// ============================================================================

use std::error::Error;

use currency_verifier::AccessKey;
use currency_verifier::ApiClient;
use currency_verifier::Credentials;
use currency_verifier::DateContext;
use currency_verifier::Scenario;
use currency_verifier::ScenarioReport;
use currency_verifier::run_scenario;
use log::info;
use log::warn;
use system_tests::artifacts::TestReporter;
use system_tests::config::SystemTestConfig;

/// Installs the test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Live client plus the configuration it was built from.
pub struct LiveApi {
    /// Environment configuration.
    config: SystemTestConfig,
    /// Client bound to the configured base URL.
    client: ApiClient,
}

impl LiveApi {
    /// Loads configuration from the environment and builds the client.
    pub fn from_env() -> Result<Self, String> {
        init_logging();
        let config = SystemTestConfig::load()?;
        let client = ApiClient::new(config.client_config()?).map_err(|err| err.to_string())?;
        info!("live suite targeting {}", client.config().base_url());
        Ok(Self {
            config,
            client,
        })
    }

    /// Returns both keys; fails when no valid key is configured.
    pub fn credentials(&self) -> Result<Credentials, String> {
        self.config.credentials()
    }

    /// Returns the key invalid-key scenarios send.
    pub fn invalid_key(&self) -> AccessKey {
        self.config.invalid_key()
    }

    /// Runs `scenario`, writes its artifacts, and fails on any failed check.
    pub fn verify(
        &self,
        test_name: &str,
        scenario: &Scenario,
    ) -> Result<ScenarioReport, Box<dyn Error>> {
        let mut reporter = TestReporter::new(test_name)?;
        let dates = DateContext::local_now();
        let report = run_scenario(&self.client, scenario, &dates)?;

        reporter.artifacts().write_json("transcript.json", &self.client.transcript())?;
        reporter.artifacts().write_json("report.json", &report)?;

        let mut notes = report.failures().iter().map(ToString::to_string).collect::<Vec<_>>();
        for check in report.superseded.iter().filter(|check| !check.passed) {
            let note = check.note.unwrap_or_default();
            warn!("{test_name}: superseded check {} did not hold: {note}", check.expectation);
            notes.push(format!("superseded: {} ({note})", check.expectation));
        }
        let status = if report.passed() { "pass" } else { "fail" };
        reporter.finish(
            status,
            notes,
            vec![
                "summary.json".to_string(),
                "summary.md".to_string(),
                "transcript.json".to_string(),
                "report.json".to_string(),
            ],
        )?;

        report.ensure_passed()?;
        Ok(report)
    }
}
