// system-tests/src/artifacts.rs
// ============================================================================
// Module: Test Artifacts
// Description: Artifact helpers for system-tests.
// Purpose: Create per-test run roots and write deterministic summaries.
// Dependencies: serde, serde_jcs, log
// ============================================================================

//! ## Overview
//! Every live test owns one artifact directory. [`TestReporter`] writes a
//! canonical `summary.json` and a readable `summary.md` when the test finishes,
//! and still writes a `panic` summary when the test unwinds first.

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::Path;
use std::path::PathBuf;
use std::time::SystemTime;
use std::time::UNIX_EPOCH;

use log::debug;
use serde::Serialize;

use crate::config::SystemTestConfig;

// ============================================================================
// SECTION: Summary
// ============================================================================

/// Final summary record for one test.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TestSummary {
    /// Test name.
    pub test_name: String,
    /// `pass`, `fail`, `panic`, or `unknown`.
    pub status: String,
    /// Start time in unix milliseconds.
    pub started_at_ms: u128,
    /// End time in unix milliseconds.
    pub ended_at_ms: u128,
    /// Elapsed milliseconds.
    pub duration_ms: u128,
    /// Free-form notes.
    pub notes: Vec<String>,
    /// Artifact file names written for the test.
    pub artifacts: Vec<String>,
}

/// Returns the current unix time in milliseconds.
fn now_millis() -> u128 {
    SystemTime::now().duration_since(UNIX_EPOCH).unwrap_or_default().as_millis()
}

/// Returns `target/system-tests/run_<ms>/<test>`.
fn default_run_root(test_name: &str) -> PathBuf {
    let stamp = now_millis();
    PathBuf::from("target/system-tests").join(format!("run_{stamp}")).join(test_name)
}

// ============================================================================
// SECTION: Artifacts
// ============================================================================

/// Artifact manager for a single system-test.
#[derive(Debug, Clone)]
pub struct TestArtifacts {
    /// Directory every artifact is written into.
    root: PathBuf,
}

impl TestArtifacts {
    /// Creates the artifact root for a test from the environment.
    ///
    /// # Errors
    ///
    /// Returns an error when configuration fails to load or the directory
    /// cannot be created.
    pub fn new(test_name: &str) -> io::Result<Self> {
        let config = SystemTestConfig::load().map_err(io::Error::other)?;
        let root = config
            .run_root
            .map_or_else(|| default_run_root(test_name), |root| root.join(test_name));
        Self::at(root)
    }

    /// Uses `root` as the artifact directory, creating it if needed.
    ///
    /// # Errors
    ///
    /// Returns an error when the directory cannot be created.
    pub fn at(root: impl Into<PathBuf>) -> io::Result<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self {
            root,
        })
    }

    /// Returns the root directory for the test artifacts.
    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Writes a JSON artifact using canonical JCS serialization.
    ///
    /// # Errors
    ///
    /// Returns an error when serialization or the write fails.
    pub fn write_json<T: Serialize>(&self, name: &str, value: &T) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        let bytes = serde_jcs::to_vec(value).map_err(|err| io::Error::other(err.to_string()))?;
        fs::write(&path, bytes)?;
        debug!("wrote artifact {}", path.display());
        Ok(path)
    }

    /// Writes a text artifact with UTF-8 encoding.
    ///
    /// # Errors
    ///
    /// Returns an error when the write fails.
    pub fn write_text(&self, name: &str, value: &str) -> io::Result<PathBuf> {
        let path = self.root.join(name);
        fs::write(&path, value.as_bytes())?;
        debug!("wrote artifact {}", path.display());
        Ok(path)
    }
}

// ============================================================================
// SECTION: Reporter
// ============================================================================

/// Helper that writes summaries even when a test panics.
#[derive(Debug)]
pub struct TestReporter {
    /// Artifact directory for the test.
    artifacts: TestArtifacts,
    /// Test name recorded in the summary.
    test_name: String,
    /// Creation time in unix milliseconds.
    started_at_ms: u128,
    /// Set once a summary has been written.
    finalized: bool,
}

impl TestReporter {
    /// Creates a reporter for the named test.
    ///
    /// # Errors
    ///
    /// Returns an error when the artifact root cannot be prepared.
    pub fn new(test_name: &str) -> io::Result<Self> {
        Ok(Self::with_artifacts(test_name, TestArtifacts::new(test_name)?))
    }

    /// Creates a reporter writing into existing artifacts.
    #[must_use]
    pub fn with_artifacts(test_name: &str, artifacts: TestArtifacts) -> Self {
        Self {
            artifacts,
            test_name: test_name.to_string(),
            started_at_ms: now_millis(),
            finalized: false,
        }
    }

    /// Returns the artifact manager.
    #[must_use]
    pub const fn artifacts(&self) -> &TestArtifacts {
        &self.artifacts
    }

    /// Writes the final summary for the test.
    ///
    /// # Errors
    ///
    /// Returns an error when either summary file cannot be written.
    pub fn finish(
        &mut self,
        status: &str,
        notes: Vec<String>,
        artifacts: Vec<String>,
    ) -> io::Result<()> {
        let ended_at_ms = now_millis();
        let summary = TestSummary {
            test_name: self.test_name.clone(),
            status: status.to_string(),
            started_at_ms: self.started_at_ms,
            ended_at_ms,
            duration_ms: ended_at_ms.saturating_sub(self.started_at_ms),
            notes,
            artifacts,
        };
        self.artifacts.write_json("summary.json", &summary)?;
        self.artifacts.write_text("summary.md", &summary_markdown(&summary))?;
        self.finalized = true;
        Ok(())
    }
}

impl Drop for TestReporter {
    fn drop(&mut self) {
        if self.finalized {
            return;
        }
        let status = if std::thread::panicking() { "panic" } else { "unknown" };
        let _ = self.finish(
            status,
            vec!["test terminated without explicit summary".to_string()],
            Vec::new(),
        );
    }
}

/// Renders the markdown summary.
#[must_use]
pub fn summary_markdown(summary: &TestSummary) -> String {
    let mut out = String::new();
    out.push_str("# System-Test Summary\n\n");
    out.push_str("## Status\n\n");
    let _ = writeln!(out, "- Test: {}", summary.test_name);
    let _ = writeln!(out, "- Status: {}", summary.status);
    let _ = writeln!(out, "- Duration (ms): {}", summary.duration_ms);
    out.push_str("\n## Notes\n\n");
    push_list(&mut out, &summary.notes);
    out.push_str("\n## Artifacts\n\n");
    push_list(&mut out, &summary.artifacts);
    out
}

/// Appends a markdown bullet list, or `- None` when empty.
fn push_list(out: &mut String, items: &[String]) {
    if items.is_empty() {
        out.push_str("- None\n");
        return;
    }
    for item in items {
        let _ = writeln!(out, "- {item}");
    }
}
