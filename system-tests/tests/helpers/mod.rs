// system-tests/tests/helpers/mod.rs
// ============================================================================
// Module: System Test Helpers
// Description: Shared helpers for the live currency API suites.
// Purpose: Build the live client and run scenarios with artifacts attached.
// Dependencies: system-tests, currency-verifier
// ============================================================================

//! ## Overview
//! Shared helpers for the live currency API suites.
//! Invariants:
//! - Every scenario run leaves `summary.json`, `summary.md`, `transcript.json`
//!   and `report.json` behind.
//! - Remote responses are untrusted; access keys are redacted in artifacts.

#![allow(dead_code, reason = "Shared helpers are reused across multiple test suites.")]

pub mod harness;
