// system-tests/src/lib.rs
// ============================================================================
// Module: Currency Verifier System Tests Library
// Description: Shared configuration and artifact helpers for live system tests.
// Purpose: Provide common utilities for the currency API system-test binaries.
// Dependencies: currency-verifier, serde, serde_jcs
// ============================================================================

//! ## Overview
//! This crate hosts shared configuration and artifact utilities used by the
//! live currency API suites in `system-tests/tests`.
//! Security posture: remote responses are untrusted and access keys never
//! reach artifacts.

// ============================================================================
// SECTION: Modules
// ============================================================================

pub mod artifacts;
pub mod config;

// ============================================================================
// SECTION: Tests
// ============================================================================
