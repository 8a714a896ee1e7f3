// system-tests/src/config/mod.rs
// ============================================================================
// Module: System Test Configuration
// Description: Centralized configuration for currency API system tests.
// Purpose: Provide typed access to test environment settings and defaults.
// Dependencies: currency-verifier
// ============================================================================

//! ## Overview
//! System-test configuration is read from environment variables and mapped into
//! a small typed structure for reuse across test helpers.
//! Security posture: environment inputs are untrusted and the access key is
//! held as a redacting [`currency_verifier::AccessKey`].

// ============================================================================
// SECTION: Modules
// ============================================================================

mod env;

// ============================================================================
// SECTION: Tests
// ============================================================================


// ============================================================================
// SECTION: Re-exports
// ============================================================================

pub use env::DEFAULT_INVALID_ACCESS_KEY;
pub use env::SystemTestConfig;
pub use env::SystemTestEnv;
pub use env::read_env_strict;
