// crates/currency-verifier/src/expectation.rs
// ============================================================================
// Module: Expectations
// Description: Status and JSON-field assertions against captured responses.
// Purpose: Describe expected outcomes as data so scenarios can be tabulated.
// Dependencies: serde, serde_json
// ============================================================================

//! ## Overview
//! An [`Expectation`] is one check against an [`ApiResponse`]. Checks never
//! panic; a failed check yields an [`ExpectationFailure`] carrying the check
//! description and the observed value, so a scenario can report every failure
//! at once.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use crate::response::ApiResponse;
use crate::timestamp::DateContext;
use crate::timestamp::format_iso_date;
use crate::timestamp::unix_seconds_from_value;

// ============================================================================
// SECTION: Expectations
// ============================================================================

/// A single check against a response.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Expectation {
    /// HTTP status equals `code`.
    Status {
        /// Expected status code.
        code: u16,
    },
    /// Field is `true` or `false`.
    FieldIsBool {
        /// Dotted path or JSONPath expression.
        path: String,
    },
    /// Field exists and is not `null`.
    FieldPresent {
        /// Dotted path or JSONPath expression.
        path: String,
    },
    /// Field equals `expected`.
    FieldEquals {
        /// Dotted path or JSONPath expression.
        path: String,
        /// Expected JSON value.
        expected: Value,
    },
    /// Field is an object containing `key`.
    HasKey {
        /// Dotted path or JSONPath expression.
        path: String,
        /// Required object key.
        key: String,
    },
    /// Field holds UNIX seconds that fall on the evaluation date.
    TimestampIsToday {
        /// Dotted path or JSONPath expression.
        path: String,
    },
}

impl Expectation {
    /// Expects the HTTP status to equal `code`.
    #[must_use]
    pub const fn status(code: u16) -> Self {
        Self::Status {
            code,
        }
    }

    /// Expects the field to be boolean.
    #[must_use]
    pub fn field_is_bool(path: impl Into<String>) -> Self {
        Self::FieldIsBool {
            path: path.into(),
        }
    }

    /// Expects the field to be present and non-null.
    #[must_use]
    pub fn field_present(path: impl Into<String>) -> Self {
        Self::FieldPresent {
            path: path.into(),
        }
    }

    /// Expects the field to equal `expected`.
    #[must_use]
    pub fn field_equals(path: impl Into<String>, expected: impl Into<Value>) -> Self {
        Self::FieldEquals {
            path: path.into(),
            expected: expected.into(),
        }
    }

    /// Expects the field to be an object containing `key`.
    #[must_use]
    pub fn has_key(path: impl Into<String>, key: impl Into<String>) -> Self {
        Self::HasKey {
            path: path.into(),
            key: key.into(),
        }
    }

    /// Expects the field's UNIX seconds to fall on the evaluation date.
    #[must_use]
    pub fn timestamp_is_today(path: impl Into<String>) -> Self {
        Self::TimestampIsToday {
            path: path.into(),
        }
    }

    /// Evaluates this expectation.
    ///
    /// # Errors
    ///
    /// Returns [`ExpectationFailure`] describing the observed value when the
    /// check does not hold.
    pub fn check(
        &self,
        response: &ApiResponse,
        dates: &DateContext,
    ) -> Result<(), ExpectationFailure> {
        match self {
            Self::Status {
                code,
            } => {
                if response.status() == *code {
                    Ok(())
                } else {
                    Err(self.failure(format!("status {}", response.status())))
                }
            }
            Self::FieldIsBool {
                path,
            } => match self.lookup(response, path)? {
                Value::Bool(_) => Ok(()),
                other => Err(self.failure(other.to_string())),
            },
            Self::FieldPresent {
                path,
            } => match self.lookup(response, path)? {
                Value::Null => Err(self.failure("null".to_string())),
                _ => Ok(()),
            },
            Self::FieldEquals {
                path,
                expected,
            } => {
                let actual = self.lookup(response, path)?;
                if json_equal(&actual, expected) {
                    Ok(())
                } else {
                    Err(self.failure(actual.to_string()))
                }
            }
            Self::HasKey {
                path,
                key,
            } => match self.lookup(response, path)? {
                Value::Object(map) if map.contains_key(key) => Ok(()),
                Value::Object(map) => {
                    Err(self.failure(format!("object with {} keys, {key} absent", map.len())))
                }
                other => Err(self.failure(format!("non-object {other}"))),
            },
            Self::TimestampIsToday {
                path,
            } => {
                let value = self.lookup(response, path)?;
                let seconds =
                    unix_seconds_from_value(&value).map_err(|err| self.failure(err.to_string()))?;
                let actual = dates.date_of(seconds).map_err(|err| self.failure(err.to_string()))?;
                if actual == dates.today() {
                    return Ok(());
                }
                let rendered = format_iso_date(actual).map_err(|err| self.failure(err.to_string()))?;
                let expected =
                    format_iso_date(dates.today()).map_err(|err| self.failure(err.to_string()))?;
                Err(self.failure(format!("{rendered} (expected {expected})")))
            }
        }
    }

    /// Resolves the field, failing when the body is not JSON or the field is absent.
    fn lookup(&self, response: &ApiResponse, path: &str) -> Result<Value, ExpectationFailure> {
        if response.body().is_none() {
            return Err(self.failure(format!("non-json body (status {})", response.status())));
        }
        response.field(path).ok_or_else(|| self.failure("missing".to_string()))
    }

    /// Builds a failure record for this expectation.
    fn failure(&self, actual: String) -> ExpectationFailure {
        ExpectationFailure {
            expectation: self.to_string(),
            actual,
        }
    }
}

impl fmt::Display for Expectation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Status {
                code,
            } => write!(f, "status == {code}"),
            Self::FieldIsBool {
                path,
            } => write!(f, "`{path}` is boolean"),
            Self::FieldPresent {
                path,
            } => write!(f, "`{path}` is present"),
            Self::FieldEquals {
                path,
                expected,
            } => write!(f, "`{path}` == {expected}"),
            Self::HasKey {
                path,
                key,
            } => write!(f, "`{path}` has key {key}"),
            Self::TimestampIsToday {
                path,
            } => write!(f, "`{path}` is today"),
        }
    }
}

/// Compares JSON values, treating numerically equal numbers as equal.
fn json_equal(actual: &Value, expected: &Value) -> bool {
    match (actual, expected) {
        (Value::Number(left), Value::Number(right)) => match (left.as_i64(), right.as_i64()) {
            (Some(left), Some(right)) => left == right,
            _ => left.as_f64() == right.as_f64(),
        },
        _ => actual == expected,
    }
}

// ============================================================================
// SECTION: Failures
// ============================================================================

/// A failed check and the value that was observed instead.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExpectationFailure {
    /// Description of the check.
    pub expectation: String,
    /// Observed value.
    pub actual: String,
}

impl fmt::Display for ExpectationFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "expected {}, got {}", self.expectation, self.actual)
    }
}
