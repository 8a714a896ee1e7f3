// crates/currency-verifier/src/response.rs
// ============================================================================
// Module: Response Capture
// Description: Status, raw text, and parsed JSON for one HTTP exchange.
// Purpose: Offer JSON-path field access for expectation checks.
// Dependencies: jsonpath_lib, serde_json
// ============================================================================

//! ## Overview
//! Responses are captured whole: status code, raw body text, and the body
//! parsed as JSON when it parses. Field lookups take either a dotted path
//! (`error.code`) or a full JSONPath expression (`$.quotes.USDEUR`).

use jsonpath_lib::select;
use serde_json::Value;

/// Captured response for a single request.
///
/// # Invariants
/// - `body` is `Some` only when `text` parses as JSON.
#[derive(Debug, Clone, PartialEq)]
pub struct ApiResponse {
    /// HTTP status code.
    status: u16,
    /// Raw body text.
    text: String,
    /// Parsed JSON body.
    body: Option<Value>,
}

impl ApiResponse {
    /// Builds a response from its status and raw body text.
    #[must_use]
    pub fn new(status: u16, text: String) -> Self {
        let body = serde_json::from_str(&text).ok();
        Self {
            status,
            text,
            body,
        }
    }

    /// Returns the HTTP status code.
    #[must_use]
    pub const fn status(&self) -> u16 {
        self.status
    }

    /// Returns the raw body text.
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Returns the parsed JSON body, if the body was JSON.
    #[must_use]
    pub const fn body(&self) -> Option<&Value> {
        self.body.as_ref()
    }

    /// Looks up a field by dotted path or JSONPath expression.
    ///
    /// Returns `None` when the body is not JSON, the path is invalid, or
    /// nothing matches. A JSON `null` is returned as `Some(Value::Null)`.
    #[must_use]
    pub fn field(&self, path: &str) -> Option<Value> {
        let body = self.body.as_ref()?;
        let expression = json_path(path);
        let matches = select(body, &expression).ok()?;
        matches.into_iter().next().cloned()
    }
}

/// Converts a dotted field path into a JSONPath expression.
#[must_use]
pub fn json_path(path: &str) -> String {
    let trimmed = path.trim();
    if trimmed.starts_with('$') {
        trimmed.to_string()
    } else if trimmed.is_empty() {
        "$".to_string()
    } else {
        format!("$.{trimmed}")
    }
}
