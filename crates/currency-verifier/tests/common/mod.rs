// crates/currency-verifier/tests/common/mod.rs
// ============================================================================
// Module: Common Test Fixtures
// Description: Local stub of the currency API for offline tests.
// Purpose: Exercise the client and catalog without network access.
// Dependencies: tiny_http, serde_json, time
// ============================================================================

//! ## Overview
//! [`StubApi`] serves `/live` and `/historical` from a loopback `tiny_http`
//! server, following the documented error contract: key problems return a
//! `message` body, validation problems return `error.code` (202, 301, 302).
//! Every request line is recorded for assertions.

#![allow(dead_code, reason = "Shared test helpers may be unused in some cases.")]

// ============================================================================
// SECTION: Imports
// ============================================================================

use std::sync::Arc;
use std::sync::Mutex;
use std::thread;

use serde_json::Map;
use serde_json::Value;
use serde_json::json;
use tiny_http::Header;
use tiny_http::Request;
use tiny_http::Response;
use tiny_http::Server;
use url::Url;

// ============================================================================
// SECTION: Constants
// ============================================================================

/// Key the stub accepts.
pub const VALID_KEY: &str = "stub-valid-key";

/// Key the stub rejects.
pub const INVALID_KEY: &str = "stub-invalid-key";

/// Message returned for key problems.
pub const AUTH_MESSAGE: &str = "You have not supplied a valid API Access Key.";

/// Quotes served by the stub, relative to USD.
const QUOTES: [(&str, f64); 5] =
    [("CAD", 1.33), ("EUR", 0.91), ("ILS", 3.64), ("RUB", 91.2), ("GBP", 0.79)];

// ============================================================================
// SECTION: Stub Server
// ============================================================================

/// Loopback stub of the currency API.
pub struct StubApi {
    /// Base URL including trailing slash.
    base_url: String,
    /// Shared server handle used to unblock the worker.
    server: Arc<Server>,
    /// Worker thread serving requests.
    handle: Option<thread::JoinHandle<()>>,
    /// Raw request lines (`/path?query`) in arrival order.
    requests: Arc<Mutex<Vec<String>>>,
}

impl StubApi {
    /// Starts the stub on an ephemeral loopback port.
    pub fn spawn() -> Self {
        let server = Arc::new(Server::http("127.0.0.1:0").unwrap());
        let addr = server.server_addr().to_ip().unwrap();
        let requests = Arc::new(Mutex::new(Vec::new()));

        let worker_server = Arc::clone(&server);
        let worker_requests = Arc::clone(&requests);
        let handle = thread::spawn(move || {
            for request in worker_server.incoming_requests() {
                worker_requests.lock().unwrap().push(request.url().to_string());
                respond(request);
            }
        });

        Self {
            base_url: format!("http://{addr}/"),
            server,
            handle: Some(handle),
            requests,
        }
    }

    /// Returns the stub base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the request lines received so far.
    pub fn requests(&self) -> Vec<String> {
        self.requests.lock().unwrap().clone()
    }
}

impl Drop for StubApi {
    fn drop(&mut self) {
        self.server.unblock();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// ============================================================================
// SECTION: Routing
// ============================================================================

/// Answers one request following the API's documented contract.
fn respond(request: Request) {
    let url = Url::parse(&format!("http://stub{}", request.url())).unwrap();
    let param = |name: &str| {
        url.query_pairs().find(|(key, _)| key == name).map(|(_, value)| value.into_owned())
    };

    let (status, body) = if param("access_key").as_deref() != Some(VALID_KEY) {
        (401, json!({"message": AUTH_MESSAGE}))
    } else {
        match url.path() {
            "/live" => live(param("source"), param("currencies")),
            "/historical" => historical(param("date"), param("source"), param("currencies")),
            _ => (404, json!({"success": false, "error": {"code": 103, "info": "unknown function"}})),
        }
    };

    let header = Header::from_bytes(&b"Content-Type"[..], &b"application/json"[..]).unwrap();
    let response =
        Response::from_string(body.to_string()).with_status_code(status).with_header(header);
    let _ = request.respond(response);
}

/// Serves `/live`.
fn live(source: Option<String>, currencies: Option<String>) -> (u16, Value) {
    match quotes(source, currencies) {
        Ok((source, quotes)) => (
            200,
            json!({
                "success": true,
                "terms": "https://currencylayer.com/terms",
                "privacy": "https://currencylayer.com/privacy",
                "timestamp": time::OffsetDateTime::now_utc().unix_timestamp(),
                "source": source,
                "quotes": quotes,
            }),
        ),
        Err(body) => (200, body),
    }
}

/// Serves `/historical`.
fn historical(
    date: Option<String>,
    source: Option<String>,
    currencies: Option<String>,
) -> (u16, Value) {
    let date = match date.as_deref() {
        None | Some("") => return (200, error_body(301, "no date specified")),
        Some(date) if !is_iso_date(date) => return (200, error_body(302, "invalid date")),
        Some(date) => date.to_string(),
    };
    match quotes(source, currencies) {
        Ok((source, quotes)) => (
            200,
            json!({
                "success": true,
                "historical": true,
                "date": date,
                "timestamp": 1_704_326_399,
                "source": source,
                "quotes": quotes,
            }),
        ),
        Err(body) => (200, body),
    }
}

/// Builds the quote map, or the 202 error body for unknown currencies.
fn quotes(
    source: Option<String>,
    currencies: Option<String>,
) -> Result<(String, Map<String, Value>), Value> {
    let source = source.unwrap_or_else(|| "USD".to_string());
    let wanted = currencies
        .map(|list| list.split(',').map(str::to_string).collect::<Vec<_>>())
        .unwrap_or_else(|| QUOTES.iter().map(|(code, _)| (*code).to_string()).collect());
    let mut map = Map::new();
    for code in wanted {
        let Some((_, rate)) = QUOTES.iter().find(|(known, _)| *known == code) else {
            return Err(error_body(202, "invalid currency code"));
        };
        map.insert(format!("{source}{code}"), json!(rate));
    }
    Ok((source, map))
}

/// Builds an API error body.
fn error_body(code: u16, info: &str) -> Value {
    json!({"success": false, "error": {"code": code, "info": info}})
}

/// Returns true for `YYYY-MM-DD` shaped strings.
fn is_iso_date(value: &str) -> bool {
    let bytes = value.as_bytes();
    bytes.len() == 10
        && bytes.iter().enumerate().all(|(index, byte)| match index {
            4 | 7 => *byte == b'-',
            _ => byte.is_ascii_digit(),
        })
}

// ============================================================================
// SECTION: Logging
// ============================================================================

/// Installs the test logger once per process.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
