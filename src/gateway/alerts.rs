//! Entity alert headers.
//!
//! Every mutating success response carries a pair of headers telling the
//! front-end which entity changed and how:
//!
//! ```text
//! x-supermatechapp-alert: supermatechApp.orderLine.created
//! x-supermatechapp-params: 42
//! ```
//!
//! These are pure auxiliary metadata; no handler logic depends on them.

use axum::http::{HeaderMap, HeaderName, HeaderValue};

pub const APPLICATION_NAME: &str = "supermatechApp";

const ALERT_HEADER: HeaderName = HeaderName::from_static("x-supermatechapp-alert");
const PARAMS_HEADER: HeaderName = HeaderName::from_static("x-supermatechapp-params");
const ERROR_HEADER: HeaderName = HeaderName::from_static("x-supermatechapp-error");

fn alert_headers(message: &str, param: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(message) {
        headers.insert(ALERT_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(param) {
        headers.insert(PARAMS_HEADER, value);
    }
    headers
}

/// Headers for a successful create.
pub fn entity_creation_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        &format!("{APPLICATION_NAME}.{entity_name}.created"),
        &id.to_string(),
    )
}

/// Headers for a successful update or partial-update.
pub fn entity_update_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        &format!("{APPLICATION_NAME}.{entity_name}.updated"),
        &id.to_string(),
    )
}

/// Headers for a delete.
pub fn entity_deletion_alert(entity_name: &str, id: i64) -> HeaderMap {
    alert_headers(
        &format!("{APPLICATION_NAME}.{entity_name}.deleted"),
        &id.to_string(),
    )
}

/// Headers for a client-error response: the machine-readable error key
/// plus the offending entity name.
pub fn entity_failure_alert(entity_name: &str, error_key: &str) -> HeaderMap {
    let mut headers = HeaderMap::new();
    if let Ok(value) = HeaderValue::from_str(&format!("error.{error_key}")) {
        headers.insert(ERROR_HEADER, value);
    }
    if let Ok(value) = HeaderValue::from_str(entity_name) {
        headers.insert(PARAMS_HEADER, value);
    }
    headers
}
