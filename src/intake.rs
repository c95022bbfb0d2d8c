//! Intake — turns a raw JSON payload into a complete, validated [`RequestBody`].
//!
//! Parsing is the deserialization boundary; defaulting and validation follow
//! in that order. A payload of `null` is accepted and treated as an empty body,
//! so a successful intake always yields both clauses fully populated.

use annotation_body_core::{validate, GoDefaults, RequestBody, ValidationError};
use thiserror::Error;

/// Why a payload could not be turned into a request body.
#[derive(Debug, Error)]
pub enum IntakeError {
    #[error("malformed request body: {0}")]
    Parse(#[from] serde_json::Error),
    #[error(transparent)]
    Invalid(#[from] ValidationError),
}

/// Deserialize a payload without defaulting or validating it. `null` yields
/// `None`.
pub fn parse_body(payload: &str) -> Result<Option<RequestBody>, IntakeError> {
    Ok(serde_json::from_str(payload)?)
}

/// Parse, default with `defaults`, then validate.
pub fn process(payload: &str, defaults: &GoDefaults) -> Result<RequestBody, IntakeError> {
    let mut body = parse_body(payload)?.unwrap_or_default();
    body.fill_defaults_with(defaults);

    let violations = validate(&body);
    if !violations.is_empty() {
        tracing::debug!(count = violations.len(), "request body rejected");
    }
    violations.into_result()?;
    Ok(body)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
