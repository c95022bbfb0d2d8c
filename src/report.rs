//! Report rendering for the command-line front end.

use annotation_body_core::{RequestBody, Violations};

/// Pretty-printed JSON of a completed body, using the wire field names.
pub fn render_body(body: &RequestBody) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(body)
}

/// One line per violation: `<field>: <message>`.
pub fn render_violations(violations: &Violations) -> String {
    violations
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("\n")
}
