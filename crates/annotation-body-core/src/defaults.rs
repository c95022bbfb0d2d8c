//! Defaulting pass — fills omitted clauses and fields after deserialization.
//!
//! Runs once per request, before validation. It never rejects input: absent
//! clauses become empty descriptions, and a blank `usage` or empty relationship
//! list is replaced by the configured defaults. Running it again on a
//! completed body changes nothing.

use crate::{config::GoDefaults, GoDescription, RequestBody};
use tracing::debug;

/// Fill every gap in `body` with the built-in defaults. `None` is a no-op.
pub fn apply_defaults(body: Option<&mut RequestBody>) {
    if let Some(body) = body {
        body.fill_defaults();
    }
}

impl RequestBody {
    /// Method form of [`apply_defaults`].
    pub fn fill_defaults(&mut self) {
        self.fill_defaults_with(&GoDefaults::default());
    }

    /// Fill gaps using `defaults`, typically from a loaded
    /// [`RequestConfig`](crate::RequestConfig). Blank values in `defaults`
    /// fall back to the built-in constants.
    pub fn fill_defaults_with(&mut self, defaults: &GoDefaults) {
        let defaults = defaults.clone().normalized();
        fill_clause("and", &mut self.and, &defaults);
        fill_clause("not", &mut self.not, &defaults);
    }
}

fn fill_clause(name: &'static str, clause: &mut Option<GoDescription>, defaults: &GoDefaults) {
    let description = clause.get_or_insert_with(|| {
        debug!(clause = name, "clause absent, inserting empty description");
        GoDescription::default()
    });

    if description.usage().map_or(true, |usage| usage.trim().is_empty()) {
        debug!(clause = name, usage = %defaults.go_usage, "defaulting goUsage");
        description.set_usage(Some(defaults.go_usage.as_str()));
    }

    if description.usage_relationships().map_or(true, <[String]>::is_empty) {
        debug!(
            clause = name,
            relationships = ?defaults.go_usage_relationships,
            "defaulting goUsageRelationships"
        );
        description.set_relationship_list(&defaults.go_usage_relationships);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
