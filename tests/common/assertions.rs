//! Domain-specific assertion macros for annotation-body harnesses.
//!
//! These wrap `pretty_assertions` and say which part of the request-body
//! contract was broken, not just which values differed.

use annotation_body_core::{RequestBody, DEFAULT_GO_USAGE, DEFAULT_GO_USAGE_RELATIONSHIPS};

// ---------------------------------------------------------------------------
// Clause assertions
// ---------------------------------------------------------------------------

/// Assert that a clause carries exactly the built-in usage and relationships.
///
/// ```rust
/// assert_defaulted!(body.and.as_ref().unwrap());
/// ```
#[macro_export]
macro_rules! assert_defaulted {
    ($description:expr) => {{
        let description: &annotation_body_core::GoDescription = $description;
        pretty_assertions::assert_eq!(
            description.usage(),
            Some(annotation_body_core::DEFAULT_GO_USAGE),
            "clause usage was not defaulted"
        );
        pretty_assertions::assert_eq!(
            description.usage_relationships().unwrap_or_default(),
            annotation_body_core::DEFAULT_GO_USAGE_RELATIONSHIPS,
            "clause relationships were not defaulted"
        );
    }};
}

/// Assert that `violations` reports `field` with exactly the `invalid` values.
///
/// ```rust
/// assert_violation!(violations, "and.goTerms", ["GO:123"]);
/// ```
#[macro_export]
macro_rules! assert_violation {
    ($violations:expr, $field:expr, $invalid:expr) => {{
        let violations: &annotation_body_core::Violations = &$violations;
        let field: &str = $field;
        match violations.for_field(field).next() {
            Some(violation) => pretty_assertions::assert_eq!(
                violation.invalid,
                $invalid,
                "unexpected invalid values for {}",
                field
            ),
            None => panic!(
                "assert_violation! failed: no violation for {:?}.\n  reported: {}",
                field, violations
            ),
        }
    }};
}

// ---------------------------------------------------------------------------
// Body invariants
// ---------------------------------------------------------------------------

/// Assert the post-defaulting invariants on a body: both clauses present, and
/// in each a non-blank lower-case usage and a non-empty list of non-blank
/// lower-case relationships.
pub fn assert_complete(body: &RequestBody) {
    for (name, clause) in body.clauses() {
        let clause = clause.unwrap_or_else(|| panic!("clause {name:?} missing after defaulting"));

        let usage = clause
            .usage()
            .unwrap_or_else(|| panic!("clause {name:?} has no usage"));
        assert!(!usage.trim().is_empty(), "clause {name:?} has a blank usage");
        assert_eq!(usage, usage.to_lowercase(), "clause {name:?} usage not lower-case");

        let relationships = clause
            .usage_relationships()
            .unwrap_or_else(|| panic!("clause {name:?} has no relationships"));
        assert!(!relationships.is_empty(), "clause {name:?} has no relationships");
        for relationship in relationships {
            assert!(!relationship.trim().is_empty(), "clause {name:?} has a blank relationship");
            assert_eq!(
                *relationship,
                relationship.to_lowercase(),
                "clause {name:?} relationship not lower-case"
            );
        }
    }
}

/// True when a body carries nothing but the built-in defaults.
pub fn is_pristine_default(body: &RequestBody) -> bool {
    body.clauses().iter().all(|(_, clause)| {
        clause.is_some_and(|c| {
            c.terms().is_empty()
                && c.usage() == Some(DEFAULT_GO_USAGE)
                && c.usage_relationships() == Some(&default_relationships()[..])
        })
    })
}

fn default_relationships() -> Vec<String> {
    DEFAULT_GO_USAGE_RELATIONSHIPS.iter().map(|r| r.to_string()).collect()
}
