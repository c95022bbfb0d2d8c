//! Test builders — short constructors for clauses and bodies.
//!
//! These favour readability in assertions over flexibility; reach for
//! [`GoDescription::builder`] directly when a test needs something unusual.

use annotation_body_core::{GoDescription, RequestBody};

/// A clause with terms, usage and relationships all set through the builder.
///
/// ```rust
/// let and = clause(&["GO:0005886"], "Exact", &["IS_A"]);
/// ```
pub fn clause(terms: &[&str], usage: &str, relationships: &[&str]) -> GoDescription {
    GoDescription::builder()
        .go_terms(terms.iter().copied())
        .go_usage(usage)
        .go_usage_relationships(relationships.iter().copied())
        .build()
}

/// A clause carrying only terms; usage and relationships are left unset.
pub fn terms_only(terms: &[&str]) -> GoDescription {
    GoDescription::builder().go_terms(terms.iter().copied()).build()
}

/// A body with only the `and` clause set.
pub fn and_body(and: GoDescription) -> RequestBody {
    RequestBody::builder().and(and).build()
}

/// A body with only the `not` clause set.
pub fn not_body(not: GoDescription) -> RequestBody {
    RequestBody::builder().not(not).build()
}

/// Default `body` in place and hand it back, for one-line setups.
pub fn defaulted(mut body: RequestBody) -> RequestBody {
    body.fill_defaults();
    body
}
