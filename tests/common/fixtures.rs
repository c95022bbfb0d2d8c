//! Static payloads and term lists used across harnesses.

/// Well-formed GO identifiers, mixed case.
pub const VALID_TERMS: &[&str] = &["GO:0005886", "go:0008150", "Go:0003674"];

/// Identifiers the `goTerms` rule must reject.
pub const INVALID_TERMS: &[&str] = &["GO:123", "GO:00058860", "0005886", "GO-0005886", ""];

/// Usage values accepted by the `goUsage` rule, in any case.
pub const VALID_USAGES: &[&str] = &["descendants", "Descendants", "EXACT", "exact"];

/// Relationship values accepted by the relationship rule.
pub const VALID_RELATIONSHIPS: &[&str] = &["is_a", "part_of", "occurs_in", "regulates"];

pub const PAYLOAD_NULL: &str = "null";

pub const PAYLOAD_EMPTY_OBJECT: &str = "{}";

pub const PAYLOAD_AND_ONLY: &str =
    r#"{"and":{"goTerms":["GO:0005886","go:0008150"],"goUsage":"EXACT"}}"#;

pub const PAYLOAD_JOINED_RELATIONSHIPS: &str =
    r#"{"not":{"goTerms":["GO:0003674"],"goUsageRelationships":"IS_A, ,Part_Of"}}"#;

pub const PAYLOAD_LISTED_RELATIONSHIPS: &str =
    r#"{"not":{"goTerms":["GO:0003674"],"goUsageRelationships":["IS_A"," ","Part_Of"]}}"#;

pub const PAYLOAD_INVALID: &str = r#"{
    "and": {
        "goTerms": ["GO:123", "GO:0005886"],
        "goUsage": "slim",
        "goUsageRelationships": "is_a,relates_to"
    },
    "not": { "goTerms": ["bogus"] }
}"#;

pub const PAYLOAD_UNKNOWN_KEYS: &str =
    r#"{"and":{"goTerms":["GO:0005886"],"taxonId":9606},"limit":25}"#;
