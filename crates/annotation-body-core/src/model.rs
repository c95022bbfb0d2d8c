//! Request-body model for annotation filtering.
//!
//! A [`RequestBody`] carries two optional [`GoDescription`] clauses: `and`
//! (terms that must all match) and `not` (terms that must not match). Both
//! can be built programmatically through their builders or deserialized from
//! a JSON payload using the wire names `goTerms`, `goUsage` and
//! `goUsageRelationships`.
//!
//! Case normalization happens on write. `usage` and every usage relationship
//! are stored lower-cased; GO terms are stored exactly as supplied and left to
//! the case-insensitive validation pattern.

use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// RequestBody
// ---------------------------------------------------------------------------

/// Body of an annotation search request.
///
/// A missing clause is not the same as an empty one until
/// [`apply_defaults`](crate::apply_defaults) has run; afterwards both clauses
/// are always present.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RequestBody {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub and: Option<GoDescription>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub not: Option<GoDescription>,
}

impl RequestBody {
    pub fn builder() -> RequestBodyBuilder {
        RequestBodyBuilder::default()
    }

    /// Both clauses paired with their wire name, `and` first.
    pub fn clauses(&self) -> [(&'static str, Option<&GoDescription>); 2] {
        [("and", self.and.as_ref()), ("not", self.not.as_ref())]
    }
}

/// Fluent builder for [`RequestBody`]. Clauses that are never set stay `None`.
#[derive(Debug, Clone, Default)]
pub struct RequestBodyBuilder {
    and: Option<GoDescription>,
    not: Option<GoDescription>,
}

impl RequestBodyBuilder {
    pub fn and(mut self, and: GoDescription) -> Self {
        self.and = Some(and);
        self
    }

    pub fn not(mut self, not: GoDescription) -> Self {
        self.not = Some(not);
        self
    }

    pub fn build(self) -> RequestBody {
        RequestBody {
            and: self.and,
            not: self.not,
        }
    }
}

// ---------------------------------------------------------------------------
// GoDescription
// ---------------------------------------------------------------------------

/// One filter clause: GO terms plus how they are expanded.
///
/// `usage` and `usage_relationships` are private so that every write goes
/// through the lower-casing setters.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "RawGoDescription")]
pub struct GoDescription {
    /// GO identifiers, e.g. `GO:0005886`. Stored as supplied.
    #[serde(rename = "goTerms")]
    pub terms: Vec<String>,
    #[serde(rename = "goUsage", skip_serializing_if = "Option::is_none")]
    usage: Option<String>,
    #[serde(
        rename = "goUsageRelationships",
        skip_serializing_if = "Option::is_none"
    )]
    usage_relationships: Option<Vec<String>>,
}

impl GoDescription {
    /// Create a clause, normalizing `usage` and each relationship.
    pub fn new(
        terms: Vec<String>,
        usage_relationships: Option<Vec<String>>,
        usage: Option<String>,
    ) -> Self {
        Self {
            terms,
            usage: usage.map(|u| u.to_lowercase()),
            usage_relationships: usage_relationships.map(normalize_relationships),
        }
    }

    pub fn builder() -> GoDescriptionBuilder {
        GoDescriptionBuilder::default()
    }

    pub fn terms(&self) -> &[String] {
        &self.terms
    }

    pub fn usage(&self) -> Option<&str> {
        self.usage.as_deref()
    }

    pub fn usage_relationships(&self) -> Option<&[String]> {
        self.usage_relationships.as_deref()
    }

    /// Store `usage` lower-cased. `None` clears it.
    pub fn set_usage(&mut self, usage: Option<&str>) {
        self.usage = usage.map(str::to_lowercase);
    }

    /// Replace the relationships from a comma-separated list such as
    /// `"IS_A, ,part_of"`.
    ///
    /// Blank segments are dropped and the remaining ones are trimmed and
    /// lower-cased, keeping their order. An input with no usable segment
    /// leaves an empty (but set) list.
    pub fn set_usage_relationships(&mut self, joined: &str) {
        self.usage_relationships = Some(split_relationships(joined));
    }

    pub(crate) fn set_relationship_list<I, S>(&mut self, relationships: I)
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.usage_relationships = Some(normalize_relationships(relationships));
    }
}

/// Fluent builder for [`GoDescription`], applying the same normalization as
/// the setters.
#[derive(Debug, Clone, Default)]
pub struct GoDescriptionBuilder {
    terms: Vec<String>,
    usage: Option<String>,
    usage_relationships: Option<Vec<String>>,
}

impl GoDescriptionBuilder {
    pub fn go_terms<I, S>(mut self, terms: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terms = terms.into_iter().map(Into::into).collect();
        self
    }

    pub fn go_usage<'a>(mut self, usage: impl Into<Option<&'a str>>) -> Self {
        self.usage = usage.into().map(str::to_lowercase);
        self
    }

    pub fn go_usage_relationships<I, S>(mut self, relationships: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.usage_relationships = Some(normalize_relationships(relationships));
        self
    }

    pub fn build(self) -> GoDescription {
        GoDescription {
            terms: self.terms,
            usage: self.usage,
            usage_relationships: self.usage_relationships,
        }
    }
}

// ---------------------------------------------------------------------------
// Normalization helpers
// ---------------------------------------------------------------------------

/// Split a comma-separated relationship list and normalize each segment.
pub fn split_relationships(joined: &str) -> Vec<String> {
    normalize_relationships(joined.split(','))
}

/// Trim and lower-case each relationship, dropping blank entries.
pub fn normalize_relationships<I, S>(relationships: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    relationships
        .into_iter()
        .map(|r| r.as_ref().trim().to_lowercase())
        .filter(|r| !r.is_empty())
        .collect()
}

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the JSON payload
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawGoDescription {
    #[serde(default)]
    go_terms: Option<Vec<String>>,
    #[serde(default)]
    go_usage: Option<String>,
    #[serde(default)]
    go_usage_relationships: Option<RawRelationships>,
}

/// Relationships arrive either as `"is_a,part_of"` or `["is_a", "part_of"]`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
enum RawRelationships {
    Joined(String),
    Listed(Vec<String>),
}

impl From<RawGoDescription> for GoDescription {
    fn from(raw: RawGoDescription) -> Self {
        let mut description = GoDescription {
            terms: raw.go_terms.unwrap_or_default(),
            ..GoDescription::default()
        };
        description.set_usage(raw.go_usage.as_deref());
        match raw.go_usage_relationships {
            Some(RawRelationships::Joined(joined)) => description.set_usage_relationships(&joined),
            Some(RawRelationships::Listed(listed)) => description.set_relationship_list(listed),
            None => {}
        }
        description
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
