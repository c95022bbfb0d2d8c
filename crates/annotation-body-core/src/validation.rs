//! Validation rule set for [`RequestBody`].
//!
//! Each field carries a declared pattern ([`ArrayPattern`] for lists,
//! [`ScalarPattern`] for single values). [`validate`] evaluates every rule
//! against a body and returns the failures as data instead of raising them;
//! callers decide whether to turn them into an error with
//! [`Violations::into_result`].
//!
//! Patterns match the whole value, so `^descendants|exact$` accepts
//! `descendants` and `exact` but not `descendantsX`. Unset values are always
//! valid; the defaulting pass is expected to have run first.

use crate::{config::USAGE_RELATIONSHIP_PARAM, GoDescription, RequestBody};
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use std::fmt;
use thiserror::Error;

// ---------------------------------------------------------------------------
// Declared rules
// ---------------------------------------------------------------------------

/// Regex flags a rule can request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flag {
    CaseInsensitive,
}

/// Every element of a list must match `regexp`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ArrayPattern {
    pub regexp: &'static str,
    pub flags: &'static [Flag],
    /// Name used in the violation message.
    pub param_name: &'static str,
}

/// A single optional value must match `regexp`. `message` may contain
/// `{value}`, replaced by the rejected value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScalarPattern {
    pub regexp: &'static str,
    pub flags: &'static [Flag],
    pub message: &'static str,
}

pub const GO_TERMS_RULE: ArrayPattern = ArrayPattern {
    regexp: "^GO:[0-9]{7}$",
    flags: &[Flag::CaseInsensitive],
    param_name: "goTerms",
};

pub const GO_USAGE_RULE: ScalarPattern = ScalarPattern {
    regexp: "^descendants|exact$",
    flags: &[Flag::CaseInsensitive],
    message: "Invalid goUsage: {value}",
};

pub const GO_USAGE_RELATIONSHIPS_RULE: ArrayPattern = ArrayPattern {
    regexp: "^is_a|part_of|occurs_in|regulates$",
    flags: &[Flag::CaseInsensitive],
    param_name: USAGE_RELATIONSHIP_PARAM,
};

static GO_TERMS: Lazy<Regex> = Lazy::new(|| {
    compile(GO_TERMS_RULE.regexp, GO_TERMS_RULE.flags).expect("goTerms pattern must compile")
});
static GO_USAGE: Lazy<Regex> = Lazy::new(|| {
    compile(GO_USAGE_RULE.regexp, GO_USAGE_RULE.flags).expect("goUsage pattern must compile")
});
static GO_USAGE_RELATIONSHIPS: Lazy<Regex> = Lazy::new(|| {
    compile(GO_USAGE_RELATIONSHIPS_RULE.regexp, GO_USAGE_RELATIONSHIPS_RULE.flags)
        .expect("goUsageRelationships pattern must compile")
});

/// Compile a declared pattern with whole-value semantics.
pub fn compile(regexp: &str, flags: &[Flag]) -> Result<Regex, regex::Error> {
    RegexBuilder::new(&format!("^(?:{regexp})$"))
        .case_insensitive(flags.contains(&Flag::CaseInsensitive))
        .build()
}

impl ArrayPattern {
    /// Items that do not match, in input order. `None` means nothing to check.
    fn invalid_items<'a>(&self, regex: &Regex, items: Option<&'a [String]>) -> Vec<&'a str> {
        items
            .unwrap_or_default()
            .iter()
            .map(String::as_str)
            .filter(|item| !regex.is_match(item))
            .collect()
    }

    fn message(&self, invalid: &[&str]) -> String {
        format!(
            "The '{}' parameter contains invalid values: {}",
            self.param_name,
            invalid.join(", ")
        )
    }
}

impl ScalarPattern {
    fn message(&self, value: &str) -> String {
        self.message.replace("{value}", value)
    }
}

// ---------------------------------------------------------------------------
// Violations
// ---------------------------------------------------------------------------

/// One failed rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Violation {
    /// Dotted path, e.g. `and.goTerms`.
    pub field: String,
    /// Declared pattern that failed.
    pub rule: &'static str,
    /// Offending values, in input order.
    pub invalid: Vec<String>,
    pub message: String,
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

/// Ordered list of failures; `and` before `not`, and within a clause terms,
/// usage, then relationships.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Violations for one dotted field path.
    pub fn for_field<'a>(&'a self, field: &'a str) -> impl Iterator<Item = &'a Violation> + 'a {
        self.0.iter().filter(move |v| v.field == field)
    }

    pub fn into_result(self) -> Result<(), ValidationError> {
        if self.is_empty() {
            Ok(())
        } else {
            Err(ValidationError { violations: self })
        }
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, violation) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{violation}")?;
        }
        Ok(())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

/// A body that failed at least one rule.
#[derive(Debug, Error)]
#[error("request body failed validation: {violations}")]
pub struct ValidationError {
    pub violations: Violations,
}

// ---------------------------------------------------------------------------
// Evaluation
// ---------------------------------------------------------------------------

/// Evaluate every declared rule against `body`.
pub fn validate(body: &RequestBody) -> Violations {
    let mut violations = Violations::default();
    for (name, clause) in body.clauses() {
        if let Some(description) = clause {
            validate_description(name, description, &mut violations.0);
        }
    }
    violations
}

fn validate_description(clause: &str, description: &GoDescription, out: &mut Vec<Violation>) {
    check_array(clause, "goTerms", &GO_TERMS_RULE, &GO_TERMS, Some(description.terms()), out);

    if let Some(usage) = description.usage() {
        if !GO_USAGE.is_match(usage) {
            out.push(Violation {
                field: format!("{clause}.goUsage"),
                rule: GO_USAGE_RULE.regexp,
                invalid: vec![usage.to_string()],
                message: GO_USAGE_RULE.message(usage),
            });
        }
    }

    check_array(
        clause,
        "goUsageRelationships",
        &GO_USAGE_RELATIONSHIPS_RULE,
        &GO_USAGE_RELATIONSHIPS,
        description.usage_relationships(),
        out,
    );
}

fn check_array(
    clause: &str,
    field: &str,
    rule: &ArrayPattern,
    regex: &Regex,
    items: Option<&[String]>,
    out: &mut Vec<Violation>,
) {
    let invalid = rule.invalid_items(regex, items);
    if invalid.is_empty() {
        return;
    }
    out.push(Violation {
        field: format!("{clause}.{field}"),
        rule: rule.regexp,
        message: rule.message(&invalid),
        invalid: invalid.into_iter().map(str::to_string).collect(),
    });
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
