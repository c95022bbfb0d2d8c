//! annotation-body-core — request-body model for GO annotation filtering.
//!
//! This crate owns the shape of an annotation search request body, the
//! defaulting pass that completes it, and the declarative rules it is checked
//! against.
//!
//! # Lifecycle
//!
//! ```text
//! payload / builder ──► apply_defaults ──► validate ──► query layer
//! ```
//!
//! Every stage is synchronous and allocation-light. Nothing here fails:
//! defaulting only fills gaps, and validation returns its findings as
//! [`Violations`].

pub mod config;
pub mod defaults;
pub mod model;
pub mod validation;

pub use config::{GoDefaults, RequestConfig, DEFAULT_GO_USAGE, DEFAULT_GO_USAGE_RELATIONSHIPS};
pub use defaults::apply_defaults;
pub use model::{GoDescription, GoDescriptionBuilder, RequestBody, RequestBodyBuilder};
pub use validation::{validate, ValidationError, Violation, Violations};
