//! annotation-body — intake front end for annotation search request bodies.
//!
//! Reads a JSON payload, completes it with the defaulting pass and checks it
//! against the declared rules. The model itself lives in
//! [`annotation_body_core`]; this crate adds the deserialization boundary and
//! report rendering so integration tests and the binary share one pipeline.
//!
//! # Pipeline
//!
//! ```text
//! payload ──► parse_body ──► fill_defaults ──► validate ──► report
//! ```

pub mod intake;
pub mod report;

pub use intake::{parse_body, process, IntakeError};
