//! Request configuration: the fallback values used by the defaulting pass.
//!
//! [`DEFAULT_GO_USAGE`] and [`DEFAULT_GO_USAGE_RELATIONSHIPS`] are the fixed
//! defaults. [`RequestConfig::load`] layers an optional file on top of a base
//! layer built from those constants; [`RequestConfig::defaults`] returns the
//! base layer without touching the filesystem (useful in tests).

use crate::model::normalize_relationships;
use config::{builder::DefaultState, ConfigBuilder, ConfigError};
use serde::Deserialize;
use std::path::Path;

/// Usage applied to a clause that does not name one.
pub const DEFAULT_GO_USAGE: &str = "descendants";

/// Relationships applied to a clause that does not name any.
pub const DEFAULT_GO_USAGE_RELATIONSHIPS: &[&str] = &["is_a", "part_of", "occurs_in"];

/// Readable parameter name used in usage-relationship violation messages.
pub const USAGE_RELATIONSHIP_PARAM: &str = "Usage relationship";

// ---------------------------------------------------------------------------
// Base layer
// ---------------------------------------------------------------------------

fn base_layer() -> Result<ConfigBuilder<DefaultState>, ConfigError> {
    config::Config::builder()
        .set_default("defaults.go_usage", DEFAULT_GO_USAGE)?
        .set_default(
            "defaults.go_usage_relationships",
            DEFAULT_GO_USAGE_RELATIONSHIPS.to_vec(),
        )
}

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level request configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestConfig {
    #[serde(default)]
    pub defaults: GoDefaults,
}

/// `[defaults]` section: what the defaulting pass fills into a clause.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct GoDefaults {
    #[serde(default = "default_go_usage")]
    pub go_usage: String,
    #[serde(default = "default_go_usage_relationships")]
    pub go_usage_relationships: Vec<String>,
}

fn default_go_usage() -> String {
    DEFAULT_GO_USAGE.to_string()
}

fn default_go_usage_relationships() -> Vec<String> {
    DEFAULT_GO_USAGE_RELATIONSHIPS.iter().map(|r| r.to_string()).collect()
}

impl Default for GoDefaults {
    fn default() -> Self {
        Self {
            go_usage: default_go_usage(),
            go_usage_relationships: default_go_usage_relationships(),
        }
    }
}

impl GoDefaults {
    /// Lower-case the values and fall back to the built-in constants for
    /// anything left blank, so defaulting always produces a complete clause.
    pub(crate) fn normalized(self) -> Self {
        let go_usage = self.go_usage.trim().to_lowercase();
        let go_usage_relationships = normalize_relationships(self.go_usage_relationships);

        Self {
            go_usage: if go_usage.is_empty() {
                default_go_usage()
            } else {
                go_usage
            },
            go_usage_relationships: if go_usage_relationships.is_empty() {
                default_go_usage_relationships()
            } else {
                go_usage_relationships
            },
        }
    }
}

impl RequestConfig {
    /// Load `path` (TOML, YAML or JSON by extension), layered on top of the
    /// built-in defaults. With no path this is [`RequestConfig::defaults`].
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let mut builder = base_layer()?;
        if let Some(path) = path {
            tracing::debug!(path = %path.display(), "loading request configuration");
            builder = builder.add_source(config::File::from(path).required(true));
        }

        let loaded: RequestConfig = builder.build()?.try_deserialize()?;
        Ok(Self {
            defaults: loaded.defaults.normalized(),
        })
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        base_layer()
            .and_then(ConfigBuilder::<DefaultState>::build)
            .expect("built-in request config must build")
            .try_deserialize()
            .expect("built-in request config must deserialize correctly")
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
