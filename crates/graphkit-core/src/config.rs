//! Configuration for graphkit
//!
//! Settings live in an optional TOML file (`--config <path>` or the
//! `GRAPHKIT_CONFIG` environment variable). Every field has a default, so a
//! missing or partial file is fine; command-line flags override file values.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{GraphError, Result};
use crate::node::NodeId;
use crate::store::StoreKind;

/// Environment variable naming the config file
pub const CONFIG_ENV: &str = "GRAPHKIT_CONFIG";

/// Graph loading and reporting settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Storage representation to build
    pub representation: StoreKind,

    /// Treat input edges as directed (undirected stores add mirror edges)
    pub directed: bool,

    /// Decimal places used when printing floating-point weights
    pub precision: usize,

    /// Default source node for traversals and path queries
    pub source: NodeId,

    /// Default destination node; the highest node ID when unset
    #[serde(skip_serializing_if = "Option::is_none")]
    pub destination: Option<NodeId>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            representation: StoreKind::List,
            directed: true,
            precision: 1,
            source: 0,
            destination: None,
        }
    }
}

impl GraphConfig {
    /// Load configuration from a file
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| GraphError::config(path, e))?;
        let config: GraphConfig =
            toml::from_str(&content).map_err(|e| GraphError::config(path, e))?;
        tracing::debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    /// Load from `path` when given, defaults otherwise
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// Save configuration to a file
    pub fn save(&self, path: &Path) -> Result<()> {
        let content = toml::to_string_pretty(self).map_err(|e| GraphError::config(path, e))?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Destination to use for a graph whose ID space has `size` slots
    pub fn destination_for(&self, size: usize) -> NodeId {
        self.destination.unwrap_or(size.saturating_sub(1))
    }
}
