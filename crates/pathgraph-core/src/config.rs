//! Layered configuration for graph construction and path search.
//!
//! Sources are merged in this order, later sources overriding earlier ones:
//!
//! 1. built-in defaults
//! 2. `pathgraph.toml` in the working directory (optional)
//! 3. environment variables prefixed with `PATHGRAPH_`, using `__` to reach
//!    nested keys (e.g. `PATHGRAPH_SEARCH__FRONTIER=linear_scan`)

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Default configuration file name.
pub const CONFIG_FILE: &str = "pathgraph.toml";

/// Prefix of environment variables read by [`GraphConfig::load`].
pub const ENV_PREFIX: &str = "PATHGRAPH_";

/// Default number of vertices a new graph reserves room for.
pub const DEFAULT_EXPECTED_VERTICES: usize = 256;

/// How the weighted searches pick the next vertex to settle.
///
/// Both strategies settle a minimum-estimate vertex each round; they differ in
/// cost and in which of several equal minimums is taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FrontierStrategy {
    /// Binary heap with lazy deletion of superseded entries. O(log n) per step.
    #[default]
    BinaryHeap,
    /// Scan all discovered, unsettled vertices. O(n) per step.
    LinearScan,
}

/// Configuration of the weighted path searches.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Frontier selection strategy for Dijkstra and A*.
    pub frontier: FrontierStrategy,
}

impl SearchConfig {
    /// Sets the frontier strategy (builder pattern).
    #[must_use]
    pub fn with_frontier(mut self, frontier: FrontierStrategy) -> Self {
        self.frontier = frontier;
        self
    }
}

/// Top-level configuration of a [`DirectedGraph`](crate::graph::DirectedGraph).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    /// Number of vertices to reserve room for up front.
    pub expected_vertices: usize,
    /// Search settings.
    pub search: SearchConfig,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            expected_vertices: DEFAULT_EXPECTED_VERTICES,
            search: SearchConfig::default(),
        }
    }
}

impl GraphConfig {
    /// Returns the default figment: defaults, then `pathgraph.toml`, then environment.
    #[must_use]
    pub fn figment() -> Figment {
        Figment::from(Serialized::defaults(GraphConfig::default()))
            .merge(Toml::file(CONFIG_FILE))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Loads configuration from the default sources.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if a source holds a value of the wrong type.
    pub fn load() -> Result<Self> {
        Self::from_figment(Self::figment())
    }

    /// Extracts configuration from a caller-provided figment.
    ///
    /// # Errors
    ///
    /// Returns `Error::Config` if extraction fails.
    pub fn from_figment(figment: Figment) -> Result<Self> {
        let config: Self = figment.extract()?;
        tracing::debug!(
            expected_vertices = config.expected_vertices,
            frontier = ?config.search.frontier,
            "Loaded graph configuration"
        );
        Ok(config)
    }
}
