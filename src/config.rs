// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Runtime configuration.
//!
//! Everything has a default, so an empty (or absent) file is a valid
//! configuration. Command line flags override values loaded here.
//!
//! ```toml
//! [search]
//! max_iterations = 10
//! distance_rule = "monotone"
//!
//! [trials]
//! count = 1000
//! seed = 42
//! ```

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::search::DistanceRule;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("cannot read config {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

/// Parameters of a single decomposition search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchConfig {
    /// Most moves applied before the search reports a timeout.
    pub max_iterations: usize,
    pub distance_rule: DistanceRule,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self { max_iterations: 10, distance_rule: DistanceRule::default() }
    }
}

/// Parameters of the random-flow experiment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrialConfig {
    /// Number of random flows to decompose.
    pub count: usize,
    /// Rotated circuits summed into each random flow.
    pub complexity: usize,
    /// Fixed seed for reproducible runs.
    pub seed: Option<u64>,
}

impl Default for TrialConfig {
    fn default() -> Self {
        Self { count: 1000, complexity: 4, seed: None }
    }
}

/// Canvas geometry for drawing graphs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    pub width: u32,
    pub height: u32,
    pub title_y: f64,
    pub title_font_size: u32,
    pub label_font_size: u32,
    pub center_y: f64,
    /// Radius of the circle the vertices sit on.
    pub vertex_radius: f64,
    /// Extra distance from a vertex to its label.
    pub label_spacing: f64,
    /// Radius of a drawn vertex.
    pub vertex_size: f64,
    pub vertex_colour: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            width: 300,
            height: 400,
            title_y: 20.0,
            title_font_size: 14,
            label_font_size: 12,
            center_y: 190.0,
            vertex_radius: 100.0,
            label_spacing: 15.0,
            vertex_size: 5.0,
            vertex_colour: String::from("black"),
        }
    }
}

/// Limits for the graph6 line filters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GraphConfig {
    pub max_vertices: usize,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self { max_vertices: 20 }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub search: SearchConfig,
    pub trials: TrialConfig,
    pub render: RenderConfig,
    pub graph: GraphConfig,
}

impl AppConfig {
    /// Load from a TOML file, or return the defaults when `path` is `None`.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let Some(path) = path else {
            return Ok(Self::default());
        };
        let text = fs::read_to_string(path)
            .map_err(|source| ConfigError::Io { path: path.to_path_buf(), source })?;
        let config = Self::from_toml(&text)
            .map_err(|source| ConfigError::Parse { path: path.to_path_buf(), source })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(config)
    }

    pub fn from_toml(text: &str) -> Result<Self, toml::de::Error> {
        toml::from_str(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_config_is_default() {
        assert_eq!(AppConfig::from_toml("").unwrap(), AppConfig::default());
        assert_eq!(AppConfig::load(None).unwrap(), AppConfig::default());
    }

    #[test]
    fn test_partial_sections() {
        let config = AppConfig::from_toml(
            r#"
            [search]
            distance_rule = "monotone"

            [trials]
            seed = 7

            [render]
            width = 640
            "#,
        )
        .unwrap();
        assert_eq!(config.search.max_iterations, 10);
        assert_eq!(config.search.distance_rule, DistanceRule::Monotone);
        assert_eq!(config.trials.count, 1000);
        assert_eq!(config.trials.seed, Some(7));
        assert_eq!(config.render.width, 640);
        assert_eq!(config.render.height, 400);
        assert_eq!(config.graph.max_vertices, 20);
    }

    #[test]
    fn test_unknown_rule_rejected() {
        assert!(AppConfig::from_toml("[search]\ndistance_rule = \"sideways\"").is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = AppConfig::load(Some(Path::new("/nonexistent/lattice-flows.toml"))).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }
}
