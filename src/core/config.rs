//! Domain configuration loaded from TOML
//!
//! A domain is described either by explicit bounds or by an allowed area
//! whose bounding box becomes the bounds. Missing fields fall back to the
//! defaults of a 100 x 100 design space.

use crate::core::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Axis-aligned bounds of the design space
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_x: f64,
    pub max_x: f64,
    pub min_y: f64,
    pub max_y: f64,
}

impl Bounds {
    /// Bounding box of a set of [x, y] vertices
    pub fn enclosing(area: &[[f64; 2]]) -> Option<Self> {
        let (first, rest) = area.split_first()?;
        let init = Bounds {
            min_x: first[0],
            max_x: first[0],
            min_y: first[1],
            max_y: first[1],
        };
        Some(rest.iter().fold(init, |b, [x, y]| Bounds {
            min_x: b.min_x.min(*x),
            max_x: b.max_x.max(*x),
            min_y: b.min_y.min(*y),
            max_y: b.max_y.max(*y),
        }))
    }
}

/// Serialized form of a geometric domain
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConfig {
    /// Label used in logs and reports
    #[serde(default = "default_name")]
    pub name: String,

    /// Minimum separation between distinct polygons
    #[serde(default = "default_min_dist")]
    pub min_dist: f64,

    /// Whether every polygon must be a closed ring
    #[serde(default = "default_is_closed")]
    pub is_closed: bool,

    /// Explicit bounds; take precedence over `allowed_area`
    #[serde(default)]
    pub bounds: Option<Bounds>,

    /// Vertices of the allowed area, used when `bounds` is absent
    #[serde(default = "default_allowed_area")]
    pub allowed_area: Vec<[f64; 2]>,
}

fn default_name() -> String {
    "domain".to_string()
}

fn default_min_dist() -> f64 {
    15.0
}

fn default_is_closed() -> bool {
    true
}

fn default_allowed_area() -> Vec<[f64; 2]> {
    vec![[0.0, 0.0], [0.0, 100.0], [100.0, 100.0], [100.0, 0.0]]
}

impl Default for DomainConfig {
    fn default() -> Self {
        Self {
            name: default_name(),
            min_dist: default_min_dist(),
            is_closed: default_is_closed(),
            bounds: None,
            allowed_area: default_allowed_area(),
        }
    }
}

impl DomainConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a domain from TOML text
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: DomainConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Resolved bounds: explicit bounds, else the allowed area's bounding box
    pub fn resolved_bounds(&self) -> Result<Bounds> {
        match self.bounds {
            Some(bounds) => Ok(bounds),
            None => Bounds::enclosing(&self.allowed_area).ok_or(ConfigError::EmptyAllowedArea),
        }
    }

    /// Check internal consistency
    ///
    /// Building a domain does not call this; malformed bounds are passed
    /// through to the constraints unchanged.
    pub fn validate(&self) -> Result<()> {
        let b = self.resolved_bounds()?;
        if !(b.min_x < b.max_x && b.min_y < b.max_y) {
            return Err(ConfigError::InvalidBounds {
                min_x: b.min_x,
                max_x: b.max_x,
                min_y: b.min_y,
                max_y: b.max_y,
            });
        }
        if self.min_dist.is_nan() || self.min_dist < 0.0 {
            return Err(ConfigError::InvalidMinDist(self.min_dist));
        }
        Ok(())
    }
}

/// Load a domain configuration from a TOML file
pub fn load_domain_config(path: &Path) -> Result<DomainConfig> {
    let content = fs::read_to_string(path)?;
    let config = DomainConfig::from_toml_str(&content)?;
    tracing::debug!("Loaded domain '{}' from {}", config.name, path.display());
    Ok(config)
}
