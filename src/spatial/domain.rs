//! The geometric domain: design-space bounds and separation policy

use super::backend::{GeoBackend, GeometryBackend};
use crate::core::config::{Bounds, DomainConfig};
use crate::core::error::Result;
use crate::structure::Polygon;

/// Immutable description of the valid design space
///
/// Built once per run and shared read-only across every constraint
/// evaluation. Bounds are not checked for well-formedness here; see
/// [`DomainConfig::validate`].
#[derive(Debug, Clone)]
pub struct Domain<G: GeometryBackend = GeoBackend> {
    name: String,
    bounds: Bounds,
    min_dist: f64,
    is_closed: bool,
    geometry: G,
}

impl Domain<GeoBackend> {
    pub fn new(bounds: Bounds, min_dist: f64, is_closed: bool) -> Self {
        Self::with_geometry(bounds, min_dist, is_closed, GeoBackend)
    }

    /// Build from a parsed configuration
    pub fn from_config(config: &DomainConfig) -> Result<Self> {
        let bounds = config.resolved_bounds()?;
        Ok(Self::new(bounds, config.min_dist, config.is_closed).named(&config.name))
    }
}

impl<G: GeometryBackend> Domain<G> {
    pub fn with_geometry(bounds: Bounds, min_dist: f64, is_closed: bool, geometry: G) -> Self {
        Self {
            name: "domain".to_string(),
            bounds,
            min_dist,
            is_closed,
            geometry,
        }
    }

    pub fn named(mut self, name: &str) -> Self {
        self.name = name.to_string();
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    pub fn min_x(&self) -> f64 {
        self.bounds.min_x
    }

    pub fn max_x(&self) -> f64 {
        self.bounds.max_x
    }

    pub fn min_y(&self) -> f64 {
        self.bounds.min_y
    }

    pub fn max_y(&self) -> f64 {
        self.bounds.max_y
    }

    pub fn min_dist(&self) -> f64 {
        self.min_dist
    }

    pub fn is_closed(&self) -> bool {
        self.is_closed
    }

    pub fn geometry(&self) -> &G {
        &self.geometry
    }

    /// Minimum distance between two polygons, 0 when they touch or overlap
    pub fn distance(&self, a: &Polygon, b: &Polygon) -> f64 {
        self.geometry.distance(a, b)
    }
}

impl Default for Domain<GeoBackend> {
    fn default() -> Self {
        let config = DomainConfig::default();
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 100.0,
            min_y: 0.0,
            max_y: 100.0,
        };
        Self::new(bounds, config.min_dist, config.is_closed)
    }
}
