//! Polycheck - geometric constraint validation for polygon structures
//!
//! Candidate structures produced by a generate-and-test loop are checked
//! against a [`Domain`] by independent constraints, each yielding a 0/1
//! violation indicator.

pub mod batch;
pub mod core;
pub mod spatial;
pub mod structure;

pub use crate::core::config::{load_domain_config, Bounds, DomainConfig};
pub use crate::core::error::ConfigError;
pub use spatial::validation::{
    evaluate, evaluate_population, evaluate_selected, intersection, out_of_bound, self_intersection,
    too_close, unclosed_poly, Constraint, ConstraintReport,
};
pub use spatial::{Domain, GeoBackend, GeometryBackend};
pub use structure::{Coords, Point, Polygon, Structure};
