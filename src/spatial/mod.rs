//! Geometric domain, geometry backend and constraint validation

pub mod backend;
pub mod domain;
pub mod validation;

pub use backend::{GeoBackend, GeometryBackend};
pub use domain::Domain;
