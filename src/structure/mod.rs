//! Candidate structures: points, polygons and their collections

mod point;
mod polygon;

pub use point::{observe, Coords, Point};
pub use polygon::{Polygon, Structure};
