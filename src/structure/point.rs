//! Points with exact storage and integer observation
//!
//! Coordinates are stored as raw `f64` so that repeated small perturbations
//! accumulate, but every read rounds to the nearest integer (ties to even).

use serde::{Deserialize, Serialize};

/// Round a stored coordinate to its observed integer value
///
/// Non-finite values never fail: NaN observes as 0 and infinities saturate
/// to `i64::MIN` / `i64::MAX`, as do finite values beyond the `i64` range.
#[inline]
pub fn observe(value: f64) -> i64 {
    value.round_ties_even() as i64
}

/// A vertex of a polygon, either spatial (x, y, z) or planar (x, y)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Point {
    Spatial { x: f64, y: f64, z: f64 },
    Planar { x: f64, y: f64 },
}

/// Observed (rounded) coordinates of a point
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Coords {
    Xyz([i64; 3]),
    Xy([i64; 2]),
}

impl Coords {
    pub fn as_slice(&self) -> &[i64] {
        match self {
            Coords::Xyz(c) => c,
            Coords::Xy(c) => c,
        }
    }

    pub fn len(&self) -> usize {
        self.as_slice().len()
    }

    pub fn is_empty(&self) -> bool {
        false
    }
}

impl Point {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Point::Spatial { x, y, z }
    }

    pub fn planar(x: f64, y: f64) -> Self {
        Point::Planar { x, y }
    }

    pub fn is_planar(&self) -> bool {
        matches!(self, Point::Planar { .. })
    }

    #[inline]
    pub fn x(&self) -> i64 {
        observe(self.raw_x())
    }

    #[inline]
    pub fn y(&self) -> i64 {
        observe(self.raw_y())
    }

    /// Always 0 for planar points
    #[inline]
    pub fn z(&self) -> i64 {
        observe(self.raw_z())
    }

    pub fn raw_x(&self) -> f64 {
        match *self {
            Point::Spatial { x, .. } | Point::Planar { x, .. } => x,
        }
    }

    pub fn raw_y(&self) -> f64 {
        match *self {
            Point::Spatial { y, .. } | Point::Planar { y, .. } => y,
        }
    }

    pub fn raw_z(&self) -> f64 {
        match *self {
            Point::Spatial { z, .. } => z,
            Point::Planar { .. } => 0.0,
        }
    }

    pub fn set_x(&mut self, value: f64) {
        match self {
            Point::Spatial { x, .. } | Point::Planar { x, .. } => *x = value,
        }
    }

    pub fn set_y(&mut self, value: f64) {
        match self {
            Point::Spatial { y, .. } | Point::Planar { y, .. } => *y = value,
        }
    }

    /// Planar points accept the write and keep z at 0
    pub fn set_z(&mut self, value: f64) {
        if let Point::Spatial { z, .. } = self {
            *z = value;
        }
    }

    pub fn coords(&self) -> Coords {
        match self {
            Point::Spatial { .. } => Coords::Xyz([self.x(), self.y(), self.z()]),
            Point::Planar { .. } => Coords::Xy([self.x(), self.y()]),
        }
    }

    /// Same variant and same observed coordinates
    pub fn coincides(&self, other: &Point) -> bool {
        self.coords() == other.coords()
    }

    /// Observed planar position as floats, the form the geometry backend consumes
    pub fn xy(&self) -> (f64, f64) {
        (self.x() as f64, self.y() as f64)
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Point::planar(x, y)
    }
}

impl From<[f64; 2]> for Point {
    fn from([x, y]: [f64; 2]) -> Self {
        Point::planar(x, y)
    }
}

impl From<[f64; 3]> for Point {
    fn from([x, y, z]: [f64; 3]) -> Self {
        Point::new(x, y, z)
    }
}
