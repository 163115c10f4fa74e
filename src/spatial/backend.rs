//! Geometry backend: intersection, distance and path simplicity
//!
//! Constraints only talk to [`GeometryBackend`], so tests can swap in fakes
//! and callers can plug in another kernel. [`GeoBackend`] is the default,
//! built on the `geo` crate. All predicates work on observed (rounded)
//! coordinates.

use crate::structure::{Point, Polygon, Structure};
use geo::algorithm::line_intersection::{line_intersection, LineIntersection};
use geo::{EuclideanDistance, Intersects};
use geo_types::{Coord, Line, LineString, Point as GeoPoint, Polygon as GeoPolygon};

/// Primitives the constraints delegate to
pub trait GeometryBackend: Send + Sync {
    /// Interiors or boundaries of the two polygons meet
    fn intersects(&self, a: &Polygon, b: &Polygon) -> bool;

    /// Minimum separation. Symmetric, non-negative, 0 when touching.
    fn distance(&self, a: &Polygon, b: &Polygon) -> f64;

    /// The path has no self-crossings and no repeated non-consecutive vertices
    fn is_simple(&self, path: &[Point]) -> bool;

    /// Some pair of polygons in the structure intersects
    fn any_intersection(&self, structure: &Structure) -> bool {
        let polygons = &structure.polygons;
        polygons.iter().enumerate().any(|(i, a)| {
            polygons[i + 1..].iter().any(|b| self.intersects(a, b))
        })
    }
}

enum Shape {
    Point(GeoPoint<f64>),
    Ring(GeoPolygon<f64>),
}

/// Backend implemented with `geo` algorithms
#[derive(Debug, Clone, Copy, Default)]
pub struct GeoBackend;

impl GeoBackend {
    pub fn new() -> Self {
        Self
    }

    fn to_coord(point: &Point) -> Coord<f64> {
        let (x, y) = point.xy();
        Coord { x, y }
    }

    /// Convert to a `geo` polygon; the exterior ring is closed by `geo`
    pub fn to_geo_polygon(polygon: &Polygon) -> GeoPolygon<f64> {
        let coords: Vec<Coord<f64>> = polygon.points.iter().map(Self::to_coord).collect();
        GeoPolygon::new(LineString::from(coords), vec![])
    }

    /// `geo` form of a polygon, or `None` when it has no points
    ///
    /// Polygons whose points all observe to one position become a point:
    /// their exterior ring has no segments to measure against.
    fn to_shape(polygon: &Polygon) -> Option<Shape> {
        let first = polygon.first().map(Self::to_coord)?;
        if polygon.points.iter().all(|p| Self::to_coord(p) == first) {
            return Some(Shape::Point(GeoPoint::from(first)));
        }
        Some(Shape::Ring(Self::to_geo_polygon(polygon)))
    }

    /// Segments of a path with zero-length steps removed
    fn segments(path: &[Point]) -> (Vec<Line<f64>>, bool) {
        let mut coords: Vec<Coord<f64>> = path.iter().map(Self::to_coord).collect();
        coords.dedup();
        let closed = coords.len() > 2 && coords.first() == coords.last();
        let segments = coords.windows(2).map(|w| Line::new(w[0], w[1])).collect();
        (segments, closed)
    }
}

impl GeometryBackend for GeoBackend {
    fn intersects(&self, a: &Polygon, b: &Polygon) -> bool {
        let (Some(a), Some(b)) = (Self::to_shape(a), Self::to_shape(b)) else {
            return false;
        };
        match (a, b) {
            (Shape::Point(p), Shape::Point(q)) => p.intersects(&q),
            (Shape::Point(p), Shape::Ring(ring)) | (Shape::Ring(ring), Shape::Point(p)) => {
                p.intersects(&ring)
            }
            (Shape::Ring(r), Shape::Ring(s)) => r.intersects(&s),
        }
    }

    fn distance(&self, a: &Polygon, b: &Polygon) -> f64 {
        let (Some(a), Some(b)) = (Self::to_shape(a), Self::to_shape(b)) else {
            return f64::INFINITY;
        };
        match (a, b) {
            (Shape::Point(p), Shape::Point(q)) => p.euclidean_distance(&q),
            (Shape::Point(p), Shape::Ring(ring)) | (Shape::Ring(ring), Shape::Point(p)) => {
                p.euclidean_distance(&ring)
            }
            (Shape::Ring(r), Shape::Ring(s)) => r.euclidean_distance(&s),
        }
    }

    fn is_simple(&self, path: &[Point]) -> bool {
        let (segments, closed) = Self::segments(path);
        let n = segments.len();

        for i in 0..n {
            for j in (i + 1)..n {
                let Some(hit) = line_intersection(segments[i], segments[j]) else {
                    continue;
                };

                // Neighbouring segments may only share their common vertex
                let shared = if j == i + 1 {
                    Some(segments[i].end)
                } else if closed && i == 0 && j == n - 1 {
                    Some(segments[i].start)
                } else {
                    None
                };

                match (hit, shared) {
                    (LineIntersection::SinglePoint { intersection, .. }, Some(vertex))
                        if intersection == vertex => {}
                    _ => return false,
                }
            }
        }
        true
    }
}
