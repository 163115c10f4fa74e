//! Polygons and the structures built from them

use super::point::Point;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Ordered ring of points. Closure is a domain policy, not a type invariant.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polygon {
    #[serde(default = "generate_id")]
    pub id: String,
    pub points: Vec<Point>,
}

fn generate_id() -> String {
    Uuid::new_v4().to_string()
}

impl Polygon {
    pub fn new(id: impl Into<String>, points: Vec<Point>) -> Self {
        Self {
            id: id.into(),
            points,
        }
    }

    /// Polygon with a freshly generated id
    pub fn from_points(points: Vec<Point>) -> Self {
        Self::new(generate_id(), points)
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn first(&self) -> Option<&Point> {
        self.points.first()
    }

    pub fn last(&self) -> Option<&Point> {
        self.points.last()
    }

    /// First and last points coincide. Empty polygons count as closed.
    pub fn is_closed(&self) -> bool {
        match (self.first(), self.last()) {
            (Some(first), Some(last)) => first.coincides(last),
            _ => true,
        }
    }

    /// Copy with the first point appended when the ring is open
    pub fn closed(&self) -> Self {
        let mut poly = self.clone();
        if !poly.is_closed() {
            if let Some(first) = poly.first().copied() {
                poly.points.push(first);
            }
        }
        poly
    }
}

/// A candidate design: an ordered collection of polygons
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Structure {
    pub polygons: Vec<Polygon>,
}

impl Structure {
    pub fn new(polygons: Vec<Polygon>) -> Self {
        Self { polygons }
    }

    pub fn len(&self) -> usize {
        self.polygons.len()
    }

    pub fn is_empty(&self) -> bool {
        self.polygons.is_empty()
    }

    /// Every point of every polygon, in scan order
    pub fn points(&self) -> impl Iterator<Item = &Point> {
        self.polygons.iter().flat_map(|poly| poly.points.iter())
    }
}

impl From<Vec<Polygon>> for Structure {
    fn from(polygons: Vec<Polygon>) -> Self {
        Self::new(polygons)
    }
}
