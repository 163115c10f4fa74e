//! Binary constraints over polygon structures
//!
//! Each check returns a violation indicator: 0 when the structure satisfies
//! the constraint, 1 when it violates it. Checks are pure and independent,
//! so an external scorer can combine them in any order or in parallel.

use crate::spatial::backend::{GeoBackend, GeometryBackend};
use crate::spatial::domain::Domain;
use crate::structure::{Point, Polygon, Structure};

/// Distance reported for pairs that can never be too close
pub const FAR_AWAY: f64 = 9999.0;

/// Inward margin kept from each edge of the domain bounds
pub const BOUNDARY_MARGIN: f64 = 1.0;

/// Pairwise intersection check with inverted polarity
///
/// Returns 0 when some pair of polygons intersects and 1 when none do.
/// Structures with fewer than two polygons always return 0.
pub fn intersection<G: GeometryBackend>(structure: &Structure, geometry: &G) -> u8 {
    if structure.len() < 2 {
        return 0;
    }
    if geometry.any_intersection(structure) {
        return 0;
    }
    tracing::trace!("No intersecting pair among {} polygons", structure.len());
    1
}

fn outside_margin<G: GeometryBackend>(point: &Point, domain: &Domain<G>) -> bool {
    let x = point.x() as f64;
    let y = point.y() as f64;
    x < domain.min_x() + BOUNDARY_MARGIN
        || x > domain.max_x() - BOUNDARY_MARGIN
        || y < domain.min_y() + BOUNDARY_MARGIN
        || y > domain.max_y() - BOUNDARY_MARGIN
}

/// Bounds check on the first point of the structure
///
/// Only the first point of the first non-empty polygon decides the result;
/// the scan stops there whether or not it violates. Use
/// [`out_of_bound_strict`] to check every point.
pub fn out_of_bound<G: GeometryBackend>(structure: &Structure, domain: &Domain<G>) -> u8 {
    match structure.points().next() {
        Some(point) if outside_margin(point, domain) => {
            tracing::trace!("First point {:?} outside domain '{}'", point.coords(), domain.name());
            1
        }
        _ => 0,
    }
}

/// Bounds check on every point of every polygon
pub fn out_of_bound_strict<G: GeometryBackend>(structure: &Structure, domain: &Domain<G>) -> u8 {
    for poly in &structure.polygons {
        if let Some(point) = poly.points.iter().find(|p| outside_margin(p, domain)) {
            tracing::trace!(
                "Polygon {} has point {:?} outside domain '{}'",
                poly.id,
                point.coords(),
                domain.name()
            );
            return 1;
        }
    }
    0
}

/// Distance between two polygons, or [`FAR_AWAY`] for empty or identical ones
pub fn pairwise_distance<G: GeometryBackend>(a: &Polygon, b: &Polygon, domain: &Domain<G>) -> f64 {
    if std::ptr::eq(a, b) || a.is_empty() || b.is_empty() {
        return FAR_AWAY;
    }
    domain.distance(a, b)
}

/// Some pair of distinct polygons is closer than `min_dist`
pub fn too_close<G: GeometryBackend>(structure: &Structure, domain: &Domain<G>) -> u8 {
    let polygons = &structure.polygons;

    for (i, a) in polygons.iter().enumerate() {
        for b in &polygons[i + 1..] {
            let distance = pairwise_distance(a, b, domain);
            if distance < domain.min_dist() {
                tracing::trace!(
                    "Polygons {} and {} are {:.3} apart (min {})",
                    a.id,
                    b.id,
                    distance,
                    domain.min_dist()
                );
                return 1;
            }
        }
    }
    0
}

/// Some polygon's boundary path crosses or touches itself
pub fn self_intersection(structure: &Structure) -> u8 {
    self_intersection_with(structure, &GeoBackend)
}

/// [`self_intersection`] with an explicit geometry backend
pub fn self_intersection_with<G: GeometryBackend>(structure: &Structure, geometry: &G) -> u8 {
    match structure
        .polygons
        .iter()
        .find(|poly| !geometry.is_simple(&poly.points))
    {
        Some(poly) => {
            tracing::trace!("Polygon {} is not simple", poly.id);
            1
        }
        None => 0,
    }
}

/// Some polygon is an open ring while the domain requires closed ones
pub fn unclosed_poly<G: GeometryBackend>(structure: &Structure, domain: &Domain<G>) -> u8 {
    if !domain.is_closed() {
        return 0;
    }
    match structure.polygons.iter().find(|poly| !poly.is_closed()) {
        Some(poly) => {
            tracing::trace!("Polygon {} is not closed", poly.id);
            1
        }
        None => 0,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::config::Bounds;

    fn domain(min_dist: f64, is_closed: bool) -> Domain {
        let bounds = Bounds {
            min_x: 0.0,
            max_x: 10.0,
            min_y: 0.0,
            max_y: 10.0,
        };
        Domain::new(bounds, min_dist, is_closed)
    }

    fn poly(coords: &[(f64, f64)]) -> Polygon {
        Polygon::from_points(coords.iter().map(|&c| Point::from(c)).collect())
    }

    #[test]
    fn test_margin_is_inclusive() {
        let d = domain(1.0, true);
        assert_eq!(out_of_bound(&Structure::new(vec![poly(&[(1.0, 9.0)])]), &d), 0);
        assert_eq!(out_of_bound(&Structure::new(vec![poly(&[(0.0, 5.0)])]), &d), 1);
        assert_eq!(out_of_bound(&Structure::new(vec![poly(&[(5.0, 9.6)])]), &d), 1);
    }

    #[test]
    fn test_out_of_bound_skips_leading_empty_polygons() {
        let d = domain(1.0, true);
        let structure = Structure::new(vec![poly(&[]), poly(&[(-3.0, 5.0), (5.0, 5.0)])]);
        assert_eq!(out_of_bound(&structure, &d), 1);
        assert_eq!(out_of_bound(&Structure::default(), &d), 0);
    }

    #[test]
    fn test_strict_bounds_see_later_points() {
        let d = domain(1.0, true);
        let structure = Structure::new(vec![poly(&[(5.0, 5.0), (20.0, 5.0)])]);
        assert_eq!(out_of_bound(&structure, &d), 0);
        assert_eq!(out_of_bound_strict(&structure, &d), 1);
    }

    #[test]
    fn test_pairwise_distance_sentinels() {
        let d = domain(1.0, true);
        let a = poly(&[(1.0, 1.0), (2.0, 1.0), (2.0, 2.0)]);
        let empty = poly(&[]);
        assert_eq!(pairwise_distance(&a, &a, &d), FAR_AWAY);
        assert_eq!(pairwise_distance(&a, &empty, &d), FAR_AWAY);

        // an equal copy is a distinct polygon
        let copy = a.clone();
        assert_eq!(pairwise_distance(&a, &copy, &d), 0.0);
    }

    #[test]
    fn test_empty_polygon_never_too_close() {
        let d = domain(100.0, true);
        let structure = Structure::new(vec![poly(&[(1.0, 1.0), (2.0, 2.0)]), poly(&[])]);
        assert_eq!(too_close(&structure, &d), 0);
    }

    #[test]
    fn test_self_intersection_any_polygon() {
        let convex = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.0, 4.0), (0.0, 0.0)]);
        let bowtie = poly(&[(0.0, 0.0), (2.0, 2.0), (2.0, 0.0), (0.0, 2.0), (0.0, 0.0)]);

        let clean = Structure::new(vec![convex.clone()]);
        assert_eq!(self_intersection(&clean), 0);

        let mixed = Structure::new(vec![convex, bowtie]);
        assert_eq!(self_intersection_with(&mixed, &GeoBackend), 1);

        assert_eq!(self_intersection(&Structure::default()), 0);
    }

    #[test]
    fn test_unclosed_compares_rounded_endpoints() {
        let d = domain(1.0, true);
        let nearly = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0), (0.3, -0.2)]);
        assert_eq!(unclosed_poly(&Structure::new(vec![nearly]), &d), 0);

        let open = poly(&[(0.0, 0.0), (4.0, 0.0), (4.0, 4.0)]);
        assert_eq!(unclosed_poly(&Structure::new(vec![open.clone()]), &d), 1);
        assert_eq!(unclosed_poly(&Structure::new(vec![open]), &domain(1.0, false)), 0);
    }
}
