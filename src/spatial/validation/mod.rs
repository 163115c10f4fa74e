//! Constraint validation for candidate polygon structures

mod composite;
mod constraints;

pub use composite::{
    evaluate, evaluate_population, evaluate_selected, Constraint, ConstraintReport,
};
pub use constraints::{
    intersection, out_of_bound, out_of_bound_strict, pairwise_distance, self_intersection,
    self_intersection_with, too_close, unclosed_poly, BOUNDARY_MARGIN, FAR_AWAY,
};
