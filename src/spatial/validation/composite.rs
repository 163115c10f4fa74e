//! Composite evaluation: run a set of constraints and record each indicator

use super::constraints::{
    intersection, out_of_bound, self_intersection_with, too_close, unclosed_poly,
};
use crate::core::error::ConfigError;
use crate::spatial::backend::GeometryBackend;
use crate::spatial::domain::Domain;
use crate::structure::Structure;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The named constraints a structure can be checked against
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Constraint {
    Intersection,
    OutOfBound,
    TooClose,
    SelfIntersection,
    UnclosedPoly,
}

impl Constraint {
    pub const ALL: [Constraint; 5] = [
        Constraint::Intersection,
        Constraint::OutOfBound,
        Constraint::TooClose,
        Constraint::SelfIntersection,
        Constraint::UnclosedPoly,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Constraint::Intersection => "intersection",
            Constraint::OutOfBound => "out_of_bound",
            Constraint::TooClose => "too_close",
            Constraint::SelfIntersection => "self_intersection",
            Constraint::UnclosedPoly => "unclosed_poly",
        }
    }

    /// Violation indicator for this constraint
    pub fn evaluate<G: GeometryBackend>(&self, structure: &Structure, domain: &Domain<G>) -> u8 {
        match self {
            Constraint::Intersection => intersection(structure, domain.geometry()),
            Constraint::OutOfBound => out_of_bound(structure, domain),
            Constraint::TooClose => too_close(structure, domain),
            Constraint::SelfIntersection => self_intersection_with(structure, domain.geometry()),
            Constraint::UnclosedPoly => unclosed_poly(structure, domain),
        }
    }
}

impl fmt::Display for Constraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Constraint {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Constraint::ALL
            .into_iter()
            .find(|c| c.name() == s)
            .ok_or_else(|| ConfigError::UnknownConstraint(s.to_string()))
    }
}

/// Indicators for the constraints that were evaluated on one structure
///
/// Indicators are kept separate; combining them into a score is left to
/// the caller.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConstraintReport {
    pub results: Vec<(Constraint, u8)>,
}

impl ConstraintReport {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn record(&mut self, constraint: Constraint, indicator: u8) {
        self.results.push((constraint, indicator));
    }

    /// Indicator for a constraint, if it was evaluated
    pub fn get(&self, constraint: Constraint) -> Option<u8> {
        self.results
            .iter()
            .find(|(c, _)| *c == constraint)
            .map(|(_, v)| *v)
    }

    /// Constraints whose indicator is 1
    pub fn violated(&self) -> Vec<Constraint> {
        self.results
            .iter()
            .filter(|(_, v)| *v != 0)
            .map(|(c, _)| *c)
            .collect()
    }

    /// No evaluated constraint is violated
    pub fn is_admissible(&self) -> bool {
        self.results.iter().all(|(_, v)| *v == 0)
    }
}

/// Evaluate every constraint on one structure
pub fn evaluate<G: GeometryBackend>(structure: &Structure, domain: &Domain<G>) -> ConstraintReport {
    evaluate_selected(structure, domain, &Constraint::ALL)
}

/// Evaluate a chosen subset of constraints, in the order given
pub fn evaluate_selected<G: GeometryBackend>(
    structure: &Structure,
    domain: &Domain<G>,
    constraints: &[Constraint],
) -> ConstraintReport {
    let mut report = ConstraintReport::new();
    for constraint in constraints {
        report.record(*constraint, constraint.evaluate(structure, domain));
    }
    tracing::debug!(
        "Evaluated {} constraints on {} polygons: violated {:?}",
        constraints.len(),
        structure.len(),
        report.violated()
    );
    report
}

/// Evaluate many structures in parallel; reports keep input order
pub fn evaluate_population<G: GeometryBackend>(
    structures: &[Structure],
    domain: &Domain<G>,
    constraints: &[Constraint],
) -> Vec<ConstraintReport> {
    structures
        .par_iter()
        .map(|structure| evaluate_selected(structure, domain, constraints))
        .collect()
}
