//! Batch checking of structure files
//!
//! Backs the `check_structures` binary: load a domain and a JSON array of
//! structures, evaluate the selected constraints and render the reports.

use crate::core::config::load_domain_config;
use crate::core::error::Result;
use crate::spatial::validation::{evaluate_population, Constraint, ConstraintReport};
use crate::spatial::Domain;
use crate::structure::Structure;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Per-structure outcome as written by the CLI
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructureResult {
    pub index: usize,
    pub polygons: usize,
    pub admissible: bool,
    pub violated: Vec<Constraint>,
    pub report: ConstraintReport,
}

/// Constraint names to check; every constraint when `names` is empty
pub fn parse_constraints(names: &[String]) -> Result<Vec<Constraint>> {
    if names.is_empty() {
        return Ok(Constraint::ALL.to_vec());
    }
    names
        .iter()
        .map(|name| name.trim().parse::<Constraint>())
        .collect()
}

/// Build a domain from a TOML file, validating it first when `strict`
pub fn load_domain(path: &Path, strict: bool) -> Result<Domain> {
    let config = load_domain_config(path)?;
    if strict {
        config.validate()?;
    }
    Domain::from_config(&config)
}

pub fn read_structures(path: &Path) -> Result<Vec<Structure>> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

pub fn check_population(
    structures: &[Structure],
    domain: &Domain,
    constraints: &[Constraint],
) -> Vec<StructureResult> {
    tracing::info!(
        "Checking {} structures against domain '{}'",
        structures.len(),
        domain.name()
    );

    let results: Vec<StructureResult> = evaluate_population(structures, domain, constraints)
        .into_iter()
        .zip(structures)
        .enumerate()
        .map(|(index, (report, structure))| StructureResult {
            index,
            polygons: structure.len(),
            admissible: report.is_admissible(),
            violated: report.violated(),
            report,
        })
        .collect();

    let admissible = results.iter().filter(|r| r.admissible).count();
    tracing::info!("{}/{} structures admissible", admissible, results.len());
    results
}

/// One line per structure: `#index (n polygons): name=value ...`
pub fn render_text(results: &[StructureResult]) -> String {
    results
        .iter()
        .map(|result| {
            let summary: Vec<String> = result
                .report
                .results
                .iter()
                .map(|(c, v)| format!("{}={}", c, v))
                .collect();
            format!(
                "#{} ({} polygons): {}",
                result.index,
                result.polygons,
                summary.join(" ")
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn render_json(results: &[StructureResult]) -> Result<String> {
    Ok(serde_json::to_string_pretty(results)?)
}
