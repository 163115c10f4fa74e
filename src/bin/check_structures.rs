//! Check candidate structures against a domain
//!
//! Usage:
//!   cargo run --bin check_structures -- --domain data/domains/default.toml --structures population.json
//!
//! Exits non-zero only when the domain, the constraint list or the structure
//! file cannot be used; violating structures are reported, not failed.

use clap::Parser;
use polycheck::batch::{
    check_population, load_domain, parse_constraints, read_structures, render_json, render_text,
};
use polycheck::core::error::Result;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

/// Evaluate polygon structures against geometric constraints
#[derive(Parser, Debug)]
#[command(name = "check_structures")]
#[command(about = "Report per-constraint violation indicators for candidate structures")]
struct Args {
    /// Domain configuration (TOML)
    #[arg(long, short = 'd')]
    domain: PathBuf,

    /// JSON array of structures
    #[arg(long, short = 's')]
    structures: PathBuf,

    /// Comma-separated constraint names; all constraints when omitted
    #[arg(long, value_delimiter = ',')]
    only: Vec<String>,

    /// Output format: json or text
    #[arg(long, default_value = "json")]
    format: String,

    /// Reject domains with inverted bounds or negative min_dist
    #[arg(long)]
    strict_domain: bool,
}

fn run(args: &Args) -> Result<()> {
    let domain = load_domain(&args.domain, args.strict_domain)?;
    let constraints = parse_constraints(&args.only)?;
    let structures = read_structures(&args.structures)?;

    let results = check_population(&structures, &domain, &constraints);
    match args.format.as_str() {
        "text" => println!("{}", render_text(&results)),
        _ => println!("{}", render_json(&results)?),
    }
    Ok(())
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("polycheck=info,check_structures=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
