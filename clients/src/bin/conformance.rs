//! `decl-conformance`: validates ontology manifests and their built
//! artifacts.
//!
//! Runs the conformance suite for each manifest:
//! - OWL 2 DL structure of the registered entities
//! - Class inventory of the JSON-LD artifact
//! - JSON-LD 1.1 document structure
//! - RDF 1.1 parsing of the Turtle and N-Triples artifacts
//!
//! **Usage:**
//! ```text
//! decl-conformance [MANIFEST|DIR]... [--artifacts <path>] [--verbose]
//! ```
//!
//! Exits non-zero if any conformance check fails.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::PathBuf;
use std::process;

use anyhow::Result;
use clap::Parser;
use entity_decl_clients::{discover_manifests, setup_logging};
use entity_decl_conformance::{run_all, ConformancePaths};

/// Run the entity-decl conformance suite.
#[derive(Parser)]
#[command(
    name = "decl-conformance",
    about = "Validate ontology manifests and their built artifacts"
)]
struct Args {
    /// Manifest files or directories to search (default: manifests/).
    inputs: Vec<PathBuf>,

    /// Path to the built artifacts directory.
    #[arg(long, default_value = "public")]
    artifacts: PathBuf,

    /// Enable debug logging.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);

    let paths = ConformancePaths {
        manifests: discover_manifests(&args.inputs)?,
        artifacts: args.artifacts,
    };

    let report = run_all(&paths)?;

    println!("Ontology Conformance Report");
    println!("===========================");
    println!();
    println!("{report}");

    let failed = report.failure_count();
    if failed > 0 {
        eprintln!("Conformance FAILED: {failed} check(s) did not pass.");
        process::exit(1);
    }

    println!("Conformance PASSED.");
    Ok(())
}
