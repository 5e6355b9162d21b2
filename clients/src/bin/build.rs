//! `decl-build`: loads ontology manifests, registers their entities, and
//! writes the serialized artifacts to the output directory.
//!
//! **Outputs**, per manifest `<stem>.toml` / `<stem>.json`:
//! - `<out>/<stem>.json`: JSON-LD 1.1
//! - `<out>/<stem>.ttl`: Turtle 1.1
//! - `<out>/<stem>.nt`: N-Triples
//!
//! **Usage:**
//! ```text
//! decl-build [MANIFEST|DIR]... [--out <path>] [--verbose]
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use entity_decl::serializer::Format;
use entity_decl::{Manifest, Ontology};
use entity_decl_clients::{discover_manifests, setup_logging};
use entity_decl_conformance::manifest_stem;
use tracing::info;

/// Build ontology artifacts from entity manifests.
#[derive(Parser)]
#[command(name = "decl-build", about = "Build ontology artifacts from entity manifests")]
struct Args {
    /// Manifest files or directories to search (default: manifests/).
    inputs: Vec<PathBuf>,

    /// Output directory for generated artifacts.
    #[arg(long, default_value = "public")]
    out: PathBuf,

    /// Log every registered entity.
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    setup_logging(args.verbose);
    let out = &args.out;

    fs::create_dir_all(out)
        .with_context(|| format!("Failed to create output directory: {}", out.display()))?;

    let manifests = discover_manifests(&args.inputs)?;
    if manifests.is_empty() {
        anyhow::bail!("No manifests found");
    }

    for manifest in &manifests {
        let ontology = Manifest::from_path(manifest)
            .and_then(Manifest::into_ontology)
            .with_context(|| format!("Failed to build {}", manifest.display()))?;

        println!(
            "{} v{}: {} entities",
            ontology.label().unwrap_or(ontology.ontology_iri()),
            ontology.version().unwrap_or("-"),
            ontology.len()
        );

        write_artifacts(&ontology, out, &manifest_stem(manifest))?;
    }

    println!("Build complete.");
    Ok(())
}

/// Writes every [`Format`] of `ontology` into `out`.
///
/// # Errors
///
/// Returns an error if serialization or a file write fails.
fn write_artifacts(ontology: &Ontology, out: &Path, stem: &str) -> Result<()> {
    for format in Format::ALL {
        let path = out.join(format.file_name(stem));
        let text = format
            .render(ontology)
            .with_context(|| format!("Failed to serialize ontology as {format:?}"))?;
        fs::write(&path, &text)
            .with_context(|| format!("Failed to write {}", path.display()))?;
        info!(path = %path.display(), bytes = text.len(), "written");
        println!("  Written: {}", path.display());
    }
    Ok(())
}
