//! Shared plumbing for the `decl-build` and `decl-conformance` binaries:
//! manifest discovery and logging setup.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::{debug, Level};
use tracing_subscriber::FmtSubscriber;
use walkdir::WalkDir;

/// Input used when no manifest arguments are given.
pub const DEFAULT_INPUT: &str = "manifests";

/// Installs a compact stderr subscriber, at `DEBUG` when `verbose`.
///
/// A subscriber installed earlier (e.g. by a test harness) is left in place.
pub fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .compact()
        .finish();
    if tracing::subscriber::set_global_default(subscriber).is_err() {
        debug!("global subscriber already set");
    }
}

/// Returns `true` for files with a manifest extension (`.toml` or `.json`).
#[must_use]
pub fn is_manifest(path: &Path) -> bool {
    matches!(
        path.extension().and_then(|e| e.to_str()),
        Some("toml" | "json")
    )
}

/// Expands the command-line inputs into a sorted, de-duplicated list of
/// manifest files.
///
/// Files are taken as given whatever their extension; directories are
/// walked recursively for `.toml` and `.json` files. An empty input list
/// means [`DEFAULT_INPUT`].
///
/// # Errors
///
/// Returns an error if an input does not exist or a directory cannot be read.
pub fn discover_manifests(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let defaults = [PathBuf::from(DEFAULT_INPUT)];
    let inputs = if inputs.is_empty() { &defaults[..] } else { inputs };

    let mut found = Vec::new();
    for input in inputs {
        if input.is_file() {
            found.push(input.clone());
            continue;
        }
        if !input.is_dir() {
            anyhow::bail!("No such manifest or directory: {}", input.display());
        }
        for entry in WalkDir::new(input).sort_by_file_name() {
            let entry =
                entry.with_context(|| format!("Failed to walk {}", input.display()))?;
            if entry.file_type().is_file() && is_manifest(entry.path()) {
                debug!(path = %entry.path().display(), "found manifest");
                found.push(entry.into_path());
            }
        }
    }

    found.sort();
    found.dedup();
    Ok(found)
}
