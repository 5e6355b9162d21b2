//! Conformance suite for entity-decl ontologies.
//!
//! Every manifest is rebuilt into a live [`Ontology`] and checked together
//! with the artifacts `decl-build` wrote for it.
//!
//! # Conformance Scope
//!
//! | Component | Standard |
//! |-----------|----------|
//! | Live registry | OWL 2 DL structural constraints |
//! | `<stem>.json` | JSON-LD 1.1, class inventory |
//! | `<stem>.ttl` / `<stem>.nt` | RDF 1.1, Turtle 1.1, N-Triples |
//!
//! # Entry Point
//!
//! ```no_run
//! use entity_decl_conformance::{ConformancePaths, run_all};
//! use std::path::PathBuf;
//!
//! let paths = ConformancePaths {
//!     manifests: vec![PathBuf::from("manifests/drums.toml")],
//!     artifacts: PathBuf::from("public"),
//! };
//! let report = run_all(&paths).expect("Failed to run conformance");
//! assert!(report.all_passed());
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod report;
pub mod validators;

use std::path::{Path, PathBuf};

use anyhow::Result;
use entity_decl::{Manifest, Ontology};
use tracing::info;

pub use report::{ConformanceReport, Severity, TestResult};

/// Inputs required by the conformance runner.
pub struct ConformancePaths {
    /// Manifest files to check.
    pub manifests: Vec<PathBuf>,
    /// Directory containing built artifacts (`<stem>.json`, `<stem>.ttl`, `<stem>.nt`).
    pub artifacts: PathBuf,
}

/// Runs all conformance validators for every manifest and returns the
/// aggregated report.
///
/// A manifest that fails to build is reported as a failure and skipped.
///
/// # Errors
///
/// Returns an error only if an artifact file exists but cannot be read.
pub fn run_all(paths: &ConformancePaths) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    for manifest in &paths.manifests {
        let stem = manifest_stem(manifest);
        let built = Manifest::from_path(manifest).and_then(Manifest::into_ontology);
        let mut section = match built {
            Ok(ontology) => {
                info!(manifest = %manifest.display(), entities = ontology.len(), "checking");
                validate_ontology(&ontology, &paths.artifacts, &stem)?
            }
            Err(err) => {
                let mut section = ConformanceReport::new();
                section.push(TestResult::fail(
                    "manifest",
                    format!("{} does not build: {err}", manifest.display()),
                ));
                section
            }
        };
        section.tag_target(&stem);
        report.extend(section);
    }

    Ok(report)
}

/// Runs every validator against one ontology and its artifacts.
///
/// Validators are run in this order:
/// 1. OWL 2 DL structural constraints (live registry, no file I/O)
/// 2. Class inventory of the JSON-LD artifact
/// 3. JSON-LD 1.1 document structure
/// 4. RDF 1.1 / Turtle 1.1 / N-Triples parsing
///
/// # Errors
///
/// Returns an error if an artifact file exists but cannot be read.
pub fn validate_ontology(
    ontology: &Ontology,
    artifacts: &Path,
    stem: &str,
) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();
    report.extend(validators::ontology::owl::validate(ontology));
    report.extend(validators::ontology::inventory::validate(ontology, artifacts, stem)?);
    report.extend(validators::ontology::jsonld::validate(ontology, artifacts, stem)?);
    report.extend(validators::ontology::rdf::validate(artifacts, stem)?);
    Ok(report)
}

/// File stem used to name a manifest's artifacts.
pub fn manifest_stem(manifest: &Path) -> String {
    manifest
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "ontology".to_owned())
}

#[cfg(test)]
mod tests_unit {
    use super::*;
    use entity_decl::serializer::Format;

    fn write_artifacts(ontology: &Ontology, dir: &Path, stem: &str) {
        for format in Format::ALL {
            let text = format.render(ontology).expect("render");
            std::fs::write(dir.join(format.file_name(stem)), text).expect("write artifact");
        }
    }

    #[test]
    fn owl_dl_constraints_pass() {
        let ontology = Ontology::drums().expect("bundled manifest");
        let report = validators::ontology::owl::validate(ontology);
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(
            failures.is_empty(),
            "OWL 2 DL constraint failures: {:#?}",
            failures
        );
    }

    #[test]
    fn built_artifacts_conform() {
        let ontology = Ontology::drums().expect("bundled manifest");
        let dir = tempfile::tempdir().expect("tempdir");
        write_artifacts(ontology, dir.path(), "drums");

        let report = validate_ontology(ontology, dir.path(), "drums").expect("validate");
        let failures: Vec<_> = report.results.iter().filter(|r| r.is_failure()).collect();
        assert!(failures.is_empty(), "Conformance failures: {:#?}", failures);
    }

    #[test]
    fn missing_artifacts_fail() {
        let ontology = Ontology::drums().expect("bundled manifest");
        let dir = tempfile::tempdir().expect("tempdir");
        let report = validate_ontology(ontology, dir.path(), "drums").expect("validate");
        assert!(report.failure_count() >= 3);
    }

    #[test]
    fn broken_manifest_is_reported() {
        let dir = tempfile::tempdir().expect("tempdir");
        let manifest = dir.path().join("broken.toml");
        std::fs::write(
            &manifest,
            "[ontology]\nbase_iri = \"http://example.org/x#\"\n\n[[entity]]\nname = \"A\"\nparent = \"B\"\n",
        )
        .expect("write manifest");
        let report = run_all(&ConformancePaths {
            manifests: vec![manifest],
            artifacts: dir.path().to_path_buf(),
        })
        .expect("run");
        assert_eq!(report.failure_count(), 1);
        assert_eq!(report.results[0].target, "broken");
        assert_eq!(report.results[0].validator, "manifest");
    }
}
