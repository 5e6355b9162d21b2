//! RDF 1.1 / Turtle 1.1 validator.
//!
//! Validates that the Turtle and N-Triples artifacts are well-formed:
//! - Turtle file parses without errors
//! - N-Triples file parses without errors
//! - Triple counts are consistent between formats

use std::path::Path;

use anyhow::{Context, Result};
use entity_decl::serializer::Format;
use sophia_api::source::TripleSource;
use sophia_turtle::parser::{nt, turtle};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/rdf";

/// Validates the Turtle and N-Triples artifacts for RDF 1.1 conformance.
///
/// # Errors
///
/// Returns an error if artifact files cannot be read.
pub fn validate(artifacts: &Path, stem: &str) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let ttl = parse_artifact(artifacts, stem, Format::Turtle, &mut report)?;
    let nt = parse_artifact(artifacts, stem, Format::NTriples, &mut report)?;

    if let (Some(ttl), Some(nt)) = (ttl, nt) {
        if ttl == nt {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("Turtle and N-Triples agree on {ttl} triples"),
            ));
        } else {
            report.push(TestResult::warn(
                VALIDATOR,
                format!("Turtle has {ttl} triples but N-Triples has {nt}"),
            ));
        }
    }

    Ok(report)
}

/// Parses one artifact and returns its triple count, or `None` after
/// recording a failure.
///
/// # Errors
///
/// Returns an error if the file exists but cannot be read.
fn parse_artifact(
    artifacts: &Path,
    stem: &str,
    format: Format,
    report: &mut ConformanceReport,
) -> Result<Option<usize>> {
    let file_name = format.file_name(stem);
    let path = artifacts.join(&file_name);
    if !path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{file_name} not found in artifacts directory"),
        ));
        return Ok(None);
    }

    let content = std::fs::read_to_string(&path)
        .with_context(|| format!("Failed to read {}", path.display()))?;

    if content.trim().is_empty() {
        report.push(TestResult::fail(VALIDATOR, format!("{file_name} is empty")));
        return Ok(None);
    }

    let parsed = match format {
        Format::Turtle => count_triples(turtle::parse_str(&content)),
        _ => count_triples(nt::parse_str(&content)),
    };

    match parsed {
        Ok(count) => {
            report.push(TestResult::pass(
                VALIDATOR,
                format!("{file_name} parses as valid RDF ({count} triples)"),
            ));
            Ok(Some(count))
        }
        Err(err) => {
            report.push(TestResult::fail_with_details(
                VALIDATOR,
                format!("{file_name} does not parse"),
                vec![err],
            ));
            Ok(None)
        }
    }
}

fn count_triples<S: TripleSource>(mut source: S) -> Result<usize, String> {
    let mut count = 0usize;
    source
        .for_each_triple(|_| count += 1)
        .map_err(|e| e.to_string())?;
    Ok(count)
}
