//! JSON-LD 1.1 validator.
//!
//! Verifies that `<stem>.json` is a well-formed JSON-LD 1.1 document:
//! - Has `@context` with the standard prefixes and the ontology prefix
//! - Has `@graph` whose first node is the `owl:Ontology` header
//! - Every top-level node has an `@id` that is an IRI, not a relative reference

use std::path::Path;

use anyhow::{Context, Result};
use entity_decl::serializer::Format;
use entity_decl::Ontology;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/jsonld";

/// Prefixes every artifact's context binds, besides the ontology's own.
const STANDARD_PREFIXES: &[&str] = &["owl", "rdf", "rdfs", "xsd"];

/// Validates the JSON-LD artifact for JSON-LD 1.1 conformance.
///
/// # Errors
///
/// Returns an error if the file cannot be read.
pub fn validate(ontology: &Ontology, artifacts: &Path, stem: &str) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let file_name = Format::JsonLd.file_name(stem);
    let json_path = artifacts.join(&file_name);
    if !json_path.exists() {
        report.push(TestResult::fail(VALIDATOR, format!("{file_name} not found")));
        return Ok(report);
    }

    let content = std::fs::read_to_string(&json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;

    let value: Value = match serde_json::from_str(&content) {
        Ok(value) => value,
        Err(err) => {
            report.push(TestResult::fail(
                VALIDATOR,
                format!("{file_name} is not valid JSON: {err}"),
            ));
            return Ok(report);
        }
    };

    check_context(ontology, &value, &mut report);
    check_graph_structure(ontology, &value, &mut report);
    check_id_resolution(&value, &mut report);

    Ok(report)
}

/// Verifies that the `@context` binds every required prefix to its namespace.
fn check_context(ontology: &Ontology, value: &Value, report: &mut ConformanceReport) {
    let Some(context) = value.get("@context") else {
        report.push(TestResult::fail(VALIDATOR, "JSON-LD document missing @context"));
        return;
    };

    let mut missing: Vec<String> = STANDARD_PREFIXES
        .iter()
        .filter(|prefix| context.get(**prefix).and_then(Value::as_str).is_none())
        .map(|prefix| (*prefix).to_owned())
        .collect();

    match context.get(ontology.prefix()).and_then(Value::as_str) {
        Some(ns) if ns == ontology.base_iri() => {}
        Some(ns) => missing.push(format!(
            "{} is bound to {ns}, expected {}",
            ontology.prefix(),
            ontology.base_iri()
        )),
        None => missing.push(ontology.prefix().to_owned()),
    }

    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "All required namespace prefixes present in @context",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Missing prefixes in @context",
            missing,
        ));
    }
}

/// Verifies that `@graph` is an array headed by the ontology node.
fn check_graph_structure(ontology: &Ontology, value: &Value, report: &mut ConformanceReport) {
    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        report.push(TestResult::fail(
            VALIDATOR,
            "JSON-LD document missing @graph array",
        ));
        return;
    };

    let expected = ontology.len() + 1;
    if graph.len() == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("@graph array present with {} nodes", graph.len()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "@graph has {} nodes (expected header + {} classes = {expected})",
                graph.len(),
                ontology.len()
            ),
        ));
    }

    let header = graph.first();
    let is_header = header
        .and_then(|node| node.get("@type"))
        .and_then(Value::as_str)
        == Some("owl:Ontology");
    let header_id = header.and_then(|node| node.get("@id")).and_then(Value::as_str);
    if is_header && header_id == Some(ontology.ontology_iri()) {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("First @graph node is the owl:Ontology {}", ontology.ontology_iri()),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!(
                "First @graph node should be owl:Ontology {}",
                ontology.ontology_iri()
            ),
        ));
    }

    let missing_id_count = graph
        .iter()
        .filter(|node| node.get("@id").is_none())
        .count();

    if missing_id_count == 0 {
        report.push(TestResult::pass(VALIDATOR, "All @graph nodes have @id"));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{missing_id_count} nodes in @graph are missing @id"),
        ));
    }
}

/// Verifies that all `@id` values in the graph are full IRIs or CURIEs.
fn check_id_resolution(value: &Value, report: &mut ConformanceReport) {
    let Some(graph) = value.get("@graph").and_then(Value::as_array) else {
        return;
    };

    let relative_ids: Vec<String> = graph
        .iter()
        .filter_map(|node| node.get("@id").and_then(Value::as_str))
        .filter(|id| !id.contains(':'))
        .map(str::to_owned)
        .collect();

    if relative_ids.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "All @id values contain IRI scheme or prefix",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Bare relative @id values found (no IRI scheme or prefix)",
            relative_ids,
        ));
    }
}
