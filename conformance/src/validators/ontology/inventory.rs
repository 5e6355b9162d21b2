//! Ontology inventory validator.
//!
//! Verifies that the built JSON-LD artifact holds exactly the classes the
//! live registry declares: one `owl:Class` node per entity, each under the
//! IRI the registry assigns it, with its `rdfs:subClassOf` link intact.

use std::collections::{BTreeSet, HashMap};
use std::path::Path;

use anyhow::{Context, Result};
use entity_decl::serializer::Format;
use entity_decl::Ontology;
use serde_json::Value;

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/inventory";

/// Validates the class inventory of `<stem>.json` against `ontology`.
///
/// # Errors
///
/// Returns an error if the artifact file cannot be read.
pub fn validate(ontology: &Ontology, artifacts: &Path, stem: &str) -> Result<ConformanceReport> {
    let mut report = ConformanceReport::new();

    let file_name = Format::JsonLd.file_name(stem);
    let json_path = artifacts.join(&file_name);
    if !json_path.exists() {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{file_name} not found in artifacts directory"),
        ));
        return Ok(report);
    }

    let content = std::fs::read_to_string(&json_path)
        .with_context(|| format!("Failed to read {}", json_path.display()))?;

    let Ok(value) = serde_json::from_str::<Value>(&content) else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("{file_name} is not valid JSON"),
        ));
        return Ok(report);
    };

    validate_json_inventory(ontology, &value, &mut report);

    Ok(report)
}

/// Maps each top-level `owl:Class` node's `@id` to its `rdfs:subClassOf` target.
fn class_nodes(value: &Value) -> HashMap<&str, Option<&str>> {
    value
        .get("@graph")
        .and_then(Value::as_array)
        .map(|graph| {
            graph
                .iter()
                .filter(|node| node.get("@type").and_then(Value::as_str) == Some("owl:Class"))
                .filter_map(|node| {
                    let id = node.get("@id").and_then(Value::as_str)?;
                    let parent = node
                        .get("rdfs:subClassOf")
                        .and_then(|p| p.get("@id"))
                        .and_then(Value::as_str);
                    Some((id, parent))
                })
                .collect()
        })
        .unwrap_or_default()
}

fn validate_json_inventory(ontology: &Ontology, value: &Value, report: &mut ConformanceReport) {
    let nodes = class_nodes(value);

    check_count(report, "class", nodes.len(), ontology.len());

    let mut missing: Vec<String> = Vec::new();
    let mut wrong_parent: Vec<String> = Vec::new();
    for decl in ontology.declarations() {
        let iri = ontology.iri_of(&decl.name);
        match nodes.get(iri.as_str()) {
            None => missing.push(iri),
            Some(parent) => {
                let expected = ontology.iri_of(&decl.parent);
                if *parent != Some(expected.as_str()) {
                    wrong_parent.push(format!(
                        "{iri}: expected subClassOf {expected}, found {}",
                        parent.unwrap_or("nothing")
                    ));
                }
            }
        }
    }

    if missing.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Every declared class appears in the artifact",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            format!("{} declared classes missing from the artifact", missing.len()),
            missing,
        ));
    }

    if wrong_parent.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Every class node carries its declared parent",
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Class nodes with a wrong or missing rdfs:subClassOf",
            wrong_parent,
        ));
    }

    let declared: BTreeSet<String> = ontology
        .declarations()
        .iter()
        .map(|d| ontology.iri_of(&d.name))
        .collect();
    let extra: Vec<String> = nodes
        .keys()
        .filter(|id| !declared.contains(**id))
        .map(|id| (*id).to_owned())
        .collect();
    if !extra.is_empty() {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Artifact declares classes the registry does not know",
            extra,
        ));
    }
}

/// Checks a count matches the expected value.
fn check_count(report: &mut ConformanceReport, label: &str, actual: usize, expected: usize) {
    if actual == expected {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Correct {label} count: {actual}"),
        ));
    } else {
        report.push(TestResult::fail(
            VALIDATOR,
            format!("Wrong {label} count: expected {expected}, got {actual}"),
        ));
    }
}
