//! OWL 2 DL validator.
//!
//! Validates OWL 2 DL constraints on a live ontology:
//! - Subclass targets must be known classes
//! - Equivalence expressions must reference known classes
//! - Class IRIs must be unique
//! - The subclass hierarchy must be acyclic
//! - Annotation values should have the type OWL expects for their property

use std::collections::{HashMap, HashSet};

use entity_decl::model::iris::ROOT;
use entity_decl::{AttributeKey, Literal, Ontology};

use crate::report::{ConformanceReport, TestResult};

const VALIDATOR: &str = "ontology/owl";

/// Validates OWL 2 DL constraints on the live ontology.
pub fn validate(ontology: &Ontology) -> ConformanceReport {
    let mut report = ConformanceReport::new();

    let mut violations: Vec<String> = Vec::new();
    for decl in ontology.declarations() {
        if decl.parent != ROOT && !ontology.is_known(&decl.parent) {
            violations.push(format!(
                "Class {} has unknown subClassOf target: {}",
                decl.name, decl.parent
            ));
        }
        if let Some(expr) = &decl.annotations.equivalent_to {
            for class in expr.class_names() {
                if class != ROOT && !ontology.is_known(class) {
                    violations.push(format!(
                        "Class {} has unknown equivalentClass operand: {}",
                        decl.name, class
                    ));
                }
            }
        }
    }

    if violations.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!(
                "All OWL 2 DL structural constraints satisfied ({} classes)",
                ontology.len()
            ),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "OWL 2 DL constraint violations detected",
            violations,
        ));
    }

    check_unique_iris(ontology, &mut report);
    check_acyclic(ontology, &mut report);
    check_annotation_types(ontology, &mut report);

    report
}

fn check_unique_iris(ontology: &Ontology, report: &mut ConformanceReport) {
    let mut seen: HashMap<String, &str> = HashMap::new();
    let mut clashes: Vec<String> = Vec::new();
    for decl in ontology.declarations() {
        let iri = ontology.iri_of(&decl.name);
        if let Some(previous) = seen.insert(iri.clone(), &decl.name) {
            clashes.push(format!("{iri} declared by {previous} and {}", decl.name));
        }
    }

    if clashes.is_empty() {
        report.push(TestResult::pass(VALIDATOR, "All class IRIs are unique"));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Duplicate class IRIs detected",
            clashes,
        ));
    }
}

/// Follows each parent chain; a chain longer than the class count loops.
fn check_acyclic(ontology: &Ontology, report: &mut ConformanceReport) {
    let limit = ontology.len();
    let mut cyclic: Vec<String> = Vec::new();

    for decl in ontology.declarations() {
        let mut visited: HashSet<&str> = HashSet::new();
        let mut current = Some(decl);
        while let Some(d) = current {
            if !visited.insert(d.name.as_str()) || visited.len() > limit {
                cyclic.push(format!("{} reaches itself through subClassOf", decl.name));
                break;
            }
            current = ontology.find(&d.parent);
        }
    }

    if cyclic.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            format!("Subclass hierarchy is acyclic and rooted at {ROOT}"),
        ));
    } else {
        report.push(TestResult::fail_with_details(
            VALIDATOR,
            "Circular subClassOf chains detected",
            cyclic,
        ));
    }
}

/// Reports literal values whose type does not fit the annotation property.
///
/// These are warnings: OWL annotation properties accept any literal, but
/// tools expect booleans for `owl:deprecated` and strings for the version
/// properties.
fn check_annotation_types(ontology: &Ontology, report: &mut ConformanceReport) {
    let mut odd: Vec<String> = Vec::new();

    for decl in ontology.declarations() {
        for (key, values) in decl.annotations.iter() {
            for value in values {
                if !fits(key, value) {
                    odd.push(format!("{}: {} = {:?}", decl.name, key.curie(), value));
                }
            }
        }
    }

    if odd.is_empty() {
        report.push(TestResult::pass(
            VALIDATOR,
            "Annotation values have the expected literal types",
        ));
    } else {
        report.push(TestResult::warn_with_details(
            VALIDATOR,
            format!("{} annotation values have unexpected types", odd.len()),
            odd,
        ));
    }
}

fn fits(key: AttributeKey, value: &Literal) -> bool {
    match key {
        AttributeKey::Deprecated => matches!(value, Literal::Bool(_)),
        AttributeKey::VersionInfo
        | AttributeKey::IncompatibleWith
        | AttributeKey::BackwardCompatibleWith => {
            matches!(value, Literal::Str(_) | Literal::Iri { .. })
        }
        AttributeKey::Label | AttributeKey::Comment => {
            matches!(value, Literal::Str(_) | Literal::Lang { .. })
        }
        AttributeKey::SeeAlso | AttributeKey::IsDefinedBy | AttributeKey::EquivalentTo => true,
    }
}
