//! Turtle 1.1 serializer.
//!
//! Produces a Turtle document with prefix declarations, the ontology header,
//! and one block per declared entity.

use crate::expr::ClassExpr;
use crate::model::{EntityDecl, Literal};
use crate::registry::Ontology;
use crate::serializer::escape_literal;

/// Serializes an ontology to a Turtle string.
#[must_use]
pub fn to_turtle(ontology: &Ontology) -> String {
    let mut out = String::with_capacity(256 * (ontology.len() + 4));

    // Prefix declarations
    out.push_str("@prefix owl:  <http://www.w3.org/2002/07/owl#> .\n");
    out.push_str("@prefix rdf:  <http://www.w3.org/1999/02/22-rdf-syntax-ns#> .\n");
    out.push_str("@prefix rdfs: <http://www.w3.org/2000/01/rdf-schema#> .\n");
    out.push_str("@prefix xsd:  <http://www.w3.org/2001/XMLSchema#> .\n");
    out.push_str(&format!(
        "@prefix {}: <{}> .\n",
        ontology.prefix(),
        ontology.base_iri()
    ));
    out.push('\n');

    // Ontology header
    out.push_str(&format!("<{}>\n  a owl:Ontology ;\n", ontology.ontology_iri()));
    if let Some(label) = ontology.label() {
        out.push_str(&format!("  rdfs:label {} ;\n", turtle_string(label)));
    }
    if let Some(version) = ontology.version() {
        out.push_str(&format!("  owl:versionInfo {} ;\n", turtle_string(version)));
    }
    out.push_str(".\n\n");

    for decl in ontology.declarations() {
        out.push_str(&entity_block(ontology, decl));
    }

    out
}

fn entity_block(ontology: &Ontology, decl: &EntityDecl) -> String {
    let mut block = format!(
        "<{}>\n  a owl:Class ;\n  rdfs:subClassOf <{}> ;\n",
        ontology.iri_of(&decl.name),
        ontology.iri_of(&decl.parent)
    );
    if let Some(expr) = &decl.annotations.equivalent_to {
        block.push_str(&format!(
            "  owl:equivalentClass {} ;\n",
            expression_to_turtle(ontology, expr)
        ));
    }
    for (key, values) in decl.annotations.iter() {
        let objects: Vec<String> = values
            .iter()
            .map(|v| literal_to_turtle(ontology, v))
            .collect();
        block.push_str(&format!("  {} {} ;\n", key.curie(), objects.join(" , ")));
    }
    block.push_str(".\n\n");
    block
}

fn turtle_string(s: &str) -> String {
    format!("\"{}\"", escape_literal(s))
}

fn literal_to_turtle(ontology: &Ontology, literal: &Literal) -> String {
    match literal {
        Literal::Str(s) => turtle_string(s),
        Literal::Lang { value, lang } => format!("{}@{}", turtle_string(value), lang),
        Literal::Bool(b) => format!("\"{b}\"^^xsd:boolean"),
        Literal::Int(i) => format!("\"{i}\"^^xsd:integer"),
        Literal::Iri { iri } => format!("<{}>", ontology.resolve(iri)),
    }
}

fn expression_to_turtle(ontology: &Ontology, expr: &ClassExpr) -> String {
    match expr {
        ClassExpr::Named(name) => format!("<{}>", ontology.iri_of(name)),
        ClassExpr::And(items) => format!(
            "[ a owl:Class ; owl:intersectionOf {} ]",
            collection(ontology, items)
        ),
        ClassExpr::Or(items) => format!(
            "[ a owl:Class ; owl:unionOf {} ]",
            collection(ontology, items)
        ),
        ClassExpr::Not(inner) => format!(
            "[ a owl:Class ; owl:complementOf {} ]",
            expression_to_turtle(ontology, inner)
        ),
        ClassExpr::SomeValuesFrom { property, filler } => format!(
            "[ a owl:Restriction ; owl:onProperty <{}> ; owl:someValuesFrom {} ]",
            ontology.local_iri(property),
            expression_to_turtle(ontology, filler)
        ),
        ClassExpr::AllValuesFrom { property, filler } => format!(
            "[ a owl:Restriction ; owl:onProperty <{}> ; owl:allValuesFrom {} ]",
            ontology.local_iri(property),
            expression_to_turtle(ontology, filler)
        ),
    }
}

fn collection(ontology: &Ontology, items: &[ClassExpr]) -> String {
    let mut result = "( ".to_owned();
    for item in items {
        result.push_str(&expression_to_turtle(ontology, item));
        result.push(' ');
    }
    result.push(')');
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{AttributeKey, AttributeMap};

    fn drums() -> Ontology {
        let mut o = Ontology::new("http://example.org/drums#")
            .expect("base")
            .with_prefix("drums")
            .expect("prefix")
            .with_version("0.1");
        o.define(
            "Drumhead",
            "Thing",
            &AttributeMap::new()
                .comment("Generic \"drumhead\" class")
                .version_info("0.1"),
        )
        .expect("drumhead");
        o.define(
            "Drum",
            "Thing",
            &AttributeMap::new()
                .equivalent_to(ClassExpr::parse("hasPart some Drumhead").expect("expr"))
                .with(AttributeKey::Label, [Literal::from("Drum"), Literal::lang("Trommel", "de")])
                .deprecated(),
        )
        .expect("drum");
        o
    }

    #[test]
    fn has_prefixes_and_header() {
        let ttl = to_turtle(&drums());
        assert!(ttl.contains("@prefix owl:"));
        assert!(ttl.contains("@prefix drums: <http://example.org/drums#> ."));
        assert!(ttl.contains("<http://example.org/drums>\n  a owl:Ontology ;\n  owl:versionInfo \"0.1\" ;\n.\n"));
    }

    #[test]
    fn renders_entities() {
        let ttl = to_turtle(&drums());
        assert!(ttl.contains(
            "<http://example.org/drums#Drumhead>\n  a owl:Class ;\n  rdfs:subClassOf <http://www.w3.org/2002/07/owl#Thing> ;\n"
        ));
        assert!(ttl.contains("  rdfs:comment \"Generic \\\"drumhead\\\" class\" ;\n"));
        assert!(ttl.contains("  rdfs:label \"Drum\" , \"Trommel\"@de ;\n"));
        assert!(ttl.contains("  owl:deprecated \"true\"^^xsd:boolean ;\n"));
        assert!(ttl.contains(
            "owl:equivalentClass [ a owl:Restriction ; owl:onProperty <http://example.org/drums#hasPart> ; owl:someValuesFrom <http://example.org/drums#Drumhead> ]"
        ));
    }

    #[test]
    fn collections_for_boolean_expressions() {
        let o = drums();
        let expr = ClassExpr::parse("Drum and not Drumhead").expect("expr");
        assert_eq!(
            expression_to_turtle(&o, &expr),
            "[ a owl:Class ; owl:intersectionOf ( <http://example.org/drums#Drum> \
             [ a owl:Class ; owl:complementOf <http://example.org/drums#Drumhead> ] ) ]"
        );
    }
}
