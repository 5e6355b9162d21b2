//! JSON-LD 1.1 serializer.
//!
//! Produces a single JSON-LD document with a `@context` and an `@graph`
//! holding the ontology header followed by one node per entity, in
//! registration order.

use serde_json::{json, Map, Value};

use crate::expr::ClassExpr;
use crate::model::{EntityDecl, Literal};
use crate::registry::Ontology;

/// Serializes an ontology to a JSON-LD `Value`.
///
/// The returned value can be pretty-printed with [`serde_json::to_string_pretty`].
#[must_use]
pub fn to_json_ld(ontology: &Ontology) -> Value {
    json!({
        "@context": build_context(ontology),
        "@graph": build_graph(ontology)
    })
}

fn build_context(ontology: &Ontology) -> Value {
    let mut ctx = Map::new();
    ctx.insert("owl".to_owned(), json!("http://www.w3.org/2002/07/owl#"));
    ctx.insert("rdf".to_owned(), json!("http://www.w3.org/1999/02/22-rdf-syntax-ns#"));
    ctx.insert("rdfs".to_owned(), json!("http://www.w3.org/2000/01/rdf-schema#"));
    ctx.insert("xsd".to_owned(), json!("http://www.w3.org/2001/XMLSchema#"));
    ctx.insert(ontology.prefix().to_owned(), json!(ontology.base_iri()));
    Value::Object(ctx)
}

fn build_graph(ontology: &Ontology) -> Value {
    let mut nodes: Vec<Value> = Vec::with_capacity(ontology.len() + 1);

    let mut header = json!({
        "@id": ontology.ontology_iri(),
        "@type": "owl:Ontology"
    });
    if let Some(label) = ontology.label() {
        header["rdfs:label"] = json!(label);
    }
    if let Some(version) = ontology.version() {
        header["owl:versionInfo"] = json!(version);
    }
    nodes.push(header);

    for decl in ontology.declarations() {
        nodes.push(entity_to_json(ontology, decl));
    }

    Value::Array(nodes)
}

fn entity_to_json(ontology: &Ontology, decl: &EntityDecl) -> Value {
    let mut node = json!({
        "@id": ontology.iri_of(&decl.name),
        "@type": "owl:Class",
        "rdfs:subClassOf": { "@id": ontology.iri_of(&decl.parent) }
    });
    if let Some(expr) = &decl.annotations.equivalent_to {
        node["owl:equivalentClass"] = expression_to_json(ontology, expr);
    }
    for (key, values) in decl.annotations.iter() {
        let values: Vec<Value> = values
            .iter()
            .map(|v| literal_to_json(ontology, v))
            .collect();
        node[key.curie()] = Value::Array(values);
    }
    node
}

fn literal_to_json(ontology: &Ontology, literal: &Literal) -> Value {
    match literal {
        Literal::Str(s) => json!(s),
        Literal::Lang { value, lang } => json!({ "@value": value, "@language": lang }),
        Literal::Bool(b) => json!(b),
        Literal::Int(i) => json!(i),
        Literal::Iri { iri } => json!({ "@id": ontology.resolve(iri) }),
    }
}

fn expression_to_json(ontology: &Ontology, expr: &ClassExpr) -> Value {
    match expr {
        ClassExpr::Named(name) => json!({ "@id": ontology.iri_of(name) }),
        ClassExpr::And(items) => json!({
            "@type": "owl:Class",
            "owl:intersectionOf": { "@list": list(ontology, items) }
        }),
        ClassExpr::Or(items) => json!({
            "@type": "owl:Class",
            "owl:unionOf": { "@list": list(ontology, items) }
        }),
        ClassExpr::Not(inner) => json!({
            "@type": "owl:Class",
            "owl:complementOf": expression_to_json(ontology, inner)
        }),
        ClassExpr::SomeValuesFrom { property, filler } => json!({
            "@type": "owl:Restriction",
            "owl:onProperty": { "@id": ontology.local_iri(property) },
            "owl:someValuesFrom": expression_to_json(ontology, filler)
        }),
        ClassExpr::AllValuesFrom { property, filler } => json!({
            "@type": "owl:Restriction",
            "owl:onProperty": { "@id": ontology.local_iri(property) },
            "owl:allValuesFrom": expression_to_json(ontology, filler)
        }),
    }
}

fn list(ontology: &Ontology, items: &[ClassExpr]) -> Vec<Value> {
    items
        .iter()
        .map(|item| expression_to_json(ontology, item))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::AttributeMap;

    fn drums() -> Ontology {
        let mut o = Ontology::new("http://example.org/drums#")
            .expect("base")
            .with_prefix("drums")
            .expect("prefix");
        o.define(
            "Drumhead",
            "Thing",
            &AttributeMap::new()
                .comment("Generic drumhead class")
                .version_info("0.1"),
        )
        .expect("drumhead");
        o.define(
            "Snare",
            "Drumhead",
            &AttributeMap::new()
                .label(Literal::lang("Snare", "en"))
                .equivalent_to(ClassExpr::parse("Drumhead and not Thing").expect("expr")),
        )
        .expect("snare");
        o
    }

    #[test]
    fn produces_context_and_graph() {
        let json = to_json_ld(&drums());
        assert!(json["@context"].is_object());
        assert_eq!(json["@context"]["drums"], "http://example.org/drums#");
        assert!(json["@graph"].is_array());
    }

    #[test]
    fn graph_has_header_and_one_node_per_entity() {
        let json = to_json_ld(&drums());
        let graph = json["@graph"].as_array().expect("@graph must be array");
        assert_eq!(graph.len(), 3);
        assert_eq!(graph[0]["@type"], "owl:Ontology");
        for (i, node) in graph.iter().enumerate() {
            assert!(!node["@id"].is_null(), "Node at index {i} is missing @id");
        }
    }

    #[test]
    fn drumhead_fields() {
        let json = to_json_ld(&drums());
        let drumhead = &json["@graph"][1];
        assert_eq!(drumhead["@id"], "http://example.org/drums#Drumhead");
        assert_eq!(
            drumhead["rdfs:subClassOf"]["@id"],
            "http://www.w3.org/2002/07/owl#Thing"
        );
        assert_eq!(drumhead["rdfs:comment"], json!(["Generic drumhead class"]));
        assert_eq!(drumhead["owl:versionInfo"], json!(["0.1"]));
        assert!(drumhead.get("rdfs:label").is_none());
        assert!(drumhead.get("owl:equivalentClass").is_none());
    }

    #[test]
    fn expressions_and_language_strings() {
        let json = to_json_ld(&drums());
        let snare = &json["@graph"][2];
        assert_eq!(
            snare["rdfs:label"],
            json!([{ "@value": "Snare", "@language": "en" }])
        );
        let eq = &snare["owl:equivalentClass"];
        assert_eq!(eq["@type"], "owl:Class");
        assert_eq!(
            eq["owl:intersectionOf"]["@list"][1]["owl:complementOf"]["@id"],
            "http://www.w3.org/2002/07/owl#Thing"
        );
    }
}
