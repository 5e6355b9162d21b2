//! N-Triples serializer.
//!
//! One triple per line, absolute IRIs only. Class expressions are written
//! with generated blank-node labels (`_:e0`, `_:e1`, ...), numbered in
//! output order so the document is deterministic.

use crate::expr::ClassExpr;
use crate::model::iris::*;
use crate::model::Literal;
use crate::registry::Ontology;
use crate::serializer::escape_literal;

/// Serializes an ontology to an N-Triples string.
#[must_use]
pub fn to_ntriples(ontology: &Ontology) -> String {
    let mut w = Writer {
        out: String::with_capacity(512 * (ontology.len() + 1)),
        next_blank: 0,
    };

    // Ontology header
    let onto = iri(ontology.ontology_iri());
    w.triple(&onto, RDF_TYPE, &iri(OWL_ONTOLOGY));
    if let Some(label) = ontology.label() {
        w.triple(&onto, RDFS_LABEL, &lit(label, XSD_STRING));
    }
    if let Some(version) = ontology.version() {
        w.triple(&onto, OWL_VERSION_INFO, &lit(version, XSD_STRING));
    }

    for decl in ontology.declarations() {
        let subject = iri(&ontology.iri_of(&decl.name));
        w.triple(&subject, RDF_TYPE, &iri(OWL_CLASS));
        w.triple(&subject, RDFS_SUBCLASS_OF, &iri(&ontology.iri_of(&decl.parent)));
        if let Some(expr) = &decl.annotations.equivalent_to {
            let node = w.expression(ontology, expr);
            w.triple(&subject, OWL_EQUIVALENT_CLASS, &node);
        }
        for (key, values) in decl.annotations.iter() {
            for value in values {
                w.triple(&subject, key.iri(), &literal_to_object(ontology, value));
            }
        }
    }

    w.out
}

struct Writer {
    out: String,
    next_blank: usize,
}

impl Writer {
    fn triple(&mut self, subj: &str, pred: &str, obj: &str) {
        self.out.push_str(subj);
        self.out.push_str(" <");
        self.out.push_str(pred);
        self.out.push_str("> ");
        self.out.push_str(obj);
        self.out.push_str(" .\n");
    }

    fn blank(&mut self) -> String {
        let label = format!("_:e{}", self.next_blank);
        self.next_blank += 1;
        label
    }

    /// Writes the triples describing `expr` and returns the term that
    /// denotes it.
    fn expression(&mut self, ontology: &Ontology, expr: &ClassExpr) -> String {
        match expr {
            ClassExpr::Named(name) => iri(&ontology.iri_of(name)),
            ClassExpr::And(items) => self.boolean_class(ontology, OWL_INTERSECTION_OF, items),
            ClassExpr::Or(items) => self.boolean_class(ontology, OWL_UNION_OF, items),
            ClassExpr::Not(inner) => {
                let node = self.blank();
                self.triple(&node, RDF_TYPE, &iri(OWL_CLASS));
                let operand = self.expression(ontology, inner);
                self.triple(&node, OWL_COMPLEMENT_OF, &operand);
                node
            }
            ClassExpr::SomeValuesFrom { property, filler } => {
                self.restriction(ontology, property, OWL_SOME_VALUES_FROM, filler)
            }
            ClassExpr::AllValuesFrom { property, filler } => {
                self.restriction(ontology, property, OWL_ALL_VALUES_FROM, filler)
            }
        }
    }

    fn boolean_class(&mut self, ontology: &Ontology, pred: &str, items: &[ClassExpr]) -> String {
        let node = self.blank();
        self.triple(&node, RDF_TYPE, &iri(OWL_CLASS));
        let list = self.list(ontology, items);
        self.triple(&node, pred, &list);
        node
    }

    fn restriction(
        &mut self,
        ontology: &Ontology,
        property: &str,
        pred: &str,
        filler: &ClassExpr,
    ) -> String {
        let node = self.blank();
        self.triple(&node, RDF_TYPE, &iri(OWL_RESTRICTION));
        self.triple(&node, OWL_ON_PROPERTY, &iri(&ontology.local_iri(property)));
        let filler = self.expression(ontology, filler);
        self.triple(&node, pred, &filler);
        node
    }

    fn list(&mut self, ontology: &Ontology, items: &[ClassExpr]) -> String {
        let Some((first, rest)) = items.split_first() else {
            return iri(RDF_NIL);
        };
        let cell = self.blank();
        let head = self.expression(ontology, first);
        self.triple(&cell, RDF_FIRST, &head);
        let tail = self.list(ontology, rest);
        self.triple(&cell, RDF_REST, &tail);
        cell
    }
}

fn iri(s: &str) -> String {
    format!("<{}>", s)
}

fn lit(s: &str, datatype: &str) -> String {
    format!("\"{}\"^^<{}>", escape_literal(s), datatype)
}

fn literal_to_object(ontology: &Ontology, literal: &Literal) -> String {
    match literal {
        Literal::Str(s) => lit(s, XSD_STRING),
        Literal::Lang { value, lang } => format!("\"{}\"@{}", escape_literal(value), lang),
        Literal::Bool(b) => format!("\"{}\"^^<{}>", b, XSD_BOOLEAN),
        Literal::Int(i) => format!("\"{}\"^^<{}>", i, XSD_INTEGER),
        Literal::Iri { iri: reference } => iri(&ontology.resolve(reference)),
    }
}
