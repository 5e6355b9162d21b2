//! Ontology validators (OWL structure, inventory, JSON-LD, RDF).

pub mod inventory;
pub mod jsonld;
pub mod owl;
pub mod rdf;
