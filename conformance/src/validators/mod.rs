//! Conformance validators, grouped by the artifact family they inspect.

pub mod ontology;
