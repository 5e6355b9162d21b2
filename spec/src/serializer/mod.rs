//! Serializers for a registered ontology.
//!
//! Three formats are supported:
//! - **JSON-LD** ([`jsonld`]): `<stem>.json`
//! - **Turtle** ([`turtle`]): `<stem>.ttl`, for RDF tooling
//! - **N-Triples** ([`ntriples`]): `<stem>.nt`, one triple per line for diffing and bulk loads
//!
//! Turtle and N-Triples encode the same triple set; class expressions become
//! blank-node structures with `rdf:List` collections.

pub mod jsonld;
pub mod ntriples;
pub mod turtle;

use crate::registry::Ontology;

/// An output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Format {
    /// JSON-LD 1.1, pretty-printed.
    JsonLd,
    /// Turtle 1.1.
    Turtle,
    /// N-Triples.
    NTriples,
}

impl Format {
    /// Every format, in the order artifacts are written.
    pub const ALL: [Format; 3] = [Format::JsonLd, Format::Turtle, Format::NTriples];

    /// File extension, without the dot.
    #[must_use]
    pub fn extension(self) -> &'static str {
        match self {
            Self::JsonLd => "json",
            Self::Turtle => "ttl",
            Self::NTriples => "nt",
        }
    }

    /// Artifact file name for a manifest stem (e.g. `drums.ttl`).
    #[must_use]
    pub fn file_name(self, stem: &str) -> String {
        format!("{stem}.{}", self.extension())
    }

    /// Renders `ontology` in this format.
    ///
    /// # Errors
    ///
    /// Returns an error only if JSON pretty-printing fails.
    pub fn render(self, ontology: &Ontology) -> Result<String, serde_json::Error> {
        match self {
            Self::JsonLd => serde_json::to_string_pretty(&jsonld::to_json_ld(ontology)),
            Self::Turtle => Ok(turtle::to_turtle(ontology)),
            Self::NTriples => Ok(ntriples::to_ntriples(ontology)),
        }
    }
}

/// Escapes a string for use inside a double-quoted RDF literal.
pub(crate) fn escape_literal(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            other => out.push(other),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(escape_literal("a \"b\"\nc\\"), "a \\\"b\\\"\\nc\\\\");
    }

    #[test]
    fn file_names_follow_extension() {
        let names: Vec<_> = Format::ALL.iter().map(|f| f.file_name("drums")).collect();
        assert_eq!(names, vec!["drums.json", "drums.ttl", "drums.nt"]);
    }
}
