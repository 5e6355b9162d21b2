//! The declaration registry.
//!
//! An [`Ontology`] accepts [`EntityDecl`]s in program order and enforces the
//! resolution rules the expander leaves open: identifiers must be valid,
//! names unique, and every parent (and every class an equivalence expression
//! mentions) must already be declared or be the root `Thing`.

use std::collections::HashMap;

use tracing::debug;

use crate::error::RegistryError;
use crate::expand::expand_entity;
use crate::expr::is_keyword;
use crate::model::iris::{OWL_THING, ROOT};
use crate::model::{AttributeMap, EntityDecl};

/// An ontology under construction.
#[derive(Debug, Clone)]
pub struct Ontology {
    base_iri: String,
    prefix: String,
    label: Option<String>,
    version: Option<String>,
    declarations: Vec<EntityDecl>,
    index: HashMap<String, usize>,
}

impl Ontology {
    /// Creates an empty ontology whose entities live under `base_iri`.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidBaseIri`] unless the base is an
    /// absolute IRI ending with `/` or `#`.
    pub fn new(base_iri: impl Into<String>) -> Result<Self, RegistryError> {
        let base_iri = base_iri.into();
        if !(base_iri.ends_with('/') || base_iri.ends_with('#'))
            || !base_iri.contains(':')
            || !is_iri_reference(&base_iri)
        {
            return Err(RegistryError::InvalidBaseIri(base_iri));
        }
        Ok(Self {
            base_iri,
            prefix: "ont".to_owned(),
            label: None,
            version: None,
            declarations: Vec::new(),
            index: HashMap::new(),
        })
    }

    /// Sets the prefix used for this ontology in Turtle and JSON-LD output.
    ///
    /// # Errors
    ///
    /// Returns [`RegistryError::InvalidPrefix`] unless `prefix` is a Turtle
    /// prefix name other than `owl`, `rdf`, `rdfs`, and `xsd`.
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Result<Self, RegistryError> {
        let prefix = prefix.into();
        if !is_prefix(&prefix) || STANDARD_PREFIXES.contains(&prefix.as_str()) {
            return Err(RegistryError::InvalidPrefix(prefix));
        }
        self.prefix = prefix;
        Ok(self)
    }

    /// Sets the ontology-level `rdfs:label`.
    #[must_use]
    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    /// Sets the ontology-level `owl:versionInfo`.
    #[must_use]
    pub fn with_version(mut self, version: impl Into<String>) -> Self {
        self.version = Some(version.into());
        self
    }

    /// Base IRI (ends with `/` or `#`).
    #[must_use]
    pub fn base_iri(&self) -> &str {
        &self.base_iri
    }

    /// Serialization prefix.
    #[must_use]
    pub fn prefix(&self) -> &str {
        &self.prefix
    }

    /// Ontology label, if set.
    #[must_use]
    pub fn label(&self) -> Option<&str> {
        self.label.as_deref()
    }

    /// Ontology version, if set.
    #[must_use]
    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    /// Registers a declaration.
    ///
    /// # Errors
    ///
    /// Returns a [`RegistryError`] if a name is not a valid identifier, the
    /// name is the reserved root, the name is already taken, the parent is
    /// unknown, the equivalence expression is malformed or references an
    /// unknown class, or an annotation literal cannot be written as RDF.
    pub fn declare(&mut self, decl: EntityDecl) -> Result<&EntityDecl, RegistryError> {
        for name in [decl.name.as_str(), decl.parent.as_str()] {
            if !is_identifier(name) {
                return Err(RegistryError::InvalidIdentifier(name.to_owned()));
            }
        }
        if decl.name == ROOT {
            return Err(RegistryError::Reserved(decl.name));
        }
        if self.index.contains_key(&decl.name) {
            return Err(RegistryError::Duplicate(decl.name));
        }
        if !self.is_known(&decl.parent) {
            return Err(RegistryError::UnknownParent {
                entity: decl.name,
                parent: decl.parent,
            });
        }
        if let Some(expr) = &decl.annotations.equivalent_to {
            if let Err(reason) = expr.validate() {
                return Err(RegistryError::MalformedExpression {
                    entity: decl.name.clone(),
                    reason: reason.to_owned(),
                });
            }
            if let Some(unknown) = expr.class_names().into_iter().find(|c| !self.is_known(c)) {
                return Err(RegistryError::UnknownReference {
                    entity: decl.name.clone(),
                    reference: unknown.to_owned(),
                });
            }
        }
        for (key, values) in decl.annotations.iter() {
            for value in values {
                if let Err(reason) = value.validate() {
                    return Err(RegistryError::InvalidLiteral {
                        entity: decl.name.clone(),
                        key: key.as_str(),
                        reason,
                    });
                }
            }
        }

        debug!(entity = %decl.name, parent = %decl.parent, "declared entity");
        let slot = self.declarations.len();
        self.index.insert(decl.name.clone(), slot);
        self.declarations.push(decl);
        Ok(&self.declarations[slot])
    }

    /// Expands and registers in one step.
    ///
    /// # Errors
    ///
    /// See [`Ontology::declare`].
    pub fn define(
        &mut self,
        name: &str,
        parent: &str,
        attributes: &AttributeMap,
    ) -> Result<&EntityDecl, RegistryError> {
        self.declare(expand_entity(name, parent, attributes))
    }

    /// Looks up a declaration by local name.
    #[must_use]
    pub fn find(&self, name: &str) -> Option<&EntityDecl> {
        self.index.get(name).map(|&i| &self.declarations[i])
    }

    /// Returns `true` if `name` is declared or is the root.
    #[must_use]
    pub fn is_known(&self, name: &str) -> bool {
        name == ROOT || self.index.contains_key(name)
    }

    /// All declarations in registration order.
    #[must_use]
    pub fn declarations(&self) -> &[EntityDecl] {
        &self.declarations
    }

    /// Number of declarations.
    #[must_use]
    pub fn len(&self) -> usize {
        self.declarations.len()
    }

    /// Returns `true` if nothing has been declared.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.declarations.is_empty()
    }

    /// Parent chain of `name`, nearest first, ending at the root.
    ///
    /// Returns an empty vector for unknown names and for the root itself.
    #[must_use]
    pub fn ancestors(&self, name: &str) -> Vec<&str> {
        let mut chain = Vec::new();
        let mut current = self.find(name);
        while let Some(decl) = current {
            chain.push(decl.parent.as_str());
            current = self.find(&decl.parent);
        }
        chain
    }

    /// IRI of the ontology itself: the base without a trailing `#`.
    #[must_use]
    pub fn ontology_iri(&self) -> &str {
        self.base_iri.strip_suffix('#').unwrap_or(&self.base_iri)
    }

    /// Full IRI of a class name; the root maps to `owl:Thing`.
    #[must_use]
    pub fn iri_of(&self, name: &str) -> String {
        if name == ROOT {
            OWL_THING.to_owned()
        } else {
            self.local_iri(name)
        }
    }

    /// `name` appended to the base, with no root mapping. Used for
    /// property names.
    #[must_use]
    pub fn local_iri(&self, name: &str) -> String {
        format!("{}{}", self.base_iri, name)
    }

    /// Resolves an IRI reference: absolute when it contains `:`, otherwise
    /// a local name under the base.
    #[must_use]
    pub fn resolve(&self, reference: &str) -> String {
        if reference.contains(':') {
            reference.to_owned()
        } else {
            self.iri_of(reference)
        }
    }
}

/// Prefixes every serialized document binds to the W3C namespaces.
const STANDARD_PREFIXES: [&str; 4] = ["owl", "rdf", "rdfs", "xsd"];

/// ASCII letter or `_` first, then alphanumerics, `_`, `-`, or `.`; never one
/// of the class-expression keywords.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.')) && !is_keyword(name)
}

/// A Turtle `PN_PREFIX` (ASCII subset): a letter first, then
/// alphanumerics, `_`, `-`, or `.`, not ending with `.`.
#[must_use]
pub fn is_prefix(prefix: &str) -> bool {
    let mut chars = prefix.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {}
        _ => return false,
    }
    !prefix.ends_with('.')
        && chars.all(|c| c.is_ascii_alphanumeric() || matches!(c, '_' | '-' | '.'))
}

/// A non-empty IRI reference with none of the characters Turtle and
/// N-Triples forbid inside `<...>`: controls, space, `<>"{}|^` and backtick,
/// or `\`.
#[must_use]
pub fn is_iri_reference(iri: &str) -> bool {
    !iri.is_empty()
        && !iri.chars().any(|c| {
            c.is_whitespace()
                || c.is_control()
                || matches!(c, '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\')
        })
}

/// A language tag of the shape `[A-Za-z]+(-[A-Za-z0-9]+)*`.
#[must_use]
pub fn is_language_tag(tag: &str) -> bool {
    let mut subtags = tag.split('-');
    let primary_ok = subtags
        .next()
        .is_some_and(|p| !p.is_empty() && p.chars().all(|c| c.is_ascii_alphabetic()));
    primary_ok && subtags.all(|s| !s.is_empty() && s.chars().all(|c| c.is_ascii_alphanumeric()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ClassExpr;
    use crate::model::{AttributeKey, Literal};

    fn drums() -> Ontology {
        Ontology::new("http://example.org/drums#").expect("valid base")
    }

    #[test]
    fn rejects_bad_base() {
        assert!(Ontology::new("http://example.org/drums").is_err());
        assert!(Ontology::new("drums#").is_err());
    }

    #[test]
    fn root_parent_resolves() {
        let mut o = drums();
        o.define("Drumhead", "Thing", &AttributeMap::new())
            .expect("root parent");
        assert_eq!(o.len(), 1);
        assert_eq!(o.iri_of("Thing"), OWL_THING);
        assert_eq!(o.iri_of("Drumhead"), "http://example.org/drums#Drumhead");
    }

    #[test]
    fn unknown_parent_is_rejected() {
        let mut o = drums();
        assert_eq!(
            o.define("Snare", "Drum", &AttributeMap::new()).err(),
            Some(RegistryError::UnknownParent {
                entity: "Snare".to_owned(),
                parent: "Drum".to_owned(),
            })
        );
        assert!(o.is_empty());
    }

    #[test]
    fn duplicates_and_reserved_names_are_rejected() {
        let mut o = drums();
        o.define("Drum", "Thing", &AttributeMap::new()).expect("first");
        assert_eq!(
            o.define("Drum", "Thing", &AttributeMap::new()).err(),
            Some(RegistryError::Duplicate("Drum".to_owned()))
        );
        assert_eq!(
            o.define("Thing", "Thing", &AttributeMap::new()).err(),
            Some(RegistryError::Reserved("Thing".to_owned()))
        );
    }

    #[test]
    fn identifiers_are_checked() {
        let mut o = drums();
        assert!(matches!(
            o.define("9lives", "Thing", &AttributeMap::new()),
            Err(RegistryError::InvalidIdentifier(_))
        ));
        assert!(matches!(
            o.define("Drum", "has space", &AttributeMap::new()),
            Err(RegistryError::InvalidIdentifier(_))
        ));
        assert!(is_identifier("_Floor-Tom.v2"));
    }

    #[test]
    fn expression_keywords_are_not_identifiers() {
        let mut o = drums();
        for keyword in ["and", "or", "not", "some", "only"] {
            assert_eq!(
                o.define(keyword, "Thing", &AttributeMap::new()).err(),
                Some(RegistryError::InvalidIdentifier(keyword.to_owned()))
            );
        }
        assert!(is_identifier("android"));
        assert!(o.is_empty());
    }

    #[test]
    fn hand_built_expressions_must_have_a_text_form() {
        let mut o = drums();
        o.define("Drumhead", "Thing", &AttributeMap::new())
            .expect("drumhead");
        let single = AttributeMap::new()
            .equivalent_to(ClassExpr::And(vec![ClassExpr::named("Drumhead")]));
        assert!(matches!(
            o.define("Drum", "Thing", &single),
            Err(RegistryError::MalformedExpression { entity, .. }) if entity == "Drum"
        ));
        let bad_property = AttributeMap::new()
            .equivalent_to(ClassExpr::some("has part", ClassExpr::named("Drumhead")));
        assert!(matches!(
            o.define("Drum", "Thing", &bad_property),
            Err(RegistryError::MalformedExpression { .. })
        ));
        assert_eq!(o.len(), 1);
    }

    #[test]
    fn builder_literals_are_checked_on_declare() {
        let mut o = drums();
        let attrs = AttributeMap::new().with(AttributeKey::SeeAlso, [Literal::iri("has space")]);
        assert!(matches!(
            o.define("Drum", "Thing", &attrs),
            Err(RegistryError::InvalidLiteral { key: "see_also", .. })
        ));
        let attrs = AttributeMap::new().label(Literal::lang("Trommel", "de_DE"));
        assert!(matches!(
            o.define("Drum", "Thing", &attrs),
            Err(RegistryError::InvalidLiteral { key: "label", .. })
        ));
        assert!(o.is_empty());
    }

    #[test]
    fn term_checks() {
        assert!(is_language_tag("en"));
        assert!(is_language_tag("de-CH-1996"));
        assert!(!is_language_tag("en US"));
        assert!(!is_language_tag("en-"));
        assert!(!is_language_tag("1en"));
        assert!(is_iri_reference("http://example.org/a#b"));
        assert!(!is_iri_reference(""));
        assert!(!is_iri_reference("a{b}"));
        assert!(!is_iri_reference("a\\b"));
        assert!(is_prefix("drums-v2"));
        assert!(!is_prefix(""));
        assert!(!is_prefix("_x"));
    }

    #[test]
    fn prefix_must_be_usable() {
        assert!(drums().with_prefix("drums").is_ok());
        assert_eq!(
            drums().with_prefix("rdfs").err(),
            Some(RegistryError::InvalidPrefix("rdfs".to_owned()))
        );
        assert!(drums().with_prefix("a b").is_err());
        assert!(Ontology::new("http://example.org/my drums#").is_err());
    }

    #[test]
    fn equivalence_references_must_resolve() {
        let mut o = drums();
        let attrs = AttributeMap::new()
            .equivalent_to(ClassExpr::some("hasPart", ClassExpr::named("Drumhead")));
        assert!(matches!(
            o.define("Drum", "Thing", &attrs),
            Err(RegistryError::UnknownReference { reference, .. }) if reference == "Drumhead"
        ));
        o.define("Drumhead", "Thing", &AttributeMap::new())
            .expect("drumhead");
        o.define("Drum", "Thing", &attrs).expect("now resolvable");
    }

    #[test]
    fn ancestors_walk_to_root() {
        let mut o = drums();
        o.define("Instrument", "Thing", &AttributeMap::new()).expect("a");
        o.define("Drum", "Instrument", &AttributeMap::new()).expect("b");
        o.define("Snare", "Drum", &AttributeMap::new()).expect("c");
        assert_eq!(o.ancestors("Snare"), vec!["Drum", "Instrument", "Thing"]);
        assert!(o.ancestors("Thing").is_empty());
        assert!(o.ancestors("Nope").is_empty());
    }

    #[test]
    fn resolves_relative_references() {
        let o = drums();
        assert_eq!(o.resolve("Drum"), "http://example.org/drums#Drum");
        assert_eq!(o.resolve("http://x.org/y"), "http://x.org/y");
    }
}
