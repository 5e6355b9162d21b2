//! Core declaration model types.
//!
//! An [`AttributeMap`] is what a caller supplies; an [`EntityDecl`] is what
//! the expander produces. [`Annotations`] is the explicit nine-field record
//! that sits between them.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::DeclError;
use crate::expr::ClassExpr;
use crate::registry::{is_iri_reference, is_language_tag};

/// A single annotation value.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Literal {
    /// `xsd:boolean`, typically the value of `owl:deprecated`.
    Bool(bool),
    /// `xsd:integer`.
    Int(i64),
    /// A plain string.
    Str(String),
    /// A language-tagged string.
    Lang {
        /// Lexical form.
        value: String,
        /// BCP 47 language tag.
        lang: String,
    },
    /// A reference to another resource, absolute or relative to the
    /// ontology base.
    Iri {
        /// The IRI or local name.
        iri: String,
    },
}

impl Literal {
    /// Checks that the literal can be written as an RDF term.
    ///
    /// # Errors
    ///
    /// Returns a description of the problem for a malformed language tag or
    /// an IRI reference containing characters RDF forbids.
    pub fn validate(&self) -> Result<(), String> {
        match self {
            Self::Lang { lang, .. } if !is_language_tag(lang) => {
                Err(format!("`{lang}` is not a language tag"))
            }
            Self::Iri { iri } if !is_iri_reference(iri) => {
                Err(format!("`{iri}` is not a valid IRI reference"))
            }
            _ => Ok(()),
        }
    }

    /// Builds an IRI reference.
    pub fn iri(iri: impl Into<String>) -> Self {
        Self::Iri { iri: iri.into() }
    }

    /// Builds a language-tagged string.
    pub fn lang(value: impl Into<String>, lang: impl Into<String>) -> Self {
        Self::Lang {
            value: value.into(),
            lang: lang.into(),
        }
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Self::Str(s.to_owned())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Self::Str(s)
    }
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Self::Bool(b)
    }
}

impl From<i64> for Literal {
    fn from(i: i64) -> Self {
        Self::Int(i)
    }
}

/// The nine recognized attribute keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum AttributeKey {
    /// `owl:equivalentClass`; holds a class expression.
    EquivalentTo,
    /// `rdfs:label`.
    Label,
    /// `rdfs:comment`.
    Comment,
    /// `rdfs:seeAlso`.
    SeeAlso,
    /// `owl:versionInfo`.
    VersionInfo,
    /// `owl:deprecated`.
    Deprecated,
    /// `owl:incompatibleWith`.
    IncompatibleWith,
    /// `owl:backwardCompatibleWith`.
    BackwardCompatibleWith,
    /// `rdfs:isDefinedBy`.
    IsDefinedBy,
}

impl AttributeKey {
    /// All keys, in declaration order.
    pub const ALL: [AttributeKey; 9] = [
        AttributeKey::EquivalentTo,
        AttributeKey::Label,
        AttributeKey::Comment,
        AttributeKey::SeeAlso,
        AttributeKey::VersionInfo,
        AttributeKey::Deprecated,
        AttributeKey::IncompatibleWith,
        AttributeKey::BackwardCompatibleWith,
        AttributeKey::IsDefinedBy,
    ];

    /// The eight keys whose values are literal sequences.
    pub const ANNOTATIONS: [AttributeKey; 8] = [
        AttributeKey::Label,
        AttributeKey::Comment,
        AttributeKey::SeeAlso,
        AttributeKey::VersionInfo,
        AttributeKey::Deprecated,
        AttributeKey::IncompatibleWith,
        AttributeKey::BackwardCompatibleWith,
        AttributeKey::IsDefinedBy,
    ];

    /// Canonical manifest spelling.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::EquivalentTo => "equivalent_to",
            Self::Label => "label",
            Self::Comment => "comments",
            Self::SeeAlso => "see_also",
            Self::VersionInfo => "version_info",
            Self::Deprecated => "deprecated",
            Self::IncompatibleWith => "incompatible_with",
            Self::BackwardCompatibleWith => "backward_compatible_with",
            Self::IsDefinedBy => "is_defined_by",
        }
    }

    /// Full IRI of the OWL/RDFS property this key serializes to.
    #[must_use]
    pub fn iri(self) -> &'static str {
        match self {
            Self::EquivalentTo => iris::OWL_EQUIVALENT_CLASS,
            Self::Label => iris::RDFS_LABEL,
            Self::Comment => iris::RDFS_COMMENT,
            Self::SeeAlso => iris::RDFS_SEE_ALSO,
            Self::VersionInfo => iris::OWL_VERSION_INFO,
            Self::Deprecated => iris::OWL_DEPRECATED,
            Self::IncompatibleWith => iris::OWL_INCOMPATIBLE_WITH,
            Self::BackwardCompatibleWith => iris::OWL_BACKWARD_COMPATIBLE_WITH,
            Self::IsDefinedBy => iris::RDFS_IS_DEFINED_BY,
        }
    }

    /// Prefixed form of [`AttributeKey::iri`] (e.g. `rdfs:label`).
    #[must_use]
    pub fn curie(self) -> &'static str {
        match self {
            Self::EquivalentTo => "owl:equivalentClass",
            Self::Label => "rdfs:label",
            Self::Comment => "rdfs:comment",
            Self::SeeAlso => "rdfs:seeAlso",
            Self::VersionInfo => "owl:versionInfo",
            Self::Deprecated => "owl:deprecated",
            Self::IncompatibleWith => "owl:incompatibleWith",
            Self::BackwardCompatibleWith => "owl:backwardCompatibleWith",
            Self::IsDefinedBy => "rdfs:isDefinedBy",
        }
    }

    /// Whether this key holds a class expression rather than literals.
    #[must_use]
    pub fn is_expression(self) -> bool {
        self == Self::EquivalentTo
    }
}

impl fmt::Display for AttributeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AttributeKey {
    type Err = DeclError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = match s {
            "equivalent_to" | "equivalentTo" => Self::EquivalentTo,
            "label" => Self::Label,
            "comments" | "comment" => Self::Comment,
            "see_also" | "seeAlso" | "seealso" => Self::SeeAlso,
            "version_info" | "versionInfo" | "versioninfo" => Self::VersionInfo,
            "deprecated" => Self::Deprecated,
            "incompatible_with" | "incompatibleWith" => Self::IncompatibleWith,
            "backward_compatible_with" | "backwardCompatibleWith" => {
                Self::BackwardCompatibleWith
            }
            "is_defined_by" | "isDefinedBy" | "defined_by" => Self::IsDefinedBy,
            other => return Err(DeclError::UnknownAttribute(other.to_owned())),
        };
        Ok(key)
    }
}

/// A value stored under an [`AttributeKey`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttributeValue {
    /// Explicitly absent; equivalent to leaving the key out.
    Absent,
    /// A class expression, only valid for [`AttributeKey::EquivalentTo`].
    Expression(ClassExpr),
    /// A literal sequence, valid for every other key.
    Values(Vec<Literal>),
}

impl AttributeValue {
    /// The expression, if this value holds one.
    #[must_use]
    pub fn expression(&self) -> Option<&ClassExpr> {
        match self {
            Self::Expression(expr) => Some(expr),
            _ => None,
        }
    }

    /// The literal sequence; empty unless this value holds literals.
    #[must_use]
    pub fn values(&self) -> &[Literal] {
        match self {
            Self::Values(values) => values,
            _ => &[],
        }
    }
}

/// Caller-supplied annotation values, keyed by [`AttributeKey`].
///
/// Value shapes are checked on insertion, so every stored value matches its
/// key: an expression under `equivalent_to`, literals everywhere else.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AttributeMap {
    entries: BTreeMap<AttributeKey, AttributeValue>,
}

impl AttributeMap {
    /// The empty mapping.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Binds `value` to `key`, replacing any previous binding.
    ///
    /// # Errors
    ///
    /// Returns [`DeclError::InvalidAttribute`] when the value shape does not
    /// match the key, the expression is malformed, or a literal cannot be
    /// written as RDF.
    pub fn insert(&mut self, key: AttributeKey, value: AttributeValue) -> Result<(), DeclError> {
        let problem = match (&value, key.is_expression()) {
            (AttributeValue::Expression(_), false) => {
                Some("takes literal values, not a class expression".to_owned())
            }
            (AttributeValue::Values(_), true) => Some("takes a single class expression".to_owned()),
            (AttributeValue::Expression(expr), true) => expr.validate().err().map(str::to_owned),
            (AttributeValue::Values(values), false) => {
                values.iter().find_map(|v| v.validate().err())
            }
            (AttributeValue::Absent, _) => None,
        };
        if let Some(reason) = problem {
            return Err(DeclError::InvalidAttribute {
                key: key.as_str(),
                reason,
            });
        }
        self.entries.insert(key, value);
        Ok(())
    }

    /// Binds an attribute given by its manifest spelling.
    ///
    /// For `equivalent_to` the value must be exactly one string, parsed as a
    /// class expression.
    ///
    /// Unlike [`AttributeMap::insert`], a key that is already bound (under
    /// any of its spellings) is rejected.
    ///
    /// # Errors
    ///
    /// Returns an error for unknown or repeated keys, malformed expressions,
    /// or values of the wrong shape.
    pub fn insert_raw(&mut self, key: &str, values: Vec<Literal>) -> Result<(), DeclError> {
        let key: AttributeKey = key.parse()?;
        if self.entries.contains_key(&key) {
            return Err(DeclError::DuplicateAttribute { key: key.as_str() });
        }
        if !key.is_expression() {
            return self.insert(key, AttributeValue::Values(values));
        }
        match values.as_slice() {
            [Literal::Str(text)] => {
                let expr = ClassExpr::parse(text)?;
                self.insert(key, AttributeValue::Expression(expr))
            }
            [] => self.insert(key, AttributeValue::Absent),
            _ => Err(DeclError::InvalidAttribute {
                key: key.as_str(),
                reason: "takes a single class expression string".to_owned(),
            }),
        }
    }

    /// Sets the equivalence expression.
    #[must_use]
    pub fn equivalent_to(mut self, expr: ClassExpr) -> Self {
        self.entries
            .insert(AttributeKey::EquivalentTo, AttributeValue::Expression(expr));
        self
    }

    /// Sets the literal sequence for one of the eight annotation keys.
    ///
    /// Passing [`AttributeKey::EquivalentTo`] leaves the mapping unchanged;
    /// use [`AttributeMap::equivalent_to`] for that key.
    #[must_use]
    pub fn with<I, L>(mut self, key: AttributeKey, values: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Literal>,
    {
        if !key.is_expression() {
            let values = values.into_iter().map(Into::into).collect();
            self.entries.insert(key, AttributeValue::Values(values));
        }
        self
    }

    /// Sets `rdfs:label`.
    #[must_use]
    pub fn label<L: Into<Literal>>(self, label: L) -> Self {
        self.with(AttributeKey::Label, [label])
    }

    /// Sets `rdfs:comment`.
    #[must_use]
    pub fn comment<L: Into<Literal>>(self, comment: L) -> Self {
        self.with(AttributeKey::Comment, [comment])
    }

    /// Sets `owl:versionInfo`.
    #[must_use]
    pub fn version_info<L: Into<Literal>>(self, version: L) -> Self {
        self.with(AttributeKey::VersionInfo, [version])
    }

    /// Marks the entity `owl:deprecated true`.
    #[must_use]
    pub fn deprecated(self) -> Self {
        self.with(AttributeKey::Deprecated, [true])
    }

    /// The raw key → value entries.
    #[must_use]
    pub fn entries(&self) -> &BTreeMap<AttributeKey, AttributeValue> {
        &self.entries
    }

    /// Returns `true` if `key` has a binding.
    #[must_use]
    pub fn contains(&self, key: AttributeKey) -> bool {
        self.entries.contains_key(&key)
    }

    /// Number of bound keys.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if no key is bound.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// The nine annotation fields attached to a declaration.
///
/// `Default` yields the fixed defaults: no equivalence expression and an
/// empty sequence for every other field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Annotations {
    /// `owl:equivalentClass`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub equivalent_to: Option<ClassExpr>,
    /// `rdfs:label`.
    #[serde(default)]
    pub label: Vec<Literal>,
    /// `rdfs:comment`.
    #[serde(default)]
    pub comment: Vec<Literal>,
    /// `rdfs:seeAlso`.
    #[serde(default)]
    pub see_also: Vec<Literal>,
    /// `owl:versionInfo`.
    #[serde(default)]
    pub version_info: Vec<Literal>,
    /// `owl:deprecated`.
    #[serde(default)]
    pub deprecated: Vec<Literal>,
    /// `owl:incompatibleWith`.
    #[serde(default)]
    pub incompatible_with: Vec<Literal>,
    /// `owl:backwardCompatibleWith`.
    #[serde(default)]
    pub backward_compatible_with: Vec<Literal>,
    /// `rdfs:isDefinedBy`.
    #[serde(default)]
    pub is_defined_by: Vec<Literal>,
}

impl Annotations {
    /// The literal sequence for `key`. Always empty for
    /// [`AttributeKey::EquivalentTo`].
    #[must_use]
    pub fn values(&self, key: AttributeKey) -> &[Literal] {
        match key {
            AttributeKey::EquivalentTo => &[],
            AttributeKey::Label => &self.label,
            AttributeKey::Comment => &self.comment,
            AttributeKey::SeeAlso => &self.see_also,
            AttributeKey::VersionInfo => &self.version_info,
            AttributeKey::Deprecated => &self.deprecated,
            AttributeKey::IncompatibleWith => &self.incompatible_with,
            AttributeKey::BackwardCompatibleWith => &self.backward_compatible_with,
            AttributeKey::IsDefinedBy => &self.is_defined_by,
        }
    }

    /// Non-empty literal fields with their keys, in declaration order.
    pub fn iter(&self) -> impl Iterator<Item = (AttributeKey, &[Literal])> + '_ {
        AttributeKey::ANNOTATIONS
            .into_iter()
            .map(move |key| (key, self.values(key)))
            .filter(|(_, values)| !values.is_empty())
    }

    /// Returns `true` if the entity carries `owl:deprecated true`.
    #[must_use]
    pub fn is_deprecated(&self) -> bool {
        self.deprecated.contains(&Literal::Bool(true))
    }
}

/// A declared entity: a named class with one parent and its annotations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EntityDecl {
    /// Local name of the class (e.g. `"Drumhead"`).
    pub name: String,
    /// Local name of the single parent class (`"Thing"` for the root).
    pub parent: String,
    /// The nine annotation fields.
    pub annotations: Annotations,
}

/// Standard IRI constants used by the registry and serializers.
pub mod iris {
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Local name of the library-provided root class.
    pub const ROOT: &str = "Thing";

    /// `owl:Thing`.
    pub const OWL_THING: &str = "http://www.w3.org/2002/07/owl#Thing";
    /// `owl:Class`.
    pub const OWL_CLASS: &str = "http://www.w3.org/2002/07/owl#Class";
    /// `owl:Ontology`.
    pub const OWL_ONTOLOGY: &str = "http://www.w3.org/2002/07/owl#Ontology";
    /// `owl:Restriction`.
    pub const OWL_RESTRICTION: &str = "http://www.w3.org/2002/07/owl#Restriction";
    /// `owl:onProperty`.
    pub const OWL_ON_PROPERTY: &str = "http://www.w3.org/2002/07/owl#onProperty";
    /// `owl:someValuesFrom`.
    pub const OWL_SOME_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#someValuesFrom";
    /// `owl:allValuesFrom`.
    pub const OWL_ALL_VALUES_FROM: &str = "http://www.w3.org/2002/07/owl#allValuesFrom";
    /// `owl:intersectionOf`.
    pub const OWL_INTERSECTION_OF: &str = "http://www.w3.org/2002/07/owl#intersectionOf";
    /// `owl:unionOf`.
    pub const OWL_UNION_OF: &str = "http://www.w3.org/2002/07/owl#unionOf";
    /// `owl:complementOf`.
    pub const OWL_COMPLEMENT_OF: &str = "http://www.w3.org/2002/07/owl#complementOf";
    /// `owl:equivalentClass`.
    pub const OWL_EQUIVALENT_CLASS: &str = "http://www.w3.org/2002/07/owl#equivalentClass";
    /// `owl:versionInfo`.
    pub const OWL_VERSION_INFO: &str = "http://www.w3.org/2002/07/owl#versionInfo";
    /// `owl:deprecated`.
    pub const OWL_DEPRECATED: &str = "http://www.w3.org/2002/07/owl#deprecated";
    /// `owl:incompatibleWith`.
    pub const OWL_INCOMPATIBLE_WITH: &str = "http://www.w3.org/2002/07/owl#incompatibleWith";
    /// `owl:backwardCompatibleWith`.
    pub const OWL_BACKWARD_COMPATIBLE_WITH: &str =
        "http://www.w3.org/2002/07/owl#backwardCompatibleWith";

    /// `rdf:type`.
    pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
    /// `rdf:first`.
    pub const RDF_FIRST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#first";
    /// `rdf:rest`.
    pub const RDF_REST: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#rest";
    /// `rdf:nil`.
    pub const RDF_NIL: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#nil";
    /// `rdf:langString`.
    pub const RDF_LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";

    /// `rdfs:label`.
    pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
    /// `rdfs:seeAlso`.
    pub const RDFS_SEE_ALSO: &str = "http://www.w3.org/2000/01/rdf-schema#seeAlso";
    /// `rdfs:isDefinedBy`.
    pub const RDFS_IS_DEFINED_BY: &str = "http://www.w3.org/2000/01/rdf-schema#isDefinedBy";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";

    /// `xsd:string`.
    pub const XSD_STRING: &str = "http://www.w3.org/2001/XMLSchema#string";
    /// `xsd:integer`.
    pub const XSD_INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";
    /// `xsd:boolean`.
    pub const XSD_BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keys_parse_canonical_and_aliases() {
        for key in AttributeKey::ALL {
            assert_eq!(key.as_str().parse::<AttributeKey>().ok(), Some(key));
        }
        assert_eq!("comment".parse::<AttributeKey>().ok(), Some(AttributeKey::Comment));
        assert_eq!(
            "defined_by".parse::<AttributeKey>().ok(),
            Some(AttributeKey::IsDefinedBy)
        );
        assert!(matches!(
            "colour".parse::<AttributeKey>(),
            Err(DeclError::UnknownAttribute(k)) if k == "colour"
        ));
    }

    #[test]
    fn insert_checks_value_shape() {
        let mut map = AttributeMap::new();
        assert!(map
            .insert(
                AttributeKey::Label,
                AttributeValue::Expression(ClassExpr::named("A"))
            )
            .is_err());
        assert!(map
            .insert(AttributeKey::EquivalentTo, AttributeValue::Values(vec![]))
            .is_err());
        assert!(map.is_empty());
        assert!(map
            .insert(AttributeKey::EquivalentTo, AttributeValue::Absent)
            .is_ok());
        assert!(map.contains(AttributeKey::EquivalentTo));
    }

    #[test]
    fn insert_raw_parses_expressions() {
        let mut map = AttributeMap::new();
        map.insert_raw("equivalent_to", vec![Literal::from("Drum and hasPart some Drumhead")])
            .expect("valid expression");
        let expr = map.entries()[&AttributeKey::EquivalentTo].expression().cloned();
        assert_eq!(
            expr,
            Some(ClassExpr::And(vec![
                ClassExpr::named("Drum"),
                ClassExpr::some("hasPart", ClassExpr::named("Drumhead")),
            ]))
        );
        let mut fresh = AttributeMap::new();
        assert!(matches!(
            fresh.insert_raw("equivalent_to", vec![Literal::from("A"), Literal::from("B")]),
            Err(DeclError::InvalidAttribute { .. })
        ));
        assert!(fresh.insert_raw("equivalent_to", vec![Literal::Bool(true)]).is_err());
        assert!(fresh.is_empty());
    }

    #[test]
    fn insert_raw_rejects_a_key_bound_under_another_spelling() {
        let mut map = AttributeMap::new();
        map.insert_raw("comment", vec![Literal::from("first")])
            .expect("first binding");
        assert!(matches!(
            map.insert_raw("comments", vec![Literal::from("second")]),
            Err(DeclError::DuplicateAttribute { key: "comments" })
        ));
        assert_eq!(
            map.entries()[&AttributeKey::Comment].values(),
            &[Literal::from("first")]
        );
    }

    #[test]
    fn insert_rejects_literals_rdf_cannot_carry() {
        let mut map = AttributeMap::new();
        for (key, value) in [
            (AttributeKey::Label, Literal::lang("x", "en US")),
            (AttributeKey::Label, Literal::lang("x", "")),
            (AttributeKey::SeeAlso, Literal::iri("has space")),
            (AttributeKey::IsDefinedBy, Literal::iri("http://x.org/<a>")),
        ] {
            assert!(
                matches!(
                    map.insert(key, AttributeValue::Values(vec![value.clone()])),
                    Err(DeclError::InvalidAttribute { .. })
                ),
                "{value:?}"
            );
        }
        assert!(map.is_empty());
        map.insert(
            AttributeKey::Label,
            AttributeValue::Values(vec![Literal::lang("Trommel", "de-CH-1996")]),
        )
        .expect("valid tag");
    }

    #[test]
    fn insert_rejects_malformed_expressions() {
        let mut map = AttributeMap::new();
        assert!(map
            .insert(
                AttributeKey::EquivalentTo,
                AttributeValue::Expression(ClassExpr::And(vec![ClassExpr::named("A")]))
            )
            .is_err());
    }

    #[test]
    fn with_ignores_expression_key() {
        let map = AttributeMap::new().with(AttributeKey::EquivalentTo, ["A"]);
        assert!(map.is_empty());
    }

    #[test]
    fn literal_serde_is_untagged() {
        let values: Vec<Literal> =
            serde_json::from_str(r#"["x", true, 3, {"value": "Fell", "lang": "de"}, {"iri": "Drum"}]"#)
                .expect("literals");
        assert_eq!(
            values,
            vec![
                Literal::from("x"),
                Literal::Bool(true),
                Literal::Int(3),
                Literal::lang("Fell", "de"),
                Literal::iri("Drum"),
            ]
        );
    }

    #[test]
    fn annotations_iter_skips_empty_fields() {
        let annotations = Annotations {
            comment: vec![Literal::from("c")],
            deprecated: vec![Literal::Bool(true)],
            ..Annotations::default()
        };
        let keys: Vec<_> = annotations.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec![AttributeKey::Comment, AttributeKey::Deprecated]);
        assert!(annotations.is_deprecated());
    }
}
