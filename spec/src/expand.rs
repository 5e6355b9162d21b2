//! Entity-declaration expander.

use crate::lookup::lookup;
use crate::model::{Annotations, AttributeKey, AttributeMap, AttributeValue, EntityDecl, Literal};

static ABSENT: AttributeValue = AttributeValue::Absent;
static NO_VALUES: AttributeValue = AttributeValue::Values(Vec::new());

/// Builds a declaration named `name` whose single parent is `parent`.
///
/// Each of the nine annotation fields is looked up in `attributes`; keys the
/// caller left out take their fixed default (no equivalence expression, an
/// empty sequence otherwise). Names are not validated here and the parent is
/// not resolved: that happens when the declaration is registered with an
/// [`Ontology`](crate::Ontology).
///
/// ```
/// use entity_decl::{expand_entity, AttributeMap, Literal};
///
/// let attrs = AttributeMap::new()
///     .comment("Generic drumhead class")
///     .version_info("0.1");
/// let decl = expand_entity("Drumhead", "Thing", &attrs);
/// assert_eq!(decl.parent, "Thing");
/// assert_eq!(decl.annotations.version_info, vec![Literal::from("0.1")]);
/// assert!(decl.annotations.label.is_empty());
/// ```
#[must_use]
pub fn expand_entity(
    name: impl Into<String>,
    parent: impl Into<String>,
    attributes: &AttributeMap,
) -> EntityDecl {
    let entries = attributes.entries();
    let values = |key: AttributeKey| -> Vec<Literal> {
        lookup(entries, &key, &NO_VALUES).values().to_vec()
    };

    EntityDecl {
        name: name.into(),
        parent: parent.into(),
        annotations: Annotations {
            equivalent_to: lookup(entries, &AttributeKey::EquivalentTo, &ABSENT)
                .expression()
                .cloned(),
            label: values(AttributeKey::Label),
            comment: values(AttributeKey::Comment),
            see_also: values(AttributeKey::SeeAlso),
            version_info: values(AttributeKey::VersionInfo),
            deprecated: values(AttributeKey::Deprecated),
            incompatible_with: values(AttributeKey::IncompatibleWith),
            backward_compatible_with: values(AttributeKey::BackwardCompatibleWith),
            is_defined_by: values(AttributeKey::IsDefinedBy),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expr::ClassExpr;

    #[test]
    fn empty_mapping_yields_defaults() {
        let decl = expand_entity("Drum", "Thing", &AttributeMap::new());
        assert_eq!(decl.name, "Drum");
        assert_eq!(decl.parent, "Thing");
        assert_eq!(decl.annotations, Annotations::default());
    }

    #[test]
    fn drumhead_example() {
        let attrs = AttributeMap::new()
            .comment("Generic drumhead class")
            .version_info("0.1");
        let decl = expand_entity("Drumhead", "Thing", &attrs);
        assert_eq!(
            decl.annotations,
            Annotations {
                comment: vec![Literal::from("Generic drumhead class")],
                version_info: vec![Literal::from("0.1")],
                ..Annotations::default()
            }
        );
    }

    #[test]
    fn explicit_absent_matches_default() {
        let mut attrs = AttributeMap::new();
        attrs
            .insert(AttributeKey::Label, AttributeValue::Absent)
            .expect("absent is always accepted");
        attrs
            .insert(AttributeKey::EquivalentTo, AttributeValue::Absent)
            .expect("absent is always accepted");
        let decl = expand_entity("Snare", "Drum", &attrs);
        assert_eq!(decl.annotations, Annotations::default());
    }

    #[test]
    fn every_field_is_bound() {
        let attrs = AttributeMap::new()
            .equivalent_to(ClassExpr::some("hasPart", ClassExpr::named("Drumhead")))
            .label("Drum")
            .comment("A drum")
            .with(AttributeKey::SeeAlso, [Literal::iri("http://example.org/drum")])
            .version_info("0.2")
            .deprecated()
            .with(AttributeKey::IncompatibleWith, ["0.1"])
            .with(AttributeKey::BackwardCompatibleWith, ["0.1.5"])
            .with(AttributeKey::IsDefinedBy, [Literal::iri("http://example.org/")]);
        let a = expand_entity("Drum", "Instrument", &attrs).annotations;
        assert!(a.equivalent_to.is_some());
        for key in AttributeKey::ANNOTATIONS {
            assert_eq!(a.values(key).len(), 1, "{key}");
        }
    }

    #[test]
    fn expansion_is_repeatable() {
        let attrs = AttributeMap::new().label("Cymbal");
        assert_eq!(
            expand_entity("Cymbal", "Thing", &attrs),
            expand_entity("Cymbal", "Thing", &attrs)
        );
    }
}
