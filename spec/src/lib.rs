//! Terse OWL class declarations.
//!
//! The `entity-decl` crate turns a name, a parent name, and an optional
//! [`AttributeMap`] into an [`EntityDecl`]: a class with exactly one parent
//! and nine annotation fields, each defaulted when the caller leaves it out.
//! Declarations are registered with an [`Ontology`], which resolves parents,
//! and can be serialized to JSON-LD, Turtle, and N-Triples.
//!
//! # Entry Point
//!
//! ```
//! use entity_decl::{AttributeMap, Ontology};
//!
//! let mut ontology = Ontology::new("http://example.org/drums#")?;
//! ontology.define(
//!     "Drumhead",
//!     "Thing",
//!     &AttributeMap::new()
//!         .comment("Generic drumhead class")
//!         .version_info("0.1"),
//! )?;
//! assert_eq!(ontology.len(), 1);
//! # Ok::<(), entity_decl::RegistryError>(())
//! ```
//!
//! # Serialization
//!
//! ```
//! let ontology = entity_decl::Ontology::drums().expect("bundled manifest");
//! let json_ld = entity_decl::serializer::jsonld::to_json_ld(ontology);
//! let turtle  = entity_decl::serializer::turtle::to_turtle(ontology);
//! assert!(json_ld["@graph"].is_array());
//! assert!(turtle.contains("owl:Class"));
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod error;
pub mod expand;
pub mod expr;
pub mod lookup;
pub mod manifest;
pub mod model;
pub mod registry;
#[cfg(feature = "serializers")]
pub mod serializer;

pub use error::{DeclError, RegistryError};
pub use expand::expand_entity;
pub use expr::ClassExpr;
pub use lookup::lookup;
pub use manifest::Manifest;
pub use model::{Annotations, AttributeKey, AttributeMap, AttributeValue, EntityDecl, Literal};
pub use registry::Ontology;

/// Source of the bundled drum-kit manifest.
pub const DRUMS_MANIFEST: &str = include_str!("../../manifests/drums.toml");

impl Ontology {
    /// Returns the bundled drum-kit ontology, built once from
    /// [`DRUMS_MANIFEST`].
    ///
    /// # Errors
    ///
    /// Returns the error raised while building the manifest.
    pub fn drums() -> Result<&'static Ontology, &'static DeclError> {
        static DRUMS: std::sync::OnceLock<Result<Ontology, DeclError>> =
            std::sync::OnceLock::new();
        DRUMS
            .get_or_init(|| {
                Manifest::from_toml_str(DRUMS_MANIFEST).and_then(Manifest::into_ontology)
            })
            .as_ref()
    }
}
