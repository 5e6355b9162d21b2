//! Error types.
//!
//! Looking up an attribute that was never supplied is not an error; the
//! expander always falls back to the field default. Errors arise only when
//! attribute data is malformed, when a manifest cannot be read, or when the
//! registry refuses a declaration.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while building attribute mappings or loading manifests.
#[derive(Debug, Error)]
pub enum DeclError {
    /// The attribute key is not one of the nine recognized keys.
    #[error("unknown attribute key `{0}`")]
    UnknownAttribute(String),

    /// The value supplied for a key has the wrong shape.
    #[error("attribute `{key}` {reason}")]
    InvalidAttribute {
        /// Canonical key name.
        key: &'static str,
        /// What was wrong with the value.
        reason: String,
    },

    /// The same key was bound twice, possibly under two spellings.
    #[error("attribute `{key}` is given more than once")]
    DuplicateAttribute {
        /// Canonical key name.
        key: &'static str,
    },

    /// A class expression could not be parsed.
    #[error("malformed class expression `{input}` at offset {offset}: {message}")]
    Expression {
        /// The full expression text.
        input: String,
        /// Byte offset of the offending token.
        offset: usize,
        /// Description of the problem.
        message: String,
    },

    /// The registry rejected a declaration.
    #[error(transparent)]
    Registry(#[from] RegistryError),

    /// A manifest file could not be read.
    #[error("failed to read manifest {}", path.display())]
    Io {
        /// Path of the manifest.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A TOML manifest could not be parsed.
    #[error("failed to parse TOML manifest: {0}")]
    Toml(#[from] toml::de::Error),

    /// A JSON manifest could not be parsed.
    #[cfg(feature = "json")]
    #[error("failed to parse JSON manifest: {0}")]
    Json(#[from] serde_json::Error),

    /// The manifest extension is neither `.toml` nor `.json`.
    #[error("unsupported manifest format: {}", path.display())]
    UnsupportedFormat {
        /// Path of the manifest.
        path: PathBuf,
    },
}

/// Resolution failures surfaced when a declaration is registered.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// A name is not a valid identifier.
    #[error("`{0}` is not a valid entity identifier")]
    InvalidIdentifier(String),

    /// The name collides with the library-provided root class.
    #[error("`{0}` is reserved for the root class")]
    Reserved(String),

    /// An entity with this name was already registered.
    #[error("entity `{0}` is already declared")]
    Duplicate(String),

    /// The parent has not been declared.
    #[error("entity `{entity}` names unknown parent `{parent}`")]
    UnknownParent {
        /// Entity being declared.
        entity: String,
        /// Unresolved parent name.
        parent: String,
    },

    /// A class referenced from the equivalence expression is unknown.
    #[error("entity `{entity}` is equivalent to an expression naming unknown class `{reference}`")]
    UnknownReference {
        /// Entity being declared.
        entity: String,
        /// Unresolved class name.
        reference: String,
    },

    /// The equivalence expression has no faithful text form.
    #[error("entity `{entity}` has a malformed equivalence expression: {reason}")]
    MalformedExpression {
        /// Entity being declared.
        entity: String,
        /// What is wrong with the expression.
        reason: String,
    },

    /// An annotation literal cannot be written as an RDF term.
    #[error("entity `{entity}` attribute `{key}`: {reason}")]
    InvalidLiteral {
        /// Entity being declared.
        entity: String,
        /// Canonical key name.
        key: &'static str,
        /// What is wrong with the literal.
        reason: String,
    },

    /// The ontology base IRI cannot prefix local names.
    #[error("base IRI `{0}` must be an absolute IRI ending with `/` or `#`")]
    InvalidBaseIri(String),

    /// The serialization prefix is not a usable Turtle prefix name.
    #[error("`{0}` is not a usable ontology prefix")]
    InvalidPrefix(String),
}
