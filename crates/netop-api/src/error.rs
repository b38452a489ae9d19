//! Type registry errors

use thiserror::Error;

/// Errors raised while building the scheme or decoding documents with it.
#[derive(Debug, Error)]
pub enum SchemeError {
    /// Document has no apiVersion or kind
    #[error("Document is missing apiVersion or kind")]
    MissingTypeMeta,

    /// apiVersion is not of the form "<group>/<version>" or "<version>"
    #[error("Invalid apiVersion: {0}")]
    InvalidApiVersion(String),

    /// No type registered for the group/version/kind
    #[error("Unknown kind: {0}")]
    UnknownKind(String),

    /// Kind registered twice
    #[error("Kind already registered: {0}")]
    AlreadyRegistered(String),

    /// CRD declares a scope other than Namespaced or Cluster
    #[error("Unsupported scope {scope} for kind {kind}")]
    UnsupportedScope {
        /// Kind whose CRD was inspected
        kind: String,
        /// Scope found in the CRD
        scope: String,
    },

    /// Document did not match the registered type
    #[error("Serialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// Input was not valid YAML
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),
}

/// Result type for scheme operations
pub type Result<T, E = SchemeError> = std::result::Result<T, E>;
