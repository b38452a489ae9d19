//! Kubernetes object references used by network operator CRDs
//!
//! Mirrors the core/v1 reference shapes (`SecretReference`,
//! `LocalObjectReference`, `TypedLocalObjectReference`) so the serialized
//! keys match what the rest of the cluster expects.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Reference to a Secret, possibly in another namespace.
///
/// Used by the load balancer configs to point at the credentials for the
/// Avi Controller or the HAProxy dataplane API.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct SecretReference {
    /// Name of the Secret
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,

    /// Namespace in which the Secret lives
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub namespace: Option<String>,
}

impl SecretReference {
    /// Create a reference to the Secret `name` in `namespace`
    pub fn new(name: impl Into<String>, namespace: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            namespace: Some(namespace.into()),
        }
    }
}

/// Reference to an object by name only.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct LocalObjectReference {
    /// Name of the referent
    #[serde(default)]
    pub name: String,
}

impl LocalObjectReference {
    /// Create a reference to `name`
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// Reference to an object of a known kind in the same namespace.
///
/// This follows the Kubernetes `TypedLocalObjectReference` pattern:
/// - `apiGroup`: API group of the referent; omitted for the core group
/// - `kind`: kind of the referent (e.g., "VirtualMachine")
/// - `name`: name of the referent
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct TypedLocalObjectReference {
    /// API group of the referenced resource
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub api_group: Option<String>,

    /// Kind of the referenced resource
    pub kind: String,

    /// Name of the referenced resource
    pub name: String,
}

impl TypedLocalObjectReference {
    /// Create a reference to a core group object
    pub fn new(kind: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            api_group: None,
            kind: kind.into(),
            name: name.into(),
        }
    }

    /// Create a reference to an object in `api_group`
    pub fn with_api_group(
        api_group: impl Into<String>,
        kind: impl Into<String>,
        name: impl Into<String>,
    ) -> Self {
        Self {
            api_group: Some(api_group.into()),
            kind: kind.into(),
            name: name.into(),
        }
    }
}
