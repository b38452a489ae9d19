//! Network Operator CRD Definitions
//!
//! Kubernetes Custom Resource Definitions for the `netoperator.vmware.com`
//! API group, version `v1alpha2`, plus the type registry used to decode
//! arbitrary documents of those kinds.

pub mod common;
pub mod conditions;
pub mod config;
pub mod error;
pub mod ipam;
pub mod list;
pub mod loadbalancer;
pub mod network;
pub mod network_interface;
pub mod references;
pub mod scheme;

#[cfg(test)]
mod scheme_test;

pub use common::*;
pub use conditions::*;
pub use config::*;
pub use error::SchemeError;
pub use ipam::*;
pub use list::*;
pub use loadbalancer::*;
pub use network::*;
pub use network_interface::*;
pub use references::*;
pub use scheme::*;

/// API group served by the network operator
pub const GROUP: &str = "netoperator.vmware.com";

/// API version of every resource in this crate
pub const VERSION: &str = "v1alpha2";

/// Joins a resource's namespace and name with a "/" character.
///
/// Missing namespace or name render as empty strings, so a cluster-scoped
/// object yields "/<name>".
pub fn namespaced_name<K: kube::Resource>(resource: &K) -> String {
    let meta = resource.meta();
    format!(
        "{}/{}",
        meta.namespace.as_deref().unwrap_or_default(),
        meta.name.as_deref().unwrap_or_default()
    )
}

#[allow(clippy::trivially_copy_pass_by_ref, reason = "serde skip_serializing_if passes a reference")]
pub(crate) fn is_false(value: &bool) -> bool {
    !*value
}
