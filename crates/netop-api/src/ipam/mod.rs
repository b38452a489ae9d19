//! IPAM (IP Address Management) CRDs
//!
//! Resources for managing IP addresses:
//! - IPAddress (a single requested/realized address)
//! - IPPool (a contiguous pool owned by the operator)

pub mod ip_address;
pub mod ip_pool;


pub use ip_address::*;
pub use ip_pool::*;

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ObjectMeta;

/// Annotation added to GatewayClass resources that do not participate in
/// the operator's IPAM. Only the presence of the key matters.
pub const IPAM_DISABLED_ANNOTATION: &str = "netoperator.vmware.com/ipam-disabled";

/// True when `meta` carries the IPAM disabled annotation, whatever its value
pub fn ipam_disabled(meta: &ObjectMeta) -> bool {
    meta.annotations
        .as_ref()
        .is_some_and(|a| a.contains_key(IPAM_DISABLED_ANNOTATION))
}
