//! IPPool CRD
//!
//! A pool of IP addresses owned and managed by the IPPool controller.
//! Provider specific networks associate themselves with an IPPool to use
//! the operator's IPAM implementation.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::conditions::ConditionsExt;

/// Condition added when no more addresses are free in the pool
pub const IP_POOL_FULL: &str = "full";

/// Condition added once the pool has been realized
pub const IP_POOL_READY: &str = "ready";

/// Condition added when realizing the pool failed
pub const IP_POOL_FAILURE: &str = "failure";

/// IPPoolSpec defines the range of addresses in an IPPool
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "netoperator.vmware.com",
    version = "v1alpha2",
    kind = "IPPool",
    plural = "ippools",
    status = "IPPoolStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct IPPoolSpec {
    /// First IP address of the pool
    pub starting_address: String,

    /// Number of addresses in the pool, counted from `starting_address`
    pub address_count: i64,
}

/// IPPoolStatus defines the observed state of an IPPool
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IPPoolStatus {
    /// Observed conditions: full, ready, failure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(schema_with = "crate::conditions::conditions")]
    pub conditions: Vec<Condition>,
}

impl IPPoolStatus {
    /// True when no addresses are free
    pub fn is_full(&self) -> bool {
        self.conditions.is_true(IP_POOL_FULL)
    }

    /// True once the pool has been realized
    pub fn is_ready(&self) -> bool {
        self.conditions.is_true(IP_POOL_READY)
    }

    /// True when realizing the pool failed
    pub fn has_failed(&self) -> bool {
        self.conditions.is_true(IP_POOL_FAILURE)
    }
}
