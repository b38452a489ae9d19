//! LoadBalancerConfig CRD
//!
//! Selects the provider specific configuration (Avi or HAProxy) that
//! load balancers in the cluster are realized with.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::conditions::ConditionsExt;
use crate::references::LocalObjectReference;

/// Condition added once the LoadBalancerConfig has been realized
pub const LOAD_BALANCER_CONFIG_READY: &str = "Ready";

/// Condition added when realizing the LoadBalancerConfig failed
pub const LOAD_BALANCER_CONFIG_FAILURE: &str = "Failure";

/// Condition set to True when the backing IPPool is low on free addresses
pub const LOAD_BALANCER_CONFIG_IP_POOL_PRESSURE: &str = "IPPoolPressure";

/// LoadBalancerConfigSpec defines the desired state of a LoadBalancerConfig
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "netoperator.vmware.com",
    version = "v1alpha2",
    kind = "LoadBalancerConfig",
    plural = "loadbalancerconfigs",
    status = "LoadBalancerConfigStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerConfigSpec {
    /// Resource providing the configuration details for the load balancer
    pub provider_ref: LocalObjectReference,
}

/// LoadBalancerConfigStatus defines the observed state of a LoadBalancerConfig
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct LoadBalancerConfigStatus {
    /// Observed conditions: Ready, Failure, IPPoolPressure
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(schema_with = "crate::conditions::conditions")]
    pub conditions: Vec<Condition>,
}

impl LoadBalancerConfigStatus {
    /// True when the Ready condition is True
    pub fn is_ready(&self) -> bool {
        self.conditions.is_true(LOAD_BALANCER_CONFIG_READY)
    }

    /// True when the backing IPPool reports low free capacity
    pub fn has_ip_pool_pressure(&self) -> bool {
        self.conditions.is_true(LOAD_BALANCER_CONFIG_IP_POOL_PRESSURE)
    }
}
