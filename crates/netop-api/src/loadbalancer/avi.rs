//! AviLoadBalancerConfig Custom Resource Definition
//!
//! Configures the resources the Avi Kubernetes Operator (AKO) needs in
//! order to connect to an Avi load balancer.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::references::SecretReference;

/// AviLoadBalancerConfigSpec defines the configuration for an Avi load balancer
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "netoperator.vmware.com",
    version = "v1alpha2",
    kind = "AviLoadBalancerConfig",
    plural = "aviloadbalancerconfigs",
    status = "AviLoadBalancerConfigStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct AviLoadBalancerConfigSpec {
    /// Endpoint for the Avi Controller REST API,
    /// SCHEME://<HOST>[:<PORT>], ex. https://127.0.0.1:443
    pub server: String,

    /// Cloud name AKO uses when querying the Avi REST API,
    /// ex. /api/cloud/?name=CLOUD_NAME
    #[serde(default = "default_cloud_name")]
    pub cloud_name: String,

    /// Enables support for WCP in AKO. An explicit null is kept as `None`
    /// and written back as null; only an absent key takes the default.
    #[serde(default = "default_advanced_l4")]
    pub advanced_l4: Option<bool>,

    /// Log level used by AKO
    #[serde(default)]
    pub log_level: AviLoadBalancerLogLevel,

    /// Type of IPAM used by the Avi Software Load Balancer
    #[serde(default)]
    pub ipam_type: AviLoadBalancerIPAMType,

    /// Secret holding the credentials for the Avi Controller.
    /// Recognized keys: certificateAuthorityData, username, password.
    pub credential_secret_ref: SecretReference,
}

/// Cloud name used when `cloudName` is omitted
pub const DEFAULT_AVI_CLOUD_NAME: &str = "Default-Cloud";

fn default_cloud_name() -> String {
    DEFAULT_AVI_CLOUD_NAME.to_string()
}

fn default_advanced_l4() -> Option<bool> {
    Some(true)
}

impl AviLoadBalancerConfigSpec {
    /// Spec with every optional field at its default
    pub fn new(server: impl Into<String>, credential_secret_ref: SecretReference) -> Self {
        Self {
            server: server.into(),
            cloud_name: default_cloud_name(),
            advanced_l4: default_advanced_l4(),
            log_level: AviLoadBalancerLogLevel::default(),
            ipam_type: AviLoadBalancerIPAMType::default(),
            credential_secret_ref,
        }
    }
}

/// Log level for the Avi Kubernetes Operator: INFO, DEBUG, WARN or ERROR
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
#[allow(missing_docs, reason = "variants are the wire values listed above")]
pub enum AviLoadBalancerLogLevel {
    Info,
    Debug,
    #[default]
    Warn,
    Error,
}

/// Where IPAM is provided: by the Avi Controller or by the Supervisor cluster
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs, reason = "variants are the wire values listed above")]
pub enum AviLoadBalancerIPAMType {
    #[default]
    Controller,
    Supervisor,
}

/// AviLoadBalancerConfig is purely a configuration resource, so its status
/// carries nothing.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[allow(clippy::empty_structs_with_brackets, reason = "a unit struct would serialize as null")]
pub struct AviLoadBalancerConfigStatus {}
