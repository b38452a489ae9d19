//! HAProxyLoadBalancerConfig Custom Resource Definition
//!
//! Describes how to reach the HAProxy Dataplane API (2.0+) sidecar so
//! services can be routed through HAProxy.

use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::references::SecretReference;

/// HAProxyLoadBalancerConfigSpec defines how to reach and authenticate to
/// the HAProxy dataplane API
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq)]
#[kube(
    group = "netoperator.vmware.com",
    version = "v1alpha2",
    kind = "HAProxyLoadBalancerConfig",
    plural = "haproxyloadbalancerconfigs",
    status = "HAProxyLoadBalancerConfigStatus",
    derive = "PartialEq"
)]
#[serde(rename_all = "camelCase")]
pub struct HAProxyLoadBalancerConfigSpec {
    /// Dataplane API endpoints, SCHEME://<HOST>[:<PORT>]/<API_VERSION>,
    /// ex. https://127.0.0.1:443/v1. Several endpoints are used for
    /// multi-node (active/passive) topologies.
    #[schemars(length(min = 1))]
    pub endpoints: Vec<String>,

    /// Value used to verify the server's peer certificate. Defaults to the
    /// host parsed from the endpoint.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub server_name: Option<String>,

    /// Secret holding the dataplane API credentials.
    /// Recognized keys: certificateAuthorityData, clientCertificateData,
    /// clientKeyData, username (defaults to "client") and password
    /// (defaults to "cert").
    pub credential_secret_ref: SecretReference,
}

/// Observed state of an HAProxyLoadBalancerConfig; currently empty
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq, Eq)]
#[allow(clippy::empty_structs_with_brackets, reason = "a unit struct would serialize as null")]
pub struct HAProxyLoadBalancerConfigStatus {}
