//! IPAddress CRD
//!
//! Requests an IP address from a Network and reports the realized one.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{IPFamily, ProviderConfig};

/// IPAddressSpec defines the desired state of an IPAddress
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "netoperator.vmware.com",
    version = "v1alpha2",
    kind = "IPAddress",
    plural = "ipaddresses",
    shortname = "ip",
    namespaced,
    status = "IPAddressStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Address", "type":"string", "jsonPath":".status.address"}"#,
    printcolumn = r#"{"name":"Family", "type":"string", "jsonPath":".spec.family"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct IPAddressSpec {
    /// Desired IP address. Must be within the range of the referenced
    /// Network; when omitted an address is allocated from that range.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// IP family of the requested address
    #[serde(default)]
    pub family: IPFamily,

    /// Network to allocate from. Defaults to the namespace's default
    /// network: the only Network in the namespace, or the one labelled
    /// netoperator.vmware.com/default-network.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,

    /// Provider specific configuration for the allocation
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config: Option<ProviderConfig>,
}

/// IPAddressStatus defines the observed state of an IPAddress
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct IPAddressStatus {
    /// Realized IP address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,

    /// NetworkInterface currently using this address; cleared when the
    /// address is no longer associated with an interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_interface_name: Option<String>,

    /// Observed conditions of the allocation
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(schema_with = "crate::conditions::conditions")]
    pub conditions: Vec<Condition>,
}

impl IPAddress {
    /// Namespace and name joined with a "/" character
    pub fn namespaced_name(&self) -> String {
        crate::namespaced_name(self)
    }

    /// Realized address, once the status reports one
    pub fn realized_address(&self) -> Option<&str> {
        self.status.as_ref()?.address.as_deref()
    }
}
