//! Network Custom Resource Definition
//!
//! A Network surfaces an underlying network infrastructure resource so users
//! can get and list a namespace's available networks without knowing the
//! provider. It is akin to an IP subnetwork: it may list several IP ranges,
//! but all ranges of one address family share a single gateway.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{IPAssignmentMode, IPFamily, NetworkIdentity, ProviderConfig, identity_for};
use crate::references::TypedLocalObjectReference;

/// Label applied to the Network that is the default network of a namespace
pub const DEFAULT_NETWORK_LABEL: &str = "netoperator.vmware.com/default-network";

/// Prefix of the label added to a Network for each of its capabilities
pub const CAPABILITY_LABEL_PREFIX: &str = "capability.netoperator.vmware.com/";

/// Label key advertising `capability`, ex. "multicast" becomes
/// capability.netoperator.vmware.com/multicast
pub fn capability_label(capability: &str) -> String {
    format!("{CAPABILITY_LABEL_PREFIX}{capability}")
}

/// NetworkSpec defines the desired state of a Network
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "netoperator.vmware.com",
    version = "v1alpha2",
    kind = "Network",
    plural = "networks",
    shortname = "net",
    namespaced,
    status = "NetworkStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name":"IPFamily", "type":"string", "jsonPath":".status.ipFamily[*]"}"#,
    printcolumn = r#"{"name":"IPAssign", "type":"string", "jsonPath":".status.ipAssign[*]"}"#,
    printcolumn = r#"{"name":"Gateway4", "type":"string", "jsonPath":".status.gateway4"}"#,
    printcolumn = r#"{"name":"Gateway6", "type":"string", "jsonPath":".status.gateway6"}"#,
    printcolumn = r#"{"name":"IPRanges", "type":"string", "jsonPath":".status.ipRanges[*]"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct NetworkSpec {
    /// Capabilities of the network, ex. "multicast" or "private". Each must
    /// be a valid label value.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub capabilities: Vec<String>,

    /// Controller responsible for reconciling this Network. Once set to a
    /// non-empty value, attempts to clear it are ignored.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub controller_name: Option<String>,

    /// Network uses DHCP for IP4 addresses
    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub dhcp4: bool,

    /// Network uses DHCP for IP6 addresses
    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub dhcp6: bool,

    /// Default IP4 gateway with prefix length, ex. 192.168.0.1/24
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway4: Option<String>,

    /// Default IP6 gateway with prefix length, ex. 2001:db8:101::1/64
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway6: Option<String>,

    /// Identity of the network on one or more vSphere clusters
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "map", "x-kubernetes-list-map-keys" = ["clusterID"]))]
    pub identity: Vec<NetworkIdentity>,

    /// Provider specific value used to look up the network object on the
    /// underlying infrastructure
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,

    /// Methods used to assign addresses on this network
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ip_assignment_modes: Vec<IPAssignmentMode>,

    /// IP families supported on this network. Always serialized.
    #[serde(default)]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ip_families: Vec<IPFamily>,

    /// IP4 and IP6 ranges in CIDR form, ex. 192.168.0.0/24. A single
    /// address is written as /32 or /128. Several ranges exist to cover
    /// several families or one non-contiguous logical network, never
    /// several logical networks.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ip_ranges: Vec<String>,

    /// DNS nameservers. Linux honours at most three.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub nameservers: Vec<String>,

    /// FQDNs, IP4 or IP6 addresses of NTP servers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ntp: Vec<String>,

    /// Provider specific configuration for the network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config: Option<ProviderConfig>,

    /// DNS search domains
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub search_domains: Vec<String>,
}

impl NetworkSpec {
    /// Controller name from the spec, or the process default when unset or
    /// empty
    pub fn effective_controller_name(&self) -> String {
        match self.controller_name.as_deref() {
            Some(name) if !name.is_empty() => name.to_string(),
            _ => crate::config::default_network_controller_name(),
        }
    }

    /// Identity of this network on the vSphere cluster `cluster_id`
    pub fn identity_for_cluster(&self, cluster_id: &str) -> Option<&NetworkIdentity> {
        identity_for(&self.identity, cluster_id)
    }
}

/// NetworkStatus defines the observed state of a Network
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkStatus {
    /// Realized capabilities. Each one is also added to the resource's
    /// labels, see [`capability_label`].
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub capabilities: Vec<String>,

    /// Observed conditions of the network
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(schema_with = "crate::conditions::conditions")]
    pub conditions: Vec<Condition>,

    /// Realized IP4 gateway with prefix length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway4: Option<String>,

    /// Realized IP6 gateway with prefix length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway6: Option<String>,

    /// Realized address assignment methods
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ip_assignment_modes: Vec<IPAssignmentMode>,

    /// Realized IP families
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ip_families: Vec<IPFamily>,

    /// Realized IP ranges in CIDR form
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ip_ranges: Vec<String>,

    /// Network-like resource providing this network's capabilities
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_ref: Option<TypedLocalObjectReference>,

    /// Realized DNS nameservers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub nameservers: Vec<String>,

    /// Realized NTP servers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ntp: Vec<String>,

    /// Realized DNS search domains
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub search_domains: Vec<String>,
}

impl Network {
    /// Namespace and name joined with a "/" character
    pub fn namespaced_name(&self) -> String {
        crate::namespaced_name(self)
    }

    /// True when this Network carries the default network label
    pub fn is_default_network(&self) -> bool {
        self.metadata
            .labels
            .as_ref()
            .is_some_and(|l| l.contains_key(DEFAULT_NETWORK_LABEL))
    }
}
