//! NetworkInterface CRD
//!
//! Connects a guest to a Network and reports the realized interface
//! configuration.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::Condition;
use kube::CustomResource;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::common::{NetworkIdentity, ProviderConfig, identity_for};
use crate::references::TypedLocalObjectReference;

/// Desired port allocation, used when the interface is attached to the
/// network without vCenter's involvement
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfacePortAllocation {
    /// Node on which the port must be allocated
    pub node_name: String,
}

/// A static route for a guest
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct RouteSpec {
    /// IP4 destination
    pub to: String,

    /// IP4 next hop
    pub via: String,

    /// Weight/priority of the route
    pub metric: i32,
}

/// NetworkInterfaceSpec defines the desired state of a NetworkInterface
#[derive(CustomResource, Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Default)]
#[kube(
    group = "netoperator.vmware.com",
    version = "v1alpha2",
    kind = "NetworkInterface",
    plural = "networkinterfaces",
    shortname = "vmnic",
    namespaced,
    status = "NetworkInterfaceStatus",
    derive = "PartialEq",
    printcolumn = r#"{"name":"Network", "type":"string", "jsonPath":".spec.networkName"}"#,
    printcolumn = r#"{"name":"IP-Addrs", "type":"string", "jsonPath":".status.addresses[*]"}"#,
    printcolumn = r#"{"name":"Att-Name", "type":"string", "jsonPath":".spec.attachedTo.name"}"#,
    printcolumn = r#"{"name":"Att-Kind", "type":"string", "jsonPath":".spec.attachedTo.kind"}"#
)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceSpec {
    /// Resource this interface is attached to. Informational only: setting
    /// it does not attach anything, and consumers clear it on detach.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attached_to: Option<TypedLocalObjectReference>,

    /// IP4/IP6 addresses with prefix length, ex. 192.168.0.10/24. Requires a
    /// network with manual allocation. No IP4 entries when dhcp4 is set, no
    /// IP6 entries when dhcp6 is set.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub addresses: Vec<String>,

    /// Names of IPAddress resources in this namespace used as address
    /// sources. May be combined with `addresses`.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub address_names: Vec<String>,

    /// Use DHCP for IP4. Mutually exclusive with IP4 addresses and gateway4.
    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub dhcp4: bool,

    /// Use DHCP for IP6. Mutually exclusive with IP6 addresses and gateway6.
    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub dhcp6: bool,

    /// Default IP4 gateway with prefix length, ex. 192.168.0.1/24. Most
    /// guests cope with only one interface carrying a default gateway.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway4: Option<String>,

    /// Default IP6 gateway with prefix length, ex. 2001:db8:101::1/64
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway6: Option<String>,

    /// Requested MAC address
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "mac"))]
    pub mac_addr: Option<String>,

    /// Maximum Transmission Unit in bytes
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mtu: Option<i64>,

    /// DNS nameservers for the guest
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub nameservers: Vec<String>,

    /// Network to connect to; defaults to the namespace's default network
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub network_name: Option<String>,

    /// NTP servers for the guest
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ntp: Vec<String>,

    /// Allocate a port without vCenter, see [`NetworkInterfacePortAllocation`]
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port_allocation: Option<NetworkInterfacePortAllocation>,

    /// Provider specific configuration for the interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_config: Option<ProviderConfig>,

    /// Static routes for the guest
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub routes: Vec<RouteSpec>,

    /// DNS search domains for the guest
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub search_domains: Vec<String>,
}

/// NetworkInterfaceStatus defines the observed state of a NetworkInterface
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct NetworkInterfaceStatus {
    /// Assigned addresses with prefix length. Holds no IP4 entries when
    /// dhcp4 is true and no IP6 entries when dhcp6 is true.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub addresses: Vec<String>,

    /// Observed conditions of the interface
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(schema_with = "crate::conditions::conditions")]
    pub conditions: Vec<Condition>,

    /// Connected port on the backing network. Only valid on the requested
    /// node and only set when port allocation was requested.
    #[serde(rename = "connectionID", default, skip_serializing_if = "Option::is_none")]
    pub connection_id: Option<String>,

    /// DHCP is used for IP4
    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub dhcp4: bool,

    /// DHCP is used for IP6
    #[serde(default, skip_serializing_if = "crate::is_false")]
    pub dhcp6: bool,

    /// External ID for the VirtualEthernetCard device; must be used as-is
    /// when non-empty. Persisted under the key "string" for compatibility
    /// with existing controllers.
    #[serde(rename = "string", default, skip_serializing_if = "Option::is_none")]
    pub external_id: Option<String>,

    /// Realized IP4 gateway with prefix length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway4: Option<String>,

    /// Realized IP6 gateway with prefix length
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "cidr"))]
    pub gateway6: Option<String>,

    /// Identity of the interface on each vSphere cluster
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "map", "x-kubernetes-list-map-keys" = ["clusterID"]))]
    pub identity: Vec<NetworkIdentity>,

    /// MAC address; must be used as-is when non-empty
    #[serde(default, skip_serializing_if = "Option::is_none")]
    #[schemars(extend("format" = "mac"))]
    pub mac_addr: Option<String>,

    /// Realized DNS nameservers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub nameservers: Vec<String>,

    /// Realized NTP servers
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub ntp: Vec<String>,

    /// Allocated port on the backing network, see `connection_id`
    #[serde(rename = "portID", default, skip_serializing_if = "Option::is_none")]
    pub port_id: Option<String>,

    /// Provider specific resource backing this interface
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_ref: Option<TypedLocalObjectReference>,

    /// Empty when both dhcp4 and dhcp6 are true
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "set"))]
    pub search_domains: Vec<String>,
}

impl NetworkInterfaceStatus {
    /// Identity of this interface on the vSphere cluster `cluster_id`
    pub fn identity_for_cluster(&self, cluster_id: &str) -> Option<&NetworkIdentity> {
        identity_for(&self.identity, cluster_id)
    }
}

impl NetworkInterface {
    /// Namespace and name joined with a "/" character
    pub fn namespaced_name(&self) -> String {
        crate::namespaced_name(self)
    }
}
