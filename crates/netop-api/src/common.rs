//! Types shared by several network operator resources

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::references::TypedLocalObjectReference;

/// Method used to assign IP addresses on a network.
///
/// One of `dhcp4`, `dhcp6`, `ipam4`, `ipam6`, `none4` or `none6`.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs, reason = "variants are the wire values listed above")]
pub enum IPAssignmentMode {
    Dhcp4,
    Dhcp6,
    Ipam4,
    Ipam6,
    None4,
    None6,
}

impl IPAssignmentMode {
    /// Address family the mode assigns addresses for
    pub fn family(self) -> IPFamily {
        match self {
            Self::Dhcp4 | Self::Ipam4 | Self::None4 => IPFamily::Ip4,
            Self::Dhcp6 | Self::Ipam6 | Self::None6 => IPFamily::Ip6,
        }
    }
}

impl std::fmt::Display for IPAssignmentMode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Dhcp4 => write!(f, "dhcp4"),
            Self::Dhcp6 => write!(f, "dhcp6"),
            Self::Ipam4 => write!(f, "ipam4"),
            Self::Ipam6 => write!(f, "ipam6"),
            Self::None4 => write!(f, "none4"),
            Self::None6 => write!(f, "none6"),
        }
    }
}

/// IP address family, `ip4` or `ip6`
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "lowercase")]
#[allow(missing_docs, reason = "variants are the wire values listed above")]
pub enum IPFamily {
    #[default]
    Ip4,
    Ip6,
}

impl std::fmt::Display for IPFamily {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Ip4 => write!(f, "ip4"),
            Self::Ip6 => write!(f, "ip6"),
        }
    }
}

/// Identity of a network (or network interface) on one vSphere cluster
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct NetworkIdentity {
    /// Value used to identify a vSphere cluster
    #[serde(rename = "clusterID")]
    pub cluster_id: String,

    /// Value used to identify the network resource for the associated
    /// vSphere cluster
    #[serde(rename = "networkID")]
    pub network_id: String,
}

/// A provider property
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
pub struct KeyValuePair {
    /// Property name
    pub key: String,

    /// Property value, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
}

/// Additional configuration for the underlying network provider
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq, Default)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    /// Provider specific properties, unique by key
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    #[schemars(extend("x-kubernetes-list-type" = "map", "x-kubernetes-list-map-keys" = ["key"]))]
    pub properties: Vec<KeyValuePair>,

    /// Object that holds additional configuration for the provider
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub provider_ref: Option<TypedLocalObjectReference>,
}

impl ProviderConfig {
    /// Value of the property `key`. A property present without a value
    /// yields `Some("")`.
    pub fn property(&self, key: &str) -> Option<&str> {
        self.properties
            .iter()
            .find(|p| p.key == key)
            .map(|p| p.value.as_deref().unwrap_or_default())
    }
}

/// Finds the identity entry for `cluster_id`
pub(crate) fn identity_for<'a>(
    identities: &'a [NetworkIdentity],
    cluster_id: &str,
) -> Option<&'a NetworkIdentity> {
    identities.iter().find(|i| i.cluster_id == cluster_id)
}
