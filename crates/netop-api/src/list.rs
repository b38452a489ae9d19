//! List types
//!
//! Every kind has a companion `<Kind>List` document with `apiVersion`,
//! `kind`, list `metadata` and `items`.

use k8s_openapi::apimachinery::pkg::apis::meta::v1::ListMeta;
use kube::Resource;
use serde::{Deserialize, Serialize};

use crate::ipam::{IPAddress, IPPool};
use crate::loadbalancer::{AviLoadBalancerConfig, HAProxyLoadBalancerConfig, LoadBalancerConfig};
use crate::network::Network;
use crate::network_interface::NetworkInterface;

/// `<Kind>List` document holding resources of kind `K`
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ResourceList<K> {
    /// `netoperator.vmware.com/v1alpha2`
    pub api_version: String,
    /// `<Kind>List`
    pub kind: String,
    /// Standard list metadata
    #[serde(default)]
    pub metadata: ListMeta,
    /// Resources in the list
    #[serde(default = "Vec::new")]
    pub items: Vec<K>,
}

impl<K> ResourceList<K>
where
    K: Resource<DynamicType = ()>,
{
    /// List of `items` with `apiVersion` and `kind` filled in for `K`
    pub fn new(items: Vec<K>) -> Self {
        Self {
            api_version: K::api_version(&()).into_owned(),
            kind: list_kind::<K>(),
            metadata: ListMeta::default(),
            items,
        }
    }
}

impl<K> FromIterator<K> for ResourceList<K>
where
    K: Resource<DynamicType = ()>,
{
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// Kind of the list document for `K`, ex. "IPPoolList"
pub fn list_kind<K: Resource<DynamicType = ()>>() -> String {
    format!("{}List", K::kind(&()))
}

/// List of AviLoadBalancerConfig
pub type AviLoadBalancerConfigList = ResourceList<AviLoadBalancerConfig>;
/// List of HAProxyLoadBalancerConfig
pub type HAProxyLoadBalancerConfigList = ResourceList<HAProxyLoadBalancerConfig>;
/// List of IPAddress
pub type IPAddressList = ResourceList<IPAddress>;
/// List of IPPool
pub type IPPoolList = ResourceList<IPPool>;
/// List of LoadBalancerConfig
pub type LoadBalancerConfigList = ResourceList<LoadBalancerConfig>;
/// List of Network
pub type NetworkList = ResourceList<Network>;
/// List of NetworkInterface
pub type NetworkInterfaceList = ResourceList<NetworkInterface>;
