//! Type registry
//!
//! A [`Scheme`] maps group/version/kind to the Rust type that handles it,
//! for both the single-object kind and its `<Kind>List` companion. It is
//! built once at startup and handed by reference to whatever needs to
//! decode documents or enumerate CRDs; nothing is registered globally.

use std::collections::HashMap;

use k8s_openapi::apiextensions_apiserver::pkg::apis::apiextensions::v1::CustomResourceDefinition;
use k8s_openapi::apimachinery::pkg::apis::meta::v1::{ListMeta, ObjectMeta};
use kube::core::{ApiResource, GroupVersionKind};
use kube::{CustomResourceExt, Resource};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::error::{Result, SchemeError};
use crate::ipam::{IPAddress, IPPool};
use crate::list::{ResourceList, list_kind};
use crate::loadbalancer::{AviLoadBalancerConfig, HAProxyLoadBalancerConfig, LoadBalancerConfig};
use crate::network::Network;
use crate::network_interface::NetworkInterface;

/// Whether a kind lives in a namespace or at cluster level
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// Objects live in a namespace
    Namespaced,
    /// Objects live at cluster level
    Cluster,
}

macro_rules! objects {
    ($($kind:ident),* $(,)?) => {
        /// Any single network operator resource.
        ///
        /// Serializes transparently as the wrapped resource, including its
        /// `apiVersion` and `kind`.
        #[derive(Debug, Clone, Serialize, PartialEq)]
        #[serde(untagged)]
        pub enum Object {
            $(
                #[doc = concat!("A decoded [`", stringify!($kind), "`]")]
                $kind($kind),
            )*
        }

        $(
            impl From<$kind> for Object {
                fn from(resource: $kind) -> Self {
                    Object::$kind(resource)
                }
            }
        )*

        impl Object {
            /// Metadata of the wrapped resource
            pub fn metadata(&self) -> &ObjectMeta {
                match self {
                    $(Object::$kind(r) => &r.metadata,)*
                }
            }

            /// Group/version/kind of the wrapped resource
            pub fn gvk(&self) -> GroupVersionKind {
                match self {
                    $(Object::$kind(_) => gvk_of::<$kind>(),)*
                }
            }
        }
    };
}

objects!(
    AviLoadBalancerConfig,
    HAProxyLoadBalancerConfig,
    IPAddress,
    IPPool,
    LoadBalancerConfig,
    Network,
    NetworkInterface,
);

impl Object {
    /// `metadata.name` of the wrapped resource
    pub fn name(&self) -> Option<&str> {
        self.metadata().name.as_deref()
    }

    /// `<namespace>/<name>` for the namespaced kinds, `None` for cluster
    /// scoped ones
    pub fn namespaced_name(&self) -> Option<String> {
        match self {
            Object::IPAddress(r) => Some(r.namespaced_name()),
            Object::Network(r) => Some(r.namespaced_name()),
            Object::NetworkInterface(r) => Some(r.namespaced_name()),
            Object::AviLoadBalancerConfig(_)
            | Object::HAProxyLoadBalancerConfig(_)
            | Object::IPPool(_)
            | Object::LoadBalancerConfig(_) => None,
        }
    }

    /// The wrapped resource as a JSON value
    pub fn to_value(&self) -> Result<serde_json::Value> {
        Ok(serde_json::to_value(self)?)
    }
}

/// A decoded `<Kind>List` document
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ObjectList {
    /// `apiVersion` as found in the document
    pub api_version: String,
    /// `<Kind>List`
    pub kind: String,
    /// Standard list metadata
    pub metadata: ListMeta,
    /// Decoded items, in document order
    pub items: Vec<Object>,
}

/// Result of decoding a document through the scheme
#[derive(Debug, Clone, PartialEq)]
pub enum Decoded {
    /// A single resource
    Object(Object),
    /// A `<Kind>List` document
    List(ObjectList),
}

impl Decoded {
    /// The single object, or `None` for a list
    pub fn into_object(self) -> Option<Object> {
        match self {
            Decoded::Object(o) => Some(o),
            Decoded::List(_) => None,
        }
    }

    /// The list, or `None` for a single object
    pub fn into_list(self) -> Option<ObjectList> {
        match self {
            Decoded::List(l) => Some(l),
            Decoded::Object(_) => None,
        }
    }
}

type DecodeObjectFn = fn(serde_json::Value) -> Result<Object>;
type DecodeListFn = fn(serde_json::Value) -> Result<ObjectList>;

/// Everything the scheme knows about one registered kind
#[derive(Debug, Clone)]
pub struct TypeInfo {
    /// Group/version/kind of single objects
    pub gvk: GroupVersionKind,
    /// Kind of the list companion, `<Kind>List`
    pub list_kind: String,
    /// API resource (plural, api version) for dynamic clients
    pub api_resource: ApiResource,
    /// Whether objects are namespaced
    pub scope: Scope,
    crd: fn() -> CustomResourceDefinition,
    decode_object: DecodeObjectFn,
    decode_list: DecodeListFn,
}

impl TypeInfo {
    fn of<K>() -> Result<Self>
    where
        K: Resource<DynamicType = ()> + CustomResourceExt + DeserializeOwned + Into<Object>,
    {
        let crd = K::crd();
        let scope = match crd.spec.scope.as_str() {
            "Namespaced" => Scope::Namespaced,
            "Cluster" => Scope::Cluster,
            other => {
                return Err(SchemeError::UnsupportedScope {
                    kind: K::kind(&()).into_owned(),
                    scope: other.to_string(),
                });
            }
        };

        Ok(Self {
            gvk: gvk_of::<K>(),
            list_kind: list_kind::<K>(),
            api_resource: ApiResource::erase::<K>(&()),
            scope,
            crd: K::crd,
            decode_object: decode_object::<K>,
            decode_list: decode_list::<K>,
        })
    }

    /// Group/version/kind of the list companion
    pub fn list_gvk(&self) -> GroupVersionKind {
        GroupVersionKind::gvk(&self.gvk.group, &self.gvk.version, &self.list_kind)
    }

    /// CRD manifest of this kind
    pub fn crd(&self) -> CustomResourceDefinition {
        (self.crd)()
    }

    /// True for namespaced kinds
    pub fn is_namespaced(&self) -> bool {
        self.scope == Scope::Namespaced
    }
}

fn gvk_of<K: Resource<DynamicType = ()>>() -> GroupVersionKind {
    GroupVersionKind::gvk(&K::group(&()), &K::version(&()), &K::kind(&()))
}

// Documents may leave `spec` out when every spec field is optional. Kinds
// with required spec fields still fail on the missing fields.
fn default_missing_spec(value: &mut serde_json::Value) {
    if let Some(object) = value.as_object_mut() {
        object
            .entry("spec")
            .or_insert_with(|| serde_json::Value::Object(serde_json::Map::new()));
    }
}

fn decode_object<K>(mut value: serde_json::Value) -> Result<Object>
where
    K: DeserializeOwned + Into<Object>,
{
    default_missing_spec(&mut value);
    Ok(serde_json::from_value::<K>(value)?.into())
}

fn decode_list<K>(mut value: serde_json::Value) -> Result<ObjectList>
where
    K: DeserializeOwned + Into<Object>,
{
    if let Some(items) = value.get_mut("items").and_then(serde_json::Value::as_array_mut) {
        items.iter_mut().for_each(default_missing_spec);
    }
    let list: ResourceList<K> = serde_json::from_value(value)?;
    Ok(ObjectList {
        api_version: list.api_version,
        kind: list.kind,
        metadata: list.metadata,
        items: list.items.into_iter().map(Into::into).collect(),
    })
}

/// Builds a [`Scheme`]. Registration is the only phase in which the
/// mapping can change.
#[derive(Debug, Default)]
pub struct SchemeBuilder {
    types: HashMap<GroupVersionKind, TypeInfo>,
    lists: HashMap<GroupVersionKind, GroupVersionKind>,
    order: Vec<GroupVersionKind>,
}

impl SchemeBuilder {
    /// Builder with nothing registered
    pub fn new() -> Self {
        Self::default()
    }

    /// Register `K` and its list kind
    pub fn register<K>(mut self) -> Result<Self>
    where
        K: Resource<DynamicType = ()> + CustomResourceExt + DeserializeOwned + Into<Object>,
    {
        let info = TypeInfo::of::<K>()?;
        let list_gvk = info.list_gvk();

        if self.types.contains_key(&info.gvk) || self.lists.contains_key(&info.gvk) {
            return Err(SchemeError::AlreadyRegistered(format_gvk(&info.gvk)));
        }
        if self.types.contains_key(&list_gvk) || self.lists.contains_key(&list_gvk) {
            return Err(SchemeError::AlreadyRegistered(format_gvk(&list_gvk)));
        }

        debug!(
            "Registered {} ({:?}) with list kind {}",
            format_gvk(&info.gvk),
            info.scope,
            info.list_kind
        );

        self.lists.insert(list_gvk, info.gvk.clone());
        self.order.push(info.gvk.clone());
        self.types.insert(info.gvk.clone(), info);
        Ok(self)
    }

    /// Freeze the registrations into a [`Scheme`]
    pub fn build(self) -> Scheme {
        Scheme {
            types: self.types,
            lists: self.lists,
            order: self.order,
        }
    }
}

/// Immutable mapping from group/version/kind to registered type
#[derive(Debug, Clone)]
pub struct Scheme {
    types: HashMap<GroupVersionKind, TypeInfo>,
    lists: HashMap<GroupVersionKind, GroupVersionKind>,
    order: Vec<GroupVersionKind>,
}

impl Scheme {
    /// Start registering kinds
    pub fn builder() -> SchemeBuilder {
        SchemeBuilder::new()
    }

    /// Scheme with every `netoperator.vmware.com/v1alpha2` kind registered
    pub fn netoperator() -> Result<Self> {
        Ok(Self::builder()
            .register::<AviLoadBalancerConfig>()?
            .register::<HAProxyLoadBalancerConfig>()?
            .register::<IPAddress>()?
            .register::<IPPool>()?
            .register::<LoadBalancerConfig>()?
            .register::<Network>()?
            .register::<NetworkInterface>()?
            .build())
    }

    /// Type registered for `gvk`. A list kind resolves to its item type.
    pub fn lookup(&self, gvk: &GroupVersionKind) -> Option<&TypeInfo> {
        self.types
            .get(gvk)
            .or_else(|| self.lists.get(gvk).and_then(|item| self.types.get(item)))
    }

    /// Type registered under `kind` in any group/version
    pub fn lookup_kind(&self, kind: &str) -> Option<&TypeInfo> {
        self.kinds().find(|info| info.gvk.kind == kind)
    }

    /// True when `gvk` is the list companion of a registered kind
    pub fn is_list(&self, gvk: &GroupVersionKind) -> bool {
        self.lists.contains_key(gvk)
    }

    /// Registered types, in registration order
    pub fn kinds(&self) -> impl Iterator<Item = &TypeInfo> {
        self.order.iter().filter_map(|gvk| self.types.get(gvk))
    }

    /// CRD manifests of every registered kind, in registration order
    pub fn crds(&self) -> Vec<CustomResourceDefinition> {
        self.kinds().map(TypeInfo::crd).collect()
    }

    /// Decode a document using its `apiVersion` and `kind`. A missing
    /// `spec` is read as an empty one.
    pub fn decode(&self, value: serde_json::Value) -> Result<Decoded> {
        let gvk = type_meta(&value)?;

        if let Some(info) = self.types.get(&gvk) {
            trace!("Decoding {}", format_gvk(&gvk));
            return Ok(Decoded::Object((info.decode_object)(value)?));
        }
        if let Some(info) = self.lists.get(&gvk).and_then(|item| self.types.get(item)) {
            trace!("Decoding {}", format_gvk(&gvk));
            return Ok(Decoded::List((info.decode_list)(value)?));
        }

        Err(SchemeError::UnknownKind(format_gvk(&gvk)))
    }

    /// Decode a single JSON document
    pub fn decode_json(&self, input: &str) -> Result<Decoded> {
        self.decode(serde_json::from_str(input)?)
    }

    /// Decode a single YAML document
    pub fn decode_yaml(&self, input: &str) -> Result<Decoded> {
        self.decode(serde_yaml::from_str(input)?)
    }

    /// Decode every document of a `---` separated YAML stream. Empty
    /// documents are skipped.
    pub fn decode_yaml_stream(&self, input: &str) -> Result<Vec<Decoded>> {
        let mut decoded = Vec::new();
        for document in serde_yaml::Deserializer::from_str(input) {
            let value = serde_json::Value::deserialize(document)?;
            if value.is_null() {
                continue;
            }
            decoded.push(self.decode(value)?);
        }
        Ok(decoded)
    }
}

fn type_meta(value: &serde_json::Value) -> Result<GroupVersionKind> {
    let api_version = value
        .get("apiVersion")
        .and_then(serde_json::Value::as_str)
        .ok_or(SchemeError::MissingTypeMeta)?;
    let kind = value
        .get("kind")
        .and_then(serde_json::Value::as_str)
        .filter(|k| !k.is_empty())
        .ok_or(SchemeError::MissingTypeMeta)?;

    let (group, version) = api_version.split_once('/').unwrap_or(("", api_version));
    if version.is_empty() || version.contains('/') {
        return Err(SchemeError::InvalidApiVersion(api_version.to_string()));
    }

    Ok(GroupVersionKind::gvk(group, version, kind))
}

fn format_gvk(gvk: &GroupVersionKind) -> String {
    if gvk.group.is_empty() {
        format!("{}, Kind={}", gvk.version, gvk.kind)
    } else {
        format!("{}/{}, Kind={}", gvk.group, gvk.version, gvk.kind)
    }
}
