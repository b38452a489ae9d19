//! Unit tests for the type registry

#[cfg(test)]
mod tests {
    use crate::*;
    use kube::core::GroupVersionKind;
    use serde_json::json;

    fn scheme() -> Scheme {
        Scheme::netoperator().expect("netoperator scheme should build")
    }

    fn gvk(kind: &str) -> GroupVersionKind {
        GroupVersionKind::gvk(GROUP, VERSION, kind)
    }

    #[test]
    fn test_all_kinds_registered_in_order() {
        let scheme = scheme();
        let kinds: Vec<&str> = scheme.kinds().map(|info| info.gvk.kind.as_str()).collect();
        assert_eq!(
            kinds,
            vec![
                "AviLoadBalancerConfig",
                "HAProxyLoadBalancerConfig",
                "IPAddress",
                "IPPool",
                "LoadBalancerConfig",
                "Network",
                "NetworkInterface",
            ]
        );
    }

    #[test]
    fn test_lookup_reports_scope() {
        let scheme = scheme();
        let cases = [
            ("AviLoadBalancerConfig", Scope::Cluster),
            ("HAProxyLoadBalancerConfig", Scope::Cluster),
            ("IPAddress", Scope::Namespaced),
            ("IPPool", Scope::Cluster),
            ("LoadBalancerConfig", Scope::Cluster),
            ("Network", Scope::Namespaced),
            ("NetworkInterface", Scope::Namespaced),
        ];
        for (kind, scope) in cases {
            let info = scheme.lookup(&gvk(kind)).unwrap_or_else(|| panic!("{kind} not registered"));
            assert_eq!(info.scope, scope, "Unexpected scope for {kind}");
            assert_eq!(info.list_kind, format!("{kind}List"));
        }
    }

    #[test]
    fn test_list_kind_resolves_to_item_type() {
        let scheme = scheme();
        let list = gvk("NetworkList");
        assert!(scheme.is_list(&list));
        assert!(!scheme.is_list(&gvk("Network")));

        let info = scheme.lookup(&list).unwrap();
        assert_eq!(info.gvk.kind, "Network");
        assert_eq!(info.list_gvk(), list);
        assert_eq!(info.api_resource.plural, "networks");
        assert!(info.is_namespaced());
    }

    #[test]
    fn test_unknown_version_not_found() {
        let scheme = scheme();
        let other = GroupVersionKind::gvk(GROUP, "v1alpha1", "Network");
        assert!(scheme.lookup(&other).is_none());
        assert!(scheme.lookup_kind("Gateway").is_none());
    }

    #[test]
    fn test_duplicate_registration_rejected() {
        let builder = Scheme::builder().register::<IPPool>().unwrap();
        let result = builder.register::<IPPool>();
        assert!(
            matches!(result, Err(SchemeError::AlreadyRegistered(ref kind)) if kind.contains("IPPool")),
            "Second registration must fail"
        );
    }

    #[test]
    fn test_decode_yaml_object() {
        let yaml = r#"
apiVersion: netoperator.vmware.com/v1alpha2
kind: Network
metadata:
  name: net1
  namespace: ns1
spec:
  ipFamilies: [ip4]
  ipRanges:
    - 192.168.0.0/24
  gateway4: 192.168.0.1/24
"#;
        let object = scheme().decode_yaml(yaml).unwrap().into_object().unwrap();
        assert_eq!(object.gvk(), gvk("Network"));
        assert_eq!(object.name(), Some("net1"));
        assert_eq!(object.namespaced_name().as_deref(), Some("ns1/net1"));

        match object {
            Object::Network(network) => {
                assert_eq!(network.spec.ip_families, vec![IPFamily::Ip4]);
                assert_eq!(network.spec.gateway4.as_deref(), Some("192.168.0.1/24"));
            }
            other => panic!("Expected Network, got {other:?}"),
        }
    }

    #[test]
    fn test_cluster_scoped_object_has_no_namespaced_name() {
        let doc = json!({
            "apiVersion": "netoperator.vmware.com/v1alpha2",
            "kind": "IPPool",
            "metadata": { "name": "pool" },
            "spec": { "startingAddress": "10.0.0.10", "addressCount": 16 }
        });
        let object = scheme().decode(doc).unwrap().into_object().unwrap();
        assert_eq!(object.namespaced_name(), None);
    }

    #[test]
    fn test_decode_json_list() {
        let doc = json!({
            "apiVersion": "netoperator.vmware.com/v1alpha2",
            "kind": "IPAddressList",
            "metadata": { "resourceVersion": "42" },
            "items": [
                {
                    "apiVersion": "netoperator.vmware.com/v1alpha2",
                    "kind": "IPAddress",
                    "metadata": { "name": "a", "namespace": "ns1" },
                    "spec": {}
                },
                {
                    "apiVersion": "netoperator.vmware.com/v1alpha2",
                    "kind": "IPAddress",
                    "metadata": { "name": "b", "namespace": "ns1" },
                    "spec": { "family": "ip6" }
                }
            ]
        });
        let list = scheme()
            .decode_json(&doc.to_string())
            .unwrap()
            .into_list()
            .unwrap();
        assert_eq!(list.kind, "IPAddressList");
        assert_eq!(list.metadata.resource_version.as_deref(), Some("42"));
        let names: Vec<Option<String>> = list.items.iter().map(Object::namespaced_name).collect();
        assert_eq!(names, vec![Some("ns1/a".to_string()), Some("ns1/b".to_string())]);
    }

    #[test]
    fn test_decode_yaml_stream_skips_empty_documents() {
        let yaml = r#"---
apiVersion: netoperator.vmware.com/v1alpha2
kind: LoadBalancerConfig
metadata:
  name: lb
spec:
  providerRef:
    name: avi
---
---
apiVersion: netoperator.vmware.com/v1alpha2
kind: AviLoadBalancerConfig
metadata:
  name: avi
spec:
  server: https://127.0.0.1:443
  credentialSecretRef:
    name: avi-lb-config
"#;
        let decoded = scheme().decode_yaml_stream(yaml).unwrap();
        assert_eq!(decoded.len(), 2);

        let kinds: Vec<String> = decoded
            .into_iter()
            .filter_map(Decoded::into_object)
            .map(|o| o.gvk().kind)
            .collect();
        assert_eq!(kinds, vec!["LoadBalancerConfig", "AviLoadBalancerConfig"]);
    }

    #[test]
    fn test_decode_rejects_missing_type_meta() {
        let result = scheme().decode(json!({ "metadata": { "name": "x" } }));
        assert!(matches!(result, Err(SchemeError::MissingTypeMeta)));

        let result = scheme().decode(json!({ "apiVersion": "netoperator.vmware.com/v1alpha2" }));
        assert!(matches!(result, Err(SchemeError::MissingTypeMeta)));
    }

    #[test]
    fn test_decode_rejects_malformed_api_version() {
        let result = scheme().decode(json!({ "apiVersion": "a/b/c", "kind": "Network" }));
        assert!(matches!(result, Err(SchemeError::InvalidApiVersion(_))));
    }

    #[test]
    fn test_decode_rejects_unknown_kind() {
        let result = scheme().decode(json!({ "apiVersion": "v1", "kind": "Pod" }));
        assert!(matches!(result, Err(SchemeError::UnknownKind(ref k)) if k == "v1, Kind=Pod"));

        let result = scheme().decode(json!({
            "apiVersion": "netoperator.vmware.com/v1alpha1",
            "kind": "Network"
        }));
        assert!(matches!(result, Err(SchemeError::UnknownKind(_))));
    }

    #[test]
    fn test_decode_object_without_spec() {
        let decoded = scheme()
            .decode(json!({
                "apiVersion": "netoperator.vmware.com/v1alpha2",
                "kind": "Network",
                "metadata": { "name": "primary", "namespace": "ns" }
            }))
            .unwrap();
        let Some(Object::Network(network)) = decoded.into_object() else {
            panic!("Expected a Network");
        };
        assert_eq!(network.spec, NetworkSpec::default());
        assert_eq!(network.namespaced_name(), "ns/primary");
    }

    #[test]
    fn test_decode_missing_spec_still_needs_required_fields() {
        let result = scheme().decode(json!({
            "apiVersion": "netoperator.vmware.com/v1alpha2",
            "kind": "IPPool",
            "metadata": { "name": "pool" }
        }));
        assert!(matches!(result, Err(SchemeError::Json(_))), "IPPool spec has required fields");
    }

    #[test]
    fn test_decode_list_items_without_spec() {
        let decoded = scheme()
            .decode(json!({
                "apiVersion": "netoperator.vmware.com/v1alpha2",
                "kind": "IPAddressList",
                "metadata": {},
                "items": [
                    {
                        "apiVersion": "netoperator.vmware.com/v1alpha2",
                        "kind": "IPAddress",
                        "metadata": { "name": "a", "namespace": "ns" }
                    },
                    {
                        "apiVersion": "netoperator.vmware.com/v1alpha2",
                        "kind": "IPAddress",
                        "metadata": { "name": "b", "namespace": "ns" },
                        "spec": { "family": "ip6" }
                    }
                ]
            }))
            .unwrap();
        let list = decoded.into_list().unwrap();
        assert_eq!(list.items.len(), 2);
        let Object::IPAddress(first) = &list.items[0] else {
            panic!("Expected an IPAddress");
        };
        assert_eq!(first.spec.family, IPFamily::Ip4);
        let Object::IPAddress(second) = &list.items[1] else {
            panic!("Expected an IPAddress");
        };
        assert_eq!(second.spec.family, IPFamily::Ip6);
    }

    #[test]
    fn test_decode_surfaces_invalid_enum() {
        let result = scheme().decode(json!({
            "apiVersion": "netoperator.vmware.com/v1alpha2",
            "kind": "IPAddress",
            "metadata": { "name": "a" },
            "spec": { "family": "ipx" }
        }));
        assert!(matches!(result, Err(SchemeError::Json(_))), "Invalid family must not be coerced");
    }

    #[test]
    fn test_object_serializes_transparently() {
        let pool = IPPool::new(
            "pool",
            IPPoolSpec {
                starting_address: "10.0.0.10".to_string(),
                address_count: 16,
            },
        );
        let value = Object::from(pool.clone()).to_value().unwrap();
        assert_eq!(value, serde_json::to_value(&pool).unwrap());
        assert_eq!(value["kind"], "IPPool");
        assert_eq!(value["apiVersion"], "netoperator.vmware.com/v1alpha2");

        let round_trip = scheme().decode(value).unwrap();
        assert_eq!(round_trip, Decoded::Object(Object::IPPool(pool)));
    }

    #[test]
    fn test_resource_list_new() {
        let list = NetworkList::new(vec![]);
        assert_eq!(list.api_version, "netoperator.vmware.com/v1alpha2");
        assert_eq!(list.kind, "NetworkList");

        let value = serde_json::to_value(&list).unwrap();
        assert_eq!(value["items"], json!([]), "Empty items are still written");

        let decoded = scheme().decode(value).unwrap().into_list().unwrap();
        assert!(decoded.items.is_empty());
    }

    #[test]
    fn test_resource_list_round_trip() {
        let list: IPPoolList = (1..=2)
            .map(|i| {
                IPPool::new(
                    &format!("pool-{i}"),
                    IPPoolSpec {
                        starting_address: format!("10.0.{i}.1"),
                        address_count: 254,
                    },
                )
            })
            .collect();
        let json = serde_json::to_string(&list).unwrap();
        let parsed: IPPoolList = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, list);
    }

    #[test]
    fn test_crds_cover_every_kind() {
        let names: Vec<String> = scheme()
            .crds()
            .into_iter()
            .filter_map(|crd| crd.metadata.name)
            .collect();
        assert_eq!(
            names,
            vec![
                "aviloadbalancerconfigs.netoperator.vmware.com",
                "haproxyloadbalancerconfigs.netoperator.vmware.com",
                "ipaddresses.netoperator.vmware.com",
                "ippools.netoperator.vmware.com",
                "loadbalancerconfigs.netoperator.vmware.com",
                "networks.netoperator.vmware.com",
                "networkinterfaces.netoperator.vmware.com",
            ]
        );
    }

    #[test]
    fn test_namespaced_name_helper() {
        let mut network = Network::new("net1", NetworkSpec::default());
        network.metadata.namespace = Some("ns1".to_string());
        assert_eq!(namespaced_name(&network), "ns1/net1");
    }
}
