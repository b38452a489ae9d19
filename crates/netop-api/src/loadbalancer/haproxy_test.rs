//! Unit tests for HAProxyLoadBalancerConfig

#[cfg(test)]
mod tests {
    use crate::*;
    use kube::CustomResourceExt;
    use serde_json::json;

    #[test]
    fn test_minimal_round_trip() {
        let config = HAProxyLoadBalancerConfig::new(
            "haproxy",
            HAProxyLoadBalancerConfigSpec {
                endpoints: vec!["https://10.0.0.2:5556/v2".to_string()],
                server_name: None,
                credential_secret_ref: SecretReference::new("haproxy-lb-config", "vmware-system-netop"),
            },
        );

        let value = serde_json::to_value(&config).unwrap();
        assert!(value["spec"].get("serverName").is_none(), "Unset serverName should be omitted");
        assert_eq!(value["kind"], "HAProxyLoadBalancerConfig");

        let parsed: HAProxyLoadBalancerConfig = serde_json::from_value(value).unwrap();
        assert_eq!(parsed, config);
    }

    #[test]
    fn test_endpoint_order_preserved() {
        let doc = json!({
            "apiVersion": "netoperator.vmware.com/v1alpha2",
            "kind": "HAProxyLoadBalancerConfig",
            "metadata": { "name": "haproxy" },
            "spec": {
                "endpoints": ["https://b:5556/v2", "https://a:5556/v2"],
                "serverName": "haproxy.local",
                "credentialSecretRef": { "name": "creds" }
            }
        });
        let config: HAProxyLoadBalancerConfig = serde_json::from_value(doc.clone()).unwrap();
        assert_eq!(config.spec.endpoints, vec!["https://b:5556/v2", "https://a:5556/v2"]);
        assert_eq!(config.spec.server_name.as_deref(), Some("haproxy.local"));
        assert_eq!(config.spec.credential_secret_ref.namespace, None);
        assert_eq!(serde_json::to_value(&config).unwrap()["spec"], doc["spec"]);
    }

    #[test]
    fn test_missing_credentials_rejected() {
        let doc = json!({
            "apiVersion": "netoperator.vmware.com/v1alpha2",
            "kind": "HAProxyLoadBalancerConfig",
            "metadata": { "name": "haproxy" },
            "spec": { "endpoints": ["https://a:5556/v2"] }
        });
        assert!(serde_json::from_value::<HAProxyLoadBalancerConfig>(doc).is_err());
    }

    #[test]
    fn test_crd_requires_at_least_one_endpoint() {
        let crd = HAProxyLoadBalancerConfig::crd();
        assert_eq!(crd.spec.scope, "Cluster");

        let crd = serde_json::to_value(crd).unwrap();
        let endpoints = &crd["spec"]["versions"][0]["schema"]["openAPIV3Schema"]["properties"]["spec"]
            ["properties"]["endpoints"];
        assert_eq!(endpoints["minItems"], 1);
    }
}
