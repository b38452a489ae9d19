//! Process configuration read from the environment

use std::env;

/// Environment variable naming the default Network controller
pub const DEFAULT_NETWORK_CONTROLLER_NAME_ENV: &str = "DEFAULT_NETWORK_CONTROLLER_NAME";

/// Controller name used when neither the Network nor the environment names one
pub const FALLBACK_NETWORK_CONTROLLER_NAME: &str = "netoperator.vmware.com/network";

/// Default controller for Network resources that leave `controllerName`
/// empty: `DEFAULT_NETWORK_CONTROLLER_NAME` when set and non-empty,
/// otherwise netoperator.vmware.com/network.
pub fn default_network_controller_name() -> String {
    controller_name_from(env::var(DEFAULT_NETWORK_CONTROLLER_NAME_ENV).ok())
}

fn controller_name_from(value: Option<String>) -> String {
    value
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| FALLBACK_NETWORK_CONTROLLER_NAME.to_string())
}
