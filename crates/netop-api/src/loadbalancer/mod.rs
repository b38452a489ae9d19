//! Load balancer CRDs
//!
//! Cluster scoped resources describing how load balancers are configured:
//! - LoadBalancerConfig (points at a provider specific config)
//! - AviLoadBalancerConfig
//! - HAProxyLoadBalancerConfig

pub mod avi;
pub mod haproxy;
pub mod load_balancer_config;

#[cfg(test)]
mod haproxy_test;

pub use avi::*;
pub use haproxy::*;
pub use load_balancer_config::*;
