//! CRD generator
//!
//! Prints the CustomResourceDefinition of every network operator kind as a
//! YAML stream on stdout:
//!
//! ```text
//! crdgen                      # all kinds
//! crdgen Network IPAddress    # only the named kinds
//! ```
//!
//! Logs go to stderr; set RUST_LOG to adjust verbosity.

use anyhow::Context;
use netop_api::{Scheme, TypeInfo};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let scheme = Scheme::netoperator().context("Failed to build type registry")?;

    let requested: Vec<String> = std::env::args().skip(1).collect();
    let selected: Vec<&TypeInfo> = if requested.is_empty() {
        scheme.kinds().collect()
    } else {
        requested
            .iter()
            .map(|kind| {
                scheme
                    .lookup_kind(kind)
                    .with_context(|| format!("Unknown kind: {kind}"))
            })
            .collect::<anyhow::Result<_>>()?
    };

    for info in selected {
        info!("Generating CRD for {} ({:?})", info.gvk.kind, info.scope);
        print!("---\n{}", serde_yaml::to_string(&info.crd())?);
    }

    Ok(())
}
