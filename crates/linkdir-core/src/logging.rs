// SPDX-License-Identifier: AGPL-3.0
// Linkdir Core - Logging setup for host applications

use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber filtered by `RUST_LOG`, with this crate at info.
///
/// Returns an error if a global subscriber is already set.
pub fn init_logging() -> Result<(), Box<dyn std::error::Error + Send + Sync>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("linkdir_core=info".parse()?),
        )
        .try_init()?;

    tracing::info!("Starting Linkdir v{}", env!("CARGO_PKG_VERSION"));
    Ok(())
}
