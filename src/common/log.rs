//! Opt-in log output for hosts that want to see boundary diagnostics.
//!
//! The library only emits `tracing` events. Nothing is printed until the host
//! calls [`init`] (or installs its own subscriber).

use tracing_subscriber::EnvFilter;

use super::config::{BridgeCfg, LogFormat};

/// Install a global fmt subscriber described by `cfg`.
///
/// Returns `false` when a subscriber was already installed, in which case the
/// existing one is left in place.
pub fn init(cfg: &BridgeCfg) -> bool {
    let filter = EnvFilter::try_new(&cfg.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true);

    let installed = match cfg.log_format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };
    installed.is_ok()
}
