//! Structured logging setup for hosts embedding the kernel.
//!
//! The kernel itself only emits `tracing` events: construction, mutation and
//! crossover summaries at `debug`, every propagation pass at `trace`, and
//! rejected configurations at `warn`.

use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for logging.
///
/// Honours `RUST_LOG` and falls back to `info`. Calling it again is harmless.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing::subscriber::set_global_default(
        tracing_subscriber::FmtSubscriber::builder()
            .with_env_filter(filter)
            .finish(),
    )
    .ok();
}
