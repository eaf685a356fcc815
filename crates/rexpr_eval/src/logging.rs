//! Diagnostic logging setup.
//!
//! The evaluator emits `tracing` events (`debug!` for construction
//! rejections and `NOT` failures, `trace!` for default-result fallbacks and
//! coercions). Nothing is printed unless a subscriber is installed.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Install a formatting subscriber filtered by `RUST_LOG`.
///
/// Does nothing when `RUST_LOG` is unset, or when the host already installed
/// a global subscriber. Safe to call more than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Err means a global subscriber is already set; keep it.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_init_is_harmless() {
        init_tracing();
        init_tracing();
        tracing::debug!("still logging after repeated init");
    }
}
