//! `tracing` setup for the command-line driver.
//!
//! Level defaults to `info` for this crate and can be overridden with
//! `RUST_LOG` (e.g. `RUST_LOG=dish_grouping=debug` to see every improvement).

use std::sync::OnceLock;

use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: OnceLock<()> = OnceLock::new();

const DEFAULT_DIRECTIVE: &str = "dish_grouping=info";

fn filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber. Only the first call has effect.
pub fn init() {
    INIT.get_or_init(|| {
        let _ = tracing_subscriber::registry()
            .with(filter())
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init();
    });
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_is_idempotent() {
        init();
        init();
        tracing::info!("logging initialised twice");
    }
}
