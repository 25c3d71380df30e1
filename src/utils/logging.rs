use std::sync::Once;

use tracing_subscriber::{EnvFilter, fmt};

static TRACING_INIT: Once = Once::new();

fn default_directive(debug: bool) -> &'static str {
    if debug { "datekeeper=debug" } else { "warn" }
}

/// Install the global subscriber on stderr. `RUST_LOG` takes precedence.
pub(crate) fn init_tracing(debug: bool) {
    TRACING_INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new(default_directive(debug)));

        fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .init();
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn debug_enables_crate_logs() {
        assert_eq!(default_directive(true), "datekeeper=debug");
        assert_eq!(default_directive(false), "warn");
    }

    #[test]
    fn init_is_idempotent() {
        init_tracing(false);
        init_tracing(true);
    }
}
