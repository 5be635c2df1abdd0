//! Subscriber installation for the `seek` binary.
//!
//! Library crates only emit events; installing a subscriber is the
//! binary's job.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Environment variable holding the filter directives, e.g.
/// `SEEK_LOG=seek_eval=trace`. `RUST_LOG` is read when it is unset.
pub const LOG_ENV_VAR: &str = "SEEK_LOG";

/// Install the hierarchical tracing subscriber.
///
/// Does nothing unless `SEEK_LOG` or `RUST_LOG` is set. Safe to call more
/// than once.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{prelude::*, EnvFilter};

        let Some(directives) = filter_directives() else {
            return;
        };

        let tree = tracing_tree::HierarchicalLayer::new(2)
            .with_writer(std::io::stderr)
            .with_targets(true)
            .with_bracketed_fields(true);

        tracing_subscriber::registry()
            .with(tree)
            .with(EnvFilter::new(directives))
            .init();
    });
}

fn filter_directives() -> Option<String> {
    std::env::var(LOG_ENV_VAR)
        .or_else(|_| std::env::var("RUST_LOG"))
        .ok()
        .filter(|s| !s.trim().is_empty())
}
