//! Tracing initialization.

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Nothing is installed unless `RUST_LOG` is
/// set, e.g. `RUST_LOG=lexa_lexer=trace`. Setting `LEXA_LOG_TREE` switches
/// from flat lines to an indented span tree. Output always goes to stderr.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        if std::env::var("RUST_LOG").is_err() {
            return;
        }

        let filter = EnvFilter::from_default_env();
        let tree = std::env::var_os("LEXA_LOG_TREE").is_some();

        let tree_layer = tree.then(|| {
            tracing_tree::HierarchicalLayer::new(2)
                .with_targets(true)
                .with_bracketed_fields(true)
                .with_writer(std::io::stderr)
        });
        let flat_layer = (!tree).then(|| {
            fmt::layer()
                .with_target(true)
                .with_level(true)
                .with_writer(std::io::stderr)
        });

        tracing_subscriber::registry()
            .with(tree_layer)
            .with(flat_layer)
            .with(filter)
            .init();
    });
}
