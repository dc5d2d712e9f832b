use tracing::Level;
use std::sync::Once;

static INIT: Once = Once::new();

/// Install the global fmt subscriber once. Later calls are no-ops.
pub fn init_logging(verbose: bool) {
    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(if verbose { Level::DEBUG } else { Level::INFO })
                .with_target(false)
                .init();
        });
    }
}
