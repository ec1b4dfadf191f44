//! Log setup for the module.
//!
//! The module shares a process with the host, which may or may not have
//! installed a subscriber of its own; `try_init` keeps the entry handshake
//! indifferent to that.

use tracing_subscriber::EnvFilter;

pub(crate) fn init() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init();
}
