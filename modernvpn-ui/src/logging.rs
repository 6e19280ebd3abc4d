//! Tracing subscriber setup for the browser
//!
//! Events from the core crate are written to the devtools console.

use tracing::Level;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tracing_wasm::{WASMLayer, WASMLayerConfigBuilder};

/// Install the global subscriber. Returns `false` if one was already set.
pub fn init() -> bool {
    let config = WASMLayerConfigBuilder::new()
        .set_max_level(Level::INFO)
        .set_report_logs_in_timings(false)
        .build();

    tracing_subscriber::registry()
        .with(WASMLayer::new(config))
        .try_init()
        .is_ok()
}
