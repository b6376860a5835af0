//! Operation tracing.
//!
//! Every container operation reports itself through `tracing` when tracing is
//! active for that instance. Activity is resolved per instance from its
//! [`EntityConfig`]; instances left on [`TraceMode::Inherit`] follow the
//! process-wide flag below, which defaults to off.
//!
//! [`TraceMode::Inherit`]: crate::TraceMode::Inherit

use std::sync::atomic::{AtomicBool, Ordering};

use tracing::{debug, warn};

use crate::config::EntityConfig;

static TRACE_ENABLED: AtomicBool = AtomicBool::new(false);

/// Turn the process-wide trace flag on or off.
///
/// Affects every instance on `TraceMode::Inherit` from now on.
pub fn set_trace_enabled(enabled: bool) {
    TRACE_ENABLED.store(enabled, Ordering::Relaxed);
}

/// Current value of the process-wide trace flag.
pub fn trace_enabled() -> bool {
    TRACE_ENABLED.load(Ordering::Relaxed)
}

/// Record that `op` ran on an instance with the given config.
pub(crate) fn operation(config: &EntityConfig, op: &'static str) {
    if config.tracing_active() {
        debug!(op, "Entity operation");
    }
}

/// Record that a validated set was rejected.
pub(crate) fn rejected(config: &EntityConfig) {
    if config.tracing_active() {
        warn!(
            op = "set",
            "Proposed value violates the validator; keeping the current value"
        );
    }
}
