use serde::{Deserialize, Serialize};

use crate::trace;

/// Per-instance configuration for an [`Entity`](crate::Entity).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EntityConfig {
    /// Whether operation traces are emitted for this instance
    pub trace: TraceMode,
}

/// How an instance decides whether to emit operation traces.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TraceMode {
    /// Follow the process-wide flag
    #[default]
    Inherit,
    /// Always trace, regardless of the process-wide flag
    Enabled,
    /// Never trace, regardless of the process-wide flag
    Disabled,
}

impl EntityConfig {
    pub fn new(trace: TraceMode) -> Self {
        Self { trace }
    }

    /// Configuration that traces this instance unconditionally.
    pub fn traced() -> Self {
        Self::new(TraceMode::Enabled)
    }

    /// Configuration that silences this instance unconditionally.
    pub fn silent() -> Self {
        Self::new(TraceMode::Disabled)
    }

    /// Resolve the trace mode against the process-wide flag.
    pub fn tracing_active(&self) -> bool {
        match self.trace {
            TraceMode::Inherit => trace::trace_enabled(),
            TraceMode::Enabled => true,
            TraceMode::Disabled => false,
        }
    }
}
