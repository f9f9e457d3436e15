//! Feature flags configuration

use serde::Deserialize;

/// Feature flags for enabling/disabling functionality
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct FeatureFlags {
    /// Only allow status changes along the booking lifecycle
    /// (pending -> confirmed -> completed, pending|confirmed -> cancelled).
    /// Off by default: any known status may be set from any other.
    #[serde(default)]
    pub strict_status_transitions: bool,

    /// Enable HTTP request tracing
    #[serde(default = "default_enable_tracing")]
    pub enable_tracing: bool,
}

impl Default for FeatureFlags {
    fn default() -> Self {
        Self {
            strict_status_transitions: false,
            enable_tracing: default_enable_tracing(),
        }
    }
}

fn default_enable_tracing() -> bool {
    true
}
