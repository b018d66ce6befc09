//! Typewriter pacing and sound cue configuration.

use serde::{Deserialize, Serialize};

/// How the dialog clip is chosen for each cue.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
#[derive(Default)]
pub enum CuePolicy {
    #[default]
    Random,
    Fixed,
    Cycle,
}

/// Typewriter reveal settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct TypewriterSchemaConfig {
    /// Delay between revealed characters (valid range: 1-1000).
    pub cadence_ms: u32,
    /// Cue every Nth revealed character (valid range: 1-64).
    pub cue_interval: u32,
    pub cue_policy: CuePolicy,
    /// Number of dialog clips to pick from (valid range: 1-16).
    pub cue_variants: u32,
    /// Clip used by the `fixed` policy.
    pub fixed_cue: u32,
}

impl Default for TypewriterSchemaConfig {
    fn default() -> Self {
        Self {
            cadence_ms: 40,
            cue_interval: 3,
            cue_policy: CuePolicy::Random,
            cue_variants: 4,
            fixed_cue: 1,
        }
    }
}
