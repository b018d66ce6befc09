//! Greeting dialog shown on start.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GreetingConfig {
    pub enabled: bool,
    pub text: String,
    /// Delay before the greeting starts typing (valid range: 0-10000).
    pub delay_ms: u32,
}

impl Default for GreetingConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            text: "🪿 Honk! Are we adding something shiny and new, or chasing down a sneaky bug? \
                   And where in this messy nest of code are we poking today?"
                .into(),
            delay_ms: 500,
        }
    }
}
