//! Sound cue settings.

use serde::{Deserialize, Serialize};

/// Dialog and honk clip settings. Volumes use the player's 0-100 scale.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SoundsConfig {
    pub enabled: bool,
    /// Directory holding `dialog/` clips and honk files.
    pub assets_dir: String,
    pub dialog_volume: u32,
    pub honk_volume: u32,
    /// Number of `honkN.mp3` files (valid range: 1-8).
    pub honk_variants: u32,
}

impl Default for SoundsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            assets_dir: "assets".into(),
            dialog_volume: 20,
            honk_volume: 100,
            honk_variants: 2,
        }
    }
}
