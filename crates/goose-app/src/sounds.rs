//! Sound cue resolution.
//!
//! Maps cue selectors to clip files under the assets directory. Playing
//! them is left to an external player; here every cue is resolved and
//! logged so a host can pick it up.

use std::path::PathBuf;

use goose_config::schema::SoundsConfig;
use rand::Rng;

/// A clip ready to hand to a player.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clip {
    pub path: PathBuf,
    pub volume: u32,
}

pub struct SoundCues {
    config: SoundsConfig,
}

impl SoundCues {
    pub fn new(config: SoundsConfig) -> Self {
        Self { config }
    }

    pub fn dialog_clip(&self, selector: u8) -> Clip {
        Clip {
            path: PathBuf::from(&self.config.assets_dir)
                .join("dialog")
                .join(format!("Retro_Single_v{selector}_wav.wav")),
            volume: self.config.dialog_volume,
        }
    }

    pub fn honk_clip(&self, variant: u32) -> Clip {
        Clip {
            path: PathBuf::from(&self.config.assets_dir).join(format!("honk{variant}.mp3")),
            volume: self.config.honk_volume,
        }
    }

    pub fn squawk_clip(&self) -> Clip {
        Clip {
            path: PathBuf::from(&self.config.assets_dir).join("squawk1.mp3"),
            volume: self.config.honk_volume,
        }
    }

    /// Typewriter cue.
    pub fn play_dialog(&self, selector: u8) {
        if !self.config.enabled {
            return;
        }
        let clip = self.dialog_clip(selector);
        tracing::trace!(clip = %clip.path.display(), volume = clip.volume, "Dialog cue");
    }

    /// Startup squawk.
    pub fn squawk(&self) -> Option<Clip> {
        if !self.config.enabled {
            return None;
        }
        let clip = self.squawk_clip();
        tracing::debug!(clip = %clip.path.display(), volume = clip.volume, "Squawk");
        Some(clip)
    }

    /// Random honk, played when the feature prompt shows and when a
    /// request is submitted.
    pub fn honk(&self) -> Option<Clip> {
        if !self.config.enabled {
            return None;
        }
        let variant = rand::thread_rng().gen_range(1..=self.config.honk_variants.max(1));
        let clip = self.honk_clip(variant);
        tracing::debug!(clip = %clip.path.display(), volume = clip.volume, "Honk");
        Some(clip)
    }
}
