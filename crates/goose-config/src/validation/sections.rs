//! Per-section validators.

use crate::schema::{CuePolicy, GooseConfig};

use super::helpers::validate_range;

pub(crate) fn validate_typewriter(errors: &mut Vec<String>, config: &GooseConfig) {
    let tw = &config.typewriter;
    validate_range(errors, "typewriter.cadence_ms", tw.cadence_ms, 1, 1000);
    validate_range(errors, "typewriter.cue_interval", tw.cue_interval, 1, 64);
    validate_range(errors, "typewriter.cue_variants", tw.cue_variants, 1, 16);
    if tw.cue_policy == CuePolicy::Fixed {
        validate_range(
            errors,
            "typewriter.fixed_cue",
            tw.fixed_cue,
            1,
            tw.cue_variants.max(1),
        );
    }
}

pub(crate) fn validate_server(errors: &mut Vec<String>, config: &GooseConfig) {
    let server = &config.server;
    if !(server.url.starts_with("ws://") || server.url.starts_with("wss://")) {
        errors.push(format!(
            "server.url = {:?} must start with ws:// or wss://",
            server.url
        ));
    }
    validate_range(
        errors,
        "server.connect_timeout_secs",
        server.connect_timeout_secs,
        1,
        120,
    );
}

pub(crate) fn validate_sounds(errors: &mut Vec<String>, config: &GooseConfig) {
    let sounds = &config.sounds;
    validate_range(errors, "sounds.dialog_volume", sounds.dialog_volume, 0, 100);
    validate_range(errors, "sounds.honk_volume", sounds.honk_volume, 0, 100);
    validate_range(errors, "sounds.honk_variants", sounds.honk_variants, 1, 8);
}

pub(crate) fn validate_greeting(errors: &mut Vec<String>, config: &GooseConfig) {
    validate_range(
        errors,
        "greeting.delay_ms",
        config.greeting.delay_ms,
        0,
        10_000,
    );
}
