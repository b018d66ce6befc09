//! Builds dialog components from the loaded config.

use std::time::Duration;

use goose_config::schema::{CuePolicy, TypewriterSchemaConfig};
use goose_dialog::{CueStrategy, CyclingCue, FixedCue, RandomCue, TypewriterConfig};
use tracing_subscriber::filter::Directive;
use tracing_subscriber::EnvFilter;

pub fn typewriter_config(schema: &TypewriterSchemaConfig) -> TypewriterConfig {
    TypewriterConfig {
        cadence: Duration::from_millis(u64::from(schema.cadence_ms)),
        cue_interval: schema.cue_interval as usize,
    }
}

pub fn cue_strategy(schema: &TypewriterSchemaConfig) -> Box<dyn CueStrategy> {
    let variants = u8::try_from(schema.cue_variants).unwrap_or(u8::MAX);
    match schema.cue_policy {
        CuePolicy::Random => Box::new(RandomCue::new(variants)),
        CuePolicy::Fixed => Box::new(FixedCue(u8::try_from(schema.fixed_cue).unwrap_or(1))),
        CuePolicy::Cycle => Box::new(CyclingCue::new(variants)),
    }
}

/// Tracing directive: CLI flag, then config, then the built-in default.
pub fn log_directive(cli_level: Option<&str>, config: Option<&goose_config::GooseConfig>) -> String {
    match (cli_level, config) {
        (Some(level), _) => level.to_owned(),
        (None, Some(config)) => config.logging.level.as_directive().to_owned(),
        (None, None) => "goose=info".to_owned(),
    }
}

/// `RUST_LOG` plus each comma-separated piece of `directive`. Pieces that
/// fail to parse are skipped; if none parse, `goose=info` is used.
pub fn env_filter(directive: &str) -> EnvFilter {
    let parsed: Vec<Directive> = directive
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .filter_map(|piece| piece.parse().ok())
        .collect();

    let mut filter = EnvFilter::from_default_env();
    if parsed.is_empty() {
        if let Ok(fallback) = "goose=info".parse::<Directive>() {
            filter = filter.add_directive(fallback);
        }
    }
    for d in parsed {
        filter = filter.add_directive(d);
    }
    filter
}

#[cfg(test)]
mod tests {
    use super::*;
    use goose_config::schema::LogLevel;
    use goose_config::GooseConfig;

    #[test]
    fn default_typewriter_pacing() {
        let config = typewriter_config(&TypewriterSchemaConfig::default());
        assert_eq!(config.cadence, Duration::from_millis(40));
        assert_eq!(config.cue_interval, 3);
    }

    #[test]
    fn fixed_policy_uses_fixed_cue() {
        let schema = TypewriterSchemaConfig {
            cue_policy: CuePolicy::Fixed,
            fixed_cue: 3,
            ..Default::default()
        };
        let mut cues = cue_strategy(&schema);
        assert_eq!(cues.select(), 3);
        assert_eq!(cues.select(), 3);
    }

    #[test]
    fn cycle_policy_walks_variants() {
        let schema = TypewriterSchemaConfig {
            cue_policy: CuePolicy::Cycle,
            cue_variants: 2,
            ..Default::default()
        };
        let mut cues = cue_strategy(&schema);
        let picked: Vec<u8> = (0..4).map(|_| cues.select()).collect();
        assert_eq!(picked, vec![1, 2, 1, 2]);
    }

    #[test]
    fn random_policy_stays_in_range() {
        let mut cues = cue_strategy(&TypewriterSchemaConfig::default());
        for _ in 0..50 {
            assert!((1..=4).contains(&cues.select()));
        }
    }

    #[test]
    fn log_directive_precedence() {
        let mut config = GooseConfig::default();
        config.logging.level = LogLevel::Debug;
        assert_eq!(log_directive(Some("trace"), Some(&config)), "trace");
        assert_eq!(log_directive(None, Some(&config)), "goose=debug");
        assert_eq!(log_directive(None, None), "goose=info");
    }

    #[test]
    fn every_config_level_is_a_valid_directive() {
        for level in [
            LogLevel::Trace,
            LogLevel::Debug,
            LogLevel::Info,
            LogLevel::Warning,
            LogLevel::Error,
        ] {
            let directive = level.as_directive();
            assert!(
                directive.parse::<Directive>().is_ok(),
                "{directive} does not parse"
            );
        }
    }

    #[test]
    fn env_filter_applies_every_piece() {
        let filter = env_filter("goose=debug, tokio_tungstenite=warn");
        let shown = filter.to_string();
        assert!(shown.contains("goose=debug"), "{shown}");
        assert!(shown.contains("tokio_tungstenite=warn"), "{shown}");
    }

    #[test]
    fn env_filter_falls_back_on_garbage() {
        let shown = env_filter("goose=loud").to_string();
        assert!(shown.contains("goose=info"), "{shown}");
    }
}
