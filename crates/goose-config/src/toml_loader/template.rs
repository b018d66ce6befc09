//! Default TOML config template with inline documentation comments.

/// Generate the default TOML config content with comments.
pub(crate) fn default_config_toml() -> &'static str {
    r##"# Mr. Goose Configuration
# Schema version 1
# Only override what you want to change -- missing fields use defaults.

[typewriter]
# cadence_ms = 40        # 1-1000, delay between revealed characters
# cue_interval = 3       # 1-64, sound cue every Nth character
# cue_policy = "random"  # random, fixed, cycle
# cue_variants = 4       # 1-16, number of dialog clips
# fixed_cue = 1          # clip used by the fixed policy

[server]
# url = "ws://localhost:3000"
# endpoint = "/help"
# connect_timeout_secs = 10   # 1-120

[sounds]
# enabled = true
# assets_dir = "assets"
# dialog_volume = 20     # 0-100
# honk_volume = 100      # 0-100
# honk_variants = 2      # 1-8

[greeting]
# enabled = true
# delay_ms = 500         # 0-10000
# text = "🪿 Honk! Are we adding something shiny and new, or chasing down a sneaky bug?"

[logging]
# level = "INFO"         # TRACE, DEBUG, INFO, WARNING, ERROR
"##
}
