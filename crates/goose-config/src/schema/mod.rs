//! Configuration schema types for Mr. Goose.
//!
//! All structs use `serde(default)` so partial configs work correctly.
//! Missing fields are filled with the companion's stock behavior.

mod greeting;
mod server;
mod sounds;
mod system;
mod typewriter;

pub use greeting::*;
pub use server::*;
pub use sounds::*;
pub use system::*;
pub use typewriter::*;

use serde::{Deserialize, Serialize};

/// Current config schema version.
pub const CONFIG_SCHEMA_VERSION: u32 = 1;

/// Root configuration for Mr. Goose.
///
/// Only override what you want to change.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
#[derive(Default)]
pub struct GooseConfig {
    pub typewriter: TypewriterSchemaConfig,
    pub server: ServerConfig,
    pub sounds: SoundsConfig,
    pub greeting: GreetingConfig,
    pub logging: LoggingConfig,
}
