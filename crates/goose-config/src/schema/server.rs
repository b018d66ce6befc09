//! Assistant service connection settings.

use serde::{Deserialize, Serialize};

/// Where feature requests are sent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Base websocket URL (`ws://` or `wss://`).
    pub url: String,
    /// Path of the help endpoint, appended to `url`.
    pub endpoint: String,
    /// Connect timeout in seconds (valid range: 1-120).
    pub connect_timeout_secs: u32,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            url: "ws://localhost:3000".into(),
            endpoint: "/help".into(),
            connect_timeout_secs: 10,
        }
    }
}

impl ServerConfig {
    /// Full URL of the help endpoint.
    pub fn help_url(&self) -> String {
        format!(
            "{}/{}",
            self.url.trim_end_matches('/'),
            self.endpoint.trim_start_matches('/')
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_help_url() {
        assert_eq!(ServerConfig::default().help_url(), "ws://localhost:3000/help");
    }

    #[test]
    fn help_url_normalizes_slashes() {
        let config = ServerConfig {
            url: "wss://goose.example/".into(),
            endpoint: "assist".into(),
            ..Default::default()
        };
        assert_eq!(config.help_url(), "wss://goose.example/assist");
    }
}
