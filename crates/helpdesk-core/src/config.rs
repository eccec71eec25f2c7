//! Client configuration model.

use serde::{Deserialize, Serialize};

/// Base origin of the remote helpdesk API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:4000";

/// Client configuration, loaded from `config.toml` when present.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Config {
    /// Base origin for all API requests.
    #[serde(default = "default_base_url")]
    pub base_url: String,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_fields_take_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.base_url, DEFAULT_BASE_URL);
    }

    #[test]
    fn explicit_base_url_wins() {
        let config: Config = toml::from_str("base_url = \"https://desk.example.com\"").unwrap();
        assert_eq!(config.base_url, "https://desk.example.com");
    }
}
