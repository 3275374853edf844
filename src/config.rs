//! Loading and validation of the JSON configuration file.
//!
//! The file is a flat JSON object:
//!
//! ```json
//! {
//!     "username": "user",
//!     "password": "secret",
//!     "hostname": "host1.domain.com,group1",
//!     "interface": "eth0"
//! }
//! ```
//!
//! `hostname` may be a comma-separated list of hostnames and groups; it is
//! passed to the provider verbatim. Unknown fields are ignored.

use std::{fs, path::Path};

use serde::Deserialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("could not read config file: {0}")]
    Read(#[from] std::io::Error),
    #[error("could not parse config file: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("config field `{field}` is missing or empty")]
    Invalid { field: &'static str },
}

/// The settings for a single update run. Immutable once loaded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct Config {
    /// no-ip.com account name, sent via HTTP basic auth
    #[serde(default)]
    pub username: String,
    /// no-ip.com account password
    #[serde(default)]
    pub password: String,
    /// Hostname(s) to update, comma-separated for multiple targets
    #[serde(default)]
    pub hostname: String,
    /// Name of the network interface to take the IPv4 address from, e.g. `eth0`
    #[serde(default)]
    pub interface: String,
}

impl Config {
    /// Read and parse the config file at `path`.
    ///
    /// Parsing is purely structural: missing fields come back as empty
    /// strings and are only rejected by [`Config::validate()`].
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let data = fs::read_to_string(path)?;
        let cfg = serde_json::from_str(&data)?;
        Ok(cfg)
    }

    /// Ensure that all fields are actually usable.
    ///
    /// An empty username or password would only fail later with a provider
    /// rejection, and an empty hostname/interface can never succeed, so we
    /// fail fast here instead.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.username.is_empty() {
            return Err(ConfigError::Invalid { field: "username" });
        }
        if self.password.is_empty() {
            return Err(ConfigError::Invalid { field: "password" });
        }
        if self.hostname.is_empty() {
            return Err(ConfigError::Invalid { field: "hostname" });
        }
        if self.interface.is_empty() {
            return Err(ConfigError::Invalid { field: "interface" });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    fn write_config(content: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn loads_a_complete_config() {
        let file = write_config(
            r#"{
                "username": "user",
                "password": "secret",
                "hostname": "host1.domain.com,group1",
                "interface": "eth1"
            }"#,
        );
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(
            cfg,
            Config {
                username: "user".to_string(),
                password: "secret".to_string(),
                hostname: "host1.domain.com,group1".to_string(),
                interface: "eth1".to_string(),
            }
        );
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn missing_fields_parse_as_empty_strings() {
        let file = write_config(r#"{"username": "user"}"#);
        let cfg = Config::load(file.path()).unwrap();
        assert_eq!(cfg.username, "user");
        assert_eq!(cfg.password, "");
        assert_eq!(cfg.hostname, "");
        assert_eq!(cfg.interface, "");
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let file = write_config(
            r#"{"username": "u", "password": "p", "hostname": "h", "interface": "eth0", "ttl": 300}"#,
        );
        assert!(Config::load(file.path()).is_ok());
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = write_config("{not json");
        assert!(matches!(
            Config::load(file.path()),
            Err(ConfigError::Parse(_))
        ));
    }

    #[test]
    fn missing_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("does-not-exist.json");
        assert!(matches!(Config::load(path), Err(ConfigError::Read(_))));
    }

    #[test]
    fn validate_rejects_empty_fields() {
        let file = write_config(r#"{"username": "user", "password": "secret"}"#);
        let cfg = Config::load(file.path()).unwrap();
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::Invalid { field: "hostname" })
        ));
    }
}
