use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::Path;

use crate::core::pagination::PAGE_SIZE;
use crate::services::dog_api::DEFAULT_BASE_URL;

/// Application configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub server: ServerSettings,
    #[serde(default)]
    pub upstream: UpstreamSettings,
    #[serde(default)]
    pub session: SessionSettings,
    #[serde(default)]
    pub search: SearchSettings,
    #[serde(default)]
    pub logging: LoggingSettings,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerSettings {
    pub host: String,
    pub port: u16,
    pub workers: Option<usize>,
}

/// Dog catalog service
#[derive(Debug, Clone, Deserialize)]
pub struct UpstreamSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for UpstreamSettings {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

fn default_base_url() -> String { DEFAULT_BASE_URL.to_string() }
fn default_timeout_secs() -> u64 { 30 }

#[derive(Debug, Clone, Deserialize)]
pub struct SessionSettings {
    #[serde(default = "default_session_ttl_secs")]
    pub ttl_secs: u64,
    #[serde(default = "default_max_sessions")]
    pub max_sessions: u64,
    #[serde(default = "default_cookie_name")]
    pub cookie_name: String,
}

impl Default for SessionSettings {
    fn default() -> Self {
        Self {
            ttl_secs: default_session_ttl_secs(),
            max_sessions: default_max_sessions(),
            cookie_name: default_cookie_name(),
        }
    }
}

// The catalog's auth cookie lives for one hour
fn default_session_ttl_secs() -> u64 { 3600 }
fn default_max_sessions() -> u64 { 10_000 }
fn default_cookie_name() -> String { "session_id".to_string() }

#[derive(Debug, Clone, Deserialize)]
pub struct SearchSettings {
    #[serde(default = "default_page_size")]
    pub page_size: i64,
}

impl Default for SearchSettings {
    fn default() -> Self {
        Self { page_size: default_page_size() }
    }
}

fn default_page_size() -> i64 { PAGE_SIZE }

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingSettings {
    #[serde(default = "default_log_level")]
    pub level: String,
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl Default for LoggingSettings {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String { "info".to_string() }
fn default_log_format() -> String { "json".to_string() }

impl Settings {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded in the following order (later overrides earlier):
    /// 1. Default values in the struct
    /// 2. Configuration file (config/default.toml)
    /// 3. Local overrides (config/local.toml)
    /// 4. Environment variables (prefixed with SHELTER__)
    pub fn load() -> Result<Self, ConfigError> {
        Config::builder()
            .set_default("server.host", "0.0.0.0")?
            .set_default("server.port", 8080)?
            .add_source(File::with_name("config/default").required(false))
            .add_source(File::with_name("config/local").required(false))
            // e.g., SHELTER__SERVER__PORT -> server.port
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }

    /// Load configuration from a custom path
    pub fn load_from<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        Config::builder()
            .add_source(File::from(path.as_ref()))
            .add_source(env_source())
            .build()?
            .try_deserialize()
    }
}

fn env_source() -> Environment {
    Environment::with_prefix("SHELTER")
        .prefix_separator("__")
        .separator("__")
        .try_parsing(true)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_sections() {
        let upstream = UpstreamSettings::default();
        assert_eq!(upstream.base_url, "https://frontend-take-home-service.fetch.com");
        assert_eq!(upstream.timeout_secs, 30);

        let session = SessionSettings::default();
        assert_eq!(session.ttl_secs, 3600);
        assert_eq!(session.cookie_name, "session_id");

        assert_eq!(SearchSettings::default().page_size, 25);
    }

    #[test]
    fn test_default_logging() {
        let logging = LoggingSettings::default();
        assert_eq!(logging.level, "info");
        assert_eq!(logging.format, "json");
    }

    #[test]
    fn test_load_from_file() {
        let path = std::env::temp_dir().join(format!("shelter-config-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 9000\n\n[search]\npage_size = 10\n"
        )
        .unwrap();

        let settings = Settings::load_from(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(settings.server.port, 9000);
        assert_eq!(settings.search.page_size, 10);
        assert_eq!(settings.session.max_sessions, 10_000);
    }

    #[test]
    fn test_env_overrides_file() {
        let path = std::env::temp_dir().join(format!("shelter-config-{}.toml", uuid::Uuid::new_v4()));
        let mut file = std::fs::File::create(&path).unwrap();
        writeln!(
            file,
            "[server]\nhost = \"127.0.0.1\"\nport = 9100\n\n[session]\ncookie_name = \"from_file\"\n\n[upstream]\ntimeout_secs = 30\n"
        )
        .unwrap();

        std::env::set_var("SHELTER__SESSION__COOKIE_NAME", "sid");
        std::env::set_var("SHELTER__UPSTREAM__TIMEOUT_SECS", "7");
        let settings = Settings::load_from(&path);
        std::env::remove_var("SHELTER__SESSION__COOKIE_NAME");
        std::env::remove_var("SHELTER__UPSTREAM__TIMEOUT_SECS");
        std::fs::remove_file(&path).ok();

        let settings = settings.unwrap();
        assert_eq!(settings.session.cookie_name, "sid");
        assert_eq!(settings.upstream.timeout_secs, 7);
        assert_eq!(settings.session.ttl_secs, 3600);
    }
}
