//! Environment-backed configuration.
//!
//! Most settings have defaults. Override with `SIMCHECK_*` environment variables.

pub mod error;

#[cfg(test)]
mod tests;

pub use error::ConfigError;

use std::env;
use std::net::IpAddr;
use std::path::PathBuf;
use std::time::Duration;

use crate::constants::{DEFAULT_FLAG_THRESHOLD, DEFAULT_MAX_KEYWORDS, percent_to_fraction};

/// Server configuration loaded from environment variables.
///
/// Use [`Config::from_env`] to read `SIMCHECK_*` overrides on top of defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// HTTP server port. Default: `8080`.
    pub port: u16,

    /// IP address to bind to. Default: `127.0.0.1`.
    pub bind_addr: IpAddr,

    /// Directory holding the local reference corpus. Default: `./source_files`.
    pub corpus_path: PathBuf,

    /// File extensions (without dot) eligible for comparison. Default: `py`, `txt`.
    pub corpus_extensions: Vec<String>,

    /// YAML user directory. Default: `./users.yml`.
    pub users_path: PathBuf,

    /// Flagging threshold as a fraction. Configured in percent; default `80`.
    pub flag_threshold: f64,

    /// Max keywords in a remote search query. Default: `5`.
    pub max_keywords: usize,

    /// GitHub token; remote search is disabled without one.
    pub github_token: Option<String>,

    /// GitHub API base URL. Default: `https://api.github.com`.
    pub github_api_url: String,

    /// Max files requested per remote search. Default: `5`.
    pub remote_max_files: u32,

    /// Upper bound on one remote search call. Default: `10s`.
    pub remote_timeout: Duration,

    /// Remote result cache TTL. Default: `1h`.
    pub remote_cache_ttl: Duration,

    /// Max cached remote queries. Default: `1_000`.
    pub remote_cache_capacity: u64,
}

/// Default GitHub API URL used when `SIMCHECK_GITHUB_API_URL` is not set.
pub const DEFAULT_GITHUB_API_URL: &str = "https://api.github.com";

impl Default for Config {
    fn default() -> Self {
        Self {
            port: 8080,
            bind_addr: IpAddr::V4(std::net::Ipv4Addr::new(127, 0, 0, 1)),
            corpus_path: PathBuf::from("./source_files"),
            corpus_extensions: vec!["py".to_string(), "txt".to_string()],
            users_path: PathBuf::from("./users.yml"),
            flag_threshold: DEFAULT_FLAG_THRESHOLD,
            max_keywords: DEFAULT_MAX_KEYWORDS,
            github_token: None,
            github_api_url: DEFAULT_GITHUB_API_URL.to_string(),
            remote_max_files: 5,
            remote_timeout: Duration::from_secs(10),
            remote_cache_ttl: Duration::from_secs(3600),
            remote_cache_capacity: 1_000,
        }
    }
}

impl Config {
    pub const ENV_PORT: &'static str = "SIMCHECK_PORT";
    const ENV_BIND_ADDR: &'static str = "SIMCHECK_BIND_ADDR";
    const ENV_CORPUS_PATH: &'static str = "SIMCHECK_CORPUS_PATH";
    const ENV_CORPUS_EXTENSIONS: &'static str = "SIMCHECK_CORPUS_EXTENSIONS";
    const ENV_USERS_PATH: &'static str = "SIMCHECK_USERS_PATH";
    const ENV_FLAG_THRESHOLD: &'static str = "SIMCHECK_FLAG_THRESHOLD";
    const ENV_MAX_KEYWORDS: &'static str = "SIMCHECK_MAX_KEYWORDS";
    const ENV_GITHUB_TOKEN: &'static str = "SIMCHECK_GITHUB_TOKEN";
    const ENV_GITHUB_API_URL: &'static str = "SIMCHECK_GITHUB_API_URL";
    const ENV_REMOTE_MAX_FILES: &'static str = "SIMCHECK_REMOTE_MAX_FILES";
    const ENV_REMOTE_TIMEOUT_SECS: &'static str = "SIMCHECK_REMOTE_TIMEOUT_SECS";
    const ENV_REMOTE_CACHE_TTL_SECS: &'static str = "SIMCHECK_REMOTE_CACHE_TTL_SECS";
    const ENV_REMOTE_CACHE_CAPACITY: &'static str = "SIMCHECK_REMOTE_CACHE_CAPACITY";

    /// Loads configuration from environment variables (falling back to defaults).
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let port = Self::parse_port_from_env(defaults.port)?;
        let bind_addr = Self::parse_bind_addr_from_env(defaults.bind_addr)?;
        let corpus_path = Self::parse_path_from_env(Self::ENV_CORPUS_PATH, defaults.corpus_path);
        let corpus_extensions = Self::parse_extensions_from_env(defaults.corpus_extensions);
        let users_path = Self::parse_path_from_env(Self::ENV_USERS_PATH, defaults.users_path);
        let flag_threshold = Self::parse_threshold_from_env(defaults.flag_threshold)?;
        let max_keywords = Self::parse_u64_from_env(
            Self::ENV_MAX_KEYWORDS,
            defaults.max_keywords as u64,
        ) as usize;
        let github_token = Self::parse_optional_string_from_env(Self::ENV_GITHUB_TOKEN);
        let github_api_url =
            Self::parse_string_from_env(Self::ENV_GITHUB_API_URL, defaults.github_api_url);
        let remote_max_files = Self::parse_u64_from_env(
            Self::ENV_REMOTE_MAX_FILES,
            u64::from(defaults.remote_max_files),
        )
        .min(u64::from(u32::MAX)) as u32;
        let remote_timeout = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_REMOTE_TIMEOUT_SECS,
            defaults.remote_timeout.as_secs(),
        ));
        let remote_cache_ttl = Duration::from_secs(Self::parse_u64_from_env(
            Self::ENV_REMOTE_CACHE_TTL_SECS,
            defaults.remote_cache_ttl.as_secs(),
        ));
        let remote_cache_capacity = Self::parse_u64_from_env(
            Self::ENV_REMOTE_CACHE_CAPACITY,
            defaults.remote_cache_capacity,
        );

        Ok(Self {
            port,
            bind_addr,
            corpus_path,
            corpus_extensions,
            users_path,
            flag_threshold,
            max_keywords,
            github_token,
            github_api_url,
            remote_max_files,
            remote_timeout,
            remote_cache_ttl,
            remote_cache_capacity,
        })
    }

    /// Validates paths and basic invariants (does not create directories).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.corpus_path.exists() && !self.corpus_path.is_dir() {
            return Err(ConfigError::NotADirectory {
                path: self.corpus_path.clone(),
            });
        }

        if !self.users_path.exists() {
            return Err(ConfigError::PathNotFound {
                path: self.users_path.clone(),
            });
        }
        if !self.users_path.is_file() {
            return Err(ConfigError::NotAFile {
                path: self.users_path.clone(),
            });
        }

        if !(self.flag_threshold > 0.0 && self.flag_threshold <= 1.0) {
            return Err(ConfigError::InvalidThreshold {
                value: self.flag_threshold.to_string(),
            });
        }

        if self.max_keywords == 0 {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_MAX_KEYWORDS,
                reason: "must be at least 1".to_string(),
            });
        }

        if self.remote_timeout.is_zero() {
            return Err(ConfigError::InvalidValue {
                name: Self::ENV_REMOTE_TIMEOUT_SECS,
                reason: "must be at least 1 second".to_string(),
            });
        }

        Ok(())
    }

    /// Returns `"{bind_addr}:{port}"` (useful for logging/binding).
    pub fn socket_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }

    /// Returns `true` when a GitHub token is configured.
    pub fn remote_enabled(&self) -> bool {
        self.github_token.is_some()
    }

    fn parse_port_from_env(default: u16) -> Result<u16, ConfigError> {
        match env::var(Self::ENV_PORT) {
            Ok(value) => {
                let port: u16 = value.parse().map_err(|e| ConfigError::PortParseError {
                    value: value.clone(),
                    source: e,
                })?;

                if port == 0 {
                    return Err(ConfigError::InvalidPort { value });
                }

                Ok(port)
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_bind_addr_from_env(default: IpAddr) -> Result<IpAddr, ConfigError> {
        match env::var(Self::ENV_BIND_ADDR) {
            Ok(value) => value
                .parse()
                .map_err(|e| ConfigError::InvalidBindAddr { value, source: e }),
            Err(_) => Ok(default),
        }
    }

    /// Threshold is configured in percent, e.g. `80` or `72.5`.
    fn parse_threshold_from_env(default: f64) -> Result<f64, ConfigError> {
        match env::var(Self::ENV_FLAG_THRESHOLD) {
            Ok(value) => {
                let percent: f64 =
                    value
                        .trim()
                        .parse()
                        .map_err(|e| ConfigError::ThresholdParseError {
                            value: value.clone(),
                            source: e,
                        })?;

                if !(percent > 0.0 && percent <= 100.0) {
                    return Err(ConfigError::InvalidThreshold { value });
                }

                Ok(percent_to_fraction(percent))
            }
            Err(_) => Ok(default),
        }
    }

    fn parse_extensions_from_env(default: Vec<String>) -> Vec<String> {
        match env::var(Self::ENV_CORPUS_EXTENSIONS) {
            Ok(value) => {
                let parsed: Vec<String> = value
                    .split(',')
                    .map(|ext| ext.trim().trim_start_matches('.').to_lowercase())
                    .filter(|ext| !ext.is_empty())
                    .collect();
                if parsed.is_empty() { default } else { parsed }
            }
            Err(_) => default,
        }
    }

    fn parse_path_from_env(var_name: &str, default: PathBuf) -> PathBuf {
        env::var(var_name).map(PathBuf::from).unwrap_or(default)
    }

    fn parse_optional_string_from_env(var_name: &str) -> Option<String> {
        env::var(var_name)
            .ok()
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }

    fn parse_string_from_env(var_name: &str, default: String) -> String {
        env::var(var_name).unwrap_or(default)
    }

    fn parse_u64_from_env(var_name: &str, default: u64) -> u64 {
        env::var(var_name)
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(default)
    }
}
