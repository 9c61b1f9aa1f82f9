// ABOUTME: Client configuration loaded once at startup from environment variables
// ABOUTME: Resolves the API base URL, the data source strategy and the session directory

pub mod constants;

use freelink_core::{freelink_dir, DEFAULT_API_BASE_URL};
use std::env;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;
use thiserror::Error;
use tracing::debug;
use url::Url;

#[derive(Error, Debug, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Invalid API URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("Invalid data source: {0} (expected remote, fallback or auto)")]
    InvalidDataSource(String),
}

pub type ConfigResult<T> = Result<T, ConfigError>;

/// Where the API modules get their data from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSource {
    /// Call the REST backend
    Remote,
    /// Serve deterministic demo data without touching the network
    Fallback,
}

impl fmt::Display for DataSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DataSource::Remote => f.write_str("remote"),
            DataSource::Fallback => f.write_str("fallback"),
        }
    }
}

/// Requested data source before resolution
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DataSourceMode {
    Remote,
    Fallback,
    /// Fallback when the API is on a loopback host the client is not served from
    Auto,
}

impl FromStr for DataSourceMode {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "remote" => Ok(DataSourceMode::Remote),
            "fallback" | "mock" => Ok(DataSourceMode::Fallback),
            "auto" | "" => Ok(DataSourceMode::Auto),
            _ => Err(ConfigError::InvalidDataSource(s.to_string())),
        }
    }
}

/// Whether a host name refers to the local machine
pub fn is_loopback_host(host: &str) -> bool {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    host == "localhost" || host.ends_with(".localhost") || host.starts_with("127.") || host == "::1"
}

impl DataSourceMode {
    /// Resolve `Auto` against the API URL and the host the client runs on
    pub fn resolve(self, api_base_url: &Url, client_host: &str) -> DataSource {
        match self {
            DataSourceMode::Remote => DataSource::Remote,
            DataSourceMode::Fallback => DataSource::Fallback,
            DataSourceMode::Auto => {
                let api_is_local = api_base_url.host_str().map(is_loopback_host).unwrap_or(false);
                if api_is_local && !is_loopback_host(client_host) {
                    DataSource::Fallback
                } else {
                    DataSource::Remote
                }
            }
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// Base URL of the REST API, without a trailing slash
    pub api_base_url: String,
    pub data_source: DataSource,
    pub client_host: String,
    /// Directory holding the persisted session
    pub session_dir: PathBuf,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
            data_source: DataSource::Remote,
            client_host: "localhost".to_string(),
            session_dir: freelink_dir(),
        }
    }
}

impl ClientConfig {
    pub fn from_env() -> ConfigResult<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Build the configuration from an arbitrary variable lookup
    pub fn from_vars<F>(lookup: F) -> ConfigResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_url = lookup(constants::FREELINK_API_URL)
            .filter(|v| !v.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());
        let api_base_url = raw_url.trim().trim_end_matches('/').to_string();

        let parsed = Url::parse(&api_base_url).map_err(|e| ConfigError::InvalidUrl {
            url: api_base_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidUrl {
                url: api_base_url,
                reason: "scheme must be http or https".to_string(),
            });
        }

        let client_host = lookup(constants::FREELINK_CLIENT_HOST)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
            .unwrap_or_else(|| "localhost".to_string());

        let mode = lookup(constants::FREELINK_DATA_SOURCE)
            .unwrap_or_default()
            .parse::<DataSourceMode>()?;
        let data_source = mode.resolve(&parsed, &client_host);

        let session_dir = lookup(constants::FREELINK_HOME)
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(freelink_dir);

        debug!(
            "Resolved client config: api={} data_source={} client_host={}",
            api_base_url, data_source, client_host
        );

        Ok(Self {
            api_base_url,
            data_source,
            client_host,
            session_dir,
        })
    }
}
