//! Configuration management for the Proyektor gateway.
//!
//! This module handles loading and accessing configuration values from environment
//! variables and `.env` files. Values are read once at start-up into an immutable
//! [`AppConfig`] which is then handed explicitly to every component, so nothing
//! downstream reads the environment on its own.
//!
//! The configuration system follows a hierarchical approach:
//! 1. Environment variables (highest priority)
//! 2. `.env` file in the local data directory
//! 3. `.env` file in the working directory
//! 4. Application defaults

use std::{env, net::SocketAddr, path::PathBuf, str::FromStr, time::Duration};

use crate::error::{ProyektorError, Result};

pub const DEFAULT_SERVER_ADDRESS: &str = "0.0.0.0:5000";
pub const DEFAULT_VERSIONS_URL: &str = "https://bible-api.deno.dev/api";
pub const DEFAULT_LYRICS_URL: &str = "https://lrclib.net/api";
pub const DEFAULT_BIBLES_DIR: &str = "./bibles";
pub const DEFAULT_SONGS_DIR: &str = "./songs";
pub const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Loads environment variables from a `.env` file.
///
/// Looks first in the platform-specific local data directory under
/// `proyektor/.env`, then in the current working directory. Unlike a CLI that
/// cannot work without credentials, the gateway runs fine on defaults, so a
/// missing file is not an error.
///
/// # Directory Structure
///
/// - Linux: `~/.local/share/proyektor/.env`
/// - macOS: `~/Library/Application Support/proyektor/.env`
/// - Windows: `%LOCALAPPDATA%/proyektor/.env`
///
/// # Errors
///
/// Returns an error string if the data directory cannot be created.
pub async fn load_env() -> std::result::Result<(), String> {
    let mut path = dirs::data_local_dir().unwrap_or_else(|| PathBuf::from("."));
    path.push("proyektor/.env");
    if let Some(parent) = path.parent() {
        async_fs::create_dir_all(parent)
            .await
            .map_err(|e| e.to_string())?;
    }

    if dotenv::from_path(&path).is_err() {
        dotenv::dotenv().ok();
    }
    Ok(())
}

/// Where `/bible/read` takes its verses from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerseSource {
    Local,
    Remote,
}

impl FromStr for VerseSource {
    type Err = ProyektorError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "local" => Ok(VerseSource::Local),
            "remote" => Ok(VerseSource::Remote),
            other => Err(ProyektorError::config(format!(
                "VERSE_SOURCE must be 'local' or 'remote', got '{}'",
                other
            ))),
        }
    }
}

/// Immutable process-wide configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub server_addr: SocketAddr,
    pub versions_url: String,
    pub lyrics_url: String,
    pub bibles_dir: PathBuf,
    pub songs_dir: PathBuf,
    pub verse_source: VerseSource,
    pub upstream_timeout: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        AppConfig {
            server_addr: SocketAddr::from(([0, 0, 0, 0], 5000)),
            versions_url: DEFAULT_VERSIONS_URL.to_string(),
            lyrics_url: DEFAULT_LYRICS_URL.to_string(),
            bibles_dir: PathBuf::from(DEFAULT_BIBLES_DIR),
            songs_dir: PathBuf::from(DEFAULT_SONGS_DIR),
            verse_source: VerseSource::Remote,
            upstream_timeout: Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        }
    }
}

impl AppConfig {
    /// Builds the configuration from the current environment.
    ///
    /// Every variable is optional. A variable that is present but cannot be
    /// parsed is a [`ProyektorError::Config`].
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    ///
    /// Split out from [`AppConfig::from_env`] so the parsing rules can be
    /// exercised without touching the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let server_addr = lookup("SERVER_ADDRESS")
            .unwrap_or_else(|| DEFAULT_SERVER_ADDRESS.to_string());
        let server_addr = SocketAddr::from_str(&server_addr).map_err(|e| {
            ProyektorError::config(format!("Invalid SERVER_ADDRESS '{}': {}", server_addr, e))
        })?;

        let verse_source = match lookup("VERSE_SOURCE") {
            Some(value) => value.parse::<VerseSource>()?,
            None => VerseSource::Remote,
        };

        let upstream_timeout = match lookup("UPSTREAM_TIMEOUT_SECS") {
            Some(value) => {
                let secs = value.trim().parse::<u64>().map_err(|_| {
                    ProyektorError::config(format!(
                        "UPSTREAM_TIMEOUT_SECS must be a positive integer, got '{}'",
                        value
                    ))
                })?;
                if secs == 0 {
                    return Err(ProyektorError::config(
                        "UPSTREAM_TIMEOUT_SECS must be greater than zero",
                    ));
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        Ok(AppConfig {
            server_addr,
            versions_url: trim_base_url(
                lookup("VERSIONS_URL").unwrap_or_else(|| DEFAULT_VERSIONS_URL.to_string()),
            ),
            lyrics_url: trim_base_url(
                lookup("LYRICS_URL").unwrap_or_else(|| DEFAULT_LYRICS_URL.to_string()),
            ),
            bibles_dir: PathBuf::from(
                lookup("BIBLES_DIR").unwrap_or_else(|| DEFAULT_BIBLES_DIR.to_string()),
            ),
            songs_dir: PathBuf::from(
                lookup("SONGS_DIR").unwrap_or_else(|| DEFAULT_SONGS_DIR.to_string()),
            ),
            verse_source,
            upstream_timeout,
        })
    }
}

// base URLs are joined with "/{path}", a trailing slash would double it
fn trim_base_url(url: String) -> String {
    url.trim_end_matches('/').to_string()
}
