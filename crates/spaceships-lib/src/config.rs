//! Process configuration for the spaceships service.
//!
//! The configuration is assembled once at startup and is read-only for the
//! process lifetime. Values come either from explicit arguments
//! ([`Config::new`]) or from the environment ([`Config::from_env`]).
//!
//! # Environment Variables
//!
//! - `SPACESHIPS_DATA_PATH` - Path to the SQLite database (default: `./spaceships.db`)
//! - `SERVICE_PORT` - HTTP port the listener binds (default: `8000`)
//! - `SERVICE_ENABLED` - Feature gate for catalog reads (default: `true`)

use std::env;
use std::path::{Path, PathBuf};

/// Immutable bundle of database, listener, and feature-gate settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    database_path: PathBuf,
    port: u16,
    service_enabled: bool,
}

impl Config {
    /// Construct a configuration from explicit values.
    pub fn new(database_path: impl Into<PathBuf>, port: u16, service_enabled: bool) -> Self {
        Self {
            database_path: database_path.into(),
            port,
            service_enabled,
        }
    }

    /// Construct a configuration from environment variables, falling back to
    /// the documented defaults for anything unset or unparsable.
    pub fn from_env() -> Self {
        let database_path = env::var("SPACESHIPS_DATA_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| PathBuf::from("./spaceships.db"));

        let port: u16 = env::var("SERVICE_PORT")
            .ok()
            .and_then(|p| p.parse().ok())
            .unwrap_or(8000);

        let service_enabled = env::var("SERVICE_ENABLED")
            .ok()
            .and_then(|v| parse_flag(&v))
            .unwrap_or(true);

        Self {
            database_path,
            port,
            service_enabled,
        }
    }

    /// Path to the SQLite database file.
    pub fn database_path(&self) -> &Path {
        &self.database_path
    }

    /// TCP port the HTTP listener binds.
    pub fn port(&self) -> u16 {
        self.port
    }

    /// Whether catalog reads are enabled. When false the routes stay live but
    /// the store is never touched.
    pub fn service_enabled(&self) -> bool {
        self.service_enabled
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.to_lowercase().as_str() {
        "true" | "1" | "yes" => Some(true),
        "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn explicit_construction_keeps_values() {
        let config = Config::new("/data/ships.db", 9000, false);
        assert_eq!(config.database_path(), Path::new("/data/ships.db"));
        assert_eq!(config.port(), 9000);
        assert!(!config.service_enabled());
    }

    #[test]
    fn parse_flag_accepts_common_spellings() {
        assert_eq!(parse_flag("true"), Some(true));
        assert_eq!(parse_flag("TRUE"), Some(true));
        assert_eq!(parse_flag("1"), Some(true));
        assert_eq!(parse_flag("yes"), Some(true));
        assert_eq!(parse_flag("false"), Some(false));
        assert_eq!(parse_flag("0"), Some(false));
        assert_eq!(parse_flag("no"), Some(false));
        assert_eq!(parse_flag("maybe"), None);
    }

    #[test]
    fn config_is_cloneable_and_comparable() {
        let config = Config::new("./spaceships.db", 8000, true);
        assert_eq!(config.clone(), config);
    }
}
