//! Application configuration: fixed defaults, overridden by environment.
//!
//! Built once at startup and passed by reference to every component.

use directories::ProjectDirs;
use std::path::PathBuf;
use std::time::Duration;

pub const DEFAULT_API_URL: &str = "https://api.football-data.org/v4";

const DEFAULT_APP_NAME: &str = "Football Analytics Dashboard";
const DEFAULT_APP_VERSION: &str = "1.0.0";
const DEFAULT_CACHE_TTL_SECS: u64 = 3600;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub app_name: String,
    pub app_version: String,
    pub admin_user: String,
    pub admin_password: String,
    pub database_path: PathBuf,
    pub api_url: String,
    /// Empty when no token is configured; requests are then sent unauthenticated.
    pub api_key: String,
    pub cache_ttl: Duration,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            app_name: DEFAULT_APP_NAME.into(),
            app_version: DEFAULT_APP_VERSION.into(),
            admin_user: "admin".into(),
            admin_password: "admin".into(),
            database_path: default_database_path(),
            api_url: DEFAULT_API_URL.into(),
            api_key: String::new(),
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
        }
    }
}

impl AppConfig {
    /// Load from the process environment, reading `.env` first if present.
    pub fn from_env() -> Self {
        match dotenvy::dotenv() {
            Ok(path) => tracing::debug!(path = %path.display(), "Loaded .env file"),
            Err(e) if e.not_found() => {}
            Err(e) => tracing::warn!(error = %e, "Ignoring unreadable .env file"),
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Unset or empty keys keep their default.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        Self {
            app_name: get("APP_NAME").unwrap_or(defaults.app_name),
            app_version: get("APP_VERSION").unwrap_or(defaults.app_version),
            admin_user: get("ADMIN_USER").unwrap_or(defaults.admin_user),
            admin_password: get("ADMIN_PASSWORD").unwrap_or(defaults.admin_password),
            database_path: get("DATABASE_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            api_url: get("FOOTBALL_API_URL")
                .map(|url| url.trim_end_matches('/').to_string())
                .unwrap_or(defaults.api_url),
            api_key: get("FOOTBALL_API_KEY").unwrap_or(defaults.api_key),
            cache_ttl: Duration::from_secs(parse_u64(
                get("CACHE_TTL").as_deref(),
                DEFAULT_CACHE_TTL_SECS,
            )),
        }
    }

    /// Cache window for fast-moving data (fixtures, results).
    pub fn short_cache_ttl(&self) -> Duration {
        self.cache_ttl / 2
    }
}

fn default_database_path() -> PathBuf {
    ProjectDirs::from("", "", "liga-analytics")
        .map(|dirs| dirs.data_dir().join("football.db"))
        .unwrap_or_else(|| PathBuf::from("data").join("football.db"))
}

fn parse_u64(s: Option<&str>, default: u64) -> u64 {
    s.and_then(|v| v.trim().parse().ok()).unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AppConfig::from_lookup(|_| None);
        assert_eq!(config.app_name, "Football Analytics Dashboard");
        assert_eq!(config.admin_user, "admin");
        assert_eq!(config.api_url, DEFAULT_API_URL);
        assert!(config.api_key.is_empty());
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert!(config.database_path.ends_with("football.db"));
    }

    #[test]
    fn test_env_overrides() {
        let config = AppConfig::from_lookup(lookup_from(&[
            ("ADMIN_USER", "coach"),
            ("DATABASE_PATH", "/tmp/liga/test.db"),
            ("FOOTBALL_API_URL", "http://localhost:9000/v4/"),
            ("FOOTBALL_API_KEY", "secret"),
            ("CACHE_TTL", "120"),
        ]));
        assert_eq!(config.admin_user, "coach");
        assert_eq!(config.admin_password, "admin");
        assert_eq!(config.database_path, PathBuf::from("/tmp/liga/test.db"));
        assert_eq!(config.api_url, "http://localhost:9000/v4");
        assert_eq!(config.api_key, "secret");
        assert_eq!(config.cache_ttl, Duration::from_secs(120));
        assert_eq!(config.short_cache_ttl(), Duration::from_secs(60));
    }

    #[test]
    fn test_bad_numbers_and_blanks_fall_back() {
        let config = AppConfig::from_lookup(lookup_from(&[("CACHE_TTL", "soon"), ("APP_NAME", "  ")]));
        assert_eq!(config.cache_ttl, Duration::from_secs(3600));
        assert_eq!(config.app_name, "Football Analytics Dashboard");
    }
}
