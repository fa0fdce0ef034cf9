//! Runtime configuration from environment variables (a `.env` file is honoured by the binary).

use crate::error::ConfigError;
use crate::service::ValidationRules;
use std::time::Duration;

#[derive(Clone, Debug)]
pub struct DatabaseConfig {
    pub url: String,
    pub max_connections: u32,
    pub acquire_timeout: Duration,
    /// Create the database on the server if it does not exist.
    pub create_database: bool,
    /// Create the canteen tables if they do not exist.
    pub ensure_tables: bool,
}

#[derive(Clone, Debug)]
pub struct HttpConfig {
    pub bind_addr: String,
    /// Allowed CORS origins. A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    pub max_body_bytes: usize,
}

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database: DatabaseConfig,
    pub http: HttpConfig,
    pub validation: ValidationRules,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any key lookup; unset keys take their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).map(|v| v.trim().to_string()).filter(|v| !v.is_empty());

        let database = DatabaseConfig {
            url: get("DATABASE_URL").unwrap_or_else(|| "postgres://localhost/kantin_kita".into()),
            max_connections: parse_or("DATABASE_MAX_CONNECTIONS", get("DATABASE_MAX_CONNECTIONS"), 5)?,
            acquire_timeout: Duration::from_secs(parse_or(
                "DATABASE_ACQUIRE_TIMEOUT_SECS",
                get("DATABASE_ACQUIRE_TIMEOUT_SECS"),
                30,
            )?),
            create_database: flag_or("DATABASE_CREATE", get("DATABASE_CREATE"), false)?,
            ensure_tables: flag_or("DATABASE_ENSURE_TABLES", get("DATABASE_ENSURE_TABLES"), false)?,
        };
        if database.max_connections == 0 {
            return Err(ConfigError::Invalid {
                key: "DATABASE_MAX_CONNECTIONS",
                value: "0".into(),
            });
        }

        let http = HttpConfig {
            bind_addr: get("BIND_ADDR").unwrap_or_else(|| "0.0.0.0:8080".into()),
            cors_origins: get("CORS_ALLOWED_ORIGINS")
                .unwrap_or_else(|| "http://localhost:3000".into())
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect(),
            max_body_bytes: parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), 64 * 1024)?,
        };

        let validation = ValidationRules {
            nisn_requires_email: flag_or("NISN_REQUIRE_EMAIL", get("NISN_REQUIRE_EMAIL"), true)?,
        };

        Ok(AppConfig {
            database,
            http,
            validation,
        })
    }
}

fn parse_or<T: std::str::FromStr>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(v) => v.parse().map_err(|_| ConfigError::Invalid { key, value: v }),
    }
}

fn flag_or(key: &'static str, raw: Option<String>, default: bool) -> Result<bool, ConfigError> {
    let Some(v) = raw else { return Ok(default) };
    match v.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid { key, value: v }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn from_pairs(pairs: &[(&str, &str)]) -> Result<AppConfig, ConfigError> {
        let vars: HashMap<String, String> = pairs.iter().map(|(k, v)| (k.to_string(), v.to_string())).collect();
        AppConfig::from_lookup(|k| vars.get(k).cloned())
    }

    #[test]
    fn defaults_when_nothing_is_set() {
        let config = from_pairs(&[]).unwrap();
        assert_eq!(config.database.url, "postgres://localhost/kantin_kita");
        assert_eq!(config.database.max_connections, 5);
        assert_eq!(config.database.acquire_timeout, Duration::from_secs(30));
        assert!(!config.database.create_database);
        assert!(!config.database.ensure_tables);
        assert_eq!(config.http.bind_addr, "0.0.0.0:8080");
        assert_eq!(config.http.cors_origins, vec!["http://localhost:3000".to_string()]);
        assert_eq!(config.http.max_body_bytes, 65536);
        assert!(config.validation.nisn_requires_email);
    }

    #[test]
    fn overrides_are_parsed() {
        let config = from_pairs(&[
            ("DATABASE_URL", "postgres://db/kantin"),
            ("DATABASE_MAX_CONNECTIONS", "20"),
            ("DATABASE_ENSURE_TABLES", "yes"),
            ("CORS_ALLOWED_ORIGINS", "http://a.test, http://b.test ,"),
            ("NISN_REQUIRE_EMAIL", "false"),
        ])
        .unwrap();
        assert_eq!(config.database.url, "postgres://db/kantin");
        assert_eq!(config.database.max_connections, 20);
        assert!(config.database.ensure_tables);
        assert_eq!(config.http.cors_origins, vec!["http://a.test", "http://b.test"]);
        assert!(!config.validation.nisn_requires_email);
    }

    #[test]
    fn malformed_values_name_the_key() {
        let err = from_pairs(&[("MAX_BODY_BYTES", "lots")]).unwrap_err();
        assert_eq!(err.to_string(), "invalid value for MAX_BODY_BYTES: 'lots'");
        let err = from_pairs(&[("DATABASE_CREATE", "maybe")]).unwrap_err();
        assert!(matches!(err, ConfigError::Invalid { key: "DATABASE_CREATE", .. }));
        assert!(from_pairs(&[("DATABASE_MAX_CONNECTIONS", "0")]).is_err());
    }
}
