use std::fmt;

use axum::http::HeaderValue;

/// Which [`MovieStore`](marquee_db::repositories::MovieStore) backs the API.
#[derive(Clone, PartialEq, Eq)]
pub enum StorageBackend {
    /// A MongoDB deployment reachable at `uri`.
    MongoDb { uri: String, database: String },
    /// A process-local store; contents are lost on exit.
    Memory,
}

// Connection strings usually embed credentials.
impl fmt::Debug for StorageBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MongoDb { database, .. } => f
                .debug_struct("MongoDb")
                .field("uri", &"<redacted>")
                .field("database", database)
                .finish(),
            Self::Memory => f.write_str("Memory"),
        }
    }
}

/// Error raised when the environment holds an unusable value.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{key} must be set")]
    Missing { key: &'static str },

    #[error("{key} has invalid value '{value}': {reason}")]
    Invalid {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// Server configuration loaded from environment variables.
///
/// All fields except the MongoDB connection string have defaults suitable
/// for local development.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Storage backend selection and connection details.
    pub storage: StorageBackend,
}

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_CORS_ORIGINS: &str = "http://localhost:3000";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;
const DEFAULT_DATABASE: &str = "movies";

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:3000`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `STORAGE_BACKEND`      | `mongodb` (or `memory`)    |
    /// | `MONGODB_URI`          | required for `mongodb`     |
    /// | `MONGODB_DATABASE`     | `movies`                   |
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) but reads values through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let host = lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.into());
        let port = parse_or("PORT", lookup("PORT"), DEFAULT_PORT)?;
        let request_timeout_secs = parse_or(
            "REQUEST_TIMEOUT_SECS",
            lookup("REQUEST_TIMEOUT_SECS"),
            DEFAULT_REQUEST_TIMEOUT_SECS,
        )?;

        let cors_origins: Vec<String> = lookup("CORS_ORIGINS")
            .unwrap_or_else(|| DEFAULT_CORS_ORIGINS.into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        for origin in &cors_origins {
            if let Err(e) = origin.parse::<HeaderValue>() {
                return Err(ConfigError::Invalid {
                    key: "CORS_ORIGINS",
                    value: origin.clone(),
                    reason: e.to_string(),
                });
            }
        }

        let storage = match lookup("STORAGE_BACKEND").as_deref().map(str::trim) {
            None | Some("mongodb") => StorageBackend::MongoDb {
                uri: lookup("MONGODB_URI")
                    .filter(|s| !s.trim().is_empty())
                    .ok_or(ConfigError::Missing { key: "MONGODB_URI" })?,
                database: lookup("MONGODB_DATABASE").unwrap_or_else(|| DEFAULT_DATABASE.into()),
            },
            Some("memory") => StorageBackend::Memory,
            Some(other) => {
                return Err(ConfigError::Invalid {
                    key: "STORAGE_BACKEND",
                    value: other.to_string(),
                    reason: "expected 'mongodb' or 'memory'".into(),
                })
            }
        };

        Ok(Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            storage,
        })
    }
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: fmt::Display,
{
    match raw {
        None => Ok(default),
        Some(value) => value.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

#[cfg(test)]
mod tests {
    use std::collections::HashMap;

    use assert_matches::assert_matches;

    use super::*;

    fn load(vars: &[(&str, &str)]) -> Result<ServerConfig, ConfigError> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_apply_when_only_uri_is_set() {
        let config = load(&[("MONGODB_URI", "mongodb://localhost:27017")]).unwrap();

        assert_eq!(config.host, "0.0.0.0");
        assert_eq!(config.port, 3000);
        assert_eq!(config.cors_origins, vec!["http://localhost:3000"]);
        assert_eq!(config.request_timeout_secs, 30);
        assert_eq!(
            config.storage,
            StorageBackend::MongoDb {
                uri: "mongodb://localhost:27017".into(),
                database: "movies".into(),
            }
        );
    }

    #[test]
    fn mongodb_backend_requires_uri() {
        assert_matches!(
            load(&[]),
            Err(ConfigError::Missing { key: "MONGODB_URI" })
        );
    }

    #[test]
    fn memory_backend_needs_no_uri() {
        let config = load(&[("STORAGE_BACKEND", "memory"), ("PORT", "8080")]).unwrap();
        assert_eq!(config.storage, StorageBackend::Memory);
        assert_eq!(config.port, 8080);
    }

    #[test]
    fn cors_origins_are_split_and_trimmed() {
        let config = load(&[
            ("STORAGE_BACKEND", "memory"),
            ("CORS_ORIGINS", "http://a.test, http://b.test ,"),
        ])
        .unwrap();
        assert_eq!(config.cors_origins, vec!["http://a.test", "http://b.test"]);
    }

    #[test]
    fn invalid_values_are_reported() {
        assert_matches!(
            load(&[("STORAGE_BACKEND", "memory"), ("PORT", "seventy")]),
            Err(ConfigError::Invalid { key: "PORT", .. })
        );
        assert_matches!(
            load(&[("STORAGE_BACKEND", "postgres")]),
            Err(ConfigError::Invalid { key: "STORAGE_BACKEND", .. })
        );
        assert_matches!(
            load(&[("STORAGE_BACKEND", "memory"), ("CORS_ORIGINS", "http://bad\norigin")]),
            Err(ConfigError::Invalid { key: "CORS_ORIGINS", .. })
        );
    }

    #[test]
    fn debug_output_redacts_connection_string() {
        let config = load(&[("MONGODB_URI", "mongodb://user:hunter2@db:27017")]).unwrap();
        let printed = format!("{config:?}");
        assert!(!printed.contains("hunter2"));
        assert!(printed.contains("<redacted>"));
    }
}
