use serde::{Deserialize, Serialize};
use std::env;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    /// Without a database only the file-backed `/api/v1` routes are served.
    #[serde(default)]
    pub database: Option<DatabaseConfig>,
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub pagination: PaginationConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_max_connections")]
    pub max_connections: u32,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DataConfig {
    pub customers_json_path: String,
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            customers_json_path: "public/customers-1.json".to_string(),
        }
    }
}

/// Fallbacks for `page`/`limit` when the query string leaves them out.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PaginationConfig {
    pub default_page: i64,
    /// File listing; large enough that the dashboard table gets every row.
    pub default_limit: i64,
    pub v2_default_limit: i64,
    /// Upper bound on `limit` for the database listing.
    pub max_limit: i64,
}

impl Default for PaginationConfig {
    fn default() -> Self {
        Self {
            default_page: 1,
            default_limit: 10_000,
            v2_default_limit: 10,
            max_limit: 10_000,
        }
    }
}

fn default_max_connections() -> u32 {
    10
}

fn get_env(name: &str) -> Option<String> {
    env::var(name).ok()
}

fn get_env_parse<T: std::str::FromStr>(name: &str) -> Option<T> {
    env::var(name).ok().and_then(|v| v.parse::<T>().ok())
}

impl Config {
    pub fn from_toml() -> AppResult<Self> {
        let config_path = env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
        use std::io::ErrorKind;

        // a missing file means env-only configuration
        let mut config: Config = match std::fs::read_to_string(&config_path) {
            Ok(config_str) => Self::from_toml_str(&config_str)?,
            Err(e) if e.kind() == ErrorKind::NotFound => Config {
                server: ServerConfig {
                    host: "0.0.0.0".to_string(),
                    port: 8080,
                },
                database: None,
                data: DataConfig::default(),
                pagination: PaginationConfig::default(),
            },
            Err(e) => {
                return Err(AppError::ConfigError(format!(
                    "Unable to read config file {config_path}: {e}"
                )));
            }
        };

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn from_toml_str(config_str: &str) -> AppResult<Self> {
        toml::from_str(config_str)
            .map_err(|e| AppError::ConfigError(format!("Failed to parse config file: {e}")))
    }

    /// Environment variables win over the file.
    fn apply_env_overrides(&mut self) {
        if let Some(v) = get_env("SERVER_HOST") {
            self.server.host = v;
        }
        if let Some(p) = get_env_parse("SERVER_PORT") {
            self.server.port = p;
        }
        if let Some(url) = get_env("DATABASE_URL") {
            match self.database.as_mut() {
                Some(db) => db.url = url,
                None => {
                    self.database = Some(DatabaseConfig {
                        url,
                        max_connections: default_max_connections(),
                    })
                }
            }
        }
        if let Some(db) = self.database.as_mut()
            && let Some(mc) = get_env_parse("DB_MAX_CONNECTIONS")
        {
            db.max_connections = mc;
        }
        if let Some(v) = get_env("CUSTOMERS_JSON_PATH") {
            self.data.customers_json_path = v;
        }
        if let Some(n) = get_env_parse("PAGINATION_DEFAULT_LIMIT") {
            self.pagination.default_limit = n;
        }
        if let Some(n) = get_env_parse("PAGINATION_V2_DEFAULT_LIMIT") {
            self.pagination.v2_default_limit = n;
        }
        if let Some(n) = get_env_parse("PAGINATION_MAX_LIMIT") {
            self.pagination.max_limit = n;
        }
    }

    fn validate(&self) -> AppResult<()> {
        let p = &self.pagination;
        if p.default_page < 1 || p.default_limit < 1 || p.v2_default_limit < 1 || p.max_limit < 1
        {
            return Err(AppError::ConfigError(
                "pagination defaults must be positive".to_string(),
            ));
        }
        Ok(())
    }
}
