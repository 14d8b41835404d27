use std::collections::HashMap;
use std::net::IpAddr;
use thiserror::Error;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: IpAddr,
    pub port: u16,
    pub database_path: String,
    /// Log every SQL statement at `info` instead of `debug`.
    pub sql_echo: bool,
    pub enforce_foreign_keys: bool,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid value for {0}: {1}")]
    InvalidValue(String, String),
}

impl Default for Config {
    fn default() -> Self {
        Config {
            host: IpAddr::from([127, 0, 0, 1]),
            port: 8000,
            database_path: "database.db".to_string(),
            sql_echo: false,
            enforce_foreign_keys: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_env_map(std::env::vars().collect())
    }

    pub fn from_env_map(env_map: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = Config::default();

        let host = match env_map.get("HOST") {
            Some(s) => s.trim().parse::<IpAddr>().map_err(|_| {
                ConfigError::InvalidValue("HOST".to_string(), "must be an IP address".to_string())
            })?,
            None => defaults.host,
        };

        let port = match env_map.get("PORT") {
            Some(s) => s.trim().parse::<u16>().map_err(|_| {
                ConfigError::InvalidValue("PORT".to_string(), "must be a valid u16".to_string())
            })?,
            None => defaults.port,
        };

        let database_path = env_map
            .get("DATABASE_PATH")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .unwrap_or(defaults.database_path);

        let sql_echo = parse_bool(&env_map, "SQL_ECHO", defaults.sql_echo)?;
        let enforce_foreign_keys =
            parse_bool(&env_map, "ENFORCE_FOREIGN_KEYS", defaults.enforce_foreign_keys)?;

        Ok(Config {
            host,
            port,
            database_path,
            sql_echo,
            enforce_foreign_keys,
        })
    }
}

fn parse_bool(
    env_map: &HashMap<String, String>,
    key: &str,
    default: bool,
) -> Result<bool, ConfigError> {
    let Some(raw) = env_map.get(key) else {
        return Ok(default);
    };

    match raw.trim().to_ascii_lowercase().as_str() {
        "true" | "1" | "yes" => Ok(true),
        "false" | "0" | "no" => Ok(false),
        other => Err(ConfigError::InvalidValue(
            key.to_string(),
            format!("must be true or false, got {}", other),
        )),
    }
}
