use thiserror::Error;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },
}

/// Server configuration, read from the environment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub pool_size: u32,
    /// Accept any password for a known email. Reproduces the historical
    /// login behavior and must stay off outside of demos.
    pub legacy_login: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            database_url: "music_player.db".to_string(),
            pool_size: 8,
            legacy_login: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let port = match lookup("PORT") {
            Some(v) => v.parse().map_err(|_| ConfigError::InvalidValue { key: "PORT", value: v })?,
            None => defaults.port,
        };

        let pool_size = match lookup("DB_POOL_SIZE") {
            Some(v) => match v.parse::<u32>() {
                Ok(n) if n > 0 => n,
                _ => return Err(ConfigError::InvalidValue { key: "DB_POOL_SIZE", value: v }),
            },
            None => defaults.pool_size,
        };

        let legacy_login = match lookup("LEGACY_LOGIN") {
            Some(v) => parse_flag(&v).ok_or(ConfigError::InvalidValue { key: "LEGACY_LOGIN", value: v })?,
            None => defaults.legacy_login,
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or(defaults.host),
            port,
            database_url: lookup("DATABASE_URL").unwrap_or(defaults.database_url),
            pool_size,
            legacy_login,
        })
    }

    pub fn socket_addr(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_flag(v: &str) -> Option<bool> {
    match v.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" | "" => Some(false),
        _ => None,
    }
}
