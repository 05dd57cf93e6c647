use std::env;

#[derive(Debug, Clone)]
pub struct Config {
    // Database
    pub database_url: String,
    pub db_max_connections: u32,
    pub db_min_connections: u32,
    pub db_acquire_timeout_secs: u64,

    // Server
    pub host: String,
    pub port: u16,

    // Logging
    pub log_json: bool,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok(); // Load .env file if exists

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from an arbitrary key lookup
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let or_default = |key: &str, default: &str| lookup(key).unwrap_or_else(|| default.to_string());

        Ok(Self {
            // Database
            database_url: lookup("DATABASE_URL").ok_or(ConfigError::Missing("DATABASE_URL"))?,
            db_max_connections: or_default("DB_MAX_CONNECTIONS", "10")
                .parse()
                .map_err(|_| ConfigError::Invalid("DB_MAX_CONNECTIONS"))?,
            db_min_connections: or_default("DB_MIN_CONNECTIONS", "1")
                .parse()
                .map_err(|_| ConfigError::Invalid("DB_MIN_CONNECTIONS"))?,
            db_acquire_timeout_secs: or_default("DB_ACQUIRE_TIMEOUT_SECS", "30")
                .parse()
                .map_err(|_| ConfigError::Invalid("DB_ACQUIRE_TIMEOUT_SECS"))?,

            // Server
            host: or_default("HOST", "0.0.0.0"),
            port: or_default("PORT", "3000")
                .parse()
                .map_err(|_| ConfigError::Invalid("PORT"))?,

            // Logging
            log_json: or_default("LOG_FORMAT", "pretty").eq_ignore_ascii_case("json"),
        })
    }

    /// Get server address as "host:port"
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    Missing(&'static str),

    #[error("Invalid environment variable: {0}")]
    Invalid(&'static str),
}
