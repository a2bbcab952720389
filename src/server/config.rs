use std::{str::FromStr, time::Duration};

use crate::server::error::config::ConfigError;

static DEFAULT_PORT: u16 = 3000;
static DEFAULT_DB_PORT: u16 = 5432;
static DEFAULT_MAX_CONNECTIONS: u32 = 10;
static DEFAULT_TIMEOUT_SECS: u64 = 30;

pub struct Config {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub connect_timeout: Duration,
    pub idle_timeout: Duration,
    /// Create missing tables at startup
    pub bootstrap_schema: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Builds the configuration from any variable source.
    ///
    /// `DATABASE_URL` takes precedence over the individual `DB_*` connection variables.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let vars = Vars { lookup };

        let database_url = match vars.optional("DATABASE_URL") {
            Some(url) => url,
            None => {
                let host = vars.required("DB_HOST")?;
                let port = vars.parse_or("DB_PORT", DEFAULT_DB_PORT)?;
                let user = vars.required("DB_USER")?;
                let password = vars.optional("DB_PASSWORD").unwrap_or_default();
                let name = vars.required("DB_NAME")?;
                let sslmode = if vars.flag_or("DB_SSL", false)? {
                    "require"
                } else {
                    "disable"
                };

                // Credentials and database name may contain URL delimiters
                format!(
                    "postgres://{}:{}@{}:{}/{}?sslmode={}",
                    urlencoding::encode(&user),
                    urlencoding::encode(&password),
                    host,
                    port,
                    urlencoding::encode(&name),
                    sslmode
                )
            }
        };

        Ok(Self {
            database_url,
            port: vars.parse_or("PORT", DEFAULT_PORT)?,
            max_connections: vars.parse_or("DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?,
            connect_timeout: Duration::from_secs(
                vars.parse_or("DB_CONNECT_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            ),
            idle_timeout: Duration::from_secs(
                vars.parse_or("DB_IDLE_TIMEOUT_SECS", DEFAULT_TIMEOUT_SECS)?,
            ),
            bootstrap_schema: vars.flag_or("DB_BOOTSTRAP_SCHEMA", false)?,
        })
    }
}

struct Vars<F> {
    lookup: F,
}

impl<F: Fn(&str) -> Option<String>> Vars<F> {
    /// Value of a set, non-blank variable
    fn optional(&self, name: &str) -> Option<String> {
        (self.lookup)(name).filter(|value| !value.trim().is_empty())
    }

    fn required(&self, name: &str) -> Result<String, ConfigError> {
        self.optional(name)
            .ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
    }

    fn parse_or<T>(&self, name: &str, default: T) -> Result<T, ConfigError>
    where
        T: FromStr,
        T::Err: std::fmt::Display,
    {
        match self.optional(name) {
            Some(value) => value
                .trim()
                .parse()
                .map_err(|e: T::Err| ConfigError::InvalidEnvValue {
                    var: name.to_string(),
                    reason: e.to_string(),
                }),
            None => Ok(default),
        }
    }

    fn flag_or(&self, name: &str, default: bool) -> Result<bool, ConfigError> {
        let Some(value) = self.optional(name) else {
            return Ok(default);
        };

        match value.trim().to_ascii_lowercase().as_str() {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(ConfigError::InvalidEnvValue {
                var: name.to_string(),
                reason: format!("expected true or false, got {:?}", value),
            }),
        }
    }
}
