// src/config.rs
use std::env;

/// Length of every issued session or confirmation token.
pub const TOKEN_LENGTH: usize = 20;

const DEFAULT_TOKEN_TTL_SECS: u64 = 24 * 60 * 60;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("{0} is not set")]
    Missing(&'static str),

    #[error("{name} has an invalid value: {value}")]
    Invalid { name: &'static str, value: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SmtpConfig {
    /// Plain SMTP without auth (Mailpit, MailHog)
    Local { host: String, port: u16 },
    Relay {
        server: String,
        username: String,
        password: String,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Argon2Config {
    pub memory_kib: u32,
    pub iterations: u32,
    pub parallelism: u32,
}

impl Default for Argon2Config {
    fn default() -> Self {
        // Budget VPS friendly: 4MB memory, 3 iterations, 1 thread
        Self {
            memory_kib: 4 * 1024,
            iterations: 3,
            parallelism: 1,
        }
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: String,
    pub host: String,
    pub port: u16,
    pub database_url: String,
    pub redis_url: String,
    /// Public base url used to build confirmation links
    pub app_url: String,
    pub email_from: String,
    pub smtp: SmtpConfig,
    pub token_ttl_secs: u64,
    pub argon2: Argon2Config,
    pub run_migrations: bool,
}

impl AppConfig {
    /// Loads `.env.{RUST_ENV}` (falling back to `.env`) and reads the process environment.
    pub fn load() -> Result<Self, ConfigError> {
        let environment = env::var("RUST_ENV").unwrap_or_else(|_| "development".to_string());

        let env_file = format!(".env.{}", environment);
        if dotenvy::from_filename(&env_file).is_err() {
            dotenvy::dotenv().ok();
        }

        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the config from any key lookup; `load` passes the process environment.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let required = |name: &'static str| lookup(name).ok_or(ConfigError::Missing(name));

        let environment = lookup("RUST_ENV").unwrap_or_else(|| "development".to_string());
        let host = required("HOST")?;
        let port = parse_or("PORT", lookup("PORT"), 8080u16)?;

        let smtp = if environment == "production" {
            SmtpConfig::Relay {
                server: required("SMTP_SERVER")?,
                username: required("SMTP_USERNAME")?,
                password: required("SMTP_PASSWORD")?,
            }
        } else {
            SmtpConfig::Local {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "localhost".to_string()),
                port: parse_or("SMTP_PORT", lookup("SMTP_PORT"), 1025u16)?,
            }
        };

        let token_ttl_secs = parse_or(
            "TOKEN_TTL_SECS",
            lookup("TOKEN_TTL_SECS"),
            DEFAULT_TOKEN_TTL_SECS,
        )?;
        if token_ttl_secs == 0 {
            return Err(ConfigError::Invalid {
                name: "TOKEN_TTL_SECS",
                value: "0".to_string(),
            });
        }

        let defaults = Argon2Config::default();
        let argon2 = Argon2Config {
            memory_kib: parse_or("ARGON2_MEMORY_KIB", lookup("ARGON2_MEMORY_KIB"), defaults.memory_kib)?,
            iterations: parse_or("ARGON2_ITERATIONS", lookup("ARGON2_ITERATIONS"), defaults.iterations)?,
            parallelism: parse_or(
                "ARGON2_PARALLELISM",
                lookup("ARGON2_PARALLELISM"),
                defaults.parallelism,
            )?,
        };

        let app_url = lookup("APP_URL").unwrap_or_else(|| format!("http://{host}:{port}"));

        Ok(Self {
            environment,
            database_url: required("DATABASE_URL")?,
            redis_url: required("REDIS_URL")?,
            email_from: required("EMAIL_FROM")?,
            app_url,
            host,
            port,
            smtp,
            token_ttl_secs,
            argon2,
            run_migrations: parse_or("RUN_MIGRATIONS", lookup("RUN_MIGRATIONS"), false)?,
        })
    }

    pub fn server_url(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn parse_or<T: std::str::FromStr>(
    name: &'static str,
    raw: Option<String>,
    default: T,
) -> Result<T, ConfigError> {
    match raw {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::Invalid { name, value }),
    }
}
