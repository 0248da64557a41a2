//! Configuration module for environment variables and application settings

use std::env;
use std::time::Duration;

use anyhow::{Result, anyhow};

/// Deployment environment. Controls whether error detail is echoed to clients.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Secret used to sign session tokens. Required; there is no fallback.
    pub jwt_secret: String,

    /// Identity directory (Cognito) configuration
    pub cognito: CognitoConfig,

    /// Server configuration
    pub server: ServerConfig,

    /// Deployment environment flag
    pub environment: Environment,

    /// Upper bound on a single directory lookup
    pub directory_timeout: Duration,
}

#[derive(Debug, Clone)]
pub struct CognitoConfig {
    pub region: String,
    /// May legitimately be unset at startup; checked per request so the
    /// handler can answer with SERVER_CONFIG_ERROR instead of refusing to boot.
    pub user_pool_id: Option<String>,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            jwt_secret: env::var("JWT_SECRET")
                .map_err(|_| anyhow!("JWT_SECRET environment variable is required"))?,

            cognito: CognitoConfig {
                region: env::var("AWS_REGION").unwrap_or_else(|_| "us-east-1".to_string()),
                user_pool_id: env::var("COGNITO_USER_POOL_ID").ok().filter(|v| !v.is_empty()),
            },

            server: ServerConfig {
                host: env::var("SERVER_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
                // $PORT wins when set (Heroku), then SERVER_PORT
                port: parsed_var("PORT")
                    .or_else(|| parsed_var("SERVER_PORT"))
                    .unwrap_or(3000),
            },

            environment: match env::var("APP_ENV").as_deref() {
                Ok("development") | Ok("dev") => Environment::Development,
                _ => Environment::Production,
            },

            directory_timeout: Duration::from_secs(
                parsed_var("DIRECTORY_TIMEOUT_SECS").unwrap_or(10),
            ),
        })
    }

    pub fn is_development(&self) -> bool {
        self.environment == Environment::Development
    }
}

/// Read and parse an environment variable. A set-but-malformed value is an
/// operator mistake worth a log line, not a silent fallback.
fn parsed_var<T: std::str::FromStr>(name: &str) -> Option<T> {
    let raw = env::var(name).ok()?;
    match raw.parse() {
        Ok(value) => Some(value),
        Err(_) => {
            tracing::warn!("{name}={raw} is not a valid value; using the default");
            None
        }
    }
}


#[cfg(test)]
impl Config {
    /// Configuration suitable for handler tests, no environment access.
    pub fn for_tests(user_pool_id: Option<&str>) -> Self {
        Self {
            jwt_secret: "test_secret".to_string(),
            cognito: CognitoConfig {
                region: "us-east-1".to_string(),
                user_pool_id: user_pool_id.map(str::to_string),
            },
            server: ServerConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
            },
            environment: Environment::Production,
            directory_timeout: Duration::from_secs(5),
        }
    }
}
