//! Core runtime configuration.
//!
//! Configuration is resolved once at process startup (flags, environment, `.env`) and then
//! passed into the API layer. Nothing reads process-wide environment variables while handling a
//! request.

use crate::{ArticleError, ArticleResult};
use std::fmt;
use std::str::FromStr;

pub const DEFAULT_PORT: u16 = 4000;

/// Upper bound on an accepted request body, in bytes.
pub const MAX_BODY_BYTES: usize = 1_048_576;

/// Operating environment reported by the health check.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
    Test,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Environment::Development => "development",
            Environment::Staging => "staging",
            Environment::Production => "production",
            Environment::Test => "test",
        }
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Environment {
    type Err = ArticleError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "development" => Ok(Environment::Development),
            "staging" => Ok(Environment::Staging),
            "production" => Ok(Environment::Production),
            "test" => Ok(Environment::Test),
            other => Err(ArticleError::InvalidInput(format!(
                "unknown environment {other:?} (expected development|staging|production|test)"
            ))),
        }
    }
}

/// Core configuration resolved at startup.
#[derive(Clone, Debug)]
pub struct CoreConfig {
    port: u16,
    environment: Environment,
}

impl CoreConfig {
    /// Create a new `CoreConfig`.
    ///
    /// # Errors
    ///
    /// Returns `ArticleError::InvalidInput` if `port` is 0.
    pub fn new(port: u16, environment: Environment) -> ArticleResult<Self> {
        if port == 0 {
            return Err(ArticleError::InvalidInput("port must be non-zero".into()));
        }

        Ok(Self { port, environment })
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn max_body_bytes(&self) -> usize {
        MAX_BODY_BYTES
    }
}

impl Default for CoreConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            environment: Environment::default(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_environment_parses_known_names() {
        assert_eq!("development".parse::<Environment>().unwrap(), Environment::Development);
        assert_eq!("staging".parse::<Environment>().unwrap(), Environment::Staging);
        assert_eq!(" production ".parse::<Environment>().unwrap(), Environment::Production);
        assert_eq!("test".parse::<Environment>().unwrap(), Environment::Test);
    }

    #[test]
    fn test_environment_rejects_unknown_names() {
        let err = "qa".parse::<Environment>().expect_err("should reject unknown env");
        assert!(matches!(err, ArticleError::InvalidInput(msg) if msg.contains("unknown environment")));
    }

    #[test]
    fn test_core_config_rejects_zero_port() {
        assert!(CoreConfig::new(0, Environment::Development).is_err());

        let cfg = CoreConfig::new(8080, Environment::Staging).expect("valid config");
        assert_eq!(cfg.port(), 8080);
        assert_eq!(cfg.environment().to_string(), "staging");
    }

    #[test]
    fn test_default_config() {
        let cfg = CoreConfig::default();
        assert_eq!(cfg.port(), DEFAULT_PORT);
        assert_eq!(cfg.environment(), Environment::Development);
        assert_eq!(cfg.max_body_bytes(), 1_048_576);
    }
}
