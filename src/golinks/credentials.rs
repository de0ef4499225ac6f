//! GoLinks token resolution from configuration sources

use log::debug;

use crate::config::credentials;
use crate::error::{GolinksError, Result};

/// Token resolution with environment fallback
#[derive(Debug, Default)]
pub struct TokenResolver;

impl TokenResolver {
    pub fn new() -> Self {
        Self
    }

    /// Resolve token from configuration with fallback:
    /// 1. Explicit value (CLI argument)
    /// 2. GOLINKS_TOKEN environment variable
    ///
    /// A missing or blank token is a configuration error.
    pub fn resolve(&self, explicit: Option<&str>) -> Result<String> {
        let env_token = std::env::var(credentials::TOKEN_ENV_VAR).ok();
        self.resolve_from(explicit, env_token.as_deref())
    }

    fn resolve_from(&self, explicit: Option<&str>, env_token: Option<&str>) -> Result<String> {
        let token = match (explicit, env_token) {
            (Some(token), _) => {
                debug!("Using token from explicit configuration");
                token
            }
            (None, Some(token)) => {
                debug!(
                    "Using token from {} environment variable",
                    credentials::TOKEN_ENV_VAR
                );
                token
            }
            (None, None) => "",
        };

        let token = token.trim();
        if token.is_empty() {
            return Err(GolinksError::Config(Self::token_missing_message()));
        }
        Ok(token.to_string())
    }

    fn token_missing_message() -> String {
        format!(
            "missing or empty GoLinks API token. Set it with one of:\n\
             \n\
             1. CLI argument:      golinksctl --token <TOKEN>\n\
             2. Environment var:   export {}=<TOKEN>\n\
             \n\
             If either is already set, ensure the value is not empty.",
            credentials::TOKEN_ENV_VAR
        )
    }
}
