//! Token validation against the API root

use log::debug;
use serde::Deserialize;

use crate::error::{GolinksError, Result};
use crate::golinks::GolinksClient;

/// Result of a sign-in
///
/// The API has no session tokens; the bearer token that was validated is
/// handed back unchanged.
#[derive(Deserialize, Debug, Clone, Default)]
pub struct AuthResponse {
    #[serde(default)]
    pub user_id: Option<i64>,
    #[serde(default)]
    pub username: Option<String>,
    #[serde(default)]
    pub token: String,
}

impl GolinksClient {
    /// Validate the configured token with a GET on the API root
    ///
    /// A token the root endpoint does not check is only caught on first
    /// real use.
    pub async fn sign_in(&self) -> Result<AuthResponse> {
        if self.token().is_empty() {
            return Err(GolinksError::Config("token is required".to_string()));
        }

        let url = self.url("/");
        debug!("Validating token against {}", url);

        self.execute(self.get(&url)).await?;

        Ok(AuthResponse {
            token: self.token().to_string(),
            ..Default::default()
        })
    }
}
