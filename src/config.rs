/// Configuration constants for the GoLinks API
pub mod api {
    /// Default GoLinks API host
    pub const HOST_URL: &str = "https://api.golinks.io";

    /// Golinks collection endpoint
    pub const GOLINKS: &str = "golinks";

    /// Content type for write requests (the API does not accept JSON bodies)
    pub const FORM_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

    /// Total request timeout in seconds
    pub const REQUEST_TIMEOUT_SECS: u64 = 30;

    /// Connection timeout in seconds
    pub const CONNECT_TIMEOUT_SECS: u64 = 10;
}

/// Configuration constants for credentials
pub mod credentials {
    /// Environment variable holding the API token
    pub const TOKEN_ENV_VAR: &str = "GOLINKS_TOKEN";

    /// Environment variable overriding the API base URL
    pub const API_URL_ENV_VAR: &str = "GOLINKS_API_URL";
}

/// Default values for CLI
pub mod defaults {
    /// Default log level
    pub const LOG_LEVEL: &str = "warn";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_host_url_is_https() {
        assert!(api::HOST_URL.starts_with("https://"));
        assert!(!api::HOST_URL.ends_with('/'));
    }

    #[test]
    fn test_timeout_is_thirty_seconds() {
        assert_eq!(api::REQUEST_TIMEOUT_SECS, 30);
    }

    #[test]
    fn test_token_env_var() {
        assert_eq!(credentials::TOKEN_ENV_VAR, "GOLINKS_TOKEN");
    }
}
