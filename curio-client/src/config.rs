//! Client configuration

/// Client configuration for connecting to the storefront backend
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Backend base URL (e.g., "https://api.curio.example")
    pub base_url: String,

    /// Asset base URL used to resolve relative image paths returned by
    /// the backend. Falls back to `{base_url}/images` when unset.
    pub asset_base: Option<String>,

    /// Bearer token for authenticated calls
    pub token: Option<String>,

    /// Request timeout in seconds
    pub timeout: u64,
}

impl ClientConfig {
    /// Create a new client configuration
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            asset_base: None,
            token: None,
            timeout: 30,
        }
    }

    /// Set the bearer token
    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.token = Some(token.into());
        self
    }

    /// Set the asset base URL
    pub fn with_asset_base(mut self, asset_base: impl Into<String>) -> Self {
        self.asset_base = Some(asset_base.into());
        self
    }

    /// Set the request timeout
    pub fn with_timeout(mut self, seconds: u64) -> Self {
        self.timeout = seconds;
        self
    }

    /// Resolved asset base URL
    pub fn asset_base(&self) -> String {
        match &self.asset_base {
            Some(base) => base.trim_end_matches('/').to_string(),
            None => format!("{}/images", self.base_url.trim_end_matches('/')),
        }
    }

    /// Create an HTTP client from this configuration
    pub fn build_http_client(&self) -> super::HttpClient {
        super::HttpClient::new(self)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::new("http://localhost:8080")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn asset_base_falls_back_to_base_url() {
        let config = ClientConfig::new("http://localhost:8080/");
        assert_eq!(config.asset_base(), "http://localhost:8080/images");

        let config = config.with_asset_base("https://cdn.curio.example/assets/");
        assert_eq!(config.asset_base(), "https://cdn.curio.example/assets");
    }
}
