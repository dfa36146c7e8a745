//! Backend endpoint configuration.

/// Where the case lookup backend listens when running locally.
pub const DEFAULT_API_BASE_URL: &str = "http://127.0.0.1:8000";

/// Path of the case lookup endpoint, relative to the base URL.
pub const FETCH_CASE_PATH: &str = "/api/fetch-case";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LookupConfig {
    /// Scheme, host and port of the backend, with or without a trailing slash
    pub api_base_url: String,
}

impl Default for LookupConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl LookupConfig {
    pub fn new() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }

    /// Point the client at a different backend (used by tests against a mock server)
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.api_base_url = base_url.into();
        self
    }

    fn base(&self) -> &str {
        self.api_base_url.trim_end_matches('/')
    }

    pub fn fetch_case_url(&self) -> String {
        format!("{}{}", self.base(), FETCH_CASE_PATH)
    }

    /// Root of the backend, answered with a welcome message when it is up
    pub fn root_url(&self) -> String {
        format!("{}/", self.base())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_points_at_local_backend() {
        let config = LookupConfig::default();
        assert_eq!(config.fetch_case_url(), "http://127.0.0.1:8000/api/fetch-case");
        assert_eq!(config.root_url(), "http://127.0.0.1:8000/");
    }

    #[test]
    fn test_trailing_slash_is_ignored() {
        let config = LookupConfig::new().with_base_url("https://courts.example.org/");
        assert_eq!(
            config.fetch_case_url(),
            "https://courts.example.org/api/fetch-case"
        );
        assert_eq!(config.root_url(), "https://courts.example.org/");
    }
}
