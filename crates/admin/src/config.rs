/// Default backend location (the admin API's dev address).
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Admin client configuration loaded from environment variables.
///
/// No request timeout is configured here; the transport default applies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdminConfig {
    /// Backend base URL without a trailing slash.
    pub api_base_url: String,
}

impl Default for AdminConfig {
    fn default() -> Self {
        Self {
            api_base_url: DEFAULT_API_BASE_URL.to_string(),
        }
    }
}

impl AdminConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var        | Default                 |
    /// |----------------|-------------------------|
    /// | `API_BASE_URL` | `http://localhost:8000` |
    pub fn from_env() -> Self {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let api_base_url = lookup("API_BASE_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string());

        Self { api_base_url }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_points_at_local_backend() {
        let config = AdminConfig::from_lookup(|_| None);
        assert_eq!(config, AdminConfig::default());
        assert_eq!(config.api_base_url, "http://localhost:8000");
    }

    #[test]
    fn trailing_slash_is_stripped() {
        let config = AdminConfig::from_lookup(|_| Some("https://admin.example/api/".into()));
        assert_eq!(config.api_base_url, "https://admin.example/api");
    }

    #[test]
    fn blank_value_falls_back_to_default() {
        let config = AdminConfig::from_lookup(|_| Some("  ".into()));
        assert_eq!(config.api_base_url, DEFAULT_API_BASE_URL);
    }
}
