//! Service configuration

/// Runtime configuration, loaded once at startup
#[derive(Debug, Clone)]
pub struct Config {
    /// SQLite connection URL
    pub database_url: String,
    /// HTTP port
    pub http_port: u16,
    /// Secret key required to authorize deletions
    pub api_key: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Every setting has a default; a missing `API_KEY` yields a placeholder
    /// value rather than a startup failure, which means deletion is
    /// effectively disabled until the key is configured.
    pub fn from_env() -> Self {
        Self {
            database_url: std::env::var("DATABASE_URL")
                .unwrap_or_else(|_| "sqlite://cafes.db?mode=rwc".into()),
            http_port: std::env::var("HTTP_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(8080),
            api_key: std::env::var("API_KEY").unwrap_or_else(|_| "api-key-not-configured".into()),
        }
    }
}
