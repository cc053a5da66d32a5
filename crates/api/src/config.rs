use adsite_core::media::DEFAULT_MEDIA_URL;
use adsite_db::DEFAULT_MAX_CONNECTIONS;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Public base URL that stored image paths are joined onto.
    pub media_url: String,
    /// Upper bound on pooled database connections (default: `20`).
    pub database_max_connections: u32,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                    | Default                 |
    /// |----------------------------|-------------------------|
    /// | `HOST`                     | `0.0.0.0`               |
    /// | `PORT`                     | `3000`                  |
    /// | `CORS_ORIGINS`             | `http://localhost:5173` |
    /// | `REQUEST_TIMEOUT_SECS`     | `30`                    |
    /// | `MEDIA_URL`                | `/media/`               |
    /// | `DATABASE_MAX_CONNECTIONS` | `20`                    |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let media_url = std::env::var("MEDIA_URL").unwrap_or_else(|_| DEFAULT_MEDIA_URL.into());

        let database_max_connections: u32 = std::env::var("DATABASE_MAX_CONNECTIONS")
            .map(|v| v.parse().expect("DATABASE_MAX_CONNECTIONS must be a valid u32"))
            .unwrap_or(DEFAULT_MAX_CONNECTIONS);

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            media_url,
            database_max_connections,
        }
    }
}

impl Default for ServerConfig {
    /// Local development defaults, used by tests.
    fn default() -> Self {
        Self {
            host: "127.0.0.1".into(),
            port: 3000,
            cors_origins: vec!["http://localhost:5173".into()],
            request_timeout_secs: 30,
            media_url: DEFAULT_MEDIA_URL.into(),
            database_max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}
