use std::env;

/// Application configuration loaded from environment variables
///
/// Constructed once at startup and handed to the components that need
/// it; nothing reads the environment after this point and there are no
/// ambient globals (the signing secret in particular lives here).
#[derive(Clone, Debug)]
pub struct Config {
    /// Database connection URL
    /// Format: sqlite://PATH (the file is created if missing)
    pub database_url: String,

    /// Interface to bind the HTTP server to
    pub host: String,
    pub port: u16,

    /// Secret used to sign and verify identity tokens
    pub jwt_secret: String,

    /// Token lifetime in days
    pub token_ttl_days: i64,

    /// Maximum payload size for all requests (in bytes)
    pub max_payload_size: usize,

    /// Upper bound on pooled database connections
    pub max_db_connections: u32,

    /// Directory for rotated log files
    pub log_dir: String,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// Required:
    /// - DATABASE_URL: SQLite connection string
    /// - JWT_SECRET: token signing secret
    ///
    /// Optional (with defaults):
    /// - HOST (127.0.0.1), PORT (8080)
    /// - TOKEN_TTL_DAYS (7)
    /// - MAX_PAYLOAD_SIZE (1048576 = 1MB)
    /// - MAX_DB_CONNECTIONS (5)
    /// - LOG_DIR (logs)
    pub fn from_env() -> Result<Self, String> {
        // Load .env file if it exists
        dotenv::dotenv().ok();

        let database_url = env::var("DATABASE_URL")
            .map_err(|_| "DATABASE_URL must be set in .env file or environment".to_string())?;

        let jwt_secret = env::var("JWT_SECRET")
            .map_err(|_| "JWT_SECRET must be set in .env file or environment".to_string())?;

        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());

        let port = env::var("PORT")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(8080);

        let token_ttl_days = env::var("TOKEN_TTL_DAYS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(7);

        let max_payload_size = env::var("MAX_PAYLOAD_SIZE")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(1024 * 1024);

        let max_db_connections = env::var("MAX_DB_CONNECTIONS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(5);

        let log_dir = env::var("LOG_DIR").unwrap_or_else(|_| "logs".to_string());

        Ok(Config {
            database_url,
            host,
            port,
            jwt_secret,
            token_ttl_days,
            max_payload_size,
            max_db_connections,
            log_dir,
        })
    }
}
