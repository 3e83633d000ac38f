use sqlx::postgres::PgConnectOptions;

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
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
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

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
        }
    }
}

/// Database configuration loaded from environment variables.
///
/// `DATABASE_USER` and `DATABASE_PASSWORD`, when set, override any
/// credentials embedded in `DATABASE_URL`.
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub url: String,
    pub user: Option<String>,
    pub password: Option<String>,
}

impl DatabaseConfig {
    /// Load configuration from environment variables.
    ///
    /// `DATABASE_URL` is required. `DATABASE_DRIVER` defaults to `postgres`
    /// and is checked at startup so a stale driver identifier from another
    /// deployment fails fast instead of producing confusing connect errors.
    pub fn from_env() -> Self {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set");

        let driver = std::env::var("DATABASE_DRIVER").unwrap_or_else(|_| "postgres".into());
        assert_eq!(
            driver, "postgres",
            "Unsupported DATABASE_DRIVER '{driver}': only 'postgres' is available"
        );

        Self {
            url,
            user: std::env::var("DATABASE_USER").ok(),
            password: std::env::var("DATABASE_PASSWORD").ok(),
        }
    }

    /// Build sqlx connect options, layering env credentials over the URL.
    pub fn connect_options(&self) -> PgConnectOptions {
        let mut options: PgConnectOptions = self
            .url
            .parse()
            .expect("DATABASE_URL must be a valid postgres URL");

        if let Some(user) = &self.user {
            options = options.username(user);
        }
        if let Some(password) = &self.password {
            options = options.password(password);
        }

        options
    }
}
