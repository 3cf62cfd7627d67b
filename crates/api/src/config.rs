use salesboard_core::report_month::DEFAULT_REPORT_YEAR;

use crate::seed::DEFAULT_SEED_URL;

/// Server configuration loaded from environment variables.
///
/// All fields have sensible defaults suitable for local development.
/// In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `8080`).
    pub port: u16,
    /// Maximum pooled database connections (default: `10`).
    pub db_max_connections: u32,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    /// A single `*` allows any origin.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Year that every `month` filter is anchored to (default: `2022`).
    pub report_year: i32,
    /// Seed dataset source.
    pub seed: SeedConfig,
}

/// Where and how the seed dataset is fetched.
#[derive(Debug, Clone)]
pub struct SeedConfig {
    /// URL of the JSON array of transactions.
    pub url: String,
    /// Timeout for the whole fetch, in seconds (default: `30`).
    pub timeout_secs: u64,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default    |
    /// |------------------------|------------|
    /// | `HOST`                 | `0.0.0.0`  |
    /// | `PORT`                 | `8080`     |
    /// | `DB_MAX_CONNECTIONS`   | `10`       |
    /// | `CORS_ORIGINS`         | `*`        |
    /// | `REQUEST_TIMEOUT_SECS` | `30`       |
    /// | `REPORT_YEAR`          | `2022`     |
    ///
    /// # Panics
    ///
    /// Panics if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "8080".into())
            .parse()
            .expect("PORT must be a valid u16");

        let db_max_connections: u32 = std::env::var("DB_MAX_CONNECTIONS")
            .unwrap_or_else(|_| "10".into())
            .parse()
            .expect("DB_MAX_CONNECTIONS must be a valid u32");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "*".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let report_year: i32 = std::env::var("REPORT_YEAR")
            .map(|v| v.parse().expect("REPORT_YEAR must be a valid year"))
            .unwrap_or(DEFAULT_REPORT_YEAR);

        Self {
            host,
            port,
            db_max_connections,
            cors_origins,
            request_timeout_secs,
            report_year,
            seed: SeedConfig::from_env(),
        }
    }
}

impl SeedConfig {
    /// Load seed configuration from environment variables.
    ///
    /// | Env Var             | Default                                                   |
    /// |---------------------|-----------------------------------------------------------|
    /// | `SEED_URL`          | `https://s3.amazonaws.com/roxiler.com/product_transaction.json` |
    /// | `SEED_TIMEOUT_SECS` | `30`                                                      |
    pub fn from_env() -> Self {
        let url = std::env::var("SEED_URL").unwrap_or_else(|_| DEFAULT_SEED_URL.into());

        let timeout_secs: u64 = std::env::var("SEED_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("SEED_TIMEOUT_SECS must be a valid u64");

        Self { url, timeout_secs }
    }
}
