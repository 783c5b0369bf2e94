use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS`.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// Cache service URL (`REDIS_URL`). When unset, the server falls back
    /// to an in-process cache.
    pub redis_url: Option<String>,
    /// TTL for catalog cache entries in seconds (default: `900`).
    pub cache_ttl_secs: u64,
    /// JWT signing configuration.
    pub jwt: JwtConfig,
}

impl ServerConfig {
    /// Load configuration from environment variables.
    ///
    /// | Env Var                | Required | Default                  |
    /// |------------------------|----------|--------------------------|
    /// | `HOST`                 | no       | `0.0.0.0`                |
    /// | `PORT`                 | no       | `3000`                   |
    /// | `CORS_ORIGINS`         | no       | `http://localhost:5173`  |
    /// | `REQUEST_TIMEOUT_SECS` | no       | `30`                     |
    /// | `REDIS_URL`            | no       | -- (in-process fallback) |
    /// | `CACHE_TTL_SECS`       | no       | `900`                    |
    /// | `JWT_SECRET`           | **yes**  | --                       |
    ///
    /// # Panics
    ///
    /// Panics on unparseable numeric values or a missing `JWT_SECRET`;
    /// misconfiguration should fail at startup.
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .expect("PORT must be a valid u16");
        let cors_origins = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();
        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".to_string())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");
        let redis_url = std::env::var("REDIS_URL").ok();
        let cache_ttl_secs: u64 = std::env::var("CACHE_TTL_SECS")
            .unwrap_or_else(|_| "900".to_string())
            .parse()
            .expect("CACHE_TTL_SECS must be a valid u64");

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            redis_url,
            cache_ttl_secs,
            jwt: JwtConfig::from_env(),
        }
    }
}
