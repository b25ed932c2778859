/// Default session lifetime in days.
const DEFAULT_SESSION_EXPIRY_DAYS: i64 = 7;

/// Runtime settings for the HTTP server, read once at startup.
///
/// Every knob has a development-friendly default; deployments override
/// them through the environment.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Interface to bind, `HOST` (default `0.0.0.0`).
    pub host: String,
    /// TCP port to listen on, `PORT` (default `5555`).
    pub port: u16,
    /// Browser origins allowed by CORS, `CORS_ORIGINS` as a
    /// comma-separated list (default `http://localhost:3000`).
    pub cors_origins: Vec<String>,
    /// Per-request timeout in seconds, `REQUEST_TIMEOUT_SECS` (default `30`).
    pub request_timeout_secs: u64,
    /// How long a login session stays valid, `SESSION_EXPIRY_DAYS`
    /// (default `7`).
    pub session_expiry_days: i64,
}

/// Read `name` from the environment, falling back to `default` when unset.
fn env_or(name: &str, default: &str) -> String {
    std::env::var(name).unwrap_or_else(|_| default.to_string())
}

impl ServerConfig {
    /// Build the configuration from the process environment.
    ///
    /// A value that is present but unparseable aborts startup; running
    /// with a half-applied configuration is worse than not starting.
    pub fn from_env() -> Self {
        let port: u16 = env_or("PORT", "5555")
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = env_or("CORS_ORIGINS", "http://localhost:3000")
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = env_or("REQUEST_TIMEOUT_SECS", "30")
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let session_expiry_days: i64 = env_or(
            "SESSION_EXPIRY_DAYS",
            &DEFAULT_SESSION_EXPIRY_DAYS.to_string(),
        )
        .parse()
        .expect("SESSION_EXPIRY_DAYS must be a valid i64");

        Self {
            host: env_or("HOST", "0.0.0.0"),
            port,
            cors_origins,
            request_timeout_secs,
            session_expiry_days,
        }
    }
}
