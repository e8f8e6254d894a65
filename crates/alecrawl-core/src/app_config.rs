use std::net::SocketAddr;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Environment {
    Development,
    Test,
    Production,
}

impl std::fmt::Display for Environment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Environment::Development => write!(f, "development"),
            Environment::Test => write!(f, "test"),
            Environment::Production => write!(f, "production"),
        }
    }
}

/// Runtime configuration shared by the server and CLI binaries.
///
/// Every field has a usable default; the planner talks to a public API and
/// needs no secrets.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub env: Environment,
    pub bind_addr: SocketAddr,
    pub log_level: String,
    pub openbrewery_base_url: String,
    pub fetch_timeout_secs: u64,
    pub fetch_user_agent: String,
    /// Page size for the brewery list request.
    pub fetch_per_page: u32,
    pub fetch_max_retries: u32,
    pub retry_backoff_base_ms: u64,
}
