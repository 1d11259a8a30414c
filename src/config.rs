use std::{env, net::SocketAddr};

const DEFAULT_DATABASE_URL: &str = "sqlite://mogofy.db?mode=rwc";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    /// Largest accepted request body, in bytes.
    pub body_limit: usize,
    /// In-flight requests served at once.
    pub concurrency_limit: usize,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key lookup. Unparseable numbers fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let database_url = lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.into());
        let host = lookup("APP_HOST").unwrap_or_else(|| "127.0.0.1".to_string());
        let port = parsed(&lookup, "APP_PORT").unwrap_or(3000);
        let body_limit = parsed(&lookup, "APP_BODY_LIMIT").unwrap_or(1024 * 1024);
        let concurrency_limit = parsed(&lookup, "APP_CONCURRENCY_LIMIT").unwrap_or(100);
        Ok(Self {
            database_url,
            host,
            port,
            body_limit,
            concurrency_limit,
        })
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip = self.host.parse::<std::net::IpAddr>()?;
        Ok(SocketAddr::from((ip, self.port)))
    }
}

fn parsed<T: std::str::FromStr>(lookup: &impl Fn(&str) -> Option<String>, key: &str) -> Option<T> {
    lookup(key).and_then(|v| v.parse::<T>().ok())
}
