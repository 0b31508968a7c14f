use crate::services::catalog::OPEN_LIBRARY_URL;
use crate::view::render::OPEN_LIBRARY_COVERS_URL;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: &str = "7004";

/// Runtime settings, read from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: String,
    pub catalog_url: String,
    pub covers_url: String,
}

impl Config {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: lookup("PORT").unwrap_or_else(|| DEFAULT_PORT.to_string()),
            catalog_url: lookup("CATALOG_URL").unwrap_or_else(|| OPEN_LIBRARY_URL.to_string()),
            covers_url: lookup("COVERS_URL").unwrap_or_else(|| OPEN_LIBRARY_COVERS_URL.to_string()),
        }
    }

    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}
