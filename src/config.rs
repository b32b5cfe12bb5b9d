use actix_web::http::Uri;
use anyhow::{bail, Context};
use serde::{Deserialize, Serialize};
use std::env;

pub const DEFAULT_SEARCH_API_URL: &str = "https://www.googleapis.com/customsearch/v1";
pub const DEFAULT_QUERY: &str = "yarn sale site:etsy.com";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
    pub search: SearchConfig,
    pub security: SecurityConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SearchConfig {
    #[serde(skip_serializing)]
    pub api_key: String,
    pub engine_id: String,
    pub api_url: String,
    pub default_query: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SecurityConfig {
    pub allowed_origins: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 8080,
                workers: num_cpus::get(),
            },
            search: SearchConfig {
                api_key: String::new(),
                engine_id: String::new(),
                api_url: DEFAULT_SEARCH_API_URL.to_string(),
                default_query: DEFAULT_QUERY.to_string(),
            },
            security: SecurityConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Config::default();

        // Server configuration
        if let Some(host) = lookup("HOST") {
            config.server.host = host;
        }
        if let Some(port) = lookup("PORT") {
            config.server.port = port
                .parse()
                .with_context(|| format!("Invalid PORT value: {}", port))?;
        }
        if let Some(workers) = lookup("WORKERS") {
            config.server.workers = workers
                .parse()
                .with_context(|| format!("Invalid WORKERS value: {}", workers))?;
        }

        // Search provider configuration
        config.search.api_key = required(&lookup, "GOOGLE_API_KEY")?;
        config.search.engine_id = required(&lookup, "GOOGLE_CSE_ID")?;
        if let Some(api_url) = lookup("SEARCH_API_URL") {
            config.search.api_url = api_url;
        }
        if let Some(default_query) = lookup("DEFAULT_QUERY") {
            config.search.default_query = default_query;
        }

        // Security configuration
        if let Some(allowed_origins) = lookup("ALLOWED_ORIGINS") {
            config.security.allowed_origins = allowed_origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect();
            for origin in &config.security.allowed_origins {
                if origin != "*" {
                    origin
                        .parse::<Uri>()
                        .with_context(|| format!("Invalid ALLOWED_ORIGINS entry: {}", origin))?;
                }
            }
        }

        Ok(config)
    }
}

fn required<F>(lookup: &F, name: &str) -> anyhow::Result<String>
where
    F: Fn(&str) -> Option<String>,
{
    match lookup(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => bail!("{} must be set", name),
    }
}
