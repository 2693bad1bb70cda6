use std::env;
use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};
use dotenvy::dotenv;
use tracing::Level;

use crate::table::DEFAULT_PAGE_SIZE;

pub const DEFAULT_API_BASE_URL: &str = "http://localhost:5000";

#[derive(Debug, Clone)]
pub struct Config {
    pub api_base_url: String,
    pub page_size: usize,
    // no timeout unless configured
    pub request_timeout: Option<Duration>,

    // Logging
    pub log_dir: PathBuf,
    pub log_level: Level,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let page_size = match var("PAGE_SIZE") {
            Some(raw) => raw
                .trim()
                .parse::<usize>()
                .ok()
                .filter(|n| *n > 0)
                .with_context(|| format!("PAGE_SIZE must be a positive number, got {:?}", raw))?,
            None => DEFAULT_PAGE_SIZE,
        };

        let request_timeout = var("REQUEST_TIMEOUT_SECS")
            .map(|raw| {
                raw.trim()
                    .parse::<u64>()
                    .map(Duration::from_secs)
                    .with_context(|| format!("REQUEST_TIMEOUT_SECS must be whole seconds, got {:?}", raw))
            })
            .transpose()?;

        let log_level = var("LOG_LEVEL")
            .map(|raw| {
                raw.trim()
                    .parse::<Level>()
                    .with_context(|| format!("LOG_LEVEL is not a tracing level: {:?}", raw))
            })
            .transpose()?
            .unwrap_or(Level::DEBUG);

        Ok(Self {
            api_base_url: var("API_BASE_URL")
                .unwrap_or_else(|| DEFAULT_API_BASE_URL.to_string())
                .trim_end_matches('/')
                .to_string(),
            page_size,
            request_timeout,
            log_dir: var("LOG_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|| PathBuf::from("logs")),
            log_level,
        })
    }
}
