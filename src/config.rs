use anyhow::{anyhow, Result};
use std::env;

/// Runtime configuration sourced from the process environment.
#[derive(Debug, Clone)]
pub struct Config {
    /// Telegram bot API token. Required and must be non-empty.
    pub telegram_bot_token: String,
    /// Port for the health check HTTP server.
    pub http_port: u16,
}

impl Config {
    /// Loads the configuration from environment variables.
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let port_str = env::var("HTTP_PORT")
            .unwrap_or_else(|_| "3000".to_string());
        let http_port = port_str.trim()
            .parse()
            .map_err(|_| anyhow!("Invalid HTTP_PORT"))?;

        Ok(Config {
            telegram_bot_token: token,
            http_port,
        })
    }
}
