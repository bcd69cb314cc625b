use anyhow::{ensure, Context, Result};
use std::env;
use std::str::FromStr;

#[derive(Debug, Clone)]
pub struct Config {
    pub auth_token: String,
    pub service_host: String,
    pub service_port: u16,
    pub reset_cron: String,
    pub reset_enabled: bool,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let auth_token =
            env::var("AUTH_TOKEN").context("AUTH_TOKEN environment variable is required")?;
        ensure!(!auth_token.is_empty(), "AUTH_TOKEN must not be empty");

        let service_host = env::var("SERVICE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let service_port = env::var("SERVICE_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse::<u16>()
            .context("SERVICE_PORT must be a valid port number (0-65535)")?;

        // Six-field cron syntax with seconds; the default fires hourly.
        let reset_cron = env::var("RESET_CRON").unwrap_or_else(|_| "0 0 * * * *".to_string());
        cron::Schedule::from_str(&reset_cron)
            .with_context(|| format!("RESET_CRON is not a valid cron expression: {}", reset_cron))?;

        let reset_enabled = env::var("RESET_ENABLED")
            .unwrap_or_else(|_| "true".to_string())
            .parse::<bool>()
            .context("RESET_ENABLED must be 'true' or 'false'")?;

        Ok(Config {
            auth_token,
            service_host,
            service_port,
            reset_cron,
            reset_enabled,
        })
    }

    pub fn log_startup(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Auth token: configured ({} chars)", self.auth_token.len());
        if self.reset_enabled {
            tracing::info!("  Periodic reset: {}", self.reset_cron);
        } else {
            tracing::info!("  Periodic reset: disabled");
        }
        tracing::info!(
            "  Service listening on: {}:{}",
            self.service_host,
            self.service_port
        );
    }
}
