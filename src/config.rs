use dotenv::dotenv;
use std::env;
use std::net::SocketAddr;
use std::time::Duration;

use crate::error::ConfigError;
use crate::models::form::FormId;

pub const DEFAULT_TARGET_FORM_ID: &str = "1";
pub const DEFAULT_WEBHOOK_TIMEOUT_SECS: u64 = 15;
pub const DEFAULT_SERVER_ADDR: &str = "0.0.0.0:3000";

/// Runtime settings for the forwarder service.
#[derive(Debug, Clone)]
pub struct ForwarderConfig {
    /// Outbound webhook endpoint (`FORM_WEBHOOK_URL`).
    pub webhook_url: String,
    /// The only form whose submissions are forwarded (`FORM_TARGET_ID`).
    pub target_form_id: FormId,
    /// Bound on a single delivery attempt (`FORM_WEBHOOK_TIMEOUT_SECS`).
    pub webhook_timeout: Duration,
    /// Token callers must pass as `?auth=` on the inbound endpoint (`WEBHOOK_AUTH_TOKEN`).
    pub inbound_auth_token: Option<String>,
    /// Listen address (`SERVER_ADDR`).
    pub server_addr: SocketAddr,
}

impl ForwarderConfig {
    /// Load configuration from the process environment, reading `.env` first if present.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenv().ok();
        Self::from_lookup(|name| env::var(name).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let webhook_url = lookup("FORM_WEBHOOK_URL")
            .filter(|v| !v.trim().is_empty())
            .ok_or(ConfigError::Missing("FORM_WEBHOOK_URL"))?;

        let parsed = reqwest::Url::parse(webhook_url.trim()).map_err(|e| ConfigError::Invalid {
            name: "FORM_WEBHOOK_URL",
            value: webhook_url.clone(),
            reason: e.to_string(),
        })?;
        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Invalid {
                name: "FORM_WEBHOOK_URL",
                value: webhook_url,
                reason: "scheme must be http or https".to_string(),
            });
        }

        let target_form_id = lookup("FORM_TARGET_ID")
            .filter(|v| !v.trim().is_empty())
            .map(FormId::new)
            .unwrap_or_else(|| FormId::new(DEFAULT_TARGET_FORM_ID));

        let webhook_timeout = match lookup("FORM_WEBHOOK_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| ConfigError::Invalid {
                    name: "FORM_WEBHOOK_TIMEOUT_SECS",
                    value: raw.clone(),
                    reason: e.to_string(),
                })?;
                if secs == 0 {
                    return Err(ConfigError::Invalid {
                        name: "FORM_WEBHOOK_TIMEOUT_SECS",
                        value: raw,
                        reason: "timeout must be at least one second".to_string(),
                    });
                }
                Duration::from_secs(secs)
            }
            None => Duration::from_secs(DEFAULT_WEBHOOK_TIMEOUT_SECS),
        };

        let inbound_auth_token = lookup("WEBHOOK_AUTH_TOKEN").filter(|v| !v.is_empty());

        let raw_addr = lookup("SERVER_ADDR").unwrap_or_else(|| DEFAULT_SERVER_ADDR.to_string());
        let server_addr = raw_addr
            .trim()
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::Invalid {
                name: "SERVER_ADDR",
                value: raw_addr.clone(),
                reason: e.to_string(),
            })?;

        Ok(Self {
            webhook_url: parsed.to_string(),
            target_form_id,
            webhook_timeout,
            inbound_auth_token,
            server_addr,
        })
    }
}
