//! Console configuration
//!
//! Compiled defaults, optionally overridden from the environment on native builds.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::state::DEFAULT_MAX_ENDPOINTS;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum ConfigError {
    #[error("Account ID is required")]
    MissingAccountId,
    #[error("SIP domain is required")]
    MissingSipDomain,
    #[error("Maximum endpoint count must be at least 1")]
    InvalidMaxEndpoints,
    #[error("Maximum endpoint count cannot exceed {0}")]
    MaxEndpointsTooHigh(u32),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConsoleConfig {
    /// Tenant account shown in the inbound routing instructions
    pub account_id: String,

    /// Domain carriers address inbound INVITEs to (e.g. "talkdesk.com")
    pub sip_domain: String,

    /// Port carriers register against in registered mode
    pub registration_port: u16,

    /// OPTIONS keepalive interval shown in the wizard
    pub options_interval_secs: u32,

    /// Upper bound for generated credential sets
    pub max_endpoints: u32,

    /// How long a "Copied" indicator stays visible
    pub copy_feedback_ms: u32,

    /// Toast auto-dismiss delay
    pub toast_ms: u32,
}

impl Default for ConsoleConfig {
    fn default() -> Self {
        Self {
            account_id: "664eeb61e0498715dc2dfeab".to_string(),
            sip_domain: "talkdesk.com".to_string(),
            registration_port: 5060,
            options_interval_secs: 30,
            max_endpoints: 20,
            copy_feedback_ms: 1800,
            toast_ms: 4000,
        }
    }
}

impl ConsoleConfig {
    /// Create config from environment variables, falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let defaults = Self::default();
        Self {
            account_id: std::env::var("TRUNK_CONSOLE_ACCOUNT_ID").unwrap_or(defaults.account_id),
            sip_domain: std::env::var("TRUNK_CONSOLE_SIP_DOMAIN").unwrap_or(defaults.sip_domain),
            max_endpoints: std::env::var("TRUNK_CONSOLE_MAX_ENDPOINTS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.max_endpoints),
            ..defaults
        }
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.account_id.trim().is_empty() {
            return Err(ConfigError::MissingAccountId);
        }
        if self.sip_domain.trim().is_empty() {
            return Err(ConfigError::MissingSipDomain);
        }
        if self.max_endpoints == 0 {
            return Err(ConfigError::InvalidMaxEndpoints);
        }
        if self.max_endpoints > DEFAULT_MAX_ENDPOINTS {
            return Err(ConfigError::MaxEndpointsTooHigh(DEFAULT_MAX_ENDPOINTS));
        }
        Ok(())
    }

    /// Host carriers put in the Request-URI of inbound INVITEs
    pub fn account_host(&self) -> String {
        format!("{}.{}", self.account_id, self.sip_domain)
    }

    pub fn request_uri_example(&self) -> String {
        format!("sip:+1123456789@{}", self.account_host())
    }

    pub fn account_header(&self) -> String {
        format!("X-Account-Id: {}", self.account_id)
    }
}
