use anyhow::{Context, Result};
use dotenvy::dotenv;
use std::env;
use std::str::FromStr;

use crate::model::persona::Persona;

#[derive(Clone, Debug)]
pub struct Config {
    pub server_addr: String,
    pub api_prefix: String,

    // External agent
    pub agent_endpoint: String,
    pub agent_api_key: Option<String>,
    pub agent_timeout_secs: Option<u64>,
    pub hr_agent_id: String,
    pub hiring_agent_id: String,

    // Rate limiting
    pub rate_chat_per_min: u32,
    pub rate_api_per_min: u32,

    // Session store
    pub session_idle_secs: u64,
    pub session_capacity: u64,

    pub log_dir: String,
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server_addr: "127.0.0.1:8080".to_string(),
            api_prefix: "/api".to_string(),
            agent_endpoint: "http://127.0.0.1:3000/api/agent".to_string(),
            agent_api_key: None,
            agent_timeout_secs: None,
            hr_agent_id: "6926c30fe758b644132e0744".to_string(),
            hiring_agent_id: "6926c3a1e758b644132e0745".to_string(),
            rate_chat_per_min: 60,
            rate_api_per_min: 1000,
            session_idle_secs: 1800,
            session_capacity: 10_000,
            log_dir: "logs".to_string(),
            log_level: "debug".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenv().ok();

        let defaults = Self::default();

        Ok(Self {
            server_addr: env::var("SERVER_ADDR").unwrap_or(defaults.server_addr),
            api_prefix: env::var("API_PREFIX").unwrap_or(defaults.api_prefix),

            agent_endpoint: env::var("AGENT_ENDPOINT").unwrap_or(defaults.agent_endpoint),
            agent_api_key: env::var("AGENT_API_KEY").ok().filter(|k| !k.is_empty()),
            agent_timeout_secs: optional_var("AGENT_TIMEOUT_SECS")?,
            hr_agent_id: env::var("HR_AGENT_ID").unwrap_or(defaults.hr_agent_id),
            hiring_agent_id: env::var("HIRING_AGENT_ID").unwrap_or(defaults.hiring_agent_id),

            rate_chat_per_min: parsed_var("RATE_CHAT_PER_MIN", defaults.rate_chat_per_min)?,
            rate_api_per_min: parsed_var("RATE_API_PER_MIN", defaults.rate_api_per_min)?,

            session_idle_secs: parsed_var("SESSION_IDLE_SECS", defaults.session_idle_secs)?,
            session_capacity: parsed_var("SESSION_CAPACITY", defaults.session_capacity)?,

            log_dir: env::var("LOG_DIR").unwrap_or(defaults.log_dir),
            log_level: env::var("LOG_LEVEL").unwrap_or(defaults.log_level),
        })
    }

    /// Agent id sent along with every message of the given persona.
    pub fn agent_id(&self, persona: Persona) -> &str {
        match persona {
            Persona::Hr => &self.hr_agent_id,
            Persona::Hiring => &self.hiring_agent_id,
        }
    }
}

fn parsed_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{name} must be a valid number, got {raw:?}")),
        Err(_) => Ok(default),
    }
}

fn optional_var<T>(name: &str) -> Result<Option<T>>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) if raw.trim().is_empty() => Ok(None),
        Ok(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .with_context(|| format!("{name} must be a valid number, got {raw:?}")),
        Err(_) => Ok(None),
    }
}
