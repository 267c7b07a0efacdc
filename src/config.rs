//! Runtime configuration read from the environment (and `.env` via dotenvy).

use std::env;
use std::str::FromStr;

use anyhow::{anyhow, Context, Result};

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;

const DEFAULT_ALLOWED_ORIGINS: [&str; 3] = [
    "http://localhost:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transport {
    Http,
    Stdio,
}

impl FromStr for Transport {
    type Err = anyhow::Error;

    fn from_str(value: &str) -> Result<Self> {
        match value.trim().to_lowercase().as_str() {
            "" | "http" => Ok(Self::Http),
            "stdio" => Ok(Self::Stdio),
            other => Err(anyhow!(
                "ADVISOR_TRANSPORT must be 'http' or 'stdio', got '{}'",
                other
            )),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AdvisorConfig {
    pub host: String,
    pub port: u16,
    pub transport: Transport,
    pub strict_input: bool,
    pub allowed_origins: Vec<String>,
}

impl Default for AdvisorConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            transport: Transport::Http,
            strict_input: false,
            allowed_origins: DEFAULT_ALLOWED_ORIGINS
                .iter()
                .map(|origin| origin.to_string())
                .collect(),
        }
    }
}

impl AdvisorConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from any key lookup; unset keys keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(host) = lookup("ADVISOR_HOST").filter(|host| !host.trim().is_empty()) {
            config.host = host.trim().to_string();
        }
        if let Some(port) = lookup("ADVISOR_PORT") {
            config.port = port
                .trim()
                .parse()
                .with_context(|| format!("ADVISOR_PORT is not a valid port: '{}'", port))?;
        }
        if let Some(transport) = lookup("ADVISOR_TRANSPORT") {
            config.transport = transport.parse()?;
        }
        if let Some(strict) = lookup("ADVISOR_STRICT_INPUT") {
            config.strict_input = parse_bool(&strict)
                .with_context(|| format!("ADVISOR_STRICT_INPUT is not a boolean: '{}'", strict))?;
        }
        if let Some(origins) = lookup("ADVISOR_ALLOWED_ORIGINS") {
            config.allowed_origins = origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect();
        }

        Ok(config)
    }

    pub fn bind_address(&self) -> (String, u16) {
        (self.host.clone(), self.port)
    }
}

fn parse_bool(value: &str) -> Result<bool> {
    match value.trim().to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        other => Err(anyhow!("unrecognized boolean '{}'", other)),
    }
}
