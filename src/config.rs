use crate::error::ExpertError;
use std::net::SocketAddr;
use std::time::Duration;

pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";
pub const DEFAULT_BIND: &str = "127.0.0.1:8501";

/// Process configuration, read once at startup and handed to constructors.
///
/// The API key is optional on purpose: a missing key only surfaces when a
/// completion is actually requested.
#[derive(Debug, Clone)]
pub struct Config {
    pub api_key: Option<String>,
    pub api_base: String,
    pub bind_addr: SocketAddr,
    pub request_timeout: Option<Duration>,
}

impl Config {
    pub fn from_env() -> Result<Self, ExpertError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self, ExpertError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let api_key = lookup("OPENAI_API_KEY")
            .map(|k| k.trim().to_string())
            .filter(|k| !k.is_empty());

        let api_base = lookup("OPENAI_BASE_URL")
            .map(|b| b.trim().trim_end_matches('/').to_string())
            .filter(|b| !b.is_empty())
            .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

        let bind_raw = lookup("EXPERT_AI_BIND").unwrap_or_else(|| DEFAULT_BIND.to_string());
        let bind_addr = bind_raw.trim().parse::<SocketAddr>().map_err(|e| {
            ExpertError::Config(format!("EXPERT_AI_BIND '{}' is not a socket address: {}", bind_raw, e))
        })?;

        let request_timeout = match lookup("EXPERT_AI_TIMEOUT_SECS") {
            Some(raw) => {
                let secs = raw.trim().parse::<u64>().map_err(|e| {
                    ExpertError::Config(format!("EXPERT_AI_TIMEOUT_SECS '{}' is not a number: {}", raw, e))
                })?;
                if secs == 0 {
                    return Err(ExpertError::Config(
                        "EXPERT_AI_TIMEOUT_SECS must be at least 1; unset it for no timeout".into(),
                    ));
                }
                Some(Duration::from_secs(secs))
            }
            None => None,
        };

        Ok(Self {
            api_key,
            api_base,
            bind_addr,
            request_timeout,
        })
    }
}
