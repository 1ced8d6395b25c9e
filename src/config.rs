//! Runtime configuration read from the environment.
//!
//! | Variable                  | Default                                       |
//! |---------------------------|-----------------------------------------------|
//! | `COMANDA_MESSAGING_HOST`  | `wa.me`                                       |
//! | `COMANDA_SUBMIT_DELAY_MS` | `1500`                                        |
//! | `COMANDA_STATUS_RESET_MS` | `3000`                                        |
//! | `COMANDA_CHANNEL_BUFFER`  | `32`                                          |
//! | `COMANDA_OPEN_LINKS`      | `false`: deep-links are only logged           |
//! | `API_KEY` / `GEMINI_API_KEY` | unset: suggestions come from the preset menu |
//! | `GEMINI_MODEL`            | `gemini-2.5-flash`                            |
//! | `GEMINI_BASE_URL`         | `https://generativelanguage.googleapis.com`   |

use crate::formatter::DEFAULT_MESSAGING_HOST;
use crate::submission::{ControllerSettings, DEFAULT_STATUS_RESET};
use crate::suggestion::{DEFAULT_GEMINI_BASE_URL, DEFAULT_GEMINI_MODEL};
use crate::transport::DEFAULT_SUBMIT_DELAY;
use std::time::Duration;
use thiserror::Error;

pub const DEFAULT_CHANNEL_BUFFER: usize = 32;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{key} must be a non-negative integer, got {value:?}")]
    InvalidNumber { key: &'static str, value: String },

    #[error("{key} must be at least 1")]
    ZeroBuffer { key: &'static str },

    #[error("{key} must be true/false, yes/no or 1/0, got {value:?}")]
    InvalidFlag { key: &'static str, value: String },
}

/// Settings for the Gemini suggestion adapter.
#[derive(Clone, PartialEq, Eq)]
pub struct GeminiConfig {
    pub api_key: String,
    pub model: String,
    pub base_url: String,
}

impl std::fmt::Debug for GeminiConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiConfig")
            .field("model", &self.model)
            .field("base_url", &self.base_url)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComandaConfig {
    pub messaging_host: String,
    /// Latency of the simulated kitchen transport.
    pub submit_delay: Duration,
    pub status_reset_delay: Duration,
    /// Mailbox size of each actor.
    pub channel_buffer: usize,
    /// Hand deep-links to the platform URL handler instead of only logging them.
    pub open_links: bool,
    /// `None` when no API key is configured.
    pub gemini: Option<GeminiConfig>,
}

impl Default for ComandaConfig {
    fn default() -> Self {
        Self {
            messaging_host: DEFAULT_MESSAGING_HOST.to_string(),
            submit_delay: DEFAULT_SUBMIT_DELAY,
            status_reset_delay: DEFAULT_STATUS_RESET,
            channel_buffer: DEFAULT_CHANNEL_BUFFER,
            open_links: false,
            gemini: None,
        }
    }
}

impl ComandaConfig {
    /// Reads the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads settings through `lookup`. Blank values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|value| value.trim().to_string())
                .filter(|value| !value.is_empty())
        };
        let defaults = Self::default();

        let channel_buffer = match get("COMANDA_CHANNEL_BUFFER") {
            Some(raw) => match parse_number("COMANDA_CHANNEL_BUFFER", &raw)? {
                0 => return Err(ConfigError::ZeroBuffer { key: "COMANDA_CHANNEL_BUFFER" }),
                n => n as usize,
            },
            None => defaults.channel_buffer,
        };

        let gemini = get("API_KEY")
            .or_else(|| get("GEMINI_API_KEY"))
            .map(|api_key| GeminiConfig {
                api_key,
                model: get("GEMINI_MODEL").unwrap_or_else(|| DEFAULT_GEMINI_MODEL.to_string()),
                base_url: get("GEMINI_BASE_URL")
                    .unwrap_or_else(|| DEFAULT_GEMINI_BASE_URL.to_string()),
            });

        Ok(Self {
            messaging_host: get("COMANDA_MESSAGING_HOST").unwrap_or(defaults.messaging_host),
            submit_delay: duration_ms(get("COMANDA_SUBMIT_DELAY_MS"), "COMANDA_SUBMIT_DELAY_MS")?
                .unwrap_or(defaults.submit_delay),
            status_reset_delay: duration_ms(
                get("COMANDA_STATUS_RESET_MS"),
                "COMANDA_STATUS_RESET_MS",
            )?
            .unwrap_or(defaults.status_reset_delay),
            channel_buffer,
            open_links: get("COMANDA_OPEN_LINKS")
                .map(|raw| parse_flag("COMANDA_OPEN_LINKS", &raw))
                .transpose()?
                .unwrap_or(defaults.open_links),
            gemini,
        })
    }

    pub fn controller_settings(&self) -> ControllerSettings {
        ControllerSettings {
            messaging_host: self.messaging_host.clone(),
            status_reset_delay: self.status_reset_delay,
        }
    }
}

fn parse_number(key: &'static str, raw: &str) -> Result<u64, ConfigError> {
    raw.parse::<u64>().map_err(|_| ConfigError::InvalidNumber {
        key,
        value: raw.to_string(),
    })
}

fn parse_flag(key: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Ok(true),
        "0" | "false" | "no" => Ok(false),
        _ => Err(ConfigError::InvalidFlag {
            key,
            value: raw.to_string(),
        }),
    }
}

fn duration_ms(raw: Option<String>, key: &'static str) -> Result<Option<Duration>, ConfigError> {
    raw.map(|raw| parse_number(key, &raw).map(Duration::from_millis))
        .transpose()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let vars: HashMap<String, String> = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| vars.get(key).cloned()
    }

    #[test]
    fn test_empty_environment_gives_defaults() {
        let config = ComandaConfig::from_lookup(lookup(&[])).unwrap();
        assert_eq!(config, ComandaConfig::default());
        assert_eq!(config.submit_delay, Duration::from_millis(1500));
        assert_eq!(config.status_reset_delay, Duration::from_millis(3000));
        assert!(config.gemini.is_none());
    }

    #[test]
    fn test_overrides_are_read() {
        let config = ComandaConfig::from_lookup(lookup(&[
            ("COMANDA_MESSAGING_HOST", "api.whatsapp.com"),
            ("COMANDA_SUBMIT_DELAY_MS", "10"),
            ("COMANDA_STATUS_RESET_MS", " 250 "),
            ("COMANDA_CHANNEL_BUFFER", "4"),
        ]))
        .unwrap();

        assert_eq!(config.messaging_host, "api.whatsapp.com");
        assert_eq!(config.submit_delay, Duration::from_millis(10));
        assert_eq!(config.status_reset_delay, Duration::from_millis(250));
        assert_eq!(config.channel_buffer, 4);
        assert_eq!(
            config.controller_settings().status_reset_delay,
            Duration::from_millis(250)
        );
    }

    #[test]
    fn test_api_key_enables_gemini() {
        let config = ComandaConfig::from_lookup(lookup(&[
            ("GEMINI_API_KEY", "secret"),
            ("GEMINI_MODEL", "gemini-pro"),
        ]))
        .unwrap();

        let gemini = config.gemini.unwrap();
        assert_eq!(gemini.api_key, "secret");
        assert_eq!(gemini.model, "gemini-pro");
        assert_eq!(gemini.base_url, DEFAULT_GEMINI_BASE_URL);
        assert!(!format!("{gemini:?}").contains("secret"));
    }

    #[test]
    fn test_api_key_takes_precedence() {
        let config =
            ComandaConfig::from_lookup(lookup(&[("API_KEY", "first"), ("GEMINI_API_KEY", "second")]))
                .unwrap();
        assert_eq!(config.gemini.unwrap().api_key, "first");
    }

    #[test]
    fn test_blank_api_key_is_unset() {
        let config = ComandaConfig::from_lookup(lookup(&[("API_KEY", "  ")])).unwrap();
        assert!(config.gemini.is_none());
    }

    #[test]
    fn test_open_links_flag() {
        assert!(!ComandaConfig::from_lookup(lookup(&[])).unwrap().open_links);
        for on in ["1", "true", "YES"] {
            let config = ComandaConfig::from_lookup(lookup(&[("COMANDA_OPEN_LINKS", on)])).unwrap();
            assert!(config.open_links, "{on}");
        }
        let config = ComandaConfig::from_lookup(lookup(&[("COMANDA_OPEN_LINKS", "no")])).unwrap();
        assert!(!config.open_links);
        assert_eq!(
            ComandaConfig::from_lookup(lookup(&[("COMANDA_OPEN_LINKS", "maybe")])),
            Err(ConfigError::InvalidFlag {
                key: "COMANDA_OPEN_LINKS",
                value: "maybe".into()
            })
        );
    }

    #[test]
    fn test_malformed_numbers_are_rejected() {
        assert_eq!(
            ComandaConfig::from_lookup(lookup(&[("COMANDA_SUBMIT_DELAY_MS", "soon")])),
            Err(ConfigError::InvalidNumber {
                key: "COMANDA_SUBMIT_DELAY_MS",
                value: "soon".into()
            })
        );
        assert_eq!(
            ComandaConfig::from_lookup(lookup(&[("COMANDA_CHANNEL_BUFFER", "0")])),
            Err(ConfigError::ZeroBuffer { key: "COMANDA_CHANNEL_BUFFER" })
        );
    }
}
