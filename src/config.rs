//! Application configuration loaded from environment variables.

use std::time::Duration;

use actix_web::cookie::Key;

use crate::errors::AppError;

const DEFAULT_BIND_ADDR: &str = "127.0.0.1:8080";
const DEFAULT_SUBMIT_DELAY_MS: u64 = 2000;
const DEFAULT_APP_NAME: &str = "SIRENA-TI";
const MIN_SESSION_KEY_LEN: usize = 64;

#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Address the HTTP server binds to
    pub bind_addr: String,
    /// Whether the registration window is open
    pub registration_open: bool,
    /// Simulated latency between a valid submit and success
    pub submit_delay: Duration,
    /// Cookie signing key material, if configured
    pub session_key: Option<String>,
    pub app_name: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            bind_addr: DEFAULT_BIND_ADDR.to_string(),
            registration_open: true,
            submit_delay: Duration::from_millis(DEFAULT_SUBMIT_DELAY_MS),
            session_key: None,
            app_name: DEFAULT_APP_NAME.to_string(),
        }
    }
}

impl AppConfig {
    /// Read the process environment (after `.env`, if present).
    pub fn from_env() -> Result<Self, AppError> {
        if let Err(e) = dotenvy::dotenv() {
            if !e.not_found() {
                return Err(AppError::Config(format!("Failed to read .env: {e}")));
            }
        }
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup. Missing keys fall back to defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, AppError> {
        let defaults = Self::default();

        let registration_open = match lookup("REGISTRATION_OPEN") {
            Some(raw) => parse_flag(&raw).ok_or_else(|| {
                AppError::Config(format!("Invalid REGISTRATION_OPEN: {raw}"))
            })?,
            None => defaults.registration_open,
        };

        let submit_delay = match lookup("SUBMIT_DELAY_MS") {
            Some(raw) => raw
                .trim()
                .parse::<u64>()
                .map(Duration::from_millis)
                .map_err(|_| AppError::Config(format!("Invalid SUBMIT_DELAY_MS: {raw}")))?,
            None => defaults.submit_delay,
        };

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or(defaults.bind_addr),
            registration_open,
            submit_delay,
            session_key: lookup("SESSION_KEY"),
            app_name: lookup("APP_NAME").unwrap_or(defaults.app_name),
        })
    }

    /// Cookie key from `SESSION_KEY`, or a random one (sessions lost on restart).
    pub fn cookie_key(&self) -> Key {
        match &self.session_key {
            Some(val) if val.len() >= MIN_SESSION_KEY_LEN => {
                log::info!("Using SESSION_KEY from environment");
                Key::from(val.as_bytes())
            }
            Some(val) => {
                log::warn!(
                    "SESSION_KEY too short ({} bytes, need {MIN_SESSION_KEY_LEN}+), generating random key",
                    val.len()
                );
                Key::generate()
            }
            None => {
                log::warn!("No SESSION_KEY set, generating random key (sessions lost on restart)");
                Key::generate()
            }
        }
    }
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
