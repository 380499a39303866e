//! Runtime configuration
//!
//! Values come from the process environment on native builds (after `.env`
//! and the bundled `assets/config.env` have been loaded by `main`). Browser
//! builds have no process environment, so they read the bundled file
//! directly.

use crate::error::{WidgetError, WidgetResult};
use once_cell::sync::Lazy;
use std::time::Duration;

/// Bundled config for builds without a `.env` (web, iOS/Android)
pub const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

pub const DEFAULT_CHAT_PATH: &str = "/chat";
pub const DEFAULT_FALLBACK_MESSAGE: &str = "Sorry, something went wrong. Please try again.";
#[cfg(not(target_arch = "wasm32"))]
pub const DEFAULT_SERVER_URL: &str = "http://127.0.0.1:5000";

static CONFIG: Lazy<WidgetConfig> = Lazy::new(WidgetConfig::from_env);

/// Process-wide configuration, read on first use.
pub fn config() -> &'static WidgetConfig {
    &CONFIG
}

#[derive(Clone, Debug, PartialEq)]
pub struct WidgetConfig {
    pub server_url: Option<String>,
    pub chat_path: String,
    pub fallback_message: String,
    pub widget_enabled: bool,
    pub request_timeout: Option<Duration>,
    pub log_level: tracing::Level,
}

impl Default for WidgetConfig {
    fn default() -> Self {
        Self {
            server_url: None,
            chat_path: DEFAULT_CHAT_PATH.to_string(),
            fallback_message: DEFAULT_FALLBACK_MESSAGE.to_string(),
            widget_enabled: true,
            request_timeout: None,
            log_level: tracing::Level::INFO,
        }
    }
}

impl WidgetConfig {
    #[cfg(not(target_arch = "wasm32"))]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    #[cfg(target_arch = "wasm32")]
    pub fn from_env() -> Self {
        let bundled: std::collections::HashMap<String, String> =
            parse_env_file(BUNDLED_CONFIG).into_iter().collect();
        Self::from_lookup(|key| bundled.get(key).cloned())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        Self {
            server_url: non_empty("CHAT_SERVER_URL"),
            chat_path: non_empty("CHAT_ENDPOINT_PATH").unwrap_or(defaults.chat_path),
            fallback_message: non_empty("CHAT_FALLBACK_MESSAGE")
                .unwrap_or(defaults.fallback_message),
            widget_enabled: non_empty("CHAT_WIDGET_ENABLED")
                .and_then(|value| parse_flag(&value))
                .unwrap_or(defaults.widget_enabled),
            request_timeout: non_empty("CHAT_REQUEST_TIMEOUT_SECS")
                .and_then(|value| value.trim().parse::<u64>().ok())
                .filter(|secs| *secs > 0)
                .map(Duration::from_secs),
            log_level: non_empty("LOG_LEVEL")
                .and_then(|value| value.trim().parse::<tracing::Level>().ok())
                .unwrap_or(defaults.log_level),
        }
    }

    /// Absolute URL of the chat endpoint.
    pub fn chat_url(&self) -> WidgetResult<String> {
        let base = match &self.server_url {
            Some(url) => url.clone(),
            None => default_server_url()?,
        };
        join_url(&base, &self.chat_path)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn default_server_url() -> WidgetResult<String> {
    Ok(DEFAULT_SERVER_URL.to_string())
}

#[cfg(target_arch = "wasm32")]
fn default_server_url() -> WidgetResult<String> {
    web_sys::window()
        .and_then(|window| window.location().origin().ok())
        .ok_or_else(|| WidgetError::Config("page origin is unavailable".to_string()))
}

fn join_url(base: &str, path: &str) -> WidgetResult<String> {
    let base = base.trim().trim_end_matches('/');
    if !(base.starts_with("http://") || base.starts_with("https://")) {
        return Err(WidgetError::Config(format!(
            "CHAT_SERVER_URL must be an http(s) URL, got '{}'",
            base
        )));
    }
    let path = path.trim();
    if path.is_empty() {
        return Ok(base.to_string());
    }
    if path.starts_with('/') {
        Ok(format!("{}{}", base, path))
    } else {
        Ok(format!("{}/{}", base, path))
    }
}

fn parse_flag(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}

/// Parse `KEY=VALUE` lines, skipping comments and blanks.
pub fn parse_env_file(contents: &str) -> Vec<(String, String)> {
    contents
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .filter_map(|line| line.split_once('='))
        .map(|(key, value)| (key.trim().to_string(), value.trim().to_string()))
        .collect()
}
