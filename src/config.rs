//! Frontend Configuration
//!
//! Resolved at build time so the bundle needs no runtime config fetch:
//! `FOOD_API_URL` and `FOOD_LOG_LEVEL` are read by `option_env!`.

use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_LOG_LEVEL: log::Level = log::Level::Info;

/// Where the food API lives and how chatty the console is
#[derive(Debug, Clone, PartialEq)]
pub struct ApiConfig {
    /// API base URL without trailing slash (e.g., "http://localhost:3333")
    pub base_url: String,
    pub log_level: log::Level,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            log_level: DEFAULT_LOG_LEVEL,
        }
    }

    pub fn with_log_level(mut self, level: log::Level) -> Self {
        self.log_level = level;
        self
    }

    /// Build-time configuration with defaults for anything unset
    pub fn from_env() -> Self {
        Self::from_values(option_env!("FOOD_API_URL"), option_env!("FOOD_LOG_LEVEL"))
    }

    fn from_values(url: Option<&str>, level: Option<&str>) -> Self {
        let level = level
            .and_then(|raw| log::Level::from_str(raw.trim()).ok())
            .unwrap_or(DEFAULT_LOG_LEVEL);
        Self::new(url.unwrap_or(DEFAULT_API_URL)).with_log_level(level)
    }

    /// Collection endpoint
    pub fn foods_url(&self) -> String {
        format!("{}/foods", self.base_url)
    }

    /// Single plate endpoint
    pub fn food_url(&self, id: u32) -> String {
        format!("{}/foods/{}", self.base_url, id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::new(DEFAULT_API_URL)
    }
}
