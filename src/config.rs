//! Client Configuration
//!
//! The remote store location is fixed at build time through the
//! `USER_API_BASE_URL` environment variable.

use log::LevelFilter;
use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

use crate::models::UserId;

/// Store used when no base URL is configured
pub const DEFAULT_BASE_URL: &str = "https://list-user-api.onrender.com";

/// Console log level
pub const LOG_LEVEL: LevelFilter = if cfg!(debug_assertions) {
    LevelFilter::Debug
} else {
    LevelFilter::Info
};

/// How long a toast stays on screen
pub const TOAST_TIMEOUT_MS: u32 = 4_000;

// RFC 3986 unreserved characters stay as-is in a path segment
const PATH_SEGMENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'~');

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url }
    }

    pub fn from_env() -> Self {
        Self::new(option_env!("USER_API_BASE_URL").unwrap_or(DEFAULT_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Collection URL (`GET`, `POST`)
    pub fn users_url(&self) -> String {
        format!("{}/users", self.base_url)
    }

    /// Single record URL (`PUT`, `DELETE`)
    pub fn user_url(&self, id: &UserId) -> String {
        let id = id.to_string();
        format!("{}/users/{}", self.base_url, utf8_percent_encode(&id, PATH_SEGMENT))
    }
}
