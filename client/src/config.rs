//! Backend API configuration.
//!
//! The admin backend base URL is fixed at build time. `ADMIN_API_URL` overrides
//! the default same-origin `/api/` prefix when the bundle is compiled.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

pub const DEFAULT_API_BASE_URL: &str = "/api/";

/// Where the admin REST backend lives.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ApiConfig {
    base_url: String,
}

impl ApiConfig {
    /// Build a config for `base_url`, normalized to end with exactly one `/`.
    pub fn new(base_url: impl Into<String>) -> Self {
        let raw = base_url.into();
        let trimmed = raw.trim().trim_end_matches('/');
        Self { base_url: format!("{trimmed}/") }
    }

    /// Config baked in at compile time from `ADMIN_API_URL`.
    pub fn from_build_env() -> Self {
        Self::new(option_env!("ADMIN_API_URL").unwrap_or(DEFAULT_API_BASE_URL))
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Absolute endpoint URL for a path relative to the base.
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path.trim_start_matches('/'))
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}
