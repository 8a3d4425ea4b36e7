//! Build-time Configuration
//!
//! Values are baked in when the bundle is compiled (`API_URL=... trunk build`).

use log::info;

const DEFAULT_API_URL: &str = "http://localhost:8080";

/// Header the server reads the anti-forgery token from
pub const CSRF_HEADER: &str = "X-CSRF-Token";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// API base URL without trailing slash
    pub api_url: String,
}

impl AppConfig {
    pub fn load() -> Self {
        Self {
            api_url: normalize_base_url(&try_load("API_URL", option_env!("API_URL"), DEFAULT_API_URL)),
        }
    }
}

fn try_load(key: &str, value: Option<&str>, default: &str) -> String {
    match value.map(str::trim).filter(|v| !v.is_empty()) {
        Some(v) => v.to_string(),
        None => {
            info!("[CONFIG] {key} not set, using default: {default}");
            default.to_string()
        }
    }
}

fn normalize_base_url(url: &str) -> String {
    url.trim_end_matches('/').to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_trailing_slashes_are_trimmed() {
        assert_eq!(normalize_base_url("https://api.example.com//"), "https://api.example.com");
        assert_eq!(normalize_base_url("https://api.example.com"), "https://api.example.com");
    }

    #[test]
    fn test_blank_value_falls_back_to_default() {
        assert_eq!(try_load("API_URL", Some("  "), DEFAULT_API_URL), DEFAULT_API_URL);
        assert_eq!(try_load("API_URL", None, DEFAULT_API_URL), DEFAULT_API_URL);
        assert_eq!(try_load("API_URL", Some("http://x"), DEFAULT_API_URL), "http://x");
    }
}
