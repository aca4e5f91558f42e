use crate::constants::{DEFAULT_ALLOWED_ORIGIN, DEFAULT_PROVIDER};
use std::path::PathBuf;
use std::time::Duration;

/// Get HTTP port from environment variable or use default
pub fn get_port() -> u16 {
    std::env::var("HARMONIQ_PORT")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(7779)
}

/// Get dashboard templates file from environment variable or use default
pub fn get_templates_path() -> PathBuf {
    std::env::var("HARMONIQ_TEMPLATES_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("templates.json"))
}

/// Get CORS origins from a comma separated environment variable
pub fn get_allowed_origins() -> Vec<String> {
    match std::env::var("HARMONIQ_ALLOWED_ORIGINS") {
        Ok(raw) => parse_origins(&raw),
        Err(_) => vec![DEFAULT_ALLOWED_ORIGIN.to_string()],
    }
}

fn parse_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(|s| s.trim())
        .filter(|s| !s.is_empty())
        .map(|s| s.to_string())
        .collect()
}

/// Get Yahoo Finance base URL (overridable for proxies and tests)
pub fn get_yahoo_base_url() -> String {
    std::env::var("YAHOO_BASE_URL")
        .unwrap_or_else(|_| "https://query1.finance.yahoo.com".to_string())
}

/// Get upstream request timeout
pub fn get_upstream_timeout() -> Duration {
    let secs = std::env::var("UPSTREAM_TIMEOUT_SECS")
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(30);
    Duration::from_secs(secs)
}

/// Get the provider name passed with every historical query
pub fn get_provider() -> String {
    std::env::var("PRICE_PROVIDER").unwrap_or_else(|_| DEFAULT_PROVIDER.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_origins() {
        let origins = parse_origins(" https://a.example , ,https://b.example");
        assert_eq!(origins, vec!["https://a.example", "https://b.example"]);
        assert!(parse_origins("").is_empty());
    }
}
