//! Backend location and credentials.
//!
//! The base URL is taken from the `api_base_url` key of local storage when an
//! operator has set one, otherwise from the current window with the backend
//! port. The bearer token is written by the external sign-in page.

use contracts::shared::settings::DEFAULT_API_PORT;

const API_BASE_OVERRIDE_KEY: &str = "api_base_url";
const ACCESS_TOKEN_KEY: &str = "auth_access_token";

fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window()?.local_storage().ok()?
}

fn stored(key: &str) -> Option<String> {
    local_storage()?
        .get_item(key)
        .ok()?
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Base URL for API requests, e.g. "http://localhost:3000".
/// Empty when no window is available.
pub fn api_base() -> String {
    if let Some(base) = stored(API_BASE_OVERRIDE_KEY) {
        return base.trim_end_matches('/').to_string();
    }
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, DEFAULT_API_PORT)
}

/// Join a base URL and an absolute API path
pub fn join_url(base: &str, path: &str) -> String {
    let base = base.trim_end_matches('/');
    if path.starts_with('/') {
        format!("{}{}", base, path)
    } else {
        format!("{}/{}", base, path)
    }
}

pub fn api_url(path: &str) -> String {
    join_url(&api_base(), path)
}

pub fn access_token() -> Option<String> {
    stored(ACCESS_TOKEN_KEY)
}

/// `Authorization` header value when a token is present
pub fn auth_header() -> Option<String> {
    access_token().map(|token| format!("Bearer {}", token))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_join_url() {
        assert_eq!(join_url("http://h:3000/", "/api/farmers"), "http://h:3000/api/farmers");
        assert_eq!(join_url("http://h:3000", "api/farmers"), "http://h:3000/api/farmers");
    }
}
