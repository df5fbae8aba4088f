//! Original-URL normalization.
//!
//! Destination URLs are stored in a canonical form so that the same content
//! address never appears under two spellings: scheme restricted to HTTP(S),
//! hostname lowercased, fragment dropped.

use serde_json::json;
use url::Url;

use crate::error::AppError;

/// Normalizes the destination URL of a gated link.
///
/// # Errors
///
/// Returns [`AppError::Validation`] for malformed URLs and for any scheme
/// other than `http` or `https` (rejects `javascript:`, `data:`, `file:`).
pub fn normalize_original_url(input: &str) -> Result<String, AppError> {
    let mut url = Url::parse(input).map_err(|e| {
        AppError::validation(
            "Invalid URL format",
            json!({ "url": input, "reason": e.to_string() }),
        )
    })?;

    match url.scheme() {
        "http" | "https" => {}
        other => {
            return Err(AppError::validation(
                "Only HTTP and HTTPS URLs can be gated",
                json!({ "scheme": other }),
            ));
        }
    }

    if let Some(host) = url.host_str() {
        let lowered = host.to_ascii_lowercase();
        if lowered != host {
            url.set_host(Some(&lowered)).map_err(|_| {
                AppError::internal("Failed to normalize host", json!({ "url": input }))
            })?;
        }
    }

    url.set_fragment(None);

    Ok(url.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_host() {
        let result = normalize_original_url("https://EXAMPLE.COM/Path").unwrap();
        assert_eq!(result, "https://example.com/Path");
    }

    #[test]
    fn test_strips_fragment() {
        let result = normalize_original_url("https://example.com/page#section").unwrap();
        assert_eq!(result, "https://example.com/page");
    }

    #[test]
    fn test_preserves_query() {
        let result = normalize_original_url("https://example.com/p?utm=x&b=2").unwrap();
        assert_eq!(result, "https://example.com/p?utm=x&b=2");
    }

    #[test]
    fn test_rejects_malformed_url() {
        let result = normalize_original_url("not-a-url");
        assert!(matches!(result, Err(AppError::Validation { .. })));
    }

    #[test]
    fn test_rejects_dangerous_schemes() {
        for input in ["javascript:alert(1)", "data:text/html,x", "file:///etc/passwd"] {
            let result = normalize_original_url(input);
            assert!(
                matches!(result, Err(AppError::Validation { .. })),
                "scheme of {input} should be rejected"
            );
        }
    }

    #[test]
    fn test_accepts_plain_http() {
        assert!(normalize_original_url("http://example.com/x").is_ok());
    }
}
