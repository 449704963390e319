use crate::error::{PostureError, Result};
use percent_encoding::percent_decode_str;
use regex::Regex;
use std::sync::OnceLock;
use url::Url;

fn s3_host_pattern() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(
            r"^([\w.-]+\.)?(s3|s3-[\w-]+|s3-website[\w.-]+|s3-accesspoint|s3-control)(\.[\w-]+)?\.amazonaws\.com$",
        )
        .expect("static regex")
    })
}

/// Whether a hostname is a genuine S3 endpoint (virtual-hosted, path-style,
/// website, access point, or control plane).
pub fn is_s3_host(host: &str) -> bool {
    let host = host.to_lowercase();
    host.ends_with(".amazonaws.com") && s3_host_pattern().is_match(&host)
}

/// Extract the object key from either a full S3 URL or a bare key.
///
/// URLs must resolve to a real S3 host; the path is percent-decoded before
/// validation. Bare keys may not smuggle a scheme or an S3 hostname, and in
/// both forms path traversal and empty keys are rejected. Returns the
/// normalized key with no leading slash.
pub fn extract_object_key(input: &str) -> Result<String> {
    if input.is_empty() {
        return Err(PostureError::EmptyObjectKey);
    }

    if let Ok(parsed) = Url::parse(input) {
        let host = parsed.host_str().unwrap_or_default();
        if !is_s3_host(host) {
            return Err(PostureError::NotAnObjectStoreHost(host.to_string()));
        }

        let path = parsed.path().trim_start_matches('/');
        let key = percent_decode_str(path).decode_utf8_lossy().into_owned();
        validate_key(&key)?;
        return Ok(key);
    }

    // Bare key. Reject anything that looks like a URL that failed to parse
    // or names an S3 host outside URL position.
    let lower = input.to_lowercase();
    if lower.contains("://") || lower.contains("amazonaws.com") {
        return Err(PostureError::MalformedKeyInput);
    }

    let key = input.strip_prefix('/').unwrap_or(input);
    validate_key(key)?;
    Ok(key.to_string())
}

fn validate_key(key: &str) -> Result<()> {
    if key.contains("../") || key.contains("..\\") {
        return Err(PostureError::KeyPathTraversal);
    }
    if key.is_empty() {
        return Err(PostureError::EmptyObjectKey);
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
