//! Redaction of credentials carried in request URLs.
//!
//! The OAuth endpoints put `client_secret` (and tokens) in the query string,
//! so any URL that is logged or embedded in an [`Error`](crate::Error) goes
//! through [`sanitize_url`] first.
//!
//! # Example
//!
//! ```
//! use moneytree::sanitize::sanitize_url;
//! use url::Url;
//!
//! let url = Url::parse("https://myaccount.example.com/oauth/token.json?client_id=id&client_secret=s3cret").unwrap();
//! let safe = sanitize_url(&url);
//! assert_eq!(safe.query(), Some("client_id=id&client_secret=REDACTED"));
//! ```

use std::borrow::Cow;

use url::{form_urlencoded, Url};

/// Replacement written in place of a sensitive value.
pub const REDACTED: &str = "REDACTED";

/// Query parameter names whose values are never surfaced.
pub const SENSITIVE_QUERY_PARAMS: &[&str] = &[
    "client_secret",
    "refresh_token",
    "access_token",
    "token",
    "code",
];

/// Return a copy of `url` with sensitive query values replaced by [`REDACTED`].
///
/// Scheme, host, path, fragment and every other query pair (including its
/// percent-encoding and position) are left exactly as they were.
pub fn sanitize_url(url: &Url) -> Url {
    let mut sanitized = url.clone();
    if let Some(query) = url.query() {
        if let Cow::Owned(redacted) = redact_query(query) {
            sanitized.set_query(Some(&redacted));
        }
    }
    sanitized
}

/// String form of [`sanitize_url`] that also accepts relative references
/// such as `/path?a=b&client_secret=x`.
pub fn sanitize_url_str(raw: &str) -> String {
    let (without_fragment, fragment) = match raw.split_once('#') {
        Some((head, fragment)) => (head, Some(fragment)),
        None => (raw, None),
    };
    let Some((base, query)) = without_fragment.split_once('?') else {
        return raw.to_string();
    };

    match redact_query(query) {
        Cow::Borrowed(_) => raw.to_string(),
        Cow::Owned(redacted) => {
            let mut out = format!("{}?{}", base, redacted);
            if let Some(fragment) = fragment {
                out.push('#');
                out.push_str(fragment);
            }
            out
        }
    }
}

/// Redact sensitive values in a raw `a=b&c=d` query string.
///
/// Borrows the input unchanged when nothing needed redacting.
pub fn redact_query(query: &str) -> Cow<'_, str> {
    if !query.split('&').any(is_sensitive_pair) {
        return Cow::Borrowed(query);
    }

    let redacted = query
        .split('&')
        .map(|pair| {
            if is_sensitive_pair(pair) {
                format!("{}={}", raw_key(pair), REDACTED)
            } else {
                pair.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join("&");

    Cow::Owned(redacted)
}

fn raw_key(pair: &str) -> &str {
    pair.split_once('=').map_or(pair, |(key, _)| key)
}

fn is_sensitive_pair(pair: &str) -> bool {
    let key = raw_key(pair);
    if key.is_empty() {
        return false;
    }

    // compare on the decoded name so `client%5Fsecret` cannot slip through
    form_urlencoded::parse(key.as_bytes())
        .next()
        .map(|(decoded, _)| {
            SENSITIVE_QUERY_PARAMS
                .iter()
                .any(|name| decoded.eq_ignore_ascii_case(name))
        })
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn url(s: &str) -> Url {
        Url::parse(s).unwrap()
    }

    #[test]
    fn test_redacts_client_secret() {
        assert_eq!(
            sanitize_url_str("/?a=b&client_secret=secret"),
            "/?a=b&client_secret=REDACTED"
        );
    }

    #[test]
    fn test_keeps_client_id() {
        assert_eq!(
            sanitize_url_str("/?a=b&client_id=id&client_secret=secret"),
            "/?a=b&client_id=id&client_secret=REDACTED"
        );
    }

    #[test]
    fn test_absolute_url() {
        let original = url("https://api.example.com/oauth/token.json?a=b&client_id=id&client_secret=secret");
        let sanitized = sanitize_url(&original);

        assert_eq!(
            sanitized.as_str(),
            "https://api.example.com/oauth/token.json?a=b&client_id=id&client_secret=REDACTED"
        );
        // input untouched
        assert!(original.as_str().ends_with("client_secret=secret"));
    }

    #[test]
    fn test_identity_without_secret() {
        let original = url("https://api.example.com/link/accounts.json?page=2&per_page=50&q=a%20b");
        assert_eq!(sanitize_url(&original), original);

        let no_query = url("https://api.example.com/link/profile.json");
        assert_eq!(sanitize_url(&no_query), no_query);

        assert_eq!(sanitize_url_str("/link/profile.json"), "/link/profile.json");
        assert_eq!(sanitize_url_str("/?x=%2Fy+z"), "/?x=%2Fy+z");
    }

    #[test]
    fn test_preserves_other_encoding_and_order() {
        let original = url("https://h.example/p?z=1&client_secret=s%26t&name=a%2Bb&a=");
        assert_eq!(
            sanitize_url(&original).query(),
            Some("z=1&client_secret=REDACTED&name=a%2Bb&a=")
        );
    }

    #[test]
    fn test_redacts_tokens_and_encoded_keys() {
        assert_eq!(
            sanitize_url_str("/oauth/revoke.json?token=abc&client%5Fsecret=x"),
            "/oauth/revoke.json?token=REDACTED&client%5Fsecret=REDACTED"
        );
        assert_eq!(
            sanitize_url_str("/oauth/token.json?grant_type=refresh_token&refresh_token=r1"),
            "/oauth/token.json?grant_type=refresh_token&refresh_token=REDACTED"
        );
    }

    #[test]
    fn test_fragment_kept() {
        assert_eq!(
            sanitize_url_str("/cb?code=xyz&state=s#frag"),
            "/cb?code=REDACTED&state=s#frag"
        );
    }

    #[test]
    fn test_redact_query_borrows_when_clean() {
        assert!(matches!(redact_query("a=b&c=d"), Cow::Borrowed(_)));
        assert!(matches!(redact_query("client_secret=x"), Cow::Owned(_)));
    }
}
