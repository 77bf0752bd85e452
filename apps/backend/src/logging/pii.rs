use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;

// Three base64url segments; the signature segment may be empty for `alg: none`.
static JWT_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"\beyJ[A-Za-z0-9_-]+\.[A-Za-z0-9_-]+\.[A-Za-z0-9_-]*").unwrap()
});

static EMAIL_RE: Lazy<Regex> = Lazy::new(|| {
    #[allow(clippy::unwrap_used)]
    Regex::new(r"[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+").unwrap()
});

/// Mask emails down to their first character and drop bearer tokens entirely.
///
/// Tokens are replaced before emails so a token payload never leaks through
/// the email pass.
pub fn redact(input: &str) -> String {
    let without_tokens = JWT_RE.replace_all(input, "[REDACTED_TOKEN]");

    EMAIL_RE
        .replace_all(&without_tokens, |caps: &regex::Captures| {
            let matched = &caps[0];
            match matched.split_once('@') {
                Some((local, domain)) if !local.is_empty() => {
                    let first = local.chars().next().unwrap_or('*');
                    format!("{first}***@{domain}")
                }
                _ => matched.to_string(),
            }
        })
        .into_owned()
}

/// Display wrapper that applies [`redact`] when formatted.
pub struct Redacted<'a>(pub &'a str);

impl fmt::Display for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&redact(self.0))
    }
}

impl fmt::Debug for Redacted<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}
