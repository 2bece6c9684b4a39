use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Regex patterns used for PII redaction.
pub struct PiiRegexRegistry;

impl PiiRegexRegistry {
    /// Email pattern: matches standard email addresses
    pub fn email() -> &'static Regex {
        static EMAIL_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{1,}\b").unwrap()
        });
        &EMAIL_REGEX
    }

    /// Credentials inside a connection URL: `scheme://user:password@`
    pub fn url_password() -> &'static Regex {
        static URL_PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| {
            #[allow(clippy::unwrap_used)]
            Regex::new(r"(?P<prefix>[A-Za-z][A-Za-z0-9+.-]*://[^:/@\s]*:)[^@\s]*@").unwrap()
        });
        &URL_PASSWORD_REGEX
    }
}

/// Redacts sensitive information from a string.
///
/// - URL passwords are replaced with `***` (scheme, user and host stay).
/// - Emails keep the first character of the local part and the full domain.
///
/// URLs go first so the `user:password@host` part is never read as an email.
pub fn redact(input: &str) -> String {
    let url_redacted = PiiRegexRegistry::url_password().replace_all(input, "${prefix}***@");

    PiiRegexRegistry::email()
        .replace_all(&url_redacted, |caps: &regex::Captures| {
            let full_match = &caps[0];
            match full_match.find('@') {
                Some(0) | None => full_match.to_string(),
                Some(at_pos) => {
                    let first_char = &full_match[..1];
                    format!("{first_char}***{}", &full_match[at_pos..])
                }
            }
        })
        .to_string()
}

/// Masks the password of a database URL for logging.
pub fn sanitize_db_url(url: &str) -> String {
    PiiRegexRegistry::url_password()
        .replace_all(url, "${prefix}***@")
        .to_string()
}

/// A wrapper that redacts sensitive strings when displayed.
pub struct Redacted<'a>(pub &'a str);

impl<'a> fmt::Display for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}

impl<'a> fmt::Debug for Redacted<'a> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", redact(self.0))
    }
}
