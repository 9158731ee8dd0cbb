//! Strongly-typed identifier value objects.

use std::fmt;

use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use base64::Engine;
use rand::rngs::OsRng;
use rand::RngCore;

/// Number of random bytes behind every session token.
const TOKEN_BYTES: usize = 32;

/// Opaque bearer credential issued on a successful teacher login.
///
/// Generated tokens carry 32 bytes from the operating system CSPRNG and are
/// encoded as URL-safe base64 without padding. `Debug` never prints the
/// token itself.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct SessionToken(String);

impl SessionToken {
    /// Generates a fresh random token.
    pub fn generate() -> Self {
        let mut bytes = [0u8; TOKEN_BYTES];
        OsRng.fill_bytes(&mut bytes);
        Self(URL_SAFE_NO_PAD.encode(bytes))
    }

    /// Wraps a token presented by a client.
    ///
    /// Returns `None` for an empty string.
    pub fn parse(raw: impl Into<String>) -> Option<Self> {
        let raw = raw.into();
        if raw.is_empty() {
            None
        } else {
            Some(Self(raw))
        }
    }

    /// Returns the token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SessionToken(***)")
    }
}

impl fmt::Display for SessionToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn generated_token_is_url_safe_and_43_chars() {
        let token = SessionToken::generate();
        assert_eq!(token.as_str().len(), 43);
        assert!(token
            .as_str()
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_'));
    }

    #[test]
    fn generated_tokens_are_distinct() {
        let tokens: HashSet<SessionToken> = (0..100).map(|_| SessionToken::generate()).collect();
        assert_eq!(tokens.len(), 100);
    }

    #[test]
    fn parse_rejects_empty_string() {
        assert!(SessionToken::parse("").is_none());
        assert_eq!(SessionToken::parse("abc").unwrap().as_str(), "abc");
    }

    #[test]
    fn debug_redacts_token() {
        let token = SessionToken::parse("super-secret").unwrap();
        assert_eq!(format!("{:?}", token), "SessionToken(***)");
        assert_eq!(token.to_string(), "super-secret");
    }
}
