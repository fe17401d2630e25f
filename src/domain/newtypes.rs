// SPDX-License-Identifier: MPL-2.0
//! Identifier newtypes.
//!
//! These wrappers keep country codes and request tokens from being mixed up
//! with arbitrary strings and integers at call sites.

use std::fmt;

// =============================================================================
// CountryCode
// =============================================================================

/// Country code carried by a map path's `id` attribute.
///
/// The value is used verbatim in the country API URL. No validation is
/// performed: an unknown code simply produces a failed lookup.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CountryCode(String);

impl CountryCode {
    /// Wraps a raw identifier.
    #[must_use]
    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Returns the raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CountryCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CountryCode {
    fn from(code: &str) -> Self {
        Self::new(code)
    }
}

// =============================================================================
// RequestToken
// =============================================================================

/// Monotonic token stamped on every country lookup.
///
/// Comparing the token carried by a response with the latest issued token
/// tells whether a newer hover superseded the request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct RequestToken(u64);

impl RequestToken {
    /// Returns the token following this one.
    #[must_use]
    pub fn next(self) -> Self {
        Self(self.0.wrapping_add(1))
    }

    /// Returns the raw counter value.
    #[must_use]
    pub fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for RequestToken {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn country_code_displays_raw_value() {
        let code = CountryCode::new("DK");
        assert_eq!(code.to_string(), "DK");
        assert_eq!(code.as_str(), "DK");
    }

    #[test]
    fn country_code_keeps_case() {
        assert_ne!(CountryCode::from("dk"), CountryCode::from("DK"));
    }

    #[test]
    fn request_tokens_increase() {
        let first = RequestToken::default().next();
        let second = first.next();
        assert!(second > first);
        assert_eq!(second.value(), 2);
    }
}
