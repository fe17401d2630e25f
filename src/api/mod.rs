// SPDX-License-Identifier: MPL-2.0
//! Country metadata lookup.
//!
//! This module defines the [`CountryLookup`] port used by the application to
//! fetch country records and flag images, plus its HTTP adapter
//! [`HttpCountryLookup`].
//!
//! # Design Notes
//!
//! - Lookups return `'static` boxed futures so they can be handed to
//!   `iced::Task::perform` directly
//! - Errors are plain data (`Clone`) because they travel inside messages
//! - The trait is `Send + Sync` so a single instance can be shared via `Arc`

mod http;
mod record;

pub use http::{decode_record, HttpCountryLookup, USER_AGENT};
pub use record::{CountryName, CountryRecord, Currencies, Currency};

use crate::domain::CountryCode;
use futures_util::future::BoxFuture;
use std::fmt;

// =============================================================================
// FetchError
// =============================================================================

/// Errors that can occur while fetching or reading a country record.
#[derive(Debug, Clone, PartialEq)]
pub enum FetchError {
    /// The request could not be sent or the body could not be read.
    Transport(String),

    /// The server answered with a non-success status.
    ///
    /// Only produced when status checking is enabled.
    Status(u16),

    /// The body is not valid JSON or has unexpected value types.
    Decode(String),

    /// A field required to fill the info panel is absent or has the wrong type.
    MissingField(&'static str),
}

impl fmt::Display for FetchError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FetchError::Transport(msg) => write!(f, "request failed: {msg}"),
            FetchError::Status(code) => write!(f, "unexpected HTTP status: {code}"),
            FetchError::Decode(msg) => write!(f, "malformed response body: {msg}"),
            FetchError::MissingField(field) => write!(f, "response has no usable `{field}` field"),
        }
    }
}

impl std::error::Error for FetchError {}

// =============================================================================
// FlagImage
// =============================================================================

/// Encoded flag image downloaded from the URL in a country record.
#[derive(Debug, Clone, PartialEq)]
pub enum FlagImage {
    /// SVG document bytes.
    Svg(Vec<u8>),
    /// Raster image bytes (PNG, JPEG, ...).
    Raster(Vec<u8>),
}

impl FlagImage {
    /// Classifies downloaded bytes using the response content type, falling
    /// back to the URL extension.
    #[must_use]
    pub fn classify(url: &str, content_type: Option<&str>, bytes: Vec<u8>) -> Self {
        let is_svg = content_type.is_some_and(|ct| ct.contains("svg"))
            || url
                .rsplit('.')
                .next()
                .is_some_and(|ext| ext.eq_ignore_ascii_case("svg"));
        if is_svg {
            FlagImage::Svg(bytes)
        } else {
            FlagImage::Raster(bytes)
        }
    }
}

/// Returns true when a flag source is a remote image URL rather than text
/// (some API mirrors return an emoji flag instead of a link).
#[must_use]
pub fn is_remote_url(source: &str) -> bool {
    source.starts_with("https://") || source.starts_with("http://")
}

// =============================================================================
// CountryLookup
// =============================================================================

/// Source of country records and flag images.
pub trait CountryLookup: Send + Sync {
    /// Fetches the record for `code`.
    fn lookup(&self, code: &CountryCode) -> BoxFuture<'static, Result<CountryRecord, FetchError>>;

    /// Downloads the flag image behind `url`.
    fn flag_image(&self, url: &str) -> BoxFuture<'static, Result<FlagImage, FetchError>>;
}
