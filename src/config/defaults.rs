// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! This module serves as the single source of truth for default values
//! used across the application. Constants are organized by category.
//!
//! # Categories
//!
//! - **Map**: Highlight and fallback fill colours
//! - **API**: Country metadata endpoint
//! - **Diagnostics**: Event buffer sizing

// ==========================================================================
// Map Defaults
// ==========================================================================

/// Fill applied to a hovered country (CSS `lightblue`).
pub const DEFAULT_HIGHLIGHT_COLOR: &str = "#add8e6";

/// Fill used for paths whose SVG declares no solid fill.
pub const DEFAULT_COUNTRY_FILL: &str = "#c0c0c0";

// ==========================================================================
// API Defaults
// ==========================================================================

/// Base URL of the countries API; records live under `/api/countries/{code}`.
pub const DEFAULT_API_BASE_URL: &str = "https://countries.plaul.dk";

/// Upper bound accepted for the request timeout (in seconds).
pub const MAX_API_TIMEOUT_SECS: u64 = 300;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY: usize = 500;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_BUFFER_CAPACITY: usize = 10_000;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostics_capacity_bounds_are_ordered() {
        assert!(MIN_DIAGNOSTICS_BUFFER_CAPACITY <= DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY);
        assert!(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY <= MAX_DIAGNOSTICS_BUFFER_CAPACITY);
    }

    #[test]
    fn default_base_url_has_no_trailing_slash() {
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
    }
}
