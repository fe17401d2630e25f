// SPDX-License-Identifier: MPL-2.0
//! Domain layer - Core value objects with ZERO external dependencies.
//!
//! This module contains pure domain types shared by the map, the country
//! API client and the hover controller. It has no dependencies on external
//! crates (except `std`) to keep it trivially testable.
//!
//! # Modules
//!
//! - [`newtypes`]: Identifier value objects ([`CountryCode`](newtypes::CountryCode),
//!   [`RequestToken`](newtypes::RequestToken))

pub mod newtypes;

pub use newtypes::{CountryCode, RequestToken};
