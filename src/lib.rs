// SPDX-License-Identifier: MPL-2.0
//! `iced_atlas` is an interactive map of Europe built with the Iced GUI framework.
//!
//! Hovering a country highlights it and fills an info panel with the flag,
//! name, UN membership, currencies, capitals and neighbours fetched from a
//! countries web service.

#![doc(html_root_url = "https://docs.rs/iced_atlas/0.1.0")]

pub mod api;
pub mod app;
pub mod config;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod hover;
pub mod i18n;
pub mod icon;
pub mod map;
pub mod ui;
