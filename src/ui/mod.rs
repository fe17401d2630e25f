// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Views follow the Elm-style "state down, messages up" pattern: they borrow
//! application state and publish messages for `App::update` to handle.
//!
//! - [`map_canvas`] - Interactive country map (drawing and hover detection)
//! - [`info_panel`] - Country details panel
//! - [`styles`] - Centralized styling
//! - [`design_tokens`] - Design system constants (colors, spacing, sizing)
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod info_panel;
pub mod map_canvas;
pub mod styles;
pub mod theming;
