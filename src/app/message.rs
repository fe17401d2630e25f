// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::api::{CountryRecord, FetchError, FlagImage};
use crate::domain::{CountryCode, RequestToken};
use crate::error::Error;
use crate::map::CountryMap;
use crate::ui::map_canvas;
use std::sync::Arc;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    /// The map document finished loading.
    MapLoaded(Result<Arc<CountryMap>, Error>),
    /// Pointer transitions reported by the map canvas.
    Map(map_canvas::Message),
    /// A country lookup resolved.
    CountryFetched {
        code: CountryCode,
        token: RequestToken,
        result: Result<CountryRecord, FetchError>,
    },
    /// A flag image download resolved.
    FlagFetched {
        url: String,
        result: Result<FlagImage, FetchError>,
    },
    /// Periodic tick draining the diagnostics channel.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI to tweak startup behavior.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional SVG map to load instead of the configured or bundled one.
    pub map_path: Option<String>,
    /// Optional countries API base URL, e.g. a local mirror.
    pub api_base: Option<String>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `ICED_ATLAS_CONFIG_DIR` environment variable.
    pub config_dir: Option<String>,
}
