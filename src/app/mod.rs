// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration.
//!
//! The `App` struct wires together the map, the hover controller, the country
//! API client and localization, and translates messages into side effects
//! such as lookups or flag downloads.

mod message;
pub mod paths;
mod subscription;
mod update;
mod view;

pub use message::{Flags, Message};

use crate::api::{CountryLookup, HttpCountryLookup};
use crate::config::{self, Config};
use crate::diagnostics::{DiagnosticsCollector, ErrorEvent, ErrorType, WarningEvent, WarningType};
use crate::hover::{HoverController, PanelLabels};
use crate::i18n::fluent::I18n;
use crate::map::CountryMap;
use crate::ui::info_panel::FlagView;
use crate::ui::theming::AppTheme;
use iced::widget::svg;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::path::PathBuf;
use std::sync::Arc;

/// Loading state of the map document.
#[derive(Debug, Clone, Default)]
pub enum MapState {
    #[default]
    Loading,
    Ready {
        map: Arc<CountryMap>,
        /// Source document, drawn under the country shapes.
        document: svg::Handle,
    },
    Failed(String),
}

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    theme: AppTheme,
    map: MapState,
    hover: HoverController,
    flag: FlagView,
    lookup: Option<Arc<dyn CountryLookup>>,
    diagnostics: DiagnosticsCollector,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("map", &self.map)
            .field("hovered", &self.hover.hovered())
            .field("has_lookup", &self.lookup.is_some())
            .finish()
    }
}

pub const WINDOW_DEFAULT_WIDTH: u32 = 1000;
pub const WINDOW_DEFAULT_HEIGHT: u32 = 800;
pub const MIN_WINDOW_WIDTH: u32 = 480;
pub const MIN_WINDOW_HEIGHT: u32 = 400;

/// Builds the window settings
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        icon: crate::icon::load_window_icon(),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    // Wrap flags in RefCell<Option<_>> to satisfy Fn trait requirement
    // while only consuming flags once (iced 0.14 requires Fn, not FnOnce)
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads settings, applies CLI overrides and starts loading the map.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        paths::init_cli_overrides(flags.config_dir.clone());
        let (mut config, config_warning) = config::load();

        if let Some(base) = flags.api_base {
            config.api.base_url = Some(base);
        }
        if let Some(path) = flags.map_path {
            config.map.svg_path = Some(PathBuf::from(path));
        }

        let i18n = I18n::new(flags.lang, &config);
        let diagnostics = DiagnosticsCollector::default();
        if let Some(key) = config_warning {
            diagnostics
                .handle()
                .log_warning(WarningEvent::new(WarningType::Config, i18n.tr(&key)));
        }

        let lookup: Option<Arc<dyn CountryLookup>> =
            match HttpCountryLookup::from_config(&config.api) {
                Ok(lookup) => Some(Arc::new(lookup)),
                Err(error) => {
                    diagnostics
                        .handle()
                        .log_error(ErrorEvent::new(ErrorType::HttpClient, error.to_string()));
                    None
                }
            };

        let app = Self::with_lookup(&config, i18n, lookup, diagnostics);
        let task = Task::perform(CountryMap::load(config.map.svg_path.clone()), |result| {
            Message::MapLoaded(result.map(Arc::new))
        });
        (app, task)
    }

    /// Assembles the application around an existing lookup.
    pub fn with_lookup(
        config: &Config,
        i18n: I18n,
        lookup: Option<Arc<dyn CountryLookup>>,
        diagnostics: DiagnosticsCollector,
    ) -> Self {
        let hover = HoverController::new(
            config.map.highlight_color(),
            config.api.stale_responses.unwrap_or_default(),
            PanelLabels::from_i18n(&i18n),
        );
        Self {
            i18n,
            theme: AppTheme::new(config.general.theme_mode),
            map: MapState::Loading,
            hover,
            flag: FlagView::Empty,
            lookup,
            diagnostics,
        }
    }

    fn title(&self) -> String {
        self.i18n.tr("app-title")
    }

    fn theme(&self) -> Theme {
        self.theme.iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create_tick_subscription()
    }

    pub fn update(&mut self, message: Message) -> Task<Message> {
        let mut ctx = update::UpdateContext {
            map: &mut self.map,
            hover: &mut self.hover,
            flag: &mut self.flag,
            lookup: self.lookup.as_ref(),
            diagnostics: &mut self.diagnostics,
        };

        match message {
            Message::MapLoaded(result) => update::handle_map_loaded(&mut ctx, result),
            Message::Map(map_message) => update::handle_map_message(&mut ctx, map_message),
            Message::CountryFetched {
                code,
                token,
                result,
            } => update::handle_country_fetched(&mut ctx, code, token, result),
            Message::FlagFetched { url, result } => {
                update::handle_flag_fetched(&mut ctx, url, result)
            }
            Message::Tick(_) => update::handle_tick(&mut ctx),
        }
    }

    pub fn view(&self) -> Element<'_, Message> {
        view::view(view::ViewContext {
            i18n: &self.i18n,
            map: &self.map,
            hover: &self.hover,
            flag: &self.flag,
            colors: &self.theme.colors,
        })
    }

    #[must_use]
    pub fn map_state(&self) -> &MapState {
        &self.map
    }

    #[must_use]
    pub fn hover(&self) -> &HoverController {
        &self.hover
    }

    #[must_use]
    pub fn flag(&self) -> &FlagView {
        &self.flag
    }

    #[must_use]
    pub fn diagnostics(&self) -> &DiagnosticsCollector {
        &self.diagnostics
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{decode_record, CountryRecord, FetchError, FlagImage};
    use crate::domain::{CountryCode, RequestToken};
    use crate::ui::map_canvas;
    use futures_util::future::BoxFuture;
    use futures_util::FutureExt;
    use std::time::Instant;

    struct Unreachable;

    impl CountryLookup for Unreachable {
        fn lookup(
            &self,
            _code: &CountryCode,
        ) -> BoxFuture<'static, Result<CountryRecord, FetchError>> {
            async { Err(FetchError::Transport("offline".into())) }.boxed()
        }

        fn flag_image(&self, _url: &str) -> BoxFuture<'static, Result<FlagImage, FetchError>> {
            async { Err(FetchError::Transport("offline".into())) }.boxed()
        }
    }

    fn english() -> I18n {
        I18n::new(Some("en-US".to_string()), &Config::default())
    }

    fn app_with_bundled_map() -> App {
        let lookup: Arc<dyn CountryLookup> = Arc::new(Unreachable);
        let mut app = App::with_lookup(
            &Config::default(),
            english(),
            Some(lookup),
            DiagnosticsCollector::default(),
        );
        let map = CountryMap::bundled().expect("bundled map parses");
        let _ = app.update(Message::MapLoaded(Ok(Arc::new(map))));
        app
    }

    fn enter(app: &mut App, left: Option<&str>, entered: Option<&str>) {
        let _ = app.update(Message::Map(map_canvas::Message::HoverChanged {
            left: left.map(CountryCode::from),
            entered: entered.map(CountryCode::from),
        }));
    }

    #[test]
    fn map_loaded_registers_paths() {
        let app = app_with_bundled_map();
        assert!(matches!(app.map_state(), MapState::Ready { .. }));
        assert!(app.hover().is_registered(&CountryCode::from("dk")));
    }

    #[test]
    fn map_load_failure_is_reported() {
        let mut app = App::with_lookup(
            &Config::default(),
            english(),
            None,
            DiagnosticsCollector::default(),
        );
        let _ = app.update(Message::MapLoaded(Err(crate::error::Error::Svg("bad".into()))));
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(matches!(app.map_state(), MapState::Failed(_)));
        assert_eq!(app.diagnostics().error_count(), 1);
    }

    #[test]
    fn moving_between_countries_moves_highlight() {
        let mut app = app_with_bundled_map();
        let highlight = Config::default().map.highlight_color();

        enter(&mut app, None, Some("dk"));
        assert_eq!(app.hover().fill_of(&CountryCode::from("dk")), Some(highlight));

        enter(&mut app, Some("dk"), Some("de"));
        assert_ne!(app.hover().fill_of(&CountryCode::from("dk")), Some(highlight));
        assert_eq!(app.hover().fill_of(&CountryCode::from("de")), Some(highlight));
        assert!(app.hover().panel().visible);

        enter(&mut app, Some("de"), None);
        assert!(!app.hover().panel().visible);
    }

    #[test]
    fn fetched_record_fills_panel_and_text_flag_is_shown() {
        let mut app = app_with_bundled_map();
        enter(&mut app, None, Some("dk"));
        let token = app.hover().latest_token();

        let record = decode_record(
            br#"{"flag": "DK", "name": {"common": "Denmark"}, "unMember": true,
                 "currencies": {"DKK": {"symbol": "kr."}}, "capital": ["Copenhagen"],
                 "borders": ["DEU"]}"#,
        )
        .expect("valid record");
        let _ = app.update(Message::CountryFetched {
            code: CountryCode::from("dk"),
            token,
            result: Ok(record),
        });

        assert_eq!(app.hover().panel().name, "Country: Denmark");
        assert!(matches!(app.flag(), FlagView::Text(text) if text == "DK"));
    }

    #[test]
    fn remote_flag_starts_download_and_failure_is_a_warning() {
        let mut app = app_with_bundled_map();
        enter(&mut app, None, Some("dk"));
        let token = app.hover().latest_token();
        let url = "https://flagcdn.com/dk.svg";

        let record = decode_record(
            br#"{"flag": "https://flagcdn.com/dk.svg", "currencies": {}, "capital": [], "borders": []}"#,
        )
        .expect("valid record");
        let _ = app.update(Message::CountryFetched {
            code: CountryCode::from("dk"),
            token,
            result: Ok(record),
        });
        assert!(app.flag().is_loading(url));

        let _ = app.update(Message::FlagFetched {
            url: url.to_string(),
            result: Err(FetchError::Status(404)),
        });
        let _ = app.update(Message::Tick(Instant::now()));
        assert!(matches!(app.flag(), FlagView::Empty));
        assert_eq!(app.diagnostics().warning_count(), 1);
        assert_eq!(app.diagnostics().error_count(), 0);
    }

    #[test]
    fn failed_lookup_logs_one_error() {
        let mut app = app_with_bundled_map();
        enter(&mut app, None, Some("dk"));
        let _ = app.update(Message::CountryFetched {
            code: CountryCode::from("dk"),
            token: app.hover().latest_token(),
            result: Err(FetchError::Decode("expected value".into())),
        });
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.diagnostics().error_count(), 1);
        assert!(app.hover().panel().visible);
    }

    #[test]
    fn stale_response_is_dropped_silently() {
        let mut app = app_with_bundled_map();
        enter(&mut app, None, Some("dk"));
        enter(&mut app, Some("dk"), Some("se"));
        let _ = app.update(Message::CountryFetched {
            code: CountryCode::from("dk"),
            token: RequestToken::default().next(),
            result: Err(FetchError::Transport("late".into())),
        });
        let _ = app.update(Message::Tick(Instant::now()));
        assert_eq!(app.diagnostics().error_count(), 0);
    }
}
