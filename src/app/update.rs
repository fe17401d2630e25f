// SPDX-License-Identifier: MPL-2.0
//! Message handlers for the application.
//!
//! Handlers receive an [`UpdateContext`] borrowing exactly the state they
//! may touch and return the follow-up [`Task`].

use super::{MapState, Message};
use crate::api::{is_remote_url, CountryLookup, CountryRecord, FetchError, FlagImage};
use crate::diagnostics::{
    DiagnosticsCollector, DiagnosticsHandle, ErrorEvent, ErrorType, UserAction, WarningEvent,
    WarningType,
};
use crate::domain::{CountryCode, RequestToken};
use crate::error::Error;
use crate::hover::{FetchIntent, HoverController, ResponseOutcome};
use crate::map::CountryMap;
use crate::ui::info_panel::FlagView;
use crate::ui::map_canvas;
use iced::widget::svg;
use iced::Task;
use std::sync::Arc;

/// Mutable application state handed to the message handlers.
pub struct UpdateContext<'a> {
    pub map: &'a mut MapState,
    pub hover: &'a mut HoverController,
    pub flag: &'a mut FlagView,
    pub lookup: Option<&'a Arc<dyn CountryLookup>>,
    pub diagnostics: &'a mut DiagnosticsCollector,
}

impl UpdateContext<'_> {
    fn reporter(&self) -> DiagnosticsHandle {
        self.diagnostics.handle()
    }
}

/// Registers the loaded map with the hover controller.
pub fn handle_map_loaded(
    ctx: &mut UpdateContext<'_>,
    result: Result<Arc<CountryMap>, Error>,
) -> Task<Message> {
    match result {
        Ok(map) => {
            ctx.hover.register_paths(map.shapes());
            if map.is_empty() {
                ctx.reporter().log_warning(WarningEvent::new(
                    WarningType::Other,
                    "map has no `g path` elements with an id",
                ));
            }
            let document = svg::Handle::from_memory(map.source().to_vec());
            *ctx.map = MapState::Ready { map, document };
        }
        Err(error) => {
            ctx.reporter()
                .log_error(ErrorEvent::new(ErrorType::MapLoad, error.to_string()));
            *ctx.map = MapState::Failed(error.to_string());
        }
    }
    Task::none()
}

/// Applies pointer transitions from the map canvas.
///
/// A move straight from one country into another yields a leave followed by
/// an enter, in that order.
pub fn handle_map_message(
    ctx: &mut UpdateContext<'_>,
    message: map_canvas::Message,
) -> Task<Message> {
    let map_canvas::Message::HoverChanged { left, entered } = message;

    if let Some(code) = left {
        ctx.hover.on_pointer_leave(&code);
    }

    let Some(code) = entered else {
        return Task::none();
    };
    ctx.reporter().log_action(UserAction::HoverCountry {
        code: code.to_string(),
    });
    match ctx.hover.on_pointer_enter(&code) {
        Some(intent) => fetch_country(ctx.lookup, intent),
        None => Task::none(),
    }
}

/// Issues the lookup described by `intent`.
fn fetch_country(lookup: Option<&Arc<dyn CountryLookup>>, intent: FetchIntent) -> Task<Message> {
    let FetchIntent { code, token } = intent;
    match lookup {
        Some(lookup) => Task::perform(lookup.lookup(&code), move |result| {
            Message::CountryFetched {
                code: code.clone(),
                token,
                result,
            }
        }),
        None => Task::done(Message::CountryFetched {
            code,
            token,
            result: Err(FetchError::Transport("no HTTP client available".into())),
        }),
    }
}

/// Applies a resolved lookup and reports failures once.
pub fn handle_country_fetched(
    ctx: &mut UpdateContext<'_>,
    code: CountryCode,
    token: RequestToken,
    result: Result<CountryRecord, FetchError>,
) -> Task<Message> {
    let outcome = ctx.hover.on_response(token, result);
    outcome.report(&code, &ctx.reporter());

    match outcome {
        ResponseOutcome::Applied | ResponseOutcome::Partial(_) => sync_flag(ctx),
        ResponseOutcome::Failed(_) | ResponseOutcome::Discarded => Task::none(),
    }
}

/// Brings the flag area in line with the panel's flag source.
fn sync_flag(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    let Some(source) = ctx.hover.panel().flag.clone() else {
        *ctx.flag = FlagView::Empty;
        return Task::none();
    };

    if ctx.flag.source() == Some(source.as_str()) {
        return Task::none();
    }
    if !is_remote_url(&source) {
        *ctx.flag = FlagView::Text(source);
        return Task::none();
    }
    let Some(lookup) = ctx.lookup else {
        *ctx.flag = FlagView::Empty;
        return Task::none();
    };

    *ctx.flag = FlagView::Loading(source.clone());
    Task::perform(lookup.flag_image(&source), move |result| Message::FlagFetched {
        url: source.clone(),
        result,
    })
}

/// Shows a downloaded flag unless a newer flag replaced it meanwhile.
pub fn handle_flag_fetched(
    ctx: &mut UpdateContext<'_>,
    url: String,
    result: Result<FlagImage, FetchError>,
) -> Task<Message> {
    if !ctx.flag.is_loading(&url) {
        tracing::debug!(%url, "stale flag download ignored");
        return Task::none();
    }

    *ctx.flag = match result {
        Ok(image) => FlagView::from_image(url, image),
        Err(error) => {
            ctx.reporter().log_warning(WarningEvent::new(
                WarningType::FlagFetch,
                format!("flag {url}: {error}"),
            ));
            FlagView::Empty
        }
    };
    Task::none()
}

/// Drains pending diagnostics into the ring buffer.
pub fn handle_tick(ctx: &mut UpdateContext<'_>) -> Task<Message> {
    ctx.diagnostics.process_pending();
    Task::none()
}
