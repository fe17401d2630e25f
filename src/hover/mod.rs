// SPDX-License-Identifier: MPL-2.0
//! Hover controller for the country map.
//!
//! The controller is a plain state machine. Pointer transitions and fetch
//! responses are fed in by the application; what has to happen outside
//! (issuing a lookup, logging a failure) is returned to the caller instead
//! of being performed here, so every transition can be tested without a
//! window or a network.

pub mod panel;

pub use panel::{FieldUpdate, InfoPanel, PanelLabels, PanelPatch};

use crate::api::{CountryRecord, FetchError};
use crate::config::StaleResponsePolicy;
use crate::diagnostics::{DiagnosticsHandle, ErrorEvent, ErrorType};
use crate::domain::{CountryCode, RequestToken};
use crate::map::CountryShape;
use iced::Color;
use std::collections::HashMap;

/// Request the caller must issue after a pointer-enter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchIntent {
    pub code: CountryCode,
    pub token: RequestToken,
}

/// What a fetch response did to the panel.
#[derive(Debug, Clone, PartialEq)]
pub enum ResponseOutcome {
    /// Every field was assigned.
    Applied,
    /// Fields up to the failing one were assigned.
    Partial(FetchError),
    /// The fetch failed; the panel was left untouched.
    Failed(FetchError),
    /// A newer hover superseded the request; the panel was left untouched.
    Discarded,
}

impl ResponseOutcome {
    /// Reports a failure to the diagnostics channel. Emits exactly one error
    /// event for `Partial` and `Failed`, nothing otherwise.
    pub fn report(&self, code: &CountryCode, diagnostics: &DiagnosticsHandle) {
        let error = match self {
            ResponseOutcome::Partial(error) | ResponseOutcome::Failed(error) => error,
            ResponseOutcome::Applied | ResponseOutcome::Discarded => return,
        };
        diagnostics.log_error(ErrorEvent::new(
            ErrorType::CountryFetch,
            format!("country {code}: {error}"),
        ));
    }

    #[must_use]
    pub fn is_failure(&self) -> bool {
        matches!(self, ResponseOutcome::Partial(_) | ResponseOutcome::Failed(_))
    }
}

/// Highlight, panel and request bookkeeping for the map.
#[derive(Debug, Clone)]
pub struct HoverController {
    highlight: Color,
    policy: StaleResponsePolicy,
    labels: PanelLabels,
    /// Fill captured for each path at registration.
    defaults: HashMap<CountryCode, Color>,
    /// Current fill of each path.
    fills: HashMap<CountryCode, Color>,
    hovered: Option<CountryCode>,
    latest: RequestToken,
    panel: InfoPanel,
}

impl HoverController {
    #[must_use]
    pub fn new(highlight: Color, policy: StaleResponsePolicy, labels: PanelLabels) -> Self {
        Self {
            highlight,
            policy,
            labels,
            defaults: HashMap::new(),
            fills: HashMap::new(),
            hovered: None,
            latest: RequestToken::default(),
            panel: InfoPanel::default(),
        }
    }

    /// Registers the country shapes of a freshly loaded map.
    ///
    /// Replaces any previous registration; each path keeps its own default
    /// fill.
    pub fn register_paths<'a>(&mut self, shapes: impl IntoIterator<Item = &'a CountryShape>) {
        self.defaults.clear();
        self.fills.clear();
        self.hovered = None;
        self.panel.visible = false;
        for shape in shapes {
            self.register(shape.code().clone(), shape.default_fill());
        }
        tracing::debug!(paths = self.defaults.len(), "hover handlers registered");
    }

    /// Registers a single path with its default fill.
    pub fn register(&mut self, code: CountryCode, default_fill: Color) {
        self.fills.insert(code.clone(), default_fill);
        self.defaults.insert(code, default_fill);
    }

    #[must_use]
    pub fn is_registered(&self, code: &CountryCode) -> bool {
        self.defaults.contains_key(code)
    }

    /// Pointer entered `code`: highlight it, show the panel and hand back
    /// the lookup to issue. Unregistered paths are ignored.
    pub fn on_pointer_enter(&mut self, code: &CountryCode) -> Option<FetchIntent> {
        if !self.is_registered(code) {
            tracing::trace!(%code, "pointer entered an unregistered path");
            return None;
        }

        self.fills.insert(code.clone(), self.highlight);
        self.panel.visible = true;
        self.hovered = Some(code.clone());
        self.latest = self.latest.next();

        tracing::debug!(%code, token = %self.latest, "country hovered");
        Some(FetchIntent {
            code: code.clone(),
            token: self.latest,
        })
    }

    /// Pointer left `code`: restore its captured fill and hide the panel,
    /// whether or not its lookup is still pending.
    pub fn on_pointer_leave(&mut self, code: &CountryCode) {
        if let Some(default) = self.defaults.get(code) {
            self.fills.insert(code.clone(), *default);
        }
        if self.hovered.as_ref() == Some(code) {
            self.hovered = None;
        }
        self.panel.visible = false;
    }

    /// Applies the response to the lookup stamped with `token`.
    ///
    /// Visibility is never changed here: a late response fills a hidden
    /// panel.
    pub fn on_response(
        &mut self,
        token: RequestToken,
        result: Result<CountryRecord, FetchError>,
    ) -> ResponseOutcome {
        if self.policy == StaleResponsePolicy::Discard && token != self.latest {
            tracing::debug!(%token, latest = %self.latest, "stale country response discarded");
            return ResponseOutcome::Discarded;
        }

        let record = match result {
            Ok(record) => record,
            Err(error) => return ResponseOutcome::Failed(error),
        };

        let patch = PanelPatch::from_record(&record, &self.labels);
        let failure = patch.failure.clone();
        self.panel.apply_patch(patch);
        match failure {
            Some(error) => ResponseOutcome::Partial(error),
            None => ResponseOutcome::Applied,
        }
    }

    /// Current fill of a registered path.
    #[must_use]
    pub fn fill_of(&self, code: &CountryCode) -> Option<Color> {
        self.fills.get(code).copied()
    }

    /// Fill captured for a path at registration.
    #[must_use]
    pub fn default_fill_of(&self, code: &CountryCode) -> Option<Color> {
        self.defaults.get(code).copied()
    }

    #[must_use]
    pub fn panel(&self) -> &InfoPanel {
        &self.panel
    }

    #[must_use]
    pub fn hovered(&self) -> Option<&CountryCode> {
        self.hovered.as_ref()
    }

    #[must_use]
    pub fn latest_token(&self) -> RequestToken {
        self.latest
    }

    #[must_use]
    pub fn highlight(&self) -> Color {
        self.highlight
    }

    /// Labels used for responses applied from now on.
    pub fn set_labels(&mut self, labels: PanelLabels) {
        self.labels = labels;
    }
}
