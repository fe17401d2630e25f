// SPDX-License-Identifier: MPL-2.0
//! Country info panel view.

use crate::api::FlagImage;
use crate::hover::InfoPanel;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, image, svg, text, Column};
use iced::{ContentFit, Element, Length};

/// What the flag area currently shows.
#[derive(Debug, Clone, Default)]
pub enum FlagView {
    #[default]
    Empty,
    /// Download of this URL is in flight.
    Loading(String),
    Svg { url: String, handle: svg::Handle },
    Raster { url: String, handle: image::Handle },
    /// Flag source that is not an image URL, shown verbatim.
    Text(String),
}

impl FlagView {
    /// Wraps bytes downloaded from `url` in a widget handle.
    #[must_use]
    pub fn from_image(url: String, image: FlagImage) -> Self {
        match image {
            FlagImage::Svg(bytes) => FlagView::Svg {
                url,
                handle: svg::Handle::from_memory(bytes),
            },
            FlagImage::Raster(bytes) => FlagView::Raster {
                url,
                handle: image::Handle::from_bytes(bytes),
            },
        }
    }

    /// Flag source this view shows or is fetching.
    #[must_use]
    pub fn source(&self) -> Option<&str> {
        match self {
            FlagView::Empty => None,
            FlagView::Loading(url)
            | FlagView::Svg { url, .. }
            | FlagView::Raster { url, .. }
            | FlagView::Text(url) => Some(url),
        }
    }

    /// Whether a download of `url` is pending.
    #[must_use]
    pub fn is_loading(&self, url: &str) -> bool {
        matches!(self, FlagView::Loading(pending) if pending == url)
    }
}

/// The panel content, or nothing while the panel is hidden.
pub fn view<'a, Message: 'a>(panel: &'a InfoPanel, flag: &'a FlagView) -> Option<Element<'a, Message>> {
    if !panel.visible {
        return None;
    }

    let mut content: Column<'a, Message> = column![].spacing(spacing::XS);

    let flag: Option<Element<'a, Message>> = match flag {
        FlagView::Empty | FlagView::Loading(_) => None,
        FlagView::Svg { handle, .. } => Some(
            svg(handle.clone())
                .height(sizing::FLAG_HEIGHT)
                .content_fit(ContentFit::Contain)
                .into(),
        ),
        FlagView::Raster { handle, .. } => Some(
            image(handle.clone())
                .height(sizing::FLAG_HEIGHT)
                .content_fit(ContentFit::Contain)
                .into(),
        ),
        FlagView::Text(source) => Some(text(source.as_str()).size(typography::TITLE_MD).into()),
    };
    if let Some(flag) = flag {
        content = content.push(container(flag).style(styles::container::flag_frame));
    }

    for line in panel.lines() {
        content = content.push(text(line).size(typography::BODY));
    }

    Some(
        container(content)
            .width(sizing::INFO_PANEL_WIDTH)
            .padding(spacing::MD)
            .style(styles::container::panel)
            .into(),
    )
}

/// Places the panel in the top-left corner of the map area.
pub fn positioned<'a, Message: 'a>(panel: Element<'a, Message>) -> Element<'a, Message> {
    container(panel)
        .padding(spacing::LG)
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}
