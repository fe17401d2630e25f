// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.

use super::{MapState, Message};
use crate::hover::HoverController;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::typography;
use crate::ui::info_panel::{self, FlagView};
use crate::ui::map_canvas;
use crate::ui::theming::ColorScheme;
use iced::widget::{center, container, stack, svg, text, Stack};
use iced::{Background, ContentFit, Element, Length};

/// Context required to render the application view.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub map: &'a MapState,
    pub hover: &'a HoverController,
    pub flag: &'a FlagView,
    pub colors: &'a ColorScheme,
}

/// Renders the map with the info panel floating above it.
pub fn view(ctx: ViewContext<'_>) -> Element<'_, Message> {
    let content: Element<'_, Message> = match ctx.map {
        MapState::Loading => center(text(ctx.i18n.tr("map-loading")).size(typography::BODY)).into(),
        MapState::Failed(error) => center(
            text(ctx.i18n.tr_with_args("map-load-error", &[("error", error.as_str())]))
                .size(typography::BODY)
                .color(ctx.colors.error),
        )
        .into(),
        MapState::Ready { map, document } => {
            let mut layers: Stack<'_, Message> = stack![
                svg(document.clone())
                    .width(Length::Fill)
                    .height(Length::Fill)
                    .content_fit(ContentFit::Contain),
                map_canvas::view(map, ctx.hover, ctx.colors).map(Message::Map),
            ];
            if map.is_empty() {
                layers = layers.push(center(
                    text(ctx.i18n.tr("map-empty")).size(typography::CAPTION),
                ));
            }
            if let Some(panel) = info_panel::view(ctx.hover.panel(), ctx.flag) {
                layers = layers.push(info_panel::positioned(panel));
            }
            layers.into()
        }
    };

    let background = ctx.colors.map_background;
    container(content)
        .width(Length::Fill)
        .height(Length::Fill)
        .style(move |_theme| container::Style {
            background: Some(Background::Color(background)),
            ..Default::default()
        })
        .into()
}
