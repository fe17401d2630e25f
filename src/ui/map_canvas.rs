// SPDX-License-Identifier: MPL-2.0
//! Interactive map canvas.
//!
//! Draws every country with its current fill and turns cursor movement into
//! pointer-enter / pointer-leave transitions between country shapes.

use crate::domain::CountryCode;
use crate::hover::HoverController;
use crate::map::{CountryMap, MapProjection};
use crate::ui::design_tokens::border;
use crate::ui::theming::ColorScheme;
use iced::widget::canvas::{self, fill, Fill, Frame, Geometry, Path, Stroke};
use iced::widget::Action;
use iced::{mouse, Element, Length, Rectangle, Renderer, Theme};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Message {
    /// The country under the cursor changed. A move from one country
    /// straight into a neighbour carries both codes.
    HoverChanged {
        left: Option<CountryCode>,
        entered: Option<CountryCode>,
    },
}

/// Canvas program drawing the map with the controller's fills.
pub struct MapCanvas<'a> {
    map: &'a CountryMap,
    hover: &'a HoverController,
    colors: &'a ColorScheme,
}

impl<'a> MapCanvas<'a> {
    #[must_use]
    pub fn new(map: &'a CountryMap, hover: &'a HoverController, colors: &'a ColorScheme) -> Self {
        Self { map, hover, colors }
    }

    fn projection(&self, bounds: Rectangle) -> MapProjection {
        MapProjection::fit(self.map.size(), bounds.size())
    }

    fn country_at(&self, bounds: Rectangle, cursor: mouse::Cursor) -> Option<CountryCode> {
        let position = cursor.position_in(bounds)?;
        let document = self.projection(bounds).to_document(position);
        self.map.hit_test(document).map(|shape| shape.code().clone())
    }
}

/// Records `hit` as the country under the cursor and reports the change.
fn transition(state: &mut Option<CountryCode>, hit: Option<CountryCode>) -> Option<Message> {
    if *state == hit {
        return None;
    }
    let left = state.take();
    state.clone_from(&hit);
    Some(Message::HoverChanged { left, entered: hit })
}

impl canvas::Program<Message> for MapCanvas<'_> {
    type State = Option<CountryCode>;

    fn update(
        &self,
        state: &mut Self::State,
        event: &iced::Event,
        bounds: Rectangle,
        cursor: mouse::Cursor,
    ) -> Option<Action<Message>> {
        let message = match event {
            iced::Event::Mouse(mouse::Event::CursorMoved { .. }) => {
                transition(state, self.country_at(bounds, cursor))
            }
            iced::Event::Mouse(mouse::Event::CursorLeft) => transition(state, None),
            _ => None,
        };
        message.map(Action::publish)
    }

    fn draw(
        &self,
        _state: &Self::State,
        renderer: &Renderer,
        _theme: &Theme,
        bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> Vec<Geometry> {
        let mut frame = Frame::new(renderer, bounds.size());
        let projection = self.projection(bounds);
        let stroke = Stroke::default()
            .with_width(border::WIDTH_SM)
            .with_color(self.colors.country_border);

        for shape in self.map.shapes() {
            let Some(color) = self.hover.fill_of(shape.code()) else {
                continue;
            };
            let path = Path::new(|builder| {
                for ring in shape.outline().rings() {
                    let mut points = ring.iter().map(|p| projection.to_screen(*p));
                    if let Some(first) = points.next() {
                        builder.move_to(first);
                        points.for_each(|p| builder.line_to(p));
                        builder.close();
                    }
                }
            });
            frame.fill(
                &path,
                Fill {
                    style: canvas::Style::Solid(color),
                    rule: fill::Rule::EvenOdd,
                },
            );
            frame.stroke(&path, stroke);
        }

        vec![frame.into_geometry()]
    }

    fn mouse_interaction(
        &self,
        state: &Self::State,
        _bounds: Rectangle,
        _cursor: mouse::Cursor,
    ) -> mouse::Interaction {
        if state.is_some() {
            mouse::Interaction::Pointer
        } else {
            mouse::Interaction::default()
        }
    }
}

/// Map canvas filling the available space.
pub fn view<'a>(
    map: &'a CountryMap,
    hover: &'a HoverController,
    colors: &'a ColorScheme,
) -> Element<'a, Message> {
    canvas::Canvas::new(MapCanvas::new(map, hover, colors))
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StaleResponsePolicy;
    use crate::hover::PanelLabels;
    use iced::{Color, Point, Size};

    const SVG: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
        <g>
            <path id="dk" d="M0 0 L100 0 L100 100 L0 100 Z" fill="#cccccc"/>
            <path id="se" d="M100 0 L200 0 L200 100 L100 100 Z" fill="#cccccc"/>
        </g>
    </svg>"##;

    fn fixtures() -> (CountryMap, HoverController, ColorScheme) {
        let map = CountryMap::from_svg_data(SVG.as_bytes()).expect("valid map");
        let mut hover = HoverController::new(
            Color::WHITE,
            StaleResponsePolicy::Discard,
            PanelLabels::default(),
        );
        hover.register_paths(map.shapes());
        (map, hover, ColorScheme::light())
    }

    #[test]
    fn transition_reports_enter_move_and_leave() {
        let mut state = None;
        let dk = CountryCode::from("dk");
        let se = CountryCode::from("se");

        assert_eq!(
            transition(&mut state, Some(dk.clone())),
            Some(Message::HoverChanged {
                left: None,
                entered: Some(dk.clone())
            })
        );
        assert_eq!(transition(&mut state, Some(dk.clone())), None);
        assert_eq!(
            transition(&mut state, Some(se.clone())),
            Some(Message::HoverChanged {
                left: Some(dk),
                entered: Some(se.clone())
            })
        );
        assert_eq!(
            transition(&mut state, None),
            Some(Message::HoverChanged {
                left: Some(se),
                entered: None
            })
        );
        assert!(state.is_none());
    }

    #[test]
    fn cursor_position_is_projected_before_hit_testing() {
        let (map, hover, colors) = fixtures();
        let canvas = MapCanvas::new(&map, &hover, &colors);
        // Widget twice the document size, offset on screen.
        let bounds = Rectangle::new(Point::new(10.0, 20.0), Size::new(400.0, 200.0));

        let over_se = Point::new(10.0 + 300.0, 20.0 + 100.0);
        assert_eq!(
            canvas.country_at(bounds, mouse::Cursor::Available(over_se)),
            Some(CountryCode::from("se"))
        );
        assert_eq!(
            canvas.country_at(bounds, mouse::Cursor::Available(Point::new(0.0, 0.0))),
            None
        );
        assert_eq!(canvas.country_at(bounds, mouse::Cursor::Unavailable), None);
    }
}
