// SPDX-License-Identifier: MPL-2.0
//! Country map loaded from an SVG document.
//!
//! Geometry and resolved fill colours come from `usvg`; which elements count
//! as countries is decided by [`discovery`] (`<path id="..">` with a `<g>`
//! ancestor). Element ids are the country codes sent to the API.

mod discovery;
mod geometry;
mod projection;

pub use discovery::grouped_path_ids;
pub use geometry::Outline;
pub use projection::MapProjection;

use crate::config::{parse_hex_color, DEFAULT_COUNTRY_FILL};
use crate::domain::CountryCode;
use crate::error::{Error, Result};
use iced::{Color, Point, Size};
use resvg::usvg;
use std::path::PathBuf;

/// Demonstration map shipped with the binary.
pub const BUNDLED_MAP: &[u8] = include_bytes!("../../assets/maps/europe.svg");

/// One hoverable country.
#[derive(Debug, Clone, PartialEq)]
pub struct CountryShape {
    code: CountryCode,
    outline: Outline,
    default_fill: Color,
}

impl CountryShape {
    #[must_use]
    pub fn new(code: CountryCode, outline: Outline, default_fill: Color) -> Self {
        Self {
            code,
            outline,
            default_fill,
        }
    }

    #[must_use]
    pub fn code(&self) -> &CountryCode {
        &self.code
    }

    #[must_use]
    pub fn outline(&self) -> &Outline {
        &self.outline
    }

    /// Fill the document gives this shape, restored when the pointer leaves.
    #[must_use]
    pub fn default_fill(&self) -> Color {
        self.default_fill
    }
}

/// Parsed map: document size, raw source and country shapes in document order.
#[derive(Debug, Clone)]
pub struct CountryMap {
    size: Size,
    source: Vec<u8>,
    shapes: Vec<CountryShape>,
}

impl CountryMap {
    /// Parses an SVG document and resolves every country shape in it.
    pub fn from_svg_data(data: &[u8]) -> Result<Self> {
        let ids = grouped_path_ids(data)?;
        let tree = usvg::Tree::from_data(data, &usvg::Options::default())?;
        let size = Size::new(tree.size().width(), tree.size().height());

        let shapes = ids
            .into_iter()
            .filter_map(|id| {
                let Some(node) = tree.node_by_id(&id) else {
                    tracing::debug!(%id, "path has no renderable geometry, skipped");
                    return None;
                };
                let (outline, fill) = resolve_node(node);
                if outline.is_empty() {
                    tracing::debug!(%id, "path encloses no area, skipped");
                    return None;
                }
                Some(CountryShape::new(
                    CountryCode::new(id),
                    outline,
                    fill.unwrap_or_else(fallback_fill),
                ))
            })
            .collect::<Vec<_>>();

        tracing::info!(countries = shapes.len(), "map parsed");
        Ok(Self {
            size,
            source: data.to_vec(),
            shapes,
        })
    }

    /// The bundled demonstration map.
    pub fn bundled() -> Result<Self> {
        Self::from_svg_data(BUNDLED_MAP)
    }

    /// Loads a map file, or the bundled map when `path` is `None`.
    ///
    /// Parsing runs on the blocking pool so large documents do not stall
    /// the runtime.
    pub async fn load(path: Option<PathBuf>) -> Result<Self> {
        let data = match &path {
            Some(path) => tokio::fs::read(path).await?,
            None => BUNDLED_MAP.to_vec(),
        };
        tokio::task::spawn_blocking(move || Self::from_svg_data(&data))
            .await
            .map_err(|e| Error::Svg(format!("map parsing task failed: {e}")))?
    }

    /// Document size in user units.
    #[must_use]
    pub fn size(&self) -> Size {
        self.size
    }

    /// Raw SVG bytes, used to draw the decoration under the country shapes.
    #[must_use]
    pub fn source(&self) -> &[u8] {
        &self.source
    }

    #[must_use]
    pub fn shapes(&self) -> &[CountryShape] {
        &self.shapes
    }

    #[must_use]
    pub fn shape(&self, code: &CountryCode) -> Option<&CountryShape> {
        self.shapes.iter().find(|s| s.code() == code)
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.shapes.is_empty()
    }

    /// Topmost shape containing `point` (document coordinates).
    ///
    /// Later elements paint over earlier ones, so the search runs in reverse
    /// document order.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<&CountryShape> {
        self.shapes.iter().rev().find(|s| s.outline().contains(point))
    }
}

/// Collects the outline and first solid fill of a node. Groups contribute
/// the union of their descendant paths.
fn resolve_node(node: &usvg::Node) -> (Outline, Option<Color>) {
    match node {
        usvg::Node::Path(path) => {
            let outline = path
                .data()
                .clone()
                .transform(path.abs_transform())
                .map(|data| Outline::from_path(&data))
                .unwrap_or_default();
            (outline, solid_fill(path))
        }
        usvg::Node::Group(group) => {
            let mut fill = None;
            let mut outlines = Vec::new();
            for child in group.children() {
                let (outline, child_fill) = resolve_node(child);
                fill = fill.or(child_fill);
                outlines.push(outline);
            }
            (Outline::union(outlines), fill)
        }
        _ => (Outline::default(), None),
    }
}

fn solid_fill(path: &usvg::Path) -> Option<Color> {
    let fill = path.fill()?;
    match fill.paint() {
        usvg::Paint::Color(c) => Some(Color::from_rgba8(
            c.red,
            c.green,
            c.blue,
            fill.opacity().get(),
        )),
        _ => None,
    }
}

fn fallback_fill() -> Color {
    parse_hex_color(DEFAULT_COUNTRY_FILL).unwrap_or(Color::from_rgb8(0xc0, 0xc0, 0xc0))
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100" viewBox="0 0 200 100">
        <rect id="sea" width="200" height="100" fill="#0000ff"/>
        <g id="countries">
            <path id="DK" d="M0 0 L100 0 L100 100 L0 100 Z" fill="#ff0000"/>
            <path id="SE" d="M100 0 L200 0 L200 100 L100 100 Z" fill="#00ff00"/>
            <path id="NF" d="M0 0 L200 0 L200 100 L0 100 Z"/>
        </g>
        <path id="frame" d="M0 0 L200 0 L200 100 L0 100 Z" fill="none"/>
    </svg>"##;

    #[test]
    fn parses_grouped_paths_with_fills() {
        let map = CountryMap::from_svg_data(SAMPLE.as_bytes()).expect("valid map");
        let codes: Vec<_> = map.shapes().iter().map(|s| s.code().as_str()).collect();
        assert_eq!(codes, vec!["DK", "SE", "NF"]);
        assert_eq!(map.size(), Size::new(200.0, 100.0));

        let dk = map.shape(&CountryCode::from("DK")).expect("DK registered");
        assert_eq!(dk.default_fill(), Color::from_rgb8(0xff, 0, 0));
        let sweden = map.shape(&CountryCode::from("SE")).expect("SE registered");
        assert_eq!(sweden.default_fill(), Color::from_rgb8(0, 0xff, 0));
    }

    #[test]
    fn hit_test_prefers_topmost_shape() {
        let map = CountryMap::from_svg_data(SAMPLE.as_bytes()).expect("valid map");
        // NF covers everything and is drawn last.
        let hit = map.hit_test(Point::new(50.0, 50.0)).expect("hit");
        assert_eq!(hit.code().as_str(), "NF");
        assert!(map.hit_test(Point::new(250.0, 50.0)).is_none());
    }

    #[test]
    fn hit_test_finds_each_country() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="200" height="100">
            <g>
                <path id="DK" d="M0 0 L100 0 L100 100 L0 100 Z" fill="#ff0000"/>
                <path id="SE" d="M100 0 L200 0 L200 100 L100 100 Z" fill="#00ff00"/>
            </g>
        </svg>"##;
        let map = CountryMap::from_svg_data(svg.as_bytes()).expect("valid map");
        assert_eq!(map.hit_test(Point::new(20.0, 20.0)).map(|s| s.code().as_str()), Some("DK"));
        assert_eq!(map.hit_test(Point::new(180.0, 20.0)).map(|s| s.code().as_str()), Some("SE"));
    }

    #[test]
    fn transforms_are_applied_to_outlines() {
        let svg = r##"<svg xmlns="http://www.w3.org/2000/svg" width="100" height="100">
            <g transform="translate(50 50)">
                <path id="IS" d="M0 0 L10 0 L10 10 L0 10 Z" fill="#ffffff"/>
            </g>
        </svg>"##;
        let map = CountryMap::from_svg_data(svg.as_bytes()).expect("valid map");
        assert!(map.hit_test(Point::new(55.0, 55.0)).is_some());
        assert!(map.hit_test(Point::new(5.0, 5.0)).is_none());
    }

    #[test]
    fn bundled_map_has_countries() {
        let map = CountryMap::bundled().expect("bundled map parses");
        assert!(!map.is_empty());
        let dk = map.shape(&CountryCode::from("dk")).expect("dk registered");
        // Fill inherited from the enclosing group.
        assert_eq!(dk.default_fill(), Color::from_rgb8(0xc0, 0xc0, 0xc0));
    }

    #[test]
    fn invalid_document_is_an_error() {
        assert!(CountryMap::from_svg_data(b"not svg at all").is_err());
    }
}
