// SPDX-License-Identifier: MPL-2.0
//! Flattened country outlines and point containment.

use iced::{Point, Rectangle};
use tiny_skia::PathSegment;

/// Number of line segments used to approximate one Bézier curve.
const CURVE_STEPS: usize = 8;

/// A country outline made of closed polygonal rings in document coordinates.
///
/// Containment follows the even-odd rule across all rings, so holes
/// (enclaves such as San Marino inside Italy) are honoured.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    rings: Vec<Vec<Point>>,
    bounds: Option<Rectangle>,
}

impl Outline {
    /// Builds an outline from explicit rings. Rings with fewer than three
    /// points enclose no area and are dropped.
    #[must_use]
    pub fn from_rings(rings: Vec<Vec<Point>>) -> Self {
        let rings: Vec<Vec<Point>> = rings.into_iter().filter(|r| r.len() >= 3).collect();
        let bounds = bounding_box(rings.iter().flatten());
        Self { rings, bounds }
    }

    /// Flattens a (transformed) path into rings, sampling curves.
    #[must_use]
    pub fn from_path(path: &tiny_skia::Path) -> Self {
        let mut rings = Vec::new();
        let mut current: Vec<Point> = Vec::new();
        let mut start = Point::ORIGIN;
        let mut last = Point::ORIGIN;

        for segment in path.segments() {
            match segment {
                PathSegment::MoveTo(p) => {
                    flush(&mut rings, &mut current);
                    start = to_point(p);
                    last = start;
                    current.push(start);
                }
                PathSegment::LineTo(p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    last = to_point(p);
                    current.push(last);
                }
                PathSegment::QuadTo(c, p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    let (c, p) = (to_point(c), to_point(p));
                    for step in 1..=CURVE_STEPS {
                        let t = step as f32 / CURVE_STEPS as f32;
                        current.push(quad(last, c, p, t));
                    }
                    last = p;
                }
                PathSegment::CubicTo(c1, c2, p) => {
                    if current.is_empty() {
                        current.push(last);
                    }
                    let (c1, c2, p) = (to_point(c1), to_point(c2), to_point(p));
                    for step in 1..=CURVE_STEPS {
                        let t = step as f32 / CURVE_STEPS as f32;
                        current.push(cubic(last, c1, c2, p, t));
                    }
                    last = p;
                }
                PathSegment::Close => {
                    flush(&mut rings, &mut current);
                    last = start;
                }
            }
        }
        flush(&mut rings, &mut current);

        Self::from_rings(rings)
    }

    /// Merges several outlines into one, e.g. the paths of a country group.
    #[must_use]
    pub fn union(outlines: impl IntoIterator<Item = Outline>) -> Self {
        Self::from_rings(outlines.into_iter().flat_map(|o| o.rings).collect())
    }

    #[must_use]
    pub fn rings(&self) -> &[Vec<Point>] {
        &self.rings
    }

    /// Axis-aligned bounding box, `None` for an empty outline.
    #[must_use]
    pub fn bounds(&self) -> Option<Rectangle> {
        self.bounds
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rings.is_empty()
    }

    /// Even-odd containment test.
    #[must_use]
    pub fn contains(&self, point: Point) -> bool {
        match self.bounds {
            Some(bounds) if bounds.contains(point) => {}
            _ => return false,
        }

        let mut inside = false;
        for ring in &self.rings {
            let mut j = ring.len() - 1;
            for i in 0..ring.len() {
                let (a, b) = (ring[i], ring[j]);
                if (a.y > point.y) != (b.y > point.y)
                    && point.x < (b.x - a.x) * (point.y - a.y) / (b.y - a.y) + a.x
                {
                    inside = !inside;
                }
                j = i;
            }
        }
        inside
    }
}

fn flush(rings: &mut Vec<Vec<Point>>, current: &mut Vec<Point>) {
    if current.len() >= 3 {
        rings.push(std::mem::take(current));
    } else {
        current.clear();
    }
}

fn to_point(p: tiny_skia::Point) -> Point {
    Point::new(p.x, p.y)
}

fn quad(p0: Point, c: Point, p: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    Point::new(
        mt * mt * p0.x + 2.0 * mt * t * c.x + t * t * p.x,
        mt * mt * p0.y + 2.0 * mt * t * c.y + t * t * p.y,
    )
}

fn cubic(p0: Point, c1: Point, c2: Point, p: Point, t: f32) -> Point {
    let mt = 1.0 - t;
    let (a, b, c, d) = (mt * mt * mt, 3.0 * mt * mt * t, 3.0 * mt * t * t, t * t * t);
    Point::new(
        a * p0.x + b * c1.x + c * c2.x + d * p.x,
        a * p0.y + b * c1.y + c * c2.y + d * p.y,
    )
}

fn bounding_box<'a>(points: impl Iterator<Item = &'a Point>) -> Option<Rectangle> {
    let mut points = points.peekable();
    points.peek()?;
    let (mut min_x, mut min_y) = (f32::INFINITY, f32::INFINITY);
    let (mut max_x, mut max_y) = (f32::NEG_INFINITY, f32::NEG_INFINITY);
    for p in points {
        min_x = min_x.min(p.x);
        min_y = min_y.min(p.y);
        max_x = max_x.max(p.x);
        max_y = max_y.max(p.y);
    }
    Some(Rectangle {
        x: min_x,
        y: min_y,
        width: max_x - min_x,
        height: max_y - min_y,
    })
}
