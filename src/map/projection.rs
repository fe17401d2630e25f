// SPDX-License-Identifier: MPL-2.0
//! Mapping between map document space and widget space.

use iced::{Point, Rectangle, Size, Vector};

/// Fits a document into widget bounds, preserving its aspect ratio and
/// centring it (CSS `object-fit: contain`).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapProjection {
    scale: f32,
    offset: Vector,
}

impl MapProjection {
    /// Computes the projection for a document of `document` size drawn in
    /// `bounds`. Bounds are taken relative to the widget origin.
    #[must_use]
    pub fn fit(document: Size, bounds: Size) -> Self {
        if document.width <= 0.0 || document.height <= 0.0 {
            return Self {
                scale: 1.0,
                offset: Vector::ZERO,
            };
        }

        let scale = (bounds.width / document.width)
            .min(bounds.height / document.height)
            .max(f32::EPSILON);
        let offset = Vector::new(
            (bounds.width - document.width * scale) / 2.0,
            (bounds.height - document.height * scale) / 2.0,
        );
        Self { scale, offset }
    }

    #[must_use]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    #[must_use]
    pub fn offset(&self) -> Vector {
        self.offset
    }

    /// Converts a widget-relative position into document coordinates.
    #[must_use]
    pub fn to_document(&self, screen: Point) -> Point {
        Point::new(
            (screen.x - self.offset.x) / self.scale,
            (screen.y - self.offset.y) / self.scale,
        )
    }

    /// Converts a document position into widget-relative coordinates.
    #[must_use]
    pub fn to_screen(&self, document: Point) -> Point {
        Point::new(
            document.x * self.scale + self.offset.x,
            document.y * self.scale + self.offset.y,
        )
    }

    /// Area of the widget actually covered by the document.
    #[must_use]
    pub fn covered_area(&self, document: Size) -> Rectangle {
        Rectangle::new(
            Point::new(self.offset.x, self.offset.y),
            Size::new(document.width * self.scale, document.height * self.scale),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wide_widget_letterboxes_horizontally() {
        let projection = MapProjection::fit(Size::new(100.0, 100.0), Size::new(400.0, 200.0));
        assert_eq!(projection.scale(), 2.0);
        assert_eq!(projection.offset(), Vector::new(100.0, 0.0));
    }

    #[test]
    fn screen_and_document_conversions_are_inverse() {
        let projection = MapProjection::fit(Size::new(800.0, 600.0), Size::new(1024.0, 700.0));
        let doc = Point::new(123.0, 456.0);
        let back = projection.to_document(projection.to_screen(doc));
        assert!((back.x - doc.x).abs() < 1e-3);
        assert!((back.y - doc.y).abs() < 1e-3);
    }

    #[test]
    fn empty_document_uses_identity() {
        let projection = MapProjection::fit(Size::ZERO, Size::new(300.0, 300.0));
        assert_eq!(projection.to_document(Point::new(3.0, 4.0)), Point::new(3.0, 4.0));
    }

    #[test]
    fn covered_area_is_centred() {
        let document = Size::new(50.0, 100.0);
        let projection = MapProjection::fit(document, Size::new(200.0, 100.0));
        let area = projection.covered_area(document);
        assert_eq!(area, Rectangle::new(Point::new(75.0, 0.0), Size::new(50.0, 100.0)));
    }
}
