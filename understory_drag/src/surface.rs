// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Layout boundary: the drag surface and item geometry as seen by the coordinator.

use kurbo::{Affine, Point, Rect, Size};

/// The surface items are dragged across, usually a canvas or panel.
///
/// All rectangles are in the surface's local coordinate space.
pub trait DragSurface {
    /// Converts a raw screen point to surface-local coordinates.
    ///
    /// `None` means the point cannot be mapped right now (for example a
    /// degenerate transform); the coordinator then leaves the item where it is.
    fn screen_to_local(&self, screen: Point) -> Option<Point>;

    /// The full surface rectangle.
    fn bounds(&self) -> Rect;

    /// The visible screen area, expressed in surface-local coordinates.
    fn viewport(&self) -> Rect;
}

/// Read/write access to item origins, keyed by `K`.
pub trait ItemLayout<K> {
    /// Current origin of `item`, or `None` if unknown.
    fn origin(&self, item: &K) -> Option<Point>;

    /// Moves `item`. Unknown items are ignored.
    fn set_origin(&mut self, item: &K, origin: Point);
}

/// A drag surface placed on screen through an affine transform.
#[derive(Clone, Debug, PartialEq)]
pub struct Surface {
    bounds: Rect,
    screen_size: Size,
    screen_to_local: Affine,
}

impl Surface {
    /// A surface whose local space coincides with screen space.
    #[must_use]
    pub fn new(bounds: Rect, screen_size: Size) -> Self {
        Self {
            bounds,
            screen_size,
            screen_to_local: Affine::IDENTITY,
        }
    }

    /// Sets the screen→local transform.
    #[must_use]
    pub fn with_screen_to_local(mut self, transform: Affine) -> Self {
        self.screen_to_local = transform;
        self
    }

    /// The screen→local transform.
    #[must_use]
    pub fn screen_to_local_transform(&self) -> Affine {
        self.screen_to_local
    }

    /// Replaces the surface rectangle, for example after a resize.
    pub fn set_bounds(&mut self, bounds: Rect) {
        self.bounds = bounds;
    }

    /// Replaces the screen size.
    pub fn set_screen_size(&mut self, size: Size) {
        self.screen_size = size;
    }

    /// The screen size in pixels.
    #[must_use]
    pub fn screen_size(&self) -> Size {
        self.screen_size
    }
}

impl DragSurface for Surface {
    fn screen_to_local(&self, screen: Point) -> Option<Point> {
        let local = self.screen_to_local * screen;
        (local.x.is_finite() && local.y.is_finite()).then_some(local)
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }

    fn viewport(&self) -> Rect {
        let screen = Rect::from_origin_size(Point::ZERO, self.screen_size);
        self.screen_to_local.transform_rect_bbox(screen)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Vec2;

    #[test]
    fn identity_surface_maps_points_through() {
        let s = Surface::new(Rect::new(0.0, 0.0, 10.0, 10.0), Size::new(10.0, 10.0));
        assert_eq!(s.screen_to_local(Point::new(3.0, 4.0)), Some(Point::new(3.0, 4.0)));
        assert_eq!(s.viewport(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }

    #[test]
    fn translated_and_scaled_surface() {
        // Surface drawn at (100, 50) on screen at 2x scale.
        let local_to_screen = Affine::translate(Vec2::new(100.0, 50.0)) * Affine::scale(2.0);
        let s = Surface::new(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(1000.0, 700.0))
            .with_screen_to_local(local_to_screen.inverse());

        assert_eq!(s.screen_to_local(Point::new(100.0, 50.0)), Some(Point::ZERO));
        assert_eq!(
            s.screen_to_local(Point::new(300.0, 250.0)),
            Some(Point::new(100.0, 100.0))
        );
        assert_eq!(s.viewport(), Rect::new(-50.0, -25.0, 450.0, 325.0));
    }

    #[test]
    fn degenerate_transform_yields_no_point() {
        let s = Surface::new(Rect::ZERO, Size::ZERO).with_screen_to_local(Affine::scale(0.0).inverse());
        assert_eq!(s.screen_to_local(Point::new(1.0, 1.0)), None);
    }
}
