// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pointer input boundary: where the cursor is, in raw screen space.
//!
//! A mouse-like device is any [`PointerSource`]. A cursor that lives in a 3D
//! scene (for example a VR controller ray hovering over a world-space panel) is
//! adapted with [`ProjectedCursor`], which projects its world position through
//! a camera-like [`CursorProjection`].

use kurbo::Point;

/// Something that can report the pointer position every tick without blocking.
pub trait PointerSource {
    /// Current position in screen space, or `None` if the device has no position.
    fn current_position(&self) -> Option<Point>;
}

impl PointerSource for Point {
    fn current_position(&self) -> Option<Point> {
        Some(*self)
    }
}

impl PointerSource for Option<Point> {
    fn current_position(&self) -> Option<Point> {
        *self
    }
}

/// A point in 3D world space.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
pub struct WorldPoint {
    /// X coordinate.
    pub x: f64,
    /// Y coordinate.
    pub y: f64,
    /// Z coordinate.
    pub z: f64,
}

impl WorldPoint {
    /// Creates a world point.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Maps world positions to screen positions, typically a camera.
pub trait CursorProjection {
    /// Projects `world` to screen space; `None` when it is not visible.
    fn world_to_screen(&self, world: WorldPoint) -> Option<Point>;
}

impl<F> CursorProjection for F
where
    F: Fn(WorldPoint) -> Option<Point>,
{
    fn world_to_screen(&self, world: WorldPoint) -> Option<Point> {
        self(world)
    }
}

/// A world-space cursor seen through a projection.
#[derive(Clone, Debug)]
pub struct ProjectedCursor<P> {
    projection: P,
    world: Option<WorldPoint>,
}

impl<P: CursorProjection> ProjectedCursor<P> {
    /// Creates a cursor with no known world position.
    pub fn new(projection: P) -> Self {
        Self {
            projection,
            world: None,
        }
    }

    /// Updates the cursor's world position, usually once per frame.
    pub fn set_world_position(&mut self, world: WorldPoint) {
        self.world = Some(world);
    }

    /// The last world position set, if any.
    #[must_use]
    pub fn world_position(&self) -> Option<WorldPoint> {
        self.world
    }

    /// The projection in use.
    pub fn projection(&self) -> &P {
        &self.projection
    }
}

impl<P: CursorProjection> PointerSource for ProjectedCursor<P> {
    fn current_position(&self) -> Option<Point> {
        self.projection.world_to_screen(self.world?)
    }
}
