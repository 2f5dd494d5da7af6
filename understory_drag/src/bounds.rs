// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bounds enforcement: which region is valid, and how an out-of-region item is pulled back.

use kurbo::{Point, Rect, Vec2};

use crate::DragSurface;

/// Which region dragged items must stay inside.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum BoundsMode {
    /// No enforcement.
    #[default]
    None,
    /// The whole drag surface, as reported by [`DragSurface::bounds`].
    Surface,
    /// The visible viewport, as reported by [`DragSurface::viewport`].
    Viewport,
}

impl BoundsMode {
    /// Returns `true` unless the mode is [`BoundsMode::None`].
    #[must_use]
    pub fn is_enforced(self) -> bool {
        !matches!(self, Self::None)
    }
}

/// The valid region for `mode`, in surface-local coordinates.
///
/// Recomputed on every check since the surface may be resized live.
pub fn bounds_region(mode: BoundsMode, surface: &impl DragSurface) -> Option<Rect> {
    match mode {
        BoundsMode::None => None,
        BoundsMode::Surface => Some(surface.bounds().abs()),
        BoundsMode::Viewport => Some(surface.viewport().abs()),
    }
}

/// Computes where an item at `origin` must move to get back inside `region`.
///
/// Returns `None` when `origin` is already inside (edges included). Otherwise the
/// origin is pushed `radius` units toward the region center and clamped to the
/// region's edges, so the result is always inside and a second call with the
/// result returns `None`.
#[must_use]
pub fn correct_into_region(origin: Point, region: Rect, radius: f64) -> Option<Point> {
    let region = region.abs();
    let outside =
        origin.x < region.x0 || origin.y < region.y0 || origin.x > region.x1 || origin.y > region.y1;
    if !outside {
        return None;
    }

    let away = origin - region.center();
    let len = away.hypot();
    let direction = if len > 0.0 { away / len } else { Vec2::ZERO };
    let pushed = origin - direction * radius;

    Some(Point::new(
        pushed.x.clamp(region.x0, region.x1),
        pushed.y.clamp(region.y0, region.y1),
    ))
}
