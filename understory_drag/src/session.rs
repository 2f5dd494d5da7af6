// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;

/// The state of one drag, from pickup until release or forced end.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct DragSession<K> {
    /// The item being dragged.
    pub item: K,
    /// Grab point relative to the item origin, fixed for the session.
    pub pointer_offset: Vec2,
    /// How far an out-of-bounds item is pushed back toward the region center.
    pub bounds_radius: f64,
    /// Number of ticks that moved the item so far.
    pub moves: u32,
}

impl<K> DragSession<K> {
    /// Starts a session with no moves.
    pub fn new(item: K, pointer_offset: Vec2, bounds_radius: f64) -> Self {
        Self {
            item,
            pointer_offset,
            bounds_radius,
            moves: 0,
        }
    }
}
