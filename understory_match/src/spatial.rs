// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Hit-test boundary: which targets lie under a point.

use alloc::vec::Vec;
use core::fmt::Debug;

use kurbo::{Point, Rect};

/// Resolves the targets under a point.
///
/// Implementations append candidates to `out` in the order they should be
/// tried and never fail; "nothing here" is an empty result.
pub trait SpatialQuery<T> {
    /// Appends the targets under `point` to `out`.
    fn query(&self, point: Point, out: &mut Vec<T>);
}

impl<T, F> SpatialQuery<T> for F
where
    F: Fn(Point, &mut Vec<T>),
{
    fn query(&self, point: Point, out: &mut Vec<T>) {
        self(point, out);
    }
}

/// Order in which overlapping hits are reported.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum HitOrder {
    /// Highest `z` first; among equal `z`, the most recently inserted first.
    #[default]
    FrontToBack,
    /// Lowest `z` first; among equal `z`, the earliest inserted first.
    BackToFront,
    /// Insertion order, ignoring `z`.
    Insertion,
}

#[derive(Clone, Debug)]
struct BoardEntry<T> {
    key: T,
    rect: Rect,
    z: i32,
    pickable: bool,
}

/// A flat list of target rectangles with linear-scan hit testing.
///
/// Suited to the handful of drop zones a matching board usually has.
/// Rectangles are half-open: a point on the right or bottom edge is outside.
#[derive(Clone, Debug)]
pub struct TargetBoard<T> {
    entries: Vec<BoardEntry<T>>,
    order: HitOrder,
}

impl<T> Default for TargetBoard<T> {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            order: HitOrder::default(),
        }
    }
}

impl<T: Copy + PartialEq + Debug> TargetBoard<T> {
    /// Creates an empty board reporting hits front to back.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty board with `order`.
    #[must_use]
    pub fn with_order(order: HitOrder) -> Self {
        Self {
            entries: Vec::new(),
            order,
        }
    }

    /// Current hit order.
    #[must_use]
    pub fn order(&self) -> HitOrder {
        self.order
    }

    /// Changes the hit order.
    pub fn set_order(&mut self, order: HitOrder) {
        self.order = order;
    }

    /// Adds or updates a target's rectangle and stacking order.
    ///
    /// Updating keeps the target's insertion position.
    pub fn insert(&mut self, key: T, rect: Rect, z: i32) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.key == key) {
            e.rect = rect;
            e.z = z;
            return;
        }
        self.entries.push(BoardEntry {
            key,
            rect,
            z,
            pickable: true,
        });
    }

    /// Removes a target. Returns `false` if it was not present.
    pub fn remove(&mut self, key: &T) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != *key);
        before != self.entries.len()
    }

    /// Excludes a target from (or restores it to) hit testing.
    pub fn set_pickable(&mut self, key: &T, pickable: bool) {
        if let Some(e) = self.entries.iter_mut().find(|e| e.key == *key) {
            e.pickable = pickable;
        }
    }

    /// A target's rectangle.
    #[must_use]
    pub fn rect(&self, key: &T) -> Option<Rect> {
        self.entries.iter().find(|e| e.key == *key).map(|e| e.rect)
    }

    /// Number of targets on the board.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns `true` if the board is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Targets under `point`, in the board's hit order.
    #[must_use]
    pub fn hits(&self, point: Point) -> Vec<T> {
        let mut out = Vec::new();
        self.query(point, &mut out);
        out
    }
}

impl<T: Copy + PartialEq + Debug> SpatialQuery<T> for TargetBoard<T> {
    fn query(&self, point: Point, out: &mut Vec<T>) {
        let mut found: Vec<(usize, &BoardEntry<T>)> = self
            .entries
            .iter()
            .enumerate()
            .filter(|(_, e)| e.pickable && e.rect.contains(point))
            .collect();
        match self.order {
            HitOrder::Insertion => {}
            HitOrder::BackToFront => found.sort_by_key(|(i, e)| (e.z, *i)),
            HitOrder::FrontToBack => {
                found.sort_by_key(|(i, e)| (core::cmp::Reverse(e.z), core::cmp::Reverse(*i)));
            }
        }
        out.extend(found.into_iter().map(|(_, e)| e.key));
    }
}
