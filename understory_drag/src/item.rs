// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Draggable items and a keyed store for them.

use alloc::string::String;
use core::hash::Hash;

use hashbrown::HashMap;
use kurbo::{Point, Rect, Size};

use crate::ItemLayout;

/// Something that can be picked up and dragged.
///
/// Geometry is in surface-local coordinates. `origin` is the point the drag
/// coordinator moves and bounds-checks.
#[derive(Clone, Debug, PartialEq)]
pub struct DraggableItem {
    /// Tag compared against match targets.
    pub match_id: String,
    /// Position of the item in surface space.
    pub origin: Point,
    /// Size of the item.
    pub size: Size,
    /// When `false`, pointer presses do not start a drag.
    pub drag_enabled: bool,
    /// When `false`, hover enter/exit notifications are suppressed.
    pub hover_enabled: bool,
    /// Set while the item is the subject of a drag session.
    pub being_dragged: bool,
    /// Duration of the item's feedback effect, used to stagger replays of stacked items.
    pub replay_duration_ms: u64,
}

impl DraggableItem {
    /// Creates an enabled, idle item.
    pub fn new(match_id: impl Into<String>, origin: Point, size: Size) -> Self {
        Self {
            match_id: match_id.into(),
            origin,
            size,
            drag_enabled: true,
            hover_enabled: true,
            being_dragged: false,
            replay_duration_ms: 0,
        }
    }

    /// Sets the replay duration.
    #[must_use]
    pub fn with_replay_duration(mut self, ms: u64) -> Self {
        self.replay_duration_ms = ms;
        self
    }

    /// The item's rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::from_origin_size(self.origin, self.size)
    }

    /// Center of the item's rectangle.
    #[must_use]
    pub fn center(&self) -> Point {
        self.rect().center()
    }

    /// Returns `true` if a press on this item may start a drag now.
    #[must_use]
    pub fn can_pick_up(&self) -> bool {
        self.drag_enabled && !self.being_dragged
    }
}

/// Draggable items keyed by an application handle.
#[derive(Clone, Debug)]
pub struct ItemStore<K> {
    items: HashMap<K, DraggableItem>,
}

impl<K> Default for ItemStore<K> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> ItemStore<K> {
    /// Creates an empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or replaces an item, returning the previous one.
    pub fn insert(&mut self, key: K, item: DraggableItem) -> Option<DraggableItem> {
        self.items.insert(key, item)
    }

    /// Removes an item.
    pub fn remove(&mut self, key: &K) -> Option<DraggableItem> {
        self.items.remove(key)
    }

    /// Looks up an item.
    #[must_use]
    pub fn get(&self, key: &K) -> Option<&DraggableItem> {
        self.items.get(key)
    }

    /// Looks up an item mutably.
    pub fn get_mut(&mut self, key: &K) -> Option<&mut DraggableItem> {
        self.items.get_mut(key)
    }

    /// Returns `true` if `key` is stored.
    #[must_use]
    pub fn contains(&self, key: &K) -> bool {
        self.items.contains_key(key)
    }

    /// Number of stored items.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if the store is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterates over all items in unspecified order.
    pub fn iter(&self) -> impl Iterator<Item = (&K, &DraggableItem)> {
        self.items.iter()
    }

    /// Keys of items currently flagged as being dragged.
    pub fn dragged(&self) -> impl Iterator<Item = K> + '_ {
        self.items
            .iter()
            .filter(|(_, item)| item.being_dragged)
            .map(|(key, _)| *key)
    }
}

impl<K: Copy + Eq + Hash> ItemLayout<K> for ItemStore<K> {
    fn origin(&self, item: &K) -> Option<Point> {
        self.items.get(item).map(|i| i.origin)
    }

    fn set_origin(&mut self, item: &K, origin: Point) {
        if let Some(i) = self.items.get_mut(item) {
            i.origin = origin;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_items_are_enabled_and_idle() {
        let item = DraggableItem::new("A", Point::ZERO, Size::new(10.0, 20.0));
        assert!(item.drag_enabled);
        assert!(item.hover_enabled);
        assert!(!item.being_dragged);
        assert!(item.can_pick_up());
        assert_eq!(item.center(), Point::new(5.0, 10.0));
    }

    #[test]
    fn dragging_or_disabled_items_cannot_be_picked_up() {
        let mut item = DraggableItem::new("A", Point::ZERO, Size::new(1.0, 1.0));
        item.being_dragged = true;
        assert!(!item.can_pick_up());
        item.being_dragged = false;
        item.drag_enabled = false;
        assert!(!item.can_pick_up());
    }

    #[test]
    fn store_layout_moves_only_known_items() {
        let mut store = ItemStore::new();
        store.insert(1_u8, DraggableItem::new("A", Point::ZERO, Size::new(1.0, 1.0)));

        store.set_origin(&1, Point::new(3.0, 4.0));
        store.set_origin(&2, Point::new(9.0, 9.0));

        assert_eq!(store.origin(&1), Some(Point::new(3.0, 4.0)));
        assert_eq!(store.origin(&2), None);
        assert_eq!(store.len(), 1);
    }
}
