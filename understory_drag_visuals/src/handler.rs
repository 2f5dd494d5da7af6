// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-item visual state driven by drag events.

use core::hash::Hash;

use hashbrown::HashMap;
use peniko::Color;
use understory_drag::DragEvent;

use crate::{PresentationSurface, route};

/// What an item currently looks like.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum VisualState {
    /// Resting.
    #[default]
    Idle,
    /// Being dragged.
    Dragging,
    /// Under the pointer.
    Hovered,
}

/// Colors used for each [`VisualState`].
#[derive(Copy, Clone, Debug)]
pub struct VisualStyle {
    /// Resting color.
    pub default: Color,
    /// Color while dragged.
    pub dragging: Color,
    /// Color while hovered.
    pub hover: Color,
}

impl Default for VisualStyle {
    fn default() -> Self {
        Self {
            default: Color::WHITE,
            dragging: Color::from_rgba8(0, 255, 0, 255),
            hover: Color::from_rgba8(255, 235, 4, 255),
        }
    }
}

impl VisualStyle {
    /// Replaces the resting color, keeping the others.
    #[must_use]
    pub fn with_default(mut self, color: Color) -> Self {
        self.default = color;
        self
    }

    /// The color for `state`.
    #[must_use]
    pub fn color_for(&self, state: VisualState) -> Color {
        match state {
            VisualState::Idle => self.default,
            VisualState::Dragging => self.dragging,
            VisualState::Hovered => self.hover,
        }
    }
}

/// Visual state of one item.
#[derive(Copy, Clone, Debug, Default)]
pub struct ItemVisual {
    /// The item's colors.
    pub style: VisualStyle,
    /// The item's current state.
    pub state: VisualState,
}

impl ItemVisual {
    /// The color to draw the item with now.
    #[must_use]
    pub fn color(&self) -> Color {
        self.style.color_for(self.state)
    }
}

impl PresentationSurface for ItemVisual {
    fn on_drag_started(&mut self) {
        self.state = VisualState::Dragging;
    }

    fn on_drag_ended(&mut self) {
        self.state = VisualState::Idle;
    }

    fn on_hover_enter(&mut self) {
        self.state = VisualState::Hovered;
    }

    fn on_hover_exit(&mut self) {
        self.state = VisualState::Idle;
    }
}

/// Tracks [`ItemVisual`]s for a set of items.
///
/// Events about unregistered items are ignored.
#[derive(Clone, Debug)]
pub struct VisualStateHandler<K> {
    visuals: HashMap<K, ItemVisual>,
}

impl<K> Default for VisualStateHandler<K> {
    fn default() -> Self {
        Self {
            visuals: HashMap::new(),
        }
    }
}

impl<K: Copy + Eq + Hash> VisualStateHandler<K> {
    /// Creates an empty handler.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts tracking `item` in the idle state.
    pub fn register(&mut self, item: K, style: VisualStyle) {
        self.visuals.insert(
            item,
            ItemVisual {
                style,
                state: VisualState::Idle,
            },
        );
    }

    /// Stops tracking `item`.
    pub fn unregister(&mut self, item: &K) -> Option<ItemVisual> {
        self.visuals.remove(item)
    }

    /// Updates the visual of the item `event` is about.
    ///
    /// Returns `true` if a registered item was affected.
    pub fn apply(&mut self, event: &DragEvent<K>) -> bool {
        let item = event.item();
        self.visuals
            .get_mut(&item)
            .is_some_and(|visual| route(visual, &item, event))
    }

    /// Current state of `item`.
    #[must_use]
    pub fn state(&self, item: &K) -> Option<VisualState> {
        self.visuals.get(item).map(|v| v.state)
    }

    /// Current color of `item`.
    #[must_use]
    pub fn color(&self, item: &K) -> Option<Color> {
        self.visuals.get(item).map(ItemVisual::color)
    }
}
