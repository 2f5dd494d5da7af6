// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use kurbo::Vec2;
use smallvec::SmallVec;

/// Drag lifecycle notifications, generic over the item key `K`.
#[derive(Copy, Clone, Debug, PartialEq)]
pub enum DragEvent<K> {
    /// A drag session started for the item.
    PickedUp(K),
    /// The active item moved during a tick.
    Dragging {
        /// The dragged item.
        item: K,
        /// How far the item origin moved this tick.
        delta: Vec2,
    },
    /// The session for the item ended, normally or through bounds correction.
    Released(K),
    /// The pointer entered a hover-enabled item.
    HoverEnter(K),
    /// The pointer left a hover-enabled item.
    HoverExit(K),
}

impl<K: Copy> DragEvent<K> {
    /// The item the event is about.
    #[must_use]
    pub fn item(&self) -> K {
        match *self {
            Self::PickedUp(item)
            | Self::Released(item)
            | Self::HoverEnter(item)
            | Self::HoverExit(item)
            | Self::Dragging { item, .. } => item,
        }
    }
}

/// Events produced by one coordinator call, in emission order.
pub type DragEvents<K> = SmallVec<[DragEvent<K>; 2]>;
