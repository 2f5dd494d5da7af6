// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use smallvec::SmallVec;

/// Match lifecycle notifications for item key `K` and target key `T`.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MatchEvent<K, T> {
    /// The item was dropped on the target, before acceptance is decided.
    Added {
        /// Dropped item.
        item: K,
        /// Target under the drop point.
        target: T,
    },
    /// The target accepted the item.
    Success {
        /// Matched item.
        item: K,
        /// Accepting target.
        target: T,
    },
    /// No target under the drop point accepted the item.
    Failure(K),
    /// A previously matched item was picked up again.
    Removed {
        /// Item that left the target.
        item: K,
        /// Target it was matched to.
        target: T,
    },
}

impl<K: Copy, T: Copy> MatchEvent<K, T> {
    /// The item the event is about.
    #[must_use]
    pub fn item(&self) -> K {
        match *self {
            Self::Added { item, .. }
            | Self::Success { item, .. }
            | Self::Removed { item, .. }
            | Self::Failure(item) => item,
        }
    }

    /// The target involved, if any.
    #[must_use]
    pub fn target(&self) -> Option<T> {
        match *self {
            Self::Added { target, .. }
            | Self::Success { target, .. }
            | Self::Removed { target, .. } => Some(target),
            Self::Failure(_) => None,
        }
    }
}

/// Events produced by one resolver call, in emission order.
pub type MatchEvents<K, T> = SmallVec<[MatchEvent<K, T>; 2]>;
