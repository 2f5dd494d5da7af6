// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_drag::DragEvent;
use understory_match::MatchEvent;

/// One notification published by [`DragDrop`](crate::DragDrop), in publication order.
///
/// Every operation on the root returns the notifications it broadcast so that
/// collaborators needing mutable access (such as [`MatchBank`](crate::MatchBank))
/// can react after the call returns.
#[derive(Clone, Debug, PartialEq)]
pub enum DragDropEvent<K, T> {
    /// A drag lifecycle notification.
    Drag(DragEvent<K>),
    /// A match resolution notification.
    Match(MatchEvent<K, T>),
}

impl<K, T> DragDropEvent<K, T> {
    /// The match notification, if this is one.
    pub fn as_match(&self) -> Option<&MatchEvent<K, T>> {
        match self {
            Self::Match(event) => Some(event),
            Self::Drag(_) => None,
        }
    }

    /// The drag notification, if this is one.
    pub fn as_drag(&self) -> Option<&DragEvent<K>> {
        match self {
            Self::Drag(event) => Some(event),
            Self::Match(_) => None,
        }
    }
}

impl<K, T> From<DragEvent<K>> for DragDropEvent<K, T> {
    fn from(event: DragEvent<K>) -> Self {
        Self::Drag(event)
    }
}

impl<K, T> From<MatchEvent<K, T>> for DragDropEvent<K, T> {
    fn from(event: MatchEvent<K, T>) -> Self {
        Self::Match(event)
    }
}
