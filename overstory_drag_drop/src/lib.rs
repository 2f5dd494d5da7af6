// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Overstory Drag Drop: a drag-and-drop matching root.
//!
//! [`DragDrop`] composes the Understory kernels into one object a host can
//! drive from its input loop:
//!
//! - `understory_drag` moves the single dragged item and enforces bounds,
//! - `understory_match` decides which target, if any, accepts a dropped item,
//! - `understory_signal` broadcasts drag and match notifications to subscribers.
//!
//! The host forwards pointer presses and releases on items, calls
//! [`DragDrop::tick`] every frame and [`DragDrop::late_tick`] after layout,
//! and answers hit tests through a [`SpatialQuery`](understory_match::SpatialQuery).
//! Every call also returns what it published, so collaborators that need to
//! change items in response (like [`MatchBank`]) can do so afterwards.
//!
//! ```rust
//! use kurbo::{Point, Rect, Size};
//! use overstory_drag_drop::{DragDrop, MatchBank};
//! use understory_drag::{DragConfig, DraggableItem, Surface};
//! use understory_match::{ItemMatchState, MatchRule, MatchTarget, TargetBoard};
//!
//! let surface = Surface::new(Rect::new(0.0, 0.0, 640.0, 480.0), Size::new(640.0, 480.0));
//! let mut board = TargetBoard::new();
//! board.insert("vowels", Rect::new(400.0, 0.0, 640.0, 240.0), 0);
//!
//! let mut root = DragDrop::new(Some(surface), board, DragConfig::default());
//! root.insert_target(
//!     "vowels",
//!     MatchTarget::new(MatchRule::accepting_any(["A", "E", "I", "O", "U"])),
//! );
//! root.insert_item('a', DraggableItem::new("A", Point::new(20.0, 20.0), Size::new(32.0, 32.0)));
//!
//! let mut bank = MatchBank::default();
//! let mut published = root.pointer_down('a', Point::new(30.0, 30.0));
//! published.extend(root.tick(Point::new(500.0, 100.0)));
//! published.extend(root.pointer_up('a'));
//! bank.observe(&published, &mut root, 0);
//!
//! assert_eq!(root.item_state(&'a'), ItemMatchState::Matched("vowels"));
//! assert_eq!(bank.score(), 1);
//! ```
//!
//! The root is single-threaded: subscribers are boxed closures run
//! synchronously during the call that published the event.

mod bank;
mod drag_drop;
mod event;

pub use bank::{MatchBank, MatchBankConfig, Replay, Snap, TargetGeometry};
pub use drag_drop::{DragDrop, DropPoint, Published};
pub use event::DragDropEvent;
