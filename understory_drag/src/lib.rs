// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag: drag coordination for retained-mode UIs.
//!
//! This crate owns the answer to "what is being dragged right now". It does not
//! read input devices, walk a scene graph, or draw anything. The host feeds it
//! raw pointer positions once per tick and gives it two narrow views of the
//! world:
//!
//! - a [`DragSurface`] that converts screen points into the surface's local
//!   space and reports the surface and viewport rectangles, and
//! - an [`ItemLayout`] through which the coordinator reads and writes item
//!   origins. [`ItemStore`] is a ready-made implementation.
//!
//! Every operation returns the [`DragEvent`]s it produced, in order. Callers
//! route those to whoever cares (a match resolver, visuals, scoring).
//!
//! ## Session lifecycle
//!
//! 1) [`DragCoordinator::begin_drag`] starts a session for an item with a grab
//!    offset and a bounds radius, and emits [`DragEvent::PickedUp`]. A second
//!    call replaces the session without queuing.
//! 2) [`DragCoordinator::tick`] converts the pointer into surface space, moves
//!    the item so the grab point stays under the pointer, and emits
//!    [`DragEvent::Dragging`]. With bounds enforcement on, an item that leaves
//!    the valid region is pushed back toward its center and the drag ends.
//! 3) [`DragCoordinator::end_drag`] emits [`DragEvent::Released`]. It is a
//!    no-op without a session.
//!
//! ```rust
//! use kurbo::{Point, Rect, Size, Vec2};
//! use understory_drag::{DragCoordinator, DragEvent, DraggableItem, ItemStore, Surface};
//!
//! let surface = Surface::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(800.0, 600.0));
//! let mut items = ItemStore::new();
//! items.insert(1_u32, DraggableItem::new("A", Point::new(10.0, 10.0), Size::new(40.0, 40.0)));
//!
//! let mut drag = DragCoordinator::new();
//! let picked = drag.begin_drag(1, Vec2::new(5.0, 5.0), 40.0);
//! assert_eq!(picked.as_slice(), &[DragEvent::PickedUp(1)]);
//!
//! drag.tick(Point::new(105.0, 55.0), &surface, &mut items);
//! assert_eq!(items.get(&1).unwrap().origin, Point::new(100.0, 50.0));
//!
//! let released = drag.end_drag();
//! assert_eq!(released.as_slice(), &[DragEvent::Released(1)]);
//! assert!(drag.end_drag().is_empty());
//! ```
//!
//! ## Bounds sweeps
//!
//! Items dragged earlier can end up outside the region when the layout changes
//! between drags. [`DragCoordinator::sweep`], called once per late tick,
//! periodically re-checks every item dragged so far and then forgets all but
//! the most recent one.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod config;
mod coordinator;
mod error;
mod event;
mod input;
mod item;
mod registry;
mod session;
mod surface;

pub use bounds::{BoundsMode, bounds_region, correct_into_region};
pub use config::DragConfig;
pub use coordinator::DragCoordinator;
pub use error::ConfigError;
pub use event::{DragEvent, DragEvents};
pub use input::{CursorProjection, PointerSource, ProjectedCursor, WorldPoint};
pub use item::{DraggableItem, ItemStore};
pub use registry::DraggableRegistry;
pub use session::DragSession;
pub use surface::{DragSurface, ItemLayout, Surface};
