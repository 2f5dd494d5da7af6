// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Drag Visuals: presentation hooks for drag lifecycle events.
//!
//! Drag coordination is headless. Something still has to tint the item being
//! dragged or hovered, and that something usually only cares about its own
//! item. This crate provides:
//!
//! - [`PresentationSurface`]: callbacks a visual implements, plus [`route`],
//!   which forwards a [`DragEvent`] only to the surface that owns the item.
//! - [`VisualStateHandler`]: a ready-made surface per item that tracks a
//!   [`VisualState`] and resolves it to a color from a [`VisualStyle`].
//!
//! The renderer reads [`VisualStateHandler::color`] when it draws; nothing here
//! draws.
//!
//! ```rust
//! use understory_drag::DragEvent;
//! use understory_drag_visuals::{VisualState, VisualStateHandler, VisualStyle};
//!
//! let mut visuals = VisualStateHandler::new();
//! visuals.register(7_u32, VisualStyle::default());
//!
//! visuals.apply(&DragEvent::PickedUp(7));
//! assert_eq!(visuals.state(&7), Some(VisualState::Dragging));
//!
//! visuals.apply(&DragEvent::Released(7));
//! assert_eq!(visuals.state(&7), Some(VisualState::Idle));
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod handler;
mod surface;

pub use handler::{ItemVisual, VisualState, VisualStateHandler, VisualStyle};
pub use surface::{PresentationSurface, route};

pub use understory_drag::DragEvent;
