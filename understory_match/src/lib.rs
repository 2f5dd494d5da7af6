// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Match: drop-target resolution for drag-and-drop UIs.
//!
//! ## Overview
//!
//! A [`MatchTarget`] is a drop zone with an acceptance [`MatchRule`] over item
//! tags and two occupancy lists: every item currently dropped on it, and the
//! subset that matched. The [`MatchResolver`] owns all targets and is the only
//! thing that changes those lists.
//!
//! The resolver does not perform hit testing. Feed it the target keys under the
//! drop point, in the order they should be tried, typically from a
//! [`SpatialQuery`] such as [`TargetBoard`]. Which order is "right" depends on
//! the host, so [`TargetBoard`] makes it a [`HitOrder`] setting.
//!
//! ## Item states
//!
//! An item's state is derived from target membership, not stored:
//!
//! - `Free`: on no target.
//! - `Hovering`: on a target that did not accept it.
//! - `Matched`: accepted by a target.
//!
//! [`MatchResolver::handle_drop`] moves a free item onto targets and
//! [`MatchResolver::handle_pick_up`] makes it free again.
//!
//! ## Example
//!
//! ```rust
//! use understory_match::{MatchEvent, MatchResolver, MatchRule, MatchTarget};
//!
//! let mut resolver = MatchResolver::new();
//! resolver.insert_target("vowels", MatchTarget::new(MatchRule::expecting("A")));
//!
//! let events = resolver.handle_drop(1_u32, " A ", ["vowels"]);
//! assert_eq!(
//!     events.as_slice(),
//!     &[
//!         MatchEvent::Added { item: 1, target: "vowels" },
//!         MatchEvent::Success { item: 1, target: "vowels" },
//!     ]
//! );
//!
//! // Single-match targets refuse a second item, even with the right tag.
//! let events = resolver.handle_drop(2, "A", ["vowels"]);
//! assert_eq!(events.last(), Some(&MatchEvent::Failure(2)));
//!
//! // Picking the first item up undoes its match.
//! let events = resolver.handle_pick_up(1);
//! assert_eq!(events.as_slice(), &[MatchEvent::Removed { item: 1, target: "vowels" }]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod event;
mod resolver;
mod rule;
mod spatial;
mod target;

pub use event::{MatchEvent, MatchEvents};
pub use resolver::{ItemMatchState, MatchResolver};
pub use rule::{MatchRule, is_match};
pub use spatial::{HitOrder, SpatialQuery, TargetBoard};
pub use target::MatchTarget;
