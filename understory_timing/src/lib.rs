// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Timing: host-agnostic timer queue primitives.
//!
//! UI code often wants "do this a little later": replay an animation after a
//! short pause, stagger a sequence of effects, or fire a callback a few frames
//! from now. This crate does not own a clock or a thread. The host passes its
//! own monotonic time (milliseconds, any epoch) into [`TimerQueue::advance`]
//! once per tick and receives the payloads that became due, in order.
//!
//! Ordering is by deadline, then by scheduling order, so two entries with the
//! same deadline come out in the order they were scheduled.
//!
//! ```rust
//! use understory_timing::TimerQueue;
//!
//! let mut timers = TimerQueue::new();
//! timers.schedule_after(1_000, 100, "first");
//! let later = timers.schedule_after(1_000, 250, "second");
//! timers.schedule_after(1_000, 100, "tied");
//!
//! assert_eq!(timers.next_deadline(), Some(1_100));
//! let due: Vec<_> = timers.advance(1_100).into_iter().map(|(_, p)| p).collect();
//! assert_eq!(due, ["first", "tied"]);
//!
//! assert!(timers.cancel(later));
//! assert!(timers.advance(2_000).is_empty());
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod queue;

pub use queue::{TimerId, TimerQueue};
