// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Understory Signal: synchronous multi-subscriber event channels.
//!
//! A [`Signal`] is a broadcast channel for one event type. Subscribers are plain
//! closures registered with [`Signal::subscribe`] (fallible) or [`Signal::listen`]
//! (infallible), and every call to [`Signal::emit`] runs them synchronously, in
//! subscription order, on the caller's stack.
//!
//! ## Fault isolation
//!
//! One misbehaving subscriber must not starve the others:
//!
//! - A subscriber that returns `Err(SubscriberError)` is logged at `warn` level and
//!   recorded in the returned [`EmitReport`]; later subscribers still run.
//! - With the `std` feature (on by default), a subscriber that panics is caught
//!   and treated the same way.
//!
//! ## Minimal example
//!
//! ```rust
//! use understory_signal::{Signal, SubscriberError};
//!
//! let mut released: Signal<u32> = Signal::new("released");
//! let first = released.subscribe(|item| {
//!     if *item == 0 {
//!         return Err(SubscriberError::new("item 0 has no visual"));
//!     }
//!     Ok(())
//! });
//! released.listen(|_| {});
//!
//! let report = released.emit(&0);
//! assert_eq!(report.delivered, 1);
//! assert_eq!(report.faulted, vec![first]);
//!
//! assert!(released.unsubscribe(first));
//! assert_eq!(released.emit(&0).delivered, 1);
//! ```
//!
//! There is no queue: an event is fully delivered before `emit` returns, so events
//! emitted back to back are observed in emission order by every subscriber.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

#[cfg(feature = "std")]
extern crate std;

mod error;
mod signal;

pub use error::SubscriberError;
pub use signal::{EmitReport, Signal, SubscriptionId};
