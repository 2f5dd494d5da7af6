// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The [`Signal`] broadcast channel.

use alloc::boxed::Box;
use alloc::vec::Vec;
use core::fmt;

use crate::SubscriberError;

type Subscriber<E> = Box<dyn FnMut(&E) -> Result<(), SubscriberError>>;

/// Handle identifying one subscription on one [`Signal`].
///
/// Handles are never reused within a signal, so a stale handle passed to
/// [`Signal::unsubscribe`] is simply ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct SubscriptionId(u64);

/// Outcome of a single [`Signal::emit`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct EmitReport {
    /// Number of subscribers that handled the event without fault.
    pub delivered: usize,
    /// Subscriptions that failed or panicked, in invocation order.
    pub faulted: Vec<SubscriptionId>,
}

impl EmitReport {
    /// Returns `true` when every subscriber handled the event.
    #[must_use]
    pub fn is_clean(&self) -> bool {
        self.faulted.is_empty()
    }
}

/// Multi-subscriber broadcast channel for events of type `E`.
///
/// Subscribers run synchronously in subscription order. See the crate docs for
/// the fault isolation rules.
pub struct Signal<E> {
    name: &'static str,
    next_id: u64,
    subscribers: Vec<(SubscriptionId, Subscriber<E>)>,
}

impl<E> fmt::Debug for Signal<E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Signal")
            .field("name", &self.name)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl<E> Default for Signal<E> {
    fn default() -> Self {
        Self::new("signal")
    }
}

impl<E> Signal<E> {
    /// Creates an empty signal. `name` only appears in diagnostics.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            next_id: 0,
            subscribers: Vec::new(),
        }
    }

    /// The diagnostic name given at construction.
    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Registers a fallible subscriber and returns its handle.
    pub fn subscribe(
        &mut self,
        subscriber: impl FnMut(&E) -> Result<(), SubscriberError> + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id);
        self.next_id += 1;
        self.subscribers.push((id, Box::new(subscriber)));
        id
    }

    /// Registers a subscriber that cannot fail.
    pub fn listen(&mut self, mut subscriber: impl FnMut(&E) + 'static) -> SubscriptionId {
        self.subscribe(move |event| {
            subscriber(event);
            Ok(())
        })
    }

    /// Removes a subscription. Returns `false` if the handle is unknown.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        let before = self.subscribers.len();
        self.subscribers.retain(|(sid, _)| *sid != id);
        self.subscribers.len() != before
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    /// Returns `true` if nobody is subscribed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }

    /// Removes every subscription.
    pub fn clear(&mut self) {
        self.subscribers.clear();
    }

    /// Delivers `event` to every subscriber in subscription order.
    pub fn emit(&mut self, event: &E) -> EmitReport {
        let mut report = EmitReport::default();
        for (id, subscriber) in &mut self.subscribers {
            match invoke(subscriber, event) {
                Ok(()) => report.delivered += 1,
                Err(err) => {
                    log::warn!("{}: subscription {:?} faulted: {err}", self.name, id);
                    report.faulted.push(*id);
                }
            }
        }
        report
    }
}

#[cfg(feature = "std")]
fn invoke<E>(subscriber: &mut Subscriber<E>, event: &E) -> Result<(), SubscriberError> {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    match catch_unwind(AssertUnwindSafe(|| subscriber(event))) {
        Ok(result) => result,
        Err(payload) => {
            let message = if let Some(s) = payload.downcast_ref::<&str>() {
                (*s).into()
            } else if let Some(s) = payload.downcast_ref::<alloc::string::String>() {
                s.clone()
            } else {
                "panicked".into()
            };
            Err(SubscriberError::new(message))
        }
    }
}

#[cfg(not(feature = "std"))]
fn invoke<E>(subscriber: &mut Subscriber<E>, event: &E) -> Result<(), SubscriberError> {
    subscriber(event)
}
