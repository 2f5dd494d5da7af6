// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::string::String;
use core::fmt;

/// Failure reported by a subscriber.
///
/// The emitter never propagates this to its caller; it is logged and listed in
/// the [`EmitReport`](crate::EmitReport) of the emission that produced it.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SubscriberError {
    message: String,
}

impl SubscriberError {
    /// Creates an error carrying a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The message given at construction.
    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl fmt::Display for SubscriberError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscriber failed: {}", self.message)
    }
}

impl core::error::Error for SubscriberError {}
