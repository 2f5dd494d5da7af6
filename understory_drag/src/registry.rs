// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bookkeeping of recently dragged items and the bounds policy applied to them.

use alloc::vec::Vec;

use crate::DragConfig;

/// Items dragged so far and the policy for keeping them in bounds.
///
/// Each entry remembers the bounds radius of the session that dragged it, so a
/// later sweep pushes it back by the same amount.
#[derive(Clone, Debug)]
pub struct DraggableRegistry<K> {
    config: DragConfig,
    dragged: Vec<(K, f64)>,
    late_ticks: u64,
}

impl<K> Default for DraggableRegistry<K> {
    fn default() -> Self {
        Self::new(DragConfig::default())
    }
}

impl<K> DraggableRegistry<K> {
    /// Creates an empty registry with `config`.
    #[must_use]
    pub fn new(config: DragConfig) -> Self {
        Self {
            config,
            dragged: Vec::new(),
            late_ticks: 0,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        &self.config
    }

    /// Mutable configuration.
    pub fn config_mut(&mut self) -> &mut DragConfig {
        &mut self.config
    }

    /// Items dragged since the last trim, oldest first, with their bounds radius.
    #[must_use]
    pub fn dragged(&self) -> &[(K, f64)] {
        &self.dragged
    }

    /// Counts one late tick and reports whether a sweep is due on it.
    pub fn sweep_due(&mut self) -> bool {
        self.late_ticks = self.late_ticks.wrapping_add(1);
        let interval = u64::from(self.config.sweep_interval.max(1));
        self.config.bounds.is_enforced()
            && self.config.sweep_bounds
            && self.late_ticks % interval == 0
    }

    /// Forgets all but the most recently dragged item.
    pub fn trim_to_latest(&mut self) {
        if self.dragged.len() > 1 {
            self.dragged.drain(..self.dragged.len() - 1);
        }
    }
}

impl<K: PartialEq> DraggableRegistry<K> {
    /// Records that `item` was picked up with `radius`.
    ///
    /// An item already present keeps its position in the list and takes the new radius.
    pub fn register(&mut self, item: K, radius: f64) {
        if let Some(entry) = self.dragged.iter_mut().find(|(k, _)| *k == item) {
            entry.1 = radius;
        } else {
            self.dragged.push((item, radius));
        }
    }
}
