// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use alloc::vec::Vec;

use kurbo::Point;

use crate::MatchRule;

/// A drop zone: an acceptance rule plus its current occupancy.
///
/// Occupancy is read-only outside the resolver. The invariants
/// `current_match_items ⊆ all_items_here` and, for single-match rules,
/// `current_match_items.len() <= 1` hold after every resolver call.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct MatchTarget<K> {
    rule: MatchRule,
    /// Where matched items should be placed, in the target's local space.
    pub match_origin: Point,
    current: Vec<K>,
    here: Vec<K>,
}

impl<K: Copy + PartialEq> MatchTarget<K> {
    /// Creates an empty target with `rule`.
    #[must_use]
    pub fn new(rule: MatchRule) -> Self {
        Self {
            rule,
            match_origin: Point::ZERO,
            current: Vec::new(),
            here: Vec::new(),
        }
    }

    /// Sets the placement point for matched items.
    #[must_use]
    pub fn with_match_origin(mut self, origin: Point) -> Self {
        self.match_origin = origin;
        self
    }

    /// Acceptance configuration.
    #[must_use]
    pub fn rule(&self) -> &MatchRule {
        &self.rule
    }

    /// Replaces the acceptance configuration.
    ///
    /// The new rule governs later drops. Switching to a single-match rule
    /// keeps only the earliest match; the other matched items stay here,
    /// unmatched, and are returned.
    pub fn set_rule(&mut self, rule: MatchRule) -> Vec<K> {
        self.rule = rule;
        if self.rule.single_match && self.current.len() > 1 {
            return self.current.split_off(1);
        }
        Vec::new()
    }

    /// Items that matched, in match order.
    #[must_use]
    pub fn current_match_items(&self) -> &[K] {
        &self.current
    }

    /// Items dropped here, matched or not, in drop order.
    #[must_use]
    pub fn all_items_here(&self) -> &[K] {
        &self.here
    }

    /// Returns `true` if `item` matched this target.
    #[must_use]
    pub fn is_matched(&self, item: &K) -> bool {
        self.current.contains(item)
    }

    /// Returns `true` if `item` was dropped here.
    #[must_use]
    pub fn is_here(&self, item: &K) -> bool {
        self.here.contains(item)
    }

    /// Whether this target would accept `candidate` right now.
    #[must_use]
    pub fn accepts(&self, candidate: &str) -> bool {
        self.rule.accepts(self.current.len(), candidate)
    }

    pub(crate) fn add_here(&mut self, item: K) {
        if !self.here.contains(&item) {
            self.here.push(item);
        }
    }

    pub(crate) fn set_matched(&mut self, item: K) {
        self.add_here(item);
        if !self.current.contains(&item) {
            self.current.push(item);
        }
    }

    pub(crate) fn remove_here(&mut self, item: &K) -> bool {
        let before = self.here.len();
        self.here.retain(|k| k != item);
        before != self.here.len()
    }

    pub(crate) fn remove_matched(&mut self, item: &K) -> bool {
        let before = self.current.len();
        self.current.retain(|k| k != item);
        before != self.current.len()
    }

    pub(crate) fn clear(&mut self) {
        self.current.clear();
        self.here.clear();
    }
}
