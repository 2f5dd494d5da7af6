// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The match resolver: applies drops and pickups to target occupancy.

use alloc::vec::Vec;
use core::fmt::Debug;

use crate::{MatchEvent, MatchEvents, MatchTarget};

/// Where an item stands with respect to the targets, derived from occupancy.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum ItemMatchState<T> {
    /// On no target.
    Free,
    /// On a target that did not accept it.
    Hovering(T),
    /// Accepted by a target.
    Matched(T),
}

/// Owns the match targets and mutates their occupancy in response to drops
/// and pickups.
///
/// Targets are kept in insertion order; that order is used when scanning for
/// an item on pickup.
#[derive(Clone, Debug)]
pub struct MatchResolver<K, T> {
    targets: Vec<(T, MatchTarget<K>)>,
}

impl<K, T> Default for MatchResolver<K, T> {
    fn default() -> Self {
        Self {
            targets: Vec::new(),
        }
    }
}

impl<K, T> MatchResolver<K, T>
where
    K: Copy + PartialEq + Debug,
    T: Copy + PartialEq + Debug,
{
    /// Creates a resolver with no targets.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a target, replacing (and returning) any target with the same key.
    pub fn insert_target(&mut self, key: T, target: MatchTarget<K>) -> Option<MatchTarget<K>> {
        if let Some((_, existing)) = self.targets.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(existing, target));
        }
        self.targets.push((key, target));
        None
    }

    /// Removes a target and its occupancy.
    pub fn remove_target(&mut self, key: &T) -> Option<MatchTarget<K>> {
        let idx = self.targets.iter().position(|(k, _)| k == key)?;
        Some(self.targets.remove(idx).1)
    }

    /// Looks up a target.
    #[must_use]
    pub fn target(&self, key: &T) -> Option<&MatchTarget<K>> {
        self.targets.iter().find(|(k, _)| k == key).map(|(_, t)| t)
    }

    /// Mutable access to a target's configuration.
    ///
    /// Occupancy stays read-only; rule changes go through [`MatchTarget::set_rule`].
    pub fn target_mut(&mut self, key: &T) -> Option<&mut MatchTarget<K>> {
        self.targets
            .iter_mut()
            .find(|(k, _)| k == key)
            .map(|(_, t)| t)
    }

    /// All targets in insertion order.
    pub fn targets(&self) -> impl Iterator<Item = (T, &MatchTarget<K>)> {
        self.targets.iter().map(|(k, t)| (*k, t))
    }

    /// Number of targets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.targets.len()
    }

    /// Returns `true` if there are no targets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.targets.is_empty()
    }

    /// Empties every target's occupancy, keeping the targets.
    pub fn clear_occupancy(&mut self) {
        for (_, t) in &mut self.targets {
            t.clear();
        }
    }

    /// Derived state of `item`.
    #[must_use]
    pub fn item_state(&self, item: &K) -> ItemMatchState<T> {
        let mut hovering = None;
        for (key, target) in &self.targets {
            if target.is_matched(item) {
                return ItemMatchState::Matched(*key);
            }
            if hovering.is_none() && target.is_here(item) {
                hovering = Some(*key);
            }
        }
        hovering.map_or(ItemMatchState::Free, ItemMatchState::Hovering)
    }

    /// The target `item` is matched to, if any.
    #[must_use]
    pub fn matched_target(&self, item: &K) -> Option<T> {
        match self.item_state(item) {
            ItemMatchState::Matched(t) => Some(t),
            _ => None,
        }
    }

    /// Undoes any placement of `item` because it was picked up.
    ///
    /// The item leaves every target it was dropped on. An item matches at most
    /// one target, so at most one `Removed` is emitted; calling this again is a
    /// no-op.
    pub fn handle_pick_up(&mut self, item: K) -> MatchEvents<K, T> {
        let mut events = MatchEvents::new();
        for (key, target) in &mut self.targets {
            target.remove_here(&item);
            if events.is_empty() && target.remove_matched(&item) {
                log::debug!("{item:?} removed from {key:?}");
                events.push(MatchEvent::Removed { item, target: *key });
            }
        }
        events
    }

    /// Places `item` (tagged `match_id`) on the targets in `hits`.
    ///
    /// Hits are tried in the order given. Keys that are not targets are
    /// skipped. Each target tried records the item and emits `Added`; the first
    /// one that accepts it records the match, emits `Success`, and ends the
    /// search. If none accepts, a single `Failure` is emitted, also when there
    /// were no hits at all.
    pub fn handle_drop(
        &mut self,
        item: K,
        match_id: &str,
        hits: impl IntoIterator<Item = T>,
    ) -> MatchEvents<K, T> {
        let mut events = MatchEvents::new();
        for hit in hits {
            let Some(target) = self.target_mut(&hit) else {
                continue;
            };
            target.add_here(item);
            events.push(MatchEvent::Added { item, target: hit });
            if target.accepts(match_id) {
                target.set_matched(item);
                log::debug!("{item:?} ({match_id:?}) matched {hit:?}");
                events.push(MatchEvent::Success { item, target: hit });
                return events;
            }
        }
        log::debug!("{item:?} ({match_id:?}) matched nothing");
        events.push(MatchEvent::Failure(item));
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::MatchRule;

    fn resolver() -> MatchResolver<u32, char> {
        let mut r = MatchResolver::new();
        r.insert_target('a', MatchTarget::new(MatchRule::expecting("A")));
        r.insert_target('b', MatchTarget::new(MatchRule::expecting("B")));
        r.insert_target('m', MatchTarget::new(MatchRule::accepting_any(["X", "Y"])));
        r
    }

    fn assert_invariants(r: &MatchResolver<u32, char>) {
        for (_, t) in r.targets() {
            for item in t.current_match_items() {
                assert!(t.is_here(item), "matched items must be here");
            }
            if t.rule().single_match {
                assert!(t.current_match_items().len() <= 1, "single match overflow");
            }
        }
    }

    #[test]
    fn insert_replaces_existing_key() {
        let mut r = resolver();
        let old = r.insert_target('a', MatchTarget::new(MatchRule::expecting("Z")));
        assert_eq!(old.unwrap().rule().expected_match_id, "A");
        assert_eq!(r.len(), 3);
        assert_eq!(r.target(&'a').unwrap().rule().expected_match_id, "Z");
    }

    #[test]
    fn drop_tries_hits_in_order_and_stops_at_first_accept() {
        let mut r = resolver();
        let events = r.handle_drop(1, "B", ['a', 'b', 'm']);
        assert_eq!(
            events.as_slice(),
            &[
                MatchEvent::Added { item: 1, target: 'a' },
                MatchEvent::Added { item: 1, target: 'b' },
                MatchEvent::Success { item: 1, target: 'b' },
            ]
        );
        assert!(r.target(&'a').unwrap().is_here(&1));
        assert!(!r.target(&'m').unwrap().is_here(&1));
        assert_eq!(r.item_state(&1), ItemMatchState::Matched('b'));
        assert_invariants(&r);
    }

    #[test]
    fn switching_to_single_match_keeps_the_first_match() {
        let mut r = resolver();
        r.handle_drop(1, "X", ['m']);
        r.handle_drop(2, "Y", ['m']);
        r.handle_drop(3, "X", ['m']);

        let rule = MatchRule::accepting_any(["X", "Y"]).with_single_match(true);
        let evicted = r.target_mut(&'m').unwrap().set_rule(rule);

        assert_eq!(evicted, [2, 3]);
        let m = r.target(&'m').unwrap();
        assert_eq!(m.current_match_items(), &[1]);
        assert_eq!(m.all_items_here(), &[1, 2, 3]);
        assert_eq!(r.item_state(&2), ItemMatchState::Hovering('m'));
        assert!(!r.target(&'m').unwrap().accepts("Y"), "full");
        assert_invariants(&r);
    }

    #[test]
    fn relaxing_the_rule_keeps_occupancy() {
        let mut r = resolver();
        r.handle_drop(1, "A", ['a']);
        let evicted = r
            .target_mut(&'a')
            .unwrap()
            .set_rule(MatchRule::expecting("A").with_single_match(false));
        assert!(evicted.is_empty());
        let events = r.handle_drop(2, "A", ['a']);
        assert_eq!(events.last(), Some(&MatchEvent::Success { item: 2, target: 'a' }));
        assert_eq!(r.target(&'a').unwrap().current_match_items(), &[1, 2]);
    }

    #[test]
    fn drop_on_nothing_fails_once() {
        let mut r = resolver();
        let events = r.handle_drop(1, "A", []);
        assert_eq!(events.as_slice(), &[MatchEvent::Failure(1)]);
        assert_eq!(r.item_state(&1), ItemMatchState::Free);
    }

    #[test]
    fn unknown_hits_are_skipped() {
        let mut r = resolver();
        let events = r.handle_drop(1, "A", ['?', 'a']);
        assert_eq!(events.len(), 2);
        assert_eq!(events[1], MatchEvent::Success { item: 1, target: 'a' });
    }

    #[test]
    fn rejected_drop_leaves_item_hovering() {
        let mut r = resolver();
        let events = r.handle_drop(1, "Q", ['a', 'b']);
        assert_eq!(events.last(), Some(&MatchEvent::Failure(1)));
        assert_eq!(events.len(), 3);
        assert_eq!(r.item_state(&1), ItemMatchState::Hovering('a'));
        assert_invariants(&r);
    }

    #[test]
    fn pick_up_frees_item_from_every_target() {
        let mut r = resolver();
        r.handle_drop(1, "B", ['a', 'b']);

        let events = r.handle_pick_up(1);

        assert_eq!(events.as_slice(), &[MatchEvent::Removed { item: 1, target: 'b' }]);
        assert_eq!(r.item_state(&1), ItemMatchState::Free);
        assert!(r.handle_pick_up(1).is_empty());
    }

    #[test]
    fn pick_up_of_hovering_item_emits_nothing() {
        let mut r = resolver();
        r.handle_drop(1, "Q", ['a']);
        assert!(r.handle_pick_up(1).is_empty());
        assert_eq!(r.item_state(&1), ItemMatchState::Free);
    }

    #[test]
    fn multi_match_target_collects_in_order() {
        let mut r = resolver();
        r.handle_drop(1, "X", ['m']);
        r.handle_drop(2, "Y", ['m']);
        assert_eq!(r.target(&'m').unwrap().current_match_items(), &[1, 2]);
        assert_invariants(&r);
    }

    #[test]
    fn clear_occupancy_frees_everything() {
        let mut r = resolver();
        r.handle_drop(1, "A", ['a']);
        r.handle_drop(2, "Q", ['b']);
        r.clear_occupancy();
        assert_eq!(r.item_state(&1), ItemMatchState::Free);
        assert_eq!(r.item_state(&2), ItemMatchState::Free);
        assert_eq!(r.len(), 3);
    }

    #[test]
    fn remove_target_drops_its_occupancy() {
        let mut r = resolver();
        r.handle_drop(1, "A", ['a']);
        let removed = r.remove_target(&'a').unwrap();
        assert_eq!(removed.current_match_items(), &[1]);
        assert_eq!(r.item_state(&1), ItemMatchState::Free);
        assert!(r.remove_target(&'a').is_none());
    }
}
