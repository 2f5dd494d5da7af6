// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Scoring and match feedback for a matching board.

use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Rect};
use understory_drag::DragSurface;
use understory_match::{MatchEvent, SpatialQuery, TargetBoard};
use understory_timing::TimerQueue;

use crate::{DragDrop, DragDropEvent};

/// Read access to target placement, used to snap matched items into their target.
pub trait TargetGeometry<T> {
    /// Rectangle of `target` in surface space, or `None` if unknown.
    fn target_rect(&self, target: &T) -> Option<Rect>;
}

impl<T: Copy + PartialEq + Debug> TargetGeometry<T> for TargetBoard<T> {
    fn target_rect(&self, target: &T) -> Option<Rect> {
        self.rect(target)
    }
}

/// Where a matched item is moved.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Snap {
    /// The item stays where it was dropped.
    None,
    /// The item origin moves to the target's match origin, relative to the target rectangle.
    #[default]
    MatchOrigin,
    /// The item is centered on the target.
    Center,
}

/// What [`MatchBank`] does with a successful match.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct MatchBankConfig {
    /// Matched items can no longer be picked up.
    pub disable_drag_on_match: bool,
    /// Matched items stop reporting hover.
    pub disable_hover_on_match: bool,
    /// Placement of matched items.
    pub snap: Snap,
}

impl Default for MatchBankConfig {
    fn default() -> Self {
        Self {
            disable_drag_on_match: true,
            disable_hover_on_match: true,
            snap: Snap::default(),
        }
    }
}

/// A delayed request to replay an item's feedback effect.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Replay<K, T> {
    /// The item whose effect should play.
    pub item: K,
    /// The target the item is stacked on.
    pub target: T,
}

/// Keeps score for a matching board.
///
/// Feed it the notifications returned by [`DragDrop`] operations through
/// [`MatchBank::observe`]. A success scores a point and a removal takes one
/// back; failures are counted separately. Whenever an item lands on a target,
/// every item stacked there is scheduled to replay its feedback effect,
/// starting [`MatchBank::REPLAY_LEAD_MS`] later and spaced by the new item's
/// [`replay_duration_ms`](understory_drag::DraggableItem::replay_duration_ms).
/// [`MatchBank::poll`] hands out the replays that are due.
#[derive(Debug)]
pub struct MatchBank<K, T> {
    config: MatchBankConfig,
    score: i64,
    failures: u64,
    replays: TimerQueue<Replay<K, T>>,
}

impl<K, T> Default for MatchBank<K, T> {
    fn default() -> Self {
        Self::new(MatchBankConfig::default())
    }
}

impl<K, T> MatchBank<K, T> {
    /// Delay before the first replay after an item lands.
    pub const REPLAY_LEAD_MS: u64 = 100;

    /// Creates a bank with a zero score.
    #[must_use]
    pub fn new(config: MatchBankConfig) -> Self {
        Self {
            config,
            score: 0,
            failures: 0,
            replays: TimerQueue::new(),
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &MatchBankConfig {
        &self.config
    }

    /// Mutable configuration.
    pub fn config_mut(&mut self) -> &mut MatchBankConfig {
        &mut self.config
    }

    /// Successes minus removals.
    #[must_use]
    pub fn score(&self) -> i64 {
        self.score
    }

    /// Drops that matched nothing.
    #[must_use]
    pub fn failures(&self) -> u64 {
        self.failures
    }

    /// Replays scheduled but not yet handed out.
    #[must_use]
    pub fn pending_replays(&self) -> usize {
        self.replays.len()
    }

    /// Deadline of the earliest pending replay, for hosts that sleep between frames.
    #[must_use]
    pub fn next_replay_at(&self) -> Option<u64> {
        self.replays.next_deadline()
    }

    /// Replays due at `now_ms`, earliest first.
    pub fn poll(&mut self, now_ms: u64) -> Vec<Replay<K, T>> {
        self.replays
            .advance(now_ms)
            .into_iter()
            .map(|(_, replay)| replay)
            .collect()
    }

    /// Zeroes the counters and drops pending replays.
    pub fn reset(&mut self) {
        self.score = 0;
        self.failures = 0;
        self.replays.clear();
    }
}

impl<K, T> MatchBank<K, T>
where
    K: Copy + Eq + Hash + Debug,
    T: Copy + PartialEq + Debug,
{
    /// Reacts to notifications published by `root` at `now_ms`.
    pub fn observe<S, Q>(
        &mut self,
        published: &[DragDropEvent<K, T>],
        root: &mut DragDrop<K, T, S, Q>,
        now_ms: u64,
    ) where
        S: DragSurface,
        Q: SpatialQuery<T> + TargetGeometry<T>,
    {
        for event in published.iter().filter_map(DragDropEvent::as_match) {
            match *event {
                MatchEvent::Success { item, target } => {
                    self.score += 1;
                    log::debug!("{item:?} matched {target:?}, score {}", self.score);
                    self.settle(item, target, root);
                }
                MatchEvent::Failure(item) => {
                    self.failures += 1;
                    log::debug!("{item:?} matched nothing, {} failures", self.failures);
                }
                MatchEvent::Removed { item, target } => {
                    self.score -= 1;
                    log::debug!("{item:?} left {target:?}, score {}", self.score);
                }
                MatchEvent::Added { item, target } => self.schedule_replays(item, target, root, now_ms),
            }
        }
    }

    fn settle<S, Q>(&self, item: K, target: T, root: &mut DragDrop<K, T, S, Q>)
    where
        S: DragSurface,
        Q: SpatialQuery<T> + TargetGeometry<T>,
    {
        let rect = root.spatial().target_rect(&target);
        let match_origin = root
            .resolver()
            .target(&target)
            .map_or(Point::ZERO, |t| t.match_origin);
        let Some(state) = root.items_mut().get_mut(&item) else {
            return;
        };
        if self.config.disable_drag_on_match {
            state.drag_enabled = false;
        }
        if self.config.disable_hover_on_match {
            state.hover_enabled = false;
        }
        let Some(rect) = rect else {
            return;
        };
        match self.config.snap {
            Snap::None => {}
            Snap::MatchOrigin => state.origin = rect.origin() + match_origin.to_vec2(),
            Snap::Center => state.origin = rect.center() - state.size.to_vec2() / 2.0,
        }
    }

    fn schedule_replays<S, Q>(&mut self, item: K, target: T, root: &DragDrop<K, T, S, Q>, now_ms: u64)
    where
        S: DragSurface,
        Q: SpatialQuery<T>,
    {
        let Some(spacing) = root.items().get(&item).map(|i| i.replay_duration_ms) else {
            return;
        };
        let Some(stack) = root.resolver().target(&target) else {
            return;
        };
        let mut delay = Self::REPLAY_LEAD_MS;
        for &stacked in stack.all_items_here() {
            if !root.items().contains(&stacked) {
                continue;
            }
            self.replays.schedule_after(
                now_ms,
                delay,
                Replay {
                    item: stacked,
                    target,
                },
            );
            delay = delay.saturating_add(spacing);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::Size;
    use understory_drag::{DragConfig, DraggableItem, Surface};
    use understory_match::{MatchRule, MatchTarget};

    type Root = DragDrop<u32, char, Surface, TargetBoard<char>>;

    fn root() -> Root {
        let surface = Surface::new(Rect::new(0.0, 0.0, 400.0, 300.0), Size::new(400.0, 300.0));
        let mut board = TargetBoard::new();
        board.insert('v', Rect::new(200.0, 0.0, 300.0, 100.0), 0);
        let mut root = DragDrop::new(Some(surface), board, DragConfig::default());
        root.insert_target(
            'v',
            MatchTarget::new(MatchRule::accepting_any(["A", "E"]))
                .with_match_origin(Point::new(10.0, 20.0)),
        );
        root.insert_item(
            1,
            DraggableItem::new("A", Point::new(10.0, 10.0), Size::new(20.0, 20.0))
                .with_replay_duration(250),
        );
        root.insert_item(
            2,
            DraggableItem::new("E", Point::new(40.0, 10.0), Size::new(20.0, 20.0))
                .with_replay_duration(400),
        );
        root.insert_item(3, DraggableItem::new("X", Point::new(70.0, 10.0), Size::new(20.0, 20.0)));
        root
    }

    fn drop_on_target(root: &mut Root, item: u32, from: Point) -> Vec<DragDropEvent<u32, char>> {
        let mut published = root.pointer_down(item, from);
        published.extend(root.tick(Point::new(250.0, 50.0)));
        published.extend(root.pointer_up(item));
        published
    }

    #[test]
    fn success_scores_and_settles_the_item() {
        let mut root = root();
        let mut bank = MatchBank::default();
        let published = drop_on_target(&mut root, 1, Point::new(10.0, 10.0));
        bank.observe(&published, &mut root, 0);

        assert_eq!(bank.score(), 1);
        let item = root.items().get(&1).unwrap();
        assert!(!item.drag_enabled, "drag disabled on match");
        assert!(!item.hover_enabled, "hover disabled on match");
        assert_eq!(item.origin, Point::new(210.0, 20.0));
        assert!(root.pointer_down(1, Point::new(211.0, 21.0)).is_empty(), "cannot pick up again");
    }

    #[test]
    fn center_snap_and_no_disabling() {
        let mut root = root();
        let mut bank = MatchBank::new(MatchBankConfig {
            disable_drag_on_match: false,
            disable_hover_on_match: false,
            snap: Snap::Center,
        });
        let published = drop_on_target(&mut root, 1, Point::new(10.0, 10.0));
        bank.observe(&published, &mut root, 0);

        let item = root.items().get(&1).unwrap();
        assert!(item.drag_enabled, "still draggable");
        assert_eq!(item.origin, Point::new(240.0, 40.0));
    }

    #[test]
    fn failures_and_removals() {
        let mut root = root();
        let mut bank = MatchBank::new(MatchBankConfig {
            disable_drag_on_match: false,
            ..MatchBankConfig::default()
        });
        let published = drop_on_target(&mut root, 3, Point::new(70.0, 10.0));
        bank.observe(&published, &mut root, 0);
        assert_eq!(bank.failures(), 1);
        assert_eq!(bank.score(), 0);

        let published = drop_on_target(&mut root, 2, Point::new(40.0, 10.0));
        bank.observe(&published, &mut root, 0);
        assert_eq!(bank.score(), 1);

        // Picking the matched item back up takes the point away.
        let published = root.pointer_down(2, Point::new(211.0, 21.0));
        bank.observe(&published, &mut root, 0);
        assert_eq!(bank.score(), 0);
    }

    #[test]
    fn replays_are_staggered_by_the_new_item_duration() {
        let mut root = root();
        let mut bank = MatchBank::default();
        let published = drop_on_target(&mut root, 3, Point::new(70.0, 10.0));
        bank.observe(&published, &mut root, 1_000);
        assert_eq!(bank.pending_replays(), 1);
        assert_eq!(bank.next_replay_at(), Some(1_100));

        let published = drop_on_target(&mut root, 1, Point::new(10.0, 10.0));
        bank.observe(&published, &mut root, 2_000);
        // Stack is now [3, 1]; item 1 lasts 250 ms.
        assert!(bank.poll(1_099).is_empty(), "lead time not elapsed");
        assert_eq!(bank.poll(1_100), vec![Replay { item: 3, target: 'v' }]);
        assert_eq!(bank.poll(2_100), vec![Replay { item: 3, target: 'v' }]);
        assert!(bank.poll(2_349).is_empty(), "spacing not elapsed");
        assert_eq!(bank.poll(2_350), vec![Replay { item: 1, target: 'v' }]);
        assert_eq!(bank.pending_replays(), 0);
    }

    #[test]
    fn reset_clears_everything() {
        let mut root = root();
        let mut bank = MatchBank::default();
        let published = drop_on_target(&mut root, 1, Point::new(10.0, 10.0));
        bank.observe(&published, &mut root, 0);
        bank.reset();
        assert_eq!((bank.score(), bank.failures(), bank.pending_replays()), (0, 0, 0));
    }
}
