// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `MatchResolver` driven by a `TargetBoard`: acceptance cases,
//! occupancy after pickup, and how hit order decides between overlapping targets.

use kurbo::{Point, Rect};
use understory_match::{
    HitOrder, ItemMatchState, MatchEvent, MatchResolver, MatchRule, MatchTarget, TargetBoard,
    is_match,
};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Zone {
    Left,
    Right,
    Bin,
}

fn drop_at(
    resolver: &mut MatchResolver<u32, Zone>,
    board: &TargetBoard<Zone>,
    item: u32,
    tag: &str,
    at: Point,
) -> Vec<MatchEvent<u32, Zone>> {
    resolver.handle_drop(item, tag, board.hits(at)).into_vec()
}

#[test]
fn acceptance_cases() {
    let single_a = MatchRule::expecting("A");
    assert!(is_match(&single_a, 0, " A "));
    assert!(!is_match(&single_a, 0, "B"));

    let mut resolver = MatchResolver::new();
    resolver.insert_target(Zone::Left, MatchTarget::new(single_a));
    let events = resolver.handle_drop(1, "B", [Zone::Left]);
    assert_eq!(events.last(), Some(&MatchEvent::Failure(1)));

    resolver.insert_target(Zone::Bin, MatchTarget::new(MatchRule::accepting_any(["X", "Y"])));
    resolver.handle_drop(2, "X", [Zone::Bin]);
    resolver.handle_drop(3, "Y", [Zone::Bin]);
    assert_eq!(
        resolver.target(&Zone::Bin).unwrap().current_match_items().len(),
        2
    );
}

#[test]
fn occupied_single_match_target_never_accepts_again() {
    let mut resolver = MatchResolver::new();
    resolver.insert_target(Zone::Left, MatchTarget::new(MatchRule::expecting("A")));
    resolver.handle_drop(1, "A", [Zone::Left]);

    for item in 2..6 {
        let events = resolver.handle_drop(item, "A", [Zone::Left]);
        assert!(!events.iter().any(|e| matches!(e, MatchEvent::Success { .. })));
        assert_eq!(events.last(), Some(&MatchEvent::Failure(item)));
    }
    assert_eq!(
        resolver.target(&Zone::Left).unwrap().current_match_items(),
        &[1]
    );
}

#[test]
fn pickup_undoes_match_exactly_once() {
    let mut resolver = MatchResolver::new();
    resolver.insert_target(Zone::Left, MatchTarget::new(MatchRule::expecting("A")));
    resolver.handle_drop(1, "A", [Zone::Left]);
    assert_eq!(resolver.item_state(&1), ItemMatchState::Matched(Zone::Left));

    let first = resolver.handle_pick_up(1);
    let second = resolver.handle_pick_up(1);

    assert_eq!(
        first.as_slice(),
        &[MatchEvent::Removed {
            item: 1,
            target: Zone::Left
        }]
    );
    assert!(second.is_empty());
    assert_eq!(resolver.item_state(&1), ItemMatchState::Free);

    // The slot is free again.
    let events = resolver.handle_drop(2, "A", [Zone::Left]);
    assert!(matches!(events.last(), Some(MatchEvent::Success { item: 2, .. })));
}

#[test]
fn drop_with_no_targets_changes_nothing() {
    let mut resolver: MatchResolver<u32, Zone> = MatchResolver::new();
    let events = resolver.handle_drop(1, "A", []);
    assert_eq!(events.as_slice(), &[MatchEvent::Failure(1)]);
    assert!(resolver.is_empty());

    resolver.insert_target(Zone::Left, MatchTarget::new(MatchRule::expecting("A")));
    let board = TargetBoard::new();
    let events = drop_at(&mut resolver, &board, 1, "A", Point::new(1.0, 1.0));
    assert_eq!(events, [MatchEvent::Failure(1)]);
    assert!(resolver.target(&Zone::Left).unwrap().all_items_here().is_empty());
}

/// Two overlapping targets that both accept "A": the hit order picks the winner.
fn overlapping(order: HitOrder) -> (MatchResolver<u32, Zone>, TargetBoard<Zone>) {
    let mut resolver = MatchResolver::new();
    resolver.insert_target(Zone::Left, MatchTarget::new(MatchRule::expecting("A")));
    resolver.insert_target(Zone::Right, MatchTarget::new(MatchRule::expecting("A")));
    let mut board = TargetBoard::with_order(order);
    board.insert(Zone::Left, Rect::new(0.0, 0.0, 100.0, 100.0), 0);
    board.insert(Zone::Right, Rect::new(50.0, 0.0, 150.0, 100.0), 1);
    (resolver, board)
}

#[test]
fn front_to_back_order_lets_topmost_target_win() {
    let (mut resolver, board) = overlapping(HitOrder::FrontToBack);
    let events = drop_at(&mut resolver, &board, 1, "A", Point::new(75.0, 50.0));
    assert_eq!(
        events,
        [
            MatchEvent::Added {
                item: 1,
                target: Zone::Right
            },
            MatchEvent::Success {
                item: 1,
                target: Zone::Right
            },
        ]
    );
    assert!(!resolver.target(&Zone::Left).unwrap().is_here(&1));
}

#[test]
fn back_to_front_order_lets_bottom_target_win() {
    let (mut resolver, board) = overlapping(HitOrder::BackToFront);
    let events = drop_at(&mut resolver, &board, 1, "A", Point::new(75.0, 50.0));
    assert_eq!(
        events.last(),
        Some(&MatchEvent::Success {
            item: 1,
            target: Zone::Left
        })
    );
}

#[test]
fn occupied_front_target_falls_through_to_the_one_below() {
    let (mut resolver, board) = overlapping(HitOrder::FrontToBack);
    drop_at(&mut resolver, &board, 1, "A", Point::new(120.0, 50.0));
    assert_eq!(resolver.matched_target(&1), Some(Zone::Right));

    let events = drop_at(&mut resolver, &board, 2, "A", Point::new(75.0, 50.0));
    assert_eq!(
        events,
        [
            MatchEvent::Added {
                item: 2,
                target: Zone::Right
            },
            MatchEvent::Added {
                item: 2,
                target: Zone::Left
            },
            MatchEvent::Success {
                item: 2,
                target: Zone::Left
            },
        ]
    );
    // Item 2 is recorded on both targets but matched only to one.
    assert!(resolver.target(&Zone::Right).unwrap().is_here(&2));
    assert_eq!(resolver.matched_target(&2), Some(Zone::Left));

    // Picking it up clears it from both.
    resolver.handle_pick_up(2);
    assert!(!resolver.target(&Zone::Right).unwrap().is_here(&2));
    assert!(!resolver.target(&Zone::Left).unwrap().is_here(&2));
}
