// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless vowel/consonant sorting board.
//!
//! Scripts a few pointer gestures against a `DragDrop` root: letters are
//! dragged into a vowel bin, a consonant bin, and a single-slot "red" bin.
//! Drag visuals are kept in sync through a subscription, and a `MatchBank`
//! keeps score and schedules feedback replays.
//!
//! Run:
//! - `RUST_LOG=debug cargo run -p overstory_demos --example color_vowel`

use std::cell::RefCell;
use std::rc::Rc;

use kurbo::{Point, Rect, Size};
use overstory_drag_drop::{DragDrop, MatchBank, Published};
use understory_drag::{BoundsMode, DragConfig, DraggableItem, Surface};
use understory_drag_visuals::{VisualStateHandler, VisualStyle};
use understory_match::{HitOrder, MatchRule, MatchTarget, TargetBoard};

#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
enum Bin {
    Vowels,
    Consonants,
    Red,
}

type Board = DragDrop<char, Bin, Surface, TargetBoard<Bin>>;

/// One scripted input at a time in milliseconds.
enum Step {
    Press(u64, char, Point),
    Move(u64, Point),
    Release(u64, char),
}

fn build() -> Board {
    let surface = Surface::new(Rect::new(0.0, 0.0, 800.0, 600.0), Size::new(800.0, 600.0));
    let mut bins = TargetBoard::with_order(HitOrder::FrontToBack);
    bins.insert(Bin::Vowels, Rect::new(500.0, 0.0, 800.0, 300.0), 0);
    bins.insert(Bin::Consonants, Rect::new(500.0, 300.0, 800.0, 600.0), 0);
    // Sits on top of the vowel bin.
    bins.insert(Bin::Red, Rect::new(700.0, 0.0, 800.0, 100.0), 1);

    let config = DragConfig {
        sweep_bounds: true,
        ..DragConfig::with_bounds(BoundsMode::Surface)
    };
    let mut board = DragDrop::new(Some(surface), bins, config);
    board.insert_target(
        Bin::Vowels,
        MatchTarget::new(MatchRule::accepting_any(["A", "E", "I", "O", "U"]))
            .with_match_origin(Point::new(20.0, 20.0)),
    );
    board.insert_target(
        Bin::Consonants,
        MatchTarget::new(MatchRule::accepting_any(["B", "C", "D"]))
            .with_match_origin(Point::new(20.0, 20.0)),
    );
    board.insert_target(Bin::Red, MatchTarget::new(MatchRule::expecting("red")));

    for (i, (key, tag)) in [('a', "A"), ('b', "B"), ('e', "E"), ('r', "red")].into_iter().enumerate() {
        let y = 40.0 + 80.0 * i as f64;
        board.insert_item(
            key,
            DraggableItem::new(tag, Point::new(40.0, y), Size::new(48.0, 48.0)).with_replay_duration(300),
        );
    }
    board
}

fn main() {
    env_logger::Builder::from_default_env()
        .filter_level(log::LevelFilter::Info)
        .format_timestamp_millis()
        .init();

    let mut board = build();

    let visuals = Rc::new(RefCell::new(VisualStateHandler::new()));
    for key in ['a', 'b', 'e', 'r'] {
        visuals.borrow_mut().register(key, VisualStyle::default());
    }
    let handler = Rc::clone(&visuals);
    board.drag_events_mut().listen(move |event| {
        handler.borrow_mut().apply(event);
    });
    board
        .match_events_mut()
        .listen(|event| log::info!("match: {event:?}"));

    let script = [
        Step::Press(0, 'a', Point::new(50.0, 50.0)),
        Step::Move(16, Point::new(300.0, 120.0)),
        Step::Move(33, Point::new(600.0, 150.0)),
        Step::Release(50, 'a'),
        Step::Press(100, 'b', Point::new(50.0, 130.0)),
        Step::Move(116, Point::new(620.0, 200.0)),
        Step::Release(133, 'b'),
        Step::Press(200, 'r', Point::new(50.0, 290.0)),
        Step::Move(216, Point::new(750.0, 50.0)),
        Step::Release(233, 'r'),
        Step::Press(300, 'b', Point::new(620.0, 200.0)),
        Step::Move(316, Point::new(640.0, 420.0)),
        Step::Release(333, 'b'),
        Step::Press(400, 'e', Point::new(50.0, 210.0)),
        Step::Move(416, Point::new(900.0, 210.0)),
        Step::Release(433, 'e'),
    ];

    let mut bank = MatchBank::default();
    for step in script {
        let (now, published): (u64, Published<char, Bin>) = match step {
            Step::Press(t, item, at) => (t, board.pointer_down(item, at)),
            Step::Move(t, at) => {
                let mut published = board.tick(at);
                if let Some(item) = board.coordinator().active_item() {
                    println!(
                        "  t={t:>4}ms  {item} color {:?}",
                        visuals.borrow().color(&item).map(|c| c.to_rgba8())
                    );
                }
                published.extend(board.late_tick());
                (t, published)
            }
            Step::Release(t, item) => (t, board.pointer_up(item)),
        };
        bank.observe(&published, &mut board, now);
        for replay in bank.poll(now) {
            println!("  t={now:>4}ms  replay {} on {:?}", replay.item, replay.target);
        }
    }

    // Let the remaining feedback play out.
    while let Some(at) = bank.next_replay_at() {
        for replay in bank.poll(at) {
            println!("  t={at:>4}ms  replay {} on {:?}", replay.item, replay.target);
        }
    }

    println!("== Final board ==");
    for key in ['a', 'b', 'e', 'r'] {
        let item = board.items().get(&key).map(|i| i.origin);
        println!("  {key}: {:?} at {item:?}", board.item_state(&key));
    }
    println!("score {} failures {}", bank.score(), bank.failures());
}
