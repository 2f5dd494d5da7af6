// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for driving `TimerQueue` the way a frame loop does: schedule a
//! staggered sequence, then advance once per frame.

use understory_timing::TimerQueue;

#[test]
fn staggered_sequence_fires_across_frames() {
    let mut timers = TimerQueue::new();
    let start = 5_000;
    let mut delay = 100;
    for (item, duration) in [("a", 300), ("b", 0), ("c", 0)] {
        timers.schedule_after(start, delay, item);
        delay += duration;
    }

    let mut fired = Vec::new();
    // 60 Hz-ish frames for one second.
    let mut now = start;
    while now < start + 1_000 {
        now += 16;
        for (_, item) in timers.advance(now) {
            fired.push((item, now));
        }
    }

    let order: Vec<_> = fired.iter().map(|(item, _)| *item).collect();
    assert_eq!(order, ["a", "b", "c"]);
    // Each entry fires on the first frame at or after its deadline.
    assert!(fired[0].1 >= start + 100 && fired[0].1 < start + 116);
    assert!(fired[1].1 >= start + 400 && fired[1].1 < start + 416);
    assert_eq!(fired[1].1, fired[2].1);
    assert!(timers.is_empty());
}
