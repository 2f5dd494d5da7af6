// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Tests for `understory_signal` as used by event producers: several channels,
//! subscribers that come and go, and events emitted back to back.

use std::cell::RefCell;
use std::rc::Rc;

use understory_signal::{Signal, SubscriberError};

#[derive(Clone, Debug, PartialEq)]
enum Lifecycle {
    PickedUp(u32),
    Released(u32),
}

#[test]
fn back_to_back_events_are_seen_in_emission_order() {
    let log = Rc::new(RefCell::new(Vec::new()));
    let mut signal = Signal::new("lifecycle");
    let a = log.clone();
    signal.listen(move |e: &Lifecycle| a.borrow_mut().push(("a", e.clone())));
    let b = log.clone();
    signal.listen(move |e: &Lifecycle| b.borrow_mut().push(("b", e.clone())));

    signal.emit(&Lifecycle::PickedUp(1));
    signal.emit(&Lifecycle::Released(1));

    assert_eq!(
        *log.borrow(),
        vec![
            ("a", Lifecycle::PickedUp(1)),
            ("b", Lifecycle::PickedUp(1)),
            ("a", Lifecycle::Released(1)),
            ("b", Lifecycle::Released(1)),
        ]
    );
}

#[test]
fn removed_subscriber_stops_receiving() {
    let count = Rc::new(RefCell::new(0));
    let mut signal = Signal::new("lifecycle");
    let c = count.clone();
    let id = signal.listen(move |_: &Lifecycle| *c.borrow_mut() += 1);

    signal.emit(&Lifecycle::PickedUp(3));
    signal.unsubscribe(id);
    let report = signal.emit(&Lifecycle::Released(3));

    assert_eq!(*count.borrow(), 1);
    assert_eq!(report.delivered, 0);
}

#[test]
fn faults_are_reported_per_emission() {
    let mut signal = Signal::new("lifecycle");
    let picky = signal.subscribe(|e: &Lifecycle| match e {
        Lifecycle::Released(_) => Err(SubscriberError::new("release unsupported")),
        Lifecycle::PickedUp(_) => Ok(()),
    });

    assert!(signal.emit(&Lifecycle::PickedUp(9)).is_clean());
    let report = signal.emit(&Lifecycle::Released(9));
    assert_eq!(report.faulted, vec![picky]);
    assert_eq!(report.delivered, 0);
}
