// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use understory_drag::DragEvent;

/// Visual reactions to the drag lifecycle of one item.
pub trait PresentationSurface {
    /// The item was picked up.
    fn on_drag_started(&mut self);

    /// The item moved.
    fn on_dragging(&mut self) {}

    /// The item was released.
    fn on_drag_ended(&mut self);

    /// The pointer entered the item.
    fn on_hover_enter(&mut self);

    /// The pointer left the item.
    fn on_hover_exit(&mut self);
}

/// Forwards `event` to `surface` if it concerns `own_item`.
///
/// Returns `true` when the event was forwarded.
pub fn route<K, P>(surface: &mut P, own_item: &K, event: &DragEvent<K>) -> bool
where
    K: Copy + PartialEq,
    P: PresentationSurface + ?Sized,
{
    if event.item() != *own_item {
        return false;
    }
    match event {
        DragEvent::PickedUp(_) => surface.on_drag_started(),
        DragEvent::Dragging { .. } => surface.on_dragging(),
        DragEvent::Released(_) => surface.on_drag_ended(),
        DragEvent::HoverEnter(_) => surface.on_hover_enter(),
        DragEvent::HoverExit(_) => surface.on_hover_exit(),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;
    use kurbo::Vec2;

    #[derive(Default)]
    struct Recorder(Vec<&'static str>);

    impl PresentationSurface for Recorder {
        fn on_drag_started(&mut self) {
            self.0.push("started");
        }
        fn on_dragging(&mut self) {
            self.0.push("dragging");
        }
        fn on_drag_ended(&mut self) {
            self.0.push("ended");
        }
        fn on_hover_enter(&mut self) {
            self.0.push("enter");
        }
        fn on_hover_exit(&mut self) {
            self.0.push("exit");
        }
    }

    #[test]
    fn only_own_item_events_are_forwarded() {
        let mut rec = Recorder::default();
        let events = [
            DragEvent::HoverEnter(1_u8),
            DragEvent::PickedUp(2),
            DragEvent::PickedUp(1),
            DragEvent::Dragging {
                item: 1,
                delta: Vec2::ZERO,
            },
            DragEvent::Released(1),
            DragEvent::HoverExit(1),
        ];
        let forwarded = events.iter().filter(|e| route(&mut rec, &1, e)).count();
        assert_eq!(forwarded, 5);
        assert_eq!(rec.0, ["enter", "started", "dragging", "ended", "exit"]);
    }
}
