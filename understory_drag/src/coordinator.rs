// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drag coordinator: sole owner of the active drag session.

use core::fmt::Debug;

use kurbo::{Point, Vec2};

use crate::{
    BoundsMode, DragConfig, DragEvent, DragEvents, DragSession, DragSurface, DraggableRegistry,
    ItemLayout, bounds_region, correct_into_region,
};

/// Owns the single active [`DragSession`] and produces drag lifecycle events.
///
/// See the crate docs for the lifecycle. Nothing here fails: calling an
/// operation that needs a session while none is active does nothing.
#[derive(Clone, Debug)]
pub struct DragCoordinator<K> {
    session: Option<DragSession<K>>,
    registry: DraggableRegistry<K>,
    cursor: Option<Point>,
}

impl<K: Copy + PartialEq + Debug> Default for DragCoordinator<K> {
    fn default() -> Self {
        Self::with_config(DragConfig::default())
    }
}

impl<K: Copy + PartialEq + Debug> DragCoordinator<K> {
    /// Creates a coordinator without bounds enforcement.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a coordinator with `config`.
    #[must_use]
    pub fn with_config(config: DragConfig) -> Self {
        Self {
            session: None,
            registry: DraggableRegistry::new(config),
            cursor: None,
        }
    }

    /// Current configuration.
    #[must_use]
    pub fn config(&self) -> &DragConfig {
        self.registry.config()
    }

    /// Mutable configuration; changes apply from the next tick.
    pub fn config_mut(&mut self) -> &mut DragConfig {
        self.registry.config_mut()
    }

    /// The active session, if any.
    #[must_use]
    pub fn session(&self) -> Option<&DragSession<K>> {
        self.session.as_ref()
    }

    /// The item being dragged, if any.
    #[must_use]
    pub fn active_item(&self) -> Option<K> {
        self.session.map(|s| s.item)
    }

    /// Returns `true` while a session is active.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.session.is_some()
    }

    /// Registry of items dragged so far.
    #[must_use]
    pub fn registry(&self) -> &DraggableRegistry<K> {
        &self.registry
    }

    /// Last pointer position seen, in screen space.
    #[must_use]
    pub fn cursor_position(&self) -> Option<Point> {
        self.cursor
    }

    /// Records a pointer position without moving anything.
    pub fn record_cursor(&mut self, screen: Point) {
        self.cursor = Some(screen);
    }

    /// Starts dragging `item`, replacing any active session.
    ///
    /// The replaced item gets no `Released`; whoever flagged it as dragged is
    /// responsible for clearing that flag. The recorded cursor is cleared, so
    /// a session never sees the previous session's pointer.
    pub fn begin_drag(&mut self, item: K, pointer_offset: Vec2, bounds_radius: f64) -> DragEvents<K> {
        if let Some(previous) = self.session
            && previous.item != item
        {
            log::debug!("drag of {:?} superseded by {:?}", previous.item, item);
        }
        self.session = Some(DragSession::new(item, pointer_offset, bounds_radius));
        self.cursor = None;
        self.registry.register(item, bounds_radius);
        log::debug!("picked up {item:?}");
        let mut events = DragEvents::new();
        events.push(DragEvent::PickedUp(item));
        events
    }

    /// Moves the active item under `pointer` (screen space).
    pub fn tick(
        &mut self,
        pointer: Point,
        surface: &impl DragSurface,
        layout: &mut impl ItemLayout<K>,
    ) -> DragEvents<K> {
        let mut events = DragEvents::new();
        let Some(session) = self.session.as_mut() else {
            return events;
        };
        self.cursor = Some(pointer);
        let Some(local) = surface.screen_to_local(pointer) else {
            return events;
        };

        let item = session.item;
        let target = local - session.pointer_offset;
        let delta = layout
            .origin(&item)
            .map_or(Vec2::ZERO, |previous| target - previous);
        layout.set_origin(&item, target);
        session.moves += 1;
        events.push(DragEvent::Dragging { item, delta });

        if self.config().bounds.is_enforced() {
            events.extend(self.bounds_check(&item, surface, layout));
        }
        events
    }

    /// Pulls `item` back inside the configured region if it left it.
    ///
    /// A correction ends the active drag (emitting `Released` if there is one).
    /// It fires once per violation; the corrected origin is inside the region,
    /// so checking again changes nothing.
    pub fn bounds_check(
        &mut self,
        item: &K,
        surface: &impl DragSurface,
        layout: &mut impl ItemLayout<K>,
    ) -> DragEvents<K> {
        let Some(region) = bounds_region(self.config().bounds, surface) else {
            return DragEvents::new();
        };
        let Some(origin) = layout.origin(item) else {
            return DragEvents::new();
        };
        let radius = self.radius_for(item);
        let Some(corrected) = correct_into_region(origin, region, radius) else {
            return DragEvents::new();
        };
        log::debug!("{item:?} out of bounds at {origin:?}, moved to {corrected:?}");
        layout.set_origin(item, corrected);
        self.end_drag()
    }

    /// Ends the active session. Without one this is a no-op.
    pub fn end_drag(&mut self) -> DragEvents<K> {
        let mut events = DragEvents::new();
        if let Some(session) = self.session.take() {
            log::debug!("released {:?} after {} moves", session.item, session.moves);
            events.push(DragEvent::Released(session.item));
        }
        events
    }

    /// Late-tick bounds sweep over every item dragged so far.
    ///
    /// Counts one late tick; every `sweep_interval` ticks (when enforcement and
    /// sweeping are enabled) each registered item is bounds-checked, then the
    /// registry is trimmed to the most recent entry.
    pub fn sweep(
        &mut self,
        surface: &impl DragSurface,
        layout: &mut impl ItemLayout<K>,
    ) -> DragEvents<K> {
        let mut events = DragEvents::new();
        if !self.registry.sweep_due() {
            return events;
        }
        let items: alloc::vec::Vec<K> = self.registry.dragged().iter().map(|(k, _)| *k).collect();
        for item in &items {
            events.extend(self.bounds_check(item, surface, layout));
        }
        self.registry.trim_to_latest();
        events
    }

    /// Emits `HoverEnter` for `item` when hover is enabled for it.
    pub fn hover_enter(&mut self, item: K, enabled: bool) -> DragEvents<K> {
        let mut events = DragEvents::new();
        if enabled {
            events.push(DragEvent::HoverEnter(item));
        }
        events
    }

    /// Emits `HoverExit` for `item` when hover is enabled for it.
    pub fn hover_exit(&mut self, item: K, enabled: bool) -> DragEvents<K> {
        let mut events = DragEvents::new();
        if enabled {
            events.push(DragEvent::HoverExit(item));
        }
        events
    }

    fn radius_for(&self, item: &K) -> f64 {
        match self.session {
            Some(s) if s.item == *item => s.bounds_radius,
            _ => self
                .registry
                .dragged()
                .iter()
                .find(|(k, _)| k == item)
                .map_or(Self::FALLBACK_RADIUS, |(_, r)| *r),
        }
    }

    /// Push-back distance for items that were never dragged through this coordinator.
    pub const FALLBACK_RADIUS: f64 = 10.0;
}

impl<K> DragCoordinator<K> {
    /// Convenience for switching bounds enforcement.
    pub fn set_bounds_mode(&mut self, mode: BoundsMode) {
        self.registry.config_mut().bounds = mode;
    }
}
