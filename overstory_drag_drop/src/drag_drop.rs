// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The application root that ties drag coordination to match resolution.

use core::fmt;
use core::fmt::Debug;
use core::hash::Hash;

use kurbo::{Point, Vec2};
use understory_drag::{
    ConfigError, DragConfig, DragCoordinator, DragEvent, DragEvents, DragSurface, DraggableItem,
    ItemStore, PointerSource, bounds_region,
};
use understory_match::{
    ItemMatchState, MatchEvent, MatchEvents, MatchResolver, MatchTarget, SpatialQuery,
};
use understory_signal::Signal;

use crate::DragDropEvent;

/// Notifications published by one [`DragDrop`] call, in publication order.
pub type Published<K, T> = Vec<DragDropEvent<K, T>>;

/// Which point of a released item is used to look up drop targets.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum DropPoint {
    /// The last pointer position seen by the coordinator, in surface space.
    ///
    /// Falls back to the item center when no pointer position was recorded.
    #[default]
    Cursor,
    /// The item origin.
    ItemOrigin,
    /// The center of the item rectangle.
    ItemCenter,
}

/// Owns every piece of drag-and-drop state and routes events between them.
///
/// Each operation forwards to the [`DragCoordinator`], then walks the drag
/// events it produced in order. Every drag event is broadcast on the drag
/// signal; a pickup undoes the item's placement in the [`MatchResolver`] and a
/// release resolves the drop. Match events are broadcast on the match signal
/// right after the drag event that caused them.
///
/// Without a surface the root logs a configuration error once and ignores
/// pointer input until [`DragDrop::set_surface`] supplies one.
pub struct DragDrop<K, T, S, Q> {
    items: ItemStore<K>,
    drag: DragCoordinator<K>,
    resolver: MatchResolver<K, T>,
    surface: Option<S>,
    spatial: Q,
    drop_point: DropPoint,
    drag_events: Signal<DragEvent<K>>,
    match_events: Signal<MatchEvent<K, T>>,
    hits: Vec<T>,
}

impl<K: Debug, T, S, Q> Debug for DragDrop<K, T, S, Q> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DragDrop")
            .field("items", &self.items)
            .field("drag", &self.drag)
            .field("has_surface", &self.surface.is_some())
            .field("drop_point", &self.drop_point)
            .field("drag_events", &self.drag_events)
            .field("match_events", &self.match_events)
            .finish_non_exhaustive()
    }
}

impl<K, T, S, Q> DragDrop<K, T, S, Q>
where
    K: Copy + Eq + Hash + Debug,
    T: Copy + PartialEq + Debug,
    S: DragSurface,
    Q: SpatialQuery<T>,
{
    /// Creates a root with no items and no targets.
    ///
    /// Setup problems found by [`DragDrop::check_setup`] are logged here.
    pub fn new(surface: Option<S>, spatial: Q, config: DragConfig) -> Self {
        let root = Self {
            items: ItemStore::new(),
            drag: DragCoordinator::with_config(config),
            resolver: MatchResolver::new(),
            surface,
            spatial,
            drop_point: DropPoint::default(),
            drag_events: Signal::new("drag"),
            match_events: Signal::new("match"),
            hits: Vec::new(),
        };
        root.report_setup();
        root
    }

    /// Validates the wiring: a surface must be present, and an enforced
    /// bounds region must have a non-zero area.
    pub fn check_setup(&self) -> Result<(), ConfigError> {
        let Some(surface) = self.surface.as_ref() else {
            return Err(ConfigError::MissingSurface);
        };
        if let Some(region) = bounds_region(self.drag.config().bounds, surface)
            && region.area() <= 0.0
        {
            return Err(ConfigError::DegenerateRegion { region });
        }
        Ok(())
    }

    fn report_setup(&self) {
        if let Err(err) = self.check_setup() {
            log::error!("drag-drop setup: {err}");
        }
    }

    /// Installs or replaces the drag surface, for example after the canvas was rebuilt.
    pub fn set_surface(&mut self, surface: S) {
        self.surface = Some(surface);
        self.report_setup();
    }

    /// The drag surface, if one is installed.
    pub fn surface(&self) -> Option<&S> {
        self.surface.as_ref()
    }

    /// Mutable access to the drag surface, for resizes and transform changes.
    pub fn surface_mut(&mut self) -> Option<&mut S> {
        self.surface.as_mut()
    }

    /// The spatial query used to find drop targets.
    pub fn spatial(&self) -> &Q {
        &self.spatial
    }

    /// Mutable access to the spatial query.
    pub fn spatial_mut(&mut self) -> &mut Q {
        &mut self.spatial
    }

    /// The drag coordinator.
    pub fn coordinator(&self) -> &DragCoordinator<K> {
        &self.drag
    }

    /// Mutable drag configuration; changes apply from the next tick.
    pub fn config_mut(&mut self) -> &mut DragConfig {
        self.drag.config_mut()
    }

    /// Current drop point mode.
    pub fn drop_point(&self) -> DropPoint {
        self.drop_point
    }

    /// Chooses which point of a released item is used for hit testing.
    pub fn set_drop_point(&mut self, drop_point: DropPoint) {
        self.drop_point = drop_point;
    }

    /// The draggable items.
    pub fn items(&self) -> &ItemStore<K> {
        &self.items
    }

    /// Mutable access to the draggable items.
    pub fn items_mut(&mut self) -> &mut ItemStore<K> {
        &mut self.items
    }

    /// Adds a draggable item, replacing (and returning) any item with the same key.
    pub fn insert_item(&mut self, key: K, item: DraggableItem) -> Option<DraggableItem> {
        self.items.insert(key, item)
    }

    /// The match resolver and its targets.
    pub fn resolver(&self) -> &MatchResolver<K, T> {
        &self.resolver
    }

    /// Adds a match target, replacing (and returning) any target with the same key.
    ///
    /// The target still needs an entry in the spatial query to receive drops.
    pub fn insert_target(&mut self, key: T, target: MatchTarget<K>) -> Option<MatchTarget<K>> {
        self.resolver.insert_target(key, target)
    }

    /// Where `item` currently sits with respect to the targets.
    pub fn item_state(&self, item: &K) -> ItemMatchState<T> {
        self.resolver.item_state(item)
    }

    /// Subscribers to drag lifecycle events.
    pub fn drag_events_mut(&mut self) -> &mut Signal<DragEvent<K>> {
        &mut self.drag_events
    }

    /// Subscribers to match events.
    pub fn match_events_mut(&mut self) -> &mut Signal<MatchEvent<K, T>> {
        &mut self.match_events
    }

    /// A press on `item` at `screen`.
    ///
    /// Starts a drag that keeps the grabbed point under the pointer, using the
    /// item width as bounds radius. Unknown, drag-disabled, and already
    /// dragged items ignore the press.
    pub fn pointer_down(&mut self, item: K, screen: Point) -> Published<K, T> {
        let Some(surface) = self.surface.as_ref() else {
            return Published::new();
        };
        let Some(state) = self.items.get(&item) else {
            log::debug!("press on unknown item {item:?}");
            return Published::new();
        };
        if !state.can_pick_up() {
            return Published::new();
        }
        let Some(local) = surface.screen_to_local(screen) else {
            return Published::new();
        };
        let offset = local - state.origin;
        let radius = state.size.width;
        let published = self.begin_drag(item, offset, radius);
        self.drag.record_cursor(screen);
        published
    }

    /// A release over `item`. Ends the drag if `item` is the one being dragged.
    pub fn pointer_up(&mut self, item: K) -> Published<K, T> {
        if self.drag.active_item() != Some(item) {
            return Published::new();
        }
        self.end_drag()
    }

    /// Starts dragging `item` with an explicit grab offset and bounds radius.
    ///
    /// Replaces any active drag; the replaced item is no longer flagged as
    /// dragged and receives no release.
    pub fn begin_drag(&mut self, item: K, pointer_offset: Vec2, bounds_radius: f64) -> Published<K, T> {
        if self.surface.is_none() {
            return Published::new();
        }
        if let Some(previous) = self.drag.active_item()
            && previous != item
        {
            self.set_being_dragged(previous, false);
        }
        let events = self.drag.begin_drag(item, pointer_offset, bounds_radius);
        self.dispatch(events)
    }

    /// Ends the active drag and resolves the drop. A no-op without one.
    pub fn end_drag(&mut self) -> Published<K, T> {
        let events = self.drag.end_drag();
        self.dispatch(events)
    }

    /// Per-tick update with the raw pointer position.
    pub fn tick(&mut self, pointer: Point) -> Published<K, T> {
        let Some(surface) = self.surface.as_ref() else {
            return Published::new();
        };
        let events = self.drag.tick(pointer, surface, &mut self.items);
        self.dispatch(events)
    }

    /// Per-tick update reading the pointer from `source`.
    ///
    /// A source without a position skips the tick.
    pub fn tick_from(&mut self, source: &impl PointerSource) -> Published<K, T> {
        match source.current_position() {
            Some(pointer) => self.tick(pointer),
            None => Published::new(),
        }
    }

    /// Late-tick update: periodic bounds sweep over previously dragged items.
    pub fn late_tick(&mut self) -> Published<K, T> {
        let Some(surface) = self.surface.as_ref() else {
            return Published::new();
        };
        let events = self.drag.sweep(surface, &mut self.items);
        self.dispatch(events)
    }

    /// The pointer entered `item`.
    pub fn hover_enter(&mut self, item: K) -> Published<K, T> {
        let enabled = self.items.get(&item).is_some_and(|i| i.hover_enabled);
        let events = self.drag.hover_enter(item, enabled);
        self.dispatch(events)
    }

    /// The pointer left `item`.
    pub fn hover_exit(&mut self, item: K) -> Published<K, T> {
        let enabled = self.items.get(&item).is_some_and(|i| i.hover_enabled);
        let events = self.drag.hover_exit(item, enabled);
        self.dispatch(events)
    }

    fn dispatch(&mut self, events: DragEvents<K>) -> Published<K, T> {
        let mut published = Published::new();
        for event in events {
            match event {
                DragEvent::PickedUp(item) => self.set_being_dragged(item, true),
                DragEvent::Released(item) => self.set_being_dragged(item, false),
                _ => {}
            }
            self.drag_events.emit(&event);
            published.push(DragDropEvent::Drag(event));

            let follow_up = match event {
                DragEvent::PickedUp(item) if self.items.contains(&item) => {
                    self.resolver.handle_pick_up(item)
                }
                DragEvent::Released(item) => self.resolve_drop(item),
                _ => MatchEvents::new(),
            };
            for event in follow_up {
                self.match_events.emit(&event);
                published.push(DragDropEvent::Match(event));
            }
        }
        published
    }

    fn resolve_drop(&mut self, item: K) -> MatchEvents<K, T> {
        let Some(state) = self.items.get(&item) else {
            log::debug!("release of unknown item {item:?} ignored");
            return MatchEvents::new();
        };
        let match_id = state.match_id.clone();
        let point = self.drop_point_for(state);

        self.hits.clear();
        if let Some(point) = point {
            self.spatial.query(point, &mut self.hits);
        }
        self.resolver.handle_drop(item, &match_id, self.hits.drain(..))
    }

    fn drop_point_for(&self, item: &DraggableItem) -> Option<Point> {
        match self.drop_point {
            DropPoint::ItemOrigin => Some(item.origin),
            DropPoint::ItemCenter => Some(item.center()),
            DropPoint::Cursor => match self.drag.cursor_position() {
                Some(screen) => self.surface.as_ref()?.screen_to_local(screen),
                None => Some(item.center()),
            },
        }
    }

    fn set_being_dragged(&mut self, item: K, dragged: bool) {
        if let Some(state) = self.items.get_mut(&item) {
            state.being_dragged = dragged;
        }
    }
}
