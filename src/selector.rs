//! Swipeable vertical selector widget.
//!
//! `Selector<T>` binds the pieces together: anchor table, drag engine,
//! selection state, visibility window, slot-stack layout, and the painted
//! guides. The host routes pointer events through `handle_mouse`, applies
//! the produced `SelectorAction`s in its update phase, lays the widget out
//! with `view`, and drives settle animation frames with `tick`.
//!
//! All mutation happens synchronously on the event-handling thread;
//! `handle_mouse` takes `&self` and emits actions, `apply` takes `&mut
//! self` and performs them.

use std::cell::Cell;
use std::time::Instant;

use thiserror::Error;
use tracing::debug;

use crate::anchors::AnchorTable;
use crate::drag::{DragEngine, ReleaseOutcome};
use crate::event::{CaptureState, MouseButton, MouseEvent, MouseResponse};
use crate::layout::{LayoutConstraints, LayoutContext, Length, SlotStack};
use crate::primitives::{Color, Point, Rect, Size};
use crate::render::{paint_guides, ItemVisual};
use crate::saved_state::SavedStateRegistry;
use crate::snapshot::{HitResult, LayoutSnapshot};
use crate::source_id::SourceId;
use crate::state::{SelectionEntry, SelectorState};
use crate::window::VisibilityWindow;

/// Invalid selector configuration.
#[derive(Debug, Error)]
pub enum SelectorError {
    /// The backing item list is empty.
    #[error("selector requires a non-empty item list")]
    EmptyItems,

    /// The per-item height is zero or negative.
    #[error("item height must be positive, got {0}")]
    NonPositiveItemHeight(f32),
}

/// An action on a selector, produced by event handling.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SelectorAction {
    /// Start dragging at this pointer Y.
    DragStart(f32),
    /// Continue the drag to this pointer Y.
    DragMove(f32),
    /// End the drag and evaluate the settle threshold.
    DragEnd,
    /// Step the selection by a signed number of items (wheel).
    Step(i32),
}

/// A swipeable vertical selector over an ordered item list.
///
/// # Example
/// ```ignore
/// let picker = Selector::new(units, 30.0, |unit, centered| {
///     ItemVisual::new(unit.label()).color(if centered { Color::WHITE } else { DIM })
/// })?
/// .with_id(SourceId::named("unit-picker"))
/// .on_commit(|index| info!(index, "unit selected"));
/// ```
pub struct Selector<T: 'static> {
    /// Widget ID for hit-testing, capture routing, and saved-state keys.
    id: SourceId,
    items: Vec<T>,
    item_height: f32,
    state: SelectorState,
    engine: DragEngine,
    window: VisibilityWindow,
    /// Rendering callback: `(item, is_centered) -> visual`.
    render_item: Box<dyn Fn(&T, bool) -> ItemVisual>,
    /// Commit callback, invoked exactly once per committed index change.
    on_commit: Option<Box<dyn FnMut(usize)>>,
    guide_color: Color,
    /// Widget bounds (set during `view` each frame, read by wheel routing).
    bounds: Cell<Rect>,
}

impl<T: 'static> Selector<T> {
    /// Create a selector over `items` with a uniform per-item height and a
    /// rendering callback.
    ///
    /// Rejects degenerate configuration: an empty list or a non-positive
    /// item height.
    pub fn new(
        items: Vec<T>,
        item_height: f32,
        render_item: impl Fn(&T, bool) -> ItemVisual + 'static,
    ) -> Result<Self, SelectorError> {
        if items.is_empty() {
            return Err(SelectorError::EmptyItems);
        }
        if item_height <= 0.0 {
            return Err(SelectorError::NonPositiveItemHeight(item_height));
        }

        let anchors = AnchorTable::build(items.len(), item_height);
        let state = SelectorState::default();
        let engine = DragEngine::new(anchors, state.selected_index);

        Ok(Self {
            id: SourceId::new(),
            items,
            item_height,
            state,
            engine,
            window: VisibilityWindow::default(),
            render_item: Box::new(render_item),
            on_commit: None,
            guide_color: Color::GUIDE,
            bounds: Cell::new(Rect::ZERO),
        })
    }

    /// Use an explicit widget ID.
    ///
    /// Required for selection survival across reconstruction: a stable
    /// `SourceId::named` key lets `restore_from` find the saved index.
    pub fn with_id(mut self, id: SourceId) -> Self {
        self.id = id;
        self
    }

    /// Set the visible-items count (window radius, default 3, clamped ≥ 1).
    pub fn with_visible_items(mut self, count: usize) -> Self {
        self.window = VisibilityWindow::new(count);
        self
    }

    /// Set the initial committed index (default 0, clamped into range).
    pub fn with_initial_index(mut self, index: usize) -> Self {
        self.state = SelectorState::new(index.min(self.items.len() - 1));
        self.engine.cancel(self.state.selected_index);
        self
    }

    /// Set the selection-changed callback.
    pub fn on_commit(mut self, callback: impl FnMut(usize) + 'static) -> Self {
        self.on_commit = Some(Box::new(callback));
        self
    }

    /// Set the guide-line color.
    pub fn with_guide_color(mut self, color: Color) -> Self {
        self.guide_color = color;
        self
    }

    pub fn id(&self) -> SourceId {
        self.id
    }

    /// The committed selection index.
    pub fn selected_index(&self) -> usize {
        self.state.selected_index
    }

    /// The committed selection value.
    pub fn selected_item(&self) -> &T {
        &self.items[self.state.selected_index]
    }

    pub fn items(&self) -> &[T] {
        &self.items
    }

    pub fn is_dragging(&self) -> bool {
        self.engine.is_dragging()
    }

    /// The live strip offset (matches the committed anchor when settled).
    pub fn offset(&self) -> f32 {
        self.engine.offset()
    }

    /// Items tagged with their derived centered flags.
    pub fn entries(&self) -> impl Iterator<Item = SelectionEntry<'_, T>> {
        self.state.entries(&self.items)
    }

    /// Check if a point is within this selector's bounds.
    pub fn contains(&self, point: Point) -> bool {
        self.bounds.get().contains(point)
    }

    // =====================================================================
    // Event handling
    // =====================================================================

    /// Handle a mouse event for this selector.
    ///
    /// Returns `Some(MouseResponse<SelectorAction>)` if this selector
    /// consumed the event, `None` otherwise. Use with `MouseResponse::map()`
    /// to convert to your app's message type:
    ///
    /// ```ignore
    /// if let Some(r) = state.unit_picker.handle_mouse(&event, &hit, capture) {
    ///     return r.map(AppMessage::UnitPicker);
    /// }
    /// ```
    ///
    /// Handles: press/drag/release (with pointer capture, so the drag
    /// survives leaving the widget bounds) and wheel stepping.
    pub fn handle_mouse(
        &self,
        event: &MouseEvent,
        hit: &Option<HitResult>,
        capture: &CaptureState,
    ) -> Option<MouseResponse<SelectorAction>> {
        match event {
            MouseEvent::ButtonPressed {
                button: MouseButton::Left,
                position,
            } => {
                if let Some(HitResult::Widget(id)) = hit {
                    if *id == self.id {
                        return Some(MouseResponse::message_and_capture(
                            SelectorAction::DragStart(position.y),
                            self.id,
                        ));
                    }
                }
                None
            }
            MouseEvent::CursorMoved { position } => {
                if let CaptureState::Captured(id) = capture {
                    if *id == self.id {
                        return Some(MouseResponse::message(SelectorAction::DragMove(
                            position.y,
                        )));
                    }
                }
                None
            }
            MouseEvent::ButtonReleased {
                button: MouseButton::Left,
                ..
            } => {
                if let CaptureState::Captured(id) = capture {
                    if *id == self.id {
                        return Some(MouseResponse::message_and_release(SelectorAction::DragEnd));
                    }
                }
                None
            }
            MouseEvent::WheelScrolled { delta, position } => {
                if self.contains(*position) {
                    let dy = delta.vertical_px();
                    if dy == 0.0 {
                        return None;
                    }
                    // Wheel down moves to the next index, wheel up to the previous.
                    let step = if dy < 0.0 { 1 } else { -1 };
                    return Some(MouseResponse::message(SelectorAction::Step(step)));
                }
                None
            }
            _ => None,
        }
    }

    /// Apply a selector action (call from update()).
    pub fn apply(&mut self, action: SelectorAction, now: Instant) {
        match action {
            SelectorAction::DragStart(y) => self.engine.begin(y, now),
            SelectorAction::DragMove(y) => self.engine.drag_to(y),
            SelectorAction::DragEnd => {
                match self.engine.release(self.state.selected_index, now) {
                    ReleaseOutcome::Committed { index } => self.commit(index),
                    ReleaseOutcome::Reverted => {}
                }
            }
            SelectorAction::Step(delta) => self.step(delta, now),
        }
    }

    /// Step the selection by a signed number of items, clamped at the list
    /// ends. Ignored while a drag is active.
    pub fn step(&mut self, delta: i32, now: Instant) {
        if self.engine.is_dragging() {
            return;
        }
        let len = self.items.len() as i64;
        let target = (self.state.selected_index as i64 + delta as i64).clamp(0, len - 1) as usize;
        if target != self.state.selected_index {
            self.engine.settle_to(target, now);
            self.commit(target);
        }
    }

    /// Advance the settle animation. Returns true while another frame is
    /// needed.
    pub fn tick(&mut self, now: Instant) -> bool {
        self.engine.tick(now)
    }

    /// Commit a new selection index.
    ///
    /// A single atomic unit: the committed index changes (which flips the
    /// derived centered flags) and the callback fires exactly once. Never
    /// called on a reverted drag.
    fn commit(&mut self, index: usize) {
        self.state.selected_index = index;
        debug!(id = self.id.raw(), index, "selection committed");
        if let Some(callback) = &mut self.on_commit {
            callback(index);
        }
    }

    // =====================================================================
    // List replacement
    // =====================================================================

    /// Replace the backing item list (identity change).
    ///
    /// Any in-flight gesture or settle is aborted without a commit, the
    /// anchor table is rebuilt, and the committed index is clamped into the
    /// new range.
    pub fn replace_items(&mut self, items: Vec<T>) -> Result<(), SelectorError> {
        if items.is_empty() {
            return Err(SelectorError::EmptyItems);
        }
        self.items = items;
        self.state.clamp_to(self.items.len());
        self.engine.replace_anchors(
            AnchorTable::build(self.items.len(), self.item_height),
            self.state.selected_index,
        );
        Ok(())
    }

    // =====================================================================
    // Persistence
    // =====================================================================

    /// Persist the committed index under this selector's ID.
    pub fn save_into(&self, registry: &mut SavedStateRegistry) {
        registry.save(self.id, self.state.selected_index);
    }

    /// Adopt a previously saved index, if one exists for this selector's ID.
    ///
    /// Out-of-range saved indices are clamped into `[0, items.len())` —
    /// stale saved state never faults. Returns the adopted index.
    pub fn restore_from(&mut self, registry: &SavedStateRegistry) -> Option<usize> {
        let saved = registry.restore(self.id)?;
        let adopted = saved.min(self.items.len() - 1);
        self.state = SelectorState::new(adopted);
        self.engine.cancel(adopted);
        Some(adopted)
    }

    // =====================================================================
    // Layout + paint
    // =====================================================================

    /// Lay out and paint the selector into the snapshot.
    ///
    /// The widget spans `2 * visible_items - 1` slots vertically. The strip
    /// of item slots is positioned by the centering offset math: with live
    /// offset `o`, slot `i` sits at
    /// `center_y - item_height/2 + i*item_height + o`, so offset `-(k*H)`
    /// centers item `k` exactly between the guides. Windowed-out items keep
    /// their slot as an empty placeholder, so eligibility changes never
    /// move the survivors.
    pub fn view(
        &self,
        snapshot: &mut LayoutSnapshot,
        constraints: LayoutConstraints,
        origin: Point,
    ) -> Size {
        let mut ctx = LayoutContext::new(snapshot);
        ctx.enter("Selector");

        let span = (2 * self.window.radius() - 1) as f32 * self.item_height;
        let width = if constraints.has_bounded_width() {
            constraints.max_width
        } else {
            self.widest_label()
        };
        let size = constraints.constrain(Size::new(width, span));
        let bounds = Rect::from_origin_size(origin, size);

        ctx.log_layout(constraints, size);
        ctx.snapshot.register_widget(self.id, bounds);
        self.bounds.set(bounds);

        // The strip: every item occupies a slot; only windowed items render.
        let selected = self.state.selected_index;
        let mut stack = SlotStack::new().width(Length::Fill);
        for entry in self.state.entries(&self.items) {
            if self.window.is_renderable(selected, entry.index) {
                stack = stack.slot(
                    self.item_height,
                    (self.render_item)(entry.value, entry.is_centered),
                );
            } else {
                stack = stack.placeholder(self.item_height);
            }
        }

        let strip_height = self.items.len() as f32 * self.item_height;
        let strip_y = bounds.center().y - self.item_height / 2.0 + self.engine.offset();

        ctx.snapshot.primitives_mut().push_clip(bounds);
        stack.layout_with_constraints(
            &mut ctx,
            LayoutConstraints::tight(size.width, strip_height),
            Point::new(bounds.x, strip_y),
        );
        ctx.snapshot.primitives_mut().pop_clip();

        paint_guides(
            ctx.snapshot.primitives_mut(),
            bounds,
            self.item_height,
            self.guide_color,
        );

        ctx.exit();
        size
    }

    /// Widest rendered label across all items, for intrinsic sizing.
    fn widest_label(&self) -> f32 {
        let selected = self.state.selected_index;
        self.items
            .iter()
            .enumerate()
            .map(|(i, item)| {
                let visual = (self.render_item)(item, i == selected);
                crate::layout::estimate_label_width(&visual.label, visual.font_size)
            })
            .fold(0.0, f32::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::event::ScrollDelta;
    use std::cell::RefCell;
    use std::rc::Rc;
    use std::time::Duration;

    const H: f32 = 30.0;

    fn units() -> Vec<&'static str> {
        vec!["Gram", "Litres", "Millilitres"]
    }

    fn picker() -> (Selector<&'static str>, Rc<RefCell<Vec<usize>>>) {
        let commits = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&commits);
        let selector = Selector::new(units(), H, |unit, _| ItemVisual::new(*unit))
            .unwrap()
            .on_commit(move |index| sink.borrow_mut().push(index));
        (selector, commits)
    }

    /// Lay the picker out and run one full gesture through the event path.
    fn run_gesture(selector: &mut Selector<&'static str>, from_y: f32, to_y: f32, now: Instant) {
        let mut snapshot = LayoutSnapshot::new();
        selector.view(
            &mut snapshot,
            LayoutConstraints::loose(120.0, 600.0),
            Point::ORIGIN,
        );

        let press = MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: Point::new(10.0, from_y),
        };
        let hit = snapshot.hit_test(Point::new(10.0, from_y));
        let response = selector
            .handle_mouse(&press, &hit, &CaptureState::None)
            .expect("press on the widget starts a drag");
        selector.apply(response.message.unwrap(), now);

        let captured = CaptureState::Captured(selector.id());
        let moved = MouseEvent::CursorMoved {
            position: Point::new(10.0, to_y),
        };
        let response = selector
            .handle_mouse(&moved, &None, &captured)
            .expect("captured move continues the drag");
        selector.apply(response.message.unwrap(), now);

        let released = MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            position: Point::new(10.0, to_y),
        };
        let response = selector
            .handle_mouse(&released, &None, &captured)
            .expect("captured release ends the drag");
        selector.apply(response.message.unwrap(), now);

        // Run the settle to completion.
        let mut t = now;
        while selector.tick(t) {
            t += Duration::from_millis(16);
        }
    }

    #[test]
    fn construction_rejects_degenerate_configuration() {
        let empty: Vec<&str> = Vec::new();
        assert!(matches!(
            Selector::new(empty, H, |s, _| ItemVisual::new(*s)),
            Err(SelectorError::EmptyItems)
        ));
        assert!(matches!(
            Selector::new(units(), 0.0, |s, _| ItemVisual::new(*s)),
            Err(SelectorError::NonPositiveItemHeight(_))
        ));
        assert!(matches!(
            Selector::new(units(), -4.0, |s, _| ItemVisual::new(*s)),
            Err(SelectorError::NonPositiveItemHeight(_))
        ));
    }

    #[test]
    fn initial_index_defaults_to_zero_and_clamps() {
        let (selector, _) = picker();
        assert_eq!(selector.selected_index(), 0);
        assert_eq!(*selector.selected_item(), "Gram");

        let selector = Selector::new(units(), H, |s, _| ItemVisual::new(*s))
            .unwrap()
            .with_initial_index(99);
        assert_eq!(selector.selected_index(), 2);
        assert_eq!(selector.offset(), -2.0 * H);
    }

    #[test]
    fn drag_past_threshold_commits_and_fires_callback_once() {
        let (mut selector, commits) = picker();
        let t0 = Instant::now();

        // Drag ending at -20px: threshold is 9px (0.3 × 30).
        run_gesture(&mut selector, 100.0, 80.0, t0);

        assert_eq!(selector.selected_index(), 1);
        assert_eq!(*selector.selected_item(), "Litres");
        assert_eq!(*commits.borrow(), vec![1]);
        assert_eq!(selector.offset(), -H);
    }

    #[test]
    fn drag_below_threshold_reverts_silently() {
        let (mut selector, commits) = picker();
        let t0 = Instant::now();

        run_gesture(&mut selector, 100.0, 100.0 - 0.29 * H, t0);

        assert_eq!(selector.selected_index(), 0);
        assert!(commits.borrow().is_empty());
        assert_eq!(selector.offset(), 0.0);
    }

    #[test]
    fn commit_then_small_backward_drag_stays_put() {
        let (mut selector, commits) = picker();
        let t0 = Instant::now();

        run_gesture(&mut selector, 100.0, 80.0, t0);
        assert_eq!(selector.selected_index(), 1);

        // +5px back toward Gram: under the 9px threshold, reverts.
        let t1 = t0 + Duration::from_secs(1);
        run_gesture(&mut selector, 100.0, 105.0, t1);

        assert_eq!(selector.selected_index(), 1);
        assert_eq!(*commits.borrow(), vec![1]);
    }

    #[test]
    fn exactly_one_entry_is_centered_after_commit() {
        let (mut selector, _) = picker();
        run_gesture(&mut selector, 100.0, 80.0, Instant::now());

        let centered: Vec<usize> = selector
            .entries()
            .filter(|e| e.is_centered)
            .map(|e| e.index)
            .collect();
        assert_eq!(centered, vec![selector.selected_index()]);
    }

    #[test]
    fn wheel_steps_selection_with_clamping() {
        let (mut selector, commits) = picker();
        let t0 = Instant::now();

        // Lay out once so bounds are known for wheel containment.
        let mut snapshot = LayoutSnapshot::new();
        selector.view(
            &mut snapshot,
            LayoutConstraints::loose(120.0, 600.0),
            Point::ORIGIN,
        );

        let wheel_down = MouseEvent::WheelScrolled {
            delta: ScrollDelta::Pixels { x: 0.0, y: -10.0 },
            position: Point::new(10.0, 10.0),
        };
        for _ in 0..5 {
            if let Some(r) = selector.handle_mouse(&wheel_down, &None, &CaptureState::None) {
                selector.apply(r.message.unwrap(), t0);
            }
        }

        // Clamped at the last index, one commit per actual change.
        assert_eq!(selector.selected_index(), 2);
        assert_eq!(*commits.borrow(), vec![1, 2]);
    }

    #[test]
    fn wheel_outside_bounds_is_ignored() {
        let (selector, _) = picker();
        let wheel = MouseEvent::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: 1.0 },
            position: Point::new(500.0, 500.0),
        };
        assert!(selector
            .handle_mouse(&wheel, &None, &CaptureState::None)
            .is_none());
    }

    #[test]
    fn step_is_ignored_mid_drag() {
        let (mut selector, commits) = picker();
        let t0 = Instant::now();

        selector.apply(SelectorAction::DragStart(100.0), t0);
        selector.apply(SelectorAction::Step(1), t0);

        assert_eq!(selector.selected_index(), 0);
        assert!(commits.borrow().is_empty());
        assert!(selector.is_dragging());
    }

    #[test]
    fn press_outside_widget_is_ignored() {
        let (selector, _) = picker();
        let press = MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: Point::new(500.0, 500.0),
        };
        assert!(selector
            .handle_mouse(&press, &None, &CaptureState::None)
            .is_none());
    }

    #[test]
    fn replace_items_mid_drag_aborts_without_commit() {
        let (mut selector, commits) = picker();
        let t0 = Instant::now();

        selector.apply(SelectorAction::DragStart(100.0), t0);
        selector.apply(SelectorAction::DragMove(60.0), t0);
        assert!(selector.is_dragging());

        selector
            .replace_items(vec!["Cup", "Tablespoon"])
            .unwrap();

        assert!(!selector.is_dragging());
        assert_eq!(selector.selected_index(), 0);
        assert!(commits.borrow().is_empty());

        // A release arriving after the swap is a no-op.
        selector.apply(SelectorAction::DragEnd, t0);
        assert_eq!(selector.selected_index(), 0);
        assert!(commits.borrow().is_empty());
    }

    #[test]
    fn replace_items_clamps_selected_index() {
        let (mut selector, _) = picker();
        selector.step(2, Instant::now());
        assert_eq!(selector.selected_index(), 2);

        selector.replace_items(vec!["Cup", "Tablespoon"]).unwrap();
        assert_eq!(selector.selected_index(), 1);
        assert_eq!(selector.offset(), -H);

        let empty: Vec<&str> = Vec::new();
        assert!(matches!(
            selector.replace_items(empty),
            Err(SelectorError::EmptyItems)
        ));
    }

    #[test]
    fn save_and_restore_round_trips() {
        let id = SourceId::named("unit-picker");
        let mut registry = SavedStateRegistry::new();

        {
            let mut selector = Selector::new(units(), H, |s, _| ItemVisual::new(*s))
                .unwrap()
                .with_id(id);
            selector.step(1, Instant::now());
            selector.save_into(&mut registry);
        }

        // "Reconstruction": a fresh selector with the same stable ID.
        let mut selector = Selector::new(units(), H, |s, _| ItemVisual::new(*s))
            .unwrap()
            .with_id(id);
        assert_eq!(selector.restore_from(&registry), Some(1));
        assert_eq!(selector.selected_index(), 1);
        assert_eq!(selector.offset(), -H);
    }

    #[test]
    fn restore_clamps_out_of_range_index() {
        let id = SourceId::named("stale-picker");
        let mut registry = SavedStateRegistry::new();
        registry.save(id, 17);

        let mut selector = Selector::new(units(), H, |s, _| ItemVisual::new(*s))
            .unwrap()
            .with_id(id);
        assert_eq!(selector.restore_from(&registry), Some(2));
        assert_eq!(selector.selected_index(), 2);
    }

    #[test]
    fn restore_without_saved_state_is_none() {
        let (mut selector, _) = picker();
        let registry = SavedStateRegistry::new();
        assert_eq!(selector.restore_from(&registry), None);
        assert_eq!(selector.selected_index(), 0);
    }

    #[test]
    fn view_renders_only_windowed_items_but_keeps_all_slots() {
        let items: Vec<String> = (0..20).map(|i| format!("Item {i}")).collect();
        let selector = Selector::new(items, H, |s: &String, _| ItemVisual::new(s.clone()))
            .unwrap()
            .with_visible_items(2)
            .with_initial_index(5);

        let mut snapshot = LayoutSnapshot::new();
        selector.view(
            &mut snapshot,
            LayoutConstraints::loose(120.0, 600.0),
            Point::ORIGIN,
        );

        let labels: Vec<&str> = snapshot
            .primitives()
            .text_runs()
            .iter()
            .map(|r| r.text.as_str())
            .collect();
        assert_eq!(labels, vec!["Item 4", "Item 5", "Item 6"]);

        // Survivor positions are slot-index arithmetic, placeholders included.
        let bounds = snapshot.widget_bounds(&selector.id()).unwrap();
        let strip_y = bounds.center().y - H / 2.0 + selector.offset();
        let item4_y = snapshot.primitives().text_runs()[0].position.y;
        assert_eq!(item4_y, strip_y + 4.0 * H + (H - 14.0) / 2.0);
    }

    #[test]
    fn view_centers_the_selected_item_between_the_guides() {
        let (selector, _) = picker();
        let mut snapshot = LayoutSnapshot::new();
        let size = selector.view(
            &mut snapshot,
            LayoutConstraints::loose(120.0, 600.0),
            Point::ORIGIN,
        );

        // Widget spans 2*radius - 1 slots.
        assert_eq!(size.height, 5.0 * H);

        let bounds = snapshot.widget_bounds(&selector.id()).unwrap();
        let gram = snapshot
            .primitives()
            .text_runs()
            .iter()
            .find(|r| r.text == "Gram")
            .unwrap();
        // Selected label sits centered in the slot between the guides.
        assert_eq!(
            gram.position.y,
            bounds.center().y - H / 2.0 + (H - 14.0) / 2.0
        );

        // Two guide lines bracket that slot.
        let lines = snapshot.primitives().lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].p1.y, bounds.center().y - H / 2.0);
        assert_eq!(lines[1].p1.y, bounds.center().y + H / 2.0);
    }

    #[test]
    fn mid_drag_view_translates_the_strip_by_the_live_offset() {
        let (mut selector, _) = picker();
        let t0 = Instant::now();
        selector.apply(SelectorAction::DragStart(100.0), t0);
        selector.apply(SelectorAction::DragMove(88.0), t0);
        assert_eq!(selector.offset(), -12.0);

        let mut snapshot = LayoutSnapshot::new();
        selector.view(
            &mut snapshot,
            LayoutConstraints::loose(120.0, 600.0),
            Point::ORIGIN,
        );
        let bounds = snapshot.widget_bounds(&selector.id()).unwrap();
        let gram = snapshot
            .primitives()
            .text_runs()
            .iter()
            .find(|r| r.text == "Gram")
            .unwrap();
        assert_eq!(
            gram.position.y,
            bounds.center().y - H / 2.0 - 12.0 + (H - 14.0) / 2.0
        );
    }

    #[test]
    fn strip_labels_are_clipped_to_widget_bounds() {
        let (selector, _) = picker();
        let mut snapshot = LayoutSnapshot::new();
        selector.view(
            &mut snapshot,
            LayoutConstraints::loose(120.0, 600.0),
            Point::ORIGIN,
        );

        let bounds = snapshot.widget_bounds(&selector.id()).unwrap();
        for run in snapshot.primitives().text_runs() {
            assert_eq!(run.clip_rect, Some(bounds));
        }
        // Guides are chrome, drawn unclipped.
        for line in snapshot.primitives().lines() {
            assert_eq!(line.clip_rect, None);
        }
    }
}
