//! Layout snapshot.
//!
//! Captures one frame's layout output: widget bounds for hit-testing and
//! the primitive batch for rendering. The snapshot is cleared and rebuilt
//! every frame; state holders re-sync their cached geometry from it after
//! the layout pass.

use crate::primitives::{Point, Rect};
use crate::render::PrimitiveBatch;
use crate::source_id::SourceId;

/// Result of hit-testing a point against the snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitResult {
    /// The point is inside a registered widget's bounds.
    Widget(SourceId),
}

/// Per-frame layout record: registered widget bounds + primitives.
#[derive(Debug, Default)]
pub struct LayoutSnapshot {
    /// Widget bounds in registration order (later registrations are
    /// "on top" for hit-testing).
    widgets: Vec<(SourceId, Rect)>,
    primitives: PrimitiveBatch,
}

impl LayoutSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Reset for a new frame.
    pub fn clear(&mut self) {
        self.widgets.clear();
        self.primitives.clear();
    }

    /// Register a widget's bounds for hit-testing and state sync.
    pub fn register_widget(&mut self, id: SourceId, bounds: Rect) {
        self.widgets.push((id, bounds));
    }

    /// Look up the registered bounds for a widget.
    pub fn widget_bounds(&self, id: &SourceId) -> Option<Rect> {
        self.widgets
            .iter()
            .find(|(widget_id, _)| widget_id == id)
            .map(|(_, bounds)| *bounds)
    }

    /// Hit-test a point. The topmost (most recently registered) widget
    /// containing the point wins.
    pub fn hit_test(&self, point: Point) -> Option<HitResult> {
        self.widgets
            .iter()
            .rev()
            .find(|(_, bounds)| bounds.contains(point))
            .map(|(id, _)| HitResult::Widget(*id))
    }

    pub fn primitives(&self) -> &PrimitiveBatch {
        &self.primitives
    }

    pub fn primitives_mut(&mut self) -> &mut PrimitiveBatch {
        &mut self.primitives
    }
}
