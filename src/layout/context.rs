//! Layout context.
//!
//! Threads the per-frame snapshot through the layout pass and tracks
//! nesting depth for trace logging.

use tracing::trace;

use crate::primitives::Size;
use crate::snapshot::LayoutSnapshot;

use super::constraints::LayoutConstraints;

/// Mutable context for one layout pass.
pub struct LayoutContext<'a> {
    pub snapshot: &'a mut LayoutSnapshot,
    depth: usize,
}

impl<'a> LayoutContext<'a> {
    pub fn new(snapshot: &'a mut LayoutSnapshot) -> Self {
        Self { snapshot, depth: 0 }
    }

    /// Enter a named layout node (trace logging only).
    pub fn enter(&mut self, label: &'static str) {
        trace!(depth = self.depth, label, "layout enter");
        self.depth += 1;
    }

    /// Exit the current layout node.
    pub fn exit(&mut self) {
        self.depth = self.depth.saturating_sub(1);
    }

    /// Trace the constraints/size pair a node resolved to.
    pub fn log_layout(&self, constraints: LayoutConstraints, size: Size) {
        trace!(
            depth = self.depth,
            max_width = constraints.max_width,
            max_height = constraints.max_height,
            width = size.width,
            height = size.height,
            "layout resolved"
        );
    }
}
