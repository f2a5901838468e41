//! Visibility windowing.
//!
//! Bounds rendering cost for long lists: only items within a fixed distance
//! of the committed selection are materialized at all. The predicate is
//! pure and recomputed whenever the selection changes; slots outside the
//! window still occupy their height in the strip (see
//! `layout::slot_stack`), so eligibility changes never reflow the layout.

use std::ops::Range;

/// Render-eligibility window around the committed selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibilityWindow {
    radius: usize,
}

impl VisibilityWindow {
    /// Default number of simultaneously visible items.
    pub const DEFAULT_RADIUS: usize = 3;

    /// Create a window with the given radius (the "visible items" count).
    ///
    /// A radius of 0 is clamped to 1 — the centered item is always
    /// eligible.
    pub fn new(radius: usize) -> Self {
        Self {
            radius: radius.max(1),
        }
    }

    pub fn radius(&self) -> usize {
        self.radius
    }

    /// Whether `index` is eligible to render given the committed selection.
    ///
    /// Eligible iff it is the centered item or within `radius - 1` of it.
    pub fn is_renderable(&self, selected: usize, index: usize) -> bool {
        index == selected || selected.abs_diff(index) <= self.radius - 1
    }

    /// The contiguous range of eligible indices, clipped to `len`.
    pub fn eligible_range(&self, selected: usize, len: usize) -> Range<usize> {
        let start = selected.saturating_sub(self.radius - 1);
        let end = (selected + self.radius).min(len);
        start..end
    }
}

impl Default for VisibilityWindow {
    fn default() -> Self {
        Self::new(Self::DEFAULT_RADIUS)
    }
}
