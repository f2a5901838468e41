//! Anchor table.
//!
//! Each selectable index has a fixed vertical offset ("anchor"): index `i`
//! maps to `-(i * item_height)`, so the strip translates upward as the
//! selection moves down the list. The table is derived data — rebuilt
//! whenever the item list identity or the item height changes, read-only
//! afterwards.

/// Fixed vertical offsets for each selectable index.
///
/// Invariants: exactly one anchor per item, strictly monotonically
/// decreasing in index, `offset_of(0) == 0`.
#[derive(Debug, Clone)]
pub struct AnchorTable {
    item_height: f32,
    offsets: Vec<f32>,
}

impl AnchorTable {
    /// Build the table for `item_count` items of uniform `item_height`.
    ///
    /// Callers guarantee `item_count > 0` and `item_height > 0.0`; the
    /// selector validates both at construction.
    pub fn build(item_count: usize, item_height: f32) -> Self {
        debug_assert!(item_count > 0, "anchor table needs at least one item");
        debug_assert!(item_height > 0.0, "item height must be positive");

        let offsets = (0..item_count)
            .map(|i| -(i as f32) * item_height)
            .collect();

        Self {
            item_height,
            offsets,
        }
    }

    /// Number of anchors (== number of items).
    pub fn len(&self) -> usize {
        self.offsets.len()
    }

    pub fn is_empty(&self) -> bool {
        self.offsets.is_empty()
    }

    /// The uniform item height the table was built with.
    pub fn item_height(&self) -> f32 {
        self.item_height
    }

    /// The anchor offset for `index`.
    pub fn offset_of(&self, index: usize) -> f32 {
        self.offsets[index]
    }

    /// Clamp a live offset into the anchor range (no wraparound).
    ///
    /// The range is `[offset_of(len - 1), offset_of(0)]` — a drag cannot
    /// move the selection beyond the first or last anchor.
    pub fn clamp(&self, offset: f32) -> f32 {
        let last = self.offsets[self.offsets.len() - 1];
        offset.clamp(last, 0.0)
    }

    /// The index whose anchor is nearest to `offset` by absolute distance.
    pub fn nearest_index(&self, offset: f32) -> usize {
        let raw = (-self.clamp(offset) / self.item_height).round();
        (raw as usize).min(self.offsets.len() - 1)
    }

    /// The immediate neighbor of `index` in the direction of `displacement`.
    ///
    /// Negative displacement (strip dragged up) selects the next index,
    /// positive the previous. Returns `None` at the ends of the list or for
    /// zero displacement.
    pub fn neighbor_toward(&self, index: usize, displacement: f32) -> Option<usize> {
        if displacement < 0.0 {
            let next = index + 1;
            (next < self.offsets.len()).then_some(next)
        } else if displacement > 0.0 {
            index.checked_sub(1)
        } else {
            None
        }
    }
}
