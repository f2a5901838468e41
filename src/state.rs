//! Selector state.
//!
//! `SelectorState` holds the committed selection index — the single source
//! of truth. The per-item "centered" flag is derived from it on every read
//! (`entries()`), never stored per item, so the flag and the index cannot
//! momentarily disagree.

/// Committed selection state for a single selector instance.
///
/// Owned by the enclosing app state; updated synchronously on every
/// committed drag-settle event. `0 <= selected_index < items.len()` holds by
/// construction — indices originate from the anchor table, which is bounded
/// by the list size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectorState {
    /// 0-based index into the backing list.
    pub selected_index: usize,
}

impl SelectorState {
    /// Create state with an initial committed index.
    pub fn new(selected_index: usize) -> Self {
        Self { selected_index }
    }

    /// Whether `index` is the committed selection.
    #[inline]
    pub fn is_centered(&self, index: usize) -> bool {
        index == self.selected_index
    }

    /// Clamp the committed index into `[0, len)`.
    ///
    /// Used when adopting a restored index or when the backing list shrinks.
    pub fn clamp_to(&mut self, len: usize) {
        debug_assert!(len > 0, "selector list is never empty");
        if self.selected_index >= len {
            self.selected_index = len - 1;
        }
    }

    /// Tag each item with its derived centered flag.
    ///
    /// Recomputed on every call from the committed index — a read-time view
    /// model, not stored per-item state.
    pub fn entries<'a, T>(
        &self,
        items: &'a [T],
    ) -> impl Iterator<Item = SelectionEntry<'a, T>> + 'a {
        let selected = self.selected_index;
        items.iter().enumerate().map(move |(index, value)| SelectionEntry {
            value,
            index,
            is_centered: index == selected,
        })
    }
}

impl Default for SelectorState {
    fn default() -> Self {
        Self::new(0)
    }
}

/// An item tagged with its position and derived centered flag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SelectionEntry<'a, T> {
    /// The wrapped domain value.
    pub value: &'a T,
    /// The item's index in the backing list.
    pub index: usize,
    /// True iff this index equals the committed selection index.
    pub is_centered: bool,
}
