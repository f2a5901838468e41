//! Widget identity.
//!
//! `SourceId` provides stable addressing for widget instances: snapshot
//! registration, pointer-capture routing, and saved-state keys all use it.

use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};

/// Counter for generating unique source IDs.
static SOURCE_ID_COUNTER: AtomicU64 = AtomicU64::new(1);

/// Unique identifier for a widget instance.
///
/// IDs are assigned from a process-global counter, so two selectors in the
/// same frame never collide. Use `named()` when an ID must survive widget
/// reconstruction (e.g. as a saved-state key).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SourceId(pub u64);

impl SourceId {
    /// Create a new unique source ID.
    ///
    /// Each call returns a different ID.
    pub fn new() -> Self {
        Self(SOURCE_ID_COUNTER.fetch_add(1, Ordering::Relaxed))
    }

    /// Create a stable source ID from a name.
    ///
    /// Deterministic: same name always produces the same ID.
    /// Uses high bit to avoid collision with the atomic counter.
    pub fn named(name: &str) -> Self {
        use std::collections::hash_map::DefaultHasher;
        let mut hasher = DefaultHasher::new();
        name.hash(&mut hasher);
        Self(hasher.finish() | (1 << 63))
    }

    /// Create a source ID from an existing value.
    pub const fn from_raw(id: u64) -> Self {
        Self(id)
    }

    /// Get the raw numeric value.
    pub const fn raw(&self) -> u64 {
        self.0
    }

    /// Create a deterministic child ID from this parent.
    ///
    /// Entropy-preserving mixing (rotate + XOR with a golden-ratio constant)
    /// derives unique child IDs without allocation. One-way: the parent
    /// cannot be recovered from the child.
    pub const fn child(&self, discriminator: u64) -> Self {
        // Golden ratio fractional bits, same constant used in SplitMix64.
        const PHI: u64 = 0x9E3779B97F4A7C15;
        let mixed = self.0.rotate_left(21) ^ discriminator.wrapping_mul(PHI);
        Self(mixed)
    }
}

impl Default for SourceId {
    fn default() -> Self {
        Self::new()
    }
}
