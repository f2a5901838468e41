//! Drag-to-index engine.
//!
//! A continuous-to-discrete gesture resolver with commit semantics. During a
//! drag the live offset accumulates pointer deltas, clamped to the anchor
//! range; the committed index never changes mid-drag. Release compares the
//! offset against the committed anchor and its immediate neighbor in the
//! drag direction: covering at least [`SETTLE_THRESHOLD`] of one item height
//! commits the neighbor, anything less reverts. Either way the offset then
//! settles to its anchor through an interruptible tween advanced by
//! [`DragEngine::tick`].
//!
//! The engine holds exactly one phase slot, so at most one settle tween is
//! live per selector; a new drag beginning mid-settle picks up from the last
//! sampled offset and the old tween is gone before the pointer moves.

use std::time::{Duration, Instant};

use tracing::{debug, trace};

use crate::anchors::AnchorTable;

/// Fraction of one item height a drag must cover toward the neighboring
/// anchor for the release to commit the move.
pub const SETTLE_THRESHOLD: f32 = 0.3;

/// Duration of the settle animation after a release.
pub const SETTLE_DURATION: Duration = Duration::from_millis(180);

fn smoothstep(t: f32) -> f32 {
    t * t * (3.0 - 2.0 * t)
}

/// In-flight settle animation toward an anchor offset.
#[derive(Debug, Clone, Copy)]
pub struct SettleTween {
    from: f32,
    to: f32,
    started: Instant,
    duration: Duration,
}

impl SettleTween {
    fn new(from: f32, to: f32, now: Instant) -> Self {
        Self {
            from,
            to,
            started: now,
            duration: SETTLE_DURATION,
        }
    }

    /// The eased offset at `now`, clamped to the tween's endpoints.
    pub fn sample(&self, now: Instant) -> f32 {
        let elapsed = now.saturating_duration_since(self.started);
        let t = (elapsed.as_secs_f32() / self.duration.as_secs_f32()).clamp(0.0, 1.0);
        self.from + (self.to - self.from) * smoothstep(t)
    }

    /// Whether the tween has run its full duration at `now`.
    pub fn is_done(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.started) >= self.duration
    }

    /// The anchor offset this tween is heading to.
    pub fn target(&self) -> f32 {
        self.to
    }
}

/// Gesture phase. One slot: a new phase always replaces the old.
#[derive(Debug, Clone, Copy)]
enum DragPhase {
    /// No active gesture; offset rests at the committed anchor (or is mid-settle).
    Idle,
    /// Active pointer tracking.
    Dragging { grab_y: f32, grab_offset: f32 },
    /// Animating toward an anchor after release.
    Settling(SettleTween),
}

/// Result of evaluating a release against the settle threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReleaseOutcome {
    /// The drag crossed the threshold: the selection moves to `index`.
    Committed { index: usize },
    /// Below threshold: snap back to the original anchor, no state change.
    Reverted,
}

/// Drag gesture state for a single selector instance.
///
/// The engine owns the live visual offset and the gesture phase; the
/// committed index lives in `SelectorState` and is passed in per call, so
/// commit (index write + callback) stays a single atomic unit at the
/// selector level.
#[derive(Debug)]
pub struct DragEngine {
    anchors: AnchorTable,
    /// Live vertical translation of the strip, clamped to the anchor range.
    offset: f32,
    phase: DragPhase,
}

impl DragEngine {
    /// Create an engine resting at the anchor of `selected_index`.
    pub fn new(anchors: AnchorTable, selected_index: usize) -> Self {
        let offset = anchors.offset_of(selected_index);
        Self {
            anchors,
            offset,
            phase: DragPhase::Idle,
        }
    }

    pub fn anchors(&self) -> &AnchorTable {
        &self.anchors
    }

    /// The live strip offset (uncommitted during a drag).
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn is_dragging(&self) -> bool {
        matches!(self.phase, DragPhase::Dragging { .. })
    }

    pub fn is_settling(&self) -> bool {
        matches!(self.phase, DragPhase::Settling(_))
    }

    /// Start a drag at the given pointer Y.
    ///
    /// Cancels any in-flight settle immediately: the offset freezes at the
    /// tween's sample for `now` and the new gesture picks up from there, so
    /// no stale tween can complete after a newer gesture started.
    pub fn begin(&mut self, pointer_y: f32, now: Instant) {
        if let DragPhase::Settling(tween) = self.phase {
            self.offset = tween.sample(now);
        }
        trace!(pointer_y, offset = self.offset, "drag begin");
        self.phase = DragPhase::Dragging {
            grab_y: pointer_y,
            grab_offset: self.offset,
        };
    }

    /// Continue the drag to the given pointer Y.
    ///
    /// Accumulates the delta from the grab point into the live offset,
    /// clamped so the selection cannot move beyond the first or last anchor.
    /// The committed index is untouched.
    pub fn drag_to(&mut self, pointer_y: f32) {
        if let DragPhase::Dragging { grab_y, grab_offset } = self.phase {
            self.offset = self.anchors.clamp(grab_offset + (pointer_y - grab_y));
        }
    }

    /// End the drag and evaluate the settle threshold.
    ///
    /// With the committed index `selected`, the candidates are `selected`
    /// and its immediate neighbor in the drag direction. Displacement of at
    /// least `SETTLE_THRESHOLD * item_height` toward an existing neighbor
    /// commits it; otherwise the drag reverts. Either way a settle tween
    /// starts toward the resulting anchor (skipped when already there).
    ///
    /// Calling this outside an active drag is a no-op that reports
    /// `Reverted`.
    pub fn release(&mut self, selected: usize, now: Instant) -> ReleaseOutcome {
        if !self.is_dragging() {
            return ReleaseOutcome::Reverted;
        }

        let displacement = self.offset - self.anchors.offset_of(selected);
        let threshold = SETTLE_THRESHOLD * self.anchors.item_height();

        let (outcome, target_index) = match self.anchors.neighbor_toward(selected, displacement) {
            Some(neighbor) if displacement.abs() >= threshold => {
                (ReleaseOutcome::Committed { index: neighbor }, neighbor)
            }
            _ => (ReleaseOutcome::Reverted, selected),
        };

        debug!(
            selected,
            displacement,
            threshold,
            ?outcome,
            "drag release"
        );

        self.settle_to(target_index, now);
        outcome
    }

    /// Start a settle tween from the current offset toward `index`'s anchor.
    ///
    /// Lands immediately (no tween) when the offset is already there.
    pub fn settle_to(&mut self, index: usize, now: Instant) {
        let target = self.anchors.offset_of(index);
        if (self.offset - target).abs() < f32::EPSILON {
            self.offset = target;
            self.phase = DragPhase::Idle;
        } else {
            self.phase = DragPhase::Settling(SettleTween::new(self.offset, target, now));
        }
    }

    /// Advance the settle animation. Returns true while another frame is
    /// needed.
    ///
    /// On completion the offset lands exactly on the target anchor.
    pub fn tick(&mut self, now: Instant) -> bool {
        match self.phase {
            DragPhase::Settling(tween) => {
                if tween.is_done(now) {
                    self.offset = tween.target();
                    self.phase = DragPhase::Idle;
                    false
                } else {
                    self.offset = tween.sample(now);
                    true
                }
            }
            _ => false,
        }
    }

    /// Abort any in-flight gesture or settle without committing.
    ///
    /// The offset snaps to `selected`'s anchor. Used when the backing list
    /// is replaced or the widget is torn down mid-gesture.
    pub fn cancel(&mut self, selected: usize) {
        if !matches!(self.phase, DragPhase::Idle) {
            trace!(selected, "gesture aborted");
        }
        self.offset = self.anchors.offset_of(selected);
        self.phase = DragPhase::Idle;
    }

    /// Swap the anchor table (list identity or item height changed).
    ///
    /// Aborts any in-flight gesture and rests at `selected`'s anchor in the
    /// new table.
    pub fn replace_anchors(&mut self, anchors: AnchorTable, selected: usize) {
        self.anchors = anchors;
        self.cancel(selected);
    }
}
