//! Spindle: Swipeable Vertical Selector Engine
//!
//! Spindle implements a reusable, headless picker widget: the user selects
//! one item from an ordered list by vertical drag gestures that snap to
//! discrete anchor positions, with the centered item visually distinguished
//! and the selection persisted across widget reconstruction.
//!
//! # Architecture
//!
//! The core primitive is the anchor table — a bijection between selectable
//! indices and fixed vertical offsets. The drag engine resolves continuous
//! pointer movement against it with commit semantics: a release that covers
//! at least 30% of one item height toward a neighboring anchor commits the
//! move (index write + callback, atomically), anything less reverts, and
//! either way the strip settles through an interruptible tween. A frame's
//! layout writes widget bounds and paint primitives into a `LayoutSnapshot`
//! that a host renderer consumes.
//!
//! # Usage
//!
//! Applications own a `Selector` in their state and wire it into their
//! event loop:
//!
//! ```ignore
//! use spindle::{ItemVisual, LayoutConstraints, Point, Selector, SourceId};
//!
//! let picker = Selector::new(units, 30.0, |unit, centered| {
//!     ItemVisual::new(unit.label())
//! })?
//! .with_id(SourceId::named("unit-picker"))
//! .on_commit(|index| println!("selected {index}"));
//!
//! // per frame: route events, apply actions, tick, then view()
//! ```

// Core primitives
pub mod primitives;
pub mod source_id;
pub mod event;
pub mod snapshot;

// Selection core
pub mod anchors;
pub mod state;
pub mod saved_state;
pub mod drag;
pub mod window;

// Layout system
pub mod layout;

// Rendering glue
pub mod render;

// The assembled widget
pub mod selector;

// Demo application
pub mod demo;

// Re-export core types
pub use primitives::{Color, Point, Rect, Size};
pub use source_id::SourceId;
pub use event::{CaptureRequest, CaptureState, MouseButton, MouseEvent, MouseResponse, ScrollDelta};
pub use snapshot::{HitResult, LayoutSnapshot};
pub use anchors::AnchorTable;
pub use state::{SelectionEntry, SelectorState};
pub use saved_state::SavedStateRegistry;
pub use drag::{DragEngine, ReleaseOutcome, SettleTween, SETTLE_DURATION, SETTLE_THRESHOLD};
pub use window::VisibilityWindow;
pub use layout::{LayoutConstraints, LayoutContext, Length, SlotStack};
pub use render::{ItemVisual, LineSegment, LineStyle, PrimitiveBatch, SolidRect, TextRun};
pub use selector::{Selector, SelectorAction, SelectorError};
