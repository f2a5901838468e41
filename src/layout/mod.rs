//! Layout system for Spindle.
//!
//! A constraint-based layout pass: constraints flow down, sizes come back,
//! and the pass writes widget bounds and primitives into the frame's
//! snapshot.

pub mod constraints;
pub mod context;
pub mod length;
pub mod slot_stack;

pub use constraints::LayoutConstraints;
pub use context::LayoutContext;
pub use length::{estimate_label_width, Length, BASE_FONT_SIZE, CHAR_WIDTH};
pub use slot_stack::SlotStack;
