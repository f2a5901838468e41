//! Slot stack - the selector strip's vertical layout.
//!
//! Stacks already-measured slots top-to-bottom with zero spacing, in list
//! order: total height is the sum of slot heights, total width the max slot
//! width. No reordering, no overlap resolution.
//!
//! Windowed-out items stay in the stack as empty placeholder slots that
//! keep their height, so hiding/showing items never moves the survivors —
//! the offset-driven settle animation depends on slot positions being a
//! pure function of index.

use crate::primitives::{Point, Rect, Size};
use crate::render::ItemVisual;
use crate::source_id::SourceId;

use super::constraints::LayoutConstraints;
use super::context::LayoutContext;
use super::length::{estimate_label_width, Length};

/// One fixed-height slot in the strip.
#[derive(Debug, Clone)]
struct Slot {
    height: f32,
    /// Rendered content; `None` keeps the slot's space without
    /// materializing anything.
    visual: Option<ItemVisual>,
}

/// A vertical stack of fixed-height slots.
#[derive(Debug, Clone, Default)]
pub struct SlotStack {
    /// Widget ID for hit-testing registration.
    id: Option<SourceId>,
    slots: Vec<Slot>,
    /// Width sizing mode.
    width: Length,
}

impl SlotStack {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set widget ID for hit-testing registration.
    pub fn id(mut self, id: SourceId) -> Self {
        self.id = Some(id);
        self
    }

    /// Set width sizing mode.
    pub fn width(mut self, width: Length) -> Self {
        self.width = width;
        self
    }

    /// Add a rendered slot.
    pub fn slot(mut self, height: f32, visual: ItemVisual) -> Self {
        self.slots.push(Slot {
            height,
            visual: Some(visual),
        });
        self
    }

    /// Add an empty slot that occupies `height` without rendering.
    pub fn placeholder(mut self, height: f32) -> Self {
        self.slots.push(Slot {
            height,
            visual: None,
        });
        self
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Intrinsic size: height is the sum of all slot heights (placeholders
    /// included), width the widest rendered label.
    pub fn measure(&self) -> Size {
        let mut width: f32 = 0.0;
        let mut height: f32 = 0.0;
        for slot in &self.slots {
            height += slot.height;
            if let Some(visual) = &slot.visual {
                width = width.max(estimate_label_width(&visual.label, visual.font_size));
            }
        }
        if let Length::Fixed(px) = self.width {
            width = px;
        }
        Size::new(width, height)
    }

    /// Lay out the stack at `origin`, emitting label runs into the
    /// snapshot and registering the widget ID if set.
    ///
    /// Slot positions accumulate from the origin in list order; labels are
    /// centered horizontally and vertically within their slot.
    pub fn layout_with_constraints(
        self,
        ctx: &mut LayoutContext,
        constraints: LayoutConstraints,
        origin: Point,
    ) -> Size {
        ctx.enter("SlotStack");

        let intrinsic = self.measure();
        let width = match self.width {
            Length::Fixed(px) => px,
            Length::Fill => {
                if constraints.has_bounded_width() {
                    constraints.max_width
                } else {
                    intrinsic.width
                }
            }
            Length::Shrink => {
                if constraints.has_bounded_width() {
                    intrinsic.width.min(constraints.max_width)
                } else {
                    intrinsic.width
                }
            }
        };
        let size = constraints.constrain(Size::new(width, intrinsic.height));
        ctx.log_layout(constraints, size);

        if let Some(id) = self.id {
            ctx.snapshot
                .register_widget(id, Rect::from_origin_size(origin, size));
        }

        let mut y = origin.y;
        for slot in self.slots {
            if let Some(visual) = slot.visual {
                let label_width = estimate_label_width(&visual.label, visual.font_size);
                let x = origin.x + (size.width - label_width) / 2.0;
                let label_y = y + (slot.height - visual.font_size) / 2.0;
                ctx.snapshot.primitives_mut().add_text_run(
                    visual.label,
                    Point::new(x, label_y),
                    visual.color,
                    visual.font_size,
                );
            }
            y += slot.height;
        }

        ctx.exit();
        size
    }
}
