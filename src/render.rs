//! Primitive batch and rendering glue.
//!
//! The batch is the boundary a host renderer consumes: the selector paints
//! solid rects, guide lines, and positioned labels into it each frame, and
//! the host draws them however it likes. Primitives carry the effective
//! clip rect captured from the clip stack at add time, so the strip's
//! overflow clipping needs no retained scene graph.

use crate::primitives::{Color, Point, Rect};

/// Line rendering style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineStyle {
    /// Solid line (default).
    #[default]
    Solid,
    /// Dashed line (repeating dash-gap pattern).
    Dashed,
}

/// A solid rectangle primitive.
#[derive(Debug, Clone, Copy)]
pub struct SolidRect {
    pub rect: Rect,
    pub color: Color,
    pub clip_rect: Option<Rect>,
}

/// A line segment primitive.
#[derive(Debug, Clone, Copy)]
pub struct LineSegment {
    pub p1: Point,
    pub p2: Point,
    pub thickness: f32,
    pub color: Color,
    pub style: LineStyle,
    pub clip_rect: Option<Rect>,
}

/// A pre-positioned text run.
#[derive(Debug, Clone)]
pub struct TextRun {
    pub text: String,
    pub position: Point,
    pub color: Color,
    pub font_size: f32,
    pub clip_rect: Option<Rect>,
}

/// The visual produced by a selector's rendering callback for one item.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemVisual {
    pub label: String,
    pub color: Color,
    pub font_size: f32,
}

impl ItemVisual {
    /// Default label style.
    pub fn new(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            color: Color::WHITE,
            font_size: 14.0,
        }
    }

    pub fn color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    pub fn font_size(mut self, font_size: f32) -> Self {
        self.font_size = font_size;
        self
    }
}

/// A batch of primitives ready for a host renderer.
#[derive(Debug, Default, Clone)]
pub struct PrimitiveBatch {
    solid_rects: Vec<SolidRect>,
    lines: Vec<LineSegment>,
    text_runs: Vec<TextRun>,
    /// Clip stack for nested clipping. Each entry is the effective clip
    /// (intersection with all outer clips) at the time it was pushed.
    clip_stack: Vec<Rect>,
}

impl PrimitiveBatch {
    pub fn new() -> Self {
        Self::default()
    }

    /// The effective clip rect for primitives added now.
    pub fn current_clip(&self) -> Option<Rect> {
        self.clip_stack.last().copied()
    }

    /// Push a clip rect; nested clips intersect with the enclosing ones.
    ///
    /// A push that does not overlap the enclosing clip degenerates to a
    /// zero-size clip at the new rect's origin.
    pub fn push_clip(&mut self, rect: Rect) {
        let effective = match self.current_clip() {
            Some(outer) => outer
                .intersection(&rect)
                .unwrap_or(Rect::new(rect.x, rect.y, 0.0, 0.0)),
            None => rect,
        };
        self.clip_stack.push(effective);
    }

    pub fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }

    pub fn add_solid_rect(&mut self, rect: Rect, color: Color) {
        self.solid_rects.push(SolidRect {
            rect,
            color,
            clip_rect: self.current_clip(),
        });
    }

    pub fn add_line(&mut self, p1: Point, p2: Point, thickness: f32, color: Color, style: LineStyle) {
        self.lines.push(LineSegment {
            p1,
            p2,
            thickness,
            color,
            style,
            clip_rect: self.current_clip(),
        });
    }

    pub fn add_text_run(&mut self, text: impl Into<String>, position: Point, color: Color, font_size: f32) {
        self.text_runs.push(TextRun {
            text: text.into(),
            position,
            color,
            font_size,
            clip_rect: self.current_clip(),
        });
    }

    pub fn solid_rects(&self) -> &[SolidRect] {
        &self.solid_rects
    }

    pub fn lines(&self) -> &[LineSegment] {
        &self.lines
    }

    pub fn text_runs(&self) -> &[TextRun] {
        &self.text_runs
    }

    pub fn is_empty(&self) -> bool {
        self.solid_rects.is_empty() && self.lines.is_empty() && self.text_runs.is_empty()
    }

    /// Clear all primitives (start of a new frame). Clip stack must already
    /// be balanced.
    pub fn clear(&mut self) {
        debug_assert!(self.clip_stack.is_empty(), "unbalanced clip stack");
        self.solid_rects.clear();
        self.lines.clear();
        self.text_runs.clear();
        self.clip_stack.clear();
    }
}

/// Paint the selection guides: two full-width horizontal lines bracketing
/// the centered slot.
pub fn paint_guides(batch: &mut PrimitiveBatch, bounds: Rect, item_height: f32, color: Color) {
    let center_y = bounds.center().y;
    for y in [center_y - item_height / 2.0, center_y + item_height / 2.0] {
        batch.add_line(
            Point::new(bounds.x, y),
            Point::new(bounds.right(), y),
            1.0,
            color,
            LineStyle::Solid,
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn primitives_capture_current_clip() {
        let mut batch = PrimitiveBatch::new();
        batch.add_solid_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);

        batch.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        batch.add_text_run("Gram", Point::new(5.0, 5.0), Color::WHITE, 14.0);
        batch.pop_clip();

        assert!(batch.solid_rects()[0].clip_rect.is_none());
        assert_eq!(
            batch.text_runs()[0].clip_rect,
            Some(Rect::new(0.0, 0.0, 100.0, 100.0))
        );
    }

    #[test]
    fn nested_clips_intersect() {
        let mut batch = PrimitiveBatch::new();
        batch.push_clip(Rect::new(0.0, 0.0, 100.0, 100.0));
        batch.push_clip(Rect::new(50.0, 50.0, 100.0, 100.0));

        assert_eq!(batch.current_clip(), Some(Rect::new(50.0, 50.0, 50.0, 50.0)));

        batch.pop_clip();
        assert_eq!(batch.current_clip(), Some(Rect::new(0.0, 0.0, 100.0, 100.0)));
        batch.pop_clip();
        assert_eq!(batch.current_clip(), None);
    }

    #[test]
    fn disjoint_nested_clip_collapses_to_zero_size() {
        let mut batch = PrimitiveBatch::new();
        batch.push_clip(Rect::new(0.0, 0.0, 10.0, 10.0));
        batch.push_clip(Rect::new(50.0, 50.0, 10.0, 10.0));

        let clip = batch.current_clip().unwrap();
        assert_eq!(clip.size(), crate::primitives::Size::ZERO);
    }

    #[test]
    fn guides_bracket_the_centered_slot() {
        let mut batch = PrimitiveBatch::new();
        let bounds = Rect::new(10.0, 0.0, 80.0, 90.0);
        paint_guides(&mut batch, bounds, 30.0, Color::GUIDE);

        let lines = batch.lines();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].p1.y, 30.0);
        assert_eq!(lines[1].p1.y, 60.0);
        // Full widget width.
        assert_eq!(lines[0].p1.x, 10.0);
        assert_eq!(lines[0].p2.x, 90.0);
    }

    #[test]
    fn clear_resets_the_batch() {
        let mut batch = PrimitiveBatch::new();
        batch.add_line(
            Point::ORIGIN,
            Point::new(10.0, 0.0),
            1.0,
            Color::WHITE,
            LineStyle::Dashed,
        );
        assert!(!batch.is_empty());
        batch.clear();
        assert!(batch.is_empty());
    }
}
