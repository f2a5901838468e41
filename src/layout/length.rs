//! Layout sizing types and constants.

/// Nominal label metrics for a 14px UI font; hosts with real text shaping
/// can ignore the estimates these produce.
pub const CHAR_WIDTH: f32 = 8.4;
pub const BASE_FONT_SIZE: f32 = 14.0;

/// Sizing mode for a container axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Length {
    /// Shrink to fit content (intrinsic size).
    #[default]
    Shrink,
    /// Expand to fill available space.
    Fill,
    /// Fixed pixel size.
    Fixed(f32),
}

impl Length {
    /// Whether this length expands into available space.
    pub fn is_flex(&self) -> bool {
        matches!(self, Length::Fill)
    }
}

/// Estimate the pixel width of a label at a font size.
pub fn estimate_label_width(label: &str, font_size: f32) -> f32 {
    label.chars().count() as f32 * CHAR_WIDTH * (font_size / BASE_FONT_SIZE)
}
