//! Pointer events, capture state, and event responses.
//!
//! The host shell dispatches `MouseEvent`s; widgets answer with a
//! `MouseResponse` combining an optional message with a pointer-capture
//! request. Global pointer capture keeps a drag alive even when the cursor
//! leaves the widget bounds.

use crate::primitives::Point;
use crate::source_id::SourceId;

/// Capture state for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureState {
    /// No capture - events route based on hit-testing.
    #[default]
    None,

    /// Captured by a specific source.
    /// All pointer events go to this source until released.
    Captured(SourceId),
}

impl CaptureState {
    /// Check if the pointer is currently captured.
    pub fn is_captured(&self) -> bool {
        matches!(self, CaptureState::Captured(_))
    }

    /// Get the source that has captured the pointer, if any.
    pub fn captured_by(&self) -> Option<SourceId> {
        match self {
            CaptureState::Captured(source) => Some(*source),
            CaptureState::None => None,
        }
    }
}

/// Mouse button types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MouseButton {
    Left,
    Right,
    Middle,
    Other(u16),
}

/// Mouse event types.
#[derive(Debug, Clone)]
pub enum MouseEvent {
    /// Mouse button pressed.
    ButtonPressed {
        button: MouseButton,
        position: Point,
    },

    /// Mouse button released.
    ButtonReleased {
        button: MouseButton,
        position: Point,
    },

    /// Mouse cursor moved.
    CursorMoved { position: Point },

    /// Mouse wheel scrolled.
    WheelScrolled { delta: ScrollDelta, position: Point },
}

/// Scroll delta types.
#[derive(Debug, Clone, Copy)]
pub enum ScrollDelta {
    /// Scroll by lines (discrete, e.g., mouse wheel notches).
    Lines { x: f32, y: f32 },

    /// Scroll by pixels (smooth, e.g., trackpad).
    Pixels { x: f32, y: f32 },
}

impl ScrollDelta {
    /// Vertical component, in pixels (lines are scaled by a nominal line height).
    pub fn vertical_px(&self) -> f32 {
        match self {
            ScrollDelta::Lines { y, .. } => y * 40.0,
            ScrollDelta::Pixels { y, .. } => *y,
        }
    }
}

/// Request to change pointer capture state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRequest {
    /// No change to capture state.
    None,

    /// Capture the pointer for the specified source.
    /// While captured, mouse events will be dispatched even when outside widget bounds.
    Capture(SourceId),

    /// Release pointer capture.
    Release,
}

/// Response from a mouse event handler.
///
/// Combines an optional message with optional pointer capture state changes,
/// so a widget can both update state AND request capture atomically.
#[derive(Debug)]
pub struct MouseResponse<M> {
    /// Optional message to send to update().
    pub message: Option<M>,

    /// Pointer capture request.
    pub capture: CaptureRequest,
}

impl<M> MouseResponse<M> {
    /// No response (no message, no capture change).
    pub fn none() -> Self {
        Self {
            message: None,
            capture: CaptureRequest::None,
        }
    }

    /// Response with just a message.
    pub fn message(msg: M) -> Self {
        Self {
            message: Some(msg),
            capture: CaptureRequest::None,
        }
    }

    /// Response with message that also captures the pointer.
    pub fn message_and_capture(msg: M, source: SourceId) -> Self {
        Self {
            message: Some(msg),
            capture: CaptureRequest::Capture(source),
        }
    }

    /// Response with message that also releases capture.
    pub fn message_and_release(msg: M) -> Self {
        Self {
            message: Some(msg),
            capture: CaptureRequest::Release,
        }
    }

    /// Transform the message type, preserving capture state.
    ///
    /// This enables composable mouse handling: widget-level handlers return
    /// `MouseResponse<SelectorAction>`, and the app maps to its message type:
    /// ```ignore
    /// if let Some(r) = state.unit_picker.handle_mouse(&event, &hit, capture) {
    ///     return r.map(AppMessage::UnitPicker);
    /// }
    /// ```
    pub fn map<N>(self, f: impl FnOnce(M) -> N) -> MouseResponse<N> {
        MouseResponse {
            message: self.message.map(f),
            capture: self.capture,
        }
    }
}

impl<M> Default for MouseResponse<M> {
    fn default() -> Self {
        Self::none()
    }
}
