//! Headless demo exercising the full selector pipeline.
//!
//! Simulates the host shell's frame loop at 16 ms per frame: pointer events
//! route through `handle_mouse`, capture changes are applied, actions feed
//! `apply`, and `tick` drives the settle animation between frames. The
//! script walks a unit-of-measure picker through a committing drag, a
//! reverting drag, wheel stepping, and a save/restore round trip.
//!
//! Run with: `RUST_LOG=debug cargo run --bin spindle-demo`

use std::time::{Duration, Instant};

use tracing::info;

use crate::event::{CaptureRequest, CaptureState, MouseButton, MouseEvent, ScrollDelta};
use crate::layout::LayoutConstraints;
use crate::primitives::{Color, Point};
use crate::render::ItemVisual;
use crate::saved_state::SavedStateRegistry;
use crate::selector::{Selector, SelectorError};
use crate::snapshot::LayoutSnapshot;
use crate::source_id::SourceId;

/// Units of measure for the demo picker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Gram,
    Litres,
    Millilitres,
}

impl Unit {
    pub const ALL: [Unit; 3] = [Unit::Gram, Unit::Litres, Unit::Millilitres];

    pub fn label(&self) -> &'static str {
        match self {
            Unit::Gram => "Gram",
            Unit::Litres => "Litres",
            Unit::Millilitres => "Millilitres",
        }
    }
}

const ITEM_HEIGHT: f32 = 30.0;
const FRAME: Duration = Duration::from_millis(16);

const DIM: Color = Color {
    r: 0.55,
    g: 0.55,
    b: 0.60,
    a: 1.0,
};

fn unit_picker() -> Result<Selector<Unit>, SelectorError> {
    let picker = Selector::new(Unit::ALL.to_vec(), ITEM_HEIGHT, |unit, centered| {
        let visual = ItemVisual::new(unit.label());
        if centered {
            visual.color(Color::WHITE).font_size(16.0)
        } else {
            visual.color(DIM)
        }
    })?
    .with_id(SourceId::named("unit-picker"))
    .on_commit(|index| info!(index, "unit selected"));
    Ok(picker)
}

/// Route one event through the selector, applying capture changes and the
/// produced action — the same wiring a host shell performs.
fn dispatch(
    picker: &mut Selector<Unit>,
    snapshot: &LayoutSnapshot,
    capture: &mut CaptureState,
    event: MouseEvent,
    now: Instant,
) {
    let hit = match &event {
        MouseEvent::ButtonPressed { position, .. } => snapshot.hit_test(*position),
        _ => None,
    };

    if let Some(response) = picker.handle_mouse(&event, &hit, capture) {
        match response.capture {
            CaptureRequest::Capture(id) => *capture = CaptureState::Captured(id),
            CaptureRequest::Release => *capture = CaptureState::None,
            CaptureRequest::None => {}
        }
        if let Some(action) = response.message {
            picker.apply(action, now);
        }
    }
}

/// Run the scripted demo.
pub fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut picker = unit_picker()?;
    let mut snapshot = LayoutSnapshot::new();
    let mut capture = CaptureState::None;
    let mut now = Instant::now();

    let constraints = LayoutConstraints::loose(160.0, 600.0);
    let frame = |picker: &Selector<Unit>, snapshot: &mut LayoutSnapshot| {
        snapshot.clear();
        picker.view(snapshot, constraints, Point::ORIGIN);
    };

    frame(&picker, &mut snapshot);
    info!(selected = picker.selected_item().label(), "initial selection");

    // Gesture 1: drag up 20px — past the 9px threshold, commits Litres.
    dispatch(
        &mut picker,
        &snapshot,
        &mut capture,
        MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: Point::new(20.0, 100.0),
        },
        now,
    );
    for y in [95.0, 88.0, 80.0] {
        now += FRAME;
        dispatch(
            &mut picker,
            &snapshot,
            &mut capture,
            MouseEvent::CursorMoved {
                position: Point::new(20.0, y),
            },
            now,
        );
        frame(&picker, &mut snapshot);
    }
    dispatch(
        &mut picker,
        &snapshot,
        &mut capture,
        MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            position: Point::new(20.0, 80.0),
        },
        now,
    );
    while picker.tick(now) {
        now += FRAME;
        frame(&picker, &mut snapshot);
    }
    info!(
        selected = picker.selected_item().label(),
        offset = picker.offset(),
        "settled after committing drag"
    );

    // Gesture 2: 5px back toward Gram — under the threshold, reverts.
    dispatch(
        &mut picker,
        &snapshot,
        &mut capture,
        MouseEvent::ButtonPressed {
            button: MouseButton::Left,
            position: Point::new(20.0, 100.0),
        },
        now,
    );
    now += FRAME;
    dispatch(
        &mut picker,
        &snapshot,
        &mut capture,
        MouseEvent::CursorMoved {
            position: Point::new(20.0, 105.0),
        },
        now,
    );
    dispatch(
        &mut picker,
        &snapshot,
        &mut capture,
        MouseEvent::ButtonReleased {
            button: MouseButton::Left,
            position: Point::new(20.0, 105.0),
        },
        now,
    );
    while picker.tick(now) {
        now += FRAME;
        frame(&picker, &mut snapshot);
    }
    info!(
        selected = picker.selected_item().label(),
        "settled after reverting drag"
    );

    // Wheel down once: steps to Millilitres.
    now += FRAME;
    dispatch(
        &mut picker,
        &snapshot,
        &mut capture,
        MouseEvent::WheelScrolled {
            delta: ScrollDelta::Lines { x: 0.0, y: -1.0 },
            position: Point::new(20.0, 60.0),
        },
        now,
    );
    while picker.tick(now) {
        now += FRAME;
        frame(&picker, &mut snapshot);
    }
    info!(selected = picker.selected_item().label(), "after wheel step");

    // Persistence: save, serialize, "restart", restore.
    let mut registry = SavedStateRegistry::new();
    picker.save_into(&mut registry);
    let json = registry.to_json()?;

    let restored_registry = SavedStateRegistry::from_json(&json)?;
    let mut rebuilt = unit_picker()?;
    let adopted = rebuilt.restore_from(&restored_registry);
    info!(
        ?adopted,
        selected = rebuilt.selected_item().label(),
        "selection survived reconstruction"
    );

    Ok(())
}
