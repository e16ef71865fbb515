//! Gesture interpreter
//!
//! Pan samples are routed to the layout strategy phase by phase. Live
//! `Changed` updates are honoured even while a transition is animating;
//! `Began` side inference and `Ended` commits are not.

use crate::commands::Cmd;
use crate::messages::{GesturePhase, PanSample, SwipeDirection};
use crate::model::{MenuModel, Side};

use super::transition::begin_transition;

pub fn update_pan(model: &mut MenuModel, sample: PanSample) -> Option<Cmd> {
    if !model.prefs.interaction.panning_enabled || !model.can_display_side_panels() {
        return None;
    }

    if sample.velocity.is_finite() {
        model.flick_velocity = sample.velocity;
    }
    let left_to_right = sample.velocity > 0.0;
    let layout = model.layout();
    let mut cmds = Vec::new();

    match sample.phase {
        GesturePhase::Began => {
            if model.is_transition_in_progress() {
                tracing::debug!(target: "gesture", "drag began during transition, ignored");
                return None;
            }
            layout.pan_began(model, left_to_right, &mut cmds);
        }
        GesturePhase::Changed => {
            if !sample.translation.is_finite() {
                return None;
            }
            layout.pan_changed(model, sample.translation, &mut cmds);
        }
        GesturePhase::Ended | GesturePhase::Cancelled => {
            if model.is_transition_in_progress() {
                tracing::debug!(target: "gesture", "drag ended during transition, ignored");
                return None;
            }
            let side = model.showing.side()?;
            let reveal = layout.pan_reveal(model, side, left_to_right);
            tracing::debug!(target: "gesture", ?side, left_to_right, reveal, "drag committed");
            cmds.push(begin_transition(model, reveal, side, true));
        }
    }

    Cmd::batch(cmds)
}

/// Side a swipe acts on: the showing side, or the one it would reveal
fn swipe_side(model: &MenuModel, direction: SwipeDirection) -> Side {
    model.showing.side().unwrap_or(match direction {
        SwipeDirection::Right => Side::Left,
        SwipeDirection::Left => Side::Right,
    })
}

/// Swiping toward a panel's hidden edge closes it; swiping away opens it
pub fn update_swipe(model: &mut MenuModel, direction: SwipeDirection) -> Option<Cmd> {
    let layout = model.layout();
    if !model.prefs.interaction.swiping_enabled
        || !layout.accepts_swipe()
        || !model.can_display_side_panels()
    {
        return None;
    }
    if model.is_transition_in_progress() {
        tracing::debug!(target: "gesture", ?direction, "swipe dropped, transition in progress");
        return None;
    }

    let side = swipe_side(model, direction);
    let to_left = direction == SwipeDirection::Left;
    let closes = to_left == (side == Side::Left);

    match (closes, model.showing.is_none()) {
        (true, false) => Some(begin_transition(model, false, side, true)),
        (false, true) => {
            let mut cmds = Vec::new();
            layout.prepare_for_display(model, true, &mut cmds);
            cmds.push(begin_transition(model, true, side, true));
            Cmd::batch(cmds)
        }
        _ => None,
    }
}
