//! Menu button toggles, center taps and disappearance

use crate::commands::Cmd;
use crate::model::{MenuModel, Side};

use super::transition::begin_transition;

/// Reveal `side` if nothing is showing, otherwise hide whatever is showing
///
/// Dropped while a transition is in flight, and dropped when a reveal is
/// requested before side content has been attached.
pub fn update_toggle(model: &mut MenuModel, side: Side) -> Option<Cmd> {
    if model.is_transition_in_progress() {
        tracing::debug!(target: "transition", ?side, "toggle dropped, transition in progress");
        return None;
    }

    let reveal = model.showing.is_none();
    let mut cmds = Vec::new();

    if reveal {
        if !model.can_display_side_panels() {
            tracing::debug!(target: "transition", ?side, "toggle dropped, side content not attached");
            return None;
        }
        model.layout().prepare_for_display(model, true, &mut cmds);
    }

    cmds.push(begin_transition(model, reveal, side, true));
    Cmd::batch(cmds)
}

/// Tap on the center content hides the showing panel
pub fn update_tap(model: &mut MenuModel) -> Option<Cmd> {
    let side = model.showing.side()?;
    if model.is_transition_in_progress() {
        return None;
    }
    Some(begin_transition(model, false, side, true))
}

/// Close any showing panel before the container leaves the screen
pub fn update_will_disappear(model: &mut MenuModel) -> Option<Cmd> {
    let side = model.showing.side()?;
    update_toggle(model, side)
}
