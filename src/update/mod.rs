//! Update functions for the Elm-style architecture
//!
//! All state transformations flow through these functions.

mod content;
mod gesture;
mod toggle;
mod transition;

use crate::commands::Cmd;
use crate::messages::Msg;
use crate::model::MenuModel;

#[cfg(debug_assertions)]
use crate::tracing::StateSnapshot;
#[cfg(debug_assertions)]
use tracing::{debug, span, Level};

pub use content::{update_embed_center, update_embed_sides, update_resize};
pub use gesture::{update_pan, update_swipe};
pub use toggle::{update_tap, update_toggle, update_will_disappear};
pub use transition::{begin_transition, finish_transition, transition_duration};

/// Main update function - dispatches to sub-handlers
///
/// In debug builds, this wraps with tracing instrumentation.
/// In release builds, it's a direct dispatch with zero overhead.
#[inline]
pub fn update(model: &mut MenuModel, msg: Msg) -> Option<Cmd> {
    #[cfg(debug_assertions)]
    {
        update_traced(model, msg)
    }
    #[cfg(not(debug_assertions))]
    {
        update_inner(model, msg)
    }
}

fn update_inner(model: &mut MenuModel, msg: Msg) -> Option<Cmd> {
    match msg {
        Msg::Toggle(side) => toggle::update_toggle(model, side),
        Msg::Pan(sample) => gesture::update_pan(model, sample),
        Msg::Swipe(direction) => gesture::update_swipe(model, direction),
        Msg::Tap => toggle::update_tap(model),
        Msg::Resize { size, idiom } => content::update_resize(model, size, idiom),
        Msg::EmbedSides { left, right } => content::update_embed_sides(model, left, right),
        Msg::EmbedCenter {
            content,
            navigation,
        } => content::update_embed_center(model, content, navigation),
        Msg::WillDisappear => toggle::update_will_disappear(model),
        Msg::TransitionFinished(completion) => transition::finish_transition(model, completion),
    }
}

/// Traced update wrapper (debug builds only)
///
/// Logs state diffs and checks model invariants after every message.
/// Live drag samples are only logged at trace level.
#[cfg(debug_assertions)]
fn update_traced(model: &mut MenuModel, msg: Msg) -> Option<Cmd> {
    use crate::messages::GesturePhase;

    let is_noisy = matches!(&msg, Msg::Pan(sample) if sample.phase == GesturePhase::Changed);

    let msg_name = format!("{:?}", msg);
    let _span = if is_noisy {
        None
    } else {
        Some(span!(Level::DEBUG, "update", msg = %msg_name).entered())
    };

    let before = StateSnapshot::from_model(model);
    let result = update_inner(model, msg);
    let after = StateSnapshot::from_model(model);

    if let Some(diff) = before.diff(&after) {
        if is_noisy {
            tracing::trace!(target: "state", %diff, "state changed");
        } else {
            debug!(target: "state", %diff, "state changed");
        }
    }

    model.assert_invariants();
    result
}
