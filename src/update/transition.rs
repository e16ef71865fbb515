//! Transition engine
//!
//! Starting a transition mutates visibility state synchronously and returns
//! a `Cmd::Animate`; the animation driver reports back with
//! `Msg::TransitionFinished`, which settles the model and notifies the
//! delegate.

use std::time::Duration;

use crate::commands::{Cmd, MenuEvent, PanelAnimation, TransitionCompletion};
use crate::layout::set_status_bar_hidden;
use crate::model::{MenuModel, ShowingSide, Side, TransitionState};

/// Start a reveal or hide transition
///
/// When hiding, the panel that is actually showing is animated out, which
/// is not necessarily `side`.
///
/// Callers are responsible for the in-progress guard.
pub fn begin_transition(
    model: &mut MenuModel,
    reveal: bool,
    side: Side,
    status_update_animated: bool,
) -> Cmd {
    let side = if reveal {
        side
    } else {
        model.showing.side().unwrap_or(side)
    };

    model.transition = TransitionState::InProgress;
    model.showing = if reveal {
        ShowingSide::from(side)
    } else {
        ShowingSide::None
    };

    tracing::debug!(target: "transition", reveal, ?side, "transition started");

    let mut cmds = Vec::new();
    set_status_bar_hidden(model, reveal, status_update_animated, &mut cmds);

    let layout = model.layout();
    layout.before_transition(model, reveal, side, &mut cmds);

    let from = model.presented_frames();
    let to = layout.transition_target(model, reveal, side);
    let duration = transition_duration(model, reveal, side);
    model.apply_frames(&to);

    cmds.push(Cmd::Animate(PanelAnimation {
        duration,
        from,
        to,
        completion: TransitionCompletion { reveal, side },
    }));

    Cmd::batch(cmds).unwrap_or_default()
}

/// Configured duration, shortened by a pending flick
///
/// A flick moving at `v` points per second covers the panel in `width / v`
/// seconds; the animation never runs slower than that. The flick velocity
/// is consumed.
pub fn transition_duration(model: &mut MenuModel, reveal: bool, side: Side) -> Duration {
    let configured = model.prefs.animating.duration(reveal);
    let velocity = std::mem::take(&mut model.flick_velocity);

    if velocity == 0.0 || !velocity.is_finite() {
        return configured;
    }

    let width = model.panel_width(side).max(0.0);
    match Duration::try_from_secs_f32(width / velocity.abs()) {
        Ok(flick) => flick.min(configured),
        Err(_) => configured,
    }
}

/// Settle a finished transition
pub fn finish_transition(model: &mut MenuModel, completion: TransitionCompletion) -> Option<Cmd> {
    if !model.is_transition_in_progress() {
        tracing::warn!(target: "transition", ?completion, "completion without a transition in flight");
        return None;
    }

    let TransitionCompletion { reveal, .. } = completion;
    let mut cmds = Vec::new();

    if !reveal {
        model.layout().prepare_for_display(model, false, &mut cmds);
    }

    model.transition = TransitionState::Idle;
    model.center_interactive = !reveal;
    cmds.push(Cmd::SetCenterInteraction(!reveal));
    cmds.push(Cmd::Notify(if reveal {
        MenuEvent::Revealed
    } else {
        MenuEvent::Hidden
    }));

    tracing::debug!(target: "transition", ?completion, "transition finished");
    Cmd::batch(cmds)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;
    use crate::model::{DeviceIdiom, Size};

    fn model() -> MenuModel {
        MenuModel::new(
            Preferences::default(),
            Size::new(375.0, 667.0),
            DeviceIdiom::Phone,
        )
    }

    #[test]
    fn test_duration_without_flick_is_configured() {
        let mut model = model();
        assert_eq!(
            transition_duration(&mut model, true, Side::Left),
            Duration::from_millis(300)
        );
        assert_eq!(
            transition_duration(&mut model, false, Side::Left),
            Duration::from_millis(200)
        );
    }

    #[test]
    fn test_fast_flick_shortens_duration_and_is_consumed() {
        let mut model = model();
        model.flick_velocity = -3000.0;
        let duration = transition_duration(&mut model, true, Side::Left);
        assert!((duration.as_secs_f32() - 0.1).abs() < 1e-4);
        assert_eq!(model.flick_velocity, 0.0);
    }

    #[test]
    fn test_slow_flick_never_lengthens_duration() {
        let mut model = model();
        model.flick_velocity = 100.0;
        assert_eq!(
            transition_duration(&mut model, true, Side::Left),
            Duration::from_millis(300)
        );
    }

    #[test]
    fn test_zero_width_panel_finishes_instantly() {
        let mut prefs = Preferences::default();
        prefs.drawing.left_side_panel_width = 0.0;
        let mut model = MenuModel::new(prefs, Size::new(375.0, 667.0), DeviceIdiom::Phone);
        model.flick_velocity = 500.0;
        assert_eq!(
            transition_duration(&mut model, true, Side::Left),
            Duration::ZERO
        );
    }

    #[test]
    fn test_stale_completion_is_ignored() {
        let mut model = model();
        let completion = TransitionCompletion {
            reveal: true,
            side: Side::Left,
        };
        assert_eq!(finish_transition(&mut model, completion), None);
        assert_eq!(model.transition, TransitionState::Idle);
    }
}
