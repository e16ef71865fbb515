//! Gesture interpreter tests
//!
//! Drag and swipe handling for both layout modes, including the reveal/hide
//! decision at drag end.

mod common;

use common::*;
use sidemenu::commands::{Cmd, TransitionCompletion};
use sidemenu::messages::{GesturePhase, Msg, SwipeDirection};
use sidemenu::model::{ShowingSide, Side, SidePanelPosition, TransitionState};
use sidemenu::update::update;

/// Drag from rest: begin, one live sample, then release
fn drag(model: &mut sidemenu::MenuModel, translation: f32, velocity: f32) -> Option<Cmd> {
    update(model, pan(GesturePhase::Began, 0.0, velocity));
    update(model, pan(GesturePhase::Changed, translation, velocity));
    update(model, pan(GesturePhase::Ended, 0.0, velocity))
}

// ========================================================================
// Under-center
// ========================================================================

#[test]
fn test_under_pan_began_picks_side_from_velocity() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    let cmds = leaves(update(&mut model, pan(GesturePhase::Began, 0.0, 120.0)));
    assert_eq!(model.showing, ShowingSide::Left);
    assert_eq!(model.transition, TransitionState::Idle);
    assert!(!model.left.hidden);
    assert!(cmds.contains(&Cmd::SendPanelToBack(Side::Right)));

    let mut model = test_model(SidePanelPosition::UnderCenter);
    update(&mut model, pan(GesturePhase::Began, 0.0, -120.0));
    assert_eq!(model.showing, ShowingSide::Right);
}

#[test]
fn test_under_pan_changed_moves_center() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    update(&mut model, pan(GesturePhase::Began, 0.0, 100.0));
    let cmds = leaves(update(&mut model, pan(GesturePhase::Changed, 45.0, 100.0)));

    assert_eq!(model.center_frame.x, 45.0);
    assert!(cmds.contains(&Cmd::ResetPanTranslation));

    update(&mut model, pan(GesturePhase::Changed, 30.0, 100.0));
    assert_eq!(model.center_frame.x, 75.0);
}

#[test]
fn test_under_open_left_past_threshold_reveals() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    update(&mut model, pan(GesturePhase::Began, 0.0, 10.0));
    update(&mut model, pan(GesturePhase::Changed, 70.0, 10.0));
    let cmd = update(&mut model, pan(GesturePhase::Ended, 0.0, 10.0));

    assert_eq!(
        completion_of(&cmd),
        Some(TransitionCompletion {
            reveal: true,
            side: Side::Left
        })
    );
    let animation = cmd.as_ref().and_then(Cmd::animation).unwrap();
    assert_eq!(animation.from.center.x, 70.0);
    assert_eq!(animation.to.center.x, 300.0);
}

#[test]
fn test_under_open_left_short_of_threshold_hides() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    let cmd = drag(&mut model, 50.0, 10.0);

    assert_eq!(
        completion_of(&cmd),
        Some(TransitionCompletion {
            reveal: false,
            side: Side::Left
        })
    );
    assert_eq!(model.showing, ShowingSide::None);
    finish(&mut model, &cmd);
    assert_eq!(model.center_frame.x, 0.0);
    assert!(model.left.hidden);
}

#[test]
fn test_under_close_left_needs_little_travel() {
    let mut model = open_model(SidePanelPosition::UnderCenter, Side::Left);
    // 300 -> 230 is below the 240 needed to stay open
    let cmd = drag(&mut model, -70.0, -10.0);
    assert_eq!(completion_of(&cmd).map(|c| c.reveal), Some(false));

    let mut model = open_model(SidePanelPosition::UnderCenter, Side::Left);
    let cmd = drag(&mut model, -40.0, -10.0);
    assert_eq!(completion_of(&cmd).map(|c| c.reveal), Some(true));
}

#[test]
fn test_under_open_right() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    let cmd = drag(&mut model, -100.0, -10.0);
    assert_eq!(
        completion_of(&cmd),
        Some(TransitionCompletion {
            reveal: true,
            side: Side::Right
        })
    );

    let mut model = test_model(SidePanelPosition::UnderCenter);
    let cmd = drag(&mut model, -40.0, -10.0);
    assert_eq!(completion_of(&cmd).map(|c| c.reveal), Some(false));
}

#[test]
fn test_under_sample_outside_panel_is_ignored() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    update(&mut model, pan(GesturePhase::Began, 0.0, 100.0));
    assert_eq!(update(&mut model, pan(GesturePhase::Changed, -50.0, -100.0)), None);
    assert_eq!(model.center_frame.x, 0.0);

    assert_eq!(update(&mut model, pan(GesturePhase::Changed, 400.0, 100.0)), None);
    assert_eq!(model.center_frame.x, 0.0);
}

#[test]
fn test_fast_release_shortens_animation() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    let cmd = drag(&mut model, 100.0, 3000.0);
    let duration = cmd.as_ref().and_then(Cmd::animation).unwrap().duration;
    assert!((duration.as_secs_f32() - 0.1).abs() < 0.001);
}

// ========================================================================
// Over-center
// ========================================================================

#[test]
fn test_over_pan_with_nothing_showing_does_nothing() {
    let mut model = test_model(SidePanelPosition::OverCenter);
    assert_eq!(drag(&mut model, 100.0, 100.0), None);
    assert_eq!(model.showing, ShowingSide::None);
    assert!(!model.overlay_inserted);
}

#[test]
fn test_over_drag_left_panel_back_hides() {
    let mut model = open_model(SidePanelPosition::OverCenter, Side::Left);
    update(&mut model, pan(GesturePhase::Began, 0.0, -50.0));
    let cmds = leaves(update(&mut model, pan(GesturePhase::Changed, -100.0, -50.0)));

    assert_eq!(model.left.frame.x, -100.0);
    assert!((model.overlay_alpha - 200.0 / 300.0).abs() < 1e-5);
    assert!(cmds.contains(&Cmd::SetPanelFrame {
        side: Side::Left,
        frame: model.left.frame,
    }));

    let cmd = update(&mut model, pan(GesturePhase::Ended, 0.0, -50.0));
    assert_eq!(completion_of(&cmd).map(|c| c.reveal), Some(false));
    let animation = cmd.as_ref().and_then(Cmd::animation).unwrap();
    assert_eq!(animation.from.left.x, -100.0);
    assert_eq!(animation.to.left.x, -300.0);
}

#[test]
fn test_over_drag_released_toward_open_reveals() {
    let mut model = open_model(SidePanelPosition::OverCenter, Side::Left);
    update(&mut model, pan(GesturePhase::Began, 0.0, -50.0));
    update(&mut model, pan(GesturePhase::Changed, -100.0, -50.0));
    let cmd = update(&mut model, pan(GesturePhase::Ended, 0.0, 50.0));

    assert_eq!(completion_of(&cmd).map(|c| c.reveal), Some(true));
    assert_eq!(model.showing, ShowingSide::Left);
    assert_eq!(cmd.as_ref().and_then(Cmd::animation).unwrap().to.left.x, 0.0);
}

#[test]
fn test_over_drag_right_panel() {
    let mut model = open_model(SidePanelPosition::OverCenter, Side::Right);
    update(&mut model, pan(GesturePhase::Began, 0.0, 80.0));
    update(&mut model, pan(GesturePhase::Changed, 50.0, 80.0));
    assert_eq!(model.right.frame.x, 125.0);
    assert!((model.overlay_alpha - (1.0 - 50.0 / 300.0)).abs() < 1e-5);

    // Dragging past the docked position is ignored
    assert_eq!(update(&mut model, pan(GesturePhase::Changed, -80.0, -80.0)), None);
    assert_eq!(model.right.frame.x, 125.0);

    let cmd = update(&mut model, pan(GesturePhase::Ended, 0.0, 80.0));
    assert_eq!(completion_of(&cmd).map(|c| c.reveal), Some(false));
}

// ========================================================================
// Transition guard and preferences
// ========================================================================

#[test]
fn test_pan_during_transition() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    update(&mut model, Msg::Toggle(Side::Left));

    assert_eq!(update(&mut model, pan(GesturePhase::Began, 0.0, -10.0)), None);
    assert_eq!(update(&mut model, pan(GesturePhase::Ended, 0.0, -10.0)), None);
    assert_eq!(model.showing, ShowingSide::Left);

    // Live samples still move the center
    update(&mut model, pan(GesturePhase::Changed, -50.0, -10.0));
    assert_eq!(model.center_frame.x, 250.0);
}

#[test]
fn test_panning_disabled() {
    let mut prefs = prefs(SidePanelPosition::UnderCenter);
    prefs.interaction.panning_enabled = false;
    let mut model = model_with_prefs(prefs);
    assert_eq!(drag(&mut model, 100.0, 100.0), None);
    assert_eq!(model.showing, ShowingSide::None);
}

#[test]
fn test_non_finite_velocity_is_not_recorded() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    update(&mut model, pan(GesturePhase::Changed, 0.0, f32::NAN));
    assert_eq!(model.flick_velocity, 0.0);
}

// ========================================================================
// Swipes
// ========================================================================

#[test]
fn test_swipe_ignored_under_center() {
    let mut model = test_model(SidePanelPosition::UnderCenter);
    assert_eq!(update(&mut model, Msg::Swipe(SwipeDirection::Right)), None);
}

#[test]
fn test_over_swipe_opens_and_closes() {
    let mut model = test_model(SidePanelPosition::OverCenter);
    let cmd = update(&mut model, Msg::Swipe(SwipeDirection::Right));
    assert_eq!(
        completion_of(&cmd),
        Some(TransitionCompletion {
            reveal: true,
            side: Side::Left
        })
    );
    assert!(model.overlay_inserted);
    finish(&mut model, &cmd);

    // Swiping further out does nothing
    assert_eq!(update(&mut model, Msg::Swipe(SwipeDirection::Right)), None);

    let cmd = update(&mut model, Msg::Swipe(SwipeDirection::Left));
    assert_eq!(completion_of(&cmd).map(|c| c.reveal), Some(false));
    assert_eq!(model.showing, ShowingSide::None);
}

#[test]
fn test_over_swipe_left_opens_right() {
    let mut model = test_model(SidePanelPosition::OverCenter);
    update(&mut model, Msg::Swipe(SwipeDirection::Left));
    assert_eq!(model.showing, ShowingSide::Right);

    // Dropped mid-transition
    assert_eq!(update(&mut model, Msg::Swipe(SwipeDirection::Right)), None);
}

#[test]
fn test_swiping_disabled() {
    let mut prefs = prefs(SidePanelPosition::OverCenter);
    prefs.interaction.swiping_enabled = false;
    let mut model = model_with_prefs(prefs);
    assert_eq!(update(&mut model, Msg::Swipe(SwipeDirection::Right)), None);
}
