//! Shared test helpers for integration tests
//!
//! Note: Functions may appear unused because each test file compiles separately.

#![allow(dead_code)]

use std::time::Duration;

use sidemenu::commands::{Cmd, TransitionCompletion};
use sidemenu::config::Preferences;
use sidemenu::messages::{GesturePhase, Msg, PanSample};
use sidemenu::model::{ContentId, DeviceIdiom, MenuModel, Side, SidePanelPosition, Size};
use sidemenu::runtime::{FixedGeometry, RecordingHost, SideMenu, TweenDriver};
use sidemenu::update::update;

pub const LEFT: ContentId = ContentId(1);
pub const RIGHT: ContentId = ContentId(2);
pub const CENTER: ContentId = ContentId(3);

/// One frame at 60 fps
pub const FRAME: Duration = Duration::from_micros(16_667);

pub fn phone() -> Size {
    Size::new(375.0, 667.0)
}

pub fn prefs(position: SidePanelPosition) -> Preferences {
    let mut prefs = Preferences::default();
    prefs.drawing.side_panel_position = position;
    prefs
}

/// Model with side and center content attached, nothing showing
pub fn model_with_prefs(prefs: Preferences) -> MenuModel {
    let mut model = MenuModel::new(prefs, phone(), DeviceIdiom::Phone);
    update(
        &mut model,
        Msg::EmbedSides {
            left: LEFT,
            right: RIGHT,
        },
    );
    update(
        &mut model,
        Msg::EmbedCenter {
            content: CENTER,
            navigation: false,
        },
    );
    model
}

pub fn test_model(position: SidePanelPosition) -> MenuModel {
    model_with_prefs(prefs(position))
}

/// Deliver the completion of the animation started by `cmd`
pub fn finish(model: &mut MenuModel, cmd: &Option<Cmd>) -> Option<Cmd> {
    let completion = completion_of(cmd).expect("command should start an animation");
    update(model, Msg::TransitionFinished(completion))
}

pub fn completion_of(cmd: &Option<Cmd>) -> Option<TransitionCompletion> {
    cmd.as_ref()
        .and_then(Cmd::animation)
        .map(|animation| animation.completion)
}

/// Model with `side` fully revealed
pub fn open_model(position: SidePanelPosition, side: Side) -> MenuModel {
    let mut model = test_model(position);
    let cmd = update(&mut model, Msg::Toggle(side));
    finish(&mut model, &cmd);
    model
}

pub fn pan(phase: GesturePhase, translation: f32, velocity: f32) -> Msg {
    Msg::Pan(PanSample::new(phase, translation, velocity))
}

/// Flattened leaf commands, for membership checks
pub fn leaves(cmd: Option<Cmd>) -> Vec<Cmd> {
    cmd.map(Cmd::flatten).unwrap_or_default()
}

pub type TestMenu = SideMenu<RecordingHost, TweenDriver>;

/// Runtime menu with content attached and the host log cleared
pub fn test_menu(position: SidePanelPosition) -> TestMenu {
    let mut menu = SideMenu::new(
        prefs(position),
        &FixedGeometry::phone(375.0, 667.0),
        RecordingHost::new(),
        TweenDriver::new(),
    );
    menu.embed_sides(LEFT, RIGHT);
    menu.embed_center(CENTER, false);
    menu.host_mut().drain();
    menu
}
