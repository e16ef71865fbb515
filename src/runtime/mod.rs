//! Runtime glue between the pure core and a host UI toolkit
//!
//! `SideMenu` owns a [`MenuModel`], runs every message through `update`,
//! and performs the resulting commands against the collaborator traits
//! below. Completions from the animation driver travel back through an
//! in-process channel and are processed on the same thread.

mod animator;
mod recording;

pub use animator::{ease_in_out, linear, CompletionSink, EasingFn, TweenDriver};
pub use recording::{HostCall, RecordingHost};

use std::rc::{Rc, Weak};
use std::sync::mpsc::{self, Receiver, Sender};
use std::time::Duration;

use crate::commands::{Cmd, FrameSet, MenuEvent, PanelAnimation};
use crate::config::{CenterTransition, Preferences, StatusBarAnimation};
use crate::messages::{Msg, PanSample, SwipeDirection};
use crate::model::{ContentId, DeviceIdiom, MenuModel, Rect, Side, Size};
use crate::update::update;

// ============================================================================
// Collaborator interfaces
// ============================================================================

/// Supplies screen geometry; re-queried on size or orientation changes
pub trait GeometryProvider {
    fn screen_size(&self) -> Size;

    fn idiom(&self) -> DeviceIdiom {
        DeviceIdiom::Phone
    }
}

/// Fixed geometry, for headless hosts and tests
#[derive(Debug, Clone, Copy)]
pub struct FixedGeometry {
    pub size: Size,
    pub idiom: DeviceIdiom,
}

impl FixedGeometry {
    pub fn phone(width: f32, height: f32) -> Self {
        Self {
            size: Size::new(width, height),
            idiom: DeviceIdiom::Phone,
        }
    }
}

impl GeometryProvider for FixedGeometry {
    fn screen_size(&self) -> Size {
        self.size
    }

    fn idiom(&self) -> DeviceIdiom {
        self.idiom
    }
}

/// Content attachment and presentation of the three panels
pub trait PanelHost {
    fn set_panel_hidden(&mut self, side: Side, hidden: bool);
    fn attach_panel(&mut self, side: Side, content: ContentId);
    fn replace_center(&mut self, content: ContentId, transition: Option<CenterTransition>);
    fn install_menu_buttons(&mut self, image: &str, accessibility_identifier: Option<&str>);

    fn set_center_frame(&mut self, frame: Rect);
    fn set_panel_frame(&mut self, side: Side, frame: Rect);
    /// `color` is RGBA, each channel in [0, 1]
    fn insert_overlay(&mut self, frame: Rect, color: [f32; 4], alpha: f32);
    fn remove_overlay(&mut self);
    fn set_overlay_alpha(&mut self, alpha: f32);
    fn set_overlay_frame(&mut self, frame: Rect);
    fn send_panel_to_back(&mut self, side: Side);
    fn set_center_shadow(&mut self, opacity: f32);
    fn set_center_interaction(&mut self, enabled: bool);
    fn reset_pan_translation(&mut self);
}

/// Status bar chrome
pub trait StatusBarAdapter {
    fn set_hidden(&mut self, hidden: bool, animated: bool, animation: StatusBarAnimation);
    fn set_underlay_alpha(&mut self, alpha: f32);
    /// Move the status bar window (horizontal-pan behaviour)
    fn move_to(&mut self, frame: Rect);
}

/// Everything `SideMenu` needs from the host toolkit besides animation
pub trait MenuHost: PanelHost + StatusBarAdapter {}

impl<T: PanelHost + StatusBarAdapter> MenuHost for T {}

/// Runs panel animations
///
/// `done` must be completed exactly once, after the last frame of
/// `animation` has been presented. Drivers that animate on their own
/// (e.g. a platform animation API) can ignore `advance`.
pub trait AnimationDriver {
    fn animate(&mut self, animation: PanelAnimation, done: CompletionSink);

    /// Step running animations by `dt`, returning the frame set to present
    fn advance(&mut self, _dt: Duration) -> Option<FrameSet> {
        None
    }

    /// Point the running animation at a new end state
    fn retarget(&mut self, _to: FrameSet) {}

    fn is_animating(&self) -> bool {
        false
    }
}

/// Observer of completed transitions
pub trait MenuDelegate {
    fn on_revealed(&self);
    fn on_hidden(&self);
}

// ============================================================================
// SideMenu
// ============================================================================

pub struct SideMenu<H, A> {
    model: MenuModel,
    host: H,
    animator: A,
    delegate: Option<Weak<dyn MenuDelegate>>,
    msg_tx: Sender<Msg>,
    msg_rx: Receiver<Msg>,
}

impl<H: MenuHost, A: AnimationDriver> SideMenu<H, A> {
    pub fn new(
        prefs: Preferences,
        geometry: &dyn GeometryProvider,
        mut host: H,
        animator: A,
    ) -> Self {
        let model = MenuModel::new(prefs, geometry.screen_size(), geometry.idiom());
        let (msg_tx, msg_rx) = mpsc::channel();

        host.set_center_frame(model.center_frame);
        for side in Side::ALL {
            host.set_panel_frame(side, model.panel(side).frame);
            host.set_panel_hidden(side, true);
        }
        if model.shows_status_underlay() {
            host.set_underlay_alpha(0.0);
        }

        Self {
            model,
            host,
            animator,
            delegate: None,
            msg_tx,
            msg_rx,
        }
    }

    /// Register the delegate without taking ownership of it
    pub fn set_delegate<D: MenuDelegate + 'static>(&mut self, delegate: &Rc<D>) {
        let weak = Rc::downgrade(delegate) as Weak<dyn MenuDelegate>;
        self.delegate = Some(weak);
    }

    pub fn model(&self) -> &MenuModel {
        &self.model
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    pub fn animator(&self) -> &A {
        &self.animator
    }

    /// Process one message, then anything the driver has reported since
    pub fn dispatch(&mut self, msg: Msg) {
        if let Some(cmd) = update(&mut self.model, msg) {
            self.process_cmd(cmd);
        }
        self.pump();
    }

    /// Step the animation driver and present the resulting frame
    pub fn advance(&mut self, dt: Duration) {
        if let Some(frames) = self.animator.advance(dt) {
            self.present(&frames);
        }
        self.pump();
    }

    /// Advance in fixed steps until no animation is running
    pub fn settle(&mut self, step: Duration) {
        if step.is_zero() {
            return;
        }
        while self.animator.is_animating() {
            self.advance(step);
        }
        self.pump();
    }

    pub fn toggle_left(&mut self) {
        self.dispatch(Msg::Toggle(Side::Left));
    }

    pub fn toggle_right(&mut self) {
        self.dispatch(Msg::Toggle(Side::Right));
    }

    pub fn pan(&mut self, sample: PanSample) {
        self.dispatch(Msg::Pan(sample));
    }

    pub fn swipe(&mut self, direction: SwipeDirection) {
        self.dispatch(Msg::Swipe(direction));
    }

    pub fn tap(&mut self) {
        self.dispatch(Msg::Tap);
    }

    pub fn resize(&mut self, geometry: &dyn GeometryProvider) {
        self.dispatch(Msg::Resize {
            size: geometry.screen_size(),
            idiom: Some(geometry.idiom()),
        });
    }

    pub fn embed_sides(&mut self, left: ContentId, right: ContentId) {
        self.dispatch(Msg::EmbedSides { left, right });
    }

    pub fn embed_center(&mut self, content: ContentId, navigation: bool) {
        self.dispatch(Msg::EmbedCenter {
            content,
            navigation,
        });
    }

    pub fn will_disappear(&mut self) {
        self.dispatch(Msg::WillDisappear);
    }

    fn pump(&mut self) {
        while let Ok(msg) = self.msg_rx.try_recv() {
            if let Some(cmd) = update(&mut self.model, msg) {
                self.process_cmd(cmd);
            }
        }
    }

    fn present(&mut self, frames: &FrameSet) {
        self.host.set_center_frame(frames.center);
        self.host.set_panel_frame(Side::Left, frames.left);
        self.host.set_panel_frame(Side::Right, frames.right);
        if self.model.overlay_inserted {
            self.host.set_overlay_alpha(frames.overlay_alpha);
        }
        if let Some(alpha) = frames.underlay_alpha {
            self.host.set_underlay_alpha(alpha);
        }
        if let Some(frame) = frames.status_bar {
            self.host.move_to(frame);
        }
    }

    fn notify(&self, event: MenuEvent) {
        let Some(delegate) = self.delegate.as_ref().and_then(Weak::upgrade) else {
            return;
        };
        match event {
            MenuEvent::Revealed => delegate.on_revealed(),
            MenuEvent::Hidden => delegate.on_hidden(),
        }
    }

    fn process_cmd(&mut self, cmd: Cmd) {
        match cmd {
            Cmd::None => {}
            Cmd::Batch(cmds) => {
                for cmd in cmds {
                    self.process_cmd(cmd);
                }
            }

            Cmd::SetPanelHidden { side, hidden } => self.host.set_panel_hidden(side, hidden),
            Cmd::AttachPanel { side, content } => self.host.attach_panel(side, content),
            Cmd::ReplaceCenter {
                content,
                transition,
            } => self.host.replace_center(content, transition),
            Cmd::InstallMenuButtons {
                image,
                accessibility_identifier,
            } => self
                .host
                .install_menu_buttons(&image, accessibility_identifier.as_deref()),

            Cmd::SetCenterFrame(frame) => self.host.set_center_frame(frame),
            Cmd::SetPanelFrame { side, frame } => self.host.set_panel_frame(side, frame),
            Cmd::InsertOverlay {
                frame,
                color,
                alpha,
            } => self.host.insert_overlay(frame, color, alpha),
            Cmd::RemoveOverlay => self.host.remove_overlay(),
            Cmd::SetOverlayAlpha(alpha) => self.host.set_overlay_alpha(alpha),
            Cmd::SetOverlayFrame(frame) => self.host.set_overlay_frame(frame),
            Cmd::SendPanelToBack(side) => self.host.send_panel_to_back(side),
            Cmd::SetCenterShadow { opacity } => self.host.set_center_shadow(opacity),
            Cmd::SetCenterInteraction(enabled) => self.host.set_center_interaction(enabled),
            Cmd::ResetPanTranslation => self.host.reset_pan_translation(),

            Cmd::SetStatusBarHidden {
                hidden,
                animated,
                animation,
            } => self.host.set_hidden(hidden, animated, animation),
            Cmd::SetUnderlayAlpha(alpha) => self.host.set_underlay_alpha(alpha),
            Cmd::MoveStatusBar(frame) => self.host.move_to(frame),

            Cmd::Animate(animation) => {
                let done = CompletionSink::new(self.msg_tx.clone(), animation.completion);
                self.animator.animate(animation, done);
            }
            Cmd::RetargetAnimation(to) => self.animator.retarget(to),
            Cmd::Notify(event) => self.notify(event),
        }
    }
}
