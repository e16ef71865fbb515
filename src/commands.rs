//! Command types for the Elm-style architecture
//!
//! Commands represent side effects that the runtime performs against the
//! host toolkit after an update.

use std::time::Duration;

use serde::Serialize;

use crate::config::{CenterTransition, StatusBarAnimation};
use crate::model::{ContentId, Rect, Side};

/// Everything a panel animation moves
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct FrameSet {
    pub center: Rect,
    pub left: Rect,
    pub right: Rect,
    pub overlay_alpha: f32,
    /// Present only when the status bar underlay is in use
    pub underlay_alpha: Option<f32>,
    /// Present only when the status bar pans with the center panel
    pub status_bar: Option<Rect>,
}

impl FrameSet {
    pub fn panel(&self, side: Side) -> Rect {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    /// Interpolate toward `to`; `t` is clamped to [0, 1]
    pub fn lerp(&self, to: &FrameSet, t: f32) -> FrameSet {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        FrameSet {
            center: self.center.lerp(&to.center, t),
            left: self.left.lerp(&to.left, t),
            right: self.right.lerp(&to.right, t),
            overlay_alpha: mix(self.overlay_alpha, to.overlay_alpha),
            underlay_alpha: match (self.underlay_alpha, to.underlay_alpha) {
                (Some(a), Some(b)) => Some(mix(a, b)),
                (_, target) => target,
            },
            status_bar: match (self.status_bar, to.status_bar) {
                (Some(a), Some(b)) => Some(a.lerp(&b, t)),
                (_, target) => target,
            },
        }
    }
}

/// What a finished transition settles into
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct TransitionCompletion {
    pub reveal: bool,
    pub side: Side,
}

/// A panel transition handed to the animation driver
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PanelAnimation {
    pub duration: Duration,
    pub from: FrameSet,
    pub to: FrameSet,
    pub completion: TransitionCompletion,
}

/// Delegate notification
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum MenuEvent {
    Revealed,
    Hidden,
}

/// Side effects produced by `update`
#[derive(Debug, Clone, Default, PartialEq)]
pub enum Cmd {
    /// No command - do nothing
    #[default]
    None,
    /// Execute multiple commands in order
    Batch(Vec<Cmd>),

    // === Content attachment ===
    SetPanelHidden { side: Side, hidden: bool },
    AttachPanel { side: Side, content: ContentId },
    ReplaceCenter {
        content: ContentId,
        transition: Option<CenterTransition>,
    },
    InstallMenuButtons {
        image: String,
        accessibility_identifier: Option<String>,
    },

    // === Presentation ===
    SetCenterFrame(Rect),
    SetPanelFrame { side: Side, frame: Rect },
    /// Insert the dimming overlay above the center panel, below the side panels
    InsertOverlay {
        frame: Rect,
        color: [f32; 4],
        alpha: f32,
    },
    RemoveOverlay,
    SetOverlayAlpha(f32),
    SetOverlayFrame(Rect),
    /// Move a side panel behind the center panel in z-order
    SendPanelToBack(Side),
    SetCenterShadow { opacity: f32 },
    SetCenterInteraction(bool),
    /// The pan recognizer should report future translation relative to now
    ResetPanTranslation,

    // === Status bar ===
    SetStatusBarHidden {
        hidden: bool,
        animated: bool,
        animation: StatusBarAnimation,
    },
    SetUnderlayAlpha(f32),
    MoveStatusBar(Rect),

    // === Transitions ===
    Animate(PanelAnimation),
    /// Move the end state of the running animation without restarting it
    RetargetAnimation(FrameSet),
    Notify(MenuEvent),
}

impl Cmd {
    /// Collapse a list of commands: `None` when empty, the command itself
    /// when there is only one
    pub fn batch(cmds: Vec<Cmd>) -> Option<Cmd> {
        let mut cmds: Vec<Cmd> = cmds
            .into_iter()
            .filter(|cmd| !matches!(cmd, Cmd::None))
            .collect();
        match cmds.len() {
            0 => None,
            1 => cmds.pop(),
            _ => Some(Cmd::Batch(cmds)),
        }
    }

    /// Flatten nested batches into leaf commands, preserving order
    pub fn flatten(self) -> Vec<Cmd> {
        match self {
            Cmd::None => Vec::new(),
            Cmd::Batch(cmds) => cmds.into_iter().flat_map(Cmd::flatten).collect(),
            cmd => vec![cmd],
        }
    }

    /// The animation started by this command, if any
    pub fn animation(&self) -> Option<&PanelAnimation> {
        match self {
            Cmd::Animate(animation) => Some(animation),
            Cmd::Batch(cmds) => cmds.iter().find_map(Cmd::animation),
            _ => None,
        }
    }
}
