//! Host that records every call instead of drawing
//!
//! Used by the headless simulator and by tests.

use serde::Serialize;

use crate::config::{CenterTransition, StatusBarAnimation};
use crate::model::{ContentId, Rect, Side};

use super::{PanelHost, StatusBarAdapter};

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "call", rename_all = "snake_case")]
pub enum HostCall {
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
    SetCenterFrame { frame: Rect },
    SetPanelFrame { side: Side, frame: Rect },
    InsertOverlay {
        frame: Rect,
        color: [f32; 4],
        alpha: f32,
    },
    RemoveOverlay,
    SetOverlayAlpha { alpha: f32 },
    SetOverlayFrame { frame: Rect },
    SendPanelToBack { side: Side },
    SetCenterShadow { opacity: f32 },
    SetCenterInteraction { enabled: bool },
    ResetPanTranslation,
    SetStatusBarHidden {
        hidden: bool,
        animated: bool,
        animation: StatusBarAnimation,
    },
    SetUnderlayAlpha { alpha: f32 },
    MoveStatusBar { frame: Rect },
}

#[derive(Debug, Default)]
pub struct RecordingHost {
    calls: Vec<HostCall>,
}

impl RecordingHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn calls(&self) -> &[HostCall] {
        &self.calls
    }

    /// Take all recorded calls, leaving the log empty
    pub fn drain(&mut self) -> Vec<HostCall> {
        std::mem::take(&mut self.calls)
    }

    fn record(&mut self, call: HostCall) {
        tracing::trace!(target: "host", ?call);
        self.calls.push(call);
    }
}

impl PanelHost for RecordingHost {
    fn set_panel_hidden(&mut self, side: Side, hidden: bool) {
        self.record(HostCall::SetPanelHidden { side, hidden });
    }

    fn attach_panel(&mut self, side: Side, content: ContentId) {
        self.record(HostCall::AttachPanel { side, content });
    }

    fn replace_center(&mut self, content: ContentId, transition: Option<CenterTransition>) {
        self.record(HostCall::ReplaceCenter {
            content,
            transition,
        });
    }

    fn install_menu_buttons(&mut self, image: &str, accessibility_identifier: Option<&str>) {
        self.record(HostCall::InstallMenuButtons {
            image: image.to_string(),
            accessibility_identifier: accessibility_identifier.map(str::to_string),
        });
    }

    fn set_center_frame(&mut self, frame: Rect) {
        self.record(HostCall::SetCenterFrame { frame });
    }

    fn set_panel_frame(&mut self, side: Side, frame: Rect) {
        self.record(HostCall::SetPanelFrame { side, frame });
    }

    fn insert_overlay(&mut self, frame: Rect, color: [f32; 4], alpha: f32) {
        self.record(HostCall::InsertOverlay {
            frame,
            color,
            alpha,
        });
    }

    fn remove_overlay(&mut self) {
        self.record(HostCall::RemoveOverlay);
    }

    fn set_overlay_alpha(&mut self, alpha: f32) {
        self.record(HostCall::SetOverlayAlpha { alpha });
    }

    fn set_overlay_frame(&mut self, frame: Rect) {
        self.record(HostCall::SetOverlayFrame { frame });
    }

    fn send_panel_to_back(&mut self, side: Side) {
        self.record(HostCall::SendPanelToBack { side });
    }

    fn set_center_shadow(&mut self, opacity: f32) {
        self.record(HostCall::SetCenterShadow { opacity });
    }

    fn set_center_interaction(&mut self, enabled: bool) {
        self.record(HostCall::SetCenterInteraction { enabled });
    }

    fn reset_pan_translation(&mut self) {
        self.record(HostCall::ResetPanTranslation);
    }
}

impl StatusBarAdapter for RecordingHost {
    fn set_hidden(&mut self, hidden: bool, animated: bool, animation: StatusBarAnimation) {
        self.record(HostCall::SetStatusBarHidden {
            hidden,
            animated,
            animation,
        });
    }

    fn set_underlay_alpha(&mut self, alpha: f32) {
        self.record(HostCall::SetUnderlayAlpha { alpha });
    }

    fn move_to(&mut self, frame: Rect) {
        self.record(HostCall::MoveStatusBar { frame });
    }
}
