//! Layout strategies
//!
//! The side panels either sit under the center panel (the center slides
//! away to expose them) or slide over it (with a dimming overlay on the
//! center content). The mode is fixed per model; everything that differs
//! between the two lives behind [`PanelLayout`]:
//!
//! - frame targets for a reveal or hide transition
//! - preparing panels for display (shadow vs. overlay)
//! - live drag updates and the drag-end commit decision
//! - whether discrete swipes are recognised

mod over;
mod under;

pub use over::OverCenter;
pub use under::UnderCenter;

use crate::commands::{Cmd, FrameSet};
use crate::model::{MenuModel, Rect, Side, SidePanelPosition};

/// Drag distance, as a fraction of panel width, that commits a drag in its
/// natural direction
pub const SHOULD_OPEN_FRACTION: f32 = 0.2;
/// Drag distance, as a fraction of panel width, that must remain to keep a
/// panel open when dragging against its natural direction
pub const SHOULD_HIDE_FRACTION: f32 = 0.8;

/// Shadow opacity of the center panel while a panel is prepared
pub const CENTER_SHADOW_OPACITY: f32 = 0.8;

pub trait PanelLayout: Sync {
    fn position(&self) -> SidePanelPosition;

    /// Unhide (or hide) both side panels along with their decoration
    fn prepare_for_display(&self, model: &mut MenuModel, display: bool, cmds: &mut Vec<Cmd>);

    /// Z-order adjustments issued right before a transition animates
    fn before_transition(&self, _model: &MenuModel, _reveal: bool, _side: Side, _cmds: &mut Vec<Cmd>) {
    }

    /// Where a reveal or hide of `side` ends up
    fn transition_target(&self, model: &MenuModel, reveal: bool, side: Side) -> FrameSet;

    fn pan_began(&self, model: &mut MenuModel, left_to_right: bool, cmds: &mut Vec<Cmd>);

    /// Apply one incremental drag delta; out-of-bounds samples are ignored
    fn pan_changed(&self, model: &mut MenuModel, translation: f32, cmds: &mut Vec<Cmd>);

    /// Drag-end decision for the showing `side`: `true` keeps it revealed
    fn pan_reveal(&self, model: &MenuModel, side: Side, left_to_right: bool) -> bool;

    fn accepts_swipe(&self) -> bool {
        false
    }
}

static UNDER_CENTER: UnderCenter = UnderCenter;
static OVER_CENTER: OverCenter = OverCenter;

/// Strategy for a layout mode
pub fn layout_for(position: SidePanelPosition) -> &'static dyn PanelLayout {
    match position {
        SidePanelPosition::UnderCenter => &UNDER_CENTER,
        SidePanelPosition::OverCenter => &OVER_CENTER,
    }
}

// ============================================================================
// Shared presentation helpers
// ============================================================================

pub(crate) fn set_panels_hidden(model: &mut MenuModel, hidden: bool, cmds: &mut Vec<Cmd>) {
    for side in Side::ALL {
        model.panel_mut(side).hidden = hidden;
        cmds.push(Cmd::SetPanelHidden { side, hidden });
    }
}

/// Move the center panel (and the status bar with it when it pans)
pub(crate) fn set_center_frame(model: &mut MenuModel, frame: Rect, cmds: &mut Vec<Cmd>) {
    model.center_frame = frame;
    cmds.push(Cmd::SetCenterFrame(frame));
    if model.status_bar_pans() {
        cmds.push(Cmd::MoveStatusBar(frame));
    }
}

pub(crate) fn set_underlay_alpha(model: &mut MenuModel, alpha: f32, cmds: &mut Vec<Cmd>) {
    if !model.shows_status_underlay() {
        return;
    }
    let alpha = alpha.clamp(0.0, 1.0);
    model.underlay_alpha = alpha;
    cmds.push(Cmd::SetUnderlayAlpha(alpha));
}

pub(crate) fn set_status_bar_hidden(
    model: &mut MenuModel,
    hidden: bool,
    animated: bool,
    cmds: &mut Vec<Cmd>,
) {
    if !model.hides_status_bar() {
        return;
    }
    model.status_bar_hidden = hidden;
    cmds.push(Cmd::SetStatusBarHidden {
        hidden,
        animated,
        animation: model.prefs.animating.status_bar_behaviour.animation(),
    });
}
