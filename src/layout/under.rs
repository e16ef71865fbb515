//! Side panels docked under the center panel
//!
//! The side panels never move. Revealing slides the center panel by one
//! panel width; dragging moves the center panel directly.

use crate::commands::{Cmd, FrameSet};
use crate::model::{ratio, MenuModel, Rect, ShowingSide, Side, SidePanelPosition};

use super::{
    set_center_frame, set_panels_hidden, set_status_bar_hidden, set_underlay_alpha, PanelLayout,
    CENTER_SHADOW_OPACITY, SHOULD_HIDE_FRACTION, SHOULD_OPEN_FRACTION,
};

#[derive(Debug, Clone, Copy, Default)]
pub struct UnderCenter;

impl UnderCenter {
    fn set_shadow_visible(&self, model: &mut MenuModel, visible: bool, cmds: &mut Vec<Cmd>) {
        if !model.prefs.drawing.center_panel_shadow {
            return;
        }
        let opacity = if visible { CENTER_SHADOW_OPACITY } else { 0.0 };
        model.shadow_opacity = opacity;
        cmds.push(Cmd::SetCenterShadow { opacity });
    }
}

impl PanelLayout for UnderCenter {
    fn position(&self) -> SidePanelPosition {
        SidePanelPosition::UnderCenter
    }

    fn prepare_for_display(&self, model: &mut MenuModel, display: bool, cmds: &mut Vec<Cmd>) {
        set_panels_hidden(model, !display, cmds);
        self.set_shadow_visible(model, display, cmds);
    }

    fn before_transition(&self, _model: &MenuModel, reveal: bool, side: Side, cmds: &mut Vec<Cmd>) {
        if reveal {
            cmds.push(Cmd::SendPanelToBack(side.opposite()));
        }
    }

    fn transition_target(&self, model: &MenuModel, reveal: bool, side: Side) -> FrameSet {
        let mut target = model.presented_frames();
        let center = model.center_frame;

        target.center = if !reveal {
            Rect::new(0.0, 0.0, center.width, center.height)
        } else {
            let panel = model.resting_panel_frame(side);
            match side {
                Side::Left => center.with_x(panel.max_x()),
                Side::Right => center.with_x(panel.min_x() - center.width),
            }
        };

        let alpha = if reveal { 1.0 } else { 0.0 };
        target.underlay_alpha = target.underlay_alpha.map(|_| alpha);
        target.status_bar = target.status_bar.map(|_| target.center);
        target
    }

    fn pan_began(&self, model: &mut MenuModel, left_to_right: bool, cmds: &mut Vec<Cmd>) {
        if model.showing.is_none() {
            let side = if left_to_right { Side::Left } else { Side::Right };
            tracing::debug!(target: "gesture", ?side, "drag picked side");
            model.showing = ShowingSide::from(side);
            self.prepare_for_display(model, true, cmds);
        }

        if let Some(side) = model.showing.side() {
            cmds.push(Cmd::SendPanelToBack(side.opposite()));
        }

        set_status_bar_hidden(model, true, true, cmds);
    }

    fn pan_changed(&self, model: &mut MenuModel, translation: f32, cmds: &mut Vec<Cmd>) {
        let Some(side) = model.showing.side() else {
            return;
        };

        let panel = model.resting_panel_frame(side);
        let center = model.center_frame;

        // The center edge facing the showing panel
        let edge = match side {
            Side::Left => center.min_x() + translation,
            Side::Right => center.max_x() + translation,
        };

        if edge < panel.min_x() || edge > panel.max_x() {
            tracing::trace!(target: "gesture", edge, "drag sample outside panel, ignored");
            return;
        }

        let alpha = match side {
            Side::Left => ratio(edge, panel.width),
            Side::Right => ratio(edge - panel.min_x(), panel.width).map(|r| 1.0 - r),
        };
        let Some(alpha) = alpha else {
            return;
        };

        set_underlay_alpha(model, alpha, cmds);
        set_center_frame(model, center.offset_x(translation), cmds);
        cmds.push(Cmd::ResetPanTranslation);
    }

    fn pan_reveal(&self, model: &MenuModel, side: Side, left_to_right: bool) -> bool {
        let center = model.center_frame;
        let panel = model.resting_panel_frame(side);

        match (side, left_to_right) {
            // opening
            (Side::Left, true) => center.min_x() > panel.width * SHOULD_OPEN_FRACTION,
            // closing
            (Side::Left, false) => center.min_x() > panel.width * SHOULD_HIDE_FRACTION,
            // closing
            (Side::Right, true) => {
                center.max_x() < panel.min_x() + SHOULD_OPEN_FRACTION * panel.width
            }
            // opening
            (Side::Right, false) => {
                center.max_x() < panel.min_x() + SHOULD_HIDE_FRACTION * panel.width
            }
        }
    }
}
