//! Side panels sliding over the center panel
//!
//! The center panel stays put. A revealed panel docks at the screen edge
//! while an overlay dims the center content; both move in lockstep.

use crate::commands::{Cmd, FrameSet};
use crate::model::{ratio, MenuModel, Side, SidePanelPosition};

use super::{set_panels_hidden, set_status_bar_hidden, set_underlay_alpha, PanelLayout};

#[derive(Debug, Clone, Copy, Default)]
pub struct OverCenter;

impl PanelLayout for OverCenter {
    fn position(&self) -> SidePanelPosition {
        SidePanelPosition::OverCenter
    }

    fn prepare_for_display(&self, model: &mut MenuModel, display: bool, cmds: &mut Vec<Cmd>) {
        set_panels_hidden(model, !display, cmds);

        if display && !model.overlay_inserted {
            model.overlay_inserted = true;
            model.overlay_alpha = 0.0;
            cmds.push(Cmd::InsertOverlay {
                frame: model.center_frame,
                color: model.prefs.drawing.center_panel_overlay_color,
                alpha: 0.0,
            });
        } else if !display && model.overlay_inserted {
            model.overlay_inserted = false;
            cmds.push(Cmd::RemoveOverlay);
        }
    }

    fn transition_target(&self, model: &MenuModel, reveal: bool, side: Side) -> FrameSet {
        let mut target = model.presented_frames();
        let panel = model.panel(side).frame;
        let screen_width = model.screen.width;

        let x = match (side, reveal) {
            (Side::Left, true) => 0.0,
            (Side::Left, false) => -panel.width,
            (Side::Right, true) => screen_width - panel.width,
            (Side::Right, false) => screen_width,
        };
        match side {
            Side::Left => target.left = panel.with_x(x),
            Side::Right => target.right = panel.with_x(x),
        }

        let alpha = if reveal { 1.0 } else { 0.0 };
        target.overlay_alpha = alpha;
        target.underlay_alpha = target.underlay_alpha.map(|_| alpha);
        target
    }

    fn pan_began(&self, model: &mut MenuModel, _left_to_right: bool, cmds: &mut Vec<Cmd>) {
        // The drag recognizers live on the panels themselves; a hidden panel
        // cannot be grabbed.
        if model.showing.is_none() {
            return;
        }
        self.prepare_for_display(model, true, cmds);
        set_status_bar_hidden(model, true, true, cmds);
    }

    fn pan_changed(&self, model: &mut MenuModel, translation: f32, cmds: &mut Vec<Cmd>) {
        let Some(side) = model.showing.side() else {
            return;
        };

        let panel = model.panel(side).frame;
        let width = panel.width;
        let screen_width = model.screen.width;

        // The panel edge facing the center content
        let alpha = match side {
            Side::Left => {
                let edge = panel.max_x() + translation;
                if edge <= 0.0 || edge > width {
                    tracing::trace!(target: "gesture", edge, "drag sample outside panel, ignored");
                    return;
                }
                ratio(edge, width)
            }
            Side::Right => {
                let edge = panel.min_x() + translation;
                let docked_x = screen_width - width;
                if edge <= docked_x || edge >= screen_width {
                    tracing::trace!(target: "gesture", edge, "drag sample outside panel, ignored");
                    return;
                }
                ratio(edge - docked_x, width).map(|r| 1.0 - r)
            }
        };
        let Some(alpha) = alpha else {
            return;
        };
        let alpha = alpha.clamp(0.0, 1.0);

        set_underlay_alpha(model, alpha, cmds);
        model.overlay_alpha = alpha;
        cmds.push(Cmd::SetOverlayAlpha(alpha));

        let frame = panel.offset_x(translation);
        model.panel_mut(side).frame = frame;
        cmds.push(Cmd::SetPanelFrame { side, frame });
        cmds.push(Cmd::ResetPanTranslation);
    }

    fn pan_reveal(&self, model: &MenuModel, side: Side, left_to_right: bool) -> bool {
        let panel = model.panel(side).frame;
        let width = panel.width;

        let should_close = match side {
            Side::Left => !left_to_right && panel.max_x() < width,
            Side::Right => left_to_right && panel.min_x() > model.screen.width - width,
        };
        !should_close
    }

    fn accepts_swipe(&self) -> bool {
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Preferences;
    use crate::model::{ContentId, DeviceIdiom, ShowingSide, Size};

    fn model() -> MenuModel {
        let mut prefs = Preferences::default();
        prefs.drawing.side_panel_position = SidePanelPosition::OverCenter;
        let mut model = MenuModel::new(prefs, Size::new(375.0, 667.0), DeviceIdiom::Phone);
        model.left.content = Some(ContentId(1));
        model.right.content = Some(ContentId(2));
        model
    }

    #[test]
    fn test_hidden_panels_rest_off_screen() {
        let model = model();
        assert_eq!(model.left.frame.max_x(), 0.0);
        assert_eq!(model.right.frame.x, 375.0);
    }

    #[test]
    fn test_reveal_right_docks_at_screen_edge() {
        let model = model();
        let target = OverCenter.transition_target(&model, true, Side::Right);
        assert_eq!(target.right.x, 75.0);
        assert_eq!(target.overlay_alpha, 1.0);
        assert_eq!(target.center, model.center_frame);
    }

    #[test]
    fn test_left_closes_only_when_dragged_back() {
        let mut model = model();
        model.showing = ShowingSide::Left;
        model.left.frame = model.left.frame.with_x(-40.0);
        assert!(!OverCenter.pan_reveal(&model, Side::Left, false));
        // same position, but still moving outward
        assert!(OverCenter.pan_reveal(&model, Side::Left, true));
    }

    #[test]
    fn test_changed_drives_overlay_alpha() {
        let mut model = model();
        model.showing = ShowingSide::Left;
        model.overlay_inserted = true;
        model.left.frame = model.left.frame.with_x(0.0);
        let mut cmds = Vec::new();
        OverCenter.pan_changed(&mut model, -150.0, &mut cmds);
        assert_eq!(model.overlay_alpha, 0.5);
        assert_eq!(model.left.frame.x, -150.0);
        assert_eq!(cmds.last(), Some(&Cmd::ResetPanTranslation));
    }
}
