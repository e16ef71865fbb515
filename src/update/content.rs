//! Content embedding and screen size changes

use crate::commands::Cmd;
use crate::layout::{set_center_frame, set_underlay_alpha};
use crate::model::{ContentId, DeviceIdiom, MenuModel, Side, Size};

use super::transition::begin_transition;

/// Attach side content; a side that already has content keeps it
pub fn update_embed_sides(model: &mut MenuModel, left: ContentId, right: ContentId) -> Option<Cmd> {
    let mut cmds = Vec::new();

    for (side, content) in [(Side::Left, left), (Side::Right, right)] {
        let panel = model.panel_mut(side);
        if panel.content.is_some() {
            continue;
        }
        panel.content = Some(content);
        panel.hidden = true;
        cmds.push(Cmd::AttachPanel { side, content });
        cmds.push(Cmd::SetPanelHidden { side, hidden: true });
    }

    Cmd::batch(cmds)
}

/// Attach or replace the center content
///
/// Replacing content hides any showing panel without animating the status
/// bar.
pub fn update_embed_center(
    model: &mut MenuModel,
    content: ContentId,
    navigation: bool,
) -> Option<Cmd> {
    let replacing = model.center_content.is_some();
    model.center_content = Some(content);

    let mut cmds = vec![Cmd::ReplaceCenter {
        content,
        transition: if replacing {
            model.prefs.animating.center_transition
        } else {
            None
        },
    }];

    if navigation {
        if let Some(image) = &model.prefs.drawing.menu_button_image {
            cmds.push(Cmd::InstallMenuButtons {
                image: image.clone(),
                accessibility_identifier: model
                    .prefs
                    .interaction
                    .menu_button_accessibility_identifier
                    .clone(),
            });
        }
    }

    if replacing {
        if let Some(side) = model.showing.side() {
            if model.is_transition_in_progress() {
                tracing::debug!(target: "transition", "center replaced mid-transition, panel left as is");
            } else {
                cmds.push(begin_transition(model, false, side, false));
            }
        }
    }

    Cmd::batch(cmds)
}

/// Recompute resting frames for a new screen size
///
/// While a transition runs the driver owns presentation, so the new frames
/// become the animation's end state instead of being set directly.
pub fn update_resize(model: &mut MenuModel, size: Size, idiom: Option<DeviceIdiom>) -> Option<Cmd> {
    tracing::debug!(width = size.width, height = size.height, ?idiom, "screen resized");
    model.screen = size;
    if let Some(idiom) = idiom {
        model.idiom = idiom;
    }

    let center = model.resting_center_frame();
    let underlay = if model.showing.is_none() { 0.0 } else { 1.0 };

    let mut cmds = Vec::new();

    if model.is_transition_in_progress() {
        model.center_frame = center;
        for side in Side::ALL {
            let frame = model.resting_panel_frame(side);
            model.panel_mut(side).frame = frame;
        }
        if model.shows_status_underlay() {
            model.underlay_alpha = underlay;
        }
        cmds.push(Cmd::RetargetAnimation(model.presented_frames()));
    } else {
        set_center_frame(model, center, &mut cmds);
        for side in Side::ALL {
            let frame = model.resting_panel_frame(side);
            model.panel_mut(side).frame = frame;
            cmds.push(Cmd::SetPanelFrame { side, frame });
        }
        set_underlay_alpha(model, underlay, &mut cmds);
    }

    if model.overlay_inserted {
        cmds.push(Cmd::SetOverlayFrame(center));
    }

    Cmd::batch(cmds)
}
