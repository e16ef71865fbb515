//! Model types for the side menu
//!
//! `MenuModel` is the single source of truth for panel visibility, the
//! transition guard, the pending flick velocity and the presented frames.
//! It is only mutated by `update`.

pub mod geometry;
pub mod state;

pub use geometry::{ratio, DeviceIdiom, FrameContext, Rect, Size};
pub use state::{ShowingSide, Side, SidePanelPosition, TransitionState};

use serde::{Deserialize, Serialize};

use crate::commands::FrameSet;
use crate::config::Preferences;
use crate::layout::{layout_for, PanelLayout};

/// Opaque handle for content owned by the host toolkit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ContentId(pub u64);

/// State for one side panel
#[derive(Debug, Clone, PartialEq)]
pub struct PanelSlot {
    pub content: Option<ContentId>,
    pub hidden: bool,
    /// Presented frame (moved live by over-center drags)
    pub frame: Rect,
}

impl PanelSlot {
    fn new(frame: Rect) -> Self {
        Self {
            content: None,
            hidden: true,
            frame,
        }
    }
}

#[derive(Debug, Clone)]
pub struct MenuModel {
    /// Preference snapshot captured at construction
    pub prefs: Preferences,
    pub position: SidePanelPosition,
    pub screen: Size,
    pub idiom: DeviceIdiom,

    pub showing: ShowingSide,
    pub transition: TransitionState,
    /// Written by every pan sample, consumed by the next transition
    pub flick_velocity: f32,

    pub center_frame: Rect,
    pub center_content: Option<ContentId>,
    pub center_interactive: bool,
    pub left: PanelSlot,
    pub right: PanelSlot,

    pub overlay_inserted: bool,
    pub overlay_alpha: f32,
    pub underlay_alpha: f32,
    pub shadow_opacity: f32,
    pub status_bar_hidden: bool,
}

impl MenuModel {
    pub fn new(prefs: Preferences, screen: Size, idiom: DeviceIdiom) -> Self {
        let position = prefs.drawing.side_panel_position;
        let mut model = Self {
            prefs,
            position,
            screen,
            idiom,
            showing: ShowingSide::None,
            transition: TransitionState::Idle,
            flick_velocity: 0.0,
            center_frame: screen.bounds(),
            center_content: None,
            center_interactive: true,
            left: PanelSlot::new(Rect::default()),
            right: PanelSlot::new(Rect::default()),
            overlay_inserted: false,
            overlay_alpha: 0.0,
            underlay_alpha: 0.0,
            shadow_opacity: 0.0,
            status_bar_hidden: false,
        };
        model.left.frame = model.resting_panel_frame(Side::Left);
        model.right.frame = model.resting_panel_frame(Side::Right);
        model
    }

    /// Frame strategy for this model's layout mode
    pub fn layout(&self) -> &'static dyn PanelLayout {
        layout_for(self.position)
    }

    pub fn is_transition_in_progress(&self) -> bool {
        self.transition == TransitionState::InProgress
    }

    /// Side panels can only be shown once both have content
    pub fn can_display_side_panels(&self) -> bool {
        self.left.content.is_some() && self.right.content.is_some()
    }

    pub fn panel(&self, side: Side) -> &PanelSlot {
        match side {
            Side::Left => &self.left,
            Side::Right => &self.right,
        }
    }

    pub fn panel_mut(&mut self, side: Side) -> &mut PanelSlot {
        match side {
            Side::Left => &mut self.left,
            Side::Right => &mut self.right,
        }
    }

    pub fn panel_width(&self, side: Side) -> f32 {
        self.prefs.panel_width(side)
    }

    pub fn hides_status_bar(&self) -> bool {
        self.prefs.animating.status_bar_behaviour.hides_status_bar()
    }

    /// The underlay is used on tablets, and on phones only in portrait
    pub fn shows_status_underlay(&self) -> bool {
        use crate::config::StatusBarBehaviour;

        if self.prefs.animating.status_bar_behaviour != StatusBarBehaviour::ShowUnderlay {
            return false;
        }
        self.idiom == DeviceIdiom::Pad || self.screen.is_portrait()
    }

    /// Whether the status bar follows the center panel horizontally
    pub fn status_bar_pans(&self) -> bool {
        use crate::config::StatusBarBehaviour;

        self.prefs.animating.status_bar_behaviour == StatusBarBehaviour::HorizontalPan
    }

    pub fn frame_context(&self) -> FrameContext {
        FrameContext {
            screen: self.screen,
            left_width: self.prefs.drawing.left_side_panel_width,
            right_width: self.prefs.drawing.right_side_panel_width,
            position: self.position,
            showing: self.showing,
        }
    }

    pub fn resting_center_frame(&self) -> Rect {
        self.frame_context().center_frame()
    }

    pub fn resting_panel_frame(&self, side: Side) -> Rect {
        self.frame_context().panel_frame(side)
    }

    /// What is currently on screen, as far as the core knows
    pub fn presented_frames(&self) -> FrameSet {
        FrameSet {
            center: self.center_frame,
            left: self.left.frame,
            right: self.right.frame,
            overlay_alpha: self.overlay_alpha,
            underlay_alpha: self
                .shows_status_underlay()
                .then_some(self.underlay_alpha),
            status_bar: self.status_bar_pans().then_some(self.center_frame),
        }
    }

    /// Record a frame set as presented
    pub fn apply_frames(&mut self, frames: &FrameSet) {
        self.center_frame = frames.center;
        self.left.frame = frames.left;
        self.right.frame = frames.right;
        self.overlay_alpha = frames.overlay_alpha;
        if let Some(alpha) = frames.underlay_alpha {
            self.underlay_alpha = alpha;
        }
    }

    /// Check model invariants (debug builds only)
    #[cfg(debug_assertions)]
    pub fn assert_invariants(&self) {
        if let Some(side) = self.showing.side() {
            let panel = self.panel(side);
            debug_assert!(
                panel.content.is_some(),
                "{:?} panel is showing without content",
                side
            );
            debug_assert!(!panel.hidden, "{:?} panel is showing but hidden", side);
        }
        debug_assert!(
            self.flick_velocity.is_finite(),
            "flick velocity must be finite"
        );
        debug_assert!(
            (0.0..=1.0).contains(&self.overlay_alpha),
            "overlay alpha out of range: {}",
            self.overlay_alpha
        );
    }

    /// No-op in release builds
    #[cfg(not(debug_assertions))]
    #[inline]
    pub fn assert_invariants(&self) {}
}
