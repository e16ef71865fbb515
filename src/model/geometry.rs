//! Geometry primitives and resting-frame math
//!
//! All functions here are pure. Resting frames are never stored: they are
//! derived on demand from the screen size, the panel widths, the layout
//! mode and the currently showing side.

use serde::{Deserialize, Serialize};

use super::state::{ShowingSide, Side, SidePanelPosition};

/// Rectangle in logical points, origin at the top-left of the screen
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    #[inline]
    pub fn min_x(&self) -> f32 {
        self.x
    }

    #[inline]
    pub fn max_x(&self) -> f32 {
        self.x + self.width
    }

    /// Same rect moved horizontally by `dx`
    pub fn offset_x(&self, dx: f32) -> Self {
        Self {
            x: self.x + dx,
            ..*self
        }
    }

    /// Same rect with its origin's x replaced
    pub fn with_x(&self, x: f32) -> Self {
        Self { x, ..*self }
    }

    pub fn contains(&self, px: f32, py: f32) -> bool {
        px >= self.x && px < self.x + self.width && py >= self.y && py < self.y + self.height
    }

    /// Linear interpolation between two rects (`t` clamped to [0, 1])
    pub fn lerp(&self, to: &Rect, t: f32) -> Rect {
        let t = t.clamp(0.0, 1.0);
        Rect {
            x: self.x + (to.x - self.x) * t,
            y: self.y + (to.y - self.y) * t,
            width: self.width + (to.width - self.width) * t,
            height: self.height + (to.height - self.height) * t,
        }
    }
}

/// Screen size in logical points
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    pub fn is_portrait(&self) -> bool {
        self.width < self.height
    }

    /// Full-screen rect at the origin
    pub fn bounds(&self) -> Rect {
        Rect::new(0.0, 0.0, self.width, self.height)
    }
}

/// Device class reported by the host
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeviceIdiom {
    #[default]
    Phone,
    Pad,
}

/// Inputs shared by every resting-frame computation
#[derive(Debug, Clone, Copy)]
pub struct FrameContext {
    pub screen: Size,
    pub left_width: f32,
    pub right_width: f32,
    pub position: SidePanelPosition,
    pub showing: ShowingSide,
}

impl FrameContext {
    pub fn panel_width(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.left_width,
            Side::Right => self.right_width,
        }
    }

    /// Resting frame of the center panel
    ///
    /// Only the under-center layout ever moves the center panel.
    pub fn center_frame(&self) -> Rect {
        let bounds = self.screen.bounds();
        if !self.position.is_positioned_under() {
            return bounds;
        }
        match self.showing {
            ShowingSide::None => bounds,
            ShowingSide::Left => bounds.with_x(self.left_width),
            ShowingSide::Right => bounds.with_x(-self.right_width),
        }
    }

    /// Resting frame of a side panel
    pub fn panel_frame(&self, side: Side) -> Rect {
        let width = self.panel_width(side);
        let height = self.screen.height;
        let docked = self.position.is_positioned_under() || self.showing.side() == Some(side);
        let x = match (side, docked) {
            (Side::Left, true) => 0.0,
            (Side::Left, false) => -width,
            (Side::Right, true) => self.screen.width - width,
            (Side::Right, false) => self.screen.width,
        };
        Rect::new(x, 0.0, width, height)
    }
}

/// Divide, returning `None` instead of a non-finite result
#[inline]
pub fn ratio(numerator: f32, denominator: f32) -> Option<f32> {
    if denominator.abs() <= f32::EPSILON || !denominator.is_finite() {
        return None;
    }
    let value = numerator / denominator;
    value.is_finite().then_some(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ctx(position: SidePanelPosition, showing: ShowingSide) -> FrameContext {
        FrameContext {
            screen: Size::new(375.0, 667.0),
            left_width: 300.0,
            right_width: 250.0,
            position,
            showing,
        }
    }

    #[test]
    fn test_under_center_panels_are_always_docked() {
        let c = ctx(SidePanelPosition::UnderCenter, ShowingSide::None);
        assert_eq!(c.panel_frame(Side::Left), Rect::new(0.0, 0.0, 300.0, 667.0));
        assert_eq!(
            c.panel_frame(Side::Right),
            Rect::new(125.0, 0.0, 250.0, 667.0)
        );
    }

    #[test]
    fn test_over_center_hidden_panels_sit_off_screen() {
        let c = ctx(SidePanelPosition::OverCenter, ShowingSide::None);
        assert_eq!(c.panel_frame(Side::Left).x, -300.0);
        assert_eq!(c.panel_frame(Side::Right).x, 375.0);

        let c = ctx(SidePanelPosition::OverCenter, ShowingSide::Right);
        assert_eq!(c.panel_frame(Side::Right).x, 125.0);
        assert_eq!(c.panel_frame(Side::Left).x, -300.0);
        assert_eq!(c.center_frame(), Rect::new(0.0, 0.0, 375.0, 667.0));
    }

    #[test]
    fn test_center_frame_follows_showing_side_under_center() {
        let c = ctx(SidePanelPosition::UnderCenter, ShowingSide::Left);
        assert_eq!(c.center_frame().x, 300.0);
        let c = ctx(SidePanelPosition::UnderCenter, ShowingSide::Right);
        assert_eq!(c.center_frame().x, -250.0);
        assert_eq!(c.center_frame().max_x(), 125.0);
    }

    #[test]
    fn test_ratio_guards_zero_divisor() {
        assert_eq!(ratio(10.0, 0.0), None);
        assert_eq!(ratio(10.0, f32::NAN), None);
        assert_eq!(ratio(150.0, 300.0), Some(0.5));
    }

    #[test]
    fn test_lerp_clamps_progress() {
        let a = Rect::new(0.0, 0.0, 100.0, 100.0);
        let b = Rect::new(200.0, 0.0, 100.0, 100.0);
        assert_eq!(a.lerp(&b, 0.5).x, 100.0);
        assert_eq!(a.lerp(&b, 2.0).x, 200.0);
    }
}
