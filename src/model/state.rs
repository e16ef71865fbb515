//! Panel visibility state

use serde::{Deserialize, Serialize};

/// A concrete side panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Side {
    Left,
    Right,
}

impl Side {
    /// The panel on the other side of the center panel
    pub fn opposite(&self) -> Side {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }

    pub const ALL: [Side; 2] = [Side::Left, Side::Right];
}

/// Which side panel is currently showing
///
/// `Left`/`Right` implies that panel is attached and not hidden.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ShowingSide {
    #[default]
    None,
    Left,
    Right,
}

impl ShowingSide {
    pub fn side(&self) -> Option<Side> {
        match self {
            ShowingSide::None => None,
            ShowingSide::Left => Some(Side::Left),
            ShowingSide::Right => Some(Side::Right),
        }
    }

    pub fn is_none(&self) -> bool {
        *self == ShowingSide::None
    }
}

impl From<Side> for ShowingSide {
    fn from(side: Side) -> Self {
        match side {
            Side::Left => ShowingSide::Left,
            Side::Right => ShowingSide::Right,
        }
    }
}

/// Whether the side panels slide out from under the center panel or over it
///
/// Fixed for the lifetime of a model.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SidePanelPosition {
    #[default]
    UnderCenter,
    OverCenter,
}

impl SidePanelPosition {
    pub fn is_positioned_under(&self) -> bool {
        *self == SidePanelPosition::UnderCenter
    }
}

/// Re-entrancy guard for panel transitions
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransitionState {
    #[default]
    Idle,
    InProgress,
}
