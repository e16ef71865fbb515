//! Message types for the Elm-style architecture
//!
//! Every input the side menu reacts to (button taps, gesture samples,
//! layout changes, animation completions) flows through these types.

use serde::{Deserialize, Serialize};

use crate::commands::TransitionCompletion;
use crate::model::{ContentId, DeviceIdiom, Side, Size};

/// Phase of a continuous drag gesture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
    Cancelled,
}

/// One sample from a pan recognizer
///
/// `translation` is the horizontal delta since the last time the recognizer's
/// translation was reset (see `Cmd::ResetPanTranslation`), not a cumulative
/// offset. `velocity` is horizontal, in points per second, positive when
/// moving left to right.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PanSample {
    pub phase: GesturePhase,
    pub translation: f32,
    pub velocity: f32,
}

impl PanSample {
    pub fn new(phase: GesturePhase, translation: f32, velocity: f32) -> Self {
        Self {
            phase,
            translation,
            velocity,
        }
    }
}

/// Direction of a discrete swipe
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SwipeDirection {
    Left,
    Right,
}

/// Top-level message type
#[derive(Debug, Clone, PartialEq)]
pub enum Msg {
    /// Menu button: reveal the side if nothing is showing, otherwise hide
    Toggle(Side),
    /// Continuous drag sample
    Pan(PanSample),
    /// Discrete swipe over the center content or overlay
    Swipe(SwipeDirection),
    /// Tap on the center content while a panel is showing
    Tap,
    /// Screen size or orientation changed; `idiom: None` keeps the current one
    Resize {
        size: Size,
        idiom: Option<DeviceIdiom>,
    },
    /// Attach side panel content (each side is attached once)
    EmbedSides { left: ContentId, right: ContentId },
    /// Attach or replace the center content
    EmbedCenter { content: ContentId, navigation: bool },
    /// The container is about to leave the screen
    WillDisappear,
    /// The animation driver finished a transition
    TransitionFinished(TransitionCompletion),
}
