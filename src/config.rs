//! Side menu preferences
//!
//! Stored in `~/.config/sidemenu/preferences.yaml`. A model captures one
//! `Preferences` snapshot at construction and never mutates it.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::model::{Side, SidePanelPosition};

/// How the system status bar reacts to a panel transition
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarBehaviour {
    #[default]
    SlideAnimation,
    FadeAnimation,
    /// The status bar moves along with the center panel
    HorizontalPan,
    /// An underlay under the status bar fades in with the reveal progress
    ShowUnderlay,
}

impl StatusBarBehaviour {
    pub fn animation(&self) -> StatusBarAnimation {
        match self {
            StatusBarBehaviour::FadeAnimation => StatusBarAnimation::Fade,
            StatusBarBehaviour::SlideAnimation => StatusBarAnimation::Slide,
            _ => StatusBarAnimation::None,
        }
    }

    /// Whether the status bar is hidden while a panel is revealed
    pub fn hides_status_bar(&self) -> bool {
        matches!(
            self,
            StatusBarBehaviour::SlideAnimation | StatusBarBehaviour::FadeAnimation
        )
    }
}

/// Animation style passed to the status bar adapter
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StatusBarAnimation {
    None,
    Fade,
    Slide,
}

/// Transition used when the center content is replaced
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CenterTransition {
    Fade,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Drawing {
    pub side_panel_position: SidePanelPosition,
    pub left_side_panel_width: f32,
    pub right_side_panel_width: f32,
    /// RGBA, each channel in [0, 1]
    pub center_panel_overlay_color: [f32; 4],
    pub center_panel_shadow: bool,
    /// Asset name of the menu button image; no buttons are installed without one
    pub menu_button_image: Option<String>,
}

impl Default for Drawing {
    fn default() -> Self {
        Self {
            side_panel_position: SidePanelPosition::UnderCenter,
            left_side_panel_width: 300.0,
            right_side_panel_width: 300.0,
            center_panel_overlay_color: [0.17, 0.16, 0.14, 0.6],
            center_panel_shadow: false,
            menu_button_image: None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Animating {
    pub status_bar_behaviour: StatusBarBehaviour,
    /// Seconds
    pub reveal_duration: f64,
    /// Seconds
    pub hide_duration: f64,
    pub center_transition: Option<CenterTransition>,
}

impl Default for Animating {
    fn default() -> Self {
        Self {
            status_bar_behaviour: StatusBarBehaviour::SlideAnimation,
            reveal_duration: 0.3,
            hide_duration: 0.2,
            center_transition: Some(CenterTransition::Fade),
        }
    }
}

impl Animating {
    /// Configured duration for a reveal or hide, before flick shortening
    pub fn duration(&self, reveal: bool) -> Duration {
        let secs = if reveal {
            self.reveal_duration
        } else {
            self.hide_duration
        };
        Duration::try_from_secs_f64(secs).unwrap_or(Duration::ZERO)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Interaction {
    pub panning_enabled: bool,
    pub swiping_enabled: bool,
    pub menu_button_accessibility_identifier: Option<String>,
}

impl Default for Interaction {
    fn default() -> Self {
        Self {
            panning_enabled: true,
            swiping_enabled: true,
            menu_button_accessibility_identifier: None,
        }
    }
}

/// Complete preference snapshot
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Preferences {
    pub drawing: Drawing,
    pub animating: Animating,
    pub interaction: Interaction,
}

impl Preferences {
    pub fn panel_width(&self, side: Side) -> f32 {
        match side {
            Side::Left => self.drawing.left_side_panel_width,
            Side::Right => self.drawing.right_side_panel_width,
        }
    }

    /// Parse preferences from a YAML document; missing fields take defaults
    pub fn from_yaml_str(content: &str) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_str(content)
    }

    /// Load preferences from disk, or return defaults if not found
    pub fn load() -> Self {
        let Some(path) = crate::config_paths::preferences_file() else {
            tracing::debug!("No config directory available, using defaults");
            return Self::default();
        };

        if !path.exists() {
            tracing::debug!(
                "Preferences file not found at {}, using defaults",
                path.display()
            );
            return Self::default();
        }

        Self::load_from(&path)
    }

    /// Load preferences from an explicit path, falling back to defaults on error
    pub fn load_from(path: &Path) -> Self {
        match std::fs::read_to_string(path) {
            Ok(content) => match Self::from_yaml_str(&content) {
                Ok(prefs) => {
                    tracing::info!("Loaded preferences from {}", path.display());
                    prefs
                }
                Err(e) => {
                    tracing::warn!("Failed to parse preferences at {}: {}", path.display(), e);
                    Self::default()
                }
            },
            Err(e) => {
                tracing::warn!("Failed to read preferences at {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Save preferences to the default location
    ///
    /// Creates the config directory if it doesn't exist.
    pub fn save(&self) -> Result<(), String> {
        let path = crate::config_paths::preferences_file()
            .ok_or_else(|| "No config directory available".to_string())?;
        self.save_to(&path)
    }

    pub fn save_to(&self, path: &Path) -> Result<(), String> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create config directory: {}", e))?;
        }

        let content = serde_yaml::to_string(self)
            .map_err(|e| format!("Failed to serialize preferences: {}", e))?;

        std::fs::write(path, content)
            .map_err(|e| format!("Failed to write preferences to {}: {}", path.display(), e))?;

        tracing::info!("Saved preferences to {}", path.display());
        Ok(())
    }
}
