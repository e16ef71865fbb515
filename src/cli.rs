//! Command-line argument parsing for the simulator
//!
//! Supports:
//! - Replaying a script of input events
//! - Overriding the preferences file and panel position
//! - Choosing screen size, device idiom and frame rate

use clap::{Parser, ValueEnum};
use std::path::PathBuf;
use std::time::Duration;

use sidemenu::model::{DeviceIdiom, SidePanelPosition, Size};

/// Headless side menu simulator
#[derive(Parser, Debug)]
#[command(
    name = "sidemenu-sim",
    version,
    about = "Replay input scripts against the side menu and print host calls"
)]
pub struct CliArgs {
    /// YAML script of input events
    #[arg(value_name = "SCRIPT")]
    pub script: PathBuf,

    /// Preferences file (defaults to the user config)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Override the side panel position
    #[arg(short, long, value_enum)]
    pub position: Option<PositionArg>,

    /// Screen width in points
    #[arg(long, default_value_t = 375.0)]
    pub width: f32,

    /// Screen height in points
    #[arg(long, default_value_t = 667.0)]
    pub height: f32,

    /// Simulate a tablet
    #[arg(long)]
    pub pad: bool,

    /// Animation frames per second
    #[arg(long, default_value_t = 60)]
    pub fps: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PositionArg {
    Under,
    Over,
}

impl From<PositionArg> for SidePanelPosition {
    fn from(arg: PositionArg) -> Self {
        match arg {
            PositionArg::Under => SidePanelPosition::UnderCenter,
            PositionArg::Over => SidePanelPosition::OverCenter,
        }
    }
}

/// Configuration derived from CLI arguments
#[derive(Debug, Clone)]
pub struct SimConfig {
    pub script: PathBuf,
    pub config: Option<PathBuf>,
    pub position: Option<SidePanelPosition>,
    pub screen: Size,
    pub idiom: DeviceIdiom,
    /// Time step between animation frames
    pub frame: Duration,
}

impl CliArgs {
    /// Validate parsed CLI args into a simulator configuration
    pub fn into_config(self) -> Result<SimConfig, String> {
        if !(self.width.is_finite() && self.width > 0.0) {
            return Err(format!("Invalid screen width: {}", self.width));
        }
        if !(self.height.is_finite() && self.height > 0.0) {
            return Err(format!("Invalid screen height: {}", self.height));
        }
        if self.fps == 0 {
            return Err("Frame rate must be at least 1".to_string());
        }

        Ok(SimConfig {
            script: self.script,
            config: self.config,
            position: self.position.map(Into::into),
            screen: Size::new(self.width, self.height),
            idiom: if self.pad {
                DeviceIdiom::Pad
            } else {
                DeviceIdiom::Phone
            },
            frame: Duration::from_secs(1) / self.fps,
        })
    }
}
