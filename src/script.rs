//! Input scripts for the headless simulator
//!
//! A script is a YAML list of events, replayed in order:
//!
//! ```yaml
//! - event: embed_sides
//!   left: 1
//!   right: 2
//! - event: toggle
//!   side: left
//! - event: wait
//!   seconds: 0.5
//! - event: pan
//!   phase: began
//!   translation: 0
//!   velocity: -400
//! ```

use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::messages::{GesturePhase, Msg, PanSample, SwipeDirection};
use crate::model::{ContentId, DeviceIdiom, Side, Size};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum ScriptEvent {
    Toggle {
        side: Side,
    },
    Pan {
        phase: GesturePhase,
        #[serde(default)]
        translation: f32,
        #[serde(default)]
        velocity: f32,
    },
    Swipe {
        direction: SwipeDirection,
    },
    Tap,
    Resize {
        width: f32,
        height: f32,
        #[serde(default)]
        idiom: Option<DeviceIdiom>,
    },
    EmbedSides {
        left: u64,
        right: u64,
    },
    EmbedCenter {
        content: u64,
        #[serde(default)]
        navigation: bool,
    },
    Disappear,
    /// Let animations run for this long
    Wait {
        seconds: f64,
    },
}

/// What the simulator does for one event
#[derive(Debug, Clone, PartialEq)]
pub enum Step {
    Send(Msg),
    Wait(Duration),
}

impl ScriptEvent {
    pub fn into_step(self) -> Result<Step> {
        let msg = match self {
            ScriptEvent::Toggle { side } => Msg::Toggle(side),
            ScriptEvent::Pan {
                phase,
                translation,
                velocity,
            } => Msg::Pan(PanSample::new(phase, translation, velocity)),
            ScriptEvent::Swipe { direction } => Msg::Swipe(direction),
            ScriptEvent::Tap => Msg::Tap,
            ScriptEvent::Resize {
                width,
                height,
                idiom,
            } => Msg::Resize {
                size: Size::new(width, height),
                idiom,
            },
            ScriptEvent::EmbedSides { left, right } => Msg::EmbedSides {
                left: ContentId(left),
                right: ContentId(right),
            },
            ScriptEvent::EmbedCenter {
                content,
                navigation,
            } => Msg::EmbedCenter {
                content: ContentId(content),
                navigation,
            },
            ScriptEvent::Disappear => Msg::WillDisappear,
            ScriptEvent::Wait { seconds } => {
                let duration = Duration::try_from_secs_f64(seconds)
                    .with_context(|| format!("invalid wait of {seconds} seconds"))?;
                return Ok(Step::Wait(duration));
            }
        };
        Ok(Step::Send(msg))
    }
}

/// Parse a script document into its events
pub fn parse(content: &str) -> Result<Vec<ScriptEvent>> {
    if content.trim().is_empty() {
        return Ok(Vec::new());
    }
    serde_yaml::from_str(content).context("Failed to parse script")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_script() {
        let events = parse(
            r#"
- event: embed_sides
  left: 1
  right: 2
- event: embed_center
  content: 3
  navigation: true
- event: toggle
  side: left
- event: wait
  seconds: 0.5
- event: pan
  phase: ended
  velocity: -200
- event: tap
"#,
        )
        .unwrap();

        assert_eq!(events.len(), 6);
        assert_eq!(events[2], ScriptEvent::Toggle { side: Side::Left });
        assert_eq!(
            events[4],
            ScriptEvent::Pan {
                phase: GesturePhase::Ended,
                translation: 0.0,
                velocity: -200.0,
            }
        );
    }

    #[test]
    fn test_empty_script() {
        assert!(parse("").unwrap().is_empty());
        assert!(parse("  \n").unwrap().is_empty());
    }

    #[test]
    fn test_unknown_event_is_an_error() {
        assert!(parse("- event: shake\n").is_err());
    }

    #[test]
    fn test_into_step() {
        let step = ScriptEvent::Wait { seconds: 0.25 }.into_step().unwrap();
        assert_eq!(step, Step::Wait(Duration::from_millis(250)));

        let step = ScriptEvent::Disappear.into_step().unwrap();
        assert_eq!(step, Step::Send(Msg::WillDisappear));

        assert!(ScriptEvent::Wait { seconds: -1.0 }.into_step().is_err());
    }

    #[test]
    fn test_resize_idiom_is_optional() {
        let events = parse(
            r#"
- event: resize
  width: 667
  height: 375
- event: resize
  width: 1024
  height: 768
  idiom: pad
"#,
        )
        .unwrap();

        assert_eq!(
            events[0].clone().into_step().unwrap(),
            Step::Send(Msg::Resize {
                size: Size::new(667.0, 375.0),
                idiom: None,
            })
        );
        assert_eq!(
            events[1].clone().into_step().unwrap(),
            Step::Send(Msg::Resize {
                size: Size::new(1024.0, 768.0),
                idiom: Some(DeviceIdiom::Pad),
            })
        );
    }
}
