//! Tracing infrastructure for development diagnostics
//!
//! # Usage
//!
//! Configure via RUST_LOG environment variable:
//! - `RUST_LOG=debug` - all debug logs
//! - `RUST_LOG=transition=debug,gesture=trace` - scoped filtering
//! - `RUST_LOG=sidemenu::update=debug` - module-level filtering
//!
//! # Log Files
//!
//! Logs are written to `~/.config/sidemenu/logs/sidemenu.log` with daily rotation.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

use crate::model::{MenuModel, ShowingSide, TransitionState};

/// Initialize tracing subscriber with console and file logging
///
/// Console output respects RUST_LOG (default `warn`); the file layer always
/// records debug level.
pub fn init() {
    let console_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));

    let console_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_line_number(true)
        .with_filter(console_filter);

    let file_layer = match crate::config_paths::ensure_logs_dir() {
        Ok(logs_dir) => {
            let file_appender = tracing_appender::rolling::daily(
                logs_dir,
                crate::config_paths::log_file_prefix(),
            );
            Some(
                fmt::layer()
                    .with_writer(file_appender)
                    .with_ansi(false)
                    .with_target(true)
                    .with_line_number(true)
                    .with_filter(EnvFilter::new("debug")),
            )
        }
        Err(e) => {
            eprintln!("Warning: Could not initialize file logging: {}", e);
            None
        }
    };

    tracing_subscriber::registry()
        .with(console_layer)
        .with(file_layer)
        .init();
}

/// Lightweight snapshot of menu state for diffing
#[derive(Debug, Clone, PartialEq)]
pub struct StateSnapshot {
    pub showing: ShowingSide,
    pub transition: TransitionState,
    pub center_x: f32,
    pub left_x: f32,
    pub right_x: f32,
}

impl StateSnapshot {
    pub fn from_model(model: &MenuModel) -> Self {
        Self {
            showing: model.showing,
            transition: model.transition,
            center_x: model.center_frame.x,
            left_x: model.left.frame.x,
            right_x: model.right.frame.x,
        }
    }

    /// Describe what changed between two snapshots
    pub fn diff(&self, other: &StateSnapshot) -> Option<String> {
        let mut changes = Vec::new();

        if self.showing != other.showing {
            changes.push(format!("showing: {:?} → {:?}", self.showing, other.showing));
        }
        if self.transition != other.transition {
            changes.push(format!(
                "transition: {:?} → {:?}",
                self.transition, other.transition
            ));
        }
        for (name, before, after) in [
            ("center.x", self.center_x, other.center_x),
            ("left.x", self.left_x, other.left_x),
            ("right.x", self.right_x, other.right_x),
        ] {
            if before != after {
                changes.push(format!("{}: {:.1} → {:.1}", name, before, after));
            }
        }

        if changes.is_empty() {
            None
        } else {
            Some(changes.join("; "))
        }
    }
}
