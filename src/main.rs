//! Headless side menu simulator
//!
//! Replays a YAML script of input events through the side menu and prints
//! every host call as a JSON line.
//!
//! Usage:
//!   cargo run -- samples/open_close.yaml
//!   cargo run -- samples/open_close.yaml --position over --fps 30
//!   RUST_LOG=transition=debug cargo run -- samples/drag.yaml

mod cli;

use std::cell::RefCell;
use std::io::{self, Write};
use std::rc::Rc;

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;

use sidemenu::config::Preferences;
use sidemenu::runtime::{FixedGeometry, MenuDelegate, RecordingHost, SideMenu, TweenDriver};
use sidemenu::script::{self, Step};

use cli::{CliArgs, SimConfig};

/// One line of simulator output
#[derive(Serialize)]
#[serde(untagged)]
enum OutputLine<'a> {
    Host {
        step: usize,
        #[serde(flatten)]
        call: &'a sidemenu::runtime::HostCall,
    },
    Delegate {
        step: usize,
        delegate: &'static str,
    },
}

/// Collects delegate callbacks until the next flush
#[derive(Default)]
struct RecordingDelegate {
    events: RefCell<Vec<&'static str>>,
}

impl MenuDelegate for RecordingDelegate {
    fn on_revealed(&self) {
        tracing::info!(target: "delegate", "side panel revealed");
        self.events.borrow_mut().push("revealed");
    }

    fn on_hidden(&self) {
        tracing::info!(target: "delegate", "side panel hidden");
        self.events.borrow_mut().push("hidden");
    }
}

fn load_preferences(config: &SimConfig) -> Result<Preferences> {
    let mut prefs = match &config.config {
        Some(path) => {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("Failed to read preferences {}", path.display()))?;
            Preferences::from_yaml_str(&content)
                .with_context(|| format!("Failed to parse preferences {}", path.display()))?
        }
        None => Preferences::load(),
    };

    if let Some(position) = config.position {
        prefs.drawing.side_panel_position = position;
    }
    Ok(prefs)
}

fn flush(
    out: &mut impl Write,
    step: usize,
    menu: &mut SideMenu<RecordingHost, TweenDriver>,
    delegate: &RecordingDelegate,
) -> Result<()> {
    for call in menu.host_mut().drain() {
        let line = serde_json::to_string(&OutputLine::Host { step, call: &call })?;
        writeln!(out, "{}", line)?;
    }
    for event in delegate.events.borrow_mut().drain(..) {
        let line = serde_json::to_string(&OutputLine::Delegate {
            step,
            delegate: event,
        })?;
        writeln!(out, "{}", line)?;
    }
    Ok(())
}

fn main() -> Result<()> {
    sidemenu::tracing::init();

    let config = CliArgs::parse()
        .into_config()
        .map_err(|e| anyhow::anyhow!(e))?;

    let source = std::fs::read_to_string(&config.script)
        .with_context(|| format!("Failed to read script {}", config.script.display()))?;
    let events = script::parse(&source)
        .with_context(|| format!("Invalid script {}", config.script.display()))?;

    let prefs = load_preferences(&config)?;
    tracing::info!(
        position = ?prefs.drawing.side_panel_position,
        events = events.len(),
        "starting simulation"
    );

    let geometry = FixedGeometry {
        size: config.screen,
        idiom: config.idiom,
    };
    let mut menu = SideMenu::new(prefs, &geometry, RecordingHost::new(), TweenDriver::new());
    let delegate = Rc::new(RecordingDelegate::default());
    menu.set_delegate(&delegate);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    flush(&mut out, 0, &mut menu, &delegate)?;

    let last_step = events.len() + 1;
    for (index, event) in events.into_iter().enumerate() {
        let step = index + 1;
        match event.into_step().with_context(|| format!("step {}", step))? {
            Step::Send(msg) => menu.dispatch(msg),
            Step::Wait(duration) => {
                let mut remaining = duration;
                while !remaining.is_zero() {
                    let dt = remaining.min(config.frame);
                    menu.advance(dt);
                    remaining -= dt;
                }
            }
        }
        flush(&mut out, step, &mut menu, &delegate)?;
    }

    // Let a trailing transition land
    menu.settle(config.frame);
    flush(&mut out, last_step, &mut menu, &delegate)?;

    let model = menu.model();
    tracing::info!(
        showing = ?model.showing,
        transition = ?model.transition,
        "simulation finished"
    );
    Ok(())
}
