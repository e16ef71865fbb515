//! Tween-based animation driver
//!
//! Interpolates a [`PanelAnimation`] over its duration as the host advances
//! time, and fires the completion once the final frame has been produced.

use std::sync::mpsc::Sender;
use std::time::Duration;

use crate::commands::{FrameSet, PanelAnimation, TransitionCompletion};
use crate::messages::Msg;

use super::AnimationDriver;

/// Easing function signature: maps `t` in [0, 1] to output in [0, 1].
pub type EasingFn = fn(f32) -> f32;

/// Identity easing (constant velocity).
#[inline]
pub fn linear(t: f32) -> f32 {
    t.clamp(0.0, 1.0)
}

/// Quadratic ease-in-out (slow start and end).
#[inline]
pub fn ease_in_out(t: f32) -> f32 {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        2.0 * t * t
    } else {
        1.0 - (-2.0 * t + 2.0).powi(2) / 2.0
    }
}

/// One-shot handle that reports a finished transition back to the menu
///
/// Consumed on use, so a transition completes at most once.
#[derive(Debug)]
pub struct CompletionSink {
    tx: Sender<Msg>,
    completion: TransitionCompletion,
}

impl CompletionSink {
    pub fn new(tx: Sender<Msg>, completion: TransitionCompletion) -> Self {
        Self { tx, completion }
    }

    pub fn completion(&self) -> TransitionCompletion {
        self.completion
    }

    pub fn complete(self) {
        if self
            .tx
            .send(Msg::TransitionFinished(self.completion))
            .is_err()
        {
            tracing::warn!(target: "transition", "menu dropped before transition completed");
        }
    }
}

#[derive(Debug)]
struct Tween {
    animation: PanelAnimation,
    elapsed: Duration,
    done: CompletionSink,
}

impl Tween {
    fn progress(&self) -> f32 {
        let duration = self.animation.duration.as_secs_f32();
        if duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed.as_secs_f32() / duration).min(1.0)
    }
}

/// Animation driver that interpolates on demand
#[derive(Debug)]
pub struct TweenDriver {
    active: Option<Tween>,
    easing: EasingFn,
}

impl Default for TweenDriver {
    fn default() -> Self {
        Self {
            active: None,
            easing: ease_in_out,
        }
    }
}

impl TweenDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the easing function (builder pattern).
    pub fn easing(mut self, easing: EasingFn) -> Self {
        self.easing = easing;
        self
    }

    /// Time left in the running animation
    pub fn remaining(&self) -> Option<Duration> {
        self.active
            .as_ref()
            .map(|tween| tween.animation.duration.saturating_sub(tween.elapsed))
    }
}

impl AnimationDriver for TweenDriver {
    fn animate(&mut self, animation: PanelAnimation, done: CompletionSink) {
        if let Some(previous) = self.active.take() {
            // Transitions never overlap; settle the old one before replacing it
            tracing::warn!(target: "transition", "animation replaced before completion");
            previous.done.complete();
        }
        self.active = Some(Tween {
            animation,
            elapsed: Duration::ZERO,
            done,
        });
    }

    fn advance(&mut self, dt: Duration) -> Option<FrameSet> {
        let tween = self.active.as_mut()?;
        tween.elapsed = tween.elapsed.saturating_add(dt);

        let progress = tween.progress();
        let frames = tween
            .animation
            .from
            .lerp(&tween.animation.to, (self.easing)(progress));

        if progress >= 1.0 {
            if let Some(tween) = self.active.take() {
                tween.done.complete();
            }
        }
        Some(frames)
    }

    /// Progress carries over, so the remaining frames bend toward `to`
    fn retarget(&mut self, to: FrameSet) {
        if let Some(tween) = self.active.as_mut() {
            tween.animation.to = to;
        }
    }

    fn is_animating(&self) -> bool {
        self.active.is_some()
    }
}
