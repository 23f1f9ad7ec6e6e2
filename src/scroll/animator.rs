//! Scroll animation
//!
//! The anchor click handler hands the animator a goal offset, a duration and
//! a completion continuation, then returns immediately. The event loop
//! drives `tick` against wall-clock time; the continuation runs exactly
//! once, on the frame where the animation settles.

use std::time::{Duration, Instant};

use serde::Deserialize;

use crate::location::LocationState;

/// Default duration of an anchor scroll animation
pub const DEFAULT_SCROLL_DURATION: Duration = Duration::from_millis(300);

/// Continuation run once after an animation settles
pub type OnComplete = Box<dyn FnOnce(&mut LocationState)>;

/// Narrow interface the anchor handler orchestrates against
pub trait ScrollAnimator {
    /// Begin animating the scroll offset from `from` toward `target`
    ///
    /// Replaces any in-flight animation; the replaced animation never
    /// settles, so its continuation is dropped.
    fn animate_scroll_to(
        &mut self,
        from: u16,
        target: u16,
        duration: Duration,
        on_complete: OnComplete,
    );

    /// Whether an animation is currently in flight
    fn is_active(&self) -> bool;
}

/// Easing curve for scroll animations
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Easing {
    /// Cosine ease-in-out
    #[default]
    Swing,
    Linear,
}

impl Easing {
    /// Map an elapsed fraction in [0, 1] to eased progress in [0, 1]
    pub fn apply(self, t: f32) -> f32 {
        match self {
            Easing::Linear => t,
            Easing::Swing => 0.5 - (t * std::f32::consts::PI).cos() / 2.0,
        }
    }
}

struct ScrollAnimation {
    from: u16,
    to: u16,
    started: Instant,
    duration: Duration,
    on_complete: Option<OnComplete>,
}

/// One advance of the active animation
pub struct AnimationFrame {
    /// Offset the viewport should show now
    pub offset: u16,
    /// Continuation to run, present only on the settling frame
    pub completed: Option<OnComplete>,
}

/// Tick-driven animator backed by wall-clock time
pub struct TickAnimator {
    easing: Easing,
    active: Option<ScrollAnimation>,
}

impl TickAnimator {
    pub fn new(easing: Easing) -> Self {
        Self {
            easing,
            active: None,
        }
    }

    /// Advance the active animation to `now`
    ///
    /// Returns None while idle. The settling frame carries the completion
    /// continuation; after it the animator is idle again.
    pub fn tick(&mut self, now: Instant) -> Option<AnimationFrame> {
        let animation = self.active.as_mut()?;
        let elapsed = now.saturating_duration_since(animation.started);

        if elapsed >= animation.duration {
            let completed = animation.on_complete.take();
            let offset = animation.to;
            self.active = None;
            return Some(AnimationFrame { offset, completed });
        }

        let t = elapsed.as_secs_f32() / animation.duration.as_secs_f32();
        let offset = interpolate(animation.from, animation.to, self.easing.apply(t));
        Some(AnimationFrame {
            offset,
            completed: None,
        })
    }
}

impl ScrollAnimator for TickAnimator {
    fn animate_scroll_to(
        &mut self,
        from: u16,
        target: u16,
        duration: Duration,
        on_complete: OnComplete,
    ) {
        self.active = Some(ScrollAnimation {
            from,
            to: target,
            started: Instant::now(),
            duration,
            on_complete: Some(on_complete),
        });
    }

    fn is_active(&self) -> bool {
        self.active.is_some()
    }
}

fn interpolate(from: u16, to: u16, progress: f32) -> u16 {
    let from = f32::from(from);
    let to = f32::from(to);
    let value = from + (to - from) * progress;
    value.round().clamp(0.0, f32::from(u16::MAX)) as u16
}

#[cfg(test)]
#[path = "animator_tests.rs"]
mod animator_tests;
