//! Scroll state and animation
//!
//! `ScrollState` tracks the body viewport offset with clamped bounds.
//! `TickAnimator` drives anchor scroll animations from the event loop's
//! tick; the click handler itself owns no timing logic.

mod animator;
mod scroll_state;

pub use animator::{
    AnimationFrame, DEFAULT_SCROLL_DURATION, Easing, OnComplete, ScrollAnimator, TickAnimator,
};
pub use scroll_state::ScrollState;
