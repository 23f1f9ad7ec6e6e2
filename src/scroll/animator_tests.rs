//! Tests for the tick-driven scroll animator

use std::time::{Duration, Instant};

use super::*;
use crate::location::LocationState;
use proptest::prelude::*;

fn set_hash_on_complete(hash: &str) -> OnComplete {
    let hash = hash.to_string();
    Box::new(move |location: &mut LocationState| location.set_hash(hash))
}

#[test]
fn test_idle_animator_ticks_to_none() {
    let mut animator = TickAnimator::new(Easing::Linear);
    assert!(!animator.is_active());
    assert!(animator.tick(Instant::now()).is_none());
}

#[test]
fn test_animation_settles_at_target_and_completes_once() {
    let mut animator = TickAnimator::new(Easing::Swing);
    let mut location = LocationState::new("page.json");

    animator.animate_scroll_to(
        0,
        40,
        Duration::from_millis(300),
        set_hash_on_complete("#details"),
    );
    assert!(animator.is_active());

    let frame = animator.tick(Instant::now() + Duration::from_secs(1)).unwrap();
    assert_eq!(frame.offset, 40);
    let completed = frame.completed.expect("settling frame carries completion");
    completed(&mut location);
    assert_eq!(location.hash(), Some("#details"));

    // settled: animator is idle again, no second completion
    assert!(!animator.is_active());
    assert!(animator.tick(Instant::now() + Duration::from_secs(2)).is_none());
}

#[test]
fn test_mid_flight_frame_is_partial_without_completion() {
    let mut animator = TickAnimator::new(Easing::Linear);
    animator.animate_scroll_to(
        0,
        100,
        Duration::from_secs(60),
        set_hash_on_complete("#x"),
    );

    let frame = animator.tick(Instant::now()).unwrap();
    assert!(frame.offset < 100, "offset {} should be partial", frame.offset);
    assert!(frame.completed.is_none());
    assert!(animator.is_active());
}

#[test]
fn test_zero_duration_settles_immediately() {
    let mut animator = TickAnimator::new(Easing::Swing);
    let mut location = LocationState::new("page.json");

    animator.animate_scroll_to(10, 3, Duration::ZERO, set_hash_on_complete("#top"));
    let frame = animator.tick(Instant::now()).unwrap();
    assert_eq!(frame.offset, 3);
    frame.completed.unwrap()(&mut location);
    assert_eq!(location.hash(), Some("#top"));
}

#[test]
fn test_new_animation_replaces_in_flight_one() {
    let mut animator = TickAnimator::new(Easing::Swing);
    let mut location = LocationState::new("page.json");

    animator.animate_scroll_to(
        0,
        40,
        Duration::from_millis(300),
        set_hash_on_complete("#first"),
    );
    animator.animate_scroll_to(
        5,
        20,
        Duration::from_millis(300),
        set_hash_on_complete("#second"),
    );

    let frame = animator.tick(Instant::now() + Duration::from_secs(1)).unwrap();
    assert_eq!(frame.offset, 20);
    frame.completed.unwrap()(&mut location);

    // the replaced animation never settles, so only the last hash wins
    assert_eq!(location.hash(), Some("#second"));
    assert!(animator.tick(Instant::now() + Duration::from_secs(2)).is_none());
}

#[test]
fn test_animation_scrolls_upward_too() {
    let mut animator = TickAnimator::new(Easing::Linear);
    animator.animate_scroll_to(50, 10, Duration::ZERO, Box::new(|_| {}));
    let frame = animator.tick(Instant::now()).unwrap();
    assert_eq!(frame.offset, 10);
}

#[test]
fn test_easing_endpoints() {
    for easing in [Easing::Swing, Easing::Linear] {
        assert!(easing.apply(0.0).abs() < 1e-6);
        assert!((easing.apply(1.0) - 1.0).abs() < 1e-6);
    }
}

#[test]
fn test_swing_is_slower_at_edges_than_linear() {
    assert!(Easing::Swing.apply(0.1) < Easing::Linear.apply(0.1));
    assert!(Easing::Swing.apply(0.9) > Easing::Linear.apply(0.9));
}

proptest! {
    // Eased progress stays within [0, 1] for the whole animation.
    #[test]
    fn prop_easing_stays_in_unit_interval(t in 0.0f32..=1.0) {
        for easing in [Easing::Swing, Easing::Linear] {
            let eased = easing.apply(t);
            prop_assert!((-1e-6..=1.0 + 1e-6).contains(&eased));
        }
    }
}
