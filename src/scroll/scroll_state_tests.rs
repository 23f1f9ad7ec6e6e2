//! Tests for scroll state

use super::*;
use proptest::prelude::*;

fn scroll_with_bounds(content_lines: u32, viewport_height: u16) -> ScrollState {
    let mut scroll = ScrollState::new();
    scroll.update_bounds(content_lines, viewport_height);
    scroll
}

#[test]
fn test_update_bounds_sets_max_offset() {
    let scroll = scroll_with_bounds(30, 10);
    assert_eq!(scroll.max_offset, 20);
    assert_eq!(scroll.viewport_height, 10);
}

#[test]
fn test_update_bounds_short_content_has_no_scroll() {
    let scroll = scroll_with_bounds(5, 10);
    assert_eq!(scroll.max_offset, 0);
}

#[test]
fn test_update_bounds_clamps_existing_offset() {
    let mut scroll = scroll_with_bounds(30, 10);
    scroll.jump_to_bottom();
    assert_eq!(scroll.offset, 20);

    scroll.update_bounds(15, 10);
    assert_eq!(scroll.offset, 5);
}

#[test]
fn test_set_offset_clamps_to_max() {
    let mut scroll = scroll_with_bounds(30, 10);
    scroll.set_offset(7);
    assert_eq!(scroll.offset, 7);
    scroll.set_offset(500);
    assert_eq!(scroll.offset, 20);
}

#[test]
fn test_scroll_down_and_up_clamp_at_edges() {
    let mut scroll = scroll_with_bounds(30, 10);
    scroll.scroll_down(25);
    assert_eq!(scroll.offset, 20);
    scroll.scroll_up(100);
    assert_eq!(scroll.offset, 0);
}

#[test]
fn test_page_moves_half_viewport() {
    let mut scroll = scroll_with_bounds(100, 10);
    scroll.page_down();
    assert_eq!(scroll.offset, 5);
    scroll.page_up();
    assert_eq!(scroll.offset, 0);
}

proptest! {
    // Any sequence of scroll operations keeps the offset within bounds.
    #[test]
    fn prop_offset_stays_in_bounds(
        content_lines in 0u32..500,
        viewport_height in 1u16..60,
        ops in prop::collection::vec(0u8..6, 0..40),
    ) {
        let mut scroll = scroll_with_bounds(content_lines, viewport_height);
        for op in ops {
            match op {
                0 => scroll.scroll_down(3),
                1 => scroll.scroll_up(3),
                2 => scroll.page_down(),
                3 => scroll.page_up(),
                4 => scroll.jump_to_bottom(),
                _ => scroll.set_offset(1000),
            }
            prop_assert!(scroll.offset <= scroll.max_offset);
        }
    }
}
