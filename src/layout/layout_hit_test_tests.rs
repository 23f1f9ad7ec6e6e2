//! Tests for region hit testing

use ratatui::layout::Rect;

use super::{LayoutRegions, Region, region_at};

fn regions() -> LayoutRegions {
    LayoutRegions {
        nav_bar: Some(Rect::new(0, 0, 60, 3)),
        body_pane: Some(Rect::new(0, 3, 60, 8)),
        status_bar: Some(Rect::new(0, 11, 60, 1)),
    }
}

#[test]
fn test_region_at_maps_each_component() {
    let regions = regions();
    assert_eq!(region_at(&regions, 5, 1), Some(Region::NavBar));
    assert_eq!(region_at(&regions, 5, 5), Some(Region::BodyPane));
    assert_eq!(region_at(&regions, 5, 11), Some(Region::StatusBar));
}

#[test]
fn test_region_at_boundaries() {
    let regions = regions();
    // last nav row vs first body row
    assert_eq!(region_at(&regions, 0, 2), Some(Region::NavBar));
    assert_eq!(region_at(&regions, 0, 3), Some(Region::BodyPane));
    // right edge is exclusive
    assert_eq!(region_at(&regions, 59, 1), Some(Region::NavBar));
    assert_eq!(region_at(&regions, 60, 1), None);
}

#[test]
fn test_region_at_outside_everything() {
    assert_eq!(region_at(&regions(), 5, 30), None);
}

#[test]
fn test_region_at_before_first_render() {
    let empty = LayoutRegions::default();
    assert_eq!(region_at(&empty, 0, 0), None);
}
