//! Layout module for tracking UI component regions
//!
//! Tracks where the nav bar, body pane and status bar were rendered so
//! mouse events can be routed to the component under the cursor.

mod layout_regions;

pub use layout_hit_test::region_at;
pub use layout_regions::{LayoutRegions, Region};

#[cfg(test)]
#[path = "layout/layout_hit_test_tests.rs"]
mod layout_hit_test_tests;
