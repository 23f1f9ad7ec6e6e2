//! Mouse click handling
//!
//! Routes click events: nav-bar clicks go through the anchor interceptor,
//! body-pane clicks on fragment links get the default jump.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use crate::anchors;
use crate::layout::Region;

/// Handle left mouse button click for the given region
pub fn handle_click(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::NavBar) => click_nav_bar(app, mouse),
        Some(Region::BodyPane) => click_body_pane(app, mouse),
        // Other regions: no click behavior
        _ => {}
    }
}

fn click_nav_bar(app: &mut App, mouse: MouseEvent) {
    let Some(link_index) = app.nav.link_at(mouse.column, mouse.row) else {
        return;
    };
    app.nav.selected = Some(link_index);
    anchors::handle_anchor_click(app, link_index);
}

fn click_body_pane(app: &mut App, mouse: MouseEvent) {
    let Some(element_index) = body_element_at(app, mouse.row) else {
        return;
    };
    // links outside the nav bar keep the default jump behavior
    anchors::default_anchor_jump(app, element_index);
}

/// Map a screen row inside the body pane to the body element shown there
pub(super) fn body_element_at(app: &App, row: u16) -> Option<usize> {
    let body = app.layout_regions.body_pane?;

    // inside the pane borders
    let inner_y = body.y.saturating_add(1);
    let inner_height = body.height.saturating_sub(2);
    if row < inner_y || row >= inner_y.saturating_add(inner_height) {
        return None;
    }

    let line = (row - inner_y).saturating_add(app.scroll.offset);
    app.layout.element_at_line(line)
}

#[cfg(test)]
#[path = "mouse_click_tests.rs"]
mod mouse_click_tests;
