//! Mouse hover handling
//!
//! Moves tooltip visibility with the cursor: hovering an activated element
//! with tooltip content shows the popup, anything else hides it.

use ratatui::crossterm::event::MouseEvent;

use super::app_state::App;
use super::mouse_click::body_element_at;
use crate::layout::Region;
use crate::tooltip;

/// Handle mouse hover for the given region
pub fn handle_hover(app: &mut App, region: Option<Region>, mouse: MouseEvent) {
    match region {
        Some(Region::BodyPane) => hover_body_pane(app, mouse),
        _ => app.tooltip.hide(),
    }
}

fn hover_body_pane(app: &mut App, mouse: MouseEvent) {
    let element = body_element_at(app, mouse.row);
    tooltip::hover_element(
        &mut app.tooltip,
        &app.page,
        element,
        (mouse.column, mouse.row),
    );
}

#[cfg(test)]
#[path = "mouse_hover_tests.rs"]
mod mouse_hover_tests;
