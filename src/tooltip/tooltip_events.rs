//! Tooltip hover events

use crate::page::Page;

use super::tooltip_state::TooltipState;

/// Update tooltip visibility for a hover over the given body element
///
/// Shows the tooltip only when the element is activated and carries
/// non-empty `title` content; everything else hides it.
pub fn hover_element(
    state: &mut TooltipState,
    page: &Page,
    element: Option<usize>,
    at: (u16, u16),
) {
    let Some(index) = element else {
        state.hide();
        return;
    };

    if !state.enabled || !state.is_armed(index) {
        state.hide();
        return;
    }

    let has_content = page
        .body
        .get(index)
        .and_then(|element| element.title.as_deref())
        .is_some_and(|title| !title.is_empty());

    if has_content {
        state.show(index, at);
    } else {
        state.hide();
    }
}

pub fn handle_tooltip_toggle(state: &mut TooltipState) -> bool {
    state.toggle();
    true
}

#[cfg(test)]
#[path = "tooltip_events_tests.rs"]
mod tooltip_events_tests;
