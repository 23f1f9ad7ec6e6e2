//! Tooltip activation
//!
//! Explicit startup wiring, called once by the host app with the parsed
//! page as parameter: select every body element carrying the marker class
//! and attach a tooltip trigger to each.

use crate::page::{Page, TOOLTIP_MARKER_CLASS};

/// Capability interface for attaching tooltip triggers to elements
pub trait TooltipProvider {
    /// Attach a hover trigger to each element, given by body index
    ///
    /// Must be idempotent: activating an element twice attaches one trigger.
    fn activate(&mut self, elements: &[usize]);
}

/// Find every marker-classed element and activate tooltips on it
///
/// No-op when nothing matches.
pub fn activate_tooltips(page: &Page, provider: &mut dyn TooltipProvider) {
    let marked: Vec<usize> = page
        .body
        .iter()
        .enumerate()
        .filter(|(_, element)| element.has_class(TOOLTIP_MARKER_CLASS))
        .map(|(index, _)| index)
        .collect();

    if marked.is_empty() {
        return;
    }
    provider.activate(&marked);
}

#[cfg(test)]
#[path = "tooltip_activate_tests.rs"]
mod tooltip_activate_tests;
