use std::collections::HashSet;

use ratatui::layout::{Position, Rect};

use crate::page::{NavLink, Page};

/// Navigation bar state
pub struct NavState {
    pub links: Vec<NavLink>,
    /// Link indices whose clicks the anchor handler intercepts
    pub intercepted: HashSet<usize>,
    /// Selected link index (keyboard navigation)
    pub selected: Option<usize>,
    /// Screen rectangle of each link from the last render
    pub link_hit_boxes: Vec<Rect>,
}

impl NavState {
    /// Collect the nav links from the page
    pub fn from_page(page: &Page) -> Self {
        Self {
            links: page.nav.clone(),
            intercepted: HashSet::new(),
            selected: None,
            link_hit_boxes: Vec::new(),
        }
    }

    pub fn select_next(&mut self) {
        if self.links.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(index) => (index + 1) % self.links.len(),
            None => 0,
        });
    }

    pub fn select_prev(&mut self) {
        if self.links.is_empty() {
            return;
        }
        self.selected = Some(match self.selected {
            Some(0) | None => self.links.len() - 1,
            Some(index) => index - 1,
        });
    }

    /// The link under the given screen position, from the last render
    pub fn link_at(&self, column: u16, row: u16) -> Option<usize> {
        let position = Position::new(column, row);
        self.link_hit_boxes
            .iter()
            .position(|hit_box| hit_box.contains(position))
    }
}

#[cfg(test)]
#[path = "nav_state_tests.rs"]
mod nav_state_tests;
