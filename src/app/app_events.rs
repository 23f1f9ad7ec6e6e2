//! Event handling

use ratatui::crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};

use super::app_state::App;
use super::{mouse_click, mouse_hover};
use crate::anchors;
use crate::layout::region_at;
use crate::tooltip;

impl App {
    /// Handle a terminal event and update application state
    pub fn handle_event(&mut self, event: Event) {
        match event {
            // Check that it's a key press event to avoid duplicates
            Event::Key(key) if key.kind == KeyEventKind::Press => self.handle_key_event(key),
            Event::Mouse(mouse) => self.handle_mouse_event(mouse),
            _ => {}
        }
    }

    /// Handle key press events
    fn handle_key_event(&mut self, key: KeyEvent) {
        match key.code {
            // Ctrl+C: Exit application
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.should_quit = true;
            }
            KeyCode::Char('q') | KeyCode::Esc => self.should_quit = true,

            // Scrolling
            KeyCode::Char('j') | KeyCode::Down => self.scroll.scroll_down(1),
            KeyCode::Char('k') | KeyCode::Up => self.scroll.scroll_up(1),
            KeyCode::PageDown => self.scroll.page_down(),
            KeyCode::PageUp => self.scroll.page_up(),
            KeyCode::Char('g') | KeyCode::Home => self.scroll.jump_to_top(),
            KeyCode::Char('G') | KeyCode::End => self.scroll.jump_to_bottom(),

            // Tooltip toggle
            KeyCode::Char('t') => {
                tooltip::handle_tooltip_toggle(&mut self.tooltip);
            }

            // Nav link selection and activation
            KeyCode::Tab => self.nav.select_next(),
            KeyCode::BackTab => self.nav.select_prev(),
            KeyCode::Enter => {
                if let Some(selected) = self.nav.selected {
                    anchors::handle_anchor_click(self, selected);
                }
            }

            _ => {}
        }
    }

    /// Handle mouse events by routing them to the region under the cursor
    fn handle_mouse_event(&mut self, mouse: MouseEvent) {
        let region = region_at(&self.layout_regions, mouse.column, mouse.row);
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                mouse_click::handle_click(self, region, mouse);
            }
            MouseEventKind::Moved => mouse_hover::handle_hover(self, region, mouse),
            MouseEventKind::ScrollDown => self.scroll.scroll_down(3),
            MouseEventKind::ScrollUp => self.scroll.scroll_up(3),
            _ => {}
        }
    }
}

#[cfg(test)]
#[path = "app_events_tests.rs"]
mod app_events_tests;
