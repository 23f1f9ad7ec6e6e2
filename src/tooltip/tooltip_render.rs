//! Tooltip rendering
//!
//! Draws the visible tooltip as a small bordered popup near the cursor,
//! sized from the content's display width.

use ratatui::{
    Frame,
    style::{Color, Style},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use crate::page::Page;
use crate::widgets::popup::{clear_area, popup_near_cursor};

use super::tooltip_state::TooltipState;

/// Render the visible tooltip, if any
pub fn render_tooltip(frame: &mut Frame, state: &TooltipState, page: &Page) {
    if !state.should_show() {
        return;
    }
    let Some(tooltip) = state.visible else {
        return;
    };
    let Some(text) = page
        .body
        .get(tooltip.element)
        .and_then(|element| element.title.as_deref())
    else {
        return;
    };

    // content width plus one border cell on each side
    let width = (text.width().min(u16::MAX as usize) as u16).saturating_add(2);
    let area = popup_near_cursor(frame.area(), tooltip.at, width, 3);
    clear_area(frame, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow));
    let content = Paragraph::new(text)
        .block(block)
        .style(Style::default().fg(Color::White));

    frame.render_widget(content, area);
}
