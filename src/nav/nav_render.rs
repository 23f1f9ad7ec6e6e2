//! Navigation bar rendering

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};
use unicode_width::UnicodeWidthStr;

use super::nav_state::NavState;

const SEPARATOR: &str = " │ ";

/// Render the nav bar and record per-link hit boxes for mouse routing
pub fn render_nav(frame: &mut Frame, nav: &mut NavState, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Navigation ")
        .border_style(Style::default().fg(Color::DarkGray));
    let inner = block.inner(area);

    let mut spans = Vec::new();
    let mut hit_boxes = Vec::with_capacity(nav.links.len());
    let mut x = inner.x;

    for (index, link) in nav.links.iter().enumerate() {
        if index > 0 {
            spans.push(Span::styled(SEPARATOR, Style::default().fg(Color::DarkGray)));
            x = x.saturating_add(SEPARATOR.width() as u16);
        }

        let label_width = link.label.width().min(u16::MAX as usize) as u16;
        spans.push(Span::styled(link.label.clone(), link_style(nav, index)));

        // clamp the hit box to the drawable row
        let visible_width = label_width.min(inner.right().saturating_sub(x));
        hit_boxes.push(Rect {
            x,
            y: inner.y,
            width: visible_width,
            height: inner.height.min(1),
        });
        x = x.saturating_add(label_width);
    }

    nav.link_hit_boxes = hit_boxes;

    let content = Paragraph::new(Line::from(spans)).block(block);
    frame.render_widget(content, area);
}

fn link_style(nav: &NavState, index: usize) -> Style {
    // fragment links are the live ones; external links render muted
    let mut style = if nav.intercepted.contains(&index) {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default().fg(Color::Gray)
    };
    if nav.selected == Some(index) {
        style = style.add_modifier(Modifier::REVERSED);
    }
    style
}
