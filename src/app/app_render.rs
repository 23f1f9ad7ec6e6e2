//! UI rendering

use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::app_state::App;
use crate::nav::render_nav;
use crate::page::{Element, ElementKind, TOOLTIP_MARKER_CLASS};
use crate::tooltip::render_tooltip;

impl App {
    /// Render the UI and record component regions for mouse routing
    pub fn render(&mut self, frame: &mut Frame) {
        let layout = Layout::vertical([
            Constraint::Length(3), // Nav bar
            Constraint::Min(3),    // Body pane takes most of the space
            Constraint::Length(1), // Status bar
        ])
        .split(frame.area());

        let nav_area = layout[0];
        let body_area = layout[1];
        let status_area = layout[2];

        self.layout_regions.nav_bar = Some(nav_area);
        self.layout_regions.body_pane = Some(body_area);
        self.layout_regions.status_bar = Some(status_area);

        render_nav(frame, &mut self.nav, nav_area);
        self.render_body(frame, body_area);
        self.render_status_bar(frame, status_area);

        // tooltip overlays everything else
        render_tooltip(frame, &self.tooltip, &self.page);
    }

    /// Render the scrollable body pane
    fn render_body(&mut self, frame: &mut Frame, area: Rect) {
        let viewport_height = area.height.saturating_sub(2);
        self.scroll.update_bounds(self.layout.line_count(), viewport_height);

        let lines: Vec<Line> = self
            .layout
            .lines
            .iter()
            .map(|layout_line| {
                let style = layout_line
                    .element
                    .and_then(|index| self.page.body.get(index))
                    .map(element_style)
                    .unwrap_or_default();
                Line::from(Span::styled(layout_line.text.clone(), style))
            })
            .collect();

        let title = format!(" {} ", self.page.title.as_deref().unwrap_or("Page"));
        let block = Block::default()
            .borders(Borders::ALL)
            .title(title)
            .border_style(Style::default().fg(Color::Cyan));

        let content = Paragraph::new(lines)
            .block(block)
            .scroll((self.scroll.offset, 0));

        frame.render_widget(content, area);
    }

    /// Render the status bar (location plus key hints)
    fn render_status_bar(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled(self.location.display(), Style::default().fg(Color::White)),
            Span::raw("  "),
            Span::styled(
                "q quit · j/k scroll · Tab links · t tooltips",
                Style::default().fg(Color::DarkGray),
            ),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

fn element_style(element: &Element) -> Style {
    match element.kind {
        ElementKind::Heading => Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
        ElementKind::Link => Style::default()
            .fg(Color::Cyan)
            .add_modifier(Modifier::UNDERLINED),
        ElementKind::Label if element.has_class(TOOLTIP_MARKER_CLASS) => {
            Style::default().fg(Color::Yellow)
        }
        ElementKind::Label => Style::default().fg(Color::Gray),
        ElementKind::Paragraph => Style::default(),
    }
}

#[cfg(test)]
#[path = "app_render_tests.rs"]
mod app_render_tests;
