use ratatui::{Frame, layout::Rect, widgets::Clear};

/// Place a popup near a cursor position, clamped to the frame
///
/// Prefers the row below the cursor and flips above when there is no room.
pub fn popup_near_cursor(frame_area: Rect, cursor: (u16, u16), width: u16, height: u16) -> Rect {
    let width = width.min(frame_area.width);
    let height = height.min(frame_area.height);
    let (cursor_x, cursor_y) = cursor;

    let x = cursor_x.min(frame_area.width.saturating_sub(width));
    let below = cursor_y.saturating_add(1);
    let y = if below.saturating_add(height) <= frame_area.height {
        below
    } else {
        cursor_y.saturating_sub(height)
    };

    Rect {
        x,
        y,
        width,
        height,
    }
}

pub fn clear_area(frame: &mut Frame, area: Rect) {
    frame.render_widget(Clear, area);
}

#[cfg(test)]
#[path = "popup_tests.rs"]
mod popup_tests;
