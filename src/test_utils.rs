#[cfg(test)]
pub mod test_helpers {
    use ratatui::Terminal;
    use ratatui::backend::TestBackend;
    use ratatui::crossterm::event::{
        KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };

    use crate::app::App;
    use crate::config::Config;
    use crate::page::{Page, PageReader};

    /// Page used across tests. Body line offsets (one line per text row plus
    /// a separator between elements):
    ///   0  "Summary" heading        (name = summary)
    ///   2  "12 passed" label        (has-tooltip)
    ///   4  paragraph, 3 lines
    ///   8  "plain label"
    ///   10 "Details" heading        (name = details)
    ///   12 paragraph, 6 lines
    ///   19 "back to summary" link   (href = #summary)
    ///   21 "2 skipped" label        (has-tooltip)
    pub const TEST_PAGE: &str = r##"{
        "title": "Verification report",
        "nav": [
            {"label": "Summary", "href": "#summary"},
            {"label": "Details", "href": "#details"},
            {"label": "Missing", "href": "#nowhere"},
            {"label": "Home", "href": "https://example.org"}
        ],
        "body": [
            {"kind": "heading", "text": "Summary", "name": "summary"},
            {"kind": "label", "text": "12 passed", "classes": ["has-tooltip"], "title": "All test cases succeeded"},
            {"kind": "paragraph", "text": "Twelve cases ran\nagainst the current\nlibrary build."},
            {"kind": "label", "text": "plain label"},
            {"kind": "heading", "text": "Details", "name": "details"},
            {"kind": "paragraph", "text": "one\ntwo\nthree\nfour\nfive\nsix"},
            {"kind": "link", "text": "back to summary", "href": "#summary"},
            {"kind": "label", "text": "2 skipped", "classes": ["has-tooltip"], "title": "Skipped on request"}
        ]
    }"##;

    pub fn test_page() -> Page {
        PageReader::parse(TEST_PAGE).unwrap()
    }

    pub fn test_app() -> App {
        App::new(test_page(), "page.json", &Config::default())
    }

    pub fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::empty())
    }

    pub fn mouse_click(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    pub fn mouse_move(column: u16, row: u16) -> MouseEvent {
        MouseEvent {
            kind: MouseEventKind::Moved,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        }
    }

    /// Render once at the given size so layout regions and scroll bounds are
    /// populated, like the first frame of the real event loop
    pub fn render_once(app: &mut App, width: u16, height: u16) {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
    }

    /// Render once and return the frame content as plain text rows
    pub fn render_to_string(app: &mut App, width: u16, height: u16) -> String {
        let backend = TestBackend::new(width, height);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();
        terminal.backend().to_string()
    }
}
