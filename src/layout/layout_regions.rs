use ratatui::layout::Rect;

/// UI components that occupy screen regions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Region {
    NavBar,
    BodyPane,
    StatusBar,
}

/// Screen rectangles recorded during the last render
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutRegions {
    pub nav_bar: Option<Rect>,
    pub body_pane: Option<Rect>,
    pub status_bar: Option<Rect>,
}
