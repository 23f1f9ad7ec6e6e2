//! Body layout
//!
//! Flows the body elements into display lines once at startup. Line indices
//! are the vertical-offset coordinate system used by scrolling and anchor
//! navigation, so they must not depend on terminal width: lines are never
//! wrapped, only truncated at render time.

use super::element::Page;

/// One display line and the body element it belongs to
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LayoutLine {
    pub text: String,
    /// Index into `Page::body`; None for separator lines
    pub element: Option<usize>,
}

/// Flowed body lines plus the named-target offset table
#[derive(Debug, Clone, Default)]
pub struct PageLayout {
    pub lines: Vec<LayoutLine>,
    /// `name` attribute -> vertical offset of the owning element, in document order
    targets: Vec<(String, u16)>,
}

impl PageLayout {
    /// Flow a page body into display lines
    ///
    /// Each element contributes one line per `\n`-separated row of its text,
    /// followed by a blank separator line (except after the last element).
    /// An element's vertical offset is the index of its first line.
    pub fn flow(page: &Page) -> Self {
        let mut lines = Vec::new();
        let mut targets = Vec::new();

        for (index, element) in page.body.iter().enumerate() {
            if let Some(name) = &element.name {
                let offset = lines.len().min(u16::MAX as usize) as u16;
                targets.push((name.clone(), offset));
            }

            for row in element.text.split('\n') {
                lines.push(LayoutLine {
                    text: row.to_string(),
                    element: Some(index),
                });
            }

            if index + 1 < page.body.len() {
                lines.push(LayoutLine {
                    text: String::new(),
                    element: None,
                });
            }
        }

        Self { lines, targets }
    }

    /// Total number of body lines
    pub fn line_count(&self) -> u32 {
        self.lines.len().min(u32::MAX as usize) as u32
    }

    /// Vertical offset of the first element whose `name` equals `fragment`
    ///
    /// Document order decides ties. Returns None when no element carries a
    /// matching name; callers must treat that as a no-op.
    pub fn named_target_offset(&self, fragment: &str) -> Option<u16> {
        self.targets
            .iter()
            .find(|(name, _)| name == fragment)
            .map(|(_, offset)| *offset)
    }

    /// The body element owning the given line, if any
    pub fn element_at_line(&self, line: u16) -> Option<usize> {
        self.lines.get(line as usize).and_then(|l| l.element)
    }
}

#[cfg(test)]
#[path = "page_layout_tests.rs"]
mod page_layout_tests;
