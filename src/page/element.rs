//! Page element model
//!
//! Class lists are selection flags, `name` marks a scroll target (legacy
//! named-anchor convention, distinct from id-based targeting), `title`
//! carries tooltip content and `href` makes an element a link.

use serde::Deserialize;

/// Class that flags an element as tooltip-eligible
pub const TOOLTIP_MARKER_CLASS: &str = "has-tooltip";

/// Element kinds the body renderer understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Heading,
    Paragraph,
    Label,
    Link,
}

/// A single body element
#[derive(Debug, Clone, Deserialize)]
pub struct Element {
    pub kind: ElementKind,
    pub text: String,
    #[serde(default)]
    pub classes: Vec<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub href: Option<String>,
    #[serde(default)]
    pub title: Option<String>,
}

impl Element {
    /// Check whether the element's class list contains `class`
    pub fn has_class(&self, class: &str) -> bool {
        self.classes.iter().any(|c| c == class)
    }

    /// The element's href when it is an in-page fragment reference
    ///
    /// Returns the raw hash including the leading `#`.
    pub fn fragment_href(&self) -> Option<&str> {
        self.href.as_deref().filter(|href| href.starts_with('#'))
    }
}

/// A navigation bar link
#[derive(Debug, Clone, Deserialize)]
pub struct NavLink {
    pub label: String,
    pub href: String,
}

impl NavLink {
    /// Whether the link points at an in-page fragment
    pub fn is_fragment(&self) -> bool {
        self.href.starts_with('#')
    }
}

/// A parsed page: title, nav links and body elements
#[derive(Debug, Clone, Deserialize)]
pub struct Page {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub nav: Vec<NavLink>,
    #[serde(default)]
    pub body: Vec<Element>,
}

#[cfg(test)]
#[path = "element_tests.rs"]
mod element_tests;
