//! Page model
//!
//! The page is the transient stand-in for a document tree: element data is
//! looked up once at startup and never persisted. `element` holds the model
//! types, `page_reader` loads a page from stdin or a file, and `page_layout`
//! flows the body into the display lines that scrolling and anchor
//! navigation address.

mod element;
mod page_layout;
mod page_reader;

pub use element::{Element, ElementKind, NavLink, Page, TOOLTIP_MARKER_CLASS};
pub use page_layout::{LayoutLine, PageLayout};
pub use page_reader::PageReader;
