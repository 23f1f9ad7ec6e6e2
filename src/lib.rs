//! navpage - terminal page viewer with tooltips and smooth anchor scrolling
//!
//! Reads a JSON page description from a file or stdin and presents it with a
//! navigation bar, a scrollable body pane and a status line. Navigation links
//! that reference an in-page fragment scroll smoothly to the named target
//! element and update the location fragment once the animation settles.
//! Elements flagged with the `has-tooltip` class show a tooltip on hover.

pub mod anchors;
pub mod app;
pub mod cli;
pub mod config;
pub mod error;
pub mod layout;
pub mod location;
pub mod nav;
pub mod page;
pub mod scroll;
pub mod test_utils;
pub mod tooltip;
pub mod widgets;
