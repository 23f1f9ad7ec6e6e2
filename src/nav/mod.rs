//! Navigation bar
//!
//! Collects the page's nav links at startup and tracks keyboard selection
//! plus the screen rectangle of each link from the last render, so mouse
//! clicks can be mapped back to a link.

mod nav_render;
mod nav_state;

pub use nav_render::render_nav;
pub use nav_state::NavState;
