//! Tooltip module
//!
//! Hover tooltips for body elements flagged with the marker class.
//! Activation happens once at startup over the parsed page; after that,
//! moving the mouse over an activated element shows its `title` text in a
//! popup near the cursor. Tooltips never touch scroll or location state.

mod tooltip_activate;
mod tooltip_events;
mod tooltip_render;
mod tooltip_state;

pub use tooltip_activate::{TooltipProvider, activate_tooltips};
pub use tooltip_events::{handle_tooltip_toggle, hover_element};
pub use tooltip_render::render_tooltip;
pub use tooltip_state::{HoverTooltip, TooltipState};
