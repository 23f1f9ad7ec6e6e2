//! In-page anchor navigation
//!
//! The navigation bar's fragment links get a click interceptor: instead of
//! the default instant jump, the viewport scrolls smoothly to the named
//! target element and the location fragment updates only after the
//! animation settles. Links outside the nav bar keep the default behavior.

mod anchor_events;

pub use anchor_events::{attach_interceptors, default_anchor_jump, handle_anchor_click};
