//! Location state shown in the status bar

mod location_state;

pub use location_state::LocationState;
