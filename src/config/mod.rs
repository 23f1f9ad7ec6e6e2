//! Configuration loading
//!
//! Reads `config.toml` from the platform config directory when present;
//! every missing file, section or field falls back to its default.

mod loader;
mod types;

pub use loader::{load, load_from};
pub use types::{Config, ScrollConfig, TooltipConfig};
