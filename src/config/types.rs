// Configuration type definitions

use std::time::Duration;

use serde::Deserialize;

use crate::scroll::{DEFAULT_SCROLL_DURATION, Easing};

/// Tooltip configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct TooltipConfig {
    /// Show tooltips on hover without toggling first
    #[serde(default = "default_true")]
    pub auto_show: bool,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        TooltipConfig { auto_show: true }
    }
}

/// Scroll animation configuration section
#[derive(Debug, Clone, Deserialize)]
pub struct ScrollConfig {
    /// Anchor scroll animation duration in milliseconds
    #[serde(default = "default_duration_ms")]
    pub duration_ms: u64,
    #[serde(default)]
    pub easing: Easing,
}

impl ScrollConfig {
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.duration_ms)
    }
}

impl Default for ScrollConfig {
    fn default() -> Self {
        ScrollConfig {
            duration_ms: default_duration_ms(),
            easing: Easing::default(),
        }
    }
}

/// Root configuration structure
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub tooltip: TooltipConfig,
    #[serde(default)]
    pub scroll: ScrollConfig,
}

fn default_true() -> bool {
    true
}

fn default_duration_ms() -> u64 {
    DEFAULT_SCROLL_DURATION.as_millis() as u64
}

#[cfg(test)]
#[path = "types_tests.rs"]
mod types_tests;
