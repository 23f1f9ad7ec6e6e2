//! Application state

use std::time::{Duration, Instant};

use crate::anchors;
use crate::config::Config;
use crate::layout::LayoutRegions;
use crate::location::LocationState;
use crate::nav::NavState;
use crate::page::{Page, PageLayout};
use crate::scroll::{ScrollAnimator, ScrollState, TickAnimator};
use crate::tooltip::{TooltipState, activate_tooltips};

/// Poll timeout while a scroll animation is running
const ANIMATION_TICK: Duration = Duration::from_millis(16);
/// Poll timeout when idle
const IDLE_TICK: Duration = Duration::from_millis(250);

/// Application state
pub struct App {
    pub page: Page,
    pub layout: PageLayout,
    pub nav: NavState,
    pub scroll: ScrollState,
    pub animator: TickAnimator,
    pub tooltip: TooltipState,
    pub location: LocationState,
    pub layout_regions: LayoutRegions,
    pub scroll_duration: Duration,
    pub should_quit: bool,
}

impl App {
    /// Create a new App instance and run the startup wiring
    ///
    /// This is the page-ready moment: tooltips are activated over the
    /// parsed page and the nav anchor interceptors are attached, both as
    /// explicit calls taking the page as parameter.
    pub fn new(page: Page, source: impl Into<String>, config: &Config) -> Self {
        let layout = PageLayout::flow(&page);

        let mut nav = NavState::from_page(&page);
        anchors::attach_interceptors(&page, &mut nav);

        let mut tooltip = TooltipState::new(config.tooltip.auto_show);
        activate_tooltips(&page, &mut tooltip);

        Self {
            page,
            layout,
            nav,
            scroll: ScrollState::new(),
            animator: TickAnimator::new(config.scroll.easing),
            tooltip,
            location: LocationState::new(source),
            layout_regions: LayoutRegions::default(),
            scroll_duration: config.scroll.duration(),
            should_quit: false,
        }
    }

    /// Check if the application should quit
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Poll timeout for the event loop
    pub fn tick_rate(&self) -> Duration {
        if self.animator.is_active() {
            ANIMATION_TICK
        } else {
            IDLE_TICK
        }
    }

    /// Advance the scroll animation and run its completion when it settles
    ///
    /// The completion continuation is the only deferred writer of the
    /// location hash, so the hash can never change before the animation
    /// has settled at its target.
    pub fn tick(&mut self, now: Instant) {
        if let Some(frame) = self.animator.tick(now) {
            self.scroll.set_offset(frame.offset);
            if let Some(on_complete) = frame.completed {
                on_complete(&mut self.location);
            }
        }
    }
}

#[cfg(test)]
#[path = "app_state_tests.rs"]
mod app_state_tests;
