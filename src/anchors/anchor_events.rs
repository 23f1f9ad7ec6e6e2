//! Anchor click interception
//!
//! Each intercepted click is handled independently and statelessly: store
//! the raw hash, look up the named target, start the scroll animation and
//! hand it a continuation that writes the hash once the animation settles.

use crate::app::App;
use crate::nav::NavState;
use crate::page::Page;
use crate::scroll::ScrollAnimator;

/// Mark the nav links whose clicks the handler intercepts
///
/// Explicit startup wiring, called once with the parsed page: exactly the
/// nav links whose href begins with `#` are intercepted. All other links
/// keep their default behavior.
pub fn attach_interceptors(page: &Page, nav: &mut NavState) {
    nav.intercepted = page
        .nav
        .iter()
        .enumerate()
        .filter(|(_, link)| link.is_fragment())
        .map(|(index, _)| index)
        .collect();
}

/// Handle a click on a nav link
///
/// For intercepted links this suppresses the default jump, animates the
/// scroll offset to the target's position and defers the hash update to
/// the animation's completion; the hash is never written synchronously
/// with the click. Returns true when the default action was suppressed.
pub fn handle_anchor_click(app: &mut App, link_index: usize) -> bool {
    if !app.nav.intercepted.contains(&link_index) {
        return false;
    }
    let Some(link) = app.nav.links.get(link_index) else {
        return false;
    };

    // prevent default jump behavior; keep the raw hash for the deferred update
    let hash = link.href.clone();
    let fragment = hash.strip_prefix('#').unwrap_or(hash.as_str()).to_string();

    let Some(target) = app.layout.named_target_offset(&fragment) else {
        // no element carries a matching name: suppress the jump and do
        // nothing else rather than chase an undefined position
        log::warn!("no element with name {:?} for {}", fragment, hash);
        return true;
    };

    let target = target.min(app.scroll.max_offset);
    app.animator.animate_scroll_to(
        app.scroll.offset,
        target,
        app.scroll_duration,
        Box::new(move |location| location.set_hash(hash)),
    );
    true
}

/// Default action for a fragment link outside the nav bar: instant jump
/// plus immediate hash update
pub fn default_anchor_jump(app: &mut App, element_index: usize) {
    let Some(element) = app.page.body.get(element_index) else {
        return;
    };
    let Some(hash) = element.fragment_href() else {
        return;
    };

    let hash = hash.to_string();
    let fragment = hash.strip_prefix('#').unwrap_or(hash.as_str());

    let Some(target) = app.layout.named_target_offset(fragment) else {
        log::warn!("no element with name {:?} for {}", fragment, hash);
        return;
    };

    app.scroll.set_offset(target);
    app.location.set_hash(hash);
}

#[cfg(test)]
#[path = "anchor_events_tests.rs"]
mod anchor_events_tests;
