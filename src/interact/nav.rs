// Navigation behaviors
//
// Three scroll/click behaviors share this module because they share
// the navbar: the mobile menu toggle, the scrolled-navbar emphasis,
// and the active-link highlight.

use super::{PageState, Tuning};
use crate::page::Page;

/// Scroll offset past which the navbar gets its emphasis style.
/// OFF at <= 10 units, ON at 11.
pub const EMPHASIS_THRESHOLD: u32 = 10;

/// Flip the menu open flag. The flag stands for the "active" marker on
/// both the toggle control and the menu panel, so they can never
/// disagree. No-op when the page has no nav links to show.
pub fn toggle_menu(page: &Page, state: &mut PageState) {
    if page.nav_links.is_empty() {
        return;
    }
    state.menu_open = !state.menu_open;
}

/// Force the menu closed (nav-link click or outside click).
pub fn close_menu(state: &mut PageState) {
    state.menu_open = false;
}

/// Re-derive the navbar emphasis from the current scroll offset.
/// Idempotent per event; no debouncing.
pub fn apply_navbar_emphasis(state: &mut PageState) {
    state.navbar_emphasized = state.scroll > EMPHASIS_THRESHOLD;
}

/// Re-derive the active section from the current scroll offset.
///
/// A section is "passed" once the offset reaches its top minus the
/// configured lead; the last passed section in document order wins.
/// Before any section passes, no link is active.
pub fn apply_active_link(page: &Page, state: &mut PageState, tuning: &Tuning) {
    let mut current = None;
    for section in page.sections() {
        let Some(top) = page.section_top(section) else {
            continue;
        };
        if state.scroll >= top.saturating_sub(tuning.active_offset) {
            current = Some(section);
        }
    }
    state.active_section = current;
}
