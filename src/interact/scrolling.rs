// Smooth anchor scrolling
//
// Nav-link clicks never jump: they set a glide target (the section top
// minus the navbar correction) and the tick handler moves the offset a
// fraction of the remaining distance per frame until it lands. Any
// manual scroll cancels the glide - the user took control.

use super::{PageState, Tuning};
use crate::page::Page;

/// Fraction of the remaining distance covered per tick (1/N)
const GLIDE_DIVISOR: u32 = 4;

/// Relative scroll. Cancels a running glide and clamps to the page.
pub fn scroll_by(page: &Page, state: &mut PageState, delta: i32) {
    state.glide = None;
    let max = state.max_scroll(page);
    let next = state.scroll as i64 + delta as i64;
    state.scroll = next.clamp(0, max as i64) as u32;
}

/// Absolute scroll. Cancels a running glide and clamps to the page.
pub fn scroll_to(page: &Page, state: &mut PageState, offset: u32) {
    state.glide = None;
    state.scroll = offset.min(state.max_scroll(page));
}

/// Handle a click on nav link `index`.
///
/// The bare "#" link (no target) is skipped, as is a target that
/// resolves to nothing on this page. Otherwise the glide target is the
/// section top corrected for the fixed navbar, clamped to the page.
pub fn anchor_click(page: &Page, state: &mut PageState, tuning: &Tuning, index: usize) {
    let Some(link) = page.nav_links.get(index) else {
        return;
    };
    let Some(section) = link.target else {
        return; // bare "#"
    };
    let Some(top) = page.section_top(section) else {
        return; // fragment resolves to nothing
    };
    let target = top
        .saturating_sub(tuning.navbar_height)
        .min(state.max_scroll(page));
    state.glide = Some(target);
}

/// Advance a running glide by one tick. Returns true if the offset
/// moved (callers re-run the scroll reactions).
pub fn glide_step(page: &Page, state: &mut PageState) -> bool {
    let Some(target) = state.glide else {
        return false;
    };
    let target = target.min(state.max_scroll(page));
    if state.scroll == target {
        state.glide = None;
        return false;
    }

    let remaining = state.scroll.abs_diff(target);
    let step = (remaining / GLIDE_DIVISOR).max(1);
    if state.scroll < target {
        state.scroll += step;
    } else {
        state.scroll -= step;
    }
    if state.scroll == target {
        state.glide = None;
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{BlockKind, NavLink, Page, SectionId};

    fn page() -> Page {
        let kinds = vec![
            (SectionId::Hero, BlockKind::Spacer { units: 300 }),
            (SectionId::Projects, BlockKind::Spacer { units: 300 }),
            (SectionId::Contact, BlockKind::Spacer { units: 300 }),
        ];
        Page::build(
            "test",
            vec![
                NavLink {
                    label: "#".into(),
                    target: None,
                },
                NavLink {
                    label: "Projects".into(),
                    target: Some(SectionId::Projects),
                },
                NavLink {
                    label: "Missing".into(),
                    target: Some(SectionId::About),
                },
            ],
            kinds,
        )
    }

    fn state(viewport: u32) -> PageState {
        PageState {
            viewport,
            ..Default::default()
        }
    }

    #[test]
    fn test_anchor_click_targets_top_minus_navbar() {
        let page = page();
        let mut state = state(50);
        let tuning = Tuning::default();

        anchor_click(&page, &mut state, &tuning, 1);
        // Projects top 300, navbar height 80
        assert_eq!(state.glide, Some(220));
    }

    #[test]
    fn test_bare_hash_and_missing_targets_are_noops() {
        let page = page();
        let tuning = Tuning::default();

        let mut state = state(50);
        anchor_click(&page, &mut state, &tuning, 0);
        assert_eq!(state.glide, None, "bare # link");

        anchor_click(&page, &mut state, &tuning, 2);
        assert_eq!(state.glide, None, "unresolvable fragment");

        anchor_click(&page, &mut state, &tuning, 9);
        assert_eq!(state.glide, None, "out of range");
    }

    #[test]
    fn test_glide_converges_and_clears() {
        let page = page();
        let mut state = state(50);
        state.glide = Some(220);

        let mut steps = 0;
        while glide_step(&page, &mut state) {
            steps += 1;
            assert!(steps < 1000, "glide must terminate");
        }
        assert_eq!(state.scroll, 220);
        assert_eq!(state.glide, None);
        // Steady state: no further movement
        assert!(!glide_step(&page, &mut state));
    }

    #[test]
    fn test_manual_scroll_cancels_glide() {
        let page = page();
        let mut state = state(50);
        state.glide = Some(220);

        scroll_by(&page, &mut state, 5);
        assert_eq!(state.glide, None);
        assert_eq!(state.scroll, 5);
    }

    #[test]
    fn test_scroll_clamps_to_document() {
        let page = page(); // height 900
        let mut state = state(100);

        scroll_by(&page, &mut state, -10);
        assert_eq!(state.scroll, 0);

        scroll_by(&page, &mut state, 10_000);
        assert_eq!(state.scroll, 800);

        scroll_to(&page, &mut state, 10_000);
        assert_eq!(state.scroll, 800);
    }
}
