// Viewport-triggered reveal with staggered delays
//
// Tracked blocks start Unseen and dimmed. The reveal watcher fires
// once when a block is 10% inside the (bottom-shrunk) viewport; the
// block then waits out its stagger delay as a scheduled task before
// turning Visible. The transition is one-shot: scrolling away never
// reverts it.

use super::{Interactions, PageState, Reveal};
use crate::page::{BlockKind, Page};
use crate::sched::TaskKey;
use std::time::Duration;

/// Fraction of a block that must be visible before it reveals
pub const THRESHOLD: f32 = 0.1;

/// Units shaved off the bottom of the viewport before testing, so
/// blocks reveal a beat after entering rather than at the very edge.
/// The watcher clamps this to a quarter of the actual viewport, which
/// on a typical terminal is what takes effect.
pub const BOTTOM_MARGIN: u32 = 100;

/// Stagger step per index within a collection (project cards, skill
/// categories): 0.1s per position
pub const STAGGER_STEP: Duration = Duration::from_millis(100);

/// Register every reveal target and assign stagger delays.
///
/// The delay assignment happens exactly once, here; it is never
/// re-evaluated. When the watcher capability is disabled, everything
/// is visible immediately.
pub fn init(page: &Page, state: &mut PageState, ix: &mut Interactions) {
    for id in page.reveal_targets() {
        let delay = match &page.block(id).map(|b| &b.kind) {
            Some(BlockKind::ProjectCard { index, .. })
            | Some(BlockKind::SkillCategory { index, .. }) => STAGGER_STEP * *index as u32,
            _ => Duration::ZERO,
        };
        state.stagger.insert(id, delay);

        if ix.observer_enabled {
            state.reveals.insert(id, Reveal::Unseen);
            ix.reveal_watcher.watch(id);
        } else {
            state.reveals.insert(id, Reveal::Visible);
        }
    }
}

/// Run the watcher against the current viewport and begin revealing
/// whatever newly intersected.
pub fn observe(page: &Page, state: &mut PageState, ix: &mut Interactions) {
    let fired = ix
        .reveal_watcher
        .intersections(page, state.scroll, state.viewport);
    for id in fired {
        if state.reveal(id) != Reveal::Unseen {
            continue;
        }
        state.reveals.insert(id, Reveal::Revealing);
        let delay = state.stagger.get(&id).copied().unwrap_or(Duration::ZERO);
        ix.sched.schedule(TaskKey::Reveal(id), delay);
    }
}

/// Complete a block's transition (its stagger task fired).
pub fn complete(state: &mut PageState, id: crate::page::BlockId) {
    state.reveals.insert(id, Reveal::Visible);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::{init as init_all, InitOptions};
    use crate::page::{sample_page, BlockId};

    /// First project card on the sample page
    fn project_card(page: &Page, nth: usize) -> BlockId {
        page.blocks
            .iter()
            .filter(|b| matches!(b.kind, BlockKind::ProjectCard { .. }))
            .nth(nth)
            .map(|b| b.id)
            .unwrap()
    }

    #[test]
    fn test_stagger_delays_grow_with_index() {
        let page = sample_page();
        let (state, _) = init_all(&page, InitOptions::default());

        for nth in 0..3 {
            let id = project_card(&page, nth);
            assert_eq!(
                state.stagger.get(&id).copied(),
                Some(STAGGER_STEP * nth as u32)
            );
        }
    }

    #[test]
    fn test_intersection_schedules_reveal_task() {
        let page = sample_page();
        let (mut state, mut ix) = init_all(&page, InitOptions::default());
        state.viewport = page.height() + BOTTOM_MARGIN; // everything visible

        observe(&page, &mut state, &mut ix);

        let id = project_card(&page, 1);
        assert_eq!(state.reveal(id), Reveal::Revealing);
        assert!(ix.sched.is_scheduled(TaskKey::Reveal(id)));

        complete(&mut state, id);
        assert_eq!(state.reveal(id), Reveal::Visible);
    }

    #[test]
    fn test_reveal_is_one_shot() {
        let page = sample_page();
        let (mut state, mut ix) = init_all(&page, InitOptions::default());
        state.viewport = page.height() + BOTTOM_MARGIN;

        observe(&page, &mut state, &mut ix);
        let id = project_card(&page, 0);
        complete(&mut state, id);

        // Scroll far away and back: the marker persists and the
        // watcher no longer tracks the block
        state.scroll = 0;
        state.viewport = 10;
        observe(&page, &mut state, &mut ix);
        assert_eq!(state.reveal(id), Reveal::Visible);
        assert!(!ix.reveal_watcher.watched().contains(&id));
    }

    #[test]
    fn test_every_target_reveals_on_a_small_terminal() {
        let page = sample_page();
        let (mut state, mut ix) = init_all(&page, InitOptions::default());
        state.viewport = 40;

        // Scroll the whole document one unit at a time, the way the
        // scroll reactions run it
        for offset in 0..=page.height() {
            state.scroll = offset;
            observe(&page, &mut state, &mut ix);
        }

        for id in page.reveal_targets() {
            assert_ne!(state.reveal(id), Reveal::Unseen, "block {:?}", id);
        }
        assert!(ix.reveal_watcher.watched().is_empty());
    }

    #[test]
    fn test_disabled_watcher_reveals_everything() {
        let page = sample_page();
        let (state, ix) = init_all(
            &page,
            InitOptions {
                observer_enabled: false,
                ..Default::default()
            },
        );

        for id in page.reveal_targets() {
            assert_eq!(state.reveal(id), Reveal::Visible);
        }
        assert!(ix.reveal_watcher.watched().is_empty());
    }
}
