// Typing effect for the hero role lines
//
// Off by default; enabled via config or --typing. Each role line's
// text is captured and cleared at init, then revealed one character
// per interval by a rescheduling task, with starts staggered across
// lines. Every timer is a keyed task, so a line's typing can be
// cancelled mid-flight.

use super::{PageState, TypingLine};
use crate::page::{BlockKind, Page};
use crate::sched::{Scheduler, TaskKey};
use std::time::Duration;

/// Interval between revealed characters
pub const CHAR_INTERVAL: Duration = Duration::from_millis(50);

/// Staggered start per role line index
pub const START_STAGGER: Duration = Duration::from_millis(500);

/// Capture and clear every hero role line, scheduling the staggered
/// starts. No-op when the page has no hero roles.
pub fn init(page: &Page, state: &mut PageState, sched: &mut Scheduler) {
    for block in &page.blocks {
        let BlockKind::Hero { roles, .. } = &block.kind else {
            continue;
        };
        for (line, text) in roles.iter().enumerate() {
            let index = state.typing.len();
            state.typing.push(TypingLine {
                block: block.id,
                line,
                full: text.clone(),
                shown: 0,
                started: false,
            });
            sched.schedule(TaskKey::TypeStart(index), START_STAGGER * index as u32);
        }
    }
}

/// The staggered start fired: the line becomes visible (empty) and the
/// first character is queued.
pub fn start_line(state: &mut PageState, sched: &mut Scheduler, index: usize) {
    let Some(entry) = state.typing.get_mut(index) else {
        return;
    };
    entry.started = true;
    if !entry.full.is_empty() {
        sched.schedule(TaskKey::TypeChar(index), CHAR_INTERVAL);
    }
}

/// Reveal the next character, rescheduling until the line completes.
pub fn type_char(state: &mut PageState, sched: &mut Scheduler, index: usize) {
    let Some(entry) = state.typing.get_mut(index) else {
        return;
    };
    let total = entry.full.chars().count();
    if entry.shown < total {
        entry.shown += 1;
    }
    if entry.shown < total {
        sched.schedule(TaskKey::TypeChar(index), CHAR_INTERVAL);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::sample_page;

    fn setup() -> (Page, PageState, Scheduler) {
        let page = sample_page();
        let mut state = PageState::default();
        let mut sched = Scheduler::new();
        init(&page, &mut state, &mut sched);
        (page, state, sched)
    }

    #[test]
    fn test_init_captures_and_clears_lines() {
        let (_page, state, sched) = setup();

        assert_eq!(state.typing.len(), 3);
        for (i, line) in state.typing.iter().enumerate() {
            assert!(!line.full.is_empty());
            assert_eq!(line.shown, 0);
            assert!(!line.started);
            assert!(sched.is_scheduled(TaskKey::TypeStart(i)));
        }
    }

    #[test]
    fn test_typing_reveals_characters_in_order() {
        let (_page, mut state, mut sched) = setup();

        start_line(&mut state, &mut sched, 0);
        assert!(state.typing[0].started);
        assert!(sched.is_scheduled(TaskKey::TypeChar(0)));

        let total = state.typing[0].full.chars().count();
        for expected in 1..=total {
            // The event loop drains the fired key via `due` before
            // running the task; mirror that drain here.
            sched.cancel(TaskKey::TypeChar(0));
            type_char(&mut state, &mut sched, 0);
            assert_eq!(state.typing[0].shown, expected);
        }
        // Completed line stops rescheduling
        assert!(!sched.is_scheduled(TaskKey::TypeChar(0)));
    }

    #[test]
    fn test_cancel_stops_a_line_mid_flight() {
        let (_page, mut state, mut sched) = setup();

        start_line(&mut state, &mut sched, 1);
        type_char(&mut state, &mut sched, 1);
        assert!(sched.is_scheduled(TaskKey::TypeChar(1)));

        sched.cancel(TaskKey::TypeChar(1));
        assert!(!sched.is_scheduled(TaskKey::TypeChar(1)));
        // Revealed characters stay revealed
        assert_eq!(state.typing[1].shown, 1);
    }

    #[test]
    fn test_out_of_range_index_is_ignored() {
        let (_page, mut state, mut sched) = setup();
        start_line(&mut state, &mut sched, 42);
        type_char(&mut state, &mut sched, 42);
        assert!(!sched.is_scheduled(TaskKey::TypeChar(42)));
    }
}
