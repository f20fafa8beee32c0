// Interaction layer - explicit UI state and pure event reducers
//
// This is the page-interaction layer: every behavior the page has
// (menu toggle, scroll styling, active-link highlight, smooth anchor
// scrolling, viewport reveals, typing effect, tag toggles, lazy image
// loading, clipboard copy, form validation) is a reducer over
// (PageState, UiEvent). Reducers never touch the terminal; side
// effects that must leave the state object (toasts, clipboard writes)
// are returned as `Effect` values for the tui layer to apply.
//
// State that the original page encodes as marker classes lives here as
// plain fields: open/emphasized/active flags, a per-block reveal FSM,
// per-tag selection, per-image load state, and form field errors.

pub mod email;
pub mod form;
pub mod lazy;
pub mod nav;
pub mod reveal;
pub mod scrolling;
pub mod tags;
pub mod typing;

use crate::events::{FormEvent, UiEvent};
use crate::observer::VisibilityWatcher;
use crate::page::{BlockId, BlockKind, Page, SectionId, TagId};
use crate::sched::{Scheduler, TaskKey};
use std::collections::{HashMap, HashSet};
use std::time::{Duration, Instant};

/// Reveal state of a tracked block. Strictly forward-only: a block
/// never returns to `Unseen`, no matter where the page scrolls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Reveal {
    #[default]
    Unseen,
    /// Intersected the viewport; waiting out its stagger delay
    Revealing,
    Visible,
}

/// Load state of a lazily loaded image.
#[derive(Debug, Clone, Default)]
pub struct ImageState {
    /// Active source, swapped in from the deferred source on first
    /// intersection (or eagerly when the watcher is unavailable)
    pub source: Option<Vec<&'static str>>,
    pub loaded: bool,
}

/// A role line being typed out character by character.
#[derive(Debug, Clone)]
pub struct TypingLine {
    pub block: BlockId,
    pub line: usize,
    pub full: String,
    /// Characters revealed so far
    pub shown: usize,
    /// False until the staggered start fires (rendered blank before)
    pub started: bool,
}

/// One form field's text and inline error.
#[derive(Debug, Clone, Default)]
pub struct FieldState {
    pub value: String,
    pub error: Option<String>,
}

/// Contact form state.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    pub focus: Option<crate::events::Field>,
    pub name: FieldState,
    pub email: FieldState,
    pub message: FieldState,
}

impl FormState {
    pub fn field(&self, field: crate::events::Field) -> &FieldState {
        match field {
            crate::events::Field::Name => &self.name,
            crate::events::Field::Email => &self.email,
            crate::events::Field::Message => &self.message,
        }
    }

    pub fn field_mut(&mut self, field: crate::events::Field) -> &mut FieldState {
        match field {
            crate::events::Field::Name => &mut self.name,
            crate::events::Field::Email => &mut self.email,
            crate::events::Field::Message => &mut self.message,
        }
    }

    /// Clear all values, errors, and focus (after a successful submit)
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

/// The explicit UI state the renderer reads. Nothing outside this
/// struct (plus the toast list owned by the tui layer) changes how the
/// page draws.
#[derive(Debug, Clone, Default)]
pub struct PageState {
    /// Unit index at the top of the viewport
    pub scroll: u32,
    /// Viewport height in units, updated by the tui layer each frame
    pub viewport: u32,
    /// Mobile menu open flag (marker on toggle and panel together)
    pub menu_open: bool,
    /// Navbar emphasis applied past the scroll threshold
    pub navbar_emphasized: bool,
    /// Section whose nav link is highlighted, if any
    pub active_section: Option<SectionId>,
    /// Smooth-scroll target; `None` when no animation is running
    pub glide: Option<u32>,
    pub reveals: HashMap<BlockId, Reveal>,
    /// Per-block stagger delay, assigned once at init
    pub stagger: HashMap<BlockId, Duration>,
    pub selected_tags: HashSet<TagId>,
    pub images: HashMap<BlockId, ImageState>,
    pub typing: Vec<TypingLine>,
    pub form: FormState,
}

impl PageState {
    pub fn reveal(&self, id: BlockId) -> Reveal {
        self.reveals.get(&id).copied().unwrap_or(Reveal::Visible)
    }

    pub fn tag_selected(&self, tag: TagId) -> bool {
        self.selected_tags.contains(&tag)
    }

    /// Typing entry for a given hero role line, if the effect is on
    pub fn typing_line(&self, block: BlockId, line: usize) -> Option<&TypingLine> {
        self.typing
            .iter()
            .find(|t| t.block == block && t.line == line)
    }

    /// Largest valid scroll offset for the current viewport
    pub fn max_scroll(&self, page: &Page) -> u32 {
        page.height().saturating_sub(self.viewport)
    }
}

/// Scroll thresholds that depend on page proportions; configurable,
/// with defaults tuned to the sample page.
#[derive(Debug, Clone, Copy)]
pub struct Tuning {
    /// A section is "passed" when scroll >= top - active_offset
    pub active_offset: u32,
    /// Anchor scrolling lands navbar_height units above the section
    pub navbar_height: u32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            active_offset: 200,
            navbar_height: 80,
        }
    }
}

/// Everything the reducers drive besides the state itself: the task
/// scheduler and the two visibility watchers.
#[derive(Debug)]
pub struct Interactions {
    pub sched: Scheduler,
    pub reveal_watcher: VisibilityWatcher,
    pub image_watcher: VisibilityWatcher,
    /// False disables the watchers (lazy images resolve eagerly,
    /// reveals apply immediately)
    pub observer_enabled: bool,
    pub tuning: Tuning,
}

/// Side effects a reducer cannot apply itself.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Show a transient notification
    Notify(String),
    /// Write the extracted email address to the system clipboard.
    /// The tui layer notifies on success and stays silent on failure.
    CopyEmail(String),
    /// A toast's display window elapsed; begin its fade
    ToastFade(u64),
    /// A toast's fade elapsed; remove it
    ToastRemove(u64),
}

/// Initialization options, resolved from config and CLI.
#[derive(Debug, Clone, Copy)]
pub struct InitOptions {
    pub tuning: Tuning,
    pub observer_enabled: bool,
    /// Typing effect is off unless explicitly enabled
    pub typing_effect: bool,
}

impl Default for InitOptions {
    fn default() -> Self {
        Self {
            tuning: Tuning::default(),
            observer_enabled: true,
            typing_effect: false,
        }
    }
}

/// Initialize all behaviors against a page.
///
/// Mirrors the page's init sequence: reveal targets registered and
/// given their stagger delays, lazy images registered (or eagerly
/// resolved), typing lines captured and their staggered starts
/// scheduled when the effect is enabled.
pub fn init(page: &Page, opts: InitOptions) -> (PageState, Interactions) {
    let mut state = PageState::default();
    let mut ix = Interactions {
        sched: Scheduler::new(),
        reveal_watcher: VisibilityWatcher::new(reveal::THRESHOLD, reveal::BOTTOM_MARGIN),
        image_watcher: VisibilityWatcher::new(0.0, 0),
        observer_enabled: opts.observer_enabled,
        tuning: opts.tuning,
    };

    reveal::init(page, &mut state, &mut ix);
    lazy::init(page, &mut state, &mut ix);
    if opts.typing_effect {
        typing::init(page, &mut state, &mut ix.sched);
    }

    (state, ix)
}

/// Apply one event to the state. Returns effects for the tui layer.
pub fn dispatch(
    page: &Page,
    state: &mut PageState,
    ix: &mut Interactions,
    event: UiEvent,
) -> Vec<Effect> {
    match event {
        UiEvent::ScrollBy(delta) => {
            scrolling::scroll_by(page, state, delta);
            on_scroll(page, state, ix);
            Vec::new()
        }
        UiEvent::ScrollTo(offset) => {
            scrolling::scroll_to(page, state, offset);
            on_scroll(page, state, ix);
            Vec::new()
        }
        UiEvent::MenuToggle => {
            nav::toggle_menu(page, state);
            Vec::new()
        }
        UiEvent::NavLinkClick(index) => {
            nav::close_menu(state);
            scrolling::anchor_click(page, state, &ix.tuning, index);
            Vec::new()
        }
        UiEvent::OutsideClick => {
            nav::close_menu(state);
            Vec::new()
        }
        UiEvent::TagClick(tag) => {
            tags::toggle(page, state, tag);
            Vec::new()
        }
        UiEvent::EmailContextMenu => page
            .email_href()
            .and_then(email::address_from_href)
            .map(|addr| vec![Effect::CopyEmail(addr.to_string())])
            .unwrap_or_default(),
        UiEvent::Form(event) => form::handle(state, event),
        UiEvent::Tick => {
            if scrolling::glide_step(page, state) {
                on_scroll(page, state, ix);
            }
            let mut effects = Vec::new();
            for key in ix.sched.due(Instant::now()) {
                effects.extend(run_task(page, state, ix, key));
            }
            effects
        }
    }
}

/// Record a viewport resize and re-run the scroll reactions.
pub fn on_viewport(page: &Page, state: &mut PageState, ix: &mut Interactions, height: u32) {
    if state.viewport != height {
        state.viewport = height;
        state.scroll = state.scroll.min(state.max_scroll(page));
        on_scroll(page, state, ix);
    }
}

/// Everything that listens for scroll events: navbar emphasis, active
/// link, and both visibility watchers.
pub fn on_scroll(page: &Page, state: &mut PageState, ix: &mut Interactions) {
    nav::apply_navbar_emphasis(state);
    nav::apply_active_link(page, state, &ix.tuning);
    if ix.observer_enabled {
        reveal::observe(page, state, ix);
        lazy::observe(page, state, ix);
    }
}

/// Apply a fired scheduler task.
pub fn run_task(
    page: &Page,
    state: &mut PageState,
    ix: &mut Interactions,
    key: TaskKey,
) -> Vec<Effect> {
    match key {
        TaskKey::Reveal(id) => {
            reveal::complete(state, id);
            Vec::new()
        }
        TaskKey::TypeStart(index) => {
            typing::start_line(state, &mut ix.sched, index);
            Vec::new()
        }
        TaskKey::TypeChar(index) => {
            typing::type_char(state, &mut ix.sched, index);
            Vec::new()
        }
        // Toast lifecycle belongs to the tui layer, which owns the
        // toast list; forward the firing as an effect
        TaskKey::ToastFade(id) => vec![Effect::ToastFade(id)],
        TaskKey::ToastRemove(id) => vec![Effect::ToastRemove(id)],
    }
}

/// Index of a tag within its category block, checked against the page.
/// Returns false for ids that don't name a real tag.
pub(crate) fn tag_exists(page: &Page, tag: TagId) -> bool {
    matches!(
        page.block(tag.block).map(|b| &b.kind),
        Some(BlockKind::SkillCategory { tags, .. }) if tag.index < tags.len()
    )
}
