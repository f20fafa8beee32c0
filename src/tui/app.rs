// TUI application state
//
// App bundles the static page, the explicit UI state, the interaction
// machinery (scheduler + watchers), and the chrome that belongs to the
// terminal rather than the page: toasts, hit regions, input debounce.
// Events are funneled through `dispatch`, which applies whatever
// effects the reducers return.

use super::input::InputHandler;
use super::layout::HitMap;
use super::theme::Theme;
use super::{clipboard, components::toast};
use crate::config::Config;
use crate::events::UiEvent;
use crate::interact::{self, Effect, InitOptions, Interactions, PageState, Tuning};
use crate::logging::LogBuffer;
use crate::page::{sample_page, Page};
use crate::sched::TaskKey;

/// Main application state for the TUI
pub struct App {
    pub page: Page,
    pub state: PageState,
    pub ix: Interactions,
    pub theme: Theme,
    pub toasts: Vec<toast::Toast>,
    next_toast_id: u64,
    pub hits: HitMap,
    pub log_buffer: LogBuffer,
    pub should_quit: bool,
    input_handler: InputHandler,
}

impl App {
    pub fn with_config(config: &Config, log_buffer: LogBuffer) -> Self {
        let page = sample_page();
        let (state, ix) = interact::init(
            &page,
            InitOptions {
                tuning: Tuning {
                    active_offset: config.active_offset,
                    navbar_height: config.navbar_height,
                },
                observer_enabled: config.observer,
                typing_effect: config.typing_effect,
            },
        );
        Self {
            page,
            state,
            ix,
            theme: Theme::by_name(&config.theme),
            toasts: Vec::new(),
            next_toast_id: 0,
            hits: HitMap::default(),
            log_buffer,
            should_quit: false,
            input_handler: InputHandler::default(),
        }
    }

    /// Route an event through the reducers and apply the effects.
    pub fn dispatch(&mut self, event: UiEvent) {
        let effects = interact::dispatch(&self.page, &mut self.state, &mut self.ix, event);
        for effect in effects {
            self.apply_effect(effect);
        }
    }

    fn apply_effect(&mut self, effect: Effect) {
        match effect {
            Effect::Notify(message) => self.show_toast(message),
            Effect::CopyEmail(address) => {
                // Success notifies; failure is swallowed (no clipboard
                // capability means the copy silently doesn't happen)
                match clipboard::copy_to_clipboard(&address) {
                    Ok(()) => {
                        tracing::info!("copied {} to clipboard", address);
                        self.show_toast("Email copied to clipboard!");
                    }
                    Err(e) => tracing::debug!("clipboard unavailable: {:#}", e),
                }
            }
            Effect::ToastFade(id) => {
                if let Some(t) = self.toasts.iter_mut().find(|t| t.id == id) {
                    t.fading = true;
                }
                self.ix
                    .sched
                    .schedule(TaskKey::ToastRemove(id), toast::FADE_DURATION);
            }
            Effect::ToastRemove(id) => {
                self.toasts.retain(|t| t.id != id);
            }
        }
    }

    /// Show a transient notification. Each call produces an
    /// independent toast with its own (cancellable) timers.
    pub fn show_toast(&mut self, message: impl Into<String>) {
        let id = self.next_toast_id;
        self.next_toast_id += 1;
        self.toasts.push(toast::Toast {
            id,
            message: message.into(),
            fading: false,
        });
        self.ix
            .sched
            .schedule(TaskKey::ToastFade(id), toast::DISPLAY_DURATION);
    }

    /// Whether the contact form currently captures text input
    pub fn form_focused(&self) -> bool {
        self.state.form.focus.is_some()
    }

    /// Handle a key press - returns true if the action should trigger
    /// (debounce / hold-to-repeat via the input handler)
    pub fn handle_key_press(&mut self, key: crossterm::event::KeyCode) -> bool {
        self.input_handler.handle_key_press(key)
    }

    /// Handle a key release
    pub fn handle_key_release(&mut self, key: crossterm::event::KeyCode) {
        self.input_handler.handle_key_release(key);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::{Field, FormEvent};

    fn app() -> App {
        App::with_config(&Config::default(), LogBuffer::new())
    }

    #[test]
    fn test_successful_submit_shows_toast() {
        let mut app = app();
        app.dispatch(UiEvent::Form(FormEvent::Focus(Field::Name)));
        for ch in "Jane".chars() {
            app.dispatch(UiEvent::Form(FormEvent::Input(ch)));
        }
        app.dispatch(UiEvent::Form(FormEvent::Focus(Field::Email)));
        for ch in "a@b.com".chars() {
            app.dispatch(UiEvent::Form(FormEvent::Input(ch)));
        }
        app.dispatch(UiEvent::Form(FormEvent::Focus(Field::Message)));
        for ch in "hi".chars() {
            app.dispatch(UiEvent::Form(FormEvent::Input(ch)));
        }
        app.dispatch(UiEvent::Form(FormEvent::Submit));

        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "Message sent successfully!");
        assert!(app
            .ix
            .sched
            .is_scheduled(TaskKey::ToastFade(app.toasts[0].id)));
    }

    #[test]
    fn test_toast_lifecycle_fade_then_remove() {
        let mut app = app();
        app.show_toast("hello");
        let id = app.toasts[0].id;

        app.apply_effect(Effect::ToastFade(id));
        assert!(app.toasts[0].fading);
        assert!(app.ix.sched.is_scheduled(TaskKey::ToastRemove(id)));

        app.apply_effect(Effect::ToastRemove(id));
        assert!(app.toasts.is_empty());
    }

    #[test]
    fn test_concurrent_toasts_are_independent() {
        let mut app = app();
        app.show_toast("one");
        app.show_toast("two");
        assert_eq!(app.toasts.len(), 2);

        let first = app.toasts[0].id;
        app.apply_effect(Effect::ToastRemove(first));
        assert_eq!(app.toasts.len(), 1);
        assert_eq!(app.toasts[0].message, "two");
    }
}
