// Contact form validation
//
// Submit never actually sends anything; it validates the three fields
// and either attaches inline errors or resets the form behind a
// success notification. An error clears the first time its field next
// receives input, matching a one-shot input listener.

use super::{Effect, FormState, PageState};
use crate::events::{Field, FormEvent};
use regex::Regex;
use std::sync::OnceLock;

/// Loose email shape: local part and domain split by '@', domain
/// containing a '.'
fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email pattern"))
}

pub fn is_valid_email(email: &str) -> bool {
    email_pattern().is_match(email)
}

/// Apply a form event to the page state.
pub fn handle(state: &mut PageState, event: FormEvent) -> Vec<Effect> {
    let form = &mut state.form;
    match event {
        FormEvent::Focus(field) => {
            form.focus = Some(field);
            Vec::new()
        }
        FormEvent::FocusNext => {
            form.focus = Some(form.focus.map(Field::next).unwrap_or(Field::Name));
            Vec::new()
        }
        FormEvent::Blur => {
            form.focus = None;
            Vec::new()
        }
        FormEvent::Input(ch) => {
            if let Some(field) = form.focus {
                let entry = form.field_mut(field);
                entry.value.push(ch);
                // One-shot error clear on the next input
                entry.error = None;
            }
            Vec::new()
        }
        FormEvent::Backspace => {
            if let Some(field) = form.focus {
                let entry = form.field_mut(field);
                entry.value.pop();
                entry.error = None;
            }
            Vec::new()
        }
        FormEvent::Submit => submit(form),
    }
}

/// Validate all fields. Default submission is always cancelled; there
/// is no transport behind the form.
fn submit(form: &mut FormState) -> Vec<Effect> {
    let mut valid = true;

    if form.name.value.trim().is_empty() {
        form.name.error = Some("Please enter your name".into());
        valid = false;
    }
    if !is_valid_email(&form.email.value) {
        form.email.error = Some("Please enter a valid email".into());
        valid = false;
    }
    if form.message.value.trim().is_empty() {
        form.message.error = Some("Please enter a message".into());
        valid = false;
    }

    if valid {
        tracing::info!("contact form validated, resetting");
        form.reset();
        vec![Effect::Notify("Message sent successfully!".into())]
    } else {
        tracing::debug!("contact form rejected");
        Vec::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_into(state: &mut PageState, field: Field, text: &str) {
        handle(state, FormEvent::Focus(field));
        for ch in text.chars() {
            handle(state, FormEvent::Input(ch));
        }
    }

    #[test]
    fn test_email_shape() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("jane.doe@mail.example.org"));
        assert!(!is_valid_email("a@b"), "domain needs a dot");
        assert!(!is_valid_email("a b@c.com"), "no whitespace");
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a@"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn test_invalid_submit_attaches_three_errors() {
        let mut state = PageState::default();
        type_into(&mut state, Field::Email, "a@b");

        let effects = handle(&mut state, FormEvent::Submit);
        assert!(effects.is_empty());
        assert!(state.form.name.error.is_some());
        assert!(state.form.email.error.is_some());
        assert!(state.form.message.error.is_some());
    }

    #[test]
    fn test_input_clears_error_once() {
        let mut state = PageState::default();
        handle(&mut state, FormEvent::Submit);
        assert!(state.form.name.error.is_some());

        type_into(&mut state, Field::Name, "J");
        assert!(state.form.name.error.is_none());
        // Other fields keep their errors until they receive input
        assert!(state.form.email.error.is_some());
    }

    #[test]
    fn test_valid_submit_notifies_and_resets() {
        let mut state = PageState::default();
        // First submit fails and attaches errors
        handle(&mut state, FormEvent::Submit);

        // Correct every field and resubmit
        type_into(&mut state, Field::Name, "Jane");
        type_into(&mut state, Field::Email, "a@b.com");
        type_into(&mut state, Field::Message, "hi");
        let effects = handle(&mut state, FormEvent::Submit);

        assert_eq!(
            effects,
            vec![Effect::Notify("Message sent successfully!".into())]
        );
        assert!(state.form.name.value.is_empty());
        assert!(state.form.email.value.is_empty());
        assert!(state.form.message.value.is_empty());
        assert!(state.form.name.error.is_none());
        assert!(state.form.email.error.is_none());
        assert!(state.form.message.error.is_none());
    }

    #[test]
    fn test_whitespace_only_name_rejected() {
        let mut state = PageState::default();
        type_into(&mut state, Field::Name, "   ");
        type_into(&mut state, Field::Email, "a@b.com");
        type_into(&mut state, Field::Message, "hello");

        let effects = handle(&mut state, FormEvent::Submit);
        assert!(effects.is_empty());
        assert!(state.form.name.error.is_some());
    }

    #[test]
    fn test_focus_cycles_in_tab_order() {
        let mut state = PageState::default();
        handle(&mut state, FormEvent::FocusNext);
        assert_eq!(state.form.focus, Some(Field::Name));
        handle(&mut state, FormEvent::FocusNext);
        assert_eq!(state.form.focus, Some(Field::Email));
        handle(&mut state, FormEvent::FocusNext);
        assert_eq!(state.form.focus, Some(Field::Message));
        handle(&mut state, FormEvent::FocusNext);
        assert_eq!(state.form.focus, Some(Field::Name));

        handle(&mut state, FormEvent::Blur);
        assert_eq!(state.form.focus, None);
    }

    #[test]
    fn test_backspace_edits_and_clears_error() {
        let mut state = PageState::default();
        handle(&mut state, FormEvent::Submit);
        type_into(&mut state, Field::Email, "a@b.comm");
        state.form.email.error = Some("stale".into());

        handle(&mut state, FormEvent::Backspace);
        assert_eq!(state.form.email.value, "a@b.com");
        assert!(state.form.email.error.is_none());
    }
}
