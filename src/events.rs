// UI events that flow from the terminal edge into the reducers
//
// Key presses and mouse hits are translated into these events by the
// tui layer; the reducers in `interact` never see a terminal type.
// Using an enum keeps the (state, event) -> state contract explicit
// and lets every behavior be exercised in tests without a terminal.

use crate::page::TagId;

/// A contact-form field, in tab order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Name,
    Email,
    Message,
}

impl Field {
    pub fn next(self) -> Self {
        match self {
            Field::Name => Field::Email,
            Field::Email => Field::Message,
            Field::Message => Field::Name,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Message => "Message",
        }
    }
}

/// Events targeting the contact form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Focus a specific field (mouse click)
    Focus(Field),
    /// Move focus to the next field (Tab)
    FocusNext,
    /// Drop focus without submitting (Esc)
    Blur,
    /// A character typed into the focused field
    Input(char),
    Backspace,
    /// Submit attempt (Enter); default submission is always cancelled
    Submit,
}

/// Every input the interaction layer reacts to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiEvent {
    /// Relative scroll in units (wheel, arrow keys, page keys)
    ScrollBy(i32),
    /// Absolute scroll in units (Home/End)
    ScrollTo(u32),
    /// Click on the menu toggle control
    MenuToggle,
    /// Click on a navigation link (index into the page's nav links)
    NavLinkClick(usize),
    /// Click anywhere outside the open menu and its toggle
    OutsideClick,
    /// Click on a skill tag
    TagClick(TagId),
    /// Context menu (right-click) over the mailto: contact link
    EmailContextMenu,
    Form(FormEvent),
    /// Periodic tick driving animations and due timers
    Tick,
}
