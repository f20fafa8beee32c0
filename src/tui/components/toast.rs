//! Toast notification component
//!
//! Non-blocking overlays that auto-dismiss: each toast lives out its
//! display window, fades briefly, and is removed. Concurrent toasts
//! stack in the bottom-right corner and are never coalesced - every
//! notification gets its own element and its own removal timers,
//! which stay cancellable through the scheduler.

use crate::tui::theme::Theme;
use ratatui::{
    layout::{Alignment, Rect},
    style::Style,
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};
use std::time::Duration;
use unicode_width::UnicodeWidthStr;

/// How long a toast stays fully visible
pub const DISPLAY_DURATION: Duration = Duration::from_millis(3000);

/// How long the fade-out lasts before removal
pub const FADE_DURATION: Duration = Duration::from_millis(300);

/// Rendered height including borders
const TOAST_HEIGHT: u16 = 3;

/// A live toast. Fading toasts render dimmed until their removal
/// timer fires.
#[derive(Debug, Clone)]
pub struct Toast {
    pub id: u64,
    pub message: String,
    pub fading: bool,
}

/// Render all live toasts stacked above the bottom-right corner,
/// newest at the bottom.
pub fn render_all(f: &mut Frame, area: Rect, theme: &Theme, toasts: &[Toast]) {
    for (slot, toast) in toasts.iter().rev().enumerate() {
        let width = (toast.message.width() as u16 + 4).min(area.width.saturating_sub(4));
        let x = area.right().saturating_sub(width + 2);
        let y = area
            .bottom()
            .saturating_sub(TOAST_HEIGHT * (slot as u16 + 1) + 2);
        if y < area.top() {
            break; // no room for older toasts
        }
        let toast_area = Rect::new(x, y, width, TOAST_HEIGHT);

        let accent = if toast.fading {
            theme.muted
        } else {
            theme.highlight
        };
        let text_color = if toast.fading {
            theme.muted
        } else {
            theme.foreground
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(Style::default().fg(accent))
            .style(Style::default().bg(theme.background));

        let text = Paragraph::new(toast.message.as_str())
            .alignment(Alignment::Center)
            .style(Style::default().fg(text_color))
            .block(block);

        // Clear the area first so the toast sits on top of the page
        f.render_widget(Clear, toast_area);
        f.render_widget(text, toast_area);
    }
}
