// Status bar - key hints, scroll position, and the latest log line

use crate::interact::PageState;
use crate::logging::{LogBuffer, LogLevel};
use crate::page::Page;
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(
    f: &mut Frame,
    area: Rect,
    page: &Page,
    state: &PageState,
    theme: &Theme,
    logs: &LogBuffer,
) {
    let hints = if state.form.focus.is_some() {
        "Tab next field | Enter submit | Esc leave form"
    } else {
        "j/k scroll | 1-6 jump | m menu | f form | q quit"
    };

    let percent = {
        let max = state.max_scroll(page);
        if max == 0 {
            100
        } else {
            state.scroll * 100 / max
        }
    };

    let mut spans = vec![
        Span::styled(format!(" {} ", hints), Style::default().fg(theme.muted)),
        Span::styled(
            format!("| {:>3}% ", percent),
            Style::default().fg(theme.foreground),
        ),
    ];

    // Latest warn/error gets the right-hand side
    if let Some(entry) = logs.latest() {
        if matches!(entry.level, LogLevel::Warn | LogLevel::Error) {
            let color = match entry.level {
                LogLevel::Error => theme.error,
                _ => theme.highlight,
            };
            let used: u16 = spans.iter().map(|s| s.content.width() as u16).sum();
            let room = area.width.saturating_sub(used + 2) as usize;
            let mut msg = format!("{}: {}", entry.level.as_str(), entry.message);
            if room > 0 && msg.width() > room {
                msg = truncate_to_width(&msg, room.saturating_sub(1));
                msg.push('…');
            }
            if room > 0 {
                spans.push(Span::styled(msg, Style::default().fg(color)));
            }
        }
    }

    f.render_widget(
        Paragraph::new(Line::from(spans)).style(Style::default().bg(theme.background)),
        area,
    );
}

/// Longest prefix of `s` whose display width fits in `max_width`.
/// Cuts on character boundaries; wide characters never straddle the
/// limit.
fn truncate_to_width(s: &str, max_width: usize) -> String {
    let mut out = String::new();
    let mut used = 0;
    for ch in s.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > max_width {
            break;
        }
        out.push(ch);
        used += w;
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncation_cuts_on_char_boundaries() {
        // Multibyte content where a byte-based cut would land inside
        // a character
        let msg = "WARN: konnte Pfad „/tmp/bücher“ nicht öffnen ▂▃▅";
        for limit in 0..msg.width() {
            let cut = truncate_to_width(msg, limit);
            assert!(cut.width() <= limit);
            assert!(msg.starts_with(&cut));
        }
    }

    #[test]
    fn test_wide_characters_never_straddle_the_limit() {
        // CJK glyphs are two columns wide
        let msg = "エラー発生";
        assert_eq!(truncate_to_width(msg, 3), "エ");
        assert_eq!(truncate_to_width(msg, 4), "エラ");
        assert_eq!(truncate_to_width(msg, 0), "");
    }
}
