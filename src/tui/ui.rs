// Page rendering
//
// The renderer is a pure function of the UI state: it walks the
// blocks overlapping the viewport, produces exactly `block.height`
// rows per block (layout and drawing can never drift), and records a
// hit region for every interactive element it actually draws.

use crate::events::Field;
use crate::interact::{PageState, Reveal};
use crate::page::{Block, BlockKind, TagId};
use crate::tui::app::App;
use crate::tui::components::{menu, navbar, status_bar, toast};
use crate::tui::layout::{HitMap, HitTarget};
use crate::tui::theme::Theme;
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block as WBlock, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Left margin of the page body
const BODY_INDENT: u16 = 2;

/// Draw the whole frame.
pub fn draw(f: &mut Frame, app: &mut App) {
    let size = f.area();
    f.render_widget(
        WBlock::default().style(Style::default().bg(app.theme.background)),
        size,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // navbar
            Constraint::Min(1),    // page body
            Constraint::Length(1), // status bar
        ])
        .split(size);

    app.hits.clear();

    // The body height is the viewport; reducers react to resizes
    crate::interact::on_viewport(
        &app.page,
        &mut app.state,
        &mut app.ix,
        chunks[1].height as u32,
    );

    render_body(f, chunks[1], app);
    navbar::render(f, chunks[0], &app.page, &app.state, &app.theme, &mut app.hits);
    status_bar::render(
        f,
        chunks[2],
        &app.page,
        &app.state,
        &app.theme,
        &app.log_buffer,
    );

    // Overlays: recorded after the page so their hit regions win
    if app.state.menu_open {
        menu::render(f, size, &app.page, &app.state, &app.theme, &mut app.hits);
    }
    toast::render_all(f, size, &app.theme, &app.toasts);
}

/// Render the slice of the virtual document under the viewport.
fn render_body(f: &mut Frame, area: Rect, app: &mut App) {
    let scroll = app.state.scroll;
    let view_end = scroll + area.height as u32;
    let mut rows: Vec<Line> = vec![Line::default(); area.height as usize];

    for block in &app.page.blocks {
        if block.top + block.height <= scroll || block.top >= view_end {
            continue;
        }
        let lines = block_lines(block, &app.state, &app.theme);
        debug_assert_eq!(lines.len() as u32, block.height);
        for (i, line) in lines.into_iter().enumerate() {
            let unit = block.top + i as u32;
            if unit < scroll || unit >= view_end {
                continue;
            }
            rows[(unit - scroll) as usize] = line;
        }
        record_block_hits(block, area, scroll, &mut app.hits);
    }

    let body = Rect::new(
        area.x + BODY_INDENT,
        area.y,
        area.width.saturating_sub(BODY_INDENT),
        area.height,
    );
    f.render_widget(Paragraph::new(rows), body);
}

/// Screen row for a document unit, if it is inside the viewport.
fn screen_y(area: Rect, scroll: u32, unit: u32) -> Option<u16> {
    if unit < scroll || unit >= scroll + area.height as u32 {
        return None;
    }
    Some(area.y + (unit - scroll) as u16)
}

/// Record hit regions for a block's interactive rows.
fn record_block_hits(block: &Block, area: Rect, scroll: u32, hits: &mut HitMap) {
    let x = area.x + BODY_INDENT;
    match &block.kind {
        BlockKind::SkillCategory { tags, .. } => {
            // Tags sit on the block's second row
            let Some(y) = screen_y(area, scroll, block.top + 1) else {
                return;
            };
            let mut tag_x = x + 2;
            for (index, label) in tags.iter().enumerate() {
                let width = label.width() as u16 + 4; // "[ label ]"
                hits.record(
                    Rect::new(tag_x, y, width, 1),
                    HitTarget::Tag(TagId {
                        block: block.id,
                        index,
                    }),
                );
                tag_x += width + 1;
            }
        }
        BlockKind::ContactCard { href, .. } if href.starts_with("mailto:") => {
            if let Some(y) = screen_y(area, scroll, block.top) {
                hits.record(
                    Rect::new(x, y, area.width.saturating_sub(BODY_INDENT), 1),
                    HitTarget::EmailLink,
                );
            }
        }
        BlockKind::ContactForm => {
            let width = area.width.saturating_sub(BODY_INDENT);
            for (row, field) in [(0, Field::Name), (2, Field::Email), (4, Field::Message)] {
                if let Some(y) = screen_y(area, scroll, block.top + row) {
                    hits.record(Rect::new(x, y, width, 1), HitTarget::FormField(field));
                }
            }
            if let Some(y) = screen_y(area, scroll, block.top + 7) {
                hits.record(Rect::new(x, y, 16, 1), HitTarget::FormSubmit);
            }
        }
        _ => {}
    }
}

/// Produce exactly `block.height` styled lines for a block.
fn block_lines(block: &Block, state: &PageState, theme: &Theme) -> Vec<Line<'static>> {
    // Reveal styling: dimmed until the block's transition completes
    let revealed = state.reveal(block.id) == Reveal::Visible;
    let ink = if revealed { theme.foreground } else { theme.muted };
    let accent = if revealed { theme.heading } else { theme.muted };
    let body = Style::default().fg(ink);

    match &block.kind {
        BlockKind::Hero {
            name,
            tagline,
            roles,
        } => {
            let mut lines = vec![
                Line::default(),
                Line::from(Span::styled(
                    name.clone(),
                    Style::default()
                        .fg(theme.heading)
                        .add_modifier(Modifier::BOLD),
                )),
                Line::from(Span::styled(
                    tagline.clone(),
                    Style::default().fg(theme.foreground),
                )),
                Line::default(),
            ];
            for (i, role) in roles.iter().enumerate() {
                lines.push(hero_role_line(block, state, theme, i, role));
            }
            lines.push(Line::default());
            lines
        }
        BlockKind::Heading { title } => vec![
            Line::from(Span::styled(
                format!("▍{}", title),
                Style::default().fg(accent).add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                "─".repeat(title.len() + 6),
                Style::default().fg(theme.border),
            )),
        ],
        BlockKind::Paragraph { lines } => lines
            .iter()
            .map(|l| Line::from(Span::styled(l.clone(), body)))
            .collect(),
        BlockKind::Highlights { items } => {
            let mut lines = vec![Line::from(Span::styled(
                "╭──────────────────────────────────────────╮".to_string(),
                Style::default().fg(theme.border),
            ))];
            for item in items {
                lines.push(Line::from(vec![
                    Span::styled("│ ".to_string(), Style::default().fg(theme.border)),
                    Span::styled("✔ ".to_string(), Style::default().fg(theme.success)),
                    Span::styled(item.clone(), body),
                ]));
            }
            lines.push(Line::from(Span::styled(
                "╰──────────────────────────────────────────╯".to_string(),
                Style::default().fg(theme.border),
            )));
            lines
        }
        BlockKind::SkillCategory { name, tags, .. } => {
            let mut spans = vec![Span::raw("  ")];
            for (index, label) in tags.iter().enumerate() {
                let selected = state.tag_selected(TagId {
                    block: block.id,
                    index,
                });
                let style = if selected {
                    Style::default()
                        .fg(theme.tag_selected)
                        .add_modifier(Modifier::BOLD | Modifier::REVERSED)
                } else {
                    Style::default().fg(if revealed { theme.tag } else { theme.muted })
                };
                spans.push(Span::styled(format!("[ {} ]", label), style));
                spans.push(Span::raw(" "));
            }
            vec![
                Line::from(Span::styled(
                    name.clone(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                )),
                Line::from(spans),
            ]
        }
        BlockKind::ProjectCard {
            title,
            summary,
            art,
            ..
        } => {
            let frame = Style::default().fg(theme.border);
            let mut lines = vec![Line::from(vec![
                Span::styled("╭─ ".to_string(), frame),
                Span::styled(
                    title.clone(),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(" ─".to_string(), frame),
            ])];
            for text in summary {
                lines.push(Line::from(vec![
                    Span::styled("│ ".to_string(), frame),
                    Span::styled(text.clone(), body),
                ]));
            }
            lines.push(Line::from(Span::styled("│".to_string(), frame)));
            let image = state.images.get(&block.id);
            for row in 0..art.height as usize {
                let content = match image.and_then(|img| img.source.as_ref()) {
                    Some(source) => Span::styled(
                        source.get(row).copied().unwrap_or("").to_string(),
                        Style::default().fg(theme.highlight),
                    ),
                    // Deferred source not yet swapped in
                    None => Span::styled(
                        "  ░░░░░░░░░░░░".to_string(),
                        Style::default().fg(theme.muted),
                    ),
                };
                lines.push(Line::from(vec![Span::styled("│ ".to_string(), frame), content]));
            }
            lines.push(Line::from(Span::styled("╰──────".to_string(), frame)));
            lines
        }
        BlockKind::TimelineItem { period, role, note } => vec![
            Line::from(vec![
                Span::styled("● ".to_string(), Style::default().fg(accent)),
                Span::styled(
                    format!("{}  ", period),
                    Style::default().fg(if revealed {
                        theme.highlight
                    } else {
                        theme.muted
                    }),
                ),
                Span::styled(role.clone(), body.add_modifier(Modifier::BOLD)),
            ]),
            Line::from(Span::styled(format!("    {}", note), body)),
        ],
        BlockKind::ContactCard { label, href } => {
            let mut spans = vec![
                Span::styled(
                    format!("{:<8}", label),
                    Style::default().fg(accent).add_modifier(Modifier::BOLD),
                ),
                Span::styled(href.clone(), body.add_modifier(Modifier::UNDERLINED)),
            ];
            if href.starts_with("mailto:") {
                spans.push(Span::styled(
                    "  (right-click to copy)".to_string(),
                    Style::default().fg(theme.muted),
                ));
            }
            vec![Line::from(spans)]
        }
        BlockKind::ContactForm => form_lines(state, theme),
        BlockKind::Spacer { units } => vec![Line::default(); *units as usize],
    }
}

/// A hero role line, honoring the typing effect when enabled.
fn hero_role_line(
    block: &Block,
    state: &PageState,
    theme: &Theme,
    index: usize,
    full: &str,
) -> Line<'static> {
    let style = Style::default().fg(theme.foreground);
    let Some(entry) = state.typing_line(block.id, index) else {
        // Typing effect disabled: show the full text
        return Line::from(Span::styled(format!("· {}", full), style));
    };
    if !entry.started {
        return Line::default();
    }
    let shown: String = entry.full.chars().take(entry.shown).collect();
    let mut spans = vec![Span::styled(format!("· {}", shown), style)];
    if entry.shown < entry.full.chars().count() {
        spans.push(Span::styled(
            "▌".to_string(),
            Style::default().fg(theme.highlight),
        ));
    }
    Line::from(spans)
}

/// The contact form's ten rows: three fields with their inline error
/// rows, then the submit control.
fn form_lines(state: &PageState, theme: &Theme) -> Vec<Line<'static>> {
    let form = &state.form;
    let mut lines = Vec::with_capacity(10);

    for field in [Field::Name, Field::Email, Field::Message] {
        let entry = form.field(field);
        let focused = form.focus == Some(field);
        let label_style = if focused {
            Style::default()
                .fg(theme.field_focused)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.foreground)
        };
        let mut spans = vec![
            Span::styled(format!("{:<9}", format!("{}:", field.label())), label_style),
            Span::styled(
                entry.value.clone(),
                Style::default().fg(theme.foreground),
            ),
        ];
        if focused {
            spans.push(Span::styled(
                "▏".to_string(),
                Style::default().fg(theme.field_focused),
            ));
        }
        lines.push(Line::from(spans));

        // Inline error beneath the field, cleared on its next input
        match &entry.error {
            Some(message) => lines.push(Line::from(Span::styled(
                format!("  ⚠ {}", message),
                Style::default().fg(theme.error),
            ))),
            None => lines.push(Line::default()),
        }
    }

    lines.push(Line::default());
    lines.push(Line::from(Span::styled(
        "[ Send Message ]".to_string(),
        Style::default()
            .fg(theme.success)
            .add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::default());
    lines.push(Line::default());
    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::{init, InitOptions};
    use crate::page::sample_page;

    #[test]
    fn test_every_block_renders_its_layout_height() {
        let page = sample_page();
        let (state, _) = init(&page, InitOptions::default());
        let theme = Theme::auto();

        for block in &page.blocks {
            let lines = block_lines(block, &state, &theme);
            assert_eq!(
                lines.len() as u32,
                block.height,
                "block {:?} ({:?})",
                block.id,
                std::mem::discriminant(&block.kind)
            );
        }
    }

    #[test]
    fn test_form_renders_errors_beneath_fields() {
        let page = sample_page();
        let (mut state, _) = init(&page, InitOptions::default());
        let theme = Theme::auto();

        crate::interact::form::handle(&mut state, crate::events::FormEvent::Submit);
        let lines = form_lines(&state, &theme);
        assert_eq!(lines.len(), 10);
        // Error rows are 1, 3, 5
        for row in [1usize, 3, 5] {
            let text: String = lines[row]
                .spans
                .iter()
                .map(|s| s.content.as_ref())
                .collect();
            assert!(text.contains("Please enter"), "row {}: {:?}", row, text);
        }
    }

    #[test]
    fn test_typing_line_hidden_until_started() {
        let page = sample_page();
        let (mut state, mut ix) = init(
            &page,
            InitOptions {
                typing_effect: true,
                ..Default::default()
            },
        );
        let theme = Theme::auto();
        let hero = &page.blocks[0];

        let before = block_lines(hero, &state, &theme);
        let role_row: String = before[4].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(role_row.is_empty(), "unstarted line renders blank");

        crate::interact::typing::start_line(&mut state, &mut ix.sched, 0);
        crate::interact::typing::type_char(&mut state, &mut ix.sched, 0);
        let after = block_lines(hero, &state, &theme);
        let role_row: String = after[4].spans.iter().map(|s| s.content.as_ref()).collect();
        assert!(role_row.starts_with("· S"), "one character revealed: {:?}", role_row);
    }
}
