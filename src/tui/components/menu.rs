// Mobile menu overlay
//
// The panel half of the menu marker: rendered only while the menu is
// open, on top of the page, listing every nav link. Clicks inside the
// panel are not "outside" clicks, so the panel records its own region
// before the individual links.

use crate::interact::PageState;
use crate::page::Page;
use crate::tui::layout::{HitMap, HitTarget};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
    Frame,
};

/// Render the open menu panel under the navbar's right edge.
pub fn render(
    f: &mut Frame,
    area: Rect,
    page: &Page,
    state: &PageState,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let width = (page
        .nav_links
        .iter()
        .map(|l| l.label.len())
        .max()
        .unwrap_or(8) as u16
        + 8)
    .min(area.width);
    let height = (page.nav_links.len() as u16 + 2).min(area.height.saturating_sub(3));
    let panel = Rect::new(
        area.right().saturating_sub(width + 1),
        area.y + 3,
        width,
        height,
    );

    hits.record(panel, HitTarget::MenuPanel);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.navbar_emphasis))
        .style(Style::default().bg(theme.background));
    f.render_widget(Clear, panel);
    f.render_widget(block, panel);

    for (i, link) in page.nav_links.iter().enumerate() {
        let y = panel.y + 1 + i as u16;
        if y >= panel.bottom().saturating_sub(1) {
            break;
        }
        let active = link.target.is_some() && link.target == state.active_section;
        let style = if active {
            Style::default()
                .fg(theme.link_active)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.link)
        };
        let row = Rect::new(panel.x + 1, y, panel.width.saturating_sub(2), 1);
        hits.record(row, HitTarget::MenuLink(i));
        f.render_widget(
            Paragraph::new(Line::from(Span::styled(
                format!("{} {}", i + 1, link.label),
                style,
            ))),
            row,
        );
    }
}
