// Fixed navbar - brand, links, and the menu toggle
//
// The navbar re-renders from state each frame: emphasis border once
// the page has scrolled past the threshold, the active link
// highlighted, and the hamburger mirroring the menu-open marker.

use crate::interact::PageState;
use crate::page::Page;
use crate::tui::layout::{HitMap, HitTarget};
use crate::tui::theme::Theme;
use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

/// Render the navbar into `area` (3 rows: border, content, border).
pub fn render(
    f: &mut Frame,
    area: Rect,
    page: &Page,
    state: &PageState,
    theme: &Theme,
    hits: &mut HitMap,
) {
    let border_color = if state.navbar_emphasized {
        theme.navbar_emphasis
    } else {
        theme.border
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(border_color))
        .style(Style::default().bg(theme.background));
    f.render_widget(block, area);

    let inner = Rect::new(
        area.x + 1,
        area.y + 1,
        area.width.saturating_sub(2),
        area.height.saturating_sub(2),
    );
    if inner.height == 0 {
        return;
    }

    // Brand on the left, links in the middle, toggle on the right
    let mut spans: Vec<Span> = Vec::new();
    let brand_style = if state.navbar_emphasized {
        Style::default()
            .fg(theme.brand)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.brand)
    };
    spans.push(Span::styled(page.brand.clone(), brand_style));
    spans.push(Span::raw("   "));

    let mut x = inner.x + page.brand.width() as u16 + 3;
    for (i, link) in page.nav_links.iter().enumerate() {
        let active = link.target.is_some() && link.target == state.active_section;
        let style = if active {
            Style::default()
                .fg(theme.link_active)
                .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.link)
        };
        let label = format!("{} {}", i + 1, link.label);
        let width = label.width() as u16;
        if x + width >= inner.right() {
            break; // narrow terminal: remaining links live in the menu
        }
        hits.record(Rect::new(x, inner.y, width, 1), HitTarget::NavLink(i));
        spans.push(Span::styled(label, style));
        spans.push(Span::raw("  "));
        x += width + 2;
    }

    f.render_widget(Paragraph::new(Line::from(spans)), inner);

    // Hamburger toggle, right-aligned; shows its own active marker
    let toggle = if state.menu_open { "[x]" } else { "[≡]" };
    let toggle_style = if state.menu_open {
        Style::default()
            .fg(theme.highlight)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme.link)
    };
    let toggle_area = Rect::new(inner.right().saturating_sub(3), inner.y, 3, 1);
    hits.record(toggle_area, HitTarget::NavToggle);
    f.render_widget(
        Paragraph::new(Span::styled(toggle, toggle_style)),
        toggle_area,
    );
}
