// Theme support for the TUI
//
// Provides color palettes selectable via config file or --theme.
// "auto" uses the terminal's ANSI palette, named themes use true
// color (RGB).

use ratatui::style::Color;

/// Color palette for the page
#[derive(Debug, Clone)]
pub struct Theme {
    pub name: String,

    // Page colors
    pub foreground: Color,
    pub background: Color,
    /// Blocks that haven't revealed yet
    pub muted: Color,
    pub heading: Color,
    pub border: Color,

    // Navbar colors
    pub brand: Color,
    pub link: Color,
    pub link_active: Color,
    /// Border/accent once the page has scrolled past the threshold
    pub navbar_emphasis: Color,

    // Interactive elements
    pub tag: Color,
    pub tag_selected: Color,
    pub field_focused: Color,
    pub error: Color,
    pub success: Color,
    pub highlight: Color,
}

impl Theme {
    /// Load theme by name
    pub fn by_name(name: &str) -> Self {
        match name.to_lowercase().as_str() {
            "dracula" => Self::dracula(),
            "nord" => Self::nord(),
            "gruvbox" => Self::gruvbox(),
            _ => Self::auto(), // "auto" or unknown
        }
    }

    /// Auto theme - uses terminal's ANSI palette
    pub fn auto() -> Self {
        Self {
            name: "auto".to_string(),
            foreground: Color::White,
            background: Color::Reset,
            muted: Color::DarkGray,
            heading: Color::Cyan,
            border: Color::Gray,
            brand: Color::Cyan,
            link: Color::White,
            link_active: Color::Yellow,
            navbar_emphasis: Color::Cyan,
            tag: Color::Blue,
            tag_selected: Color::Green,
            field_focused: Color::Yellow,
            error: Color::Red,
            success: Color::Green,
            highlight: Color::Yellow,
        }
    }

    /// Dracula theme - https://draculatheme.com
    pub fn dracula() -> Self {
        Self {
            name: "dracula".to_string(),
            foreground: Color::Rgb(0xf8, 0xf8, 0xf2),
            background: Color::Rgb(0x28, 0x2a, 0x36),
            muted: Color::Rgb(0x62, 0x72, 0xa4), // comment
            heading: Color::Rgb(0xbd, 0x93, 0xf9), // purple
            border: Color::Rgb(0x44, 0x47, 0x5a),
            brand: Color::Rgb(0x8b, 0xe9, 0xfd), // cyan
            link: Color::Rgb(0xf8, 0xf8, 0xf2),
            link_active: Color::Rgb(0xff, 0x79, 0xc6), // pink
            navbar_emphasis: Color::Rgb(0xbd, 0x93, 0xf9),
            tag: Color::Rgb(0x8b, 0xe9, 0xfd),
            tag_selected: Color::Rgb(0x50, 0xfa, 0x7b), // green
            field_focused: Color::Rgb(0xf1, 0xfa, 0x8c), // yellow
            error: Color::Rgb(0xff, 0x55, 0x55),
            success: Color::Rgb(0x50, 0xfa, 0x7b),
            highlight: Color::Rgb(0xf1, 0xfa, 0x8c),
        }
    }

    /// Nord theme - https://nordtheme.com
    pub fn nord() -> Self {
        Self {
            name: "nord".to_string(),
            foreground: Color::Rgb(0xec, 0xef, 0xf4),
            background: Color::Rgb(0x2e, 0x34, 0x40),
            muted: Color::Rgb(0x4c, 0x56, 0x6a),
            heading: Color::Rgb(0x88, 0xc0, 0xd0),
            border: Color::Rgb(0x3b, 0x42, 0x52),
            brand: Color::Rgb(0x88, 0xc0, 0xd0),
            link: Color::Rgb(0xd8, 0xde, 0xe9),
            link_active: Color::Rgb(0xeb, 0xcb, 0x8b),
            navbar_emphasis: Color::Rgb(0x81, 0xa1, 0xc1),
            tag: Color::Rgb(0x81, 0xa1, 0xc1),
            tag_selected: Color::Rgb(0xa3, 0xbe, 0x8c),
            field_focused: Color::Rgb(0xeb, 0xcb, 0x8b),
            error: Color::Rgb(0xbf, 0x61, 0x6a),
            success: Color::Rgb(0xa3, 0xbe, 0x8c),
            highlight: Color::Rgb(0xeb, 0xcb, 0x8b),
        }
    }

    /// Gruvbox theme - https://github.com/morhetz/gruvbox
    pub fn gruvbox() -> Self {
        Self {
            name: "gruvbox".to_string(),
            foreground: Color::Rgb(0xeb, 0xdb, 0xb2),
            background: Color::Rgb(0x28, 0x28, 0x28),
            muted: Color::Rgb(0x7c, 0x6f, 0x64),
            heading: Color::Rgb(0xfa, 0xbd, 0x2f),
            border: Color::Rgb(0x50, 0x49, 0x45),
            brand: Color::Rgb(0x83, 0xa5, 0x98),
            link: Color::Rgb(0xeb, 0xdb, 0xb2),
            link_active: Color::Rgb(0xfe, 0x80, 0x19),
            navbar_emphasis: Color::Rgb(0x83, 0xa5, 0x98),
            tag: Color::Rgb(0x83, 0xa5, 0x98),
            tag_selected: Color::Rgb(0xb8, 0xbb, 0x26),
            field_focused: Color::Rgb(0xfa, 0xbd, 0x2f),
            error: Color::Rgb(0xfb, 0x49, 0x34),
            success: Color::Rgb(0xb8, 0xbb, 0x26),
            highlight: Color::Rgb(0xfa, 0xbd, 0x2f),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_name_falls_back_to_auto() {
        assert_eq!(Theme::by_name("solarized").name, "auto");
        assert_eq!(Theme::by_name("DRACULA").name, "dracula");
    }
}
