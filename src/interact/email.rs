// Email extraction for the clipboard copy behavior
//
// Right-clicking the contact email link copies the bare address. The
// extraction is the only logic here; the actual clipboard write lives
// at the tui edge so a failure can be swallowed there.

/// The address portion of a mailto: link, or None for anything else.
pub fn address_from_href(href: &str) -> Option<&str> {
    href.strip_prefix("mailto:").filter(|addr| !addr.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_exactly_the_mailto_prefix() {
        assert_eq!(
            address_from_href("mailto:jordan@example.dev"),
            Some("jordan@example.dev")
        );
    }

    #[test]
    fn test_non_mailto_links_yield_nothing() {
        assert_eq!(address_from_href("https://example.dev"), None);
        assert_eq!(address_from_href("jordan@example.dev"), None);
        assert_eq!(address_from_href("mailto:"), None);
    }
}
