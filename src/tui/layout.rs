// Hit testing - mapping mouse positions back to page targets
//
// The renderer records a rectangle for every interactive element it
// draws each frame; mouse handlers look positions up here. Overlays
// (the mobile menu) are recorded after the page, so the last matching
// region wins.

use ratatui::layout::Rect;

/// What a mouse position lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HitTarget {
    /// The hamburger control in the navbar
    NavToggle,
    /// A navbar link (index into the page's nav links)
    NavLink(usize),
    /// A link inside the open mobile menu
    MenuLink(usize),
    /// The open menu panel itself (clicks here are not "outside")
    MenuPanel,
    /// A skill tag
    Tag(crate::page::TagId),
    /// The mailto: contact link
    EmailLink,
    /// A contact-form field
    FormField(crate::events::Field),
    /// The form's submit control
    FormSubmit,
}

/// Per-frame map of interactive regions.
#[derive(Debug, Default)]
pub struct HitMap {
    regions: Vec<(Rect, HitTarget)>,
}

impl HitMap {
    /// Forget last frame's regions. Called at the top of each draw.
    pub fn clear(&mut self) {
        self.regions.clear();
    }

    pub fn record(&mut self, area: Rect, target: HitTarget) {
        if area.width > 0 && area.height > 0 {
            self.regions.push((area, target));
        }
    }

    /// The topmost target under (x, y), if any.
    pub fn hit(&self, x: u16, y: u16) -> Option<HitTarget> {
        self.regions
            .iter()
            .rev()
            .find(|(area, _)| {
                x >= area.x && x < area.x + area.width && y >= area.y && y < area.y + area.height
            })
            .map(|(_, target)| *target)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_last_recorded_region_wins() {
        let mut hits = HitMap::default();
        hits.record(Rect::new(0, 0, 10, 10), HitTarget::NavLink(0));
        hits.record(Rect::new(0, 0, 10, 10), HitTarget::MenuPanel);

        assert_eq!(hits.hit(5, 5), Some(HitTarget::MenuPanel));
        assert_eq!(hits.hit(10, 10), None, "edges are exclusive");
    }

    #[test]
    fn test_clear_drops_regions() {
        let mut hits = HitMap::default();
        hits.record(Rect::new(2, 3, 4, 1), HitTarget::EmailLink);
        assert_eq!(hits.hit(3, 3), Some(HitTarget::EmailLink));

        hits.clear();
        assert_eq!(hits.hit(3, 3), None);
    }

    #[test]
    fn test_zero_sized_regions_ignored() {
        let mut hits = HitMap::default();
        hits.record(Rect::new(0, 0, 0, 1), HitTarget::FormSubmit);
        assert_eq!(hits.hit(0, 0), None);
    }
}
