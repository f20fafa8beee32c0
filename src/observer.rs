// Visibility watcher - viewport intersection tracking
//
// The TUI analog of an intersection observer: blocks are registered
// once, and on every scroll the watcher reports which of them now meet
// the visibility threshold. A block that fires is dropped from the
// watch list, so each crossing is strictly one-shot.
//
// Two instances exist at runtime: the reveal watcher (10% threshold,
// 100-unit bottom margin shrink) and the image watcher (any overlap).

use crate::page::{BlockId, Page};

/// Watches registered blocks for viewport intersection.
#[derive(Debug)]
pub struct VisibilityWatcher {
    /// Fraction of the block that must be inside the (shrunk) viewport
    threshold: f32,
    /// Units removed from the bottom of the viewport before testing
    bottom_margin: u32,
    watched: Vec<BlockId>,
}

impl VisibilityWatcher {
    pub fn new(threshold: f32, bottom_margin: u32) -> Self {
        Self {
            threshold,
            bottom_margin,
            watched: Vec::new(),
        }
    }

    /// Register a block. Watching the same block twice is a no-op.
    pub fn watch(&mut self, id: BlockId) {
        if !self.watched.contains(&id) {
            self.watched.push(id);
        }
    }

    /// Blocks still being watched
    pub fn watched(&self) -> &[BlockId] {
        &self.watched
    }

    /// Report blocks that meet the threshold for the given viewport,
    /// removing them from the watch list (one-shot). Returned in
    /// document order.
    ///
    /// The bottom margin is clamped to a quarter of the viewport: the
    /// configured value assumes a full-height page, and a terminal
    /// body is usually far shorter than that. Without the clamp a
    /// small viewport shrinks to nothing and the watcher goes blind.
    pub fn intersections(&mut self, page: &Page, scroll: u32, viewport: u32) -> Vec<BlockId> {
        let margin = self.bottom_margin.min(viewport / 4);
        let view_top = scroll;
        let view_bottom = (scroll + viewport).saturating_sub(margin);
        if view_bottom <= view_top {
            return Vec::new();
        }

        let mut fired: Vec<BlockId> = Vec::new();
        self.watched.retain(|id| {
            let Some(block) = page.block(*id) else {
                // Unknown block: silently drop, same as observing a
                // detached element
                return false;
            };
            if block.height == 0 {
                return false;
            }
            let top = block.top.max(view_top);
            let bottom = (block.top + block.height).min(view_bottom);
            let overlap = bottom.saturating_sub(top);
            let fraction = overlap as f32 / block.height as f32;
            let hit = overlap > 0 && fraction >= self.threshold;
            if hit {
                fired.push(*id);
            }
            !hit
        });
        fired.sort();
        fired
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::page::{BlockKind, NavLink, Page, SectionId};

    fn three_block_page() -> Page {
        // Three 100-unit blocks at tops 0, 100, 200
        let kinds = vec![
            (SectionId::Hero, BlockKind::Spacer { units: 100 }),
            (SectionId::About, BlockKind::Spacer { units: 100 }),
            (SectionId::Skills, BlockKind::Spacer { units: 100 }),
        ];
        Page::build(
            "test",
            vec![NavLink {
                label: "Home".into(),
                target: Some(SectionId::Hero),
            }],
            kinds,
        )
    }

    #[test]
    fn test_fires_once_and_unwatches() {
        let page = three_block_page();
        let mut watcher = VisibilityWatcher::new(0.1, 0);
        watcher.watch(BlockId(0));

        let fired = watcher.intersections(&page, 0, 50);
        assert_eq!(fired, vec![BlockId(0)]);

        // Still in view, but no longer watched
        assert!(watcher.intersections(&page, 0, 50).is_empty());
        assert!(watcher.watched().is_empty());
    }

    #[test]
    fn test_threshold_requires_fraction_visible() {
        let page = three_block_page();
        let mut watcher = VisibilityWatcher::new(0.1, 0);
        watcher.watch(BlockId(1)); // top 100, height 100

        // 5 units visible = 5% < 10% threshold
        assert!(watcher.intersections(&page, 55, 50).is_empty());
        // 10 units visible = exactly 10%
        assert_eq!(watcher.intersections(&page, 60, 50), vec![BlockId(1)]);
    }

    #[test]
    fn test_bottom_margin_shrinks_viewport() {
        let page = three_block_page();
        let mut watcher = VisibilityWatcher::new(0.1, 100);
        watcher.watch(BlockId(1)); // top 100

        // Viewport [0, 120) shrinks by the clamped margin (30) to
        // [0, 90): block 1 not reached
        assert!(watcher.intersections(&page, 0, 120).is_empty());
        // Viewport [0, 160) shrinks to [0, 120): 20 units = 20% visible
        assert_eq!(watcher.intersections(&page, 0, 160), vec![BlockId(1)]);
    }

    #[test]
    fn test_margin_clamp_keeps_small_viewports_alive() {
        let page = three_block_page();
        let mut watcher = VisibilityWatcher::new(0.1, 100);
        watcher.watch(BlockId(0));

        // A 40-row body would vanish under the raw 100-unit margin;
        // clamped to 10, the window is [0, 30) and block 0 fires
        assert_eq!(watcher.intersections(&page, 0, 40), vec![BlockId(0)]);
    }

    #[test]
    fn test_scrolling_away_never_rewatches() {
        let page = three_block_page();
        let mut watcher = VisibilityWatcher::new(0.1, 0);
        watcher.watch(BlockId(0));

        assert_eq!(watcher.intersections(&page, 0, 50), vec![BlockId(0)]);
        // Scroll away and back: the marker stays fired
        assert!(watcher.intersections(&page, 250, 50).is_empty());
        assert!(watcher.intersections(&page, 0, 50).is_empty());
    }

    #[test]
    fn test_watch_is_idempotent() {
        let page = three_block_page();
        let mut watcher = VisibilityWatcher::new(0.0, 0);
        watcher.watch(BlockId(2));
        watcher.watch(BlockId(2));
        assert_eq!(watcher.watched().len(), 1);

        assert_eq!(watcher.intersections(&page, 200, 50), vec![BlockId(2)]);
    }
}
