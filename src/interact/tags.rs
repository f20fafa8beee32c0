// Skill tag toggles
//
// Each tag flips its own selected flag on click. Selection is local to
// the tag: nothing aggregates it, nothing caps it, and it is never
// persisted.

use super::PageState;
use crate::page::{Page, TagId};

/// Toggle one tag's selected state. Clicks on ids that don't name a
/// real tag are ignored.
pub fn toggle(page: &Page, state: &mut PageState, tag: TagId) {
    if !super::tag_exists(page, tag) {
        return;
    }
    if !state.selected_tags.remove(&tag) {
        state.selected_tags.insert(tag);
        tracing::debug!(block = tag.block.0, index = tag.index, "skill tag selected");
    }
}
