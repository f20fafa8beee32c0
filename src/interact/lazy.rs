// Lazy image loading
//
// Project-card art carries a deferred source. The image watcher swaps
// it into the active source on first intersection and marks the image
// loaded, then stops watching. Without the watcher capability, every
// deferred source resolves eagerly at init.

use super::{ImageState, Interactions, PageState};
use crate::page::{BlockId, BlockKind, Page};

/// Register every deferred image, or resolve them all immediately
/// when the watcher is unavailable.
pub fn init(page: &Page, state: &mut PageState, ix: &mut Interactions) {
    for id in page.image_targets() {
        state.images.insert(id, ImageState::default());
        if ix.observer_enabled {
            ix.image_watcher.watch(id);
        } else {
            resolve(page, state, id);
        }
    }
}

/// Run the watcher and resolve whatever newly intersected.
pub fn observe(page: &Page, state: &mut PageState, ix: &mut Interactions) {
    let fired = ix
        .image_watcher
        .intersections(page, state.scroll, state.viewport);
    for id in fired {
        resolve(page, state, id);
    }
}

/// Swap the deferred source into the active source and mark loaded.
fn resolve(page: &Page, state: &mut PageState, id: BlockId) {
    let Some(BlockKind::ProjectCard { art, .. }) = page.block(id).map(|b| &b.kind) else {
        return;
    };
    let entry = state.images.entry(id).or_default();
    entry.source = Some(art.deferred.clone());
    entry.loaded = true;
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interact::{init as init_all, InitOptions};

    use crate::page::sample_page;

    #[test]
    fn test_images_start_deferred() {
        let page = sample_page();
        let (state, ix) = init_all(&page, InitOptions::default());

        for id in page.image_targets() {
            let img = state.images.get(&id).unwrap();
            assert!(!img.loaded);
            assert!(img.source.is_none());
        }
        assert_eq!(ix.image_watcher.watched().len(), 3);
    }

    #[test]
    fn test_intersection_swaps_source_once() {
        let page = sample_page();
        let (mut state, mut ix) = init_all(&page, InitOptions::default());
        state.viewport = page.height();

        observe(&page, &mut state, &mut ix);

        for id in page.image_targets() {
            let img = state.images.get(&id).unwrap();
            assert!(img.loaded);
            assert!(img.source.is_some());
        }
        // One-shot: nothing left to watch
        assert!(ix.image_watcher.watched().is_empty());
    }

    #[test]
    fn test_fallback_resolves_eagerly() {
        let page = sample_page();
        let (state, ix) = init_all(
            &page,
            InitOptions {
                observer_enabled: false,
                ..Default::default()
            },
        );

        for id in page.image_targets() {
            assert!(state.images.get(&id).unwrap().loaded);
        }
        assert!(ix.image_watcher.watched().is_empty());
    }
}
