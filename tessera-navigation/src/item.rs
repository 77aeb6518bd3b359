//! Live navigation entries.

use std::{
    fmt,
    hash::{Hash, Hasher},
};

use uuid::Uuid;

use crate::{mode::PresentationMode, screen::ScreenId, slot::ContentSlot};

/// One navigated-to or presented destination.
///
/// Every item gets its own instance id, built from the screen id followed by a
/// fresh UUID, so pushing the same screen twice yields two distinct entries.
/// Equality and hashing only look at the instance id.
pub struct NavigationItem<C = ()> {
    instance_id: String,
    screen_id: ScreenId,
    content: ContentSlot<C>,
    mode: PresentationMode,
}

impl<C> NavigationItem<C> {
    /// Create an item with a fresh instance id.
    pub fn new(screen_id: ScreenId, content: ContentSlot<C>, mode: PresentationMode) -> Self {
        let instance_id = format!("{screen_id}{}", Uuid::new_v4());
        Self {
            instance_id,
            screen_id,
            content,
            mode,
        }
    }

    /// Unique id of this entry.
    pub fn instance_id(&self) -> &str {
        &self.instance_id
    }

    /// Id of the screen this entry was created from.
    pub fn screen_id(&self) -> &ScreenId {
        &self.screen_id
    }

    /// How this entry is shown.
    pub fn mode(&self) -> &PresentationMode {
        &self.mode
    }

    pub fn slot(&self) -> &ContentSlot<C> {
        &self.content
    }

    /// Build the content for this entry.
    pub fn content(&self) -> C {
        self.content.produce()
    }
}

impl<C> Clone for NavigationItem<C> {
    fn clone(&self) -> Self {
        Self {
            instance_id: self.instance_id.clone(),
            screen_id: self.screen_id.clone(),
            content: self.content.clone(),
            mode: self.mode.clone(),
        }
    }
}

impl<C> PartialEq for NavigationItem<C> {
    fn eq(&self, other: &Self) -> bool {
        self.instance_id == other.instance_id
    }
}

impl<C> Eq for NavigationItem<C> {}

impl<C> Hash for NavigationItem<C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.instance_id.hash(state);
    }
}

impl<C> fmt::Debug for NavigationItem<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NavigationItem")
            .field("instance_id", &self.instance_id)
            .field("mode", &self.mode)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use rustc_hash::FxHashSet;

    use super::NavigationItem;
    use crate::{mode::PresentationMode, screen::ScreenId, slot::ContentSlot};

    #[test]
    fn same_screen_yields_distinct_items() {
        let slot = ContentSlot::new(|| ());
        let first = NavigationItem::new(
            ScreenId::from("child"),
            slot.clone(),
            PresentationMode::Stack,
        );
        let second = NavigationItem::new(ScreenId::from("child"), slot, PresentationMode::Stack);

        assert!(first.instance_id().starts_with("child"));
        assert!(second.instance_id().starts_with("child"));
        assert_ne!(first, second);
        assert_eq!(first.slot(), second.slot());

        let set: FxHashSet<_> = [first.clone(), second, first].into_iter().collect();
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn equality_ignores_mode_and_content() {
        let item = NavigationItem::new(
            ScreenId::from("child"),
            ContentSlot::new(|| 1),
            PresentationMode::sheet(),
        );
        let mut copy = item.clone();
        copy.mode = PresentationMode::FullScreen;
        copy.content = ContentSlot::new(|| 2);
        assert_eq!(item, copy);
    }
}
