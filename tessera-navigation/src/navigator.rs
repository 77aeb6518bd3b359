//! Shared navigation handle.
//!
//! A [`Navigator`] is created once per UI session and passed explicitly to the
//! components that navigate. There is no global instance: two sessions simply
//! hold two navigators.
//!
//! # Thread affinity
//!
//! The handle is built on `Rc<RefCell<_>>`, so it is neither `Send` nor `Sync`.
//! All reads and mutations happen on the thread that owns the UI, and the
//! compiler rejects attempts to move the handle anywhere else.
//!
//! A closure passed to [`Navigator::update`] must not call back into the same
//! navigator; the store is already borrowed for the duration of the closure.

use std::{cell::RefCell, rc::Rc};

use crate::{
    config::{NavigationConfig, SheetArgs},
    item::NavigationItem,
    screen::{NavigableScreen, ScreenId, ScreenRef},
    slot::ContentSlot,
    store::NavigationStore,
};

/// Screen-oriented navigation commands.
///
/// UI code depends on this trait instead of a concrete store, so tests can
/// substitute a recording implementation. Every root argument only
/// contributes its [`NavigableScreen::id`].
pub trait NavigationController {
    /// Content type produced by navigated screens.
    type Content;

    /// Push `child` onto `root`'s stack.
    fn push<R, S>(&self, root: &R, child: S)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen<Content = Self::Content> + 'static;

    /// Replace the stack of the first screen with the remaining ones.
    fn push_path<I>(&self, screens: I)
    where
        I: IntoIterator<Item = ScreenRef<Self::Content>>;

    /// Present `child` as a sheet from `root`.
    fn present_sheet<R, S>(&self, root: &R, child: S, args: SheetArgs)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen<Content = Self::Content> + 'static;

    /// Present `child` as a full-screen cover from `root`.
    fn present_full_screen<R, S>(&self, root: &R, child: S)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen<Content = Self::Content> + 'static;

    /// Dismiss `root`'s sheet or full-screen cover.
    fn dismiss<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized;

    /// Pop the top of `root`'s stack.
    fn pop<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized;

    /// Clear `root`'s stack.
    fn pop_to_root<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized;

    /// Set `root`'s stack to empty, creating it if needed.
    fn reset_stack<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized;

    /// Select `child` as `root`'s tab.
    fn select_tab<R, S>(&self, root: &R, child: &S)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen + ?Sized;

    /// Id of `root`'s selected tab.
    fn selected_tab_id<R>(&self, root: &R) -> Option<ScreenId>
    where
        R: NavigableScreen + ?Sized;

    /// Show an alert on `root`.
    fn present_alert<R>(
        &self,
        root: &R,
        title: &str,
        actions: ContentSlot<Self::Content>,
        message: Option<ContentSlot<Self::Content>>,
    ) where
        R: NavigableScreen + ?Sized;

    /// Dismiss `root`'s alert.
    fn dismiss_alert<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized;

    /// Clear all navigation state.
    fn reset(&self);
}

/// Cheap-clone handle to one session's [`NavigationStore`].
///
/// # Examples
///
/// ```
/// use tessera_navigation::{NavigationController, Navigator, ScreenRef};
///
/// let navigator = Navigator::<()>::new();
/// let home = ScreenRef::from_fn("home", || ());
/// let detail = ScreenRef::from_fn("detail", || ());
///
/// navigator.push(&home, detail.clone());
/// navigator.push(&home, detail);
/// assert_eq!(navigator.stack_depth(&home), 2);
///
/// navigator.pop_to_root(&home);
/// assert_eq!(navigator.stack_depth(&home), 0);
/// ```
pub struct Navigator<C = ()> {
    store: Rc<RefCell<NavigationStore<C>>>,
}

impl<C> Clone for Navigator<C> {
    fn clone(&self) -> Self {
        Self {
            store: Rc::clone(&self.store),
        }
    }
}

impl<C> Default for Navigator<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C> Navigator<C> {
    /// Create a navigator over an empty store.
    pub fn new() -> Self {
        Self::with_config(NavigationConfig::default())
    }

    pub fn with_config(config: NavigationConfig) -> Self {
        Self::from_store(NavigationStore::with_config(config))
    }

    /// Wrap an existing store.
    pub fn from_store(store: NavigationStore<C>) -> Self {
        Self {
            store: Rc::new(RefCell::new(store)),
        }
    }

    /// Execute a closure with shared access to the store.
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&NavigationStore<C>) -> R,
    {
        f(&self.store.borrow())
    }

    /// Execute a closure with exclusive access to the store.
    pub fn update<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut NavigationStore<C>) -> R,
    {
        f(&mut self.store.borrow_mut())
    }

    /// Mutation counter of the underlying store.
    pub fn version(&self) -> u64 {
        self.with(NavigationStore::version)
    }

    /// Whether two handles point at the same store.
    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.store, &other.store)
    }

    /// Number of entries on `root`'s stack.
    pub fn stack_depth<R>(&self, root: &R) -> usize
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.with(|store| store.stack_path(&root).len())
    }

    /// Snapshot of `root`'s stack.
    pub fn stack_path<R>(&self, root: &R) -> Vec<NavigationItem<C>>
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.with(|store| store.stack_path(&root).to_vec())
    }

    /// `root`'s sheet or full-screen cover.
    pub fn presented_item<R>(&self, root: &R) -> Option<NavigationItem<C>>
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.with(|store| store.presented_item(&root).cloned())
    }

    /// Whether `root` currently shows an alert.
    pub fn has_alert<R>(&self, root: &R) -> bool
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.with(|store| store.alert(&root).is_some())
    }
}

impl<C: 'static> NavigationController for Navigator<C> {
    type Content = C;

    fn push<R, S>(&self, root: &R, child: S)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen<Content = C> + 'static,
    {
        let root = root.id();
        self.update(|store| store.push(&root, child));
    }

    fn push_path<I>(&self, screens: I)
    where
        I: IntoIterator<Item = ScreenRef<C>>,
    {
        self.update(|store| store.push_path(screens));
    }

    fn present_sheet<R, S>(&self, root: &R, child: S, args: SheetArgs)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen<Content = C> + 'static,
    {
        let root = root.id();
        self.update(|store| store.present_sheet(&root, child, args));
    }

    fn present_full_screen<R, S>(&self, root: &R, child: S)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen<Content = C> + 'static,
    {
        let root = root.id();
        self.update(|store| store.present_full_screen(&root, child));
    }

    fn dismiss<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.update(|store| store.dismiss(&root));
    }

    fn pop<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.update(|store| {
            store.pop(&root);
        });
    }

    fn pop_to_root<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.update(|store| store.pop_to_root(&root));
    }

    fn reset_stack<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.update(|store| store.reset_stack(&root));
    }

    fn select_tab<R, S>(&self, root: &R, child: &S)
    where
        R: NavigableScreen + ?Sized,
        S: NavigableScreen + ?Sized,
    {
        let root = root.id();
        let tab = child.id();
        self.update(|store| store.select_tab_id(&root, tab));
    }

    fn selected_tab_id<R>(&self, root: &R) -> Option<ScreenId>
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.with(|store| store.selected_tab_id(&root).cloned())
    }

    fn present_alert<R>(
        &self,
        root: &R,
        title: &str,
        actions: ContentSlot<C>,
        message: Option<ContentSlot<C>>,
    ) where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.update(|store| store.present_alert(&root, title, actions, message));
    }

    fn dismiss_alert<R>(&self, root: &R)
    where
        R: NavigableScreen + ?Sized,
    {
        let root = root.id();
        self.update(|store| store.dismiss_alert(&root));
    }

    fn reset(&self) {
        self.update(NavigationStore::reset);
    }
}

#[cfg(test)]
mod tests {
    use super::{NavigationController, Navigator};
    use crate::{
        config::SheetArgs,
        mode::Detent,
        screen::{ScreenId, ScreenRef},
        slot::ContentSlot,
    };

    fn screen(id: &'static str) -> ScreenRef<String> {
        ScreenRef::from_fn(id, move || format!("{id} content"))
    }

    #[test]
    fn clones_share_one_store() {
        let navigator = Navigator::new();
        let other = navigator.clone();
        let root = screen("root");

        other.push(&root, screen("child"));
        assert!(navigator.ptr_eq(&other));
        assert_eq!(navigator.stack_depth(&root), 1);
        assert_eq!(navigator.version(), other.version());
        assert!(!navigator.ptr_eq(&Navigator::new()));
    }

    #[test]
    fn commands_route_through_root_ids() {
        let navigator = Navigator::new();
        let root = screen("root");

        navigator.push_path([screen("root"), screen("a"), screen("b")]);
        assert_eq!(navigator.stack_depth(&root), 2);
        navigator.pop(&root);
        assert_eq!(navigator.stack_path(&root)[0].content(), "a content");

        navigator.present_sheet(
            &root,
            screen("sheet"),
            SheetArgs::default().detents([Detent::Medium]),
        );
        let presented = navigator.presented_item(&root);
        assert_eq!(
            presented.as_ref().map(|item| item.mode().is_sheet()),
            Some(true)
        );

        navigator.present_alert(&root, "Heads up", ContentSlot::new(String::new), None);
        assert!(navigator.has_alert(&root));
        navigator.dismiss_alert(&root);
        assert!(!navigator.has_alert(&root));

        navigator.select_tab(&root, &screen("settings"));
        assert_eq!(
            navigator.selected_tab_id(&root),
            Some(ScreenId::from("settings"))
        );

        navigator.reset();
        assert!(navigator.with(|store| store.is_empty()));
    }

    #[test]
    fn navigator_is_usable_as_a_generic_controller() {
        fn open_details<N>(nav: &N, root: &ScreenRef<String>)
        where
            N: NavigationController<Content = String>,
        {
            nav.push(root, screen("details"));
            nav.present_full_screen(root, screen("cover"));
        }

        let navigator = Navigator::new();
        let root = screen("root");
        open_details(&navigator, &root);
        assert_eq!(navigator.stack_depth(&root), 1);
        assert!(
            navigator
                .presented_item(&root)
                .is_some_and(|item| item.mode().is_full_screen())
        );
        navigator.dismiss(&root);
        assert!(navigator.presented_item(&root).is_none());
    }
}
