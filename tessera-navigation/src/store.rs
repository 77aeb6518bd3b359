//! Per-root navigation state.
//!
//! [`NavigationStore`] is the single source of truth for what is visible under
//! every root screen. Each root owns an independent slice keyed by its
//! [`ScreenId`]:
//!
//! - `selected_tab`: the id of the selected tab screen
//! - `stack_paths`: pushed entries, bottom first, top last
//! - `presented_items`: at most one sheet or full-screen cover
//! - `alert_items`: at most one alert
//!
//! # Responsibilities
//!
//! - Apply every mutation synchronously and in call order.
//! - Treat an absent key as empty; no operation ever fails.
//! - Bump [`NavigationStore::version`] whenever state actually changes, so
//!   containers can tell a re-render is due.
//!
//! The store has no locking. It is meant to live on the UI thread, usually
//! behind a [`Navigator`](crate::Navigator).

use rustc_hash::FxHashMap;
use tracing::{debug, trace, warn};

use crate::{
    alert::AlertDescriptor,
    config::{NavigationConfig, SheetArgs},
    item::NavigationItem,
    mode::PresentationMode,
    screen::{NavigableScreen, ScreenId, ScreenRef},
    slot::ContentSlot,
};

/// Navigation state for every root of one UI session.
///
/// # Examples
///
/// ```
/// use tessera_navigation::{NavigationStore, ScreenId, ScreenRef};
///
/// let mut store = NavigationStore::<&'static str>::new();
/// let root = ScreenId::from("home");
///
/// store.push(&root, ScreenRef::from_fn("detail", || "Detail"));
/// assert_eq!(store.stack_path(&root).len(), 1);
/// assert_eq!(store.stack_path(&root)[0].content(), "Detail");
///
/// store.pop(&root);
/// assert!(store.stack_path(&root).is_empty());
/// ```
pub struct NavigationStore<C = ()> {
    selected_tab: FxHashMap<ScreenId, ScreenId>,
    stack_paths: FxHashMap<ScreenId, Vec<NavigationItem<C>>>,
    presented_items: FxHashMap<ScreenId, NavigationItem<C>>,
    alert_items: FxHashMap<ScreenId, AlertDescriptor<C>>,
    version: u64,
    config: NavigationConfig,
}

impl<C> Default for NavigationStore<C> {
    fn default() -> Self {
        Self::with_config(NavigationConfig::default())
    }
}

impl<C> NavigationStore<C> {
    /// Create an empty store with the default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store.
    pub fn with_config(config: NavigationConfig) -> Self {
        Self {
            selected_tab: FxHashMap::default(),
            stack_paths: FxHashMap::default(),
            presented_items: FxHashMap::default(),
            alert_items: FxHashMap::default(),
            version: 0,
            config,
        }
    }

    /// Configuration this store was created with.
    pub fn config(&self) -> &NavigationConfig {
        &self.config
    }

    /// Monotonic mutation counter.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Whether no root has any navigation state.
    pub fn is_empty(&self) -> bool {
        self.selected_tab.is_empty()
            && self.stack_paths.is_empty()
            && self.presented_items.is_empty()
            && self.alert_items.is_empty()
    }

    /// Push a screen onto the root's stack.
    ///
    /// Depth is unbounded; crossing `stack_depth_warning` only logs.
    #[tracing::instrument(level = "trace", skip(self, child))]
    pub fn push<S>(&mut self, root: &ScreenId, child: S)
    where
        S: NavigableScreen<Content = C> + 'static,
        C: 'static,
    {
        let item = Self::make_item(child.into_screen_ref(), PresentationMode::Stack);
        debug!(instance = item.instance_id(), "push");
        let path = self.stack_paths.entry(root.clone()).or_default();
        path.push(item);
        let depth = path.len();
        if let Some(limit) = self.config.stack_depth_warning {
            if depth > limit {
                warn!(%root, depth, limit, "navigation stack is unusually deep");
            }
        }
        self.bump_version();
    }

    /// Replace a root's stack with a whole path.
    ///
    /// The first screen is the root, every following screen becomes an entry,
    /// in order. With fewer than two screens nothing happens, not even
    /// clearing the existing stack.
    #[tracing::instrument(level = "trace", skip_all)]
    pub fn push_path<I>(&mut self, screens: I)
    where
        I: IntoIterator<Item = ScreenRef<C>>,
    {
        let mut screens = screens.into_iter();
        let Some(root) = screens.next() else {
            debug!("push_path without screens ignored");
            return;
        };
        let items: Vec<_> = screens
            .map(|screen| Self::make_item(screen, PresentationMode::Stack))
            .collect();
        if items.is_empty() {
            debug!(root = %root.screen_id(), "push_path with a single screen ignored");
            return;
        }
        let (root_id, _) = root.into_parts();
        debug!(root = %root_id, depth = items.len(), "push_path");
        self.stack_paths.insert(root_id, items);
        self.bump_version();
    }

    /// Remove the top entry of the root's stack.
    ///
    /// Returns the removed entry, `None` when the stack is absent or empty.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn pop(&mut self, root: &ScreenId) -> Option<NavigationItem<C>> {
        let Some(removed) = self.stack_paths.get_mut(root).and_then(Vec::pop) else {
            debug!(%root, "pop on empty stack ignored");
            return None;
        };
        self.bump_version();
        Some(removed)
    }

    /// Clear the root's stack, keeping the (now empty) entry.
    ///
    /// Roots that never had a stack are left absent.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn pop_to_root(&mut self, root: &ScreenId) {
        let Some(path) = self.stack_paths.get_mut(root) else {
            return;
        };
        if path.is_empty() {
            return;
        }
        path.clear();
        self.bump_version();
    }

    /// Set the root's stack to empty, creating it if needed.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn reset_stack(&mut self, root: &ScreenId) {
        match self.stack_paths.get_mut(root) {
            Some(path) if path.is_empty() => return,
            Some(path) => path.clear(),
            None => {
                self.stack_paths.insert(root.clone(), Vec::new());
            }
        }
        self.bump_version();
    }

    /// Present a screen as a sheet, replacing whatever the root presented.
    #[tracing::instrument(level = "trace", skip(self, child))]
    pub fn present_sheet<S>(&mut self, root: &ScreenId, child: S, args: SheetArgs)
    where
        S: NavigableScreen<Content = C> + 'static,
        C: 'static,
    {
        let item = Self::make_item(child.into_screen_ref(), args.into_mode());
        self.set_presented(root, item);
    }

    /// Present a sheet using the configured default detents.
    pub fn present_sheet_default<S>(&mut self, root: &ScreenId, child: S)
    where
        S: NavigableScreen<Content = C> + 'static,
        C: 'static,
    {
        let args = self.config.sheet_args();
        self.present_sheet(root, child, args);
    }

    /// Present a screen as a full-screen cover, replacing whatever the root
    /// presented.
    #[tracing::instrument(level = "trace", skip(self, child))]
    pub fn present_full_screen<S>(&mut self, root: &ScreenId, child: S)
    where
        S: NavigableScreen<Content = C> + 'static,
        C: 'static,
    {
        let item = Self::make_item(child.into_screen_ref(), PresentationMode::FullScreen);
        self.set_presented(root, item);
    }

    /// Dismiss the root's sheet or full-screen cover. Idempotent.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn dismiss(&mut self, root: &ScreenId) {
        if self.presented_items.remove(root).is_some() {
            self.bump_version();
        }
    }

    /// Show an alert on the root, replacing any alert already shown there.
    #[tracing::instrument(level = "trace", skip(self, title, actions, message))]
    pub fn present_alert(
        &mut self,
        root: &ScreenId,
        title: impl Into<String>,
        actions: ContentSlot<C>,
        message: Option<ContentSlot<C>>,
    ) {
        let alert = AlertDescriptor::new(title, actions, message);
        debug!(%root, alert = alert.id(), title = alert.title(), "present alert");
        if let Some(previous) = self.alert_items.insert(root.clone(), alert) {
            trace!(replaced = previous.id(), "alert replaced");
        }
        self.bump_version();
    }

    /// Dismiss the root's alert. Idempotent.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn dismiss_alert(&mut self, root: &ScreenId) {
        if self.alert_items.remove(root).is_some() {
            self.bump_version();
        }
    }

    /// Select `child` as the root's tab.
    pub fn select_tab<S>(&mut self, root: &ScreenId, child: &S)
    where
        S: NavigableScreen + ?Sized,
    {
        self.select_tab_id(root, child.id());
    }

    /// Select a tab by id.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn select_tab_id(&mut self, root: &ScreenId, tab: ScreenId) {
        if self.selected_tab.get(root) == Some(&tab) {
            return;
        }
        self.selected_tab.insert(root.clone(), tab);
        self.bump_version();
    }

    /// Id of the selected tab, if one was ever selected for this root.
    pub fn selected_tab_id(&self, root: &ScreenId) -> Option<&ScreenId> {
        self.selected_tab.get(root)
    }

    /// The root's stack, bottom first. Empty when absent.
    pub fn stack_path(&self, root: &ScreenId) -> &[NavigationItem<C>] {
        self.stack_paths
            .get(root)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Whether the root has a stack entry at all, even an empty one.
    pub fn has_stack(&self, root: &ScreenId) -> bool {
        self.stack_paths.contains_key(root)
    }

    /// The root's sheet or full-screen cover.
    pub fn presented_item(&self, root: &ScreenId) -> Option<&NavigationItem<C>> {
        self.presented_items.get(root)
    }

    /// The alert shown on the root, if any.
    pub fn alert(&self, root: &ScreenId) -> Option<&AlertDescriptor<C>> {
        self.alert_items.get(root)
    }

    /// Clear every root's state, for example on logout.
    #[tracing::instrument(level = "trace", skip(self))]
    pub fn reset(&mut self) {
        if self.is_empty() {
            return;
        }
        debug!(
            tabs = self.selected_tab.len(),
            stacks = self.stack_paths.len(),
            presented = self.presented_items.len(),
            alerts = self.alert_items.len(),
            "reset navigation state"
        );
        self.selected_tab.clear();
        self.stack_paths.clear();
        self.presented_items.clear();
        self.alert_items.clear();
        self.bump_version();
    }

    /// Keep only the first `len` entries, dropping the rest from the top.
    pub(crate) fn truncate_stack(&mut self, root: &ScreenId, len: usize) {
        let Some(path) = self.stack_paths.get_mut(root) else {
            return;
        };
        if path.len() <= len {
            return;
        }
        trace!(%root, from = path.len(), to = len, "truncate stack");
        path.truncate(len);
        self.bump_version();
    }

    /// Replace the root's stack with entries a container handed back.
    pub(crate) fn replace_stack(&mut self, root: &ScreenId, path: Vec<NavigationItem<C>>) {
        if self.stack_paths.get(root) == Some(&path) {
            return;
        }
        trace!(%root, depth = path.len(), "replace stack");
        self.stack_paths.insert(root.clone(), path);
        self.bump_version();
    }

    /// Put back an item a container handed back, unless it is already shown.
    pub(crate) fn restore_presented(&mut self, root: &ScreenId, item: NavigationItem<C>) {
        if self.presented_items.get(root) == Some(&item) {
            return;
        }
        self.set_presented(root, item);
    }

    fn set_presented(&mut self, root: &ScreenId, item: NavigationItem<C>) {
        debug!(%root, instance = item.instance_id(), mode = ?item.mode(), "present");
        if let Some(previous) = self.presented_items.insert(root.clone(), item) {
            trace!(replaced = previous.instance_id(), "presented item replaced");
        }
        self.bump_version();
    }

    fn make_item(screen: ScreenRef<C>, mode: PresentationMode) -> NavigationItem<C> {
        let (id, content) = screen.into_parts();
        NavigationItem::new(id, content, mode)
    }

    fn bump_version(&mut self) {
        self.version = self.version.wrapping_add(1);
    }
}
