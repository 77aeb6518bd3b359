//! Headless containers fed by root bindings.
//!
//! These adapters sit where a UI framework would place its stack, tab and
//! modal widgets. They only decide *which* content is active and build it;
//! layout, drawing and animation belong to the framework. Content is always
//! built after the store borrow is released, so a screen may read the
//! navigator while it builds.

use crate::{
    binding::Binding,
    item::NavigationItem,
    mode::DetentSet,
    navigator::Navigator,
    screen::{NavigableScreen, ScreenId, ScreenRef},
};

/// A root screen with its pushed entries on top.
pub struct StackContainer<C = ()> {
    root: ScreenRef<C>,
    navigator: Navigator<C>,
    path: Binding<Vec<NavigationItem<C>>>,
}

impl<C: 'static> StackContainer<C> {
    pub fn new(navigator: &Navigator<C>, root: ScreenRef<C>) -> Self {
        let path = navigator.bindings(&root).stack_path();
        Self {
            root,
            navigator: navigator.clone(),
            path,
        }
    }

    pub fn root(&self) -> &ScreenRef<C> {
        &self.root
    }

    /// The binding this container reads its path from.
    pub fn path(&self) -> &Binding<Vec<NavigationItem<C>>> {
        &self.path
    }

    /// Number of entries above the root.
    pub fn depth(&self) -> usize {
        self.path.get().len()
    }

    /// The entry currently on top, `None` when the root itself is showing.
    pub fn top(&self) -> Option<NavigationItem<C>> {
        self.path.get().pop()
    }

    /// Build every layer, root first and top last.
    pub fn render(&self) -> Vec<C> {
        let path = self.path.get();
        let mut layers = Vec::with_capacity(path.len() + 1);
        layers.push(self.root.content());
        layers.extend(path.iter().map(NavigationItem::content));
        layers
    }

    /// Build only what is visible: the top entry, or the root.
    pub fn render_top(&self) -> C {
        match self.top() {
            Some(item) => item.content(),
            None => self.root.content(),
        }
    }

    /// Go back one level, as a back gesture would.
    ///
    /// Returns `false` when the root was already showing.
    pub fn back(&self) -> bool {
        let mut path = self.path.get();
        if path.pop().is_none() {
            return false;
        }
        self.path.set(path);
        true
    }

    /// Sheets, covers and alerts presented from this stack's root.
    pub fn presentation(&self) -> PresentationContainer<C> {
        PresentationContainer::new(&self.navigator, &self.root)
    }
}

/// A fixed, ordered list of tab screens under one root.
pub struct TabContainer<C = ()> {
    tabs: Vec<ScreenRef<C>>,
    selection: Binding<Option<ScreenId>>,
}

impl<C: 'static> TabContainer<C> {
    pub fn new<R>(navigator: &Navigator<C>, root: &R, tabs: Vec<ScreenRef<C>>) -> Self
    where
        R: NavigableScreen + ?Sized,
    {
        let ids: Vec<_> = tabs.iter().map(|tab| tab.screen_id().clone()).collect();
        let selection = navigator.bindings(root).selected_tab(ids);
        Self { tabs, selection }
    }

    pub fn tabs(&self) -> &[ScreenRef<C>] {
        &self.tabs
    }

    /// Index of the selected tab.
    ///
    /// A selection that names none of the configured tabs resolves to the
    /// first tab. `None` only when there are no tabs.
    pub fn selected_index(&self) -> Option<usize> {
        if self.tabs.is_empty() {
            return None;
        }
        let selected = self.selection.get();
        let index = selected
            .and_then(|id| self.tabs.iter().position(|tab| *tab.screen_id() == id))
            .unwrap_or(0);
        Some(index)
    }

    pub fn selected(&self) -> Option<&ScreenRef<C>> {
        self.selected_index().and_then(|index| self.tabs.get(index))
    }

    /// Build the selected tab's content.
    pub fn render_selected(&self) -> Option<C> {
        self.selected().map(|tab| tab.content())
    }

    /// Select the tab at `index`. Returns `false` when out of range.
    pub fn select(&self, index: usize) -> bool {
        let Some(tab) = self.tabs.get(index) else {
            return false;
        };
        self.selection.set(Some(tab.screen_id().clone()));
        true
    }
}

/// A sheet as a container should show it.
#[derive(Debug)]
pub struct PresentedSheet<C> {
    pub instance_id: String,
    pub content: C,
    /// Never empty; falls back to `{Large}`.
    pub detents: DetentSet,
    pub scalable: bool,
}

/// An alert as a container should show it.
#[derive(Debug)]
pub struct PresentedAlert<C> {
    pub title: String,
    pub actions: C,
    pub message: Option<C>,
}

/// The modal layer of one root: at most one sheet or cover, and one alert.
pub struct PresentationContainer<C = ()> {
    navigator: Navigator<C>,
    root: ScreenId,
    sheet: Binding<Option<NavigationItem<C>>>,
    full_screen: Binding<Option<NavigationItem<C>>>,
    alert_presented: Binding<bool>,
}

impl<C: 'static> PresentationContainer<C> {
    pub fn new<R>(navigator: &Navigator<C>, root: &R) -> Self
    where
        R: NavigableScreen + ?Sized,
    {
        let bindings = navigator.bindings(root);
        Self {
            navigator: navigator.clone(),
            root: bindings.root().clone(),
            sheet: bindings.sheet(),
            full_screen: bindings.full_screen(),
            alert_presented: bindings.alert_presented(),
        }
    }

    /// Build the presented sheet, if any.
    pub fn sheet(&self) -> Option<PresentedSheet<C>> {
        let item = self.sheet.get()?;
        let detents = item
            .mode()
            .detents()
            .cloned()
            .map(DetentSet::or_default)
            .unwrap_or_default();
        Some(PresentedSheet {
            content: item.content(),
            scalable: item.mode().is_scalable(),
            instance_id: item.instance_id().to_owned(),
            detents,
        })
    }

    /// Build the presented full-screen cover, if any.
    pub fn full_screen(&self) -> Option<C> {
        self.full_screen.get().map(|item| item.content())
    }

    pub fn is_alert_presented(&self) -> bool {
        self.alert_presented.get()
    }

    /// Build the presented alert, if any.
    pub fn alert(&self) -> Option<PresentedAlert<C>> {
        let alert = self
            .navigator
            .with(|store| store.alert(&self.root).cloned())?;
        Some(PresentedAlert {
            title: alert.title().to_owned(),
            actions: alert.actions(),
            message: alert.message(),
        })
    }

    /// Close the sheet, as a swipe-down would. Covers are left alone.
    pub fn close_sheet(&self) {
        self.sheet.set(None);
    }

    pub fn close_full_screen(&self) {
        self.full_screen.set(None);
    }

    /// Close the alert, as tapping one of its actions would.
    pub fn close_alert(&self) {
        self.alert_presented.set(false);
    }
}
