//! Two-way bindings over store slices.
//!
//! Containers never touch the store's maps. They read and write through a
//! [`Binding`], and every write is routed to a store mutation: writing an empty
//! path pops to root, writing `None` dismisses, writing `false` dismisses the
//! alert. This keeps the store the only writer of navigation state.

use std::{fmt, rc::Rc};

use tracing::debug;

use crate::{
    item::NavigationItem,
    mode::PresentationMode,
    navigator::Navigator,
    screen::{NavigableScreen, ScreenId},
};

/// Getter/setter pair over a piece of state.
///
/// Like [`ContentSlot`](crate::ContentSlot), bindings compare by identity.
pub struct Binding<T> {
    get: Rc<dyn Fn() -> T>,
    set: Rc<dyn Fn(T)>,
}

impl<T> Binding<T> {
    /// Create a binding from a getter and a setter.
    pub fn new<G, S>(get: G, set: S) -> Self
    where
        G: Fn() -> T + 'static,
        S: Fn(T) + 'static,
    {
        Self {
            get: Rc::new(get),
            set: Rc::new(set),
        }
    }

    /// A binding that always reads `value` and ignores writes.
    pub fn constant(value: T) -> Self
    where
        T: Clone + 'static,
    {
        Self::new(move || value.clone(), |_| {})
    }

    /// Read the current value.
    pub fn get(&self) -> T {
        (self.get)()
    }

    /// Write a new value.
    pub fn set(&self, value: T) {
        (self.set)(value)
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        Self {
            get: Rc::clone(&self.get),
            set: Rc::clone(&self.set),
        }
    }
}

impl<T> PartialEq for Binding<T> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.get, &other.get) && Rc::ptr_eq(&self.set, &other.set)
    }
}

impl<T> Eq for Binding<T> {}

impl<T> fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Binding").finish_non_exhaustive()
    }
}

/// Bindings for one root's navigation slice.
pub struct RootBindings<C = ()> {
    navigator: Navigator<C>,
    root: ScreenId,
}

impl<C> Clone for RootBindings<C> {
    fn clone(&self) -> Self {
        Self {
            navigator: self.navigator.clone(),
            root: self.root.clone(),
        }
    }
}

impl<C: 'static> Navigator<C> {
    /// Bindings over `root`'s slice of this navigator's store.
    pub fn bindings<R>(&self, root: &R) -> RootBindings<C>
    where
        R: NavigableScreen + ?Sized,
    {
        RootBindings {
            navigator: self.clone(),
            root: root.id(),
        }
    }
}

impl<C: 'static> RootBindings<C> {
    pub fn root(&self) -> &ScreenId {
        &self.root
    }

    /// The root's stack path.
    ///
    /// Writing an empty path pops to root, writing a strict prefix of the
    /// current path pops the entries above it, and anything else replaces the
    /// path.
    pub fn stack_path(&self) -> Binding<Vec<NavigationItem<C>>> {
        let (reader, root) = (self.navigator.clone(), self.root.clone());
        let get = move || reader.with(|store| store.stack_path(&root).to_vec());

        let (writer, root) = (self.navigator.clone(), self.root.clone());
        let set = move |path: Vec<NavigationItem<C>>| {
            writer.update(|store| {
                if path.is_empty() {
                    store.pop_to_root(&root);
                    return;
                }
                let is_prefix = {
                    let current = store.stack_path(&root);
                    path.len() < current.len() && current.starts_with(&path)
                };
                if is_prefix {
                    store.truncate_stack(&root, path.len());
                } else {
                    store.replace_stack(&root, path);
                }
            });
        };
        Binding::new(get, set)
    }

    /// The root's presented item, visible only while it is a sheet.
    pub fn sheet(&self) -> Binding<Option<NavigationItem<C>>> {
        self.presented_slot(PresentationMode::is_sheet)
    }

    /// The root's presented item, visible only while it is a full-screen cover.
    pub fn full_screen(&self) -> Binding<Option<NavigationItem<C>>> {
        self.presented_slot(PresentationMode::is_full_screen)
    }

    /// Whether the root shows an alert.
    ///
    /// Writing `false` dismisses it. Writing `true` is ignored, since a bare
    /// flag cannot describe an alert.
    pub fn alert_presented(&self) -> Binding<bool> {
        let (reader, root) = (self.navigator.clone(), self.root.clone());
        let get = move || reader.with(|store| store.alert(&root).is_some());

        let (writer, root) = (self.navigator.clone(), self.root.clone());
        let set = move |presented: bool| {
            if presented {
                debug!(%root, "alert binding set to true ignored");
                return;
            }
            writer.update(|store| store.dismiss_alert(&root));
        };
        Binding::new(get, set)
    }

    /// The root's selected tab, resolved against `tabs`.
    ///
    /// A missing selection, or one naming none of `tabs`, reads as the first
    /// tab. With no tabs the stored selection is returned as is. Writing
    /// `None` is ignored.
    pub fn selected_tab<I>(&self, tabs: I) -> Binding<Option<ScreenId>>
    where
        I: IntoIterator<Item = ScreenId>,
    {
        let tabs: Vec<ScreenId> = tabs.into_iter().collect();
        let (reader, root) = (self.navigator.clone(), self.root.clone());
        let get = move || {
            let selected = reader.with(|store| store.selected_tab_id(&root).cloned());
            match selected {
                Some(id) if tabs.is_empty() || tabs.contains(&id) => Some(id),
                _ => tabs.first().cloned(),
            }
        };

        let (writer, root) = (self.navigator.clone(), self.root.clone());
        let set = move |tab: Option<ScreenId>| match tab {
            Some(tab) => writer.update(|store| store.select_tab_id(&root, tab)),
            None => debug!(%root, "tab binding cleared, selection kept"),
        };
        Binding::new(get, set)
    }

    fn presented_slot(
        &self,
        accepts: fn(&PresentationMode) -> bool,
    ) -> Binding<Option<NavigationItem<C>>> {
        let (reader, root) = (self.navigator.clone(), self.root.clone());
        let get = move || {
            reader.with(|store| {
                store
                    .presented_item(&root)
                    .filter(|item| accepts(item.mode()))
                    .cloned()
            })
        };

        let (writer, root) = (self.navigator.clone(), self.root.clone());
        let set = move |item: Option<NavigationItem<C>>| {
            writer.update(|store| match item {
                None => {
                    let owned = store
                        .presented_item(&root)
                        .is_some_and(|current| accepts(current.mode()));
                    if owned {
                        store.dismiss(&root);
                    }
                }
                Some(item) if accepts(item.mode()) => store.restore_presented(&root, item),
                Some(item) => {
                    debug!(%root, instance = item.instance_id(), "item of another kind ignored");
                }
            });
        };
        Binding::new(get, set)
    }
}

#[cfg(test)]
mod tests {
    use super::Binding;
    use crate::{
        config::SheetArgs,
        navigator::{NavigationController, Navigator},
        screen::{ScreenId, ScreenRef},
        slot::ContentSlot,
    };

    fn screen(id: &'static str) -> ScreenRef<&'static str> {
        ScreenRef::from_fn(id, move || id)
    }

    #[test]
    fn constant_binding_ignores_writes() {
        let binding = Binding::constant(3);
        binding.set(4);
        assert_eq!(binding.get(), 3);
        assert_eq!(binding, binding.clone());
    }

    #[test]
    fn stack_binding_reflects_store() {
        let navigator = Navigator::new();
        let root = screen("root");
        let path = navigator.bindings(&root).stack_path();
        assert!(path.get().is_empty());

        navigator.push(&root, screen("a"));
        navigator.push(&root, screen("b"));
        let items = path.get();
        assert_eq!(items.len(), 2);
        assert!(items[1].instance_id().starts_with('b'));
    }

    #[test]
    fn stack_binding_writes_pop_through_the_store() {
        let navigator = Navigator::new();
        let root = screen("root");
        navigator.push_path([screen("root"), screen("a"), screen("b"), screen("c")]);
        let path = navigator.bindings(&root).stack_path();

        let mut items = path.get();
        items.pop();
        path.set(items.clone());
        assert_eq!(path.get(), items);

        path.set(Vec::new());
        assert!(path.get().is_empty());
        assert!(navigator.with(|store| store.has_stack(&ScreenId::from("root"))));
    }

    #[test]
    fn stack_binding_accepts_rewritten_paths() {
        let navigator = Navigator::new();
        let root = screen("root");
        navigator.push_path([screen("root"), screen("a"), screen("b")]);
        let path = navigator.bindings(&root).stack_path();

        let mut items = path.get();
        items.reverse();
        path.set(items.clone());
        assert_eq!(path.get(), items);
    }

    #[test]
    fn sheet_and_full_screen_slots_never_see_each_other() {
        let navigator = Navigator::new();
        let root = screen("root");
        let bindings = navigator.bindings(&root);
        let (sheet, cover) = (bindings.sheet(), bindings.full_screen());

        navigator.present_sheet(&root, screen("sheet"), SheetArgs::default());
        assert!(sheet.get().is_some());
        assert!(cover.get().is_none());

        navigator.present_full_screen(&root, screen("cover"));
        assert!(sheet.get().is_none());
        assert!(cover.get().is_some());
    }

    #[test]
    fn clearing_one_slot_leaves_the_other_kind_alone() {
        let navigator = Navigator::new();
        let root = screen("root");
        let bindings = navigator.bindings(&root);

        navigator.present_full_screen(&root, screen("cover"));
        bindings.sheet().set(None);
        assert!(bindings.full_screen().get().is_some());

        bindings.full_screen().set(None);
        assert!(navigator.presented_item(&root).is_none());
    }

    #[test]
    fn slots_only_restore_items_of_their_kind() {
        let navigator = Navigator::new();
        let root = screen("root");
        let bindings = navigator.bindings(&root);

        navigator.present_sheet(&root, screen("sheet"), SheetArgs::default());
        let Some(sheet_item) = bindings.sheet().get() else {
            panic!("sheet should be visible");
        };
        navigator.dismiss(&root);

        bindings.full_screen().set(Some(sheet_item.clone()));
        assert!(navigator.presented_item(&root).is_none());

        bindings.sheet().set(Some(sheet_item.clone()));
        assert_eq!(navigator.presented_item(&root), Some(sheet_item));
    }

    #[test]
    fn alert_binding_only_dismisses() {
        let navigator = Navigator::new();
        let root = screen("root");
        let presented = navigator.bindings(&root).alert_presented();

        presented.set(true);
        assert!(!presented.get());

        navigator.present_alert(&root, "Delete?", ContentSlot::new(|| "ok"), None);
        assert!(presented.get());
        presented.set(false);
        assert!(!presented.get());
        assert!(!navigator.has_alert(&root));
    }

    #[test]
    fn tab_binding_defaults_to_first_tab() {
        let navigator = Navigator::<()>::new();
        let root = ScreenRef::from_fn("root", || ());
        let tabs = [ScreenId::from("feed"), ScreenId::from("profile")];
        let selection = navigator.bindings(&root).selected_tab(tabs);

        assert_eq!(selection.get(), Some(ScreenId::from("feed")));
        selection.set(Some(ScreenId::from("profile")));
        assert_eq!(
            navigator.selected_tab_id(&root),
            Some(ScreenId::from("profile"))
        );

        selection.set(None);
        assert_eq!(selection.get(), Some(ScreenId::from("profile")));

        let other = ScreenRef::from_fn("other", || ());
        let empty = navigator.bindings(&other).selected_tab([]);
        assert_eq!(empty.get(), None);
    }

    #[test]
    fn tab_binding_resolves_stale_selection_to_first_tab() {
        let navigator = Navigator::<()>::new();
        let root = ScreenRef::from_fn("root", || ());
        navigator.select_tab(&root, &ScreenRef::from_fn("removed", || ()));

        let tabs = [ScreenId::from("feed"), ScreenId::from("profile")];
        let selection = navigator.bindings(&root).selected_tab(tabs);
        assert_eq!(selection.get(), Some(ScreenId::from("feed")));
        assert_eq!(
            navigator.selected_tab_id(&root),
            Some(ScreenId::from("removed"))
        );

        let unconstrained = navigator.bindings(&root).selected_tab([]);
        assert_eq!(unconstrained.get(), Some(ScreenId::from("removed")));
    }
}
