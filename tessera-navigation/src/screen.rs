//! Screen identity and the navigable screen contract.
//!
//! Any type that can name itself with a [`ScreenId`] and build its content
//! lazily can be navigated to. Screens of different concrete types are erased
//! into [`ScreenRef`] so they can share one store.

use std::{borrow::Borrow, fmt, rc::Rc};

use crate::slot::ContentSlot;

/// Stable unique identifier of a screen.
///
/// Root screens use their id as the key for their navigation slice, so ids must
/// be unique among all screens that are alive at the same time.
#[derive(Clone, Debug, Default, Eq, Hash, Ord, PartialEq, PartialOrd)]
pub struct ScreenId(String);

impl ScreenId {
    /// Create an id from anything string-like.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Borrow the id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ScreenId {
    fn from(id: &str) -> Self {
        Self(id.to_owned())
    }
}

impl From<String> for ScreenId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl AsRef<str> for ScreenId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl Borrow<str> for ScreenId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl PartialEq<str> for ScreenId {
    fn eq(&self, other: &str) -> bool {
        self.0 == other
    }
}

impl PartialEq<&str> for ScreenId {
    fn eq(&self, other: &&str) -> bool {
        self.0 == *other
    }
}

/// A screen that can be pushed, presented or selected as a tab.
///
/// `content` is called lazily by containers, possibly once per render pass, so
/// it must be free of side effects other than building content.
pub trait NavigableScreen {
    /// What the screen builds. For tessera components this is usually `()`,
    /// since building a component is itself the effect.
    type Content;

    /// Stable unique id of this screen.
    fn id(&self) -> ScreenId;

    /// Build the screen content.
    fn content(&self) -> Self::Content;

    /// Erase this screen into a [`ScreenRef`] without building its content.
    fn into_screen_ref(self) -> ScreenRef<Self::Content>
    where
        Self: Sized + 'static,
        Self::Content: 'static,
    {
        ScreenRef::new(self)
    }
}

/// Type-erased screen: an id plus a lazy content factory.
///
/// # Examples
///
/// ```
/// use tessera_navigation::{NavigableScreen, ScreenRef};
///
/// let settings = ScreenRef::from_fn("settings", || "Settings".to_string());
/// assert_eq!(settings.id(), "settings");
/// assert_eq!(settings.content(), "Settings");
/// ```
pub struct ScreenRef<C = ()> {
    id: ScreenId,
    content: ContentSlot<C>,
}

impl<C: 'static> ScreenRef<C> {
    /// Erase a concrete screen. Its content is not built here.
    pub fn new<S>(screen: S) -> Self
    where
        S: NavigableScreen<Content = C> + 'static,
    {
        let id = screen.id();
        let screen = Rc::new(screen);
        Self {
            id,
            content: ContentSlot::new(move || screen.content()),
        }
    }
}

impl<C> ScreenRef<C> {
    /// Build a screen directly from an id and a content factory.
    pub fn from_fn<F>(id: impl Into<ScreenId>, factory: F) -> Self
    where
        F: Fn() -> C + 'static,
    {
        Self {
            id: id.into(),
            content: ContentSlot::new(factory),
        }
    }

    /// Build a screen from an id and an existing slot.
    pub fn from_slot(id: impl Into<ScreenId>, content: ContentSlot<C>) -> Self {
        Self {
            id: id.into(),
            content,
        }
    }

    /// Borrow the screen id.
    pub fn screen_id(&self) -> &ScreenId {
        &self.id
    }

    /// The lazy content factory of this screen.
    pub fn slot(&self) -> &ContentSlot<C> {
        &self.content
    }

    pub(crate) fn into_parts(self) -> (ScreenId, ContentSlot<C>) {
        (self.id, self.content)
    }
}

impl<C> NavigableScreen for ScreenRef<C> {
    type Content = C;

    fn id(&self) -> ScreenId {
        self.id.clone()
    }

    fn content(&self) -> C {
        self.content.produce()
    }

    fn into_screen_ref(self) -> ScreenRef<C> {
        self
    }
}

impl<C> Clone for ScreenRef<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            content: self.content.clone(),
        }
    }
}

impl<C> fmt::Debug for ScreenRef<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ScreenRef").field("id", &self.id).finish()
    }
}
