//! Lazy content factories.
//!
//! Navigation entries never hold built content. They hold a [`ContentSlot`]
//! that produces it on demand, so screens that are not on screen cost nothing
//! until a container asks for them.

use std::{fmt, rc::Rc};

/// Stable, comparable handle for a zero-argument content factory.
///
/// `ContentSlot` compares by identity (`Rc::ptr_eq`) so entries can be compared
/// without forcing deep closure comparisons. The factory may be invoked zero,
/// one or many times (once per render pass at most), so it must not have side
/// effects beyond building content.
pub struct ContentSlot<C = ()> {
    inner: Rc<dyn Fn() -> C>,
}

impl<C> ContentSlot<C> {
    /// Create a slot from a closure.
    pub fn new<F>(factory: F) -> Self
    where
        F: Fn() -> C + 'static,
    {
        Self {
            inner: Rc::new(factory),
        }
    }

    /// Invoke the factory and return the produced content.
    pub fn produce(&self) -> C {
        (self.inner)()
    }
}

impl<C> Clone for ContentSlot<C> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<C> PartialEq for ContentSlot<C> {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl<C> Eq for ContentSlot<C> {}

impl<C, F> From<F> for ContentSlot<C>
where
    F: Fn() -> C + 'static,
{
    fn from(factory: F) -> Self {
        Self::new(factory)
    }
}

impl<C> fmt::Debug for ContentSlot<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ContentSlot")
            .field("ptr", &Rc::as_ptr(&self.inner).cast::<()>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::rc::Rc;

    use super::ContentSlot;

    #[test]
    fn factory_is_not_invoked_until_produced() {
        let calls = Rc::new(Cell::new(0));
        let counter = Rc::clone(&calls);
        let slot = ContentSlot::new(move || {
            counter.set(counter.get() + 1);
            "detail"
        });
        assert_eq!(calls.get(), 0);

        assert_eq!(slot.produce(), "detail");
        assert_eq!(slot.produce(), "detail");
        assert_eq!(calls.get(), 2);
    }

    #[test]
    fn clones_share_identity() {
        let slot = ContentSlot::new(|| 1);
        let other = ContentSlot::new(|| 1);
        assert_eq!(slot, slot.clone());
        assert_ne!(slot, other);
    }
}
