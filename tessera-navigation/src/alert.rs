//! Alerts shown on top of a root.

use std::fmt;

use uuid::Uuid;

use crate::slot::ContentSlot;

/// A titled alert with lazily built actions and an optional message.
///
/// Identity is the generated `id`; two alerts with the same title are still
/// different alerts.
pub struct AlertDescriptor<C = ()> {
    id: String,
    title: String,
    actions: ContentSlot<C>,
    message: Option<ContentSlot<C>>,
}

impl<C> AlertDescriptor<C> {
    pub fn new(
        title: impl Into<String>,
        actions: ContentSlot<C>,
        message: Option<ContentSlot<C>>,
    ) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            actions,
            message,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    /// Build the action content.
    pub fn actions(&self) -> C {
        self.actions.produce()
    }

    /// Build the message content, if the alert has one.
    pub fn message(&self) -> Option<C> {
        self.message.as_ref().map(ContentSlot::produce)
    }

    pub fn has_message(&self) -> bool {
        self.message.is_some()
    }
}

impl<C> Clone for AlertDescriptor<C> {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            title: self.title.clone(),
            actions: self.actions.clone(),
            message: self.message.clone(),
        }
    }
}

impl<C> PartialEq for AlertDescriptor<C> {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl<C> Eq for AlertDescriptor<C> {}

impl<C> fmt::Debug for AlertDescriptor<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AlertDescriptor")
            .field("id", &self.id)
            .field("title", &self.title)
            .field("has_message", &self.message.is_some())
            .finish()
    }
}
