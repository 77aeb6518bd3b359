//! Navigation state for tessera applications.
//!
//! `tessera-navigation` keeps the state that decides which screens are visible
//! and how: pushed on a stack, presented as a sheet or full-screen cover,
//! selected as a tab, or covered by an alert. State is kept per *root screen*,
//! so every independently navigable part of an app (each tab, each window)
//! owns its own slice.
//!
//! # Overview
//!
//! - [`NavigationStore`] holds the four per-root mappings and every mutation.
//! - [`Navigator`] is the shared handle passed to components, implementing
//!   [`NavigationController`].
//! - [`RootBindings`] derive getter/setter [`Binding`]s over one root's slice.
//! - [`StackContainer`], [`TabContainer`] and [`PresentationContainer`] consume
//!   those bindings where a framework would place its widgets.
//!
//! # Usage
//!
//! ```
//! use tessera_navigation::{
//!     Detent, NavigationController, Navigator, PresentationContainer, ScreenRef, SheetArgs,
//!     StackContainer,
//! };
//!
//! let navigator = Navigator::<String>::new();
//! let home = ScreenRef::from_fn("home", || "Home".to_string());
//! let stack = StackContainer::new(&navigator, home.clone());
//! let modal = PresentationContainer::new(&navigator, &home);
//!
//! navigator.push(&home, ScreenRef::from_fn("inbox", || "Inbox".to_string()));
//! assert_eq!(stack.render(), vec!["Home", "Inbox"]);
//!
//! navigator.present_sheet(
//!     &home,
//!     ScreenRef::from_fn("compose", || "Compose".to_string()),
//!     SheetArgs::default().detents([Detent::Medium, Detent::Large]),
//! );
//! assert_eq!(modal.sheet().map(|sheet| sheet.content), Some("Compose".to_string()));
//!
//! modal.close_sheet();
//! assert!(navigator.presented_item(&home).is_none());
//! ```
//!
//! # Threading
//!
//! All navigation state lives on the UI thread. [`Navigator`] and
//! [`ContentSlot`] are built on `Rc`, so neither can leave the thread that
//! created them.

pub mod alert;
pub mod binding;
pub mod config;
pub mod container;
pub mod item;
pub mod mode;
pub mod navigator;
pub mod screen;
pub mod slot;
pub mod store;

pub use crate::{
    alert::AlertDescriptor,
    binding::{Binding, RootBindings},
    config::{NavigationConfig, SheetArgs},
    container::{
        PresentationContainer, PresentedAlert, PresentedSheet, StackContainer, TabContainer,
    },
    item::NavigationItem,
    mode::{Detent, DetentSet, PresentationMode},
    navigator::{NavigationController, Navigator},
    screen::{NavigableScreen, ScreenId, ScreenRef},
    slot::ContentSlot,
    store::NavigationStore,
};
