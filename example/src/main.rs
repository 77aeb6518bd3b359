//! Walks through a small mail client session without a renderer.
//!
//! Run with `RUST_LOG=tessera_navigation=trace` to see every mutation span.

mod screens;

use tessera_navigation::{
    ContentSlot, Detent, NavigableScreen, NavigationConfig, NavigationController, Navigator,
    PresentationContainer, ScreenRef, SheetArgs, StackContainer, TabContainer,
};
use tracing::info;

use crate::screens::{Compose, Mailbox, Message, Settings, View};

const FALLBACK_FILTER: &str = "error,tessera_navigation=debug,example=info";

fn init_tracing() {
    let filter = match tracing_subscriber::EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => match tracing_subscriber::EnvFilter::try_new(FALLBACK_FILTER) {
            Ok(filter) => filter,
            Err(_) => tracing_subscriber::EnvFilter::new("error"),
        },
    };

    let _ = tracing_subscriber::fmt()
        .pretty()
        .with_env_filter(filter)
        .with_span_events(tracing_subscriber::fmt::format::FmtSpan::CLOSE)
        .try_init();
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    let navigator = Navigator::<View>::with_config(
        NavigationConfig::default()
            .default_detents([Detent::Medium, Detent::Large])
            .stack_depth_warning(8),
    );

    let app = ScreenRef::from_fn("app", || View::Label("app".into()));
    let tabs = TabContainer::new(
        &navigator,
        &app,
        vec![
            Mailbox::Inbox.into_screen_ref(),
            Mailbox::Sent.into_screen_ref(),
            Settings.into_screen_ref(),
        ],
    );
    let inbox = StackContainer::new(&navigator, Mailbox::Inbox.into_screen_ref());
    let modal = PresentationContainer::new(&navigator, inbox.root());

    info!(view = ?tabs.render_selected(), "launched");

    navigator.push(inbox.root(), Message::new(41, "Quarterly numbers"));
    navigator.push(inbox.root(), Message::new(42, "Re: Quarterly numbers"));
    info!(depth = inbox.depth(), top = ?inbox.render_top(), "opened thread");

    inbox.back();
    info!(depth = inbox.depth(), top = ?inbox.render_top(), "went back");

    let defaults = navigator.with(|store| store.config().sheet_args());
    navigator.present_sheet(inbox.root(), Compose::reply_to(41), defaults);
    if let Some(sheet) = modal.sheet() {
        let detents: Vec<_> = sheet.detents.iter().collect();
        info!(content = ?sheet.content, ?detents, "compose sheet shown");
    }

    navigator.present_alert(
        inbox.root(),
        "Discard draft?",
        ContentSlot::new(|| View::Label("Keep editing | Discard".into())),
        Some(ContentSlot::new(|| View::Label("The reply will be lost.".into()))),
    );
    if let Some(alert) = modal.alert() {
        info!(title = %alert.title, actions = ?alert.actions, "alert shown");
    }
    modal.close_alert();
    modal.close_sheet();

    navigator.present_sheet(
        inbox.root(),
        Compose::new_message(),
        SheetArgs::default().detents([Detent::fraction(0.4)]).scalable(true),
    );
    modal.close_sheet();

    tabs.select(1);
    navigator.push_path([
        Mailbox::Sent.into_screen_ref(),
        Message::new(7, "Travel plans").into_screen_ref(),
    ]);
    info!(view = ?tabs.render_selected(), "switched tab");

    let sent = StackContainer::new(&navigator, Mailbox::Sent.into_screen_ref());
    info!(layers = ?sent.render(), "sent stack");

    navigator.reset();
    info!(
        version = navigator.version(),
        empty = navigator.with(|store| store.is_empty()),
        "session reset"
    );
    Ok(())
}
