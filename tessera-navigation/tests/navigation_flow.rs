use tessera_navigation::{
    ContentSlot, Detent, NavigableScreen, NavigationController, Navigator, PresentationContainer,
    ScreenId, ScreenRef, SheetArgs, StackContainer, TabContainer,
};

#[derive(Clone, Debug, PartialEq)]
enum View {
    Tab(&'static str),
    Article(u32),
    Settings,
    Text(&'static str),
}

struct TabScreen(&'static str);

impl NavigableScreen for TabScreen {
    type Content = View;

    fn id(&self) -> ScreenId {
        ScreenId::new(self.0)
    }

    fn content(&self) -> View {
        View::Tab(self.0)
    }
}

struct ArticleScreen(u32);

impl NavigableScreen for ArticleScreen {
    type Content = View;

    fn id(&self) -> ScreenId {
        ScreenId::new(format!("article-{}", self.0))
    }

    fn content(&self) -> View {
        View::Article(self.0)
    }
}

struct SettingsScreen;

impl NavigableScreen for SettingsScreen {
    type Content = View;

    fn id(&self) -> ScreenId {
        ScreenId::from("settings")
    }

    fn content(&self) -> View {
        View::Settings
    }
}

#[test]
fn tabbed_session_keeps_per_tab_stacks() {
    let navigator = Navigator::new();
    let app = ScreenRef::from_fn("app", || View::Text("app"));
    let tabs = TabContainer::new(
        &navigator,
        &app,
        vec![
            TabScreen("feed").into_screen_ref(),
            TabScreen("search").into_screen_ref(),
        ],
    );
    let feed = StackContainer::new(&navigator, TabScreen("feed").into_screen_ref());
    let search = StackContainer::new(&navigator, TabScreen("search").into_screen_ref());

    assert_eq!(tabs.render_selected(), Some(View::Tab("feed")));

    navigator.push(feed.root(), ArticleScreen(1));
    navigator.push(feed.root(), ArticleScreen(2));
    tabs.select(1);
    navigator.push(search.root(), ArticleScreen(9));

    assert_eq!(tabs.render_selected(), Some(View::Tab("search")));
    assert_eq!(feed.render_top(), View::Article(2));
    assert_eq!(search.render_top(), View::Article(9));

    navigator.pop_to_root(feed.root());
    assert_eq!(feed.render(), vec![View::Tab("feed")]);
    assert_eq!(search.depth(), 1);
}

#[test]
fn deep_link_style_path_replaces_stack() {
    let navigator = Navigator::new();
    let feed = TabScreen("feed").into_screen_ref();
    let stack = StackContainer::new(&navigator, feed.clone());
    navigator.push(&feed, SettingsScreen);

    navigator.push_path([
        feed.clone(),
        ArticleScreen(4).into_screen_ref(),
        ArticleScreen(5).into_screen_ref(),
    ]);

    let path = navigator.stack_path(&feed);
    assert!(path[0].instance_id().starts_with("article-4"));
    assert!(path[1].instance_id().starts_with("article-5"));
    assert_eq!(
        stack.render(),
        vec![View::Tab("feed"), View::Article(4), View::Article(5)]
    );

    navigator.push_path([feed.clone()]);
    assert_eq!(stack.depth(), 2);
}

#[test]
fn modal_layer_tracks_latest_presentation() {
    let navigator = Navigator::<View>::new();
    let feed = TabScreen("feed").into_screen_ref();
    let modal = PresentationContainer::new(&navigator, &feed);

    navigator.present_sheet(
        &feed,
        SettingsScreen,
        SheetArgs::default().detents([Detent::Medium]),
    );
    navigator.dismiss(&feed);
    navigator.present_sheet(&feed, ArticleScreen(3), SheetArgs::default().scalable(true));

    let Some(sheet) = modal.sheet() else {
        panic!("sheet should be presented");
    };
    assert_eq!(sheet.content, View::Article(3));
    assert!(sheet.instance_id.starts_with("article-3"));
    assert!(sheet.detents.contains(Detent::Large));
    assert!(!sheet.detents.contains(Detent::Medium));
    assert!(sheet.scalable);

    navigator.present_alert(
        &feed,
        "Discard draft?",
        ContentSlot::new(|| View::Text("discard")),
        None,
    );
    let Some(alert) = modal.alert() else {
        panic!("alert should be presented");
    };
    assert_eq!(alert.actions, View::Text("discard"));
    assert!(alert.message.is_none());
    assert!(modal.sheet().is_some());

    navigator.reset();
    assert!(modal.sheet().is_none());
    assert!(modal.alert().is_none());
    assert!(navigator.with(|store| store.is_empty()));
}

#[test]
fn separate_navigators_do_not_share_state() {
    let first = Navigator::<View>::new();
    let second = Navigator::<View>::new();
    let feed = TabScreen("feed").into_screen_ref();

    first.push(&feed, SettingsScreen);
    assert_eq!(first.stack_depth(&feed), 1);
    assert_eq!(second.stack_depth(&feed), 0);
    assert_eq!(second.version(), 0);
}
