use tessera_navigation::{NavigableScreen, ScreenId};

/// What the demo's screens produce in place of real widgets.
#[derive(Clone, Debug, PartialEq)]
pub enum View {
    Label(String),
    MessageList(&'static str),
    Thread { id: u32, subject: String },
    Editor { reply_to: Option<u32> },
}

#[derive(Clone, Copy, Debug)]
pub enum Mailbox {
    Inbox,
    Sent,
}

impl NavigableScreen for Mailbox {
    type Content = View;

    fn id(&self) -> ScreenId {
        match self {
            Self::Inbox => ScreenId::from("inbox"),
            Self::Sent => ScreenId::from("sent"),
        }
    }

    fn content(&self) -> View {
        match self {
            Self::Inbox => View::MessageList("Inbox"),
            Self::Sent => View::MessageList("Sent"),
        }
    }
}

pub struct Message {
    id: u32,
    subject: String,
}

impl Message {
    pub fn new(id: u32, subject: impl Into<String>) -> Self {
        Self {
            id,
            subject: subject.into(),
        }
    }
}

impl NavigableScreen for Message {
    type Content = View;

    fn id(&self) -> ScreenId {
        ScreenId::new(format!("message-{}", self.id))
    }

    fn content(&self) -> View {
        View::Thread {
            id: self.id,
            subject: self.subject.clone(),
        }
    }
}

pub struct Compose {
    reply_to: Option<u32>,
}

impl Compose {
    pub fn new_message() -> Self {
        Self { reply_to: None }
    }

    pub fn reply_to(message: u32) -> Self {
        Self {
            reply_to: Some(message),
        }
    }
}

impl NavigableScreen for Compose {
    type Content = View;

    fn id(&self) -> ScreenId {
        ScreenId::from("compose")
    }

    fn content(&self) -> View {
        View::Editor {
            reply_to: self.reply_to,
        }
    }
}

pub struct Settings;

impl NavigableScreen for Settings {
    type Content = View;

    fn id(&self) -> ScreenId {
        ScreenId::from("settings")
    }

    fn content(&self) -> View {
        View::Label("Settings".into())
    }
}
