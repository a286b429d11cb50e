use crate::content::MessageFeed;
use crate::flow::{RevealTick, Section};

/// Application-level events
#[derive(Debug, Clone)]
pub enum AppEvent {
    /// Terminal input event
    Input(crossterm::event::Event),

    /// The session's single fetch finished (successfully or not)
    MessagesLoaded(MessageFeed),

    /// Reveal one more message on the Affection section
    RevealTick,

    /// A delayed section change is due
    AdvanceDue(Section),

    /// Frame tick for animations
    Tick,
}

impl From<MessageFeed> for AppEvent {
    fn from(feed: MessageFeed) -> Self {
        AppEvent::MessagesLoaded(feed)
    }
}

impl From<RevealTick> for AppEvent {
    fn from(_: RevealTick) -> Self {
        AppEvent::RevealTick
    }
}
