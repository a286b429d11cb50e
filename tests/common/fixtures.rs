//! App fixtures backed by an in-memory store and a recording player

use std::sync::Arc;

use foryou::audio::{PlayerCall, RecordingPlayer};
use foryou::content::StaticContentStore;
use foryou::ui::AppEvent;
use foryou::{AffectionMessage, App, Config};
use parking_lot::Mutex;

/// An app plus a handle on what its audio player was asked to do
pub struct Harness {
    pub app: App,
    pub calls: Arc<Mutex<Vec<PlayerCall>>>,
}

impl Harness {
    pub fn new(store: StaticContentStore) -> Self {
        Self::with_player(store, RecordingPlayer::new())
    }

    pub fn with_player(store: StaticContentStore, player: RecordingPlayer) -> Self {
        let calls = player.calls();
        let app = App::new(Config::default(), Arc::new(store), Box::new(player));
        Self { app, calls }
    }

    /// Wait for the next background event and apply it
    pub async fn pump(&mut self) -> AppEvent {
        let event = self
            .app
            .next_event()
            .await
            .expect("event channel closed");
        self.app.handle_app_event(event.clone());
        event
    }

    /// Apply events until `done` holds
    pub async fn pump_until(&mut self, mut done: impl FnMut(&App) -> bool) {
        while !done(&self.app) {
            self.pump().await;
        }
    }

    pub fn player_calls(&self) -> Vec<PlayerCall> {
        self.calls.lock().clone()
    }
}

/// Three messages handed out in a different order than they display
pub fn sample_messages() -> Vec<AffectionMessage> {
    vec![
        AffectionMessage::new("late")
            .with_text("Your laugh is my favourite song")
            .with_order(3),
        AffectionMessage::new("first")
            .with_text("You make ordinary days feel bright")
            .with_order(1)
            .with_sender("Me"),
        AffectionMessage::new("middle")
            .with_text("Thank you for every little thing")
            .with_order(2),
    ]
}
