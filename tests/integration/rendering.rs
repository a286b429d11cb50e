//! Rendering tests: draw the whole app into a TestBackend at each stage

use foryou::audio::RecordingPlayer;
use foryou::content::StaticContentStore;
use foryou::ui::Action;
use foryou::Section;

use super::common::fixtures::{sample_messages, Harness};
use super::common::terminal::{first_line, last_line, render_app};

#[tokio::test]
async fn test_opening_screen() {
    let h = Harness::new(StaticContentStore::with_messages(Vec::new()));
    let screen = render_app(&h.app, 120, 24);

    assert!(first_line(&screen).contains("rFor"));
    assert!(first_line(&screen).contains("muted"));
    assert!(screen.contains("F O R   Y O U"));
    assert!(screen.contains("A LITTLE SOMETHING"));
    assert!(last_line(&screen).contains("start"));
}

#[tokio::test]
async fn test_header_follows_mute_flag() {
    let mut h = Harness::new(StaticContentStore::with_messages(Vec::new()));
    h.app.handle_action(Action::ToggleAudio);

    let screen = render_app(&h.app, 80, 24);
    assert!(first_line(&screen).contains("playing"));
}

#[tokio::test]
async fn test_header_does_not_claim_playback_when_player_rejects() {
    let mut h = Harness::with_player(
        StaticContentStore::with_messages(Vec::new()),
        RecordingPlayer::rejecting(),
    );
    h.app.handle_action(Action::ToggleAudio);

    let screen = render_app(&h.app, 80, 24);
    assert!(!first_line(&screen).contains("playing"));
    assert!(first_line(&screen).contains("no audio"));
}

#[tokio::test]
async fn test_playful_question_screen() {
    let mut h = Harness::new(StaticContentStore::with_messages(Vec::new()));
    h.app.handle_action(Action::Confirm);

    let screen = render_app(&h.app, 120, 24);
    assert!(screen.contains("Ek Chhota Sa Sawal"));
    assert!(screen.contains("Haan, bilkul"));
    assert!(screen.contains("Bahut cute"));
    assert!(last_line(&screen).contains("answer"));

    h.app.handle_action(Action::Choose(1));
    let screen = render_app(&h.app, 120, 24);
    assert!(screen.contains("Shukriya"));
    assert!(!screen.contains("Bahut cute"));
}

#[tokio::test(start_paused = true)]
async fn test_affection_screen_shows_loading_then_cards() {
    let store = StaticContentStore::with_messages(sample_messages())
        .with_latency(std::time::Duration::from_secs(3));
    let mut h = Harness::new(store);
    h.app.start();
    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(0));
    h.pump_until(|app| app.section() == Section::Affection).await;

    let screen = render_app(&h.app, 100, 30);
    assert!(screen.contains("Kuch Baatein"));
    assert!(screen.contains("loading"));

    h.pump_until(|app| app.view().affection().is_some_and(|v| v.visible_count() == 1))
        .await;
    let screen = render_app(&h.app, 100, 30);
    assert!(!screen.contains("loading"));
    assert!(screen.contains("ordinary days"));
    assert!(!screen.contains("favourite"));
    assert!(!screen.contains("Aage Badhein"));

    h.pump_until(|app| app.view().affection().is_some_and(|v| v.can_continue()))
        .await;
    let screen = render_app(&h.app, 100, 30);
    assert!(screen.contains("favourite"));
    assert!(screen.contains("Aage Badhein"));
}

#[tokio::test(start_paused = true)]
async fn test_celebration_screen() {
    let mut h = Harness::new(StaticContentStore::with_messages(Vec::new()));
    h.app.start();
    h.pump().await;
    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(0));
    h.pump_until(|app| app.section() == Section::Affection).await;
    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(0));
    h.pump_until(|app| app.section() == Section::Celebration).await;

    let screen = render_app(&h.app, 80, 30);
    assert!(screen.contains("Valentine's"));
    assert!(screen.contains("With all my love"));
}
