//! Integration tests for the full greeting flow
//!
//! Tests the flow: StaticContentStore -> fetch -> App events -> section
//! changes, reveal progress and audio calls. Time is paused so delayed
//! transitions and reveal ticks resolve instantly and deterministically.

use std::time::Duration;

use crossterm::event::{Event, KeyCode, KeyEvent, KeyModifiers};
use tokio::time::Instant;

use foryou::audio::{PlayerCall, RecordingPlayer};
use foryou::content::StaticContentStore;
use foryou::ui::{Action, AppEvent};
use foryou::Section;

use super::common::fixtures::{sample_messages, Harness};

fn key(code: KeyCode) -> AppEvent {
    AppEvent::Input(Event::Key(KeyEvent::new(code, KeyModifiers::NONE)))
}

fn can_continue(app: &foryou::App) -> bool {
    app.view().affection().is_some_and(|v| v.can_continue())
}

#[tokio::test(start_paused = true)]
async fn test_walks_every_section_in_order() {
    let mut h = Harness::new(StaticContentStore::with_messages(sample_messages()));
    h.app.start();
    h.pump_until(|app| !app.feed().is_loading()).await;

    let ids: Vec<_> = h.app.feed().messages().iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["first", "middle", "late"]);

    assert_eq!(h.app.section(), Section::Opening);
    h.app.handle_action(Action::Confirm);
    assert_eq!(h.app.section(), Section::Playful);
    assert!(h.app.is_muted());

    h.app.handle_action(Action::SelectNext);
    h.app.handle_action(Action::Confirm);
    assert_eq!(h.app.section(), Section::Playful, "answer waits before moving on");
    assert_eq!(h.app.answers().playful.map(|a| a.token), Some("very"));

    let answered_at = Instant::now();
    h.pump_until(|app| app.section() == Section::Affection).await;
    assert!(answered_at.elapsed() >= Duration::from_millis(1500));
    assert!(!h.app.is_muted(), "entering Affection unmutes");
    assert_eq!(h.player_calls(), vec![PlayerCall::Play]);

    let mounted_at = Instant::now();
    h.pump_until(can_continue).await;
    assert!(mounted_at.elapsed() >= Duration::from_millis(3 * 2500));
    assert_eq!(h.app.view().affection().map(|v| v.visible_count()), Some(3));

    h.app.handle_action(Action::Confirm);
    assert_eq!(h.app.section(), Section::Proposal);

    h.app.handle_action(Action::Choose(2));
    h.pump_until(|app| app.section() == Section::Celebration).await;
    assert_eq!(h.app.answers().proposal.map(|a| a.token), Some("ofcourse"));

    // Terminal: nothing moves it
    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(0));
    assert_eq!(h.app.section(), Section::Celebration);
}

#[tokio::test(start_paused = true)]
async fn test_fetch_failure_still_reaches_proposal() {
    let mut h = Harness::new(StaticContentStore::failing("store offline"));
    h.app.start();
    h.pump().await;
    assert!(!h.app.feed().is_loading());
    assert!(h.app.feed().is_empty());

    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(0));
    h.pump_until(|app| app.section() == Section::Affection).await;

    let view = h.app.view().affection().expect("affection view");
    assert!(!view.has_timer());
    assert!(view.can_continue());

    h.app.handle_action(Action::Confirm);
    assert_eq!(h.app.section(), Section::Proposal);
}

#[tokio::test(start_paused = true)]
async fn test_late_feed_starts_reveal_after_mount() {
    let store = StaticContentStore::with_messages(sample_messages())
        .with_latency(Duration::from_secs(10));
    let mut h = Harness::new(store);
    h.app.start();

    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(0));
    h.pump_until(|app| app.section() == Section::Affection).await;
    assert!(h.app.feed().is_loading());

    // Continue is not offered while loading
    h.app.handle_action(Action::Confirm);
    assert_eq!(h.app.section(), Section::Affection);

    h.pump_until(can_continue).await;
    assert_eq!(h.app.view().affection().map(|v| v.visible_count()), Some(3));
}

#[tokio::test(start_paused = true)]
async fn test_rejected_autoplay_is_not_retried() {
    let mut h = Harness::with_player(
        StaticContentStore::with_messages(Vec::new()),
        RecordingPlayer::rejecting(),
    );

    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(1));
    h.pump_until(|app| app.section() == Section::Affection).await;

    assert!(!h.app.is_muted());
    assert_eq!(h.player_calls(), vec![PlayerCall::Play]);
}

#[tokio::test(start_paused = true)]
async fn test_manual_unmute_is_left_alone() {
    let mut h = Harness::new(StaticContentStore::with_messages(Vec::new()));

    h.app.handle_action(Action::ToggleAudio);
    h.app.handle_action(Action::ToggleAudio);
    h.app.handle_action(Action::ToggleAudio);
    assert!(!h.app.is_muted());

    h.app.handle_action(Action::Confirm);
    h.app.handle_action(Action::Choose(0));
    h.pump_until(|app| app.section() == Section::Affection).await;

    assert!(!h.app.is_muted());
    assert_eq!(
        h.player_calls(),
        vec![PlayerCall::Play, PlayerCall::Pause, PlayerCall::Play]
    );
}

#[tokio::test(start_paused = true)]
async fn test_second_answer_is_ignored() {
    let mut h = Harness::new(StaticContentStore::with_messages(Vec::new()));
    h.app.handle_action(Action::Confirm);

    h.app.handle_action(Action::Choose(0));
    h.app.handle_action(Action::Choose(1));
    h.app.handle_action(Action::SelectNext);
    h.app.handle_action(Action::Confirm);
    assert_eq!(h.app.answers().playful.map(|a| a.token), Some("yes"));

    h.pump_until(|app| app.section() == Section::Affection).await;

    // Only one delayed change was scheduled
    let extra = tokio::time::timeout(Duration::from_secs(5), h.app.next_event()).await;
    assert!(extra.is_err());
    assert_eq!(h.app.section(), Section::Affection);
}

#[tokio::test(start_paused = true)]
async fn test_keyboard_drives_the_flow() {
    let mut h = Harness::new(StaticContentStore::with_messages(Vec::new()));

    h.app.handle_app_event(key(KeyCode::Enter));
    assert_eq!(h.app.section(), Section::Playful);

    h.app.handle_app_event(key(KeyCode::Char('2')));
    assert_eq!(h.app.answers().playful.map(|a| a.token), Some("very"));

    h.app.handle_app_event(key(KeyCode::Char('m')));
    assert!(!h.app.is_muted());

    h.app.handle_app_event(key(KeyCode::Char('q')));
    assert!(h.app.should_quit());
}
