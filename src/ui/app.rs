use std::io;
use std::sync::Arc;
use std::time::Duration;

use chrono::Datelike;
use crossterm::{
    cursor::Hide,
    event::{Event, EventStream},
    execute,
    terminal::{enable_raw_mode, EnterAlternateScreen},
};
use futures::StreamExt;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout},
    style::Style,
    widgets::Widget,
    Frame, Terminal,
};
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;

use crate::audio::{AudioPlayer, AudioToggle, NullPlayer, ProcessPlayer};
use crate::config::{AudioConfig, Config, ContentConfig, ContentSource};
use crate::content::{
    spawn_fetch, ContentError, ContentStore, FileContentStore, HttpContentStore, MessageFeed,
};
use crate::flow::{Advance, Answers, Section, Sequencer, Step, Trigger};
use crate::ui::action::Action;
use crate::ui::components::theme::BG_BASE;
use crate::ui::components::{GlobalFooter, Header, SectionTransition, FRAME};
use crate::ui::events::AppEvent;
use crate::ui::sections::SectionView;
use crate::ui::terminal_guard::{install_panic_hook, TerminalGuard};

/// Build the content store described by the config
pub fn content_store(config: &ContentConfig) -> Result<Arc<dyn ContentStore>, ContentError> {
    Ok(match config.source() {
        ContentSource::Http(url) => Arc::new(HttpContentStore::new(url, config.request_timeout)?),
        ContentSource::File(path) => Arc::new(FileContentStore::new(path)),
    })
}

/// Build the audio player described by the config
pub fn audio_player(config: &AudioConfig) -> Box<dyn AudioPlayer> {
    if config.enabled {
        Box::new(ProcessPlayer::new(
            config.player.clone(),
            config.track_url.clone(),
        ))
    } else {
        Box::new(NullPlayer)
    }
}

/// Post `AdvanceDue(to)` after `delay`. The task resolves to whether the
/// event was delivered.
fn send_advance_after(
    tx: mpsc::UnboundedSender<AppEvent>,
    to: Section,
    delay: Duration,
) -> JoinHandle<bool> {
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        if tx.send(AppEvent::AdvanceDue(to)).is_err() {
            tracing::debug!(section = %to, "App closed before delayed transition");
            return false;
        }
        true
    })
}

/// Main application state
pub struct App {
    /// Application configuration
    config: Config,
    /// Whether the app should quit
    should_quit: bool,
    /// Which section is current, plus recorded answers
    sequencer: Sequencer,
    /// The mounted section view (always matches the sequencer)
    view: SectionView,
    /// Messages from the session's fetch
    feed: MessageFeed,
    /// Background music
    audio: AudioToggle,
    /// Fade-in of the mounted section
    transition: SectionTransition,
    /// Source of the messages
    store: Arc<dyn ContentStore>,
    /// Whether the one fetch has been kicked off
    fetch_started: bool,
    /// Event channel sender
    event_tx: mpsc::UnboundedSender<AppEvent>,
    /// Event channel receiver
    event_rx: mpsc::UnboundedReceiver<AppEvent>,
    /// Year shown in the footer
    year: i32,
}

impl App {
    pub fn new(config: Config, store: Arc<dyn ContentStore>, player: Box<dyn AudioPlayer>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        let feed = MessageFeed::pending();
        let sequencer = Sequencer::new(config.timing.sequencer_delays());
        let view = SectionView::mount(
            sequencer.current(),
            &feed,
            config.timing.reveal_interval,
            &event_tx,
        );

        Self {
            transition: SectionTransition::new(config.timing.transition),
            config,
            should_quit: false,
            sequencer,
            view,
            feed,
            audio: AudioToggle::new(player),
            store,
            fetch_started: false,
            event_tx,
            event_rx,
            year: chrono::Local::now().year(),
        }
    }

    /// Build the app with the store and player the config describes
    pub fn from_config(config: Config) -> anyhow::Result<Self> {
        let store = content_store(&config.content)?;
        let player = audio_player(&config.audio);
        Ok(Self::new(config, store, player))
    }

    pub fn section(&self) -> Section {
        self.sequencer.current()
    }

    pub fn answers(&self) -> Answers {
        self.sequencer.answers()
    }

    pub fn feed(&self) -> &MessageFeed {
        &self.feed
    }

    pub fn view(&self) -> &SectionView {
        &self.view
    }

    pub fn is_muted(&self) -> bool {
        self.audio.is_muted()
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Kick off the session's single fetch. Later calls do nothing.
    pub fn start(&mut self) {
        if self.fetch_started {
            return;
        }
        self.fetch_started = true;
        spawn_fetch(
            Arc::clone(&self.store),
            self.config.content.collection.clone(),
            self.event_tx.clone(),
        );
    }

    /// Wait for the next event posted by a background task
    pub async fn next_event(&mut self) -> Option<AppEvent> {
        self.event_rx.recv().await
    }

    /// Run the application main loop
    pub async fn run(&mut self) -> anyhow::Result<()> {
        install_panic_hook();

        // Setup terminal
        enable_raw_mode()?;
        let mut stdout = io::stdout();
        execute!(stdout, EnterAlternateScreen, Hide)?;
        let mut guard = TerminalGuard::new();
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.clear()?;

        self.start();
        let result = self.event_loop(&mut terminal).await;

        guard.cleanup()?;
        result
    }

    async fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        let mut input = EventStream::new();
        let mut frames = tokio::time::interval(FRAME);
        frames.set_missed_tick_behavior(MissedTickBehavior::Skip);

        loop {
            terminal.draw(|f| self.draw(f))?;

            tokio::select! {
                _ = frames.tick() => {
                    self.handle_app_event(AppEvent::Tick);
                }
                maybe_event = input.next() => {
                    match maybe_event {
                        Some(Ok(event)) => self.handle_app_event(AppEvent::Input(event)),
                        Some(Err(e)) => return Err(e.into()),
                        None => self.should_quit = true,
                    }
                }
                Some(event) = self.event_rx.recv() => {
                    self.handle_app_event(event);
                }
            }

            if self.should_quit {
                break;
            }
        }

        Ok(())
    }

    pub fn handle_app_event(&mut self, event: AppEvent) {
        match event {
            AppEvent::Input(Event::Key(key)) => {
                if let Some(action) = Action::from_key(key) {
                    self.handle_action(action);
                }
            }
            AppEvent::Input(_) => {}
            AppEvent::MessagesLoaded(feed) => {
                self.feed = feed;
                if let Some(view) = self.view.affection_mut() {
                    view.set_feed(self.feed.clone(), &self.event_tx);
                }
            }
            AppEvent::RevealTick => {
                if let Some(view) = self.view.affection_mut() {
                    view.reveal_next();
                }
            }
            AppEvent::AdvanceDue(to) => {
                if let Some(advance) = self.sequencer.fire(to) {
                    self.apply(advance);
                }
            }
            AppEvent::Tick => {
                self.transition.tick();
                self.view.tick();
            }
        }
    }

    pub fn handle_action(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,
            Action::ToggleAudio => self.audio.toggle(),
            Action::SelectNext => {
                if let Some(question) = self.view.question_mut() {
                    question.select_next();
                }
            }
            Action::SelectPrev => {
                if let Some(question) = self.view.question_mut() {
                    question.select_prev();
                }
            }
            Action::Choose(index) => {
                let trigger = self
                    .view
                    .question_mut()
                    .and_then(|question| question.choose(index as usize));
                if let Some(trigger) = trigger {
                    self.request(trigger);
                }
            }
            Action::Confirm => self.confirm(),
        }
    }

    fn confirm(&mut self) {
        match self.view.section() {
            Section::Opening => self.request(Trigger::Begin),
            Section::Playful | Section::Proposal => {
                let trigger = self.view.question_mut().and_then(|q| q.confirm());
                if let Some(trigger) = trigger {
                    self.request(trigger);
                }
            }
            Section::Affection => {
                if self.view.affection().is_some_and(|v| v.can_continue()) {
                    self.request(Trigger::MessagesComplete);
                }
            }
            Section::Celebration => {}
        }
    }

    fn request(&mut self, trigger: Trigger) {
        match self.sequencer.request(trigger) {
            Step::Now(advance) => self.apply(advance),
            Step::After { to, delay } => self.schedule(to, delay),
            Step::Ignored => {}
        }
    }

    fn schedule(&self, to: Section, delay: Duration) {
        send_advance_after(self.event_tx.clone(), to, delay);
    }

    /// Swap in the view for the new section. The old view is dropped here,
    /// which cancels anything it owned.
    fn apply(&mut self, advance: Advance) {
        self.view = SectionView::mount(
            advance.to,
            &self.feed,
            self.config.timing.reveal_interval,
            &self.event_tx,
        );
        self.transition.restart();
        if advance.unmute_audio {
            self.audio.auto_unmute();
        }
    }

    pub fn draw(&self, f: &mut Frame) {
        let area = f.area();
        let buf = f.buffer_mut();
        buf.set_style(area, Style::default().bg(BG_BASE));

        let [header_area, body_area, footer_area] = Layout::vertical([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .areas(area);

        Header::new(self.audio.is_muted(), self.audio.is_playing()).render(header_area, buf);
        self.view
            .render(body_area, buf, self.transition.opacity());
        GlobalFooter::for_section(self.year, self.view.section()).render(footer_area, buf);
    }
}
