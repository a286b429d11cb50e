//! Configuration read from `~/.foryou/config.toml`, merged over defaults.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::audio::DEFAULT_TRACK_URL;
use crate::content::DEFAULT_COLLECTION;
use crate::flow::{SequencerDelays, DEFAULT_REVEAL_INTERVAL};
use crate::util::paths::{config_path, default_messages_path};

/// Example configuration file contents (bundled with the binary)
pub const EXAMPLE_CONFIG: &str = include_str!("config.toml.example");

/// Application configuration
#[derive(Debug, Clone, Default)]
pub struct Config {
    pub content: ContentConfig,
    pub audio: AudioConfig,
    pub timing: TimingConfig,
}

/// Where the messages come from
#[derive(Debug, Clone)]
pub struct ContentConfig {
    /// Base URL of the content store (takes precedence over `messages_file`)
    pub url: Option<String>,
    /// Local collection file
    pub messages_file: Option<PathBuf>,
    /// Collection to read
    pub collection: String,
    /// Timeout for the single fetch request
    pub request_timeout: Duration,
}

impl Default for ContentConfig {
    fn default() -> Self {
        Self {
            url: None,
            messages_file: None,
            collection: DEFAULT_COLLECTION.to_string(),
            request_timeout: Duration::from_secs(10),
        }
    }
}

/// Resolved content source
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ContentSource {
    Http(String),
    File(PathBuf),
}

impl ContentConfig {
    pub fn source(&self) -> ContentSource {
        match (&self.url, &self.messages_file) {
            (Some(url), _) => ContentSource::Http(url.clone()),
            (None, Some(path)) => ContentSource::File(path.clone()),
            (None, None) => ContentSource::File(default_messages_path()),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AudioConfig {
    pub enabled: bool,
    pub track_url: String,
    /// Player program followed by its arguments
    pub player: Vec<String>,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            track_url: DEFAULT_TRACK_URL.to_string(),
            player: vec![
                "mpv".into(),
                "--no-video".into(),
                "--loop=inf".into(),
                "--really-quiet".into(),
            ],
        }
    }
}

#[derive(Debug, Clone, Copy)]
pub struct TimingConfig {
    pub reveal_interval: Duration,
    pub playful_delay: Duration,
    pub proposal_delay: Duration,
    /// Length of the fade played when a section mounts
    pub transition: Duration,
}

impl Default for TimingConfig {
    fn default() -> Self {
        let delays = SequencerDelays::default();
        Self {
            reveal_interval: DEFAULT_REVEAL_INTERVAL,
            playful_delay: delays.playful,
            proposal_delay: delays.proposal,
            transition: Duration::from_millis(600),
        }
    }
}

impl TimingConfig {
    pub fn sequencer_delays(&self) -> SequencerDelays {
        SequencerDelays {
            playful: self.playful_delay,
            proposal: self.proposal_delay,
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlContentConfig {
    pub url: Option<String>,
    pub messages_file: Option<PathBuf>,
    pub collection: Option<String>,
    pub request_timeout_ms: Option<u64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlAudioConfig {
    pub enabled: Option<bool>,
    pub track_url: Option<String>,
    pub player: Option<Vec<String>>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlTimingConfig {
    pub reveal_interval_ms: Option<u64>,
    pub playful_delay_ms: Option<u64>,
    pub proposal_delay_ms: Option<u64>,
    pub transition_ms: Option<u64>,
}

/// TOML representation of the config file
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TomlConfig {
    pub content: Option<TomlContentConfig>,
    pub audio: Option<TomlAudioConfig>,
    pub timing: Option<TomlTimingConfig>,
}

impl Config {
    /// Load configuration from the default location, merging with defaults
    pub fn load() -> Self {
        let config_file = config_path();

        // Create example config on first run
        if !config_file.exists() {
            Self::create_default_config(&config_file);
        }

        Self::load_from(&config_file)
    }

    /// Load configuration from `path`. A missing or malformed file yields
    /// the defaults.
    pub fn load_from(path: &Path) -> Self {
        let contents = match fs::read_to_string(path) {
            Ok(contents) => contents,
            Err(e) => {
                tracing::debug!(path = %path.display(), error = %e, "No config file, using defaults");
                return Config::default();
            }
        };

        match Self::from_toml_str(&contents) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "Invalid config file, using defaults");
                Config::default()
            }
        }
    }

    /// Parse config file contents on top of the defaults
    pub fn from_toml_str(contents: &str) -> Result<Self, toml::de::Error> {
        let toml_config = toml::from_str::<TomlConfig>(contents)?;
        let mut config = Config::default();

        if let Some(content) = toml_config.content {
            if content.url.is_some() {
                config.content.url = content.url;
            }
            if content.messages_file.is_some() {
                config.content.messages_file = content.messages_file;
            }
            if let Some(collection) = content.collection {
                config.content.collection = collection;
            }
            if let Some(ms) = content.request_timeout_ms {
                config.content.request_timeout = Duration::from_millis(ms);
            }
        }

        if let Some(audio) = toml_config.audio {
            if let Some(enabled) = audio.enabled {
                config.audio.enabled = enabled;
            }
            if let Some(track_url) = audio.track_url {
                config.audio.track_url = track_url;
            }
            if let Some(player) = audio.player {
                config.audio.player = player;
            }
        }

        if let Some(timing) = toml_config.timing {
            if let Some(ms) = timing.reveal_interval_ms {
                config.timing.reveal_interval = Duration::from_millis(ms);
            }
            if let Some(ms) = timing.playful_delay_ms {
                config.timing.playful_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = timing.proposal_delay_ms {
                config.timing.proposal_delay = Duration::from_millis(ms);
            }
            if let Some(ms) = timing.transition_ms {
                config.timing.transition = Duration::from_millis(ms);
            }
        }

        Ok(config)
    }

    /// Create the default config file from the bundled example
    fn create_default_config(path: &Path) {
        if let Some(parent) = path.parent() {
            if !parent.exists() {
                if let Err(e) = fs::create_dir_all(parent) {
                    tracing::warn!(error = %e, "Failed to create config directory");
                    return;
                }
            }
        }

        if let Err(e) = fs::write(path, EXAMPLE_CONFIG) {
            tracing::warn!(error = %e, "Failed to write default config");
        }
    }

    pub fn with_content_url(mut self, url: impl Into<String>) -> Self {
        self.content.url = Some(url.into());
        self
    }

    pub fn with_messages_file(mut self, path: PathBuf) -> Self {
        self.content.url = None;
        self.content.messages_file = Some(path);
        self
    }

    pub fn without_audio(mut self) -> Self {
        self.audio.enabled = false;
        self
    }
}
