//! Background music: a single looping track behind a mute flag.

pub mod player;
pub mod toggle;

pub use player::{AudioError, AudioPlayer, NullPlayer, PlayerCall, ProcessPlayer, RecordingPlayer};
pub use toggle::AudioToggle;

/// Default track, looped for the whole session
pub const DEFAULT_TRACK_URL: &str = "https://www.bensound.com/bensound-music/bensound-jazzyfrenchy.mp3";
