//! Playback backends for the background track.

use std::process::Stdio;
use std::sync::Arc;

use parking_lot::Mutex;
use thiserror::Error;
use tokio::process::{Child, Command};

#[derive(Error, Debug)]
pub enum AudioError {
    #[error("No player command configured")]
    EmptyCommand,
    #[error("Failed to start player {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Playback rejected: {0}")]
    Rejected(String),
}

/// Something that can start and stop the looping track.
pub trait AudioPlayer: Send {
    /// Start (or keep) playing
    fn play(&mut self) -> Result<(), AudioError>;
    /// Stop playing; a no-op when already stopped
    fn pause(&mut self);
    fn is_playing(&self) -> bool;
}

/// Plays the track through an external player process.
///
/// `command` is the program followed by its arguments; the track URL is
/// appended last. Pausing kills the process, playing spawns a new one.
pub struct ProcessPlayer {
    command: Vec<String>,
    track_url: String,
    child: Option<Child>,
}

impl ProcessPlayer {
    pub fn new(command: Vec<String>, track_url: impl Into<String>) -> Self {
        Self {
            command,
            track_url: track_url.into(),
            child: None,
        }
    }

    /// Drop the child handle if the process already exited on its own
    fn reap(&mut self) {
        if let Some(child) = self.child.as_mut() {
            match child.try_wait() {
                Ok(Some(status)) => {
                    tracing::debug!(%status, "Audio player exited");
                    self.child = None;
                }
                Ok(None) => {}
                Err(e) => {
                    tracing::debug!(error = %e, "Failed to poll audio player");
                    self.child = None;
                }
            }
        }
    }
}

impl AudioPlayer for ProcessPlayer {
    fn play(&mut self) -> Result<(), AudioError> {
        self.reap();
        if self.child.is_some() {
            return Ok(());
        }

        let (program, args) = self.command.split_first().ok_or(AudioError::EmptyCommand)?;
        let mut cmd = Command::new(program);
        cmd.args(args)
            .arg(&self.track_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .kill_on_drop(true);

        let child = cmd.spawn().map_err(|source| AudioError::Spawn {
            program: program.clone(),
            source,
        })?;
        tracing::debug!(program = %program, pid = ?child.id(), "Audio player started");
        self.child = Some(child);
        Ok(())
    }

    fn pause(&mut self) {
        if let Some(mut child) = self.child.take() {
            if let Err(e) = child.start_kill() {
                tracing::debug!(error = %e, "Failed to stop audio player");
            }
        }
    }

    fn is_playing(&self) -> bool {
        self.child.is_some()
    }
}

/// Player used when audio is disabled; every play attempt is rejected.
#[derive(Debug, Default)]
pub struct NullPlayer;

impl AudioPlayer for NullPlayer {
    fn play(&mut self) -> Result<(), AudioError> {
        Err(AudioError::Rejected("audio disabled".to_string()))
    }

    fn pause(&mut self) {}

    fn is_playing(&self) -> bool {
        false
    }
}

/// Calls observed by a [`RecordingPlayer`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlayerCall {
    Play,
    Pause,
}

/// Test double that records calls and can be told to reject playback.
#[derive(Debug, Clone, Default)]
pub struct RecordingPlayer {
    calls: Arc<Mutex<Vec<PlayerCall>>>,
    reject: bool,
    playing: bool,
}

impl RecordingPlayer {
    pub fn new() -> Self {
        Self::default()
    }

    /// A player whose `play` always fails, like a runtime refusing autoplay
    pub fn rejecting() -> Self {
        Self {
            reject: true,
            ..Self::default()
        }
    }

    /// Shared view of the calls, usable after the player moved into a toggle
    pub fn calls(&self) -> Arc<Mutex<Vec<PlayerCall>>> {
        Arc::clone(&self.calls)
    }
}

impl AudioPlayer for RecordingPlayer {
    fn play(&mut self) -> Result<(), AudioError> {
        self.calls.lock().push(PlayerCall::Play);
        if self.reject {
            return Err(AudioError::Rejected("no user gesture".to_string()));
        }
        self.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        self.calls.lock().push(PlayerCall::Pause);
        self.playing = false;
    }

    fn is_playing(&self) -> bool {
        self.playing
    }
}
