use super::player::AudioPlayer;

/// The mute flag and its binding to a player.
///
/// Starts muted. Every change of the flag is applied to the player right
/// away: muted pauses, unmuted tries to play. A rejected play is logged and
/// otherwise ignored; the flag stays unmuted and nothing retries.
pub struct AudioToggle {
    muted: bool,
    auto_unmuted: bool,
    player: Box<dyn AudioPlayer>,
}

impl AudioToggle {
    pub fn new(player: Box<dyn AudioPlayer>) -> Self {
        Self {
            muted: true,
            auto_unmuted: false,
            player,
        }
    }

    pub fn is_muted(&self) -> bool {
        self.muted
    }

    pub fn is_playing(&self) -> bool {
        self.player.is_playing()
    }

    /// Flip the flag (the header's mute button)
    pub fn toggle(&mut self) {
        self.set_muted(!self.muted);
    }

    /// Clear the flag if still muted. Only the first call has any effect.
    /// Returns whether the flag changed.
    pub fn auto_unmute(&mut self) -> bool {
        if self.auto_unmuted {
            return false;
        }
        self.auto_unmuted = true;
        if !self.muted {
            return false;
        }
        self.set_muted(false);
        true
    }

    fn set_muted(&mut self, muted: bool) {
        self.muted = muted;
        if muted {
            self.player.pause();
        } else if let Err(e) = self.player.play() {
            tracing::warn!(error = %e, "Autoplay prevented");
        }
    }
}
