//! Actions that can be triggered from the keyboard
//!
//! Each action represents a single, atomic operation in the UI.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use serde::{Deserialize, Serialize};

/// All mappable UI actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Action {
    /// Quit the application
    Quit,
    /// Flip the background music mute flag
    ToggleAudio,
    /// Begin, answer with the highlighted choice, or continue
    Confirm,
    /// Highlight the next answer
    SelectNext,
    /// Highlight the previous answer
    SelectPrev,
    /// Answer directly with choice N (0-based)
    Choose(u8),
}

impl Action {
    /// Map a key press to an action
    pub fn from_key(key: KeyEvent) -> Option<Self> {
        if key.kind == KeyEventKind::Release {
            return None;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            };
        }

        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
            KeyCode::Char('m') => Some(Action::ToggleAudio),
            KeyCode::Enter | KeyCode::Char(' ') => Some(Action::Confirm),
            KeyCode::Right | KeyCode::Tab | KeyCode::Char('l') | KeyCode::Down => {
                Some(Action::SelectNext)
            }
            KeyCode::Left | KeyCode::BackTab | KeyCode::Char('h') | KeyCode::Up => {
                Some(Action::SelectPrev)
            }
            KeyCode::Char(c @ '1'..='9') => Some(Action::Choose(c as u8 - b'1')),
            _ => None,
        }
    }
}
