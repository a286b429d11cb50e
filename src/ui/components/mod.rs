mod button;
mod floating_hearts;
mod global_footer;
mod header;
mod key_hints;
mod spinner;
pub mod theme;
mod transition;

use ratatui::layout::Rect;

pub use button::ButtonRow;
pub use floating_hearts::FloatingHearts;
pub use global_footer::GlobalFooter;
pub use header::{Header, HEADER_TITLE};
pub use key_hints::{key_hints_line, render_key_hints, KeyHint};
pub use spinner::Spinner;
pub use transition::{SectionTransition, FRAME};

/// Rect of at most `width` x `height` centered inside `area`
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect {
        x: area.x + (area.width - width) / 2,
        y: area.y + (area.height - height) / 2,
        width,
        height,
    }
}
