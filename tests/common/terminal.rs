//! TUI testing utilities using Ratatui's TestBackend
//!
//! Renders an `App` into an in-memory terminal and flattens the result to
//! text so tests can look for what a viewer would read.

use foryou::App;
use ratatui::{backend::TestBackend, buffer::Buffer, Terminal};

/// Create a test terminal with standard dimensions (80x24)
pub fn create_test_terminal() -> Terminal<TestBackend> {
    create_test_terminal_sized(80, 24)
}

/// Create a test terminal with custom dimensions
pub fn create_test_terminal_sized(width: u16, height: u16) -> Terminal<TestBackend> {
    let backend = TestBackend::new(width, height);
    Terminal::new(backend).expect("Failed to create test terminal")
}

/// Draw one frame of `app` and return the screen as text
pub fn render_app(app: &App, width: u16, height: u16) -> String {
    let mut terminal = create_test_terminal_sized(width, height);
    terminal
        .draw(|f| app.draw(f))
        .expect("Failed to draw app");
    buffer_to_string(terminal.backend().buffer())
}

/// Convert a buffer to a string, one line per row
pub fn buffer_to_string(buffer: &Buffer) -> String {
    let area = buffer.area;
    let mut output = String::new();

    for y in area.y..area.y + area.height {
        for x in area.x..area.x + area.width {
            if let Some(cell) = buffer.cell((x, y)) {
                output.push_str(cell.symbol());
            }
        }
        output.push('\n');
    }

    output
}

/// Text of the first row
pub fn first_line(screen: &str) -> &str {
    screen.lines().next().unwrap_or_default()
}

/// Text of the last row
pub fn last_line(screen: &str) -> &str {
    screen.lines().last().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;
    use ratatui::widgets::Paragraph;

    #[test]
    fn test_create_terminal() {
        let terminal = create_test_terminal();
        let size = terminal.size().unwrap();
        assert_eq!(size.width, 80);
        assert_eq!(size.height, 24);
    }

    #[test]
    fn test_buffer_to_string_keeps_rows() {
        let mut terminal = create_test_terminal_sized(10, 3);
        terminal
            .draw(|f| f.render_widget(Paragraph::new("top\nmid\nend"), f.area()))
            .unwrap();

        let screen = buffer_to_string(terminal.backend().buffer());
        assert_eq!(screen.lines().count(), 3);
        assert!(first_line(&screen).starts_with("top"));
        assert!(last_line(&screen).starts_with("end"));
    }
}
