//! Hearts drifting up the celebration screen.

use rand::Rng;
use ratatui::{buffer::Buffer, layout::Rect, style::Style};

use super::theme::{fade, ACCENT_BLUSH, ACCENT_PRIMARY};

const HEART_COUNT: usize = 30;
const HEART_GLYPHS: [&str; 3] = ["♥", "♡", "❤"];

#[derive(Debug, Clone, Copy)]
struct Heart {
    /// Horizontal position, 0.0 (left) to 1.0 (right)
    x: f32,
    /// Frames before the heart first appears
    delay: u32,
    /// Frames for one trip from bottom to top
    period: u32,
    glyph: usize,
}

/// Endlessly looping hearts, each with its own column, delay and speed
pub struct FloatingHearts {
    hearts: Vec<Heart>,
    frame: u32,
}

impl FloatingHearts {
    pub fn new() -> Self {
        Self::with_rng(&mut rand::rng())
    }

    pub fn with_rng<R: Rng>(rng: &mut R) -> Self {
        let hearts = (0..HEART_COUNT)
            .map(|_| Heart {
                x: rng.random_range(0.0..1.0),
                delay: rng.random_range(0..300),
                period: rng.random_range(600..900),
                glyph: rng.random_range(0..HEART_GLYPHS.len()),
            })
            .collect();
        Self { hearts, frame: 0 }
    }

    pub fn len(&self) -> usize {
        self.hearts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.hearts.is_empty()
    }

    pub fn tick(&mut self) {
        self.frame = self.frame.wrapping_add(1);
    }

    /// Progress of `heart` through its current trip, or None before its delay
    fn progress(&self, heart: &Heart) -> Option<f32> {
        let elapsed = self.frame.checked_sub(heart.delay)?;
        Some((elapsed % heart.period) as f32 / heart.period as f32)
    }

    pub fn render(&self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        for heart in &self.hearts {
            let Some(t) = self.progress(heart) else {
                continue;
            };
            let x = area.x + ((area.width - 1) as f32 * heart.x) as u16;
            let rise = ((area.height - 1) as f32 * t) as u16;
            let y = area.y + area.height - 1 - rise;

            // Fade in near the bottom and out near the top
            let opacity = (t * 4.0).min((1.0 - t) * 4.0).clamp(0.0, 1.0) * 0.8;
            let base = if heart.glyph == 0 { ACCENT_PRIMARY } else { ACCENT_BLUSH };
            buf[(x, y)]
                .set_symbol(HEART_GLYPHS[heart.glyph])
                .set_style(Style::default().fg(fade(base, opacity)));
        }
    }
}

impl Default for FloatingHearts {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_hearts_appear_after_their_delay() {
        let mut hearts = FloatingHearts::with_rng(&mut StdRng::seed_from_u64(7));
        assert_eq!(hearts.len(), HEART_COUNT);

        let area = Rect::new(0, 0, 40, 20);
        let count_visible = |hearts: &FloatingHearts| {
            let mut buf = Buffer::empty(area);
            hearts.render(area, &mut buf);
            buf.content().iter().filter(|c| c.symbol() != " ").count()
        };

        for _ in 0..400 {
            hearts.tick();
        }
        assert!(count_visible(&hearts) > 0);
    }

    #[test]
    fn test_render_stays_inside_area() {
        let mut hearts = FloatingHearts::with_rng(&mut StdRng::seed_from_u64(1));
        let area = Rect::new(2, 3, 5, 4);
        let mut buf = Buffer::empty(Rect::new(0, 0, 10, 10));
        for _ in 0..2000 {
            hearts.tick();
            hearts.render(area, &mut buf);
        }
        for y in 0..10u16 {
            for x in 0..10u16 {
                if !area.contains((x, y).into()) {
                    assert_eq!(buf[(x, y)].symbol(), " ");
                }
            }
        }
    }
}
