//! Text Field Component
//!
//! Single-line input fed by `TypeChar`/`Backspace` actions. Only printable
//! ASCII is accepted and the length is capped; a masked field draws `*` for
//! every character.

use super::palette;
use crate::text::{TextSize, draw_text_centered};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone)]
pub struct TextField {
    pub rect: Rect,
    value: String,
    max_len: usize,
    masked: bool,
}

impl TextField {
    pub fn new(x: i32, y: i32, width: u32, height: u32, max_len: usize) -> Self {
        TextField {
            rect: Rect::new(x, y, width, height),
            value: String::new(),
            max_len,
            masked: false,
        }
    }

    /// Same field, drawn as asterisks
    pub fn masked(mut self) -> Self {
        self.masked = true;
        self
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Append a character; returns false when it was rejected
    pub fn push_char(&mut self, c: char) -> bool {
        if !(c.is_ascii_graphic() || c == ' ') || self.value.len() >= self.max_len {
            return false;
        }
        self.value.push(c);
        true
    }

    pub fn backspace(&mut self) {
        self.value.pop();
    }

    pub fn clear(&mut self) {
        self.value.clear();
    }

    /// What the field shows on screen
    pub fn display_text(&self) -> String {
        if self.masked {
            "*".repeat(self.value.len())
        } else {
            self.value.clone()
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(palette::DARK_GRAY);
        canvas.fill_rect(self.rect)?;
        canvas.set_draw_color(palette::WHITE);
        canvas.draw_rect(self.rect)?;

        let center = self.rect.center();
        // Trailing underscore acts as the cursor
        let shown = format!("{}_", self.display_text());
        draw_text_centered(
            canvas,
            &shown,
            center.x(),
            center.y(),
            palette::WHITE,
            TextSize::Medium,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_printable_ascii_up_to_limit() {
        let mut field = TextField::new(0, 0, 400, 60, 10);
        for c in "ACE PILOT!".chars() {
            assert!(field.push_char(c));
        }
        assert!(!field.push_char('X'));
        assert_eq!(field.value(), "ACE PILOT!");
    }

    #[test]
    fn test_rejects_control_and_non_ascii() {
        let mut field = TextField::new(0, 0, 400, 60, 10);
        assert!(!field.push_char('\n'));
        assert!(!field.push_char('\t'));
        assert!(!field.push_char('é'));
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_backspace_and_clear() {
        let mut field = TextField::new(0, 0, 400, 60, 10);
        field.push_char('A');
        field.push_char('B');
        field.backspace();
        assert_eq!(field.value(), "A");

        field.clear();
        field.backspace();
        assert_eq!(field.value(), "");
    }

    #[test]
    fn test_masked_display() {
        let mut field = TextField::new(0, 0, 400, 60, 20).masked();
        for c in "admin123".chars() {
            field.push_char(c);
        }
        assert_eq!(field.display_text(), "********");
        assert_eq!(field.value(), "admin123");
    }
}
