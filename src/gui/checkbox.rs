//! Checkbox Component

use super::{PointerPos, palette};
use crate::text::{GLYPH_HEIGHT, TextSize, draw_simple_text};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Labelled toggle; the label is drawn to the right of the box
#[derive(Debug, Clone)]
pub struct Checkbox {
    pub rect: Rect,
    pub label: String,
    checked: bool,
    is_hovered: bool,
}

impl Checkbox {
    pub fn new(x: i32, y: i32, size: u32, label: &str, checked: bool) -> Self {
        Checkbox {
            rect: Rect::new(x, y, size, size),
            label: label.to_string(),
            checked,
            is_hovered: false,
        }
    }

    pub fn is_checked(&self) -> bool {
        self.checked
    }

    /// Change the state without a click (no commit)
    pub fn set_checked(&mut self, checked: bool) {
        self.checked = checked;
    }

    pub fn check_hover(&mut self, pointer: PointerPos) -> bool {
        self.is_hovered = self.rect.contains_point(pointer);
        self.is_hovered
    }

    /// Toggle on a click inside the box. Every toggle is a commit.
    pub fn handle_click(&mut self, pointer: PointerPos) -> bool {
        if self.rect.contains_point(pointer) {
            self.checked = !self.checked;
            true
        } else {
            false
        }
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        canvas.set_draw_color(if self.is_hovered {
            palette::GRAY
        } else {
            palette::DARK_GRAY
        });
        canvas.fill_rect(self.rect)?;
        canvas.set_draw_color(palette::WHITE);
        canvas.draw_rect(self.rect)?;

        if self.checked {
            let inset = (self.rect.width() / 4) as i32;
            canvas.set_draw_color(palette::GREEN);
            canvas.fill_rect(Rect::new(
                self.rect.x() + inset,
                self.rect.y() + inset,
                self.rect.width().saturating_sub(2 * inset as u32),
                self.rect.height().saturating_sub(2 * inset as u32),
            ))?;
        }

        let scale = TextSize::Small.scale();
        let text_y = self.rect.center().y() - (GLYPH_HEIGHT * scale) as i32 / 2;
        draw_simple_text(
            canvas,
            &self.label,
            self.rect.right() + 15,
            text_y,
            palette::WHITE,
            scale,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_click_toggles() {
        let mut checkbox = Checkbox::new(500, 400, 30, "Fullscreen", false);
        assert!(checkbox.handle_click((510, 410)));
        assert!(checkbox.is_checked());
        assert!(checkbox.handle_click((510, 410)));
        assert!(!checkbox.is_checked());
    }

    #[test]
    fn test_click_on_label_is_ignored() {
        let mut checkbox = Checkbox::new(500, 400, 30, "Fullscreen", true);
        assert!(!checkbox.handle_click((560, 410)));
        assert!(checkbox.is_checked());
    }
}
