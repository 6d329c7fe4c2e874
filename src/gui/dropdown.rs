//! Dropdown Component
//!
//! A closed box shows the current choice. Clicking it opens the option list
//! directly underneath; clicking an option selects it and closes the list,
//! and clicking anywhere else while open just closes it.

use super::{PointerPos, palette};
use crate::text::{GLYPH_HEIGHT, TextSize, draw_simple_text};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

#[derive(Debug, Clone)]
pub struct Dropdown {
    pub rect: Rect,
    pub label: String,
    options: Vec<String>,
    selected: usize,
    is_open: bool,
    hovered_option: Option<usize>,
    is_hovered: bool,
}

impl Dropdown {
    pub fn new(x: i32, y: i32, width: u32, height: u32, label: &str, options: Vec<String>, selected: usize) -> Self {
        let selected = selected.min(options.len().saturating_sub(1));
        Dropdown {
            rect: Rect::new(x, y, width, height),
            label: label.to_string(),
            options,
            selected,
            is_open: false,
            hovered_option: None,
            is_hovered: false,
        }
    }

    pub fn selected(&self) -> usize {
        self.selected
    }

    pub fn selected_text(&self) -> &str {
        self.options.get(self.selected).map(String::as_str).unwrap_or("")
    }

    pub fn is_open(&self) -> bool {
        self.is_open
    }

    /// Collapse the list without changing the selection
    pub fn close(&mut self) {
        self.is_open = false;
        self.hovered_option = None;
    }

    /// Bounds of option `index` in the open list
    pub fn option_rect(&self, index: usize) -> Rect {
        Rect::new(
            self.rect.x(),
            self.rect.bottom() + (index as u32 * self.rect.height()) as i32,
            self.rect.width(),
            self.rect.height(),
        )
    }

    fn option_at(&self, pointer: PointerPos) -> Option<usize> {
        (0..self.options.len()).find(|&i| self.option_rect(i).contains_point(pointer))
    }

    pub fn check_hover(&mut self, pointer: PointerPos) -> bool {
        self.is_hovered = self.rect.contains_point(pointer);
        self.hovered_option = if self.is_open {
            self.option_at(pointer)
        } else {
            None
        };
        self.is_hovered || self.hovered_option.is_some()
    }

    /// Process a click. Returns true only when the selection changed.
    pub fn handle_click(&mut self, pointer: PointerPos) -> bool {
        if self.rect.contains_point(pointer) {
            self.is_open = !self.is_open;
            return false;
        }

        if !self.is_open {
            return false;
        }

        self.is_open = false;
        self.hovered_option = None;
        match self.option_at(pointer) {
            Some(index) if index != self.selected => {
                self.selected = index;
                true
            }
            _ => false,
        }
    }

    /// Whether a click at `pointer` is consumed by this dropdown
    pub fn captures(&self, pointer: PointerPos) -> bool {
        self.rect.contains_point(pointer) || (self.is_open && self.option_at(pointer).is_some())
    }

    fn draw_row(
        &self,
        canvas: &mut Canvas<Window>,
        rect: Rect,
        text: &str,
        highlighted: bool,
    ) -> Result<(), String> {
        canvas.set_draw_color(if highlighted {
            palette::BLUE
        } else {
            palette::DARK_GRAY
        });
        canvas.fill_rect(rect)?;
        canvas.set_draw_color(palette::WHITE);
        canvas.draw_rect(rect)?;

        let scale = TextSize::Small.scale();
        let text_y = rect.center().y() - (GLYPH_HEIGHT * scale) as i32 / 2;
        draw_simple_text(canvas, text, rect.x() + 10, text_y, palette::WHITE, scale)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        draw_simple_text(
            canvas,
            &self.label,
            self.rect.x(),
            self.rect.y() - 30,
            palette::WHITE,
            TextSize::Small.scale(),
        )?;

        self.draw_row(canvas, self.rect, self.selected_text(), self.is_hovered)?;

        // Open/closed arrow
        let arrow = if self.is_open { "^" } else { "v" };
        draw_simple_text(
            canvas,
            arrow,
            self.rect.right() - 25,
            self.rect.center().y() - GLYPH_HEIGHT as i32,
            palette::WHITE,
            TextSize::Small.scale(),
        )?;

        if self.is_open {
            for (i, option) in self.options.iter().enumerate() {
                let highlighted = self.hovered_option == Some(i) || i == self.selected;
                self.draw_row(canvas, self.option_rect(i), option, highlighted)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sound_dropdown() -> Dropdown {
        Dropdown::new(
            440,
            400,
            300,
            40,
            "Test Sound",
            vec!["Laser".to_string(), "Explosion".to_string()],
            0,
        )
    }

    #[test]
    fn test_click_box_toggles_open() {
        let mut dropdown = sound_dropdown();
        assert!(!dropdown.handle_click((450, 410)));
        assert!(dropdown.is_open());
        assert!(!dropdown.handle_click((450, 410)));
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_selecting_new_option_commits() {
        let mut dropdown = sound_dropdown();
        dropdown.handle_click((450, 410));

        // Second option sits two rows below the box top
        assert!(dropdown.handle_click((450, 485)));
        assert_eq!(dropdown.selected(), 1);
        assert_eq!(dropdown.selected_text(), "Explosion");
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_reselecting_same_option_is_not_a_commit() {
        let mut dropdown = sound_dropdown();
        dropdown.handle_click((450, 410));
        assert!(!dropdown.handle_click((450, 445)));
        assert_eq!(dropdown.selected(), 0);
        assert!(!dropdown.is_open());
    }

    #[test]
    fn test_click_outside_closes_without_selecting() {
        let mut dropdown = sound_dropdown();
        dropdown.handle_click((450, 410));
        assert!(!dropdown.handle_click((10, 10)));
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.selected(), 0);
    }

    #[test]
    fn test_options_ignored_while_closed() {
        let mut dropdown = sound_dropdown();
        assert!(!dropdown.handle_click((450, 485)));
        assert_eq!(dropdown.selected(), 0);
        assert!(!dropdown.captures((450, 485)));
    }

    #[test]
    fn test_hover_tracks_open_options() {
        let mut dropdown = sound_dropdown();
        assert!(!dropdown.check_hover((450, 485)));
        dropdown.handle_click((450, 410));
        assert!(dropdown.check_hover((450, 485)));
        assert_eq!(dropdown.hovered_option, Some(1));
    }

    #[test]
    fn test_close_keeps_selection() {
        let mut dropdown = sound_dropdown();
        dropdown.handle_click((450, 410));
        dropdown.check_hover((450, 485));
        dropdown.close();
        assert!(!dropdown.is_open());
        assert_eq!(dropdown.hovered_option, None);
        assert_eq!(dropdown.selected(), 0);
    }

    #[test]
    fn test_initial_selection_is_clamped() {
        let dropdown = Dropdown::new(0, 0, 100, 20, "X", vec!["A".to_string()], 5);
        assert_eq!(dropdown.selected(), 0);
    }
}
