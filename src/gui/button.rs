//! Button Component
//!
//! A labelled rectangle that highlights under the pointer and reports clicks.

use super::{PointerPos, palette};
use crate::text::{TextSize, draw_text_centered};
use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Configuration for button appearance
#[derive(Debug, Clone)]
pub struct ButtonStyle {
    /// Fill colour when idle
    pub color: Color,

    /// Fill colour under the pointer
    pub hover_color: Color,

    /// Label colour
    pub text_color: Color,

    /// Border colour
    pub border_color: Color,

    /// Border thickness in pixels
    pub border_thickness: u32,

    /// Label size
    pub text_size: TextSize,
}

impl Default for ButtonStyle {
    fn default() -> Self {
        ButtonStyle {
            color: palette::BLUE,
            hover_color: palette::LIGHT_GRAY,
            text_color: palette::WHITE,
            border_color: palette::WHITE,
            border_thickness: 3,
            text_size: TextSize::Medium,
        }
    }
}

/// A clickable button
///
/// # Example
///
/// ```rust
/// let mut start = Button::new(490, 300, 300, 60, "START");
///
/// // Every frame
/// start.check_hover(pointer);
/// start.render(&mut canvas)?;
///
/// // On click
/// if start.is_clicked(pointer) { /* ... */ }
/// ```
#[derive(Debug, Clone)]
pub struct Button {
    pub rect: Rect,
    pub label: String,
    style: ButtonStyle,
    is_hovered: bool,
}

impl Button {
    /// Creates a button with the default blue style
    pub fn new(x: i32, y: i32, width: u32, height: u32, label: &str) -> Self {
        Button::with_style(x, y, width, height, label, ButtonStyle::default())
    }

    pub fn with_style(
        x: i32,
        y: i32,
        width: u32,
        height: u32,
        label: &str,
        style: ButtonStyle,
    ) -> Self {
        Button {
            rect: Rect::new(x, y, width, height),
            label: label.to_string(),
            style,
            is_hovered: false,
        }
    }

    /// Update and return the hover state
    pub fn check_hover(&mut self, pointer: PointerPos) -> bool {
        self.is_hovered = self.rect.contains_point(pointer);
        self.is_hovered
    }

    pub fn is_hovered(&self) -> bool {
        self.is_hovered
    }

    /// True when a click at `pointer` lands on the button
    pub fn is_clicked(&self, pointer: PointerPos) -> bool {
        self.rect.contains_point(pointer)
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let fill = if self.is_hovered {
            self.style.hover_color
        } else {
            self.style.color
        };
        canvas.set_draw_color(fill);
        canvas.fill_rect(self.rect)?;

        canvas.set_draw_color(self.style.border_color);
        for i in 0..self.style.border_thickness {
            let inset = i as i32;
            let (w, h) = (self.rect.width(), self.rect.height());
            if w <= 2 * i || h <= 2 * i {
                break;
            }
            canvas.draw_rect(Rect::new(
                self.rect.x() + inset,
                self.rect.y() + inset,
                w - 2 * i,
                h - 2 * i,
            ))?;
        }

        let center = self.rect.center();
        draw_text_centered(
            canvas,
            &self.label,
            center.x(),
            center.y(),
            self.style.text_color,
            self.style.text_size,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hover_follows_pointer() {
        let mut button = Button::new(100, 100, 200, 50, "START");
        assert!(button.check_hover((150, 120)));
        assert!(button.is_hovered());

        assert!(!button.check_hover((99, 120)));
        assert!(!button.is_hovered());
    }

    #[test]
    fn test_click_inside_only() {
        let button = Button::new(100, 100, 200, 50, "QUIT");
        assert!(button.is_clicked((100, 100)));
        assert!(button.is_clicked((299, 149)));
        assert!(!button.is_clicked((300, 149)));
        assert!(!button.is_clicked((150, 150)));
    }

    #[test]
    fn test_custom_style() {
        let style = ButtonStyle {
            color: palette::RED,
            ..Default::default()
        };
        let button = Button::with_style(0, 0, 10, 10, "YES", style);
        assert_eq!(button.style.color, palette::RED);
        assert_eq!(button.style.border_thickness, 3);
    }
}
