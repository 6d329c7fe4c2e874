//! Bitmap Text Rendering
//!
//! The game's built-in font: a 5x7 bitmap drawn with SDL2 rectangles. It needs
//! no font file, so text is always available even when no assets ship with
//! the game. Lowercase letters render as uppercase.

use sdl2::pixels::Color;
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Glyph cell width in font pixels (5 pixels + 1 spacing)
const CELL_WIDTH: u32 = 6;

/// Glyph height in font pixels
pub const GLYPH_HEIGHT: u32 = 7;

/// Text sizes used across the screens, as scale factors of the 5x7 font
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextSize {
    Small,
    Medium,
    Large,
    Title,
}

impl TextSize {
    pub fn scale(&self) -> u32 {
        match self {
            TextSize::Small => 2,
            TextSize::Medium => 3,
            TextSize::Large => 4,
            TextSize::Title => 8,
        }
    }
}

/// Row bitmaps for one character (1 = pixel on). Unknown characters are a full block.
fn glyph(c: char) -> &'static [u8; 7] {
    match c.to_ascii_uppercase() {
        'A' => &[0b01110, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'B' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10001, 0b10001, 0b11110],
        'C' => &[0b01110, 0b10001, 0b10000, 0b10000, 0b10000, 0b10001, 0b01110],
        'D' => &[0b11110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b11110],
        'E' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b11111],
        'F' => &[0b11111, 0b10000, 0b10000, 0b11110, 0b10000, 0b10000, 0b10000],
        'G' => &[0b01110, 0b10001, 0b10000, 0b10111, 0b10001, 0b10001, 0b01110],
        'H' => &[0b10001, 0b10001, 0b10001, 0b11111, 0b10001, 0b10001, 0b10001],
        'I' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b11111],
        'J' => &[0b00111, 0b00010, 0b00010, 0b00010, 0b00010, 0b10010, 0b01100],
        'K' => &[0b10001, 0b10010, 0b10100, 0b11000, 0b10100, 0b10010, 0b10001],
        'L' => &[0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b10000, 0b11111],
        'M' => &[0b10001, 0b11011, 0b10101, 0b10001, 0b10001, 0b10001, 0b10001],
        'N' => &[0b10001, 0b11001, 0b10101, 0b10011, 0b10001, 0b10001, 0b10001],
        'O' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'P' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10000, 0b10000, 0b10000],
        'Q' => &[0b01110, 0b10001, 0b10001, 0b10001, 0b10101, 0b10010, 0b01101],
        'R' => &[0b11110, 0b10001, 0b10001, 0b11110, 0b10100, 0b10010, 0b10001],
        'S' => &[0b01110, 0b10001, 0b10000, 0b01110, 0b00001, 0b10001, 0b01110],
        'T' => &[0b11111, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        'U' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01110],
        'V' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10001, 0b01010, 0b00100],
        'W' => &[0b10001, 0b10001, 0b10001, 0b10001, 0b10101, 0b11011, 0b10001],
        'X' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b01010, 0b10001, 0b10001],
        'Y' => &[0b10001, 0b10001, 0b01010, 0b00100, 0b00100, 0b00100, 0b00100],
        'Z' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b10000, 0b11111],
        '0' => &[0b01110, 0b10001, 0b10011, 0b10101, 0b11001, 0b10001, 0b01110],
        '1' => &[0b00100, 0b01100, 0b00100, 0b00100, 0b00100, 0b00100, 0b01110],
        '2' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b01000, 0b10000, 0b11111],
        '3' => &[0b11111, 0b00010, 0b00100, 0b00010, 0b00001, 0b10001, 0b01110],
        '4' => &[0b00010, 0b00110, 0b01010, 0b10010, 0b11111, 0b00010, 0b00010],
        '5' => &[0b11111, 0b10000, 0b11110, 0b00001, 0b00001, 0b10001, 0b01110],
        '6' => &[0b00110, 0b01000, 0b10000, 0b11110, 0b10001, 0b10001, 0b01110],
        '7' => &[0b11111, 0b00001, 0b00010, 0b00100, 0b01000, 0b01000, 0b01000],
        '8' => &[0b01110, 0b10001, 0b10001, 0b01110, 0b10001, 0b10001, 0b01110],
        '9' => &[0b01110, 0b10001, 0b10001, 0b01111, 0b00001, 0b00010, 0b01100],
        ':' => &[0b00000, 0b00000, 0b00100, 0b00000, 0b00100, 0b00000, 0b00000],
        '/' => &[0b00001, 0b00010, 0b00010, 0b00100, 0b01000, 0b01000, 0b10000],
        '<' => &[0b00010, 0b00100, 0b01000, 0b10000, 0b01000, 0b00100, 0b00010],
        '>' => &[0b01000, 0b00100, 0b00010, 0b00001, 0b00010, 0b00100, 0b01000],
        '-' => &[0b00000, 0b00000, 0b00000, 0b11111, 0b00000, 0b00000, 0b00000],
        '+' => &[0b00000, 0b00100, 0b00100, 0b11111, 0b00100, 0b00100, 0b00000],
        '.' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b01100],
        '!' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00000, 0b00100],
        '(' => &[0b00010, 0b00100, 0b01000, 0b01000, 0b01000, 0b00100, 0b00010],
        ')' => &[0b01000, 0b00100, 0b00010, 0b00010, 0b00010, 0b00100, 0b01000],
        ' ' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000],
        '%' => &[0b11001, 0b11010, 0b00010, 0b00100, 0b01000, 0b01011, 0b10011],
        '?' => &[0b01110, 0b10001, 0b00001, 0b00110, 0b00100, 0b00000, 0b00100],
        '_' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b00000, 0b11111],
        ',' => &[0b00000, 0b00000, 0b00000, 0b00000, 0b01100, 0b00100, 0b01000],
        '\'' => &[0b00100, 0b00100, 0b01000, 0b00000, 0b00000, 0b00000, 0b00000],
        '#' => &[0b01010, 0b01010, 0b11111, 0b01010, 0b11111, 0b01010, 0b01010],
        '*' => &[0b00000, 0b10101, 0b01110, 0b11111, 0b01110, 0b10101, 0b00000],
        '=' => &[0b00000, 0b00000, 0b11111, 0b00000, 0b11111, 0b00000, 0b00000],
        '^' => &[0b00100, 0b01010, 0b10001, 0b00000, 0b00000, 0b00000, 0b00000],
        '@' => &[0b01110, 0b10001, 0b10111, 0b10101, 0b10111, 0b10000, 0b01110],
        '$' => &[0b00100, 0b01111, 0b10100, 0b01110, 0b00101, 0b11110, 0b00100],
        '&' => &[0b01100, 0b10010, 0b10100, 0b01000, 0b10101, 0b10010, 0b01101],
        '"' => &[0b01010, 0b01010, 0b01010, 0b00000, 0b00000, 0b00000, 0b00000],
        ';' => &[0b00000, 0b01100, 0b01100, 0b00000, 0b01100, 0b00100, 0b01000],
        '[' => &[0b01110, 0b01000, 0b01000, 0b01000, 0b01000, 0b01000, 0b01110],
        ']' => &[0b01110, 0b00010, 0b00010, 0b00010, 0b00010, 0b00010, 0b01110],
        '{' => &[0b00010, 0b00100, 0b00100, 0b01000, 0b00100, 0b00100, 0b00010],
        '}' => &[0b01000, 0b00100, 0b00100, 0b00010, 0b00100, 0b00100, 0b01000],
        '|' => &[0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100, 0b00100],
        '\\' => &[0b10000, 0b01000, 0b01000, 0b00100, 0b00010, 0b00010, 0b00001],
        '`' => &[0b01000, 0b00100, 0b00010, 0b00000, 0b00000, 0b00000, 0b00000],
        '~' => &[0b00000, 0b00000, 0b01000, 0b10101, 0b00010, 0b00000, 0b00000],
        _ => &[0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111, 0b11111],
    }
}

/// Width in pixels of `text` drawn at `scale`
pub fn text_width(text: &str, scale: u32) -> u32 {
    let chars = text.chars().count() as u32;
    // The trailing spacing column of the last glyph is not part of the text
    (chars * CELL_WIDTH).saturating_sub(1) * scale
}

/// Renders bitmap text with its top-left corner at (`x`, `y`)
pub fn draw_simple_text(
    canvas: &mut Canvas<Window>,
    text: &str,
    x: i32,
    y: i32,
    color: Color,
    scale: u32,
) -> Result<(), String> {
    canvas.set_draw_color(color);

    let char_width = (CELL_WIDTH * scale) as i32;
    let pixel_size = scale as i32;

    for (i, c) in text.chars().enumerate() {
        let char_x = x + i as i32 * char_width;

        for (row, &pattern_row) in glyph(c).iter().enumerate() {
            for col in 0..5 {
                if (pattern_row >> (4 - col)) & 1 == 1 {
                    canvas.fill_rect(Rect::new(
                        char_x + col * pixel_size,
                        y + row as i32 * pixel_size,
                        scale,
                        scale,
                    ))?;
                }
            }
        }
    }

    Ok(())
}

/// Renders text centred on (`center_x`, `center_y`)
pub fn draw_text_centered(
    canvas: &mut Canvas<Window>,
    text: &str,
    center_x: i32,
    center_y: i32,
    color: Color,
    size: TextSize,
) -> Result<(), String> {
    let scale = size.scale();
    let x = center_x - text_width(text, scale) as i32 / 2;
    let y = center_y - (GLYPH_HEIGHT * scale) as i32 / 2;
    draw_simple_text(canvas, text, x, y, color, scale)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_width_excludes_trailing_spacing() {
        assert_eq!(text_width("A", 1), 5);
        assert_eq!(text_width("AB", 1), 11);
        assert_eq!(text_width("AB", 3), 33);
        assert_eq!(text_width("", 4), 0);
    }

    #[test]
    fn test_lowercase_matches_uppercase() {
        assert_eq!(glyph('q'), glyph('Q'));
    }

    #[test]
    fn test_unknown_glyph_is_block() {
        assert_eq!(glyph('\u{e9}'), &[0b11111; 7]);
    }

    #[test]
    fn test_every_printable_ascii_char_has_a_glyph() {
        // Names typed on the entry screens and the dropdown arrows
        for c in ' '..='~' {
            assert_ne!(glyph(c), &[0b11111; 7], "no glyph for {:?}", c);
        }
    }
}
