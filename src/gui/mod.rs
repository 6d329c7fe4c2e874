//! Screen-Space GUI Widgets
//!
//! Interactive controls shared by every menu screen. Widgets use screen
//! coordinates and procedural rendering (SDL2 primitives plus the bitmap font).
//!
//! # Interaction contract
//!
//! Each frame the owner passes the pointer position to `check_hover` so the
//! widget can report and draw its hover state. Click/drag handlers mutate the
//! widget's value and return `true` only when a discrete *commit* happened
//! (button pressed, slider released, checkbox toggled, dropdown selection
//! changed), so the caller reacts exactly once.
//!
//! # Available Components
//!
//! - [`Button`] - Clickable labelled rectangle
//! - [`Slider`] - Horizontal value slider with min/max
//! - [`Checkbox`] - Labelled toggle
//! - [`Dropdown`] - Single-choice list that opens below its box
//! - [`TextField`] - Single-line text input (optionally masked)

pub mod button;
pub mod checkbox;
pub mod dropdown;
pub mod slider;
pub mod text_field;

pub use button::{Button, ButtonStyle};
pub use checkbox::Checkbox;
pub use dropdown::Dropdown;
pub use slider::Slider;
pub use text_field::TextField;

use sdl2::pixels::Color;
use sdl2::rect::Point;
use sdl2::render::Canvas;
use sdl2::video::Window;

/// Colours shared by the widgets and screens
pub mod palette {
    use sdl2::pixels::Color;

    pub const WHITE: Color = Color::RGB(255, 255, 255);
    pub const BLACK: Color = Color::RGB(0, 0, 0);
    pub const RED: Color = Color::RGB(255, 0, 0);
    pub const GREEN: Color = Color::RGB(0, 255, 0);
    pub const BLUE: Color = Color::RGB(0, 100, 255);
    pub const DARK_BLUE: Color = Color::RGB(0, 50, 150);
    pub const YELLOW: Color = Color::RGB(255, 255, 0);
    pub const GRAY: Color = Color::RGB(150, 150, 150);
    pub const DARK_GRAY: Color = Color::RGB(50, 50, 50);
    pub const LIGHT_GRAY: Color = Color::RGB(200, 200, 200);
}

/// Pointer position in logical screen coordinates
pub type PointerPos = (i32, i32);

/// Fill a circle by drawing one horizontal span per row
pub fn fill_circle(
    canvas: &mut Canvas<Window>,
    center_x: i32,
    center_y: i32,
    radius: i32,
    color: Color,
) -> Result<(), String> {
    canvas.set_draw_color(color);
    for dy in -radius..=radius {
        let dx = (((radius * radius - dy * dy) as f32).sqrt()) as i32;
        canvas.draw_line(
            Point::new(center_x - dx, center_y + dy),
            Point::new(center_x + dx, center_y + dy),
        )?;
    }
    Ok(())
}
