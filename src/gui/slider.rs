//! Slider Component
//!
//! Horizontal track with a round handle. The value maps linearly from the
//! handle's offset along the track to the `[min, max]` range and is clamped
//! to the track bounds.

use super::{PointerPos, fill_circle, palette};
use crate::text::{TextSize, draw_simple_text};
use sdl2::rect::Rect;
use sdl2::render::Canvas;
use sdl2::video::Window;

const HANDLE_RADIUS: i32 = 12;

#[derive(Debug, Clone)]
pub struct Slider {
    pub track: Rect,
    pub label: String,
    min: f32,
    max: f32,
    value: f32,
    dragging: bool,
}

impl Slider {
    pub fn new(x: i32, y: i32, width: u32, height: u32, min: f32, max: f32, initial: f32, label: &str) -> Self {
        Slider {
            track: Rect::new(x, y, width, height),
            label: label.to_string(),
            min,
            max,
            value: initial.clamp(min, max),
            dragging: false,
        }
    }

    pub fn value(&self) -> f32 {
        self.value
    }

    /// Value as a 0.0-1.0 fraction of the range
    pub fn fraction(&self) -> f32 {
        if self.max > self.min {
            (self.value - self.min) / (self.max - self.min)
        } else {
            0.0
        }
    }

    pub fn set_value(&mut self, value: f32) {
        self.value = value.clamp(self.min, self.max);
    }

    pub fn is_dragging(&self) -> bool {
        self.dragging
    }

    /// Screen x of the handle centre
    pub fn handle_x(&self) -> i32 {
        self.track.x() + (self.fraction() * self.track.width() as f32).round() as i32
    }

    fn handle_rect(&self) -> Rect {
        Rect::new(
            self.handle_x() - HANDLE_RADIUS,
            self.track.center().y() - HANDLE_RADIUS,
            (HANDLE_RADIUS * 2) as u32,
            (HANDLE_RADIUS * 2) as u32,
        )
    }

    fn value_at(&self, x: i32) -> f32 {
        let offset = (x - self.track.x()).clamp(0, self.track.width() as i32) as f32;
        self.min + offset / self.track.width() as f32 * (self.max - self.min)
    }

    /// Start dragging when the press lands on the handle or the track.
    /// The value jumps to the pressed spot.
    pub fn handle_pointer_down(&mut self, pointer: PointerPos) -> bool {
        if self.handle_rect().contains_point(pointer) || self.track.contains_point(pointer) {
            self.dragging = true;
            self.set_value(self.value_at(pointer.0));
        }
        self.dragging
    }

    /// Follow the pointer while dragging; returns true if the value changed
    pub fn handle_pointer_move(&mut self, pointer: PointerPos) -> bool {
        if !self.dragging {
            return false;
        }
        let before = self.value;
        self.set_value(self.value_at(pointer.0));
        self.value != before
    }

    /// Stop dragging. Returns true (the commit) only if a drag was in progress.
    pub fn handle_pointer_up(&mut self) -> bool {
        let released = self.dragging;
        self.dragging = false;
        released
    }

    pub fn render(&self, canvas: &mut Canvas<Window>) -> Result<(), String> {
        let caption = format!("{}: {}%", self.label, self.value.round() as i32);
        draw_simple_text(
            canvas,
            &caption,
            self.track.x(),
            self.track.y() - 30,
            palette::WHITE,
            TextSize::Small.scale(),
        )?;

        canvas.set_draw_color(palette::GRAY);
        canvas.fill_rect(self.track)?;

        let center_y = self.track.center().y();
        fill_circle(canvas, self.handle_x(), center_y, HANDLE_RADIUS, palette::WHITE)?;
        let inner = if self.is_dragging() { palette::DARK_BLUE } else { palette::BLUE };
        fill_circle(canvas, self.handle_x(), center_y, HANDLE_RADIUS - 3, inner)
    }
}
