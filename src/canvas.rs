// The drawing surface handed to sketch hooks: a pixel buffer plus the
// current stroke and background. Primitive calls use the stroke until it changes.

use crate::buffer::PixelBuffer;
use crate::draw;
use crate::error::Result;
use crate::transform;
use crate::types::{AddressMode, Color};
use rand::Rng;

pub struct Canvas {
    buffer: PixelBuffer,
    stroke: Color,
    background: Color,
    /// Largest size the host view can show; `full_screen` uses it.
    max_size: (usize, usize),
}

impl Canvas {
    pub fn new(width: usize, height: usize, background: Color, mode: AddressMode) -> Result<Self> {
        Ok(Self {
            buffer: PixelBuffer::new(width, height, background, mode)?,
            stroke: Color::WHITE,
            background,
            max_size: (width, height),
        })
    }

    pub fn buffer(&self) -> &PixelBuffer {
        &self.buffer
    }

    pub fn width(&self) -> usize {
        self.buffer.width()
    }

    pub fn height(&self) -> usize {
        self.buffer.height()
    }

    pub fn stroke_color(&self) -> Color {
        self.stroke
    }

    pub fn background_color(&self) -> Color {
        self.background
    }

    pub fn set_max_size(&mut self, width: usize, height: usize) {
        self.max_size = (width, height);
    }

    /* ---------- setup-style calls ---------- */

    /// Resize the canvas; content is replaced by the background.
    pub fn size(&mut self, width: usize, height: usize) -> Result<()> {
        self.buffer.resize(width, height, self.background)
    }

    /// Resize to the host view's full extent.
    pub fn full_screen(&mut self) -> Result<()> {
        let (w, h) = self.max_size;
        self.size(w, h)
    }

    /// Change the background; the canvas is cleared to it immediately.
    pub fn background(&mut self, color: Color) {
        self.background = color;
        self.buffer.clear(color);
    }

    pub fn clear(&mut self) {
        self.buffer.clear(self.background);
    }

    pub fn stroke(&mut self, color: Color) {
        self.stroke = color;
    }

    /// Replace every pixel with random opaque noise.
    pub fn random_static<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.buffer.fill_random(rng);
    }

    /* ---------- primitives (current stroke) ---------- */

    pub fn pixel(&mut self, x: i32, y: i32) {
        draw::set_pixel(&mut self.buffer, x, y, self.stroke);
    }

    pub fn get(&self, x: i32, y: i32) -> Option<Color> {
        self.buffer.get_pixel(x, y)
    }

    pub fn line(&mut self, x1: i32, y1: i32, x2: i32, y2: i32) {
        draw::draw_line(&mut self.buffer, x1, y1, x2, y2, self.stroke);
    }

    pub fn circle(&mut self, cx: i32, cy: i32, r: i32) {
        draw::draw_circle(&mut self.buffer, cx, cy, r, self.stroke);
    }

    pub fn filled_rectangle(&mut self, x: i32, y: i32, w: i32, h: i32) {
        draw::fill_rectangle(&mut self.buffer, x, y, w, h, self.stroke);
    }

    pub fn crosshair(&mut self, x: i32, y: i32, size: i32) {
        draw::draw_crosshair(&mut self.buffer, x, y, size, self.stroke);
    }

    pub fn text(&mut self, x: i32, y: i32, text: &str) {
        draw::draw_text_5x7(&mut self.buffer, x, y, text, self.stroke);
    }

    /* ---------- transforms (replace the live buffer) ---------- */

    /// Scroll the whole canvas with wrap-around. Every cell is refilled
    /// from the source, so nothing is left blank.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        self.buffer = transform::translate(&self.buffer, dx, dy, self.background);
    }

    /// Rotate about the top-left corner. Lossy: pixels rotated off-canvas are gone.
    pub fn rotate(&mut self, angle: f32) {
        self.buffer = transform::rotate(&self.buffer, angle, self.background);
    }
}
