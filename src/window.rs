// The desktop host: a minifb window that shows frames, paces ticks and
// reports the mouse as drag gestures.

use crate::error::{Error, Result};
use crate::host::{Presenter, TickSource, TickSubscription};
use crate::input::PointerEvent;
use crate::types::{Color, GesturePhase};
use minifb::{Key, KeyRepeat, MouseButton, MouseMode, Scale, Window, WindowOptions};
use tracing::debug;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum WindowScale {
    #[default]
    X1,
    X2,
    X4,
    X8,
}

impl From<WindowScale> for Scale {
    fn from(s: WindowScale) -> Self {
        match s {
            WindowScale::X1 => Scale::X1,
            WindowScale::X2 => Scale::X2,
            WindowScale::X4 => Scale::X4,
            WindowScale::X8 => Scale::X8,
        }
    }
}

/// Pack RGBA bytes into minifb's 0x00RRGGBB words.
pub fn pack_0rgb(rgba: &[u8], width: usize, height: usize, out: &mut Vec<u32>) -> Result<()> {
    let expected = width * height * 4;
    if rgba.len() != expected {
        return Err(Error::buffer_mismatch(expected, rgba.len()));
    }
    out.clear();
    out.extend(
        rgba.chunks_exact(4)
            .map(|p| Color::rgba(p[0], p[1], p[2], p[3]).to_0rgb()),
    );
    Ok(())
}

pub struct WindowHost {
    window: Window,       // the on-screen window you see
    screen: Vec<u32>,     // last packed frame, reused every tick
    next_sub: u64,
    max_fps: u32,
    mouse_was_down: bool,
    last_mouse: Option<(f32, f32)>,
}

impl WindowHost {
    /// Open a window sized for a `width` x `height` canvas.
    pub fn new(title: &str, width: usize, height: usize, scale: WindowScale, max_fps: u32) -> Result<Self> {
        let opts = WindowOptions { scale: scale.into(), ..WindowOptions::default() };
        let window = Window::new(title, width, height, opts)
            .map_err(|e| Error::WindowInit(e.to_string()))?;
        Ok(Self {
            window,
            screen: Vec::with_capacity(width * height),
            next_sub: 0,
            max_fps: max_fps.max(1),
            mouse_was_down: false,
            last_mouse: None,
        })
    }

    /// False once the user closes the window or holds ESC.
    pub fn is_open(&self) -> bool {
        self.window.is_open() && !self.window.is_key_down(Key::Escape)
    }

    /// Window size in screen pixels (the "view" the pointer lives in).
    pub fn view_size(&self) -> (usize, usize) {
        self.window.get_size()
    }

    // S: save a screenshot
    pub fn screenshot_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::S, KeyRepeat::No)
    }

    // R: rebuild the canvas and rerun setup
    pub fn reset_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::R, KeyRepeat::No)
    }

    pub fn faster_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Up, KeyRepeat::Yes)
    }

    pub fn slower_pressed(&self) -> bool {
        self.window.is_key_pressed(Key::Down, KeyRepeat::Yes)
    }

    /// Turn the left mouse button into a Began/Changed/Ended drag.
    /// None while the button stays up.
    pub fn poll_pointer(&mut self) -> Option<PointerEvent> {
        let down = self.window.get_mouse_down(MouseButton::Left);
        let pos = self.window.get_unscaled_mouse_pos(MouseMode::Clamp);
        let phase = match (self.mouse_was_down, down) {
            (false, true) => GesturePhase::Began,
            (true, true) => GesturePhase::Changed,
            (true, false) => GesturePhase::Ended,
            (false, false) => {
                self.last_mouse = pos;
                return None;
            }
        };
        self.mouse_was_down = down;

        let (x, y) = pos.or(self.last_mouse)?;
        let (dx, dy) = match (phase, self.last_mouse) {
            (GesturePhase::Began, _) | (_, None) => (0.0, 0.0),
            (_, Some((lx, ly))) => (x - lx, y - ly),
        };
        self.last_mouse = Some((x, y));
        Some(PointerEvent { phase, x, y, dx, dy })
    }
}

impl Presenter for WindowHost {
    /// Push the pixels for this frame to the screen. minifb also sleeps
    /// here to hold the subscribed frame rate.
    fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()> {
        pack_0rgb(rgba, width, height, &mut self.screen)?;
        self.window
            .update_with_buffer(&self.screen, width, height)
            .map_err(|e| Error::WindowUpdate(e.to_string()))
    }
}

impl TickSource for WindowHost {
    fn subscribe(&mut self, fps: u32) -> TickSubscription {
        self.next_sub += 1;
        self.window.set_target_fps(fps as usize);
        debug!(id = self.next_sub, fps, "tick subscription started");
        TickSubscription { id: self.next_sub, fps }
    }

    fn cancel(&mut self, sub: TickSubscription) {
        self.window.set_target_fps(0); // 0 = no pacing
        debug!(id = sub.id, fps = sub.fps, "tick subscription cancelled");
    }

    fn max_rate(&self) -> u32 {
        self.max_fps
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn packs_rgb_and_drops_alpha() {
        let mut out = Vec::new();
        pack_0rgb(&[0x11, 0x22, 0x33, 0x44, 0xFF, 0x00, 0x80, 0x00], 2, 1, &mut out).unwrap();
        assert_eq!(out, vec![0x0011_2233, 0x00FF_0080]);
    }

    #[test]
    fn mismatched_length_leaves_previous_frame() {
        let mut out = vec![1, 2, 3];
        let err = pack_0rgb(&[0; 12], 2, 2, &mut out).unwrap_err();
        assert!(matches!(err, Error::BufferMismatch { expected: 16, actual: 12 }));
        assert_eq!(out, vec![1, 2, 3]);
    }

    #[test]
    fn scale_maps_to_minifb() {
        assert!(matches!(Scale::from(WindowScale::X4), Scale::X4));
    }
}
