// Seams between the sketch core and whatever hosts it (a window, a test).

use crate::error::Result;
use crate::input::PointerEvent;

/// Turns RGBA bytes into something on screen.
pub trait Presenter {
    /// `rgba` is row-major, 4 bytes per pixel. An `Error::BufferMismatch`
    /// means nothing was shown and the previous frame is still up.
    fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()>;
}

/// Handle for a live periodic tick. Not `Clone`: exactly one owner cancels it.
#[derive(Debug, PartialEq, Eq)]
pub struct TickSubscription {
    pub id: u64,
    pub fps: u32,
}

/// A periodic callback facility the sketch subscribes to.
pub trait TickSource {
    fn subscribe(&mut self, fps: u32) -> TickSubscription;
    fn cancel(&mut self, sub: TickSubscription);
    /// Highest rate the host can deliver.
    fn max_rate(&self) -> u32;
}

/// Something that advances one frame per tick.
pub trait Tickable {
    fn tick(&mut self, presenter: &mut dyn Presenter) -> Result<()>;
}

/// Something that accepts pointer/drag samples.
pub trait InputReceivable {
    fn pointer(&mut self, event: PointerEvent);
}

/// Something whose current frame can be read out.
pub trait Presentable {
    /// (rgba bytes, width, height), or None before there is anything to show.
    fn frame(&self) -> Option<(Vec<u8>, usize, usize)>;
}
