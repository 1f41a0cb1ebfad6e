//! A small software canvas: draw pixels, lines, circles and rectangles into
//! an RGBA buffer, scroll or rotate it, and show it once per frame.

pub mod buffer;
pub mod canvas;
pub mod clock;
pub mod config;
pub mod draw;
pub mod error;
pub mod export;
pub mod host;
pub mod input;
pub mod logging;
pub mod sketch;
pub mod sketches;
pub mod transform;
pub mod types;
pub mod window;

pub use buffer::PixelBuffer;
pub use canvas::Canvas;
pub use error::{Error, Result};
pub use sketch::{Frame, Sketch, SketchConfig, SketchHooks};
pub use types::{AddressMode, Color, GesturePhase};
