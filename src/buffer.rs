// The pixel store everything draws into.
// Row-major RGBA, index = x + width * y, length always width * height.

use crate::error::{Error, Result};
use crate::types::{AddressMode, Color};
use rand::Rng;

#[derive(Clone, Debug, PartialEq)]
pub struct PixelBuffer {
    width: usize,
    height: usize,
    pixels: Vec<Color>,
    mode: AddressMode,
}

/// Most pixels one allocation can hold. A Vec is capped at isize::MAX bytes;
/// the RGBA byte export needs 4 bytes per pixel, the same as a `Color`.
const MAX_PIXELS: usize = isize::MAX as usize / size_of::<Color>();

/// Validate dimensions before anything is allocated.
fn checked_len(width: usize, height: usize) -> Result<usize> {
    if width == 0 || height == 0 {
        return Err(Error::InvalidDimensions { width, height });
    }
    width
        .checked_mul(height)
        .filter(|&n| n <= MAX_PIXELS)
        .ok_or(Error::InvalidDimensions { width, height })
}

impl PixelBuffer {
    pub fn new(width: usize, height: usize, fill: Color, mode: AddressMode) -> Result<Self> {
        let len = checked_len(width, height)?;
        Ok(Self { width, height, pixels: vec![fill; len], mode })
    }

    /// Reallocate at a new size and fill every pixel.
    /// Old content is discarded. On error nothing changes.
    pub fn resize(&mut self, width: usize, height: usize, fill: Color) -> Result<()> {
        let len = checked_len(width, height)?;
        self.width = width;
        self.height = height;
        self.pixels = vec![fill; len];
        Ok(())
    }

    pub fn clear(&mut self, color: Color) {
        self.pixels.fill(color);
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn mode(&self) -> AddressMode {
        self.mode
    }

    pub fn pixels(&self) -> &[Color] {
        &self.pixels
    }

    /// Resolve (x,y) to a storage index under the addressing mode.
    /// None means the coordinate is off the canvas (clamped mode only).
    #[inline]
    pub fn index_of(&self, x: i32, y: i32) -> Option<usize> {
        let (x, y) = (x as i64, y as i64);
        let (w, h) = (self.width as i64, self.height as i64);
        let (x, y) = match self.mode {
            AddressMode::Clamped => {
                if x < 0 || y < 0 || x >= w || y >= h {
                    return None;
                }
                (x, y)
            }
            AddressMode::Toroidal => (x.rem_euclid(w), y.rem_euclid(h)),
        };
        Some((x + w * y) as usize)
    }

    pub fn get_pixel(&self, x: i32, y: i32) -> Option<Color> {
        self.index_of(x, y).map(|i| self.pixels[i])
    }

    /// Returns false when the write was dropped.
    #[inline]
    pub fn set_pixel(&mut self, x: i32, y: i32, color: Color) -> bool {
        match self.index_of(x, y) {
            Some(i) => {
                self.pixels[i] = color;
                true
            }
            None => false,
        }
    }

    /// Write by linear index, ignoring addressing. Used by the transform engine.
    #[inline]
    pub(crate) fn put_index(&mut self, idx: usize, color: Color) {
        self.pixels[idx] = color;
    }

    /// Flat R,G,B,A bytes, row-major. Length = width * height * 4.
    pub fn to_rgba_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(self.pixels.len() * 4);
        for c in &self.pixels {
            out.extend_from_slice(&[c.r, c.g, c.b, c.a]);
        }
        out
    }

    /// Random opaque noise over the whole buffer.
    pub fn fill_random<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        for px in &mut self.pixels {
            *px = Color::rgb(rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255));
        }
    }
}
