// Whole-buffer remapping: translation (toroidal) and rotation (lossy).
// Both build a fresh buffer in one pass over the source; the caller swaps it in.

use crate::buffer::PixelBuffer;
use crate::types::Color;

/// 2x2 matrix, row-major. Points are row vectors: p' = p * M.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Mat2 {
    pub rows: [[f32; 2]; 2],
}

impl Mat2 {
    /// [[cos, sin], [-sin, cos]]
    pub fn rotation(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { rows: [[c, s], [-s, c]] }
    }

    #[inline]
    pub fn apply(&self, x: f32, y: f32) -> (f32, f32) {
        let m = &self.rows;
        (x * m[0][0] + y * m[1][0], x * m[0][1] + y * m[1][1])
    }
}

/// 3x3 homogeneous matrix over integers, row-major. Points are column
/// vectors (x, y, 1). Integer entries keep pixel coordinates exact at any size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mat3 {
    pub rows: [[i64; 3]; 3],
}

impl Mat3 {
    pub const IDENTITY: Mat3 = Mat3 { rows: [[1, 0, 0], [0, 1, 0], [0, 0, 1]] };

    pub fn translation(tx: i64, ty: i64) -> Self {
        let mut m = Self::IDENTITY;
        m.rows[0][2] = tx;
        m.rows[1][2] = ty;
        m
    }

    #[inline]
    pub fn apply(&self, x: i64, y: i64) -> (i64, i64) {
        let m = &self.rows;
        (
            m[0][0] * x + m[0][1] * y + m[0][2],
            m[1][0] * x + m[1][1] * y + m[1][2],
        )
    }
}

/// Shift every pixel by (dx,dy), wrapping off-edge pixels to the opposite edge.
/// Shifts of any size and sign wrap correctly (euclidean remainder).
pub fn translate(src: &PixelBuffer, dx: i32, dy: i32, fill: Color) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut out = blank_like(src, fill);
    let (wi, hi) = (w as i64, h as i64);
    // Reduced shifts are in [0, W) x [0, H), so x + tx never overflows.
    let m = Mat3::translation((dx as i64).rem_euclid(wi), (dy as i64).rem_euclid(hi));

    for (i, &color) in src.pixels().iter().enumerate() {
        let (x, y) = ((i % w) as i64, (i / w) as i64);
        let (tx, ty) = m.apply(x, y);
        let (tx, ty) = ((tx % wi) as usize, (ty % hi) as usize);
        out.put_index(tx + w * ty, color);
    }
    out
}

/// Rotate every pixel about the origin (top-left) by `angle` radians.
/// Pixels that land outside the buffer vanish; no interpolation, so gaps appear.
pub fn rotate(src: &PixelBuffer, angle: f32, fill: Color) -> PixelBuffer {
    let (w, h) = (src.width(), src.height());
    let mut out = blank_like(src, fill);
    let m = Mat2::rotation(angle);

    for (i, &color) in src.pixels().iter().enumerate() {
        let (x, y) = ((i % w) as f32, (i / w) as f32);
        let (rx, ry) = m.apply(x, y);
        if rx >= 0.0 && ry >= 0.0 && rx < w as f32 && ry < h as f32 {
            out.put_index(rx as usize + w * ry as usize, color);
        }
    }
    out
}

fn blank_like(src: &PixelBuffer, fill: Color) -> PixelBuffer {
    let mut out = src.clone();
    out.clear(fill);
    out
}
