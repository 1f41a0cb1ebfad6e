// Software drawing primitives.
// Stateless: every function takes the buffer and the color to write.
// Out-of-range pixels follow the buffer's AddressMode (dropped or wrapped).

use crate::buffer::PixelBuffer;
use crate::types::Color;

/// Put one pixel.
#[inline]
pub fn set_pixel(fb: &mut PixelBuffer, x: i32, y: i32, color: Color) {
    fb.set_pixel(x, y, color);
}

/// Draw a thin line between (x1,y1) and (x2,y2) using Bresenham.
/// The pixel set does not depend on which endpoint comes first.
pub fn draw_line(fb: &mut PixelBuffer, x1: i32, y1: i32, x2: i32, y2: i32, color: Color) {
    // Walk from the smaller endpoint so (a,b) and (b,a) tie-break identically.
    let ((mut x, mut y), (x2, y2)) = if (x1, y1) <= (x2, y2) {
        ((x1, y1), (x2, y2))
    } else {
        ((x2, y2), (x1, y1))
    };
    let dx = (x2 - x).abs();
    let sx = if x < x2 { 1 } else { -1 };
    let dy = -(y2 - y).abs();
    let sy = if y < y2 { 1 } else { -1 };
    let mut err = dx + dy;
    loop {
        fb.set_pixel(x, y, color);
        if x == x2 && y == y2 { break; }
        let e2 = 2 * err;
        if e2 >= dy { err += dy; x += sx; }
        if e2 <= dx { err += dx; y += sy; }
    }
}

/// Midpoint circle of radius `r` around (cx,cy), one quadrant per step
/// mirrored into the other three. r = 0 plots only the center; r < 0 plots nothing.
pub fn draw_circle(fb: &mut PixelBuffer, cx: i32, cy: i32, r: i32, color: Color) {
    if r < 0 { return; }
    let (mut x, mut y) = (-r, 0);
    let mut err = 2 - 2 * r;
    loop {
        fb.set_pixel(cx - x, cy + y, color); // quadrant I
        fb.set_pixel(cx - y, cy - x, color); // quadrant II
        fb.set_pixel(cx + x, cy - y, color); // quadrant III
        fb.set_pixel(cx + y, cy + x, color); // quadrant IV
        // both steps test the error from before this step
        let prev = err;
        if prev > x {
            x += 1;
            err += x * 2 + 1;
        }
        if prev <= y {
            y += 1;
            err += y * 2 + 1;
        }
        if x >= 0 { break; }
    }
}

/// Fill the half-open rectangle [x, x+w) x [y, y+h), each pixel once.
pub fn fill_rectangle(fb: &mut PixelBuffer, x: i32, y: i32, w: i32, h: i32, color: Color) {
    for yp in 0..h.max(0) {
        for xp in 0..w.max(0) {
            fb.set_pixel(x + xp, y + yp, color);
        }
    }
}

/// Draw a small "+" centered at (cx,cy), with a gap around the center dot.
pub fn draw_crosshair(fb: &mut PixelBuffer, cx: i32, cy: i32, size: i32, color: Color) {
    draw_line(fb, cx - size, cy, cx - 2, cy, color); // left arm
    draw_line(fb, cx + 2, cy, cx + size, cy, color); // right arm
    draw_line(fb, cx, cy - size, cx, cy - 2, color); // top arm
    draw_line(fb, cx, cy + 2, cx, cy + size, color); // bottom arm
    fb.set_pixel(cx, cy, color);
}

/* ---------- 5x7 bitmap font (ASCII subset for HUD lines like "FPS: 59.9") ---------- */

/// Return a 5x7 glyph bitmap for a limited character set.
/// Each u8 is a row; the low 5 bits are the pixels (bit 4 = leftmost).
fn glyph5x7(ch: char) -> Option<[u8; 7]> {
    macro_rules! g { ($a:expr,$b:expr,$c:expr,$d:expr,$e:expr,$f:expr,$g:expr) => {
        Some([$a,$b,$c,$d,$e,$f,$g])
    }; }

    match ch.to_ascii_uppercase() {
        '0' => g!(0b01110,0b10001,0b10011,0b10101,0b11001,0b10001,0b01110),
        '1' => g!(0b00100,0b01100,0b00100,0b00100,0b00100,0b00100,0b01110),
        '2' => g!(0b01110,0b10001,0b00001,0b00010,0b00100,0b01000,0b11111),
        '3' => g!(0b11110,0b00001,0b00001,0b01110,0b00001,0b00001,0b11110),
        '4' => g!(0b00010,0b00110,0b01010,0b10010,0b11111,0b00010,0b00010),
        '5' => g!(0b11111,0b10000,0b11110,0b00001,0b00001,0b10001,0b01110),
        '6' => g!(0b00110,0b01000,0b10000,0b11110,0b10001,0b10001,0b01110),
        '7' => g!(0b11111,0b00001,0b00010,0b00100,0b01000,0b01000,0b01000),
        '8' => g!(0b01110,0b10001,0b10001,0b01110,0b10001,0b10001,0b01110),
        '9' => g!(0b01110,0b10001,0b10001,0b01111,0b00001,0b00010,0b01100),

        // Letters used by the sketch HUDs
        'D' => g!(0b11100,0b10010,0b10001,0b10001,0b10001,0b10010,0b11100),
        'E' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b11111),
        'F' => g!(0b11111,0b10000,0b10000,0b11110,0b10000,0b10000,0b10000),
        'I' => g!(0b01110,0b00100,0b00100,0b00100,0b00100,0b00100,0b01110),
        'L' => g!(0b10000,0b10000,0b10000,0b10000,0b10000,0b10000,0b11111),
        'M' => g!(0b10001,0b11011,0b10101,0b10101,0b10001,0b10001,0b10001),
        'P' => g!(0b11110,0b10001,0b10001,0b11110,0b10000,0b10000,0b10000),
        'S' => g!(0b01111,0b10000,0b10000,0b01110,0b00001,0b00001,0b11110),
        'T' => g!(0b11111,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        'X' => g!(0b10001,0b10001,0b01010,0b00100,0b01010,0b10001,0b10001),
        'Y' => g!(0b10001,0b10001,0b01010,0b00100,0b00100,0b00100,0b00100),

        ' ' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00000,0b00000),
        '|' => g!(0b00100,0b00100,0b00100,0b00100,0b00100,0b00100,0b00100),
        ':' => g!(0b00000,0b00100,0b00000,0b00000,0b00100,0b00000,0b00000),
        '.' => g!(0b00000,0b00000,0b00000,0b00000,0b00000,0b00100,0b00000),
        '-' => g!(0b00000,0b00000,0b00000,0b11111,0b00000,0b00000,0b00000),

        _ => None,
    }
}

/// Draw a single 5x7 character at (x,y) with a 1-pixel black shadow.
fn draw_char_5x7(fb: &mut PixelBuffer, x: i32, y: i32, ch: char, color: Color) {
    let Some(rows) = glyph5x7(ch) else { return };
    for (offset, c) in [(1, Color::BLACK), (0, color)] {
        for (ry, rowbits) in rows.iter().enumerate() {
            for rx in 0..5 {
                if (rowbits & (1 << (4 - rx))) != 0 {
                    fb.set_pixel(x + rx + offset, y + ry as i32 + offset, c);
                }
            }
        }
    }
}

/// Draw a text string using 5x7 glyphs (5 px glyph + 1 px spacing).
/// Characters outside the font leave a blank cell.
pub fn draw_text_5x7(fb: &mut PixelBuffer, mut x: i32, y: i32, text: &str, color: Color) {
    for ch in text.chars() {
        draw_char_5x7(fb, x, y, ch, color);
        x += 6;
    }
}
