// Core value types shared by the buffer, rasterizer and input code.

/// One RGBA pixel. Copied on every write.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub const WHITE: Color = Color::gray(255);
    pub const BLACK: Color = Color::gray(0);

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    /// Single-intensity opaque gray.
    pub const fn gray(v: u8) -> Self {
        Self { r: v, g: v, b: v, a: 255 }
    }

    /// Pack as 0x00RRGGBB (alpha ignored), the layout minifb shows.
    #[inline]
    pub fn to_0rgb(self) -> u32 {
        ((self.r as u32) << 16) | ((self.g as u32) << 8) | self.b as u32
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::WHITE
    }
}

/// What happens to a coordinate that falls outside the buffer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum AddressMode {
    /// Out-of-range reads return nothing, writes are dropped.
    #[default]
    Clamped,
    /// Edges connect to the opposite edge (the buffer is a torus).
    Toroidal,
}

/// Three-state gesture phase reported by the host for drags.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum GesturePhase {
    Began,
    Changed,
    Ended,
}
