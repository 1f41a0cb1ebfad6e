// Host pointer coordinates -> canvas pixel coordinates.

use crate::types::GesturePhase;

/// Linear remap of `value` from [in_min, in_max] to [out_min, out_max].
/// A zero-width input range has no slope; it returns `out_min`.
pub fn map_range(value: f32, in_min: f32, in_max: f32, out_min: f32, out_max: f32) -> f32 {
    let span = in_max - in_min;
    if span.abs() < f32::EPSILON {
        return out_min;
    }
    out_min + (value - in_min) * (out_max - out_min) / span
}

/// How the canvas sits inside the host view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum Fit {
    /// Canvas stretched over the whole view, each axis independently.
    #[default]
    Stretch,
    /// Canvas scaled to the view width; the visible rows are the bottom
    /// `width * view_h / view_w` rows of the canvas.
    FitWidth,
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct InputMapper {
    pub view: (f32, f32),
    pub canvas: (f32, f32),
    pub fit: Fit,
}

impl InputMapper {
    pub fn new(view: (usize, usize), canvas: (usize, usize), fit: Fit) -> Self {
        Self {
            view: (view.0 as f32, view.1 as f32),
            canvas: (canvas.0 as f32, canvas.1 as f32),
            fit,
        }
    }

    /// View-space pixel -> canvas pixel (truncated toward zero).
    pub fn to_canvas(&self, vx: f32, vy: f32) -> (i32, i32) {
        let (vw, vh) = self.view;
        let (cw, ch) = self.canvas;
        let x = map_range(vx, 0.0, vw, 0.0, cw);
        let y = match self.fit {
            Fit::Stretch => map_range(vy, 0.0, vh, 0.0, ch),
            Fit::FitWidth => {
                let ratio = if vw > 0.0 { vh / vw } else { 0.0 };
                map_range(vy, 0.0, vh, ch - cw * ratio, ch)
            }
        };
        (x as i32, y as i32)
    }
}

/// One drag sample from the host, in view space.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct PointerEvent {
    pub phase: GesturePhase,
    pub x: f32,
    pub y: f32,
    /// Movement since the previous sample.
    pub dx: f32,
    pub dy: f32,
}

/// What sketches see of the pointer.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerState {
    pub touched: bool,
    pub x: i32,
    pub y: i32,
    /// Last movement in view pixels, rounded.
    pub dx: i32,
    pub dy: i32,
}

impl PointerState {
    pub fn apply(&mut self, ev: &PointerEvent, mapper: &InputMapper) {
        self.dx = ev.dx.round() as i32;
        self.dy = ev.dy.round() as i32;
        let (x, y) = mapper.to_canvas(ev.x, ev.y);
        self.x = x;
        self.y = y;
        match ev.phase {
            GesturePhase::Began => self.touched = true,
            GesturePhase::Changed => {}
            GesturePhase::Ended => self.touched = false,
        }
    }
}
