// Demo sketches: each is just a setup/draw closure pair.

use crate::canvas::Canvas;
use crate::sketch::{Frame, SketchHooks};
use crate::types::Color;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::warn;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum SketchKind {
    /// Drag to paint lines.
    #[default]
    Paint,
    /// Circles orbiting the center, crosshair at the pointer, FPS readout.
    Orbit,
    /// Random static every frame; drag to punch a black square through it.
    Noise,
    /// Wrap-around scrolling; drag to push the picture around.
    Scroll,
    /// Slow lossy rotation that eats the picture, then redraws it.
    Spin,
}

pub fn hooks(kind: SketchKind, full_screen: bool) -> SketchHooks {
    let size = move |c: &mut Canvas| {
        if full_screen {
            if let Err(e) = c.full_screen() {
                warn!(error = %e, "full screen failed; keeping configured size");
            }
        }
    };
    match kind {
        SketchKind::Paint => paint(size),
        SketchKind::Orbit => orbit(size),
        SketchKind::Noise => noise(size),
        SketchKind::Scroll => scroll(size),
        SketchKind::Spin => spin(size),
    }
}

/// Hue-ish color that cycles with the frame number.
fn cycle_color(n: u64) -> Color {
    let t = (n % 256) as u8;
    Color::rgb(t, 255 - t, t.wrapping_mul(3))
}

/// Random rectangles and circles in random colors.
fn scatter(c: &mut Canvas, rng: &mut StdRng) {
    let (w, h) = (c.width() as i32, c.height() as i32);
    for _ in 0..24 {
        c.stroke(Color::rgb(rng.gen_range(0..=255), rng.gen_range(0..=255), rng.gen_range(0..=255)));
        let (x, y) = (rng.gen_range(0..w), rng.gen_range(0..h));
        if rng.gen_bool(0.5) {
            c.filled_rectangle(x, y, rng.gen_range(4..=w / 4 + 4), rng.gen_range(4..=h / 4 + 4));
        } else {
            c.circle(x, y, rng.gen_range(2..=w.min(h) / 6 + 2));
        }
    }
    c.stroke(Color::WHITE);
}

fn paint(size: impl Fn(&mut Canvas) + 'static) -> SketchHooks {
    let mut last: Option<(i32, i32)> = None;
    SketchHooks::new(
        move |c| size(c),
        move |c, f: &Frame| {
            let p = f.pointer;
            if !p.touched {
                last = None;
                return;
            }
            c.stroke(cycle_color(f.count));
            match last {
                Some((lx, ly)) => c.line(lx, ly, p.x, p.y),
                None => c.pixel(p.x, p.y),
            }
            last = Some((p.x, p.y));
        },
    )
}

fn orbit(size: impl Fn(&mut Canvas) + 'static) -> SketchHooks {
    SketchHooks::new(
        move |c| size(c),
        |c, f: &Frame| {
            c.clear();
            let (cx, cy) = (c.width() as i32 / 2, c.height() as i32 / 2);
            let reach = cx.min(cy) as f32;
            let t = f.millis as f32 / 1000.0;

            for i in 1..=3 {
                let angle = t * i as f32;
                let dist = reach * 0.25 * i as f32;
                let (ox, oy) = (cx + (angle.cos() * dist) as i32, cy + (angle.sin() * dist) as i32);
                c.stroke(cycle_color(f.count + i as u64 * 80));
                c.line(cx, cy, ox, oy);
                c.circle(ox, oy, 4 + 3 * i);
            }

            c.stroke(Color::WHITE);
            if f.pointer.touched {
                c.crosshair(f.pointer.x, f.pointer.y, 12);
            }
            let fps = f.count as f32 * 1000.0 / f.millis.max(1) as f32;
            c.text(8, 8, &format!("FPS: {fps:.1}"));
        },
    )
}

fn noise(size: impl Fn(&mut Canvas) + 'static) -> SketchHooks {
    let mut rng = StdRng::from_entropy();
    SketchHooks::new(
        move |c| size(c),
        move |c, f: &Frame| {
            c.random_static(&mut rng);
            if f.pointer.touched {
                c.stroke(Color::BLACK);
                c.filled_rectangle(f.pointer.x - 20, f.pointer.y - 20, 40, 40);
            }
        },
    )
}

fn scroll(size: impl Fn(&mut Canvas) + 'static) -> SketchHooks {
    let mut rng = StdRng::from_entropy();
    let mut last: Option<(i32, i32)> = None;
    SketchHooks::new(
        move |c| {
            size(c);
            scatter(c, &mut StdRng::from_entropy());
        },
        move |c, f: &Frame| {
            let p = f.pointer;
            if p.touched {
                if let Some((lx, ly)) = last {
                    c.translate(p.x - lx, p.y - ly);
                }
                last = Some((p.x, p.y));
            } else {
                last = None;
                c.translate(1, 0);
                if f.count % 120 == 0 {
                    scatter(c, &mut rng); // keep the picture busy
                }
            }
        },
    )
}

fn spin(size: impl Fn(&mut Canvas) + 'static) -> SketchHooks {
    let mut rng = StdRng::from_entropy();
    SketchHooks::new(
        move |c| size(c),
        move |c, f: &Frame| {
            if f.count % 300 == 1 {
                c.clear();
                scatter(c, &mut rng);
            } else if f.count % 10 == 0 {
                c.rotate(0.02);
            }
        },
    )
}
