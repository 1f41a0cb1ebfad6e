use drawdraw::host::{Presenter, TickSource, TickSubscription, Tickable};
use drawdraw::{AddressMode, Canvas, Color, Result, Sketch, SketchConfig, SketchHooks};

fn gray_canvas(w: usize, h: usize) -> Canvas {
    Canvas::new(w, h, Color::gray(127), AddressMode::Clamped).unwrap()
}

#[test]
fn diagonal_line_on_gray_4x4() {
    let mut c = gray_canvas(4, 4);
    c.stroke(Color::WHITE);
    c.pixel(1, 1);
    c.line(0, 0, 3, 3);

    for y in 0..4 {
        for x in 0..4 {
            let want = if x == y { Color::WHITE } else { Color::gray(127) };
            assert_eq!(c.get(x, y), Some(want), "({x},{y})");
        }
    }
}

#[test]
fn set_then_get_returns_stroke_at_call_time() {
    let mut c = gray_canvas(5, 5);
    c.stroke(Color::rgb(9, 8, 7));
    c.pixel(2, 3);
    c.stroke(Color::BLACK);
    assert_eq!(c.get(2, 3), Some(Color::rgb(9, 8, 7)));
}

#[test]
fn fill_counts_each_pixel_once() {
    let mut c = gray_canvas(12, 12);
    c.stroke(Color::BLACK);
    c.filled_rectangle(3, 4, 5, 6);
    let n = c.buffer().pixels().iter().filter(|&&p| p == Color::BLACK).count();
    assert_eq!(n, 30);
}

#[test]
fn toroidal_canvas_wraps_strokes() {
    let mut c = Canvas::new(6, 6, Color::gray(127), AddressMode::Toroidal).unwrap();
    c.line(4, 2, 7, 2);
    assert_eq!(c.get(0, 2), Some(Color::WHITE));
    assert_eq!(c.get(1, 2), Some(Color::WHITE));
}

#[test]
fn translate_there_and_back() {
    let mut c = gray_canvas(9, 7);
    c.circle(4, 3, 2);
    c.line(0, 6, 8, 0);
    let before = c.buffer().clone();
    c.translate(5, -3);
    assert_ne!(c.buffer(), &before);
    c.translate(-5, 3);
    assert_eq!(c.buffer(), &before);
}

#[test]
fn rotate_zero_keeps_everything() {
    let mut c = gray_canvas(9, 7);
    c.circle(4, 3, 3);
    let before = c.buffer().clone();
    c.rotate(0.0);
    assert_eq!(c.buffer(), &before);
}

struct Sink(usize);

impl Presenter for Sink {
    fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()> {
        assert_eq!(rgba.len(), width * height * 4);
        self.0 += 1;
        Ok(())
    }
}

struct Manual;

impl TickSource for Manual {
    fn subscribe(&mut self, fps: u32) -> TickSubscription {
        TickSubscription { id: 1, fps }
    }
    fn cancel(&mut self, _sub: TickSubscription) {}
    fn max_rate(&self) -> u32 {
        60
    }
}

#[test]
fn sketch_draws_into_presented_frames() {
    let cfg = SketchConfig { width: 16, height: 16, ..SketchConfig::default() };
    let hooks = SketchHooks::new(
        |c| c.stroke(Color::rgb(255, 0, 0)),
        |c, f| c.pixel(f.count as i32 % 16, 0),
    );
    let mut sketch = Sketch::new(cfg, hooks);
    let mut sink = Sink(0);
    sketch.configure((16, 16)).unwrap();
    sketch.start(&mut Manual).unwrap();
    for _ in 0..5 {
        sketch.tick(&mut sink).unwrap();
    }
    assert_eq!(sink.0, 5);
    let c = sketch.canvas().unwrap();
    assert_eq!(c.get(5, 0), Some(Color::rgb(255, 0, 0)));
    assert_eq!(c.get(6, 0), Some(Color::gray(127)));
}
