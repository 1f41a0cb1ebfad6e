// The frame loop controller.
// Owns the canvas and clock; the host feeds it ticks and pointer samples
// and gets RGBA frames back through a Presenter.
//
// Uninitialized --configure--> Configured --start--> Running
//                                   ^                    |
//                                   +-------stop---------+

use crate::canvas::Canvas;
use crate::clock::{DEFAULT_FPS, FrameClock};
use crate::error::{Error, Result};
use crate::host::{InputReceivable, Presentable, Presenter, TickSource, TickSubscription, Tickable};
use crate::input::{Fit, InputMapper, PointerEvent, PointerState};
use crate::types::{AddressMode, Color};
use std::time::Instant;
use tracing::{debug, info, warn};

/// Per-tick information handed to the draw hook.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Frame {
    pub count: u64,
    pub millis: u64,
    pub pointer: PointerState,
}

pub type SetupHook = Box<dyn FnMut(&mut Canvas)>;
pub type DrawHook = Box<dyn FnMut(&mut Canvas, &Frame)>;

/// User code: `setup` runs on every configure, `draw` once per tick.
pub struct SketchHooks {
    pub setup: SetupHook,
    pub draw: DrawHook,
}

impl SketchHooks {
    pub fn new(
        setup: impl FnMut(&mut Canvas) + 'static,
        draw: impl FnMut(&mut Canvas, &Frame) + 'static,
    ) -> Self {
        Self { setup: Box::new(setup), draw: Box::new(draw) }
    }
}

impl Default for SketchHooks {
    fn default() -> Self {
        Self::new(|_| {}, |_, _| {})
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SketchConfig {
    pub width: usize,
    pub height: usize,
    pub background: Color,
    pub mode: AddressMode,
    pub fit: Fit,
    pub fps: u32,
}

impl Default for SketchConfig {
    fn default() -> Self {
        Self {
            width: 500,
            height: 500,
            background: Color::gray(127),
            mode: AddressMode::Clamped,
            fit: Fit::Stretch,
            fps: DEFAULT_FPS,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum LoopState {
    Uninitialized,
    Configured,
    Running,
}

pub struct Sketch {
    config: SketchConfig,
    hooks: SketchHooks,
    state: LoopState,
    canvas: Option<Canvas>,
    clock: FrameClock,
    subscription: Option<TickSubscription>,
    view: (usize, usize),
    pointer: PointerState,
}

impl Sketch {
    pub fn new(config: SketchConfig, hooks: SketchHooks) -> Self {
        let mut clock = FrameClock::default();
        clock.set_fps(config.fps);
        Self {
            config,
            hooks,
            state: LoopState::Uninitialized,
            canvas: None,
            clock,
            subscription: None,
            view: (config.width, config.height),
            pointer: PointerState::default(),
        }
    }

    /// (Re)build the canvas for a host view of `view` pixels and run setup.
    /// The clock starts on the first call only. On error nothing changes.
    pub fn configure(&mut self, view: (usize, usize)) -> Result<()> {
        let cfg = self.config;
        let mut canvas = Canvas::new(cfg.width, cfg.height, cfg.background, cfg.mode)?;
        canvas.set_max_size(view.0.max(1), view.1.max(1));
        (self.hooks.setup)(&mut canvas);

        let (width, height) = (canvas.width(), canvas.height());
        self.canvas = Some(canvas);
        self.view = view;
        self.clock.start_once(Instant::now());
        if self.state != LoopState::Running {
            self.state = LoopState::Configured;
        }
        info!(width, height, view_w = view.0, view_h = view.1, "canvas configured");
        Ok(())
    }

    /// Subscribe to ticks at the configured rate.
    pub fn start(&mut self, ticks: &mut dyn TickSource) -> Result<()> {
        if self.state == LoopState::Uninitialized {
            return Err(Error::NotConfigured);
        }
        if self.subscription.is_none() {
            let fps = self.clock.fps().min(ticks.max_rate().max(1));
            self.clock.set_fps(fps);
            self.subscription = Some(ticks.subscribe(fps));
            info!(fps, interval_ms = self.clock.interval().as_millis() as u64, "frame loop running");
        }
        self.state = LoopState::Running;
        Ok(())
    }

    /// Drop the tick subscription; the canvas stays.
    pub fn stop(&mut self, ticks: &mut dyn TickSource) {
        if let Some(sub) = self.subscription.take() {
            ticks.cancel(sub);
        }
        if self.state == LoopState::Running {
            self.state = LoopState::Configured;
        }
    }

    /// Change the target rate. A running subscription is cancelled before
    /// the new one is made, so two never overlap.
    pub fn set_frame_rate(&mut self, fps: u32, ticks: &mut dyn TickSource) {
        let fps = fps.clamp(1, ticks.max_rate().max(1));
        self.clock.set_fps(fps);
        if let Some(old) = self.subscription.take() {
            ticks.cancel(old);
            self.subscription = Some(ticks.subscribe(fps));
        }
        debug!(fps, "frame rate changed");
    }

    /// Show the current canvas without running the draw hook.
    pub fn redraw(&self, presenter: &mut dyn Presenter) -> Result<()> {
        let canvas = self.canvas.as_ref().ok_or(Error::NotConfigured)?;
        let (w, h) = (canvas.width(), canvas.height());
        match presenter.present(&canvas.buffer().to_rgba_bytes(), w, h) {
            Err(e @ Error::BufferMismatch { .. }) => {
                warn!(error = %e, "no image produced; keeping previous frame");
                Ok(())
            }
            other => other,
        }
    }

    pub fn reset_clock(&mut self) {
        self.clock.reset();
        self.clock.start_once(Instant::now());
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    pub fn canvas(&self) -> Option<&Canvas> {
        self.canvas.as_ref()
    }

    pub fn canvas_mut(&mut self) -> Option<&mut Canvas> {
        self.canvas.as_mut()
    }

    pub fn frame_count(&self) -> u64 {
        self.clock.frame_count()
    }

    pub fn fps(&self) -> u32 {
        self.clock.fps()
    }

    /// Milliseconds since the first configure.
    pub fn elapsed_millis(&self) -> u64 {
        self.clock.elapsed_millis()
    }

    pub fn pointer_state(&self) -> PointerState {
        self.pointer
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscription.is_some()
    }

    /// Current canvas size, (0, 0) before the first configure.
    /// Read live, so resizes from the hooks show up here.
    pub fn canvas_size(&self) -> (usize, usize) {
        self.canvas.as_ref().map(|c| (c.width(), c.height())).unwrap_or((0, 0))
    }
}

impl Tickable for Sketch {
    /// One frame: count it, let the user draw, hand the pixels to the presenter.
    fn tick(&mut self, presenter: &mut dyn Presenter) -> Result<()> {
        if self.state != LoopState::Running {
            debug!(state = ?self.state, "tick ignored");
            return Ok(());
        }
        let frame = Frame {
            count: self.clock.advance(),
            millis: self.clock.elapsed_millis(),
            pointer: self.pointer,
        };
        if let Some(canvas) = self.canvas.as_mut() {
            (self.hooks.draw)(canvas, &frame);
        }
        self.redraw(presenter)
    }
}

impl InputReceivable for Sketch {
    fn pointer(&mut self, event: PointerEvent) {
        let mapper = InputMapper::new(self.view, self.canvas_size(), self.config.fit);
        self.pointer.apply(&event, &mapper);
    }
}

impl Presentable for Sketch {
    fn frame(&self) -> Option<(Vec<u8>, usize, usize)> {
        self.canvas
            .as_ref()
            .map(|c| (c.buffer().to_rgba_bytes(), c.width(), c.height()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::GesturePhase;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(Vec<u8>, usize, usize)>,
        reject: bool,
    }

    impl Presenter for Recorder {
        fn present(&mut self, rgba: &[u8], width: usize, height: usize) -> Result<()> {
            if self.reject {
                return Err(Error::buffer_mismatch(width * height * 4, rgba.len() + 1));
            }
            self.frames.push((rgba.to_vec(), width, height));
            Ok(())
        }
    }

    #[derive(Default)]
    struct Ticks {
        next: u64,
        live: Vec<TickSubscription>,
        log: Vec<String>,
    }

    impl TickSource for Ticks {
        fn subscribe(&mut self, fps: u32) -> TickSubscription {
            self.next += 1;
            self.log.push(format!("sub {fps}"));
            self.live.push(TickSubscription { id: self.next, fps });
            TickSubscription { id: self.next, fps }
        }

        fn cancel(&mut self, sub: TickSubscription) {
            self.log.push(format!("cancel {}", sub.fps));
            self.live.retain(|s| s.id != sub.id);
        }

        fn max_rate(&self) -> u32 {
            120
        }
    }

    fn small() -> SketchConfig {
        SketchConfig { width: 4, height: 4, ..SketchConfig::default() }
    }

    #[test]
    fn lifecycle_transitions() {
        let mut s = Sketch::new(small(), SketchHooks::default());
        let mut ticks = Ticks::default();
        assert_eq!(s.state(), LoopState::Uninitialized);
        assert!(matches!(s.start(&mut ticks), Err(Error::NotConfigured)));

        s.configure((8, 8)).unwrap();
        assert_eq!(s.state(), LoopState::Configured);

        s.start(&mut ticks).unwrap();
        assert_eq!(s.state(), LoopState::Running);
        assert_eq!(ticks.live.len(), 1);
        assert!(s.is_subscribed());

        s.stop(&mut ticks);
        assert!(!s.is_subscribed());
        assert_eq!(s.state(), LoopState::Configured);
        assert!(ticks.live.is_empty());
    }

    #[test]
    fn invalid_dimensions_leave_sketch_unconfigured() {
        let cfg = SketchConfig { width: 0, ..small() };
        let mut s = Sketch::new(cfg, SketchHooks::default());
        assert!(s.configure((8, 8)).is_err());
        assert_eq!(s.state(), LoopState::Uninitialized);
        assert!(s.canvas().is_none());
    }

    #[test]
    fn tick_counts_draws_then_presents() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let hooks = SketchHooks::new(
            |c| c.stroke(Color::BLACK),
            move |c, f| {
                log.borrow_mut().push(f.count);
                c.pixel(f.count as i32, 0);
            },
        );
        let mut s = Sketch::new(small(), hooks);
        let mut ticks = Ticks::default();
        let mut out = Recorder::default();
        s.configure((4, 4)).unwrap();

        s.tick(&mut out).unwrap(); // not running yet
        assert!(out.frames.is_empty());

        s.start(&mut ticks).unwrap();
        s.tick(&mut out).unwrap();
        s.tick(&mut out).unwrap();
        assert_eq!(*seen.borrow(), vec![1, 2]);
        assert_eq!(s.frame_count(), 2);
        assert_eq!(out.frames.len(), 2);

        // frame 2's pixel is already in the frame presented on tick 2
        let (bytes, w, h) = &out.frames[1];
        assert_eq!((*w, *h), (4, 4));
        assert_eq!(&bytes[2 * 4..2 * 4 + 4], &[0, 0, 0, 255]);
    }

    #[test]
    fn failed_conversion_is_not_fatal() {
        let mut s = Sketch::new(small(), SketchHooks::default());
        let mut ticks = Ticks::default();
        let mut out = Recorder { reject: true, ..Recorder::default() };
        s.configure((4, 4)).unwrap();
        s.start(&mut ticks).unwrap();
        assert!(s.tick(&mut out).is_ok());
        assert_eq!(s.frame_count(), 1);
        assert!(out.frames.is_empty());
    }

    #[test]
    fn redraw_requires_a_canvas() {
        let s = Sketch::new(small(), SketchHooks::default());
        assert!(matches!(s.redraw(&mut Recorder::default()), Err(Error::NotConfigured)));
    }

    #[test]
    fn frame_rate_change_replaces_subscription() {
        let mut s = Sketch::new(small(), SketchHooks::default());
        let mut ticks = Ticks::default();
        s.configure((4, 4)).unwrap();
        s.start(&mut ticks).unwrap();
        s.set_frame_rate(30, &mut ticks);
        s.set_frame_rate(500, &mut ticks);

        assert_eq!(ticks.log, vec!["sub 60", "cancel 60", "sub 30", "cancel 30", "sub 120"]);
        assert_eq!(ticks.live.len(), 1);
        assert_eq!(s.fps(), 120);
    }

    #[test]
    fn frame_rate_before_start_is_remembered() {
        let mut s = Sketch::new(small(), SketchHooks::default());
        let mut ticks = Ticks::default();
        s.set_frame_rate(24, &mut ticks);
        assert!(ticks.log.is_empty());
        s.configure((4, 4)).unwrap();
        s.start(&mut ticks).unwrap();
        assert_eq!(ticks.log, vec!["sub 24"]);
    }

    #[test]
    fn reconfigure_reruns_setup_but_keeps_clock() {
        let runs = Rc::new(RefCell::new(0));
        let r = Rc::clone(&runs);
        let hooks = SketchHooks::new(move |c| {
            *r.borrow_mut() += 1;
            c.pixel(0, 0);
        }, |_, _| {});
        let mut s = Sketch::new(small(), hooks);
        s.configure((4, 4)).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(20));
        s.canvas_mut().unwrap().pixel(3, 3);
        s.configure((4, 4)).unwrap();

        assert_eq!(*runs.borrow(), 2);
        assert!(s.elapsed_millis() >= 20);
        let c = s.canvas().unwrap();
        assert_eq!(c.get(3, 3), Some(Color::gray(127))); // fresh canvas
        assert_eq!(c.get(0, 0), Some(Color::WHITE)); // setup ran again
    }

    #[test]
    fn explicit_clock_reset_restarts_elapsed_time() {
        let mut s = Sketch::new(small(), SketchHooks::default());
        let mut ticks = Ticks::default();
        s.configure((4, 4)).unwrap();
        s.start(&mut ticks).unwrap();
        s.tick(&mut Recorder::default()).unwrap();
        std::thread::sleep(std::time::Duration::from_millis(30));
        s.reset_clock();
        assert_eq!(s.frame_count(), 0);
        assert!(s.elapsed_millis() < 30);
    }

    #[test]
    fn setup_can_resize_and_state_reports_it() {
        let hooks = SketchHooks::new(|c| c.size(2, 3).unwrap(), |_, _| {});
        let mut s = Sketch::new(small(), hooks);
        s.configure((10, 10)).unwrap();
        assert_eq!(s.state(), LoopState::Configured);
        assert_eq!(s.canvas_size(), (2, 3));
    }

    #[test]
    fn size_change_in_draw_is_visible_after_stop() {
        let hooks = SketchHooks::new(|_| {}, |c, _| c.size(6, 5).unwrap());
        let mut s = Sketch::new(small(), hooks);
        let mut ticks = Ticks::default();
        s.configure((10, 10)).unwrap();
        assert_eq!(s.canvas_size(), (4, 4));
        s.start(&mut ticks).unwrap();
        s.tick(&mut Recorder::default()).unwrap();
        s.stop(&mut ticks);
        assert_eq!(s.state(), LoopState::Configured);
        assert_eq!(s.canvas_size(), (6, 5));
        let (_, w, h) = s.frame().unwrap();
        assert_eq!((w, h), (6, 5));
    }

    #[test]
    fn pointer_is_mapped_into_canvas_space() {
        let mut s = Sketch::new(small(), SketchHooks::default());
        s.configure((40, 40)).unwrap();
        s.pointer(PointerEvent { phase: GesturePhase::Began, x: 20.0, y: 30.0, dx: 0.0, dy: 0.0 });
        let p = s.pointer_state();
        assert!(p.touched);
        assert_eq!((p.x, p.y), (2, 3));
    }

    #[test]
    fn presentable_reads_current_frame() {
        let mut s = Sketch::new(small(), SketchHooks::default());
        assert!(s.frame().is_none());
        s.configure((4, 4)).unwrap();
        let (bytes, w, h) = s.frame().unwrap();
        assert_eq!(bytes.len(), w * h * 4);
    }
}
