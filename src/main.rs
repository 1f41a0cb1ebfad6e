// What you SEE:
// • A window showing the canvas, redrawn every tick by the chosen sketch.
// • Hold Left Mouse and drag: the sketch gets Began/Changed/Ended gestures.
// • S saves a PNG screenshot. R rebuilds the canvas and reruns setup.
// • Up/Down change the frame rate. ESC quits.

use clap::Parser;
use drawdraw::config::Config;
use drawdraw::host::{InputReceivable, Presentable, Tickable};
use drawdraw::window::WindowHost;
use drawdraw::{export, logging, sketches, Result, Sketch};
use std::time::{Duration, Instant};
use tracing::{error, info};

const FPS_STEP: u32 = 10;

fn main() -> Result<()> {
    let cfg = Config::parse();
    logging::init(cfg.debug);

    /* --- Window + sketch setup: the window opens filled with the background --- */
    let mut host = WindowHost::new("DrawDraw", cfg.width, cfg.height, cfg.scale, cfg.max_fps)?;
    let mut sketch = Sketch::new(cfg.sketch_config(), sketches::hooks(cfg.sketch, cfg.full_screen));
    sketch.configure(host.view_size())?;
    sketch.redraw(&mut host)?;
    sketch.start(&mut host)?;

    let mut last_fps_time = Instant::now();
    let mut last_fps_frames = 0u64;

    /* ------------------------------ Main loop ------------------------------ */
    while host.is_open() {
        /* 1) Pointer: drag samples go through the input mapper into canvas space. */
        if let Some(ev) = host.poll_pointer() {
            sketch.pointer(ev);
        }

        /* 2) Keys */
        if host.reset_pressed() {
            sketch.configure(host.view_size())?; // visual: canvas back to background
        }
        if host.faster_pressed() {
            sketch.set_frame_rate(sketch.fps().saturating_add(FPS_STEP), &mut host);
        }
        if host.slower_pressed() {
            sketch.set_frame_rate(sketch.fps().saturating_sub(FPS_STEP), &mut host);
        }
        if host.screenshot_pressed() {
            if let Some((rgba, w, h)) = sketch.frame() {
                let path = export::screenshot_path(&cfg.out_dir);
                // A failed save shouldn't end the session.
                if let Err(e) = export::save_png(&rgba, w, h, &path) {
                    error!(error = %e, path = %path.display(), "screenshot failed");
                }
            }
        }

        /* 3) One frame: count, draw, present (minifb paces us to the target fps). */
        sketch.tick(&mut host)?;

        /* 4) FPS report once per second */
        let now = Instant::now();
        if now.duration_since(last_fps_time) >= Duration::from_secs(1) {
            let secs = now.duration_since(last_fps_time).as_secs_f32();
            let frames = sketch.frame_count() - last_fps_frames;
            info!(fps = %format!("{:.1}", frames as f32 / secs), target = sketch.fps(), "frame rate");
            last_fps_time = now;
            last_fps_frames = sketch.frame_count();
        }
    }

    sketch.stop(&mut host);
    info!(frames = sketch.frame_count(), millis = sketch.elapsed_millis(), "bye");
    Ok(())
}
