// Command-line configuration.

use crate::input::Fit;
use crate::sketch::SketchConfig;
use crate::sketches::SketchKind;
use crate::types::{AddressMode, Color};
use crate::window::WindowScale;
use clap::Parser;
use clap::builder::TypedValueParser;
use std::path::PathBuf;

#[derive(Parser, Debug, Clone)]
#[command(name = "drawdraw", version, about = "Draw into a pixel buffer and watch it live")]
pub struct Config {
    /// Canvas width in pixels.
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    pub width: usize,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = 500, value_parser = clap::value_parser!(u32).range(1..).map(|v| v as usize))]
    pub height: usize,

    /// Target frames per second.
    #[arg(long, default_value_t = 60, value_parser = clap::value_parser!(u32).range(1..))]
    pub fps: u32,

    /// Highest frame rate the Up key can reach.
    #[arg(long, default_value_t = 120, value_parser = clap::value_parser!(u32).range(1..))]
    pub max_fps: u32,

    /// Background gray level (0-255).
    #[arg(long, default_value_t = 127)]
    pub background: u8,

    /// What happens to pixels drawn past the edge.
    #[arg(long, value_enum, default_value_t = AddressMode::Clamped)]
    pub address_mode: AddressMode,

    /// How pointer coordinates map onto the canvas.
    #[arg(long, value_enum, default_value_t = Fit::Stretch)]
    pub fit: Fit,

    /// Window pixels per canvas pixel.
    #[arg(long, value_enum, default_value_t = WindowScale::X1)]
    pub scale: WindowScale,

    /// Size the canvas to the whole window instead of --width/--height.
    #[arg(long)]
    pub full_screen: bool,

    /// Which demo sketch to run.
    #[arg(long, value_enum, default_value_t = SketchKind::Paint)]
    pub sketch: SketchKind,

    /// Where screenshots (S key) are written.
    #[arg(long, default_value = ".")]
    pub out_dir: PathBuf,

    /// Verbose logging; RUST_LOG is honored when set.
    #[arg(long)]
    pub debug: bool,
}

impl Config {
    pub fn sketch_config(&self) -> SketchConfig {
        SketchConfig {
            width: self.width,
            height: self.height,
            background: Color::gray(self.background),
            mode: self.address_mode,
            fit: self.fit,
            fps: self.fps,
        }
    }
}
