// Screenshot export: RGBA bytes -> PNG on disk via the `image` crate.

use crate::error::{Error, Result};
use image::{ImageBuffer, Rgba, RgbaImage};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::info;

/// Wrap row-major RGBA bytes as an image.
/// None when the byte count doesn't match width * height * 4.
pub fn to_image(rgba: &[u8], width: usize, height: usize) -> Option<RgbaImage> {
    let (w, h) = (u32::try_from(width).ok()?, u32::try_from(height).ok()?);
    ImageBuffer::<Rgba<u8>, Vec<u8>>::from_raw(w, h, rgba.to_vec())
}

/// Write the frame as a PNG (format picked from the extension).
pub fn save_png(rgba: &[u8], width: usize, height: usize, path: &Path) -> Result<()> {
    let img = to_image(rgba, width, height)
        .ok_or_else(|| Error::buffer_mismatch(width * height * 4, rgba.len()))?;
    img.save(path)?;
    info!(path = %path.display(), width, height, "screenshot saved");
    Ok(())
}

/// `dir/drawdraw-<unix millis>.png`
pub fn screenshot_path(dir: &Path) -> PathBuf {
    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis())
        .unwrap_or(0);
    dir.join(format!("drawdraw-{millis}.png"))
}
