// Screenshot functionality
//
// Writes the PPU's RGBA framebuffer to a PNG file.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ppu::constants::{FRAMEBUFFER_SIZE, SCREEN_HEIGHT, SCREEN_WIDTH};

/// Errors that can occur while saving a screenshot.
#[derive(Debug, Error)]
pub enum ScreenshotError {
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    #[error("PNG encoding error: {0}")]
    PngEncoding(#[from] png::EncodingError),

    #[error("framebuffer is {0} bytes, expected {FRAMEBUFFER_SIZE}")]
    BadFramebuffer(usize),
}

/// Save the 256x240 RGBA framebuffer as a PNG under `directory`.
///
/// Returns the path of the written file.
pub fn save_screenshot(
    framebuffer: &[u8],
    directory: &Path,
    include_timestamp: bool,
) -> Result<PathBuf, ScreenshotError> {
    if framebuffer.len() != FRAMEBUFFER_SIZE {
        return Err(ScreenshotError::BadFramebuffer(framebuffer.len()));
    }

    fs::create_dir_all(directory)?;

    let filename = if include_timestamp {
        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S");
        format!("screenshot_{}.png", timestamp)
    } else {
        "screenshot.png".to_string()
    };
    let file_path = directory.join(filename);

    let file = fs::File::create(&file_path)?;
    let writer = io::BufWriter::new(file);

    let mut encoder = png::Encoder::new(writer, SCREEN_WIDTH as u32, SCREEN_HEIGHT as u32);
    encoder.set_color(png::ColorType::Rgba);
    encoder.set_depth(png::BitDepth::Eight);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(framebuffer)?;

    log::info!("screenshot saved to {}", file_path.display());
    Ok(file_path)
}
