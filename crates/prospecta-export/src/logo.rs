use std::io::Cursor;

use image::ImageFormat;

use crate::error::ExportError;

/// A branding image, normalized to PNG.
#[derive(Debug, Clone)]
pub struct LogoImage {
    pub png: Vec<u8>,
    pub width_px: u32,
    pub height_px: u32,
}

impl LogoImage {
    /// Decode any supported image and re-encode it as PNG.
    pub fn from_bytes(bytes: &[u8]) -> Result<Self, ExportError> {
        let image = image::load_from_memory(bytes)?;
        let mut png = Cursor::new(Vec::new());
        image.write_to(&mut png, ImageFormat::Png)?;
        Ok(Self {
            png: png.into_inner(),
            width_px: image.width(),
            height_px: image.height(),
        })
    }
}
