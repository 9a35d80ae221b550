use std::path::Path;

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::{QrLogoError, QrLogoResult};

/// Decode encoded image bytes (PNG, JPEG, GIF, BMP, WebP) into straight RGBA8.
pub fn decode_logo(bytes: &[u8]) -> QrLogoResult<RgbaImage> {
    let dyn_img = image::load_from_memory(bytes)
        .map_err(|e| QrLogoError::decode(format!("decode image from memory: {e}")))?;
    Ok(dyn_img.to_rgba8())
}

/// Read and decode a logo file.
pub fn open_logo(path: &Path) -> QrLogoResult<RgbaImage> {
    let bytes =
        std::fs::read(path).with_context(|| format!("read logo '{}'", path.display()))?;
    decode_logo(&bytes).map_err(|e| match e {
        QrLogoError::Decode(msg) => QrLogoError::decode(format!("{}: {msg}", path.display())),
        other => other,
    })
}

#[cfg(test)]
#[path = "../../tests/unit/assets/decode.rs"]
mod tests;
