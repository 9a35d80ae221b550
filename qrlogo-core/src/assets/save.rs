use std::{io::Cursor, path::Path};

use anyhow::Context;
use image::RgbaImage;

use crate::foundation::error::QrLogoResult;

/// Encode `img` as PNG bytes.
pub fn encode_png(img: &RgbaImage) -> QrLogoResult<Vec<u8>> {
    let mut buf = Vec::new();
    img.write_to(&mut Cursor::new(&mut buf), image::ImageFormat::Png)
        .context("encode png")?;
    Ok(buf)
}

/// Write `img` as a PNG file, creating parent directories as needed.
pub fn save_png(img: &RgbaImage, path: &Path) -> QrLogoResult<()> {
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .with_context(|| format!("create output dir '{}'", parent.display()))?;
    }
    img.save_with_format(path, image::ImageFormat::Png)
        .with_context(|| format!("write png '{}'", path.display()))?;
    Ok(())
}

#[cfg(test)]
#[path = "../../tests/unit/assets/save.rs"]
mod tests;
