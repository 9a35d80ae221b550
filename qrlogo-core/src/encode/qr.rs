use image::RgbaImage;
use qrcode::{EcLevel, QrCode};

use crate::foundation::{
    color::Color,
    error::{QrLogoError, QrLogoResult},
};

/// Quiet-zone width in modules when the border is enabled.
pub const QUIET_ZONE_MODULES: u32 = 4;

/// Parameters for turning a payload into a QR raster.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct EncodeRequest {
    /// Requested side length in pixels.
    pub size: u32,
    /// Light module colour.
    pub background: Color,
    /// Dark module colour.
    pub foreground: Color,
    /// Surround the code with a quiet zone.
    pub border: bool,
}

/// Turns a payload string into a square QR raster.
pub trait MatrixEncoder: Send + Sync {
    /// Encode `payload` at the highest error-correction level.
    fn encode(&self, payload: &str, req: &EncodeRequest) -> QrLogoResult<RgbaImage>;
}

/// [`MatrixEncoder`] backed by the `qrcode` crate.
///
/// Modules are drawn as whole-pixel squares. The code is centred in a `size x size` canvas; any
/// leftover pixels are filled with the background. When `size` is smaller than one pixel per
/// module the canvas grows to fit.
#[derive(Clone, Copy, Debug, Default)]
pub struct QrCodeEncoder;

impl MatrixEncoder for QrCodeEncoder {
    fn encode(&self, payload: &str, req: &EncodeRequest) -> QrLogoResult<RgbaImage> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), EcLevel::H)
            .map_err(|e| QrLogoError::encode(format!("{e} (payload {} bytes)", payload.len())))?;

        let modules = code.width() as u32;
        let quiet = if req.border { QUIET_ZONE_MODULES } else { 0 };
        let real = modules + 2 * quiet;
        let size = req.size.max(real);
        let scale = size / real;
        let offset = (size - real * scale) / 2 + quiet * scale;

        let mut img = RgbaImage::from_pixel(size, size, req.background.to_rgba());
        let dark = req.foreground.to_rgba();
        for (i, color) in code.to_colors().iter().enumerate() {
            if *color != qrcode::Color::Dark {
                continue;
            }
            let mx = i as u32 % modules;
            let my = i as u32 / modules;
            let x0 = offset + mx * scale;
            let y0 = offset + my * scale;
            for y in y0..y0 + scale {
                for x in x0..x0 + scale {
                    img.put_pixel(x, y, dark);
                }
            }
        }
        Ok(img)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/encode/qr.rs"]
mod tests;
