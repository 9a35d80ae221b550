use image::{RgbaImage, imageops::FilterType};

use crate::raster::composite::{premultiply, unpremultiply};

/// Dimensions `src` takes when scaled uniformly to fit a `target x target` box.
///
/// Each axis is `min(ceil(dim * ratio), target)` with `ratio = min(target / w, target / h)`,
/// truncated to whole pixels. The `min` absorbs the overshoot `ceil` can introduce.
pub fn fit_dimensions(width: u32, height: u32, target: f64) -> (u32, u32) {
    if width == 0 || height == 0 || !target.is_finite() || target <= 0.0 {
        return (0, 0);
    }
    let (w, h) = (f64::from(width), f64::from(height));
    let ratio = (target / w).min(target / h);
    let fit = |dim: f64| (dim * ratio).ceil().min(target) as u32;
    (fit(w), fit(h))
}

/// Resample `src` to fit within `target` pixels on both axes, preserving aspect ratio.
///
/// Uses a Catmull-Rom kernel over premultiplied pixels, so transparent neighbours do not darken
/// the colour of edge pixels. A target too small for a whole pixel yields an empty raster.
pub fn scale_to_fit(src: &RgbaImage, target: f64) -> RgbaImage {
    let (w, h) = fit_dimensions(src.width(), src.height(), target);
    if w == 0 || h == 0 {
        return RgbaImage::new(w, h);
    }
    let mut premul = src.clone();
    for px in premul.pixels_mut() {
        px.0 = premultiply(px.0);
    }
    let mut out = image::imageops::resize(&premul, w, h, FilterType::CatmullRom);
    for px in out.pixels_mut() {
        px.0 = unpremultiply(px.0);
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/scale.rs"]
mod tests;
