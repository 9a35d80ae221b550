use image::RgbaImage;

use crate::foundation::color::Color;

/// Filled disc of `radius` on a transparent `2r x 2r` square.
///
/// Pixel `(px, py)` is painted when `(px - r)^2 + (py - r)^2 <= r^2`. The centre sits on pixel
/// `(r, r)`, so the disc touches the top and left edges but stops one pixel short of the bottom
/// and right ones. A radius of 0 yields an empty 0x0 raster.
///
/// # Panics
///
/// Panics when `2 * radius` does not fit in a `u32`.
pub fn filled_circle(radius: u32, color: Color) -> RgbaImage {
    let side = radius
        .checked_mul(2)
        .unwrap_or_else(|| panic!("circle radius {radius} overflows the raster side"));
    let r = i64::from(radius);
    let r2 = r * r;
    let fill = color.to_rgba();

    let mut out = RgbaImage::new(side, side);
    for (px, py, pixel) in out.enumerate_pixels_mut() {
        let dx = i64::from(px) - r;
        let dy = i64::from(py) - r;
        if dx * dx + dy * dy <= r2 {
            *pixel = fill;
        }
    }
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/shape.rs"]
mod tests;
