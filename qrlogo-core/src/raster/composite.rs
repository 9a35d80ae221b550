use image::{GrayImage, Rgba, RgbaImage};

use crate::foundation::{color::Color, math::mul_div255_u8};

/// Premultiplied RGBA8 pixel.
pub type PremulRgba8 = [u8; 4];

/// Source-over on premultiplied pixels.
pub fn over(dst: PremulRgba8, src: PremulRgba8) -> PremulRgba8 {
    if src[3] == 0 {
        return dst;
    }
    let inv = 255u16 - u16::from(src[3]);

    let mut out = [0u8; 4];
    for i in 0..4 {
        let dc = mul_div255_u8(u16::from(dst[i]), inv);
        out[i] = src[i].saturating_add(dc);
    }
    out
}

/// Source-over on straight-alpha pixels, going through premultiplied space.
pub fn over_straight(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
    match src.0[3] {
        0 => dst,
        255 => src,
        _ => Rgba(unpremultiply(over(premultiply(dst.0), premultiply(src.0)))),
    }
}

/// Composite `src` over `dst` with its top-left corner at `(x, y)`.
///
/// Parts of `src` falling outside `dst` (including negative offsets) are clipped.
pub fn overlay(dst: &mut RgbaImage, src: &RgbaImage, x: i64, y: i64) {
    let (dw, dh) = (i64::from(dst.width()), i64::from(dst.height()));
    let (sw, sh) = (i64::from(src.width()), i64::from(src.height()));

    let x0 = x.max(0);
    let y0 = y.max(0);
    let x1 = (x + sw).min(dw);
    let y1 = (y + sh).min(dh);

    for dy in y0..y1 {
        for dx in x0..x1 {
            let s = *src.get_pixel((dx - x) as u32, (dy - y) as u32);
            let d = dst.get_pixel_mut(dx as u32, dy as u32);
            *d = over_straight(*d, s);
        }
    }
}

/// Paint `color` through `mask`: each output pixel is `color` with its alpha scaled by the mask
/// value, fully transparent where the mask is 0.
pub fn stencil(mask: &GrayImage, color: Color) -> RgbaImage {
    let mut out = RgbaImage::new(mask.width(), mask.height());
    for (dst, m) in out.pixels_mut().zip(mask.pixels()) {
        let a = mul_div255_u8(u16::from(color.a), u16::from(m.0[0]));
        if a != 0 {
            *dst = Rgba([color.r, color.g, color.b, a]);
        }
    }
    out
}

pub(crate) fn premultiply(px: [u8; 4]) -> PremulRgba8 {
    let a = u16::from(px[3]);
    [
        mul_div255_u8(u16::from(px[0]), a),
        mul_div255_u8(u16::from(px[1]), a),
        mul_div255_u8(u16::from(px[2]), a),
        px[3],
    ]
}

pub(crate) fn unpremultiply(px: PremulRgba8) -> [u8; 4] {
    let a = u16::from(px[3]);
    if a == 0 {
        return [0, 0, 0, 0];
    }
    let un = |c: u8| ((u16::from(c) * 255 + a / 2) / a).min(255) as u8;
    [un(px[0]), un(px[1]), un(px[2]), px[3]]
}

#[cfg(test)]
#[path = "../../tests/unit/raster/composite.rs"]
mod tests;
