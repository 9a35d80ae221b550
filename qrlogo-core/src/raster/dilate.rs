use std::sync::Arc;

use image::{GrayImage, Luma, RgbaImage};

use crate::raster::{alpha::AlphaMatrix, distance::DistanceField};

/// Mask value for pixels inside the dilated region.
pub const MASK_OPAQUE: Luma<u8> = Luma([255]);

/// Dilate the set region of `matrix` by `padding` pixels under Manhattan distance.
///
/// The mask has the matrix's dimensions and is opaque wherever the distance to a set pixel is at
/// most `padding`, so the structuring element is a diamond of radius `padding`.
///
/// A matrix with no set pixel yields an all-transparent mask for any `padding`. Its distance field
/// holds only the [`DistanceField::unreachable`] cap, which is never treated as a real distance,
/// even when `padding` is at least `width + height`.
pub fn dilate_mask(matrix: &AlphaMatrix, padding: u32) -> GrayImage {
    let field = DistanceField::from_matrix(matrix);
    let unreachable = field.unreachable();
    let mut mask = GrayImage::new(field.width(), field.height());
    for (px, &dist) in mask.pixels_mut().zip(field.values()) {
        if dist <= padding && dist < unreachable {
            *px = MASK_OPAQUE;
        }
    }
    mask
}

/// Dilate the opaque area of `img` by `padding` pixels without clipping at its edges.
///
/// The returned mask is `padding` pixels larger than `img` on every side; `img`'s own pixel
/// `(x, y)` maps to mask pixel `(x + padding, y + padding)`.
///
/// # Panics
///
/// Panics under the same conditions as [`pad_image`].
pub fn dilate_mask_from_image(img: &RgbaImage, padding: u32) -> GrayImage {
    let padded = pad_image(img, padding);
    dilate_mask(&AlphaMatrix::from_shared(Arc::new(padded)), padding)
}

/// Copy `img` into the centre of a transparent canvas `padding` pixels larger on every side.
///
/// # Panics
///
/// Panics when a padded side does not fit in a `u32`.
pub fn pad_image(img: &RgbaImage, padding: u32) -> RgbaImage {
    let grow = |side: u32| {
        padding
            .checked_mul(2)
            .and_then(|extra| side.checked_add(extra))
            .unwrap_or_else(|| panic!("padding {padding} overflows side {side}"))
    };
    let mut out = RgbaImage::new(grow(img.width()), grow(img.height()));
    image::imageops::replace(&mut out, img, i64::from(padding), i64::from(padding));
    out
}

#[cfg(test)]
#[path = "../../tests/unit/raster/dilate.rs"]
mod tests;
