use image::RgbaImage;

use crate::{
    foundation::math::centered_offset,
    options::model::LogoOptions,
    padding::kind::PaddingKind,
    raster::{
        composite::{overlay, stencil},
        dilate::dilate_mask_from_image,
        scale::scale_to_fit,
        shape::filled_circle,
    },
};

/// Scale `logo` and draw the configured backdrop behind it.
///
/// `opts` is expected to have passed [`LogoOptions::validate`]; with unvalidated options the
/// logo may come out empty.
#[tracing::instrument(skip(logo, opts), fields(padding = %opts.padding))]
pub fn generate_logo(logo: &RgbaImage, opts: &LogoOptions) -> RgbaImage {
    let padded = opts.padded_size();
    let out = match opts.padding {
        PaddingKind::None => scale_to_fit(logo, padded),
        PaddingKind::Square => square_logo(logo, opts),
        PaddingKind::Circle => circle_logo(logo, opts),
        PaddingKind::Dilate => dilated_logo(logo, opts),
    };
    tracing::debug!(
        padded_size = padded,
        width = out.width(),
        height = out.height(),
        "generated padded logo"
    );
    out
}

fn square_logo(logo: &RgbaImage, opts: &LogoOptions) -> RgbaImage {
    let scaled = scale_to_fit(logo, opts.logo_size());
    let side = opts.padded_size().floor() as u32;
    let backdrop = RgbaImage::from_pixel(side, side, opts.background.to_rgba());
    center_on(backdrop, &scaled)
}

fn circle_logo(logo: &RgbaImage, opts: &LogoOptions) -> RgbaImage {
    let scaled = scale_to_fit(logo, opts.logo_size());
    let radius = (opts.padded_size() / 2.0).floor() as u32;
    let backdrop = filled_circle(radius, opts.background);
    center_on(backdrop, &scaled)
}

fn dilated_logo(logo: &RgbaImage, opts: &LogoOptions) -> RgbaImage {
    let scaled = scale_to_fit(logo, opts.logo_size());
    let weight = opts.padding_weight;
    let mask = dilate_mask_from_image(&scaled, weight);
    let mut out = stencil(&mask, opts.background);
    overlay(&mut out, &scaled, i64::from(weight), i64::from(weight));
    out
}

fn center_on(mut backdrop: RgbaImage, logo: &RgbaImage) -> RgbaImage {
    let x = centered_offset(backdrop.width(), logo.width());
    let y = centered_offset(backdrop.height(), logo.height());
    overlay(&mut backdrop, logo, x, y);
    backdrop
}

#[cfg(test)]
#[path = "../../tests/unit/padding/pipeline.rs"]
mod tests;
