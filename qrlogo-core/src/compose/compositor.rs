use std::sync::OnceLock;

use image::RgbaImage;

use crate::{
    encode::qr::{EncodeRequest, MatrixEncoder, QrCodeEncoder},
    foundation::{
        error::{QrLogoError, QrLogoResult},
        math::centered_offset,
    },
    options::model::LogoOptions,
    padding::pipeline::generate_logo,
    raster::composite::overlay,
};

/// Places one logo on any number of QR codes.
///
/// The padded logo is generated lazily on first use and shared by every later render, including
/// renders running concurrently on other threads.
pub struct Compositor {
    logo: RgbaImage,
    opts: LogoOptions,
    encoder: Box<dyn MatrixEncoder>,
    generated: OnceLock<RgbaImage>,
}

impl Compositor {
    /// Build a compositor using the default [`QrCodeEncoder`].
    pub fn new(logo: RgbaImage, opts: LogoOptions) -> QrLogoResult<Self> {
        Self::with_encoder(logo, opts, Box::new(QrCodeEncoder))
    }

    /// Build a compositor with a custom encoder.
    ///
    /// Options and logo dimensions are validated here so that rendering never starts pixel work
    /// on a configuration that cannot succeed.
    pub fn with_encoder(
        logo: RgbaImage,
        opts: LogoOptions,
        encoder: Box<dyn MatrixEncoder>,
    ) -> QrLogoResult<Self> {
        opts.validate()?;
        if logo.width() == 0 || logo.height() == 0 {
            return Err(QrLogoError::validation("logo image must not be empty"));
        }
        if opts.exceeds_recommended_coverage() {
            tracing::warn!(
                coverage = opts.logo_coverage,
                "logo coverage above 0.3 may leave the code unreadable"
            );
        }
        Ok(Self {
            logo,
            opts,
            encoder,
            generated: OnceLock::new(),
        })
    }

    /// Options this compositor renders with.
    pub fn options(&self) -> &LogoOptions {
        &self.opts
    }

    /// The padded logo, generated on first call.
    ///
    /// Concurrent first callers block until the single computation finishes; every caller gets a
    /// reference to the same raster.
    pub fn generated_logo(&self) -> &RgbaImage {
        self.generated
            .get_or_init(|| generate_logo(&self.logo, &self.opts))
    }

    /// Render `payload` as a QR code with the logo composited in the centre.
    #[tracing::instrument(skip(self), fields(size = self.opts.qr_size))]
    pub fn render(&self, payload: &str) -> QrLogoResult<RgbaImage> {
        let req = EncodeRequest {
            size: self.opts.qr_size,
            background: self.opts.background,
            foreground: self.opts.code_color,
            border: !self.opts.disable_border,
        };
        let mut canvas = self.encoder.encode(payload, &req)?;

        let logo = self.generated_logo();
        let x = centered_offset(canvas.width(), logo.width());
        let y = centered_offset(canvas.height(), logo.height());
        tracing::debug!(x, y, "placing logo");
        overlay(&mut canvas, logo, x, y);
        Ok(canvas)
    }
}

impl std::fmt::Debug for Compositor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Compositor")
            .field("logo", &self.logo.dimensions())
            .field("opts", &self.opts)
            .field("generated", &self.generated.get().map(|img| img.dimensions()))
            .finish()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/compose/compositor.rs"]
mod tests;
