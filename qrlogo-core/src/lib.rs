//! qrlogo places a logo in the centre of a QR code.
//!
//! The logo is scaled to cover a fixed fraction of the code and given a backdrop so it stays
//! legible against the modules, while the code's error correction absorbs the covered area.
//!
//! # Pipeline overview
//!
//! 1. **Scale**: fit the logo into the padded area, preserving aspect ratio (Catmull-Rom).
//! 2. **Pad**: draw a backdrop per [`PaddingKind`]: none, a square, a circle, or a dilation that
//!    traces the logo's own silhouette via a Manhattan [`DistanceField`].
//! 3. **Encode**: render the payload with a [`MatrixEncoder`] at the highest error-correction level.
//! 4. **Composite**: alpha-blend the padded logo over the centre of the code.
//!
//! [`Compositor`] runs steps 3-4 per payload and memoizes steps 1-2, so batches of payloads
//! share one padded logo, across threads if needed.
//!
//! # Example
//!
//! ```no_run
//! use qrlogo::{Compositor, LogoOptions, PaddingKind, open_logo, save_png};
//!
//! # fn main() -> qrlogo::QrLogoResult<()> {
//! let logo = open_logo("logo.png".as_ref())?;
//! let opts = LogoOptions::builder().padding(PaddingKind::Circle).build()?;
//! let compositor = Compositor::new(logo, opts)?;
//! save_png(&compositor.render("https://example.com")?, "qr.png".as_ref())?;
//! # Ok(())
//! # }
//! ```
#![forbid(unsafe_code)]
#![deny(missing_docs)]

mod assets;
mod compose;
mod encode;
mod foundation;
mod options;
mod padding;
mod raster;

pub use assets::decode::{decode_logo, open_logo};
pub use assets::save::{encode_png, save_png};
pub use compose::compositor::Compositor;
pub use encode::qr::{EncodeRequest, MatrixEncoder, QUIET_ZONE_MODULES, QrCodeEncoder};
pub use foundation::color::Color;
pub use foundation::error::{QrLogoError, QrLogoResult};
pub use foundation::math::{centered_offset, padded_size};
pub use options::builder::LogoOptionsBuilder;
pub use options::model::{LogoOptions, RECOMMENDED_MAX_COVERAGE};
pub use padding::kind::PaddingKind;
pub use padding::pipeline::generate_logo;
pub use raster::alpha::{ALPHA_CUTOFF, AlphaMatrix, MAX_ALPHA};
pub use raster::composite::{PremulRgba8, over, over_straight, overlay, stencil};
pub use raster::dilate::{MASK_OPAQUE, dilate_mask, dilate_mask_from_image, pad_image};
pub use raster::distance::DistanceField;
pub use raster::scale::{fit_dimensions, scale_to_fit};
pub use raster::shape::filled_circle;
