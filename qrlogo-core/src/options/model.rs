use serde::{Deserialize, Serialize};

use crate::{
    foundation::{
        color::Color,
        error::{QrLogoError, QrLogoResult},
        math::padded_size,
    },
    padding::kind::PaddingKind,
};

/// Coverage above which the logo is likely to eat into the error-correction budget.
pub const RECOMMENDED_MAX_COVERAGE: f64 = 0.3;

/// Rendering options for a logo-bearing QR code.
///
/// Immutable once built; use [`LogoOptions::builder`] or deserialize with
/// [`LogoOptions::from_json`]. Missing JSON fields take the [`Default`] values.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LogoOptions {
    /// Light modules and logo backdrop colour. Default white.
    pub background: Color,
    /// Dark module colour. Default black.
    pub code_color: Color,
    /// Drop the 4-module quiet zone around the code. Default `false`.
    pub disable_border: bool,
    /// Fraction of the code area covered by the padded logo, in `(0, 1]`. Default 0.2.
    pub logo_coverage: f64,
    /// Backdrop drawn behind the logo. Default [`PaddingKind::Dilate`].
    pub padding: PaddingKind,
    /// Backdrop margin around the logo in pixels. Default 20.
    pub padding_weight: u32,
    /// Output side length in pixels. Default 2048.
    pub qr_size: u32,
}

impl Default for LogoOptions {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            code_color: Color::BLACK,
            disable_border: false,
            logo_coverage: 0.2,
            padding: PaddingKind::Dilate,
            padding_weight: 20,
            qr_size: 2048,
        }
    }
}

impl LogoOptions {
    /// Start a builder seeded with the defaults.
    pub fn builder() -> crate::options::builder::LogoOptionsBuilder {
        crate::options::builder::LogoOptionsBuilder::new()
    }

    /// Parse and validate options from JSON.
    ///
    /// An unrecognised `padding` name is reported as [`QrLogoError::UnknownPadding`].
    pub fn from_json(json: &str) -> QrLogoResult<Self> {
        let value: serde_json::Value =
            serde_json::from_str(json).map_err(|e| QrLogoError::serde(e.to_string()))?;
        if let Some(name) = value.get("padding").and_then(serde_json::Value::as_str) {
            name.parse::<PaddingKind>()?;
        }
        let opts: Self =
            serde_json::from_value(value).map_err(|e| QrLogoError::serde(e.to_string()))?;
        opts.validate()?;
        Ok(opts)
    }

    /// Serialize to pretty-printed JSON.
    pub fn to_json_pretty(&self) -> QrLogoResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| QrLogoError::serde(e.to_string()))
    }

    /// Side length of the padded logo area in pixels.
    pub fn padded_size(&self) -> f64 {
        padded_size(self.qr_size, self.logo_coverage)
    }

    /// Box the bare logo is scaled into, before any backdrop is added.
    pub fn logo_size(&self) -> f64 {
        match self.padding {
            PaddingKind::None => self.padded_size(),
            _ => self.padded_size() - 2.0 * f64::from(self.padding_weight),
        }
    }

    /// Check that these options can produce a logo.
    pub fn validate(&self) -> QrLogoResult<()> {
        if self.qr_size == 0 {
            return Err(QrLogoError::validation("qr_size must be > 0"));
        }
        if !self.logo_coverage.is_finite()
            || self.logo_coverage <= 0.0
            || self.logo_coverage > 1.0
        {
            return Err(QrLogoError::validation(format!(
                "logo_coverage must be in (0, 1], got {}",
                self.logo_coverage
            )));
        }
        if self.logo_size() < 1.0 {
            return Err(QrLogoError::validation(format!(
                "padding_weight {} leaves no room for the logo inside {:.1} px",
                self.padding_weight,
                self.padded_size()
            )));
        }
        Ok(())
    }

    /// Return `true` when coverage exceeds [`RECOMMENDED_MAX_COVERAGE`].
    pub fn exceeds_recommended_coverage(&self) -> bool {
        self.logo_coverage > RECOMMENDED_MAX_COVERAGE
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/model.rs"]
mod tests;
