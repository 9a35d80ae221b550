use crate::{
    foundation::{color::Color, error::QrLogoResult},
    options::model::LogoOptions,
    padding::kind::PaddingKind,
};

/// Accumulates option overrides on top of [`LogoOptions::default`].
#[derive(Clone, Debug, Default)]
pub struct LogoOptionsBuilder {
    opts: LogoOptions,
}

impl LogoOptionsBuilder {
    /// Builder seeded with [`LogoOptions::default`].
    pub fn new() -> Self {
        Self::default()
    }

    /// Continue from existing options, e.g. ones loaded from JSON.
    pub fn from_options(opts: LogoOptions) -> Self {
        Self { opts }
    }

    /// Light module and backdrop colour.
    pub fn background(mut self, color: Color) -> Self {
        self.opts.background = color;
        self
    }

    /// Dark module colour.
    pub fn code_color(mut self, color: Color) -> Self {
        self.opts.code_color = color;
        self
    }

    /// Drop the quiet zone around the code.
    pub fn disable_border(mut self, disable: bool) -> Self {
        self.opts.disable_border = disable;
        self
    }

    /// Fraction of the code area to cover. Values above 0.3 risk an unreadable code.
    pub fn logo_coverage(mut self, coverage: f64) -> Self {
        self.opts.logo_coverage = coverage;
        self
    }

    /// Backdrop kind.
    pub fn padding(mut self, kind: PaddingKind) -> Self {
        self.opts.padding = kind;
        self
    }

    /// Backdrop margin in pixels.
    pub fn padding_weight(mut self, weight: u32) -> Self {
        self.opts.padding_weight = weight;
        self
    }

    /// Output side length in pixels.
    pub fn qr_size(mut self, size: u32) -> Self {
        self.opts.qr_size = size;
        self
    }

    /// Validate and return the options.
    pub fn build(self) -> QrLogoResult<LogoOptions> {
        self.opts.validate()?;
        Ok(self.opts)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/options/builder.rs"]
mod tests;
