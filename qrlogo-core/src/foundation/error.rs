/// Convenience result type used across qrlogo.
pub type QrLogoResult<T> = Result<T, QrLogoError>;

/// Top-level error taxonomy used by the library APIs.
#[derive(thiserror::Error, Debug)]
pub enum QrLogoError {
    /// Logo bytes could not be decoded as a raster image.
    #[error("decode error: {0}")]
    Decode(String),

    /// Padding name outside `none`, `square`, `circle` and `dilate`.
    #[error("unknown padding type '{0}' (expected none, square, circle or dilate)")]
    UnknownPadding(String),

    /// The QR encoder rejected the payload.
    #[error("encode error: {0}")]
    Encode(String),

    /// Option values that cannot produce a logo.
    #[error("validation error: {0}")]
    Validation(String),

    /// Errors when serializing or deserializing options.
    #[error("serialization error: {0}")]
    Serde(String),

    /// Wrapped lower-level error from dependencies or IO.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl QrLogoError {
    /// Build a [`QrLogoError::Decode`] value.
    pub fn decode(msg: impl Into<String>) -> Self {
        Self::Decode(msg.into())
    }

    /// Build a [`QrLogoError::UnknownPadding`] value.
    pub fn unknown_padding(name: impl Into<String>) -> Self {
        Self::UnknownPadding(name.into())
    }

    /// Build a [`QrLogoError::Encode`] value.
    pub fn encode(msg: impl Into<String>) -> Self {
        Self::Encode(msg.into())
    }

    /// Build a [`QrLogoError::Validation`] value.
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Build a [`QrLogoError::Serde`] value.
    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/error.rs"]
mod tests;
