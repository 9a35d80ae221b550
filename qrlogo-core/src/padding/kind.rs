use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

use crate::foundation::error::QrLogoError;

/// Backdrop drawn behind the logo so it stands out from the code modules.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum PaddingKind {
    /// Logo scaled to the full padded size, no backdrop.
    None,
    /// Solid square of the background colour.
    Square,
    /// Solid disc of the background colour.
    Circle,
    /// Backdrop tracing the logo's own silhouette, grown by the padding weight.
    #[default]
    Dilate,
}

impl PaddingKind {
    /// Every accepted kind, in CLI help order.
    pub const ALL: [PaddingKind; 4] = [Self::None, Self::Square, Self::Circle, Self::Dilate];

    /// Lowercase name used on the command line and in JSON.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::None => "none",
            Self::Square => "square",
            Self::Circle => "circle",
            Self::Dilate => "dilate",
        }
    }
}

impl FromStr for PaddingKind {
    type Err = QrLogoError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| QrLogoError::unknown_padding(s))
    }
}

impl TryFrom<String> for PaddingKind {
    type Error = QrLogoError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<PaddingKind> for String {
    fn from(kind: PaddingKind) -> Self {
        kind.as_str().to_owned()
    }
}

impl fmt::Display for PaddingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
#[path = "../../tests/unit/padding/kind.rs"]
mod tests;
