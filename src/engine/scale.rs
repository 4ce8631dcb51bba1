use std::{fmt, str::FromStr};

use crate::{
    foundation::core::Rect,
    foundation::error::{KenBurnsError, KenBurnsResult},
    geometry::rects::{center_crop_into, fit_center_into},
};

/// How a crop rect whose shape differs from the viewport is fitted to it.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum ScaleMode {
    /// Cover the whole viewport, cropping the overflowing axis.
    #[default]
    CenterCrop,
    /// Show the whole crop rect, letterboxing the short axis.
    FitCenter,
}

impl ScaleMode {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::CenterCrop => "CENTER_CROP",
            Self::FitCenter => "FIT_CENTER",
        }
    }

    /// Multiplier applied on top of the width-matching scale for content of
    /// `content_aspect` shown in `viewport`.
    pub fn multiplier(self, viewport: Rect, content_aspect: f64) -> KenBurnsResult<f64> {
        match self {
            Self::CenterCrop => center_crop_into(viewport, content_aspect),
            Self::FitCenter => fit_center_into(viewport, content_aspect),
        }
    }
}

impl fmt::Display for ScaleMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleMode {
    type Err = KenBurnsError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key: String = s
            .trim()
            .chars()
            .filter(|c| !matches!(c, '_' | '-' | ' '))
            .map(|c| c.to_ascii_lowercase())
            .collect();
        match key.as_str() {
            "centercrop" => Ok(Self::CenterCrop),
            "fitcenter" => Ok(Self::FitCenter),
            _ => Err(KenBurnsError::unsupported_scale_mode(s.trim())),
        }
    }
}

impl TryFrom<String> for ScaleMode {
    type Error = KenBurnsError;

    fn try_from(s: String) -> Result<Self, Self::Error> {
        s.parse()
    }
}

impl From<ScaleMode> for String {
    fn from(mode: ScaleMode) -> Self {
        mode.as_str().to_string()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/engine/scale.rs"]
mod tests;
