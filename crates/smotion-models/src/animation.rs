//! Animation option axes for video generation.
//!
//! Each axis is a closed enum; the prompt synthesizer maps every value to a
//! fixed localized phrase, so no other values are meaningful.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::presets::VideoStylePreset;

/// Approximate clip length requested from the video model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AnimationLength {
    Short,
    #[default]
    Medium,
    Long,
}

impl AnimationLength {
    pub const ALL: &'static [AnimationLength] = &[
        AnimationLength::Short,
        AnimationLength::Medium,
        AnimationLength::Long,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            AnimationLength::Short => "short",
            AnimationLength::Medium => "medium",
            AnimationLength::Long => "long",
        }
    }
}

impl fmt::Display for AnimationLength {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for AnimationLength {
    type Err = AnimationOptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "short" => Ok(AnimationLength::Short),
            "medium" => Ok(AnimationLength::Medium),
            "long" => Ok(AnimationLength::Long),
            _ => Err(AnimationOptionParseError::new("length", s)),
        }
    }
}

/// Primary camera movement for the animation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraMovement {
    #[default]
    Pan,
    Zoom,
    Orbit,
}

impl CameraMovement {
    pub const ALL: &'static [CameraMovement] = &[
        CameraMovement::Pan,
        CameraMovement::Zoom,
        CameraMovement::Orbit,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraMovement::Pan => "pan",
            CameraMovement::Zoom => "zoom",
            CameraMovement::Orbit => "orbit",
        }
    }
}

impl fmt::Display for CameraMovement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CameraMovement {
    type Err = AnimationOptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pan" => Ok(CameraMovement::Pan),
            "zoom" => Ok(CameraMovement::Zoom),
            "orbit" => Ok(CameraMovement::Orbit),
            _ => Err(AnimationOptionParseError::new("movement", s)),
        }
    }
}

/// Camera movement pace.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraSpeed {
    Slow,
    #[default]
    Medium,
    Fast,
}

impl CameraSpeed {
    pub const ALL: &'static [CameraSpeed] =
        &[CameraSpeed::Slow, CameraSpeed::Medium, CameraSpeed::Fast];

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraSpeed::Slow => "slow",
            CameraSpeed::Medium => "medium",
            CameraSpeed::Fast => "fast",
        }
    }
}

impl fmt::Display for CameraSpeed {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CameraSpeed {
    type Err = AnimationOptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "slow" => Ok(CameraSpeed::Slow),
            "medium" => Ok(CameraSpeed::Medium),
            "fast" => Ok(CameraSpeed::Fast),
            _ => Err(AnimationOptionParseError::new("speed", s)),
        }
    }
}

/// Optional vertical camera tilt.
///
/// `None` maps to an empty phrase fragment in the synthesizer, not to an
/// omitted clause marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum CameraTilt {
    #[default]
    None,
    Upward,
    Downward,
}

impl CameraTilt {
    pub const ALL: &'static [CameraTilt] =
        &[CameraTilt::None, CameraTilt::Upward, CameraTilt::Downward];

    pub fn as_str(&self) -> &'static str {
        match self {
            CameraTilt::None => "none",
            CameraTilt::Upward => "upward",
            CameraTilt::Downward => "downward",
        }
    }
}

impl fmt::Display for CameraTilt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CameraTilt {
    type Err = AnimationOptionParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "none" => Ok(CameraTilt::None),
            "upward" => Ok(CameraTilt::Upward),
            "downward" => Ok(CameraTilt::Downward),
            _ => Err(AnimationOptionParseError::new("tilt", s)),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown animation {axis}: {value}")]
pub struct AnimationOptionParseError {
    axis: &'static str,
    value: String,
}

impl AnimationOptionParseError {
    fn new(axis: &'static str, value: &str) -> Self {
        Self {
            axis,
            value: value.to_string(),
        }
    }
}

/// The full bundle of user-chosen animation axes.
///
/// Fully determined before being passed once into the prompt synthesizer;
/// immutable for the duration of one generation call.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnimationOptions {
    pub length: AnimationLength,
    pub movement: CameraMovement,
    /// Animate ambient scene elements (clouds, foliage, water, people).
    pub ambient_effects: bool,
    /// Request diegetic audio matching the scene.
    pub ambient_sound: bool,
    /// Free-text animation instruction, embedded verbatim when non-empty.
    pub instruction: String,
    /// Name of a video style preset; unknown names contribute no style clause.
    pub video_style: String,
    pub speed: CameraSpeed,
    pub tilt: CameraTilt,
    /// Subject the camera should highlight, embedded verbatim when non-empty.
    pub focus_subject: String,
}

impl Default for AnimationOptions {
    fn default() -> Self {
        Self {
            length: AnimationLength::Medium,
            movement: CameraMovement::Pan,
            ambient_effects: true,
            ambient_sound: true,
            instruction: String::new(),
            video_style: VideoStylePreset::ALL[0].name.to_string(),
            speed: CameraSpeed::Medium,
            tilt: CameraTilt::None,
            focus_subject: String::new(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_axis_parse() {
        assert_eq!("pan".parse::<CameraMovement>().unwrap(), CameraMovement::Pan);
        assert_eq!("LONG".parse::<AnimationLength>().unwrap(), AnimationLength::Long);
        assert_eq!("downward".parse::<CameraTilt>().unwrap(), CameraTilt::Downward);
        assert!("dolly".parse::<CameraMovement>().is_err());
    }

    #[test]
    fn test_defaults_match_ui() {
        let opts = AnimationOptions::default();
        assert_eq!(opts.length, AnimationLength::Medium);
        assert_eq!(opts.movement, CameraMovement::Pan);
        assert!(opts.ambient_effects);
        assert!(opts.ambient_sound);
        assert_eq!(opts.tilt, CameraTilt::None);
        assert_eq!(opts.video_style, "Cinematic");
    }

    #[test]
    fn test_serde_snake_case() {
        assert_eq!(serde_json::to_string(&CameraTilt::Upward).unwrap(), "\"upward\"");
    }
}
