//! Render style selection and localized prompt prefixes.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

use crate::language::Language;

/// Output aesthetic applied as a prompt prefix before image generation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum RenderStyle {
    #[default]
    Photorealistic,
    ConceptArt,
    Blueprint,
}

impl RenderStyle {
    pub const ALL: &'static [RenderStyle] = &[
        RenderStyle::Photorealistic,
        RenderStyle::ConceptArt,
        RenderStyle::Blueprint,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RenderStyle::Photorealistic => "photorealistic",
            RenderStyle::ConceptArt => "concept_art",
            RenderStyle::Blueprint => "blueprint",
        }
    }

    /// Localized prefix prepended to the user's prompt for this style.
    pub fn prompt_prefix(&self, language: Language) -> &'static str {
        match (self, language) {
            (RenderStyle::Photorealistic, Language::En) => "A highly photorealistic image of",
            (RenderStyle::Photorealistic, Language::Ar) => "صورة واقعية للغاية لـ",
            (RenderStyle::ConceptArt, Language::En) => {
                "A piece of digital concept art, with a painterly and artistic style, depicting"
            }
            (RenderStyle::ConceptArt, Language::Ar) => "قطعة فنية رقمية بأسلوب رسم فني، تصور",
            (RenderStyle::Blueprint, Language::En) => {
                "A detailed blueprint-style schematic drawing of"
            }
            (RenderStyle::Blueprint, Language::Ar) => {
                "رسم تخطيطي مفصل بأسلوب المخططات الهندسية لـ"
            }
        }
    }
}

impl fmt::Display for RenderStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for RenderStyle {
    type Err = RenderStyleParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "photorealistic" => Ok(RenderStyle::Photorealistic),
            "concept_art" => Ok(RenderStyle::ConceptArt),
            "blueprint" => Ok(RenderStyle::Blueprint),
            _ => Err(RenderStyleParseError(s.to_string())),
        }
    }
}

#[derive(Debug, Error)]
#[error("Unknown render style: {0}")]
pub struct RenderStyleParseError(String);
