//! Keyword-based interior/exterior scene classification.
//!
//! Deliberately crude: a lower-cased substring containment scan over two
//! fixed bilingual keyword lists. No tokenization, no stemming, no negation
//! handling. False positives and negatives are an accepted tradeoff for
//! determinism and zero latency. Both language lists are always scanned,
//! whatever the active locale.

/// Indicator words for interior scenes (English and Arabic).
const INTERIOR_KEYWORDS: &[&str] = &[
    "room",
    "interior",
    "bedroom",
    "reception",
    "hall",
    "غرفة",
    "داخلي",
    "استقبال",
    "قاعة",
];

/// Indicator words for exterior scenes (English and Arabic).
const EXTERIOR_KEYWORDS: &[&str] = &[
    "house",
    "villa",
    "exterior",
    "sky",
    "pool",
    "trees",
    "lakeside",
    "palace",
    "garden",
    "منزل",
    "فيلا",
    "خارجي",
    "سماء",
    "مسبح",
    "أشجار",
    "بحيرة",
    "قصر",
    "حديقة",
];

/// Result of classifying a base prompt.
///
/// A prompt may match both sets (mixed) or neither. Consumers that want a
/// strictly interior treatment must check `is_interior && !is_exterior`;
/// everything else falls back to the exterior branch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SceneClassification {
    pub is_interior: bool,
    pub is_exterior: bool,
}

impl SceneClassification {
    /// Whether the interior-biased phrase set should be used.
    pub fn prefers_interior(&self) -> bool {
        self.is_interior && !self.is_exterior
    }
}

/// Classify a base prompt as interior and/or exterior.
///
/// Total function: absence of any keyword is a valid (exterior-leaning)
/// outcome, not an error.
pub fn classify(base_prompt: &str) -> SceneClassification {
    let lowered = base_prompt.to_lowercase();
    SceneClassification {
        is_interior: INTERIOR_KEYWORDS.iter().any(|k| lowered.contains(k)),
        is_exterior: EXTERIOR_KEYWORDS.iter().any(|k| lowered.contains(k)),
    }
}
