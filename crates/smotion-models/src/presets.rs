//! Static preset tables.
//!
//! Pure data: video style presets used by the prompt synthesizer, interior
//! style keyword presets, and canned scene prompts offered by the editor.

/// A named video aesthetic mapped to prompt keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoStylePreset {
    pub name: &'static str,
    pub keywords: &'static str,
}

impl VideoStylePreset {
    pub const ALL: &'static [VideoStylePreset] = &[
        VideoStylePreset {
            name: "Cinematic",
            keywords: "cinematic style, dramatic lighting, high contrast, film grain, professional color grading",
        },
        VideoStylePreset {
            name: "Documentary",
            keywords: "stable camera, realistic and natural lighting, steady shot, documentary feel",
        },
        VideoStylePreset {
            name: "Abstract",
            keywords: "artistic, abstract, experimental camera work, unusual angles, creative transitions",
        },
        VideoStylePreset {
            name: "Slow Motion",
            keywords: "ultra slow motion, capturing subtle details, graceful and fluid movement",
        },
    ];

    /// Look up a preset by its display name.
    pub fn find(name: &str) -> Option<&'static VideoStylePreset> {
        Self::ALL.iter().find(|p| p.name == name)
    }

    /// Keywords for a named preset, or an empty string for unknown names.
    pub fn keywords_for(name: &str) -> &'static str {
        Self::find(name).map(|p| p.keywords).unwrap_or("")
    }
}

/// A named interior/architecture style mapped to descriptive keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StylePreset {
    pub name: &'static str,
    pub keywords: &'static str,
}

impl StylePreset {
    pub const ALL: &'static [StylePreset] = &[
        StylePreset {
            name: "Minimalist Modern",
            keywords: "clean lines, neutral color palette (whites, greys, blacks), simple geometric forms, large glass windows, uncluttered spaces, natural light, minimalist furniture, raw materials like concrete and steel",
        },
        StylePreset {
            name: "Rustic Charm",
            keywords: "natural wood beams, stone walls, warm and earthy tones, cozy fireplace, handcrafted furniture, vintage decor, exposed brick, comfortable textiles like wool and linen",
        },
        StylePreset {
            name: "Art Deco Luxury",
            keywords: "bold geometric patterns, rich colors (deep blues, greens, gold), metallic accents (brass, chrome), luxurious materials like marble and velvet, symmetrical designs, glamorous lighting fixtures, polished wood",
        },
        StylePreset {
            name: "Coastal Beach House",
            keywords: "light and airy, white and blue color scheme, natural materials like rattan and light wood, large windows with ocean views, comfortable and casual furniture, nautical decor, sheer curtains",
        },
        StylePreset {
            name: "Futuristic High-Tech",
            keywords: "sleek metallic surfaces, integrated smart technology, holographic displays, minimalist design with glowing LED light strips, fluid and organic shapes, automated features, chrome and glass materials",
        },
    ];

    pub fn find(name: &str) -> Option<&'static StylePreset> {
        Self::ALL.iter().find(|p| p.name == name)
    }
}

/// A canned scene prompt the editor can offer as a starting point.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScenePreset {
    pub name: &'static str,
    pub prompt: &'static str,
}

impl ScenePreset {
    pub const ALL: &'static [ScenePreset] = &[
        ScenePreset {
            name: "scene_preset_cozy_cabin",
            prompt: "A cozy, rustic log cabin nestled deep in a pine forest during autumn. Smoke curls gently from a stone chimney. The cabin has warm, glowing windows, a small porch with a wooden chair, and is surrounded by trees with vibrant orange and yellow leaves. A narrow dirt path leads to the front door. The scene is set during a misty morning, with soft, diffused sunlight filtering through the trees, creating a peaceful and serene atmosphere. Photorealistic, detailed, high resolution.",
        },
        ScenePreset {
            name: "scene_preset_futuristic_city",
            prompt: "A sprawling, high-tech futuristic cityscape at night. Soaring skyscrapers with holographic advertisements and neon lights illuminate the scene. Flying vehicles streak across the sky between the buildings. The city is built on multiple levels with sky-bridges connecting towers. Below, bustling streets are filled with people and robotic assistants. The color palette is dominated by deep blues, purples, and vibrant neon pinks and cyans. Cinematic, dynamic, highly detailed, Blade Runner aesthetic.",
        },
        ScenePreset {
            name: "scene_preset_tropical_beach",
            prompt: "A luxurious, modern villa on a serene tropical beach. The villa is made of white concrete, glass, and dark wood, featuring an infinity pool that blends seamlessly with the turquoise ocean. White sand beach with lush palm trees and tropical plants surrounds the property. The sky is clear blue with a few wispy clouds, and the sun is bright, casting sharp, clear shadows. The atmosphere is tranquil, luxurious, and idyllic. Photorealistic, 8k, ultra-detailed.",
        },
        ScenePreset {
            name: "scene_preset_victorian_mansion",
            prompt: "A grand, slightly mysterious Victorian mansion at dusk. The mansion is ornate, with a mansard roof, intricate woodwork, large bay windows, and a wraparound porch. It is surrounded by an old, wrought-iron fence and a slightly overgrown garden with large, ancient oak trees. The sky is a deep twilight purple, and a full moon is beginning to rise. A few windows are lit from within, casting a warm but lonely glow. The mood is atmospheric, gothic, and slightly eerie. Highly detailed, realistic textures.",
        },
    ];

    pub fn find(name: &str) -> Option<&'static ScenePreset> {
        Self::ALL.iter().find(|p| p.name == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_video_style_lookup() {
        assert!(VideoStylePreset::find("Cinematic").is_some());
        assert!(VideoStylePreset::find("Vaporwave").is_none());
        assert!(VideoStylePreset::keywords_for("Documentary").contains("documentary feel"));
        assert_eq!(VideoStylePreset::keywords_for("Vaporwave"), "");
    }

    #[test]
    fn test_preset_tables_nonempty() {
        assert_eq!(VideoStylePreset::ALL.len(), 4);
        assert_eq!(StylePreset::ALL.len(), 5);
        assert_eq!(ScenePreset::ALL.len(), 4);
    }
}
