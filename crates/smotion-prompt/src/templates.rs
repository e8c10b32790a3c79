//! The template library: fixed localized phrase fragments.
//!
//! Pure data. Every animation option axis maps to one phrase per locale;
//! the ambient and sound blocks additionally branch on the scene
//! classification. The synthesizer is the only consumer.

use smotion_models::{AnimationLength, CameraMovement, CameraSpeed, CameraTilt, Language};

/// Approximate clip length phrase.
pub fn length_phrase(length: AnimationLength, language: Language) -> &'static str {
    match (length, language) {
        (AnimationLength::Short, Language::En) => "3 seconds",
        (AnimationLength::Short, Language::Ar) => "3 ثوانٍ",
        (AnimationLength::Medium, Language::En) => "5 seconds",
        (AnimationLength::Medium, Language::Ar) => "5 ثوانٍ",
        (AnimationLength::Long, Language::En) => "8 seconds",
        (AnimationLength::Long, Language::Ar) => "8 ثوانٍ",
    }
}

/// Camera movement phrase.
pub fn movement_phrase(movement: CameraMovement, language: Language) -> &'static str {
    match (movement, language) {
        (CameraMovement::Pan, Language::En) => {
            "a slow, steady, and perfectly smooth cinematic pan across the scene"
        }
        (CameraMovement::Pan, Language::Ar) => {
            "مسح بانورامي سينمائي بطيء وثابت وسلس تمامًا عبر المشهد"
        }
        (CameraMovement::Zoom, Language::En) => {
            "an ultra-smooth, slow cinematic zoom, either in or out, with no sudden stops or starts"
        }
        (CameraMovement::Zoom, Language::Ar) => {
            "تقريب سينمائي بطيء فائق النعومة، سواء للداخل أو للخارج، بدون توقفات أو بدايات مفاجئة"
        }
        (CameraMovement::Orbit, Language::En) => {
            "a graceful, slow, and fluid orbit around the primary structure, maintaining a consistent speed"
        }
        (CameraMovement::Orbit, Language::Ar) => {
            "دوران أنيق وبطيء وسلس حول الهيكل الأساسي، مع الحفاظ على سرعة ثابتة"
        }
    }
}

/// Camera pace phrase.
pub fn speed_phrase(speed: CameraSpeed, language: Language) -> &'static str {
    match (speed, language) {
        (CameraSpeed::Slow, Language::En) => "at a very slow, deliberate, and graceful pace",
        (CameraSpeed::Slow, Language::Ar) => "بوتيرة بطيئة جدًا ومدروسة وأنيقة",
        (CameraSpeed::Medium, Language::En) => "at a natural, steady pace",
        (CameraSpeed::Medium, Language::Ar) => "بوتيرة طبيعية وثابتة",
        (CameraSpeed::Fast, Language::En) => {
            "at a slightly faster, more dynamic pace, while remaining perfectly smooth"
        }
        (CameraSpeed::Fast, Language::Ar) => {
            "بوتيرة أسرع قليلاً وأكثر ديناميكية، مع الحفاظ على نعومة تامة"
        }
    }
}

/// Camera tilt phrase. `None` maps to an empty fragment, absorbed by the
/// surrounding sentence rather than marked as an omitted clause.
pub fn tilt_phrase(tilt: CameraTilt, language: Language) -> &'static str {
    match (tilt, language) {
        (CameraTilt::None, _) => "",
        (CameraTilt::Upward, Language::En) => {
            "with a subtle upward tilt, giving a sense of grandeur"
        }
        (CameraTilt::Upward, Language::Ar) => {
            "مع إمالة طفيفة للأعلى، مما يعطي إحساسًا بالفخامة"
        }
        (CameraTilt::Downward, Language::En) => {
            "with a subtle downward tilt, as if observing from a higher vantage point"
        }
        (CameraTilt::Downward, Language::Ar) => {
            "مع إمالة طفيفة للأسفل، كأنما تتم المراقبة من نقطة مراقبة أعلى"
        }
    }
}

/// Ambient-motion paragraph, branched on the scene classification.
pub fn ambient_effects_paragraph(interior: bool, language: Language) -> &'static str {
    match (interior, language) {
        (true, Language::En) => {
            "Animate the interior space with extremely subtle and realistic details to enhance realism. Dust motes might drift lazily in sunbeams. If a television or screen is visible, it should display softly glowing, slowly changing content. If a person is present, they should perform a simple, slow, natural background action, like turning a page or gently walking, ensuring they are not the primary focus. All architectural elements like walls and furniture must remain absolutely static."
        }
        (true, Language::Ar) => {
            "قم بتحريك المساحة الداخلية بتفاصيل دقيقة وواقعية للغاية لتعزيز الواقعية. قد تنجرف ذرات الغبار ببطء في أشعة الشمس. إذا كان هناك تلفزيون أو شاشة مرئية، فيجب أن تعرض محتوى متوهجًا بهدوء ومتغيرًا ببطء. إذا كان هناك شخص، فيجب أن يقوم بعمل خلفي بسيط وبطيء وطبيعي، مثل قلب صفحة أو المشي بلطف، مع التأكد من أنه ليس التركيز الأساسي. يجب أن تظل جميع العناصر المعمارية مثل الجدران والأثاث ثابتة تمامًا."
        }
        (false, Language::En) => {
            "Animate ambient elements with extremely smooth, slow, and natural movement to create a serene atmosphere. Clouds should drift at a glacial pace across the sky. Foliage like tree leaves and plants should sway gently as if in a light breeze. If people are present, they should walk at a relaxed, natural pace in the background. If there is water (like a pool or lake), it should have gentle, realistic ripples, not large waves. Crucially, all buildings and architectural structures must remain completely static and unmoving."
        }
        (false, Language::Ar) => {
            "قم بتحريك العناصر المحيطة بحركة فائقة النعومة والبطء والطبيعية لخلق جو هادئ. يجب أن تنجرف السحب بوتيرة جليدية عبر السماء. يجب أن تتأرجح أوراق الشجر والنباتات بلطف كما لو كانت في نسيم خفيف. إذا كان هناك أشخاص، فيجب أن يسيروا بوتيرة مريحة وطبيعية في الخلفية. إذا كان هناك ماء (مثل مسبح أو بحيرة)، فيجب أن يكون به تموجات لطيفة وواقعية، وليست أمواجًا كبيرة. بشكل حاسم، يجب أن تظل جميع المباني والهياكل المعمارية ثابتة تمامًا وغير متحركة."
        }
    }
}

/// Diegetic-audio paragraph, branched on the scene classification.
pub fn ambient_sound_paragraph(interior: bool, language: Language) -> &'static str {
    match (interior, language) {
        (true, Language::En) => {
            "The video must include subtle, high-quality, and realistic diegetic audio. Generate an appropriate interior room tone, such as the faint hum of ventilation or distant, muffled city sounds. The sound should enhance the feeling of presence and realism without being distracting."
        }
        (true, Language::Ar) => {
            "يجب أن يتضمن الفيديو صوتًا واقعيًا خفيًا وعالي الجودة. قم بإنشاء نغمة غرفة داخلية مناسبة، مثل همهمة خافتة للتهوية أو أصوات مدينة بعيدة ومكتومة. يجب أن يعزز الصوت الشعور بالوجود والواقعية دون تشتيت الانتباه."
        }
        (false, Language::En) => {
            "The video must include subtle, high-quality, and realistic diegetic audio. Based on the scene, generate appropriate ambient sounds like the gentle rustling of leaves, distant birds, a soft breeze, or the gentle lapping of water. The sound should be natural and immersive, enhancing the atmosphere."
        }
        (false, Language::Ar) => {
            "يجب أن يتضمن الفيديو صوتًا واقعيًا خفيًا وعالي الجودة. بناءً على المشهد، قم بإنشاء أصوات محيطة مناسبة مثل حفيف أوراق الشجر اللطيف، أو طيور بعيدة، أو نسيم ناعم، أو تلاطم المياه اللطيف. يجب أن يكون الصوت طبيعيًا وغامرًا، مما يعزز الجو العام."
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tilt_none_is_empty_both_locales() {
        assert_eq!(tilt_phrase(CameraTilt::None, Language::En), "");
        assert_eq!(tilt_phrase(CameraTilt::None, Language::Ar), "");
    }

    #[test]
    fn test_expected_english_fragments() {
        assert_eq!(length_phrase(AnimationLength::Medium, Language::En), "5 seconds");
        assert_eq!(
            movement_phrase(CameraMovement::Pan, Language::En),
            "a slow, steady, and perfectly smooth cinematic pan across the scene"
        );
        assert_eq!(
            speed_phrase(CameraSpeed::Medium, Language::En),
            "at a natural, steady pace"
        );
    }

    #[test]
    fn test_every_non_none_fragment_nonempty() {
        for language in [Language::En, Language::Ar] {
            for l in AnimationLength::ALL {
                assert!(!length_phrase(*l, language).is_empty());
            }
            for m in CameraMovement::ALL {
                assert!(!movement_phrase(*m, language).is_empty());
            }
            for s in CameraSpeed::ALL {
                assert!(!speed_phrase(*s, language).is_empty());
            }
            for interior in [true, false] {
                assert!(!ambient_effects_paragraph(interior, language).is_empty());
                assert!(!ambient_sound_paragraph(interior, language).is_empty());
            }
        }
    }
}
