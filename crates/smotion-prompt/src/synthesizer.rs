//! Video prompt synthesis.
//!
//! Deterministically assembles the full natural-language instruction for a
//! video-generation request from the base prompt, the animation options and
//! the active locale. Pure function: identical inputs always produce an
//! identical string.

use smotion_models::{AnimationOptions, Language, VideoStylePreset};

use crate::classifier::classify;
use crate::templates::{
    ambient_effects_paragraph, ambient_sound_paragraph, length_phrase, movement_phrase,
    speed_phrase, tilt_phrase,
};

/// Build the complete video-generation instruction.
///
/// Fragment order is fixed: intro + length + style, movement + speed + tilt,
/// focus, ambient, sound, custom instruction, then a closing clause embedding
/// the original base prompt verbatim for traceability. Empty optional clauses
/// contribute empty substitutions; the surrounding sentence absorbs them.
pub fn build_video_prompt(
    base_prompt: &str,
    options: &AnimationOptions,
    language: Language,
) -> String {
    let length = length_phrase(options.length, language);
    let movement = movement_phrase(options.movement, language);
    let speed = speed_phrase(options.speed, language);
    let tilt = tilt_phrase(options.tilt, language);
    let style_keywords = VideoStylePreset::keywords_for(&options.video_style);

    // The ambient and sound blocks each run their own classification, which
    // is idempotent on identical input.
    let ambient = if options.ambient_effects {
        let interior = classify(base_prompt).prefers_interior();
        ambient_effects_paragraph(interior, language)
    } else {
        ""
    };
    let sound = if options.ambient_sound {
        let interior = classify(base_prompt).prefers_interior();
        ambient_sound_paragraph(interior, language)
    } else {
        ""
    };

    let style_clause = style_clause(style_keywords, language);
    let focus_clause = focus_clause(options.focus_subject.trim(), language);
    let custom_clause = custom_clause(options.instruction.trim(), language);

    match language {
        Language::En => format!(
            "Generate a high-fidelity, photorealistic video animation based on the provided image, \
             approximately {length} long. {style_clause} The camera movement should be {movement}, \
             moving {speed} {tilt}. Prioritize absolute smoothness and fluidity in all motion; all \
             camera motion must be completely free of any jarring, sudden, or unnatural changes in \
             speed or direction. {focus_clause} {ambient} {sound} {custom_clause} The final output \
             must be a seamless, graceful, and professional-quality video. Original architectural \
             prompt for context: {base_prompt}"
        ),
        Language::Ar => format!(
            "قم بإنشاء فيديو تحريك واقعي وعالي الدقة بناءً على الصورة المقدمة، بطول تقريبي {length}. \
             {style_clause} يجب أن تكون حركة الكاميرا {movement}، تتحرك {speed} {tilt}. أعط الأولوية \
             للنعومة والسلاسة المطلقة في كل حركة؛ يجب أن تكون كل حركة للكاميرا خالية تمامًا من أي \
             تغييرات مزعجة أو مفاجئة أو غير طبيعية في السرعة أو الاتجاه. {focus_clause} {ambient} \
             {sound} {custom_clause} يجب أن يكون الإخراج النهائي فيديو سلسًا وأنيقًا وبجودة احترافية. \
             النص المعماري الأصلي للسياق: {base_prompt}"
        ),
    }
}

fn style_clause(keywords: &str, language: Language) -> String {
    if keywords.is_empty() {
        return String::new();
    }
    match language {
        Language::En => format!("The video should have the following style: {keywords}."),
        Language::Ar => format!("يجب أن يكون للفيديو النمط التالي: {keywords}."),
    }
}

fn focus_clause(focus_subject: &str, language: Language) -> String {
    if focus_subject.is_empty() {
        return String::new();
    }
    match language {
        Language::En => format!(
            "The primary subject of focus for the camera movement should be \"{focus_subject}\". \
             Ensure this subject is highlighted gracefully."
        ),
        Language::Ar => format!(
            "يجب أن يكون موضوع التركيز الأساسي لحركة الكاميرا هو \"{focus_subject}\". تأكد من إبراز \
             هذا الموضوع بأناقة."
        ),
    }
}

fn custom_clause(instruction: &str, language: Language) -> String {
    if instruction.is_empty() {
        return String::new();
    }
    match language {
        Language::En => format!(
            "Incorporate these specific user instructions for the animation: \"{instruction}\"."
        ),
        Language::Ar => {
            format!("قم بتضمين هذه التعليمات المحددة من المستخدم للتحريك: \"{instruction}\".")
        }
    }
}
