//! Fixed instruction templates for each AI capability.
//!
//! These are the text payloads attached to the image parts of each
//! generation request. Localized where the original flow is bilingual;
//! the report, drawing and view templates are English-only instructions
//! whose output contracts are fixed (Arabic report sections, SVG layers).

use smotion_models::{ElevationView, Language, ViewAngle};

/// Instruction for generating a descriptive prompt from a sketch, with or
/// without a style reference photo.
pub fn prompt_from_sketch(has_reference: bool, language: Language) -> &'static str {
    match (has_reference, language) {
        (true, Language::En) => {
            r#"You are an expert architectural visualizer. Your task is to synthesize two images—an architectural sketch and a style reference photo—into a single, powerful descriptive prompt for an image generation AI.

1.  **Analyze the Sketch:** First, meticulously identify the core architectural elements from the sketch: the building's form, structure, layout, window/door placements, roof type, and key features. This is the structural blueprint.

2.  **Analyze the Reference Photo for its Soul:** This is the most critical step. Go beyond just a surface-level description. You must deeply interpret the *essence* and *atmosphere* of the reference photo. Identify:
    *   **The Mood:** Is it serene, dramatic, cozy, minimalist, opulent, mysterious?
    *   **The Lighting:** Describe its quality (soft, harsh, diffused), its color (warm, cool, golden), and its direction. Is it sunset? Midday? Is it dramatic cinematic lighting?
    *   **The Color Palette:** What are the dominant and accent colors? Are they earthy, monochromatic, vibrant, muted?
    *   **The Materiality & Textures:** What do the surfaces feel like? Identify key textures like smooth polished concrete, rough-hewn stone, gleaming glass, matte finishes, warm wood grains.
    *   **The Environment:** What does the surrounding landscape contribute to the feeling? (e.g., lush greenery, arid desert, dense urban context).

3.  **Synthesize and Generate:** Now, combine your analyses. Write a single, coherent, richly detailed paragraph. The final prompt must describe the building from the **sketch** but as if it were captured through the lens of the **reference photo**. Infuse the architectural description with the mood, lighting, color palette, and textures you extracted from the reference. The goal is a prompt that doesn't just combine features, but merges the structure of one with the soul of the other."#
        }
        (true, Language::Ar) => {
            r#"أنت خبير في التصور المعماري. مهمتك هي دمج صورتين - رسم معماري وصورة مرجعية للنمط - في نص وصفي واحد وقوي لنموذج ذكاء اصطناعي لتوليد الصور.

١. **حلل الرسم المعماري:** أولاً، حدد بدقة العناصر المعمارية الأساسية من الرسم: شكل المبنى، هيكله، مخططه، مواضع النوافذ والأبواب، نوع السقف، والميزات الرئيسية. هذا هو المخطط الهيكلي.

٢. **حلل الصورة المرجعية لاستخلاص روحها:** هذه هي الخطوة الأكثر أهمية. تجاوز الوصف السطحي. يجب عليك تفسير *جوهر* و*أجواء* الصورة المرجعية بعمق. حدد:
    *   **الحالة المزاجية (Mood):** هل هي هادئة، درامية، دافئة، بسيطة، فخمة، غامضة؟
    *   **الإضاءة:** صف جودتها (ناعمة، قاسية، منتشرة)، لونها (دافئة، باردة، ذهبية)، واتجاهها. هل هو غروب الشمس؟ منتصف النهار؟ هل هي إضاءة سينمائية درامية؟
    *   **لوحة الألوان:** ما هي الألوان السائدة والبارزة؟ هل هي ترابية، أحادية اللون، زاهية، باهتة؟
    *   **الخامات والملامس:** كيف تبدو الأسطح؟ حدد الملامس الرئيسية مثل الخرسانة المصقولة الملساء، الحجر الخام، الزجاج اللامع، التشطيبات المطفأة، حبيبات الخشب الدافئة.
    *   **البيئة المحيطة:** كيف تساهم المناظر الطبيعية المحيطة في الشعور العام؟ (مثل: مساحات خضراء مورقة، صحراء قاحلة، سياق حضري كثيف).

٣. **ادمج وأنشئ النص:** الآن، اجمع تحليلاتك. اكتب فقرة واحدة متماسكة وغنية بالتفاصيل. يجب أن يصف النص النهائي المبنى من **الرسم المعماري** ولكن كما لو تم التقاطه من خلال عدسة **الصورة المرجعية**. ادمج الوصف المعماري مع الحالة المزاجية، الإضاءة، لوحة الألوان، والملامس التي استخلصتها من المرجع. الهدف هو إنشاء نص لا يجمع الميزات فحسب، بل يدمج هيكل الأول مع روح الثاني."#
        }
        (false, Language::En) => {
            r#"Analyze this architectural sketch and generate a detailed, descriptive prompt that could be used to create a photorealistic render of it.
Focus on architectural style (e.g., modern, classical, Mediterranean), key structural elements (e.g., roof type, windows, columns, terraces), materials (e.g., stucco, wood, glass),
potential landscaping (e.g., trees, pool, garden), and suggest an ideal lighting and atmosphere (e.g., sunset, bright daylight, dramatic).
The prompt should be a single, coherent paragraph suitable for an image generation AI."#
        }
        (false, Language::Ar) => {
            r#"حلل هذا الرسم المعماري وقم بإنشاء وصف تفصيلي باللغة العربية الفصحى يمكن استخدامه لإنشاء عرض واقعي له.
ركز على الطراز المعماري (مثل: حديث، كلاسيكي، متوسطي)، والعناصر الهيكلية الرئيسية (مثل: نوع السقف، النوافذ، الأعمدة، الشرفات)، والمواد (مثل: الجص، الخشب، الزجاج)،
واقترح تنسيقًا مثاليًا للمناظر الطبيعية (مثل: الأشجار، المسبح، الحديقة)، وإضاءة وجوًا مثاليًا (مثل: غروب الشمس، ضوء النهار الساطع، إضاءة درامية).
يجب أن يكون النص فقرة واحدة متماسكة ومناسبة لنموذج ذكاء اصطناعي لتوليد الصور."#
        }
    }
}

/// Instruction for refining an existing prompt with a user instruction.
pub fn refine_prompt(
    has_reference: bool,
    current_prompt: &str,
    refinement_instruction: &str,
    language: Language,
) -> String {
    match (has_reference, language) {
        (true, Language::En) => format!(
            r#"You are an expert AI assistant specializing in architectural visualization. Your task is to help a user refine a descriptive prompt for creating a photorealistic rendering.

The user has provided four key pieces of information:
1.  An architectural sketch (as an image).
2.  A reference photo for style and mood.
3.  The current descriptive prompt.
4.  A specific instruction for refinement.

Your goal is to intelligently rewrite and enhance the current prompt by incorporating the user's refinement instruction. The new prompt must:
-   Remain a faithful and accurate description of the original architectural sketch's structure and the reference photo's style.
-   Seamlessly integrate the user's request.
-   Be a single, coherent, and richly detailed paragraph.

**Current Prompt:**
"{current_prompt}"

**User's Refinement Instruction:**
"{refinement_instruction}"

Generate only the new, refined prompt text below. Do not include any titles, preambles, or explanations."#
        ),
        (true, Language::Ar) => format!(
            r#"أنت مساعد ذكاء اصطناعي خبير متخصص في التصور المعماري. مهمتك هي مساعدة مستخدم على تحسين نص وصفي لإنشاء عرض واقعي.

قدم المستخدم أربع معلومات رئيسية:
١. رسم معماري (صورة).
٢. صورة مرجعية للنمط والمزاج.
٣. النص الوصفي الحالي.
٤. تعليمة محددة للتحسين.

هدفك هو إعادة كتابة النص الحالي وتحسينه بذكاء من خلال دمج تعليمة التحسين من المستخدم. يجب أن يكون النص الجديد:
- وصفًا دقيقًا ومخلصًا لهيكل الرسم المعماري ونمط الصورة المرجعية.
- يدمج طلب المستخدم بسلاسة.
- فقرة واحدة متماسكة وغنية بالتفاصيل.

**النص الحالي:**
"{current_prompt}"

**تعليمة التحسين من المستخدم:**
"{refinement_instruction}"

أنشئ فقط نص الوصف الجديد والمحسن أدناه. لا تقم بتضمين أي عناوين أو مقدمات أو شروحات."#
        ),
        (false, Language::En) => format!(
            r#"You are an expert AI assistant specializing in architectural visualization. Your task is to help a user refine a descriptive prompt for creating a photorealistic rendering from an architectural sketch.

The user has provided three key pieces of information:
1.  An architectural sketch (as an image).
2.  The current descriptive prompt.
3.  A specific instruction for refinement.

Your goal is to intelligently rewrite and enhance the current prompt by incorporating the user's refinement instruction. The new prompt must:
-   Remain a faithful and accurate description of the original architectural sketch.
-   Seamlessly integrate the user's request. For instance, if the instruction is "add a garden," you should describe a garden that complements the style of the building in the sketch.
-   Be a single, coherent, and richly detailed paragraph.

**Current Prompt:**
"{current_prompt}"

**User's Refinement Instruction:**
"{refinement_instruction}"

Generate only the new, refined prompt text below. Do not include any titles, preambles, or explanations."#
        ),
        (false, Language::Ar) => format!(
            r#"أنت مساعد ذكاء اصطناعي خبير متخصص في التصور المعماري. مهمتك هي مساعدة مستخدم على تحسين نص وصفي لإنشاء عرض واقعي من رسم معماري.

قدم المستخدم ثلاث معلومات رئيسية:
١. رسم معماري (صورة).
٢. النص الوصفي الحالي.
٣. تعليمة محددة للتحسين.

هدفك هو إعادة كتابة النص الحالي وتحسينه بذكاء من خلال دمج تعليمة التحسين من المستخدم. يجب أن يكون النص الجديد:
- وصفًا دقيقًا ومخلصًا للرسم المعماري الأصلي.
- يدمج طلب المستخدم بسلاسة. على سبيل المثال، إذا كانت التعليمة "أضف حديقة"، فيجب عليك وصف حديقة تكمل طراز المبنى في الرسم.
- فقرة واحدة متماسكة وغنية بالتفاصيل.

**النص الحالي:**
"{current_prompt}"

**تعليمة التحسين من المستخدم:**
"{refinement_instruction}"

أنشئ فقط نص الوصف الجديد والمحسن أدناه. لا تقم بتضمين أي عناوين أو مقدمات أو شروحات."#
        ),
    }
}

/// Instruction for suggesting a short animation instruction from a rendered
/// image and its original prompt.
pub fn video_prompt_suggestion(image_prompt: &str, language: Language) -> String {
    match language {
        Language::En => format!(
            r#"Based on the provided image of an architectural scene and its original descriptive prompt, generate a creative and concise instruction for a short video animation (3-5 seconds).
This instruction will be given to another AI to generate the video.

The instruction should describe a single, continuous, and smooth camera movement (like a pan, zoom, or orbit) and can also include subtle ambient animations to bring the scene to life.
The tone should be cinematic and professional.

**Original Image Prompt for context:** "{image_prompt}"

**Example Instructions:**
- "A slow, cinematic pan from left to right, revealing the full expanse of the villa. The water in the pool has gentle ripples."
- "An ultra-smooth, slow zoom into the main entrance, while leaves on the trees sway slightly in a soft breeze."
- "A graceful orbit around the central tower, with clouds drifting slowly in the sky."
- "A person walks slowly from left to right in the background, out of focus."

Now, generate a new instruction for the provided image. Be creative. Output only the instruction text itself, without any preamble or labels."#
        ),
        Language::Ar => format!(
            r#"بناءً على الصورة المقدمة لمشهد معماري والنص الوصفي الأصلي، قم بإنشاء تعليمة إبداعية وموجزة باللغة العربية الفصحى لتحريك فيديو قصير (3-5 ثوانٍ).
سيتم إعطاء هذه التعليمة إلى ذكاء اصطناعي آخر لإنشاء الفيديو.

يجب أن تصف التعليمة حركة كاميرا واحدة ومستمرة وسلسة (مثل المسح البانورامي، أو الزووم، أو الدوران) ويمكن أن تتضمن أيضًا تحريكات محيطية دقيقة لإضفاء الحيوية على المشهد.
يجب أن يكون الأسلوب سينمائيًا واحترافيًا.

**النص الأصلي للصورة للسياق:** "{image_prompt}"

**أمثلة على التعليمات:**
- "مسح سينمائي بطيء من اليسار إلى اليمين، يكشف عن الامتداد الكامل للفيلا. مياه المسبح بها تموجات لطيفة."
- "زووم بطيء فائق النعومة نحو المدخل الرئيسي، بينما تتأرجح أوراق الأشجار قليلاً في نسيم عليل."
- "دوران أنيق حول البرج المركزي، مع سحب تنجرف ببطء في السماء."
- "شخص يمشي ببطء من اليسار إلى اليمين في الخلفية، خارج نطاق التركيز."

الآن، قم بإنشاء تعليمة جديدة للصورة المقدمة. كن مبدعًا. أخرج نص التعليمة فقط، دون أي مقدمات أو تسميات."#
        ),
    }
}

/// Instruction for the two-section Arabic architectural documentation report.
pub fn architectural_report() -> &'static str {
    r####"Analyze the provided architectural sketch (Image 1) and the final photorealistic render (Image 2). Your task is to generate a detailed, structured Architectural Documentation Report based on these images.

**OUTPUT RULES:**
1.  The entire report MUST be in Classical Arabic (العربية الفصحى).
2.  The output must be formatted in Markdown.
3.  The report MUST be divided into exactly two sections, using the specified Arabic headers.

**SECTION 1: Material Specifications**
- The header for this section must be: "### تصنيف الخامات (Material Specifications)"
- Identify the primary finishing materials visible in the photorealistic render (Image 2).
- Classify the material for each of the following surfaces: Façade (الواجهة), Roofing (الأسقف), Flooring (الأرضيات), Interior Walls (الجدران الداخلية), and Windows (النوافذ).
- Suggest a specific type or finish for each material.
- Format this section as a Markdown table with two columns: "السطح" (Surface) and "المادة المقترحة" (Suggested Material).

**SECTION 2: Internal Dimensions**
- The header for this section must be: "### الأبعاد الداخلية (Internal Dimensions)"
- Estimate the internal dimensions (Width, Length, and Ceiling Height) of the main visible spaces.
- All dimensions MUST be provided strictly in centimeters (سم), and must be numbers only.
- Format this section as a Markdown table with four columns: "الفراغ" (Space), "العرض (سم)" (Width cm), "الطول (سم)" (Length cm), and "ارتفاع السقف (سم)" (Ceiling Height cm).

Generate ONLY the Markdown report as specified. Do not include any introductory text, explanations, or concluding remarks outside of the specified format."####
}

/// Instruction for converting a render into one orthographic elevation sketch.
pub fn elevation_sketch(view: ElevationView) -> String {
    format!(
        r#"Analyze the provided architectural render. Your task is to convert it into a clean, technical elevation sketch of the {view} view.

**OUTPUT RULES:**
1.  The output MUST be a valid, self-contained SVG file's code.
2.  Use only black strokes (#000000) with a stroke width of 1.
3.  The SVG MUST have a transparent background. Do not include any <rect> or other shapes for the background.
4.  Do NOT include any fills, colors, shading, textures, or gradients.
5.  The linework must be precise, geometric, and follow architectural drafting standards. Simplify complex organic shapes (like trees) into representative outlines.
6.  Ensure the proportions and key architectural features are accurately represented.
7.  Output ONLY the SVG code, starting with "<svg" and ending with "</svg>".
8.  Do not include any other text, explanations, or markdown formatting like ```svg."#,
        view = view.display_name()
    )
}

/// Instruction for the layered technical front elevation drawing.
pub fn technical_drawing() -> &'static str {
    r#"Analyze the provided architectural render. Your task is to convert it into a professional, technical front elevation drawing.

**OUTPUT RULES:**
1.  The output MUST be a single, valid, self-contained SVG file's code.
2.  Start the output with "<svg" and end it with "</svg>". Do not include any other text, explanations, or markdown formatting.
3.  The SVG MUST have a transparent background.
4.  All geometry MUST be vector paths. Use only black strokes (#000000). Do not use any fills, colors, or gradients.

**SCALE & DIMENSIONS:**
1.  Assume a standard exterior door height is 210cm. Use this as a reference to calibrate the scale of the entire drawing.
2.  Add clear, accurate dimension lines for the overall width, overall height, and the positions and sizes of major openings (windows and doors).
3.  Place dimension text (in cm, without units, e.g., "90") above the dimension lines.
4.  All dimensions must be placed within a dedicated layer.

**LAYERS & LINEWEIGHTS:**
1.  Structure the SVG using <g> elements with specific 'id' attributes to act as layers. The required layers are: 'WALLS', 'WINDOWS', 'DOORS', 'DIMENSIONS'.
2.  Place all primary structural outlines inside `<g id="WALLS">`. Use a stroke-width of "2".
3.  Place all window elements inside `<g id="WINDOWS">`. Use a stroke-width of "1".
4.  Place all door elements inside `<g id="DOORS">`. Use a stroke-width of "1".
5.  Place all dimension lines and text inside `<g id="DIMENSIONS">`. Use a stroke-width of "0.5" and a font-size of "10px".

**LEGEND:**
1.  Do not include a legend or any extra text. Focus only on the drawing and dimensions as specified.

The final output should be a clean, precise, and well-structured SVG that could be imported into CAD or vector illustration software."#
}

/// Instruction for rendering one viewpoint of a single object.
pub fn model_view(view: ViewAngle) -> String {
    format!(
        r#"Analyze the provided image of a single object. Your task is to generate a clean, photorealistic render of this object from a specific viewpoint.

**RULES:**
1.  The object MUST be perfectly centered in the image.
2.  The background MUST be a plain, neutral, light-grey color (#d3d3d3). Do not add any other background elements, shadows on the ground, or reflections.
3.  The lighting MUST be even, diffuse, and studio-like, illuminating the object clearly from all sides without creating harsh shadows on the object itself.
4.  Faithfully reconstruct the object's geometry and texture based on the single image provided. Invent details for sides that are not visible if necessary, keeping them consistent with the visible style.
5.  The output must ONLY be the image. Do not add any text.

Generate the **{view}** view of the object."#,
        view = view.display_name()
    )
}
