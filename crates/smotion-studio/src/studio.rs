//! Generation orchestrator: one async operation per AI capability.

use std::path::PathBuf;

use futures::future::try_join_all;
use tracing::{debug, info, warn};
use uuid::Uuid;

use smotion_gemini::wire::Part;
use smotion_gemini::{GeminiClient, GeminiError};
use smotion_models::{
    ElevationSketchSet, ElevationView, InlineImage, Language, ModelViews, RenderStyle, ViewAngle,
};
use smotion_prompt::instructions;

use crate::cancel::CancelSignal;
use crate::config::StudioConfig;
use crate::error::{StudioError, StudioResult};
use crate::svg::validate_svg;

/// The generation orchestrator.
///
/// Owns the Gemini client and exposes one async operation per capability.
/// Operations validate inputs locally before any network call, fan out
/// multi-image generations all-or-nothing, and keep quota exhaustion
/// distinguishable from other failures.
pub struct Studio {
    config: StudioConfig,
    client: GeminiClient,
}

impl Studio {
    pub fn new(config: StudioConfig) -> Self {
        let client = GeminiClient::new(config.gemini.clone());
        Self { config, client }
    }

    /// Create a studio configured from environment variables.
    pub fn from_env() -> StudioResult<Self> {
        Ok(Self::new(StudioConfig::from_env()?))
    }

    pub fn config(&self) -> &StudioConfig {
        &self.config
    }

    /// Describe a sketch (optionally guided by a style reference photo) as a
    /// generation-ready prompt.
    pub async fn generate_prompt_from_sketch(
        &self,
        sketch: &InlineImage,
        reference: Option<&InlineImage>,
        language: Language,
    ) -> StudioResult<String> {
        let mut parts = vec![Part::image(sketch)];
        if let Some(reference) = reference {
            parts.push(Part::image(reference));
        }
        parts.push(Part::text(instructions::prompt_from_sketch(
            reference.is_some(),
            language,
        )));

        info!("Generating prompt from sketch (reference: {})", reference.is_some());
        let text = self
            .client
            .generate_text(&self.config.gemini.text_model, parts)
            .await?;
        Ok(text)
    }

    /// Rewrite an existing prompt according to a refinement instruction.
    pub async fn refine_prompt(
        &self,
        sketch: &InlineImage,
        reference: Option<&InlineImage>,
        current_prompt: &str,
        instruction: &str,
        language: Language,
    ) -> StudioResult<String> {
        if current_prompt.trim().is_empty() {
            return Err(StudioError::missing_input("current prompt"));
        }
        if instruction.trim().is_empty() {
            return Err(StudioError::missing_input("refinement instruction"));
        }

        let mut parts = vec![Part::image(sketch)];
        if let Some(reference) = reference {
            parts.push(Part::image(reference));
        }
        parts.push(Part::text(instructions::refine_prompt(
            reference.is_some(),
            current_prompt.trim(),
            instruction.trim(),
            language,
        )));

        let text = self
            .client
            .generate_text(&self.config.gemini.text_model, parts)
            .await?;
        Ok(text)
    }

    /// Generate `count` render variants of the sketch, all-or-nothing, in
    /// request order. Returns data URLs.
    pub async fn generate_render_variants(
        &self,
        sketch: &InlineImage,
        reference: Option<&InlineImage>,
        prompt: &str,
        style: RenderStyle,
        language: Language,
        count: usize,
    ) -> StudioResult<Vec<String>> {
        if prompt.trim().is_empty() {
            return Err(StudioError::missing_input("prompt"));
        }
        if count == 0 {
            return Err(StudioError::missing_input("variant count"));
        }

        let full_prompt = format!("{} {}", style.prompt_prefix(language), prompt.trim());
        info!("Generating {} render variant(s), style {}", count, style);

        let calls = (0..count).map(|i| {
            let full_prompt = full_prompt.clone();
            async move {
                let mut parts = vec![Part::image(sketch)];
                if let Some(reference) = reference {
                    parts.push(Part::image(reference));
                }
                parts.push(Part::text(full_prompt));
                debug!("Render variant {} dispatched", i);
                self.client
                    .generate_image(&self.config.gemini.image_model, parts)
                    .await
            }
        });

        let images = try_join_all(calls).await?;
        Ok(images.iter().map(InlineImage::to_data_url).collect())
    }

    /// Animate a rendered image according to an already-synthesized video
    /// prompt. Polls the long-running operation until done, downloads the
    /// result and writes it under the output directory.
    pub async fn generate_animation_video(
        &self,
        image: &InlineImage,
        video_prompt: &str,
        cancel: &CancelSignal,
    ) -> StudioResult<PathBuf> {
        if video_prompt.trim().is_empty() {
            return Err(StudioError::missing_input("video prompt"));
        }

        let operation = self
            .client
            .start_video(&self.config.gemini.video_model, video_prompt, image)
            .await?;
        info!("Video operation {} started", operation.name);

        let status = loop {
            tokio::select! {
                _ = cancel.cancelled() => {
                    info!("Video operation {} cancelled", operation.name);
                    return Err(StudioError::Cancelled);
                }
                _ = tokio::time::sleep(self.config.poll_interval) => {}
            }

            let status = self.client.poll_video(&operation).await?;
            if status.done {
                break status;
            }
            debug!("Video operation {} still running", operation.name);
        };

        if let Some(error) = status.error {
            warn!("Video operation failed: {}", error.message);
            return Err(GeminiError::OperationFailed(error.message).into());
        }
        let uri = status
            .download_uri()
            .ok_or(GeminiError::MissingDownloadLink)?;

        let bytes = self.client.download_video(uri).await?;

        tokio::fs::create_dir_all(&self.config.output_dir).await?;
        let path = self
            .config
            .output_dir
            .join(format!("animation-{}.mp4", Uuid::new_v4()));
        tokio::fs::write(&path, &bytes).await?;
        info!("Video written to {}", path.display());
        Ok(path)
    }

    /// Suggest a short animation instruction for a rendered image.
    pub async fn suggest_video_prompt(
        &self,
        image: &InlineImage,
        original_prompt: &str,
        language: Language,
    ) -> StudioResult<String> {
        let parts = vec![
            Part::image(image),
            Part::text(instructions::video_prompt_suggestion(
                original_prompt,
                language,
            )),
        ];
        let text = self
            .client
            .generate_text(&self.config.gemini.text_model, parts)
            .await?;
        Ok(text)
    }

    /// Generate the two-section Arabic documentation report comparing the
    /// sketch with the final render. Returns Markdown.
    pub async fn generate_architectural_report(
        &self,
        sketch: &InlineImage,
        render_data_url: &str,
    ) -> StudioResult<String> {
        let render = InlineImage::from_data_url(render_data_url).map_err(GeminiError::from)?;
        let parts = vec![
            Part::image(sketch),
            Part::image(&render),
            Part::text(instructions::architectural_report()),
        ];
        let text = self
            .client
            .generate_text(&self.config.gemini.text_model, parts)
            .await?;
        Ok(text)
    }

    /// Generate the three orthographic elevation sketches, all-or-nothing.
    pub async fn generate_elevation_sketches(
        &self,
        render_data_url: &str,
    ) -> StudioResult<ElevationSketchSet> {
        let render = InlineImage::from_data_url(render_data_url).map_err(GeminiError::from)?;
        info!("Generating elevation sketches");

        let calls = ElevationView::ALL.iter().map(|view| {
            let render = &render;
            async move {
                let parts = vec![
                    Part::image(render),
                    Part::text(instructions::elevation_sketch(*view)),
                ];
                let text = self
                    .client
                    .generate_text(&self.config.gemini.text_model, parts)
                    .await?;
                validate_svg(&text, view.display_name())
            }
        });

        let svgs = try_join_all(calls).await?;
        let [front, left, top]: [String; 3] = svgs
            .try_into()
            .unwrap_or_else(|_| unreachable!("three views requested"));
        Ok(ElevationSketchSet { front, left, top })
    }

    /// Generate the layered technical front elevation drawing. Returns SVG
    /// markup.
    pub async fn generate_technical_drawing(
        &self,
        render_data_url: &str,
    ) -> StudioResult<String> {
        let render = InlineImage::from_data_url(render_data_url).map_err(GeminiError::from)?;
        let parts = vec![
            Part::image(&render),
            Part::text(instructions::technical_drawing()),
        ];
        let text = self
            .client
            .generate_text(&self.config.gemini.text_model, parts)
            .await?;
        validate_svg(&text, "Front")
    }

    /// Generate the six standard views of a single object, all-or-nothing.
    /// The returned map holds a data URL per view.
    pub async fn generate_model_views(&self, object: &InlineImage) -> StudioResult<ModelViews> {
        info!("Generating {} model views", ViewAngle::ALL.len());

        let calls = ViewAngle::ALL.iter().map(|view| async move {
            let parts = vec![
                Part::image(object),
                Part::text(instructions::model_view(*view)),
            ];
            let image = self
                .client
                .generate_image(&self.config.gemini.image_model, parts)
                .await?;
            Ok::<_, StudioError>((*view, image.to_data_url()))
        });

        let entries = try_join_all(calls).await?;
        let mut views = ModelViews::new();
        for (view, url) in entries {
            views.insert(view, url);
        }
        Ok(views)
    }
}
