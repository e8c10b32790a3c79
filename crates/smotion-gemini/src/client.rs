//! Gemini REST client.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use reqwest::Client;
use tracing::{debug, info, warn};
use url::Url;

use smotion_models::{ImageError, InlineImage};

use crate::config::GeminiConfig;
use crate::error::{GeminiError, GeminiResult};
use crate::wire::{
    Content, GenerateContentRequest, GenerateContentResponse, GenerationConfig,
    OperationResponse, Part, PredictLongRunningRequest, VideoImage, VideoInstance,
    VideoParameters,
};

/// Handle to a long-running video generation operation.
#[derive(Debug, Clone)]
pub struct VideoOperation {
    pub name: String,
}

/// Gemini API client.
pub struct GeminiClient {
    config: GeminiConfig,
    client: Client,
}

impl GeminiClient {
    /// Create a new Gemini client.
    pub fn new(config: GeminiConfig) -> Self {
        Self {
            config,
            client: Client::new(),
        }
    }

    /// Create a client configured from environment variables.
    pub fn from_env() -> GeminiResult<Self> {
        Ok(Self::new(GeminiConfig::from_env()?))
    }

    pub fn config(&self) -> &GeminiConfig {
        &self.config
    }

    /// Call `generateContent` and return the concatenated text of the first
    /// candidate, trimmed.
    pub async fn generate_text(&self, model: &str, parts: Vec<Part>) -> GeminiResult<String> {
        let response = self
            .generate_content(model, parts, None)
            .await?;

        let text: String = response
            .candidates
            .first()
            .and_then(|c| c.content.as_ref())
            .map(|content| {
                content
                    .parts
                    .iter()
                    .filter_map(|p| p.text.as_deref())
                    .collect()
            })
            .unwrap_or_default();

        if text.trim().is_empty() {
            return Err(GeminiError::NoText);
        }
        Ok(text.trim().to_string())
    }

    /// Call `generateContent` with image response modalities and return the
    /// first inline image in the response.
    pub async fn generate_image(&self, model: &str, parts: Vec<Part>) -> GeminiResult<InlineImage> {
        let config = GenerationConfig {
            response_modalities: Some(vec!["IMAGE".to_string(), "TEXT".to_string()]),
        };
        let response = self.generate_content(model, parts, Some(config)).await?;

        let mut text_instead = String::new();
        for candidate in &response.candidates {
            let Some(content) = candidate.content.as_ref() else {
                continue;
            };
            for part in &content.parts {
                if let Some(inline) = &part.inline_data {
                    let data = BASE64.decode(&inline.data).map_err(ImageError::from)?;
                    return Ok(InlineImage::new(data, inline.mime_type.clone())?);
                }
                if let Some(text) = &part.text {
                    text_instead.push_str(text);
                }
            }
        }

        // Whatever text came back instead helps diagnose refusals.
        Err(GeminiError::NoImage(text_instead.trim().to_string()))
    }

    /// Start a long-running video generation from a prompt and a source image.
    pub async fn start_video(
        &self,
        model: &str,
        prompt: &str,
        image: &InlineImage,
    ) -> GeminiResult<VideoOperation> {
        let url = format!(
            "{}/models/{}:predictLongRunning?key={}",
            self.config.base_url, model, self.config.api_key
        );

        let request = PredictLongRunningRequest {
            instances: vec![VideoInstance {
                prompt: prompt.to_string(),
                image: VideoImage {
                    bytes_base64_encoded: image.to_base64(),
                    mime_type: image.mime_type.clone(),
                },
            }],
            parameters: VideoParameters { number_of_videos: 1 },
        };

        info!("Starting video generation with model {}", model);
        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Video start failed with status {}", status);
            return Err(GeminiError::from_api_response(status, body));
        }

        let operation: OperationResponse = response.json().await?;
        debug!("Video operation started: {}", operation.name);
        Ok(VideoOperation {
            name: operation.name,
        })
    }

    /// Fetch the current state of a video generation operation.
    pub async fn poll_video(&self, operation: &VideoOperation) -> GeminiResult<OperationResponse> {
        let url = format!(
            "{}/{}?key={}",
            self.config.base_url, operation.name, self.config.api_key
        );

        let response = self.client.get(&url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            return Err(GeminiError::from_api_response(status, body));
        }

        Ok(response.json().await?)
    }

    /// Download the generated video from the operation's download link.
    ///
    /// The link requires the API key as a query parameter. A failed download
    /// body is inspected for the quota marker so callers can tell "quota
    /// exhausted" apart from other failures.
    pub async fn download_video(&self, uri: &str) -> GeminiResult<Vec<u8>> {
        let mut url = Url::parse(uri)?;
        url.query_pairs_mut().append_pair("key", &self.config.api_key);

        debug!("Downloading generated video");
        let response = self.client.get(url).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            if body.contains("RESOURCE_EXHAUSTED") {
                return Err(GeminiError::QuotaExceeded(body));
            }
            return Err(GeminiError::DownloadFailed {
                status,
                message: body,
            });
        }

        Ok(response.bytes().await?.to_vec())
    }

    async fn generate_content(
        &self,
        model: &str,
        parts: Vec<Part>,
        generation_config: Option<GenerationConfig>,
    ) -> GeminiResult<GenerateContentResponse> {
        let url = format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url, model, self.config.api_key
        );

        let request = GenerateContentRequest {
            contents: vec![Content { parts }],
            generation_config,
        };

        debug!("Calling Gemini generateContent with model {}", model);
        let response = self.client.post(&url).json(&request).send().await?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            warn!("Gemini API returned status {}", status);
            return Err(GeminiError::from_api_response(status, body));
        }

        Ok(response.json().await?)
    }
}
