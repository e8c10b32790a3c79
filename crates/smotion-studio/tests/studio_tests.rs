//! Orchestrator tests against a mock Gemini server.

use std::time::Duration;

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smotion_gemini::GeminiConfig;
use smotion_models::InlineImage;
use smotion_studio::{CancelSignal, Studio, StudioConfig, StudioError};

const TEXT_PATH: &str = "/models/gemini-2.5-flash:generateContent";
const IMAGE_PATH: &str = "/models/gemini-2.5-flash-image:generateContent";
const VIDEO_START_PATH: &str = "/models/veo-2.0-generate-001:predictLongRunning";
const OPERATION_PATH: &str = "/models/veo-2.0-generate-001/operations/op-1";

fn test_studio(server: &MockServer, output_dir: &std::path::Path) -> Studio {
    let config = StudioConfig::new(GeminiConfig::new("test-key").with_base_url(server.uri()))
        .with_poll_interval(Duration::from_millis(10))
        .with_output_dir(output_dir);
    Studio::new(config)
}

fn sketch() -> InlineImage {
    InlineImage::new(vec![1, 2, 3], "image/png").unwrap()
}

fn text_body(text: &str) -> serde_json::Value {
    json!({ "candidates": [ { "content": { "parts": [ { "text": text } ] } } ] })
}

fn image_body() -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [
                { "inlineData": { "mimeType": "image/png", "data": "AQID" } }
            ] } }
        ]
    })
}

#[tokio::test]
async fn test_refine_rejects_empty_inputs_without_network() {
    let server = MockServer::start().await;
    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());

    let err = studio
        .refine_prompt(&sketch(), None, "  ", "add a garden", smotion_models::Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::MissingInput(_)));

    let err = studio
        .refine_prompt(&sketch(), None, "a villa", "", smotion_models::Language::En)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::MissingInput(_)));
}

#[tokio::test]
async fn test_render_variants_all_succeed_in_order() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_body()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let urls = studio
        .generate_render_variants(
            &sketch(),
            None,
            "a modern villa",
            smotion_models::RenderStyle::Photorealistic,
            smotion_models::Language::En,
            3,
        )
        .await
        .unwrap();
    assert_eq!(urls.len(), 3);
    assert!(urls.iter().all(|u| u.starts_with("data:image/png;base64,")));
}

#[tokio::test]
async fn test_model_views_one_failure_aborts_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_body()))
        .up_to_n_times(5)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(500).set_body_string("boom"))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let err = studio.generate_model_views(&sketch()).await.unwrap_err();
    assert!(matches!(err, StudioError::Gemini(_)));
}

#[tokio::test]
async fn test_model_views_complete_map_on_success() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(IMAGE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(image_body()))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let views = studio.generate_model_views(&sketch()).await.unwrap();
    assert!(views.is_complete());
    assert_eq!(views.len(), 6);
}

#[tokio::test]
async fn test_elevation_sketch_invalid_svg_aborts_batch() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("<svg></svg>")))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("sorry, no SVG today")))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let sketch = sketch();
    let render_url = sketch.to_data_url();
    let err = studio
        .generate_elevation_sketches(&render_url)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::InvalidSvg { .. }));
}

#[tokio::test]
async fn test_elevation_sketches_return_all_three_views() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("<svg>ok</svg>")))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let render_url = sketch().to_data_url();
    let set = studio.generate_elevation_sketches(&render_url).await.unwrap();
    assert_eq!(set.front, "<svg>ok</svg>");
    assert_eq!(set.left, "<svg>ok</svg>");
    assert_eq!(set.top, "<svg>ok</svg>");
}

#[tokio::test]
async fn test_technical_drawing_envelope_enforced() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body("here you go")))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let render_url = sketch().to_data_url();
    let err = studio
        .generate_technical_drawing(&render_url)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::InvalidSvg { .. }));
}

#[tokio::test]
async fn test_video_pending_then_done_writes_file() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VIDEO_START_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1"
        })))
        .mount(&server)
        .await;

    Mock::given(method("GET"))
        .and(path(OPERATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1"
        })))
        .up_to_n_times(2)
        .mount(&server)
        .await;
    let download_uri = format!("{}/files/video-1:download", server.uri());
    Mock::given(method("GET"))
        .and(path(OPERATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [ { "video": { "uri": download_uri } } ]
                }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/video-1:download"))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![7u8; 32]))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let path = studio
        .generate_animation_video(&sketch(), "orbit the villa", &CancelSignal::new())
        .await
        .unwrap();
    assert_eq!(path.extension().unwrap(), "mp4");
    assert_eq!(std::fs::read(&path).unwrap(), vec![7u8; 32]);
}

#[tokio::test]
async fn test_video_operation_error_surfaces() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VIDEO_START_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1"
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path(OPERATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1",
            "done": true,
            "error": { "code": 13, "message": "generation failed" }
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let err = studio
        .generate_animation_video(&sketch(), "orbit the villa", &CancelSignal::new())
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        StudioError::Gemini(smotion_gemini::GeminiError::OperationFailed(_))
    ));
    assert!(!err.is_quota_exceeded());
}

#[tokio::test]
async fn test_video_download_quota_is_distinguishable() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VIDEO_START_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1"
        })))
        .mount(&server)
        .await;
    let download_uri = format!("{}/files/video-1:download", server.uri());
    Mock::given(method("GET"))
        .and(path(OPERATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1",
            "done": true,
            "response": {
                "generateVideoResponse": {
                    "generatedSamples": [ { "video": { "uri": download_uri } } ]
                }
            }
        })))
        .mount(&server)
        .await;
    Mock::given(method("GET"))
        .and(path("/files/video-1:download"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#),
        )
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let err = studio
        .generate_animation_video(&sketch(), "orbit the villa", &CancelSignal::new())
        .await
        .unwrap_err();
    assert!(err.is_quota_exceeded());
}

#[tokio::test]
async fn test_video_cancellation_yields_cancelled() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path(VIDEO_START_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1"
        })))
        .mount(&server)
        .await;
    // Operation never completes.
    Mock::given(method("GET"))
        .and(path(OPERATION_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1"
        })))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let cancel = CancelSignal::new();
    let canceller = cancel.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(30)).await;
        canceller.cancel();
    });

    let err = studio
        .generate_animation_video(&sketch(), "orbit the villa", &cancel)
        .await
        .unwrap_err();
    assert!(matches!(err, StudioError::Cancelled));
}

#[tokio::test]
async fn test_report_passes_both_images_and_returns_markdown() {
    let server = MockServer::start().await;
    let report = "### تصنيف الخامات (Material Specifications)\n| السطح | المادة المقترحة |";
    Mock::given(method("POST"))
        .and(path(TEXT_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_body(report)))
        .mount(&server)
        .await;

    let dir = tempfile::tempdir().unwrap();
    let studio = test_studio(&server, dir.path());
    let render_url = sketch().to_data_url();
    let text = studio
        .generate_architectural_report(&sketch(), &render_url)
        .await
        .unwrap();
    assert!(text.contains("تصنيف الخامات"));
}
