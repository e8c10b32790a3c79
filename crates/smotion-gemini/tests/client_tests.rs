//! Gemini client tests against a mock HTTP server.

use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use smotion_gemini::wire::Part;
use smotion_gemini::{GeminiClient, GeminiConfig, GeminiError};
use smotion_models::InlineImage;

fn test_client(server: &MockServer) -> GeminiClient {
    GeminiClient::new(GeminiConfig::new("test-key").with_base_url(server.uri()))
}

fn text_response(text: &str) -> serde_json::Value {
    json!({
        "candidates": [
            { "content": { "parts": [ { "text": text } ] } }
        ]
    })
}

#[tokio::test]
async fn test_generate_text_returns_trimmed_first_candidate() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("  a villa prompt \n")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let text = client
        .generate_text("gemini-2.5-flash", vec![Part::text("describe")])
        .await
        .unwrap();
    assert_eq!(text, "a villa prompt");
}

#[tokio::test]
async fn test_generate_text_empty_candidates_is_no_text() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .generate_text("gemini-2.5-flash", vec![Part::text("describe")])
        .await
        .unwrap_err();
    assert!(matches!(err, GeminiError::NoText));
}

#[tokio::test]
async fn test_quota_error_surfaces_as_quota_exceeded() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash:generateContent"))
        .respond_with(ResponseTemplate::new(429).set_body_json(json!({
            "error": { "code": 429, "status": "RESOURCE_EXHAUSTED", "message": "quota" }
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .generate_text("gemini-2.5-flash", vec![Part::text("describe")])
        .await
        .unwrap_err();
    assert!(err.is_quota_exceeded());
}

#[tokio::test]
async fn test_generate_image_extracts_inline_data() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash-image:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "candidates": [
                { "content": { "parts": [
                    { "text": "here is your render" },
                    { "inlineData": { "mimeType": "image/png", "data": "AQIDBA==" } }
                ] } }
            ]
        })))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let image = client
        .generate_image("gemini-2.5-flash-image", vec![Part::text("render")])
        .await
        .unwrap();
    assert_eq!(image.mime_type, "image/png");
    assert_eq!(image.data, vec![1, 2, 3, 4]);
}

#[tokio::test]
async fn test_generate_image_text_only_is_no_image() {
    let server = MockServer::start().await;
    Mock::given(method("POST"))
        .and(path("/models/gemini-2.5-flash-image:generateContent"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_response("no image today")))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let err = client
        .generate_image("gemini-2.5-flash-image", vec![Part::text("render")])
        .await
        .unwrap_err();
    assert!(matches!(err, GeminiError::NoImage(ref text) if text == "no image today"));
}

#[tokio::test]
async fn test_video_lifecycle_start_poll_download() {
    let server = MockServer::start().await;
    let image = InlineImage::new(vec![9, 9, 9], "image/png").unwrap();

    Mock::given(method("POST"))
        .and(path("/models/veo-2.0-generate-001:predictLongRunning"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "name": "models/veo-2.0-generate-001/operations/op-1"
        })))
        .mount(&server)
        .await;

    let download_uri = format!("{}/files/video-1:download", server.uri());
    Mock::given(method("GET"))
        .and(path("/models/veo-2.0-generate-001/operations/op-1"))
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
        .respond_with(ResponseTemplate::new(200).set_body_bytes(vec![0u8, 1, 2, 3]))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let operation = client
        .start_video("veo-2.0-generate-001", "orbit the villa", &image)
        .await
        .unwrap();
    assert_eq!(operation.name, "models/veo-2.0-generate-001/operations/op-1");

    let status = client.poll_video(&operation).await.unwrap();
    assert!(status.done);
    let uri = status.download_uri().unwrap().to_string();

    let bytes = client.download_video(&uri).await.unwrap();
    assert_eq!(bytes, vec![0, 1, 2, 3]);
}

#[tokio::test]
async fn test_download_quota_marker_in_body() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/video-2:download"))
        .respond_with(
            ResponseTemplate::new(403)
                .set_body_string(r#"{"error":{"status":"RESOURCE_EXHAUSTED"}}"#),
        )
        .mount(&server)
        .await;

    let client = test_client(&server);
    let uri = format!("{}/files/video-2:download", server.uri());
    let err = client.download_video(&uri).await.unwrap_err();
    assert!(err.is_quota_exceeded());
}

#[tokio::test]
async fn test_download_other_failure_is_not_quota() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/files/video-3:download"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let client = test_client(&server);
    let uri = format!("{}/files/video-3:download", server.uri());
    let err = client.download_video(&uri).await.unwrap_err();
    assert!(matches!(err, GeminiError::DownloadFailed { status: 500, .. }));
}
