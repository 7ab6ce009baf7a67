//! Integration tests for `GeminiAdapter` using wiremock HTTP mocks.

use std::net::TcpListener;
use std::sync::Arc;
use vibe_check::adapters::ai::GeminiAdapter;
use vibe_check::domain::{DomainError, Locale, Profile, Recommendation, Vibe, VibeClassification};
use vibe_check::ports::{GenerateRequest, GenerativePort, Tool};
use vibe_check::usecases::{ProfileLookup, VibeAnalyzer};
use wiremock::matchers::{body_partial_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn adapter(server: &MockServer) -> GeminiAdapter {
    GeminiAdapter::new(format!("{}/v1beta", server.uri()), "test-key".into(), None)
        .expect("client construction should not fail")
}

fn text_reply(text: &str) -> serde_json::Value {
    serde_json::json!({
        "candidates": [
            { "content": { "role": "model", "parts": [{ "text": text }] } }
        ]
    })
}

fn profile() -> Profile {
    Profile {
        fid: 3,
        username: "spammer123".into(),
        display_name: "Botty".into(),
        pfp_url: "https://picsum.photos/seed/bot/100/100".into(),
        bio: Some("Follow for crypto gains!".into()),
        follower_count: Some(2),
        following_count: Some(5000),
    }
}

#[tokio::test]
async fn json_request_is_schema_constrained() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-flash-preview:generateContent"))
        .and(header("x-goog-api-key", "test-key"))
        .and(body_partial_json(serde_json::json!({
            "generationConfig": { "responseMimeType": "application/json" }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply(
            r#"{"vibe":"spam","reason":"x","recommendation":"unfollow"}"#,
        )))
        .expect(1)
        .mount(&server)
        .await;

    let analyzer = VibeAnalyzer::new(
        Arc::new(adapter(&server)),
        "gemini-3-flash-preview".into(),
        Locale::Turkish,
    );
    let result = analyzer.analyze(&profile()).await;

    assert_eq!(
        result,
        VibeClassification {
            vibe: Vibe::Spam,
            reason: "x".into(),
            recommendation: Recommendation::Unfollow,
        }
    );
}

#[tokio::test]
async fn server_error_gives_fallback_classification() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("internal"))
        .mount(&server)
        .await;

    let analyzer = VibeAnalyzer::new(
        Arc::new(adapter(&server)),
        "gemini-3-flash-preview".into(),
        Locale::English,
    );
    let result = analyzer.analyze(&profile()).await;

    assert_eq!(result.vibe, Vibe::Cool);
    assert_eq!(result.recommendation, Recommendation::Keep);
    assert_eq!(result.reason, "An error occurred during analysis.");
}

#[tokio::test]
async fn non_json_reply_gives_fallback_classification() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("I think they're cool")))
        .mount(&server)
        .await;

    let analyzer = VibeAnalyzer::new(
        Arc::new(adapter(&server)),
        "gemini-3-flash-preview".into(),
        Locale::Turkish,
    );
    let result = analyzer.analyze(&profile()).await;

    assert_eq!(result, VibeClassification::fallback(Locale::Turkish));
}

#[tokio::test]
async fn search_request_enables_google_search_and_returns_chunks() {
    let server = MockServer::start().await;

    let body = serde_json::json!({
        "candidates": [{
            "content": { "parts": [{ "text": "Dan Romero " }, { "text": "co-founded Farcaster." }] },
            "groundingMetadata": {
                "webSearchQueries": ["dwr.eth farcaster"],
                "groundingChunks": [
                    { "web": { "uri": "https://warpcast.com/dwr.eth", "title": "warpcast.com" } },
                    { "web": { "uri": "https://example.org/dwr", "title": "example.org" } }
                ]
            }
        }]
    });

    Mock::given(method("POST"))
        .and(path("/v1beta/models/gemini-3-pro-preview:generateContent"))
        .and(body_partial_json(serde_json::json!({
            "tools": [{ "googleSearch": {} }]
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(&body))
        .expect(1)
        .mount(&server)
        .await;

    let lookup = ProfileLookup::new(Arc::new(adapter(&server)), "gemini-3-pro-preview".into());
    let result = lookup.lookup("dwr.eth").await.expect("lookup should succeed");

    assert_eq!(result.text, "Dan Romero co-founded Farcaster.");
    assert_eq!(result.sources.len(), 2);
    assert_eq!(result.sources[0].uri(), Some("https://warpcast.com/dwr.eth"));
}

#[tokio::test]
async fn missing_grounding_metadata_is_empty_sources() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(text_reply("no citations")))
        .mount(&server)
        .await;

    let lookup = ProfileLookup::new(Arc::new(adapter(&server)), "gemini-3-pro-preview".into());
    let result = lookup.lookup("dwr.eth").await.expect("lookup should succeed");

    assert_eq!(result.text, "no citations");
    assert!(result.sources.is_empty());
}

#[tokio::test]
async fn lookup_propagates_auth_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(403).set_body_string("API key not valid"))
        .mount(&server)
        .await;

    let lookup = ProfileLookup::new(Arc::new(adapter(&server)), "gemini-3-pro-preview".into());
    let err = lookup.lookup("dwr.eth").await.unwrap_err();

    match err {
        DomainError::Ai(msg) => {
            assert!(msg.contains("403"), "{msg}");
            assert!(msg.contains("API key not valid"), "{msg}");
        }
        other => panic!("unexpected error: {other:?}"),
    }
}

#[tokio::test]
async fn empty_candidates_is_an_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({ "candidates": [] })))
        .mount(&server)
        .await;

    let err = adapter(&server)
        .generate(GenerateRequest::text("m", "hi").with_tool(Tool::GoogleSearch))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Ai(msg) if msg.contains("No candidates")));
}

#[tokio::test]
async fn unreachable_server_is_an_error() {
    // Reserve a free port, then release it so nothing is listening there.
    let listener = TcpListener::bind("127.0.0.1:0").expect("bind ephemeral port");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    let base = format!("http://{}/v1beta", addr);

    let adapter = GeminiAdapter::new(base, String::new(), None).expect("client");
    let err = adapter
        .generate(GenerateRequest::text("m", "hi"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Ai(msg) if msg.starts_with("HTTP request failed")));
}
