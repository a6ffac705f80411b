//! Integration tests for the `InnerTube` client against a mocked upstream.

#![allow(clippy::unwrap_used)]

use serde_json::json;
use wiremock::matchers::{body_partial_json, header, method, path, query_param};
use wiremock::{Mock, MockServer, ResponseTemplate};

use canta_innertube::InnerTubeClient;

fn client_for(server: &MockServer) -> InnerTubeClient {
    InnerTubeClient::with_base_urls(&server.uri(), &server.uri()).unwrap()
}

fn search_body(items: serde_json::Value) -> serde_json::Value {
    json!({
        "contents": {
            "tabbedSearchResultsRenderer": {
                "tabs": [{
                    "tabRenderer": {
                        "content": {
                            "sectionListRenderer": {
                                "contents": [{ "musicShelfRenderer": { "contents": items } }]
                            }
                        }
                    }
                }]
            }
        }
    })
}

fn song_item(video_id: &str, title: &str) -> serde_json::Value {
    json!({
        "musicResponsiveListItemRenderer": {
            "flexColumns": [{
                "musicResponsiveListItemFlexColumnRenderer": {
                    "text": {
                        "runs": [{
                            "text": title,
                            "navigationEndpoint": { "watchEndpoint": { "videoId": video_id } }
                        }]
                    }
                }
            }],
            "thumbnail": {
                "musicThumbnailRenderer": {
                    "thumbnail": {
                        "thumbnails": [
                            { "url": "https://img/small.jpg" },
                            { "url": "https://img/large.jpg" }
                        ]
                    }
                }
            }
        }
    })
}

#[tokio::test]
async fn search_sends_fixed_envelope_and_parses_hits() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .and(query_param("prettyPrint", "false"))
        .and(header("user-agent", "ktor-client"))
        .and(header("accept-charset", "UTF-8"))
        .and(body_partial_json(json!({
            "query": "lofi",
            "params": "EgWKAQIIAWoKEAkQBRAKEAMQBA==",
            "context": { "client": { "clientName": "WEB_REMIX" } }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(search_body(json!([
            song_item("vid1", "First Song"),
            song_item("vid2", "Second Song")
        ]))))
        .expect(1)
        .mount(&server)
        .await;

    let hits = client_for(&server).search("lofi").await.unwrap();

    assert_eq!(hits.len(), 2);
    assert_eq!(hits[0].video_id, "vid1");
    assert_eq!(hits[0].title, "First Song");
    assert_eq!(hits[0].thumbnail.as_deref(), Some("https://img/large.jpg"));
    assert_eq!(hits[1].video_id, "vid2");
}

#[tokio::test]
async fn search_error_status_is_an_upstream_error() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(503).set_body_string("down"))
        .mount(&server)
        .await;

    let err = client_for(&server).search("lofi").await.unwrap_err();
    assert!(err.is_upstream());
    assert!(err.to_string().contains("503"), "unexpected error: {err}");
}

#[tokio::test]
async fn search_undecodable_body_is_empty() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/search"))
        .respond_with(ResponseTemplate::new(200).set_body_string("not json"))
        .mount(&server)
        .await;

    let hits = client_for(&server).search("lofi").await.unwrap();
    assert!(hits.is_empty());
}

#[tokio::test]
async fn resolve_sends_android_envelope_and_picks_preferred_format() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reel/reel_item_watch"))
        .and(query_param("prettyPrint", "false"))
        .and(query_param("id", "vid1"))
        .and(query_param("$fields", "playerResponse"))
        .and(header("x-goog-api-format-version", "2"))
        .and(body_partial_json(json!({
            "context": { "client": { "clientName": "ANDROID" } },
            "playerRequest": {
                "videoId": "vid1",
                "contentCheckOk": true,
                "racyCheckOk": true
            }
        })))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "playerResponse": {
                "streamingData": {
                    "adaptiveFormats": [
                        { "mimeType": "audio/webm; codecs=\"opus\"", "url": "https://webm" },
                        { "mimeType": "audio/mp4; codecs=\"mp4a.40.5\"", "url": "https://mp4a" }
                    ]
                }
            }
        })))
        .expect(1)
        .mount(&server)
        .await;

    let audio_url = client_for(&server).resolve_audio("vid1").await;
    assert_eq!(audio_url.as_deref(), Some("https://mp4a"));
}

#[tokio::test]
async fn resolve_error_status_degrades_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reel/reel_item_watch"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    assert!(client_for(&server).resolve_audio("vid1").await.is_none());
}

#[tokio::test]
async fn resolve_undecodable_body_degrades_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reel/reel_item_watch"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>"))
        .mount(&server)
        .await;

    assert!(client_for(&server).resolve_audio("vid1").await.is_none());
}

#[tokio::test]
async fn resolve_without_streaming_data_degrades_to_none() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/reel/reel_item_watch"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "playerResponse": {}
        })))
        .mount(&server)
        .await;

    assert!(client_for(&server).resolve_audio("vid1").await.is_none());
}
