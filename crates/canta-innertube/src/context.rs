//! `InnerTube` request envelopes and integration constants.
//!
//! Every literal in this module is something the upstream expects
//! byte-for-byte: client version strings, the songs-only search filter
//! token, the scoping cookie, the field mask, the reel URL token and the
//! cpn. They are not design choices; update them here when the provider
//! rotates them.

use reqwest::header::{HeaderMap, HeaderValue, ACCEPT_ENCODING, COOKIE, USER_AGENT};
use serde::Serialize;

/// Base URL for the search endpoint (desktop web music frontend).
pub const SEARCH_BASE_URL: &str = "https://music.youtube.com/youtubei/v1";

/// Base URL for the reel (short-form watch) endpoint.
pub const REEL_BASE_URL: &str = "https://youtubei.googleapis.com/youtubei/v1";

/// Search filter token restricting results to songs.
pub const SEARCH_PARAMS_SONGS: &str = "EgWKAQIIAWoKEAkQBRAKEAMQBA==";

/// Opaque token carried in the reel endpoint URL.
pub const REEL_URL_TOKEN: &str = "riUEGqBDXp3h";

/// Content-playback nonce sent with every reel request.
const REEL_CPN: &str = "gENa2eUbKdpoJYOF";

const SEARCH_USER_AGENT: &str = "ktor-client";

/// Field mask limiting the search payload to the responsive-list-item
/// renderers the parser actually reads.
const SEARCH_FIELD_MASK: &str = "contents.tabbedSearchResultsRenderer.tabs.tabRenderer.content.sectionListRenderer.contents.musicShelfRenderer(continuations,contents.musicResponsiveListItemRenderer(flexColumns,fixedColumns,thumbnail,navigationEndpoint,badges))";

const SEARCH_COOKIE: &str = "YSC=oMSBplkrasY; VISITOR_INFO1_LIVE=tLUM1eu1vqI; VISITOR_PRIVACY_METADATA=CgJCRBIEGgAgDg%3D%3D; __Secure-ROLLOUT_TOKEN=CLDu7bqCs72JfBDf7_f4leWOAxjf7_f4leWOAw%3D%3D";

const WEB_CLIENT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/134.0.0.0 Safari/537.3";

const REEL_USER_AGENT: &str = "com.google.android.youtube/19.28.35 (Linux; U; Android 15; GB) gzip";

/// Headers sent with the search request.
pub fn search_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(SEARCH_USER_AGENT));
    headers.insert(
        "x-goog-fieldmask",
        HeaderValue::from_static(SEARCH_FIELD_MASK),
    );
    headers.insert("accept-charset", HeaderValue::from_static("UTF-8"));
    headers.insert(COOKIE, HeaderValue::from_static(SEARCH_COOKIE));
    headers
}

/// Headers sent with the reel request.
pub fn reel_headers() -> HeaderMap {
    let mut headers = HeaderMap::new();
    headers.insert(USER_AGENT, HeaderValue::from_static(REEL_USER_AGENT));
    headers.insert(ACCEPT_ENCODING, HeaderValue::from_static("gzip"));
    headers.insert("x-goog-api-format-version", HeaderValue::from_static("2"));
    headers.insert(
        "accept-language",
        HeaderValue::from_static("en-GB, en;q=0.9"),
    );
    headers
}

/// Body of a search request: desktop web music client context plus the
/// query and the songs filter token.
#[derive(Debug, Clone, Serialize)]
pub struct SearchEnvelope {
    pub context: WebContext,
    pub query: String,
    pub params: &'static str,
}

impl SearchEnvelope {
    /// Envelope for a songs-only search.
    pub fn songs(query: &str) -> Self {
        Self {
            context: WebContext::desktop(),
            query: query.to_string(),
            params: SEARCH_PARAMS_SONGS,
        }
    }
}

/// Context block identifying the desktop web music client.
#[derive(Debug, Clone, Serialize)]
pub struct WebContext {
    pub client: WebClient,
    pub request: RequestFlags,
    pub user: UserFlags,
}

impl WebContext {
    fn desktop() -> Self {
        Self {
            client: WebClient::desktop(),
            request: RequestFlags::default(),
            user: UserFlags::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WebClient {
    pub client_name: &'static str,
    pub client_version: &'static str,
    pub platform: &'static str,
    pub hl: &'static str,
    pub gl: &'static str,
    pub visitor_data: &'static str,
    pub user_agent: &'static str,
    pub referer: &'static str,
    pub x_client_name: u32,
}

impl WebClient {
    const fn desktop() -> Self {
        Self {
            client_name: "WEB_REMIX",
            client_version: "1.20250407.01.00",
            platform: "DESKTOP",
            hl: "en",
            gl: "US",
            visitor_data: "null",
            user_agent: WEB_CLIENT_USER_AGENT,
            referer: "https://music.youtube.com/",
            x_client_name: 67,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RequestFlags {
    pub internal_experiment_flags: Vec<String>,
    pub use_ssl: bool,
}

impl Default for RequestFlags {
    fn default() -> Self {
        Self {
            internal_experiment_flags: Vec::new(),
            use_ssl: true,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UserFlags {
    pub locked_safety_mode: bool,
}

/// Body of a reel request: Android mobile client context plus the player
/// request addressing one video.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ReelEnvelope {
    pub context: AndroidContext,
    pub player_request: PlayerRequest,
    pub disable_player_response: bool,
}

impl ReelEnvelope {
    /// Envelope resolving playback info for one video.
    pub fn for_video(video_id: &str) -> Self {
        Self {
            context: AndroidContext::mobile(),
            player_request: PlayerRequest::new(video_id),
            disable_player_response: false,
        }
    }
}

/// Context block identifying the Android mobile client.
#[derive(Debug, Clone, Serialize)]
pub struct AndroidContext {
    pub request: RequestFlags,
    pub client: AndroidClient,
    pub user: UserFlags,
}

impl AndroidContext {
    fn mobile() -> Self {
        Self {
            request: RequestFlags::default(),
            client: AndroidClient::mobile(),
            user: UserFlags::default(),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AndroidClient {
    pub android_sdk_version: u32,
    pub utc_offset_minutes: i32,
    pub os_version: &'static str,
    pub hl: &'static str,
    pub client_name: &'static str,
    pub gl: &'static str,
    pub client_screen: &'static str,
    pub client_version: &'static str,
    pub os_name: &'static str,
    pub platform: &'static str,
    pub visitor_data: &'static str,
}

impl AndroidClient {
    const fn mobile() -> Self {
        Self {
            android_sdk_version: 35,
            utc_offset_minutes: 0,
            os_version: "15",
            hl: "en-GB",
            client_name: "ANDROID",
            gl: "GB",
            client_screen: "WATCH",
            client_version: "19.28.35",
            os_name: "Android",
            platform: "MOBILE",
            visitor_data: "null",
        }
    }
}

/// Player request addressing one video, with both content gates waved
/// through.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerRequest {
    pub cpn: &'static str,
    pub content_check_ok: bool,
    pub racy_check_ok: bool,
    pub video_id: String,
}

impl PlayerRequest {
    fn new(video_id: &str) -> Self {
        Self {
            cpn: REEL_CPN,
            content_check_ok: true,
            racy_check_ok: true,
            video_id: video_id.to_string(),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_search_envelope_serialization() {
        let envelope = SearchEnvelope::songs("lofi");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["query"], "lofi");
        assert_eq!(json["params"], SEARCH_PARAMS_SONGS);
        assert_eq!(json["context"]["client"]["clientName"], "WEB_REMIX");
        assert_eq!(json["context"]["client"]["clientVersion"], "1.20250407.01.00");
        assert_eq!(json["context"]["client"]["xClientName"], 67);
        assert_eq!(json["context"]["client"]["visitorData"], "null");
        assert_eq!(json["context"]["request"]["useSsl"], true);
        assert_eq!(json["context"]["user"]["lockedSafetyMode"], false);
    }

    #[test]
    fn test_reel_envelope_serialization() {
        let envelope = ReelEnvelope::for_video("dQw4w9WgXcQ");
        let json = serde_json::to_value(&envelope).unwrap();

        assert_eq!(json["context"]["client"]["clientName"], "ANDROID");
        assert_eq!(json["context"]["client"]["androidSdkVersion"], 35);
        assert_eq!(json["context"]["client"]["clientScreen"], "WATCH");
        assert_eq!(json["playerRequest"]["videoId"], "dQw4w9WgXcQ");
        assert_eq!(json["playerRequest"]["contentCheckOk"], true);
        assert_eq!(json["playerRequest"]["racyCheckOk"], true);
        assert_eq!(json["playerRequest"]["cpn"], REEL_CPN);
        assert_eq!(json["disablePlayerResponse"], false);
    }

    #[test]
    fn test_search_headers_include_field_mask_and_cookie() {
        let headers = search_headers();
        assert_eq!(headers.get(USER_AGENT).unwrap(), "ktor-client");
        assert!(headers.contains_key("x-goog-fieldmask"));
        assert!(headers.contains_key(COOKIE));
    }
}
